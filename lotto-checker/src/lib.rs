//! Lotto ticket checking
//!
//! Reads (or mocks) the numbers on a ticket, counts how many match the
//! game's winning draw, classifies the prize and records the outcome in
//! scan history.

pub mod checker;
pub mod error;
pub mod matching;
pub mod prize;
pub mod sampler;

pub use checker::{evaluate, CaptureOutcome, ScanOutcome, TicketChecker};
pub use error::{CheckError, Result};
pub use matching::{compare, matched_numbers};
pub use prize::{classify, Prize, PrizeTier};
pub use sampler::{NumberSampler, RandomSampler, RandomSource, RecognizedNumbers, RngSource};

use lotto_core::{GameCatalog, HistoryPort};

/// Check a mock-recognized ticket for `game_id` using fresh entropy.
pub async fn check_random_ticket(
    catalog: &GameCatalog,
    history: &dyn HistoryPort,
    game_id: &str,
    capture: CaptureOutcome,
) -> Result<ScanOutcome> {
    let mut sampler = RandomSampler::from_entropy();
    TicketChecker::new(catalog, history)
        .check(game_id, capture, &mut sampler)
        .await
}
