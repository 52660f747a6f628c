use crate::matching::{compare, matched_numbers};
use crate::prize::{classify, PrizeTier};
use crate::sampler::NumberSampler;
use crate::{CheckError, Result};
use lotto_core::{
    GameCatalog, GameDefinition, HistoryPort, LottoError, LottoNumber, ScanRecord, WinningDraw,
};
use std::fmt;

/// What the capture collaborator (camera or gallery) reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOutcome {
    Captured,
    Canceled,
    PermissionDenied,
}

impl fmt::Display for CaptureOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureOutcome::Captured => write!(f, "captured"),
            CaptureOutcome::Canceled => write!(f, "capture canceled"),
            CaptureOutcome::PermissionDenied => write!(f, "permission denied"),
        }
    }
}

/// A completed ticket check.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub record: ScanRecord,
    pub tier: PrizeTier,
    pub matched: Vec<LottoNumber>,
    /// Set when the record could not be saved to history. The outcome is
    /// still valid for the current session.
    pub persist_warning: Option<String>,
}

impl ScanOutcome {
    pub fn is_persisted(&self) -> bool {
        self.persist_warning.is_none()
    }
}

/// Runs sample → compare → classify → append for one ticket.
///
/// Callers must not run two checks against the same history at once from
/// different processes; within a process the history store serializes
/// appends itself.
pub struct TicketChecker<'a> {
    catalog: &'a GameCatalog,
    history: &'a dyn HistoryPort,
}

impl<'a> TicketChecker<'a> {
    pub fn new(catalog: &'a GameCatalog, history: &'a dyn HistoryPort) -> Self {
        Self { catalog, history }
    }

    /// Check a ticket for `game_id`, reading its numbers from `sampler` once
    /// the capture collaborator reports success.
    pub async fn check<S>(
        &self,
        game_id: &str,
        capture: CaptureOutcome,
        sampler: &mut S,
    ) -> Result<ScanOutcome>
    where
        S: NumberSampler + ?Sized,
    {
        if capture != CaptureOutcome::Captured {
            tracing::info!("Scan for game {} aborted: {}", game_id, capture);
            return Err(CheckError::CaptureAborted(capture));
        }

        let game = self.catalog.game(game_id)?;
        let draw = self
            .catalog
            .draw_for(game_id)
            .ok_or_else(|| LottoError::NoWinningDraw {
                game_id: game_id.to_string(),
            })?;

        let scanned = sampler.sample(game)?;
        let mut outcome = evaluate(game, draw, scanned)?;

        tracing::info!(
            "Game {}: {} matches, {}",
            game.id,
            outcome.record.match_count,
            outcome.record.prize
        );

        if let Err(e) = self.history.append(outcome.record.clone()).await {
            tracing::warn!("Scan {} was not saved to history: {}", outcome.record.id, e);
            outcome.persist_warning = Some(format!("Scan result was not saved: {}", e));
        }

        Ok(outcome)
    }
}

/// Compare scanned numbers with a draw and build the resulting record.
/// Pure apart from stamping the record id and date.
pub fn evaluate(
    game: &GameDefinition,
    draw: &WinningDraw,
    scanned: Vec<LottoNumber>,
) -> Result<ScanOutcome> {
    if scanned.len() != game.number_count || !scanned.windows(2).all(|w| w[0] < w[1]) {
        return Err(CheckError::invalid_ticket(format!(
            "expected {} ascending distinct numbers for game {}, got {:?}",
            game.number_count, game.id, scanned
        )));
    }

    let match_count = compare(&scanned, &draw.numbers);
    let matched = matched_numbers(&scanned, &draw.numbers);
    let prize = classify(match_count);

    let record = ScanRecord::new(
        game.id.clone(),
        scanned,
        draw.numbers.clone(),
        match_count,
        prize.prize,
        prize.is_winner,
    );

    Ok(ScanOutcome {
        record,
        tier: prize.tier,
        matched,
        persist_warning: None,
    })
}
