use super::format_balls;
use clap::Args;
use lotto_checker::{
    check_random_ticket, CaptureOutcome, RandomSampler, RecognizedNumbers, ScanOutcome,
    TicketChecker,
};
use lotto_core::{GameCatalog, HistoryPort, LottoNumber};

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Game ID (e.g. 6-42)
    pub game: String,

    /// Numbers read from the ticket, comma separated. Mocked when omitted.
    #[arg(short, long, value_delimiter = ',')]
    pub numbers: Option<Vec<LottoNumber>>,

    /// Seed for the mock recognizer
    #[arg(short, long, conflicts_with = "numbers")]
    pub seed: Option<u64>,

    /// Simulate the user canceling the capture
    #[arg(long)]
    pub cancel: bool,

    /// Simulate a denied camera permission
    #[arg(long, conflicts_with = "cancel")]
    pub deny: bool,
}

impl ScanArgs {
    fn capture(&self) -> CaptureOutcome {
        if self.cancel {
            CaptureOutcome::Canceled
        } else if self.deny {
            CaptureOutcome::PermissionDenied
        } else {
            CaptureOutcome::Captured
        }
    }
}

pub async fn handle_scan(
    args: ScanArgs,
    catalog: &GameCatalog,
    history: &dyn HistoryPort,
) -> anyhow::Result<()> {
    let capture = args.capture();

    let outcome = match (&args.numbers, args.seed) {
        (Some(numbers), _) => {
            let mut ticket = RecognizedNumbers::new(numbers.clone());
            TicketChecker::new(catalog, history)
                .check(&args.game, capture, &mut ticket)
                .await?
        }
        (None, Some(seed)) => {
            let mut sampler = RandomSampler::seeded(seed);
            TicketChecker::new(catalog, history)
                .check(&args.game, capture, &mut sampler)
                .await?
        }
        (None, None) => check_random_ticket(catalog, history, &args.game, capture).await?,
    };

    print_outcome(catalog, &outcome);
    Ok(())
}

fn print_outcome(catalog: &GameCatalog, outcome: &ScanOutcome) {
    let record = &outcome.record;
    let game_name = catalog
        .game(&record.game_id)
        .map(|g| g.name.clone())
        .unwrap_or_else(|_| record.game_id.clone());

    println!("Lotto {} result", game_name);
    println!();
    println!(
        "  Your numbers:    {}",
        format_balls(&record.scanned_numbers, &outcome.matched)
    );
    println!(
        "  Winning numbers: {}",
        format_balls(&record.winning_numbers, &[])
    );
    println!();
    println!(
        "You matched {} out of {} numbers",
        record.match_count,
        record.winning_numbers.len()
    );
    println!("Prize: {}", record.prize);

    if record.is_winner {
        println!("Claim your prize at any authorized PCSO outlet");
    }

    if let Some(warning) = &outcome.persist_warning {
        eprintln!();
        eprintln!("Warning: {}", warning);
    }
}
