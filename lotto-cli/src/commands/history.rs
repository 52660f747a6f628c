use clap::Subcommand;
use comfy_table::{presets::UTF8_FULL, Table};
use dialoguer::Confirm;
use lotto_core::{GameCatalog, HistoryPort};

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// List recorded scans, newest first
    List,
    /// Show winner counts
    Stats,
    /// Remove all recorded scans
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn handle_history_command(
    cmd: HistoryCommands,
    catalog: &GameCatalog,
    history: &dyn HistoryPort,
) -> anyhow::Result<()> {
    match cmd {
        HistoryCommands::List => {
            let scans = history.load().await;
            if scans.is_empty() {
                println!("No scans yet");
                println!("Use 'lotto scan <game>' to check a ticket");
                return Ok(());
            }

            let summary = scans.summary();
            println!(
                "{} scans recorded ({} winners, {} no prize)",
                summary.total, summary.winners, summary.non_winners
            );

            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(vec!["Date", "Game", "Numbers", "Matches", "Prize"]);

            for scan in scans.iter() {
                let game_name = catalog
                    .game(&scan.game_id)
                    .map(|g| g.name.clone())
                    .unwrap_or_else(|_| scan.game_id.clone());

                table.add_row(vec![
                    scan.date
                        .with_timezone(&chrono::Local)
                        .format("%Y-%m-%d %H:%M")
                        .to_string(),
                    game_name,
                    scan.scanned_numbers
                        .iter()
                        .map(|n| n.to_string())
                        .collect::<Vec<_>>()
                        .join(", "),
                    scan.match_count.to_string(),
                    scan.prize.clone(),
                ]);
            }

            println!("{}", table);
        }

        HistoryCommands::Stats => {
            let summary = history.summary().await;
            println!("Total scans: {}", summary.total);
            println!("Winners:     {}", summary.winners);
            println!("No prize:    {}", summary.non_winners);
        }

        HistoryCommands::Clear { yes } => {
            // An unreadable slot loads as empty but still has to be removed.
            let confirmed = yes
                || Confirm::new()
                    .with_prompt("Are you sure you want to clear all scan history?")
                    .default(false)
                    .interact()?;

            if confirmed {
                history.clear().await?;
                println!("Scan history cleared");
            } else {
                println!("Cancelled");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lotto_core::storage::HISTORY_SLOT;
    use lotto_core::{HistoryStore, MemorySlots};

    #[tokio::test]
    async fn test_clear_removes_unreadable_history() {
        let catalog = GameCatalog::default();
        let store = HistoryStore::new(MemorySlots::with_value(HISTORY_SLOT, "{not json"));
        assert!(store.load().await.is_empty());

        handle_history_command(HistoryCommands::Clear { yes: true }, &catalog, &store)
            .await
            .unwrap();

        assert!(store.slots().is_empty());
    }
}
