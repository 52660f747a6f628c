pub mod games;
pub mod history;
pub mod scan;

pub use games::{show_games, show_prizes};
pub use history::{handle_history_command, HistoryCommands};
pub use scan::{handle_scan, ScanArgs};

use lotto_core::LottoNumber;

/// Two-digit balls, matched ones wrapped in brackets.
pub fn format_balls(numbers: &[LottoNumber], matched: &[LottoNumber]) -> String {
    numbers
        .iter()
        .map(|n| {
            if matched.contains(n) {
                format!("[{:02}]", n)
            } else {
                format!(" {:02} ", n)
            }
        })
        .collect::<Vec<_>>()
        .join("")
        .trim_end()
        .to_string()
}
