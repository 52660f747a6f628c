use super::format_balls;
use comfy_table::{presets::UTF8_FULL, Table};
use lotto_checker::PrizeTier;
use lotto_core::GameCatalog;

pub fn show_games(catalog: &GameCatalog) -> anyhow::Result<()> {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Game", "Name", "Numbers", "Draw date", "Winning numbers", "Jackpot"]);

    for game in &catalog.games {
        let (date, numbers, jackpot) = match catalog.draw_for(&game.id) {
            Some(draw) => (
                draw.date.clone(),
                format_balls(&draw.numbers, &[]),
                draw.jackpot.clone(),
            ),
            None => ("-".to_string(), "no draw yet".to_string(), "-".to_string()),
        };

        table.add_row(vec![
            game.id.clone(),
            game.name.clone(),
            format!("{} of 1-{}", game.number_count, game.range),
            date,
            numbers,
            jackpot,
        ]);
    }

    println!("{}", table);
    Ok(())
}

pub fn show_prizes() -> anyhow::Result<()> {
    println!("Prize Breakdown:");

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Numbers matched", "Prize"]);
    for (matches, amount) in PrizeTier::breakdown() {
        table.add_row(vec![format!("{} Numbers Match", matches), amount.to_string()]);
    }

    println!("{}", table);
    Ok(())
}
