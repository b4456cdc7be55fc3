use colored::{ColoredString, Colorize};
use comfy_table::{ContentArrangement, Table};

use haru_lotto::{BallColor, Selection, draw_batch};

pub fn run(
    include: &[u32],
    exclude: &[u32],
    games: usize,
    seed: Option<u64>,
    stats: bool,
    json: bool,
) -> Result<(), String> {
    if games == 0 {
        return Err("at least one game must be drawn".into());
    }

    let mut selection = Selection::new();
    for &n in include {
        selection.include(n).map_err(|e| e.to_string())?;
    }
    for &n in exclude {
        selection.exclude(n).map_err(|e| e.to_string())?;
    }

    let mut rng = super::make_rng(seed);
    let batch = draw_batch(&selection, games, &mut rng).map_err(|e| e.to_string())?;

    if json {
        let rendered = serde_json::to_string_pretty(&batch).map_err(|e| e.to_string())?;
        println!("{rendered}");
        return Ok(());
    }

    for (i, game) in batch.games.iter().enumerate() {
        let balls: Vec<String> = game
            .numbers()
            .iter()
            .map(|&n| paint(n).to_string())
            .collect();
        println!("  {} {}", format!("game {}", i + 1).bold(), balls.join("  "));
    }

    if stats {
        println!();
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Number", "Count"]);
        for (number, count) in batch.frequency_top10() {
            table.add_row(vec![number.to_string(), count.to_string()]);
        }
        println!("{table}");
        println!();
        println!(
            "  {} games, {} distinct numbers",
            batch.len(),
            batch.distinct_numbers()
        );
    }

    Ok(())
}

fn paint(number: u32) -> ColoredString {
    let text = format!("{number:2}");
    match BallColor::for_number(number) {
        BallColor::Yellow => text.yellow(),
        BallColor::Blue => text.blue(),
        BallColor::Red => text.red(),
        BallColor::Gray => text.bright_black(),
        BallColor::Green => text.green(),
    }
}
