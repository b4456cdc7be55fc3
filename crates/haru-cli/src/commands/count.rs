use std::io::Read;
use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use haru_text::{CountOptions, analyze, duplicate_words};

pub fn run(
    file: Option<&Path>,
    no_spaces: bool,
    no_line_breaks: bool,
    json: bool,
) -> Result<(), String> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| e.to_string())?;
            buf
        }
    };

    let options = CountOptions {
        include_spaces: !no_spaces,
        include_line_breaks: !no_line_breaks,
    };
    let stats = analyze(&text, options);
    let dupes = duplicate_words(&text);

    if json {
        let rendered = serde_json::json!({
            "stats": stats,
            "duplicates": dupes,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&rendered).map_err(|e| e.to_string())?
        );
        return Ok(());
    }

    println!("  {} {}", "characters:".bold(), stats.total_chars);
    println!("  {} {}", "no spaces: ".bold(), stats.chars_no_spaces);
    println!("  {} {}", "words:     ".bold(), stats.words);
    println!("  {} {}", "lines:     ".bold(), stats.lines);

    println!();
    if dupes.is_empty() {
        println!("  No duplicate words.");
    } else {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Word", "Count"]);
        for (word, count) in &dupes {
            table.add_row(vec![word.clone(), count.to_string()]);
        }
        println!("{table}");
    }

    Ok(())
}
