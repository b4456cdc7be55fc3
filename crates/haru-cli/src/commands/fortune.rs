use chrono::NaiveDate;
use colored::Colorize;

use haru_fortune::{BirthProfile, CategoryReading, Gender, compute_fortune};

pub fn run(
    year: i32,
    month: u32,
    day: u32,
    gender: &str,
    date: Option<&str>,
    json: bool,
) -> Result<(), String> {
    let gender = Gender::parse(gender).map_err(|e| e.to_string())?;
    let profile = BirthProfile::new(year, month, day, gender).map_err(|e| e.to_string())?;

    let today = match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| format!("invalid date '{s}', expected YYYY-MM-DD"))?,
        None => chrono::Local::now().date_naive(),
    };

    let report = compute_fortune(&profile, today);

    if json {
        let rendered = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{rendered}");
        return Ok(());
    }

    println!(
        "  {} {} ({})",
        "Fortune for".bold(),
        report.date,
        profile.gender()
    );
    println!();
    println!(
        "  {}  {} ({}/100)",
        "Overall".bold(),
        report.overall.rating,
        report.score
    );
    println!("  {}", report.overall.text);
    println!(
        "  {}",
        report
            .overall
            .keywords
            .iter()
            .map(|k| format!("#{k}"))
            .collect::<Vec<_>>()
            .join(" ")
            .cyan()
    );
    println!();

    print_category("Love", &report.love);
    print_category("Money", &report.money);
    print_category("Health", &report.health);
    print_category("Career", &report.career);

    println!("  {}", "Lucky items".bold());
    println!(
        "  color: {} | number: {} | direction: {} | time: {}",
        report.lucky.color.name,
        report.lucky.number,
        report.lucky.direction,
        report.lucky.time
    );

    Ok(())
}

fn print_category(label: &str, reading: &CategoryReading) {
    println!("  {}  {}", label.bold(), reading.rating);
    println!("  {}", reading.text);
    println!("  {} {}", "tip:".yellow(), reading.tip);
    println!();
}
