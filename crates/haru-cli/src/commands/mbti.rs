use std::io::{self, BufRead, Write};

use colored::Colorize;

use haru_mbti::{Choice, MbtiType, QUESTIONS, Tally, assess, profile_for};

/// Interactive 12-question test on stdin.
pub fn run_test() -> Result<(), String> {
    println!("  {} MBTI Test", "Starting".bold());
    println!("  Answer 1 or 2 for each question; 'q' aborts.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();
    let mut tally = Tally::new();

    for (i, question) in QUESTIONS.iter().enumerate() {
        println!(
            "  {} {}",
            format!("[{}/{}]", i + 1, QUESTIONS.len()).bold(),
            question.prompt
        );
        println!("    1) {}", question.first.text);
        println!("    2) {}", question.second.text);

        let choice = loop {
            print!("> ");
            io::stdout().flush().map_err(|e| e.to_string())?;

            line.clear();
            match reader.read_line(&mut line) {
                Ok(0) => return Err("test aborted at end of input".into()),
                Err(e) => return Err(e.to_string()),
                _ => {}
            }

            match line.trim() {
                "1" => break Choice::First,
                "2" => break Choice::Second,
                "q" | "quit" => return Err("test aborted".into()),
                other => {
                    if !other.is_empty() {
                        println!("{}", "please answer 1 or 2".yellow());
                    }
                }
            }
        };

        tally.record(question.answer(choice).letter);
        println!();
    }

    let mbti = tally.resolve().map_err(|e| e.to_string())?;
    print_profile(mbti);
    Ok(())
}

/// Show the profile of a type given on the command line.
pub fn run_show(code: &str) -> Result<(), String> {
    let mbti = MbtiType::parse(code).map_err(|e| e.to_string())?;
    print_profile(mbti);
    Ok(())
}

/// Compatibility assessment between two types.
pub fn run_match(
    first: &str,
    second: &str,
    seed: Option<u64>,
    json: bool,
) -> Result<(), String> {
    let first = MbtiType::parse(first).map_err(|e| e.to_string())?;
    let second = MbtiType::parse(second).map_err(|e| e.to_string())?;

    let mut rng = super::make_rng(seed);
    let result = assess(first, second, &mut rng);

    if json {
        let rendered = serde_json::to_string_pretty(&result).map_err(|e| e.to_string())?;
        println!("{rendered}");
        return Ok(());
    }

    println!(
        "  {} {} ({} / 100)",
        format!("{first} x {second}").bold(),
        result.grade,
        result.score
    );
    println!();
    println!("  {}", result.overall);
    println!();
    println!("  {}", "Strengths".green().bold());
    for s in &result.strengths {
        println!("  - {s}");
    }
    println!();
    println!("  {}", "Watch out".yellow().bold());
    for w in &result.weaknesses {
        println!("  - {w}");
    }
    println!();
    println!("  {}", "Advice".bold());
    println!("  {}", result.advice);
    println!();
    println!(
        "  communication {} | emotion {} | values {} | cooperation {}",
        result.details.communication,
        result.details.emotion,
        result.details.value,
        result.details.cooperation
    );

    Ok(())
}

fn print_profile(mbti: MbtiType) {
    let profile = profile_for(mbti);
    println!("  {} — {}", mbti.code().bold(), profile.title);
    println!();
    println!("  {}", profile.description);
    println!();
    println!(
        "  {} {}",
        "traits:".cyan(),
        profile.traits.join(", ")
    );
    println!("  {} {}", "jobs:".cyan(), profile.jobs.join(", "));
    println!(
        "  {} {}",
        "best matches:".cyan(),
        profile.best_matches.join(", ")
    );
}
