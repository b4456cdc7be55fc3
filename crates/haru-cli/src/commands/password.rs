use colored::{ColoredString, Colorize};

use haru_passgen::{CharsetOptions, StrengthGrade, generate, rate};

#[allow(clippy::fn_params_excessive_bools)]
pub fn run(
    length: usize,
    count: usize,
    no_uppercase: bool,
    no_lowercase: bool,
    no_digits: bool,
    no_symbols: bool,
    seed: Option<u64>,
) -> Result<(), String> {
    if length == 0 {
        return Err("length must be at least 1".into());
    }
    if count == 0 {
        return Err("at least one password must be generated".into());
    }

    let options = CharsetOptions {
        uppercase: !no_uppercase,
        lowercase: !no_lowercase,
        digits: !no_digits,
        symbols: !no_symbols,
    };

    let mut rng = super::make_rng(seed);
    for _ in 0..count {
        let password = generate(length, options, &mut rng).map_err(|e| e.to_string())?;
        let strength = rate(&password);
        println!("  {}  {}", password, paint(strength.grade));
    }

    Ok(())
}

fn paint(grade: StrengthGrade) -> ColoredString {
    let text = grade.to_string();
    match grade {
        StrengthGrade::Weak => text.red(),
        StrengthGrade::Fair => text.yellow(),
        StrengthGrade::Strong => text.green(),
    }
}
