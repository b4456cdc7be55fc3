//! CLI frontend for the Haru daily-utility toolkit.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "haru",
    about = "Haru — daily fortune, lotto numbers and small utilities",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute today's fortune from a birth date and gender
    Fortune {
        /// Birth year
        #[arg(short, long)]
        year: i32,

        /// Birth month (1-12)
        #[arg(short, long)]
        month: u32,

        /// Birth day of month (1-31)
        #[arg(short, long)]
        day: u32,

        /// Gender: male/m or female/f
        #[arg(short, long)]
        gender: String,

        /// Compute for this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Draw 6-of-45 lotto games
    Lotto {
        /// Numbers every game must contain (comma separated)
        #[arg(short, long, value_delimiter = ',')]
        include: Vec<u32>,

        /// Numbers no game may contain (comma separated)
        #[arg(short = 'x', long, value_delimiter = ',')]
        exclude: Vec<u32>,

        /// Number of games to draw
        #[arg(short, long, default_value = "1")]
        games: usize,

        /// RNG seed for reproducible draws
        #[arg(short, long)]
        seed: Option<u64>,

        /// Show the most frequent numbers across the batch
        #[arg(long)]
        stats: bool,

        /// Print the batch as JSON
        #[arg(long)]
        json: bool,
    },

    /// MBTI personality test and compatibility
    Mbti {
        #[command(subcommand)]
        command: MbtiCommands,
    },

    /// Count characters, words and lines in a file or stdin
    Count {
        /// File to analyze (default: stdin)
        file: Option<PathBuf>,

        /// Leave whitespace out of the total
        #[arg(long)]
        no_spaces: bool,

        /// Leave line breaks out of the total
        #[arg(long)]
        no_line_breaks: bool,

        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate random passwords
    Password {
        /// Password length
        #[arg(short, long, default_value = "12")]
        length: usize,

        /// How many passwords to generate
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// Exclude uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Exclude lowercase letters
        #[arg(long)]
        no_lowercase: bool,

        /// Exclude digits
        #[arg(long)]
        no_digits: bool,

        /// Exclude symbols
        #[arg(long)]
        no_symbols: bool,

        /// RNG seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Calculate round-trip trade profit after fees and tax
    Profit {
        /// Buy price per unit
        #[arg(short, long)]
        buy: f64,

        /// Sell price per unit
        #[arg(short, long)]
        sell: f64,

        /// Quantity (fractions allowed)
        #[arg(short, long, default_value = "1")]
        quantity: f64,

        /// Brokerage fee rate in percent, both legs
        #[arg(long, default_value = "0.015")]
        fee: f64,

        /// Transaction tax rate in percent, sell leg only
        #[arg(long, default_value = "0.2")]
        tax: f64,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum MbtiCommands {
    /// Take the 12-question test interactively
    Test,

    /// Show the profile for a type
    Show {
        /// Four-letter type code, e.g. INTJ
        code: String,
    },

    /// Assess the compatibility of two types
    Match {
        /// First type code
        first: String,

        /// Second type code
        second: String,

        /// RNG seed for reproducible detail scores
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the assessment as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Fortune {
            year,
            month,
            day,
            gender,
            date,
            json,
        } => commands::fortune::run(year, month, day, &gender, date.as_deref(), json),
        Commands::Lotto {
            include,
            exclude,
            games,
            seed,
            stats,
            json,
        } => commands::lotto::run(&include, &exclude, games, seed, stats, json),
        Commands::Mbti { command } => match command {
            MbtiCommands::Test => commands::mbti::run_test(),
            MbtiCommands::Show { code } => commands::mbti::run_show(&code),
            MbtiCommands::Match {
                first,
                second,
                seed,
                json,
            } => commands::mbti::run_match(&first, &second, seed, json),
        },
        Commands::Count {
            file,
            no_spaces,
            no_line_breaks,
            json,
        } => commands::count::run(file.as_deref(), no_spaces, no_line_breaks, json),
        Commands::Password {
            length,
            count,
            no_uppercase,
            no_lowercase,
            no_digits,
            no_symbols,
            seed,
        } => commands::password::run(
            length,
            count,
            no_uppercase,
            no_lowercase,
            no_digits,
            no_symbols,
            seed,
        ),
        Commands::Profit {
            buy,
            sell,
            quantity,
            fee,
            tax,
            json,
        } => commands::profit::run(buy, sell, quantity, fee, tax, json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
