use colored::Colorize;

use haru_finance::{Outcome, TradeInput, settle};

pub fn run(
    buy: f64,
    sell: f64,
    quantity: f64,
    fee: f64,
    tax: f64,
    json: bool,
) -> Result<(), String> {
    if buy < 0.0 || sell < 0.0 || quantity < 0.0 {
        return Err("prices and quantity must not be negative".into());
    }
    if fee < 0.0 || tax < 0.0 {
        return Err("fee and tax rates must not be negative".into());
    }

    let summary = settle(&TradeInput {
        buy_price: buy,
        sell_price: sell,
        quantity,
        fee_rate: fee,
        tax_rate: tax,
    });

    if json {
        let rendered = serde_json::to_string_pretty(&summary).map_err(|e| e.to_string())?;
        println!("{rendered}");
        return Ok(());
    }

    println!("  {} {:.0}", "buy total: ".bold(), summary.buy_total);
    println!("  {} {:.0}", "sell total:".bold(), summary.sell_total);
    println!("  {} {:.2}", "fees:      ".bold(), summary.total_fee);
    println!("  {} {:.2}", "tax:       ".bold(), summary.tax);
    println!();

    let profit_line = format!("{:.2} ({:+.2}%)", summary.profit, summary.profit_rate);
    let painted = match summary.outcome {
        Outcome::Gain => profit_line.green(),
        Outcome::Loss => profit_line.red(),
        Outcome::BreakEven => profit_line.normal(),
    };
    println!("  {} {painted}", "profit:    ".bold());

    Ok(())
}
