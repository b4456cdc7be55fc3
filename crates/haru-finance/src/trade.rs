//! Round-trip trade settlement.

use serde::{Deserialize, Serialize};

/// Inputs for a round-trip trade. Rates are percentages, so a 0.015%
/// brokerage fee is `fee_rate: 0.015`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeInput {
    /// Unit price paid per share.
    pub buy_price: f64,
    /// Unit price received per share.
    pub sell_price: f64,
    /// Number of shares.
    pub quantity: f64,
    /// Brokerage fee rate in percent, charged on both legs.
    pub fee_rate: f64,
    /// Transaction tax rate in percent, charged on the sell leg only.
    pub tax_rate: f64,
}

/// Whether the trade made or lost money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Net profit is positive.
    Gain,
    /// Net profit is negative.
    Loss,
    /// Net profit is exactly zero.
    BreakEven,
}

/// The settled trade: totals, costs, net profit and its rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeSummary {
    /// Gross buy amount.
    pub buy_total: f64,
    /// Gross sell amount.
    pub sell_total: f64,
    /// Fees across both legs.
    pub total_fee: f64,
    /// Tax on the sell leg.
    pub tax: f64,
    /// Net profit after fees and tax.
    pub profit: f64,
    /// Profit as a percentage of the buy total; zero when nothing was
    /// bought.
    pub profit_rate: f64,
    /// Gain, loss or break-even.
    pub outcome: Outcome,
}

/// Settle a trade.
pub fn settle(input: &TradeInput) -> TradeSummary {
    let buy_total = input.buy_price * input.quantity;
    let sell_total = input.sell_price * input.quantity;

    let buy_fee = buy_total * (input.fee_rate / 100.0);
    let sell_fee = sell_total * (input.fee_rate / 100.0);
    let total_fee = buy_fee + sell_fee;
    let tax = sell_total * (input.tax_rate / 100.0);

    let profit = sell_total - buy_total - total_fee - tax;
    let profit_rate = if buy_total > 0.0 {
        profit / buy_total * 100.0
    } else {
        0.0
    };

    let outcome = if profit > 0.0 {
        Outcome::Gain
    } else if profit < 0.0 {
        Outcome::Loss
    } else {
        Outcome::BreakEven
    };

    TradeSummary {
        buy_total,
        sell_total,
        total_fee,
        tax,
        profit,
        profit_rate,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(buy: f64, sell: f64, qty: f64, fee: f64, tax: f64) -> TradeInput {
        TradeInput {
            buy_price: buy,
            sell_price: sell,
            quantity: qty,
            fee_rate: fee,
            tax_rate: tax,
        }
    }

    #[test]
    fn frictionless_gain() {
        let s = settle(&input(10_000.0, 11_000.0, 10.0, 0.0, 0.0));
        assert_eq!(s.buy_total, 100_000.0);
        assert_eq!(s.sell_total, 110_000.0);
        assert_eq!(s.profit, 10_000.0);
        assert!((s.profit_rate - 10.0).abs() < 1e-9);
        assert_eq!(s.outcome, Outcome::Gain);
    }

    #[test]
    fn fees_hit_both_legs_and_tax_only_the_sell() {
        let s = settle(&input(10_000.0, 10_000.0, 1.0, 1.0, 0.5));
        assert!((s.total_fee - 200.0).abs() < 1e-9);
        assert!((s.tax - 50.0).abs() < 1e-9);
        assert!((s.profit + 250.0).abs() < 1e-9);
        assert_eq!(s.outcome, Outcome::Loss);
    }

    #[test]
    fn korean_market_rates() {
        // 0.015% fee each way, 0.2% transaction tax.
        let s = settle(&input(50_000.0, 55_000.0, 10.0, 0.015, 0.2));
        assert!((s.buy_total - 500_000.0).abs() < 1e-9);
        assert!((s.sell_total - 550_000.0).abs() < 1e-9);
        assert!((s.total_fee - 157.5).abs() < 1e-9);
        assert!((s.tax - 1_100.0).abs() < 1e-9);
        assert!((s.profit - 48_742.5).abs() < 1e-9);
        assert_eq!(s.outcome, Outcome::Gain);
    }

    #[test]
    fn zero_buy_total_has_zero_rate() {
        let s = settle(&input(0.0, 1_000.0, 0.0, 0.0, 0.0));
        assert_eq!(s.profit_rate, 0.0);
        assert_eq!(s.outcome, Outcome::BreakEven);
    }

    #[test]
    fn flat_trade_breaks_even() {
        let s = settle(&input(1_000.0, 1_000.0, 5.0, 0.0, 0.0));
        assert_eq!(s.profit, 0.0);
        assert_eq!(s.outcome, Outcome::BreakEven);
    }

    #[test]
    fn summary_round_trips_through_json() {
        let s = settle(&input(50_000.0, 55_000.0, 10.0, 0.015, 0.2));
        let json = serde_json::to_string(&s).unwrap();
        let back: TradeSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn fractional_quantity_works() {
        // Coins trade in fractions.
        let s = settle(&input(40_000_000.0, 42_000_000.0, 0.25, 0.05, 0.0));
        assert!((s.buy_total - 10_000_000.0).abs() < 1e-6);
        assert!((s.sell_total - 10_500_000.0).abs() < 1e-6);
        assert_eq!(s.outcome, Outcome::Gain);
    }
}
