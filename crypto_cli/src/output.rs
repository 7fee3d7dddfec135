use console::{StyledObject, style};
use crypto_core::market::{PriceChanges, PriceQuote, TopCoin};
use crypto_core::paprika::{CoinDetail, CoinRecord};
use crypto_core::ta::{Indicator, IndicatorResult, Signal};

/// Formats a dollar amount as `$12,345.6789`.
pub fn format_usd(value: f64) -> String {
    if !value.is_finite() {
        return format!("${}", value);
    }

    let fixed = format!("{:.4}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "0000"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        "-"
    } else {
        ""
    };

    format!("{}${}.{}", sign, grouped, fraction)
}

pub fn format_percent(percent: f64) -> String {
    format!("{:+.2}%", percent)
}

fn colored_percent(percent: Option<f64>) -> StyledObject<String> {
    match percent {
        Some(p) if p > 0.0 => style(format_percent(p)).green(),
        Some(p) if p < 0.0 => style(format_percent(p)).red(),
        Some(p) => style(format_percent(p)),
        None => style("n/a".to_string()).dim(),
    }
}

fn colored_signal(signal: Signal) -> StyledObject<String> {
    let text = signal.to_string();

    match signal {
        Signal::Buy => style(text).green().bold(),
        Signal::Sell => style(text).red().bold(),
        Signal::Hold => style(text).yellow().bold(),
    }
}

fn rank_label(rank: Option<u32>) -> String {
    rank.map_or_else(|| "-".to_string(), |rank| format!("#{}", rank))
}

pub fn price_line(quote: &PriceQuote) -> String {
    format!("{}: {}", quote.name, format_usd(quote.price))
}

pub fn changes_lines(changes: &PriceChanges) -> Vec<String> {
    let mut lines = vec![format!(
        "{} ({}): {}",
        style(&changes.name).bold(),
        changes.symbol,
        format_usd(changes.price)
    )];

    if changes.changes.is_empty() {
        lines.push(format!("  {}", style("no price changes reported").dim()));
    }

    for change in &changes.changes {
        lines.push(format!(
            "  {:>4}: {}",
            change.period,
            colored_percent(change.percent)
        ));
    }

    lines
}

pub fn indicator_lines(result: &IndicatorResult) -> Vec<String> {
    let value = match result.indicator {
        Indicator::Sma => format_usd(result.value),
        Indicator::Rsi => format!("{:.2}", result.value),
    };

    let mut lines = vec![format!(
        "{} ({}) {}({}): {}",
        style(&result.coin_name).bold(),
        result.coin_symbol,
        result.indicator,
        result.period,
        value
    )];

    if let Some(price) = result.current_price {
        lines.push(format!("Current price: {}", format_usd(price)));
    }
    lines.push(format!("Signal: {}", colored_signal(result.signal)));

    lines
}

pub fn top_lines(coins: &[TopCoin]) -> Vec<String> {
    coins
        .iter()
        .map(|coin| {
            format!(
                "{:>5}  {:<24} {:<8} {:>20}  {}",
                rank_label(coin.rank),
                coin.name,
                coin.symbol,
                format_usd(coin.price),
                colored_percent(coin.percent_change_24h)
            )
        })
        .collect()
}

pub fn search_lines(results: &[CoinRecord]) -> Vec<String> {
    if results.is_empty() {
        return vec![style("No coins matched.").dim().to_string()];
    }

    results
        .iter()
        .map(|coin| {
            format!(
                "{:<28} {} ({}) {}",
                coin.id,
                coin.name,
                coin.symbol,
                style(rank_label(coin.rank)).dim()
            )
        })
        .collect()
}

pub fn details_lines(detail: &CoinDetail) -> Vec<String> {
    let mut lines = vec![
        format!("{} ({})", style(&detail.name).bold(), detail.symbol),
        format!("Id: {}", detail.id),
        format!("Rank: {}", rank_label(detail.rank)),
        format!("Active: {}", if detail.is_active { "yes" } else { "no" }),
    ];

    if let Some(coin_type) = &detail.coin_type {
        lines.push(format!("Type: {}", coin_type));
    }
    if let Some(started_at) = &detail.started_at {
        lines.push(format!("Started: {}", started_at));
    }
    if let Some(description) = detail.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(String::new());
        lines.push(description.to_string());
    }

    lines
}
