use crate::utils::is_sentinel;

/// Two-decimal display used for oscillator readings (WT1, WT2, money flow).
pub fn format_fixed2(value: f64) -> String {
    if is_sentinel(value) {
        return "--".to_string();
    }
    format!("{:.2}", value)
}

/// Signed percentage with two decimals, e.g. `+1.25%`.
pub fn format_pct(value: f64) -> String {
    if is_sentinel(value) {
        return "--".to_string();
    }
    format!("{:+.2}%", value)
}

/// Formats a price with "Trader Precision".
/// - Large (>1000): 2 decimals ($95,123.50)
/// - Medium (1-1000): 4 decimals ($12.4829)
/// - Small (<1): 5-8 decimals ($0.00000231)
pub fn format_price(price: f64) -> String {
    if is_sentinel(price) {
        return "--".to_string();
    }
    if price == 0.0 {
        return "$0.00".to_string();
    }

    let abs_price = price.abs();

    if abs_price >= 1000.0 {
        format!("${:.2}", price)
    } else if abs_price >= 1.0 {
        format!("${:.4}", price)
    } else if abs_price >= 0.01 {
        format!("${:.5}", price)
    } else {
        format!("${:.8}", price)
    }
}
