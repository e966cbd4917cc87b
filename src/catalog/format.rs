use crate::models::{Currency, Language};

/// Whole-unit price with grouping, laid out the way each locale writes money.
///
/// English puts the symbol first (`$850,000`), Hebrew after the amount
/// (`850,000 ₪`). Fractions are rounded away.
pub fn format_price(price: f64, currency: Currency, language: Language) -> String {
    let amount = group_thousands(price.round().abs() as u64);
    let sign = if price.round() < 0.0 { "-" } else { "" };
    match language {
        Language::En => format!("{sign}{}{amount}", currency.symbol()),
        Language::He => format!("{sign}{amount} {}", currency.symbol()),
    }
}

/// ROI as shown on a card, e.g. `7.2%`
pub fn format_roi(roi: f64) -> String {
    format!("{roi}%")
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
