//! Fixed-width text helpers.

/// A horizontal rule of `width` dashes.
pub fn rule(width: usize) -> String {
    "-".repeat(width)
}

/// Left-align each cell to its column width and join them.
///
/// Cells longer than their column are not truncated. Trailing padding is
/// stripped so rows never end in whitespace.
pub fn row(cells: &[(&str, usize)]) -> String {
    let mut line = String::new();
    for &(text, width) in cells {
        line.push_str(&format!("{text:<width$}"));
    }
    line.trim_end().to_string()
}

/// Currency amount with thousands separators and two decimals: `16,230.00`.
pub fn currency(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    let fixed = format!("{:.2}", amount.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount.is_sign_negative() && amount != 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{frac}")
}
