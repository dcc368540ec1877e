use rust_decimal::{Decimal, RoundingStrategy};

/// Format a currency amount with thousand separators and 2 decimal places,
/// rounding half-cents away from zero.
/// e.g. `1234567.89` → `"$1,234,567.89"`, `-12.5` → `"-$12.50"`
pub(crate) fn format_amount(val: Decimal) -> String {
    let cents = val
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let rendered = format!("{cents:.2}");
    let (int_part, dec_part) = rendered.split_once('.').unwrap_or((&rendered, "00"));

    let grouped: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    if val < Decimal::ZERO {
        format!("-${grouped}.{dec_part}")
    } else {
        format!("${grouped}.{dec_part}")
    }
}

#[cfg(test)]
mod tests;
