//! Locale-aware number rendering.
//!
//! The engine never formats numbers itself. Everything user-visible goes
//! through a `NumberFormat`, so swapping the locale touches only this file.

/// Abbreviation scales, largest first. Thresholds compare the raw value.
const SCALES: [(f64, &str); 3] = [
    (10_000_000.0, "Cr"),
    (100_000.0,    "L"),
    (1_000.0,      "K"),
];

pub trait NumberFormat {
    fn currency_symbol(&self) -> &str;

    /// Insert group separators into a run of ASCII digits.
    fn group_digits(&self, digits: &str) -> String;

    /// Fixed-point rendering with grouped integer part.
    ///
    /// Rounds half away from zero at `max_frac` digits, then trims
    /// trailing zeros until `min_frac` digits remain.
    fn format_fixed(&self, value: f64, min_frac: usize, max_frac: usize) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "∞".to_string() } else { "-∞".to_string() };
        }

        let scale = 10u128.pow(max_frac as u32);
        // `as` saturates for out-of-range floats.
        let scaled = (value.abs() * scale as f64).round() as u128;
        let int_part = scaled / scale;

        let mut frac = if max_frac == 0 {
            String::new()
        } else {
            format!("{:0width$}", scaled % scale, width = max_frac)
        };
        while frac.len() > min_frac && frac.ends_with('0') {
            frac.pop();
        }

        let mut out = String::new();
        if value < 0.0 && scaled != 0 {
            out.push('-');
        }
        out.push_str(&self.group_digits(&int_part.to_string()));
        if !frac.is_empty() {
            out.push('.');
            out.push_str(&frac);
        }
        out
    }

    /// Currency with two to four fraction digits, symbol first.
    fn format_currency(&self, value: f64) -> String {
        let body = self.format_fixed(value.abs(), 2, 4);
        if value < 0.0 && body.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
            format!("-{}{body}", self.currency_symbol())
        } else {
            format!("{}{body}", self.currency_symbol())
        }
    }

    /// Short form for large figures: `1.2Cr`, `3.5L`, `4.0K`, or a plain
    /// grouped integer below one thousand.
    fn abbreviate(&self, value: f64) -> String {
        for (divisor, suffix) in SCALES {
            if value >= divisor {
                return format!("{}{suffix}", self.format_fixed(value / divisor, 1, 1));
            }
        }
        self.format_fixed(value, 0, 0)
    }
}

/// en-IN conventions: rupee symbol, last three digits grouped together,
/// then pairs ("12,34,567").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndianLocale;

impl NumberFormat for IndianLocale {
    fn currency_symbol(&self) -> &str { "₹" }

    fn group_digits(&self, digits: &str) -> String {
        if digits.len() <= 3 {
            return digits.to_string();
        }
        let (head, tail) = digits.split_at(digits.len() - 3);

        let mut groups: Vec<&str> = Vec::with_capacity(head.len() / 2 + 1);
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(2);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();

        format!("{},{tail}", groups.join(","))
    }
}
