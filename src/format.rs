//! Display formatting for figures shown to clinics
//!
//! Whole-dollar currency and whole-number counts in en-US style:
//! rounded half away from zero, comma thousands separators, `$` prefix,
//! leading minus for negatives (`-$1,235`, and `-$0` when a small negative
//! rounds to zero).

/// Format a value as whole US dollars, e.g. `$232,898`.
pub fn format_currency(value: f64) -> String {
    format_rounded(value, "$")
}

/// Format a value as a whole number with thousands separators, e.g. `2,452`.
pub fn format_number(value: f64) -> String {
    format_rounded(value, "")
}

/// Format a raw percentage or count the way it was entered: `75`, `72.5`.
pub fn format_plain(value: f64) -> String {
    format!("{value}")
}

fn format_rounded(value: f64, prefix: &str) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}{prefix}∞");
    }

    let rounded = value.round();
    let sign = if rounded.is_sign_negative() && value != 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{sign}{prefix}{}", group_thousands(&digits))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
