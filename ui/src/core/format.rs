//! Formatting helpers for presenting amounts, axis ticks and table cells.

/// Shown in place of a value that is missing or not a number.
pub const UNAVAILABLE: &str = "—";

/// SI prefixes from yocto (1e-24) to yotta (1e24).
const SI_PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

/// `$` followed by the en-US grouped amount, or a dash when the amount is unusable.
pub fn format_currency(value: f64) -> String {
    if value.is_finite() {
        format!("${}", format_grouped(value))
    } else {
        UNAVAILABLE.to_string()
    }
}

/// Thousands-grouped number with at most three fractional digits.
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return UNAVAILABLE.to_string();
    }

    let rounded = (value * 1000.0).round() / 1000.0;
    let text = format!("{:.3}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(text.len() + int_part.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Two significant digits with an SI suffix (`200M`, `1.5G`), as used on amount axes.
pub fn format_si(value: f64) -> String {
    if !value.is_finite() {
        return UNAVAILABLE.to_string();
    }
    if value == 0.0 {
        return "0.0".to_string();
    }

    // Round to two significant digits first; 995M becomes 1.0G, not 1000M.
    let mut exponent = value.abs().log10().floor() as i32;
    let unit = 10f64.powi(exponent - 1);
    let rounded = (value / unit).round() * unit;
    if rounded.abs() >= 10f64.powi(exponent + 1) {
        exponent += 1;
    }

    let tier = exponent.div_euclid(3).clamp(-8, 8);
    let scaled = rounded / 10f64.powi(tier * 3);
    let int_digits = exponent - tier * 3 + 1;
    let decimals = (2 - int_digits).max(0) as usize;

    format!("{scaled:.decimals$}{}", SI_PREFIXES[(tier + 8) as usize])
}

/// Tick label with just enough decimals to distinguish ticks spaced `step` apart.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step < 1.0 {
        (-step.log10().floor()) as usize
    } else {
        0
    };
    format!("{value:.decimals$}")
}

/// Strips everything but digits, `.` and `-` and parses what remains.
/// Returns NaN when nothing numeric is left.
pub fn parse_currency(text: &str) -> f64 {
    let digits: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    digits.parse::<f64>().unwrap_or(f64::NAN)
}
