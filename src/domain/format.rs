const CURRENCY_PREFIX: &str = "R$ ";

/// Formats an amount as Brazilian Real with cents, e.g. `R$ 1.234,56`.
pub fn format_brl(amount: f64) -> String {
    format!("{CURRENCY_PREFIX}{}", format_grouped(amount, 2))
}

/// Formats an amount as Brazilian Real rounded to whole units, e.g. `R$ 1.235`.
///
/// Halves round to the nearest even unit.
pub fn format_brl_whole(amount: f64) -> String {
    let rounded = if amount.is_finite() {
        amount.round_ties_even()
    } else {
        0.0
    };
    format!("{CURRENCY_PREFIX}{}", format_grouped(rounded, 0))
}

pub fn format_percent_whole(share: f64) -> String {
    let rounded = if share.is_finite() {
        share.round_ties_even()
    } else {
        0.0
    };
    format!("({}%)", rounded as i64)
}

fn format_grouped(amount: f64, decimals: usize) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let text = format!("{:.*}", decimals, amount.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + int_part.len() / 3 + 1);
    let is_zero = text.chars().all(|ch| ch == '0' || ch == '.');
    if amount < 0.0 && !is_zero {
        out.push('-');
    }
    let digits = int_part.len();
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (digits - idx) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    if let Some(frac_part) = frac_part {
        out.push(',');
        out.push_str(frac_part);
    }
    out
}
