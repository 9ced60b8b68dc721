//! Display formatting
//!
//! Fixed-point values for form fields, grouped numbers for summaries and
//! Nepali rupee amounts.

/// Two decimal places, as written back into form inputs
pub fn fixed2(value: f64) -> String {
    if !value.is_finite() {
        return "0.00".to_string();
    }
    let s = format!("{:.2}", value);
    if s == "-0.00" {
        "0.00".to_string()
    } else {
        s
    }
}

/// The number `fixed2` would write, read back as a value
pub fn round2(value: f64) -> f64 {
    fixed2(value).parse().unwrap_or(0.0)
}

/// Western thousands grouping with two decimals: `1,234,567.89`
pub fn group_thousands(value: f64) -> String {
    grouped(value, false)
}

/// Rupee amount with Indian digit grouping: `Rs. 12,34,567.89`
pub fn format_currency(amount: f64) -> String {
    format!("Rs. {}", grouped(amount, true))
}

fn grouped(value: f64, indian: bool) -> String {
    let fixed = fixed2(value);
    let (negative, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, fixed.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let int_grouped = if indian {
        group_indian(int_part)
    } else {
        group_by(int_part, 3)
    };

    format!(
        "{}{}.{}",
        if negative { "-" } else { "" },
        int_grouped,
        frac_part
    )
}

/// Insert commas every `size` digits from the right
fn group_by(digits: &str, size: usize) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / size);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % size == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Last three digits, then pairs: 1234567 -> 12,34,567
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    format!("{},{}", group_by(head, 2), tail)
}
