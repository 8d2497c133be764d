use chrono::{DateTime, Utc};

/// Renders an amount the way the branch back office expects it:
/// thousands separated by narrow spaces, no decimals, XAF suffix.
pub fn format_xaf(amount: f64) -> String {
    let negative = amount < 0.0;
    let whole = amount.abs().round() as u64;
    let digits = whole.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 5);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{grouped} XAF")
    } else {
        format!("{grouped} XAF")
    }
}

/// French short date, `jj/mm/aaaa hh:mm`.
pub fn format_date_fr(date: &DateTime<Utc>) -> String {
    date.format("%d/%m/%Y %H:%M").to_string()
}

/// Missing timestamps render as a dash rather than an empty cell.
pub fn format_opt_date_fr(date: Option<&DateTime<Utc>>) -> String {
    match date {
        Some(d) => format_date_fr(d),
        None => "—".to_string(),
    }
}

/// Score as a one-decimal percentage, e.g. `82.5%`.
pub fn format_score(score: f64) -> String {
    format!("{score:.1}%")
}

/// Pads or truncates to a fixed column width for table alignment.
pub fn pad(value: &str, width: usize) -> String {
    let count = value.chars().count();
    if count >= width {
        value.chars().take(width).collect()
    } else {
        let mut out = String::with_capacity(width);
        out.push_str(value);
        out.extend(std::iter::repeat(' ').take(width - count));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_xaf_grouping() {
        assert_eq!(format_xaf(0.0), "0 XAF");
        assert_eq!(format_xaf(950.0), "950 XAF");
        assert_eq!(format_xaf(1000.0), "1 000 XAF");
        assert_eq!(format_xaf(2_500_000.0), "2 500 000 XAF");
        assert_eq!(format_xaf(-75_000.0), "-75 000 XAF");
    }

    #[test]
    fn test_format_date_fr() {
        let date = Utc.with_ymd_and_hms(2026, 3, 14, 9, 5, 0).unwrap();
        assert_eq!(format_date_fr(&date), "14/03/2026 09:05");
        assert_eq!(format_opt_date_fr(None), "—");
    }

    #[test]
    fn test_pad_unicode_width() {
        assert_eq!(pad("Yaoundé", 9), "Yaoundé  ");
        assert_eq!(pad("Yaoundé", 5), "Yaoun");
    }
}
