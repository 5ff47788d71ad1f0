/// Formats an IDR amount the way `id-ID` locales do: `Rp 50.000,00`.
/// The separator after `Rp` is a non-breaking space.
pub fn format_idr(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}Rp\u{a0}{grouped},00")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(format_idr(50_000), "Rp\u{a0}50.000,00");
        assert_eq!(format_idr(1_250_000), "Rp\u{a0}1.250.000,00");
        assert_eq!(format_idr(999), "Rp\u{a0}999,00");
        assert_eq!(format_idr(0), "Rp\u{a0}0,00");
    }

    #[test]
    fn negative_amounts_keep_sign_in_front() {
        assert_eq!(format_idr(-75_000), "-Rp\u{a0}75.000,00");
    }
}
