use chrono::{Datelike, Local, NaiveDate};

const MONTHS_ID: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni", "Juli", "Agustus", "September",
    "Oktober", "November", "Desember",
];

/// Today's local date, used as the earliest bookable day.
pub fn today_iso() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Long Indonesian date, e.g. "4 Maret 2025".
pub fn format_display_date(date: NaiveDate) -> String {
    let month = MONTHS_ID[date.month0() as usize];
    format!("{} {} {}", date.day(), month, date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_dates() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        assert_eq!(format_iso_date(date), "2025-03-04");
        assert_eq!(format_display_date(date), "4 Maret 2025");
    }

    #[test]
    fn display_date_uses_indonesian_months() {
        let may = NaiveDate::from_ymd_opt(2025, 5, 17).unwrap();
        let december = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(format_display_date(may), "17 Mei 2025");
        assert_eq!(format_display_date(december), "31 Desember 2025");
    }

    #[test]
    fn today_is_a_parseable_date() {
        assert!(NaiveDate::parse_from_str(&today_iso(), "%Y-%m-%d").is_ok());
    }
}
