use chrono::{Datelike, Local, NaiveDate};

const MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Accepts `YYYY-MM-DD`, `DD.MM.YYYY` and `YYYY.MM.DD`, the same set the
/// backend understands.
pub fn parse_schedule_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    let parts: Vec<&str> = trimmed.split('.').collect();
    if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
        return None;
    }
    let numbers: Vec<u32> = parts
        .iter()
        .map(|p| p.parse::<u32>().ok())
        .collect::<Option<Vec<_>>>()?;

    let (year, month, day) = if parts[0].len() == 4 {
        (numbers[0], numbers[1], numbers[2])
    } else if parts[2].len() == 4 && parts[0].len() <= 2 && parts[1].len() <= 2 {
        (numbers[2], numbers[1], numbers[0])
    } else {
        return None;
    };
    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
}

pub fn to_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn format_date_ru(date: NaiveDate) -> String {
    let month = MONTHS_GENITIVE[date.month0() as usize];
    format!("{:02} {} {}", date.day(), month, date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_all_backend_formats() {
        assert_eq!(parse_schedule_date("2024-01-01"), Some(ymd(2024, 1, 1)));
        assert_eq!(parse_schedule_date("19.03.2025"), Some(ymd(2025, 3, 19)));
        assert_eq!(parse_schedule_date("5.3.2025"), Some(ymd(2025, 3, 5)));
        assert_eq!(parse_schedule_date("2025.03.19"), Some(ymd(2025, 3, 19)));
        assert_eq!(parse_schedule_date("  2024-02-29 "), Some(ymd(2024, 2, 29)));
    }

    #[test]
    fn rejects_garbage_and_impossible_dates() {
        assert_eq!(parse_schedule_date(""), None);
        assert_eq!(parse_schedule_date("tomorrow"), None);
        assert_eq!(parse_schedule_date("31.02.2025"), None);
        assert_eq!(parse_schedule_date("2025.13.01"), None);
        assert_eq!(parse_schedule_date("1.2.3"), None);
    }

    #[test]
    fn formats_dates_in_russian() {
        assert_eq!(format_date_ru(ymd(2025, 3, 9)), "09 марта 2025");
        assert_eq!(format_date_ru(ymd(2024, 12, 31)), "31 декабря 2024");
    }

    #[test]
    fn iso_output_matches_backend_path_format() {
        assert_eq!(to_iso(ymd(2024, 1, 1)), "2024-01-01");
    }
}
