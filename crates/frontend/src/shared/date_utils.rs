/// Date and time formatting for tables and forms
use chrono::{Datelike, Local, NaiveDate};

/// ISO datetime to DD/MM/YYYY HH:MM:SS.
/// "2024-03-15T14:02:26.123Z" -> "15/03/2024 14:02:26"
pub fn format_datetime(datetime_str: &str) -> String {
    let (date_part, time_part) = match datetime_str
        .split_once('T')
        .or_else(|| datetime_str.split_once(' '))
    {
        Some(parts) => parts,
        None => return datetime_str.to_string(),
    };
    match split_ymd(date_part) {
        Some((year, month, day)) => {
            let time = time_part.split('.').next().unwrap_or(time_part);
            let time = time.trim_end_matches('Z');
            format!("{}/{}/{} {}", day, month, year, time)
        }
        None => datetime_str.to_string(),
    }
}

/// ISO date (or datetime) to DD/MM/YYYY.
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    let date_part = date_part.split(' ').next().unwrap_or(date_part);
    match split_ymd(date_part) {
        Some((year, month, day)) => format!("{}/{}/{}", day, month, year),
        None => date_str.to_string(),
    }
}

fn split_ymd(date_part: &str) -> Option<(&str, &str, &str)> {
    let (year, rest) = date_part.split_once('-')?;
    let (month, day) = rest.split_once('-')?;
    Some((year, month, day))
}

/// Today as `YYYY-MM-DD`, the value `<input type="date">` expects.
pub fn today_iso() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn current_year_month() -> (i32, u32) {
    let today = today();
    (today.year(), today.month())
}

pub const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "15/03/2024 14:02:26"
        );
        assert_eq!(format_datetime("2024-12-31 23:59:59"), "31/12/2024 23:59:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }
}
