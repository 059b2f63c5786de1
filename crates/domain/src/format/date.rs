// crates/domain/src/format/date.rs

const MONTHS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// `Mon/DD/YYYY`, e.g. `Jan/05/2024`. `month0` is zero-based; values past
/// December are clamped to it.
pub fn format_date(month0: u32, day: u32, year: i32) -> String {
    debug_assert!(month0 < 12, "month index out of range: {month0}");
    let month = MONTHS[(month0 as usize).min(MONTHS.len() - 1)];
    format!("{month}/{day:02}/{year:04}")
}

/// 24-hour `HH:MM`.
pub fn format_time(hour: u32, minute: u32) -> String {
    format!("{hour:02}:{minute:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_day_and_year() {
        assert_eq!(format_date(0, 5, 2024), "Jan/05/2024");
        assert_eq!(format_date(11, 31, 999), "Dec/31/0999");
    }

    #[test]
    fn date_and_time_fill_the_date_column() {
        let column = format!("{} {}", format_date(6, 14, 2023), format_time(9, 3));
        assert_eq!(column, "Jul/14/2023 09:03");
        assert_eq!(column.len(), crate::layout::DATE_WIDTH);
    }
}
