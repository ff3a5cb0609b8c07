// File: crates/chart-core/src/format.rs
// Summary: Tooltip label text.

use chrono::NaiveDate;

/// Date label format, e.g. `Jan 05, '21`.
pub const DATE_LABEL_FORMAT: &str = "%b %d, '%y";

/// `$` followed by the shortest decimal form of the price (`$100`, `$3843.5`).
pub fn price_label(price: f64) -> String {
    format!("${price}")
}

pub fn date_label(date: NaiveDate) -> String {
    date.format(DATE_LABEL_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_uses_shortest_form() {
        assert_eq!(price_label(100.0), "$100");
        assert_eq!(price_label(3843.5), "$3843.5");
        assert_eq!(price_label(10987.6583), "$10987.6583");
    }

    #[test]
    fn date_matches_label_format() {
        let d = NaiveDate::from_ymd_opt(2021, 1, 5).unwrap();
        assert_eq!(date_label(d), "Jan 05, '21");
    }
}
