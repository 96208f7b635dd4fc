use chrono::NaiveDate;

pub const MONTH_KEY_FORMAT: &str = "%Y-%m";

pub fn month_key(date: NaiveDate) -> String {
    date.format(MONTH_KEY_FORMAT).to_string()
}
