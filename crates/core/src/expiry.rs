//! # Expiry Module
//!
//! Parse hạn sử dụng thẻ từ chuỗi ngày tháng do người dùng nhập.
//! Hỗ trợ hai dạng:
//! - dạng số: `1/12/2025`, `1 12 2025`, `1\12\2025` (ngày/tháng/năm)
//! - dạng chữ: `1st December 2025`, `2nd dec 2025` (không phân biệt hoa thường)

use crate::error::{CoreError, CoreResult};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use regex::Regex;

/// Ba chữ cái đầu của tên tháng, index + 1 = số tháng
const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Parse chuỗi ngày tháng thành `DateTime<Utc>` (00:00:00 UTC).
///
/// Trả về `CoreError::Validation` nếu chuỗi không khớp dạng nào
/// hoặc ngày tháng không tồn tại (vd. 31/2/2025).
pub fn parse_expiration(value: &str) -> CoreResult<DateTime<Utc>> {
    let numeric = Regex::new(r"(\d{1,2})[\s/\\]+(\d{1,2})[\s/\\]+(\d{4})").unwrap();
    let ordinal = Regex::new(
        r"(?i)(\d{1,2})(?:st|nd|rd|th)\s*(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?|jul(?:y)?|aug(?:ust)?|sep(?:tember)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\s*(\d{4})",
    )
    .unwrap();

    if let Some(caps) = numeric.captures(value) {
        let day = parse_component(&caps[1])?;
        let month = parse_component(&caps[2])?;
        let year = parse_component(&caps[3])? as i32;
        return build_date(day, month, year, value);
    }

    if let Some(caps) = ordinal.captures(value) {
        let day = parse_component(&caps[1])?;
        let month_name = caps[2].to_lowercase();
        let month = MONTHS
            .iter()
            .position(|m| month_name.starts_with(m))
            .map(|i| i as u32 + 1)
            .ok_or_else(|| invalid(value))?;
        let year = parse_component(&caps[3])? as i32;
        return build_date(day, month, year, value);
    }

    Err(invalid(value))
}

fn parse_component(digits: &str) -> CoreResult<u32> {
    digits
        .parse::<u32>()
        .map_err(|_| CoreError::validation(format!("Invalid date component: {digits}")))
}

fn build_date(day: u32, month: u32, year: i32, original: &str) -> CoreResult<DateTime<Utc>> {
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| invalid(original))?;
    Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
}

fn invalid(value: &str) -> CoreError {
    CoreError::validation(format!("Invalid datetime string provided: {value}"))
}
