//! Unix timestamp and formatted time conversions for the
//! `timestamp-plus` workflow.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// 当前时间戳与格式化时间
pub fn now() -> (i64, String) {
    let now = Local::now();
    (now.timestamp(), now.format(TIME_FORMAT).to_string())
}

/// 时间戳转格式化时间；超出可表示范围返回 None
pub fn timestamp_to_time(timestamp: i64) -> Option<String> {
    Local
        .timestamp_opt(timestamp, 0)
        .single()
        .map(|t| t.format(TIME_FORMAT).to_string())
}

/// 按固定格式列表解析时间字符串（本地时区），RFC 3339 优先
pub fn parse_time_string(input: &str) -> Option<DateTime<Local>> {
    if let Ok(t) = DateTime::parse_from_rfc3339(input) {
        return Some(t.with_timezone(&Local));
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, fmt) {
            return Local.from_local_datetime(&naive).single();
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, fmt) {
            return Local.from_local_datetime(&date.and_hms_opt(0, 0, 0)?).single();
        }
    }

    None
}
