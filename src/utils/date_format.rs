//! 日期格式化
//!
//! 所有函数都不会失败：无法解析的日期一律输出空串或占位文本。

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate};

use super::log_constants::{
    DATE_REGEX, DISPLAY_UTC_OFFSET_SECS, SIGNATURE_DATE_PLACEHOLDER, WEEKDAYS,
};

/// 解析日期文本
///
/// 支持 `2024-10-21`、`2024/10/21`、`2024-10-21 08:00:00` 以及带时区的
/// RFC 3339 时刻（先换算到东八区再取日期）。
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }

    if DATE_REGEX["has_offset"].is_match(text) {
        if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
            let offset = FixedOffset::east_opt(DISPLAY_UTC_OFFSET_SECS)?;
            return Some(instant.with_timezone(&offset).date_naive());
        }
    }

    let caps = DATE_REGEX["calendar_prefix"].captures(text)?;
    let year = caps[1].parse::<i32>().ok()?;
    let month = caps[2].parse::<u32>().ok()?;
    let day = caps[3].parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// `2024年1月1日`，月日不补零
pub fn format_naive_date(date: NaiveDate) -> String {
    format!("{}年{}月{}日", date.year(), date.month(), date.day())
}

/// 中文星期名称
pub fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAYS[date.weekday().num_days_from_sunday() as usize]
}

pub fn format_date(raw: &str) -> String {
    parse_date(raw).map(format_naive_date).unwrap_or_default()
}

/// 日期后接两个空格和星期，如 `2024年10月21日  星期一`
pub fn format_date_with_weekday(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => format!("{}  {}", format_naive_date(date), weekday_name(date)),
        None => String::new(),
    }
}

/// 日期区间
///
/// 只有起始日期时输出"至今"，只有截止日期时输出"至 {end}"。
pub fn format_date_range(start: &str, end: &str) -> String {
    let start = format_date(start);
    let end = format_date(end);
    match (start.is_empty(), end.is_empty()) {
        (true, true) => String::new(),
        (true, false) => format!("至 {}", end),
        (false, true) => format!("{} 至今", start),
        (false, false) => format!("{} 至 {}", start, end),
    }
}

/// 签名栏日期，缺失时输出空白的"年 月 日"供手写
pub fn format_date_for_signature(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => format_naive_date(date),
        None => SIGNATURE_DATE_PLACEHOLDER.to_string(),
    }
}
