use std::collections::HashMap;
use lazy_static::lazy_static;
use regex::Regex;

/// 星期名称，按周日开始排列
pub const WEEKDAYS: [&str; 7] = [
    "星期日", "星期一", "星期二", "星期三", "星期四", "星期五", "星期六",
];

/// 签名日期缺失时的占位文本
pub const SIGNATURE_DATE_PLACEHOLDER: &str = "    年  月  日";

/// 存储层把北京时间零点序列化成 UTC 时刻，取日历日前先换回东八区
pub const DISPLAY_UTC_OFFSET_SECS: i32 = 8 * 3600;

pub struct LogConstants;

impl LogConstants {
    // 表格中使用的固定文字
    pub fn labels() -> HashMap<&'static str, &'static str> {
        let mut map = HashMap::new();
        map.insert("appendix", "附录11-5表");
        map.insert("cover_heading", "监理日志");
        map.insert("cover_title", "监 理 日 志");
        map.insert("page_heading", "监理日志");
        map.insert("project_name", "项目名称");
        map.insert("project_code", "项目编号");
        map.insert("work_name", "单项工程名称");
        map.insert("project_work_code", "单项工程编号");
        map.insert("unit_work", "单位工程名称");
        map.insert("unit_work_code", "单位工程编号");
        map.insert("organization", "项目监理机构");
        map.insert("chief_engineer", "总监理工程师");
        map.insert("specialist_engineer", "专业监理工程师");
        map.insert("log_period", "监理日志起止时间");
        map.insert("log_date", "日    期");
        map.insert("weather", "气    象");
        map.insert("project_dynamics", "工程动态");
        map.insert("supervision_work", "监理工作情况");
        map.insert("safety_work", "安全监理工作情况");
        map.insert("recorder", "记录人");
        map.insert("reviewer", "审核人");
        map
    }

    /// 取标签文字，未登记的键原样返回
    pub fn label(key: &'static str) -> &'static str {
        Self::labels().get(key).copied().unwrap_or(key)
    }
}

lazy_static! {
    // 日期文本正则
    pub static ref DATE_REGEX: HashMap<&'static str, Regex> = {
        let mut map = HashMap::new();
        map.insert("calendar_prefix", Regex::new(r"^(\d{4})[-/.](\d{1,2})[-/.](\d{1,2})(?:$|[\sT])").unwrap());
        map.insert("has_offset", Regex::new(r"(?:[zZ]|[+-]\d{2}:?\d{2})$").unwrap());
        map
    };
}
