use serde::{Deserialize, Serialize};

/// 规范化后的监理日志记录
///
/// 所有字段都是字符串，缺失时为空串。日期字段保留原始文本，
/// 在排版阶段才由 `utils::date_format` 转换为中文日期。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogRecord {
    pub project_name: String,
    pub project_code: String,
    /// 单项工程名称
    pub work_name: String,
    /// 单项工程编号
    pub project_work_code: String,
    /// 单位工程名称
    pub unit_work: String,
    /// 单位工程编号
    pub unit_work_code: String,
    /// 项目监理机构
    pub organization: String,
    /// 总监理工程师
    pub chief_engineer: String,
    /// 专业监理工程师
    pub specialist_engineer: String,

    pub log_date: String,
    pub project_start_date: String,
    pub project_end_date: String,

    pub weather: String,

    /// 工程动态
    pub project_dynamics: String,
    /// 监理工作情况
    pub supervision_work: String,
    /// 安全监理工作情况
    pub safety_work: String,

    pub recorder_name: String,
    pub recorder_date: String,
    pub reviewer_name: String,
    pub reviewer_date: String,
}

impl LogRecord {
    /// 内容页"单位工程名称"一栏的取值，单位工程为空时退回单项工程名称
    pub fn unit_work_display(&self) -> &str {
        if self.unit_work.is_empty() {
            &self.work_name
        } else {
            &self.unit_work
        }
    }
}

/// 批量导出时调用方提供的封面覆盖信息
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoverOverride {
    pub project_name: Option<String>,
    pub work_name: Option<String>,
}

/// 封面页上下文
///
/// 不持久化，每次导出时从记录推导。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverContext {
    pub project_name: String,
    pub project_code: String,
    pub work_name: String,
    pub project_work_code: String,
    pub unit_work: String,
    pub unit_work_code: String,
    pub organization: String,
    pub chief_engineer: String,
    pub specialist_engineer: String,
    /// 监理日志起始日期（原始日期文本）
    pub period_start: String,
    /// 监理日志截止日期（原始日期文本）
    pub period_end: String,
}

impl CoverContext {
    /// 单条导出：直接使用记录中的项目起止日期
    pub fn from_record(record: &LogRecord) -> Self {
        Self {
            project_name: record.project_name.clone(),
            project_code: record.project_code.clone(),
            work_name: record.work_name.clone(),
            project_work_code: record.project_work_code.clone(),
            unit_work: record.unit_work.clone(),
            unit_work_code: record.unit_work_code.clone(),
            organization: record.organization.clone(),
            chief_engineer: record.chief_engineer.clone(),
            specialist_engineer: record.specialist_engineer.clone(),
            period_start: record.project_start_date.clone(),
            period_end: record.project_end_date.clone(),
        }
    }

    /// 应用批量导出的覆盖信息，空串视为未提供
    pub fn with_override(mut self, cover_override: Option<&CoverOverride>) -> Self {
        if let Some(ov) = cover_override {
            if let Some(name) = ov.project_name.as_deref().filter(|s| !s.is_empty()) {
                self.project_name = name.to_string();
            }
            if let Some(name) = ov.work_name.as_deref().filter(|s| !s.is_empty()) {
                self.work_name = name.to_string();
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_work_falls_back_to_work_name() {
        let mut record = LogRecord {
            work_name: "主体结构".to_string(),
            ..Default::default()
        };
        assert_eq!(record.unit_work_display(), "主体结构");

        record.unit_work = "第三层".to_string();
        assert_eq!(record.unit_work_display(), "第三层");
    }

    #[test]
    fn override_ignores_empty_strings() {
        let record = LogRecord {
            project_name: "原项目".to_string(),
            work_name: "原工程".to_string(),
            ..Default::default()
        };
        let ov = CoverOverride {
            project_name: Some("新项目".to_string()),
            work_name: Some(String::new()),
        };
        let ctx = CoverContext::from_record(&record).with_override(Some(&ov));
        assert_eq!(ctx.project_name, "新项目");
        assert_eq!(ctx.work_name, "原工程");
    }

    #[test]
    fn record_serializes_camel_case() {
        let record = LogRecord {
            unit_work_code: "DW-01".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["unitWorkCode"], "DW-01");
    }
}
