use lazy_static::lazy_static;

use crate::models::LogRecord;

lazy_static! {
    /// 规范字段 → 按优先级排列的来源字段
    ///
    /// 上游同时存在驼峰、下划线以及若干历史字段名，取第一个非空值。
    pub static ref FIELD_ALIASES: Vec<(&'static str, Vec<&'static str>)> = vec![
        ("projectName", vec!["projectName", "project_name"]),
        ("projectCode", vec!["projectCode", "project_code"]),
        ("workName", vec!["workName", "work_name"]),
        ("projectWorkCode", vec!["projectWorkCode", "project_work_code"]),
        ("unitWork", vec!["unitWork", "unit_work"]),
        // 单位工程编号沿用工程表的 work_code
        ("unitWorkCode", vec!["workCode", "work_code", "unitWorkCode"]),
        ("organization", vec!["organization"]),
        ("chiefEngineer", vec!["chiefEngineer", "chief_engineer"]),
        (
            "specialistEngineer",
            vec!["specialistEngineer", "specialist_engineer", "userName", "user_name"],
        ),
        ("projectStartDate", vec!["startDate", "projectStartDate", "project_start_date"]),
        ("projectEndDate", vec!["endDate", "projectEndDate", "project_end_date"]),
        ("logDate", vec!["logDate", "log_date"]),
        ("weather", vec!["weather"]),
        ("projectDynamics", vec!["projectDynamics", "project_dynamics"]),
        ("supervisionWork", vec!["supervisionWork", "supervision_work"]),
        ("safetyWork", vec!["safetyWork", "safety_work"]),
        (
            "recorderName",
            vec!["recorderName", "recorder_name", "userName", "user_name"],
        ),
        ("recorderDate", vec!["recorderDate", "recorder_date"]),
        ("reviewerName", vec!["reviewerName", "reviewer_name"]),
        ("reviewerDate", vec!["reviewerDate", "reviewer_date"]),
    ];
}

/// 取规范字段在记录中的可写引用
pub fn field_mut<'a>(record: &'a mut LogRecord, canonical: &str) -> Option<&'a mut String> {
    let slot = match canonical {
        "projectName" => &mut record.project_name,
        "projectCode" => &mut record.project_code,
        "workName" => &mut record.work_name,
        "projectWorkCode" => &mut record.project_work_code,
        "unitWork" => &mut record.unit_work,
        "unitWorkCode" => &mut record.unit_work_code,
        "organization" => &mut record.organization,
        "chiefEngineer" => &mut record.chief_engineer,
        "specialistEngineer" => &mut record.specialist_engineer,
        "projectStartDate" => &mut record.project_start_date,
        "projectEndDate" => &mut record.project_end_date,
        "logDate" => &mut record.log_date,
        "weather" => &mut record.weather,
        "projectDynamics" => &mut record.project_dynamics,
        "supervisionWork" => &mut record.supervision_work,
        "safetyWork" => &mut record.safety_work,
        "recorderName" => &mut record.recorder_name,
        "recorderDate" => &mut record.recorder_date,
        "reviewerName" => &mut record.reviewer_name,
        "reviewerDate" => &mut record.reviewer_date,
        _ => return None,
    };
    Some(slot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_canonical_field_has_a_slot() {
        let mut record = LogRecord::default();
        for (canonical, aliases) in FIELD_ALIASES.iter() {
            assert!(!aliases.is_empty(), "{} 没有来源字段", canonical);
            assert!(field_mut(&mut record, canonical).is_some(), "{} 没有对应字段", canonical);
        }
        assert_eq!(FIELD_ALIASES.len(), 20);
    }
}
