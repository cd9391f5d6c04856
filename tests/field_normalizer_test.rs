use serde_json::json;
use supervision_log_docx::normalizer::FIELD_ALIASES;
use supervision_log_docx::{normalize_record, normalize_records, LogRecord};

#[test]
fn test_every_alias_resolves_to_the_same_record() {
    // 每个来源字段单独出现时，都应该落到同一个规范字段上
    for (canonical, aliases) in FIELD_ALIASES.iter() {
        let expected = normalize_record(&json!({ aliases[0]: "值" }));
        for alias in aliases.iter().skip(1) {
            let actual = normalize_record(&json!({ *alias: "值" }));
            if *alias == "userName" || *alias == "user_name" {
                // 姓名同时回填专业监理工程师和记录人
                assert_eq!(actual.recorder_name, "值");
                assert_eq!(actual.specialist_engineer, "值");
                continue;
            }
            assert_eq!(actual, expected, "{} 的别名 {} 不一致", canonical, alias);
        }
    }
}

#[test]
fn test_full_record_in_both_conventions() {
    let camel = json!({
        "projectName": "某水利工程项目",
        "projectCode": "SL-01",
        "workName": "主体工程",
        "projectWorkCode": "ZT-01",
        "unitWork": "大坝",
        "workCode": "DB-01",
        "organization": "某监理公司",
        "chiefEngineer": "王总",
        "specialistEngineer": "李工",
        "projectStartDate": "2024-01-01",
        "projectEndDate": "2024-12-31",
        "logDate": "2024-11-28",
        "weather": "晴",
        "projectDynamics": "浇筑",
        "supervisionWork": "旁站",
        "safetyWork": "巡查",
        "recorderName": "张三",
        "recorderDate": "2024-11-28",
        "reviewerName": "王总",
        "reviewerDate": "2024-11-29",
    });
    let snake = json!({
        "project_name": "某水利工程项目",
        "project_code": "SL-01",
        "work_name": "主体工程",
        "project_work_code": "ZT-01",
        "unit_work": "大坝",
        "work_code": "DB-01",
        "organization": "某监理公司",
        "chief_engineer": "王总",
        "specialist_engineer": "李工",
        "project_start_date": "2024-01-01",
        "project_end_date": "2024-12-31",
        "log_date": "2024-11-28",
        "weather": "晴",
        "project_dynamics": "浇筑",
        "supervision_work": "旁站",
        "safety_work": "巡查",
        "recorder_name": "张三",
        "recorder_date": "2024-11-28",
        "reviewer_name": "王总",
        "reviewer_date": "2024-11-29",
    });

    let record = normalize_record(&camel);
    assert_eq!(record, normalize_record(&snake));
    assert_eq!(record.unit_work_code, "DB-01");
    assert_eq!(record.reviewer_date, "2024-11-29");

    // 规范化结果序列化为驼峰字段后可以再次规范化
    let round = serde_json::to_value(&record).unwrap();
    assert_eq!(normalize_record(&round), record);
}

#[test]
fn test_missing_and_unknown_fields() {
    let record = normalize_record(&json!({ "foo": "bar", "weather": "" }));
    assert_eq!(record, LogRecord::default());
}

#[test]
fn test_normalize_records_keeps_order() {
    let records = normalize_records(&[
        json!({ "log_date": "2024-01-02" }),
        json!("not an object"),
        json!({ "logDate": "2024-01-01" }),
    ]);
    let dates: Vec<&str> = records.iter().map(|r| r.log_date.as_str()).collect();
    assert_eq!(dates, vec!["2024-01-02", "", "2024-01-01"]);
}
