use serde_json::{Map, Value};

use super::field_aliases::{field_mut, FIELD_ALIASES};
use crate::models::LogRecord;

/// 把上游任意形状的记录规范化为 `LogRecord`
///
/// 总是成功：未知字段被忽略，缺失字段为空串，非对象输入得到空记录。
pub fn normalize_record(raw: &Value) -> LogRecord {
    match raw.as_object() {
        Some(map) => normalize_map(map),
        None => {
            tracing::warn!("【normalize_record】输入不是对象，按空记录处理");
            LogRecord::default()
        }
    }
}

pub fn normalize_map(map: &Map<String, Value>) -> LogRecord {
    let mut record = LogRecord::default();

    for (canonical, aliases) in FIELD_ALIASES.iter() {
        let value = aliases
            .iter()
            .find_map(|key| map.get(*key).and_then(|v| coerce_text(key, v)));

        if let (Some(value), Some(slot)) = (value, field_mut(&mut record, canonical)) {
            *slot = value;
        }
    }

    record
}

pub fn normalize_records(raws: &[Value]) -> Vec<LogRecord> {
    raws.iter().map(normalize_record).collect()
}

/// 标量转文本，空值返回 None
fn coerce_text(key: &str, value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        Value::Array(_) | Value::Object(_) => {
            tracing::warn!("【normalize_record】字段 {} 不是标量，已忽略", key);
            None
        }
        _ => None,
    }
}
