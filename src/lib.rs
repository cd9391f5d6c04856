pub mod api;
pub mod docx;
pub mod models;
pub mod normalizer;
pub mod utils;

pub use models::{CoverContext, CoverOverride, ExportConf, LogRecord};

pub use normalizer::{normalize_record, normalize_records};

pub use docx::{
    build_batch_document, build_single_document, DocxAsBase64, DocxError, DocxResult, DocxStats,
    Document,
};

pub use api::{
    export_log_to_base64, export_log_to_docx, export_logs_to_base64, export_logs_to_docx,
    ExportResult,
};

use utils::sanitize_file_name_part;

/// 导出单条监理日志
///
/// # Arguments
///
/// * `record` - 规范化后的日志记录
/// * `conf` - 导出配置
///
/// # Returns
///
/// DOCX 文件字节：封面 + 一份内容页
pub fn export_single(record: &LogRecord, conf: &ExportConf) -> DocxResult<Vec<u8>> {
    docx::generate_single(record, conf)
}

/// 批量导出监理日志
///
/// 封面的起止时间取所有记录日志日期的最小值与最大值；记录为空时返回 `InvalidInput`。
pub fn export_batch(
    records: &[LogRecord],
    cover_override: Option<&CoverOverride>,
    conf: &ExportConf,
) -> DocxResult<Vec<u8>> {
    docx::generate_batch(records, cover_override, conf)
}

/// 单条导出的建议文件名：`监理日志_{项目名称}_{日志日期}.docx`
pub fn suggested_file_name(record: &LogRecord) -> String {
    format!(
        "监理日志_{}_{}.docx",
        sanitize_file_name_part(&record.project_name),
        sanitize_file_name_part(&record.log_date)
    )
}

/// 批量导出的建议文件名：`监理日志汇总_{项目名称}_{起}_{止}.docx`
pub fn suggested_batch_file_name(
    records: &[LogRecord],
    cover_override: Option<&CoverOverride>,
) -> String {
    let project_name = cover_override
        .and_then(|ov| ov.project_name.as_deref())
        .filter(|name| !name.is_empty())
        .or_else(|| records.first().map(|r| r.project_name.as_str()))
        .unwrap_or_default();

    let (start, end) = docx::log_date_range(records)
        .map(|(start, end)| {
            (
                start.format("%Y-%m-%d").to_string(),
                end.format("%Y-%m-%d").to_string(),
            )
        })
        .unwrap_or_default();

    format!(
        "监理日志汇总_{}_{}_{}.docx",
        sanitize_file_name_part(project_name),
        start,
        end
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_follow_project_and_dates() {
        let record = LogRecord {
            project_name: "某水利/工程".to_string(),
            log_date: "2024-11-28".to_string(),
            ..Default::default()
        };
        assert_eq!(suggested_file_name(&record), "监理日志_某水利_工程_2024-11-28.docx");

        let mut later = record.clone();
        later.log_date = "2024-12-01".to_string();
        assert_eq!(
            suggested_batch_file_name(&[later, record], None),
            "监理日志汇总_某水利_工程_2024-11-28_2024-12-01.docx"
        );
    }

    #[test]
    fn export_single_produces_a_package() {
        let bytes = export_single(&LogRecord::default(), &ExportConf::default()).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
