//! 调用方 API
//!
//! 接收未规范化的 JSON 记录，生成在阻塞线程池中完成，错误折叠进 `ExportResult`。

use serde_json::Value;

use crate::docx::{
    build_batch_document, build_single_document, get_docx_base64, save_doc, DocxError,
    DocxResult,
};
use crate::models::{CoverOverride, ExportConf};
use crate::normalizer::{normalize_record, normalize_records};

/// 导出结果
#[derive(Debug, Clone)]
pub struct ExportResult {
    pub success: bool,
    pub message: String,
    pub file_path: Option<String>,
    /// Base64 编码的文档，只有 base64 导出才有
    pub data: Option<String>,
}

impl ExportResult {
    fn failed(action: &str, e: DocxError) -> Self {
        tracing::warn!("【export】{}失败: {}", action, e);
        ExportResult {
            success: false,
            message: format!("{}失败: {}", action, e),
            file_path: None,
            data: None,
        }
    }
}

async fn run_blocking<T, F>(job: F) -> DocxResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> DocxResult<T> + Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| DocxError::IoError(std::io::Error::new(std::io::ErrorKind::Other, e)))?
}

/// 导出单条日志到文件
pub async fn export_log_to_docx(
    record: Value,
    output_path: String,
    config: Option<ExportConf>,
) -> ExportResult {
    let conf = config.unwrap_or_default();
    let path = output_path.clone();

    let result = run_blocking(move || {
        let record = normalize_record(&record);
        save_doc(&build_single_document(&record, &conf)?, &path)
    })
    .await;

    match result {
        Ok(_) => ExportResult {
            success: true,
            message: "DOCX文档导出成功".to_string(),
            file_path: Some(output_path),
            data: None,
        },
        Err(e) => ExportResult::failed("导出", e),
    }
}

/// 批量导出日志到同一个文件
pub async fn export_logs_to_docx(
    records: Vec<Value>,
    cover_override: Option<CoverOverride>,
    output_path: String,
    config: Option<ExportConf>,
) -> ExportResult {
    let conf = config.unwrap_or_default();
    let path = output_path.clone();

    let result = run_blocking(move || {
        let records = normalize_records(&records);
        let doc = build_batch_document(&records, cover_override.as_ref(), &conf)?;
        save_doc(&doc, &path)
    })
    .await;

    match result {
        Ok(_) => ExportResult {
            success: true,
            message: "DOCX文档导出成功".to_string(),
            file_path: Some(output_path),
            data: None,
        },
        Err(e) => ExportResult::failed("导出", e),
    }
}

/// 获取单条日志 DOCX 的 Base64 编码
pub async fn export_log_to_base64(record: Value, config: Option<ExportConf>) -> ExportResult {
    let conf = config.unwrap_or_default();

    let result = run_blocking(move || {
        let record = normalize_record(&record);
        get_docx_base64(&build_single_document(&record, &conf)?)
    })
    .await;

    match result {
        Ok(encoded) => ExportResult {
            success: true,
            message: "DOCX Base64编码生成成功".to_string(),
            file_path: None,
            data: Some(encoded.data),
        },
        Err(e) => ExportResult::failed("生成", e),
    }
}

/// 获取批量日志 DOCX 的 Base64 编码
pub async fn export_logs_to_base64(
    records: Vec<Value>,
    cover_override: Option<CoverOverride>,
    config: Option<ExportConf>,
) -> ExportResult {
    let conf = config.unwrap_or_default();

    let result = run_blocking(move || {
        let records = normalize_records(&records);
        let doc = build_batch_document(&records, cover_override.as_ref(), &conf)?;
        get_docx_base64(&doc)
    })
    .await;

    match result {
        Ok(encoded) => ExportResult {
            success: true,
            message: "DOCX Base64编码生成成功".to_string(),
            file_path: None,
            data: Some(encoded.data),
        },
        Err(e) => ExportResult::failed("生成", e),
    }
}
