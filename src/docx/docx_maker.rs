//! DOCX 生成模块
//!
//! 一份封面加 N 份内容页组装为一个文档：单条导出 N = 1，批量导出 N = 记录条数。

use chrono::NaiveDate;
use thiserror::Error;

use super::content_page::build_content_section;
use super::cover_page::build_cover_section;
use super::docx_adapter::{DocxAdapter, DocxAdapterError};
use super::layout::{Document, DocumentOptions, DocxStats};
use crate::models::{CoverContext, CoverOverride, ExportConf, LogRecord};
use crate::utils::parse_date;

/// DOCX导出错误类型
#[derive(Error, Debug)]
pub enum DocxError {
    #[error("IO错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("适配器错误: {0}")]
    AdapterError(#[from] DocxAdapterError),

    #[error("无效的配置: {0}")]
    InvalidConfig(String),

    #[error("无效的输入: {0}")]
    InvalidInput(String),

    #[error("JSON错误: {0}")]
    Json(#[from] serde_json::Error),
}

/// DOCX导出结果
pub type DocxResult<T> = Result<T, DocxError>;

/// Base64 编码的文档及其结构统计
#[derive(Debug, Clone)]
pub struct DocxAsBase64 {
    pub data: String,
    pub stats: DocxStats,
}

/// 导出模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportMode {
    Single,
    Batch,
}

fn new_document(conf: &ExportConf, description: String) -> Document {
    Document {
        options: DocumentOptions {
            creator: conf.creator.clone(),
            title: conf.title.clone(),
            description,
            sections: Vec::new(),
        },
    }
}

/// 单条导出：封面 + 一份内容页
pub fn build_single_document(record: &LogRecord, conf: &ExportConf) -> DocxResult<Document> {
    conf.validate()?;

    let mut doc = new_document(conf, format!("{} {}", conf.title, record.log_date));
    doc.add_section(build_cover_section(&CoverContext::from_record(record), conf))
        .add_section(build_content_section(record, conf));
    Ok(doc)
}

/// 批量导出：封面 + 每条记录一份内容页，顺序与输入一致
pub fn build_batch_document(
    records: &[LogRecord],
    cover_override: Option<&CoverOverride>,
    conf: &ExportConf,
) -> DocxResult<Document> {
    conf.validate()?;
    let ctx = batch_cover_context(records, cover_override)?;

    let mut doc = new_document(conf, format!("{} 共{}篇", conf.title, records.len()));
    doc.add_section(build_cover_section(&ctx, conf));
    for record in records {
        doc.add_section(build_content_section(record, conf));
    }
    Ok(doc)
}

/// 批量导出的封面上下文
///
/// 身份字段取第一条记录（可被覆盖），起止时间取所有记录日志日期的最小值与最大值，
/// 而不是记录中的项目起止日期。
pub fn batch_cover_context(
    records: &[LogRecord],
    cover_override: Option<&CoverOverride>,
) -> DocxResult<CoverContext> {
    let first = records
        .first()
        .ok_or_else(|| DocxError::InvalidInput("没有可导出的日志".to_string()))?;

    let mut ctx = CoverContext::from_record(first).with_override(cover_override);
    match log_date_range(records) {
        Some((start, end)) => {
            ctx.period_start = start.format("%Y-%m-%d").to_string();
            ctx.period_end = end.format("%Y-%m-%d").to_string();
        }
        None => {
            ctx.period_start.clear();
            ctx.period_end.clear();
        }
    }
    Ok(ctx)
}

/// 日志日期的最小值与最大值，无法解析的日期被跳过
pub fn log_date_range(records: &[LogRecord]) -> Option<(NaiveDate, NaiveDate)> {
    let mut range: Option<(NaiveDate, NaiveDate)> = None;
    for record in records {
        let date = match parse_date(&record.log_date) {
            Some(date) => date,
            None => {
                tracing::warn!(
                    "【log_date_range】日志日期无法解析，已跳过: {:?}",
                    record.log_date
                );
                continue;
            }
        };
        range = Some(match range {
            Some((start, end)) => (start.min(date), end.max(date)),
            None => (date, date),
        });
    }
    range
}

/// 完成文档生成，返回字节
pub fn finish_doc(doc: &Document) -> DocxResult<Vec<u8>> {
    DocxAdapter::new(doc).to_bytes().map_err(DocxError::AdapterError)
}

/// 完成文档生成并保存
pub fn save_doc(doc: &Document, filepath: &str) -> DocxResult<()> {
    DocxAdapter::new(doc).save(filepath).map_err(DocxError::AdapterError)
}

fn log_finished(mode: ExportMode, records: usize, bytes: usize) {
    tracing::info!(
        "【generate】导出完成：模式 {:?}，日志 {} 条，{} 字节",
        mode,
        records,
        bytes
    );
}

/// 生成单条日志的 DOCX
pub fn generate_single(record: &LogRecord, conf: &ExportConf) -> DocxResult<Vec<u8>> {
    let bytes = finish_doc(&build_single_document(record, conf)?)?;
    log_finished(ExportMode::Single, 1, bytes.len());
    Ok(bytes)
}

/// 生成多条日志合并的 DOCX
pub fn generate_batch(
    records: &[LogRecord],
    cover_override: Option<&CoverOverride>,
    conf: &ExportConf,
) -> DocxResult<Vec<u8>> {
    let bytes = finish_doc(&build_batch_document(records, cover_override, conf)?)?;
    log_finished(ExportMode::Batch, records.len(), bytes.len());
    Ok(bytes)
}

/// 获取DOCX文档的Base64编码
pub fn get_docx_base64(doc: &Document) -> DocxResult<DocxAsBase64> {
    let data = DocxAdapter::new(doc)
        .to_base64()
        .map_err(DocxError::AdapterError)?;
    Ok(DocxAsBase64 {
        data,
        stats: doc.stats(),
    })
}
