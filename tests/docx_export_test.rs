use serde_json::json;
use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;
use supervision_log_docx::docx::layout::Table;
use supervision_log_docx::{
    build_batch_document, build_single_document, export_batch, export_logs_to_docx,
    export_single, normalize_record, CoverOverride, ExportConf, LogRecord,
};

fn document_xml(bytes: &[u8]) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("应为 ZIP 包");
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .expect("缺少 word/document.xml")
        .read_to_string(&mut xml)
        .expect("无法读取 document.xml");
    xml
}

fn scenario_record() -> LogRecord {
    normalize_record(&json!({
        "project_name": "某水利工程项目",
        "work_name": "主体结构",
        "unit_work": "第三层",
        "log_date": "2024-10-21",
        "weather": "晴",
        "project_dynamics": "第一行\n第二行",
        "supervision_work": "第一行\n第二行",
        "safety_work": "第一行\n第二行",
    }))
}

fn content_table(doc: &supervision_log_docx::Document, index: usize) -> &Table {
    doc.sections()[index]
        .tables()
        .next()
        .expect("内容页应有表格")
}

#[test]
fn test_content_page_scenario() {
    let doc = build_single_document(&scenario_record(), &ExportConf::default()).expect("组装应该成功");
    assert_eq!(doc.sections().len(), 2);

    let table = content_table(&doc, 1);
    assert_eq!(table.rows[1].cells[1].text(), "2024年10月21日  星期一");
    assert_eq!(table.rows[2].cells[1].text(), "晴");
    for row in &table.rows[3..6] {
        let paragraph = row.cells[1].paragraphs().next().expect("正文段落");
        assert_eq!(paragraph.text_run_count(), 2);
        assert_eq!(paragraph.break_count(), 1);
        assert_eq!(paragraph.text(), "第一行\n第二行");
    }
}

#[test]
fn test_single_export_package() {
    let bytes = export_single(&scenario_record(), &ExportConf::default()).expect("导出应该成功");
    let xml = document_xml(&bytes);

    assert_eq!(xml.matches("<w:sectPr").count(), 2);
    assert!(xml.contains("2024年10月21日  星期一"));
    assert!(xml.contains("附录11-5表"));
    assert!(xml.contains("监 理 日 志"));
    assert_eq!(xml.matches("textWrapping").count(), 3);
}

#[test]
fn test_batch_export_sections_and_cover_range() {
    let records: Vec<LogRecord> = ["2024-10-23", "2024-10-21", "2024-10-22"]
        .iter()
        .map(|date| {
            let mut record = scenario_record();
            record.log_date = date.to_string();
            record.project_start_date = "2023-01-01".to_string();
            record.project_end_date = "2025-12-31".to_string();
            record
        })
        .collect();

    let ov = CoverOverride {
        project_name: Some("汇总项目".to_string()),
        work_name: None,
    };
    let conf = ExportConf::default();

    let doc = build_batch_document(&records, Some(&ov), &conf).expect("批量组装应该成功");
    assert_eq!(doc.sections().len(), records.len() + 1);

    let cover = doc.sections()[0].tables().next().expect("封面应有表格");
    assert_eq!(cover.rows[0].cells[1].text(), "汇总项目");
    assert_eq!(
        cover.rows[7].cells[1].text(),
        "2024年10月21日 至 2024年10月23日"
    );

    // 内容页顺序与输入一致
    assert_eq!(
        content_table(&doc, 1).rows[1].cells[1].text(),
        "2024年10月23日  星期三"
    );

    let bytes = export_batch(&records, Some(&ov), &conf).expect("批量导出应该成功");
    assert_eq!(document_xml(&bytes).matches("<w:sectPr").count(), 4);
}

#[test]
fn test_export_is_structurally_idempotent() {
    let conf = ExportConf::default();
    let a = build_single_document(&scenario_record(), &conf).expect("组装应该成功");
    let b = build_single_document(&scenario_record(), &conf).expect("组装应该成功");
    assert_eq!(a.stats(), b.stats());
    assert_eq!(a.stats().section_count, 2);
}

#[test]
fn test_empty_batch_fails() {
    assert!(export_batch(&[], None, &ExportConf::default()).is_err());
}

#[tokio::test]
async fn test_docx_export_to_file() {
    let output_dir = Path::new("tests/test_data_out");
    if !output_dir.exists() {
        fs::create_dir_all(output_dir).expect("无法创建输出目录");
    }
    let output_path = "tests/test_data_out/监理日志汇总.docx";

    let records = vec![
        json!({ "projectName": "某水利工程项目", "logDate": "2024-11-28", "weather": "多云" }),
        json!({ "project_name": "某水利工程项目", "log_date": "2024-11-29", "weather": "晴" }),
    ];
    let result = export_logs_to_docx(records, None, output_path.to_string(), None).await;

    assert!(result.success, "DOCX 导出应该成功: {}", result.message);
    assert_eq!(result.file_path.as_deref(), Some(output_path));

    let bytes = fs::read(output_path).expect("导出的 DOCX 文件应该存在");
    assert_eq!(document_xml(&bytes).matches("<w:sectPr").count(), 3);
}
