use super::layout::{
    AlignmentType, Paragraph, ParagraphSpacing, Section, TableCell, TableRow, VerticalAlign,
};
use super::primitives::{
    bordered_table, borderless_table, cell, centered_cell, content_paragraph, left_paragraph,
    nested_table_cell, page_properties, right_paragraph, row, styled_run, vertical_label,
};
use crate::models::{ExportConf, LogRecord};
use crate::utils::{format_date_for_signature, format_date_with_weekday, LogConstants};

/// 构建一条日志对应的内容页节
pub fn build_content_section(record: &LogRecord, conf: &ExportConf) -> Section {
    let style = &conf.style;
    let layout = &conf.content_layout;
    let labels = LogConstants::labels();

    let table_width = layout.table_width();
    let wide = table_width - layout.label;
    let rail_content = table_width - layout.label_vertical;

    let mut rows = vec![
        row(
            vec![
                centered_cell(style, layout.label, labels["unit_work"], false),
                centered_cell(style, layout.value, record.unit_work_display(), false),
                centered_cell(style, layout.label, labels["unit_work_code"], false),
                centered_cell(style, layout.code_value, &record.unit_work_code, false),
            ],
            layout.header_row_height,
        ),
        row(
            vec![
                centered_cell(style, layout.label, labels["log_date"], false),
                cell(
                    wide,
                    VerticalAlign::Center,
                    vec![left_paragraph(style, &format_date_with_weekday(&record.log_date), false)],
                ),
            ],
            layout.row_height,
        ),
        row(
            vec![
                centered_cell(style, layout.label, labels["weather"], false),
                cell(
                    wide,
                    VerticalAlign::Center,
                    vec![left_paragraph(style, &record.weather, false)],
                ),
            ],
            layout.row_height,
        ),
    ];

    for (key, text) in [
        ("project_dynamics", &record.project_dynamics),
        ("supervision_work", &record.supervision_work),
        ("safety_work", &record.safety_work),
    ] {
        rows.push(row(
            vec![
                cell(
                    layout.label_vertical,
                    VerticalAlign::Center,
                    vertical_label(style, labels[key]),
                ),
                cell(
                    rail_content,
                    VerticalAlign::Top,
                    vec![content_paragraph(style, text)],
                ),
            ],
            layout.narrative_row_height,
        ));
    }

    rows.push(signature_row(record, conf));

    let mut section = Section::new(page_properties(&conf.content));
    section
        .add_paragraph(page_heading(conf, labels["page_heading"]))
        .add_table(bordered_table(style, rows));

    tracing::debug!("【build_content_section】内容页：{}", record.log_date);
    section
}

fn page_heading(conf: &ExportConf, heading: &str) -> Paragraph {
    let style = &conf.style;
    let mut paragraph = Paragraph::new_with_spacing(ParagraphSpacing::new().after(200));
    paragraph.align(AlignmentType::Center).add_text_run(styled_run(
        style,
        heading,
        Some(style.page_heading_size),
        true,
    ));
    paragraph
}

/// 签名行：记录人 | 姓名+日期 | 审核人 | 姓名+日期
fn signature_row(record: &LogRecord, conf: &ExportConf) -> TableRow {
    let style = &conf.style;
    let layout = &conf.content_layout;

    row(
        vec![
            centered_cell(style, layout.sign_label, LogConstants::label("recorder"), false),
            signature_cell(conf, layout.recorder_value, &record.recorder_name, &record.recorder_date),
            centered_cell(style, layout.sign_label, LogConstants::label("reviewer"), false),
            signature_cell(conf, layout.reviewer_value, &record.reviewer_name, &record.reviewer_date),
        ],
        layout.sign_row_height,
    )
}

/// 同一视觉单元格内姓名居左、日期居右
fn signature_cell(conf: &ExportConf, width: i32, name: &str, date: &str) -> TableCell {
    let style = &conf.style;
    let date_width = conf.content_layout.sign_date;

    let sub_table = borderless_table(vec![row(
        vec![
            cell(
                width - date_width,
                VerticalAlign::Center,
                vec![left_paragraph(style, name, false)],
            ),
            cell(
                date_width,
                VerticalAlign::Center,
                vec![right_paragraph(style, &format_date_for_signature(date), false)],
            ),
        ],
        0,
    )]);

    nested_table_cell(width, sub_table)
}
