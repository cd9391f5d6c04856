use super::layout::{AlignmentType, Paragraph, ParagraphSpacing, Section, VerticalAlign};
use super::primitives::{bordered_table, cell, centered_cell, page_properties, row, styled_run};
use crate::models::{CoverContext, ExportConf};
use crate::utils::{format_date_range, LogConstants};

/// 封面顶部"附录11-5表"与标题之间的空格数
const APPENDIX_PADDING: usize = 32;

/// 构建封面节
pub fn build_cover_section(ctx: &CoverContext, conf: &ExportConf) -> Section {
    let style = &conf.style;
    let layout = &conf.cover_layout;
    let labels = LogConstants::labels();

    let label = layout.label;
    let value = layout.value;
    let full = layout.table_width() - label;
    let height = layout.row_height;

    let label_cell = |key: &str, bold: bool| centered_cell(style, label, labels[key], bold);
    let value_cell = |text: &str| centered_cell(style, value, text, false);
    let full_cell = |text: &str| centered_cell(style, full, text, false);

    let title = {
        let mut paragraph = Paragraph::new();
        paragraph
            .align(AlignmentType::Center)
            .add_text_run(styled_run(
                style,
                labels["cover_title"],
                Some(style.cover_title_size),
                true,
            ));
        cell(
            layout.table_width(),
            VerticalAlign::Center,
            vec![paragraph],
        )
    };

    let rows = vec![
        row(
            vec![label_cell("project_name", false), full_cell(&ctx.project_name)],
            height,
        ),
        row(
            vec![label_cell("project_code", false), full_cell(&ctx.project_code)],
            height,
        ),
        row(
            vec![
                label_cell("work_name", false),
                value_cell(&ctx.work_name),
                label_cell("project_work_code", false),
                value_cell(&ctx.project_work_code),
            ],
            height,
        ),
        row(
            vec![
                label_cell("unit_work", false),
                value_cell(&ctx.unit_work),
                label_cell("unit_work_code", false),
                value_cell(&ctx.unit_work_code),
            ],
            height,
        ),
        row(vec![title], layout.title_row_height),
        row(
            vec![label_cell("organization", true), full_cell(&ctx.organization)],
            height,
        ),
        row(
            vec![
                label_cell("chief_engineer", false),
                value_cell(&ctx.chief_engineer),
                label_cell("specialist_engineer", false),
                value_cell(&ctx.specialist_engineer),
            ],
            height,
        ),
        row(
            vec![
                label_cell("log_period", false),
                full_cell(&format_date_range(&ctx.period_start, &ctx.period_end)),
            ],
            height,
        ),
    ];

    let mut section = Section::new(page_properties(&conf.cover));
    section
        .add_paragraph(appendix_line(conf, labels["appendix"], labels["cover_heading"]))
        .add_table(bordered_table(style, rows));

    tracing::debug!("【build_cover_section】封面：{}", ctx.project_name);
    section
}

/// 顶部一行：附录编号 + 加粗的"监理日志"
fn appendix_line(conf: &ExportConf, appendix: &str, heading: &str) -> Paragraph {
    let style = &conf.style;
    let mut paragraph = Paragraph::new_with_spacing(
        ParagraphSpacing::new().before(0).after(style.appendix_after),
    );
    paragraph
        .add_text_run(styled_run(style, appendix, None, false))
        .add_text_run(styled_run(
            style,
            &format!("{}{}", " ".repeat(APPENDIX_PADDING), heading),
            None,
            true,
        ));
    paragraph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docx::layout::{RunType, SectionChild};

    fn find_cell_text(section: &Section, row: usize, cell: usize) -> String {
        section
            .tables()
            .next()
            .map_or(String::new(), |t| t.rows[row].cells[cell].text())
    }

    fn ctx() -> CoverContext {
        CoverContext {
            project_name: "某水利工程项目".to_string(),
            project_code: "SL-2024".to_string(),
            work_name: "主体结构".to_string(),
            organization: "某监理公司项目部".to_string(),
            period_start: "2024-01-01".to_string(),
            period_end: "2024-12-31".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn cover_table_has_fixed_shape() {
        let section = build_cover_section(&ctx(), &ExportConf::default());
        let table = section.tables().next().expect("封面应有表格");
        assert_eq!(table.shape().cells_per_row, vec![2, 2, 4, 4, 1, 2, 4, 2]);
        assert_eq!(table.grid, vec![2400, 2000, 2400, 2000]);
        assert_eq!(table.rows[4].height.map(|h| h.value), Some(8000));
        assert_eq!(table.rows[0].cells[1].grid_span, 3);
    }

    #[test]
    fn cover_renders_identity_and_period() {
        let section = build_cover_section(&ctx(), &ExportConf::default());
        assert_eq!(find_cell_text(&section, 0, 1), "某水利工程项目");
        assert_eq!(find_cell_text(&section, 4, 0), "监 理 日 志");
        assert_eq!(
            find_cell_text(&section, 7, 1),
            "2024年1月1日 至 2024年12月31日"
        );
        assert_eq!(find_cell_text(&section, 5, 0), "项目监理机构");
    }

    #[test]
    fn title_is_larger_than_other_text() {
        let section = build_cover_section(&ctx(), &ExportConf::default());
        let table = section.tables().next().expect("封面应有表格");
        let title = table.rows[4].cells[0].paragraphs().next().expect("标题段落");
        match &title.runs[0] {
            RunType::Text(run) => assert_eq!(run.props.size, Some(72)),
            RunType::Break(_) => panic!("应为文本运行"),
        }
    }

    #[test]
    fn cover_starts_with_appendix_line() {
        let section = build_cover_section(&ctx(), &ExportConf::default());
        match &section.children[0] {
            SectionChild::Paragraph(p) => {
                assert!(p.text().starts_with("附录11-5表"));
                assert!(p.text().ends_with("监理日志"));
                assert_eq!(p.spacing.as_ref().and_then(|s| s.after), Some(120));
            }
            SectionChild::Table(_) => panic!("第一个元素应为段落"),
        }
        assert_eq!(section.properties.page.margin.left, 1728);
    }
}
