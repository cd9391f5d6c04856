//! 排版原语
//!
//! 所有原语都接收同一份 `StyleConstants`，保证字体、字号、边框在整份文档中一致。

use std::collections::BTreeSet;

use unicode_segmentation::UnicodeSegmentation;

use super::layout::{
    AlignmentType, LineRuleType, PageMargin, PageProperties, PageSize, Paragraph,
    ParagraphSpacing, RowHeight, RunProps, Table, TableBorders, TableCell, TableRow, TableWidth,
    TextRun, VerticalAlign,
};
use super::line_processor::process_text_lines;
use crate::models::{PageProfile, StyleConstants};

/// 页面配置转为节的页面属性
pub fn page_properties(profile: &PageProfile) -> PageProperties {
    let m = &profile.margins;
    PageProperties {
        size: PageSize {
            width: profile.width,
            height: profile.height,
        },
        margin: PageMargin {
            top: m.top,
            right: m.right,
            bottom: m.bottom,
            left: m.left,
            header: m.header,
            footer: m.footer,
        },
    }
}

/// 正文运行属性：统一字体，字号默认取 `base_size`
pub fn run_props(style: &StyleConstants, size: Option<usize>, bold: bool) -> RunProps {
    let props = RunProps::new()
        .font(&style.font)
        .size(size.unwrap_or(style.base_size));
    if bold {
        props.bold()
    } else {
        props
    }
}

/// 带样式的文本运行
pub fn styled_run(style: &StyleConstants, text: &str, size: Option<usize>, bold: bool) -> TextRun {
    TextRun::with_props(text, run_props(style, size, bold))
}

fn cell_paragraph(style: &StyleConstants, text: &str, bold: bool, align: AlignmentType) -> Paragraph {
    let mut paragraph = Paragraph::new_with_spacing(
        ParagraphSpacing::new()
            .before(style.cell_spacing)
            .after(style.cell_spacing),
    );
    paragraph.align(align);
    if !text.is_empty() {
        paragraph.add_text_run(styled_run(style, text, None, bold));
    }
    paragraph
}

/// 居中段落
pub fn centered_paragraph(style: &StyleConstants, text: &str, bold: bool) -> Paragraph {
    cell_paragraph(style, text, bold, AlignmentType::Center)
}

/// 左对齐段落
pub fn left_paragraph(style: &StyleConstants, text: &str, bold: bool) -> Paragraph {
    cell_paragraph(style, text, bold, AlignmentType::Left)
}

pub fn right_paragraph(style: &StyleConstants, text: &str, bold: bool) -> Paragraph {
    cell_paragraph(style, text, bold, AlignmentType::Right)
}

/// 竖排标签：每个字素一个居中段落
pub fn vertical_label(style: &StyleConstants, label: &str) -> Vec<Paragraph> {
    label
        .graphemes(true)
        .filter(|g| !g.trim().is_empty())
        .map(|g| {
            let mut paragraph = Paragraph::new_with_spacing(
                ParagraphSpacing::new()
                    .before(style.vertical_label_spacing)
                    .after(style.vertical_label_spacing),
            );
            paragraph
                .align(AlignmentType::Center)
                .add_text_run(styled_run(style, g, None, false));
            paragraph
        })
        .collect()
}

/// 长文本段落，保留原文中的换行
pub fn content_paragraph(style: &StyleConstants, text: &str) -> Paragraph {
    let mut paragraph = Paragraph::new_with_spacing(
        ParagraphSpacing::new()
            .before(style.content_spacing)
            .after(style.content_spacing)
            .line(style.content_line)
            .line_rule(LineRuleType::Auto),
    );
    paragraph
        .align(AlignmentType::Left)
        .indent(style.content_indent)
        .add_runs(process_text_lines(text, &run_props(style, None, false)));
    paragraph
}

/// 段前段后均为 0 的空段落
pub fn spacer_paragraph() -> Paragraph {
    Paragraph::new_with_spacing(ParagraphSpacing::new().before(0).after(0))
}

/// 单元格
pub fn cell(width: i32, align: VerticalAlign, paragraphs: Vec<Paragraph>) -> TableCell {
    let mut cell = TableCell::new();
    cell.width(TableWidth::dxa(width)).vertical_align(align);
    for paragraph in paragraphs {
        cell.add_paragraph(paragraph);
    }
    cell
}

/// 只含一个居中段落的单元格
pub fn centered_cell(style: &StyleConstants, width: i32, text: &str, bold: bool) -> TableCell {
    cell(
        width,
        VerticalAlign::Center,
        vec![centered_paragraph(style, text, bold)],
    )
}

/// 嵌套表格单元格，末尾补一个空段落
pub fn nested_table_cell(width: i32, table: Table) -> TableCell {
    let mut cell = TableCell::new();
    cell.width(TableWidth::dxa(width))
        .vertical_align(VerticalAlign::Center)
        .add_table(table)
        .add_paragraph(spacer_paragraph());
    cell
}

/// 表格行，行高为"至少"规则
pub fn row(cells: Vec<TableCell>, min_height: u32) -> TableRow {
    let mut row = TableRow::new();
    row.height(RowHeight::at_least(min_height));
    for cell in cells {
        row.add_cell(cell);
    }
    row
}

/// 解析物理网格
///
/// 取所有行累计宽度边界的并集作为 `tblGrid`，并回填每个单元格的 `grid_span`。
pub fn resolve_grid(rows: &mut [TableRow]) -> Vec<i32> {
    let mut boundaries = BTreeSet::new();
    for row in rows.iter() {
        let mut position = 0;
        for cell in &row.cells {
            position += cell.width_twips();
            if position > 0 {
                boundaries.insert(position);
            }
        }
    }

    let table_width = boundaries.iter().next_back().copied().unwrap_or(0);

    for (index, row) in rows.iter_mut().enumerate() {
        if row.total_width() != table_width {
            tracing::warn!(
                "【resolve_grid】第 {} 行宽度 {} 与表格宽度 {} 不一致",
                index,
                row.total_width(),
                table_width
            );
        }
        let mut start = 0;
        for cell in row.cells.iter_mut() {
            let end = start + cell.width_twips();
            let span = if end > start {
                boundaries.range((start + 1)..=end).count()
            } else {
                0
            };
            cell.grid_span = span.max(1);
            start = end;
        }
    }

    let mut grid = Vec::with_capacity(boundaries.len());
    let mut previous = 0;
    for boundary in boundaries {
        grid.push(boundary - previous);
        previous = boundary;
    }
    grid
}

fn build_table(mut rows: Vec<TableRow>, borders: TableBorders) -> Table {
    let grid = resolve_grid(&mut rows);
    let width: i32 = grid.iter().sum();

    let mut table = Table::new();
    table
        .width(TableWidth::dxa(width))
        .borders(borders)
        .grid(grid);
    for row in rows {
        table.add_row(row);
    }
    tracing::debug!(
        "【build_table】{} 行，网格 {:?}",
        table.rows.len(),
        table.grid
    );
    table
}

/// 四周及内部网格线均为单线的表格
pub fn bordered_table(style: &StyleConstants, rows: Vec<TableRow>) -> Table {
    build_table(
        rows,
        TableBorders::single(style.border_size, &style.border_color),
    )
}

/// 无边框表格，只用于签名栏中的子表格
pub fn borderless_table(rows: Vec<TableRow>) -> Table {
    build_table(rows, TableBorders::none())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docx::layout::{CellChild, RunType};

    fn style() -> StyleConstants {
        StyleConstants::default()
    }

    #[test]
    fn centered_paragraph_uses_shared_font() {
        let p = centered_paragraph(&style(), "项目名称", true);
        assert_eq!(p.alignment, Some(AlignmentType::Center));
        match &p.runs[0] {
            RunType::Text(run) => {
                assert_eq!(run.props.font.as_deref(), Some("宋体"));
                assert_eq!(run.props.size, Some(21));
                assert_eq!(run.props.bold, Some(true));
            }
            RunType::Break(_) => panic!("应为文本运行"),
        }
    }

    #[test]
    fn empty_text_gives_empty_paragraph() {
        assert!(left_paragraph(&style(), "", false).runs.is_empty());
        assert!(content_paragraph(&style(), "").runs.is_empty());
    }

    #[test]
    fn vertical_label_is_one_paragraph_per_character() {
        let paragraphs = vertical_label(&style(), "工程动态");
        let texts: Vec<String> = paragraphs.iter().map(Paragraph::text).collect();
        assert_eq!(texts, vec!["工", "程", "动", "态"]);
    }

    #[test]
    fn content_paragraph_keeps_line_breaks() {
        let p = content_paragraph(&style(), "第一行\n第二行");
        assert_eq!(p.text_run_count(), 2);
        assert_eq!(p.break_count(), 1);
        assert_eq!(p.indent.as_ref().and_then(|i| i.left), Some(200));
    }

    #[test]
    fn grid_is_union_of_row_boundaries() {
        let s = style();
        let mut rows = vec![
            row(
                vec![
                    centered_cell(&s, 1600, "a", false),
                    centered_cell(&s, 3600, "b", false),
                    centered_cell(&s, 1600, "c", false),
                    centered_cell(&s, 3000, "d", false),
                ],
                400,
            ),
            row(
                vec![
                    centered_cell(&s, 600, "e", false),
                    centered_cell(&s, 9200, "f", false),
                ],
                400,
            ),
        ];
        let grid = resolve_grid(&mut rows);
        assert_eq!(grid, vec![600, 1000, 3600, 1600, 3000]);
        let spans: Vec<usize> = rows[0].cells.iter().map(|c| c.grid_span).collect();
        assert_eq!(spans, vec![2, 1, 1, 1]);
        let spans: Vec<usize> = rows[1].cells.iter().map(|c| c.grid_span).collect();
        assert_eq!(spans, vec![1, 4]);
    }

    #[test]
    fn bordered_and_borderless_tables() {
        let s = style();
        let bordered = bordered_table(&s, vec![row(vec![centered_cell(&s, 1000, "x", false)], 500)]);
        assert_eq!(bordered.borders, Some(TableBorders::single(8, "000000")));
        assert_eq!(bordered.width, Some(TableWidth::dxa(1000)));

        let borderless = borderless_table(vec![row(vec![centered_cell(&s, 1000, "x", false)], 0)]);
        assert!(borderless.borders.as_ref().map_or(false, TableBorders::is_none));
    }

    #[test]
    fn nested_table_cell_ends_with_paragraph() {
        let s = style();
        let inner = borderless_table(vec![row(vec![centered_cell(&s, 1000, "x", false)], 0)]);
        let outer = nested_table_cell(1000, inner);
        assert!(matches!(outer.children.last(), Some(CellChild::Paragraph(_))));
        assert_eq!(outer.tables().count(), 1);
    }
}
