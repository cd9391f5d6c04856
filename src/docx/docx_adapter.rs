//! DOCX 适配器
//!
//! 把排版树转换为 docx-rs 的对象并打包。整个库中只有这里依赖 `docx_rs`。

use std::fs;
use std::io::{Cursor, Seek, Write};
use std::path::Path;

use docx_rs::{
    BorderType, Docx, HeightRule as DocxHeightRule, LineSpacing, LineSpacingType, RunFonts,
    SectionProperty, TableBorderPosition, TableLayoutType, VAlignType,
};
use thiserror::Error;

use super::layout::{
    AlignmentType, BorderStyle, BreakType, CellChild, Document, HeightRule, LineRuleType,
    PageProperties, Paragraph, ParagraphSpacing, RunType, SectionChild, Table, TableBorder,
    TableCell, TableRow, TableWidth, TextRun, VerticalAlign, WidthType,
};

/// DOCX适配器错误
#[derive(Error, Debug)]
pub enum DocxAdapterError {
    #[error("IO错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("DOCX打包错误: {0}")]
    Pack(String),

    #[error("无效的配置: {0}")]
    InvalidConfig(String),
}

/// DOCX适配器结果
pub type DocxAdapterResult<T> = Result<T, DocxAdapterError>;

/// DOCX适配器
pub struct DocxAdapter<'a> {
    document: &'a Document,
}

impl<'a> DocxAdapter<'a> {
    /// 创建新的 DOCX 适配器
    pub fn new(document: &'a Document) -> Self {
        DocxAdapter { document }
    }

    /// 创建 docx-rs 文档
    ///
    /// 除最后一节外，每一节的页面设置写在该节末尾段落的 `sectPr` 中；
    /// 最后一节使用文档级页面设置。
    pub fn create_document(&self) -> DocxAdapterResult<Docx> {
        let options = &self.document.options;
        let sections = &options.sections;
        let last = sections
            .last()
            .ok_or_else(|| DocxAdapterError::InvalidConfig("文档没有任何节".to_string()))?;

        let mut docx = Docx::new()
            .custom_property("title", &options.title)
            .custom_property("creator", &options.creator)
            .custom_property("description", &options.description);

        for (index, section) in sections.iter().enumerate() {
            for child in &section.children {
                docx = match child {
                    SectionChild::Paragraph(p) => docx.add_paragraph(to_docx_paragraph(p)),
                    SectionChild::Table(t) => docx.add_table(to_docx_table(t)),
                };
            }

            if index + 1 < sections.len() {
                let mut breaker = to_docx_paragraph(&section_end_paragraph());
                breaker.property.section_property =
                    Some(to_docx_section_property(&section.properties.page));
                docx = docx.add_paragraph(breaker);
            }
        }

        let page = &last.properties.page;
        docx = docx
            .page_size(page.size.width, page.size.height)
            .page_margin(to_docx_page_margin(page));

        tracing::debug!("【create_document】共 {} 节", sections.len());
        Ok(docx)
    }

    /// 写入任意可定位的输出
    pub fn pack<W: Write + Seek>(&self, writer: W) -> DocxAdapterResult<()> {
        self.create_document()?
            .build()
            .pack(writer)
            .map_err(|e| DocxAdapterError::Pack(e.to_string()))?;
        Ok(())
    }

    /// 打包到内存
    pub fn to_bytes(&self) -> DocxAdapterResult<Vec<u8>> {
        let mut cursor = Cursor::new(Vec::new());
        self.pack(&mut cursor)?;
        Ok(cursor.into_inner())
    }

    /// 保存文档，打包成功后才写入文件
    pub fn save(&self, filepath: &str) -> DocxAdapterResult<()> {
        let bytes = self.to_bytes()?;
        fs::write(Path::new(filepath), bytes)?;
        Ok(())
    }

    /// 获取 Base64 编码的文档
    pub fn to_base64(&self) -> DocxAdapterResult<String> {
        Ok(base64::encode(self.to_bytes()?))
    }
}

/// 承载节属性的空段落
fn section_end_paragraph() -> Paragraph {
    Paragraph::new_with_spacing(ParagraphSpacing::new().before(0).after(0))
}

fn to_docx_alignment(alignment: AlignmentType) -> docx_rs::AlignmentType {
    match alignment {
        AlignmentType::Left => docx_rs::AlignmentType::Left,
        AlignmentType::Center => docx_rs::AlignmentType::Center,
        AlignmentType::Right => docx_rs::AlignmentType::Right,
    }
}

fn to_docx_break(break_type: BreakType) -> docx_rs::BreakType {
    match break_type {
        BreakType::TextWrapping => docx_rs::BreakType::TextWrapping,
    }
}

fn to_docx_line_spacing(spacing: &ParagraphSpacing) -> LineSpacing {
    let mut line_spacing = LineSpacing::new();
    if let Some(before) = spacing.before {
        line_spacing = line_spacing.before(before);
    }
    if let Some(after) = spacing.after {
        line_spacing = line_spacing.after(after);
    }
    if let Some(line) = spacing.line {
        line_spacing = line_spacing.line(line);
    }
    if let Some(rule) = spacing.line_rule {
        line_spacing = line_spacing.line_rule(match rule {
            LineRuleType::Auto => LineSpacingType::Auto,
        });
    }
    line_spacing
}

fn to_docx_text_run(run: &TextRun) -> docx_rs::Run {
    let mut docx_run = docx_rs::Run::new().add_text(&run.text);

    if let Some(size) = run.props.size {
        docx_run = docx_run.size(size);
    }

    if let Some(font) = &run.props.font {
        docx_run = docx_run.fonts(RunFonts::new().east_asia(font).ascii(font).hi_ansi(font));
    }

    if let Some(true) = run.props.bold {
        docx_run = docx_run.bold();
    }

    docx_run
}

/// 转换为 docx-rs 的 Run
pub fn to_docx_run(run: &RunType) -> docx_rs::Run {
    match run {
        RunType::Text(text_run) => to_docx_text_run(text_run),
        RunType::Break(break_run) => {
            docx_rs::Run::new().add_break(to_docx_break(break_run.break_type))
        }
    }
}

/// 转换为 docx-rs 的 Paragraph
pub fn to_docx_paragraph(paragraph: &Paragraph) -> docx_rs::Paragraph {
    let mut docx_paragraph = docx_rs::Paragraph::new();

    if let Some(alignment) = paragraph.alignment {
        docx_paragraph = docx_paragraph.align(to_docx_alignment(alignment));
    }

    if let Some(indent) = &paragraph.indent {
        docx_paragraph = docx_paragraph.indent(indent.left, None, indent.right, None);
    }

    if let Some(spacing) = &paragraph.spacing {
        docx_paragraph = docx_paragraph.line_spacing(to_docx_line_spacing(spacing));
    }

    for run in &paragraph.runs {
        docx_paragraph = docx_paragraph.add_run(to_docx_run(run));
    }

    docx_paragraph
}

fn width_parts(width: &TableWidth) -> (usize, docx_rs::WidthType) {
    let width_type = match width.width_type {
        WidthType::DXA => docx_rs::WidthType::Dxa,
    };
    (width.size.max(0) as usize, width_type)
}

fn to_docx_border(position: TableBorderPosition, border: &TableBorder) -> docx_rs::TableBorder {
    let border_type = match border.style {
        BorderStyle::Single => BorderType::Single,
        BorderStyle::None => BorderType::Nil,
    };
    docx_rs::TableBorder::new(position)
        .size(border.size)
        .color(border.color.clone())
        .border_type(border_type)
}

/// 转换为 docx-rs 的 Table
pub fn to_docx_table(table: &Table) -> docx_rs::Table {
    let rows = table.rows.iter().map(to_docx_table_row).collect();
    let mut docx_table = docx_rs::Table::without_borders(rows)
        .layout(TableLayoutType::Fixed)
        .set_grid(table.grid.iter().map(|w| (*w).max(0) as usize).collect());

    if let Some(width) = &table.width {
        let (size, width_type) = width_parts(width);
        docx_table = docx_table.width(size, width_type);
    }

    if let Some(borders) = table.borders.as_ref().filter(|b| !b.is_none()) {
        for (position, border) in [
            (TableBorderPosition::Top, &borders.top),
            (TableBorderPosition::Left, &borders.left),
            (TableBorderPosition::Bottom, &borders.bottom),
            (TableBorderPosition::Right, &borders.right),
            (TableBorderPosition::InsideH, &borders.inside_h),
            (TableBorderPosition::InsideV, &borders.inside_v),
        ] {
            docx_table = docx_table.set_border(to_docx_border(position, border));
        }
    }

    docx_table
}

/// 转换为 docx-rs 的 TableRow
pub fn to_docx_table_row(row: &TableRow) -> docx_rs::TableRow {
    let cells = row.cells.iter().map(to_docx_table_cell).collect();
    let mut docx_row = docx_rs::TableRow::new(cells);

    if let Some(height) = row.height.filter(|h| h.value > 0) {
        docx_row = docx_row.row_height(height.value as f32);
        docx_row = docx_row.height_rule(match height.rule {
            HeightRule::AtLeast => DocxHeightRule::AtLeast,
        });
    }

    docx_row
}

/// 转换为 docx-rs 的 TableCell
pub fn to_docx_table_cell(cell: &TableCell) -> docx_rs::TableCell {
    let mut docx_cell = docx_rs::TableCell::new();

    if let Some(width) = &cell.width {
        let (size, width_type) = width_parts(width);
        docx_cell = docx_cell.width(size, width_type);
    }

    if cell.grid_span > 1 {
        docx_cell = docx_cell.grid_span(cell.grid_span);
    }

    if let Some(align) = cell.vertical_align {
        docx_cell = docx_cell.vertical_align(match align {
            VerticalAlign::Top => VAlignType::Top,
            VerticalAlign::Center => VAlignType::Center,
        });
    }

    for child in &cell.children {
        docx_cell = match child {
            CellChild::Paragraph(p) => docx_cell.add_paragraph(to_docx_paragraph(p)),
            CellChild::Table(t) => docx_cell.add_table(to_docx_table(t)),
        };
    }

    // 单元格必须以段落结尾
    if !matches!(cell.children.last(), Some(CellChild::Paragraph(_))) {
        docx_cell = docx_cell.add_paragraph(to_docx_paragraph(&section_end_paragraph()));
    }

    docx_cell
}

fn to_docx_page_margin(page: &PageProperties) -> docx_rs::PageMargin {
    let margin = &page.margin;
    docx_rs::PageMargin::new()
        .top(margin.top)
        .right(margin.right)
        .bottom(margin.bottom)
        .left(margin.left)
        .header(margin.header)
        .footer(margin.footer)
}

/// 节属性：纸张尺寸 + 页边距
pub fn to_docx_section_property(page: &PageProperties) -> SectionProperty {
    SectionProperty::new()
        .page_size(
            docx_rs::PageSize::new()
                .width(page.size.width)
                .height(page.size.height),
        )
        .page_margin(to_docx_page_margin(page))
}
