//! 文档树节点
//!
//! 节点只描述版式，不依赖任何 OOXML 库；序列化由 `docx_adapter` 完成。

use super::{
    AlignmentType, BorderStyle, BreakType, HeightRule, LineRuleType, RunProps, VerticalAlign,
    WidthType,
};

/// 段落间距
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParagraphSpacing {
    pub before: Option<u32>,
    pub after: Option<u32>,
    pub line: Option<i32>,
    pub line_rule: Option<LineRuleType>,
}

impl ParagraphSpacing {
    /// 创建新的段落间距
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置段前间距（twips）
    pub fn before(mut self, before: u32) -> Self {
        self.before = Some(before);
        self
    }

    /// 设置段后间距（twips）
    pub fn after(mut self, after: u32) -> Self {
        self.after = Some(after);
        self
    }

    /// 设置行间距（240 为单倍行距）
    pub fn line(mut self, line: i32) -> Self {
        self.line = Some(line);
        self
    }

    /// 设置行间距规则
    pub fn line_rule(mut self, line_rule: LineRuleType) -> Self {
        self.line_rule = Some(line_rule);
        self
    }
}

/// 段落缩进
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParagraphIndent {
    pub left: Option<i32>,
    pub right: Option<i32>,
}

/// 段落
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    pub runs: Vec<RunType>,
    pub alignment: Option<AlignmentType>,
    pub indent: Option<ParagraphIndent>,
    pub spacing: Option<ParagraphSpacing>,
}

impl Paragraph {
    /// 创建新的段落
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_with_spacing(spacing: ParagraphSpacing) -> Self {
        Self {
            spacing: Some(spacing),
            ..Self::default()
        }
    }

    /// 添加文本运行
    pub fn add_text_run(&mut self, run: TextRun) -> &mut Self {
        self.runs.push(RunType::Text(run));
        self
    }

    /// 添加换行运行
    pub fn add_break_run(&mut self, run: BreakRun) -> &mut Self {
        self.runs.push(RunType::Break(run));
        self
    }

    /// 批量添加运行
    pub fn add_runs(&mut self, runs: Vec<RunType>) -> &mut Self {
        self.runs.extend(runs);
        self
    }

    /// 设置对齐方式
    pub fn align(&mut self, alignment: AlignmentType) -> &mut Self {
        self.alignment = Some(alignment);
        self
    }

    /// 设置缩进（只设置左缩进）
    pub fn indent(&mut self, left_indent: i32) -> &mut Self {
        match self.indent {
            Some(ref mut indent) => indent.left = Some(left_indent),
            None => {
                self.indent = Some(ParagraphIndent {
                    left: Some(left_indent),
                    right: None,
                })
            }
        }
        self
    }

    /// 文本运行个数
    pub fn text_run_count(&self) -> usize {
        self.runs
            .iter()
            .filter(|run| matches!(run, RunType::Text(_)))
            .count()
    }

    /// 换行运行个数
    pub fn break_count(&self) -> usize {
        self.runs
            .iter()
            .filter(|run| matches!(run, RunType::Break(_)))
            .count()
    }

    /// 拼接段落纯文本，换行运行输出为 `\n`
    pub fn text(&self) -> String {
        let mut buffer = String::new();
        for run in &self.runs {
            match run {
                RunType::Text(text_run) => buffer.push_str(&text_run.text),
                RunType::Break(_) => buffer.push('\n'),
            }
        }
        buffer
    }
}

/// 运行类型枚举
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunType {
    Text(TextRun),
    Break(BreakRun),
}

/// 文本运行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub props: RunProps,
}

impl TextRun {
    /// 创建新的文本运行
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            props: RunProps::default(),
        }
    }

    /// 使用指定的属性创建新的文本运行
    pub fn with_props(text: &str, props: RunProps) -> Self {
        Self {
            text: text.to_string(),
            props,
        }
    }
}

/// 换行运行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakRun {
    pub break_type: BreakType,
}

impl BreakRun {
    pub fn new(break_type: BreakType) -> Self {
        Self { break_type }
    }

    /// 软换行（段内换行）
    pub fn line() -> Self {
        Self::new(BreakType::TextWrapping)
    }
}

/// 表格宽度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableWidth {
    pub size: i32,
    pub width_type: WidthType,
}

impl TableWidth {
    /// 创建新的表格宽度
    pub fn new(size: i32, width_type: WidthType) -> Self {
        Self { size, width_type }
    }

    pub fn dxa(size: i32) -> Self {
        Self::new(size, WidthType::DXA)
    }
}

/// 表格边框
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBorder {
    /// 线宽（1/8 磅）
    pub size: usize,
    pub color: String,
    pub style: BorderStyle,
}

impl TableBorder {
    /// 创建新的表格边框
    pub fn new(size: usize, color: &str, style: BorderStyle) -> Self {
        Self {
            size,
            color: color.to_string(),
            style,
        }
    }

    pub fn none() -> Self {
        Self::new(0, "auto", BorderStyle::None)
    }
}

/// 表格边框组
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBorders {
    pub top: TableBorder,
    pub bottom: TableBorder,
    pub left: TableBorder,
    pub right: TableBorder,
    pub inside_h: TableBorder,
    pub inside_v: TableBorder,
}

impl TableBorders {
    /// 四周及内部网格线均为同一单线
    pub fn single(size: usize, color: &str) -> Self {
        let border = TableBorder::new(size, color, BorderStyle::Single);
        Self {
            top: border.clone(),
            bottom: border.clone(),
            left: border.clone(),
            right: border.clone(),
            inside_h: border.clone(),
            inside_v: border,
        }
    }

    /// 完全无边框
    pub fn none() -> Self {
        Self {
            top: TableBorder::none(),
            bottom: TableBorder::none(),
            left: TableBorder::none(),
            right: TableBorder::none(),
            inside_h: TableBorder::none(),
            inside_v: TableBorder::none(),
        }
    }

    pub fn is_none(&self) -> bool {
        [
            &self.top,
            &self.bottom,
            &self.left,
            &self.right,
            &self.inside_h,
            &self.inside_v,
        ]
        .iter()
        .all(|b| b.style == BorderStyle::None)
    }
}

/// 行高
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowHeight {
    pub value: u32,
    pub rule: HeightRule,
}

impl RowHeight {
    pub fn at_least(value: u32) -> Self {
        Self {
            value,
            rule: HeightRule::AtLeast,
        }
    }
}

/// 单元格内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellChild {
    Paragraph(Paragraph),
    Table(Table),
}

/// 表格单元格
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell {
    pub width: Option<TableWidth>,
    /// 物理网格跨度，由表格网格解析得出
    pub grid_span: usize,
    pub vertical_align: Option<VerticalAlign>,
    pub children: Vec<CellChild>,
}

impl Default for TableCell {
    fn default() -> Self {
        Self {
            width: None,
            grid_span: 1,
            vertical_align: None,
            children: Vec::new(),
        }
    }
}

impl TableCell {
    /// 创建新的表格单元格
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置宽度
    pub fn width(&mut self, width: TableWidth) -> &mut Self {
        self.width = Some(width);
        self
    }

    pub fn vertical_align(&mut self, align: VerticalAlign) -> &mut Self {
        self.vertical_align = Some(align);
        self
    }

    /// 添加段落
    pub fn add_paragraph(&mut self, paragraph: Paragraph) -> &mut Self {
        self.children.push(CellChild::Paragraph(paragraph));
        self
    }

    /// 添加嵌套表格
    pub fn add_table(&mut self, table: Table) -> &mut Self {
        self.children.push(CellChild::Table(table));
        self
    }

    /// 宽度（twip），未设置时为 0
    pub fn width_twips(&self) -> i32 {
        self.width.map(|w| w.size).unwrap_or(0)
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.children.iter().filter_map(|child| match child {
            CellChild::Paragraph(p) => Some(p),
            CellChild::Table(_) => None,
        })
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.children.iter().filter_map(|child| match child {
            CellChild::Table(t) => Some(t),
            CellChild::Paragraph(_) => None,
        })
    }

    /// 单元格内段落文本，段落之间以 `\n` 分隔
    pub fn text(&self) -> String {
        self.paragraphs()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// 表格行
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
    pub height: Option<RowHeight>,
}

impl TableRow {
    /// 创建新的表格行
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加单元格
    pub fn add_cell(&mut self, cell: TableCell) -> &mut Self {
        self.cells.push(cell);
        self
    }

    pub fn height(&mut self, height: RowHeight) -> &mut Self {
        self.height = Some(height);
        self
    }

    /// 行内单元格宽度之和
    pub fn total_width(&self) -> i32 {
        self.cells.iter().map(TableCell::width_twips).sum()
    }
}

/// 表格
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<TableRow>,
    pub width: Option<TableWidth>,
    pub borders: Option<TableBorders>,
    /// 物理网格列宽（twip）
    pub grid: Vec<i32>,
}

impl Table {
    /// 创建新的表格
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加行
    pub fn add_row(&mut self, row: TableRow) -> &mut Self {
        self.rows.push(row);
        self
    }

    pub fn width(&mut self, width: TableWidth) -> &mut Self {
        self.width = Some(width);
        self
    }

    /// 设置边框
    pub fn borders(&mut self, borders: TableBorders) -> &mut Self {
        self.borders = Some(borders);
        self
    }

    pub fn grid(&mut self, grid: Vec<i32>) -> &mut Self {
        self.grid = grid;
        self
    }

    pub fn shape(&self) -> TableShape {
        TableShape {
            rows: self.rows.len(),
            cells_per_row: self.rows.iter().map(|r| r.cells.len()).collect(),
            grid: self.grid.clone(),
            nested_tables: self
                .rows
                .iter()
                .flat_map(|r| r.cells.iter())
                .map(|c| c.tables().count())
                .sum(),
        }
    }
}

/// 页面大小
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize {
    pub width: u32,
    pub height: u32,
}

/// 页面边距
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMargin {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
    pub header: i32,
    pub footer: i32,
}

/// 页面属性
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageProperties {
    pub size: PageSize,
    pub margin: PageMargin,
}

/// 节属性
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionProperties {
    pub page: PageProperties,
}

/// 节子元素
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionChild {
    Paragraph(Paragraph),
    Table(Table),
}

/// 节：每一节独占一页，拥有独立的纸张和边距设置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub properties: SectionProperties,
    pub children: Vec<SectionChild>,
}

impl Section {
    /// 创建新的节
    pub fn new(page: PageProperties) -> Self {
        Self {
            properties: SectionProperties { page },
            children: Vec::new(),
        }
    }

    pub fn add_paragraph(&mut self, paragraph: Paragraph) -> &mut Self {
        self.children.push(SectionChild::Paragraph(paragraph));
        self
    }

    pub fn add_table(&mut self, table: Table) -> &mut Self {
        self.children.push(SectionChild::Table(table));
        self
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.children.iter().filter_map(|child| match child {
            SectionChild::Table(t) => Some(t),
            SectionChild::Paragraph(_) => None,
        })
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.children.iter().filter_map(|child| match child {
            SectionChild::Paragraph(p) => Some(p),
            SectionChild::Table(_) => None,
        })
    }
}

/// 文档选项
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentOptions {
    pub creator: String,
    pub description: String,
    pub title: String,
    pub sections: Vec<Section>,
}

/// 文档
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub options: DocumentOptions,
}

impl Document {
    /// 创建新的文档
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_section(&mut self, section: Section) -> &mut Self {
        self.options.sections.push(section);
        self
    }

    pub fn sections(&self) -> &[Section] {
        &self.options.sections
    }

    /// 结构统计，用于比较两次导出的版式是否一致
    pub fn stats(&self) -> DocxStats {
        DocxStats {
            section_count: self.options.sections.len(),
            sections: self
                .options
                .sections
                .iter()
                .map(|section| SectionStats {
                    page: section.properties.page,
                    paragraphs: section.paragraphs().count(),
                    tables: section.tables().map(Table::shape).collect(),
                })
                .collect(),
        }
    }
}

/// 表格形状
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableShape {
    pub rows: usize,
    pub cells_per_row: Vec<usize>,
    pub grid: Vec<i32>,
    pub nested_tables: usize,
}

/// 单节统计
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionStats {
    pub page: PageProperties,
    pub paragraphs: usize,
    pub tables: Vec<TableShape>,
}

/// DOCX 统计信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocxStats {
    pub section_count: usize,
    pub sections: Vec<SectionStats>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraph_text_renders_breaks_as_newlines() {
        let mut p = Paragraph::new();
        p.add_text_run(TextRun::new("第一行"))
            .add_break_run(BreakRun::line())
            .add_text_run(TextRun::new("第二行"));
        assert_eq!(p.text(), "第一行\n第二行");
        assert_eq!(p.text_run_count(), 2);
        assert_eq!(p.break_count(), 1);
    }

    #[test]
    fn borders_none_is_detected() {
        assert!(TableBorders::none().is_none());
        assert!(!TableBorders::single(8, "000000").is_none());
    }

    #[test]
    fn stats_count_sections_and_tables() {
        let page = PageProperties {
            size: PageSize { width: 100, height: 200 },
            margin: PageMargin { top: 1, right: 1, bottom: 1, left: 1, header: 0, footer: 0 },
        };
        let mut row = TableRow::new();
        row.add_cell(TableCell::new());
        let mut table = Table::new();
        table.add_row(row);

        let mut section = Section::new(page);
        section.add_paragraph(Paragraph::new()).add_table(table);

        let mut doc = Document::new();
        doc.add_section(section.clone()).add_section(section);

        let stats = doc.stats();
        assert_eq!(stats.section_count, 2);
        assert_eq!(stats.sections[0].paragraphs, 1);
        assert_eq!(stats.sections[1].tables[0].cells_per_row, vec![1]);
    }
}
