//! 排版树
//!
//! 与具体 OOXML 库无关的文档模型：文档 → 节 → 段落/表格 → 文本运行。
//! 所有长度单位均为 twip（1/20 磅），字号单位为半磅。

pub mod tree;

pub use tree::{
    BreakRun, CellChild, Document, DocumentOptions, DocxStats, PageMargin, PageProperties,
    PageSize, Paragraph, ParagraphIndent, ParagraphSpacing, RowHeight, RunType, Section,
    SectionChild, SectionProperties, SectionStats, Table, TableBorder, TableBorders, TableCell,
    TableRow, TableShape, TableWidth, TextRun,
};

/// 对齐方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentType {
    /// 左对齐
    Left,
    /// 居中对齐
    Center,
    /// 右对齐
    Right,
}

/// 换行符类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakType {
    /// 段内软换行
    TextWrapping,
}

/// 单元格垂直对齐
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    Center,
}

/// 行高规则
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeightRule {
    /// 至少值，内容多时行高随之增长
    AtLeast,
}

/// 行距规则
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRuleType {
    Auto,
}

/// 宽度类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthType {
    /// DXA（twip）
    DXA,
}

/// 边框线型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
    Single,
    None,
}

/// 文本运行属性
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunProps {
    /// 字号（半磅）
    pub size: Option<usize>,
    pub font: Option<String>,
    pub bold: Option<bool>,
}

impl RunProps {
    /// 创建新的运行属性
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置字体大小
    pub fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    /// 设置字体
    pub fn font(mut self, font: &str) -> Self {
        self.font = Some(font.to_string());
        self
    }

    /// 设置粗体
    pub fn bold(mut self) -> Self {
        self.bold = Some(true);
        self
    }
}
