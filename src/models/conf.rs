use serde::{Deserialize, Serialize};

use crate::docx::{DocxError, DocxResult};

/// A4 纸张宽度（twip）
pub const A4_WIDTH: u32 = 11906;
/// A4 纸张高度（twip）
pub const A4_HEIGHT: u32 = 16838;

/// 页面边距（twip）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
    pub header: i32,
    pub footer: i32,
}

impl Default for Margins {
    fn default() -> Self {
        Margins {
            top: 1440,
            right: 1440,
            bottom: 1440,
            left: 1440,
            header: 851,
            footer: 992,
        }
    }
}

/// 页面配置：纸张尺寸 + 边距
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageProfile {
    pub width: u32,
    pub height: u32,
    pub margins: Margins,
}

impl Default for PageProfile {
    fn default() -> Self {
        Self::cover()
    }
}

impl PageProfile {
    /// 封面页：上下右 1 英寸，左 1.2 英寸
    pub fn cover() -> Self {
        Self {
            width: A4_WIDTH,
            height: A4_HEIGHT,
            margins: Margins {
                left: 1728,
                ..Margins::default()
            },
        }
    }

    /// 内容页：上下 0.5 英寸，左右 0.6 英寸
    pub fn content() -> Self {
        Self {
            width: A4_WIDTH,
            height: A4_HEIGHT,
            margins: Margins {
                top: 720,
                right: 864,
                bottom: 720,
                left: 864,
                header: 425,
                footer: 425,
            },
        }
    }

    /// 版心宽度
    pub fn inner_width(&self) -> i32 {
        self.width as i32 - self.margins.left - self.margins.right
    }
}

/// 全局排版常量，注入到每一个排版原语
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConstants {
    /// 字体名称
    pub font: String,
    /// 正文字号（半磅，21 = 五号 10.5 磅）
    pub base_size: usize,
    /// 封面大标题字号（半磅）
    pub cover_title_size: usize,
    /// 内容页页眉标题字号（半磅）
    pub page_heading_size: usize,
    /// 表格边框宽度（1/8 磅）
    pub border_size: usize,
    pub border_color: String,
    /// 单元格段落段前段后间距（twip）
    pub cell_spacing: u32,
    /// 封面"附录11-5表"一行的段后间距（twip）
    pub appendix_after: u32,
    /// 竖排标签每个字的段前段后间距（twip）
    pub vertical_label_spacing: u32,
    /// 长文本段落段前段后间距（twip）
    pub content_spacing: u32,
    /// 长文本行距（240 = 单倍）
    pub content_line: i32,
    /// 长文本左缩进（twip）
    pub content_indent: i32,
}

impl Default for StyleConstants {
    fn default() -> Self {
        Self {
            font: "宋体".to_string(),
            base_size: 21,
            cover_title_size: 72,
            page_heading_size: 28,
            border_size: 8,
            border_color: "000000".to_string(),
            cell_spacing: 40,
            appendix_after: 120,
            vertical_label_spacing: 60,
            content_spacing: 100,
            content_line: 360,
            content_indent: 200,
        }
    }
}

/// 封面表格列宽与行高（twip）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverLayout {
    pub label: i32,
    pub value: i32,
    pub row_height: u32,
    pub title_row_height: u32,
}

impl Default for CoverLayout {
    fn default() -> Self {
        Self {
            label: 2400,
            value: 2000,
            row_height: 500,
            title_row_height: 8000,
        }
    }
}

impl CoverLayout {
    /// 表格总宽：两组"标签 + 值"
    pub fn table_width(&self) -> i32 {
        (self.label + self.value) * 2
    }
}

/// 内容页表格列宽与行高（twip）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentLayout {
    pub label: i32,
    pub value: i32,
    pub code_value: i32,
    /// 竖排标签栏
    pub label_vertical: i32,
    pub sign_label: i32,
    pub recorder_value: i32,
    pub reviewer_value: i32,
    /// 签名子表格中日期一栏的宽度
    pub sign_date: i32,
    pub header_row_height: u32,
    pub row_height: u32,
    pub narrative_row_height: u32,
    pub sign_row_height: u32,
}

impl Default for ContentLayout {
    fn default() -> Self {
        Self {
            label: 1600,
            value: 3600,
            code_value: 3000,
            label_vertical: 600,
            sign_label: 1000,
            recorder_value: 4000,
            reviewer_value: 3800,
            sign_date: 2200,
            header_row_height: 450,
            row_height: 400,
            narrative_row_height: 3800,
            sign_row_height: 500,
        }
    }
}

impl ContentLayout {
    pub fn table_width(&self) -> i32 {
        self.label * 2 + self.value + self.code_value
    }
}

/// 导出配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConf {
    pub creator: String,
    pub title: String,
    pub style: StyleConstants,
    pub cover: PageProfile,
    pub content: PageProfile,
    pub cover_layout: CoverLayout,
    pub content_layout: ContentLayout,
}

impl Default for ExportConf {
    fn default() -> Self {
        ExportConf {
            creator: "监理日志系统".to_string(),
            title: "监理日志".to_string(),
            style: StyleConstants::default(),
            cover: PageProfile::cover(),
            content: PageProfile::content(),
            cover_layout: CoverLayout::default(),
            content_layout: ContentLayout::default(),
        }
    }
}

impl ExportConf {
    /// 从 JSON 覆盖默认配置，未给出的字段保持默认值
    pub fn from_json_str(json: &str) -> DocxResult<Self> {
        let conf: ExportConf = serde_json::from_str(json)?;
        conf.validate()?;
        Ok(conf)
    }

    /// 检查列宽能否排出合法的表格
    ///
    /// 所有列宽必须为正；由列宽推导出的单元格宽度也必须为正。
    pub fn validate(&self) -> DocxResult<()> {
        let cover = &self.cover_layout;
        let content = &self.content_layout;

        for (name, width) in [
            ("cover_layout.label", cover.label),
            ("cover_layout.value", cover.value),
            ("content_layout.label", content.label),
            ("content_layout.value", content.value),
            ("content_layout.code_value", content.code_value),
            ("content_layout.label_vertical", content.label_vertical),
            ("content_layout.sign_label", content.sign_label),
            ("content_layout.recorder_value", content.recorder_value),
            ("content_layout.reviewer_value", content.reviewer_value),
            ("content_layout.sign_date", content.sign_date),
        ] {
            if width <= 0 {
                return Err(invalid(format!("{} 必须大于 0，实际为 {}", name, width)));
            }
        }

        if content.label_vertical >= content.table_width() {
            return Err(invalid(format!(
                "content_layout.label_vertical {} 不小于表格宽度 {}",
                content.label_vertical,
                content.table_width()
            )));
        }

        for (name, width) in [
            ("recorder_value", content.recorder_value),
            ("reviewer_value", content.reviewer_value),
        ] {
            if content.sign_date >= width {
                return Err(invalid(format!(
                    "content_layout.sign_date {} 不小于 {} {}",
                    content.sign_date, name, width
                )));
            }
        }

        for (name, page) in [("cover", &self.cover), ("content", &self.content)] {
            if page.inner_width() <= 0 {
                return Err(invalid(format!("{} 页面边距超出纸张宽度", name)));
            }
        }
        Ok(())
    }
}

fn invalid(message: String) -> DocxError {
    tracing::warn!("【validate】{}", message);
    DocxError::InvalidConfig(message)
}
