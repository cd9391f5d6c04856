pub mod content_page;
pub mod cover_page;
pub mod docx_adapter;
pub mod docx_maker;
pub mod layout;
pub mod line_processor;
pub mod primitives;

// 从 docx_maker 导出
pub use docx_maker::{
    batch_cover_context, build_batch_document, build_single_document, finish_doc,
    generate_batch, generate_single, get_docx_base64, log_date_range, save_doc, DocxAsBase64,
    DocxError, DocxResult, ExportMode,
};

// 从 docx_adapter 导出
pub use docx_adapter::{DocxAdapter, DocxAdapterError, DocxAdapterResult};

pub use content_page::build_content_section;
pub use cover_page::build_cover_section;
pub use layout::{Document, DocxStats};
pub use line_processor::process_text_lines;
