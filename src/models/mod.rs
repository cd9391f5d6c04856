pub mod conf;
pub mod log_record;

pub use conf::{
    ContentLayout, CoverLayout, ExportConf, Margins, PageProfile, StyleConstants, A4_HEIGHT,
    A4_WIDTH,
};
pub use log_record::{CoverContext, CoverOverride, LogRecord};
