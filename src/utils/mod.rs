pub mod date_format;
pub mod log_constants;

pub use date_format::{
    format_date, format_date_for_signature, format_date_range, format_date_with_weekday,
    format_naive_date, parse_date, weekday_name,
};
pub use log_constants::LogConstants;

/// 把文本中不适合出现在文件名里的字符替换为 `_`
pub fn sanitize_file_name_part(text: &str) -> String {
    text.trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}
