pub mod field_aliases;
pub mod field_normalizer;

pub use field_aliases::FIELD_ALIASES;
pub use field_normalizer::{normalize_map, normalize_record, normalize_records};
