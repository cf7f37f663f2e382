mod entry;
mod value;

pub use entry::{LanguageTable, TranslationEntry};
pub use value::Value;
