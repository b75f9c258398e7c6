pub mod count_word_frequencies;
pub mod derive_name;
pub mod read_text_document;
pub mod sort_word_frequencies;

pub use count_word_frequencies::count_word_frequencies;
pub use derive_name::derive_name;
pub use read_text_document::{read_text_document, read_text_from_reader};
pub use sort_word_frequencies::sort_word_frequencies;
