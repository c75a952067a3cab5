//! Utility modules

pub mod file_validation;
pub mod text;

pub use text::{fold_char, is_word_char};

pub use file_validation::{
    filename_for_display, is_likely_binary, validate_file_for_opening, FileOpenError, MAX_FILE_SIZE,
};
