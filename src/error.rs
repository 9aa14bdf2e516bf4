// Copyright (C) 2020-2026 Andy Kurnia.

pub struct MyError {
    s: String,
}

impl std::fmt::Display for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.s)
    }
}

impl std::fmt::Debug for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (self as &dyn std::fmt::Display).fmt(f)
    }
}

impl std::error::Error for MyError {}

pub fn new(s: String) -> MyError {
    MyError { s }
}

pub type BoxAnyError = Box<dyn std::error::Error + Send + Sync>;
pub type Returns<T> = Result<T, BoxAnyError>;

// Malformed input files. Line numbers are 1-based.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("line {line_num}: expected `<letter> <count> <value>`, got {line:?}")]
    BadLetterLine { line_num: usize, line: String },
    #[error("line {line_num}: {field} is not a number in {line:?}")]
    BadNumber {
        line_num: usize,
        field: &'static str,
        line: String,
    },
    #[error("line {line_num}: letter {letter:?} listed twice")]
    DuplicateLetter { line_num: usize, letter: char },
}

#[macro_export]
macro_rules! return_error {
    ($error:expr) => {
        return Err($crate::error::new($error).into());
    };
}
