use std::error;
use std::fmt;
use std::io;
use std::result;

pub type Result<T> = result::Result<T, CssError>;

#[derive(Debug, PartialEq)]
pub struct CssError {
    pub message: String,
    pub kind: ErrorKind,
    pub offset: usize,
}

impl fmt::Display for CssError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} at {}: {}", self.kind, self.offset, self.message)
    }
}

impl error::Error for CssError {}

impl From<io::Error> for CssError {
    fn from(err: io::Error) -> CssError {
        CssError {
            offset: 0,
            message: err.to_string(),
            kind: ErrorKind::IoError,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorKind {
    IoError,
    InvalidOutputStyle,
    InvalidConfig,
    TokenizerError,
    ParserError,
    UnexpectedEof,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_displays_kind_offset_and_message() {
        let err = CssError {
            message: String::from("Expected to see `:`, instead saw `;`."),
            kind: ErrorKind::ParserError,
            offset: 12,
        };
        assert_eq!(
            err.to_string(),
            "ParserError at 12: Expected to see `:`, instead saw `;`."
        );
    }

    #[test]
    fn it_converts_io_errors() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let err: CssError = io_err.into();
        assert_eq!(err.kind, ErrorKind::IoError);
        assert_eq!(err.offset, 0);
        assert_eq!(err.message, "no such file");
    }
}
