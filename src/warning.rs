use std::fmt;

/// A recoverable problem found while loading or expanding mixins.
#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    pub message: String,
    pub offset: Option<usize>,
}

impl Warning {
    pub fn new(message: String, offset: Option<usize>) -> Warning {
        Warning { message, offset }
    }

    /// Logs the warning and records it in `sink`.
    pub fn emit(self, sink: &mut Vec<Warning>) {
        warn!("{}", self);
        sink.push(self);
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.offset {
            Some(offset) => write!(f, "{} (at {})", self.message, offset),
            None => write!(f, "{}", self.message),
        }
    }
}
