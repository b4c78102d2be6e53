use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid code point {0}")]
    InvalidCodePoint(String),

    #[error("invalid code point range {0}")]
    InvalidRange(String),

    #[error("invalid number of fields {actual} (expected {expected})")]
    FieldCountMismatch { expected: usize, actual: usize },

    #[error("invalid First line")]
    InvalidFirstLine,

    #[error("invalid Last line")]
    InvalidLastLine,

    #[error("<{name}, First> is not closed by a matching Last line")]
    UnclosedFirstMarker { name: String },

    #[error("invalid test line: {0}")]
    InvalidTestLine(String),

    #[error("{0} is not supported")]
    Unsupported(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{source_name}:{line_number}: {source}")]
    Located {
        source_name: String,
        line_number: usize,
        source: Box<Error>,
    },
}

impl Error {
    /// Attach a source name and 1-based line number to an error.
    pub(crate) fn at(self, source_name: &str, line_number: usize) -> Self {
        Self::Located {
            source_name: source_name.to_string(),
            line_number,
            source: Box::new(self),
        }
    }

    /// The 1-based line number the error was reported at, if any.
    pub fn line_number(&self) -> Option<usize> {
        match self {
            Self::Located { line_number, .. } => Some(*line_number),
            _ => None,
        }
    }

    /// The innermost error, with location wrappers removed.
    pub fn root(&self) -> &Error {
        match self {
            Self::Located { source, .. } => source.root(),
            _ => self,
        }
    }
}

pub(crate) fn unsupported<T>(what: &'static str) -> crate::Result<T> {
    Err(Error::Unsupported(what))
}
