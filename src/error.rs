//! Error types.

use std::fmt;

use thiserror::Error;

/// Result alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfError>;

/// Errors produced while parsing or mutating a configuration.
#[derive(Debug, Error)]
pub enum ConfError {
    /// A token is not a valid IPv4/IPv6 literal.
    #[error("malformed IP address {0:?}")]
    MalformedAddress(String),

    /// A sortlist netmask is not a valid IPv4/IPv6 literal.
    #[error("malformed netmask {0:?}")]
    MalformedNetmask(String),

    /// The first token of a line is not a recognized keyword.
    #[error("unknown keyword {0:?}")]
    UnknownKeyword(String),

    /// An option token is not in the recognized set.
    #[error("unknown option {0:?}")]
    UnknownOption(String),

    /// A valued option's suffix is not a non-negative integer.
    #[error("option {option:?} has malformed value {value:?}")]
    MalformedOptionValue {
        /// The option name.
        option: String,
        /// The offending value text.
        value: String,
    },

    /// A keyword line is missing its required argument.
    #[error("keyword {0:?} requires an argument")]
    MissingArgument(&'static str),

    /// A per-kind count or aggregate-length limit would be exceeded.
    #[error("too many {kind} entries, maximum is {limit}")]
    CapacityExceeded {
        /// What ran out of room (e.g. "nameserver", "search domain chars").
        kind: &'static str,
        /// The limit that would be exceeded.
        limit: usize,
    },

    /// An item with the same identity already exists.
    #[error("{kind} {item} already exists")]
    DuplicateItem {
        /// The item kind name.
        kind: &'static str,
        /// The rendered item.
        item: String,
    },

    /// A flag option of this kind is already set.
    #[error("option {0} is already present")]
    AlreadyPresent(String),

    /// An option was constructed with an incoherent kind/value combination.
    #[error("invalid value for option {option}: {reason}")]
    InvalidValue {
        /// The option name.
        option: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },

    /// A remove or lookup target does not exist.
    #[error("{kind} {item} not found")]
    NotFound {
        /// The item kind name.
        kind: &'static str,
        /// The rendered item.
        item: String,
    },

    /// Reading the input stream failed. Fatal for the whole read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A collection of [`ConfError`]s accumulated over a batch operation.
///
/// Batch adds, removes and document reads never abort on the first faulty
/// item or line; each failure is collected here and the remaining input is
/// still processed.
#[derive(Debug, Default)]
pub struct Errors(Vec<ConfError>);

impl Errors {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends one error.
    pub fn push(&mut self, err: ConfError) {
        self.0.push(err);
    }

    /// Returns `true` if no errors were collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of collected errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the collected errors.
    pub fn iter(&self) -> std::slice::Iter<'_, ConfError> {
        self.0.iter()
    }

    /// Converts into `Err(self)` if any error was collected.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one error was collected.
    pub fn into_result(self) -> std::result::Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_slice() {
            [] => f.write_str("no errors"),
            [single] => single.fmt(f),
            many => {
                write!(f, "{} errors occurred:", many.len())?;
                for err in many {
                    write!(f, " [{err}]")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for Errors {}

impl Extend<ConfError> for Errors {
    fn extend<T: IntoIterator<Item = ConfError>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Errors {
    type Item = ConfError;
    type IntoIter = std::vec::IntoIter<ConfError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a ConfError;
    type IntoIter = std::slice::Iter<'a, ConfError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
