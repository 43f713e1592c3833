//! Error types for connection string parsing and mutation.

use std::fmt;

/// Errors that can occur when parsing a connection string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(input: &str, kind: ParseErrorKind) -> Self {
        Self {
            input: input.to_string(),
            kind,
        }
    }

    /// Returns the specific error kind.
    #[must_use]
    pub const fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}

/// Specific parsing error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input does not start with `mongodb://` or `mongodb+srv://`
    InvalidScheme {
        /// The scheme that was found, if any
        found: Option<String>,
    },
    /// Input does not match the connection string grammar
    MalformedString,
    /// Scheme or host list is empty
    ///
    /// Kept for parity with the driver error set; the scheme check and the
    /// scanner reject such input first, so parsing does not produce it.
    MissingProtocolOrHosts,
    /// Username or password is not valid percent-encoded text
    InvalidPercentEncoding {
        /// Which credential failed to decode
        component: &'static str,
    },
    /// Username or password contains a character that must be escaped
    IllegalCharacterInCredentials {
        /// Which credential holds the character
        component: &'static str,
        /// The offending character
        char: char,
    },
    /// A userinfo separator is present without a username
    EmptyUserinfoSection,
    /// An SRV connection string lists more than one host
    MultipleHostsWithSrv {
        /// Number of hosts found
        count: usize,
    },
    /// An SRV connection string host carries a port
    PortWithSrv {
        /// The offending host
        host: String,
    },
    /// The URL parser rejected the path, query, or fragment
    InvalidUrl {
        /// Reason reported by the URL parser
        reason: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid connection string '{}': ", self.input)?;
        match &self.kind {
            ParseErrorKind::InvalidScheme { found } => match found {
                Some(s) => write!(
                    f,
                    "expected scheme 'mongodb://' or 'mongodb+srv://', found '{s}'"
                ),
                None => write!(
                    f,
                    "missing scheme; expected 'mongodb://' or 'mongodb+srv://'"
                ),
            },
            ParseErrorKind::MalformedString => write!(f, "does not match connection string grammar"),
            ParseErrorKind::MissingProtocolOrHosts => {
                write!(f, "protocol and host list are required")
            }
            ParseErrorKind::InvalidPercentEncoding { component } => {
                write!(f, "{component} is not valid percent-encoded text")
            }
            ParseErrorKind::IllegalCharacterInCredentials { component, char } => {
                write!(f, "{component} contains unescaped character '{char}'")
            }
            ParseErrorKind::EmptyUserinfoSection => write!(f, "URI contained empty userinfo section"),
            ParseErrorKind::MultipleHostsWithSrv { count } => write!(
                f,
                "mongodb+srv URI cannot have multiple service names (found {count})"
            ),
            ParseErrorKind::PortWithSrv { host } => {
                write!(f, "mongodb+srv URI cannot have port number (host '{host}')")
            }
            ParseErrorKind::InvalidUrl { reason } => write!(f, "{reason}"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors raised when mutating a parsed connection string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The accessor has no meaning for a multi-host connection string
    UnsupportedOperation {
        /// Name of the rejected operation
        operation: &'static str,
    },
    /// A host token contains the reserved placeholder hostname
    PlaceholderCollision {
        /// The offending host token
        host: String,
    },
    /// The URL layer refused the value
    InvalidComponent {
        /// Component being set
        component: &'static str,
        /// The rejected value
        value: String,
    },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedOperation { operation } => write!(
                f,
                "'{operation}' is not supported; a connection string has no single host"
            ),
            Self::PlaceholderCollision { host } => {
                write!(f, "host '{host}' contains a reserved placeholder name")
            }
            Self::InvalidComponent { component, value } => {
                write!(f, "cannot set {component} to '{value}'")
            }
        }
    }
}

impl std::error::Error for ModelError {}
