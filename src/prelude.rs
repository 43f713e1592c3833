//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use mongodb_connection_string::prelude::*;
//!
//! let cs = ConnectionString::parse("mongodb://localhost/").unwrap();
//! let redacted = redact_model(&cs, &RedactionOptions::default());
//! assert_eq!(redacted, cs);
//! ```

pub use crate::{
    // Core types
    CommaColonRecord, ConnectionString, QueryParams,
    // Options
    ParseOptions, RedactionOptions,
    // Redaction
    redact_model, redact_text,
    // Errors
    ModelError, ParseError, ParseErrorKind,
};
