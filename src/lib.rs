//! Parser, mutable model, and credential redaction for MongoDB connection
//! strings.
//!
//! # Overview
//!
//! Connection strings look like URLs but may name several hosts at once:
//!
//! ```text
//! mongodb[+srv]://[username[:password]@]host[,host...][/path][?query][#fragment]
//! ```
//!
//! A general-purpose URL parser cannot hold a host list, so
//! [`ConnectionString`] keeps the hosts separately and lets the `url` crate
//! handle everything else. Query options are matched case-insensitively, as
//! MongoDB drivers do.
//!
//! # Quick Start
//!
//! ```rust
//! use mongodb_connection_string::ConnectionString;
//!
//! let mut cs = ConnectionString::parse(
//!     "mongodb://admin:pw@db1:27017,db2:27017/app?replicaSet=rs0"
//! ).unwrap();
//!
//! assert_eq!(cs.hosts(), ["db1:27017", "db2:27017"]);
//! assert_eq!(cs.path(), "/app");
//! assert_eq!(cs.query().get("replicaset"), Some("rs0"));
//!
//! cs.query_mut().set("appName", "reporting");
//! assert_eq!(
//!     cs.to_string(),
//!     "mongodb://admin:pw@db1:27017,db2:27017/app?replicaSet=rs0&appName=reporting"
//! );
//! ```
//!
//! # Redaction
//!
//! [`redact_text`] scrubs credentials from any string and never fails, which
//! makes it safe to call on untrusted input before logging it:
//!
//! ```rust
//! use mongodb_connection_string::{redact_text, RedactionOptions};
//!
//! let redacted = redact_text(
//!     "mongodb://admin:pw@host/?tlsCertificateKeyFilePassword=secret",
//!     &RedactionOptions::default(),
//! );
//! assert_eq!(
//!     redacted,
//!     "mongodb://<credentials>@host/?tlsCertificateKeyFilePassword=<credentials>"
//! );
//! ```
//!
//! # Validation
//!
//! | Check | Strict | Loose |
//! |-------|--------|-------|
//! | Scheme is `mongodb` or `mongodb+srv` | yes | no |
//! | Grammar (scheme, host list, remainder) | yes | yes |
//! | Credentials percent-encoded, no reserved characters | yes | no |
//! | No empty userinfo section | yes | no |
//! | SRV: exactly one host, no port | yes | no |

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod case_fold;
mod connection_string;
mod constants;
mod error;
mod options;
pub mod prelude;
mod query;
mod record;
mod redact;
mod scanner;

pub use connection_string::ConnectionString;
pub use constants::{
    AUTH_MECHANISM_PROPERTIES, AWS_SESSION_TOKEN, DEFAULT_REPLACEMENT, ILLEGAL_USERINFO_CHARS,
    PLACEHOLDER_HOST, PROXY_PASSWORD, PROXY_USERNAME, REDACTION_SENTINEL, SCHEME,
    SCHEME_SEPARATOR, SRV_MARKER, SRV_SCHEME, STRUCTURED_REPLACEMENT,
    TLS_CERTIFICATE_KEY_FILE_PASSWORD,
};
pub use error::{ModelError, ParseError, ParseErrorKind};
pub use options::{ParseOptions, RedactionOptions};
pub use query::QueryParams;
pub use record::CommaColonRecord;
pub use redact::{redact_model, redact_text};
