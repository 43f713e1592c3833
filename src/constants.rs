//! Constants for connection string parsing and redaction.

/// The standard connection string scheme.
pub const SCHEME: &str = "mongodb";

/// The DNS seed list scheme.
pub const SRV_SCHEME: &str = "mongodb+srv";

/// Substring of a scheme that marks it as the SRV variant.
pub const SRV_MARKER: &str = "srv";

/// Separator between the scheme and the authority.
pub const SCHEME_SEPARATOR: &str = "://";

/// Reserved hostname substituted for the host list before the remainder is
/// handed to the URL parser.
pub const PLACEHOLDER_HOST: &str = "__this_is_a_placeholder__";

/// Characters that must be percent-encoded in a username or password.
pub const ILLEGAL_USERINFO_CHARS: &[char] = &[':', '/', '?', '#', '[', ']', '@'];

/// Replacement used by [`redact_text`](crate::redact_text) when none is given.
pub const DEFAULT_REPLACEMENT: &str = "<credentials>";

/// Replacement used by [`redact_model`](crate::redact_model) when none is given.
pub const STRUCTURED_REPLACEMENT: &str = "_credentials_";

/// Internal stand-in written during structured redaction of text input and
/// swapped for the caller's replacement after serialization.
pub const REDACTION_SENTINEL: &str = "___credentials___";

/// Query option carrying authentication mechanism properties.
pub const AUTH_MECHANISM_PROPERTIES: &str = "authMechanismProperties";

/// Key inside `authMechanismProperties` holding an AWS session token.
pub const AWS_SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";

/// Query option holding the TLS client key password.
pub const TLS_CERTIFICATE_KEY_FILE_PASSWORD: &str = "tlsCertificateKeyFilePassword";

/// Query option holding the proxy username.
pub const PROXY_USERNAME: &str = "proxyUsername";

/// Query option holding the proxy password.
pub const PROXY_PASSWORD: &str = "proxyPassword";
