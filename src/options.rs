//! Options controlling parsing and redaction.

/// Options for [`ConnectionString::parse_with`](crate::ConnectionString::parse_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ParseOptions {
    /// Skip every check that is not part of the grammar itself.
    ///
    /// With loose validation any scheme is accepted and credentials, empty
    /// userinfo, and SRV host constraints are not checked. Used to reparse
    /// strings produced by an already valid, possibly mutated, connection
    /// string.
    ///
    /// Default: false
    pub loose_validation: bool,
}

impl ParseOptions {
    /// Creates options with strict validation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options with loose validation.
    #[must_use]
    pub const fn loose() -> Self {
        Self {
            loose_validation: true,
        }
    }

    /// Enables or disables loose validation.
    #[must_use]
    pub const fn with_loose_validation(mut self, loose: bool) -> Self {
        self.loose_validation = loose;
        self
    }
}

/// Options for [`redact_model`](crate::redact_model) and
/// [`redact_text`](crate::redact_text).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct RedactionOptions {
    /// Whether usernames (userinfo and `proxyUsername`) are redacted along
    /// with passwords.
    ///
    /// Default: true
    pub redact_usernames: bool,

    /// Text written in place of each redacted value.
    ///
    /// `None` selects the entry point's own default: `"_credentials_"` for
    /// [`redact_model`](crate::redact_model) and `"<credentials>"` for
    /// [`redact_text`](crate::redact_text).
    ///
    /// Default: None
    #[cfg_attr(feature = "serde", serde(rename = "replacementString"))]
    pub replacement: Option<String>,
}

impl Default for RedactionOptions {
    fn default() -> Self {
        Self {
            redact_usernames: true,
            replacement: None,
        }
    }
}

impl RedactionOptions {
    /// Creates options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables username redaction.
    #[must_use]
    pub const fn with_redact_usernames(mut self, redact: bool) -> Self {
        self.redact_usernames = redact;
        self
    }

    /// Sets the replacement text.
    #[must_use]
    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacement = Some(replacement.into());
        self
    }

    pub(crate) fn replacement_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.replacement.as_deref().unwrap_or(default)
    }
}
