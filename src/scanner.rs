//! Splits a raw connection string into its top-level regions.
//!
//! The grammar is
//!
//! ```text
//! scheme "://" [ username [ ":" password ] "@" ] hosts rest
//! ```
//!
//! where `hosts` is a run of characters other than `/`, `?` and `@` that does
//! not start with `:`, and `rest` is everything after it. The username runs up
//! to the first `:` at most. Candidate splits are tried in this order:
//!
//! 1. username before the first `:`, password up to the next `@`;
//! 2. username up to an `@` before the first `:`, rightmost `@` first;
//! 3. no userinfo at all.
//!
//! The first candidate followed by a non-empty host run wins.

use crate::constants::{ILLEGAL_USERINFO_CHARS, SCHEME_SEPARATOR};

/// The four regions of a connection string, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Components<'a> {
    pub scheme: &'a str,
    pub username: Option<&'a str>,
    pub password: Option<&'a str>,
    pub hosts: &'a str,
    pub rest: &'a str,
}

/// Decomposes `input`, returning `None` if it does not fit the grammar.
pub(crate) fn decompose(input: &str) -> Option<Components<'_>> {
    let (scheme, authority) = input.split_once(SCHEME_SEPARATOR)?;
    let (username, password, host_start) = split_userinfo(authority)?;
    let host_end = host_run(authority, host_start)?;

    Some(Components {
        scheme,
        username,
        password,
        hosts: &authority[host_start..host_end],
        rest: &authority[host_end..],
    })
}

type Userinfo<'a> = (Option<&'a str>, Option<&'a str>, usize);

fn split_userinfo(authority: &str) -> Option<Userinfo<'_>> {
    let colon = authority.find(':');

    if let Some(colon) = colon {
        let after_colon = colon + 1;
        if let Some(at) = authority[after_colon..].find('@').map(|i| after_colon + i) {
            if host_run(authority, at + 1).is_some() {
                return Some((
                    Some(&authority[..colon]),
                    Some(&authority[after_colon..at]),
                    at + 1,
                ));
            }
        }
    }

    let username_limit = colon.unwrap_or(authority.len());
    for (at, _) in authority[..username_limit].rmatch_indices('@') {
        if host_run(authority, at + 1).is_some() {
            return Some((Some(&authority[..at]), None, at + 1));
        }
    }

    host_run(authority, 0).map(|_| (None, None, 0))
}

/// Returns the end of the host run starting at `start`, if it is non-empty.
fn host_run(authority: &str, start: usize) -> Option<usize> {
    let tail = authority.get(start..)?;
    if tail.starts_with(':') {
        return None;
    }
    let len = tail.find(['/', '?', '@']).unwrap_or(tail.len());
    (len > 0).then_some(start + len)
}

/// Percent-decodes `input`, failing on malformed escapes or invalid UTF-8.
pub(crate) fn percent_decode(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes.get(i + 1..i + 3)?;
            if !hex.iter().all(u8::is_ascii_hexdigit) {
                return None;
            }
            let hex = std::str::from_utf8(hex).ok()?;
            decoded.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            decoded.push(bytes[i]);
            i += 1;
        }
    }

    String::from_utf8(decoded).ok()
}

/// Returns the first character that must be escaped in userinfo, if any.
pub(crate) fn illegal_userinfo_char(input: &str) -> Option<char> {
    input.chars().find(|c| ILLEGAL_USERINFO_CHARS.contains(c))
}
