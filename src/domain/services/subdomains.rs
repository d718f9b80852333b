//! Validation and normalisation rules for tenant subdomains and icons.
//!
//! These functions are pure and total: malformed input yields `false` (or an
//! empty string from the sanitizer), never a panic or an error.

use std::str::FromStr;

use unicode_properties::UnicodeEmoji;

pub const MAX_ICON_CHARS: usize = 10;
pub const MAX_SUBDOMAIN_LEN: usize = 63;

/// How strictly icons are checked.
///
/// `Lenient` is a degraded mode that accepts any 1..=10 character string. It is
/// not a security boundary and exists only for deployments that cannot rely
/// on emoji classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconValidation {
    #[default]
    Emoji,
    Lenient,
}

impl FromStr for IconValidation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "emoji" => Ok(IconValidation::Emoji),
            "lenient" => Ok(IconValidation::Lenient),
            other => Err(format!("unknown icon validation mode: {}", other)),
        }
    }
}

/// Icon lengths are counted in `char`s, so a single pictograph outside the
/// BMP counts once.
pub fn is_valid_icon(input: &str, mode: IconValidation) -> bool {
    let len = input.chars().count();
    if len > MAX_ICON_CHARS {
        return false;
    }

    match mode {
        IconValidation::Emoji => input.chars().any(|c| c.is_emoji_char()),
        IconValidation::Lenient => len >= 1,
    }
}

fn is_label_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'
}

/// Accepts a single DNS label: 1 to 63 characters of `[a-z0-9-]`, not starting
/// or ending with a hyphen. Matching is case-insensitive.
pub fn is_valid_subdomain(input: &str) -> bool {
    let label = input.to_lowercase();
    let len = label.chars().count();

    (1..=MAX_SUBDOMAIN_LEN).contains(&len)
        && label.chars().all(is_label_char)
        && !label.starts_with('-')
        && !label.ends_with('-')
}

/// Lowercases and strips every character outside `[a-z0-9-]`.
///
/// The result is not re-checked for length or hyphen placement, so callers
/// must run [`is_valid_subdomain`] on the raw input first.
pub fn sanitize_subdomain(input: &str) -> String {
    input.to_lowercase().chars().filter(|c| is_label_char(*c)).collect()
}

/// Pulls the tenant label out of a `Host` header value.
///
/// Ports are ignored on both sides and matching is case-insensitive. Returns
/// `None` for the bare root domain, `www`, nested labels and foreign hosts.
pub fn subdomain_from_host(host: &str, root_domain: &str) -> Option<String> {
    let hostname = strip_port(host).trim_end_matches('.').to_lowercase();
    let root = strip_port(root_domain).to_lowercase();

    let label = hostname.strip_suffix(&root)?.strip_suffix('.')?;
    if label.is_empty() || label == "www" || label.contains('.') {
        return None;
    }

    Some(label.to_string())
}

fn strip_port(host: &str) -> &str {
    match host.rsplit_once(':') {
        Some((name, port)) if port.chars().all(|c| c.is_ascii_digit()) => name,
        _ => host,
    }
}
