//! Slug sanitization.
//!
//! Slugs become filename components directly, so this is the single
//! validation boundary that keeps path traversal out of the store.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SlugError {
    #[error("Invalid slug: no usable characters after sanitization")]
    InvalidSlug,
}

/// Filter a slug down to `[a-zA-Z0-9-_]`.
///
/// Everything else is dropped, not replaced. An input that reduces to the
/// empty string is rejected.
///
/// # Examples
///
/// ```
/// use mdstudio_core::slug::sanitize_slug;
///
/// assert_eq!(sanitize_slug("getting-started").unwrap(), "getting-started");
/// assert_eq!(sanitize_slug("../etc/passwd").unwrap(), "etcpasswd");
/// assert!(sanitize_slug("***").is_err());
/// ```
pub fn sanitize_slug(input: &str) -> Result<String, SlugError> {
    let safe: String = input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();

    if safe.is_empty() {
        return Err(SlugError::InvalidSlug);
    }

    Ok(safe)
}
