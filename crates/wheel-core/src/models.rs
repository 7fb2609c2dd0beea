//! Wheel Models
//!
//! An entry on the wheel: a display name plus the link opened for it.

use serde::{Deserialize, Serialize};

const HTTP_PREFIX: &str = "http://";
const HTTPS_PREFIX: &str = "https://";

/// A named entry with an absolute link.
///
/// Identity is positional: an item is addressed by its index in the wheel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Trimmed, non-empty display name
    pub name: String,
    /// Absolute URL, always carrying a scheme
    pub link: String,
}

impl Item {
    /// Build an item from raw form input.
    ///
    /// Returns `None` when the name or the link is blank after trimming.
    pub fn new(name: &str, link: &str) -> Option<Self> {
        let name = name.trim();
        let link = link.trim();
        if name.is_empty() || link.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            link: normalize_link(link),
        })
    }
}

/// Prefix `https://` unless the link already starts with an http(s) scheme.
pub fn normalize_link(link: &str) -> String {
    let link = link.trim();
    if link.starts_with(HTTP_PREFIX) || link.starts_with(HTTPS_PREFIX) {
        link.to_string()
    } else {
        format!("{}{}", HTTPS_PREFIX, link)
    }
}
