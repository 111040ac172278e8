//! HTML escaping and safe strings.
//!
//! Display callables return markup; [`SafeString`] marks text that has already
//! been escaped so the list and detail views can emit it verbatim, while plain
//! `String`s are escaped with [`escape_html`] before they reach the page.

use std::fmt;

use serde::{Serialize, Serializer};

/// A string that is known to be safe for direct inclusion in HTML.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SafeString(String);

impl SafeString {
    /// Wraps markup without escaping it.
    ///
    /// The caller is responsible for having escaped every interpolated value.
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// Escapes plain text, producing a safe string.
    pub fn escaped(text: &str) -> Self {
        Self(escape_html(text))
    }

    /// Returns the markup.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the markup, consuming the wrapper.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SafeString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SafeString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for SafeString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Marks a string as safe, bypassing HTML escaping.
pub fn mark_safe(markup: impl Into<String>) -> SafeString {
    SafeString::new(markup)
}

/// Escapes HTML special characters in a string.
///
/// Replaces `&`, `<`, `>`, `"`, and `'` with their HTML entity equivalents.
///
/// # Examples
///
/// ```
/// use localtime_rs_core::html::escape_html;
///
/// assert_eq!(escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
///     "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;");
/// ```
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Renders a `<span>` with the given class, `data-*` attributes, and text.
///
/// Every attribute value and the text content are escaped.
///
/// ```
/// use localtime_rs_core::html::span;
///
/// let html = span("local-datetime", &[("iso", "2024-06-10T08:36:00Z")], "June 10");
/// assert_eq!(
///     html.as_str(),
///     r#"<span class="local-datetime" data-iso="2024-06-10T08:36:00Z">June 10</span>"#
/// );
/// ```
pub fn span(class: &str, data: &[(&str, &str)], text: &str) -> SafeString {
    let mut markup = format!(r#"<span class="{}""#, escape_html(class));
    for (name, value) in data {
        markup.push_str(&format!(
            r#" data-{}="{}""#,
            escape_html(name),
            escape_html(value)
        ));
    }
    markup.push('>');
    markup.push_str(&escape_html(text));
    markup.push_str("</span>");
    SafeString(markup)
}
