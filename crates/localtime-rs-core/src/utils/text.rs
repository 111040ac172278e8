//! String utility functions.
//!
//! Column headers and verbose names are derived from identifiers with the
//! same rules the host admin uses, so headers line up whether a column is a
//! schema field or a synthesized display field.

/// Capitalizes the first character of a string.
///
/// # Examples
///
/// ```
/// use localtime_rs_core::utils::text::capfirst;
///
/// assert_eq!(capfirst("modified"), "Modified");
/// assert_eq!(capfirst(""), "");
/// assert_eq!(capfirst("ÉTÉ"), "ÉTÉ");
/// ```
pub fn capfirst(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |c| {
        let mut result = c.to_uppercase().to_string();
        result.extend(chars);
        result
    })
}

/// Turns an identifier into a human-readable label.
///
/// Underscores become spaces and the first character is capitalized.
///
/// ```
/// use localtime_rs_core::utils::text::pretty_name;
///
/// assert_eq!(pretty_name("created_at"), "Created at");
/// ```
pub fn pretty_name(name: &str) -> String {
    capfirst(&name.replace('_', " "))
}

/// Splits a `CamelCase` type name into lowercase words.
///
/// An uppercase letter starts a new word when it follows a lowercase letter,
/// or when it is followed by a lowercase letter (so acronyms stay together).
///
/// ```
/// use localtime_rs_core::utils::text::camel_case_to_spaces;
///
/// assert_eq!(camel_case_to_spaces("AModel1"), "a model1");
/// assert_eq!(camel_case_to_spaces("HTTPRequestLog"), "http request log");
/// ```
pub fn camel_case_to_spaces(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let after_lower = i > 0 && chars[i - 1].is_lowercase();
            let before_lower = chars.get(i + 1).is_some_and(|next| !next.is_uppercase());
            if after_lower || before_lower {
                result.push(' ');
            }
        }
        result.extend(c.to_lowercase());
    }
    result.trim().to_string()
}
