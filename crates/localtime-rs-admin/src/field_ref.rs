//! Field references in admin layouts.
//!
//! Admin layouts (`readonly_fields`, `list_display`, `fields`, and the fields
//! of each fieldset) hold either a single field name or a group of names that
//! is laid out on one row. [`FieldRef`] models both, and
//! [`FieldRef::substitute`] rewrites a name at any depth while keeping every
//! group's arity and order.
//!
//! On the wire a plain reference is a JSON string and a group is a JSON array:
//!
//! ```
//! use localtime_rs_admin::field_ref::FieldRef;
//!
//! let layout = vec![FieldRef::group(["name", "modified"]), FieldRef::from("created")];
//! assert_eq!(
//!     serde_json::to_string(&layout).unwrap(),
//!     r#"[["name","modified"],"created"]"#
//! );
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single field name, or a group of field references shown on one row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldRef {
    /// A field (or display field) name.
    Plain(String),
    /// Several references laid out together.
    Group(Vec<FieldRef>),
}

impl FieldRef {
    /// Creates a plain reference.
    pub fn plain(name: impl Into<String>) -> Self {
        Self::Plain(name.into())
    }

    /// Creates a group from anything convertible into references.
    pub fn group<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Self>,
    {
        Self::Group(items.into_iter().map(Into::into).collect())
    }

    /// Returns the name if this is a plain reference.
    pub fn as_plain(&self) -> Option<&str> {
        match self {
            Self::Plain(name) => Some(name),
            Self::Group(_) => None,
        }
    }

    /// Returns `true` if this is a group.
    pub const fn is_group(&self) -> bool {
        matches!(self, Self::Group(_))
    }

    /// Returns every name in this reference, depth first.
    pub fn names(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_names(&mut out);
        out
    }

    fn collect_names<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Plain(name) => out.push(name),
            Self::Group(items) => items.iter().for_each(|item| item.collect_names(out)),
        }
    }

    /// Returns `true` if `name` appears anywhere in this reference.
    pub fn contains(&self, name: &str) -> bool {
        match self {
            Self::Plain(own) => own == name,
            Self::Group(items) => items.iter().any(|item| item.contains(name)),
        }
    }

    /// Returns a copy with every occurrence of `from` replaced by `to`.
    ///
    /// Groups are rebuilt with the same length and order; names other than
    /// `from` are kept as they are.
    ///
    /// ```
    /// use localtime_rs_admin::field_ref::FieldRef;
    ///
    /// let row = FieldRef::group(["name", "modified"]);
    /// assert_eq!(
    ///     row.substitute("modified", "modified_local"),
    ///     FieldRef::group(["name", "modified_local"])
    /// );
    /// ```
    #[must_use]
    pub fn substitute(&self, from: &str, to: &str) -> Self {
        match self {
            Self::Plain(name) if name == from => Self::Plain(to.to_string()),
            Self::Plain(_) => self.clone(),
            Self::Group(items) => {
                Self::Group(items.iter().map(|item| item.substitute(from, to)).collect())
            }
        }
    }
}

/// Replaces `from` with `to` in every reference of a layout.
///
/// Returns the number of top-level entries that changed.
pub fn substitute_all(refs: &mut [FieldRef], from: &str, to: &str) -> usize {
    let mut changed = 0;
    for entry in refs.iter_mut() {
        if entry.contains(from) {
            *entry = entry.substitute(from, to);
            changed += 1;
        }
    }
    changed
}

/// Flattens a layout into its names, in layout order.
pub fn flatten(refs: &[FieldRef]) -> Vec<&str> {
    refs.iter().flat_map(FieldRef::names).collect()
}

impl From<&str> for FieldRef {
    fn from(name: &str) -> Self {
        Self::Plain(name.to_string())
    }
}

impl From<String> for FieldRef {
    fn from(name: String) -> Self {
        Self::Plain(name)
    }
}

impl<T: Into<Self>> From<Vec<T>> for FieldRef {
    fn from(items: Vec<T>) -> Self {
        Self::group(items)
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(name) => f.write_str(name),
            Self::Group(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
        }
    }
}
