//! Field metadata lookup.
//!
//! Admin layouts may name things that are not schema fields: display fields,
//! `"__str__"`, or aliases synthesized by an earlier pass. [`resolve`] answers
//! with [`FieldLookup::NotFound`] for those instead of failing, so callers can
//! simply skip them.

use localtime_rs_db::fields::FieldDef;
use localtime_rs_db::model::ModelMeta;

/// The result of looking a name up in a record schema.
#[derive(Debug, Clone, Copy)]
pub enum FieldLookup<'a> {
    /// The name is a declared field.
    Found(&'a FieldDef),
    /// The name is not a declared field.
    NotFound,
}

impl<'a> FieldLookup<'a> {
    /// Returns the field descriptor, if found.
    pub const fn field(self) -> Option<&'a FieldDef> {
        match self {
            Self::Found(field) => Some(field),
            Self::NotFound => None,
        }
    }

    /// Returns the field descriptor only when it is timestamp-typed.
    pub const fn timestamp(self) -> Option<&'a FieldDef> {
        match self {
            Self::Found(field) if field.is_timestamp() => Some(field),
            _ => None,
        }
    }

    /// Returns `true` if the name is a declared field.
    pub const fn is_found(self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Looks up `name` among the fields declared on `meta`.
///
/// ```
/// use localtime_rs_admin::resolver::resolve;
/// use localtime_rs_db::fields::{FieldDef, FieldType};
/// use localtime_rs_db::model::ModelMeta;
///
/// let meta = ModelMeta::new("shop", "Order", vec![
///     FieldDef::new("placed", FieldType::DateTimeField),
///     FieldDef::new("note", FieldType::TextField),
/// ]);
/// assert!(resolve(&meta, "placed").timestamp().is_some());
/// assert!(resolve(&meta, "note").timestamp().is_none());
/// assert!(!resolve(&meta, "placed_local").is_found());
/// ```
pub fn resolve<'a>(meta: &'a ModelMeta, name: &str) -> FieldLookup<'a> {
    meta.get_field(name)
        .map_or(FieldLookup::NotFound, FieldLookup::Found)
}
