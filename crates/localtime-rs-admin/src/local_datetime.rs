//! Localized timestamp display fields.
//!
//! [`synthesize`] walks the read-only fields of a [`ModelAdmin`], and for every
//! one that is a timestamp in the record schema it
//!
//! 1. registers a display field named `<field>_local` that renders the stored
//!    value with [`render_local_datetime`], sorts by the original field, and
//!    uses the field's verbose name as its header;
//! 2. rewrites `readonly_fields`, `list_display`, `fields` and every fieldset
//!    so they refer to `<field>_local` instead, keeping positions and groups.
//!
//! Running it again is a no-op, since `<field>_local` is not a schema field.
//!
//! ```
//! use localtime_rs_admin::field_ref::FieldRef;
//! use localtime_rs_admin::local_datetime::synthesize;
//! use localtime_rs_admin::model_admin::ModelAdmin;
//! use localtime_rs_db::fields::{FieldDef, FieldType};
//! use localtime_rs_db::model::ModelMeta;
//!
//! let meta = ModelMeta::new("shop", "Order", vec![
//!     FieldDef::new("id", FieldType::BigAutoField).primary_key(),
//!     FieldDef::new("placed", FieldType::DateTimeField).auto_now_add(),
//! ]);
//! let mut admin = ModelAdmin::for_model(&meta)
//!     .readonly_fields(vec!["placed"])
//!     .list_display(vec!["id", "placed"]);
//!
//! assert_eq!(synthesize(&meta, &mut admin), vec!["placed_local"]);
//! assert_eq!(admin.list_display, vec![FieldRef::from("id"), FieldRef::from("placed_local")]);
//! assert_eq!(admin.sort_field("placed_local", &meta).as_deref(), Some("placed"));
//! ```

use tracing::{debug, warn};

use localtime_rs_db::fields::FieldDef;
use localtime_rs_db::model::{Model, ModelMeta};

use crate::display::DisplayField;
use crate::field_ref::{substitute_all, FieldRef};
use crate::model_admin::ModelAdmin;
use crate::render::render_local_datetime;
use crate::resolver::resolve;

/// Appended to a timestamp field's name to form its display field name.
pub const LOCAL_SUFFIX: &str = "_local";

/// Returns the display field name for a timestamp field.
pub fn local_alias(field: &str) -> String {
    format!("{field}{LOCAL_SUFFIX}")
}

/// Why a timestamp field was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasCollision {
    /// The schema already declares a field with the alias name.
    SchemaField,
    /// The admin already has a display field with the alias name.
    DisplayField,
}

/// Checks whether `<field>_local` is already taken on this admin.
pub fn alias_collision(meta: &ModelMeta, admin: &ModelAdmin, field: &str) -> Option<AliasCollision> {
    let alias = local_alias(field);
    if meta.has_field(&alias) {
        Some(AliasCollision::SchemaField)
    } else if admin.display_fields.contains(&alias) {
        Some(AliasCollision::DisplayField)
    } else {
        None
    }
}

/// Returns the plain read-only entries that are timestamps, in declared order.
pub(crate) fn readonly_timestamps<'m>(meta: &'m ModelMeta, admin: &ModelAdmin) -> Vec<&'m FieldDef> {
    admin
        .readonly_fields
        .iter()
        .filter_map(FieldRef::as_plain)
        .filter_map(|name| resolve(meta, name).timestamp())
        .collect()
}

/// Adds a localized display field for every read-only timestamp field and
/// points every layout at it.
///
/// Returns the display field names added by this call, in the order of
/// `readonly_fields`. Only plain `readonly_fields` entries are considered.
pub fn synthesize(meta: &ModelMeta, admin: &mut ModelAdmin) -> Vec<String> {
    let mut added = Vec::new();

    for field in readonly_timestamps(meta, admin) {
        let alias = local_alias(field.name);
        if added.contains(&alias) {
            continue;
        }

        if let Some(collision) = alias_collision(meta, admin, field.name) {
            warn!(
                field = field.name,
                alias = %alias,
                ?collision,
                "Display name already taken; leaving timestamp field unlocalized"
            );
            continue;
        }

        let source = field.name.to_string();
        admin.display_fields.insert(
            DisplayField::new(alias.clone(), field.verbose_name.clone(), move |record: &dyn Model| {
                render_local_datetime(record.field_value(&source).as_ref())
            })
            .ordering(field.name),
        );

        let rewritten = replace_everywhere(admin, field.name, &alias);
        debug!(field = field.name, alias = %alias, rewritten, "Localized timestamp field");
        added.push(alias);
    }

    added
}

/// Rewrites every layout of `admin`. Returns the number of entries changed.
fn replace_everywhere(admin: &mut ModelAdmin, from: &str, to: &str) -> usize {
    let mut changed = substitute_all(&mut admin.readonly_fields, from, to);
    changed += substitute_all(&mut admin.list_display, from, to);
    if let Some(fields) = admin.fields.as_mut() {
        changed += substitute_all(fields, from, to);
    }
    if let Some(fieldsets) = admin.fieldsets.as_mut() {
        for fieldset in fieldsets {
            changed += substitute_all(&mut fieldset.fields, from, to);
        }
    }
    changed
}

impl ModelAdmin {
    /// Runs [`synthesize`] and returns the admin, for builder chains.
    #[must_use]
    pub fn with_local_datetimes(mut self, meta: &ModelMeta) -> Self {
        synthesize(meta, &mut self);
        self
    }
}
