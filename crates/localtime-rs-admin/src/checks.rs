//! Admin configuration checks.
//!
//! These run against a registered [`ModelAdmin`] after display fields have
//! been synthesized, and report layout names that resolve to nothing as well
//! as timestamp fields that could not be localized.

use localtime_rs_core::checks::CheckMessage;
use localtime_rs_db::model::ModelMeta;

use crate::field_ref::flatten;
use crate::local_datetime::{alias_collision, local_alias, readonly_timestamps, AliasCollision};
use crate::model_admin::{ModelAdmin, STR_COLUMN};

/// Checks one admin against its record schema.
pub fn check_model_admin(meta: &ModelMeta, admin: &ModelAdmin) -> Vec<CheckMessage> {
    let obj = admin.model_key();
    let known = |name: &str| meta.has_field(name) || admin.display_fields.contains(name);

    let mut messages: Vec<CheckMessage> = flatten(&admin.readonly_fields)
        .into_iter()
        .filter(|name| !known(name))
        .map(|name| {
            CheckMessage::error(
                format!(
                    "The value of 'readonly_fields' refers to '{name}', which is not a field \
                     of '{}' or a display field.",
                    meta.key()
                ),
                None,
                Some(&obj),
                Some("admin.E035"),
            )
        })
        .collect();

    messages.extend(
        flatten(&admin.list_display)
            .into_iter()
            .filter(|name| *name != STR_COLUMN && !known(name))
            .map(|name| {
                CheckMessage::error(
                    format!(
                        "The value of 'list_display' refers to '{name}', which is not a field \
                         of '{}' or a display field.",
                        meta.key()
                    ),
                    None,
                    Some(&obj),
                    Some("admin.E108"),
                )
            }),
    );

    for field in readonly_timestamps(meta, admin) {
        let Some(collision) = alias_collision(meta, admin, field.name) else {
            continue;
        };
        let taken_by = match collision {
            AliasCollision::SchemaField => "a field",
            AliasCollision::DisplayField => "a display field",
        };
        let hint = format!("Rename the existing '{}'.", local_alias(field.name));
        messages.push(CheckMessage::warning(
            format!(
                "'{}' is shown in UTC because '{}' is already {taken_by}.",
                field.name,
                local_alias(field.name)
            ),
            Some(&hint),
            Some(&obj),
            Some("admin.W002"),
        ));
    }

    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::DisplayField;
    use crate::local_datetime::synthesize;
    use crate::render::RenderedValue;
    use localtime_rs_core::checks::CheckLevel;
    use localtime_rs_db::fields::{FieldDef, FieldType};
    use localtime_rs_db::model::Model;

    fn meta() -> ModelMeta {
        ModelMeta::new(
            "shop",
            "Order",
            vec![
                FieldDef::new("id", FieldType::BigAutoField).primary_key(),
                FieldDef::new("placed", FieldType::DateTimeField).auto_now_add(),
                FieldDef::new("shipped", FieldType::DateTimeField).nullable(),
                FieldDef::new("shipped_local", FieldType::CharField),
            ],
        )
    }

    fn ids(messages: &[CheckMessage]) -> Vec<&str> {
        messages.iter().filter_map(|m| m.id.as_deref()).collect()
    }

    #[test]
    fn test_clean_admin_passes() {
        let meta = meta();
        let mut admin = ModelAdmin::for_model(&meta)
            .readonly_fields(vec!["placed"])
            .list_display(vec!["__str__", "placed"]);
        synthesize(&meta, &mut admin);
        assert!(check_model_admin(&meta, &admin).is_empty());
    }

    #[test]
    fn test_unknown_names_are_errors() {
        let meta = meta();
        let admin = ModelAdmin::for_model(&meta)
            .readonly_fields(vec!["bogus"])
            .list_display(vec!["id", "also_bogus"]);
        let messages = check_model_admin(&meta, &admin);
        assert_eq!(ids(&messages), vec!["admin.E035", "admin.E108"]);
        assert!(messages.iter().all(CheckMessage::is_error));
        assert_eq!(messages[0].obj.as_deref(), Some("shop.order"));
        assert!(messages[1].msg.contains("'also_bogus'"));
    }

    #[test]
    fn test_schema_collision_warns() {
        let meta = meta();
        let mut admin = ModelAdmin::for_model(&meta).readonly_fields(vec!["shipped", "placed"]);
        synthesize(&meta, &mut admin);
        let messages = check_model_admin(&meta, &admin);
        assert_eq!(ids(&messages), vec!["admin.W002"]);
        assert_eq!(messages[0].level, CheckLevel::Warning);
        assert!(messages[0].msg.contains("already a field"));
    }

    #[test]
    fn test_display_field_collision_warns() {
        let meta = meta();
        let mut admin = ModelAdmin::for_model(&meta)
            .readonly_fields(vec!["placed"])
            .display(DisplayField::new("placed_local", "custom", |_: &dyn Model| {
                RenderedValue::Never
            }));
        synthesize(&meta, &mut admin);
        let messages = check_model_admin(&meta, &admin);
        assert_eq!(ids(&messages), vec!["admin.W002"]);
        assert!(messages[0].msg.contains("already a display field"));
        assert_eq!(messages[0].hint.as_deref(), Some("Rename the existing 'placed_local'."));
    }
}
