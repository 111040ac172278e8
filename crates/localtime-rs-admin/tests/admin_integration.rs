//! Integration tests for registering record types with localized timestamp
//! fields: layout rewriting, rendering through the registered display fields,
//! list rows, and admin checks.

use std::sync::LazyLock;

use chrono::{DateTime, TimeZone, Utc};

use localtime_rs_admin::field_ref::FieldRef;
use localtime_rs_admin::local_datetime::synthesize;
use localtime_rs_admin::model_admin::{Fieldset, ModelAdmin};
use localtime_rs_admin::render::RenderedValue;
use localtime_rs_admin::site::AdminSite;
use localtime_rs_core::i18n::{self, timezone};
use localtime_rs_db::fields::{FieldDef, FieldType};
use localtime_rs_db::model::{Model, ModelMeta};
use localtime_rs_db::value::Value;

// ── Helpers ─────────────────────────────────────────────────────────

static DOC_META: LazyLock<ModelMeta> = LazyLock::new(|| {
    ModelMeta::new(
        "library",
        "Document",
        vec![
            FieldDef::new("id", FieldType::BigAutoField).primary_key(),
            FieldDef::new("name", FieldType::CharField).max_length(100),
            FieldDef::new("summary", FieldType::TextField).nullable(),
            FieldDef::new("modified", FieldType::DateTimeField)
                .auto_now()
                .nullable(),
            FieldDef::new("created", FieldType::DateTimeField).auto_now_add(),
        ],
    )
});

struct Document {
    id: i64,
    name: &'static str,
    modified: Option<DateTime<Utc>>,
    created: DateTime<Utc>,
}

impl Model for Document {
    fn meta() -> &'static ModelMeta {
        &DOC_META
    }

    fn object_name(&self) -> &'static str {
        Self::meta().object_name
    }

    fn field_values(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", Value::Int(self.id)),
            ("name", Value::from(self.name)),
            ("summary", Value::Null),
            ("modified", Value::from(self.modified)),
            ("created", Value::from(self.created)),
        ]
    }
}

fn reset_locale() {
    i18n::deactivate();
    timezone::deactivate_timezone();
}

fn instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 10, 8, 36, 0).unwrap()
}

fn document(modified: Option<DateTime<Utc>>) -> Document {
    Document {
        id: 3,
        name: "minutes",
        modified,
        created: instant(),
    }
}

fn scenario_admin() -> ModelAdmin {
    ModelAdmin::for_model(&DOC_META)
        .readonly_fields(vec!["modified", "created"])
        .list_display(vec!["name", "modified"])
        .fields(vec![FieldRef::group(["name", "modified"]), FieldRef::from("created")])
}

fn registered(admin: ModelAdmin) -> AdminSite {
    let mut site = AdminSite::new("admin");
    site.register::<Document>(admin).unwrap();
    site
}

// ═════════════════════════════════════════════════════════════════════
// 1. End-to-end registration
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_end_to_end_layouts() {
    let site = registered(scenario_admin());
    let admin = site.get_model_admin("library.document").unwrap();

    assert_eq!(
        admin.readonly_fields,
        vec![FieldRef::from("modified_local"), FieldRef::from("created_local")]
    );
    assert_eq!(
        admin.list_display,
        vec![FieldRef::from("name"), FieldRef::from("modified_local")]
    );
    assert_eq!(
        admin.fields,
        Some(vec![
            FieldRef::group(["name", "modified_local"]),
            FieldRef::from("created_local"),
        ])
    );
    assert_eq!(admin.display_fields.names(), vec!["modified_local", "created_local"]);
}

#[test]
fn test_end_to_end_renderers_read_original_fields() {
    reset_locale();
    let site = registered(scenario_admin());
    let admin = site.get_model_admin("library.document").unwrap();
    let modified = instant() + chrono::Duration::hours(2);
    let record = document(Some(modified));

    let rendered = admin.display_fields.get("modified_local").unwrap().render(&record);
    assert_eq!(rendered.iso(), Some("2024-06-10T10:36:00Z"));

    let rendered = admin.display_fields.get("created_local").unwrap().render(&record);
    assert_eq!(rendered.iso(), Some("2024-06-10T08:36:00Z"));
}

// ═════════════════════════════════════════════════════════════════════
// 2. Layout properties
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_synthesize_is_idempotent() {
    let mut admin = scenario_admin();
    synthesize(&DOC_META, &mut admin);
    let first = serde_json::to_value(&admin).unwrap();

    assert!(synthesize(&DOC_META, &mut admin).is_empty());
    assert_eq!(serde_json::to_value(&admin).unwrap(), first);
    assert_eq!(admin.display_fields.len(), 2);
}

#[test]
fn test_no_layout_mentions_original_names() {
    let mut admin = scenario_admin().fieldsets(vec![
        Fieldset::new(vec!["name"]).name("General"),
        Fieldset::new(vec![FieldRef::group(["created", "modified"])])
            .name("History")
            .classes(vec!["collapse"]),
    ]);
    synthesize(&DOC_META, &mut admin);

    let mut layouts = vec![&admin.readonly_fields, &admin.list_display];
    layouts.extend(admin.fields.as_ref());
    let fieldsets = admin.fieldsets.as_ref().unwrap();
    layouts.extend(fieldsets.iter().map(|fs| &fs.fields));

    for layout in layouts {
        for entry in layout {
            assert!(!entry.contains("modified"), "{entry} still refers to modified");
            assert!(!entry.contains("created"), "{entry} still refers to created");
        }
    }
    assert_eq!(
        fieldsets[1].fields,
        vec![FieldRef::group(["created_local", "modified_local"])]
    );
    assert_eq!(fieldsets[1].name.as_deref(), Some("History"));
}

#[test]
fn test_non_timestamps_and_unknown_names_unchanged() {
    let mut admin = ModelAdmin::for_model(&DOC_META)
        .readonly_fields(vec!["name", "ghost", "modified"])
        .list_display(vec!["__str__", "summary", "ghost"])
        .fields(vec![FieldRef::group(["name", "ghost", "summary"])]);
    let before = admin.clone();
    synthesize(&DOC_META, &mut admin);

    assert_eq!(
        admin.readonly_fields,
        vec![
            FieldRef::from("name"),
            FieldRef::from("ghost"),
            FieldRef::from("modified_local"),
        ]
    );
    assert_eq!(admin.list_display, before.list_display);
    assert_eq!(admin.fields, before.fields);
}

#[test]
fn test_group_keeps_order_and_arity() {
    let mut admin = ModelAdmin::for_model(&DOC_META)
        .readonly_fields(vec!["modified"])
        .fields(vec![FieldRef::group(["name", "modified", "summary"])]);
    synthesize(&DOC_META, &mut admin);
    assert_eq!(
        admin.fields,
        Some(vec![FieldRef::group(["name", "modified_local", "summary"])])
    );
}

#[test]
fn test_sort_key_is_original_field() {
    let site = registered(scenario_admin());
    let admin = site.get_model_admin("library.document").unwrap();
    let meta = site.get_meta("library.document").unwrap();

    assert_eq!(admin.sort_field("modified_local", meta).as_deref(), Some("modified"));
    assert_eq!(admin.sort_field("created_local", meta).as_deref(), Some("created"));
    let columns = admin.columns(meta);
    assert_eq!(columns[1].header, "Modified");
    assert_eq!(columns[1].sort_field.as_deref(), Some("modified"));
}

// ═════════════════════════════════════════════════════════════════════
// 3. Rendering through the list view
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_list_row_renders_span_and_never() {
    reset_locale();
    let site = registered(scenario_admin());
    let admin = site.get_model_admin("library.document").unwrap();

    let row = admin.render_row(&document(Some(instant())));
    assert_eq!(row[0].value.as_str(), "minutes");
    assert!(row[0].is_link);
    assert_eq!(
        row[1].value.as_str(),
        r#"<span class="local-datetime" data-iso="2024-06-10T08:36:00Z">June 10, 2024, 8:36 a.m.</span>"#
    );

    let row = admin.render_row(&document(None));
    assert_eq!(row[1].value.as_str(), "never");
    assert!(!row[1].value.as_str().contains("data-iso"));
}

#[test]
fn test_rendering_follows_active_locale() {
    reset_locale();
    let site = registered(scenario_admin());
    let admin = site.get_model_admin("library.document").unwrap();
    let record = document(Some(instant()));
    let field = admin.display_fields.get("modified_local").unwrap();

    i18n::activate("fr");
    timezone::activate_timezone(2 * 3600);
    let rendered = field.render(&record);
    reset_locale();

    match rendered {
        RenderedValue::Instant { iso, display } => {
            assert_eq!(iso, "2024-06-10T08:36:00Z");
            assert_eq!(display, "10 juin 2024 10:36");
        }
        other => panic!("expected an instant, got {other:?}"),
    }
}

#[test]
fn test_display_value_for_null_schema_field() {
    let site = registered(scenario_admin().empty_value_display("(empty)"));
    let admin = site.get_model_admin("library.document").unwrap();
    let value = admin.display_value("summary", &document(None)).unwrap();
    assert_eq!(value.as_str(), "(empty)");
}

// ═════════════════════════════════════════════════════════════════════
// 4. Checks
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_site_check_reports_collisions() {
    static CLASH_META: LazyLock<ModelMeta> = LazyLock::new(|| {
        ModelMeta::new(
            "library",
            "Loan",
            vec![
                FieldDef::new("id", FieldType::BigAutoField).primary_key(),
                FieldDef::new("due", FieldType::DateTimeField),
                FieldDef::new("due_local", FieldType::CharField).max_length(40),
            ],
        )
    });

    let mut site = registered(scenario_admin());
    site.register_meta(
        &CLASH_META,
        ModelAdmin::for_model(&CLASH_META)
            .readonly_fields(vec!["due"])
            .list_display(vec!["due"]),
    )
    .unwrap();

    let admin = site.get_model_admin("library.loan").unwrap();
    assert_eq!(admin.list_display, vec![FieldRef::from("due")]);
    assert!(admin.display_fields.is_empty());

    let messages = site.check();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].id.as_deref(), Some("admin.W002"));
    assert_eq!(messages[0].obj.as_deref(), Some("library.loan"));
}

#[test]
fn test_layout_serializes_for_frontend() {
    let site = registered(scenario_admin());
    let admin = site.get_model_admin("library.document").unwrap();
    let json = serde_json::to_value(admin).unwrap();

    assert_eq!(json["fields"], serde_json::json!([["name", "modified_local"], "created_local"]));
    assert_eq!(json["display_fields"][0]["ordering"], "modified");
    assert_eq!(json["display_fields"][1]["description"], "created");
}
