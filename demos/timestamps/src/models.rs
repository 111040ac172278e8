//! Demo record types: `AModel1` through `AModel5`.
//!
//! Each has a name, a description, and a pair of timestamps that the
//! host would fill in on save (`modified<N>` on every save, `created<N>`
//! on insert only). Unsaved records have neither.

use std::sync::LazyLock;

use chrono::{DateTime, Duration, TimeZone, Utc};

use localtime_rs_db::fields::{FieldDef, FieldType};
use localtime_rs_db::model::{Model, ModelMeta};
use localtime_rs_db::value::Value;

macro_rules! timestamped_model {
    ($name:ident, $meta:ident, $modified:literal, $created:literal) => {
        #[doc = concat!("A record with `", $modified, "` and `", $created, "` timestamps.")]
        #[derive(Debug, Clone)]
        pub struct $name {
            pub id: Option<i64>,
            pub name: String,
            pub description: String,
            pub modified: Option<DateTime<Utc>>,
            pub created: Option<DateTime<Utc>>,
        }

        static $meta: LazyLock<ModelMeta> = LazyLock::new(|| {
            ModelMeta::new(
                "example",
                stringify!($name),
                vec![
                    FieldDef::new("id", FieldType::BigAutoField)
                        .primary_key()
                        .verbose_name("ID"),
                    FieldDef::new("name", FieldType::CharField).max_length(100),
                    FieldDef::new("description", FieldType::TextField),
                    FieldDef::new($modified, FieldType::DateTimeField).auto_now(),
                    FieldDef::new($created, FieldType::DateTimeField).auto_now_add(),
                ],
            )
        });

        impl Model for $name {
            fn meta() -> &'static ModelMeta {
                &$meta
            }

            fn object_name(&self) -> &'static str {
                Self::meta().object_name
            }

            fn field_values(&self) -> Vec<(&'static str, Value)> {
                vec![
                    ("id", Value::from(self.id)),
                    ("name", Value::from(self.name.as_str())),
                    ("description", Value::from(self.description.as_str())),
                    ($modified, Value::from(self.modified)),
                    ($created, Value::from(self.created)),
                ]
            }
        }

        impl $name {
            /// Returns a saved record and an unsaved one.
            pub fn samples() -> Vec<Self> {
                let created = sample_instant();
                vec![
                    Self {
                        id: Some(1),
                        name: format!("{} sample", stringify!($name)),
                        description: "Saved twice".to_string(),
                        modified: Some(created + Duration::minutes(90)),
                        created: Some(created),
                    },
                    Self {
                        id: None,
                        name: "draft".to_string(),
                        description: String::new(),
                        modified: None,
                        created: None,
                    },
                ]
            }
        }
    };
}

timestamped_model!(AModel1, AMODEL1_META, "modified1", "created1");
timestamped_model!(AModel2, AMODEL2_META, "modified2", "created2");
timestamped_model!(AModel3, AMODEL3_META, "modified3", "created3");
timestamped_model!(AModel4, AMODEL4_META, "modified4", "created4");
timestamped_model!(AModel5, AMODEL5_META, "modified5", "created5");

fn sample_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 10, 8, 36, 0)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}
