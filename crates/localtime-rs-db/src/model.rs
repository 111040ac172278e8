//! Model trait and metadata.
//!
//! The [`Model`] trait is what a host record type implements so the admin can
//! read its schema and field values. [`ModelMeta`] is the schema: the record
//! type's labels and its declared [`FieldDef`]s.

use localtime_rs_core::utils::text::camel_case_to_spaces;

use crate::fields::FieldDef;
use crate::value::Value;

/// The core trait for record types shown in the admin.
///
/// Display renderers receive records as `&dyn Model`, so everything except
/// [`meta`](Model::meta) is object safe. For the same reason the record's
/// declared name is reached through [`object_name`](Model::object_name), which
/// implementors return from their schema.
///
/// # Examples
///
/// ```
/// use std::sync::LazyLock;
/// use localtime_rs_db::fields::{FieldDef, FieldType};
/// use localtime_rs_db::model::{Model, ModelMeta};
/// use localtime_rs_db::value::Value;
///
/// struct Article {
///     id: i64,
///     title: String,
/// }
///
/// impl Model for Article {
///     fn meta() -> &'static ModelMeta {
///         static META: LazyLock<ModelMeta> = LazyLock::new(|| {
///             ModelMeta::new("blog", "Article", vec![
///                 FieldDef::new("id", FieldType::BigAutoField).primary_key(),
///                 FieldDef::new("title", FieldType::CharField).max_length(200),
///             ])
///         });
///         &META
///     }
///
///     fn object_name(&self) -> &'static str {
///         Self::meta().object_name
///     }
///
///     fn field_values(&self) -> Vec<(&'static str, Value)> {
///         vec![("id", Value::Int(self.id)), ("title", Value::from(self.title.as_str()))]
///     }
/// }
///
/// let a = Article { id: 1, title: "Hello".into() };
/// assert_eq!(a.field_value("title"), Some(Value::from("Hello")));
/// assert_eq!(a.to_display_string(), "Article object (1)");
/// assert_eq!(Article::meta().key(), "blog.article");
/// ```
pub trait Model: Send + Sync + 'static {
    /// Returns the static metadata for this model type.
    fn meta() -> &'static ModelMeta
    where
        Self: Sized;

    /// Returns all field name-value pairs for this instance.
    fn field_values(&self) -> Vec<(&'static str, Value)>;

    /// Returns the value of one field, or `None` if the record has no such field.
    fn field_value(&self, name: &str) -> Option<Value> {
        self.field_values()
            .into_iter()
            .find_map(|(field, value)| (field == name).then_some(value))
    }

    /// Returns the name of the primary key field.
    fn pk_field_name(&self) -> &'static str {
        "id"
    }

    /// Returns the primary key value, or `None` if unsaved.
    fn pk(&self) -> Option<Value> {
        self.field_value(self.pk_field_name())
            .filter(|value| !value.is_null())
    }

    /// Returns the human-readable representation (the `__str__` column).
    fn to_display_string(&self) -> String {
        let pk = self.pk().map_or_else(|| "None".to_string(), |pk| pk.to_string());
        format!("{} object ({pk})", self.object_name())
    }

    /// Returns the record type's declared name, normally `Self::meta().object_name`.
    fn object_name(&self) -> &'static str;
}

/// Schema of a record type.
#[derive(Debug, Clone)]
pub struct ModelMeta {
    /// The application label (e.g., "auth", "blog").
    pub app_label: &'static str,
    /// The type name as declared (e.g., "`BlogPost`").
    pub object_name: &'static str,
    /// The model name in lowercase (e.g., "blogpost").
    pub model_name: String,
    /// Human-readable name.
    pub verbose_name: String,
    /// Field definitions, in declaration order.
    pub fields: Vec<FieldDef>,
}

impl ModelMeta {
    /// Creates metadata with names derived from the type name.
    ///
    /// `"BlogPost"` gets model name `"blogpost"` and verbose name `"blog post"`.
    pub fn new(app_label: &'static str, object_name: &'static str, fields: Vec<FieldDef>) -> Self {
        Self {
            app_label,
            object_name,
            model_name: object_name.to_lowercase(),
            verbose_name: camel_case_to_spaces(object_name),
            fields,
        }
    }

    /// Overrides the verbose name.
    #[must_use]
    pub fn verbose_name(mut self, name: impl Into<String>) -> Self {
        self.verbose_name = name.into();
        self
    }

    /// Returns the registry key, `"app_label.model_name"`.
    pub fn key(&self) -> String {
        format!("{}.{}", self.app_label, self.model_name)
    }

    /// Looks up a declared field by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns `true` if a field with this name is declared.
    pub fn has_field(&self, name: &str) -> bool {
        self.get_field(name).is_some()
    }

    /// Returns the primary key field, if one is declared.
    pub fn pk_field(&self) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.primary_key)
    }

    /// Returns the declared timestamp fields, in declaration order.
    pub fn timestamp_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| f.is_timestamp())
    }
}
