//! Model administration configuration.
//!
//! [`ModelAdmin`] describes how one record type is laid out in the admin:
//! which columns the list shows, which fields are read-only, and how the
//! change form groups fields. Layout entries are [`FieldRef`]s, so a row of
//! several fields is a [`FieldRef::Group`].
//!
//! Besides schema fields, layouts may name display fields registered in
//! [`ModelAdmin::display_fields`]; [`display_value`](ModelAdmin::display_value),
//! [`column_header`](ModelAdmin::column_header) and
//! [`sort_field`](ModelAdmin::sort_field) resolve both kinds the same way.

use serde::{Deserialize, Serialize};

use localtime_rs_core::html::SafeString;
use localtime_rs_core::settings::SETTINGS;
use localtime_rs_core::utils::text::{capfirst, pretty_name};
use localtime_rs_db::model::{Model, ModelMeta};

use crate::display::{DisplayField, DisplayRegistry};
use crate::field_ref::{flatten, FieldRef};

/// The `list_display` entry that renders the record's own string form.
pub const STR_COLUMN: &str = "__str__";

/// Configuration for how a record type is displayed in the admin.
///
/// A `ModelAdmin` serializes to JSON for frontends but does not deserialize:
/// its display fields hold renderers, and a layout that names a `*_local`
/// alias without one would render as empty cells.
///
/// # Examples
///
/// ```
/// use localtime_rs_admin::field_ref::FieldRef;
/// use localtime_rs_admin::model_admin::{Fieldset, ModelAdmin};
///
/// let admin = ModelAdmin::new("blog", "article")
///     .list_display(vec!["title", "author", "published"])
///     .readonly_fields(vec!["published"])
///     .fieldsets(vec![
///         Fieldset::new(vec!["title", "body"]).name("Content"),
///         Fieldset::new(vec![FieldRef::group(["author", "published"])]).name("Meta"),
///     ])
///     .empty_value_display("(none)");
/// assert_eq!(admin.model_key(), "blog.article");
/// ```
///
/// ```compile_fail
/// use localtime_rs_admin::model_admin::ModelAdmin;
///
/// let admin: ModelAdmin = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ModelAdmin {
    /// The application label (e.g., "blog").
    pub app_label: String,
    /// The model name in lowercase (e.g., "article").
    pub model_name: String,
    /// The human-readable name, the header of the `__str__` column.
    pub verbose_name: String,
    /// Columns of the list view.
    pub list_display: Vec<FieldRef>,
    /// Columns that link to the change view. Empty means the first column.
    pub list_display_links: Vec<String>,
    /// Fields shown but not editable on the change form.
    pub readonly_fields: Vec<FieldRef>,
    /// Free-form change form layout. `None` means every editable field.
    pub fields: Option<Vec<FieldRef>>,
    /// Grouped change form layout.
    pub fieldsets: Option<Vec<Fieldset>>,
    /// Text for NULL cells; falls back to the `empty_value_display` setting.
    pub empty_value_display: Option<String>,
    /// Computed columns, by name.
    pub display_fields: DisplayRegistry,
}

impl ModelAdmin {
    /// Creates a new `ModelAdmin` with default configuration.
    pub fn new(app_label: impl Into<String>, model_name: impl Into<String>) -> Self {
        let model = model_name.into();
        Self {
            app_label: app_label.into(),
            verbose_name: model.replace('_', " "),
            model_name: model,
            list_display: vec![FieldRef::from(STR_COLUMN)],
            list_display_links: Vec::new(),
            readonly_fields: Vec::new(),
            fields: None,
            fieldsets: None,
            empty_value_display: None,
            display_fields: DisplayRegistry::new(),
        }
    }

    /// Creates a `ModelAdmin` named after a record schema.
    pub fn for_model(meta: &ModelMeta) -> Self {
        Self::new(meta.app_label, meta.model_name.clone()).verbose_name(meta.verbose_name.clone())
    }

    /// Sets the verbose name.
    #[must_use]
    pub fn verbose_name(mut self, name: impl Into<String>) -> Self {
        self.verbose_name = name.into();
        self
    }

    /// Sets the list view columns.
    #[must_use]
    pub fn list_display<T: Into<FieldRef>>(mut self, fields: Vec<T>) -> Self {
        self.list_display = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the columns that link to the change view.
    #[must_use]
    pub fn list_display_links(mut self, fields: Vec<&str>) -> Self {
        self.list_display_links = fields.into_iter().map(String::from).collect();
        self
    }

    /// Sets the read-only fields.
    #[must_use]
    pub fn readonly_fields<T: Into<FieldRef>>(mut self, fields: Vec<T>) -> Self {
        self.readonly_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the free-form change form layout.
    #[must_use]
    pub fn fields<T: Into<FieldRef>>(mut self, fields: Vec<T>) -> Self {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the fieldsets for the change form.
    #[must_use]
    pub fn fieldsets(mut self, fieldsets: Vec<Fieldset>) -> Self {
        self.fieldsets = Some(fieldsets);
        self
    }

    /// Sets the text shown for NULL cells.
    #[must_use]
    pub fn empty_value_display(mut self, text: impl Into<String>) -> Self {
        self.empty_value_display = Some(text.into());
        self
    }

    /// Registers a display field.
    #[must_use]
    pub fn display(mut self, field: DisplayField) -> Self {
        self.display_fields.insert(field);
        self
    }

    /// Returns the model key in `"app_label.model_name"` format.
    pub fn model_key(&self) -> String {
        format!("{}.{}", self.app_label, self.model_name)
    }

    /// Returns the text used for NULL cells.
    pub fn empty_value(&self) -> String {
        self.empty_value_display
            .clone()
            .or_else(|| SETTINGS.try_get().map(|s| s.empty_value_display.clone()))
            .unwrap_or_else(|| "-".to_string())
    }

    /// Renders one value of `record` for the list or change view.
    ///
    /// Display fields are rendered through their renderer; schema values are
    /// escaped, with NULL shown as [`empty_value`](Self::empty_value).
    /// Returns `None` when `name` is neither.
    pub fn display_value(&self, name: &str, record: &dyn Model) -> Option<SafeString> {
        if name == STR_COLUMN {
            return Some(SafeString::escaped(&record.to_display_string()));
        }
        if let Some(field) = self.display_fields.get(name) {
            return Some(field.render(record).to_html());
        }
        record.field_value(name).map(|value| {
            if value.is_null() {
                SafeString::escaped(&self.empty_value())
            } else {
                SafeString::escaped(&value.to_string())
            }
        })
    }

    /// Returns the header of a list column.
    pub fn column_header(&self, name: &str, meta: &ModelMeta) -> String {
        if name == STR_COLUMN {
            return capfirst(&self.verbose_name);
        }
        if let Some(field) = self.display_fields.get(name) {
            return capfirst(&field.description);
        }
        meta.get_field(name)
            .map_or_else(|| pretty_name(name), |field| capfirst(&field.verbose_name))
    }

    /// Returns the stored field the list view sorts by for a column.
    ///
    /// Display fields sort by their ordering field (none if unset); schema
    /// fields sort by themselves.
    pub fn sort_field(&self, name: &str, meta: &ModelMeta) -> Option<String> {
        if let Some(field) = self.display_fields.get(name) {
            return field.ordering.clone();
        }
        meta.get_field(name).map(|field| field.name.to_string())
    }

    /// Describes the list view columns.
    pub fn columns(&self, meta: &ModelMeta) -> Vec<ListColumn> {
        flatten(&self.list_display)
            .into_iter()
            .map(|name| ListColumn {
                name: name.to_string(),
                header: self.column_header(name, meta),
                sort_field: self.sort_field(name, meta),
            })
            .collect()
    }

    /// Renders one list view row.
    pub fn render_row(&self, record: &dyn Model) -> Vec<ListCell> {
        let names = flatten(&self.list_display);
        names
            .iter()
            .enumerate()
            .map(|(i, name)| ListCell {
                name: (*name).to_string(),
                value: self
                    .display_value(name, record)
                    .unwrap_or_else(|| SafeString::escaped(&self.empty_value())),
                is_link: if self.list_display_links.is_empty() {
                    i == 0
                } else {
                    self.list_display_links.iter().any(|link| link == name)
                },
            })
            .collect()
    }
}

/// A grouping of fields on the change form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fieldset {
    /// Optional display name for this fieldset group.
    pub name: Option<String>,
    /// The fields included in this fieldset.
    pub fields: Vec<FieldRef>,
    /// CSS classes to apply to this fieldset (e.g., `"collapse"`, `"wide"`).
    pub classes: Vec<String>,
    /// Optional description text displayed below the fieldset title.
    pub description: Option<String>,
}

impl Fieldset {
    /// Creates a new fieldset with the given fields and no title.
    pub fn new<T: Into<FieldRef>>(fields: Vec<T>) -> Self {
        Self {
            name: None,
            fields: fields.into_iter().map(Into::into).collect(),
            classes: Vec::new(),
            description: None,
        }
    }

    /// Sets the fieldset title.
    #[must_use]
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Sets the CSS classes.
    #[must_use]
    pub fn classes(mut self, classes: Vec<&str>) -> Self {
        self.classes = classes.into_iter().map(String::from).collect();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }
}

/// A list view column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListColumn {
    /// The `list_display` name.
    pub name: String,
    /// Column header text.
    pub header: String,
    /// Stored field to sort by, if sortable.
    pub sort_field: Option<String>,
}

/// One rendered cell of a list view row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListCell {
    /// The `list_display` name.
    pub name: String,
    /// Rendered, HTML-safe value.
    pub value: SafeString,
    /// Whether the cell links to the change view.
    pub is_link: bool,
}
