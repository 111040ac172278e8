//! Display fields: named, computed columns of a `ModelAdmin`.
//!
//! A display field is a column that is not stored on the record but computed
//! from it at render time. Each one carries a description (its column header)
//! and an optional ordering key that tells the list view which stored field
//! to sort by when the column header is clicked.

use std::fmt;
use std::sync::Arc;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use localtime_rs_db::model::Model;

use crate::render::RenderedValue;

/// Computes a display value from one record.
pub type Renderer = Arc<dyn Fn(&dyn Model) -> RenderedValue + Send + Sync>;

/// A computed column.
#[derive(Clone)]
pub struct DisplayField {
    /// The name layouts refer to this column by.
    pub name: String,
    /// Column header / label.
    pub description: String,
    /// Stored field the list view sorts by for this column.
    pub ordering: Option<String>,
    renderer: Renderer,
}

impl DisplayField {
    /// Creates a display field with no ordering.
    pub fn new<F>(name: impl Into<String>, description: impl Into<String>, renderer: F) -> Self
    where
        F: Fn(&dyn Model) -> RenderedValue + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            ordering: None,
            renderer: Arc::new(renderer),
        }
    }

    /// Sets the stored field used for sorting.
    #[must_use]
    pub fn ordering(mut self, field: impl Into<String>) -> Self {
        self.ordering = Some(field.into());
        self
    }

    /// Computes the value for one record.
    pub fn render(&self, record: &dyn Model) -> RenderedValue {
        (self.renderer)(record)
    }
}

impl fmt::Debug for DisplayField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayField")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("ordering", &self.ordering)
            .finish_non_exhaustive()
    }
}

impl Serialize for DisplayField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DisplayField", 3)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("description", &self.description)?;
        state.serialize_field("ordering", &self.ordering)?;
        state.end()
    }
}

/// The display fields of one `ModelAdmin`, in registration order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct DisplayRegistry {
    fields: Vec<DisplayField>,
}

impl DisplayRegistry {
    /// Creates an empty registry.
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Adds a display field, replacing and returning any field of the same name.
    pub fn insert(&mut self, field: DisplayField) -> Option<DisplayField> {
        match self.fields.iter_mut().find(|f| f.name == field.name) {
            Some(slot) => Some(std::mem::replace(slot, field)),
            None => {
                self.fields.push(field);
                None
            }
        }
    }

    /// Removes a display field by name.
    pub fn remove(&mut self, name: &str) -> Option<DisplayField> {
        let index = self.fields.iter().position(|f| f.name == name)?;
        Some(self.fields.remove(index))
    }

    /// Looks up a display field by name.
    pub fn get(&self, name: &str) -> Option<&DisplayField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns `true` if a display field with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the registered names, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Iterates over the display fields.
    pub fn iter(&self) -> std::slice::Iter<'_, DisplayField> {
        self.fields.iter()
    }

    /// Returns the number of display fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if there are no display fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'a> IntoIterator for &'a DisplayRegistry {
    type Item = &'a DisplayField;
    type IntoIter = std::slice::Iter<'a, DisplayField>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
