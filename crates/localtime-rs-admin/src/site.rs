//! Admin site registry.
//!
//! The [`AdminSite`] is the central registry where record types are registered
//! with their [`ModelAdmin`] configurations. Registration is where read-only
//! timestamp fields get their localized display fields (see
//! [`synthesize`](crate::local_datetime::synthesize)), so every admin the site
//! hands out is already rewritten.

use std::collections::HashMap;

use tracing::info;

use localtime_rs_core::checks::CheckMessage;
use localtime_rs_core::error::{AdminError, AdminResult};
use localtime_rs_core::logging::registration_span;
use localtime_rs_db::model::{Model, ModelMeta};

use crate::checks::check_model_admin;
use crate::local_datetime::synthesize;
use crate::model_admin::ModelAdmin;

/// The admin site, responsible for record type registration.
///
/// # Examples
///
/// ```
/// use localtime_rs_admin::model_admin::ModelAdmin;
/// use localtime_rs_admin::site::AdminSite;
/// use localtime_rs_db::fields::{FieldDef, FieldType};
/// use localtime_rs_db::model::ModelMeta;
/// use std::sync::LazyLock;
///
/// static META: LazyLock<ModelMeta> = LazyLock::new(|| {
///     ModelMeta::new("blog", "Article", vec![
///         FieldDef::new("id", FieldType::BigAutoField).primary_key(),
///         FieldDef::new("published", FieldType::DateTimeField),
///     ])
/// });
///
/// let mut site = AdminSite::new("admin");
/// site.register_meta(&META, ModelAdmin::for_model(&META).readonly_fields(vec!["published"]))
///     .unwrap();
/// let admin = site.get_model_admin("blog.article").unwrap();
/// assert!(admin.display_fields.contains("published_local"));
/// ```
pub struct AdminSite {
    /// The site name.
    name: String,
    /// Registered admin configurations, keyed by `"app.model"`.
    registered_models: HashMap<String, ModelAdmin>,
    /// Schemas of the registered record types, by the same key.
    metas: HashMap<String, &'static ModelMeta>,
}

impl AdminSite {
    /// Creates a new admin site with the given name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            registered_models: HashMap::new(),
            metas: HashMap::new(),
        }
    }

    /// Returns the site name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers a record type with its admin configuration.
    pub fn register<M: Model>(&mut self, admin: ModelAdmin) -> AdminResult<()> {
        self.register_meta(M::meta(), admin)
    }

    /// Registers a schema with its admin configuration.
    ///
    /// The admin is stored under the schema's key, after its read-only
    /// timestamp fields have been localized.
    pub fn register_meta(&mut self, meta: &'static ModelMeta, mut admin: ModelAdmin) -> AdminResult<()> {
        let key = meta.key();
        if self.registered_models.contains_key(&key) {
            return Err(AdminError::AlreadyRegistered(key));
        }

        let span = registration_span(&key);
        let _guard = span.enter();

        meta.app_label.clone_into(&mut admin.app_label);
        admin.model_name.clone_from(&meta.model_name);
        let added = synthesize(meta, &mut admin);
        info!(
            site = %self.name,
            display_fields = added.len(),
            "Registered model admin"
        );

        self.metas.insert(key.clone(), meta);
        self.registered_models.insert(key, admin);
        Ok(())
    }

    /// Unregisters a record type from the admin site.
    pub fn unregister(&mut self, model_key: &str) -> AdminResult<ModelAdmin> {
        self.metas.remove(model_key);
        self.registered_models
            .remove(model_key)
            .ok_or_else(|| AdminError::NotRegistered(model_key.to_string()))
    }

    /// Returns the `ModelAdmin` for a registered record type, if any.
    pub fn get_model_admin(&self, model_key: &str) -> Option<&ModelAdmin> {
        self.registered_models.get(model_key)
    }

    /// Returns the schema for a registered record type, if any.
    pub fn get_meta(&self, model_key: &str) -> Option<&'static ModelMeta> {
        self.metas.get(model_key).copied()
    }

    /// Returns all registered model keys, sorted.
    pub fn registered_models(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.registered_models.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Returns the number of registered record types.
    pub fn model_count(&self) -> usize {
        self.registered_models.len()
    }

    /// Returns whether a record type is registered.
    pub fn is_registered(&self, model_key: &str) -> bool {
        self.registered_models.contains_key(model_key)
    }

    /// Runs the admin checks for every registration, in key order.
    pub fn check(&self) -> Vec<CheckMessage> {
        self.registered_models()
            .into_iter()
            .filter_map(|key| Some((self.metas.get(key)?, self.registered_models.get(key)?)))
            .flat_map(|(meta, admin)| check_model_admin(meta, admin))
            .collect()
    }
}

impl std::fmt::Debug for AdminSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminSite")
            .field("name", &self.name)
            .field("model_count", &self.registered_models.len())
            .field("models", &self.registered_models().join(", "))
            .finish_non_exhaustive()
    }
}
