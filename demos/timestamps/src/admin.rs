//! Admin registration for the demo record types.

use localtime_rs_admin::model_admin::ModelAdmin;
use localtime_rs_admin::site::AdminSite;
use localtime_rs_core::error::AdminResult;
use localtime_rs_db::model::{Model, ModelMeta};

use crate::models::{AModel1, AModel2, AModel3, AModel4, AModel5};

/// Builds the default admin for a record type: both timestamps read-only and
/// listed after the name.
fn timestamped_admin(meta: &ModelMeta, modified: &str, created: &str) -> ModelAdmin {
    ModelAdmin::for_model(meta)
        .readonly_fields(vec![modified, created])
        .list_display(vec!["__str__", "name", modified, created])
        .fields(vec!["name", "description", modified, created])
}

/// Registers every demo record type.
pub fn build_site() -> AdminResult<AdminSite> {
    let mut site = AdminSite::new("admin");
    site.register::<AModel1>(timestamped_admin(AModel1::meta(), "modified1", "created1"))?;
    site.register::<AModel2>(timestamped_admin(AModel2::meta(), "modified2", "created2"))?;
    site.register::<AModel3>(timestamped_admin(AModel3::meta(), "modified3", "created3"))?;
    site.register::<AModel4>(timestamped_admin(AModel4::meta(), "modified4", "created4"))?;
    site.register::<AModel5>(timestamped_admin(AModel5::meta(), "modified5", "created5"))?;
    Ok(site)
}

/// Renders the list view of `records` as a plain-text table.
pub fn list_table<M: Model>(admin: &ModelAdmin, records: &[M]) -> String {
    let columns = admin.columns(M::meta());
    let mut rows = vec![columns
        .iter()
        .map(|c| match &c.sort_field {
            Some(field) => format!("{} [{field}]", c.header),
            None => c.header.clone(),
        })
        .collect::<Vec<_>>()];
    rows.extend(records.iter().map(|record| {
        admin
            .render_row(record)
            .into_iter()
            .map(|cell| cell.value.into_inner())
            .collect()
    }));

    let widths: Vec<usize> = (0..columns.len())
        .map(|i| rows.iter().map(|row| row[i].chars().count()).max().unwrap_or(0))
        .collect();

    rows.iter()
        .map(|row| {
            row.iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
