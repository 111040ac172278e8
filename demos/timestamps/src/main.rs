//! # Localized timestamps demo
//!
//! Registers five record types whose read-only `modified<N>`/`created<N>`
//! timestamps are shown in the viewer's language and timezone, then prints
//! each rewritten admin layout as JSON followed by a rendered list table.
//!
//! ## Running
//!
//! ```bash
//! cargo run --package timestamps-demo -- --language de --time-zone +02:00
//! ```

mod admin;
mod models;

use std::path::PathBuf;

use clap::Parser;

use localtime_rs_admin::model_admin::ModelAdmin;
use localtime_rs_core::checks::CheckRegistry;
use localtime_rs_core::error::{AdminError, AdminResult};
use localtime_rs_core::settings::{Settings, SETTINGS};
use localtime_rs_core::{i18n, logging, settings_loader};
use localtime_rs_db::model::Model;

use models::{AModel1, AModel2, AModel3, AModel4, AModel5};

/// Prints admin layouts with localized timestamp columns.
#[derive(Debug, Parser)]
#[command(name = "timestamps", version)]
struct Cli {
    /// TOML settings file; environment overrides still apply.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Language to render in (overrides `language_code`).
    #[arg(long)]
    language: Option<String>,

    /// Display timezone, e.g. "UTC" or "-05:00" (overrides `time_zone`).
    #[arg(long)]
    time_zone: Option<String>,

    /// Only print this model, e.g. "example.amodel2".
    #[arg(long)]
    model: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> AdminResult<()> {
    let settings = load_settings(cli)?;
    logging::setup_logging(&settings);
    SETTINGS.configure(settings.clone())?;

    let mut failed = false;
    for message in CheckRegistry::with_builtins().run_checks(None, &settings) {
        tracing::warn!("{message}");
        failed |= message.is_error();
    }
    if failed {
        return Err(AdminError::ImproperlyConfigured(
            "System check identified errors".to_string(),
        ));
    }

    i18n::activate_from_settings(&settings)?;
    tracing::info!(
        language = %i18n::get_language(),
        time_zone = %settings.time_zone,
        "Locale activated"
    );

    let site = admin::build_site()?;
    for message in site.check() {
        tracing::warn!("{message}");
    }

    for key in site.registered_models() {
        if cli.model.as_deref().is_some_and(|wanted| wanted != key) {
            continue;
        }
        let Some(model_admin) = site.get_model_admin(key) else {
            continue;
        };
        println!("== {key} ==");
        println!("{}", serde_json::to_string_pretty(model_admin)?);
        println!();
        println!("{}", table_for(key, model_admin));
        println!();
    }
    Ok(())
}

fn load_settings(cli: &Cli) -> AdminResult<Settings> {
    let mut settings = match &cli.settings {
        Some(path) => settings_loader::from_toml_file_with_env(path)?,
        None => settings_loader::from_env(),
    };
    if let Some(language) = &cli.language {
        settings.language_code.clone_from(language);
    }
    if let Some(time_zone) = &cli.time_zone {
        settings.time_zone.clone_from(time_zone);
    }
    Ok(settings)
}

fn table_for(key: &str, model_admin: &ModelAdmin) -> String {
    match key {
        k if k == AModel1::meta().key() => admin::list_table(model_admin, &AModel1::samples()),
        k if k == AModel2::meta().key() => admin::list_table(model_admin, &AModel2::samples()),
        k if k == AModel3::meta().key() => admin::list_table(model_admin, &AModel3::samples()),
        k if k == AModel4::meta().key() => admin::list_table(model_admin, &AModel4::samples()),
        k if k == AModel5::meta().key() => admin::list_table(model_admin, &AModel5::samples()),
        _ => String::new(),
    }
}
