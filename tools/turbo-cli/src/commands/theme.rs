//! Theme preference commands.

use anyhow::{Context as _, Result};
use dialoguer::Confirm;
use serde::Serialize;

use turbo_cache::Cache;
use turbo_theme::{ColorSchemeQuery, EnvColorScheme, ThemePreference};

use super::{ThemeArgs, ThemeCommand};
use crate::context::Context;
use crate::output::theme_label;

/// Run the theme command.
pub fn run(args: ThemeArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ThemeCommand::Show => show_theme(ctx),
        ThemeCommand::Toggle => toggle_theme(ctx),
        ThemeCommand::Reset { yes } => reset_theme(yes, ctx),
    }
}

#[derive(Serialize)]
struct ThemeReport {
    theme: ThemePreference,
    is_dark: bool,
    key: String,
    persisted: Option<String>,
    system_prefers_dark: bool,
    markers: Vec<String>,
}

fn report(ctx: &Context, cache: &Cache) -> Result<ThemeReport> {
    let key = ctx.config.storefront.theme_key.clone();
    let persisted = match cache.get_str(&key) {
        Ok(value) => value,
        Err(e) => {
            ctx.output
                .warn(&format!("Could not read '{}' from the store: {}", key, e));
            None
        }
    };
    let store = ctx.theme_store(cache.clone());
    let snapshot = store.read();

    Ok(ThemeReport {
        theme: snapshot.theme,
        is_dark: snapshot.is_dark,
        key,
        persisted,
        system_prefers_dark: EnvColorScheme::new().prefers_dark(),
        markers: store.root_markers(),
    })
}

fn print_report(ctx: &Context, report: &ThemeReport) {
    if ctx.output.is_json() {
        ctx.output.json(report);
        return;
    }

    ctx.output.kv("theme", &theme_label(report.theme));
    ctx.output.kv("toggle label", report.theme.toggle_label());
    ctx.output.kv("key", &report.key);
    ctx.output.kv(
        "persisted",
        report.persisted.as_deref().unwrap_or("(none)"),
    );
    ctx.output.kv(
        "system",
        if report.system_prefers_dark { "dark" } else { "light" },
    );
    ctx.output.kv("root markers", &report.markers.join(" "));
}

fn show_theme(ctx: &Context) -> Result<()> {
    ctx.output.header("Theme");
    let cache = ctx.cache()?;
    let report = report(ctx, &cache)?;
    print_report(ctx, &report);
    Ok(())
}

fn toggle_theme(ctx: &Context) -> Result<()> {
    let cache = ctx.cache()?;
    let store = ctx.theme_store(cache.clone());
    let old = store.theme();
    let new = store.toggle();

    // The store absorbs write failures, so confirm the value landed.
    let persisted = is_saved(&cache, store.key(), new);
    if !persisted {
        ctx.output
            .warn("Theme changed for this run but could not be saved to the store");
    }

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "from": old,
            "to": new,
            "persisted": persisted,
        }));
        return Ok(());
    }

    ctx.output.success(&format!(
        "Theme switched from {} to {}",
        theme_label(old),
        theme_label(new)
    ));
    Ok(())
}

/// Whether the store holds exactly `theme` under `key`.
fn is_saved(cache: &Cache, key: &str, theme: ThemePreference) -> bool {
    matches!(cache.get_str(key), Ok(Some(saved)) if saved == theme.as_str())
}

fn reset_theme(yes: bool, ctx: &Context) -> Result<()> {
    let cache = ctx.cache()?;
    let key = ctx.config.storefront.theme_key.as_str();

    // An unreadable store counts as present so the delete below rewrites it.
    if !cache.exists(key).unwrap_or(true) {
        ctx.output.info("No persisted theme preference");
        return Ok(());
    }

    if !yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!("Forget the persisted theme preference '{}'?", key))
            .default(false)
            .interact()?;
        if !confirmed {
            ctx.output.info("Reset cancelled");
            return Ok(());
        }
    }

    cache
        .delete(key)
        .with_context(|| format!("Failed to delete '{}' from the store", key))?;

    let report = report(ctx, &cache)?;
    ctx.output.success(&format!(
        "Persisted preference removed; theme now follows the system ({})",
        theme_label(report.theme)
    ));
    print_report(ctx, &report);
    Ok(())
}
