use anyhow::{Context, Result};
use bagops_kernel::config::{SiteConfig, load_config};
use bagops_landing::render::write_document;
use bagops_landing::{RenderOptions, audit, check_content, render_document};
use std::path::{Path, PathBuf};
use tracing::info;

fn options(cfg: &SiteConfig, year: Option<i32>) -> RenderOptions {
    let base = year.map_or_else(RenderOptions::current, RenderOptions::for_year);
    let base = base.with_title(&cfg.title).with_description(&cfg.description);
    match cfg.booking.embed() {
        Some(embed) => base.with_booking_embed(embed),
        None => base,
    }
}

fn site_config(path: Option<&Path>) -> Result<SiteConfig> {
    load_config(path).context("Configuration is malformed")
}

pub(crate) fn render(out: Option<PathBuf>, config: Option<&Path>, year: Option<i32>) -> Result<()> {
    let cfg = site_config(config)?;
    check_content().context("Content tables are inconsistent")?;

    let path = out.unwrap_or_else(|| cfg.output.path.clone());
    let options = options(&cfg, year);
    let bytes = write_document(&path, &options)
        .with_context(|| format!("Failed to render {}", path.display()))?;

    info!("Rendered {} ({bytes} bytes, year {})", path.display(), options.year);
    Ok(())
}

pub(crate) fn check(config: Option<&Path>) -> Result<()> {
    let cfg = site_config(config)?;
    check_content().context("Content tables are inconsistent")?;

    let html = render_document(&options(&cfg, None));
    let report = audit(&html).context("Rendered page failed the audit")?;

    info!(
        ids = report.ids.len(),
        references = report.references.len(),
        "Landing page is consistent"
    );
    Ok(())
}
