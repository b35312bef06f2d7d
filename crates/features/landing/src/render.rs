//! Server-side rendering of the landing page.

use crate::audit::audit;
use crate::error::{LandingError, LandingErrorExt};
use crate::page::{DocumentHead, DocumentHeadProps, LandingPage, LandingPageProps};
use chrono::{Datelike, Local};
use dioxus::prelude::VirtualDom;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Everything a render depends on besides the static content tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Copyright year in the footer.
    pub year: i32,
    /// Booking widget snippet, inserted verbatim into the mount point.
    pub booking_embed: Option<String>,
    pub title: String,
    pub description: String,
}

impl RenderOptions {
    /// Options for the current local year with default document metadata.
    #[must_use]
    pub fn current() -> Self {
        Self::for_year(Local::now().year())
    }

    #[must_use]
    pub fn for_year(year: i32) -> Self {
        Self {
            year,
            booking_embed: None,
            title: "BagOps™ Automations".to_owned(),
            description: "CRM + Pipeline + Follow-up automation, set up for you.".to_owned(),
        }
    }

    #[must_use]
    pub fn with_booking_embed(mut self, embed: impl Into<String>) -> Self {
        self.booking_embed = Some(embed.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::current()
    }
}

/// Renders the page body markup.
#[must_use]
pub fn render_page(options: &RenderOptions) -> String {
    let props =
        LandingPageProps { year: options.year, booking_embed: options.booking_embed.clone() };
    let mut dom = VirtualDom::new_with_props(LandingPage, props);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);
    debug!(bytes = html.len(), year = options.year, "Rendered landing page");
    html
}

/// Renders a complete HTML document around [`render_page`].
#[must_use]
pub fn render_document(options: &RenderOptions) -> String {
    let head =
        DocumentHeadProps { title: options.title.clone(), description: options.description.clone() };
    let mut dom = VirtualDom::new_with_props(DocumentHead, head);
    dom.rebuild_in_place();
    let head = dioxus_ssr::render(&dom);
    let body = render_page(options);

    format!(
        "<!DOCTYPE html><html lang=\"en\"><head>{head}</head><body>{body}<script>lucide.createIcons();</script></body></html>"
    )
}

/// Renders the document, audits it and writes it to `path`, creating parent directories.
///
/// Returns the number of bytes written.
///
/// # Errors
/// Returns an audit error if the page has a dangling anchor or a duplicate id,
/// and [`LandingError::Io`] if the file cannot be written.
pub fn write_document(path: &Path, options: &RenderOptions) -> Result<usize, LandingError> {
    let html = render_document(options);
    audit(&html)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .context(format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, &html).context(format!("Failed to write {}", path.display()))?;

    info!(path = %path.display(), bytes = html.len(), "Landing page written");
    Ok(html.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    #[test]
    fn current_options_use_this_year() {
        assert_eq!(RenderOptions::current().year, Local::now().year());
    }

    #[test]
    fn document_escapes_metadata() {
        let options = RenderOptions::for_year(2030)
            .with_title("Leads & <Pipelines>")
            .with_description("\"quoted\"");
        let html = render_document(&options);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(!html.contains("<Pipelines>"));

        let document = Html::parse_document(&html);
        let title = Selector::parse("head > title").expect("valid selector");
        let title: String =
            document.select(&title).next().expect("title rendered").text().collect();
        assert_eq!(title, "Leads & <Pipelines>");

        let meta = Selector::parse(r#"meta[name="description"]"#).expect("valid selector");
        let description = document.select(&meta).next().expect("description rendered");
        assert_eq!(description.value().attr("content"), Some("\"quoted\""));

        assert!(html.contains("cdn.tailwindcss.com"));
        assert!(html.contains("lucide.createIcons()"));
    }

    #[test]
    fn document_embeds_page() {
        let options = RenderOptions::for_year(2030);
        let html = render_document(&options);
        assert!(html.contains(&render_page(&options)));
    }
}
