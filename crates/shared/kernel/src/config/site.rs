use serde::Deserialize;
use std::path::PathBuf;

/// Top-level site settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Document `<title>`.
    pub title: String,
    /// `<meta name="description">` content.
    pub description: String,
    pub booking: BookingConfig,
    pub output: OutputConfig,
}

/// External booking widget settings.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    /// Provider snippet inserted verbatim into the booking mount point.
    /// `None` renders the placeholder.
    pub embed_html: Option<String>,
}

/// Where rendered documents are written.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
}

// --- Default ---

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "BagOps™ Automations | CRM + Pipeline + Follow-up".to_owned(),
            description: "Done-for-you GoHighLevel setup: organized CRM, conversion-ready pipeline, and a base automation suite.".to_owned(),
            booking: BookingConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { path: PathBuf::from("dist/index.html") }
    }
}

impl BookingConfig {
    /// The embed snippet, treating a blank value as absent.
    #[must_use]
    pub fn embed(&self) -> Option<&str> {
        self.embed_html.as_deref().filter(|s| !s.trim().is_empty())
    }
}
