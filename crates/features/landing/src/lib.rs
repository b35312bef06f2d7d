//! Landing page feature slice.
//!
//! Presentational components are pure functions of the content records in
//! [`bagops_content`]; [`page::LandingPage`] arranges them in a fixed order and
//! [`render`] turns the tree into HTML through Dioxus SSR. [`audit`] checks the
//! rendered markup and the content tables for integrity defects.

pub mod audit;
pub mod components;
mod error;
pub mod page;
pub mod render;

pub use crate::audit::{AuditReport, audit, check_content};
pub use crate::error::{LandingError, LandingErrorExt};
pub use crate::page::{LandingPage, LandingPageProps};
pub use crate::render::{RenderOptions, render_document, render_page};
