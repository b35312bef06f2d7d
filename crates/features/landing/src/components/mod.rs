//! Presentational elements.
//!
//! Every component here is a pure mapping from a content record to markup: no hooks,
//! no signals, no side effects. Equal props always render to equal HTML.

mod cards;
mod faq;
mod icon;
mod pricing;

pub use self::cards::{CheckList, FeatureCard, FlowCard, StatBlock, StepRow, TestimonialCard};
pub use self::faq::FaqItem;
pub use self::icon::IconGlyph;
pub use self::pricing::PlanCard;

/// Card surface shared by feature, testimonial and plan cards.
pub(crate) const CARD: &str = "rounded-2xl border bg-white text-gray-900 shadow-sm";
/// Secondary copy.
pub(crate) const MUTED: &str = "text-gray-500";
