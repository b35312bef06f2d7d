//! # Landing Content
//!
//! Immutable content records and the static tables the landing page is rendered from.
//! Keep it lean: no I/O, no markup, no rendering logic. Just data and tiny helpers.
//!
//! Every table is a `const`/`static` slice; records only borrow `'static` strings,
//! so they are `Copy` and can be handed to components by value.

pub mod anchors;
pub mod icon;
pub mod money;
pub mod records;
pub mod tables;

pub use crate::icon::Icon;
pub use crate::money::Money;
pub use crate::records::{
    FaqEntry, FeatureItem, FlowStep, PricingPlan, ProcessStep, Stat, Testimonial,
};
pub use crate::tables::*;

/// Brand shown in the navigation bar and footer.
pub const BRAND: &str = "BagOps™";

/// One-time setup fee charged on every plan.
pub const SETUP_FEE: Money = Money::dollars(2_500);
