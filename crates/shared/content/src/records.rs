use crate::icon::Icon;
use crate::money::Money;
use serde::Serialize;

/// Headline number shown under the hero copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// One row of the hero's sample automation flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlowStep {
    pub icon: Icon,
    pub text: &'static str,
    /// Trailing emphasized fragment, if any.
    pub highlight: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureItem {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

/// A stage of the rollout; `ordinal` is the label printed in the badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessStep {
    pub ordinal: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// A pricing tier.
///
/// `slug` keys the test hooks (`plan-{slug}`, `{slug}-setup`) on the rendered card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingPlan {
    pub slug: &'static str,
    pub name: &'static str,
    pub monthly: Money,
    pub setup_fee: Money,
    pub summary: &'static str,
    pub included: &'static [&'static str],
    pub recommended: bool,
    pub cta: &'static str,
    pub footnote: Option<&'static str>,
}

impl PricingPlan {
    /// Price line, e.g. `$500 /mo`.
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("{} /mo", self.monthly)
    }

    /// Setup fee line, e.g. `Setup Fee: $2,500`.
    #[must_use]
    pub fn setup_label(&self) -> String {
        format!("Setup Fee: {}", self.setup_fee)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub quote: &'static str,
    pub attribution: &'static str,
}
