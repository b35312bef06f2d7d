//! Content-integrity checks.
//!
//! [`audit`] inspects rendered markup: every in-page link must land on an element id,
//! and ids must be unique. [`check_content`] validates the content tables themselves.

use crate::error::LandingError;
use bagops_content::{FAQ, FEATURES, PRICING_PLANS, PROCESS_STEPS, SETUP_FEE, anchors};
use scraper::{ElementRef, Html, Selector};
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// What the audit found on a healthy page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditReport {
    /// Element ids in document order.
    pub ids: Vec<String>,
    /// Distinct fragment targets referenced by `href="#…"`.
    pub references: BTreeSet<String>,
}

impl AuditReport {
    #[must_use]
    pub fn has_id(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }
}

/// Elements whose markup comes from a third party (the booking widget). Their subtree is
/// neither parsed for ids nor for links.
const EXTERNAL: &str = "[data-external]";

/// Checks anchors and ids of a rendered page.
///
/// Bare `href="#"` links (back to top) are not section references and are ignored, and so
/// is everything inside an `[data-external]` element.
///
/// # Errors
/// [`LandingError::DuplicateId`] for the first repeated id, then
/// [`LandingError::DanglingAnchor`] for the first reference without a matching id.
pub fn audit(html: &str) -> Result<AuditReport, LandingError> {
    let document = Html::parse_document(html);
    let external = selector(EXTERNAL)?;
    let owned = |element: &ElementRef<'_>| {
        !element.ancestors().filter_map(ElementRef::wrap).any(|a| external.matches(&a))
    };

    let ids: Vec<String> = document
        .select(&selector("[id]")?)
        .filter(owned)
        .filter_map(|element| element.value().id())
        .map(str::to_owned)
        .collect();

    let mut seen = BTreeSet::new();
    for id in &ids {
        if !seen.insert(id.as_str()) {
            warn!(%id, "Duplicate element id");
            return Err(LandingError::DuplicateId { id: id.clone(), context: None });
        }
    }

    let references: BTreeSet<String> = document
        .select(&selector(r##"a[href^="#"]"##)?)
        .filter(owned)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| href.strip_prefix('#'))
        .filter(|target| !target.is_empty())
        .map(str::to_owned)
        .collect();

    if let Some(target) = references.iter().find(|r| !seen.contains(r.as_str())) {
        warn!(%target, "Anchor without a matching section");
        return Err(LandingError::DanglingAnchor { target: target.clone(), context: None });
    }

    debug!(ids = ids.len(), references = references.len(), "Audit passed");
    Ok(AuditReport { ids, references })
}

fn selector(css: &'static str) -> Result<Selector, LandingError> {
    Selector::parse(css).map_err(|e| LandingError::Selector {
        message: format!("{e:?}").into(),
        context: Some(css.into()),
    })
}

/// Validates the invariants of the static content tables.
///
/// # Errors
/// Returns [`LandingError::ContentIntegrity`] describing the first violated invariant.
pub fn check_content() -> Result<(), LandingError> {
    let violation = |message: String| LandingError::ContentIntegrity {
        message: message.into(),
        context: Some("content tables".into()),
    };

    if let Some(plan) = PRICING_PLANS.iter().find(|p| p.setup_fee != SETUP_FEE) {
        return Err(violation(format!(
            "{} charges {} setup instead of {SETUP_FEE}",
            plan.name, plan.setup_fee
        )));
    }

    if PRICING_PLANS.windows(2).any(|w| w[0].monthly >= w[1].monthly) {
        return Err(violation("pricing plans must ascend by monthly price".to_owned()));
    }

    let recommended: Vec<_> = PRICING_PLANS.iter().filter(|p| p.recommended).collect();
    if recommended.len() != 1 {
        return Err(violation(format!(
            "exactly one plan must be recommended, found {}",
            recommended.len()
        )));
    }

    for (table, len, expected) in [
        ("features", FEATURES.len(), 4),
        ("process steps", PROCESS_STEPS.len(), 4),
        ("pricing plans", PRICING_PLANS.len(), 3),
        ("faq entries", FAQ.len(), 5),
    ] {
        if len != expected {
            return Err(violation(format!("{table}: expected {expected} entries, found {len}")));
        }
    }

    if let Some((i, step)) = PROCESS_STEPS
        .iter()
        .enumerate()
        .find(|(i, step)| step.ordinal != (i + 1).to_string())
    {
        return Err(violation(format!(
            "process step {} is labeled {:?}",
            i + 1,
            step.ordinal
        )));
    }

    if anchors::ALL.iter().any(|a| a.is_empty()) {
        return Err(violation("section identifiers must not be empty".to_owned()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_data_attributes_ending_in_id() {
        let html = r##"<div data-testid="plan-core"></div><div id="faq"></div><a href="#faq">x</a>"##;
        let report = audit(html).expect("page is consistent");
        assert_eq!(report.ids, ["faq"]);
        assert!(report.references.contains("faq"));
    }

    #[test]
    fn bare_fragment_is_not_a_reference() {
        let report = audit(r##"<a href="#">Top</a>"##).expect("no references");
        assert!(report.references.is_empty());
    }

    #[test]
    fn external_links_are_ignored() {
        let report = audit(r##"<a href="https://example.test/#faq">x</a>"##).expect("no references");
        assert!(report.references.is_empty());
    }

    #[test]
    fn detects_dangling_anchor() {
        let err = audit(r##"<div id="book"></div><a href="#pricing">x</a>"##)
            .expect_err("dangling anchor");
        assert!(matches!(err, LandingError::DanglingAnchor { ref target, .. } if target == "pricing"));
    }

    #[test]
    fn reads_single_quoted_and_encoded_attributes() {
        let err = audit(r#"<div id="book"></div><a href='#nowhere'>x</a>"#)
            .expect_err("single-quoted link is still a reference");
        assert!(matches!(err, LandingError::DanglingAnchor { ref target, .. } if target == "nowhere"));

        let report = audit(r#"<div id='faq'></div><a href="&#35;faq">x</a>"#).expect("resolves");
        assert!(report.references.contains("faq"));
    }

    #[test]
    fn skips_external_markup() {
        let html = r##"<div id="ghl-form"><div data-external="booking"><a href="#step-2">Next</a><div id="ghl-form"></div></div></div><a href="#ghl-form">Open</a>"##;
        let report = audit(html).expect("widget internals are not audited");
        assert_eq!(report.ids, ["ghl-form"]);
        assert_eq!(report.references.len(), 1);
    }

    #[test]
    fn detects_duplicate_id() {
        let err = audit(r#"<div id="faq"></div><section id="faq"></section>"#)
            .expect_err("duplicate id");
        assert!(matches!(err, LandingError::DuplicateId { ref id, .. } if id == "faq"));
    }

    #[test]
    fn shipped_content_is_consistent() {
        check_content().expect("content tables hold their invariants");
    }
}
