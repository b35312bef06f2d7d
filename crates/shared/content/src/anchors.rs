//! In-page section identifiers.
//!
//! Every call-to-action on the page links to one of these; the rendered page must
//! carry a matching `id` for each of them.

pub const FEATURES: &str = "features";
pub const PRICING: &str = "pricing";
pub const FAQ: &str = "faq";
pub const BOOK: &str = "book";
/// Mount point for the external booking widget.
pub const BOOKING_WIDGET: &str = "ghl-form";
pub const PROBLEM: &str = "problem";

pub const ALL: &[&str] = &[FEATURES, PRICING, FAQ, BOOK, BOOKING_WIDGET, PROBLEM];

/// Builds the fragment link for a section (`"faq"` -> `"#faq"`).
#[must_use]
pub fn href(id: &str) -> String {
    format!("#{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn href_prefixes_fragment_marker() {
        assert_eq!(href(BOOK), "#book");
        assert_eq!(href(BOOKING_WIDGET), "#ghl-form");
    }

    #[test]
    fn identifiers_are_unique() {
        for (i, a) in ALL.iter().enumerate() {
            assert!(!ALL[i + 1..].contains(a), "duplicate anchor {a}");
        }
    }
}
