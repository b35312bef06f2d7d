//! Page composition.
//!
//! [`LandingPage`] stacks the sections in a fixed order:
//! nav, hero, problem, features, process, pricing, booking, FAQ, footer.

mod document;
mod sections;

pub use self::document::{DocumentHead, DocumentHeadProps};
pub use self::sections::{
    BookingSection, FaqSection, FeaturesSection, Footer, Hero, Nav, PricingSection,
    ProblemSection, ProcessSection,
};

use dioxus::prelude::*;

/// Inputs of the page that are not static content.
#[derive(Props, Debug, Clone, PartialEq, Eq)]
pub struct LandingPageProps {
    /// Year printed in the footer copyright line.
    pub year: i32,
    /// Provider snippet for the booking widget mount; `None` renders the placeholder.
    #[props(!optional)]
    pub booking_embed: Option<String>,
}

/// The whole landing page.
#[allow(non_snake_case)]
pub fn LandingPage(props: LandingPageProps) -> Element {
    rsx! {
        div { class: "min-h-screen bg-white text-gray-900",
            Nav {}
            main {
                Hero {}
                ProblemSection {}
                FeaturesSection {}
                ProcessSection {}
                PricingSection {}
                BookingSection { embed: props.booking_embed.clone() }
                FaqSection {}
            }
            Footer { year: props.year }
        }
    }
}
