use crate::components::{
    CheckList, FaqItem, FeatureCard, FlowCard, IconGlyph, PlanCard, StatBlock, StepRow,
    TestimonialCard,
};
use bagops_content::{
    AUTOMATION_FLOW, BOOKING_PERKS, BRAND, FAQ, FEATURES, INCLUDED, INTEGRATION_CHECKLIST, Icon,
    PAIN_POINTS, PRICING_PLANS, PROCESS_STEPS, SETUP_FEE, STATS, TESTIMONIAL, anchors,
};
use dioxus::prelude::*;

const CONTAINER: &str = "max-w-6xl mx-auto px-4";
const H2: &str = "text-2xl md:text-3xl font-semibold tracking-tight";
const LEAD: &str = "mt-3 text-gray-500";
const SHADED: &str = "border-t bg-gray-50/60";
const TEXT_LINK: &str = "inline-flex items-center gap-2 text-sm font-medium hover:opacity-80";
const PRIMARY_BUTTON: &str =
    "inline-flex items-center gap-2 rounded-2xl bg-black text-white px-6 py-3 text-sm font-medium hover:opacity-90";

#[component]
pub fn Nav() -> Element {
    let features = anchors::href(anchors::FEATURES);
    let pricing = anchors::href(anchors::PRICING);
    let faq = anchors::href(anchors::FAQ);
    let book = anchors::href(anchors::BOOK);

    rsx! {
        header { class: "sticky top-0 z-40 bg-white/70 backdrop-blur border-b",
            div { class: "{CONTAINER} py-3 flex items-center justify-between",
                div { class: "flex items-center gap-2",
                    div { class: "w-7 h-7 rounded-xl bg-black" }
                    span { class: "font-semibold tracking-tight", "{BRAND} Automations" }
                }
                nav { class: "hidden md:flex items-center gap-8 text-sm",
                    a { href: "{features}", class: "hover:opacity-80", "Features" }
                    a { href: "{pricing}", class: "hover:opacity-80", "Pricing" }
                    a { href: "{faq}", class: "hover:opacity-80", "FAQ" }
                    a {
                        href: "{book}",
                        class: "rounded-xl bg-black text-white px-4 py-2 hover:opacity-90",
                        "Book a Setup Call"
                    }
                }
            }
        }
    }
}

#[component]
pub fn Hero() -> Element {
    let book = anchors::href(anchors::BOOK);
    let features = anchors::href(anchors::FEATURES);

    rsx! {
        section { class: "relative overflow-hidden",
            div { class: "{CONTAINER} py-16 md:py-24 grid md:grid-cols-2 gap-10 items-center",
                div {
                    h1 { class: "fade-up text-3xl md:text-5xl font-semibold tracking-tight",
                        "Automate Your Growth: "
                        span { class: "inline-block", "CRM + Pipeline + Follow‑up" }
                    }
                    p { class: "mt-4 text-base md:text-lg text-gray-500 leading-relaxed",
                        "Done‑for‑you setup in GoHighLevel: organized CRM, conversion‑ready pipeline, and a base automation suite that stops lead leakage and increases show‑up rate."
                    }
                    div { class: "mt-6 flex flex-wrap gap-3",
                        a { href: "{book}", class: "{PRIMARY_BUTTON}",
                            "Book Your Setup "
                            IconGlyph { icon: Icon::ArrowRight }
                        }
                        a { href: "{features}", class: "{TEXT_LINK}",
                            "See how it works "
                            IconGlyph { icon: Icon::ChevronRight }
                        }
                    }
                    div { class: "mt-8 grid grid-cols-3 gap-4",
                        for (i, stat) in STATS.iter().enumerate() {
                            StatBlock { key: "{i}", stat: *stat }
                        }
                    }
                }
                div { class: "fade-up fade-up-delayed relative",
                    div { class: "rounded-3xl border bg-white shadow-sm p-6",
                        div { class: "text-sm font-medium mb-4", "Sample Automation Flow" }
                        div { class: "grid grid-cols-1 gap-3",
                            for (i, step) in AUTOMATION_FLOW.iter().enumerate() {
                                FlowCard { key: "{i}", step: *step }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProblemSection() -> Element {
    rsx! {
        section { class: "{SHADED}", id: anchors::PROBLEM,
            div { class: "{CONTAINER} py-14 grid md:grid-cols-2 gap-10",
                div {
                    h2 { class: "{H2}", "Tired of leads slipping through the cracks?" }
                    p { class: "{LEAD}",
                        "Most small businesses lose revenue from inconsistent follow‑up and scattered tools. We fix that with a single, integrated system."
                    }
                    CheckList { items: PAIN_POINTS, class: "mt-6 space-y-3 text-sm" }
                }
                TestimonialCard { testimonial: TESTIMONIAL }
            }
        }
    }
}

#[component]
pub fn FeaturesSection() -> Element {
    rsx! {
        section { class: "bg-white", id: anchors::FEATURES,
            div { class: "{CONTAINER} py-16",
                div { class: "max-w-3xl",
                    h2 { class: "{H2}", "One Setup. Everything You Need." }
                    p { class: "{LEAD}",
                        "We tailor a proven template to your business and launch in days, not months."
                    }
                }
                div { class: "grid md:grid-cols-2 lg:grid-cols-4 gap-4 mt-8",
                    for (i, feature) in FEATURES.iter().enumerate() {
                        FeatureCard { key: "{i}", feature: *feature }
                    }
                }
                div { class: "mt-10 grid md:grid-cols-2 gap-6",
                    div { class: "rounded-2xl border p-6",
                        h3 { class: "font-medium text-lg",
                            "Works for local service, solo‑pros, and lean teams"
                        }
                        p { class: "text-sm text-gray-500 mt-2",
                            "Real estate, fitness/wellness, trades, clinics, agencies, coaching, and more."
                        }
                        div { class: "flex items-center gap-4 mt-4 text-sm",
                            div { class: "flex items-center gap-2",
                                IconGlyph { icon: Icon::Users }
                                " Multi‑inbox + roles"
                            }
                            div { class: "flex items-center gap-2",
                                IconGlyph { icon: Icon::Sparkles }
                                " AI‑assisted replies"
                            }
                        }
                    }
                    div { class: "rounded-2xl border p-6",
                        h3 { class: "font-medium text-lg", "Fast integration" }
                        p { class: "text-sm text-gray-500 mt-2",
                            "Connect forms, calendars, and phone/email in minutes. Keep your domain + numbers."
                        }
                        CheckList { items: INTEGRATION_CHECKLIST }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProcessSection() -> Element {
    rsx! {
        section { class: "{SHADED}",
            div { class: "{CONTAINER} py-16 grid md:grid-cols-2 gap-10",
                div {
                    h2 { class: "{H2}", "Implementation in a Week (or Two)" }
                    p { class: "{LEAD}",
                        "A simple, structured rollout so you’re live fast and confident."
                    }
                    ol { class: "mt-6 space-y-5",
                        for (i, step) in PROCESS_STEPS.iter().enumerate() {
                            li { key: "{i}", StepRow { step: *step } }
                        }
                    }
                }
                div { class: "rounded-3xl border bg-white p-6",
                    h3 { class: "font-medium", "What’s Included" }
                    CheckList { items: INCLUDED }
                }
            }
        }
    }
}

#[component]
pub fn PricingSection() -> Element {
    rsx! {
        section { class: "bg-white", id: anchors::PRICING,
            div { class: "{CONTAINER} py-16",
                div { class: "max-w-3xl text-center mx-auto",
                    h2 { class: "{H2}", "Choose Your Plan" }
                    p { class: "{LEAD}",
                        "All plans include the same "
                        strong { "{SETUP_FEE} setup" }
                        ". Select the ongoing support level that fits your needs."
                    }
                }
                div { class: "mt-12 grid md:grid-cols-3 gap-6",
                    for (i, plan) in PRICING_PLANS.iter().enumerate() {
                        PlanCard { key: "{i}", plan: *plan }
                    }
                }
            }
        }
    }
}

/// Booking call-to-action and the external widget mount point.
///
/// The embed snippet is inserted verbatim; nothing here parses or validates it, and the
/// `data-external` wrapper keeps it out of the anchor audit.
#[component]
pub fn BookingSection(#[props(!optional)] embed: Option<String>) -> Element {
    let widget = anchors::href(anchors::BOOKING_WIDGET);
    let faq = anchors::href(anchors::FAQ);

    let mount = match embed.as_deref().filter(|s| !s.trim().is_empty()) {
        Some(snippet) => rsx! {
            div {
                class: "w-full",
                "data-testid": "booking-embed",
                "data-external": "booking",
                dangerous_inner_html: "{snippet}",
            }
        },
        None => rsx! {
            div {
                class: "aspect-video w-full rounded-xl bg-gray-50 border flex items-center justify-center text-sm text-gray-500",
                "data-testid": "booking-placeholder",
                "GHL form embed placeholder"
            }
        },
    };

    rsx! {
        section { class: "{SHADED}", id: anchors::BOOK,
            div { class: "{CONTAINER} py-16 grid md:grid-cols-2 gap-10 items-center",
                div {
                    h2 { class: "{H2}", "Stop Losing Leads. Start Automating Growth." }
                    p { class: "{LEAD}",
                        "Tell us a bit about your business and we’ll share the playbook + timeline for your setup on a quick call."
                    }
                    CheckList { items: BOOKING_PERKS, class: "mt-6 space-y-2 text-sm" }
                    div { class: "mt-6 flex gap-3",
                        a { href: "{widget}", class: "{PRIMARY_BUTTON}", "Open Form" }
                        a { href: "{faq}", class: "{TEXT_LINK}",
                            "Have questions? "
                            IconGlyph { icon: Icon::ChevronRight }
                        }
                    }
                }
                div { id: anchors::BOOKING_WIDGET, class: "rounded-3xl border bg-white p-6",
                    div { class: "text-sm font-medium", "Booking / Intake Form" }
                    p { class: "text-sm text-gray-500 mb-4",
                        "Embed your GoHighLevel calendar or form below."
                    }
                    {mount}
                }
            }
        }
    }
}

#[component]
pub fn FaqSection() -> Element {
    rsx! {
        section { class: "bg-white", id: anchors::FAQ,
            div { class: "{CONTAINER} py-16",
                div { class: "max-w-3xl",
                    h2 { class: "{H2}", "FAQ" }
                    p { class: "{LEAD}", "Quick answers to common questions." }
                }
                div { class: "mt-8 w-full",
                    for (index, entry) in FAQ.iter().enumerate() {
                        FaqItem { key: "{index}", entry: *entry, index }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Footer(year: i32) -> Element {
    rsx! {
        footer { class: "{SHADED}",
            div { class: "{CONTAINER} py-10 text-sm text-gray-500 flex flex-col md:flex-row items-center md:justify-between gap-4",
                div { "data-testid": "copyright", "© {year} {BRAND} • CRM + Automation" }
                div { class: "flex items-center gap-6",
                    a { class: "hover:opacity-80", href: "#", "Privacy" }
                    a { class: "hover:opacity-80", href: "#", "Terms" }
                    a { class: "hover:opacity-80", href: "#", "Contact" }
                }
            }
        }
    }
}
