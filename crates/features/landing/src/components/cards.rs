use super::{CARD, MUTED};
use crate::components::IconGlyph;
use bagops_content::{FeatureItem, FlowStep, Icon, ProcessStep, Stat, Testimonial};
use dioxus::prelude::*;

#[component]
pub fn StatBlock(stat: Stat) -> Element {
    let Stat { value, label } = stat;
    rsx! {
        div { class: "text-center", "data-testid": "stat",
            div { class: "text-3xl md:text-4xl font-semibold tracking-tight", "{value}" }
            div { class: "text-sm {MUTED} mt-1", "{label}" }
        }
    }
}

/// A row of the hero's automation-flow mock.
#[component]
pub fn FlowCard(step: FlowStep) -> Element {
    let FlowStep { icon, text, highlight } = step;
    rsx! {
        div { class: "rounded-xl border bg-gray-50 p-4 flex items-center gap-3",
            IconGlyph { icon }
            div { class: "text-sm",
                "{text}"
                {highlight.map(|h| rsx! { span { class: "font-medium", "{h}" } })}
            }
        }
    }
}

#[component]
pub fn FeatureCard(feature: FeatureItem) -> Element {
    let FeatureItem { icon, title, description } = feature;
    rsx! {
        div { class: "{CARD}", "data-testid": "feature",
            div { class: "p-6",
                div { class: "flex items-start gap-4",
                    div { class: "p-2 rounded-xl bg-gray-50 border",
                        IconGlyph { icon, class: "w-5 h-5" }
                    }
                    div {
                        h4 { class: "font-medium text-lg leading-tight", "{title}" }
                        p { class: "text-sm {MUTED} mt-1 leading-relaxed", "{description}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn StepRow(step: ProcessStep) -> Element {
    let ProcessStep { ordinal, title, description } = step;
    rsx! {
        div { class: "flex gap-4 items-start", "data-testid": "step",
            div { class: "flex-shrink-0 w-8 h-8 rounded-full bg-black text-white flex items-center justify-center text-sm font-semibold",
                "{ordinal}"
            }
            div {
                h5 { class: "font-medium leading-tight", "{title}" }
                p { class: "text-sm {MUTED} mt-1 leading-relaxed", "{description}" }
            }
        }
    }
}

#[component]
pub fn TestimonialCard(testimonial: Testimonial) -> Element {
    let Testimonial { quote, attribution } = testimonial;
    rsx! {
        div { class: "{CARD}", "data-testid": "testimonial",
            div { class: "p-6",
                IconGlyph { icon: Icon::Quote, class: "w-6 h-6" }
                p { class: "mt-3 text-base leading-relaxed", "\"{quote}\"" }
                div { class: "mt-4 text-sm {MUTED}", "— {attribution}" }
            }
        }
    }
}

/// Bulleted list with a check mark per item.
#[component]
pub fn CheckList(
    items: &'static [&'static str],
    #[props(default = "mt-3 space-y-2 text-sm")] class: &'static str,
) -> Element {
    rsx! {
        ul { class: "{class}",
            for item in items.iter() {
                li { key: "{item}", class: "flex items-start gap-2",
                    IconGlyph { icon: Icon::Check, class: "w-4 h-4 mt-0.5" }
                    " {item}"
                }
            }
        }
    }
}
