use super::{CARD, MUTED};
use crate::components::CheckList;
use bagops_content::{PricingPlan, anchors};
use dioxus::prelude::*;

/// A pricing tier card.
///
/// Carries the `plan-{slug}` and `{slug}-setup` test hooks. The recommended plan gets a
/// heavier border and a "Recommended" badge next to its name.
#[component]
pub fn PlanCard(plan: PricingPlan) -> Element {
    let PricingPlan { slug, name, monthly, summary, included, recommended, cta, footnote, .. } =
        plan;
    let setup = plan.setup_label();
    let border = if recommended { "border-2 border-black" } else { "" };
    let book = anchors::href(anchors::BOOK);

    rsx! {
        div {
            class: "{CARD} {border}",
            "data-testid": "plan-{slug}",
            "aria-label": "{name} Plan",
            div { class: "p-6 flex flex-col h-full",
                div { class: "flex items-center justify-between",
                    h3 { class: "font-medium text-lg", "{name}" }
                    if recommended {
                        span {
                            class: "text-xs uppercase tracking-wider text-white bg-black px-2 py-1 rounded-full",
                            "data-testid": "recommended",
                            "Recommended"
                        }
                    }
                }
                div { class: "mt-2 text-2xl font-semibold", "data-testid": "{slug}-price",
                    "{monthly} "
                    span { class: "text-base font-normal {MUTED}", "/mo" }
                }
                p { class: "text-sm {MUTED} mt-2", "{summary}" }
                CheckList { items: included, class: "mt-4 space-y-2 text-sm flex-1" }
                div { class: "mt-6",
                    div { class: "text-xs mb-2 {MUTED}", "data-testid": "{slug}-setup", "{setup}" }
                    a {
                        class: "block w-full text-center rounded-xl bg-black text-white px-4 py-2 text-sm font-medium hover:opacity-90",
                        href: "{book}",
                        "{cta}"
                    }
                    {footnote.map(|note| rsx! { p { class: "text-xs {MUTED} mt-3", "{note}" } })}
                }
            }
        }
    }
}
