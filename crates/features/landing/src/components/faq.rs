use bagops_content::FaqEntry;
use dioxus::prelude::*;

/// One accordion entry.
///
/// Uses native `<details>`; entries sharing the `faq` group name close each other when
/// one opens, so no client state is needed.
#[component]
pub fn FaqItem(entry: FaqEntry, index: usize) -> Element {
    let FaqEntry { question, answer } = entry;
    let value = index + 1;
    rsx! {
        details {
            class: "group border-b py-4",
            "name": "faq",
            "data-testid": "faq-item",
            "data-value": "q{value}",
            summary { class: "flex cursor-pointer list-none items-center justify-between font-medium",
                "{question}"
                span { class: "transition-transform group-open:rotate-180", "⌄" }
            }
            div { class: "pt-3 text-sm text-gray-500 leading-relaxed", "{answer}" }
        }
    }
}
