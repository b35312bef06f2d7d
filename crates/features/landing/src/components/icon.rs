use bagops_content::Icon;
use dioxus::prelude::*;

/// Lucide placeholder; the client-side lucide script swaps it for the SVG.
#[component]
pub fn IconGlyph(icon: Icon, #[props(default = "w-4 h-4")] class: &'static str) -> Element {
    let name = icon.as_ref();
    rsx! {
        i { class: "{class}", "data-lucide": "{name}", "aria-hidden": "true" }
    }
}
