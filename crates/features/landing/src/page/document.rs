use dioxus::prelude::*;

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";
const LUCIDE_CDN: &str = "https://unpkg.com/lucide@latest";

/// Entrance animation for elements tagged `fade-up`. Cosmetic only.
const FADE_UP_CSS: &str = "@keyframes fade-up{from{opacity:0;transform:translateY(10px)}to{opacity:1;transform:none}}\
.fade-up{animation:fade-up .5s ease-out both}\
.fade-up-delayed{animation-duration:.6s;animation-delay:.1s}\
@media (prefers-reduced-motion:reduce){.fade-up{animation:none}}";

#[derive(Props, Debug, Clone, PartialEq, Eq)]
pub struct DocumentHeadProps {
    pub title: String,
    pub description: String,
}

/// Contents of the document `<head>`: metadata, styling and icon scripts.
#[allow(non_snake_case)]
pub fn DocumentHead(props: DocumentHeadProps) -> Element {
    let DocumentHeadProps { title: page_title, description: page_description } = props;
    rsx! {
        meta { charset: "utf-8" }
        meta { name: "viewport", content: "width=device-width, initial-scale=1.0" }
        title { "{page_title}" }
        meta { name: "description", content: "{page_description}" }
        script { src: TAILWIND_CDN }
        script { src: LUCIDE_CDN }
        style { dangerous_inner_html: FADE_UP_CSS }
    }
}
