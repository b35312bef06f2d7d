use bagops_content::anchors;
use bagops_landing::{RenderOptions, audit, render_page};
use scraper::{ElementRef, Html, Selector};

fn page() -> Html {
    Html::parse_fragment(&render_page(&RenderOptions::for_year(2030)))
}

fn css(selector: &str) -> Selector {
    Selector::parse(selector).unwrap_or_else(|err| panic!("invalid selector {selector}: {err:?}"))
}

fn one<'a>(scope: ElementRef<'a>, selector: &str) -> ElementRef<'a> {
    let parsed = css(selector);
    let mut found = scope.select(&parsed);
    let first = found.next().unwrap_or_else(|| panic!("{selector} is rendered"));
    assert!(found.next().is_none(), "{selector} is rendered more than once");
    first
}

fn text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

#[test]
fn every_plan_shows_the_shared_setup_fee() {
    let html = page();
    for slug in ["starter", "core", "pro"] {
        let card = one(html.root_element(), &format!(r#"[data-testid="plan-{slug}"]"#));
        let setup = one(card, &format!(r#"[data-testid="{slug}-setup"]"#));
        assert_eq!(text(setup), "Setup Fee: $2,500");
    }
}

#[test]
fn monthly_prices() {
    let html = page();
    for (slug, price) in [("starter", "$0 /mo"), ("core", "$500 /mo"), ("pro", "$1,500 /mo")] {
        let card = one(html.root_element(), &format!(r#"[data-testid="plan-{slug}"]"#));
        let label = one(card, &format!(r#"[data-testid="{slug}-price"]"#));
        assert_eq!(text(label), price, "{slug} price");
    }
}

#[test]
fn only_core_is_recommended() {
    let html = page();
    let badges: Vec<_> = html.select(&css(r#"[data-testid="recommended"]"#)).collect();
    assert_eq!(badges.len(), 1);
    assert_eq!(text(badges[0]), "Recommended");

    let owner = badges[0]
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find_map(|element| element.value().attr("data-testid").filter(|id| id.starts_with("plan-")));
    assert_eq!(owner, Some("plan-core"));
}

#[test]
fn plan_cards_are_labeled() {
    let html = page();
    for (slug, name) in [("starter", "Starter"), ("core", "Core"), ("pro", "Pro")] {
        let card = one(html.root_element(), &format!(r#"[data-testid="plan-{slug}"]"#));
        assert_eq!(card.value().attr("aria-label"), Some(format!("{name} Plan").as_str()));
    }
}

#[test]
fn repeated_sections_have_expected_sizes() {
    let html = page();
    for (hook, expected) in [("feature", 4), ("faq-item", 5), ("step", 4), ("stat", 3)] {
        let count = html.select(&css(&format!(r#"[data-testid="{hook}"]"#))).count();
        assert_eq!(count, expected, "{hook} count");
    }
}

#[test]
fn steps_render_in_order() {
    let html = page();
    let titles: Vec<_> = html.select(&css(r#"[data-testid="step"] h5"#)).map(text).collect();
    assert_eq!(titles, ["Blueprint", "Build", "Integrate", "Launch"]);
}

#[test]
fn testimonial_quote_uses_straight_quotes() {
    let html = page();
    let quote = text(one(html.root_element(), r#"[data-testid="testimonial"] p"#));
    assert!(quote.starts_with("\"We went from"), "unexpected quote: {quote}");
    assert!(quote.ends_with('"'), "unexpected quote: {quote}");
}

#[test]
fn every_anchor_resolves() {
    let html = render_page(&RenderOptions::for_year(2030));
    let report = audit(&html).expect("no dangling anchors");
    for id in anchors::ALL {
        assert!(report.has_id(id), "missing section #{id}");
    }
    for target in ["features", "pricing", "faq", "book", "ghl-form"] {
        assert!(report.references.contains(target), "nothing links to #{target}");
    }
}

#[test]
fn sections_keep_their_order() {
    let html = page();
    let landmarks: Vec<String> = html
        .select(&css("header, section[id], #ghl-form, footer"))
        .map(|element| element.value().id().unwrap_or(element.value().name()).to_owned())
        .collect();
    assert_eq!(
        landmarks,
        ["header", "problem", "features", "pricing", "book", "ghl-form", "faq", "footer"]
    );
}

#[test]
fn faq_is_an_exclusive_accordion() {
    let html = page();
    let items: Vec<_> = html.select(&css(r#"details[name="faq"]"#)).collect();
    assert_eq!(items.len(), 5);
    assert!(text(one(items[0], "summary")).starts_with("How long does setup take?"));
    assert_eq!(items[4].value().attr("data-value"), Some("q5"));
}
