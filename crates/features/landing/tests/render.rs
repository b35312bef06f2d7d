use bagops_landing::{RenderOptions, audit, render_document, render_page};
use chrono::{Datelike, Local};
use std::fs;
use tempfile::tempdir;

#[test]
fn rendering_is_idempotent() {
    let options = RenderOptions::for_year(2030);
    assert_eq!(render_page(&options), render_page(&options));
    assert_eq!(render_document(&options), render_document(&options));
}

#[test]
fn footer_carries_the_render_year() {
    let html = render_page(&RenderOptions::for_year(2031));
    assert!(html.contains("© 2031 BagOps™ • CRM + Automation"));

    let year = Local::now().year();
    let html = render_page(&RenderOptions::current());
    assert!(html.contains(&format!("© {year} BagOps™")));
}

#[test]
fn only_the_year_varies_between_years() {
    let a = render_page(&RenderOptions::for_year(2030));
    let b = render_page(&RenderOptions::for_year(2031));
    assert_ne!(a, b);
    assert_eq!(a.replace("© 2030", "© 2031"), b);
}

#[test]
fn placeholder_without_embed() {
    let html = render_page(&RenderOptions::for_year(2030));
    assert!(html.contains("GHL form embed placeholder"));
    assert!(!html.contains("data-testid=\"booking-embed\""));
}

#[test]
fn embed_is_inserted_verbatim_inside_the_mount() {
    let snippet = r#"<iframe src="https://widget.example/booking?id=42&amp;x=1" style="width:100%"></iframe>"#;
    let html = render_page(&RenderOptions::for_year(2030).with_booking_embed(snippet));

    let mount = html.find(" id=\"ghl-form\"").expect("mount rendered");
    let at = html.find(snippet).expect("snippet rendered verbatim");
    assert!(at > mount);
    assert!(!html.contains("GHL form embed placeholder"));
    audit(&html).expect("embed does not break anchors");
}

#[test]
fn blank_embed_falls_back_to_placeholder() {
    let html = render_page(&RenderOptions::for_year(2030).with_booking_embed("  "));
    assert!(html.contains("GHL form embed placeholder"));
}

#[test]
fn write_document_creates_parents() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("dist").join("index.html");

    let written = bagops_landing::render::write_document(&path, &RenderOptions::for_year(2030))
        .expect("document written");

    let on_disk = fs::read_to_string(&path).expect("file exists");
    assert_eq!(on_disk.len(), written);
    assert!(on_disk.starts_with("<!DOCTYPE html>"));
    assert!(on_disk.contains("data-testid=\"plan-core\""));
}

#[test]
fn embed_internal_links_do_not_fail_the_write() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("index.html");
    let snippet = r##"<div><a href="#step-2">Next</a><div id="step-3"></div></div>"##;
    let options = RenderOptions::for_year(2030).with_booking_embed(snippet);

    bagops_landing::render::write_document(&path, &options).expect("embed markup is not audited");

    let on_disk = fs::read_to_string(&path).expect("file exists");
    assert!(on_disk.contains(snippet));
}
