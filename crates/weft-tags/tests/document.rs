//! End-to-end document tests
//!
//! Full construction-to-markup scenarios, including the companion
//! script bundling colorized node lookups.

use serde_json::json;
use weft_tags::dom::{Container, Markup, Procedure, ELEMENTS_GLOBAL};
use weft_tags::{helpers, tags};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[test]
fn test_hello_world_document() {
    init_tracing();
    let mut page = tags::document("Hello World");
    page.body_mut()
        .push(tags::span().append(tags::pcdata("Hello World")));

    let html = page.render();
    assert!(html.starts_with("<!doctype html>"));
    assert!(html.contains("<html lang=\"en\">"));
    assert!(html.contains("charset=\"utf-8\""));
    assert!(html.contains(">Hello World</title>"));
    assert!(html.contains(">Hello World</span>"));
    assert_eq!(html.matches("<script").count(), 1);
    // Content precedes the generated script inside the body
    assert!(html.find("</span>").unwrap() < html.find("<script").unwrap());
}

#[test]
fn test_colorized_nodes_reach_the_client() {
    init_tracing();
    let counter = tags::span()
        .append(tags::pcdata("0"))
        .prop("count", json!(0))
        .prop("step", json!(2))
        .colorize();
    let counter_uid = counter.uid().to_string();

    let mut page = tags::document("Counter");
    page.body_mut().push(tags::div().append(counter));
    page.defer(Procedure::new("startCounter();"));

    let html = page.render();
    assert!(html.contains(ELEMENTS_GLOBAL));
    assert!(html.contains(&format!("\"{counter_uid}\"")));
    assert!(html.contains(&format!(
        "document.querySelector('[data-id=\"{counter_uid}\"]')"
    )));
    assert!(html.contains("\"count\": 0"));
    assert!(html.contains("\"step\": 2"));
    assert!(html.contains("startCounter();"));
}

#[test]
fn test_referenced_node_colorized_late_reaches_the_client() {
    init_tracing();
    let mut holder = tags::div();
    let widget = tags::span().prop("n", json!(1));
    holder.reference(&widget);

    // Colorized and appended only after being explicitly referenced
    let widget = widget.colorize();
    let widget_uid = widget.uid().to_string();
    holder.push(widget);

    let mut page = tags::document("Late");
    page.body_mut().push(holder);

    let html = page.render();
    let script_start = html.find("<script").unwrap();
    assert!(html[script_start..].contains(&widget_uid));
    assert!(html[script_start..].contains("\"n\": 1"));
}

#[test]
fn test_uncolorized_nodes_stay_server_side() {
    let plain = tags::span().append(tags::pcdata("quiet"));
    let plain_uid = plain.uid().to_string();

    let mut page = tags::document("Quiet");
    page.body_mut().push(plain);

    let html = page.render();
    let script_start = html.find("<script").unwrap();
    // The uid appears in the markup but not in the companion script
    assert!(html[..script_start].contains(&plain_uid));
    assert!(!html[script_start..].contains(&plain_uid));
}

#[test]
fn test_repeated_render_is_stable() {
    let mut page = tags::document("Stable");
    page.body_mut()
        .push(tags::p().append(tags::cdata("1 < 2")).colorize());

    assert_eq!(page.render(), page.render());
}

#[test]
fn test_escaped_body_content() {
    let mut page = tags::document("Escapes");
    page.body_mut()
        .push(tags::p().append(tags::cdata("<strong>Yo</strong>")));

    let html = page.render();
    assert!(html.contains("&lt;strong&gt;Yo&lt;/strong&gt;"));
    assert!(!html.contains("<strong>Yo</strong>"));
}

#[test]
fn test_full_page_composition() {
    init_tracing();
    let mut page = tags::document("Demo");
    page.head_mut()
        .push(tags::style().append(tags::pcdata("body { margin: 0 }")));
    page.body_mut()
        .push(tags::h1().append(tags::pcdata("Demo")))
        .push(tags::br())
        .push(helpers::img("/logo.png", "logo"))
        .push(
            tags::form()
                .attr("method", "get")
                .attr("action", "/submit")
                .append(helpers::select_from("pick", vec![("a", "A"), ("b", "B")]))
                .append(helpers::input_field("text", "q", "")),
        )
        .push(helpers::completable_input("engine", vec!["weft", "loom"]));

    let html = page.render();
    assert!(html.contains("body { margin: 0 }"));
    assert!(html.contains("<h1 data-id=\""));
    assert!(html.contains("<br data-id=\""));
    assert!(html.contains("alt=\"logo\""));
    assert!(html.contains("action=\"/submit\""));
    assert!(html.contains("<datalist"));
    assert_eq!(html.matches("<body").count(), 1);
    assert!(html.ends_with("</body></html>"));
}
