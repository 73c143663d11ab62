use super::*;
use crate::model::{Content, FeatureLayout, Speaker, Topic, WEEKLY_NERD};
use crate::test_support::talk;

fn entry(title: &str, description: &str) -> Entry {
    Entry {
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn section(title: &str, description: &str, span: Option<u32>) -> Section {
    Section {
        title: title.to_string(),
        description: Some(description.to_string()),
        span,
        items: None,
    }
}

fn with_content(content: Content) -> TalkRecord {
    let mut t = talk("CE-WN", WEEKLY_NERD, "2024-03-12", "Cassie Evans");
    t.title = "SVG Animation".to_string();
    t.date = "12 March 2024".to_string();
    t.content = content;
    t
}

fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("missing {:?} in:\n{}", needle, html))
}

#[test]
fn header_meta_and_summary() {
    let mut t = with_content(Content {
        summary: "Motion on the web.".to_string(),
        ..Content::default()
    });
    t.speaker = Speaker::Many(vec!["Ana".to_string(), "Bo".to_string()]);
    let html = render_detail(&t);

    assert!(html.starts_with("<div class=\"bento-container\">"));
    assert!(html.contains("<h2>SVG Animation</h2>"));
    assert!(html.contains("<h3>Ana, Bo</h3>"));
    assert!(html.contains("<p>Weekly Nerd</p>"));
    assert!(html.contains("<p>12 March 2024</p>"));
    assert!(html.contains("<p>Motion on the web.</p>"));
    assert!(!html.contains("highlight"));
    assert!(!html.contains("conclusion"));
}

#[test]
fn blocks_follow_canonical_order() {
    let t = with_content(Content {
        summary: "S".to_string(),
        conclusion: Some("Done".to_string()),
        takeaways: Some(vec!["Take".to_string()]),
        resources: Some(vec!["https://example.org".to_string()]),
        challenges: Some("Hard parts".to_string()),
        features: Some(vec![entry("Feat", "desc")]),
        sections: Some(vec![section("Sec", "sec desc", None)]),
        introduction: Some("Intro".to_string()),
        ..Content::default()
    });
    let html = render_detail(&t);

    let order = [
        position(&html, "<p>S</p>"),
        position(&html, "<p>Intro</p>"),
        position(&html, "<p>Sec</p>"),
        position(&html, "<strong>Feat:</strong>"),
        position(&html, "resources-list"),
        position(&html, "takeaways-list"),
        position(&html, "<p>Hard parts</p>"),
        position(&html, "<strong>Conclusion:</strong> Done"),
    ];
    assert!(order.windows(2).all(|w| w[0] < w[1]), "{:?}", order);
}

#[test]
fn any_span_switches_sections_to_bento_grid() {
    let t = with_content(Content {
        sections: Some(vec![
            section("Wide", "two columns", Some(2)),
            section("Narrow", "one column", None),
        ]),
        ..Content::default()
    });
    let html = render_detail(&t);

    assert!(html.contains("<div class=\"bento-grid\">"));
    assert_eq!(html.matches("<div class=\"bento-box span-2\">").count(), 1);
    assert_eq!(html.matches("<div class=\"bento-box\">").count(), 1);
    assert!(position(&html, "<h4>Wide</h4>") < position(&html, "<h4>Narrow</h4>"));
    assert!(html.contains("<p>two columns</p>"));
}

#[test]
fn listed_sections_show_items_or_description() {
    let mut with_items = section("Tools", "unused", None);
    with_items.items = Some(vec![entry("GSAP", "timeline library")]);
    let t = with_content(Content {
        sections: Some(vec![with_items, section("Why", "Because.", None)]),
        ..Content::default()
    });
    let html = render_detail(&t);

    assert!(!html.contains("bento-grid"));
    assert!(html.contains("<div class=\"highlight\">\n<p>Tools</p>"));
    assert!(html.contains("<li><strong>GSAP:</strong> timeline library</li>"));
    assert!(!html.contains("unused"));
    assert!(html.contains("<div class=\"highlight\">\n<p>Why</p>"));
    assert!(html.contains("<p>Because.</p>"));
}

#[test]
fn feature_layout_grid_uses_cards_and_default_heading() {
    let t = with_content(Content {
        features: Some(vec![entry("Morphing", "shape tweening"), entry("Paths", "draw")]),
        feature_layout: Some(FeatureLayout::Grid),
        ..Content::default()
    });
    let html = render_detail(&t);

    assert!(html.contains("<p>Key features highlighted in the presentation:</p>"));
    assert!(html.contains("<div class=\"feature-grid\">"));
    assert_eq!(html.matches("<div class=\"feature-card\">").count(), 2);
    assert!(html.contains("<h4>Morphing</h4>\n<p>shape tweening</p>"));
}

#[test]
fn feature_list_takes_heading_from_first_highlight() {
    let t = with_content(Content {
        features: Some(vec![entry("Morphing", "shape tweening")]),
        highlights: Some(vec!["What we covered".to_string(), "ignored".to_string()]),
        ..Content::default()
    });
    let html = render_detail(&t);

    assert!(!html.contains("feature-grid"));
    assert!(html.contains("<p>What we covered</p>"));
    assert!(!html.contains("ignored"));
    assert!(html.contains("<li><strong>Morphing:</strong> shape tweening</li>"));
}

#[test]
fn speaker_panels_prefer_topics_over_details() {
    let t = with_content(Content {
        speakers: Some(vec![
            SpeakerPanel {
                name: "Ana".to_string(),
                title: "Designer".to_string(),
                role: Some("Lead".to_string()),
                topics: Some(vec![Topic {
                    title: "Color".to_string(),
                    details: "Contrast ratios".to_string(),
                }]),
                details: Some("hidden".to_string()),
            },
            SpeakerPanel {
                name: "Bo".to_string(),
                title: "Developer".to_string(),
                role: None,
                topics: None,
                details: Some("Builds things".to_string()),
            },
        ]),
        ..Content::default()
    });
    let html = render_detail(&t);

    assert!(html.contains("<div class=\"speakers-section\">"));
    assert_eq!(html.matches("<div class=\"speaker-card\">").count(), 2);
    assert!(html.contains("<p class=\"speaker-role\">Lead</p>"));
    assert_eq!(html.matches("speaker-role").count(), 1);
    assert!(html.contains("<h5>Color</h5>\n<p>Contrast ratios</p>"));
    assert!(!html.contains("hidden"));
    assert!(html.contains("<p>Builds things</p>"));
}

#[test]
fn resources_and_takeaways_have_fixed_headings() {
    let t = with_content(Content {
        resources: Some(vec!["a.css".to_string(), "b.js".to_string()]),
        takeaways: Some(vec!["Ship it".to_string()]),
        ..Content::default()
    });
    let html = render_detail(&t);

    assert!(html.contains("<p>Resources:</p>"));
    assert!(html.contains("<ul class=\"resources-list\">\n<li>a.css</li>\n<li>b.js</li>\n</ul>"));
    assert!(html.contains("<p>Key Takeaways:</p>"));
    assert!(html.contains("<ul class=\"takeaways-list\">\n<li>Ship it</li>\n</ul>"));
}

#[test]
fn empty_groups_render_nothing() {
    let t = with_content(Content {
        resources: Some(Vec::new()),
        conclusion: Some(String::new()),
        ..Content::default()
    });
    let html = render_detail(&t);
    assert!(!html.contains("Resources:"));
    assert!(!html.contains("conclusion"));
}

#[test]
fn nested_text_is_escaped() {
    let t = with_content(Content {
        summary: "<script>alert(1)</script>".to_string(),
        takeaways: Some(vec!["a & b".to_string()]),
        conclusion: Some("it's \"done\"".to_string()),
        ..Content::default()
    });
    let html = render_detail(&t);

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(html.contains("<li>a &amp; b</li>"));
    assert!(html.contains("it&#39;s &quot;done&quot;"));
}
