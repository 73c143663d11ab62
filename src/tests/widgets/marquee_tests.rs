use super::*;

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn default_labels_size_the_track() {
    let m = Marquee::default();
    assert_eq!(m.labels().len(), 8);
    assert_eq!(m.set_width(), 1760);
    assert_eq!(m.track_width(), 3520);
    assert_eq!(m.duration_secs(), 24);
}

#[test]
fn track_repeats_the_labels_once() {
    let m = Marquee::new(labels(&["a", "b", "c"]));
    let track: Vec<&str> = m.track().collect();
    assert_eq!(track, vec!["a", "b", "c", "a", "b", "c"]);
}

#[test]
fn html_track_holds_both_copies() {
    let m = Marquee::new(labels(&["HTML", "<CSS>"]));
    let html = m.render_html();
    assert!(html.contains("width: 880px"));
    assert!(html.contains("gap: 20px"));
    assert!(html.contains("animation: scrollLeft 6s linear infinite"));
    assert_eq!(html.matches("&lt;CSS&gt;").count(), 2);
    assert!(!html.contains("<CSS>"));
}

#[test]
fn frame_scrolls_and_wraps() {
    let m = Marquee::new(labels(&["ab", "cd"]));
    // cycle: "ab   cd   " (10 columns)
    assert_eq!(m.frame(0, 7), "ab   cd");
    assert_eq!(m.frame(5, 7), "cd   ab");
    assert_eq!(m.frame(10, 4), m.frame(0, 4));
    assert_eq!(m.frame(3, 0), "");
}

#[test]
fn empty_marquee_is_blank() {
    let m = Marquee::new(Vec::new());
    assert_eq!(m.set_width(), 0);
    assert_eq!(m.duration_secs(), 0);
    assert_eq!(m.frame(4, 3), "   ");
}
