use std::sync::Mutex;

use anyhow::bail;

use super::*;

/// Answers with a URL derived from the topic; fails for topics listed in
/// `failing`. Records every topic it was asked for.
struct FakePhotos {
    failing: Vec<&'static str>,
    asked: Mutex<Vec<String>>,
}

impl FakePhotos {
    fn new(failing: Vec<&'static str>) -> Self {
        Self {
            failing,
            asked: Mutex::new(Vec::new()),
        }
    }
}

impl PhotoSource for FakePhotos {
    fn random_photo(&self, topic: &str) -> Result<String> {
        self.asked
            .lock()
            .expect("asked lock")
            .push(topic.to_string());
        if self.failing.contains(&topic) {
            bail!("rate limited");
        }
        Ok(format!("https://img.example/{}.jpg", topic))
    }
}

fn topics() -> Vec<String> {
    vec!["nature".to_string(), "architecture".to_string()]
}

#[test]
fn topics_alternate_across_slots() {
    let t = topics();
    assert_eq!(slot_topic(&t, 0), "nature");
    assert_eq!(slot_topic(&t, 1), "architecture");
    assert_eq!(slot_topic(&t, 2), "nature");
    assert_eq!(slot_topic(&[], 3), "");
}

#[test]
fn every_slot_is_requested_once_and_kept_in_order() {
    let source = FakePhotos::new(Vec::new());
    let slots = load_slots(&source, 4, &topics());

    assert_eq!(slots.len(), 4);
    for (i, slot) in slots.iter().enumerate() {
        assert_eq!(slot.index, i);
        assert_eq!(slot.url.as_deref(), Some(format!("https://img.example/{}.jpg", slot.topic).as_str()));
    }
    assert_eq!(source.asked.lock().expect("asked lock").len(), 4);
}

#[test]
fn failed_slot_stays_empty_while_others_load() {
    let source = FakePhotos::new(vec!["architecture"]);
    let slots = load_slots(&source, 4, &topics());

    let loaded: Vec<Option<&str>> = slots.iter().map(|s| s.url.as_deref()).collect();
    assert_eq!(
        loaded,
        vec![
            Some("https://img.example/nature.jpg"),
            None,
            Some("https://img.example/nature.jpg"),
            None,
        ]
    );
}

#[test]
fn zero_slots_makes_no_requests() {
    let source = FakePhotos::new(Vec::new());
    assert!(load_slots(&source, 0, &topics()).is_empty());
    assert!(source.asked.lock().expect("asked lock").is_empty());
}

#[test]
fn missing_access_key_disables_the_source() {
    let mut cfg = PhotoConfig::default();
    assert!(UnsplashSource::from_config(&cfg).expect("config").is_none());

    cfg.access_key = Some(String::new());
    assert!(UnsplashSource::from_config(&cfg).expect("config").is_none());

    cfg.access_key = Some("abc".to_string());
    assert!(UnsplashSource::from_config(&cfg).expect("config").is_some());
}
