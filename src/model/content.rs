use serde::{Deserialize, Serialize};

pub const DEFAULT_FEATURES_HEADING: &str = "Key features highlighted in the presentation:";

/// Detail content attached to a talk. Only `summary` is always present; every
/// other group is optional and independent of the rest.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    #[serde(default)]
    pub summary: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<Section>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<Feature>>,

    /// Selects how `features` is laid out; absent means a plain list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_layout: Option<FeatureLayout>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features_heading: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speakers: Option<Vec<SpeakerPanel>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub takeaways: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenges: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conclusion: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureLayout {
    Grid,
    #[default]
    List,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Column span in the bento grid. Its presence on any section switches
    /// the whole group to the grid layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Entry>>,
}

/// Title/description pair used by section items and features.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

pub type Feature = Entry;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeakerPanel {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<Topic>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub details: String,
}

/// One block of a detail panel, in the order the panel emits them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DetailBlock<'a> {
    Introduction(&'a str),
    BentoSections(&'a [Section]),
    ListedSections(&'a [Section]),
    FeatureGrid {
        heading: &'a str,
        features: &'a [Feature],
    },
    FeatureList {
        heading: Option<&'a str>,
        features: &'a [Feature],
    },
    SpeakerPanels(&'a [SpeakerPanel]),
    ResourceList(&'a [String]),
    TakeawayList(&'a [String]),
    Challenges(&'a str),
    Conclusion(&'a str),
}

impl Content {
    /// Detail blocks present on this content, in canonical order. Empty text
    /// and empty lists count as absent.
    pub fn blocks(&self) -> Vec<DetailBlock<'_>> {
        let mut out = Vec::new();

        if let Some(intro) = text(&self.introduction) {
            out.push(DetailBlock::Introduction(intro));
        }

        if let Some(sections) = list(&self.sections) {
            if sections.iter().any(|s| s.span.is_some()) {
                out.push(DetailBlock::BentoSections(sections));
            } else {
                out.push(DetailBlock::ListedSections(sections));
            }
        }

        if let Some(features) = list(&self.features) {
            match self.feature_layout.unwrap_or_default() {
                FeatureLayout::Grid => out.push(DetailBlock::FeatureGrid {
                    heading: text(&self.features_heading).unwrap_or(DEFAULT_FEATURES_HEADING),
                    features,
                }),
                FeatureLayout::List => out.push(DetailBlock::FeatureList {
                    heading: text(&self.features_heading).or_else(|| {
                        self.highlights
                            .as_ref()
                            .and_then(|h| h.first())
                            .map(String::as_str)
                            .filter(|s| !s.is_empty())
                    }),
                    features,
                }),
            }
        }

        if let Some(speakers) = list(&self.speakers) {
            out.push(DetailBlock::SpeakerPanels(speakers));
        }
        if let Some(resources) = list(&self.resources) {
            out.push(DetailBlock::ResourceList(resources));
        }
        if let Some(takeaways) = list(&self.takeaways) {
            out.push(DetailBlock::TakeawayList(takeaways));
        }
        if let Some(challenges) = text(&self.challenges) {
            out.push(DetailBlock::Challenges(challenges));
        }
        if let Some(conclusion) = text(&self.conclusion) {
            out.push(DetailBlock::Conclusion(conclusion));
        }

        out
    }
}

impl Section {
    pub fn entries(&self) -> &[Entry] {
        self.items.as_deref().unwrap_or(&[])
    }
}

impl SpeakerPanel {
    pub fn topics(&self) -> &[Topic] {
        self.topics.as_deref().unwrap_or(&[])
    }
}

fn text(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn list<T>(value: &Option<Vec<T>>) -> Option<&[T]> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "../tests/model/content_tests.rs"]
mod tests;
