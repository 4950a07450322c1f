use serde::Deserialize;
use thiserror::Error;

use crate::motion::parallax::{DEFAULT_PARALLAX_DIVISOR, DEFAULT_PARALLAX_THRESHOLD};
use crate::motion::scroll_header::{DEFAULT_HIDE_THRESHOLD_PX, DEFAULT_SECTION_THRESHOLD};
use crate::motion::typing::{DEFAULT_DELETING_INTERVAL_MS, DEFAULT_HOLD_MS, DEFAULT_TYPING_INTERVAL_MS};
use crate::motion::{NonEmptyPhrases, RevealThreshold, TypingConfig};

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("hero.phrases must contain at least one phrase")]
    NoPhrases,
    #[error("motion.{field} must be greater than zero")]
    InvalidInterval { field: &'static str },
    #[error("motion.{field} must be within (0, 1], got {value}")]
    InvalidThreshold { field: &'static str, value: f64 },
    #[error("motion.{field} must be a positive number, got {value}")]
    InvalidMeasure { field: &'static str, value: f64 },
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub profile: Profile,
    pub hero: Hero,
    pub about: About,
    pub skills: Skills,
    pub experience: Vec<ExperienceCard>,
    pub projects: Vec<Project>,
    pub leadership: Vec<LeadershipItem>,
    pub contact: Contact,
    #[serde(default)]
    pub motion: MotionSettings,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub logo: String,
    pub portrait: String,
    pub resume_url: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub headline: String,
    pub headline_accent: String,
    pub subline: String,
    pub phrases: Vec<String>,
    pub focus_line: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub illustration: String,
    pub role: String,
    pub institution: String,
    pub focus: String,
    pub education: Vec<EducationLine>,
    pub closing: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationLine {
    pub label: String,
    pub field: String,
    pub score: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skills {
    pub tools: Vec<String>,
    pub cards: Vec<SkillCard>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCard {
    pub title: String,
    pub skills: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceCard {
    pub id: u32,
    pub title: String,
    pub date_range: String,
    pub bullets: Vec<String>,
    pub icon: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub live: Option<String>,
    pub tech: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadershipIcon {
    Trophy,
    Users,
    Mic,
}

impl LeadershipIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Trophy => "🏆",
            Self::Users => "👥",
            Self::Mic => "🎤",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadershipItem {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub highlight: Option<String>,
    pub icon: LeadershipIcon,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub heading: String,
    pub blurb: String,
    pub email: String,
    pub phone: String,
    pub resume_url: String,
    pub socials: Vec<SocialLink>,
    pub motto: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon_path: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MotionSettings {
    pub typing_interval_ms: u32,
    pub deleting_interval_ms: u32,
    pub hold_ms: u32,
    pub reveal_narrow_threshold: f64,
    pub reveal_wide_threshold: f64,
    pub reveal_breakpoint_px: f64,
    pub skills_reveal_threshold: f64,
    pub headline_reveal_threshold: f64,
    pub section_threshold: f64,
    pub parallax_threshold: f64,
    pub parallax_divisor: f64,
    pub header_hide_threshold: f64,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            typing_interval_ms: DEFAULT_TYPING_INTERVAL_MS,
            deleting_interval_ms: DEFAULT_DELETING_INTERVAL_MS,
            hold_ms: DEFAULT_HOLD_MS,
            reveal_narrow_threshold: 0.15,
            reveal_wide_threshold: 0.3,
            reveal_breakpoint_px: 768.0,
            skills_reveal_threshold: 0.25,
            headline_reveal_threshold: 0.4,
            section_threshold: DEFAULT_SECTION_THRESHOLD,
            parallax_threshold: DEFAULT_PARALLAX_THRESHOLD,
            parallax_divisor: DEFAULT_PARALLAX_DIVISOR,
            header_hide_threshold: DEFAULT_HIDE_THRESHOLD_PX,
        }
    }
}

impl MotionSettings {
    pub fn typing(&self) -> TypingConfig {
        TypingConfig {
            typing_interval_ms: self.typing_interval_ms,
            deleting_interval_ms: self.deleting_interval_ms,
            hold_ms: self.hold_ms,
        }
    }

    pub fn card_reveal(&self) -> RevealThreshold {
        RevealThreshold::Responsive {
            narrow: self.reveal_narrow_threshold,
            wide: self.reveal_wide_threshold,
            breakpoint_px: self.reveal_breakpoint_px,
        }
    }

    pub fn skills_reveal(&self) -> RevealThreshold {
        RevealThreshold::Fixed(self.skills_reveal_threshold)
    }

    pub fn headline_reveal(&self) -> RevealThreshold {
        RevealThreshold::Fixed(self.headline_reveal_threshold)
    }

    fn validate(&self) -> Result<(), ContentError> {
        for (field, value) in [
            ("typingIntervalMs", self.typing_interval_ms),
            ("deletingIntervalMs", self.deleting_interval_ms),
        ] {
            if value == 0 {
                return Err(ContentError::InvalidInterval { field });
            }
        }

        for (field, value) in [
            ("revealNarrowThreshold", self.reveal_narrow_threshold),
            ("revealWideThreshold", self.reveal_wide_threshold),
            ("skillsRevealThreshold", self.skills_reveal_threshold),
            ("headlineRevealThreshold", self.headline_reveal_threshold),
            ("sectionThreshold", self.section_threshold),
            ("parallaxThreshold", self.parallax_threshold),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ContentError::InvalidThreshold { field, value });
            }
        }

        for (field, value) in [
            ("revealBreakpointPx", self.reveal_breakpoint_px),
            ("parallaxDivisor", self.parallax_divisor),
            ("headerHideThreshold", self.header_hide_threshold),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ContentError::InvalidMeasure { field, value });
            }
        }

        Ok(())
    }
}

/// Validated site copy plus the typing phrases in their checked form.
#[derive(Clone, Debug, PartialEq)]
pub struct Content {
    pub site: Site,
    pub phrases: NonEmptyPhrases,
}

impl Content {
    pub fn load() -> Result<Self, ContentError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let site: Site = serde_json::from_str(raw)?;
        site.motion.validate()?;

        let phrases = NonEmptyPhrases::new(
            site.hero
                .phrases
                .iter()
                .map(|phrase| phrase.trim())
                .filter(|phrase| !phrase.is_empty()),
        )
        .ok_or(ContentError::NoPhrases)?;

        Ok(Self { site, phrases })
    }

    pub fn motion(&self) -> &MotionSettings {
        &self.site.motion
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn embedded() -> Value {
        serde_json::from_str(SITE_JSON).expect("embedded content is JSON")
    }

    #[test]
    fn embedded_content_loads() {
        let content = Content::load().expect("embedded content validates");

        assert_eq!(content.site.profile.name, "Manya Kapoor");
        assert_eq!(content.phrases.len(), 2);
        assert_eq!(content.site.skills.cards.len(), 6);
        assert_eq!(content.site.projects.len(), 4);
        assert_eq!(content.site.leadership.len(), 4);
        assert_eq!(content.site.experience.len(), 2);
    }

    fn all_distinct(ids: impl IntoIterator<Item = u32>) -> bool {
        let mut seen = std::collections::HashSet::new();
        ids.into_iter().all(|id| seen.insert(id))
    }

    #[test]
    fn reveal_ids_are_unique_within_each_section() {
        let content = Content::load().expect("embedded content validates");

        assert!(all_distinct(content.site.projects.iter().map(|project| project.id)));
        assert!(all_distinct(content.site.leadership.iter().map(|item| item.id)));
        assert!(!all_distinct([1, 2, 1]));
    }

    #[test]
    fn missing_motion_block_uses_default_timings() {
        let mut raw = embedded();
        raw.as_object_mut().expect("object").remove("motion");

        let content = Content::from_json(&raw.to_string()).expect("valid without motion");

        assert_eq!(content.motion(), &MotionSettings::default());
        assert_eq!(content.motion().typing(), TypingConfig::default());
        assert_eq!(content.motion().card_reveal().resolve(500.0), 0.15);
        assert_eq!(content.motion().card_reveal().resolve(1200.0), 0.3);
    }

    #[test]
    fn blank_phrases_are_rejected() {
        let mut raw = embedded();
        raw["hero"]["phrases"] = json!(["   ", ""]);

        let error = Content::from_json(&raw.to_string()).expect_err("no usable phrases");

        assert!(matches!(error, ContentError::NoPhrases));
    }

    #[test]
    fn zero_deleting_interval_is_rejected() {
        let mut raw = embedded();
        raw["motion"] = json!({ "deletingIntervalMs": 0 });

        let error = Content::from_json(&raw.to_string()).expect_err("zero interval");

        assert!(matches!(
            error,
            ContentError::InvalidInterval { field: "deletingIntervalMs" }
        ));
    }

    #[test]
    fn threshold_above_one_is_rejected() {
        let mut raw = embedded();
        raw["motion"] = json!({ "sectionThreshold": 1.5 });

        let error = Content::from_json(&raw.to_string()).expect_err("bad threshold");

        assert_eq!(
            error.to_string(),
            "motion.sectionThreshold must be within (0, 1], got 1.5"
        );
    }

    #[test]
    fn malformed_json_reports_parse_error() {
        let error = Content::from_json("{").expect_err("truncated");

        assert!(matches!(error, ContentError::Parse(_)));
    }
}
