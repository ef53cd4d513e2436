use std::collections::BTreeSet;
use std::num::NonZeroU32;
use std::path::Path;

use crate::animate::smoothing::Smoothing;
use crate::foundation::core::{FrameCount, Rgba8};
use crate::foundation::error::{ScrollframeError, ScrollframeResult};
use crate::frames::address::FrameAddressing;
use crate::frames::store::FailedFramePolicy;

/// Frame count of the reference hero.
pub const DEFAULT_TOTAL_FRAMES: u32 = 240;

const DEFAULT_FRAME_COUNT: NonZeroU32 = match NonZeroU32::new(DEFAULT_TOTAL_FRAMES) {
    Some(n) => n,
    None => panic!("default frame count must be non-zero"),
};

/// Accent color token of the reference page.
pub const DEFAULT_ACCENT: &str = "#ff5e00";

/// Settings of the scroll-scrubbed hero.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    /// Number of frames `N`.
    pub total_frames: FrameCount,
    /// Smoothing coefficient.
    pub smoothing: Smoothing,
    /// Frame URL-construction rule.
    pub addressing: FrameAddressing,
    /// What to draw for frames that failed to load.
    pub failed_frame_policy: FailedFramePolicy,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            total_frames: FrameCount::from_nonzero(DEFAULT_FRAME_COUNT),
            smoothing: Smoothing::DEFAULT,
            addressing: FrameAddressing::default(),
            failed_frame_policy: FailedFramePolicy::default(),
        }
    }
}

/// Branding copy.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Accent color token, `#RRGGBB` or `#RRGGBBAA`.
    pub accent_color: String,
    /// Community name shown in the hero and loader.
    pub community_name: String,
    /// Hero value proposition.
    pub tagline: String,
    /// Hero intro paragraph.
    pub intro: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: DEFAULT_ACCENT.to_owned(),
            community_name: "Obaidnocode Community".to_owned(),
            tagline: "Build Stunning Websites & AI Apps Faster With AI.".to_owned(),
            intro: "Learn how to combine design, automation, and AI to create modern, \
                    scroll-animated websites, internal tools, and full AI-driven products."
                .to_owned(),
        }
    }
}

/// One card of the learning-path grid.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LearningPath {
    /// Stable id, unique within the config.
    pub id: String,
    /// Card title.
    pub title: String,
    /// Short index label such as `#01`.
    pub index: String,
    /// One-sentence description.
    pub description: String,
    /// Thumbnail image address.
    pub thumbnail: String,
}

/// Footer social link.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SocialLink {
    /// Display name.
    pub name: String,
    /// Link target.
    pub url: String,
}

/// FAQ accordion entry.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FaqEntry {
    /// Question text.
    pub question: String,
    /// Answer text.
    pub answer: String,
}

/// Complete configuration of the landing page.
///
/// Content lists are opaque display data; only the hero settings and accent color are
/// interpreted by this crate.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Scroll-scrubbed hero settings.
    pub hero: HeroConfig,
    /// Branding copy.
    pub theme: ThemeConfig,
    /// Learning-path cards, in display order.
    pub learning_paths: Vec<LearningPath>,
    /// Footer social links, in display order.
    pub social_links: Vec<SocialLink>,
    /// FAQ entries, in display order.
    pub faq: Vec<FaqEntry>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            hero: HeroConfig::default(),
            theme: ThemeConfig::default(),
            learning_paths: default_learning_paths(),
            social_links: default_social_links(),
            faq: default_faq(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> ScrollframeResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and parse a JSON file.
    pub fn load(path: &Path) -> ScrollframeResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            ScrollframeError::config(format!("read config '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    /// Pretty JSON rendering of the effective configuration.
    pub fn to_json_pretty(&self) -> ScrollframeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parsed accent color.
    pub fn accent(&self) -> ScrollframeResult<Rgba8> {
        Rgba8::parse_hex(&self.theme.accent_color)
    }

    /// Check cross-field consistency.
    pub fn validate(&self) -> ScrollframeResult<()> {
        self.hero.addressing.validate(self.hero.total_frames)?;
        self.accent()?;

        let mut ids = BTreeSet::new();
        for path in &self.learning_paths {
            if path.id.trim().is_empty() {
                return Err(ScrollframeError::config(
                    "learning path id must be non-empty",
                ));
            }
            if !ids.insert(path.id.as_str()) {
                return Err(ScrollframeError::config(format!(
                    "duplicate learning path id '{}'",
                    path.id
                )));
            }
        }
        for link in &self.social_links {
            if link.name.trim().is_empty() {
                return Err(ScrollframeError::config("social link name must be non-empty"));
            }
        }
        for entry in &self.faq {
            if entry.question.trim().is_empty() {
                return Err(ScrollframeError::config("faq question must be non-empty"));
            }
        }
        Ok(())
    }
}

fn default_learning_paths() -> Vec<LearningPath> {
    let cards = [
        (
            "1",
            "Animated Websites",
            "#01",
            "Master the art of high-end scroll animations and interactive parallax experiences.",
            "https://picsum.photos/seed/anim/600/400",
        ),
        (
            "2",
            "AI Website Builders",
            "#02",
            "Leverage modern AI tools to generate stunning layouts and copy in minutes.",
            "https://picsum.photos/seed/aiweb/600/400",
        ),
        (
            "3",
            "Internal AI Tools",
            "#03",
            "Build custom automated dashboards and productivity bots for your business.",
            "https://picsum.photos/seed/tools/600/400",
        ),
        (
            "4",
            "AI App Development",
            "#04",
            "Deploy full-stack web applications with the help of AI coding assistants.",
            "https://picsum.photos/seed/apps/600/400",
        ),
    ];
    cards
        .into_iter()
        .map(|(id, title, index, description, thumbnail)| LearningPath {
            id: id.to_owned(),
            title: title.to_owned(),
            index: index.to_owned(),
            description: description.to_owned(),
            thumbnail: thumbnail.to_owned(),
        })
        .collect()
}

fn default_social_links() -> Vec<SocialLink> {
    ["YouTube", "Instagram", "X"]
        .into_iter()
        .map(|name| SocialLink {
            name: name.to_owned(),
            url: "#".to_owned(),
        })
        .collect()
}

fn default_faq() -> Vec<FaqEntry> {
    [
        (
            "Do I need coding skills?",
            "Absolutely not. We focus on AI-assisted development and no-code tools where natural \
             language is your primary syntax.",
        ),
        (
            "What is vibecoding?",
            "Vibecoding is the state where you describe the outcome you want to an AI, and it \
             handles the technical implementation, allowing you to focus on the 'vibe' and user \
             experience.",
        ),
        (
            "Can beginners join?",
            "Yes. We have structured paths for hobbyists, founders, and professionals looking to \
             level up their digital toolkit.",
        ),
    ]
    .into_iter()
    .map(|(question, answer)| FaqEntry {
        question: question.to_owned(),
        answer: answer.to_owned(),
    })
    .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/site/config.rs"]
mod tests;
