use crate::catalog::{GameRecord, GameStatus};
use crate::config::SiteConfig;

/// Glyph shown when a game has no artwork.
pub const PLACEHOLDER_GLYPH: &str = "🎮";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    Green,
    Yellow,
    Gray,
}

impl BadgeColor {
    pub fn css_class(self) -> &'static str {
        match self {
            BadgeColor::Green => "badge-green",
            BadgeColor::Yellow => "badge-yellow",
            BadgeColor::Gray => "badge-gray",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub color: BadgeColor,
}

impl GameStatus {
    /// Card badge. In-development games carry none.
    pub fn badge(self) -> Option<StatusBadge> {
        let (label, color) = match self {
            GameStatus::Live => ("Live", BadgeColor::Green),
            GameStatus::Beta => ("Beta", BadgeColor::Yellow),
            GameStatus::ComingSoon => ("Coming Soon", BadgeColor::Gray),
            GameStatus::InDevelopment => return None,
        };
        Some(StatusBadge { label, color })
    }

    /// Label on the play page of a game that cannot be launched yet.
    pub fn release_label(self) -> &'static str {
        match self {
            GameStatus::Beta => "In Beta",
            _ => "Coming Soon",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardImage {
    Image { src: String, alt: String },
    Placeholder(&'static str),
}

/// Truncation limits for cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLimits {
    pub description_chars: usize,
    pub tags: usize,
}

impl CardLimits {
    pub fn from_site(site: &SiteConfig) -> Self {
        Self {
            description_chars: site.card_description_chars,
            tags: site.card_tag_limit,
        }
    }
}

impl Default for CardLimits {
    fn default() -> Self {
        Self::from_site(&SiteConfig::default())
    }
}

/// Render-ready summary of one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView<'a> {
    pub record: &'a GameRecord,
    pub image: CardImage,
    pub badge: Option<StatusBadge>,
    pub name: &'a str,
    pub summary: String,
    pub tags: &'a [String],
}

impl<'a> CardView<'a> {
    pub fn present(record: &'a GameRecord, limits: CardLimits) -> Self {
        let image = match &record.image {
            Some(src) => CardImage::Image {
                src: src.clone(),
                alt: record.name.clone(),
            },
            None => CardImage::Placeholder(PLACEHOLDER_GLYPH),
        };
        let shown = record.tags.len().min(limits.tags);

        Self {
            record,
            image,
            badge: record.status.badge(),
            name: &record.name,
            summary: truncate(&record.description, limits.description_chars),
            tags: &record.tags[..shown],
        }
    }

    /// Hand the record to the selection callback.
    pub fn activate<T>(&self, on_select: impl FnOnce(&GameRecord) -> T) -> T {
        on_select(self.record)
    }
}

/// Cut `text` to at most `max_chars` characters, ending in an ellipsis when shortened.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let kept: String = text.chars().take(max_chars - 1).collect();
    format!("{}…", kept.trim_end())
}
