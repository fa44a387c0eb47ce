use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Deserializer};

use crate::error::CatalogError;

/// Game list bundled into the client at compile time.
const BUNDLED_GAMES_JSON: &str = include_str!("../data/games.json");

/// Unique identifier for a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Release status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameStatus {
    Live,
    Beta,
    ComingSoon,
    InDevelopment,
}

impl GameStatus {
    pub const ALL: [GameStatus; 4] = [
        GameStatus::Live,
        GameStatus::Beta,
        GameStatus::ComingSoon,
        GameStatus::InDevelopment,
    ];

    /// Whether opening the play page sends the browser straight to the game.
    pub fn auto_redirects(self) -> bool {
        matches!(self, GameStatus::Live | GameStatus::InDevelopment)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameStatus::Live => "live",
            GameStatus::Beta => "beta",
            GameStatus::ComingSoon => "coming-soon",
            GameStatus::InDevelopment => "in-development",
        }
    }
}

/// One game in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameRecord {
    pub id: GameId,
    pub name: String,
    pub description: String,
    /// Absolute address of the hosted game.
    pub url: String,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub image: Option<String>,
    pub status: GameStatus,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl GameRecord {
    /// Site-relative path of the large artwork shown on the play page.
    pub fn hero_image_path(&self) -> String {
        format!("/{}_hero.png", self.id)
    }
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// The ordered, read-only game list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<GameRecord>,
}

impl Catalog {
    pub fn new(records: Vec<GameRecord>) -> Result<Self, CatalogError> {
        {
            let mut seen = HashSet::with_capacity(records.len());
            for record in &records {
                if !seen.insert(record.id.as_str()) {
                    return Err(CatalogError::DuplicateId(record.id.0.clone()));
                }
            }
        }

        let featured = records.iter().filter(|r| r.featured).count();
        if featured > 1 {
            tracing::warn!(featured, "multiple featured games; the first one is used");
        }

        Ok(Self { records })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<GameRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// The game list shipped with the client.
    pub fn bundled() -> Result<Self, CatalogError> {
        let catalog = Self::from_json(BUNDLED_GAMES_JSON)?;
        tracing::info!(games = catalog.len(), "Loaded bundled catalog");
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&GameRecord> {
        self.records.iter().find(|r| r.id.as_str() == id)
    }

    /// The hero game. The first flagged record wins.
    pub fn featured(&self) -> Option<&GameRecord> {
        self.records.iter().find(|r| r.featured)
    }

    /// Every record except the featured one, in catalog order.
    pub fn others(&self) -> Vec<&GameRecord> {
        let featured = self.featured().map(|r| &r.id);
        self.records
            .iter()
            .filter(|r| Some(&r.id) != featured)
            .collect()
    }

    /// Records shown in the home grid: the others when a hero exists, else everything.
    pub fn listing(&self) -> Vec<&GameRecord> {
        if self.featured().is_some() {
            self.others()
        } else {
            self.records.iter().collect()
        }
    }

    pub fn listing_heading(&self) -> &'static str {
        if self.featured().is_some() {
            "More Games"
        } else {
            "All Games"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{make_catalog, make_record};

    fn ids(records: &[&GameRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.0.clone()).collect()
    }

    #[test]
    fn others_excludes_featured_in_order() {
        let mut a = make_record("a", GameStatus::Live);
        a.featured = true;
        let catalog = make_catalog(vec![
            a,
            make_record("b", GameStatus::Live),
            make_record("c", GameStatus::Beta),
        ]);

        assert_eq!(catalog.featured().map(|r| r.id.as_str()), Some("a"));
        assert_eq!(ids(&catalog.others()), vec!["b", "c"]);
        assert_eq!(catalog.listing_heading(), "More Games");
    }

    #[test]
    fn first_featured_wins() {
        let mut b = make_record("b", GameStatus::Live);
        b.featured = true;
        let mut c = make_record("c", GameStatus::Live);
        c.featured = true;
        let catalog = make_catalog(vec![make_record("a", GameStatus::Live), b, c]);

        assert_eq!(catalog.featured().map(|r| r.id.as_str()), Some("b"));
        assert_eq!(ids(&catalog.others()), vec!["a", "c"]);
    }

    #[test]
    fn listing_without_featured_is_everything() {
        let catalog = make_catalog(vec![
            make_record("a", GameStatus::Live),
            make_record("b", GameStatus::ComingSoon),
        ]);
        assert!(catalog.featured().is_none());
        assert_eq!(ids(&catalog.listing()), vec!["a", "b"]);
        assert_eq!(catalog.listing_heading(), "All Games");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Catalog::new(vec![
            make_record("a", GameStatus::Live),
            make_record("a", GameStatus::Beta),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "a"));
    }

    #[test]
    fn json_defaults_and_empty_image() {
        let json = r#"[
            {"id": "x", "name": "X", "description": "d", "url": "https://x.test",
             "image": "", "status": "coming-soon"},
            {"id": "y", "name": "Y", "description": "d", "url": "https://y.test",
             "image": "/y.png", "status": "in-development", "featured": true,
             "tags": ["Puzzle"]}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();

        let x = catalog.get("x").unwrap();
        assert_eq!(x.image, None);
        assert!(!x.featured);
        assert!(x.tags.is_empty());
        assert_eq!(x.status, GameStatus::ComingSoon);

        let y = catalog.get("y").unwrap();
        assert_eq!(y.image.as_deref(), Some("/y.png"));
        assert_eq!(y.status, GameStatus::InDevelopment);
        assert_eq!(y.hero_image_path(), "/y_hero.png");
    }

    #[test]
    fn unknown_status_fails_to_parse() {
        let json = r#"[{"id": "x", "name": "X", "description": "d",
                        "url": "https://x.test", "status": "retired"}]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn bundled_catalog_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.featured().is_some());
    }

    #[test]
    fn status_parses_from_kebab_case() {
        for status in GameStatus::ALL {
            let json = format!("\"{}\"", status.as_str());
            assert_eq!(serde_json::from_str::<GameStatus>(&json).unwrap(), status);
        }
    }

    #[test]
    fn auto_redirect_statuses() {
        assert!(GameStatus::Live.auto_redirects());
        assert!(GameStatus::InDevelopment.auto_redirects());
        assert!(!GameStatus::Beta.auto_redirects());
        assert!(!GameStatus::ComingSoon.auto_redirects());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn others_is_catalog_minus_first_featured(
                flags in proptest::collection::vec(proptest::bool::ANY, 0..12)
            ) {
                let records: Vec<_> = flags
                    .iter()
                    .enumerate()
                    .map(|(i, &featured)| {
                        let mut r = make_record(&format!("g{i}"), GameStatus::Live);
                        r.featured = featured;
                        r
                    })
                    .collect();
                let catalog = make_catalog(records);

                let first = flags.iter().position(|&f| f).map(|i| format!("g{i}"));
                let expected: Vec<String> = (0..flags.len())
                    .map(|i| format!("g{i}"))
                    .filter(|id| Some(id) != first.as_ref())
                    .collect();

                prop_assert_eq!(catalog.featured().map(|r| r.id.0.clone()), first);
                prop_assert_eq!(ids(&catalog.others()), expected);
                let hero = usize::from(catalog.featured().is_some());
                prop_assert_eq!(catalog.listing().len() + hero, flags.len());
            }
        }
    }
}
