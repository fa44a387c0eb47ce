use crate::card::{CardLimits, CardView};
use crate::catalog::{Catalog, GameRecord};
use crate::config::SiteConfig;
use crate::metadata::SeoProps;
use crate::play::PlayState;
use crate::route::Route;

pub const ABOUT_DESCRIPTION: &str =
    "Learn about Einoow - creating fun and innovative web games. Making games is fun.";
pub const NOT_FOUND_TITLE: &str = "Game Not Found";
pub const NOT_FOUND_DESCRIPTION: &str = "The game you are looking for does not exist.";

/// Metadata overrides for a route.
pub fn seo_for(route: &Route, catalog: &Catalog, site: &SiteConfig) -> SeoProps {
    match route {
        Route::Home => SeoProps::default(),
        Route::About => SeoProps {
            title: Some("About".to_string()),
            description: Some(ABOUT_DESCRIPTION.to_string()),
            canonical_path: route.path(),
            ..SeoProps::default()
        },
        Route::Play(id) => match catalog.get(id.as_str()) {
            Some(game) => SeoProps {
                title: Some(format!("Play {}", game.name)),
                description: Some(format!("Play {} - {}", game.name, game.description)),
                canonical_path: route.path(),
                og_image: game.image.as_deref().map(|image| site.absolute_url(image)),
                ..SeoProps::default()
            },
            None => SeoProps {
                title: Some(NOT_FOUND_TITLE.to_string()),
                description: Some(NOT_FOUND_DESCRIPTION.to_string()),
                canonical_path: route.path(),
                ..SeoProps::default()
            },
        },
    }
}

/// Everything the home page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView<'a> {
    pub featured: Option<&'a GameRecord>,
    pub heading: &'static str,
    pub cards: Vec<CardView<'a>>,
    /// No games at all; the grid is replaced by an empty-state notice.
    pub empty: bool,
}

impl<'a> HomeView<'a> {
    pub fn build(catalog: &'a Catalog, limits: CardLimits) -> Self {
        Self {
            featured: catalog.featured(),
            heading: catalog.listing_heading(),
            cards: catalog
                .listing()
                .into_iter()
                .map(|record| CardView::present(record, limits))
                .collect(),
            empty: catalog.is_empty(),
        }
    }
}

/// Screen shown for a play state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayScreen<'a> {
    /// Nothing to draw yet.
    Blank,
    NotFound,
    Launching {
        record: &'a GameRecord,
        hero_image: String,
    },
    Frame {
        record: &'a GameRecord,
        permissions: &'static str,
        sandbox: &'static str,
    },
    Awaiting {
        record: &'a GameRecord,
        hero_image: String,
        label: &'static str,
    },
}

impl<'a> PlayScreen<'a> {
    pub fn for_state(state: &'a PlayState) -> Self {
        match state {
            PlayState::Resolving { .. } | PlayState::Left(_) => PlayScreen::Blank,
            PlayState::NotFound(_) => PlayScreen::NotFound,
            PlayState::Redirecting(record) => PlayScreen::Launching {
                record,
                hero_image: record.hero_image_path(),
            },
            PlayState::Embedded(record) => PlayScreen::Frame {
                record,
                permissions: crate::play::EMBED_PERMISSIONS,
                sandbox: crate::play::EMBED_SANDBOX,
            },
            PlayState::AwaitingRelease(record) => PlayScreen::Awaiting {
                record,
                hero_image: record.hero_image_path(),
                label: record.status.release_label(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{GameId, GameStatus};
    use crate::test_helpers::{make_catalog, make_record};

    fn catalog() -> Catalog {
        let mut foo = make_record("foo", GameStatus::Live);
        foo.name = "Foo".into();
        foo.description = "A foo game.".into();
        foo.image = Some("/foo.png".into());
        foo.featured = true;
        make_catalog(vec![
            foo,
            make_record("bar", GameStatus::Beta),
            make_record("baz", GameStatus::ComingSoon),
        ])
    }

    #[test]
    fn play_seo_for_known_game() {
        let route = Route::Play(GameId::new("foo"));
        let seo = seo_for(&route, &catalog(), &SiteConfig::default());
        assert_eq!(seo.title.as_deref(), Some("Play Foo"));
        assert_eq!(seo.description.as_deref(), Some("Play Foo - A foo game."));
        assert_eq!(seo.canonical_path, "/play/foo");
        assert_eq!(seo.og_image.as_deref(), Some("https://einoow.com/foo.png"));
    }

    #[test]
    fn play_seo_for_missing_game() {
        let route = Route::Play(GameId::new("ghost"));
        let seo = seo_for(&route, &catalog(), &SiteConfig::default());
        assert_eq!(seo.title.as_deref(), Some(NOT_FOUND_TITLE));
        assert_eq!(seo.canonical_path, "/play/ghost");
        assert_eq!(seo.og_image, None);
    }

    #[test]
    fn home_and_about_seo() {
        let site = SiteConfig::default();
        assert_eq!(seo_for(&Route::Home, &catalog(), &site), SeoProps::default());
        let about = seo_for(&Route::About, &catalog(), &site);
        assert_eq!(about.title.as_deref(), Some("About"));
        assert_eq!(about.canonical_path, "/about");
    }

    #[test]
    fn home_view_splits_featured_from_grid() {
        let catalog = catalog();
        let view = HomeView::build(&catalog, CardLimits::default());
        assert_eq!(view.featured.map(|r| r.id.as_str()), Some("foo"));
        assert_eq!(view.heading, "More Games");
        let grid: Vec<_> = view.cards.iter().map(|c| c.record.id.as_str()).collect();
        assert_eq!(grid, vec!["bar", "baz"]);
        assert!(!view.empty);
    }

    #[test]
    fn empty_catalog_home_view() {
        let catalog = Catalog::default();
        let view = HomeView::build(&catalog, CardLimits::default());
        assert!(view.empty);
        assert!(view.cards.is_empty());
        assert_eq!(view.heading, "All Games");
    }

    #[test]
    fn screens_follow_state() {
        let catalog = catalog();
        let foo = catalog.get("foo").unwrap().clone();
        let bar = catalog.get("bar").unwrap().clone();

        let launching = PlayState::Redirecting(foo.clone());
        assert!(matches!(
            PlayScreen::for_state(&launching),
            PlayScreen::Launching { ref hero_image, .. } if hero_image == "/foo_hero.png"
        ));

        let frame = PlayState::Embedded(foo);
        let PlayScreen::Frame {
            permissions,
            sandbox,
            ..
        } = PlayScreen::for_state(&frame)
        else {
            panic!("embedded state should render a frame");
        };
        assert_eq!(permissions, "fullscreen; autoplay");
        assert!(sandbox.split(' ').any(|token| token == "allow-scripts"));
        assert!(!sandbox.contains("allow-top-navigation"));

        let awaiting = PlayState::AwaitingRelease(bar);
        assert!(matches!(
            PlayScreen::for_state(&awaiting),
            PlayScreen::Awaiting { label: "In Beta", .. }
        ));

        let missing = PlayState::NotFound(GameId::new("x"));
        assert_eq!(PlayScreen::for_state(&missing), PlayScreen::NotFound);
    }
}
