use crate::catalog::GameId;

/// Top-level page views.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Play(GameId),
}

/// Header navigation entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSection {
    Games,
    About,
}

impl NavSection {
    pub const ALL: [NavSection; 2] = [NavSection::Games, NavSection::About];

    pub fn label(self) -> &'static str {
        match self {
            NavSection::Games => "Games",
            NavSection::About => "About",
        }
    }

    pub fn route(self) -> Route {
        match self {
            NavSection::Games => Route::Home,
            NavSection::About => Route::About,
        }
    }
}

impl Route {
    /// Resolve a URL path. Unknown paths yield `None` and are left to the host page.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };

        match trimmed {
            "" | "/" => Some(Route::Home),
            "/about" => Some(Route::About),
            _ => {
                let id = trimmed.strip_prefix("/play/")?;
                if id.is_empty() || id.contains('/') {
                    return None;
                }
                Some(Route::Play(GameId::new(id)))
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Play(id) => format!("/play/{id}"),
        }
    }

    /// Header entry highlighted while this route is active.
    pub fn nav_section(&self) -> Option<NavSection> {
        match self {
            Route::Home => Some(NavSection::Games),
            Route::About => Some(NavSection::About),
            Route::Play(_) => None,
        }
    }
}
