use std::rc::Rc;
use std::time::Duration;

use crate::catalog::{Catalog, GameId, GameRecord};
use crate::timer::{Scheduler, TimerHandle};

/// Delay before a redirecting play page sends the browser to the game.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(2000);

/// Permissions granted to an embedded game frame.
pub const EMBED_PERMISSIONS: &str = "fullscreen; autoplay";

/// Sandbox tokens for the embedded game frame. Top-level navigation, modals
/// and downloads stay blocked.
pub const EMBED_SANDBOX: &str = "allow-scripts allow-same-origin allow-pointer-lock allow-popups";

/// Where the user went when the play flow ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exit {
    Home,
    External(String),
}

/// Play page states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayState {
    /// Identifier bound, not yet looked up. `embedded` carries the in-page preference.
    Resolving { game_id: GameId, embedded: bool },
    NotFound(GameId),
    /// Counting down to a full-page navigation to the game.
    Redirecting(GameRecord),
    Embedded(GameRecord),
    /// Beta or coming-soon game; nothing to launch yet.
    AwaitingRelease(GameRecord),
    Left(Exit),
}

/// Inputs to the play flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayEvent {
    /// The route now names a different game.
    Retarget(GameId),
    /// Look the bound identifier up in the catalog.
    Lookup,
    TimerElapsed,
    PlayEmbedded,
    Cancel,
    Back,
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ScheduleNavigation { url: String, delay: Duration },
    CancelNavigation,
    NavigateExternal(String),
}

/// Result of one transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub state: PlayState,
    pub effects: Vec<Effect>,
}

impl Step {
    fn to(state: PlayState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    fn with(state: PlayState, effects: Vec<Effect>) -> Self {
        Self { state, effects }
    }
}

/// Pure transition function of the play page.
///
/// Events that do not apply in `state` leave it unchanged with no effects.
pub fn transition(
    state: &PlayState,
    event: &PlayEvent,
    catalog: &Catalog,
    delay: Duration,
) -> Step {
    match (state, event) {
        (PlayState::Left(_), _) => Step::to(state.clone()),

        (PlayState::Redirecting(_), PlayEvent::Retarget(id)) => Step::with(
            PlayState::Resolving {
                game_id: id.clone(),
                embedded: false,
            },
            vec![Effect::CancelNavigation],
        ),
        (PlayState::Embedded(_), PlayEvent::Retarget(id)) => Step::to(PlayState::Resolving {
            game_id: id.clone(),
            embedded: true,
        }),
        (PlayState::Resolving { embedded, .. }, PlayEvent::Retarget(id)) => {
            Step::to(PlayState::Resolving {
                game_id: id.clone(),
                embedded: *embedded,
            })
        },
        (_, PlayEvent::Retarget(id)) => Step::to(PlayState::Resolving {
            game_id: id.clone(),
            embedded: false,
        }),

        (PlayState::Resolving { game_id, embedded }, PlayEvent::Lookup) => {
            resolve(game_id, *embedded, catalog, delay)
        },

        (PlayState::Redirecting(record), PlayEvent::TimerElapsed) => Step::with(
            PlayState::Left(Exit::External(record.url.clone())),
            vec![Effect::NavigateExternal(record.url.clone())],
        ),
        (PlayState::Redirecting(record), PlayEvent::PlayEmbedded) => Step::with(
            PlayState::Embedded(record.clone()),
            vec![Effect::CancelNavigation],
        ),
        (PlayState::Redirecting(_), PlayEvent::Cancel) => Step::with(
            PlayState::Left(Exit::Home),
            vec![Effect::CancelNavigation],
        ),

        (
            PlayState::NotFound(_) | PlayState::Embedded(_) | PlayState::AwaitingRelease(_),
            PlayEvent::Back,
        ) => Step::to(PlayState::Left(Exit::Home)),

        _ => Step::to(state.clone()),
    }
}

fn resolve(game_id: &GameId, embedded: bool, catalog: &Catalog, delay: Duration) -> Step {
    let Some(record) = catalog.get(game_id.as_str()) else {
        return Step::to(PlayState::NotFound(game_id.clone()));
    };

    if embedded {
        return Step::to(PlayState::Embedded(record.clone()));
    }

    if !record.status.auto_redirects() {
        return Step::to(PlayState::AwaitingRelease(record.clone()));
    }

    Step::with(
        PlayState::Redirecting(record.clone()),
        vec![Effect::ScheduleNavigation {
            url: record.url.clone(),
            delay,
        }],
    )
}

/// Full-page navigation out of the site.
pub trait Navigator {
    fn navigate_external(&self, url: &str);
}

/// A mounted play page: owns the state and at most one pending navigation.
pub struct PlayFlow {
    catalog: Rc<Catalog>,
    scheduler: Rc<dyn Scheduler>,
    navigator: Rc<dyn Navigator>,
    delay: Duration,
    state: PlayState,
    pending: Option<TimerHandle>,
}

impl PlayFlow {
    /// Mount the play page for `game_id` and settle it.
    pub fn mount(
        catalog: Rc<Catalog>,
        scheduler: Rc<dyn Scheduler>,
        navigator: Rc<dyn Navigator>,
        delay: Duration,
        game_id: GameId,
    ) -> Self {
        let mut flow = Self {
            catalog,
            scheduler,
            navigator,
            delay,
            state: PlayState::Resolving {
                game_id,
                embedded: false,
            },
            pending: None,
        };
        flow.dispatch(PlayEvent::Lookup);
        flow
    }

    pub fn state(&self) -> &PlayState {
        &self.state
    }

    pub fn has_pending_navigation(&self) -> bool {
        self.pending.is_some()
    }

    /// Bind a new identifier and re-evaluate from scratch.
    pub fn retarget(&mut self, game_id: GameId) {
        self.dispatch(PlayEvent::Retarget(game_id));
        self.dispatch(PlayEvent::Lookup);
    }

    /// Feed one event. Returns the exit when the flow leaves the play page.
    pub fn dispatch(&mut self, event: PlayEvent) -> Option<Exit> {
        let step = transition(&self.state, &event, &self.catalog, self.delay);
        if step.state != self.state {
            tracing::debug!(?event, from = ?self.state, to = ?step.state, "play transition");
        }
        self.state = step.state;
        for effect in step.effects {
            self.apply(effect);
        }

        match &self.state {
            PlayState::Left(exit) => {
                let exit = exit.clone();
                self.release();
                Some(exit)
            },
            _ => None,
        }
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::ScheduleNavigation { url, delay } => {
                self.release();
                let navigator = Rc::clone(&self.navigator);
                let task = Box::new(move || navigator.navigate_external(&url));
                self.pending = Some(self.scheduler.schedule(delay, task));
            },
            Effect::CancelNavigation => self.release(),
            Effect::NavigateExternal(url) => {
                self.release();
                self.navigator.navigate_external(&url);
            },
        }
    }

    fn release(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
    }
}

impl Drop for PlayFlow {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::GameStatus;
    use crate::test_helpers::{make_catalog, make_record};

    fn catalog() -> Catalog {
        make_catalog(vec![
            make_record("live", GameStatus::Live),
            make_record("dev", GameStatus::InDevelopment),
            make_record("beta", GameStatus::Beta),
            make_record("soon", GameStatus::ComingSoon),
        ])
    }

    fn resolving(id: &str, embedded: bool) -> PlayState {
        PlayState::Resolving {
            game_id: GameId::new(id),
            embedded,
        }
    }

    fn lookup(state: &PlayState) -> Step {
        transition(state, &PlayEvent::Lookup, &catalog(), REDIRECT_DELAY)
    }

    #[test]
    fn missing_record_is_not_found() {
        let step = lookup(&resolving("nope", false));
        assert_eq!(step.state, PlayState::NotFound(GameId::new("nope")));
        assert!(step.effects.is_empty());
    }

    #[test]
    fn live_and_in_development_redirect() {
        for id in ["live", "dev"] {
            let step = lookup(&resolving(id, false));
            assert!(matches!(step.state, PlayState::Redirecting(ref r) if r.id.as_str() == id));
            assert_eq!(
                step.effects,
                vec![Effect::ScheduleNavigation {
                    url: format!("https://{id}.example"),
                    delay: REDIRECT_DELAY,
                }]
            );
        }
    }

    #[test]
    fn lookup_redirects_exactly_the_auto_redirect_statuses() {
        for status in GameStatus::ALL {
            let c = make_catalog(vec![make_record("g", status)]);
            let step = transition(&resolving("g", false), &PlayEvent::Lookup, &c, REDIRECT_DELAY);
            let redirecting = matches!(step.state, PlayState::Redirecting(_));
            assert_eq!(redirecting, status.auto_redirects(), "{status:?}");
            assert_eq!(step.effects.len(), usize::from(redirecting));
        }
    }

    #[test]
    fn unreleased_games_await() {
        for id in ["beta", "soon"] {
            let step = lookup(&resolving(id, false));
            assert!(matches!(step.state, PlayState::AwaitingRelease(_)));
            assert!(step.effects.is_empty());
        }
    }

    #[test]
    fn embedded_preference_wins_over_status() {
        for id in ["live", "dev", "beta", "soon"] {
            let step = lookup(&resolving(id, true));
            assert!(matches!(step.state, PlayState::Embedded(ref r) if r.id.as_str() == id));
            assert!(step.effects.is_empty());
        }
    }

    #[test]
    fn redirecting_transitions() {
        let redirecting = lookup(&resolving("live", false)).state;
        let c = catalog();

        let elapsed = transition(&redirecting, &PlayEvent::TimerElapsed, &c, REDIRECT_DELAY);
        assert_eq!(
            elapsed.state,
            PlayState::Left(Exit::External("https://live.example".into()))
        );

        let embedded = transition(&redirecting, &PlayEvent::PlayEmbedded, &c, REDIRECT_DELAY);
        assert!(matches!(embedded.state, PlayState::Embedded(_)));
        assert_eq!(embedded.effects, vec![Effect::CancelNavigation]);

        let cancel = transition(&redirecting, &PlayEvent::Cancel, &c, REDIRECT_DELAY);
        assert_eq!(cancel.state, PlayState::Left(Exit::Home));
        assert_eq!(cancel.effects, vec![Effect::CancelNavigation]);
    }

    #[test]
    fn retarget_while_redirecting_cancels_and_resets() {
        let redirecting = lookup(&resolving("live", false)).state;
        let step = transition(
            &redirecting,
            &PlayEvent::Retarget(GameId::new("dev")),
            &catalog(),
            REDIRECT_DELAY,
        );
        assert_eq!(step.state, resolving("dev", false));
        assert_eq!(step.effects, vec![Effect::CancelNavigation]);
    }

    #[test]
    fn retarget_from_embedded_keeps_preference() {
        let embedded = lookup(&resolving("live", true)).state;
        let step = transition(
            &embedded,
            &PlayEvent::Retarget(GameId::new("dev")),
            &catalog(),
            REDIRECT_DELAY,
        );
        assert_eq!(step.state, resolving("dev", true));
    }

    #[test]
    fn back_exits_home() {
        for state in [
            PlayState::NotFound(GameId::new("x")),
            lookup(&resolving("live", true)).state,
            lookup(&resolving("beta", false)).state,
        ] {
            let step = transition(&state, &PlayEvent::Back, &catalog(), REDIRECT_DELAY);
            assert_eq!(step.state, PlayState::Left(Exit::Home));
        }
    }

    #[test]
    fn inapplicable_events_are_ignored() {
        let not_found = PlayState::NotFound(GameId::new("x"));
        for event in [
            PlayEvent::Lookup,
            PlayEvent::TimerElapsed,
            PlayEvent::PlayEmbedded,
            PlayEvent::Cancel,
        ] {
            let step = transition(&not_found, &event, &catalog(), REDIRECT_DELAY);
            assert_eq!(step.state, not_found);
            assert!(step.effects.is_empty());
        }

        let left = PlayState::Left(Exit::Home);
        let step = transition(
            &left,
            &PlayEvent::Retarget(GameId::new("live")),
            &catalog(),
            REDIRECT_DELAY,
        );
        assert_eq!(step.state, left);
    }
}
