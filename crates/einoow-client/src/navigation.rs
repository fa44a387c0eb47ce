use einoow_core::play::Navigator;
use einoow_core::route::Route;
use wasm_bindgen::JsValue;
use web_sys::MouseEvent;

use crate::diag;
use crate::dom::{self, JsResult};

/// Sends the whole browsing context to another site.
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate_external(&self, url: &str) {
        let result = dom::window().and_then(|w| w.location().set_href(url));
        if let Err(e) = result {
            diag::console_warn!("navigation to {url} failed: {e:?}");
        }
    }
}

pub fn current_path() -> String {
    dom::window()
        .and_then(|w| w.location().pathname())
        .unwrap_or_else(|_| "/".to_string())
}

/// Record an in-site navigation in the session history.
pub fn push_path(path: &str) -> JsResult<()> {
    if current_path() == path {
        return Ok(());
    }
    dom::window()?
        .history()?
        .push_state_with_url(&JsValue::NULL, "", Some(path))
}

/// Route for an in-site link target. Absolute, protocol-relative and
/// non-http links are left to the browser.
pub fn internal_route(href: &str) -> Option<Route> {
    if !href.starts_with('/') || href.starts_with("//") {
        return None;
    }
    Route::parse(href)
}

/// Whether a click should be handled in-page. Middle clicks and clicks with
/// a modifier key are left to the browser (new tab, new window, download).
pub fn is_plain_click(mouse: &MouseEvent) -> bool {
    plain_click(
        mouse.button(),
        mouse.ctrl_key() || mouse.meta_key() || mouse.shift_key() || mouse.alt_key(),
    )
}

fn plain_click(button: i16, modified: bool) -> bool {
    button == 0 && !modified
}

#[cfg(test)]
mod tests {
    use einoow_core::catalog::GameId;

    use super::*;

    #[test]
    fn site_paths_become_routes() {
        assert_eq!(internal_route("/"), Some(Route::Home));
        assert_eq!(internal_route("/about"), Some(Route::About));
        assert_eq!(
            internal_route("/play/mindweave"),
            Some(Route::Play(GameId::new("mindweave")))
        );
    }

    #[test]
    fn only_unmodified_primary_clicks_are_handled() {
        assert!(plain_click(0, false));
        assert!(!plain_click(0, true));
        assert!(!plain_click(1, false));
        assert!(!plain_click(2, false));
    }

    #[test]
    fn foreign_links_are_left_alone() {
        assert_eq!(internal_route("https://x.com/einoow"), None);
        assert_eq!(internal_route("//cdn.example/game"), None);
        assert_eq!(internal_route("mailto:hello@einoow.com"), None);
        assert_eq!(internal_route("/unknown"), None);
    }
}
