mod app;
mod card;
mod diag;
mod dom;
mod logging;
mod navigation;
mod pages;
mod sink;
mod timer;

use einoow_core::catalog::Catalog;
use einoow_core::config::SiteConfig;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, MouseEvent};

use app::{App, AppHandle};
use dom::{Dom, JsResult};

/// Id of the element the site renders into.
const MOUNT_ID: &str = "app";

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(target_family = "wasm")]
    console_error_panic_hook::set_once();
    logging::init();

    if let Err(e) = boot() {
        diag::console_warn!("Einoow failed to start: {e:?}");
    }
}

fn boot() -> JsResult<()> {
    let site = SiteConfig::load();
    if let Err(e) = site.validate() {
        return Err(JsValue::from_str(&e.to_string()));
    }
    let catalog = Catalog::bundled().map_err(|e| JsValue::from_str(&e.to_string()))?;
    tracing::info!(site = %site.site_name, games = catalog.len(), "booting");

    let document = dom::document()?;
    let root = document
        .get_element_by_id(MOUNT_ID)
        .ok_or_else(|| JsValue::from_str("missing #app mount point"))?;

    let app = App::mount(Dom::new(document.clone()), root, site, catalog);
    intercept_route_links(&document, &app)?;
    follow_history(&app)?;
    App::sync_with_location(&app);
    Ok(())
}

/// Route plain left-clicks on `a[data-route]` through the client instead of reloading.
fn intercept_route_links(document: &web_sys::Document, app: &AppHandle) -> JsResult<()> {
    let weak = std::rc::Rc::downgrade(app);
    let onclick = Closure::<dyn FnMut(Event)>::new(move |evt: Event| {
        if evt.default_prevented() {
            return;
        }
        if let Some(mouse) = evt.dyn_ref::<MouseEvent>()
            && !navigation::is_plain_click(mouse)
        {
            return;
        }
        let Some(link) = evt
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest("a[data-route]").ok().flatten())
        else {
            return;
        };
        let Some(route) = link
            .get_attribute("href")
            .as_deref()
            .and_then(navigation::internal_route)
        else {
            return;
        };
        evt.prevent_default();
        if let Some(app) = weak.upgrade() {
            App::navigate(&app, route);
        }
    });
    document.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
    onclick.forget();
    Ok(())
}

/// Re-render on back/forward.
fn follow_history(app: &AppHandle) -> JsResult<()> {
    let weak = std::rc::Rc::downgrade(app);
    let onpopstate = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        if let Some(app) = weak.upgrade() {
            App::sync_with_location(&app);
        }
    });
    dom::window()?
        .add_event_listener_with_callback("popstate", onpopstate.as_ref().unchecked_ref())?;
    onpopstate.forget();
    Ok(())
}
