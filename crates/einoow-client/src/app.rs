use std::cell::RefCell;
use std::rc::{Rc, Weak};

use einoow_core::card::CardLimits;
use einoow_core::catalog::Catalog;
use einoow_core::config::SiteConfig;
use einoow_core::metadata::MetadataSynchronizer;
use einoow_core::pages::seo_for;
use einoow_core::play::{Exit, Navigator, PlayEvent, PlayFlow};
use einoow_core::route::Route;
use einoow_core::timer::Scheduler;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};

use crate::diag;
use crate::dom::{Dom, ElementExt, JsResult, Listeners};
use crate::navigation::{self, BrowserNavigator};
use crate::pages;
use crate::sink::DomMetadataSink;
use crate::timer::BrowserScheduler;

pub type AppHandle = Rc<RefCell<App>>;

/// The mounted page view.
enum View {
    /// Path outside the site's routes; the host page decides what to show.
    Unrouted,
    Home,
    About,
    Play(PlayFlow),
}

/// Client state: the active route, its view and the document metadata.
pub struct App {
    this: Weak<RefCell<App>>,
    dom: Dom,
    root: Element,
    site: SiteConfig,
    catalog: Rc<Catalog>,
    scheduler: Rc<dyn Scheduler>,
    navigator: Rc<dyn Navigator>,
    metadata: MetadataSynchronizer<DomMetadataSink>,
    route: Option<Route>,
    view: View,
    listeners: Listeners,
}

/// Borrowed render state handed to page builders.
pub struct Ui<'a> {
    pub dom: &'a Dom,
    pub site: &'a SiteConfig,
    pub limits: CardLimits,
    listeners: &'a mut Listeners,
    app: &'a Weak<RefCell<App>>,
}

impl Ui<'_> {
    /// Navigate in-site when `target` is clicked.
    pub fn on_click_route(&mut self, target: &Element, route: Route) -> JsResult<()> {
        let app = Weak::clone(self.app);
        self.listeners.on(target, "click", move |_: Event| {
            if let Some(app) = app.upgrade() {
                App::navigate(&app, route.clone());
            }
        })
    }

    /// Feed a play event when `target` is clicked. Modified clicks keep the
    /// browser's default so links can still open in a new tab.
    pub fn on_click_play(&mut self, target: &Element, event: PlayEvent) -> JsResult<()> {
        let app = Weak::clone(self.app);
        self.listeners.on(target, "click", move |e: Event| {
            if let Some(mouse) = e.dyn_ref::<MouseEvent>()
                && !navigation::is_plain_click(mouse)
            {
                return;
            }
            e.prevent_default();
            if let Some(app) = app.upgrade() {
                App::play_event(&app, event.clone());
            }
        })
    }

    /// Hide `victim` if `image` fails to load.
    pub fn hide_on_error(&mut self, image: &Element, victim: &Element) -> JsResult<()> {
        let victim = victim.clone();
        self.listeners.on(image, "error", move |_: Event| {
            let _ = victim.hide();
        })
    }
}

impl App {
    pub fn mount(
        dom: Dom,
        root: Element,
        site: SiteConfig,
        catalog: Catalog,
    ) -> AppHandle {
        let metadata = MetadataSynchronizer::new(
            DomMetadataSink::new(dom.document().clone()),
            site.clone(),
        );
        Rc::new_cyclic(|this| {
            RefCell::new(App {
                this: Weak::clone(this),
                dom,
                root,
                site,
                catalog: Rc::new(catalog),
                scheduler: Rc::new(BrowserScheduler),
                navigator: Rc::new(BrowserNavigator),
                metadata,
                route: None,
                view: View::Unrouted,
                listeners: Listeners::default(),
            })
        })
    }

    /// Push `route` onto the session history and show it.
    pub fn navigate(app: &AppHandle, route: Route) {
        if let Err(e) = navigation::push_path(&route.path()) {
            diag::console_warn!("history push failed: {e:?}");
        }
        App::show(app, Some(route));
    }

    /// Show whatever the address bar currently names.
    pub fn sync_with_location(app: &AppHandle) {
        let path = navigation::current_path();
        let route = Route::parse(&path);
        if route.is_none() {
            diag::console_warn!("no route for {path}");
        }
        App::show(app, route);
    }

    fn show(app: &AppHandle, route: Option<Route>) {
        let mut this = app.borrow_mut();
        if this.route == route {
            return;
        }
        this.enter(route);
        this.render();
    }

    pub fn play_event(app: &AppHandle, event: PlayEvent) {
        let exit = {
            let mut this = app.borrow_mut();
            let exit = match &mut this.view {
                View::Play(flow) => flow.dispatch(event),
                _ => None,
            };
            if exit.is_none() {
                this.render();
            }
            exit
        };

        match exit {
            Some(Exit::Home) => App::navigate(app, Route::Home),
            Some(Exit::External(url)) => diag::console_log!("leaving for {url}"),
            None => {},
        }
    }

    fn enter(&mut self, route: Option<Route>) {
        self.metadata.deactivate();

        let previous = std::mem::replace(&mut self.view, View::Unrouted);
        self.view = match (&route, previous) {
            (Some(Route::Play(id)), View::Play(mut flow)) => {
                flow.retarget(id.clone());
                View::Play(flow)
            },
            (Some(Route::Play(id)), _) => View::Play(PlayFlow::mount(
                Rc::clone(&self.catalog),
                Rc::clone(&self.scheduler),
                Rc::clone(&self.navigator),
                self.site.redirect_delay(),
                id.clone(),
            )),
            (Some(Route::Home), _) => View::Home,
            (Some(Route::About), _) => View::About,
            (None, _) => View::Unrouted,
        };

        if let Some(route) = &route {
            let props = seo_for(route, &self.catalog, &self.site);
            self.metadata.activate(&props);
        }
        self.route = route;
    }

    fn render(&mut self) {
        self.listeners.clear();
        self.root.set_text_content(None);
        if let Err(e) = self.try_render() {
            diag::console_warn!("render failed: {e:?}");
        }
    }

    fn try_render(&mut self) -> JsResult<()> {
        let mut ui = Ui {
            dom: &self.dom,
            site: &self.site,
            limits: CardLimits::from_site(&self.site),
            listeners: &mut self.listeners,
            app: &self.this,
        };

        let main = ui.dom.el("main", "main")?;
        match &self.view {
            View::Unrouted => {},
            View::Home => main.append(&pages::home::render(&mut ui, &self.catalog)?)?,
            View::About => main.append(&pages::about::render(&mut ui)?)?,
            View::Play(flow) => main.append(&pages::play::render(&mut ui, flow.state())?)?,
        }

        let header = pages::layout::header(&mut ui, self.route.as_ref())?;
        let footer = pages::layout::footer(&ui)?;
        self.root.append(&header)?;
        self.root.append(&main)?;
        self.root.append(&footer)?;
        Ok(())
    }
}
