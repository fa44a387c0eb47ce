use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

pub type JsResult<T> = Result<T, JsValue>;

pub fn window() -> JsResult<web_sys::Window> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub fn document() -> JsResult<Document> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Element factory bound to one document.
#[derive(Clone)]
pub struct Dom {
    document: Document,
}

impl Dom {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn el(&self, tag: &str, class: &str) -> JsResult<Element> {
        let node = self.document.create_element(tag)?;
        if !class.is_empty() {
            node.set_class_name(class);
        }
        Ok(node)
    }

    pub fn text(&self, tag: &str, class: &str, text: &str) -> JsResult<Element> {
        let node = self.el(tag, class)?;
        node.set_text_content(Some(text));
        Ok(node)
    }

    /// In-site link handled by the client router instead of a page load.
    pub fn route_link(&self, href: &str, class: &str, text: &str) -> JsResult<Element> {
        let node = self.text("a", class, text)?;
        node.set_attribute("href", href)?;
        node.set_attribute("data-route", "")?;
        Ok(node)
    }

    /// Link leaving the site. `new_tab` opens it in a separate browsing context.
    pub fn external_link(
        &self,
        href: &str,
        class: &str,
        text: &str,
        new_tab: bool,
    ) -> JsResult<Element> {
        let node = self.text("a", class, text)?;
        node.set_attribute("href", href)?;
        if new_tab {
            node.set_attribute("target", "_blank")?;
            node.set_attribute("rel", "noopener noreferrer")?;
        }
        Ok(node)
    }

    pub fn button(&self, class: &str, text: &str) -> JsResult<Element> {
        let node = self.text("button", class, text)?;
        node.set_attribute("type", "button")?;
        Ok(node)
    }
}

pub trait ElementExt {
    fn append(&self, child: &Element) -> JsResult<()>;
    fn hide(&self) -> JsResult<()>;
}

impl ElementExt for Element {
    fn append(&self, child: &Element) -> JsResult<()> {
        self.append_child(child)?;
        Ok(())
    }

    fn hide(&self) -> JsResult<()> {
        let html: &HtmlElement = self.dyn_ref().ok_or_else(|| JsValue::from_str("not html"))?;
        html.style().set_property("display", "none")
    }
}

/// Event closures owned by the current render. Dropped when the view is rebuilt.
#[derive(Default)]
pub struct Listeners {
    closures: Vec<Closure<dyn FnMut(Event)>>,
}

impl Listeners {
    pub fn on(
        &mut self,
        target: &EventTarget,
        event: &str,
        handler: impl FnMut(Event) + 'static,
    ) -> JsResult<()> {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        self.closures.push(closure);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.closures.clear();
    }
}
