use web_sys::Element;

use super::layout::{LOGO_PATH, SOCIAL_URL};
use crate::app::Ui;
use crate::dom::{ElementExt, JsResult};

const TAGLINE: &str = "Making games is fun.";
const BIO: &str =
    "Life itself is the ultimate game; everything we design is a small window into that truth.";
const SIGN_OFF: &str = "Hope you enjoy what I create!";
const CONTACT_EMAIL: &str = "hello@einoow.com";

pub fn render(ui: &mut Ui<'_>) -> JsResult<Element> {
    let page = ui.dom.el("div", "about-page")?;

    let intro = ui.dom.el("div", "about-header")?;
    let logo = ui.dom.el("img", "about-logo")?;
    logo.set_attribute("src", LOGO_PATH)?;
    logo.set_attribute("alt", &ui.site.site_name)?;
    intro.append(&logo)?;
    let heading = format!("About {}", ui.site.site_name);
    intro.append(&ui.dom.text("h1", "about-title", &heading)?)?;
    intro.append(&ui.dom.text("p", "about-tagline", TAGLINE)?)?;
    page.append(&intro)?;

    let bio = ui.dom.el("section", "panel about-bio")?;
    bio.append(&ui.dom.text("p", "lead", BIO)?)?;
    bio.append(&ui.dom.text("p", "muted", SIGN_OFF)?)?;
    page.append(&bio)?;

    let connect = ui.dom.el("section", "panel about-links")?;
    connect.append(&ui.dom.text("h2", "panel-title", "Connect")?)?;
    connect.append(&ui.dom.external_link(SOCIAL_URL, "contact", "X · @einoow", true)?)?;
    let discord = ui.dom.text("div", "contact disabled", "Discord · Coming soon")?;
    discord.set_attribute("aria-disabled", "true")?;
    connect.append(&discord)?;
    connect.append(&ui.dom.external_link(
        &format!("mailto:{CONTACT_EMAIL}"),
        "contact",
        &format!("Email · {CONTACT_EMAIL}"),
        false,
    )?)?;
    page.append(&connect)?;

    Ok(page)
}
