use einoow_core::card::PLACEHOLDER_GLYPH;
use einoow_core::catalog::GameRecord;
use einoow_core::pages::PlayScreen;
use einoow_core::play::{PlayEvent, PlayState};
use web_sys::Element;

use crate::app::Ui;
use crate::dom::{ElementExt, JsResult};

pub fn render(ui: &mut Ui<'_>, state: &PlayState) -> JsResult<Element> {
    let page = ui.dom.el("div", "play-page")?;
    match PlayScreen::for_state(state) {
        PlayScreen::Blank => {},
        PlayScreen::NotFound => {
            let panel = ui.dom.el("div", "play-center")?;
            panel.append(&ui.dom.text("span", "glyph", PLACEHOLDER_GLYPH)?)?;
            panel.append(&ui.dom.text("h1", "", "Game Not Found")?)?;
            panel.append(&ui.dom.text(
                "p",
                "muted",
                "The game you're looking for doesn't exist.",
            )?)?;
            panel.append(&back_link(ui, "← Back to Games", "btn btn-primary")?)?;
            page.append(&panel)?;
        },
        PlayScreen::Launching { record, hero_image } => {
            page.append(&hero(ui, record, &hero_image)?)?;
            let panel = ui.dom.el("div", "play-center")?;
            panel.append(&ui.dom.text("div", "launch-pulse", "⚡")?)?;
            panel.append(&ui.dom.text("h1", "", &format!("Launching {}", record.name))?)?;
            panel.append(&ui.dom.text(
                "p",
                "muted",
                &format!("Redirecting you to {}...", record.url),
            )?)?;

            let actions = ui.dom.el("div", "play-actions")?;
            actions.append(&ui.dom.external_link(&record.url, "btn btn-primary", "Go Now →", false)?)?;
            let embed = ui.dom.button("btn btn-secondary", "Play Embedded")?;
            ui.on_click_play(&embed, PlayEvent::PlayEmbedded)?;
            actions.append(&embed)?;
            let cancel = ui.dom.route_link("/", "link-muted", "Cancel")?;
            ui.on_click_play(&cancel, PlayEvent::Cancel)?;
            actions.append(&cancel)?;
            panel.append(&actions)?;
            page.append(&panel)?;
        },
        PlayScreen::Frame {
            record,
            permissions,
            sandbox,
        } => {
            let toolbar = ui.dom.el("div", "play-toolbar")?;
            let left = ui.dom.el("div", "toolbar-left")?;
            left.append(&back_link(ui, "← Back", "link-muted")?)?;
            left.append(&ui.dom.text("span", "toolbar-title", &record.name)?)?;
            toolbar.append(&left)?;
            toolbar.append(&ui.dom.external_link(
                &record.url,
                "toolbar-open",
                "Open in new tab ↗",
                true,
            )?)?;
            page.append(&toolbar)?;

            let frame = ui.dom.el("iframe", "play-frame")?;
            frame.set_attribute("src", &record.url)?;
            frame.set_attribute("title", &record.name)?;
            frame.set_attribute("allow", permissions)?;
            frame.set_attribute("sandbox", sandbox)?;
            page.append(&frame)?;
        },
        PlayScreen::Awaiting {
            record,
            hero_image,
            label,
        } => {
            page.append(&hero(ui, record, &hero_image)?)?;
            let panel = ui.dom.el("div", "play-center")?;
            panel.append(&ui.dom.text("span", "glyph", "🚧")?)?;
            panel.append(&ui.dom.text("h1", "", &record.name)?)?;
            panel.append(&ui.dom.text("p", "muted", &record.description)?)?;
            panel.append(&ui.dom.text("span", "status-pill", label)?)?;
            panel.append(&back_link(ui, "← Back to Games", "btn btn-secondary")?)?;
            page.append(&panel)?;
        },
    }
    Ok(page)
}

/// Large artwork above the launch and awaiting panels; the frame collapses if the art is missing.
fn hero(ui: &mut Ui<'_>, record: &GameRecord, src: &str) -> JsResult<Element> {
    let frame = ui.dom.el("div", "play-hero")?;
    let img = ui.dom.el("img", "play-hero-image")?;
    img.set_attribute("src", src)?;
    img.set_attribute("alt", &record.name)?;
    ui.hide_on_error(&img, &frame)?;
    frame.append(&img)?;
    Ok(frame)
}

fn back_link(ui: &mut Ui<'_>, text: &str, class: &str) -> JsResult<Element> {
    let link = ui.dom.route_link("/", class, text)?;
    ui.on_click_play(&link, PlayEvent::Back)?;
    Ok(link)
}
