use einoow_core::card::{CardImage, CardView};
use einoow_core::catalog::GameRecord;
use einoow_core::route::Route;
use web_sys::Element;

use crate::app::Ui;
use crate::dom::{ElementExt, JsResult};

/// Build the clickable summary card for one game.
pub fn render(ui: &mut Ui<'_>, card: &CardView<'_>) -> JsResult<Element> {
    let button = ui.dom.button("game-card", "")?;

    let media = ui.dom.el("div", "game-card-media")?;
    match &card.image {
        CardImage::Image { src, alt } => {
            let img = ui.dom.el("img", "game-card-image")?;
            img.set_attribute("src", src)?;
            img.set_attribute("alt", alt)?;
            img.set_attribute("loading", "lazy")?;
            ui.hide_on_error(&img, &img)?;
            media.append(&img)?;
        },
        CardImage::Placeholder(glyph) => {
            media.append(&ui.dom.text("span", "game-card-placeholder", glyph)?)?;
        },
    }
    if let Some(badge) = card.badge {
        let class = format!("status-badge {}", badge.color.css_class());
        media.append(&ui.dom.text("span", &class, badge.label)?)?;
    }
    media.append(&ui.dom.text("span", "game-card-play", "▶ Play")?)?;
    button.append(&media)?;

    let body = ui.dom.el("div", "game-card-body")?;
    body.append(&ui.dom.text("h3", "game-card-name", card.name)?)?;
    body.append(&ui.dom.text("p", "game-card-summary", &card.summary)?)?;
    if !card.tags.is_empty() {
        let tags = ui.dom.el("div", "game-card-tags")?;
        for tag in card.tags {
            tags.append(&ui.dom.text("span", "tag", tag)?)?;
        }
        body.append(&tags)?;
    }
    button.append(&body)?;

    let route = card.activate(|record: &GameRecord| Route::Play(record.id.clone()));
    ui.on_click_route(&button, route)?;
    Ok(button)
}
