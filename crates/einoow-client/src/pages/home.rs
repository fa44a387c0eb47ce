use einoow_core::card::{CardView, PLACEHOLDER_GLYPH};
use einoow_core::catalog::{Catalog, GameRecord};
use einoow_core::pages::HomeView;
use einoow_core::route::Route;
use web_sys::Element;

use crate::app::Ui;
use crate::card;
use crate::dom::{ElementExt, JsResult};

pub fn render(ui: &mut Ui<'_>, catalog: &Catalog) -> JsResult<Element> {
    let view = HomeView::build(catalog, ui.limits);
    let page = ui.dom.el("div", "home-page")?;

    if let Some(featured) = view.featured {
        page.append(&hero(ui, featured)?)?;
    }

    let section = ui.dom.el("section", "catalog")?;
    section.append(&ui.dom.text("h2", "catalog-heading", view.heading)?)?;
    if view.empty {
        let empty = ui.dom.el("div", "catalog-empty")?;
        empty.append(&ui.dom.text("span", "glyph", PLACEHOLDER_GLYPH)?)?;
        empty.append(&ui.dom.text("h3", "", "No games yet")?)?;
        empty.append(&ui.dom.text("p", "muted", "Check back soon for new games!")?)?;
        section.append(&empty)?;
    } else {
        let grid = ui.dom.el("div", "catalog-grid")?;
        for card_view in &view.cards {
            grid.append(&card::render(ui, card_view)?)?;
        }
        let teaser = ui.dom.el("div", "catalog-teaser")?;
        teaser.append(&ui.dom.text("span", "glyph", "🚀")?)?;
        teaser.append(&ui.dom.text("h3", "", "More Coming Soon")?)?;
        teaser.append(&ui.dom.text("p", "muted", "New games are in development")?)?;
        grid.append(&teaser)?;
        section.append(&grid)?;
    }
    page.append(&section)?;
    Ok(page)
}

fn hero(ui: &mut Ui<'_>, featured: &GameRecord) -> JsResult<Element> {
    let hero = ui.dom.el("section", "hero")?;

    let copy = ui.dom.el("div", "hero-copy")?;
    copy.append(&ui.dom.text("span", "hero-kicker", "✨ Featured Game")?)?;
    copy.append(&ui.dom.text("h1", "hero-title", &featured.name)?)?;
    copy.append(&ui.dom.text("p", "hero-description", &featured.description)?)?;
    let play = ui.dom.button("btn btn-primary", "▶ Play Now")?;
    let route = CardView::present(featured, ui.limits)
        .activate(|record| Route::Play(record.id.clone()));
    ui.on_click_route(&play, route)?;
    copy.append(&play)?;
    hero.append(&copy)?;

    let art = ui.dom.el("div", "hero-art")?;
    match &featured.image {
        Some(src) => {
            let img = ui.dom.el("img", "hero-image")?;
            img.set_attribute("src", src)?;
            img.set_attribute("alt", &featured.name)?;
            ui.hide_on_error(&img, &img)?;
            art.append(&img)?;
        },
        None => art.append(&ui.dom.text("span", "glyph", PLACEHOLDER_GLYPH)?)?,
    }
    hero.append(&art)?;
    Ok(hero)
}
