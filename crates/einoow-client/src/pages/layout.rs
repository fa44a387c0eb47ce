use einoow_core::route::{NavSection, Route};
use web_sys::Element;

use crate::app::Ui;
use crate::dom::{ElementExt, JsResult};

pub const SOCIAL_URL: &str = "https://x.com/einoow";
pub const LOGO_PATH: &str = "/einoow_logo.png";

pub fn header(ui: &mut Ui<'_>, active: Option<&Route>) -> JsResult<Element> {
    let header = ui.dom.el("header", "site-header")?;
    let nav = ui.dom.el("nav", "site-nav")?;

    let brand = ui.dom.route_link("/", "brand", "")?;
    let logo = ui.dom.el("img", "brand-logo")?;
    logo.set_attribute("src", LOGO_PATH)?;
    logo.set_attribute("alt", &ui.site.site_name)?;
    brand.append(&logo)?;
    brand.append(&ui.dom.text("span", "brand-name", &ui.site.site_name)?)?;
    nav.append(&brand)?;

    let links = ui.dom.el("div", "nav-links")?;
    let current = active.and_then(Route::nav_section);
    for section in NavSection::ALL {
        let class = if current == Some(section) {
            "nav-link active"
        } else {
            "nav-link"
        };
        links.append(&ui.dom.route_link(&section.route().path(), class, section.label())?)?;
    }
    nav.append(&links)?;
    header.append(&nav)?;
    Ok(header)
}

pub fn footer(ui: &Ui<'_>) -> JsResult<Element> {
    let footer = ui.dom.el("footer", "site-footer")?;
    let year = js_sys::Date::new_0().get_full_year();
    footer.append(&ui.dom.text(
        "p",
        "copyright",
        &copyright(year, &ui.site.site_name),
    )?)?;
    footer.append(&ui.dom.external_link(SOCIAL_URL, "social", "X", true)?)?;
    Ok(footer)
}

fn copyright(year: u32, site_name: &str) -> String {
    format!("© {year} {site_name}. All rights reserved.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_line() {
        assert_eq!(
            copyright(2026, "Einoow"),
            "© 2026 Einoow. All rights reserved."
        );
    }
}
