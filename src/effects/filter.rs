//! Project category filter buttons.

use motion::filter::ProjectFilter;
use web_sys::HtmlElement;

use crate::state::page::PageHandle;
use crate::util::dom::{self, DomError};

pub fn install(page: PageHandle) -> Result<(), DomError> {
    let buttons = dom::query_all(".filter-btn")?;
    let cards = dom::query_all(".project-card")?;
    for button in &buttons {
        let all = buttons.clone();
        let cards = cards.clone();
        let this = button.clone();
        dom::on(button, "click", move |_| {
            let filter = ProjectFilter::parse(this.get_attribute("data-filter").as_deref());
            for other in &all {
                dom::set_class(other, "active", false);
            }
            dom::set_class(&this, "active", true);
            apply(&filter, &cards);
            page.update_quiet(|p| p.filter = filter);
        })?;
    }
    Ok(())
}

fn apply(filter: &ProjectFilter, cards: &[HtmlElement]) {
    let categories: Vec<Option<String>> = cards.iter().map(|c| c.get_attribute("data-category")).collect();
    let shown = filter.visibility(categories.iter().map(Option::as_deref));
    for (card, show) in cards.iter().zip(shown) {
        if show {
            dom::set_style(card, "display", "block");
            dom::set_style(card, "animation", "fadeInUp 0.6s ease");
        } else {
            dom::set_style(card, "display", "none");
        }
    }
}
