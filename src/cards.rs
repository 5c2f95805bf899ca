use crate::carousel::{card_markup, nav_state, scroll_step, CarouselModel, TUTORS};
use crate::dom;
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Inject one card per tutor record into the list element. Clicking a card
/// flips its expanded state in the model and mirrors it as a CSS class.
pub fn render_cards(
    document: &web::Document,
    list: &web::Element,
    model: &Rc<RefCell<CarouselModel>>,
) -> anyhow::Result<()> {
    list.set_inner_html("");
    for (index, tutor) in TUTORS.iter().enumerate() {
        let li = document
            .create_element("li")
            .map_err(|e| anyhow!("{:?}", e))?;
        li.set_class_name("tutor-card");
        li.set_inner_html(&card_markup(tutor));
        list.append_child(&li).map_err(|e| anyhow!("{:?}", e))?;

        let model = model.clone();
        let card = li.clone();
        dom::add_listener(&li, "click", move || {
            let expanded = model.borrow_mut().toggle(index);
            let _ = card.class_list().toggle_with_force("expanded", expanded);
        });
    }
    Ok(())
}

/// Wire the two arrow controls to scroll by one card width plus gap, and
/// keep their disabled state in sync with the scroll extremes.
pub fn wire_navigation(
    window: &web::Window,
    list: web::Element,
    prev: web::Element,
    next: web::Element,
) {
    let step = measured_scroll_step(window, &list);

    {
        let list = list.clone();
        dom::add_listener(&prev, "click", move || {
            list.set_scroll_left((list.scroll_left() as f64 - step) as i32);
        });
    }
    {
        let list = list.clone();
        dom::add_listener(&next, "click", move || {
            list.set_scroll_left((list.scroll_left() as f64 + step) as i32);
        });
    }

    {
        let list_scrolled = list.clone();
        let prev = prev.clone();
        let next = next.clone();
        dom::add_listener(&list, "scroll", move || {
            apply_nav_state(&list_scrolled, &prev, &next);
        });
    }
    apply_nav_state(&list, &prev, &next);
}

fn apply_nav_state(list: &web::Element, prev: &web::Element, next: &web::Element) {
    let state = nav_state(
        list.scroll_left() as f64,
        list.scroll_width() as f64,
        list.client_width() as f64,
    );
    let _ = prev
        .class_list()
        .toggle_with_force("disabled", !state.prev_enabled);
    let _ = next
        .class_list()
        .toggle_with_force("disabled", !state.next_enabled);
}

/// One card width plus the list's inter-card gap, measured from the
/// rendered layout (computed style resolves the gap to pixels).
fn measured_scroll_step(window: &web::Window, list: &web::Element) -> f64 {
    let gap = window
        .get_computed_style(list)
        .ok()
        .flatten()
        .and_then(|style| style.get_property_value("gap").ok())
        .map(|v| parse_px(&v))
        .unwrap_or(0.0);
    let card_width = list
        .query_selector(".tutor-card")
        .ok()
        .flatten()
        .and_then(|card| card.dyn_into::<web::HtmlElement>().ok())
        .map(|card| card.offset_width() as f64)
        .unwrap_or(0.0);
    scroll_step(card_width, gap)
}

fn parse_px(value: &str) -> f64 {
    value
        .trim()
        .trim_end_matches("px")
        .trim()
        .parse()
        .unwrap_or(0.0)
}
