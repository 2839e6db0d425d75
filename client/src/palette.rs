use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement};

use papirboard_shared::Swatch;

pub fn render_palette(document: &Document, palette_el: &HtmlElement, swatches: &[Swatch]) {
    palette_el.set_inner_html("");
    for (index, swatch) in swatches.iter().enumerate() {
        let Ok(element) = document.create_element("div") else {
            continue;
        };
        let Ok(dot) = element.dyn_into::<HtmlElement>() else {
            continue;
        };
        let color = swatch.color.to_hex();
        let class_name = if swatch.active {
            "color-dot active"
        } else {
            "color-dot"
        };
        let _ = dot.set_attribute("class", class_name);
        let _ = dot.set_attribute("data-index", &index.to_string());
        let _ = dot.set_attribute("role", "button");
        let _ = dot.set_attribute("aria-label", &format!("Use color {color}"));
        let _ = dot.style().set_property("background-color", &color);
        let _ = palette_el.append_child(&dot);
    }
}

pub fn palette_index_from_event(event: &Event) -> Option<usize> {
    let mut current = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok());
    while let Some(element) = current {
        if let Some(index) = element.get_attribute("data-index") {
            return index.parse::<usize>().ok();
        }
        current = element.parent_element();
    }
    None
}
