use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement};

use papirboard_shared::{PageEntry, PageId};

fn page_item(document: &Document, entry: &PageEntry) -> Option<Element> {
    let item = document.create_element("div").ok()?;
    let class_name = if entry.active {
        "paper-item active"
    } else {
        "paper-item"
    };
    let _ = item.set_attribute("class", class_name);
    let _ = item.set_attribute("data-page-id", &entry.id.to_string());

    let preview = document.create_element("div").ok()?;
    let _ = preview.set_attribute("class", "paper-preview");
    let _ = item.append_child(&preview);

    let name = document.create_element("span").ok()?;
    let _ = name.set_attribute("class", "paper-name");
    name.set_text_content(Some(&entry.name));
    let _ = item.append_child(&name);
    Some(item)
}

pub fn render_page_list(document: &Document, list_el: &HtmlElement, entries: &[PageEntry]) {
    list_el.set_inner_html("");
    for entry in entries {
        if let Some(item) = page_item(document, entry) {
            let _ = list_el.append_child(&item);
        }
    }
}

pub fn page_id_from_event(event: &Event) -> Option<PageId> {
    let mut current = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok());
    while let Some(element) = current {
        if let Some(id) = element.get_attribute("data-page-id") {
            return id.parse::<u32>().ok().and_then(PageId::new);
        }
        current = element.parent_element();
    }
    None
}
