use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement, HtmlCanvasElement, HtmlElement, PointerEvent};

use papirboard_shared::geometry::client_to_canvas;
use papirboard_shared::{Point, Tool};

use crate::render::present;
use crate::state::State;

pub fn get_element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element: {id}")))?;
    element
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Invalid element type: {id}")))
}

pub fn query_element<T: JsCast>(document: &Document, selector: &str) -> Result<T, JsValue> {
    let element = document
        .query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("Missing element: {selector}")))?;
    element
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Invalid element type: {selector}")))
}

pub fn set_tool_button(button: &HtmlButtonElement, active: bool) {
    let _ = button.class_list().toggle_with_force("active", active);
    let pressed = if active { "true" } else { "false" };
    let _ = button.set_attribute("aria-pressed", pressed);
}

pub fn set_canvas_cursor(canvas: &HtmlCanvasElement, tool: Tool) {
    let cursor = match tool {
        Tool::Brush => "crosshair",
        Tool::Eraser => "cell",
    };
    let _ = canvas.style().set_property("cursor", cursor);
}

fn container_size(container: &HtmlElement) -> (u32, u32) {
    (
        container.client_width().max(0) as u32,
        container.client_height().max(0) as u32,
    )
}

/// Matches the canvas backing size to its container, then lets the board run its
/// capture/resize/restore cycle and shows the result.
pub fn resize_canvas(state: &mut State) {
    let (width, height) = container_size(&state.container);
    state.canvas.set_width(width);
    state.canvas.set_height(height);
    state.board.resize(width, height);
    present(&state.ctx, state.board.bitmap());
}

pub fn event_to_point(canvas: &HtmlCanvasElement, event: &PointerEvent) -> Option<Point> {
    let rect = canvas.get_bounding_client_rect();
    client_to_canvas(
        event.client_x() as f64,
        event.client_y() as f64,
        rect.left(),
        rect.top(),
    )
}
