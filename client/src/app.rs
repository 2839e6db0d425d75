use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, Event, HtmlButtonElement, HtmlCanvasElement, HtmlElement,
    HtmlInputElement, PointerEvent,
};

use papirboard_shared::{Board, Tool};

use crate::config::{
    debug_enabled, load_config, log_level, ADD_PAPER_BUTTON_ID, BRUSH_BUTTON_ID, CANVAS_ID,
    CONTAINER_SELECTOR, ERASER_BUTTON_ID, PALETTE_ID, PAPERS_LIST_ID, SIZE_INPUT_ID,
};
use crate::dom::{
    event_to_point, get_element, query_element, resize_canvas, set_canvas_cursor,
    set_tool_button,
};
use crate::pages::{page_id_from_event, render_page_list};
use crate::palette::{palette_index_from_event, render_palette};
use crate::render::{present, present_region};
use crate::state::{Controls, State};

fn document_ready_state(document: &web_sys::Document) -> Option<String> {
    Reflect::get(document.as_ref(), &JsValue::from_str("readyState"))
        .ok()?
        .as_string()
}

fn coalesced_pointer_events(event: &PointerEvent) -> Vec<PointerEvent> {
    let get_coalesced_events =
        Reflect::get(event.as_ref(), &JsValue::from_str("getCoalescedEvents"))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok());

    let mut out = Vec::new();
    if let Some(get_coalesced_events) = get_coalesced_events {
        if let Ok(events) = get_coalesced_events
            .call0(event.as_ref())
            .and_then(|value| value.dyn_into::<js_sys::Array>())
        {
            out.reserve(events.length() as usize);
            for index in 0..events.length() {
                if let Ok(event) = events.get(index).dyn_into::<PointerEvent>() {
                    out.push(event);
                }
            }
        }
    }
    // Browsers without coalesced events, or an empty list, still get the move.
    if out.is_empty() {
        out.push(event.clone());
    }
    out
}

fn sync_tool_ui(state: &State, controls: &Controls) {
    let tool = state.board.tool();
    set_tool_button(&controls.brush_button, tool == Tool::Brush);
    set_tool_button(&controls.eraser_button, tool == Tool::Eraser);
    set_canvas_cursor(&state.canvas, tool);
    render_palette(&controls.document, &controls.palette_el, &state.board.palette());
}

fn sync_page_list(state: &State, controls: &Controls) {
    render_page_list(
        &controls.document,
        &controls.papers_el,
        &state.board.page_list(),
    );
}

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;
    let started = Rc::new(Cell::new(false));

    if document_ready_state(&document).as_deref() != Some("loading") {
        started.set(true);
        return start_app();
    }

    let onready_started = started.clone();
    let onready = Closure::<dyn FnMut(Event)>::new(move |_| {
        if onready_started.replace(true) {
            return;
        }
        if let Err(err) = start_app() {
            web_sys::console::error_1(&err);
        }
    });
    document.add_event_listener_with_callback(
        "DOMContentLoaded",
        onready.as_ref().unchecked_ref(),
    )?;
    onready.forget();

    Ok(())
}

fn start_app() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;
    // Already installed when the module is started twice.
    let _ = console_log::init_with_level(log_level(debug_enabled(&window)));

    let canvas: HtmlCanvasElement = get_element(&document, CANVAS_ID)?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("Missing canvas context"))?
        .dyn_into::<CanvasRenderingContext2d>()?;
    let container: HtmlElement = query_element(&document, CONTAINER_SELECTOR)?;
    let controls = Controls {
        document: document.clone(),
        brush_button: get_element::<HtmlButtonElement>(&document, BRUSH_BUTTON_ID)?,
        eraser_button: get_element::<HtmlButtonElement>(&document, ERASER_BUTTON_ID)?,
        size_input: get_element::<HtmlInputElement>(&document, SIZE_INPUT_ID)?,
        palette_el: get_element::<HtmlElement>(&document, PALETTE_ID)?,
        papers_el: get_element::<HtmlElement>(&document, PAPERS_LIST_ID)?,
        add_paper_button: get_element::<HtmlButtonElement>(&document, ADD_PAPER_BUTTON_ID)?,
    };

    // Pointer events stand in for mouse and touch alike; keep touches from
    // scrolling the page instead of drawing.
    let _ = canvas.style().set_property("touch-action", "none");

    let config = load_config(&document);
    let board = Board::new(0, 0, config);
    let state = Rc::new(RefCell::new(State {
        canvas: canvas.clone(),
        ctx,
        container,
        board,
    }));

    {
        let mut state = state.borrow_mut();
        resize_canvas(&mut state);
        controls
            .size_input
            .set_value_as_number(state.board.settings().brush_size());
        sync_tool_ui(&state, &controls);
        sync_page_list(&state, &controls);
        log::debug!(
            "board ready {}x{}",
            state.board.bitmap().width(),
            state.board.bitmap().height()
        );
    }

    {
        let resize_state = state.clone();
        let onresize = Closure::<dyn FnMut()>::new(move || {
            let mut state = resize_state.borrow_mut();
            resize_canvas(&mut state);
        });
        window.add_event_listener_with_callback("resize", onresize.as_ref().unchecked_ref())?;
        onresize.forget();
    }

    {
        let down_state = state.clone();
        let down_canvas = canvas.clone();
        let ondown = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            if event.button() != 0 {
                return;
            }
            event.prevent_default();
            let Some(point) = event_to_point(&down_canvas, &event) else {
                return;
            };
            down_state.borrow_mut().board.begin_stroke(point);
        });
        canvas.add_event_listener_with_callback("pointerdown", ondown.as_ref().unchecked_ref())?;
        ondown.forget();
    }

    {
        let move_state = state.clone();
        let move_canvas = canvas.clone();
        let onmove = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            let mut state = move_state.borrow_mut();
            if !state.board.is_stroking() {
                return;
            }
            for event in coalesced_pointer_events(&event) {
                let Some(point) = event_to_point(&move_canvas, &event) else {
                    continue;
                };
                if let Some(dirty) = state.board.continue_stroke(point) {
                    present_region(&state.ctx, state.board.bitmap(), dirty);
                }
            }
        });
        canvas.add_event_listener_with_callback("pointermove", onmove.as_ref().unchecked_ref())?;
        onmove.forget();
    }

    {
        let stop_state = state.clone();
        let onstop = Closure::<dyn FnMut(PointerEvent)>::new(move |_event: PointerEvent| {
            if stop_state.borrow_mut().board.end_stroke() {
                log::debug!("stroke committed");
            }
        });
        canvas.add_event_listener_with_callback("pointerup", onstop.as_ref().unchecked_ref())?;
        canvas.add_event_listener_with_callback("pointerleave", onstop.as_ref().unchecked_ref())?;
        onstop.forget();
    }

    {
        let tool_state = state.clone();
        let tool_controls = controls.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            let mut state = tool_state.borrow_mut();
            state.board.activate_brush();
            sync_tool_ui(&state, &tool_controls);
        });
        controls
            .brush_button
            .add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let tool_state = state.clone();
        let tool_controls = controls.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            let mut state = tool_state.borrow_mut();
            state.board.activate_eraser();
            sync_tool_ui(&state, &tool_controls);
        });
        controls
            .eraser_button
            .add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let palette_state = state.clone();
        let palette_controls = controls.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(index) = palette_index_from_event(&event) else {
                return;
            };
            let mut state = palette_state.borrow_mut();
            let Some(color) = state.board.palette_color(index) else {
                return;
            };
            state.board.set_color(color);
            sync_tool_ui(&state, &palette_controls);
        });
        controls
            .palette_el
            .add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let size_state = state.clone();
        let size_input = controls.size_input.clone();
        let oninput = Closure::<dyn FnMut(Event)>::new(move |_| {
            let size = size_input.value_as_number();
            size_state.borrow_mut().board.set_brush_size(size);
        });
        controls
            .size_input
            .add_event_listener_with_callback("input", oninput.as_ref().unchecked_ref())?;
        oninput.forget();
    }

    {
        let add_state = state.clone();
        let add_controls = controls.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            let mut state = add_state.borrow_mut();
            state.board.add_page();
            present(&state.ctx, state.board.bitmap());
            sync_page_list(&state, &add_controls);
        });
        controls
            .add_paper_button
            .add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let list_state = state.clone();
        let list_controls = controls.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(id) = page_id_from_event(&event) else {
                return;
            };
            let mut state = list_state.borrow_mut();
            if !state.board.switch_page(id) {
                return;
            }
            present(&state.ctx, state.board.bitmap());
            sync_page_list(&state, &list_controls);
        });
        controls
            .papers_el
            .add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    Ok(())
}
