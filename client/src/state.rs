use web_sys::{
    CanvasRenderingContext2d, Document, HtmlButtonElement, HtmlCanvasElement, HtmlElement,
    HtmlInputElement,
};

use papirboard_shared::Board;

pub struct State {
    pub canvas: HtmlCanvasElement,
    pub ctx: CanvasRenderingContext2d,
    pub container: HtmlElement,
    pub board: Board,
}

/// The toolbar and sidebar elements event handlers update.
#[derive(Clone)]
pub struct Controls {
    pub document: Document,
    pub brush_button: HtmlButtonElement,
    pub eraser_button: HtmlButtonElement,
    pub size_input: HtmlInputElement,
    pub palette_el: HtmlElement,
    pub papers_el: HtmlElement,
    pub add_paper_button: HtmlButtonElement,
}
