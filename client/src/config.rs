use log::Level;
use web_sys::{Document, Window};

use papirboard_shared::{BoardConfig, ResolvedConfig};

pub const CONFIG_ELEMENT_ID: &str = "papir-config";

pub const CANVAS_ID: &str = "drawing-canvas";
pub const CONTAINER_SELECTOR: &str = ".canvas-wrapper";
pub const BRUSH_BUTTON_ID: &str = "btn-brush";
pub const ERASER_BUTTON_ID: &str = "btn-eraser";
pub const SIZE_INPUT_ID: &str = "brush-size";
pub const PALETTE_ID: &str = "color-palette";
pub const PAPERS_LIST_ID: &str = "papers-list";
pub const ADD_PAPER_BUTTON_ID: &str = "btn-add-paper";

pub fn debug_enabled(window: &Window) -> bool {
    let search = window.location().search().ok().unwrap_or_default();
    search.contains("debug=1")
        || search.contains("debug=true")
        || search.contains("log=1")
        || search.contains("log=true")
}

pub fn log_level(debug: bool) -> Level {
    if debug {
        Level::Debug
    } else {
        Level::Warn
    }
}

/// Reads the optional JSON block embedded in the page. Anything unusable falls
/// back to the built-in defaults.
pub fn load_config(document: &Document) -> ResolvedConfig {
    let Some(text) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return ResolvedConfig::default();
    };
    match BoardConfig::from_json(&text).and_then(|config| config.resolve()) {
        Ok(config) => {
            log::debug!(
                "loaded config: {} colors, brush {} {}",
                config.palette.len(),
                config.brush_size,
                config.brush_color
            );
            config
        }
        Err(error) => {
            log::error!("ignoring #{CONFIG_ELEMENT_ID}: {error}");
            ResolvedConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_flag_raises_console_level() {
        assert_eq!(log_level(true), Level::Debug);
        assert_eq!(log_level(false), Level::Warn);
        assert!(log_level(false) < Level::Info);
    }
}
