use crate::bitmap::Bitmap;
use crate::color::Color;
use crate::config::ResolvedConfig;
use crate::geometry::{Point, Rect};
use crate::page::{PageEntry, PageId, PageStore};
use crate::settings::{DrawingSettings, Tool, ToolEvent};
use crate::surface::Surface;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Swatch {
    pub color: Color,
    pub active: bool,
}

/// Owns the pages, the live surface, the drawing settings and the palette, and
/// is the only thing that mutates any of them.
#[derive(Debug)]
pub struct Board {
    pages: PageStore,
    surface: Surface,
    settings: DrawingSettings,
    palette: Vec<Color>,
    page_name_prefix: String,
}

impl Board {
    /// Sizes the surface and creates the first page.
    pub fn new(width: u32, height: u32, config: ResolvedConfig) -> Self {
        let mut board = Self {
            pages: PageStore::new(),
            surface: Surface::default(),
            settings: DrawingSettings::new(config.brush_size, config.brush_color),
            palette: config.palette,
            page_name_prefix: config.page_name_prefix,
        };
        board.resize(width, height);
        board.add_page();
        board
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn bitmap(&self) -> &Bitmap {
        self.surface.bitmap()
    }

    pub fn settings(&self) -> &DrawingSettings {
        &self.settings
    }

    pub fn pages(&self) -> &PageStore {
        &self.pages
    }

    pub fn active_page(&self) -> Option<PageId> {
        self.pages.active_id()
    }

    pub fn add_page(&mut self) -> PageId {
        self.capture_active();
        let prefix = &self.page_name_prefix;
        let id = self.pages.push(|id| format!("{prefix} {id}"));
        log::debug!("added page {id} ({} total)", self.pages.len());
        self.switch_page(id);
        id
    }

    /// Returns whether the active page changed.
    pub fn switch_page(&mut self, id: PageId) -> bool {
        if self.pages.active_id() == Some(id) {
            return false;
        }
        if !self.pages.contains(id) {
            log::warn!("ignoring switch to unknown page {id}");
            return false;
        }
        self.capture_active();
        self.pages.set_active(id);
        self.restore_active();
        log::debug!("switched to page {id}");
        true
    }

    pub fn capture_active(&mut self) {
        if self.pages.active_id().is_none() {
            return;
        }
        self.pages.store_active(self.surface.snapshot());
    }

    fn restore_active(&mut self) {
        let snapshot = self.pages.active().and_then(|page| page.snapshot());
        self.surface.restore(snapshot);
    }

    pub fn page_list(&self) -> Vec<PageEntry> {
        self.pages.entries()
    }

    /// Content is anchored at the top-left corner: shrinking clips it for good,
    /// growing leaves the new area blank.
    pub fn resize(&mut self, width: u32, height: u32) {
        log::debug!(
            "resizing surface {}x{} -> {width}x{height}",
            self.surface.width(),
            self.surface.height()
        );
        self.capture_active();
        self.surface.resize(width, height);
        self.apply_settings();
        self.restore_active();
    }

    fn apply_settings(&mut self) {
        self.surface.apply_style(self.settings.stroke_style());
    }

    pub fn begin_stroke(&mut self, point: Point) {
        self.surface.begin_stroke(point);
        self.apply_settings();
    }

    pub fn continue_stroke(&mut self, point: Point) -> Option<Rect> {
        self.surface.continue_stroke(point)
    }

    pub fn end_stroke(&mut self) -> bool {
        if !self.surface.end_stroke() {
            return false;
        }
        self.capture_active();
        true
    }

    pub fn is_stroking(&self) -> bool {
        self.surface.is_stroking()
    }

    pub fn apply_tool_event(&mut self, event: ToolEvent) {
        self.settings.transition(event);
        self.apply_settings();
    }

    pub fn activate_brush(&mut self) {
        self.apply_tool_event(ToolEvent::SelectBrush);
    }

    pub fn activate_eraser(&mut self) {
        self.apply_tool_event(ToolEvent::SelectEraser);
    }

    pub fn set_color(&mut self, color: Color) {
        self.apply_tool_event(ToolEvent::SelectColor(color));
    }

    /// Takes effect when settings are next applied, i.e. at the next stroke.
    pub fn set_brush_size(&mut self, size: f64) -> bool {
        self.settings.set_brush_size(size)
    }

    pub fn tool(&self) -> Tool {
        self.settings.tool()
    }

    pub fn palette(&self) -> Vec<Swatch> {
        let selected = match self.settings.tool() {
            Tool::Brush => Some(self.settings.brush_color()),
            Tool::Eraser => None,
        };
        self.palette
            .iter()
            .map(|&color| Swatch {
                color,
                active: selected == Some(color),
            })
            .collect()
    }

    pub fn palette_color(&self, index: usize) -> Option<Color> {
        self.palette.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Composite;
    use pretty_assertions::assert_eq;

    fn board(width: u32, height: u32) -> Board {
        Board::new(width, height, ResolvedConfig::default())
    }

    #[test]
    fn new_board_has_first_page_active() {
        let board = board(40, 30);
        assert_eq!(board.active_page(), Some(PageId::FIRST));
        assert_eq!(
            board.page_list(),
            vec![PageEntry {
                id: PageId::FIRST,
                name: "Papír 1".to_string(),
                active: true,
            }]
        );
        assert_eq!((board.bitmap().width(), board.bitmap().height()), (40, 30));
    }

    #[test]
    fn switch_to_active_page_is_noop() {
        let mut board = board(10, 10);
        assert!(!board.switch_page(PageId::FIRST));
    }

    #[test]
    fn switch_to_unknown_page_keeps_active() {
        let mut board = board(10, 10);
        assert!(!board.switch_page(PageId::new(7).unwrap()));
        assert_eq!(board.active_page(), Some(PageId::FIRST));
    }

    #[test]
    fn resize_reapplies_settings() {
        let mut board = board(10, 10);
        board.set_brush_size(9.0);
        board.activate_eraser();
        board.resize(20, 20);
        let style = board.surface().style();
        assert_eq!(style.line_width, 9.0);
        assert_eq!(style.composite, Composite::DestinationOut);
    }

    #[test]
    fn brush_size_applies_at_next_stroke() {
        let mut board = board(10, 10);
        board.set_brush_size(3.0);
        assert_eq!(board.surface().style().line_width, 5.0);
        board.begin_stroke(Point::new(1.0, 1.0));
        assert_eq!(board.surface().style().line_width, 3.0);
    }

    #[test]
    fn end_stroke_captures_into_active_page() {
        let mut board = board(20, 20);
        board.begin_stroke(Point::new(5.0, 5.0));
        board.continue_stroke(Point::new(15.0, 5.0));
        assert!(board.pages().active().unwrap().snapshot().is_none());
        assert!(board.end_stroke());
        let snapshot = board.pages().active().unwrap().snapshot().unwrap();
        assert_eq!(snapshot, board.bitmap());
        assert!(!board.end_stroke());
    }

    #[test]
    fn eraser_clears_palette_indicator() {
        let mut board = board(4, 4);
        assert_eq!(board.palette().iter().filter(|swatch| swatch.active).count(), 1);
        board.activate_eraser();
        assert!(board.palette().iter().all(|swatch| !swatch.active));
        board.activate_brush();
        assert_eq!(board.palette().iter().filter(|swatch| swatch.active).count(), 1);
    }

    #[test]
    fn brush_size_stays_editable_while_erasing() {
        let mut board = board(4, 4);
        board.activate_eraser();
        assert!(board.set_brush_size(12.0));
        board.activate_brush();
        assert_eq!(board.settings().brush_size(), 12.0);
        assert_eq!(board.surface().style().line_width, 12.0);
    }
}
