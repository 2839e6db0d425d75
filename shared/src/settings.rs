use crate::color::Color;
use crate::raster::{Composite, StrokeStyle};

pub const DEFAULT_BRUSH_SIZE: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Brush,
    Eraser,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToolEvent {
    SelectBrush,
    SelectEraser,
    /// Choosing a color always lands on the brush, whatever the current tool.
    SelectColor(Color),
}

/// Process-wide drawing settings; they are not part of any page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawingSettings {
    brush_size: f64,
    brush_color: Color,
    tool: Tool,
}

impl DrawingSettings {
    pub fn new(brush_size: f64, brush_color: Color) -> Self {
        Self {
            brush_size,
            brush_color,
            tool: Tool::Brush,
        }
    }

    pub fn brush_size(&self) -> f64 {
        self.brush_size
    }

    pub fn brush_color(&self) -> Color {
        self.brush_color
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn transition(&mut self, event: ToolEvent) {
        match event {
            ToolEvent::SelectBrush => self.tool = Tool::Brush,
            ToolEvent::SelectEraser => self.tool = Tool::Eraser,
            ToolEvent::SelectColor(color) => {
                self.brush_color = color;
                self.tool = Tool::Brush;
            }
        }
    }

    /// Returns false and keeps the previous size for values no brush can have.
    pub fn set_brush_size(&mut self, size: f64) -> bool {
        if !size.is_finite() || size <= 0.0 {
            log::warn!("ignoring brush size {size}");
            return false;
        }
        self.brush_size = size;
        true
    }

    pub fn stroke_style(&self) -> StrokeStyle {
        let composite = match self.tool {
            Tool::Brush => Composite::SourceOver,
            Tool::Eraser => Composite::DestinationOut,
        };
        StrokeStyle {
            line_width: self.brush_size,
            composite,
            color: self.brush_color,
        }
    }
}

impl Default for DrawingSettings {
    fn default() -> Self {
        Self::new(DEFAULT_BRUSH_SIZE, Color::rgb(0x2d, 0x34, 0x36))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn select_color_from_eraser_returns_to_brush() {
        let mut settings = DrawingSettings::default();
        settings.transition(ToolEvent::SelectEraser);
        assert_eq!(settings.tool(), Tool::Eraser);

        let teal = Color::rgb(0, 184, 148);
        settings.transition(ToolEvent::SelectColor(teal));
        assert_eq!(settings.tool(), Tool::Brush);
        assert_eq!(settings.brush_color(), teal);
    }

    #[test]
    fn eraser_keeps_brush_color() {
        let mut settings = DrawingSettings::default();
        let color = settings.brush_color();
        settings.transition(ToolEvent::SelectEraser);
        settings.transition(ToolEvent::SelectBrush);
        assert_eq!(settings.brush_color(), color);
    }

    #[test]
    fn stroke_style_follows_tool() {
        let mut settings = DrawingSettings::default();
        assert_eq!(settings.stroke_style().composite, Composite::SourceOver);
        settings.transition(ToolEvent::SelectEraser);
        let style = settings.stroke_style();
        assert_eq!(style.composite, Composite::DestinationOut);
        assert_eq!(style.line_width, DEFAULT_BRUSH_SIZE);
    }

    #[test]
    fn invalid_brush_sizes_are_ignored() {
        let mut settings = DrawingSettings::default();
        assert!(settings.set_brush_size(12.0));
        assert!(!settings.set_brush_size(0.0));
        assert!(!settings.set_brush_size(f64::NAN));
        assert!(!settings.set_brush_size(-3.0));
        assert_eq!(settings.brush_size(), 12.0);
    }
}
