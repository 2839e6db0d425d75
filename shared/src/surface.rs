use crate::bitmap::Bitmap;
use crate::geometry::{normalize_point, Point, Rect};
use crate::raster::{stroke_segment, StrokeStyle};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
enum StrokeSession {
    #[default]
    Idle,
    Active { last_point: Point },
}

/// The live raster. Knows nothing about pages: whatever it shows was either
/// drawn since the last restore or handed to it by `restore`.
#[derive(Debug, Default)]
pub struct Surface {
    bitmap: Bitmap,
    style: StrokeStyle,
    session: StrokeSession,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            bitmap: Bitmap::new(width, height),
            style: StrokeStyle::default(),
            session: StrokeSession::Idle,
        }
    }

    pub fn width(&self) -> u32 {
        self.bitmap.width()
    }

    pub fn height(&self) -> u32 {
        self.bitmap.height()
    }

    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn is_stroking(&self) -> bool {
        matches!(self.session, StrokeSession::Active { .. })
    }

    pub fn last_point(&self) -> Option<Point> {
        match self.session {
            StrokeSession::Active { last_point } => Some(last_point),
            StrokeSession::Idle => None,
        }
    }

    /// Like resizing a canvas element: the pixels are lost and the applied style
    /// goes back to its defaults.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.bitmap = Bitmap::new(width, height);
        self.style = StrokeStyle::default();
    }

    pub fn apply_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }

    pub fn begin_stroke(&mut self, point: Point) {
        let Some(point) = normalize_point(point) else {
            return;
        };
        self.session = StrokeSession::Active { last_point: point };
    }

    pub fn continue_stroke(&mut self, point: Point) -> Option<Rect> {
        let StrokeSession::Active { last_point } = self.session else {
            return None;
        };
        let point = normalize_point(point)?;
        let dirty = stroke_segment(&mut self.bitmap, last_point, point, &self.style);
        self.session = StrokeSession::Active { last_point: point };
        Some(dirty)
    }

    /// Returns whether a stroke was actually open.
    pub fn end_stroke(&mut self) -> bool {
        let was_active = self.is_stroking();
        self.session = StrokeSession::Idle;
        was_active
    }

    pub fn snapshot(&self) -> Bitmap {
        self.bitmap.clone()
    }

    pub fn restore(&mut self, snapshot: Option<&Bitmap>) {
        self.bitmap.clear();
        if let Some(snapshot) = snapshot {
            self.bitmap.blit(snapshot);
        }
    }
}
