#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pixel-aligned region of a bitmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && y >= self.y && x - self.x < self.width && y - self.y < self.height
    }
}

pub fn normalize_point(point: Point) -> Option<Point> {
    if !point.x.is_finite() || !point.y.is_finite() {
        return None;
    }
    Some(point)
}

/// Client (viewport) coordinates to canvas-local ones. The canvas backing size is
/// assumed to match its displayed size, so no scaling is applied.
pub fn client_to_canvas(client_x: f64, client_y: f64, left: f64, top: f64) -> Option<Point> {
    normalize_point(Point {
        x: client_x - left,
        y: client_y - top,
    })
}

pub fn distance_to_segment(point: Point, from: Point, to: Point) -> f64 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let length_sq = dx * dx + dy * dy;
    let t = if length_sq > f64::EPSILON {
        (((point.x - from.x) * dx + (point.y - from.y) * dy) / length_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let nearest_x = from.x + t * dx;
    let nearest_y = from.y + t * dy;
    ((point.x - nearest_x).powi(2) + (point.y - nearest_y).powi(2)).sqrt()
}

/// Pixel bounds of the capsule around `from..to`, clipped to `width × height`.
pub fn segment_bounds(from: Point, to: Point, radius: f64, width: u32, height: u32) -> Rect {
    let pad = radius + 1.0;
    let min_x = (from.x.min(to.x) - pad).floor().max(0.0);
    let min_y = (from.y.min(to.y) - pad).floor().max(0.0);
    let max_x = (from.x.max(to.x) + pad).ceil().min(width as f64);
    let max_y = (from.y.max(to.y) + pad).ceil().min(height as f64);
    if max_x <= min_x || max_y <= min_y {
        return Rect {
            x: 0,
            y: 0,
            width: 0,
            height: 0,
        };
    }
    Rect {
        x: min_x as u32,
        y: min_y as u32,
        width: (max_x - min_x) as u32,
        height: (max_y - min_y) as u32,
    }
}
