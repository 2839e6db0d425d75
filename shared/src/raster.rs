use crate::bitmap::Bitmap;
use crate::color::Color;
use crate::geometry::{distance_to_segment, segment_bounds, Point, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Composite {
    /// Paint over existing content.
    #[default]
    SourceOver,
    /// Remove existing coverage under the stroke.
    DestinationOut,
}

/// State applied to the surface before drawing, mirroring what a 2D context
/// keeps between calls. Caps and joins are always round.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub line_width: f64,
    pub composite: Composite,
    pub color: Color,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            line_width: 1.0,
            composite: Composite::SourceOver,
            color: Color::BLACK,
        }
    }
}

/// Strokes a round-capped segment into `bitmap` and returns the touched region.
pub fn stroke_segment(bitmap: &mut Bitmap, from: Point, to: Point, style: &StrokeStyle) -> Rect {
    let radius = (style.line_width / 2.0).max(0.0);
    let rect = segment_bounds(from, to, radius, bitmap.width(), bitmap.height());
    if rect.is_empty() {
        return rect;
    }
    log::trace!(
        "segment ({:.1},{:.1})->({:.1},{:.1}) width={} {:?}",
        from.x,
        from.y,
        to.x,
        to.y,
        style.line_width,
        style.composite
    );
    for y in rect.y..rect.y + rect.height {
        for x in rect.x..rect.x + rect.width {
            let center = Point::new(x as f64 + 0.5, y as f64 + 0.5);
            let coverage = (radius + 0.5 - distance_to_segment(center, from, to)).clamp(0.0, 1.0);
            if coverage <= 0.0 {
                continue;
            }
            let Some(pixel) = bitmap.pixel_mut(x, y) else {
                continue;
            };
            match style.composite {
                Composite::SourceOver => source_over(pixel, style.color, coverage),
                Composite::DestinationOut => destination_out(pixel, coverage),
            }
        }
    }
    rect
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

fn source_over(pixel: &mut [u8], color: Color, coverage: f64) {
    let src_alpha = color.a as f64 / 255.0 * coverage;
    let dst_alpha = pixel[3] as f64 / 255.0;
    let out_alpha = src_alpha + dst_alpha * (1.0 - src_alpha);
    if out_alpha <= 0.0 {
        pixel.fill(0);
        return;
    }
    let src = [color.r, color.g, color.b];
    for channel in 0..3 {
        let s = src[channel] as f64 / 255.0;
        let d = pixel[channel] as f64 / 255.0;
        pixel[channel] = to_channel((s * src_alpha + d * dst_alpha * (1.0 - src_alpha)) / out_alpha);
    }
    pixel[3] = to_channel(out_alpha);
}

fn destination_out(pixel: &mut [u8], coverage: f64) {
    let out_alpha = to_channel(pixel[3] as f64 / 255.0 * (1.0 - coverage));
    if out_alpha == 0 {
        pixel.fill(0);
    } else {
        pixel[3] = out_alpha;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn brush(color: Color, width: f64) -> StrokeStyle {
        StrokeStyle {
            line_width: width,
            composite: Composite::SourceOver,
            color,
        }
    }

    fn eraser(width: f64) -> StrokeStyle {
        StrokeStyle {
            line_width: width,
            composite: Composite::DestinationOut,
            color: Color::BLACK,
        }
    }

    #[test]
    fn brush_paints_opaque_color_along_segment() {
        let mut bitmap = Bitmap::new(20, 20);
        let blue = Color::rgb(9, 132, 227);
        stroke_segment(&mut bitmap, Point::new(2.0, 10.0), Point::new(18.0, 10.0), &brush(blue, 4.0));
        for x in 2..18 {
            assert_eq!(bitmap.pixel(x, 10), Some(blue), "pixel {x} not painted");
        }
        assert_eq!(bitmap.pixel(10, 2), Some(Color::TRANSPARENT));
    }

    #[test]
    fn brush_covers_existing_content() {
        let mut bitmap = Bitmap::new(10, 10);
        let red = Color::rgb(255, 0, 0);
        let green = Color::rgb(0, 255, 0);
        bitmap.set_pixel(5, 5, red);
        stroke_segment(&mut bitmap, Point::new(5.5, 5.5), Point::new(5.5, 5.5), &brush(green, 3.0));
        assert_eq!(bitmap.pixel(5, 5), Some(green));
    }

    #[test]
    fn zero_length_segment_paints_round_dot() {
        let mut bitmap = Bitmap::new(21, 21);
        stroke_segment(
            &mut bitmap,
            Point::new(10.5, 10.5),
            Point::new(10.5, 10.5),
            &brush(Color::BLACK, 10.0),
        );
        assert_eq!(bitmap.pixel(10, 10), Some(Color::BLACK));
        assert_eq!(bitmap.pixel(14, 10), Some(Color::BLACK));
        // corners of the bounding square stay outside the disc
        assert_eq!(bitmap.pixel(14, 14), Some(Color::TRANSPARENT));
    }

    #[test]
    fn eraser_removes_coverage_regardless_of_color() {
        let mut bitmap = Bitmap::new(10, 10);
        bitmap.set_pixel(4, 4, Color::rgb(255, 255, 255));
        bitmap.set_pixel(5, 4, Color::rgb(10, 20, 30));
        stroke_segment(&mut bitmap, Point::new(4.0, 4.5), Point::new(6.0, 4.5), &eraser(4.0));
        assert_eq!(bitmap.pixel(4, 4), Some(Color::TRANSPARENT));
        assert_eq!(bitmap.pixel(5, 4), Some(Color::TRANSPARENT));
    }

    #[test]
    fn erasing_blank_region_keeps_it_blank() {
        let mut bitmap = Bitmap::new(16, 16);
        stroke_segment(&mut bitmap, Point::new(0.0, 0.0), Point::new(16.0, 16.0), &eraser(6.0));
        assert!(bitmap.is_blank());
        assert_eq!(bitmap, Bitmap::new(16, 16));
    }

    #[test]
    fn edge_pixels_are_blended() {
        let mut bitmap = Bitmap::new(10, 10);
        stroke_segment(&mut bitmap, Point::new(0.0, 5.0), Point::new(10.0, 5.0), &brush(Color::BLACK, 2.0));
        // center 1.5 from the line: coverage 1 + 0.5 - 1.5 = 0
        assert_eq!(bitmap.pixel(5, 6).map(|c| c.a), Some(0));
        // center 0.5 from the line: fully inside
        assert_eq!(bitmap.pixel(5, 5).map(|c| c.a), Some(255));
    }

    #[test]
    fn segment_outside_bitmap_touches_nothing() {
        let mut bitmap = Bitmap::new(4, 4);
        let rect = stroke_segment(
            &mut bitmap,
            Point::new(40.0, 40.0),
            Point::new(50.0, 40.0),
            &brush(Color::BLACK, 2.0),
        );
        assert!(rect.is_empty());
        assert!(bitmap.is_blank());
    }
}
