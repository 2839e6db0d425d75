use crate::color::Color;
use crate::geometry::Rect;

const CHANNELS: usize = 4;

/// Row-major RGBA8 pixels, laid out like `ImageData::data`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Bitmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Bitmap {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * CHANNELS],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * CHANNELS)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let offset = self.offset(x, y)?;
        let mut rgba = [0; CHANNELS];
        rgba.copy_from_slice(&self.data[offset..offset + CHANNELS]);
        Some(Color::from_array(rgba))
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if let Some(offset) = self.offset(x, y) {
            self.data[offset..offset + CHANNELS].copy_from_slice(&color.to_array());
        }
    }

    pub(crate) fn pixel_mut(&mut self, x: u32, y: u32) -> Option<&mut [u8]> {
        let offset = self.offset(x, y)?;
        Some(&mut self.data[offset..offset + CHANNELS])
    }

    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    pub fn is_blank(&self) -> bool {
        self.data.chunks_exact(CHANNELS).all(|pixel| pixel[3] == 0)
    }

    /// Writes `source` with its top-left corner at the origin. Source pixels beyond
    /// this bitmap's bounds are dropped; pixels the source does not reach are left
    /// untouched.
    pub fn blit(&mut self, source: &Bitmap) {
        let columns = self.width.min(source.width) as usize * CHANNELS;
        let rows = self.height.min(source.height) as usize;
        let dst_stride = self.width as usize * CHANNELS;
        let src_stride = source.width as usize * CHANNELS;
        for row in 0..rows {
            let dst = row * dst_stride;
            let src = row * src_stride;
            self.data[dst..dst + columns].copy_from_slice(&source.data[src..src + columns]);
        }
    }

    /// Copy of `rect`, clipped to the bitmap.
    pub fn crop(&self, rect: Rect) -> Bitmap {
        let x = rect.x.min(self.width);
        let y = rect.y.min(self.height);
        let width = rect.width.min(self.width - x);
        let height = rect.height.min(self.height - y);
        let mut out = Bitmap::new(width, height);
        let row_len = width as usize * CHANNELS;
        for row in 0..height {
            let Some(src) = self.offset(x, y + row) else {
                continue;
            };
            let dst = row as usize * row_len;
            out.data[dst..dst + row_len].copy_from_slice(&self.data[src..src + row_len]);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const RED: Color = Color::rgb(255, 0, 0);

    #[test]
    fn new_bitmap_is_transparent() {
        let bitmap = Bitmap::new(3, 2);
        assert_eq!(bitmap.as_bytes().len(), 24);
        assert!(bitmap.is_blank());
        assert_eq!(bitmap.pixel(2, 1), Some(Color::TRANSPARENT));
        assert_eq!(bitmap.pixel(3, 0), None);
    }

    #[test]
    fn blit_into_smaller_bitmap_clips() {
        let mut source = Bitmap::new(4, 4);
        source.set_pixel(1, 1, RED);
        source.set_pixel(3, 3, RED);
        let mut target = Bitmap::new(2, 2);
        target.blit(&source);
        assert_eq!(target.pixel(1, 1), Some(RED));
        assert_eq!(target.pixel(3, 3), None);
    }

    #[test]
    fn blit_into_larger_bitmap_leaves_rest_untouched() {
        let mut source = Bitmap::new(2, 2);
        source.set_pixel(1, 0, RED);
        let mut target = Bitmap::new(4, 3);
        target.blit(&source);
        assert_eq!(target.pixel(1, 0), Some(RED));
        let touched = (0..3)
            .flat_map(|y| (0..4).map(move |x| (x, y)))
            .filter(|&(x, y)| target.pixel(x, y) != Some(Color::TRANSPARENT))
            .collect::<Vec<_>>();
        assert_eq!(touched, vec![(1, 0)]);
    }

    #[test]
    fn crop_copies_clipped_region() {
        let mut bitmap = Bitmap::new(5, 5);
        bitmap.set_pixel(4, 4, RED);
        let region = bitmap.crop(Rect {
            x: 3,
            y: 3,
            width: 10,
            height: 10,
        });
        assert_eq!((region.width(), region.height()), (2, 2));
        assert_eq!(region.pixel(1, 1), Some(RED));
        assert_eq!(region.pixel(0, 0), Some(Color::TRANSPARENT));
    }
}
