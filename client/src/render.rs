use wasm_bindgen::{Clamped, JsValue};
use web_sys::{CanvasRenderingContext2d, ImageData};

use papirboard_shared::{Bitmap, Rect};

fn put_bitmap(ctx: &CanvasRenderingContext2d, bitmap: &Bitmap, x: u32, y: u32) -> Result<(), JsValue> {
    if bitmap.width() == 0 || bitmap.height() == 0 {
        return Ok(());
    }
    let data = ImageData::new_with_u8_clamped_array_and_sh(
        Clamped(bitmap.as_bytes()),
        bitmap.width(),
        bitmap.height(),
    )?;
    ctx.put_image_data(&data, x as f64, y as f64)
}

/// Copies the whole surface onto the canvas.
pub fn present(ctx: &CanvasRenderingContext2d, bitmap: &Bitmap) {
    if let Err(error) = put_bitmap(ctx, bitmap, 0, 0) {
        web_sys::console::error_2(&"present failed".into(), &error);
    }
}

/// Copies only `rect`, the area a segment touched.
pub fn present_region(ctx: &CanvasRenderingContext2d, bitmap: &Bitmap, rect: Rect) {
    if rect.is_empty() {
        return;
    }
    let region = bitmap.crop(rect);
    if let Err(error) = put_bitmap(ctx, &region, rect.x, rect.y) {
        web_sys::console::error_2(&"present_region failed".into(), &error);
    }
}
