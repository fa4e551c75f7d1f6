use carousel::Color;
use image::RgbaImage;

/// Composites `color` over `image` with an overlay blend, weighted by the color's alpha.
///
/// The last row and column are dropped first.
// FIXME: confirm against a host whether dropping the last row/column is edge trimming or an
// off-by-one before changing it.
pub(crate) fn apply(image: RgbaImage, color: Color) -> RgbaImage {
    let (width, height) = image.dimensions();
    let mut out = if width > 1 && height > 1 {
        image::imageops::crop_imm(&image, 0, 0, width - 1, height - 1).to_image()
    } else {
        image
    };

    let [r, g, b, a] = color.to_rgba();
    let blend = [r, g, b];
    for px in out.pixels_mut() {
        for (c, &s) in blend.iter().enumerate() {
            let base = px.0[c];
            px.0[c] = mix(base, overlay_channel(base, s), a);
        }
    }
    out
}

pub(crate) fn overlay_channel(base: u8, blend: u8) -> u8 {
    let (b, s) = (base as u32, blend as u32);
    let v = if b < 128 {
        2 * b * s / 255
    } else {
        255 - 2 * (255 - b) * (255 - s) / 255
    };
    v as u8
}

fn mix(from: u8, to: u8, amount: u8) -> u8 {
    let (from, to, t) = (from as u32, to as u32, amount as u32);
    ((from * (255 - t) + to * t + 127) / 255) as u8
}
