use image::RgbaImage;

/// Runs the accelerated kernel, or returns `None` when it cannot serve this request.
///
/// Callers fall back to the software kernel on `None`.
#[cfg(feature = "accelerated")]
pub(crate) fn blur(image: &RgbaImage, radius: u32) -> Option<RgbaImage> {
    // The box approximation needs at least two samples per axis.
    if image.width() < 2 || image.height() < 2 {
        return None;
    }
    let sigma = radius.max(1) as f32 / 2.0;
    Some(image::imageops::fast_blur(image, sigma))
}

#[cfg(not(feature = "accelerated"))]
pub(crate) fn blur(_image: &RgbaImage, _radius: u32) -> Option<RgbaImage> {
    None
}
