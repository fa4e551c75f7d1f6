use image::RgbaImage;
use rayon::prelude::*;

const CHANNELS: usize = 4;

/// Triangle-weighted ("stack") blur, run as a horizontal then a vertical pass.
///
/// A sample at distance `d` from the target pixel weighs `radius + 1 - |d|`; edges repeat the
/// border pixel. Rows of each pass are processed in parallel on the rayon pool.
pub(crate) fn blur(image: &RgbaImage, radius: u32) -> RgbaImage {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 || radius == 0 {
        return image.clone();
    }

    let kernel = Kernel::new(radius);
    let mut horizontal = RgbaImage::new(width, height);
    pass_horizontal(image, &mut horizontal, &kernel);
    let mut out = RgbaImage::new(width, height);
    pass_vertical(&horizontal, &mut out, &kernel);
    out
}

struct Kernel {
    radius: i64,
    weights: Vec<u32>,
    total: u32,
}

impl Kernel {
    fn new(radius: u32) -> Self {
        let radius = radius as i64;
        let weights: Vec<u32> = (-radius..=radius)
            .map(|d| (radius + 1 - d.abs()) as u32)
            .collect();
        let total = weights.iter().sum();
        Self {
            radius,
            weights,
            total,
        }
    }

    /// Weighted average of `len` samples read through `sample(i)`, centered on `at`.
    fn apply(
        &self,
        at: usize,
        len: usize,
        sample: impl Fn(usize) -> [u8; CHANNELS],
    ) -> [u8; CHANNELS] {
        let last = len as i64 - 1;
        let mut acc = [0u32; CHANNELS];
        for (k, &w) in self.weights.iter().enumerate() {
            let i = (at as i64 + k as i64 - self.radius).clamp(0, last) as usize;
            let px = sample(i);
            for c in 0..CHANNELS {
                acc[c] += px[c] as u32 * w;
            }
        }
        let half = self.total / 2;
        acc.map(|v| ((v + half) / self.total) as u8)
    }
}

fn pixel_at(raw: &[u8], index: usize) -> [u8; CHANNELS] {
    let start = index * CHANNELS;
    [raw[start], raw[start + 1], raw[start + 2], raw[start + 3]]
}

fn pass_horizontal(src: &RgbaImage, dst: &mut RgbaImage, kernel: &Kernel) {
    let width = src.width() as usize;
    let stride = width * CHANNELS;
    let raw = src.as_raw();
    dst.par_chunks_mut(stride).enumerate().for_each(|(y, row)| {
        let line = &raw[y * stride..(y + 1) * stride];
        for x in 0..width {
            let px = kernel.apply(x, width, |i| pixel_at(line, i));
            row[x * CHANNELS..(x + 1) * CHANNELS].copy_from_slice(&px);
        }
    });
}

fn pass_vertical(src: &RgbaImage, dst: &mut RgbaImage, kernel: &Kernel) {
    let width = src.width() as usize;
    let height = src.height() as usize;
    let stride = width * CHANNELS;
    let raw = src.as_raw();
    dst.par_chunks_mut(stride).enumerate().for_each(|(y, row)| {
        for x in 0..width {
            let px = kernel.apply(y, height, |i| pixel_at(raw, i * width + x));
            row[x * CHANNELS..(x + 1) * CHANNELS].copy_from_slice(&px);
        }
    });
}
