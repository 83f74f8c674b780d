//! Whole-image color and blur filters used by the glow passes.
//!
//! Color filters work on straight (non-premultiplied) RGB and leave alpha
//! alone. The blur works on premultiplied color so transparent pixels do
//! not bleed black into the halo.

use image::{Rgba, RgbaImage};

/// Saturation boost applied on every glow pass.
pub const GLOW_SATURATION: f32 = 1.25;

/// Brightness boost applied on every glow pass.
pub const GLOW_BRIGHTNESS: f32 = 2.0;

/// Luminance weights of the saturation matrix.
const LUMA: [f32; 3] = [0.213, 0.715, 0.072];

/// Row-major 3×3 color matrix applied as `out = M · rgb`.
type ColorMatrix = [[f32; 3]; 3];

fn saturation_matrix(amount: f32) -> ColorMatrix {
    let mut m = [[0.0; 3]; 3];
    for (row, out) in m.iter_mut().enumerate() {
        for (col, cell) in out.iter_mut().enumerate() {
            let identity = if row == col { 1.0 } else { 0.0 };
            *cell = LUMA[col] + (identity - LUMA[col]) * amount;
        }
    }
    m
}

fn apply_matrix(image: &mut RgbaImage, m: &ColorMatrix) {
    for pixel in image.pixels_mut() {
        let Rgba([r, g, b, a]) = *pixel;
        if a == 0 {
            continue;
        }
        let rgb = [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0];
        let mut out = [0u8; 3];
        for (channel, row) in out.iter_mut().zip(m) {
            let v = row[0] * rgb[0] + row[1] * rgb[1] + row[2] * rgb[2];
            *channel = to_u8(v);
        }
        *pixel = Rgba([out[0], out[1], out[2], a]);
    }
}

/// Scale color saturation by `amount` (1.0 leaves the image unchanged).
pub fn saturate(image: &mut RgbaImage, amount: f32) {
    apply_matrix(image, &saturation_matrix(amount));
}

/// Multiply RGB by `amount` (1.0 leaves the image unchanged).
pub fn brighten(image: &mut RgbaImage, amount: f32) {
    let m = [[amount, 0.0, 0.0], [0.0, amount, 0.0], [0.0, 0.0, amount]];
    apply_matrix(image, &m);
}

/// Separable box blur with a `(2 * radius + 1)` wide kernel. Edges are
/// clamped. A zero radius leaves the image unchanged.
pub fn box_blur(image: &mut RgbaImage, radius: u32) {
    let (width, height) = image.dimensions();
    if radius == 0 || width == 0 || height == 0 {
        return;
    }
    let (w, h) = (width as usize, height as usize);
    let radius = radius as usize;

    let mut plane: Vec<[f32; 4]> = image.pixels().map(premultiply).collect();
    let mut scratch = vec![[0.0f32; 4]; plane.len()];

    for y in 0..h {
        blur_line(&plane, &mut scratch, y * w, 1, w, radius);
    }
    for x in 0..w {
        blur_line(&scratch, &mut plane, x, w, h, radius);
    }

    for (pixel, value) in image.pixels_mut().zip(&plane) {
        *pixel = unpremultiply(value);
    }
}

/// Blur `len` samples starting at `start` with the given `stride`.
fn blur_line(
    src: &[[f32; 4]],
    dst: &mut [[f32; 4]],
    start: usize,
    stride: usize,
    len: usize,
    radius: usize,
) {
    let at = |i: isize| -> [f32; 4] {
        let i = i.clamp(0, len as isize - 1) as usize;
        src[start + i * stride]
    };
    let r = radius as isize;
    let scale = 1.0 / (2 * radius + 1) as f32;

    let mut sum = [0.0f32; 4];
    for k in -r..=r {
        add(&mut sum, &at(k), 1.0);
    }

    for i in 0..len as isize {
        let out = &mut dst[start + i as usize * stride];
        for c in 0..4 {
            out[c] = sum[c] * scale;
        }
        add(&mut sum, &at(i + r + 1), 1.0);
        add(&mut sum, &at(i - r), -1.0);
    }
}

fn add(sum: &mut [f32; 4], value: &[f32; 4], sign: f32) {
    for c in 0..4 {
        sum[c] += value[c] * sign;
    }
}

fn premultiply(pixel: &Rgba<u8>) -> [f32; 4] {
    let a = pixel[3] as f32 / 255.0;
    [
        pixel[0] as f32 / 255.0 * a,
        pixel[1] as f32 / 255.0 * a,
        pixel[2] as f32 / 255.0 * a,
        a,
    ]
}

fn unpremultiply(value: &[f32; 4]) -> Rgba<u8> {
    let a = value[3];
    if a <= 0.5 / 255.0 {
        return Rgba([0, 0, 0, 0]);
    }
    Rgba([
        to_u8(value[0] / a),
        to_u8(value[1] / a),
        to_u8(value[2] / a),
        to_u8(a),
    ])
}

fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
