//! Turns a pattern spec into the point cloud the stars converge onto.
//!
//! Text goes through the [`TextRaster`] seam (an off-screen canvas on wasm,
//! an in-memory stub in tests) and is then scanned on a coarse grid; the
//! heart shape is a parametric curve with jittered interior fill.

use rand::Rng;

/// One entry in the cyclic morph playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSpec {
    /// Release every star back into ambient drift.
    Drift,
    /// The parametric heart silhouette.
    Heart,
    /// A line of text rasterized into star positions.
    Text(String),
}

/// Transient sampler output; consumed by the assigner and discarded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Grid stride when scanning the rasterized text buffer.
pub const SAMPLE_GAP: u32 = 4;
/// Coverage above this counts a grid cell as part of a glyph.
pub const ALPHA_THRESHOLD: u8 = 128;
/// Viewport width below this uses the narrow font and heart sizing.
pub const NARROW_BREAKPOINT: f64 = 600.0;
/// Strings longer than this drop to the smaller font tier.
pub const LONG_TEXT_LEN: usize = 15;

/// Angular step along the heart curve.
pub const HEART_STEP: f64 = 0.05;
/// Jittered interior copies emitted per curve sample.
pub const HEART_FILL_COPIES: usize = 10;
/// Lower edge of the radial jitter band; the upper edge is 1.0.
pub const HEART_JITTER_MIN: f64 = 0.2;

/// Platform seam for text rasterization.
///
/// Implementations render `text` bold at `font_px`, centered both ways in a
/// `width` x `height` buffer, and return per-pixel coverage (0-255) in
/// row-major order. The buffer lives only for the duration of one call.
pub trait TextRaster {
    fn coverage(&self, text: &str, font_px: f64, width: u32, height: u32) -> Vec<u8>;
}

/// Font size tier for a string at the given viewport width: long strings
/// shrink so they still fit, narrow viewports shrink everything.
pub fn font_px_for(text: &str, width: f64) -> f64 {
    let narrow = width < NARROW_BREAKPOINT;
    if text.chars().count() > LONG_TEXT_LEN {
        if narrow {
            30.0
        } else {
            70.0
        }
    } else if narrow {
        40.0
    } else {
        100.0
    }
}

/// Sample a rendered string into a point cloud. A zero-area viewport yields
/// an empty set rather than an error.
pub fn text_points(raster: &impl TextRaster, text: &str, width: f64, height: f64) -> Vec<Point> {
    let (w, h) = (width as u32, height as u32);
    if w == 0 || h == 0 {
        return Vec::new();
    }
    let buf = raster.coverage(text, font_px_for(text, width), w, h);

    let mut points = Vec::new();
    let mut y = 0;
    while y < h {
        let mut x = 0;
        while x < w {
            let idx = (y * w + x) as usize;
            if buf.get(idx).copied().unwrap_or(0) > ALPHA_THRESHOLD {
                points.push(Point {
                    x: x as f64,
                    y: y as f64,
                });
            }
            x += SAMPLE_GAP;
        }
        y += SAMPLE_GAP;
    }
    points
}

/// Heart scale factor for the given viewport width.
pub fn heart_scale(width: f64) -> f64 {
    if width < NARROW_BREAKPOINT {
        10.0
    } else {
        15.0
    }
}

/// Sample the heart curve into a filled point cloud centered in the
/// viewport. Each curve sample spawns several copies pulled toward the
/// center by a random factor so the interior fills in, not just the
/// outline.
pub fn heart_points(rng: &mut impl Rng, width: f64, height: f64) -> Vec<Point> {
    if width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }
    let scale = heart_scale(width);
    let cx = width / 2.0;
    let cy = height / 2.0;

    let mut points = Vec::new();
    let mut t = 0.0;
    while t < std::f64::consts::TAU {
        let x = 16.0 * t.sin().powi(3);
        let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
        for _ in 0..HEART_FILL_COPIES {
            let fx = HEART_JITTER_MIN + rng.gen::<f64>() * (1.0 - HEART_JITTER_MIN);
            let fy = HEART_JITTER_MIN + rng.gen::<f64>() * (1.0 - HEART_JITTER_MIN);
            points.push(Point {
                x: cx + x * scale * fx,
                // Curve space points up; canvas y grows down.
                y: cy - y * scale * fy,
            });
        }
        t += HEART_STEP;
    }
    points
}
