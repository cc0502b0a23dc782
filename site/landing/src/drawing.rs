//! Drawing module - sky, forest silhouette and sun rendering
//!
//! Renders the landing scene with nannou's Draw API. Scene math works in
//! page coordinates (top-left origin, y down); everything here converts to
//! nannou's centered y-up frame at the last moment.

use nannou::prelude::*;

use crate::scene::{SkyGradient, FOREST_LOWER, FOREST_TOP_RATIO, FOREST_UPPER, SUN_DIAMETER};

/// Height of one sky strip when rasterizing the gradient
const SKY_STRIP_PX: f32 = 4.0;

/// Color palette for the landing scene
pub mod colors {
    use nannou::prelude::*;

    pub const SUN_CORE: Srgb<u8> = Srgb {
        red: 253,
        green: 224,
        blue: 71,
        standard: std::marker::PhantomData,
    };
    pub const SUN_EDGE: Srgb<u8> = Srgb {
        red: 245,
        green: 158,
        blue: 11,
        standard: std::marker::PhantomData,
    };
    pub const SUN_SPECKLE: Srgb<u8> = Srgb {
        red: 202,
        green: 138,
        blue: 4,
        standard: std::marker::PhantomData,
    };
    pub const RETRO_SAND: Srgb<u8> = Srgb {
        red: 214,
        green: 196,
        blue: 138,
        standard: std::marker::PhantomData,
    };
    pub const RETRO_SAND_DARK: Srgb<u8> = Srgb {
        red: 186,
        green: 166,
        blue: 108,
        standard: std::marker::PhantomData,
    };
}

/// Convert a page-coordinate point to nannou's centered window frame
pub fn page_to_window(p: Point2, window_rect: Rect) -> Point2 {
    pt2(window_rect.left() + p.x, window_rect.top() - p.y)
}

/// Rasterize the sky gradient as a stack of horizontal strips
pub fn draw_sky(draw: &Draw, sky: &SkyGradient, window_rect: Rect) {
    let h = window_rect.h();
    if h <= 0.0 {
        return;
    }
    let strips = (h / SKY_STRIP_PX).ceil() as usize;
    let strip_h = h / strips as f32;

    for i in 0..strips {
        // Sample at the strip's vertical midpoint, measured from the top
        let t = (i as f32 + 0.5) * strip_h / h;
        let color = sky.color_at(t);
        let y = window_rect.top() - (i as f32 + 0.5) * strip_h;
        draw.rect()
            .x_y(window_rect.x(), y)
            .w_h(window_rect.w(), strip_h + 1.0)
            .color(color);
    }
}

/// Draw the forest silhouette band across the bottom of the viewport
///
/// A base band from the forest line down, with a row of rounded-crown trees
/// rising above it. Drawn after the sun so the sun sets behind the trees.
pub fn draw_forest(draw: &Draw, window_rect: Rect) {
    let w = window_rect.w();
    let h = window_rect.h();
    if w <= 0.0 || h <= 0.0 {
        return;
    }
    let forest_top = h * FOREST_TOP_RATIO;
    let band_h = h - forest_top;

    // Base band
    let band_center = page_to_window(pt2(w / 2.0, forest_top + band_h / 2.0), window_rect);
    draw.rect()
        .xy(band_center)
        .w_h(w, band_h)
        .color(FOREST_LOWER);

    // A row of trees, crowns poking above the band
    let tree_spacing = 90.0;
    let count = (w / tree_spacing).ceil() as usize + 1;
    for i in 0..count {
        let base_x = i as f32 * tree_spacing + tree_spacing * 0.3;
        let tall = i % 2 == 0;
        let crown_h = if tall { band_h * 0.9 } else { band_h * 0.65 };
        let crown_w = if tall { 64.0 } else { 48.0 };
        let alpha = if i % 2 == 0 { 0.95 } else { 0.9 };
        let color = if i % 3 == 0 {
            FOREST_LOWER
        } else {
            FOREST_UPPER
        };

        let crown = tree_crown(base_x, forest_top, crown_w, crown_h)
            .into_iter()
            .map(|p| page_to_window(p, window_rect));
        draw.polygon()
            .points(crown)
            .color(srgba(
                color.red as f32 / 255.0,
                color.green as f32 / 255.0,
                color.blue as f32 / 255.0,
                alpha,
            ));

        // Trunk connecting the crown into the band
        let trunk = page_to_window(pt2(base_x, forest_top + 6.0), window_rect);
        draw.rect()
            .xy(trunk)
            .w_h(crown_w * 0.18, 14.0)
            .color(FOREST_LOWER);
    }
}

/// Outline of one tree crown in page coordinates
///
/// Left base to peak to right base, each side sampled from a quadratic
/// Bezier so the crown reads rounded rather than triangular.
fn tree_crown(base_x: f32, base_y: f32, width: f32, height: f32) -> Vec<Point2> {
    let half = width / 2.0;
    let left = pt2(base_x - half, base_y);
    let peak = pt2(base_x, base_y - height);
    let right = pt2(base_x + half, base_y);
    let left_ctrl = pt2(base_x - half * 0.55, base_y - height * 0.65);
    let right_ctrl = pt2(base_x + half * 0.55, base_y - height * 0.65);

    let samples = 10;
    let mut points = Vec::with_capacity(samples * 2 + 1);
    for i in 0..=samples {
        let t = i as f32 / samples as f32;
        points.push(quad_bezier(left, left_ctrl, peak, t));
    }
    for i in 1..=samples {
        let t = i as f32 / samples as f32;
        points.push(quad_bezier(peak, right_ctrl, right, t));
    }
    points
}

fn quad_bezier(a: Point2, c: Point2, b: Point2, t: f32) -> Point2 {
    let u = 1.0 - t;
    a * u * u + c * 2.0 * u * t + b * t * t
}

/// Draw the sun disc with glow, speckle and hover/pulse scaling
///
/// `center` is already in window coordinates. The glow pulse is driven by
/// animation time and held still under reduced motion.
pub fn draw_sun(
    draw: &Draw,
    center: Point2,
    animation_time: f32,
    reduced_motion: bool,
    hovered: bool,
) {
    let pulse = if reduced_motion {
        0.0
    } else {
        (animation_time * 1.6).sin() * 0.03
    };
    let hover_scale = if hovered { 1.1 } else { 1.0 };
    let radius = SUN_DIAMETER / 2.0 * hover_scale * (1.0 + pulse);

    // Layered glow: concentric fading ellipses behind the disc
    for i in 0..4 {
        let glow_radius = radius * (1.25 + i as f32 * 0.35);
        let alpha = 40 - i * 9;
        draw.ellipse()
            .xy(center)
            .radius(glow_radius)
            .color(srgba(253u8, 224u8, 71u8, alpha as u8));
    }

    // Edge ring then core, so the rim reads slightly darker
    draw.ellipse()
        .xy(center)
        .radius(radius)
        .color(colors::SUN_EDGE);
    draw.ellipse()
        .xy(center)
        .radius(radius * 0.92)
        .color(colors::SUN_CORE);

    // Rocky speckle, fixed offsets scaled with the disc
    let speckles: [(f32, f32, f32); 6] = [
        (-0.35, 0.2, 0.12),
        (0.25, 0.35, 0.09),
        (0.4, -0.15, 0.11),
        (-0.1, -0.4, 0.08),
        (-0.45, -0.1, 0.06),
        (0.05, 0.05, 0.07),
    ];
    for &(dx, dy, r) in &speckles {
        draw.ellipse()
            .xy(center + vec2(dx, dy) * radius)
            .radius(r * radius)
            .color(colors::SUN_SPECKLE);
    }
}

/// Draw the easter-egg page's sandy "yellow rock" wallpaper
pub fn draw_retro_background(draw: &Draw, window_rect: Rect) {
    draw.rect()
        .xy(window_rect.xy())
        .wh(window_rect.wh())
        .color(colors::RETRO_SAND);

    // Deterministic speckle grid, offset by a cheap hash so it tiles
    // without reading as a grid
    let step = 26.0;
    let cols = (window_rect.w() / step).ceil() as i32 + 1;
    let rows = (window_rect.h() / step).ceil() as i32 + 1;
    for row in 0..rows {
        for col in 0..cols {
            let n = ((col * 73 + row * 151) as f32 * 0.61).sin();
            let jitter = vec2(n * 9.0, (n * 3.7).cos() * 9.0);
            let pos = pt2(
                window_rect.left() + col as f32 * step,
                window_rect.top() - row as f32 * step,
            ) + jitter;
            let radius = 1.4 + (n.abs() * 2.2);
            draw.ellipse()
                .xy(pos)
                .radius(radius)
                .color(colors::RETRO_SAND_DARK);
        }
    }
}
