//! Scene math - sun arc and sky gradient
//!
//! Pure functions mapping the current phase (and viewport size) to a sun
//! screen position and a sky gradient. All positions are in page
//! coordinates: origin at the top-left of the viewport, y growing downward.

use nannou::prelude::*;

/// Diameter of the sun disc in logical pixels
pub const SUN_DIAMETER: f32 = 72.0;

/// Fraction of the viewport height where the forest silhouette begins
pub const FOREST_TOP_RATIO: f32 = 0.65;

/// How far below the viewport bottom the sun sits at phase 0 and 1
const HORIZON_OVERSHOOT: f32 = 60.0;

/// Fraction of the viewport height of the sun's zenith at phase 0.5
const NOON_HEIGHT_RATIO: f32 = 0.22;

// Sky stops, night -> day, top to horizon
const NIGHT_TOP: (u8, u8, u8) = (15, 23, 42);
const DAY_TOP: (u8, u8, u8) = (12, 74, 110);
const NIGHT_MID: (u8, u8, u8) = (30, 58, 95);
const DAY_MID: (u8, u8, u8) = (2, 132, 199);
const NIGHT_HORIZON: (u8, u8, u8) = (249, 115, 22);
const DAY_HORIZON: (u8, u8, u8) = (56, 189, 248);

/// Upper forest silhouette green, the same at any phase
pub const FOREST_UPPER: Srgb<u8> = Srgb {
    red: 26,
    green: 46,
    blue: 26,
    standard: std::marker::PhantomData,
};

/// Lower forest silhouette green, the same at any phase
pub const FOREST_LOWER: Srgb<u8> = Srgb {
    red: 13,
    green: 31,
    blue: 13,
    standard: std::marker::PhantomData,
};

/// Sun centre for a given phase and viewport size
///
/// The sun sweeps linearly in x between 10% margins and follows a parabola
/// in y, peaking at the noon height at phase 0.5 and sitting just below the
/// viewport bottom at phase 0 and 1. A zero-sized viewport degenerates to a
/// point without dividing by anything.
pub fn sun_position(phase: f64, width: f32, height: f32) -> Point2 {
    let phase = phase as f32;
    let margin_x = width * 0.1;
    let x = margin_x + (width - 2.0 * margin_x) * phase;

    let bottom_y = height + HORIZON_OVERSHOOT;
    let top_y = height * NOON_HEIGHT_RATIO;
    let y = bottom_y - 4.0 * (bottom_y - top_y) * phase * (1.0 - phase);

    pt2(x, y)
}

/// How "day" the sky is: 1 at noon (phase 0.5), 0 at midnight (phase 0/1)
pub fn dayness(phase: f64) -> f32 {
    ((1.0 - 2.0 * (phase - 0.5).abs()) as f32).clamp(0.0, 1.0)
}

/// One stop of the vertical sky gradient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyStop {
    /// Offset from the top of the viewport, 0.0 to 1.0
    pub offset: f32,
    pub color: Srgb<u8>,
}

/// Five-stop vertical gradient describing the whole sky
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyGradient {
    pub stops: [SkyStop; 5],
}

impl SkyGradient {
    /// Sample the gradient at a vertical position `t` in [0,1]
    ///
    /// Piecewise-linear interpolation between adjacent stops; values outside
    /// the stop range clamp to the end stops.
    pub fn color_at(&self, t: f32) -> Srgb<u8> {
        let first = self.stops[0];
        if t <= first.offset {
            return first.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.offset {
                let span = b.offset - a.offset;
                if span <= 0.0 {
                    return b.color;
                }
                let local = (t - a.offset) / span;
                return mix(
                    (a.color.red, a.color.green, a.color.blue),
                    (b.color.red, b.color.green, b.color.blue),
                    local,
                );
            }
        }
        self.stops[4].color
    }
}

/// Sky gradient for a given phase
///
/// Top, mid and horizon stops blend between fixed night and day triples by
/// `dayness`; the bottom two stops are the fixed forest silhouette band.
pub fn sky_gradient(phase: f64) -> SkyGradient {
    let t = dayness(phase);
    SkyGradient {
        stops: [
            SkyStop {
                offset: 0.0,
                color: mix(NIGHT_TOP, DAY_TOP, t),
            },
            SkyStop {
                offset: 0.35,
                color: mix(NIGHT_MID, DAY_MID, t),
            },
            SkyStop {
                offset: 0.65,
                color: mix(NIGHT_HORIZON, DAY_HORIZON, t),
            },
            SkyStop {
                offset: 0.82,
                color: FOREST_UPPER,
            },
            SkyStop {
                offset: 1.0,
                color: FOREST_LOWER,
            },
        ],
    }
}

/// Linear blend between two RGB triples, rounding each channel
fn mix(night: (u8, u8, u8), day: (u8, u8, u8), t: f32) -> Srgb<u8> {
    let channel = |n: u8, d: u8| (n as f32 + (d as f32 - n as f32) * t).round() as u8;
    srgb(
        channel(night.0, day.0),
        channel(night.1, day.1),
        channel(night.2, day.2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::PhaseClock;
    use std::time::Duration;

    const EPSILON: f32 = 1e-3;

    #[test]
    fn test_arc_endpoints() {
        let start = sun_position(0.0, 1000.0, 1000.0);
        let end = sun_position(1.0, 1000.0, 1000.0);
        assert!((start.x - 100.0).abs() < EPSILON, "got {}", start.x);
        assert!((start.y - 1060.0).abs() < EPSILON, "got {}", start.y);
        assert!((end.x - 900.0).abs() < EPSILON, "got {}", end.x);
        assert!((end.y - 1060.0).abs() < EPSILON, "got {}", end.y);
    }

    #[test]
    fn test_arc_peak_at_noon() {
        let noon = sun_position(0.5, 1000.0, 1000.0);
        assert!((noon.y - 220.0).abs() < EPSILON, "got {}", noon.y);
        // The peak is the minimum y over the whole arc
        for i in 0..=100 {
            let phase = i as f64 / 100.0;
            assert!(sun_position(phase, 1000.0, 1000.0).y >= noon.y - EPSILON);
        }
    }

    #[test]
    fn test_x_is_linear_and_monotonic() {
        let mut prev = sun_position(0.0, 1000.0, 1000.0).x;
        for i in 1..=100 {
            let phase = i as f64 / 100.0;
            let x = sun_position(phase, 1000.0, 1000.0).x;
            assert!(x > prev, "x must strictly increase with phase");
            prev = x;
        }
        // Linearity: midpoint of endpoints
        let mid = sun_position(0.5, 1000.0, 1000.0).x;
        assert!((mid - 500.0).abs() < EPSILON);
    }

    #[test]
    fn test_y_falls_then_rises_around_noon() {
        let mut prev = sun_position(0.0, 1000.0, 1000.0).y;
        for i in 1..=50 {
            let phase = i as f64 / 100.0;
            let y = sun_position(phase, 1000.0, 1000.0).y;
            assert!(y < prev, "y must strictly decrease before noon");
            prev = y;
        }
        for i in 51..=100 {
            let phase = i as f64 / 100.0;
            let y = sun_position(phase, 1000.0, 1000.0).y;
            assert!(y > prev, "y must strictly increase after noon");
            prev = y;
        }
    }

    #[test]
    fn test_degenerate_viewport() {
        let pos = sun_position(0.3, 0.0, 0.0);
        assert!(pos.x.is_finite() && pos.y.is_finite());
        assert_eq!(pos.x, 0.0);
    }

    #[test]
    fn test_sky_triples_at_noon_and_midnight() {
        let noon = sky_gradient(0.5);
        assert_eq!(noon.stops[0].color, srgb(12u8, 74, 110));
        assert_eq!(noon.stops[1].color, srgb(2u8, 132, 199));
        assert_eq!(noon.stops[2].color, srgb(56u8, 189, 248));

        for phase in [0.0, 1.0] {
            let night = sky_gradient(phase);
            assert_eq!(night.stops[0].color, srgb(15u8, 23, 42));
            assert_eq!(night.stops[1].color, srgb(30u8, 58, 95));
            assert_eq!(night.stops[2].color, srgb(249u8, 115, 22));
        }
    }

    #[test]
    fn test_forest_band_is_fixed() {
        for phase in [0.0, 0.25, 0.5, 0.75] {
            let sky = sky_gradient(phase);
            assert_eq!(sky.stops[3].color, FOREST_UPPER);
            assert_eq!(sky.stops[3].offset, 0.82);
            assert_eq!(sky.stops[4].color, FOREST_LOWER);
            assert_eq!(sky.stops[4].offset, 1.0);
        }
        // The band consts are the exact silhouette triples
        assert_eq!(FOREST_UPPER, srgb(26u8, 46, 26));
        assert_eq!(FOREST_LOWER, srgb(13u8, 31, 13));
    }

    #[test]
    fn test_gradient_sampling_endpoints() {
        let sky = sky_gradient(0.5);
        assert_eq!(sky.color_at(0.0), sky.stops[0].color);
        assert_eq!(sky.color_at(0.35), sky.stops[1].color);
        assert_eq!(sky.color_at(1.0), sky.stops[4].color);
        // Out-of-range samples clamp
        assert_eq!(sky.color_at(-0.5), sky.stops[0].color);
        assert_eq!(sky.color_at(1.5), sky.stops[4].color);
    }

    #[test]
    fn test_dayness_shape() {
        assert_eq!(dayness(0.5), 1.0);
        assert_eq!(dayness(0.0), 0.0);
        assert_eq!(dayness(1.0), 0.0);
        assert!((dayness(0.25) - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_pure_functions_are_idempotent() {
        assert_eq!(
            sun_position(0.37, 800.0, 600.0),
            sun_position(0.37, 800.0, 600.0)
        );
        assert_eq!(sky_gradient(0.37), sky_gradient(0.37));
    }

    #[test]
    fn test_half_cycle_end_to_end() {
        let mut clock = PhaseClock::new(45.0);
        clock.tick(Duration::ZERO);
        let phase = clock.tick(Duration::from_millis(22_500));
        assert!((phase - 0.5).abs() < 1e-9);

        let pos = sun_position(phase, 1000.0, 1000.0);
        assert!((pos.y - 220.0).abs() < EPSILON);
        let sky = sky_gradient(phase);
        assert_eq!(sky.stops[0].color, srgb(12u8, 74, 110));
    }
}
