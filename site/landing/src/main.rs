//! Sunfall landing page
//!
//! A portfolio landing scene: a day/night sky cycling on a 45-second clock,
//! a sun sweeping an arc across the viewport, a forest silhouette, and a
//! draggable-sun easter egg that reskins the page into a retro layout.

mod drawing;
mod interaction;
mod scene;
mod ui;

use chrono_tz::Tz;
use nannou::prelude::*;
use nannou_egui::{self, Egui};
use serde::{Deserialize, Serialize};
use shared::{phase_for_timezone, PhaseClock, DEFAULT_CYCLE_SECONDS};

use crate::drawing::{draw_forest, draw_retro_background, draw_sky, draw_sun, page_to_window};
use crate::interaction::{hit_test_sun, SunState, DEFAULT_DRAG_THRESHOLD_PX};
use crate::scene::{sky_gradient, sun_position};
use crate::ui::{draw_easter_egg_page, draw_landing_overlay, draw_sub_page, Route};

const DEFAULT_TZ: &str = "America/Chicago";
const DEFAULT_OWNER: &str = "Avery Quinn";

fn main() {
    nannou::app(model).update(update).run();
}

/// Persisted configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Config {
    owner_name: String,
    cycle_seconds: f64,
    drag_threshold_px: f32,
    timezone: String,
    start_at_local_time: bool,
    reduced_motion: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            owner_name: DEFAULT_OWNER.to_string(),
            cycle_seconds: DEFAULT_CYCLE_SECONDS,
            drag_threshold_px: DEFAULT_DRAG_THRESHOLD_PX,
            timezone: DEFAULT_TZ.to_string(),
            start_at_local_time: false,
            reduced_motion: false,
        }
    }
}

/// Application state
struct Model {
    /// Day/night cycle clock
    clock: PhaseClock,
    /// Sun drag / easter-egg state machine
    sun: SunState,
    /// Current screen
    route: Route,
    /// Viewport size in logical pixels, updated on resize
    viewport: Vec2,
    /// Last pointer position in page coordinates
    mouse_page: Point2,
    /// Site owner's name, shown in the title and easter-egg header
    owner_name: String,
    /// Horizontal drag-vs-click threshold
    drag_threshold_px: f32,
    /// Timezone for local-time phase seeding
    timezone: Tz,
    /// Seed the phase from the timezone's clock at startup
    start_at_local_time: bool,
    /// Reduced motion preference: holds the sky still
    reduced_motion: bool,
    /// Animation time for the sun's glow pulse
    animation_time: f32,
    /// egui integration
    egui: Egui,
}

fn save_config(model: &Model) {
    let config = Config {
        owner_name: model.owner_name.clone(),
        cycle_seconds: model.clock.cycle_seconds(),
        drag_threshold_px: model.drag_threshold_px,
        timezone: model.timezone.name().to_string(),
        start_at_local_time: model.start_at_local_time,
        reduced_motion: model.reduced_motion,
    };
    if let Err(e) = shared::save_config(&config) {
        eprintln!("Failed to save config: {}", e);
    }
}

/// Convert a window-frame point (centered, y up) to page coordinates
fn window_to_page(pos: Point2, window_rect: Rect) -> Point2 {
    pt2(pos.x - window_rect.left(), window_rect.top() - pos.y)
}

fn model(app: &App) -> Model {
    // Escape navigates home instead of quitting
    app.set_exit_on_escape(false);

    // Create window
    let window_id = app
        .new_window()
        .title("Sunfall")
        .size(1100, 700)
        .min_size(480, 360)
        .view(view)
        .key_pressed(key_pressed)
        .mouse_pressed(mouse_pressed)
        .mouse_released(mouse_released)
        .mouse_moved(mouse_moved)
        .resized(resized)
        .raw_event(raw_window_event)
        .build()
        .unwrap();

    let window = app.window(window_id).unwrap();
    let egui = Egui::from_window(&window);
    let window_rect = window.rect();

    // Load configuration, falling back to defaults on failure
    let config: Config = match shared::load_config() {
        Ok(loaded) => loaded.unwrap_or_default(),
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            Config::default()
        }
    };

    // Parse timezone from config
    let timezone: Tz = config.timezone.parse().unwrap_or_else(|_| {
        eprintln!("Invalid timezone {:?}, using {}", config.timezone, DEFAULT_TZ);
        DEFAULT_TZ.parse().unwrap()
    });

    let drag_threshold_px = if config.drag_threshold_px > 0.0 {
        config.drag_threshold_px
    } else {
        DEFAULT_DRAG_THRESHOLD_PX
    };

    let mut clock = PhaseClock::new(config.cycle_seconds);
    if config.start_at_local_time {
        clock.set_phase(phase_for_timezone(timezone));
    }

    Model {
        clock,
        sun: SunState::Idle,
        route: Route::Home,
        viewport: vec2(window_rect.w(), window_rect.h()),
        mouse_page: pt2(-1.0, -1.0),
        owner_name: config.owner_name,
        drag_threshold_px,
        timezone,
        start_at_local_time: config.start_at_local_time,
        reduced_motion: config.reduced_motion,
        animation_time: 0.0,
        egui,
    }
}

fn update(_app: &App, model: &mut Model, update: Update) {
    model.animation_time = update.since_start.as_secs_f32();

    // The clock keeps running during drags; the renderer simply ignores the
    // arc position while a drag session is live, so the arc resumes at the
    // current phase on release.
    if model.reduced_motion {
        model.clock.hold(update.since_start);
    } else {
        model.clock.tick(update.since_start);
    }

    // Begin egui frame
    model.egui.set_elapsed_time(update.since_start);
    let ctx = model.egui.begin_frame();

    let mut nav: Option<Route> = None;
    let mut go_home = false;

    if model.route != Route::Home {
        if draw_sub_page(&ctx, model.route, &model.owner_name) {
            go_home = true;
        }
    } else if model.sun.is_easter_egg() {
        let result = draw_easter_egg_page(&ctx, &model.owner_name);
        nav = result.selected;
        if result.go_home {
            go_home = true;
        }
    } else {
        nav = draw_landing_overlay(&ctx, &model.owner_name);
    }

    drop(ctx);

    if go_home {
        model.sun.navigate_home();
        model.route = Route::Home;
    }
    // Any navigation away from the easter egg clears it
    if let Some(route) = nav {
        model.sun.navigate_home();
        model.route = route;
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let window_rect = app.window_rect();

    if model.route != Route::Home {
        // Sub-pages are plain screens; egui draws the content
        draw.background().color(srgb(15u8, 23u8, 42u8));
    } else if model.sun.is_easter_egg() {
        draw_retro_background(&draw, window_rect);
    } else {
        let phase = model.clock.phase();
        draw_sky(&draw, &sky_gradient(phase), window_rect);

        // Exactly one position source: the drag session while live,
        // the arc otherwise
        let sun_page = model.sun.drag_position().unwrap_or_else(|| {
            sun_position(phase, model.viewport.x, model.viewport.y)
        });
        let hovered = model.sun.is_dragging()
            || hit_test_sun(model.mouse_page, sun_page, model.viewport.y);
        draw_sun(
            &draw,
            page_to_window(sun_page, window_rect),
            model.animation_time,
            model.reduced_motion,
            hovered,
        );

        // Forest after the sun, so the sun sets behind the trees
        draw_forest(&draw, window_rect);
    }

    draw.to_frame(app, &frame).unwrap();
    model.egui.draw_to_frame(&frame).unwrap();
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        // Escape is the keyboard navigate-home affordance
        Key::Escape => {
            model.sun.navigate_home();
            model.route = Route::Home;
        }
        // R toggles reduced motion
        Key::R => {
            model.reduced_motion = !model.reduced_motion;
            save_config(model);
        }
        // T re-syncs the phase to the configured timezone's local time
        Key::T => {
            let phase = phase_for_timezone(model.timezone);
            model.clock.set_phase(phase);
        }
        _ => {}
    }
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }
    if model.route != Route::Home || model.sun.is_easter_egg() {
        return;
    }

    let pointer = window_to_page(app.mouse.position(), app.window_rect());
    let sun_center = sun_position(model.clock.phase(), model.viewport.x, model.viewport.y);
    if hit_test_sun(pointer, sun_center, model.viewport.y) {
        model.sun.pointer_down(pointer, sun_center);
    }
}

fn mouse_moved(app: &App, model: &mut Model, pos: Point2) {
    let pointer = window_to_page(pos, app.window_rect());
    model.mouse_page = pointer;
    model.sun.pointer_move(pointer, model.drag_threshold_px);
}

fn mouse_released(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        model.sun.pointer_up();
    }
}

fn resized(_app: &App, model: &mut Model, dim: Vec2) {
    // Fail-soft: if no resize events arrive, the last known size is kept
    if dim.x > 0.0 && dim.y > 0.0 {
        model.viewport = dim;
    }
}

fn raw_window_event(app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    // Let egui handle raw events for keyboard and mouse input
    model.egui.handle_raw_event(event);

    // Map touch events onto the same pointer transitions
    if let nannou::winit::event::WindowEvent::Touch(touch) = event {
        let window_rect = app.window_rect();

        // Convert touch position to nannou coordinates, then to page
        let pos_x = touch.location.x as f32 - window_rect.w() / 2.0;
        let pos_y = window_rect.h() / 2.0 - touch.location.y as f32;
        let pointer = window_to_page(pt2(pos_x, pos_y), window_rect);

        match touch.phase {
            nannou::winit::event::TouchPhase::Started => {
                model.mouse_page = pointer;
                if model.route == Route::Home && !model.sun.is_easter_egg() {
                    let sun_center =
                        sun_position(model.clock.phase(), model.viewport.x, model.viewport.y);
                    if hit_test_sun(pointer, sun_center, model.viewport.y) {
                        model.sun.pointer_down(pointer, sun_center);
                    }
                }
            }
            nannou::winit::event::TouchPhase::Moved => {
                model.mouse_page = pointer;
                model.sun.pointer_move(pointer, model.drag_threshold_px);
            }
            nannou::winit::event::TouchPhase::Ended
            | nannou::winit::event::TouchPhase::Cancelled => {
                model.sun.pointer_up();
            }
        }
    }
}
