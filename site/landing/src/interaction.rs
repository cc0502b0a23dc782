//! Sun drag interaction and easter-egg state machine
//!
//! A tagged state value (`Idle | Dragging | EasterEgg`) with one transition
//! method per pointer event. Modeling it as an enum makes the invariants
//! hold by construction: pointer events outside `Dragging` are no-ops, and a
//! drag session resolves exactly once, on pointer-up.

use nannou::prelude::*;

use crate::scene::{FOREST_TOP_RATIO, SUN_DIAMETER};

/// Horizontal displacement separating a drag from a click, in pixels
pub const DEFAULT_DRAG_THRESHOLD_PX: f32 = 15.0;

/// Ephemeral state of one pointer-down .. pointer-up interaction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer x at pointer-down, for the threshold comparison
    start_x: f32,
    /// Latched once horizontal displacement exceeds the threshold
    moved: bool,
    /// Current sun centre in page coordinates
    pub position: Point2,
}

/// Display-mode state machine for the sun
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SunState {
    /// Sun follows the computed arc
    Idle,
    /// Sun follows the pointer
    Dragging(DragSession),
    /// Alternate page reskin; terminal until the user navigates home
    EasterEgg,
}

impl SunState {
    /// Pointer-down on the sun: open a drag session
    ///
    /// The session is seeded at the sun's current computed centre so the sun
    /// does not jump at drag start. Ignored unless `Idle`.
    pub fn pointer_down(&mut self, pointer: Point2, sun_center: Point2) {
        if let SunState::Idle = self {
            *self = SunState::Dragging(DragSession {
                start_x: pointer.x,
                moved: false,
                position: sun_center,
            });
        }
    }

    /// Pointer-move: follow the pointer and latch the moved flag
    ///
    /// No-op unless a drag session is open.
    pub fn pointer_move(&mut self, pointer: Point2, threshold: f32) {
        if let SunState::Dragging(session) = self {
            session.position = pointer;
            if (pointer.x - session.start_x).abs() > threshold {
                session.moved = true;
            }
        }
    }

    /// Pointer-up: resolve the drag session exactly once
    ///
    /// A session that crossed the threshold enters `EasterEgg`; one that
    /// didn't is a click and returns to `Idle`. Pointer-up in any other
    /// state is a no-op. Returns true when the easter egg was entered.
    pub fn pointer_up(&mut self) -> bool {
        if let SunState::Dragging(session) = self {
            let entered = session.moved;
            *self = if entered {
                SunState::EasterEgg
            } else {
                SunState::Idle
            };
            entered
        } else {
            false
        }
    }

    /// Explicit navigate-home: leave the easter egg
    pub fn navigate_home(&mut self) {
        if let SunState::EasterEgg = self {
            *self = SunState::Idle;
        }
    }

    /// Sun centre while a drag is live
    pub fn drag_position(&self) -> Option<Point2> {
        match self {
            SunState::Dragging(session) => Some(session.position),
            _ => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, SunState::Dragging(_))
    }

    pub fn is_easter_egg(&self) -> bool {
        matches!(self, SunState::EasterEgg)
    }
}

/// Whether the pointer is over the visible part of the sun
///
/// Inside the sun disc and above the forest line; the slice of the disc
/// that has set behind the forest is not grabbable.
pub fn hit_test_sun(pointer: Point2, sun_center: Point2, viewport_height: f32) -> bool {
    let radius = SUN_DIAMETER / 2.0;
    let d = pointer - sun_center;
    let in_disc = d.x * d.x + d.y * d.y <= radius * radius;
    let above_forest = pointer.y < viewport_height * FOREST_TOP_RATIO;
    in_disc && above_forest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(start_x: f32, end_x: f32) -> SunState {
        let mut state = SunState::Idle;
        state.pointer_down(pt2(start_x, 300.0), pt2(start_x, 300.0));
        state.pointer_move(pt2(end_x, 300.0), DEFAULT_DRAG_THRESHOLD_PX);
        state
    }

    #[test]
    fn test_short_drag_is_a_click() {
        let mut state = drag(100.0, 110.0);
        let entered = state.pointer_up();
        assert!(!entered);
        assert_eq!(state, SunState::Idle);
    }

    #[test]
    fn test_long_drag_enters_easter_egg() {
        let mut state = drag(100.0, 120.0);
        let entered = state.pointer_up();
        assert!(entered);
        assert_eq!(state, SunState::EasterEgg);
    }

    #[test]
    fn test_moved_flag_latches() {
        // Crossing the threshold and coming back still counts as a drag
        let mut state = drag(100.0, 130.0);
        state.pointer_move(pt2(101.0, 300.0), DEFAULT_DRAG_THRESHOLD_PX);
        assert!(state.pointer_up());
    }

    #[test]
    fn test_leftward_drag_counts() {
        let mut state = drag(100.0, 80.0);
        assert!(state.pointer_up());
    }

    #[test]
    fn test_session_seeds_at_sun_center() {
        let mut state = SunState::Idle;
        let sun = pt2(250.0, 180.0);
        state.pointer_down(pt2(260.0, 190.0), sun);
        assert_eq!(state.drag_position(), Some(sun));
    }

    #[test]
    fn test_orphan_pointer_events_are_no_ops() {
        let mut state = SunState::Idle;
        state.pointer_move(pt2(500.0, 500.0), DEFAULT_DRAG_THRESHOLD_PX);
        assert_eq!(state, SunState::Idle);
        assert!(!state.pointer_up());
        assert_eq!(state, SunState::Idle);
    }

    #[test]
    fn test_drag_resolves_exactly_once() {
        let mut state = drag(100.0, 120.0);
        assert!(state.pointer_up());
        // A second pointer-up must not re-resolve
        assert!(!state.pointer_up());
        assert_eq!(state, SunState::EasterEgg);
    }

    #[test]
    fn test_pointer_down_ignored_in_easter_egg() {
        let mut state = SunState::EasterEgg;
        state.pointer_down(pt2(0.0, 0.0), pt2(0.0, 0.0));
        assert_eq!(state, SunState::EasterEgg);
    }

    #[test]
    fn test_navigate_home_resets() {
        let mut state = SunState::EasterEgg;
        state.navigate_home();
        assert_eq!(state, SunState::Idle);
        // Idle stays idle
        state.navigate_home();
        assert_eq!(state, SunState::Idle);
    }

    #[test]
    fn test_hit_test_disc_and_forest_line() {
        let sun = pt2(400.0, 200.0);
        assert!(hit_test_sun(pt2(400.0, 200.0), sun, 1000.0));
        assert!(hit_test_sun(pt2(430.0, 200.0), sun, 1000.0));
        // Outside the disc
        assert!(!hit_test_sun(pt2(440.0, 200.0), sun, 1000.0));
        // Below the forest line the sun is not grabbable
        let low_sun = pt2(400.0, 660.0);
        assert!(!hit_test_sun(pt2(400.0, 660.0), low_sun, 1000.0));
    }
}
