//! Phase clock - cyclic progress through the day/night cycle
//!
//! Produces a free-running value in [0,1) that advances at a constant rate
//! per wall-clock second, independent of frame rate. Also provides timezone
//! helpers for seeding the phase from the current local time of day.

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;
use std::time::Duration;

/// Default length of one full day/night cycle, in seconds
pub const DEFAULT_CYCLE_SECONDS: f64 = 45.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Free-running cyclic clock
///
/// `phase` is fractional progress through one cycle: 0 at midnight,
/// 0.5 at noon, wrapping back to 0 at the next midnight.
#[derive(Debug, Clone)]
pub struct PhaseClock {
    phase: f64,
    cycle_seconds: f64,
    last_timestamp: Option<Duration>,
}

impl PhaseClock {
    /// Create a clock at phase 0 with the given cycle length
    ///
    /// Non-positive cycle lengths fall back to the default.
    pub fn new(cycle_seconds: f64) -> Self {
        let cycle_seconds = if cycle_seconds > 0.0 {
            cycle_seconds
        } else {
            DEFAULT_CYCLE_SECONDS
        };
        Self {
            phase: 0.0,
            cycle_seconds,
            last_timestamp: None,
        }
    }

    /// Current phase in [0,1)
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Cycle length in seconds
    pub fn cycle_seconds(&self) -> f64 {
        self.cycle_seconds
    }

    /// Jump to a specific phase, wrapped into [0,1)
    pub fn set_phase(&mut self, phase: f64) {
        self.phase = phase.rem_euclid(1.0);
    }

    /// Advance the phase from elapsed time
    ///
    /// `now` is a monotonically non-decreasing timestamp, one call per
    /// display refresh. The first call only seeds the timestamp and
    /// produces no phase change.
    pub fn tick(&mut self, now: Duration) -> f64 {
        if let Some(last) = self.last_timestamp {
            let dt = now.saturating_sub(last).as_secs_f64();
            self.phase = (self.phase + dt / self.cycle_seconds).rem_euclid(1.0);
        }
        self.last_timestamp = Some(now);
        self.phase
    }

    /// Refresh the timestamp without advancing the phase
    ///
    /// Used while motion is held, so the next `tick` doesn't apply the
    /// whole held interval at once.
    pub fn hold(&mut self, now: Duration) -> f64 {
        self.last_timestamp = Some(now);
        self.phase
    }
}

/// Phase for the current time of day in a timezone
///
/// Maps the fraction of the local day elapsed to a phase, so local noon
/// lands at 0.5 (the arc's zenith).
pub fn phase_for_timezone(tz: Tz) -> f64 {
    phase_for_timezone_at(tz, Utc::now())
}

/// Phase for the local time of day in a timezone at a specific instant
pub fn phase_for_timezone_at(tz: Tz, now_utc: DateTime<Utc>) -> f64 {
    let local = now_utc.with_timezone(&tz);
    let seconds = local.num_seconds_from_midnight() as f64
        + local.nanosecond() as f64 / 1_000_000_000.0;
    (seconds / SECONDS_PER_DAY).rem_euclid(1.0)
}

/// Parse a timezone string into a Tz
pub fn parse_timezone(tz_str: &str) -> Result<Tz, String> {
    tz_str
        .parse::<Tz>()
        .map_err(|_| format!("Invalid timezone: {}", tz_str))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_first_tick_seeds_only() {
        let mut clock = PhaseClock::new(45.0);
        let phase = clock.tick(Duration::from_secs(7));
        assert!(
            phase.abs() < EPSILON,
            "first tick must not advance, got {}",
            phase
        );
    }

    #[test]
    fn test_full_cycle_wraps_to_zero() {
        let mut clock = PhaseClock::new(45.0);
        clock.tick(Duration::ZERO);
        let phase = clock.tick(Duration::from_secs(45));
        assert!(
            phase.abs() < EPSILON || (1.0 - phase).abs() < EPSILON,
            "one full cycle should wrap to 0, got {}",
            phase
        );
    }

    #[test]
    fn test_half_cycle_is_noon() {
        let mut clock = PhaseClock::new(45.0);
        clock.tick(Duration::ZERO);
        let phase = clock.tick(Duration::from_millis(22_500));
        assert!(
            (phase - 0.5).abs() < EPSILON,
            "half cycle should be phase 0.5, got {}",
            phase
        );
    }

    #[test]
    fn test_accumulates_across_ticks() {
        let mut clock = PhaseClock::new(45.0);
        clock.tick(Duration::ZERO);
        for i in 1..=9 {
            clock.tick(Duration::from_secs(i));
        }
        assert!(
            (clock.phase() - 0.2).abs() < EPSILON,
            "9s of a 45s cycle should be 0.2, got {}",
            clock.phase()
        );
    }

    #[test]
    fn test_cycle_length_is_tunable() {
        let mut clock = PhaseClock::new(10.0);
        clock.tick(Duration::ZERO);
        let phase = clock.tick(Duration::from_secs(5));
        assert!((phase - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_non_positive_cycle_falls_back() {
        let clock = PhaseClock::new(0.0);
        assert_eq!(clock.cycle_seconds(), DEFAULT_CYCLE_SECONDS);
        let clock = PhaseClock::new(-3.0);
        assert_eq!(clock.cycle_seconds(), DEFAULT_CYCLE_SECONDS);
    }

    #[test]
    fn test_hold_does_not_advance() {
        let mut clock = PhaseClock::new(45.0);
        clock.tick(Duration::ZERO);
        clock.tick(Duration::from_secs(9));
        let before = clock.phase();
        clock.hold(Duration::from_secs(30));
        assert_eq!(clock.phase(), before);
        // The held interval must not be applied retroactively
        let after = clock.tick(Duration::from_secs(30));
        assert!((after - before).abs() < EPSILON);
    }

    #[test]
    fn test_set_phase_wraps() {
        let mut clock = PhaseClock::new(45.0);
        clock.set_phase(1.25);
        assert!((clock.phase() - 0.25).abs() < EPSILON);
        clock.set_phase(-0.25);
        assert!((clock.phase() - 0.75).abs() < EPSILON);
    }

    #[test]
    fn test_timezone_noon_is_half() {
        let tz: Tz = "America/Chicago".parse().unwrap();
        // 2025-06-15 12:00:00 local (CDT, UTC-5) == 17:00 UTC
        let noon_utc = Utc.with_ymd_and_hms(2025, 6, 15, 17, 0, 0).unwrap();
        let phase = phase_for_timezone_at(tz, noon_utc);
        assert!(
            (phase - 0.5).abs() < EPSILON,
            "local noon should map to 0.5, got {}",
            phase
        );
    }

    #[test]
    fn test_timezone_midnight_is_zero() {
        let tz: Tz = "UTC".parse().unwrap();
        let midnight = Utc.with_ymd_and_hms(2025, 6, 15, 0, 0, 0).unwrap();
        let phase = phase_for_timezone_at(tz, midnight);
        assert!(phase.abs() < EPSILON);
    }

    #[test]
    fn test_parse_timezone() {
        assert!(parse_timezone("America/Chicago").is_ok());
        assert!(parse_timezone("Not/AZone").is_err());
    }
}
