// Copyright 2026 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure transition timing math.
//!
//! Everything here is a stateless function over its arguments; the
//! strategies in this crate compose them, and integrations are free to reuse
//! them for custom transitions.

use core::time::Duration;

use kurbo::Point;

use waypost_frame::GeoPoint;

/// Converts geographic coordinates into screen coordinates at the current
/// map projection.
///
/// Implemented by the map engine integration. The projection is only ever
/// asked about the current viewport; Waypost does not cache results across
/// camera movement.
pub trait ScreenProjection {
    /// The on-screen pixel position of `point` under the current camera.
    fn screen_coordinate(&self, point: GeoPoint) -> Point;
}

/// The signed shortest rotation from `current` to `target`, in degrees, in
/// `[-180, 180)`.
#[must_use]
pub fn shortest_rotation(current: f64, target: f64) -> f64 {
    (target - current + 540.0).rem_euclid(360.0) - 180.0
}

/// Rebases `target` so that animating from `current` to the result never
/// rotates more than 180°.
///
/// The result is `current + shortest_rotation(current, target)`, rounded to
/// six decimal places to avoid oscillation artifacts near the 0°/360°
/// wrap-around.
///
/// ```rust
/// use waypost_transition::timing::normalize_bearing;
///
/// // Rotating from 10° to 350° goes 20° counter-clockwise, not 340° around.
/// assert_eq!(normalize_bearing(10.0, 350.0), -10.0);
/// ```
#[must_use]
pub fn normalize_bearing(current: f64, target: f64) -> f64 {
    round_to_six_decimals(current + shortest_rotation(current, target))
}

fn round_to_six_decimals(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

/// The on-screen pixel distance between two map centers under `projection`.
#[must_use]
pub fn screen_distance(projection: &dyn ScreenProjection, from: GeoPoint, to: GeoPoint) -> f64 {
    projection
        .screen_coordinate(from)
        .distance(projection.screen_coordinate(to))
}

/// Maps a screen-space distance to an animation duration at a constant
/// perceived rate, capped at `max`.
#[must_use]
pub fn duration_from_screen_distance(
    distance_px: f64,
    rate_px_per_sec: f64,
    max: Duration,
) -> Duration {
    duration_at_rate(distance_px, rate_px_per_sec, max)
}

/// Maps a zoom-level delta to an animation duration at a constant rate in
/// zoom levels per second, capped at `max`.
#[must_use]
pub fn duration_from_zoom_delta(delta: f64, rate_levels_per_sec: f64, max: Duration) -> Duration {
    duration_at_rate(delta, rate_levels_per_sec, max)
}

fn duration_at_rate(amount: f64, rate_per_sec: f64, max: Duration) -> Duration {
    // Degenerate rates (zero, negative, non-finite) fall back to the cap
    // rather than producing a negative or infinite duration.
    let seconds = amount.abs() / rate_per_sec;
    if !seconds.is_finite() || seconds < 0.0 {
        return max;
    }
    Duration::from_secs_f64(seconds).min(max)
}
