// Copyright 2026 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use waypost_frame::CameraPropertyValue;

/// Continuity bookkeeping for one in-flight property animation.
///
/// A value exists only while an animation for the property is running and is
/// discarded when it ends or is superseded. Frame-update strategies consult
/// it to keep motion continuous: when a data source re-targets a property to
/// the *same* value faster than the animation can finish (for example 10 Hz
/// location updates against 1000 ms animations), the replacement animation
/// runs for the remaining duration instead of restarting the full one, which
/// avoids a velocity discontinuity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatorState {
    /// The value the in-flight animation is heading toward.
    pub target: CameraPropertyValue,
    /// The in-flight animation's full duration.
    pub duration: Duration,
    /// Elapsed progress of the in-flight animation in `[0, 1]`, before
    /// easing.
    pub animated_fraction: f64,
}

impl AnimatorState {
    /// The time the in-flight animation still needs:
    /// `duration * (1 - animated_fraction)`.
    #[must_use]
    pub fn remaining_duration(&self) -> Duration {
        self.duration
            .mul_f64(1.0 - self.animated_fraction.clamp(0.0, 1.0))
    }
}
