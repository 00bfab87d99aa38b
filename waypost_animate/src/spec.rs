// Copyright 2026 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use waypost_frame::{CameraPropertyKind, CameraPropertyValue};

use crate::easing::Easing;

/// One single-property camera animation: target, timing, easing.
///
/// Specs are inert descriptions; an [`AnimationHost`](crate::AnimationHost)
/// turns them into running animations when the owning
/// [`TransitionSet`](crate::TransitionSet) starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationSpec {
    /// The property value to animate toward.
    pub target: CameraPropertyValue,
    /// How long the animation runs once its delay elapses.
    pub duration: Duration,
    /// How long after the group starts this animation begins.
    pub delay: Duration,
    /// The easing curve applied over `duration`.
    pub easing: Easing,
}

impl AnimationSpec {
    /// Creates a spec with no delay and linear easing.
    #[must_use]
    pub const fn new(target: CameraPropertyValue, duration: Duration) -> Self {
        Self {
            target,
            duration,
            delay: Duration::ZERO,
            easing: Easing::LINEAR,
        }
    }

    /// Returns this spec with the start delay set.
    #[inline]
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns this spec with the easing curve set.
    #[inline]
    #[must_use]
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// The property kind this spec animates.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> CameraPropertyKind {
        self.target.kind()
    }

    /// Time from group start until this animation finishes.
    #[inline]
    #[must_use]
    pub fn end_offset(&self) -> Duration {
        self.delay + self.duration
    }
}
