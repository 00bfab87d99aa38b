// Copyright 2026 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

/// Options bounding the duration of a camera transition.
///
/// Two independent knobs exist in practice and both are expressed with this
/// type: one bounding the *state-entry* transition into a steady state
/// ([`TransitionOptions::state_default`], 3500 ms) and one bounding *every
/// subsequent frame update* while in that steady state
/// ([`TransitionOptions::frame_default`], 1000 ms).
///
/// The maximum is a hard ceiling on the composed transition's total duration,
/// not a per-property cap: the slowest legitimate sub-animation may be
/// truncated to fit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionOptions {
    /// The hard ceiling on the composed transition's total duration.
    pub max_duration: Duration,
}

impl TransitionOptions {
    /// The default ceiling for state-entry transitions.
    pub const DEFAULT_STATE_MAX_DURATION: Duration = Duration::from_millis(3500);

    /// The default ceiling for per-update frame transitions.
    pub const DEFAULT_FRAME_MAX_DURATION: Duration = Duration::from_millis(1000);

    /// Creates options with the given maximum total duration.
    #[inline]
    #[must_use]
    pub const fn new(max_duration: Duration) -> Self {
        Self { max_duration }
    }

    /// The default options for a state-entry transition (3500 ms ceiling).
    #[inline]
    #[must_use]
    pub const fn state_default() -> Self {
        Self::new(Self::DEFAULT_STATE_MAX_DURATION)
    }

    /// The default options for a frame-update transition (1000 ms ceiling).
    #[inline]
    #[must_use]
    pub const fn frame_default() -> Self {
        Self::new(Self::DEFAULT_FRAME_MAX_DURATION)
    }
}
