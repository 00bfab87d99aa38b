// Copyright 2026 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// The named states of the navigation camera state machine.
///
/// Exactly one state is active at any instant. [`Idle`](Self::Idle) is the
/// initial state and the only state reachable instantaneously from every
/// other state. The two `Transitioning*` states are reported while a
/// state-entry transition is executing and cannot be requested directly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NavigationCameraState {
    /// The camera is not being managed; external interactions are safe.
    #[default]
    Idle,
    /// A state-entry transition toward [`Following`](Self::Following) is
    /// executing.
    TransitioningToFollowing,
    /// The camera tracks the following frame on every data update.
    Following,
    /// A state-entry transition toward [`Overview`](Self::Overview) is
    /// executing.
    TransitioningToOverview,
    /// The camera tracks the overview frame on every data update.
    Overview,
}

impl NavigationCameraState {
    /// Returns `true` for the steady [`Following`](Self::Following) and
    /// [`Overview`](Self::Overview) states, in which data updates are
    /// animated as frame updates.
    #[inline]
    #[must_use]
    pub fn is_steady(&self) -> bool {
        matches!(self, Self::Following | Self::Overview)
    }

    /// Returns `true` while a state-entry transition is executing.
    #[inline]
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        matches!(
            self,
            Self::TransitioningToFollowing | Self::TransitioningToOverview
        )
    }
}
