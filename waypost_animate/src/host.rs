// Copyright 2026 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use waypost_frame::{CameraPropertyKind, CameraPropertyValue};

use crate::spec::AnimationSpec;
use crate::state::AnimatorState;

/// An opaque identifier for a single-property animation issued by an
/// [`AnimationHost`].
///
/// Handles are only meaningful to the host that created them. Waypost uses
/// them to start and cancel animations and to match the host's end
/// notifications back to the transition that owns the animation.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationHandle(u64);

impl AnimationHandle {
    /// Creates a handle from a host-chosen raw value.
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value this handle was created from.
    #[inline]
    #[must_use]
    pub const fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for AnimationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AnimationHandle({})", self.0)
    }
}

/// The injected interface to the external animation engine.
///
/// Implementations wrap whatever actually animates the map camera: a
/// compositor-synchronized animation plugin, a game loop, or a test fake.
/// All calls are made from the single UI thread; none may block.
///
/// Per-animation lifecycle:
///
/// 1. [`create`](Self::create) registers a not-yet-started animation for a
///    spec and returns its handle, or `None` if the engine cannot animate
///    that property (the transition then simply proceeds without it).
/// 2. [`start`](Self::start) begins ticking it on the host's frame clock.
/// 3. The host eventually reports the animation's end — finished or
///    cancelled — through the integration, which forwards it to the owning
///    transition ([`TransitionSet::note_animation_end`]).
/// 4. [`cancel`](Self::cancel) aborts a running animation; the host must
///    release it without snapping the animated property to its target.
///
/// [`TransitionSet::note_animation_end`]: crate::TransitionSet::note_animation_end
pub trait AnimationHost {
    /// Registers an animation for `spec` without starting it.
    ///
    /// Returns `None` if this host cannot animate the spec's property.
    fn create(&mut self, spec: &AnimationSpec) -> Option<AnimationHandle>;

    /// Starts a previously created animation.
    fn start(&mut self, handle: AnimationHandle);

    /// Cancels a created or running animation.
    ///
    /// Unknown or already-finished handles must be ignored.
    fn cancel(&mut self, handle: AnimationHandle);

    /// The current value of a camera property, if the host knows it.
    ///
    /// Transition strategies seed duration heuristics and bearing
    /// normalization from these values.
    fn current_value(&self, kind: CameraPropertyKind) -> Option<CameraPropertyValue>;

    /// Continuity bookkeeping for the in-flight animation of `kind`, if one
    /// is running.
    fn in_flight(&self, kind: CameraPropertyKind) -> Option<AnimatorState>;
}
