// Copyright 2026 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use smallvec::SmallVec;

use crate::host::{AnimationHandle, AnimationHost};
use crate::spec::AnimationSpec;

/// The single end event a [`TransitionSet`] reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionEnd {
    /// `true` if the set was cancelled (by [`TransitionSet::cancel`] or by
    /// any sub-animation ending cancelled) rather than running to
    /// completion.
    pub cancelled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Pending,
    Running,
    Ended,
}

/// A composed group of up to five property animations, started and cancelled
/// atomically.
///
/// A set is assembled from [`AnimationSpec`]s by a transition strategy,
/// optionally constrained to a total-duration ceiling, and then handed to the
/// orchestrator which drives it against an [`AnimationHost`]:
///
/// - [`start`](Self::start) creates and starts every sub-animation together
///   and is the set's single start event. A set with nothing to animate
///   (no specs, or a host that declines every property) completes instantly.
/// - The host's per-animation end notifications are funneled into
///   [`note_animation_end`](Self::note_animation_end), which yields the
///   single group end once *all* sub-animations finished — or immediately,
///   flagged cancelled, when any of them was cancelled.
/// - [`cancel`](Self::cancel) cancels every sub-animation and resolves the
///   group end synchronously; host notifications that trickle in afterwards
///   are ignored.
///
/// A set never restarts: once ended it stays ended.
#[derive(Debug, Default)]
pub struct TransitionSet {
    specs: SmallVec<[AnimationSpec; 5]>,
    running: SmallVec<[RunningAnimation; 5]>,
    phase: Phase,
}

#[derive(Clone, Copy, Debug)]
struct RunningAnimation {
    handle: AnimationHandle,
    done: bool,
}

impl Default for Phase {
    fn default() -> Self {
        Self::Pending
    }
}

impl TransitionSet {
    /// Creates an empty, not-yet-started set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one property animation to the not-yet-started set.
    ///
    /// Calls after [`start`](Self::start) are ignored; the composition is
    /// fixed once the set runs.
    pub fn push(&mut self, spec: AnimationSpec) {
        if self.phase == Phase::Pending {
            self.specs.push(spec);
        }
    }

    /// The animations composing this set.
    #[must_use]
    pub fn specs(&self) -> &[AnimationSpec] {
        &self.specs
    }

    /// Returns `true` if the set has no animations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// The number of animations in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Returns `true` once the set has reported its end event.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.phase == Phase::Ended
    }

    /// The group's total duration: the latest `delay + duration` across its
    /// animations.
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        self.specs
            .iter()
            .map(AnimationSpec::end_offset)
            .max()
            .unwrap_or(Duration::ZERO)
    }

    /// Applies a hard ceiling to the group's total duration.
    ///
    /// If the group would outlast `max`, every animation's delay and duration
    /// are scaled by the same factor so the staggering is preserved while the
    /// whole group fits. Groups already within the ceiling are unchanged.
    pub fn constrain_duration_to(&mut self, max: Duration) {
        let total = self.total_duration();
        if total <= max || total.is_zero() {
            return;
        }
        let factor = max.as_secs_f64() / total.as_secs_f64();
        for spec in &mut self.specs {
            spec.delay = spec.delay.mul_f64(factor);
            spec.duration = spec.duration.mul_f64(factor);
        }
    }

    /// Zeroes every delay and duration so the set applies its targets
    /// immediately when started.
    pub fn make_instant(&mut self) {
        for spec in &mut self.specs {
            spec.delay = Duration::ZERO;
            spec.duration = Duration::ZERO;
        }
    }

    /// Creates and starts every sub-animation on `host`.
    ///
    /// This is the set's single start event. Properties the host declines to
    /// animate are skipped. Returns the group end right away if nothing ends
    /// up running — an empty transition starts and finishes instantly, which
    /// is a valid no-op, not an error.
    pub fn start(&mut self, host: &mut dyn AnimationHost) -> Option<TransitionEnd> {
        if self.phase != Phase::Pending {
            return None;
        }
        for spec in &self.specs {
            if let Some(handle) = host.create(spec) {
                self.running.push(RunningAnimation {
                    handle,
                    done: false,
                });
            }
        }
        if self.running.is_empty() {
            self.phase = Phase::Ended;
            return Some(TransitionEnd { cancelled: false });
        }
        for anim in &self.running {
            host.start(anim.handle);
        }
        self.phase = Phase::Running;
        None
    }

    /// Cancels the set and every sub-animation still in flight.
    ///
    /// The group end is resolved synchronously; the returned event carries
    /// `cancelled = true`. Returns `None` if the set already ended.
    pub fn cancel(&mut self, host: &mut dyn AnimationHost) -> Option<TransitionEnd> {
        match self.phase {
            Phase::Ended => None,
            Phase::Pending => {
                self.phase = Phase::Ended;
                Some(TransitionEnd { cancelled: true })
            }
            Phase::Running => {
                for anim in &self.running {
                    if !anim.done {
                        host.cancel(anim.handle);
                    }
                }
                self.phase = Phase::Ended;
                Some(TransitionEnd { cancelled: true })
            }
        }
    }

    /// Returns `true` if `handle` belongs to this set.
    #[must_use]
    pub fn contains(&self, handle: AnimationHandle) -> bool {
        self.running.iter().any(|a| a.handle == handle)
    }

    /// Records the host's end notification for one sub-animation.
    ///
    /// Returns the single group end once all sub-animations have finished,
    /// or immediately (flagged cancelled) when `cancelled` is set. Unknown
    /// handles and notifications after the set already ended are ignored.
    pub fn note_animation_end(
        &mut self,
        handle: AnimationHandle,
        cancelled: bool,
    ) -> Option<TransitionEnd> {
        if self.phase != Phase::Running {
            return None;
        }
        let anim = self.running.iter_mut().find(|a| a.handle == handle)?;
        if anim.done {
            return None;
        }
        if cancelled {
            self.phase = Phase::Ended;
            return Some(TransitionEnd { cancelled: true });
        }
        anim.done = true;
        if self.running.iter().all(|a| a.done) {
            self.phase = Phase::Ended;
            Some(TransitionEnd { cancelled: false })
        } else {
            None
        }
    }
}
