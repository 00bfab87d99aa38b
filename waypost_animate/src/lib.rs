// Copyright 2026 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waypost Animate: animation primitives for camera transitions.
//!
//! This crate defines the pieces a camera transition is assembled from,
//! without owning any animation engine of its own:
//!
//! - [`Easing`]: cubic-bézier easing curves with the named constants used by
//!   the navigation transitions.
//! - [`AnimationSpec`]: one single-property animation — target, duration,
//!   delay, easing.
//! - [`AnimationHost`]: the injected interface to the external animation
//!   engine that actually runs single-property animations against the map
//!   camera and ticks them on the UI frame clock.
//! - [`AnimatorState`]: continuity bookkeeping for an in-flight property
//!   animation, used to carry over remaining durations when a new target
//!   arrives mid-animation.
//! - [`TransitionSet`]: a composed group of up to five property animations
//!   that is started and cancelled atomically and reports exactly one end
//!   event, with a cancellation flag.
//!
//! ## Ownership contract
//!
//! While a [`TransitionSet`] is running, its animations are assumed to be the
//! only writers of the camera properties they animate. External mutation of
//! the same properties (for example a user gesture) must first cancel the
//! set; this is a documented contract with the integration, not something
//! this crate can enforce.
//!
//! ## Example
//!
//! ```rust
//! use core::time::Duration;
//! use waypost_animate::{AnimationSpec, Easing, TransitionSet};
//! use waypost_frame::CameraPropertyValue;
//!
//! let mut set = TransitionSet::new();
//! set.push(AnimationSpec::new(
//!     CameraPropertyValue::Zoom(16.0),
//!     Duration::from_millis(1800),
//! ));
//! set.push(
//!     AnimationSpec::new(CameraPropertyValue::Bearing(90.0), Duration::from_millis(1200))
//!         .with_delay(Duration::from_millis(600))
//!         .with_easing(Easing::SLOW_OUT_SLOW_IN),
//! );
//!
//! assert_eq!(set.total_duration(), Duration::from_millis(1800));
//!
//! // A hard ceiling scales the whole group proportionally.
//! set.constrain_duration_to(Duration::from_millis(900));
//! assert_eq!(set.total_duration(), Duration::from_millis(900));
//! ```

mod easing;
mod host;
mod set;
mod spec;
mod state;

pub use easing::Easing;
pub use host::{AnimationHandle, AnimationHost};
pub use set::{TransitionEnd, TransitionSet};
pub use spec::AnimationSpec;
pub use state::AnimatorState;
