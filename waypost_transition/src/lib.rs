// Copyright 2026 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waypost Transition: timing math and camera transition strategies.
//!
//! Given a target [`CameraFrame`](waypost_frame::CameraFrame) and the kind of
//! transition being performed, this crate produces a composed, not-yet-started
//! [`TransitionSet`](waypost_animate::TransitionSet) in which every present
//! camera property gets its own single-property animation.
//!
//! Two layers:
//!
//! - [`timing`]: pure, individually testable functions — shortest-path
//!   bearing normalization, projected screen distance between two map
//!   centers, and monotonic distance/zoom-delta → duration mappings.
//! - [`StateTransition`] and its default implementation
//!   [`NavigationStateTransition`]: the designed heuristics. State-entry
//!   transitions stagger the axes ("arrive near the target, then reorient"):
//!   the center moves first, zoom follows after half the center's duration,
//!   and bearing/pitch/padding land last. Frame updates animate every
//!   property together over the same fixed duration with linear easing so
//!   they can be re-targeted on every data tick without visible jumps.
//!
//! The strategies read the *current* camera values and any in-flight
//! animation state from the injected
//! [`AnimationHost`](waypost_animate::AnimationHost), and convert geographic
//! displacement to screen pixels through a [`ScreenProjection`], so perceived
//! animation speed is resolution-independent.

mod strategy;
pub mod timing;

pub use strategy::{NavigationStateTransition, StateTransition};
pub use timing::ScreenProjection;
