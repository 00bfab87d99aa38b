// Copyright 2026 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waypost Camera: the navigation camera viewport orchestrator.
//!
//! [`NavigationCamera`] is a headless state machine over five states — idle,
//! following, overview, and the two transitioning states between them — that
//! decides *when* camera transitions happen and coordinates their lifecycle.
//! It composes each transition through a
//! [`StateTransition`](waypost_transition::StateTransition) strategy and runs
//! it against an injected
//! [`AnimationHost`](waypost_animate::AnimationHost); target frames come from
//! an injected [`ViewportDataSource`].
//!
//! Nothing here spins up threads or callbacks of its own. The integration
//! wires the camera into its event flow: forwards data-source emissions to
//! [`NavigationCamera::data_updated`], forwards animation-end notifications
//! to [`NavigationCamera::handle_animation_end`], and calls the `request_*`
//! operations in response to user intent. All calls happen on one thread and
//! return without blocking; longer-running work exists only as animations
//! ticking inside the host.

mod camera;
mod source;

pub use camera::{
    CameraDebugInfo, NavigationCamera, ObserverId, TransitionEndListener,
};
pub use source::ViewportDataSource;
