// Copyright 2026 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waypost Frame: shared camera value types for navigation camera control.
//!
//! This crate provides the small, copyable value types that the rest of
//! Waypost passes around:
//!
//! - [`GeoPoint`]: a geographic coordinate in degrees.
//! - [`CameraFrame`]: a *partial* specification of the camera properties to
//!   animate toward (center, zoom, bearing, pitch, padding). Absent
//!   properties are left untouched by a transition.
//! - [`ViewportData`]: a pair of camera frames, one tuned for a "following"
//!   presentation and one for an "overview" presentation, produced
//!   atomically by a viewport data source.
//! - [`NavigationCameraState`]: the named states of the camera state
//!   machine.
//! - [`TransitionOptions`]: knobs bounding transition durations.
//! - [`CameraPropertyKind`] / [`CameraPropertyValue`]: a tagged view of the
//!   individual animatable properties, used by animation plumbing that needs
//!   to treat heterogeneous property types uniformly.
//!
//! It owns no behavior beyond simple accessors and carries no dependency on
//! any map engine or animation system.
//!
//! ## Example
//!
//! ```rust
//! use waypost_frame::{CameraFrame, GeoPoint, ViewportData};
//!
//! let following = CameraFrame::new()
//!     .with_center(GeoPoint::new(-122.4194, 37.7749))
//!     .with_zoom(16.5)
//!     .with_pitch(45.0);
//! let overview = CameraFrame::new()
//!     .with_center(GeoPoint::new(-122.4, 37.8))
//!     .with_zoom(11.0)
//!     .with_bearing(0.0)
//!     .with_pitch(0.0);
//!
//! let data = ViewportData::new(following, overview);
//! assert_eq!(data.for_following.property_count(), 3);
//! assert!(!data.for_overview.is_empty());
//! ```

mod frame;
mod geo;
mod options;
mod property;
mod state;

pub use frame::{CameraFrame, ViewportData};
pub use geo::GeoPoint;
pub use options::TransitionOptions;
pub use property::{CameraPropertyKind, CameraPropertyValue};
pub use state::NavigationCameraState;
