// Copyright 2026 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Insets;

use crate::geo::GeoPoint;

/// The individually animatable camera properties.
///
/// Transition plumbing keys per-property bookkeeping (running animations,
/// continuity state) by this kind rather than by inspecting value types at
/// runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CameraPropertyKind {
    /// The geographic point the camera looks at.
    Center,
    /// The zoom level.
    Zoom,
    /// The map rotation in degrees, clockwise from north.
    Bearing,
    /// The camera tilt in degrees, `0` looking straight down.
    Pitch,
    /// Edge padding offsetting the focal point within the viewport.
    Padding,
}

impl CameraPropertyKind {
    /// All property kinds, in the order transitions assemble them.
    pub const ALL: [Self; 5] = [
        Self::Center,
        Self::Zoom,
        Self::Bearing,
        Self::Pitch,
        Self::Padding,
    ];
}

/// A single camera property value, tagged by kind.
///
/// This is the uniform currency between [`CameraFrame`](crate::CameraFrame)
/// and animation hosts: a frame decomposes into at most five of these, and
/// each becomes one single-property animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CameraPropertyValue {
    /// A camera center target.
    Center(GeoPoint),
    /// A zoom level target.
    Zoom(f64),
    /// A bearing target in degrees.
    Bearing(f64),
    /// A pitch target in degrees.
    Pitch(f64),
    /// An edge padding target.
    Padding(Insets),
}

impl CameraPropertyValue {
    /// Returns the kind tag of this value.
    #[must_use]
    pub fn kind(&self) -> CameraPropertyKind {
        match self {
            Self::Center(_) => CameraPropertyKind::Center,
            Self::Zoom(_) => CameraPropertyKind::Zoom,
            Self::Bearing(_) => CameraPropertyKind::Bearing,
            Self::Pitch(_) => CameraPropertyKind::Pitch,
            Self::Padding(_) => CameraPropertyKind::Padding,
        }
    }

    /// Returns `true` if `other` is the same kind and componentwise within
    /// `tolerance`.
    ///
    /// Used by the frame-update continuity rule to decide whether an
    /// in-flight animation already targets the same value.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        match (self, other) {
            (Self::Center(a), Self::Center(b)) => a.approx_eq(b, tolerance),
            (Self::Zoom(a), Self::Zoom(b))
            | (Self::Bearing(a), Self::Bearing(b))
            | (Self::Pitch(a), Self::Pitch(b)) => (a - b).abs() <= tolerance,
            (Self::Padding(a), Self::Padding(b)) => {
                (a.x0 - b.x0).abs() <= tolerance
                    && (a.y0 - b.y0).abs() <= tolerance
                    && (a.x1 - b.x1).abs() <= tolerance
                    && (a.y1 - b.y1).abs() <= tolerance
            }
            _ => false,
        }
    }
}
