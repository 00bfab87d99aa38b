// Copyright 2026 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Insets;

use crate::geo::GeoPoint;
use crate::property::{CameraPropertyKind, CameraPropertyValue};

/// A partial specification of camera properties to animate toward.
///
/// Every property is independently optional; an absent property means "do
/// not animate this property in this transition", not "animate it to a
/// default". A frame with no properties set is a valid no-op target: a
/// transition built from it starts and ends instantly with no visual effect.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CameraFrame {
    /// The geographic point to look at, if the center should move.
    pub center: Option<GeoPoint>,
    /// The target zoom level, if zoom should change.
    pub zoom: Option<f64>,
    /// The target bearing in degrees, if the map should rotate.
    pub bearing: Option<f64>,
    /// The target pitch in degrees, if the camera should tilt.
    pub pitch: Option<f64>,
    /// The target edge padding, if the focal point should shift.
    pub padding: Option<Insets>,
}

impl CameraFrame {
    /// Creates an empty frame with no properties set.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            center: None,
            zoom: None,
            bearing: None,
            pitch: None,
            padding: None,
        }
    }

    /// Returns this frame with the center target set.
    #[inline]
    #[must_use]
    pub const fn with_center(mut self, center: GeoPoint) -> Self {
        self.center = Some(center);
        self
    }

    /// Returns this frame with the zoom target set.
    #[inline]
    #[must_use]
    pub const fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = Some(zoom);
        self
    }

    /// Returns this frame with the bearing target set, in degrees.
    #[inline]
    #[must_use]
    pub const fn with_bearing(mut self, bearing: f64) -> Self {
        self.bearing = Some(bearing);
        self
    }

    /// Returns this frame with the pitch target set, in degrees.
    #[inline]
    #[must_use]
    pub const fn with_pitch(mut self, pitch: f64) -> Self {
        self.pitch = Some(pitch);
        self
    }

    /// Returns this frame with the edge padding target set.
    #[inline]
    #[must_use]
    pub const fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Returns `true` if no property is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.property_count() == 0
    }

    /// Returns the number of properties set on this frame.
    #[must_use]
    pub fn property_count(&self) -> usize {
        usize::from(self.center.is_some())
            + usize::from(self.zoom.is_some())
            + usize::from(self.bearing.is_some())
            + usize::from(self.pitch.is_some())
            + usize::from(self.padding.is_some())
    }

    /// Returns the tagged value for `kind`, if that property is set.
    #[must_use]
    pub fn get(&self, kind: CameraPropertyKind) -> Option<CameraPropertyValue> {
        match kind {
            CameraPropertyKind::Center => self.center.map(CameraPropertyValue::Center),
            CameraPropertyKind::Zoom => self.zoom.map(CameraPropertyValue::Zoom),
            CameraPropertyKind::Bearing => self.bearing.map(CameraPropertyValue::Bearing),
            CameraPropertyKind::Pitch => self.pitch.map(CameraPropertyValue::Pitch),
            CameraPropertyKind::Padding => self.padding.map(CameraPropertyValue::Padding),
        }
    }

    /// Iterates over the properties set on this frame, in
    /// [`CameraPropertyKind::ALL`] order.
    pub fn properties(&self) -> impl Iterator<Item = CameraPropertyValue> + '_ {
        CameraPropertyKind::ALL.into_iter().filter_map(|k| self.get(k))
    }
}

/// A pair of camera frames produced atomically by a viewport data source.
///
/// One frame is tuned for the "following" presentation (puck near the bottom,
/// pitched, rotated to the direction of travel) and one for the "overview"
/// presentation (whole remaining route in view). Consumers must treat a value
/// as immutable once read; the source re-emits a fresh value whenever route,
/// location, or padding inputs change.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportData {
    /// The frame to use when in (or transitioning to) the following state.
    pub for_following: CameraFrame,
    /// The frame to use when in (or transitioning to) the overview state.
    pub for_overview: CameraFrame,
}

impl ViewportData {
    /// Creates viewport data from the two presentation frames.
    #[inline]
    #[must_use]
    pub const fn new(for_following: CameraFrame, for_overview: CameraFrame) -> Self {
        Self {
            for_following,
            for_overview,
        }
    }
}
