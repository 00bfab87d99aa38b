// Copyright 2026 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use waypost_frame::ViewportData;

/// The producer of target camera frames.
///
/// Implementations compute, from route geometry, the current location, and
/// viewport padding, the frame the camera should settle on for each
/// presentation. Producing those frames is entirely the source's concern;
/// the camera only consumes the result.
///
/// The camera pulls the latest value synchronously whenever it needs one.
/// The integration must additionally forward every fresh emission to
/// [`NavigationCamera::data_updated`](crate::NavigationCamera::data_updated)
/// so steady states can track it.
pub trait ViewportDataSource {
    /// The most recently produced viewport data.
    ///
    /// Returns `None` until the source has computed its first value; state
    /// requests made before then are deferred by the camera until data
    /// arrives.
    fn viewport_data(&self) -> Option<ViewportData>;
}
