// Copyright 2026 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use waypost_animate::{AnimationHost, AnimationSpec, Easing, TransitionSet};
use waypost_frame::{CameraFrame, CameraPropertyKind, CameraPropertyValue, TransitionOptions};

use crate::timing::{
    ScreenProjection, duration_from_screen_distance, duration_from_zoom_delta, normalize_bearing,
    screen_distance,
};

/// Produces composed camera transitions for the navigation state machine.
///
/// The two `transition_to_*` operations build *state-entry* transitions; the
/// two `update_frame_for_*` operations build the continuous per-data-tick
/// updates applied while a steady state is engaged. Every returned
/// [`TransitionSet`] is not yet started; the orchestrator owns its lifecycle.
pub trait StateTransition {
    /// Builds the state-entry transition into the following state.
    fn transition_to_following(
        &self,
        host: &dyn AnimationHost,
        frame: &CameraFrame,
        options: &TransitionOptions,
    ) -> TransitionSet;

    /// Builds the state-entry transition into the overview state.
    fn transition_to_overview(
        &self,
        host: &dyn AnimationHost,
        frame: &CameraFrame,
        options: &TransitionOptions,
    ) -> TransitionSet;

    /// Builds a frame update applied while the following state is engaged.
    fn update_frame_for_following(
        &self,
        host: &dyn AnimationHost,
        frame: &CameraFrame,
        options: &TransitionOptions,
    ) -> TransitionSet;

    /// Builds a frame update applied while the overview state is engaged.
    fn update_frame_for_overview(
        &self,
        host: &dyn AnimationHost,
        frame: &CameraFrame,
        options: &TransitionOptions,
    ) -> TransitionSet;
}

// State-entry tuning. The fly path rates come from the perceived-speed
// heuristics of the original navigation camera; the settle path uses fixed,
// empirically tuned durations.
const CENTER_RATE_PX_PER_SEC: f64 = 500.0;
const CENTER_MAX_DURATION: Duration = Duration::from_millis(3000);
const ZOOM_RATE_LEVELS_PER_SEC: f64 = 2.2;
const ZOOM_MAX_DURATION: Duration = Duration::from_millis(3000);
const FLY_BEARING_DURATION: Duration = Duration::from_millis(1800);
const FLY_PITCH_AND_PADDING_DURATION: Duration = Duration::from_millis(1200);
const FLY_PITCH_AND_PADDING_LAG: Duration = Duration::from_millis(100);

const SETTLE_CENTER_DURATION: Duration = Duration::from_millis(1000);
const SETTLE_CENTER_DELAY: Duration = Duration::from_millis(800);
const SETTLE_ZOOM_DURATION: Duration = Duration::from_millis(1800);
const SETTLE_BEARING_DURATION: Duration = Duration::from_millis(1200);
const SETTLE_BEARING_DELAY: Duration = Duration::from_millis(600);
const SETTLE_PITCH_DURATION: Duration = Duration::from_millis(1000);
const SETTLE_PADDING_DURATION: Duration = Duration::from_millis(1200);

/// Tolerance for "already animating to the same target" checks in the
/// frame-update continuity rule.
const CONTINUITY_TOLERANCE: f64 = 1e-6;

/// The default [`StateTransition`] implementation.
///
/// State-entry transitions come in two shapes, chosen by comparing the
/// camera's current zoom with the target zoom:
///
/// - **Fly** (zooming in): biased toward showing the destination before
///   reorienting. The center animation's duration is derived from the
///   projected screen distance it has to cover; zoom starts after half the
///   center's duration and lasts proportionally to the zoom delta; bearing,
///   pitch, and padding land last with fixed short durations. All use a
///   decelerating easing curve.
/// - **Settle** (zooming out or staying level): symmetric fixed-duration
///   choreography — zoom out first, rotate midway, move the center late —
///   with the same easing.
///
/// Either shape is then constrained to the options' total-duration ceiling.
/// Frame updates are linear: one shared duration, no stagger, retargetable
/// every tick, with the in-flight continuity rule applied per property.
#[derive(Clone, Debug)]
pub struct NavigationStateTransition<P> {
    projection: P,
}

impl<P: ScreenProjection> NavigationStateTransition<P> {
    /// Creates a strategy that projects screen distances through
    /// `projection`.
    #[must_use]
    pub fn new(projection: P) -> Self {
        Self { projection }
    }

    fn state_entry(
        &self,
        host: &dyn AnimationHost,
        frame: &CameraFrame,
        options: &TransitionOptions,
    ) -> TransitionSet {
        let current_zoom = match host.current_value(CameraPropertyKind::Zoom) {
            Some(CameraPropertyValue::Zoom(zoom)) => Some(zoom),
            _ => None,
        };
        let zooming_in = match (current_zoom, frame.zoom) {
            (Some(current), Some(target)) => current < target,
            _ => false,
        };
        let mut set = if zooming_in {
            self.fly(host, frame)
        } else {
            settle(host, frame)
        };
        set.constrain_duration_to(options.max_duration);
        set
    }

    /// The low-zoom → high-zoom state entry: show the destination, then
    /// reorient.
    fn fly(&self, host: &dyn AnimationHost, frame: &CameraFrame) -> TransitionSet {
        let mut set = TransitionSet::new();

        let mut center_duration = Duration::ZERO;
        if let Some(center) = frame.center {
            let distance = match host.current_value(CameraPropertyKind::Center) {
                Some(CameraPropertyValue::Center(current)) => {
                    screen_distance(&self.projection, current, center)
                }
                _ => 0.0,
            };
            center_duration =
                duration_from_screen_distance(distance, CENTER_RATE_PX_PER_SEC, CENTER_MAX_DURATION);
            set.push(
                AnimationSpec::new(CameraPropertyValue::Center(center), center_duration)
                    .with_easing(Easing::SLOW_OUT_SLOW_IN),
            );
        }

        let mut zoom_delay = Duration::ZERO;
        let mut zoom_duration = Duration::ZERO;
        if let Some(zoom) = frame.zoom {
            let delta = match host.current_value(CameraPropertyKind::Zoom) {
                Some(CameraPropertyValue::Zoom(current)) => zoom - current,
                _ => 0.0,
            };
            zoom_delay = center_duration / 2;
            zoom_duration =
                duration_from_zoom_delta(delta, ZOOM_RATE_LEVELS_PER_SEC, ZOOM_MAX_DURATION);
            set.push(
                AnimationSpec::new(CameraPropertyValue::Zoom(zoom), zoom_duration)
                    .with_delay(zoom_delay)
                    .with_easing(Easing::SLOW_OUT_SLOW_IN),
            );
        }
        let zoom_end = zoom_delay + zoom_duration;

        if let Some(bearing) = frame.bearing {
            let target = normalized_bearing_target(host, bearing);
            set.push(
                AnimationSpec::new(CameraPropertyValue::Bearing(target), FLY_BEARING_DURATION)
                    .with_delay(zoom_end.saturating_sub(FLY_BEARING_DURATION))
                    .with_easing(Easing::SLOW_OUT_SLOW_IN),
            );
        }

        let late_delay =
            (zoom_end + FLY_PITCH_AND_PADDING_LAG).saturating_sub(FLY_PITCH_AND_PADDING_DURATION);
        if let Some(pitch) = frame.pitch {
            set.push(
                AnimationSpec::new(
                    CameraPropertyValue::Pitch(pitch),
                    FLY_PITCH_AND_PADDING_DURATION,
                )
                .with_delay(late_delay)
                .with_easing(Easing::SLOW_OUT_SLOW_IN),
            );
        }
        if let Some(padding) = frame.padding {
            set.push(
                AnimationSpec::new(
                    CameraPropertyValue::Padding(padding),
                    FLY_PITCH_AND_PADDING_DURATION,
                )
                .with_delay(late_delay)
                .with_easing(Easing::SLOW_OUT_SLOW_IN),
            );
        }

        set
    }
}

/// The high-zoom → low-zoom state entry: zoom out first, move the center
/// late.
fn settle(host: &dyn AnimationHost, frame: &CameraFrame) -> TransitionSet {
    let mut set = TransitionSet::new();
    if let Some(center) = frame.center {
        set.push(
            AnimationSpec::new(CameraPropertyValue::Center(center), SETTLE_CENTER_DURATION)
                .with_delay(SETTLE_CENTER_DELAY)
                .with_easing(Easing::SLOW_OUT_SLOW_IN),
        );
    }
    if let Some(zoom) = frame.zoom {
        set.push(
            AnimationSpec::new(CameraPropertyValue::Zoom(zoom), SETTLE_ZOOM_DURATION)
                .with_easing(Easing::SLOW_OUT_SLOW_IN),
        );
    }
    if let Some(bearing) = frame.bearing {
        let target = normalized_bearing_target(host, bearing);
        set.push(
            AnimationSpec::new(CameraPropertyValue::Bearing(target), SETTLE_BEARING_DURATION)
                .with_delay(SETTLE_BEARING_DELAY)
                .with_easing(Easing::SLOW_OUT_SLOW_IN),
        );
    }
    if let Some(pitch) = frame.pitch {
        set.push(
            AnimationSpec::new(CameraPropertyValue::Pitch(pitch), SETTLE_PITCH_DURATION)
                .with_easing(Easing::SLOW_OUT_SLOW_IN),
        );
    }
    if let Some(padding) = frame.padding {
        set.push(
            AnimationSpec::new(CameraPropertyValue::Padding(padding), SETTLE_PADDING_DURATION)
                .with_easing(Easing::SLOW_OUT_SLOW_IN),
        );
    }
    set
}

/// The steady-state frame update: every present property animates together,
/// linearly, over the same duration, so the whole group can be retargeted on
/// every data tick.
fn linear_update(
    host: &dyn AnimationHost,
    frame: &CameraFrame,
    options: &TransitionOptions,
) -> TransitionSet {
    let mut set = TransitionSet::new();
    for value in frame.properties() {
        let target = match value {
            CameraPropertyValue::Bearing(bearing) => {
                CameraPropertyValue::Bearing(normalized_bearing_target(host, bearing))
            }
            other => other,
        };
        // Continuity: an animation already heading to this exact target keeps
        // its remaining flight time instead of restarting at full duration.
        let duration = match host.in_flight(target.kind()) {
            Some(state) if state.target.approx_eq(&target, CONTINUITY_TOLERANCE) => {
                state.remaining_duration()
            }
            _ => options.max_duration,
        };
        set.push(AnimationSpec::new(target, duration));
    }
    set
}

fn normalized_bearing_target(host: &dyn AnimationHost, bearing: f64) -> f64 {
    match host.current_value(CameraPropertyKind::Bearing) {
        Some(CameraPropertyValue::Bearing(current)) => normalize_bearing(current, bearing),
        _ => bearing,
    }
}

impl<P: ScreenProjection> StateTransition for NavigationStateTransition<P> {
    fn transition_to_following(
        &self,
        host: &dyn AnimationHost,
        frame: &CameraFrame,
        options: &TransitionOptions,
    ) -> TransitionSet {
        self.state_entry(host, frame, options)
    }

    fn transition_to_overview(
        &self,
        host: &dyn AnimationHost,
        frame: &CameraFrame,
        options: &TransitionOptions,
    ) -> TransitionSet {
        self.state_entry(host, frame, options)
    }

    fn update_frame_for_following(
        &self,
        host: &dyn AnimationHost,
        frame: &CameraFrame,
        options: &TransitionOptions,
    ) -> TransitionSet {
        linear_update(host, frame, options)
    }

    fn update_frame_for_overview(
        &self,
        host: &dyn AnimationHost,
        frame: &CameraFrame,
        options: &TransitionOptions,
    ) -> TransitionSet {
        linear_update(host, frame, options)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Insets, Point};

    use waypost_animate::{AnimationHandle, AnimatorState};
    use waypost_frame::GeoPoint;

    use super::*;

    /// 100 px per degree, so screen distances are easy to reason about.
    struct FlatProjection;

    impl ScreenProjection for FlatProjection {
        fn screen_coordinate(&self, point: GeoPoint) -> Point {
            Point::new(point.longitude * 100.0, -point.latitude * 100.0)
        }
    }

    /// A host that only answers value queries; strategies never mutate it.
    #[derive(Default)]
    struct QueryHost {
        center: Option<GeoPoint>,
        zoom: Option<f64>,
        bearing: Option<f64>,
        in_flight: Vec<AnimatorState>,
    }

    impl AnimationHost for QueryHost {
        fn create(&mut self, _spec: &AnimationSpec) -> Option<AnimationHandle> {
            unreachable!("strategies never create animations")
        }

        fn start(&mut self, _handle: AnimationHandle) {}

        fn cancel(&mut self, _handle: AnimationHandle) {}

        fn current_value(&self, kind: CameraPropertyKind) -> Option<CameraPropertyValue> {
            match kind {
                CameraPropertyKind::Center => self.center.map(CameraPropertyValue::Center),
                CameraPropertyKind::Zoom => self.zoom.map(CameraPropertyValue::Zoom),
                CameraPropertyKind::Bearing => self.bearing.map(CameraPropertyValue::Bearing),
                _ => None,
            }
        }

        fn in_flight(&self, kind: CameraPropertyKind) -> Option<AnimatorState> {
            self.in_flight.iter().find(|s| s.target.kind() == kind).copied()
        }
    }

    fn strategy() -> NavigationStateTransition<FlatProjection> {
        NavigationStateTransition::new(FlatProjection)
    }

    fn spec_for(set: &TransitionSet, kind: CameraPropertyKind) -> AnimationSpec {
        *set.specs()
            .iter()
            .find(|s| s.kind() == kind)
            .unwrap_or_else(|| panic!("no {kind:?} animation in set"))
    }

    fn full_frame() -> CameraFrame {
        CameraFrame::new()
            .with_center(GeoPoint::new(1.0, 0.0))
            .with_zoom(16.0)
            .with_bearing(90.0)
            .with_pitch(45.0)
            .with_padding(Insets::uniform(20.0))
    }

    #[test]
    fn zooming_in_uses_the_fly_choreography() {
        let host = QueryHost {
            center: Some(GeoPoint::new(0.0, 0.0)),
            zoom: Some(10.0),
            bearing: Some(0.0),
            ..QueryHost::default()
        };
        let opts = TransitionOptions::new(Duration::from_millis(10_000));
        let set = strategy().transition_to_following(&host, &full_frame(), &opts);
        assert_eq!(set.len(), 5);

        // Center covers 100 px at 500 px/s -> 200 ms, no delay, first to move.
        let center = spec_for(&set, CameraPropertyKind::Center);
        assert_eq!(center.delay, Duration::ZERO);
        assert_eq!(center.duration, Duration::from_millis(200));
        assert_eq!(center.easing, Easing::SLOW_OUT_SLOW_IN);

        // Zoom starts after half the center duration; 6 levels at 2.2/s.
        let zoom = spec_for(&set, CameraPropertyKind::Zoom);
        assert_eq!(zoom.delay, Duration::from_millis(100));
        assert!((zoom.duration.as_secs_f64() - 6.0 / 2.2).abs() < 1e-9);

        // Bearing, pitch, and padding land last, ending with the zoom tail.
        let zoom_end = zoom.delay + zoom.duration;
        let bearing = spec_for(&set, CameraPropertyKind::Bearing);
        assert_eq!(bearing.duration, Duration::from_millis(1800));
        assert_eq!(
            bearing.delay,
            zoom_end.saturating_sub(Duration::from_millis(1800))
        );
        let pitch = spec_for(&set, CameraPropertyKind::Pitch);
        let padding = spec_for(&set, CameraPropertyKind::Padding);
        assert_eq!(pitch.duration, Duration::from_millis(1200));
        assert_eq!(pitch.delay, padding.delay);
        assert_eq!(
            pitch.delay,
            (zoom_end + Duration::from_millis(100)).saturating_sub(Duration::from_millis(1200))
        );
    }

    #[test]
    fn fly_center_duration_caps_at_three_seconds() {
        let host = QueryHost {
            center: Some(GeoPoint::new(0.0, 0.0)),
            zoom: Some(1.0),
            ..QueryHost::default()
        };
        // 100 degrees -> 10_000 px -> 20 s uncapped.
        let frame = CameraFrame::new()
            .with_center(GeoPoint::new(100.0, 0.0))
            .with_zoom(2.0);
        let opts = TransitionOptions::new(Duration::from_millis(10_000));
        let set = strategy().transition_to_following(&host, &frame, &opts);
        let center = spec_for(&set, CameraPropertyKind::Center);
        assert_eq!(center.duration, Duration::from_millis(3000));
    }

    #[test]
    fn zooming_out_uses_the_settle_choreography() {
        let host = QueryHost {
            center: Some(GeoPoint::new(0.0, 0.0)),
            zoom: Some(16.0),
            bearing: Some(0.0),
            ..QueryHost::default()
        };
        let frame = full_frame().with_zoom(11.0);
        let opts = TransitionOptions::new(Duration::from_millis(10_000));
        let set = strategy().transition_to_overview(&host, &frame, &opts);

        let center = spec_for(&set, CameraPropertyKind::Center);
        assert_eq!(center.delay, Duration::from_millis(800));
        assert_eq!(center.duration, Duration::from_millis(1000));
        let zoom = spec_for(&set, CameraPropertyKind::Zoom);
        assert_eq!(zoom.delay, Duration::ZERO);
        assert_eq!(zoom.duration, Duration::from_millis(1800));
        let bearing = spec_for(&set, CameraPropertyKind::Bearing);
        assert_eq!(bearing.delay, Duration::from_millis(600));
        assert_eq!(bearing.duration, Duration::from_millis(1200));
        assert_eq!(
            spec_for(&set, CameraPropertyKind::Pitch).duration,
            Duration::from_millis(1000)
        );
        assert_eq!(
            spec_for(&set, CameraPropertyKind::Padding).duration,
            Duration::from_millis(1200)
        );
    }

    #[test]
    fn state_entry_respects_the_total_duration_ceiling() {
        let host = QueryHost {
            zoom: Some(16.0),
            bearing: Some(0.0),
            ..QueryHost::default()
        };
        let frame = full_frame().with_zoom(11.0);
        let opts = TransitionOptions::new(Duration::from_millis(900));
        let set = strategy().transition_to_overview(&host, &frame, &opts);
        assert_eq!(set.total_duration(), Duration::from_millis(900));
        // Stagger is preserved: the settle center still starts last.
        let center = spec_for(&set, CameraPropertyKind::Center);
        assert_eq!(center.delay, Duration::from_millis(400));
    }

    #[test]
    fn unknown_current_zoom_settles() {
        let host = QueryHost::default();
        let opts = TransitionOptions::state_default();
        let set = strategy().transition_to_following(&host, &full_frame(), &opts);
        let zoom = spec_for(&set, CameraPropertyKind::Zoom);
        assert_eq!(zoom.duration, Duration::from_millis(1800));
    }

    #[test]
    fn state_entry_bearing_is_normalized() {
        let host = QueryHost {
            zoom: Some(16.0),
            bearing: Some(10.0),
            ..QueryHost::default()
        };
        let frame = CameraFrame::new().with_zoom(11.0).with_bearing(350.0);
        let opts = TransitionOptions::state_default();
        let set = strategy().transition_to_overview(&host, &frame, &opts);
        let bearing = spec_for(&set, CameraPropertyKind::Bearing);
        assert_eq!(bearing.target, CameraPropertyValue::Bearing(-10.0));
    }

    #[test]
    fn empty_frame_builds_an_empty_set() {
        let host = QueryHost::default();
        let opts = TransitionOptions::state_default();
        let entry = strategy().transition_to_following(&host, &CameraFrame::new(), &opts);
        assert!(entry.is_empty());
        let update = strategy().update_frame_for_following(&host, &CameraFrame::new(), &opts);
        assert!(update.is_empty());
    }

    #[test]
    fn linear_update_shares_one_duration_with_no_stagger() {
        let host = QueryHost {
            bearing: Some(0.0),
            ..QueryHost::default()
        };
        let opts = TransitionOptions::frame_default();
        let set = strategy().update_frame_for_following(&host, &full_frame(), &opts);
        assert_eq!(set.len(), 5);
        for spec in set.specs() {
            assert_eq!(spec.delay, Duration::ZERO);
            assert_eq!(spec.duration, Duration::from_millis(1000));
            assert_eq!(spec.easing, Easing::LINEAR);
        }
    }

    #[test]
    fn linear_update_duration_is_overridable() {
        let host = QueryHost::default();
        let opts = TransitionOptions::new(Duration::from_millis(250));
        let frame = CameraFrame::new().with_zoom(14.0);
        let set = strategy().update_frame_for_following(&host, &frame, &opts);
        assert_eq!(set.specs()[0].duration, Duration::from_millis(250));
    }

    #[test]
    fn continuity_reuses_remaining_duration_for_same_target() {
        let host = QueryHost {
            in_flight: vec![AnimatorState {
                target: CameraPropertyValue::Zoom(14.0),
                duration: Duration::from_millis(1000),
                animated_fraction: 0.4,
            }],
            ..QueryHost::default()
        };
        let opts = TransitionOptions::frame_default();
        let frame = CameraFrame::new().with_zoom(14.0);
        let set = strategy().update_frame_for_overview(&host, &frame, &opts);
        let zoom = spec_for(&set, CameraPropertyKind::Zoom);
        assert!((zoom.duration.as_secs_f64() - 0.6).abs() < 1e-9);
    }

    #[test]
    fn continuity_ignores_in_flight_animations_to_other_targets() {
        let host = QueryHost {
            in_flight: vec![AnimatorState {
                target: CameraPropertyValue::Zoom(13.0),
                duration: Duration::from_millis(1000),
                animated_fraction: 0.4,
            }],
            ..QueryHost::default()
        };
        let opts = TransitionOptions::frame_default();
        let frame = CameraFrame::new().with_zoom(14.0);
        let set = strategy().update_frame_for_following(&host, &frame, &opts);
        let zoom = spec_for(&set, CameraPropertyKind::Zoom);
        assert_eq!(zoom.duration, Duration::from_millis(1000));
    }

    #[test]
    fn linear_update_bearing_is_normalized_before_continuity_check() {
        let host = QueryHost {
            bearing: Some(10.0),
            in_flight: vec![AnimatorState {
                target: CameraPropertyValue::Bearing(-10.0),
                duration: Duration::from_millis(1000),
                animated_fraction: 0.5,
            }],
            ..QueryHost::default()
        };
        let opts = TransitionOptions::frame_default();
        let frame = CameraFrame::new().with_bearing(350.0);
        let set = strategy().update_frame_for_following(&host, &frame, &opts);
        let bearing = spec_for(&set, CameraPropertyKind::Bearing);
        assert_eq!(bearing.target, CameraPropertyValue::Bearing(-10.0));
        assert_eq!(bearing.duration, Duration::from_millis(500));
    }
}
