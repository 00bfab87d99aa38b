// Copyright 2026 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use waypost_animate::{AnimationHandle, AnimationHost, TransitionEnd, TransitionSet};
use waypost_frame::{CameraFrame, NavigationCameraState, TransitionOptions, ViewportData};
use waypost_transition::StateTransition;

use crate::source::ViewportDataSource;

/// A one-shot callback invoked when a requested state transition ends.
///
/// The flag on the delivered [`TransitionEnd`] distinguishes a transition
/// that ran to completion from one that was cancelled, for example by a
/// superseding request or [`NavigationCamera::request_idle`].
pub type TransitionEndListener = Box<dyn FnOnce(TransitionEnd)>;

/// Identifies a state observer registered with
/// [`NavigationCamera::subscribe_state_changes`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// A point-in-time snapshot of the camera's bookkeeping, for debugging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CameraDebugInfo {
    /// The current state of the state machine.
    pub state: NavigationCameraState,
    /// `true` while a transition (state entry or frame update) is running.
    pub transition_running: bool,
    /// The steady state a deferred request is waiting to enter, if a request
    /// arrived before the data source produced its first value.
    pub deferred_request: Option<NavigationCameraState>,
    /// `true` once the camera has seen viewport data from its source.
    pub has_viewport_data: bool,
}

/// The steady state a request is heading toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Goal {
    Following,
    Overview,
}

impl Goal {
    fn steady(self) -> NavigationCameraState {
        match self {
            Self::Following => NavigationCameraState::Following,
            Self::Overview => NavigationCameraState::Overview,
        }
    }

    fn transitioning(self) -> NavigationCameraState {
        match self {
            Self::Following => NavigationCameraState::TransitioningToFollowing,
            Self::Overview => NavigationCameraState::TransitioningToOverview,
        }
    }

    fn frame(self, data: &ViewportData) -> CameraFrame {
        match self {
            Self::Following => data.for_following,
            Self::Overview => data.for_overview,
        }
    }
}

enum RunningKind {
    /// A state-entry transition; finishing it lands in `goal` and installs
    /// `frame_options` for subsequent frame updates.
    StateEntry {
        goal: Goal,
        frame_options: TransitionOptions,
        listeners: Vec<TransitionEndListener>,
    },
    /// A per-data-tick frame update within a steady state.
    FrameUpdate,
}

struct Running {
    set: TransitionSet,
    kind: RunningKind,
}

struct Deferred {
    goal: Goal,
    state_options: TransitionOptions,
    frame_options: TransitionOptions,
    listener: Option<TransitionEndListener>,
}

/// The navigation camera: a state machine that orchestrates composed camera
/// transitions between a "following" and an "overview" presentation.
///
/// The camera owns no map, no animation engine, and no data production. It is
/// wired to those at each call site: the [`AnimationHost`] actually animates
/// camera properties, the [`ViewportDataSource`] produces target frames, and
/// a [`StateTransition`] strategy decides how each transition is composed.
/// Everything runs on the single thread making the calls; no call blocks.
///
/// State requests follow a "latest request wins" policy: at most one
/// transition runs at a time, and starting a new one cancels the previous
/// transition first, delivering its end listeners (flagged cancelled) before
/// the new transition begins. While a steady state is engaged, every
/// [`data_updated`](Self::data_updated) call re-targets the camera with a
/// short linear frame update.
///
/// The camera never takes control of the map on its own: until a state is
/// requested it stays [`Idle`](NavigationCameraState::Idle). Conversely,
/// integrations must call [`request_idle`](Self::request_idle) before
/// mutating the camera externally (for example on a gesture), so the camera
/// stops competing for the same properties.
pub struct NavigationCamera<T> {
    transition: T,
    state: NavigationCameraState,
    frame_options: TransitionOptions,
    running: Option<Running>,
    deferred: Option<Deferred>,
    observers: Vec<(ObserverId, Box<dyn FnMut(NavigationCameraState)>)>,
    next_observer_id: u64,
    has_viewport_data: bool,
}

impl<T> core::fmt::Debug for NavigationCamera<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NavigationCamera")
            .field("state", &self.state)
            .field("frame_options", &self.frame_options)
            .field("transition_running", &self.running.is_some())
            .field("deferred", &self.deferred.as_ref().map(|d| d.goal))
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl<T: StateTransition> NavigationCamera<T> {
    /// Creates an idle camera that composes transitions with `transition`.
    #[must_use]
    pub fn new(transition: T) -> Self {
        Self {
            transition,
            state: NavigationCameraState::default(),
            frame_options: TransitionOptions::frame_default(),
            running: None,
            deferred: None,
            observers: Vec::new(),
            next_observer_id: 0,
            has_viewport_data: false,
        }
    }

    /// The current state of the state machine.
    #[must_use]
    pub fn state(&self) -> NavigationCameraState {
        self.state
    }

    /// Registers `observer` for state changes and immediately invokes it with
    /// the current state.
    pub fn subscribe_state_changes(
        &mut self,
        mut observer: impl FnMut(NavigationCameraState) + 'static,
    ) -> ObserverId {
        observer(self.state);
        let id = ObserverId(self.next_observer_id);
        self.next_observer_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes a previously registered observer. Returns `false` if `id` is
    /// unknown.
    pub fn unsubscribe_state_changes(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    /// Requests the following state with default transition options.
    pub fn request_following(
        &mut self,
        host: &mut dyn AnimationHost,
        source: &dyn ViewportDataSource,
    ) {
        self.request_following_with(
            host,
            source,
            TransitionOptions::state_default(),
            TransitionOptions::frame_default(),
            None,
        );
    }

    /// Requests the following state.
    ///
    /// `state_options` bounds the state-entry transition; `frame_options` is
    /// installed once the transition completes and bounds every subsequent
    /// frame update. `listener`, if given, fires exactly once when the entry
    /// transition ends (immediately, with `cancelled = false`, when the
    /// camera is already following).
    pub fn request_following_with(
        &mut self,
        host: &mut dyn AnimationHost,
        source: &dyn ViewportDataSource,
        state_options: TransitionOptions,
        frame_options: TransitionOptions,
        listener: Option<TransitionEndListener>,
    ) {
        self.request_state(
            host,
            source,
            Goal::Following,
            state_options,
            frame_options,
            listener,
        );
    }

    /// Requests the overview state with default transition options.
    pub fn request_overview(
        &mut self,
        host: &mut dyn AnimationHost,
        source: &dyn ViewportDataSource,
    ) {
        self.request_overview_with(
            host,
            source,
            TransitionOptions::state_default(),
            TransitionOptions::frame_default(),
            None,
        );
    }

    /// Requests the overview state; see
    /// [`request_following_with`](Self::request_following_with) for the
    /// parameter semantics.
    pub fn request_overview_with(
        &mut self,
        host: &mut dyn AnimationHost,
        source: &dyn ViewportDataSource,
        state_options: TransitionOptions,
        frame_options: TransitionOptions,
        listener: Option<TransitionEndListener>,
    ) {
        self.request_state(
            host,
            source,
            Goal::Overview,
            state_options,
            frame_options,
            listener,
        );
    }

    /// Releases the camera: cancels any running transition, discards any
    /// deferred request, restores default frame options, and enters
    /// [`Idle`](NavigationCameraState::Idle).
    ///
    /// Synchronous; on return no camera-owned animation is running and
    /// external camera interactions are safe.
    pub fn request_idle(&mut self, host: &mut dyn AnimationHost) {
        self.drop_deferred();
        self.frame_options = TransitionOptions::frame_default();
        self.cancel_running(host);
        self.set_state(NavigationCameraState::Idle);
    }

    /// Snaps the camera to the latest target frame of the engaged steady
    /// state, without animating.
    ///
    /// No-op outside the steady states and while the source has no data.
    pub fn reset_frame(&mut self, host: &mut dyn AnimationHost, source: &dyn ViewportDataSource) {
        let goal = match self.state {
            NavigationCameraState::Following => Goal::Following,
            NavigationCameraState::Overview => Goal::Overview,
            _ => return,
        };
        if let Some(data) = source.viewport_data() {
            self.apply_frame_update(host, goal, &data, true);
        }
    }

    /// Ingress for fresh emissions from the viewport data source.
    ///
    /// In a steady state the new frame is applied as a linear frame update,
    /// superseding any update still in flight. While transitioning or idle
    /// the emission is dropped; the latest value is re-pulled when the
    /// transition settles. The first emission also dispatches a state request
    /// that was deferred for lack of data.
    pub fn data_updated(&mut self, host: &mut dyn AnimationHost, source: &dyn ViewportDataSource) {
        let Some(data) = source.viewport_data() else {
            return;
        };
        self.has_viewport_data = true;
        if let Some(deferred) = self.deferred.take() {
            let listeners = deferred.listener.into_iter().collect();
            self.begin_state_entry(
                host,
                source,
                deferred.goal,
                deferred.goal.frame(&data),
                deferred.state_options,
                deferred.frame_options,
                listeners,
            );
            return;
        }
        if self.state.is_steady() {
            let goal = match self.state {
                NavigationCameraState::Overview => Goal::Overview,
                _ => Goal::Following,
            };
            self.apply_frame_update(host, goal, &data, false);
        }
    }

    /// Ingress for the host's per-animation end notifications.
    ///
    /// The integration forwards every end — finished or cancelled — here.
    /// Handles that do not belong to the currently running transition are
    /// stale (their transition was already superseded or cancelled) and are
    /// ignored. A state-entry transition that the *host* cancels releases
    /// the camera to [`Idle`](NavigationCameraState::Idle), since no
    /// superseding request exists to take over the state.
    pub fn handle_animation_end(
        &mut self,
        host: &mut dyn AnimationHost,
        source: &dyn ViewportDataSource,
        handle: AnimationHandle,
        cancelled: bool,
    ) {
        let end = match &mut self.running {
            Some(running) => match running.set.note_animation_end(handle, cancelled) {
                Some(end) => end,
                None => return,
            },
            None => return,
        };
        if let Some(running) = self.running.take() {
            match running.kind {
                RunningKind::FrameUpdate => {}
                RunningKind::StateEntry {
                    goal,
                    frame_options,
                    listeners,
                } => {
                    self.finish_state_entry(host, source, goal, frame_options, listeners, end);
                }
            }
        }
    }

    /// A snapshot of the camera's bookkeeping, for debugging.
    #[must_use]
    pub fn debug_info(&self) -> CameraDebugInfo {
        CameraDebugInfo {
            state: self.state,
            transition_running: self.running.is_some(),
            deferred_request: self.deferred.as_ref().map(|d| d.goal.steady()),
            has_viewport_data: self.has_viewport_data,
        }
    }

    fn request_state(
        &mut self,
        host: &mut dyn AnimationHost,
        source: &dyn ViewportDataSource,
        goal: Goal,
        state_options: TransitionOptions,
        frame_options: TransitionOptions,
        listener: Option<TransitionEndListener>,
    ) {
        // Already there: no transition, the listener resolves right away.
        if self.state == goal.steady() {
            self.frame_options = frame_options;
            if let Some(listener) = listener {
                listener(TransitionEnd { cancelled: false });
            }
            return;
        }
        // Already heading there: ride the in-flight transition instead of
        // restarting it.
        if self.state == goal.transitioning() {
            if let Some(Running {
                kind:
                    RunningKind::StateEntry {
                        frame_options: pending,
                        listeners,
                        ..
                    },
                ..
            }) = &mut self.running
            {
                *pending = frame_options;
                if let Some(listener) = listener {
                    listeners.push(listener);
                }
            }
            return;
        }
        self.drop_deferred();
        let Some(data) = source.viewport_data() else {
            self.deferred = Some(Deferred {
                goal,
                state_options,
                frame_options,
                listener,
            });
            return;
        };
        self.has_viewport_data = true;
        let listeners = listener.into_iter().collect();
        self.begin_state_entry(
            host,
            source,
            goal,
            goal.frame(&data),
            state_options,
            frame_options,
            listeners,
        );
    }

    fn begin_state_entry(
        &mut self,
        host: &mut dyn AnimationHost,
        source: &dyn ViewportDataSource,
        goal: Goal,
        frame: CameraFrame,
        state_options: TransitionOptions,
        frame_options: TransitionOptions,
        listeners: Vec<TransitionEndListener>,
    ) {
        self.cancel_running(host);
        self.set_state(goal.transitioning());
        let mut set = match goal {
            Goal::Following => self
                .transition
                .transition_to_following(&*host, &frame, &state_options),
            Goal::Overview => self
                .transition
                .transition_to_overview(&*host, &frame, &state_options),
        };
        if let Some(end) = set.start(host) {
            // Nothing to animate; the state is entered instantly.
            self.finish_state_entry(host, source, goal, frame_options, listeners, end);
        } else {
            self.running = Some(Running {
                set,
                kind: RunningKind::StateEntry {
                    goal,
                    frame_options,
                    listeners,
                },
            });
        }
    }

    fn finish_state_entry(
        &mut self,
        host: &mut dyn AnimationHost,
        source: &dyn ViewportDataSource,
        goal: Goal,
        frame_options: TransitionOptions,
        listeners: Vec<TransitionEndListener>,
        end: TransitionEnd,
    ) {
        if end.cancelled {
            // A cancelled end reaches here only through the host (engine
            // failure, or an external cancel that bypassed `request_idle`);
            // superseding requests resolve their listeners synchronously and
            // never get this far. There is no new request to own the state,
            // so release the camera instead of wedging in a transitioning
            // state.
            self.frame_options = TransitionOptions::frame_default();
            self.set_state(NavigationCameraState::Idle);
            for listener in listeners {
                listener(end);
            }
            return;
        }
        self.set_state(goal.steady());
        self.frame_options = frame_options;
        for listener in listeners {
            listener(end);
        }
        // Data that arrived while transitioning was dropped; settle on the
        // latest value now.
        if let Some(data) = source.viewport_data() {
            self.apply_frame_update(host, goal, &data, false);
        }
    }

    fn apply_frame_update(
        &mut self,
        host: &mut dyn AnimationHost,
        goal: Goal,
        data: &ViewportData,
        instant: bool,
    ) {
        let frame = goal.frame(data);
        // Build before cancelling: the continuity rule reads the in-flight
        // animations this update supersedes.
        let mut set = match goal {
            Goal::Following => {
                self.transition
                    .update_frame_for_following(&*host, &frame, &self.frame_options)
            }
            Goal::Overview => {
                self.transition
                    .update_frame_for_overview(&*host, &frame, &self.frame_options)
            }
        };
        if instant {
            set.make_instant();
        }
        self.cancel_running(host);
        if set.start(host).is_none() {
            self.running = Some(Running {
                set,
                kind: RunningKind::FrameUpdate,
            });
        }
    }

    fn cancel_running(&mut self, host: &mut dyn AnimationHost) {
        if let Some(mut running) = self.running.take() {
            let end = running.set.cancel(host);
            if let (
                Some(end),
                RunningKind::StateEntry { listeners, .. },
            ) = (end, running.kind)
            {
                for listener in listeners {
                    listener(end);
                }
            }
        }
    }

    fn drop_deferred(&mut self) {
        if let Some(deferred) = self.deferred.take() {
            if let Some(listener) = deferred.listener {
                listener(TransitionEnd { cancelled: true });
            }
        }
    }

    fn set_state(&mut self, state: NavigationCameraState) {
        if self.state == state {
            return;
        }
        self.state = state;
        for (_, observer) in &mut self.observers {
            observer(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use waypost_animate::AnimationSpec;
    use waypost_frame::{CameraPropertyKind, CameraPropertyValue};

    use super::*;

    /// A strategy that animates nothing, so every transition is instant.
    struct EmptyTransition;

    impl StateTransition for EmptyTransition {
        fn transition_to_following(
            &self,
            _host: &dyn AnimationHost,
            _frame: &CameraFrame,
            _options: &TransitionOptions,
        ) -> TransitionSet {
            TransitionSet::new()
        }

        fn transition_to_overview(
            &self,
            _host: &dyn AnimationHost,
            _frame: &CameraFrame,
            _options: &TransitionOptions,
        ) -> TransitionSet {
            TransitionSet::new()
        }

        fn update_frame_for_following(
            &self,
            _host: &dyn AnimationHost,
            _frame: &CameraFrame,
            _options: &TransitionOptions,
        ) -> TransitionSet {
            TransitionSet::new()
        }

        fn update_frame_for_overview(
            &self,
            _host: &dyn AnimationHost,
            _frame: &CameraFrame,
            _options: &TransitionOptions,
        ) -> TransitionSet {
            TransitionSet::new()
        }
    }

    struct NullHost;

    impl AnimationHost for NullHost {
        fn create(&mut self, _spec: &AnimationSpec) -> Option<AnimationHandle> {
            None
        }

        fn start(&mut self, _handle: AnimationHandle) {}

        fn cancel(&mut self, _handle: AnimationHandle) {}

        fn current_value(&self, _kind: CameraPropertyKind) -> Option<CameraPropertyValue> {
            None
        }

        fn in_flight(&self, _kind: CameraPropertyKind) -> Option<waypost_animate::AnimatorState> {
            None
        }
    }

    struct FixedSource(Option<ViewportData>);

    impl ViewportDataSource for FixedSource {
        fn viewport_data(&self) -> Option<ViewportData> {
            self.0
        }
    }

    #[test]
    fn starts_idle_with_clean_debug_info() {
        let camera = NavigationCamera::new(EmptyTransition);
        assert_eq!(camera.state(), NavigationCameraState::Idle);
        assert_eq!(
            camera.debug_info(),
            CameraDebugInfo {
                state: NavigationCameraState::Idle,
                transition_running: false,
                deferred_request: None,
                has_viewport_data: false,
            }
        );
    }

    #[test]
    fn observers_are_notified_on_subscribe_and_on_change() {
        let mut camera = NavigationCamera::new(EmptyTransition);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = camera.subscribe_state_changes(move |state| sink.borrow_mut().push(state));
        assert_eq!(*seen.borrow(), [NavigationCameraState::Idle]);

        let mut host = NullHost;
        let source = FixedSource(Some(ViewportData::default()));
        camera.request_following(&mut host, &source);
        assert_eq!(
            *seen.borrow(),
            [
                NavigationCameraState::Idle,
                NavigationCameraState::TransitioningToFollowing,
                NavigationCameraState::Following,
            ]
        );

        assert!(camera.unsubscribe_state_changes(id));
        assert!(!camera.unsubscribe_state_changes(id));
        camera.request_idle(&mut host);
        assert_eq!(seen.borrow().len(), 3);
    }

    #[test]
    fn empty_transition_enters_the_state_instantly() {
        let mut camera = NavigationCamera::new(EmptyTransition);
        let mut host = NullHost;
        let source = FixedSource(Some(ViewportData::default()));
        let ended = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&ended);
        camera.request_overview_with(
            &mut host,
            &source,
            TransitionOptions::state_default(),
            TransitionOptions::frame_default(),
            Some(Box::new(move |end| *sink.borrow_mut() = Some(end))),
        );
        assert_eq!(camera.state(), NavigationCameraState::Overview);
        assert_eq!(*ended.borrow(), Some(TransitionEnd { cancelled: false }));
        assert!(!camera.debug_info().transition_running);
    }

    #[test]
    fn request_without_data_defers_and_idle_discards_it() {
        let mut camera = NavigationCamera::new(EmptyTransition);
        let mut host = NullHost;
        let source = FixedSource(None);
        let ended = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&ended);
        camera.request_following_with(
            &mut host,
            &source,
            TransitionOptions::state_default(),
            TransitionOptions::frame_default(),
            Some(Box::new(move |end| *sink.borrow_mut() = Some(end))),
        );
        assert_eq!(camera.state(), NavigationCameraState::Idle);
        assert_eq!(
            camera.debug_info().deferred_request,
            Some(NavigationCameraState::Following)
        );
        assert_eq!(*ended.borrow(), None);

        camera.request_idle(&mut host);
        assert_eq!(camera.debug_info().deferred_request, None);
        assert_eq!(*ended.borrow(), Some(TransitionEnd { cancelled: true }));
    }

    #[test]
    fn most_recent_deferred_request_wins() {
        let mut camera = NavigationCamera::new(EmptyTransition);
        let mut host = NullHost;
        let mut source = FixedSource(None);
        camera.request_following(&mut host, &source);
        camera.request_overview(&mut host, &source);
        assert_eq!(
            camera.debug_info().deferred_request,
            Some(NavigationCameraState::Overview)
        );

        source.0 = Some(ViewportData::default());
        camera.data_updated(&mut host, &source);
        assert_eq!(camera.state(), NavigationCameraState::Overview);
        assert_eq!(camera.debug_info().deferred_request, None);
        assert!(camera.debug_info().has_viewport_data);
    }
}
