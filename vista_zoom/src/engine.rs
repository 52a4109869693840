// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Affine, Point, Size, Vec2};
use vista_gesture::{ContentFrame, DragDirection, GestureEvent, PanSession, UnitPoint};

use crate::animation::{Easing, Pose, Transition};
use crate::geometry::{anchor_shift, dismiss_opacity};
use crate::{
    Envelope, HapticStyle, Layout, PanRegime, Rebound, Transform, ViewerConfig, ViewerEvent,
};

/// Where the pan side of the engine is.
///
/// Pinches run independently of this and are reported by
/// [`ZoomView::is_pinching`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PanPhase {
    /// Nothing is moving.
    #[default]
    Idle,
    /// A pan session is open.
    Dragging,
    /// A settle or rebound transition is running.
    Settling,
    /// The content is moving out of view; a dismiss follows.
    Dismissing,
}

#[derive(Clone, Copy, Debug)]
struct PinchSession {
    anchor: UnitPoint,
    prior: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Completion {
    Settle,
    Dismiss,
    /// Momentum playing out inside the envelope; the pan is already at rest.
    Glide,
}

#[derive(Clone, Debug)]
struct Animation {
    transition: Transition<Pose>,
    completion: Completion,
}

/// The zoom/pan transform engine for one displayed image.
///
/// `ZoomView` owns the content's displayed size and offset and turns the
/// canonical gesture stream into updates of both:
/// - Pans move the content, with edge resistance past the envelope, or drive
///   the pan-to-dismiss gesture while the content fits the viewport height.
/// - Pinches resize the content around a fixed unit anchor.
/// - Double taps toggle between the fitted and the maximum size.
///
/// Released gestures commit their resting state immediately
/// ([`ZoomView::size`], [`ZoomView::offset`]) and schedule a transition that
/// the host advances with [`ZoomView::tick`]; [`ZoomView::transform`] always
/// reports what should be on screen right now.
///
/// ```
/// use kurbo::{Point, Size, Vec2};
/// use vista_zoom::{ViewerConfig, ViewerEvent, ZoomView};
///
/// let mut view = ZoomView::with_sizes(
///     ViewerConfig::default(),
///     Size::new(400.0, 800.0),
///     Size::new(800.0, 1200.0),
/// );
///
/// // A slow downward drag past 40% of the content height dismisses.
/// view.begin_pan(Point::new(200.0, 400.0));
/// view.update_pan(Vec2::new(0.0, 260.0));
/// assert_eq!(view.opacity(), 0.0);
/// view.end_pan(Vec2::new(0.0, 260.0), Vec2::new(0.0, 260.0));
///
/// view.tick(0);
/// view.tick(200);
/// assert_eq!(view.take_events(), vec![ViewerEvent::DismissRequested]);
/// ```
#[derive(Clone, Debug)]
pub struct ZoomView {
    config: ViewerConfig,
    viewport: Size,
    content: Size,
    layout: Option<Layout>,
    size: Size,
    offset: Vec2,
    drag_offset: Vec2,
    opacity: f64,
    phase: PanPhase,
    session: Option<PanSession>,
    pinch: Option<PinchSession>,
    animation: Option<Animation>,
    clock: u64,
    events: Vec<ViewerEvent>,
}

impl Default for ZoomView {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}

impl ZoomView {
    /// Creates an engine with no viewport or content yet.
    ///
    /// Every gesture is ignored until both sizes are set.
    #[must_use]
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config: config.sanitized(),
            viewport: Size::ZERO,
            content: Size::ZERO,
            layout: None,
            size: Size::ZERO,
            offset: Vec2::ZERO,
            drag_offset: Vec2::ZERO,
            opacity: 1.0,
            phase: PanPhase::Idle,
            session: None,
            pinch: None,
            animation: None,
            clock: 0,
            events: Vec::new(),
        }
    }

    /// Creates an engine showing `content` fitted into `viewport`.
    #[must_use]
    pub fn with_sizes(config: ViewerConfig, viewport: Size, content: Size) -> Self {
        let mut view = Self::new(config);
        view.viewport = viewport;
        view.content = content;
        view.relayout(false);
        view
    }

    /// Returns the sanitized configuration.
    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Replaces the configuration and lays the content out again, keeping
    /// the current zoom scale where it is still allowed.
    pub fn set_config(&mut self, config: ViewerConfig) {
        self.config = config.sanitized();
        self.relayout(true);
    }

    /// Returns the viewport size.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Sets the viewport size, e.g. after a rotation.
    ///
    /// Open gestures and running transitions are dropped. The zoom scale is
    /// kept and the offset clamped into the new envelope.
    pub fn set_viewport(&mut self, viewport: Size) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        self.relayout(true);
    }

    /// Returns the content's intrinsic size.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content
    }

    /// Sets the content's intrinsic size and returns to the fitted size.
    pub fn set_content_size(&mut self, content: Size) {
        if self.content == content {
            return;
        }
        self.content = content;
        self.relayout(false);
    }

    /// Returns to the fitted size and resting offset, dropping any open
    /// gesture or transition.
    pub fn reset(&mut self) {
        self.relayout(false);
    }

    fn relayout(&mut self, keep_scale: bool) {
        let previous_scale = self.layout.map(|l| l.scale_of(self.size));
        self.layout = Layout::new(self.viewport, self.content, &self.config);
        self.session = None;
        self.pinch = None;
        self.animation = None;
        self.drag_offset = Vec2::ZERO;
        self.opacity = 1.0;
        self.phase = PanPhase::Idle;
        let Some(layout) = self.layout else {
            log::debug!(
                "no layout for viewport {:?} and content {:?}",
                self.viewport,
                self.content
            );
            self.size = Size::ZERO;
            self.offset = Vec2::ZERO;
            return;
        };
        let (scale, offset) = match previous_scale {
            Some(scale) if keep_scale => (scale, self.offset),
            _ => (1.0, Vec2::ZERO),
        };
        self.size = layout.size_at(scale);
        self.offset = layout.envelope(self.size).clamp(offset);
        log::debug!(
            "layout: min {:?}, max {:?}, size {:?}",
            layout.min_size(),
            layout.max_size(),
            self.size
        );
    }

    /// Routes one canonical gesture event to the matching operation.
    pub fn handle(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::PanBegan { location } => self.begin_pan(location),
            GestureEvent::PanChanged { translation } => self.update_pan(translation),
            GestureEvent::PanEnded {
                translation,
                predicted,
            } => self.end_pan(translation, predicted),
            GestureEvent::PanCancelled => self.cancel_pan(),
            GestureEvent::PinchBegan { anchor } => self.begin_pinch(anchor),
            GestureEvent::PinchChanged {
                magnification,
                anchor,
            } => {
                self.begin_pinch(anchor);
                self.update_pinch(magnification);
            }
            GestureEvent::PinchEnded => self.end_pinch(),
            GestureEvent::PinchCancelled => self.cancel_pinch(),
            GestureEvent::DoubleTap { point } => self.double_tap(point),
            GestureEvent::SingleTap => self.single_tap(),
        }
    }

    /// Opens a pan session at `location` (viewport coordinates).
    ///
    /// A running settle is interrupted where it currently is. Ignored while
    /// dismissing.
    pub fn begin_pan(&mut self, location: Point) {
        if self.layout.is_none() || self.phase == PanPhase::Dismissing {
            return;
        }
        self.interrupt();
        let anchor = UnitPoint::from_point_in(self.view_to_content(location), self.size);
        self.session = Some(PanSession::new(location, self.clock).with_anchor(anchor));
        self.drag_offset = Vec2::ZERO;
        self.phase = PanPhase::Dragging;
    }

    /// Applies the cumulative pan `translation`.
    pub fn update_pan(&mut self, translation: Vec2) {
        let Some(layout) = self.layout else {
            return;
        };
        if !translation.is_finite() {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let was_locked = session.direction().is_some();
        let Some(direction) = session.update(translation) else {
            return;
        };
        let regime = layout.regime(self.size);
        if !was_locked {
            log::debug!("pan locked {direction:?} in {regime:?} regime");
        }
        let envelope = layout.envelope(self.size);
        let damping = self.config.edge_damping;
        self.drag_offset = match regime {
            PanRegime::SingleAxis => match direction {
                DragDirection::Vertical => {
                    self.opacity = dismiss_opacity(translation.y, self.config.opacity_distance);
                    Vec2::new(0.0, translation.y)
                }
                DragDirection::Horizontal if self.config.paging => {
                    if envelope.is_open_x() {
                        let along = Vec2::new(translation.x, 0.0);
                        Vec2::new(envelope.resist(self.offset, along, damping).x, 0.0)
                    } else {
                        Vec2::ZERO
                    }
                }
                DragDirection::Horizontal => Vec2::new(translation.x * damping, 0.0),
            },
            PanRegime::Free => envelope.resist(self.offset, translation, damping),
        };
        log::trace!("pan {translation:?} -> drag offset {:?}", self.drag_offset);
    }

    /// Closes the pan session.
    ///
    /// `predicted` is where the pan would come to rest with its momentum; it
    /// falls back to `translation` when non-finite. A vertical release
    /// dismisses when its travel from the resting offset exceeds
    /// `dismiss_ratio` of the committed content height.
    pub fn end_pan(&mut self, translation: Vec2, predicted: Vec2) {
        let Some(session) = self.session.take() else {
            return;
        };
        let Some(layout) = self.layout else {
            return;
        };
        let from = self.pose();
        self.drag_offset = Vec2::ZERO;
        self.phase = PanPhase::Idle;
        self.restore_scale(&layout);
        let release = if predicted.is_finite() {
            predicted
        } else if translation.is_finite() {
            translation
        } else {
            session.translation()
        };
        match layout.regime(self.size) {
            PanRegime::SingleAxis => {
                self.release_single_axis(&layout, session.direction(), release, from);
            }
            PanRegime::Free => {
                self.release_free(&layout.envelope(self.size), release, from);
            }
        }
    }

    fn release_single_axis(
        &mut self,
        layout: &Layout,
        direction: Option<DragDirection>,
        release: Vec2,
        from: Pose,
    ) {
        if direction == Some(DragDirection::Vertical)
            && release.y.abs() > self.size.height * self.config.dismiss_ratio
        {
            self.dismiss(from, release.y);
            return;
        }
        let envelope = layout.envelope(self.size);
        let moved = match direction {
            Some(DragDirection::Horizontal) if self.config.paging && !envelope.is_open_x() => {
                self.offset
            }
            Some(direction) => self.offset + direction.project(release),
            None => self.offset,
        };
        self.offset = envelope.clamp(moved);
        self.opacity = 1.0;
        self.settle_to(from, self.config.timings.settle_ms, Easing::EaseOut);
    }

    fn release_free(&mut self, envelope: &Envelope, release: Vec2, from: Pose) {
        let released = self.offset + release;
        self.opacity = 1.0;
        match Rebound::plan(envelope, released, self.config.rebound_curve) {
            None => {
                self.offset = released;
                self.glide_to(from);
            }
            Some(rebound) if self.pinch.is_some() => {
                self.offset = rebound.target();
                self.animation = None;
            }
            Some(rebound) => {
                self.offset = rebound.target();
                self.animation = Some(Animation {
                    transition: rebound.transition(from, &self.config.timings),
                    completion: Completion::Settle,
                });
                self.phase = PanPhase::Settling;
            }
        }
    }

    fn dismiss(&mut self, from: Pose, travel: f64) {
        log::debug!("dismiss: vertical travel {travel:.1}");
        self.offset.y += travel;
        self.opacity = dismiss_opacity(travel, self.config.opacity_distance);
        let to = self.resting_pose();
        self.animation = Some(Animation {
            transition: Transition::new(from).then(
                to,
                self.config.timings.dismiss_ms,
                Easing::EaseOut,
            ),
            completion: Completion::Dismiss,
        });
        self.phase = PanPhase::Dismissing;
    }

    /// Abandons the pan session and settles back into the envelope.
    pub fn cancel_pan(&mut self) {
        if self.session.take().is_none() {
            return;
        }
        let Some(layout) = self.layout else {
            return;
        };
        let from = self.pose();
        self.drag_offset = Vec2::ZERO;
        self.phase = PanPhase::Idle;
        self.restore_scale(&layout);
        self.offset = layout.envelope(self.size).clamp(self.offset);
        self.opacity = 1.0;
        self.settle_to(from, self.config.timings.settle_ms, Easing::EaseOut);
    }

    /// Opens a pinch around `anchor` (content-unit coordinates).
    ///
    /// The anchor is fixed for the whole gesture: calls while a pinch is
    /// already open are ignored.
    pub fn begin_pinch(&mut self, anchor: UnitPoint) {
        if self.layout.is_none() || self.pinch.is_some() || self.phase == PanPhase::Dismissing {
            return;
        }
        self.interrupt();
        let anchor = if anchor.x.is_finite() && anchor.y.is_finite() {
            anchor
        } else {
            UnitPoint::CENTER
        };
        log::debug!("pinch anchored at {anchor:?}");
        self.pinch = Some(PinchSession { anchor, prior: 1.0 });
    }

    /// Applies the cumulative pinch `magnification`.
    ///
    /// Opens a centered pinch if none is open. Ignored while dismissing.
    pub fn update_pinch(&mut self, magnification: f64) {
        let Some(layout) = self.layout else {
            return;
        };
        if !magnification.is_finite() || self.phase == PanPhase::Dismissing {
            return;
        }
        self.begin_pinch(UnitPoint::CENTER);
        let Some(pinch) = self.pinch.as_mut() else {
            return;
        };
        let magnification = magnification.max(0.0);
        let ratio = if pinch.prior > 0.0 {
            magnification / pinch.prior
        } else {
            1.0
        };
        let applied = 1.0 + (ratio - 1.0) * self.config.pinch_damping;
        let floor = layout.min_size() * self.config.min_pinch_ratio;
        let ceiling = layout.max_size();
        let old = self.size;
        let mut new = old * applied;
        if new.width < floor.width {
            new = floor;
        }
        if new.height > ceiling.height {
            new = ceiling;
        }
        self.offset += anchor_shift(old, new, pinch.anchor);
        self.size = new;
        pinch.prior = magnification;
        log::trace!("pinch {magnification:.3} -> size {new:?}");
    }

    /// Closes the pinch.
    ///
    /// At or below the fitted width the content snaps back to the fitted
    /// size and a haptic cue is reported; otherwise the offset settles into
    /// the envelope. Does nothing when no pinch is open.
    pub fn end_pinch(&mut self) {
        if self.pinch.take().is_none() {
            return;
        }
        let Some(layout) = self.layout else {
            return;
        };
        let from = self.pose();
        if self.size.width <= layout.min_size().width {
            log::debug!("pinch released below fitted size; snapping back");
            self.size = layout.min_size();
            self.offset = Vec2::ZERO;
            self.events.push(ViewerEvent::Haptic(HapticStyle::Medium));
            self.settle_to(from, self.config.timings.zoom_ms, Easing::EaseInOut);
        } else {
            self.offset = layout.envelope(self.size).clamp(self.offset);
            self.settle_to(from, self.config.timings.settle_ms, Easing::EaseOut);
        }
    }

    /// Abandons the pinch, returning the size to the allowed range and the
    /// offset into the envelope.
    pub fn cancel_pinch(&mut self) {
        if self.pinch.take().is_none() {
            return;
        }
        let Some(layout) = self.layout else {
            return;
        };
        let from = self.pose();
        self.size = layout.size_at(layout.scale_of(self.size));
        self.offset = layout.envelope(self.size).clamp(self.offset);
        self.settle_to(from, self.config.timings.settle_ms, Easing::EaseOut);
    }

    /// Toggles between the fitted and the maximum size.
    ///
    /// `point` is in content-local coordinates; zooming in keeps it under the
    /// finger as far as the envelope allows. Ignored during a pan or pinch.
    pub fn double_tap(&mut self, point: Point) {
        let Some(layout) = self.layout else {
            return;
        };
        if self.phase == PanPhase::Dragging
            || self.phase == PanPhase::Dismissing
            || self.pinch.is_some()
        {
            return;
        }
        self.interrupt();
        let from = self.pose();
        let min = layout.min_size();
        if self.size.width - min.width > self.config.double_tap_reset_slack {
            log::debug!("double tap: reset to fitted size");
            self.size = min;
            self.offset = Vec2::ZERO;
        } else {
            let max = layout.max_size();
            if max.width <= self.size.width {
                return;
            }
            let Some(anchor) = UnitPoint::from_point_in(point, self.size) else {
                return;
            };
            let anchor = anchor.clamped();
            log::debug!("double tap: zoom in around {anchor:?}");
            let shifted = self.offset + anchor_shift(self.size, max, anchor);
            self.size = max;
            self.offset = layout.envelope(max).clamp(shifted);
        }
        self.opacity = 1.0;
        self.settle_to(from, self.config.timings.zoom_ms, Easing::EaseOut);
    }

    /// Reports a confirmed single tap to the host.
    pub fn single_tap(&mut self) {
        if self.layout.is_some() && self.phase != PanPhase::Dismissing {
            self.events.push(ViewerEvent::Tapped);
        }
    }

    /// Advances the running transition to `now_ms`.
    ///
    /// Completion effects fire exactly once, from the call that finishes the
    /// transition. Returns `true` while a transition is still running.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.clock = self.clock.max(now_ms);
        let Some(animation) = self.animation.as_mut() else {
            return false;
        };
        animation.transition.advance(now_ms);
        if !animation.transition.is_finished() {
            return true;
        }
        let completion = animation.completion;
        self.animation = None;
        self.phase = PanPhase::Idle;
        match completion {
            Completion::Settle => self.events.push(ViewerEvent::Settled),
            Completion::Dismiss => {
                log::debug!("dismiss transition finished");
                self.events.push(ViewerEvent::DismissRequested);
            }
            Completion::Glide => {}
        }
        false
    }

    /// Drains the intents reported since the last call.
    pub fn take_events(&mut self) -> Vec<ViewerEvent> {
        core::mem::take(&mut self.events)
    }

    fn resting_pose(&self) -> Pose {
        Pose {
            size: self.size,
            offset: self.offset,
            opacity: self.opacity,
        }
    }

    fn pose(&self) -> Pose {
        match &self.animation {
            Some(animation) => animation.transition.value(),
            None => Pose {
                offset: self.offset + self.drag_offset,
                ..self.resting_pose()
            },
        }
    }

    /// Stops a running settle at its last sampled pose and commits that pose.
    fn interrupt(&mut self) {
        let Some(animation) = &self.animation else {
            return;
        };
        if animation.completion == Completion::Dismiss {
            return;
        }
        let pose = animation.transition.value();
        log::debug!("settle interrupted at {:?}", pose.offset);
        self.size = pose.size;
        self.offset = pose.offset;
        self.opacity = pose.opacity;
        self.animation = None;
        if self.phase == PanPhase::Settling {
            self.phase = PanPhase::Idle;
        }
    }

    /// Brings a size left outside the resting range by an interrupted
    /// transition back into it. An open pinch owns the size and is left alone.
    fn restore_scale(&mut self, layout: &Layout) {
        if self.pinch.is_some() {
            return;
        }
        let scale = layout.scale_of(self.size);
        if (1.0..=layout.max_scale()).contains(&scale) {
            return;
        }
        let size = layout.size_at(scale);
        log::debug!("size {:?} outside the resting range; using {size:?}", self.size);
        self.size = size;
        self.offset = layout.envelope(size).clamp(self.offset);
    }

    /// Animates from `from` to the committed resting state.
    ///
    /// While a pan or pinch is live the committed state is shown directly,
    /// since the gesture keeps rendering on top of it. A dismiss is never
    /// superseded.
    fn settle_to(&mut self, from: Pose, duration_ms: u64, easing: Easing) {
        if self.phase == PanPhase::Dismissing {
            return;
        }
        if self.phase == PanPhase::Dragging || self.pinch.is_some() {
            self.animation = None;
            return;
        }
        let to = self.resting_pose();
        if from == to {
            self.animation = None;
            self.phase = PanPhase::Idle;
            return;
        }
        self.animation = Some(Animation {
            transition: Transition::new(from).then(to, duration_ms, easing),
            completion: Completion::Settle,
        });
        self.phase = PanPhase::Settling;
    }

    /// Lets an in-bounds release coast to the committed offset.
    ///
    /// No correction runs, so the pan phase stays idle and nothing is
    /// reported when the glide ends.
    fn glide_to(&mut self, from: Pose) {
        let to = self.resting_pose();
        if self.pinch.is_some() || from == to {
            self.animation = None;
            return;
        }
        self.animation = Some(Animation {
            transition: Transition::new(from).then(
                to,
                self.config.timings.settle_ms,
                Easing::Linear,
            ),
            completion: Completion::Glide,
        });
    }

    /// The layout, once both sizes are usable.
    #[must_use]
    pub fn layout(&self) -> Option<Layout> {
        self.layout
    }

    /// Committed content size (the resting size once transitions finish).
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Committed content offset.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// The live drag on top of the committed offset.
    #[must_use]
    pub fn drag_offset(&self) -> Vec2 {
        self.drag_offset
    }

    /// Displayed background opacity.
    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.pose().opacity
    }

    /// Committed zoom scale relative to the fitted size.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.layout.map_or(1.0, |l| l.scale_of(self.size))
    }

    /// Pan phase.
    #[must_use]
    pub fn phase(&self) -> PanPhase {
        self.phase
    }

    /// Returns `true` while a pinch is open.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinch.is_some()
    }

    /// Returns `true` while a transition is scheduled or running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// The open pan session.
    #[must_use]
    pub fn session(&self) -> Option<&PanSession> {
        self.session.as_ref()
    }

    /// The envelope at the committed size.
    #[must_use]
    pub fn envelope(&self) -> Option<Envelope> {
        self.layout.map(|l| l.envelope(self.size))
    }

    /// The pan regime at the committed size.
    #[must_use]
    pub fn regime(&self) -> Option<PanRegime> {
        self.layout.map(|l| l.regime(self.size))
    }

    /// Returns `true` when the content is wider than the viewport and can
    /// scroll horizontally on its own.
    #[must_use]
    pub fn can_pan_horizontally(&self) -> bool {
        self.envelope().is_some_and(|e| e.is_open_x())
    }

    /// Returns `true` when the content is taller than the viewport.
    #[must_use]
    pub fn can_pan_vertically(&self) -> bool {
        self.envelope().is_some_and(|e| e.is_open_y())
    }

    /// What should be on screen right now.
    #[must_use]
    pub fn transform(&self) -> Transform {
        let pose = self.pose();
        let scale = self.layout.map_or(1.0, |l| l.scale_of(pose.size));
        Transform {
            size: pose.size,
            offset: pose.offset,
            scale,
            opacity: pose.opacity,
        }
    }

    /// The affine mapping content pixels into the viewport right now.
    #[must_use]
    pub fn affine(&self) -> Option<Affine> {
        let layout = self.layout?;
        Some(self.transform().to_affine(layout.origin(), layout.content()))
    }

    /// Converts a viewport point into content-local coordinates at the
    /// displayed size.
    #[must_use]
    pub fn view_to_content(&self, point: Point) -> Point {
        let origin = self.layout.map_or(Point::ZERO, |l| l.origin());
        (point - self.transform().position(origin)).to_point()
    }

    /// The displayed frame, as continuous-gesture adapters expect it.
    #[must_use]
    pub fn content_frame(&self) -> ContentFrame {
        let pose = self.pose();
        ContentFrame {
            size: pose.size,
            offset: pose.offset,
        }
    }

    /// Snapshot of the engine state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ZoomViewDebugInfo {
        ZoomViewDebugInfo {
            viewport: self.viewport,
            content: self.content,
            min_size: self.layout.map(|l| l.min_size()),
            max_size: self.layout.map(|l| l.max_size()),
            size: self.size,
            offset: self.offset,
            drag_offset: self.drag_offset,
            opacity: self.opacity,
            phase: self.phase,
            direction: self.session.and_then(|s| s.direction()),
            pinch_anchor: self.pinch.map(|p| p.anchor),
            animating: self.animation.is_some(),
        }
    }
}

/// Debug snapshot of a [`ZoomView`] state.
#[derive(Clone, Copy, Debug)]
pub struct ZoomViewDebugInfo {
    /// Viewport size.
    pub viewport: Size,
    /// Intrinsic content size.
    pub content: Size,
    /// Fitted size, if laid out.
    pub min_size: Option<Size>,
    /// Maximum size, if laid out.
    pub max_size: Option<Size>,
    /// Committed size.
    pub size: Size,
    /// Committed offset.
    pub offset: Vec2,
    /// Live drag offset.
    pub drag_offset: Vec2,
    /// Committed opacity.
    pub opacity: f64,
    /// Pan phase.
    pub phase: PanPhase,
    /// Direction lock of the open pan session.
    pub direction: Option<DragDirection>,
    /// Anchor of the open pinch.
    pub pinch_anchor: Option<UnitPoint>,
    /// Whether a transition is scheduled or running.
    pub animating: bool,
}
