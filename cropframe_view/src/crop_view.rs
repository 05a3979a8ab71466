// Copyright 2026 the Cropframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Insets, Point, Rect, Size, Vec2};
use smallvec::SmallVec;

use cropframe_edit_state::reset::ResetWatch;
use cropframe_edit_state::session::{EditSession, EditTransition};
use cropframe_geometry::{
    CropMetrics, ZoomState, apply_image_crop_frame, clamp_content_offset, clamp_crop_box,
    content_bounds, fit_initial_crop_box, image_crop_frame, minimum_zoom_for_crop_box,
    normalize_aspect_ratio, recenter, reshape_for_aspect_ratio, scaled_content_size,
    scroll_insets,
};

use crate::events::CropViewEvent;

/// Headless crop view model.
///
/// `CropView` owns the authoritative state of a scroll-view style cropper:
/// a crop box floating in view coordinates over pannable, zoomable image
/// content. It can be used to:
/// - Fit an image under a crop box, with or without an aspect ratio.
/// - Track live pan and zoom gestures and settle back afterwards.
/// - Read the selection as an image-pixel rectangle and restore it later.
///
/// The model never draws, sleeps, or schedules. An adapter feeds it layout
/// passes, gesture begin/end notifications, live offsets and scales, and a
/// millisecond clock via [`tick`](Self::tick); it reacts by updating state
/// and buffering [`CropViewEvent`]s for the adapter to drain with
/// [`take_events`](Self::take_events) and apply to its presentation.
#[derive(Clone, Debug)]
pub struct CropView {
    metrics: CropMetrics,
    image_size: Size,
    aspect_ratio: Option<Size>,
    view_bounds: Rect,
    region_insets: Insets,
    crop_box: Rect,
    zoom: ZoomState,
    content_offset: Vec2,
    content_size: Size,
    scroll_insets: Insets,
    session: EditSession,
    reset: ResetWatch,
    restore_frame: Option<Rect>,
    initial_setup_performed: bool,
    translucency_visible: bool,
    bottom_image_hidden: bool,
    events: SmallVec<[CropViewEvent; 4]>,
}

impl CropView {
    /// Creates a crop view model for an image of the given pixel size, with
    /// default [`CropMetrics`].
    ///
    /// The image size is immutable afterwards; host a new model to crop a
    /// different image.
    ///
    /// # Panics
    ///
    /// Panics if either side of `image_size` is not positive.
    #[must_use]
    pub fn new(image_size: Size) -> Self {
        Self::with_metrics(image_size, CropMetrics::default())
    }

    /// Creates a crop view model with explicit tuning values.
    ///
    /// # Panics
    ///
    /// Panics if either side of `image_size` is not positive.
    #[must_use]
    pub fn with_metrics(image_size: Size, metrics: CropMetrics) -> Self {
        assert!(
            image_size.width > f64::EPSILON && image_size.height > f64::EPSILON,
            "image size must be positive on both axes"
        );
        Self {
            metrics,
            image_size,
            aspect_ratio: None,
            view_bounds: Rect::ZERO,
            region_insets: Insets::ZERO,
            crop_box: Rect::ZERO,
            zoom: ZoomState::at_minimum(1.0, metrics.maximum_zoom_factor),
            content_offset: Vec2::ZERO,
            content_size: Size::ZERO,
            scroll_insets: Insets::ZERO,
            session: EditSession::default(),
            reset: ResetWatch::new(),
            restore_frame: None,
            initial_setup_performed: false,
            translucency_visible: true,
            bottom_image_hidden: false,
            events: SmallVec::new(),
        }
    }

    /// The image size the model was created with.
    #[must_use]
    pub fn image_size(&self) -> Size {
        self.image_size
    }

    /// The active aspect ratio, if one has been set.
    #[must_use]
    pub fn aspect_ratio(&self) -> Option<Size> {
        self.aspect_ratio
    }

    /// The view bounds from the last [`layout`](Self::layout) call.
    #[must_use]
    pub fn view_bounds(&self) -> Rect {
        self.view_bounds
    }

    /// The content bounds: the view bounds inset by the padding and the
    /// region insets. The crop box always stays inside this rectangle.
    #[must_use]
    pub fn content_bounds(&self) -> Rect {
        content_bounds(self.view_bounds, self.metrics.padding, self.region_insets)
    }

    /// The crop box, in view coordinates.
    #[must_use]
    pub fn crop_box(&self) -> Rect {
        self.crop_box
    }

    /// The zoom scale and its permitted range.
    #[must_use]
    pub fn zoom(&self) -> ZoomState {
        self.zoom
    }

    /// The content offset mapping view coordinates into content space.
    #[must_use]
    pub fn content_offset(&self) -> Vec2 {
        self.content_offset
    }

    /// The zoomed image extent.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Distances from the view bounds to the crop box edges; the scrollable
    /// overshoot region around the content.
    #[must_use]
    pub fn scroll_insets(&self) -> Insets {
        self.scroll_insets
    }

    /// Where the image sits in view coordinates right now.
    #[must_use]
    pub fn image_view_frame(&self) -> Rect {
        Rect::from_origin_size(
            Point::new(-self.content_offset.x, -self.content_offset.y),
            self.content_size,
        )
    }

    /// Returns `true` while a gesture is in flight or pending settle.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.session.is_editing()
    }

    /// Whether resetting to the fitted state would change anything.
    #[must_use]
    pub fn can_reset(&self) -> bool {
        self.reset.can_reset()
    }

    /// Whether the translucency overlay outside the crop box is visible.
    #[must_use]
    pub fn translucency_visible(&self) -> bool {
        self.translucency_visible
    }

    /// Whether the bottom image of the foreground/background pair is
    /// hidden.
    #[must_use]
    pub fn bottom_image_hidden(&self) -> bool {
        self.bottom_image_hidden
    }

    /// Whether the initial fit has run.
    #[must_use]
    pub fn initial_setup_performed(&self) -> bool {
        self.initial_setup_performed
    }

    /// Record a layout pass with the view's current bounds.
    ///
    /// Before the initial setup this only stores the bounds. Afterwards a
    /// bounds change rescales the crop box into the new content bounds and
    /// recenters the content under it, emitting an unanimated
    /// [`CropViewEvent::GeometryChanged`]; layout passes with unchanged
    /// bounds do nothing.
    pub fn layout(&mut self, view_bounds: Rect) {
        if self.view_bounds == view_bounds {
            return;
        }
        self.view_bounds = view_bounds;
        if self.initial_setup_performed {
            self.recenter_content();
            self.events.push(CropViewEvent::GeometryChanged { animated: false });
        }
    }

    /// Run the initial fit once real bounds are available.
    ///
    /// Idempotent: the first call after a layout with non-degenerate bounds
    /// fits the image under the active aspect ratio, captures the reference
    /// state for reset tracking, and replays a crop frame deferred by
    /// [`set_image_crop_frame`](Self::set_image_crop_frame). Further calls
    /// (and calls before any layout) do nothing.
    pub fn perform_initial_setup(&mut self) {
        if self.initial_setup_performed {
            return;
        }
        if self.view_bounds.width() < f64::EPSILON || self.view_bounds.height() < f64::EPSILON {
            return;
        }

        let fit = fit_initial_crop_box(
            self.image_size,
            self.content_bounds(),
            self.aspect_ratio,
            self.metrics.maximum_zoom_factor,
        );
        self.zoom = fit.zoom;
        self.apply_crop_box(fit.crop_box);

        // The sanitizer may have reshaped the box and moved the minimum;
        // rest at whatever the minimum is now.
        self.zoom.current = self.zoom.minimum;
        self.content_size = scaled_content_size(self.image_size, self.zoom.current);
        self.content_offset =
            clamp_content_offset(fit.content_offset, self.crop_box, self.content_size);

        self.reset.rebase(self.content_offset);
        self.initial_setup_performed = true;

        if let Some(frame) = self.restore_frame.take() {
            self.restore_crop_frame(frame);
        }
        self.events.push(CropViewEvent::GeometryChanged { animated: false });
    }

    /// Switch the crop box to a new aspect ratio.
    ///
    /// The ratio is first resolved through [`normalize_aspect_ratio`]: a
    /// ratio degenerate on both axes selects the image's own ratio, and a
    /// ratio degenerate on exactly one axis is ignored. Before setup the
    /// resolved ratio is only recorded for the initial fit.
    ///
    /// After setup the crop box is reshaped in place, keeping the content
    /// under its center; if the current zoom cannot cover the reshaped box
    /// the zoom falls back to the new minimum. The content is then
    /// recentered and a single [`CropViewEvent::GeometryChanged`] carrying
    /// `animated` is emitted.
    pub fn set_aspect_ratio(&mut self, ratio: Size, animated: bool) {
        let normalized = match normalize_aspect_ratio(ratio, self.image_size) {
            Some(size) => size,
            None => return,
        };
        if !self.initial_setup_performed {
            self.aspect_ratio = Some(normalized);
            return;
        }

        let previous = self.aspect_ratio.unwrap_or(self.image_size);
        self.aspect_ratio = Some(normalized);

        let reshape = reshape_for_aspect_ratio(
            self.crop_box,
            self.content_offset,
            normalized,
            previous,
            self.image_size,
            self.content_bounds(),
        );
        self.content_offset = reshape.content_offset;
        self.apply_crop_box(reshape.crop_box);
        if reshape.zoom_out_required {
            self.zoom.current = self.zoom.minimum;
            self.content_size = scaled_content_size(self.image_size, self.zoom.current);
        }
        self.recenter_content();
        self.events.push(CropViewEvent::GeometryChanged { animated });
    }

    /// The current selection as a rectangle in image pixel coordinates.
    ///
    /// Before setup this returns the deferred restore frame, if any, or
    /// [`Rect::ZERO`].
    #[must_use]
    pub fn image_crop_frame(&self) -> Rect {
        if !self.initial_setup_performed {
            return self.restore_frame.unwrap_or(Rect::ZERO);
        }
        image_crop_frame(
            self.crop_box,
            self.content_size,
            self.image_size,
            self.content_offset,
            self.scroll_insets,
        )
    }

    /// Show a previously exported selection again.
    ///
    /// Before setup the frame is deferred and replayed by
    /// [`perform_initial_setup`](Self::perform_initial_setup). Afterwards
    /// the zoom, crop box, and offset are re-derived immediately and an
    /// unanimated [`CropViewEvent::GeometryChanged`] is emitted.
    pub fn set_image_crop_frame(&mut self, frame: Rect) {
        if !self.initial_setup_performed {
            self.restore_frame = Some(frame);
            return;
        }
        self.restore_crop_frame(frame);
        self.events.push(CropViewEvent::GeometryChanged { animated: false });
    }

    /// Reserve extra space inside the view bounds, on top of the padding.
    ///
    /// Takes effect on the next [`layout`](Self::layout) call with changed
    /// bounds, like a safe-area change does.
    pub fn set_region_insets(&mut self, insets: Insets) {
        self.region_insets = insets;
    }

    /// The region insets last set.
    #[must_use]
    pub fn region_insets(&self) -> Insets {
        self.region_insets
    }

    /// Show or hide the bottom image of the foreground/background pair.
    ///
    /// Pure presentation passthrough: geometry queries stay valid while it
    /// toggles. Emits [`CropViewEvent::BottomImageHiddenChanged`] when the
    /// state actually flips.
    pub fn set_bottom_image_hidden(&mut self, hidden: bool, animated: bool) {
        if self.bottom_image_hidden == hidden {
            return;
        }
        self.bottom_image_hidden = hidden;
        self.events
            .push(CropViewEvent::BottomImageHiddenChanged { hidden, animated });
    }

    /// A pan or zoom gesture started.
    ///
    /// Cancels any pending settle, hides the translucency overlay, and
    /// makes the reset affordance available.
    pub fn begin_interaction(&mut self) {
        if self.session.begin() == Some(EditTransition::Began) {
            self.translucency_visible = false;
            self.events.push(CropViewEvent::TranslucencyChanged {
                visible: false,
                animated: true,
            });
        }
        if let Some(can_reset) = self.reset.force_resettable() {
            self.events
                .push(CropViewEvent::ResetAvailabilityChanged { can_reset });
        }
    }

    /// A gesture (including its momentum) finished at `now_ms`.
    ///
    /// Arms the settle timer and re-evaluates reset availability against
    /// the state the gesture left behind.
    pub fn end_interaction(&mut self, now_ms: u64) {
        self.session.end(now_ms);
        if let Some(can_reset) = self.reset.update(self.zoom, self.content_offset) {
            self.events
                .push(CropViewEvent::ResetAvailabilityChanged { can_reset });
        }
    }

    /// Live gesture offset, stored verbatim.
    ///
    /// No clamping: scroll views rubber-band past the ends during a
    /// gesture, and the settle recenter pulls the offset back afterwards.
    pub fn pan_to(&mut self, offset: Vec2) {
        self.content_offset = offset;
    }

    /// Live gesture zoom scale.
    ///
    /// The scale is clamped into the permitted range; the content size
    /// follows it and the offset is re-clamped against the new extent.
    pub fn zoom_to(&mut self, scale: f64) {
        self.zoom.current = self.zoom.clamped(scale);
        self.content_size = scaled_content_size(self.image_size, self.zoom.current);
        self.content_offset =
            clamp_content_offset(self.content_offset, self.crop_box, self.content_size);
    }

    /// Advance the model's clock to `now_ms`.
    ///
    /// When the settle deadline passes, the content recenters through the
    /// sanitizer, the translucency overlay comes back, and reset
    /// availability is re-evaluated, in that order.
    pub fn tick(&mut self, now_ms: u64) {
        if self.session.poll(now_ms) != Some(EditTransition::Settled) {
            return;
        }
        self.recenter_content();
        self.events.push(CropViewEvent::GeometryChanged { animated: true });

        self.translucency_visible = true;
        self.events.push(CropViewEvent::TranslucencyChanged {
            visible: true,
            animated: true,
        });

        if let Some(can_reset) = self.reset.update(self.zoom, self.content_offset) {
            self.events
                .push(CropViewEvent::ResetAvailabilityChanged { can_reset });
        }
    }

    /// Drain the buffered events, oldest first.
    pub fn take_events(&mut self) -> SmallVec<[CropViewEvent; 4]> {
        core::mem::take(&mut self.events)
    }

    /// Returns a snapshot of the full model state.
    #[must_use]
    pub fn debug_info(&self) -> CropViewDebugInfo {
        CropViewDebugInfo {
            image_size: self.image_size,
            aspect_ratio: self.aspect_ratio,
            view_bounds: self.view_bounds,
            region_insets: self.region_insets,
            crop_box: self.crop_box,
            zoom: self.zoom,
            content_offset: self.content_offset,
            content_size: self.content_size,
            scroll_insets: self.scroll_insets,
            editing: self.session.is_editing(),
            settle_deadline: self.session.settle_deadline(),
            can_reset: self.reset.can_reset(),
            translucency_visible: self.translucency_visible,
            bottom_image_hidden: self.bottom_image_hidden,
            initial_setup_performed: self.initial_setup_performed,
        }
    }

    /// Run a proposed crop box through the sanitizer and apply its side
    /// effects: scroll insets, minimum zoom, and content size. A rejected
    /// box leaves everything unchanged.
    fn apply_crop_box(&mut self, proposed: Rect) {
        let crop_box = match clamp_crop_box(
            proposed,
            self.content_bounds(),
            self.metrics.minimum_box_size,
        ) {
            Some(rect) => rect,
            None => return,
        };
        self.crop_box = crop_box;
        self.scroll_insets = scroll_insets(crop_box, self.view_bounds);
        self.zoom
            .set_minimum(minimum_zoom_for_crop_box(crop_box.size(), self.image_size));
        self.content_size = scaled_content_size(self.image_size, self.zoom.current);
    }

    fn recenter_content(&mut self) {
        let done = recenter(
            self.crop_box,
            self.content_bounds(),
            self.content_offset,
            self.content_size,
            self.zoom,
        );
        self.apply_crop_box(done.crop_box);
        // The recenter already clamped where appropriate; re-clamping here
        // would undo the maximum-zoom exemption.
        self.content_offset = done.content_offset;
    }

    fn restore_crop_frame(&mut self, frame: Rect) {
        let restored = apply_image_crop_frame(frame, self.content_bounds(), self.zoom.minimum);
        self.zoom.current = self.zoom.clamped(restored.zoom);
        self.apply_crop_box(restored.crop_box);
        self.content_offset =
            clamp_content_offset(restored.content_offset, self.crop_box, self.content_size);
    }
}

/// Snapshot of a [`CropView`]'s state for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropViewDebugInfo {
    /// Image size the model was created with.
    pub image_size: Size,
    /// Active aspect ratio, if any.
    pub aspect_ratio: Option<Size>,
    /// View bounds from the last layout.
    pub view_bounds: Rect,
    /// Extra insets inside the view bounds.
    pub region_insets: Insets,
    /// Crop box in view coordinates.
    pub crop_box: Rect,
    /// Zoom scale and range.
    pub zoom: ZoomState,
    /// Content offset.
    pub content_offset: Vec2,
    /// Zoomed image extent.
    pub content_size: Size,
    /// Distances from the view bounds to the crop box edges.
    pub scroll_insets: Insets,
    /// Whether a gesture is in flight or pending settle.
    pub editing: bool,
    /// Pending settle deadline in milliseconds, if armed.
    pub settle_deadline: Option<u64>,
    /// Whether the reset affordance is available.
    pub can_reset: bool,
    /// Whether the translucency overlay is visible.
    pub translucency_visible: bool,
    /// Whether the bottom image is hidden.
    pub bottom_image_hidden: bool,
    /// Whether the initial fit has run.
    pub initial_setup_performed: bool,
}
