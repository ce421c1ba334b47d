//! Canonical pointer event: raw host occurrences in, immutable snapshots out.
//!
//! One [`PointerEvent`] is built per raw occurrence, at the boundary callback
//! that receives it, while the occurrence's fields are still valid. The three
//! factories (press / release / motion) share a single assembly routine so
//! the paths cannot drift; the only per-kind differences are how the button
//! and the window point are populated. Tools receive the event by value and
//! query it any number of times within the dispatch turn.

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::input::{Button, ModifierState};
use crate::view::{PointD, PointI, ViewTransformSource};

/// A press or release as delivered by the host, extracted synchronously from
/// the callback's event object.
///
/// `window_point` is the occurrence's own reported point, which the host may
/// compute at a different precision than the raw `x`/`y` pair; it is the
/// authoritative value for [`PointerEvent::window_point`] on this kind, while
/// the raw pair feeds the canvas transform. The two are kept separate on
/// purpose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawButtonOccurrence {
    /// Raw window-space x.
    pub x: f64,
    /// Raw window-space y.
    pub y: f64,
    /// Screen-space x.
    pub root_x: f64,
    /// Screen-space y.
    pub root_y: f64,
    /// Modifier/button bit-set at the time of the occurrence.
    pub state: ModifierState,
    /// Host id of the button pressed or released.
    pub button: u32,
    /// The occurrence's reported window point.
    pub window_point: PointD,
}

/// A motion occurrence as delivered by the host. Motion carries no button
/// transition and no separately reported point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawMotionOccurrence {
    /// Raw window-space x.
    pub x: f64,
    /// Raw window-space y.
    pub y: f64,
    /// Screen-space x.
    pub root_x: f64,
    /// Screen-space y.
    pub root_y: f64,
    /// Modifier/button bit-set at the time of the occurrence.
    pub state: ModifierState,
}

/// An immutable, tool-agnostic pointer event.
///
/// Safe to copy and retain; value equality is its only identity. Every query
/// is a pure function of the stored fields, so repeated calls on the same
/// instance always agree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    state: ModifierState,
    button: Button,
    canvas_point_precise: PointD,
    window_point: PointD,
    root_point: PointD,
}

impl PointerEvent {
    /// Build an event from a button-press occurrence.
    pub fn from_press(view: &impl ViewTransformSource, raw: &RawButtonOccurrence) -> Self {
        Self::from_button(view, raw, "press")
    }

    /// Build an event from a button-release occurrence. Same shape as a
    /// press; `button` is the one being released.
    pub fn from_release(view: &impl ViewTransformSource, raw: &RawButtonOccurrence) -> Self {
        Self::from_button(view, raw, "release")
    }

    /// Build an event from a motion occurrence. `button` is always
    /// [`Button::None`], whatever buttons the bit-set says are held.
    pub fn from_motion(view: &impl ViewTransformSource, raw: &RawMotionOccurrence) -> Self {
        Self::assemble(
            view,
            "motion",
            raw.state,
            Button::None,
            PointD::new(raw.x, raw.y),
            PointD::new(raw.x, raw.y),
            PointD::new(raw.root_x, raw.root_y),
        )
    }

    fn from_button(
        view: &impl ViewTransformSource,
        raw: &RawButtonOccurrence,
        kind: &'static str,
    ) -> Self {
        Self::assemble(
            view,
            kind,
            raw.state,
            Button::from_raw(raw.button),
            PointD::new(raw.x, raw.y),
            raw.window_point,
            PointD::new(raw.root_x, raw.root_y),
        )
    }

    /// The one assembly path all factories go through. Reads the transform
    /// fresh per call; a source whose pan/zoom changed since the previous
    /// event is picked up here, never from a cache.
    fn assemble(
        view: &impl ViewTransformSource,
        kind: &'static str,
        state: ModifierState,
        button: Button,
        raw_window: PointD,
        window_point: PointD,
        root_point: PointD,
    ) -> Self {
        let transform = view.current_view_transform();
        let canvas_point_precise = transform.window_to_canvas(raw_window);
        trace!(
            kind,
            ?button,
            canvas_x = canvas_point_precise.x,
            canvas_y = canvas_point_precise.y,
            "normalized pointer occurrence"
        );
        Self { state, button, canvas_point_precise, window_point, root_point }
    }

    /// The raw modifier/button bit-set, verbatim.
    #[must_use]
    pub fn state(&self) -> ModifierState {
        self.state
    }

    /// The decoded button; [`Button::None`] for motion.
    #[must_use]
    pub fn button(&self) -> Button {
        self.button
    }

    /// Cursor location on the integer canvas pixel grid.
    ///
    /// Always the componentwise floor of [`canvas_point_precise`], recomputed
    /// on access rather than stored.
    ///
    /// [`canvas_point_precise`]: PointerEvent::canvas_point_precise
    #[must_use]
    pub fn canvas_point(&self) -> PointI {
        self.canvas_point_precise.floor()
    }

    /// Cursor location in canvas coordinates, exact transform result. The
    /// authoritative coordinate for subpixel-sensitive tools.
    #[must_use]
    pub fn canvas_point_precise(&self) -> PointD {
        self.canvas_point_precise
    }

    /// Cursor location in window coordinates, untransformed.
    #[must_use]
    pub fn window_point(&self) -> PointD {
        self.window_point
    }

    /// Cursor location in screen coordinates, untransformed.
    #[must_use]
    pub fn root_point(&self) -> PointD {
        self.root_point
    }

    #[must_use]
    pub fn is_alt_pressed(&self) -> bool {
        self.state.is_alt_pressed()
    }

    #[must_use]
    pub fn is_control_pressed(&self) -> bool {
        self.state.is_control_pressed()
    }

    #[must_use]
    pub fn is_shift_pressed(&self) -> bool {
        self.state.is_shift_pressed()
    }

    #[must_use]
    pub fn is_left_mouse_pressed(&self) -> bool {
        self.state.is_left_mouse_pressed()
    }

    #[must_use]
    pub fn is_right_mouse_pressed(&self) -> bool {
        self.state.is_right_mouse_pressed()
    }
}
