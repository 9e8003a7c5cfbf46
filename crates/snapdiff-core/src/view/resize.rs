//! Column resize controller: pointer drags to bounded width overrides.
//!
//! Idle → Dragging → Idle per column. The gesture's width is a plain value
//! flowing back to the caller; how the surface tracks the pointer (DOM
//! listeners, terminal mouse capture) stays outside this type. Callers must
//! pair every `begin` with a `release` or `cancel` — `cancel_all` exists for
//! mid-drag teardown.

use std::collections::HashMap;

use tracing::trace;

use crate::domain::ColName;

#[derive(Debug, Clone)]
struct Drag {
    /// Pointer x at drag start.
    origin_x: f64,
    /// Column width captured at drag start.
    captured_width: f64,
    /// Upper bound: the column's full natural width.
    cap: f64,
    /// Width produced by the latest move, if any move happened.
    last_candidate: Option<f64>,
}

/// Tracks in-flight resize drags. Drags on different columns are
/// independent and never interact.
#[derive(Debug, Default)]
pub struct ResizeController {
    drags: HashMap<ColName, Drag>,
}

impl ResizeController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idle → Dragging for `col`, capturing the current rendered width and
    /// its cap. A second `begin` on the same column restarts the gesture.
    pub fn begin(&mut self, col: &str, pointer_x: f64, rendered_width: f64, cap: f64) {
        let cap = if cap.is_finite() { cap.max(0.0) } else { 0.0 };
        trace!(col, rendered_width, cap, "resize drag start");
        self.drags.insert(
            col.to_string(),
            Drag {
                origin_x: pointer_x,
                captured_width: clamp_width(rendered_width, cap),
                cap,
                last_candidate: None,
            },
        );
    }

    /// Applies one pointer move. Returns the clamped live width for the
    /// column, or `None` when no drag is active on it. Every move applies
    /// immediately — no debouncing.
    pub fn motion(&mut self, col: &str, pointer_x: f64) -> Option<f64> {
        let drag = self.drags.get_mut(col)?;
        let candidate = drag.captured_width + (pointer_x - drag.origin_x);
        let width = clamp_width(candidate, drag.cap);
        drag.last_candidate = Some(width);
        Some(width)
    }

    /// Dragging → Idle. Returns the width to persist as the column's
    /// override; `None` when the gesture never produced a move (nothing is
    /// committed) or no drag was active.
    pub fn release(&mut self, col: &str) -> Option<f64> {
        let drag = self.drags.remove(col)?;
        trace!(col, committed = ?drag.last_candidate, "resize drag end");
        drag.last_candidate
    }

    /// Abandons an in-flight drag without committing.
    pub fn cancel(&mut self, col: &str) {
        self.drags.remove(col);
    }

    /// Abandons every in-flight drag. For view teardown mid-gesture.
    pub fn cancel_all(&mut self) {
        self.drags.clear();
    }

    pub fn is_dragging(&self, col: &str) -> bool {
        self.drags.contains_key(col)
    }

    /// Live width of an in-flight drag, after at least one move.
    pub fn live_width(&self, col: &str) -> Option<f64> {
        self.drags.get(col).and_then(|d| d.last_candidate)
    }
}

/// Clamp to `[0, cap]`, mapping non-finite input into the range instead of
/// propagating it.
fn clamp_width(w: f64, cap: f64) -> f64 {
    if w.is_nan() {
        return 0.0;
    }
    w.clamp(0.0, cap)
}
