//! Pointer capture state for a single slider.

/// Host-assigned pointer identifier (mouse, pen, or one touch contact).
pub type PointerId = u64;

/// Whether the thumb is currently captured by a pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { pointer_id: PointerId },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// `true` if `pointer_id` owns the current capture.
    pub fn captures(&self, pointer_id: PointerId) -> bool {
        *self == DragState::Dragging { pointer_id }
    }

    /// Capture `pointer_id`. A later pointer replaces an earlier capture.
    pub fn begin(&mut self, pointer_id: PointerId) {
        *self = DragState::Dragging { pointer_id };
    }

    /// Release the capture held by `pointer_id`.
    ///
    /// Returns `true` if this ended a drag. Releases from other pointers
    /// are ignored.
    pub fn release(&mut self, pointer_id: PointerId) -> bool {
        if self.captures(pointer_id) {
            *self = DragState::Idle;
            true
        } else {
            false
        }
    }
}
