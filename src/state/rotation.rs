/// Drag-to-rotate controller
///
/// Maps horizontal pointer displacement since the start of a drag to a frame
/// index in a circular frame set. The controller owns the current index and
/// the open drag session, if any.

/// Pixels of horizontal movement per frame step
pub const DEFAULT_SENSITIVITY: f32 = 20.0;

/// Pointer affordance shown over the spinner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Affordance {
    /// Open hand, ready to grab
    #[default]
    Idle,
    /// Closed hand, a drag is in progress
    Dragging,
}

/// State captured when a drag begins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer X at pointer-down
    pub anchor_x: f32,
    /// Frame index at pointer-down
    pub anchor_index: usize,
    /// Most recent pointer X seen during the drag
    pub latest_x: f32,
}

/// Compute the frame index for a drag displacement
///
/// `round(delta_x / sensitivity) mod frame_count` is added to the anchor and
/// the result is normalized into `[0, frame_count)`. Rounding is half-up.
pub fn frame_index(
    anchor_index: usize,
    delta_x: f32,
    sensitivity: f32,
    frame_count: usize,
) -> usize {
    if frame_count == 0 {
        return 0;
    }

    let n = frame_count as i64;
    let steps = (f64::from(delta_x) / f64::from(sensitivity) + 0.5).floor() as i64;
    let raw_delta = steps % n;
    let mut index = (anchor_index as i64 % n + raw_delta) % n;
    if index < 0 {
        index += n;
    }
    index as usize
}

/// Rotation state of one spinner
#[derive(Debug, Clone)]
pub struct RotationController {
    index: usize,
    frame_count: usize,
    sensitivity: f32,
    session: Option<DragSession>,
}

impl RotationController {
    pub fn new(frame_count: usize, sensitivity: f32) -> Self {
        Self {
            index: 0,
            frame_count,
            sensitivity,
            session: None,
        }
    }

    /// Currently displayed frame index, always in `[0, frame_count)`
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn affordance(&self) -> Affordance {
        if self.session.is_some() {
            Affordance::Dragging
        } else {
            Affordance::Idle
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Open a drag session anchored at `screen_x` and the current index
    pub fn begin_drag(&mut self, screen_x: f32) {
        self.session = Some(DragSession {
            anchor_x: screen_x,
            anchor_index: self.index,
            latest_x: screen_x,
        });
    }

    /// Record the latest pointer X without touching the index
    ///
    /// This is the cheap half of a drag update, run straight from the input
    /// event; `apply` is the other half. Returns false when no drag is open.
    pub fn track(&mut self, screen_x: f32) -> bool {
        match self.session.as_mut() {
            Some(session) => {
                session.latest_x = screen_x;
                true
            }
            None => false,
        }
    }

    /// Recompute the index from the session's latest pointer X
    ///
    /// Returns the new index, or None when no drag is open.
    pub fn apply(&mut self) -> Option<usize> {
        let session = self.session?;
        self.index = frame_index(
            session.anchor_index,
            session.latest_x - session.anchor_x,
            self.sensitivity,
            self.frame_count,
        );
        Some(self.index)
    }

    /// Close the drag session. The index is left as is.
    pub fn end_drag(&mut self) {
        self.session = None;
    }

    /// Switch to a frame set of a different length, keeping the index in range
    pub fn set_frame_count(&mut self, frame_count: usize) {
        self.frame_count = frame_count;
        if frame_count == 0 {
            self.index = 0;
        } else {
            self.index %= frame_count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag_to(rotation: &mut RotationController, screen_x: f32) -> Option<usize> {
        if rotation.track(screen_x) {
            rotation.apply()
        } else {
            None
        }
    }

    #[test]
    fn test_zero_delta_keeps_anchor() {
        for n in 1..=40 {
            for anchor in 0..n {
                assert_eq!(frame_index(anchor, 0.0, DEFAULT_SENSITIVITY, n), anchor);
            }
        }
    }

    #[test]
    fn test_index_always_in_range() {
        for n in [1usize, 2, 7, 32] {
            let mut dx = -5000.0;
            while dx <= 5000.0 {
                for anchor in 0..n {
                    let idx = frame_index(anchor, dx, DEFAULT_SENSITIVITY, n);
                    assert!(idx < n, "index {} out of range for n={} dx={}", idx, n, dx);
                }
                dx += 7.5;
            }
        }
    }

    #[test]
    fn test_periodic_in_sensitivity_times_frames() {
        let n = 32;
        let period = DEFAULT_SENSITIVITY * n as f32;
        for dx in [-913.0, -300.0, -10.0, 0.0, 9.0, 10.0, 200.0, 1234.0] {
            for anchor in [0, 5, 31] {
                assert_eq!(
                    frame_index(anchor, dx, DEFAULT_SENSITIVITY, n),
                    frame_index(anchor, dx + period, DEFAULT_SENSITIVITY, n),
                );
            }
        }
    }

    #[test]
    fn test_forward_drag_scenario() {
        assert_eq!(frame_index(0, 200.0, 20.0, 32), 10);
    }

    #[test]
    fn test_backward_drag_scenario() {
        assert_eq!(frame_index(5, -300.0, 20.0, 32), 22);
    }

    #[test]
    fn test_half_step_rounds_up() {
        assert_eq!(frame_index(0, 10.0, 20.0, 32), 1);
        assert_eq!(frame_index(0, -10.0, 20.0, 32), 0);
        assert_eq!(frame_index(0, -11.0, 20.0, 32), 31);
    }

    #[test]
    fn test_empty_frame_set() {
        assert_eq!(frame_index(0, 500.0, 20.0, 0), 0);
    }

    #[test]
    fn test_drag_lifecycle() {
        let mut rotation = RotationController::new(32, DEFAULT_SENSITIVITY);
        assert_eq!(rotation.affordance(), Affordance::Idle);

        rotation.begin_drag(100.0);
        assert_eq!(rotation.affordance(), Affordance::Dragging);
        assert_eq!(drag_to(&mut rotation, 300.0), Some(10));

        rotation.end_drag();
        assert_eq!(rotation.affordance(), Affordance::Idle);
        assert_eq!(rotation.index(), 10);

        // A second drag anchors at the index left by the first one
        rotation.begin_drag(0.0);
        assert_eq!(drag_to(&mut rotation, -300.0), Some(27));
    }

    #[test]
    fn test_moves_without_session_are_ignored() {
        let mut rotation = RotationController::new(32, DEFAULT_SENSITIVITY);
        assert!(!rotation.track(500.0));
        assert_eq!(rotation.apply(), None);
        assert_eq!(drag_to(&mut rotation, 500.0), None);
        assert_eq!(rotation.index(), 0);
    }

    #[test]
    fn test_apply_uses_latest_tracked_position() {
        let mut rotation = RotationController::new(32, DEFAULT_SENSITIVITY);
        rotation.begin_drag(0.0);
        rotation.track(40.0);
        rotation.track(80.0);
        assert_eq!(rotation.apply(), Some(4));
        // A stale follow-up recomputes the same index
        assert_eq!(rotation.apply(), Some(4));
    }

    #[test]
    fn test_frame_count_change_clamps_index() {
        let mut rotation = RotationController::new(32, DEFAULT_SENSITIVITY);
        rotation.begin_drag(0.0);
        drag_to(&mut rotation, 600.0);
        rotation.end_drag();
        assert_eq!(rotation.index(), 30);

        rotation.set_frame_count(8);
        assert_eq!(rotation.index(), 6);
    }
}
