//! Swipe decoding for pointer input.
//!
//! A press/release pair with enough displacement becomes a direction: the
//! dominant axis picks horizontal vs vertical, the sign picks which way. In
//! the terminal runner this is driven by mouse down/up events, the same
//! shape a touch start/end pair has.

use crate::types::{Direction, SWIPE_THRESHOLD};

/// Classifies press/release pairs into directions
#[derive(Debug, Clone, Default)]
pub struct SwipeDecoder {
    press: Option<(i32, i32)>,
}

impl SwipeDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the press point. A second press overwrites a stale one.
    pub fn press(&mut self, x: i32, y: i32) {
        self.press = Some((x, y));
    }

    /// Record the release point and classify the gesture.
    ///
    /// Returns None without a preceding press, or when the displacement on
    /// both axes stays under the threshold (a tap, not a swipe). The press
    /// point is consumed either way.
    pub fn release(&mut self, x: i32, y: i32) -> Option<Direction> {
        let (px, py) = self.press.take()?;
        let dx = x - px;
        let dy = y - py;

        if dx.abs() < SWIPE_THRESHOLD && dy.abs() < SWIPE_THRESHOLD {
            return None;
        }

        if dx.abs() > dy.abs() {
            Some(if dx > 0 { Direction::Right } else { Direction::Left })
        } else {
            Some(if dy > 0 { Direction::Down } else { Direction::Up })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut sw = SwipeDecoder::new();
        assert_eq!(sw.release(100, 100), None);
    }

    #[test]
    fn test_short_drag_is_a_tap() {
        let mut sw = SwipeDecoder::new();
        sw.press(50, 50);
        assert_eq!(sw.release(50 + SWIPE_THRESHOLD - 1, 50), None);
    }

    #[test]
    fn test_horizontal_swipes() {
        let mut sw = SwipeDecoder::new();
        sw.press(50, 50);
        assert_eq!(sw.release(90, 55), Some(Direction::Right));

        sw.press(50, 50);
        assert_eq!(sw.release(10, 45), Some(Direction::Left));
    }

    #[test]
    fn test_vertical_swipes() {
        let mut sw = SwipeDecoder::new();
        sw.press(50, 50);
        assert_eq!(sw.release(55, 90), Some(Direction::Down));

        sw.press(50, 50);
        assert_eq!(sw.release(45, 10), Some(Direction::Up));
    }

    #[test]
    fn test_dominant_axis_wins_on_diagonal() {
        let mut sw = SwipeDecoder::new();
        sw.press(0, 0);
        // 40 right, 30 down: horizontal wins.
        assert_eq!(sw.release(40, 30), Some(Direction::Right));

        sw.press(0, 0);
        // Tie goes to vertical, matching the release comparison.
        assert_eq!(sw.release(25, 25), Some(Direction::Down));
    }

    #[test]
    fn test_press_is_consumed_by_release() {
        let mut sw = SwipeDecoder::new();
        sw.press(0, 0);
        assert_eq!(sw.release(100, 0), Some(Direction::Right));
        // Gone: a second release classifies nothing.
        assert_eq!(sw.release(200, 0), None);
    }
}
