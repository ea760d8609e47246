//! Scoring module - line-clear and hard-drop scoring with combo bonus
//!
//! The score accumulates from two sources: hard-drop distance and line
//! clears. Consecutive line-clearing placements form a combo streak; each
//! clear in the streak earns a bonus of half the sum of the earlier clears in
//! that streak. Any non-clearing placement breaks the streak.

use crate::types::{HARD_DROP_CELL_SCORE, LINE_SCORES};

#[derive(Debug, Clone, Default)]
pub struct ScoreTracker {
    score: u32,
    /// Lines cleared by each placement of the current streak, oldest first.
    combo: Vec<usize>,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of consecutive line-clearing placements in the current streak.
    pub fn combo_len(&self) -> usize {
        self.combo.len()
    }

    /// Record a placement that cleared `lines` rows.
    ///
    /// Zero lines breaks the combo streak and scores nothing. Otherwise the
    /// base score comes from the fixed table and the bonus is half the sum of
    /// the streak's prior entries, truncated.
    pub fn on_lines_cleared(&mut self, lines: usize) {
        if lines == 0 {
            self.combo.clear();
            return;
        }
        debug_assert!(lines <= 4, "a placement cannot clear more than 4 rows");
        self.combo.push(lines);

        let base = LINE_SCORES[lines.min(4)];
        let prior: usize = self.combo[..self.combo.len() - 1].iter().sum();
        let bonus = (prior / 2) as u32;
        self.score += base + bonus;
    }

    /// Record a hard drop with the reported (capped) distance.
    ///
    /// The distance formula can go negative for pieces already deep in the
    /// board; the award is clamped at zero so the score never decreases.
    pub fn on_hard_drop(&mut self, distance: i32) {
        self.score += (distance * HARD_DROP_CELL_SCORE).max(0) as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_clear_scores_base() {
        let mut tracker = ScoreTracker::new();
        tracker.on_lines_cleared(1);
        assert_eq!(tracker.score(), 200);
        assert_eq!(tracker.combo_len(), 1);
    }

    #[test]
    fn test_clear_table() {
        for (lines, expected) in [(1, 200), (2, 400), (3, 800), (4, 1200)] {
            let mut tracker = ScoreTracker::new();
            tracker.on_lines_cleared(lines);
            assert_eq!(tracker.score(), expected);
        }
    }

    #[test]
    fn test_combo_bonus_halves_prior_sum() {
        let mut tracker = ScoreTracker::new();
        tracker.on_lines_cleared(1); // 200, prior sum 0
        tracker.on_lines_cleared(4); // 1200 + floor(1/2) = 1200
        assert_eq!(tracker.score(), 1400);

        tracker.on_lines_cleared(2); // 400 + floor((1+4)/2) = 402
        assert_eq!(tracker.score(), 1802);
    }

    #[test]
    fn test_non_clearing_placement_resets_combo() {
        let mut tracker = ScoreTracker::new();
        tracker.on_lines_cleared(2);
        tracker.on_lines_cleared(0);
        assert_eq!(tracker.combo_len(), 0);

        // Fresh streak: no bonus from the old entries.
        let before = tracker.score();
        tracker.on_lines_cleared(1);
        assert_eq!(tracker.score(), before + 200);
    }

    #[test]
    fn test_hard_drop_scoring() {
        let mut tracker = ScoreTracker::new();
        tracker.on_hard_drop(12);
        assert_eq!(tracker.score(), 60);

        // Negative reported distances never reduce the score.
        tracker.on_hard_drop(-9);
        assert_eq!(tracker.score(), 60);
    }
}
