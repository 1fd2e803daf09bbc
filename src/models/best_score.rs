//! Highest quiz score reached during the current run. Not persisted.
use super::QuizSummary;
use chrono::{DateTime, Local};

#[derive(Clone, Debug, Default)]
pub struct BestScore {
    pub score: u32,
    pub total: u32,
    pub achieved_at: Option<DateTime<Local>>,
}

impl BestScore {
    /// Replaces the best when `summary` scored strictly more. Returns whether it did.
    pub fn record(&mut self, summary: QuizSummary) -> bool {
        if summary.score > self.score {
            self.score = summary.score;
            self.total = summary.total;
            self.achieved_at = Some(Local::now());
            true
        } else {
            false
        }
    }

    pub fn label(&self) -> String {
        match self.achieved_at {
            Some(at) => format!(
                "Best score: {}/{} (at {})",
                self.score,
                self.total,
                at.format("%H:%M")
            ),
            None => format!("Best score: {}/{}", self.score, self.total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_higher_score_replaces_best() {
        let mut best = BestScore::default();
        assert!(best.record(QuizSummary { score: 2, total: 5 }));
        assert_eq!((best.score, best.total), (2, 5));
        assert!(best.achieved_at.is_some());
    }

    #[test]
    fn test_equal_or_lower_score_is_ignored() {
        let mut best = BestScore::default();
        best.record(QuizSummary { score: 3, total: 4 });

        assert!(!best.record(QuizSummary { score: 3, total: 3 }));
        assert!(!best.record(QuizSummary { score: 1, total: 1 }));
        assert_eq!((best.score, best.total), (3, 4));
    }

    #[test]
    fn test_zero_score_never_recorded() {
        let mut best = BestScore::default();
        assert!(!best.record(QuizSummary { score: 0, total: 4 }));
        assert_eq!(best.label(), "Best score: 0/0");
    }
}
