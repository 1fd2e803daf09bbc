//! Quiz pass over the card list with answer checking and a running score.
//! Each card gets one judged attempt until navigation moves to another card.

use super::{Flashcard, Navigation};
use crate::error::{FlashcardError, Result};

/// Result of checking one answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub is_correct: bool,
    pub correct_answer: String,
}

/// Final score reported when the quiz is left.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuizSummary {
    pub score: u32,
    pub total: u32,
}

#[derive(Debug, Default)]
pub struct QuizSession {
    pub navigation: Navigation,
    pub score: u32,
    pub total: u32,
    answered: bool,
}

/// Trimmed, case-insensitive comparison.
pub fn answers_match(user_text: &str, correct_answer: &str) -> bool {
    user_text.trim().to_lowercase() == correct_answer.trim().to_lowercase()
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    pub fn submit_answer(&mut self, cards: &[Flashcard], user_text: &str) -> Result<AnswerOutcome> {
        let card = self
            .navigation
            .current(cards)
            .ok_or(FlashcardError::NoCards)?;
        if self.answered {
            return Err(FlashcardError::AlreadyAnswered);
        }

        let is_correct = answers_match(user_text, &card.answer);
        self.total += 1;
        if is_correct {
            self.score += 1;
        }
        self.answered = true;

        Ok(AnswerOutcome {
            is_correct,
            correct_answer: card.answer.clone(),
        })
    }

    pub fn next(&mut self, len: usize) -> Result<()> {
        self.moved(|nav| nav.next(len))
    }

    pub fn previous(&mut self, len: usize) -> Result<()> {
        self.moved(|nav| nav.previous(len))
    }

    pub fn flip(&mut self, len: usize) {
        self.navigation.flip(len);
    }

    /// Runs a navigation step and unlocks answering if the card changed.
    fn moved(&mut self, step: impl FnOnce(&mut Navigation) -> Result<()>) -> Result<()> {
        let before = self.navigation.current_index;
        step(&mut self.navigation)?;
        if self.navigation.current_index != before {
            self.answered = false;
        }
        Ok(())
    }

    pub fn summary(&self) -> QuizSummary {
        QuizSummary {
            score: self.score,
            total: self.total,
        }
    }

    pub fn finish(self) -> QuizSummary {
        self.summary()
    }
}
