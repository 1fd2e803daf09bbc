//! Which card is on screen and which face of it is showing.
use super::Flashcard;
use crate::error::{FlashcardError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub current_index: usize,
    pub showing_question: bool,
}

impl Default for Navigation {
    fn default() -> Self {
        Self {
            current_index: 0,
            showing_question: true,
        }
    }
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves to the next card. Fails at the last card without moving.
    pub fn next(&mut self, len: usize) -> Result<()> {
        if len == 0 {
            return Ok(());
        }
        if self.current_index < len - 1 {
            self.current_index += 1;
            self.showing_question = true;
            Ok(())
        } else {
            Err(FlashcardError::NoMoreCards)
        }
    }

    /// Moves to the previous card. Fails at the first card without moving.
    pub fn previous(&mut self, len: usize) -> Result<()> {
        if len == 0 {
            return Ok(());
        }
        if self.current_index > 0 {
            self.current_index -= 1;
            self.showing_question = true;
            Ok(())
        } else {
            Err(FlashcardError::NoMoreCards)
        }
    }

    /// Switches between question and answer. No-op without cards.
    pub fn flip(&mut self, len: usize) {
        if len > 0 {
            self.showing_question = !self.showing_question;
        }
    }

    /// Back to the first card, question side up.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Pulls the index back into range after the card list shrank.
    pub fn clamp(&mut self, len: usize) {
        if self.current_index >= len {
            self.current_index = len.saturating_sub(1);
        }
    }

    pub fn current<'a>(&self, cards: &'a [Flashcard]) -> Option<&'a Flashcard> {
        cards.get(self.current_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CardColor;

    fn cards(n: usize) -> Vec<Flashcard> {
        (0..n)
            .map(|i| Flashcard {
                id: i as i64 + 1,
                question: format!("Q{}", i + 1),
                answer: format!("A{}", i + 1),
                number: i as i64 + 1,
                color: CardColor::new(0, 0, 0),
            })
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let nav = Navigation::new();
        assert_eq!(nav.current_index, 0);
        assert!(nav.showing_question);
    }

    #[test]
    fn test_next_resets_face() {
        let mut nav = Navigation::new();
        nav.flip(3);
        assert!(!nav.showing_question);

        nav.next(3).unwrap();
        assert_eq!(nav.current_index, 1);
        assert!(nav.showing_question);
    }

    #[test]
    fn test_next_at_last_index_fails_and_stays() {
        let mut nav = Navigation::new();
        nav.next(2).unwrap();

        let result = nav.next(2);
        assert!(matches!(result, Err(FlashcardError::NoMoreCards)));
        assert_eq!(nav.current_index, 1);
    }

    #[test]
    fn test_previous_at_first_index_fails_and_stays() {
        let mut nav = Navigation::new();
        let result = nav.previous(2);
        assert!(matches!(result, Err(FlashcardError::NoMoreCards)));
        assert_eq!(nav.current_index, 0);
    }

    #[test]
    fn test_flip_is_involutive() {
        let mut nav = Navigation::new();
        nav.flip(1);
        nav.flip(1);
        assert!(nav.showing_question);
    }

    #[test]
    fn test_empty_store_is_noop() {
        let mut nav = Navigation::new();
        assert!(nav.next(0).is_ok());
        assert!(nav.previous(0).is_ok());
        nav.flip(0);
        assert_eq!(nav, Navigation::new());
        assert!(nav.current(&[]).is_none());
    }

    #[test]
    fn test_current_and_clamp() {
        let deck = cards(3);
        let mut nav = Navigation::new();
        nav.next(3).unwrap();
        nav.next(3).unwrap();
        assert_eq!(nav.current(&deck).unwrap().question, "Q3");

        nav.clamp(2);
        assert_eq!(nav.current_index, 1);
        nav.clamp(0);
        assert_eq!(nav.current_index, 0);
    }
}
