//! Application context: the open database, the loaded cards, navigation,
//! the running quiz (if any) and the best score of this run.
//!
//! Every mutation goes to the database first and then reloads the whole card
//! list, resetting navigation to the first card.

use super::{AnswerOutcome, BestScore, CardColor, Flashcard, Navigation, QuizSession, QuizSummary};
use crate::database::db;
use crate::error::{FlashcardError, Result};
use crate::export::{json, text};
use rusqlite::Connection;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Study,
    Quiz,
}

pub struct StudySession {
    conn: Connection,
    cards: Vec<Flashcard>,
    navigation: Navigation,
    quiz: Option<QuizSession>,
    best: BestScore,
}

impl StudySession {
    /// Loads every stored card and starts in study mode on the first one.
    pub fn open(conn: Connection) -> Result<Self> {
        let cards = db::load_flashcards(&conn)?;
        log::info!("Loaded {} flashcards", cards.len());
        Ok(Self {
            conn,
            cards,
            navigation: Navigation::new(),
            quiz: None,
            best: BestScore::default(),
        })
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn mode(&self) -> Mode {
        if self.quiz.is_some() {
            Mode::Quiz
        } else {
            Mode::Study
        }
    }

    /// Navigation of whichever mode is active.
    pub fn navigation(&self) -> Navigation {
        match &self.quiz {
            Some(quiz) => quiz.navigation,
            None => self.navigation,
        }
    }

    pub fn current_card(&self) -> Option<&Flashcard> {
        self.navigation().current(&self.cards)
    }

    pub fn quiz(&self) -> Option<&QuizSession> {
        self.quiz.as_ref()
    }

    pub fn best_score(&self) -> &BestScore {
        &self.best
    }

    fn refresh(&mut self) -> Result<()> {
        self.cards = db::load_flashcards(&self.conn)?;
        self.navigation.reset();
        if let Some(quiz) = &mut self.quiz {
            quiz.navigation.clamp(self.cards.len());
        }
        Ok(())
    }

    pub fn next(&mut self) -> Result<()> {
        let len = self.cards.len();
        match &mut self.quiz {
            Some(quiz) => quiz.next(len),
            None => self.navigation.next(len),
        }
    }

    pub fn previous(&mut self) -> Result<()> {
        let len = self.cards.len();
        match &mut self.quiz {
            Some(quiz) => quiz.previous(len),
            None => self.navigation.previous(len),
        }
    }

    pub fn flip(&mut self) {
        let len = self.cards.len();
        match &mut self.quiz {
            Some(quiz) => quiz.flip(len),
            None => self.navigation.flip(len),
        }
    }

    /// Adds a card with a random color.
    pub fn add_card(&mut self, question: &str, answer: &str) -> Result<()> {
        let color = CardColor::random(&mut rand::thread_rng());
        db::add_flashcard(question, answer, color, &self.conn)?;
        self.refresh()
    }

    /// Deletes the card on screen. Does nothing when there are no cards.
    pub fn remove_current(&mut self) -> Result<()> {
        let Some(card) = self.current_card().cloned() else {
            return Ok(());
        };
        db::remove_flashcard(&card, &self.conn)?;
        self.refresh()
    }

    pub fn remove_all(&mut self) -> Result<()> {
        db::remove_all(&self.conn)?;
        self.refresh()
    }

    /// "New collection" startup choice: drops whatever was saved before.
    pub fn start_new(&mut self) -> Result<()> {
        log::info!("Starting a new flashcard collection");
        self.remove_all()
    }

    /// Bulk import of `question;answer` lines. A rejected import leaves the
    /// cards and navigation as they were.
    pub fn import_lines<I, S>(&mut self, lines: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let imported = db::bulk_import(lines, &mut self.conn)?;
        self.refresh()?;
        Ok(imported)
    }

    pub fn import_text_file(&mut self, path: &Path) -> Result<usize> {
        let contents = text::read_import_file(path)?;
        self.import_lines(contents.lines())
    }

    pub fn export_json(&self, path: &Path) -> Result<()> {
        json::export_json_to_path(&self.cards, path)
    }

    /// Adds the cards of a JSON export, keeping their colors. Numbers are reassigned.
    pub fn import_json(&mut self, path: &Path) -> Result<usize> {
        let drafts: Vec<_> = json::import_json(path)?
            .into_iter()
            .map(|card| (card.question, card.answer, card.color))
            .collect();
        let imported = db::add_many(&drafts, &mut self.conn)?;
        self.refresh()?;
        Ok(imported)
    }

    pub fn start_quiz(&mut self) -> Result<()> {
        if self.cards.is_empty() {
            return Err(FlashcardError::NoCards);
        }
        log::debug!("Entering quiz mode with {} cards", self.cards.len());
        self.quiz = Some(QuizSession::new());
        Ok(())
    }

    pub fn submit_answer(&mut self, user_text: &str) -> Result<AnswerOutcome> {
        let quiz = self.quiz.as_mut().ok_or(FlashcardError::QuizNotRunning)?;
        quiz.submit_answer(&self.cards, user_text)
    }

    /// Leaves quiz mode, updates the best score and returns to the first card.
    /// Returns `None` when no quiz was running.
    pub fn exit_quiz(&mut self) -> Option<QuizSummary> {
        let summary = self.quiz.take()?.finish();
        if self.best.record(summary) {
            log::info!("New best score: {}/{}", summary.score, summary.total);
        }
        self.navigation.reset();
        Some(summary)
    }
}
