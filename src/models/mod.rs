pub mod best_score;
pub mod flashcard;
pub mod navigation;
pub mod quiz_session;
pub mod study_session;

pub use best_score::BestScore;
pub use flashcard::{CardColor, Flashcard};
pub use navigation::Navigation;
pub use quiz_session::{AnswerOutcome, QuizSession, QuizSummary};
pub use study_session::{Mode, StudySession};
