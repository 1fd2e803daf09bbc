//! Database operations for flashcard application
//!
//! Handles SQLite database initialization and the flashcard CRUD operations.
//! Every read is a full scan in insertion order; callers reload after each mutation.

use crate::error::{FlashcardError, Result};
use crate::export::text::parse_records;
use crate::models::{CardColor, Flashcard};
use rusqlite::{Connection, params};
use std::path::Path;

/// Database file used when no `--db` option is given
pub const DEFAULT_DB_PATH: &str = "db.sqlite3";

/// Opens (or creates) the SQLite database at `path` and ensures the schema exists
///
/// Any failure here is reported as `StorageUnavailable`, there is no in-memory fallback.
pub fn init_database(path: &Path) -> Result<Connection> {
    let unavailable = |source: rusqlite::Error| FlashcardError::StorageUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let conn = Connection::open(path).map_err(unavailable)?;
    create_schema(&conn).map_err(unavailable)?;

    log::info!("Opened flashcard database at {}", path.display());
    Ok(conn)
}

/// In-memory database with the same schema
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    create_schema(&conn)?;
    Ok(conn)
}

fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS flashcards (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            number INTEGER NOT NULL,
            color INTEGER NOT NULL
        )",
        (),
    )?;
    Ok(())
}

/// Trims both fields and rejects empty ones
fn validate<'a>(question: &'a str, answer: &'a str) -> Result<(&'a str, &'a str)> {
    let question = question.trim();
    let answer = answer.trim();
    if question.is_empty() {
        return Err(FlashcardError::validation("question must not be empty"));
    }
    if answer.is_empty() {
        return Err(FlashcardError::validation("answer must not be empty"));
    }
    Ok((question, answer))
}

fn insert_flashcard(
    conn: &Connection,
    question: &str,
    answer: &str,
    number: i64,
    color: CardColor,
) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO flashcards (question, answer, number, color) VALUES (?1, ?2, ?3, ?4)",
        params![question, answer, number, color.to_packed()],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Counts stored flashcards; new cards are numbered after this count
pub fn count_flashcards(conn: &Connection) -> Result<i64> {
    let count = conn.query_row("SELECT COUNT(*) FROM flashcards", [], |row| row.get(0))?;
    Ok(count)
}

/// Adds a flashcard numbered `count + 1`
///
/// Returns the row id. The in-memory card list is not touched; reload with
/// [`load_flashcards`] afterwards.
pub fn add_flashcard(
    question: &str,
    answer: &str,
    color: CardColor,
    conn: &Connection,
) -> Result<i64> {
    let (question, answer) = validate(question, answer)?;
    let number = count_flashcards(conn)? + 1;
    let id = insert_flashcard(conn, question, answer, number, color)?;

    log::debug!("Added flashcard #{} (row {})", number, id);
    Ok(id)
}

/// Deletes the row backing `card`. Deleting a card that is already gone is a no-op.
pub fn remove_flashcard(card: &Flashcard, conn: &Connection) -> Result<()> {
    let deleted = conn.execute("DELETE FROM flashcards WHERE id = ?1", params![card.id])?;
    if deleted == 0 {
        log::debug!("Flashcard row {} was already removed", card.id);
    } else {
        log::info!("Removed flashcard #{}", card.number);
    }
    Ok(())
}

/// Deletes every flashcard. Callers reload and go back to the first card.
pub fn remove_all(conn: &Connection) -> Result<()> {
    let deleted = conn.execute("DELETE FROM flashcards", ())?;
    log::info!("Removed all {} flashcards", deleted);
    Ok(())
}

/// Retrieves all flashcards in insertion order
pub fn load_flashcards(conn: &Connection) -> Result<Vec<Flashcard>> {
    let mut stmt =
        conn.prepare("SELECT id, question, answer, number, color FROM flashcards ORDER BY id")?;

    let flashcards = stmt
        .query_map([], |row| {
            Ok(Flashcard {
                id: row.get(0)?,
                question: row.get(1)?,
                answer: row.get(2)?,
                number: row.get(3)?,
                color: CardColor::from_packed(row.get(4)?),
            })
        })?
        .collect::<rusqlite::Result<Vec<Flashcard>>>()?;

    Ok(flashcards)
}

/// Imports `question;answer` lines
///
/// All lines are parsed before anything is written, so a bad line leaves the
/// store untouched. Returns the number of imported cards.
pub fn bulk_import<I, S>(lines: I, conn: &mut Connection) -> Result<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let records = parse_records(lines)?;
    let mut rng = rand::thread_rng();
    let mut drafts = Vec::with_capacity(records.len());
    for record in records {
        validate(&record.question, &record.answer).map_err(|err| match err {
            FlashcardError::Validation(msg) => {
                FlashcardError::Validation(format!("line {}: {}", record.line, msg))
            }
            other => other,
        })?;
        drafts.push((record.question, record.answer, CardColor::random(&mut rng)));
    }

    add_many(&drafts, conn)
}

/// Adds several cards in one transaction, numbered after the existing ones
///
/// Either every card is stored or none is.
pub fn add_many(cards: &[(String, String, CardColor)], conn: &mut Connection) -> Result<usize> {
    let mut valid = Vec::with_capacity(cards.len());
    for (question, answer, color) in cards {
        let (question, answer) = validate(question, answer)?;
        valid.push((question, answer, *color));
    }

    let tx = conn.transaction()?;
    let mut number = count_flashcards(&tx)?;
    for (question, answer, color) in &valid {
        number += 1;
        insert_flashcard(&tx, question, answer, number, *color)?;
    }
    tx.commit()?;

    log::info!("Imported {} flashcards", valid.len());
    Ok(valid.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray() -> CardColor {
        CardColor::new(128, 128, 128)
    }

    #[test]
    fn test_add_then_load() {
        let conn = open_in_memory().unwrap();
        add_flashcard("Capital of Czechia?", "Prague", gray(), &conn).unwrap();
        add_flashcard("  Capital of France? ", " Paris ", gray(), &conn).unwrap();

        let cards = load_flashcards(&conn).unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].question, "Capital of Czechia?");
        assert_eq!(cards[0].number, 1);
        assert_eq!(cards[1].question, "Capital of France?");
        assert_eq!(cards[1].answer, "Paris");
        assert_eq!(cards[1].number, 2);
        assert_eq!(cards[1].color, gray());
    }

    #[test]
    fn test_add_rejects_empty_fields() {
        let conn = open_in_memory().unwrap();
        let result = add_flashcard("   ", "answer", gray(), &conn);
        assert!(matches!(result, Err(FlashcardError::Validation(_))));
        let result = add_flashcard("question", "", gray(), &conn);
        assert!(matches!(result, Err(FlashcardError::Validation(_))));

        assert!(load_flashcards(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let conn = open_in_memory().unwrap();
        add_flashcard("Q1", "A1", gray(), &conn).unwrap();
        add_flashcard("Q2", "A2", gray(), &conn).unwrap();

        let cards = load_flashcards(&conn).unwrap();
        remove_flashcard(&cards[0], &conn).unwrap();
        remove_flashcard(&cards[0], &conn).unwrap();

        let remaining = load_flashcards(&conn).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].question, "Q2");
    }

    #[test]
    fn test_numbers_can_repeat_after_deletion() {
        let conn = open_in_memory().unwrap();
        add_flashcard("Q1", "A1", gray(), &conn).unwrap();
        add_flashcard("Q2", "A2", gray(), &conn).unwrap();
        let first = load_flashcards(&conn).unwrap().remove(0);
        remove_flashcard(&first, &conn).unwrap();

        add_flashcard("Q3", "A3", gray(), &conn).unwrap();
        let numbers: Vec<i64> = load_flashcards(&conn)
            .unwrap()
            .iter()
            .map(|c| c.number)
            .collect();
        assert_eq!(numbers, vec![2, 2]);
    }

    #[test]
    fn test_remove_all() {
        let conn = open_in_memory().unwrap();
        add_flashcard("Q1", "A1", gray(), &conn).unwrap();
        remove_all(&conn).unwrap();
        assert!(load_flashcards(&conn).unwrap().is_empty());
        assert_eq!(count_flashcards(&conn).unwrap(), 0);
    }

    #[test]
    fn test_bulk_import_numbers_follow_existing_cards() {
        let mut conn = open_in_memory().unwrap();
        add_flashcard("Existing", "Card", gray(), &conn).unwrap();

        let imported = bulk_import("Q1;A1\nQ2 ; A2\n".lines(), &mut conn).unwrap();
        assert_eq!(imported, 2);

        let cards = load_flashcards(&conn).unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[2].question, "Q2");
        assert_eq!(cards[2].answer, "A2");
        assert_eq!(cards[2].number, 3);
    }

    #[test]
    fn test_bulk_import_malformed_line_commits_nothing() {
        let mut conn = open_in_memory().unwrap();
        let result = bulk_import("Q1;A1\nQ2;A2\nbadline\n".lines(), &mut conn);

        match result {
            Err(FlashcardError::MalformedRecord { line, content }) => {
                assert_eq!(line, 3);
                assert_eq!(content, "badline");
            }
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
        assert!(load_flashcards(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_bulk_import_empty_field_is_validation_error() {
        let mut conn = open_in_memory().unwrap();
        let result = bulk_import(["Q1;A1", "Q2;  "], &mut conn);
        assert!(matches!(result, Err(FlashcardError::Validation(_))));
        assert!(load_flashcards(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_add_many_rejects_whole_batch() {
        let mut conn = open_in_memory().unwrap();
        let batch = vec![
            ("Q1".to_string(), "A1".to_string(), gray()),
            ("".to_string(), "A2".to_string(), gray()),
        ];
        assert!(add_many(&batch, &mut conn).is_err());
        assert_eq!(count_flashcards(&conn).unwrap(), 0);
    }

    #[test]
    fn test_init_database_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cards.sqlite3");

        let conn = init_database(&path).unwrap();
        add_flashcard("Q", "A", gray(), &conn).unwrap();
        drop(conn);

        let reopened = init_database(&path).unwrap();
        assert_eq!(load_flashcards(&reopened).unwrap().len(), 1);
    }

    #[test]
    fn test_init_database_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("cards.sqlite3");

        let result = init_database(&path);
        assert!(matches!(
            result,
            Err(FlashcardError::StorageUnavailable { .. })
        ));
    }
}
