//! JSON import/export of the whole card collection.
//! Row ids are not written; numbers and colors are.

use crate::error::Result;
use crate::models::Flashcard;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Exports cards to a pretty-printed JSON array at the specified path.
pub fn export_json_to_path(cards: &[Flashcard], path: &Path) -> Result<()> {
    let json_string = serde_json::to_string_pretty(cards)?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;
    log::info!("Exported {} flashcards to '{}'", cards.len(), path.display());
    Ok(())
}

/// Reads cards from a JSON file produced by [`export_json_to_path`].
/// The returned cards have no row id yet.
pub fn import_json(path: &Path) -> Result<Vec<Flashcard>> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let cards: Vec<Flashcard> = serde_json::from_str(&contents)?;
    log::info!("Read {} flashcards from '{}'", cards.len(), path.display());
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlashcardError;
    use crate::models::CardColor;
    use std::fs;

    fn create_test_cards() -> Vec<Flashcard> {
        vec![
            Flashcard {
                id: 7,
                question: "Capital of Czechia?".to_string(),
                answer: "Prague".to_string(),
                number: 1,
                color: CardColor::new(255, 0, 0),
            },
            Flashcard {
                id: 9,
                question: "Capital of France?".to_string(),
                answer: "Paris".to_string(),
                number: 2,
                color: CardColor::new(0, 0, 255),
            },
        ]
    }

    #[test]
    fn test_export_writes_file_without_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cards.json");

        export_json_to_path(&create_test_cards(), &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"question\": \"Capital of Czechia?\""));
        assert!(!written.contains("\"id\""));
    }

    #[test]
    fn test_import_json() {
        let json_content = r#"[
  {
    "question": "test question",
    "answer": "test answer",
    "number": 4,
    "color": { "r": 1, "g": 2, "b": 3 }
  }
]"#;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("import.json");
        fs::write(&path, json_content).unwrap();

        let cards = import_json(&path).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, 0);
        assert_eq!(cards[0].question, "test question");
        assert_eq!(cards[0].number, 4);
        assert_eq!(cards[0].color, CardColor::new(1, 2, 3));
    }

    #[test]
    fn test_import_nonexistent_file() {
        let result = import_json(Path::new("nonexistent_file_xyz123.json"));
        assert!(matches!(result, Err(FlashcardError::Io(_))));
    }

    #[test]
    fn test_import_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("invalid.json");
        fs::write(&path, "{ this is not valid json }").unwrap();

        let result = import_json(&path);
        assert!(matches!(result, Err(FlashcardError::Json(_))));
    }
}
