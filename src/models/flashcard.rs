//! Flashcard is a question/answer pair with a display number and a background color.
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Background color of a card, stored in the database as `0xRRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl CardColor {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            r: rng.gen_range(0..=255),
            g: rng.gen_range(0..=255),
            b: rng.gen_range(0..=255),
        }
    }

    pub fn to_packed(self) -> i64 {
        ((self.r as i64) << 16) | ((self.g as i64) << 8) | self.b as i64
    }

    pub fn from_packed(value: i64) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Perceived brightness (ITU-R BT.601 luma), 0..=255
    pub fn brightness(self) -> u8 {
        (0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64) as u8
    }

    /// Dark backgrounds get white text, light ones black.
    pub fn is_dark(self) -> bool {
        self.brightness() < 128
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Flashcard {
    /// Row id in the database. Not part of the exported format.
    #[serde(skip)]
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub number: i64,
    pub color: CardColor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flashcard_creation() {
        let card = Flashcard {
            id: 1,
            question: "Capital of Czechia?".to_string(),
            answer: "Prague".to_string(),
            number: 1,
            color: CardColor::new(10, 20, 30),
        };

        assert_eq!(card.question, "Capital of Czechia?");
        assert_eq!(card.answer, "Prague");
        assert_eq!(card.number, 1);
    }

    #[test]
    fn test_color_packing() {
        let color = CardColor::new(0x12, 0xAB, 0xFF);
        assert_eq!(color.to_packed(), 0x12ABFF);
        assert_eq!(CardColor::from_packed(0x12ABFF), color);
    }

    #[test]
    fn test_brightness_threshold() {
        assert!(CardColor::new(0, 0, 0).is_dark());
        assert!(!CardColor::new(255, 255, 255).is_dark());
        // pure blue is dark, pure green is light
        assert!(CardColor::new(0, 0, 255).is_dark());
        assert!(!CardColor::new(0, 255, 0).is_dark());
    }

    #[test]
    fn test_random_color_round_trips_through_storage_format() {
        let mut rng = rand::thread_rng();
        for _ in 0..16 {
            let color = CardColor::random(&mut rng);
            assert_eq!(CardColor::from_packed(color.to_packed()), color);
        }
    }
}
