use std::{fmt::Display, str::FromStr};

use crate::Error;

/// A themed list of words to hide in the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Category {
    /// Animal names.
    #[default]
    Animals,
    /// Colour names.
    Colors,
    /// Fruit names.
    Fruits,
    /// Things found at school.
    School,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Category; 4] = [
        Category::Animals,
        Category::Colors,
        Category::Fruits,
        Category::School,
    ];

    /// The category's words, in the order they are drawn for a game.
    pub fn words(self) -> &'static [&'static str] {
        match self {
            Category::Animals => &["GATO", "PERRO", "LEON", "OSO", "PATO", "RANA", "PEZ"],
            Category::Colors => &["ROJO", "AZUL", "VERDE", "ROSA", "NEGRO", "BLANCO"],
            Category::Fruits => &["MANZANA", "PERA", "UVA", "KIWI", "MANGO", "FRESA"],
            Category::School => &["LIBRO", "LAPIZ", "MESA", "SILLA", "TIZA", "BORRADOR"],
        }
    }

    /// The first `count` words of the category.
    pub fn draw(self, count: usize) -> Vec<String> {
        self.words()
            .iter()
            .take(count)
            .map(|word| word.to_string())
            .collect()
    }

    /// A stable identifier, used in record keys and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Category::Animals => "animals",
            Category::Colors => "colors",
            Category::Fruits => "fruits",
            Category::School => "school",
        }
    }

    /// The record store key holding this category's best time.
    pub fn record_key(self) -> String {
        format!("wordsearch_record_{}", self.key())
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownCategory(s.to_owned()))
    }
}
