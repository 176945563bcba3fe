//! Favorite books.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{WayfareError, WayfareResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: Uuid,
    pub name: String,
    pub category: FavoriteCategory,
    pub rating: Rating,
    #[serde(default)]
    pub notes: String,
    pub date_added: String,
}

impl Favorite {
    /// Case-insensitive substring match on name or notes.
    /// `term` must already be lower-cased.
    pub(crate) fn matches_term(&self, term: &str) -> bool {
        term.is_empty()
            || self.name.to_lowercase().contains(term)
            || self.notes.to_lowercase().contains(term)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FavoriteCategory {
    Fiction,
    NonFiction,
    Mystery,
    SciFi,
    Fantasy,
    Biography,
    Other,
}

impl FavoriteCategory {
    pub const ALL: [FavoriteCategory; 7] = [
        FavoriteCategory::Fiction,
        FavoriteCategory::NonFiction,
        FavoriteCategory::Mystery,
        FavoriteCategory::SciFi,
        FavoriteCategory::Fantasy,
        FavoriteCategory::Biography,
        FavoriteCategory::Other,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            FavoriteCategory::Fiction => "fiction",
            FavoriteCategory::NonFiction => "non-fiction",
            FavoriteCategory::Mystery => "mystery",
            FavoriteCategory::SciFi => "sci-fi",
            FavoriteCategory::Fantasy => "fantasy",
            FavoriteCategory::Biography => "biography",
            FavoriteCategory::Other => "other",
        }
    }
}

impl fmt::Display for FavoriteCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for FavoriteCategory {
    type Err = WayfareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        FavoriteCategory::ALL
            .into_iter()
            .find(|c| c.key() == wanted)
            .ok_or_else(|| {
                let known: Vec<_> = FavoriteCategory::ALL.iter().map(|c| c.key()).collect();
                WayfareError::Validation(format!(
                    "Unknown category '{}'. Expected one of: {}",
                    s,
                    known.join(", ")
                ))
            })
    }
}

/// Star rating from 1 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> WayfareResult<Self> {
        if (1..=Self::MAX).contains(&value) {
            Ok(Rating(value))
        } else {
            Err(WayfareError::Validation(format!(
                "Rating must be between 1 and {}, got {}",
                Self::MAX,
                value
            )))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// "★★★☆☆" for a rating of 3.
    pub fn stars(&self) -> String {
        let filled = self.0 as usize;
        let empty = (Self::MAX - self.0) as usize;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}

impl TryFrom<u8> for Rating {
    type Error = WayfareError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> u8 {
        rating.0
    }
}

/// Category filter for searching favorites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(FavoriteCategory),
}

impl CategoryFilter {
    pub fn accepts(&self, category: FavoriteCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = WayfareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

/// Input for adding a favorite.
#[derive(Debug, Clone)]
pub struct NewFavorite {
    pub name: String,
    pub category: FavoriteCategory,
    pub rating: u8,
    pub notes: String,
}

impl NewFavorite {
    pub fn new(name: impl Into<String>, category: FavoriteCategory, rating: u8) -> Self {
        NewFavorite {
            name: name.into(),
            category,
            rating,
            notes: String::new(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::new(0).is_err());
        assert!(Rating::new(6).is_err());
        assert_eq!(Rating::new(5).unwrap().value(), 5);
    }

    #[test]
    fn test_stars() {
        assert_eq!(Rating::new(3).unwrap().stars(), "★★★☆☆");
        assert_eq!(Rating::new(5).unwrap().stars(), "★★★★★");
        assert_eq!(Rating::new(1).unwrap().stars(), "★☆☆☆☆");
    }

    #[test]
    fn test_rating_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Rating>("4").is_ok());
        assert!(serde_json::from_str::<Rating>("9").is_err());
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("sci-fi".parse::<FavoriteCategory>().unwrap(), FavoriteCategory::SciFi);
        assert_eq!(
            "Non-Fiction".parse::<FavoriteCategory>().unwrap(),
            FavoriteCategory::NonFiction
        );
        assert!("poetry".parse::<FavoriteCategory>().is_err());
    }

    #[test]
    fn test_category_serde_matches_key() {
        for category in FavoriteCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.key()));
        }
    }

    #[test]
    fn test_category_filter() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        let mystery: CategoryFilter = "mystery".parse().unwrap();
        assert!(mystery.accepts(FavoriteCategory::Mystery));
        assert!(!mystery.accepts(FavoriteCategory::Fantasy));
        assert!(CategoryFilter::All.accepts(FavoriteCategory::Fantasy));
    }
}
