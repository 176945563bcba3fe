//! General trip ideas, kept in three fixed buckets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{WayfareError, WayfareResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdeaBucket {
    #[serde(rename = "must-see")]
    MustSee,
    #[serde(rename = "food")]
    Food,
    #[serde(rename = "activities")]
    Activities,
}

impl IdeaBucket {
    pub const ALL: [IdeaBucket; 3] = [IdeaBucket::MustSee, IdeaBucket::Food, IdeaBucket::Activities];

    /// Storage key of the bucket.
    pub fn key(&self) -> &'static str {
        match self {
            IdeaBucket::MustSee => "must-see",
            IdeaBucket::Food => "food",
            IdeaBucket::Activities => "activities",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IdeaBucket::MustSee => "Must See",
            IdeaBucket::Food => "Food & Dining",
            IdeaBucket::Activities => "Activities",
        }
    }
}

impl fmt::Display for IdeaBucket {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for IdeaBucket {
    type Err = WayfareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IdeaBucket::ALL
            .into_iter()
            .find(|b| b.key() == s.trim())
            .ok_or_else(|| {
                WayfareError::Validation(format!(
                    "Unknown idea bucket '{}'. Expected one of: must-see, food, activities",
                    s
                ))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Idea {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct NewIdea {
    pub title: String,
    pub description: String,
}

impl NewIdea {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        NewIdea {
            title: title.into(),
            description: description.into(),
        }
    }

    pub(crate) fn into_idea(self, id: i64) -> WayfareResult<Idea> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(WayfareError::Validation("Idea title is required".into()));
        }
        Ok(Idea {
            id,
            title,
            description: self.description.trim().to_string(),
        })
    }
}

/// All three buckets. Serialized as an object with the fixed keys
/// `must-see`, `food` and `activities`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ideas {
    #[serde(rename = "must-see", default)]
    pub must_see: Vec<Idea>,
    #[serde(default)]
    pub food: Vec<Idea>,
    #[serde(default)]
    pub activities: Vec<Idea>,
}

impl Ideas {
    pub fn bucket(&self, bucket: IdeaBucket) -> &[Idea] {
        match bucket {
            IdeaBucket::MustSee => &self.must_see,
            IdeaBucket::Food => &self.food,
            IdeaBucket::Activities => &self.activities,
        }
    }

    pub fn bucket_mut(&mut self, bucket: IdeaBucket) -> &mut Vec<Idea> {
        match bucket {
            IdeaBucket::MustSee => &mut self.must_see,
            IdeaBucket::Food => &mut self.food,
            IdeaBucket::Activities => &mut self.activities,
        }
    }

    pub fn ids(&self) -> impl Iterator<Item = i64> + '_ {
        IdeaBucket::ALL
            .into_iter()
            .flat_map(move |b| self.bucket(b).iter().map(|i| i.id))
    }

    pub fn is_empty(&self) -> bool {
        IdeaBucket::ALL.into_iter().all(|b| self.bucket(b).is_empty())
    }
}

/// Sample content offered on first run.
pub fn default_ideas() -> Vec<(IdeaBucket, NewIdea)> {
    [
        (IdeaBucket::MustSee, "Sagrada Familia", "Gaudí's masterpiece basilica"),
        (IdeaBucket::MustSee, "Park Güell", "Colorful park with amazing views"),
        (IdeaBucket::MustSee, "Las Ramblas", "Famous pedestrian street"),
        (IdeaBucket::Food, "Try authentic paella", "Traditional Spanish rice dish"),
        (IdeaBucket::Food, "Tapas crawl in El Born", "Sample various small plates"),
        (IdeaBucket::Food, "Churros con chocolate", "Sweet breakfast treat"),
        (IdeaBucket::Activities, "Beach day at Barceloneta", "Relax by the Mediterranean"),
        (IdeaBucket::Activities, "Gothic Quarter walking tour", "Explore medieval streets"),
        (IdeaBucket::Activities, "Flamenco show", "Traditional Spanish dance performance"),
    ]
    .into_iter()
    .map(|(bucket, title, description)| (bucket, NewIdea::new(title, description)))
    .collect()
}
