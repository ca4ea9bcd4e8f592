use super::CandidateRecord;
use serde::Serialize;
use std::fmt;

/// One of the two crawl partitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    House,
    Senate,
}

impl Category {
    /// Categories in crawl order
    pub const ALL: [Category; 2] = [Category::House, Category::Senate];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::House => "house",
            Self::Senate => "senate",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Aggregated records of a run, keyed by category
///
/// Serializes as `{"house": [...], "senate": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CrawlResult {
    house: Vec<CandidateRecord>,
    senate: Vec<CandidateRecord>,
}

impl CrawlResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records of one category in crawl order
    pub fn records(&self, category: Category) -> &[CandidateRecord] {
        match category {
            Category::House => &self.house,
            Category::Senate => &self.senate,
        }
    }

    /// Appends records to a category, keeping their order
    pub fn extend(&mut self, category: Category, records: impl IntoIterator<Item = CandidateRecord>) {
        let target = match category {
            Category::House => &mut self.house,
            Category::Senate => &mut self.senate,
        };
        target.extend(records);
    }

    /// Total records across both categories
    pub fn len(&self) -> usize {
        self.house.len() + self.senate.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
