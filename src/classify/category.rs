// Categories and output labels.
//
// The four scored categories are a closed set. Labels are what ends up in
// the database: two of the categories share a label, and two labels
// ("Others", "NA") don't correspond to any category.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A scored topical category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Terrorism,
    Protest,
    NaturalDisasters,
    PositiveUplifting,
}

impl Category {
    /// Tie-break order: the first category in this list that shares the
    /// top score wins.
    pub const PRIORITY: [Category; 4] = [
        Category::Terrorism,
        Category::Protest,
        Category::NaturalDisasters,
        Category::PositiveUplifting,
    ];

    /// Position of this category in score arrays.
    pub fn index(self) -> usize {
        match self {
            Category::Terrorism => 0,
            Category::Protest => 1,
            Category::NaturalDisasters => 2,
            Category::PositiveUplifting => 3,
        }
    }

    /// The label an article gets when this category wins.
    pub fn label(self) -> Label {
        match self {
            Category::Terrorism | Category::Protest => Label::PoliticalUnrest,
            Category::NaturalDisasters => Label::NaturalDisasters,
            Category::PositiveUplifting => Label::PositiveUplifting,
        }
    }

    /// File name stem of this category's corpus files.
    pub fn corpus_stem(self) -> &'static str {
        match self {
            Category::Terrorism => "Terrorism",
            Category::Protest => "protest",
            Category::NaturalDisasters => "natural disaster",
            Category::PositiveUplifting => "positive",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Terrorism => "Terrorism",
            Category::Protest => "Protest",
            Category::NaturalDisasters => "Natural Disasters",
            Category::PositiveUplifting => "Positive/Uplifting",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The classification result stored with each article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    /// Terrorism or Protest won.
    PoliticalUnrest,
    NaturalDisasters,
    PositiveUplifting,
    /// Scored, but nothing reached the threshold.
    Others,
    /// Nothing to classify (absent or empty text).
    NotApplicable,
}

impl Label {
    pub fn as_str(self) -> &'static str {
        match self {
            Label::PoliticalUnrest => "Terrorism/Protest/PoliticalUnrest/Riot",
            Label::NaturalDisasters => "Natural Disasters",
            Label::PositiveUplifting => "Positive/Uplifting",
            Label::Others => "Others",
            Label::NotApplicable => "NA",
        }
    }

    /// Parse a stored label back. Unknown strings yield `None`.
    pub fn from_stored(s: &str) -> Option<Self> {
        match s {
            "Terrorism/Protest/PoliticalUnrest/Riot" => Some(Label::PoliticalUnrest),
            "Natural Disasters" => Some(Label::NaturalDisasters),
            "Positive/Uplifting" => Some(Label::PositiveUplifting),
            "Others" => Some(Label::Others),
            "NA" => Some(Label::NotApplicable),
            _ => None,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
