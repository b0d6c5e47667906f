//! Defines the incident categories used for filtering and badge styling.

use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;

/// The fixed set of incident types a report can carry.
///
/// The identifier form (`flood`, `medical_emergency`, ...) is what the tab
/// control and the form's `<select>` use as values. Parsing it is
/// case-insensitive.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Category {
    #[default]
    Flood,
    Earthquake,
    Fire,
    Storm,
    MedicalEmergency,
    Other,
}

impl Category {
    /// Returns the stable lowercase identifier, e.g. `"medical_emergency"`.
    pub fn id(&self) -> &'static str {
        self.into()
    }

    /// Returns the human readable label shown on tabs and in the form.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Flood => "Flood",
            Self::Earthquake => "Earthquake",
            Self::Fire => "Fire",
            Self::Storm => "Storm",
            Self::MedicalEmergency => "Medical Emergency",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category filter: {0}")]
pub struct ParseFilterError(pub String);

/// The selection made in the category tab control.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default, strum::EnumIs)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const ALL_ID: &'static str = "all";

    /// All selectable options, in tab order: `All` first, then every category.
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::iter().map(CategoryFilter::Only))
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::All => Self::ALL_ID,
            Self::Only(category) => category.id(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    /// Whether a report with `category` passes this filter.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(Self::ALL_ID) {
            return Ok(Self::All);
        }
        Category::from_str(trimmed)
            .map(Self::Only)
            .map_err(|_| ParseFilterError(s.to_string()))
    }
}
