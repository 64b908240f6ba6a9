use std::cmp::Ordering;
use std::path::Path;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::OxalateError;
use crate::food::{FoodItem, RawFoodItem};

#[derive(Debug, Deserialize)]
struct OxalateFile {
    #[serde(default)]
    food_data: Vec<RawFoodItem>,
}

/// Column to order search results by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SortField {
    #[default]
    Food,
    Type,
    OxalateMg,
    ServingSize,
    OxalateLevel,
}

impl SortField {
    /// Parse a sort column name; unrecognised names sort by food.
    pub fn parse_or_default(name: &str) -> Self {
        match name {
            "type" => SortField::Type,
            "oxalate_mg" => SortField::OxalateMg,
            "serving_size" => SortField::ServingSize,
            "oxalate_level" => SortField::OxalateLevel,
            _ => SortField::Food,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Anything other than "asc" sorts descending.
    pub fn parse_or_desc(name: &str) -> Self {
        match name {
            "asc" => SortDirection::Asc,
            _ => SortDirection::Desc,
        }
    }
}

/// Edit distance under which a misspelt term still matches.
pub const MAX_TYPO_DISTANCE: usize = 2;

/// In-memory food oxalate table.
#[derive(Debug, Clone, Default)]
pub struct OxalateTable {
    items: Vec<FoodItem>,
}

impl OxalateTable {
    /// Parse a `{"food_data": [...]}` document.
    pub fn from_json_str(json: &str) -> Result<Self, OxalateError> {
        let file: OxalateFile = serde_json::from_str(json)?;
        let items: Vec<FoodItem> = file
            .food_data
            .into_iter()
            .map(RawFoodItem::into_item)
            .collect();
        tracing::debug!(items = items.len(), "parsed oxalate table");
        Ok(Self { items })
    }

    pub fn from_path(path: &Path) -> Result<Self, OxalateError> {
        let json = std::fs::read_to_string(path).map_err(|source| OxalateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), items = table.len(), "loaded oxalate table");
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// Case-insensitive substring search over food name and category.
    /// A blank term returns the whole table. When nothing contains the term,
    /// rows whose name or category is within [`MAX_TYPO_DISTANCE`] edits of
    /// it are returned instead.
    pub fn search(
        &self,
        term: &str,
        sort: SortField,
        direction: SortDirection,
    ) -> Vec<FoodItem> {
        let needle = term.trim().to_lowercase();

        let mut results: Vec<FoodItem> = self
            .items
            .iter()
            .filter(|item| {
                needle.is_empty()
                    || item.food.to_lowercase().contains(&needle)
                    || item.category.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();

        if results.is_empty() && !needle.is_empty() {
            results = self
                .items
                .iter()
                .filter(|item| {
                    [&item.food, &item.category].into_iter().any(|field| {
                        levenshtein(&field.to_lowercase(), &needle) <= MAX_TYPO_DISTANCE
                    })
                })
                .cloned()
                .collect();
            tracing::debug!(term = %needle, matches = results.len(), "fuzzy oxalate search");
        }

        results.sort_by(|a, b| {
            let ordering = compare(a, b, sort);
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        results
    }
}

/// Character edit distance between two strings.
fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut previous: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut current = Vec::with_capacity(b.len() + 1);
        current.push(i + 1);
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != *cb);
            current.push(substitution.min(previous[j + 1] + 1).min(current[j] + 1));
        }
        previous = current;
    }

    previous[b.len()]
}

fn compare(a: &FoodItem, b: &FoodItem, sort: SortField) -> Ordering {
    match sort {
        SortField::Food => a.food.cmp(&b.food),
        SortField::Type => a.category.cmp(&b.category),
        SortField::OxalateMg => a.oxalate_mg.total_cmp(&b.oxalate_mg),
        SortField::ServingSize => a.serving_size.cmp(&b.serving_size),
        SortField::OxalateLevel => a.oxalate_level.cmp(&b.oxalate_level),
    }
}
