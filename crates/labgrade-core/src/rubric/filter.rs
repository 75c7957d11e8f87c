//! Rubric filtering and catalog counts

use std::collections::BTreeMap;

use serde::Serialize;

use super::{LabType, Rubric, RubricKind};

/// Filter configuration for rubrics
#[derive(Debug, Clone, Default)]
pub struct RubricFilter<'a> {
    /// Case-insensitive substring of name or description
    pub search: Option<&'a str>,
    /// Exact lab type
    pub lab_type: Option<&'a LabType>,
    /// Restrict to default or custom rubrics
    pub kind: Option<RubricKind>,
}

impl<'a> RubricFilter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: Option<&'a str>) -> Self {
        self.search = search.filter(|s| !s.trim().is_empty());
        self
    }

    pub fn with_lab_type(mut self, lab_type: Option<&'a LabType>) -> Self {
        self.lab_type = lab_type;
        self
    }

    pub fn with_kind(mut self, kind: Option<RubricKind>) -> Self {
        self.kind = kind;
        self
    }

    /// Check if a rubric matches all configured filters
    pub fn matches(&self, rubric: &Rubric) -> bool {
        if let Some(search) = self.search {
            if !rubric.matches_search(search) {
                return false;
            }
        }

        if let Some(lab_type) = self.lab_type {
            if &rubric.lab_type != lab_type {
                return false;
            }
        }

        if let Some(kind) = self.kind {
            if rubric.kind != kind {
                return false;
            }
        }

        true
    }

    /// Keep the matching rubrics, preserving order
    pub fn apply<'r>(&self, rubrics: &'r [Rubric]) -> Vec<&'r Rubric> {
        rubrics.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Summary counts over a set of rubrics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RubricCatalog {
    pub total: usize,
    pub default_count: usize,
    pub custom_count: usize,
    pub by_lab: BTreeMap<String, usize>,
}

impl RubricCatalog {
    pub fn summarize<'r, I>(rubrics: I) -> Self
    where
        I: IntoIterator<Item = &'r Rubric>,
    {
        let mut catalog = RubricCatalog::default();
        for rubric in rubrics {
            catalog.total += 1;
            match rubric.kind {
                RubricKind::Default => catalog.default_count += 1,
                RubricKind::Custom => catalog.custom_count += 1,
            }
            *catalog
                .by_lab
                .entry(rubric.lab_type.to_string())
                .or_default() += 1;
        }
        catalog
    }
}
