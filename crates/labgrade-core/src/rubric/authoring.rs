//! Rubric authoring: adding, editing, reordering and removing criteria
//! and their levels.

use tracing::debug;

use super::{Level, Rubric, RubricCriterion};
use crate::error::{GradeError, Result};
use crate::id::{CriterionId, LevelId};
use crate::scoring::DEFAULT_MAX_SCORE;
use crate::weights::Weight;

/// Weight given to a new criterion when the author does not pick one
pub const DEFAULT_CRITERION_WEIGHT: f64 = 20.0;

/// Levels every new criterion starts with
const DEFAULT_LEVELS: [(&str, u32); 4] = [
    ("Excellent", 90),
    ("Good", 75),
    ("Satisfactory", 60),
    ("Needs Improvement", 40),
];

const NEW_LEVEL_NAME: &str = "New Level";
const NEW_LEVEL_POINTS: u32 = 50;

/// Partial update of a criterion; `None` leaves a field unchanged
#[derive(Debug, Clone, Default)]
pub struct CriterionUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub weight: Option<Weight>,
    pub max_score: Option<f64>,
}

/// Partial update of a level; `None` leaves a field unchanged
#[derive(Debug, Clone, Default)]
pub struct LevelUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub points: Option<u32>,
}

fn default_levels() -> Vec<Level> {
    DEFAULT_LEVELS
        .iter()
        .map(|(name, points)| Level {
            id: LevelId::generate(),
            name: name.to_string(),
            description: String::new(),
            points: *points,
        })
        .collect()
}

impl Rubric {
    /// Append a criterion with a fresh id and the default levels
    pub fn add_criterion(&mut self, name: impl Into<String>, weight: Option<Weight>) -> CriterionId {
        let id = CriterionId::generate();
        self.criteria.push(RubricCriterion {
            id: id.clone(),
            name: name.into(),
            description: String::new(),
            weight: weight.unwrap_or(Weight::from_percent(DEFAULT_CRITERION_WEIGHT)),
            max_score: DEFAULT_MAX_SCORE,
            levels: default_levels(),
        });
        debug!(rubric = %self.id, criterion = %id, "add_criterion");
        id
    }

    pub fn update_criterion(&mut self, id: &CriterionId, update: CriterionUpdate) -> Result<()> {
        if let Some(max_score) = update.max_score {
            if !max_score.is_finite() || max_score <= 0.0 {
                return Err(GradeError::invalid_value("max score", max_score));
            }
        }

        let criterion = self.criterion_mut(id)?;
        if let Some(name) = update.name {
            criterion.name = name;
        }
        if let Some(description) = update.description {
            criterion.description = description;
        }
        if let Some(weight) = update.weight {
            criterion.weight = weight;
        }
        if let Some(max_score) = update.max_score {
            criterion.max_score = max_score;
        }
        Ok(())
    }

    pub fn remove_criterion(&mut self, id: &CriterionId) -> Result<RubricCriterion> {
        let index = self.criterion_index(id)?;
        debug!(rubric = %self.id, criterion = %id, "remove_criterion");
        Ok(self.criteria.remove(index))
    }

    /// Move the criterion at `from` so that it ends up at index `to`
    pub fn move_criterion(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.criteria.len();
        if from >= len || to >= len {
            return Err(GradeError::invalid_value(
                "criterion position",
                format!("{} -> {} (rubric has {} criteria)", from, to, len),
            ));
        }
        let criterion = self.criteria.remove(from);
        self.criteria.insert(to, criterion);
        Ok(())
    }

    pub fn add_level(&mut self, criterion_id: &CriterionId) -> Result<LevelId> {
        let criterion = self.criterion_mut(criterion_id)?;
        let id = LevelId::generate();
        criterion.levels.push(Level {
            id: id.clone(),
            name: NEW_LEVEL_NAME.to_string(),
            description: String::new(),
            points: NEW_LEVEL_POINTS,
        });
        Ok(id)
    }

    pub fn update_level(
        &mut self,
        criterion_id: &CriterionId,
        level_id: &LevelId,
        update: LevelUpdate,
    ) -> Result<()> {
        let criterion = self.criterion_mut(criterion_id)?;
        let level = criterion
            .levels
            .iter_mut()
            .find(|l| &l.id == level_id)
            .ok_or_else(|| GradeError::not_found("level", level_id))?;
        if let Some(name) = update.name {
            level.name = name;
        }
        if let Some(description) = update.description {
            level.description = description;
        }
        if let Some(points) = update.points {
            level.points = points;
        }
        Ok(())
    }

    pub fn remove_level(&mut self, criterion_id: &CriterionId, level_id: &LevelId) -> Result<Level> {
        let criterion = self.criterion_mut(criterion_id)?;
        let index = criterion
            .levels
            .iter()
            .position(|l| &l.id == level_id)
            .ok_or_else(|| GradeError::not_found("level", level_id))?;
        Ok(criterion.levels.remove(index))
    }

    fn criterion_index(&self, id: &CriterionId) -> Result<usize> {
        self.criteria
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| GradeError::not_found("criterion", id))
    }
}
