//! Built-in department rubrics
//!
//! These were authored with fractional weights (`0.35`) and are converted
//! to percentages here, at the boundary.

use super::{LabType, Rubric, RubricCriterion, RubricKind};
use crate::id::{CriterionId, RubricId};
use crate::scoring::DEFAULT_MAX_SCORE;
use crate::weights::Weight;

struct Template {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    lab_type: LabType,
    kind: RubricKind,
    created_by: &'static str,
    usage_count: u32,
    criteria: &'static [(&'static str, &'static str, f64)],
}

fn templates() -> [Template; 4] {
    [
        Template {
            id: "rb-ml-algorithm",
            name: "ML Algorithm Assessment",
            description: "Comprehensive rubric for machine learning algorithm implementation and evaluation",
            lab_type: LabType::Ml,
            kind: RubricKind::Default,
            created_by: "Faculty Akash",
            usage_count: 45,
            criteria: &[
                ("cr-code-efficiency", "Code Efficiency", 0.4),
                ("cr-algorithm-accuracy", "Algorithm Accuracy", 0.3),
                ("cr-documentation", "Documentation", 0.3),
            ],
        },
        Template {
            id: "rb-ai-neural-network",
            name: "AI Neural Network Project",
            description: "Evaluation criteria for neural network design and implementation projects",
            lab_type: LabType::Ai,
            kind: RubricKind::Default,
            created_by: "Faculty Saravanan",
            usage_count: 32,
            criteria: &[
                ("cr-network-architecture", "Network Architecture", 0.35),
                ("cr-training-process", "Training Process", 0.25),
                ("cr-performance-analysis", "Performance Analysis", 0.25),
                ("cr-viva", "Viva Q&A", 0.15),
            ],
        },
        Template {
            id: "rb-full-stack",
            name: "Full Stack Development",
            description: "Complete assessment rubric for full stack web application projects",
            lab_type: LabType::Fsd,
            kind: RubricKind::Default,
            created_by: "Faculty Prasad",
            usage_count: 28,
            criteria: &[
                ("cr-frontend", "Frontend Implementation", 0.3),
                ("cr-backend", "Backend Development", 0.3),
                ("cr-database-design", "Database Design", 0.2),
                ("cr-deployment-testing", "Deployment & Testing", 0.2),
            ],
        },
        Template {
            id: "rb-ml-research",
            name: "Custom ML Project Rubric",
            description: "Customized rubric for advanced machine learning research projects",
            lab_type: LabType::Ml,
            kind: RubricKind::Custom,
            created_by: "Faculty Akash",
            usage_count: 8,
            criteria: &[
                ("cr-research-methodology", "Research Methodology", 0.25),
                ("cr-implementation-quality", "Implementation Quality", 0.25),
                ("cr-results-analysis", "Results Analysis", 0.25),
                ("cr-innovation", "Innovation Factor", 0.25),
            ],
        },
    ]
}

fn build(template: Template) -> Rubric {
    Rubric {
        id: RubricId::new_unchecked(template.id),
        name: template.name.to_string(),
        description: template.description.to_string(),
        lab_type: template.lab_type,
        kind: template.kind,
        created_by: Some(template.created_by.to_string()),
        usage_count: template.usage_count,
        criteria: template
            .criteria
            .iter()
            .map(|(id, name, fraction)| RubricCriterion {
                id: CriterionId::new_unchecked(id),
                name: name.to_string(),
                description: String::new(),
                weight: Weight::from_fraction(*fraction),
                max_score: DEFAULT_MAX_SCORE,
                levels: Vec::new(),
            })
            .collect(),
    }
}

/// The rubrics shipped with labgrade
pub fn default_rubrics() -> Vec<Rubric> {
    templates().into_iter().map(build).collect()
}

/// Look up a built-in rubric by id
pub fn find_default(id: &str) -> Option<Rubric> {
    default_rubrics().into_iter().find(|r| r.id.as_str() == id)
}
