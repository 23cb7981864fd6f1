use serde::{Deserialize, Serialize};

/// A generated lesson plan, a typed mirror of the response schema sent to
/// the provider. Every field is required: deserialization fails if the
/// model's reply omits any of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonPlan {
    pub objectives: Objectives,
    pub content_topic: String,
    pub learning_resources: LearningResources,
    pub procedures: Procedures,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Objectives {
    pub content_standards: String,
    pub performance_standards: String,
    pub learning_competencies: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningResources {
    pub references: References,
    pub other_materials: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct References {
    pub teachers_guide_pages: String,
    pub learners_materials_pages: String,
    pub textbook_pages: String,
    pub additional_materials: String,
}

/// The nine pedagogical phases of the MATATAG procedures section,
/// sub-lettered A through I in the rendered document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Procedures {
    pub reviewing_previous_lesson: String,
    pub establishing_purpose: String,
    pub presenting_examples: String,
    pub discussing_concepts1: String,
    pub discussing_concepts2: String,
    pub developing_mastery: String,
    pub finding_practical_applications: String,
    pub making_generalization: String,
    pub evaluating_learning: String,
}
