use crate::model::form_input::FormInput;
use crate::model::lesson_plan::LessonPlan;

pub enum EngineCommand {
    Generate(FormInput),
}

pub enum EngineResponse {
    PlanReady(Box<LessonPlan>),
    GenerateFailed(String),
}
