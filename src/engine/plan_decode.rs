use crate::engine::error::GenerateError;
use crate::model::lesson_plan::LessonPlan;

/// Decode the raw text payload returned by the model into a typed plan.
/// The schema sent with the request is advisory to the model; this is the
/// enforcement point. A reply that parses as JSON but is missing any
/// required field fails here as [`GenerateError::MalformedResponse`].
pub fn decode_plan(raw: &str) -> Result<LessonPlan, GenerateError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(GenerateError::EmptyResponse);
    }
    let plan: LessonPlan = serde_json::from_str(trimmed)?;
    Ok(plan)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    pub fn full_plan_json() -> serde_json::Value {
        json!({
            "objectives": {
                "contentStandards": "Demonstrates understanding of the water cycle.",
                "performanceStandards": "Constructs a model of the water cycle.",
                "learningCompetencies": "Describe evaporation, condensation, and precipitation."
            },
            "contentTopic": "The Water Cycle",
            "learningResources": {
                "references": {
                    "teachersGuidePages": "TG pp. 101-105",
                    "learnersMaterialsPages": "LM pp. 88-92",
                    "textbookPages": "Science 4, pp. 140-145",
                    "additionalMaterials": "LRMDS water cycle poster"
                },
                "otherMaterials": "Glass jar, hot water, ice, plate"
            },
            "procedures": {
                "reviewingPreviousLesson": "Recall the three states of matter.",
                "establishingPurpose": "Ask: where does rain come from?",
                "presentingExamples": "Show a photo series of clouds forming.",
                "discussingConcepts1": "Define evaporation and condensation.",
                "discussingConcepts2": "Trace a raindrop's journey on a diagram.",
                "developingMastery": "Label the stages on a blank cycle chart.",
                "findingPracticalApplications": "Relate to drying laundry and rain.",
                "makingGeneralization": "Water moves in a continuous cycle.",
                "evaluatingLearning": "Five-item quiz on the cycle stages."
            }
        })
    }

    #[test]
    fn decodes_a_complete_reply_verbatim() {
        let plan = decode_plan(&full_plan_json().to_string()).unwrap();
        assert_eq!(plan.content_topic, "The Water Cycle");
        assert_eq!(
            plan.objectives.content_standards,
            "Demonstrates understanding of the water cycle."
        );
        assert_eq!(
            plan.learning_resources.references.textbook_pages,
            "Science 4, pp. 140-145"
        );
        assert_eq!(
            plan.procedures.evaluating_learning,
            "Five-item quiz on the cycle stages."
        );
    }

    #[test]
    fn blank_reply_is_an_empty_response() {
        assert!(matches!(
            decode_plan(""),
            Err(GenerateError::EmptyResponse)
        ));
        assert!(matches!(
            decode_plan("   \n  "),
            Err(GenerateError::EmptyResponse)
        ));
    }

    #[test]
    fn non_json_reply_is_malformed() {
        assert!(matches!(
            decode_plan("{not json"),
            Err(GenerateError::MalformedResponse(_))
        ));
    }

    #[test]
    fn field_incomplete_reply_is_malformed() {
        let mut value = full_plan_json();
        value["procedures"]
            .as_object_mut()
            .unwrap()
            .remove("evaluatingLearning");
        assert!(matches!(
            decode_plan(&value.to_string()),
            Err(GenerateError::MalformedResponse(_))
        ));

        let mut value = full_plan_json();
        value.as_object_mut().unwrap().remove("objectives");
        assert!(matches!(
            decode_plan(&value.to_string()),
            Err(GenerateError::MalformedResponse(_))
        ));
    }
}
