use serde_json::{json, Value};

use crate::model::form_input::FormInput;

/// Builds the instruction text sent to the model.
/// This struct is intentionally dumb: it only formats text.
/// No parsing, no networking, no engine logic.
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn build(form: &FormInput) -> String {
        let mut prompt = String::new();

        prompt.push_str(&format!(
            "Generate a detailed lesson plan in the DepEd MATATAG format for a {}th Grade {} class.\n",
            form.grade_level, form.subject
        ));
        prompt.push_str(&format!(
            "The lesson is for the {}, Week {}, with the topic: \"{}\".\n",
            form.quarter, form.week, form.lesson_topic
        ));
        prompt.push_str(&format!(
            "The duration of the lesson is {}.\n",
            form.duration
        ));
        prompt.push_str(&format!(
            "The lesson plan should be in {}.\n\n",
            form.language.as_str()
        ));

        prompt.push_str(
            "Strictly adhere to the following structure and fill in all sections \
             comprehensively based on the provided details.\n\
             Ensure all content is relevant and appropriate for the specified grade level, \
             subject, and topic according to the DepEd MATATAG curriculum.\n\
             For sections requiring multiple points (e.g., Learning Competencies), \
             generate several relevant points.\n\
             For 'References' under 'Learning Resources', provide realistic placeholders \
             or relevant categories of resources.\n\
             The output MUST be a JSON object conforming to the response schema.",
        );

        prompt
    }
}

/// The structured-output schema sent alongside the prompt. Every leaf field
/// and every nested object is marked required, so the schema is the single
/// source of truth for what a complete lesson plan must contain.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "objectives": {
                "type": "OBJECT",
                "properties": {
                    "contentStandards": {
                        "type": "STRING",
                        "description": "DepEd Content Standards for the lesson."
                    },
                    "performanceStandards": {
                        "type": "STRING",
                        "description": "DepEd Performance Standards for the lesson."
                    },
                    "learningCompetencies": {
                        "type": "STRING",
                        "description": "Specific learning competencies/objectives for the lesson."
                    }
                },
                "required": ["contentStandards", "performanceStandards", "learningCompetencies"]
            },
            "contentTopic": {
                "type": "STRING",
                "description": "The main content/topic of the lesson."
            },
            "learningResources": {
                "type": "OBJECT",
                "properties": {
                    "references": {
                        "type": "OBJECT",
                        "properties": {
                            "teachersGuidePages": {
                                "type": "STRING",
                                "description": "Relevant Teacher's Guide pages."
                            },
                            "learnersMaterialsPages": {
                                "type": "STRING",
                                "description": "Relevant Learner's Materials pages."
                            },
                            "textbookPages": {
                                "type": "STRING",
                                "description": "Relevant Textbook pages."
                            },
                            "additionalMaterials": {
                                "type": "STRING",
                                "description": "Additional materials from LRMDS portal."
                            }
                        },
                        "required": [
                            "teachersGuidePages",
                            "learnersMaterialsPages",
                            "textbookPages",
                            "additionalMaterials"
                        ]
                    },
                    "otherMaterials": {
                        "type": "STRING",
                        "description": "Other learning materials used."
                    }
                },
                "required": ["references", "otherMaterials"]
            },
            "procedures": {
                "type": "OBJECT",
                "properties": {
                    "reviewingPreviousLesson": {
                        "type": "STRING",
                        "description": "Activities for reviewing previous lesson or presenting the new lesson."
                    },
                    "establishingPurpose": {
                        "type": "STRING",
                        "description": "Activities for establishing a purpose for the lesson."
                    },
                    "presentingExamples": {
                        "type": "STRING",
                        "description": "Activities for presenting examples/instances of the new lesson."
                    },
                    "discussingConcepts1": {
                        "type": "STRING",
                        "description": "Activities for discussing new concepts and practicing new skills #1."
                    },
                    "discussingConcepts2": {
                        "type": "STRING",
                        "description": "Activities for discussing new concepts and practicing new skills #2."
                    },
                    "developingMastery": {
                        "type": "STRING",
                        "description": "Activities for developing mastery (leads to formative assessment)."
                    },
                    "findingPracticalApplications": {
                        "type": "STRING",
                        "description": "Activities for finding practical applications of concepts and skills in daily living."
                    },
                    "makingGeneralization": {
                        "type": "STRING",
                        "description": "Activities for making generalization and abstraction about the lesson."
                    },
                    "evaluatingLearning": {
                        "type": "STRING",
                        "description": "Activities for evaluating learning."
                    }
                },
                "required": [
                    "reviewingPreviousLesson",
                    "establishingPurpose",
                    "presentingExamples",
                    "discussingConcepts1",
                    "discussingConcepts2",
                    "developingMastery",
                    "findingPracticalApplications",
                    "makingGeneralization",
                    "evaluatingLearning"
                ]
            }
        },
        "required": ["objectives", "contentTopic", "learningResources", "procedures"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::form_input::{FormField, FormInput};

    #[test]
    fn prompt_embeds_every_form_field() {
        let mut form = FormInput::default();
        form.set_grade(4);
        form.set_field(FormField::Subject, "Science");
        form.set_field(FormField::Quarter, "3rd Quarter");
        form.set_field(FormField::Week, "6");
        form.set_field(FormField::LessonTopic, "Photosynthesis");
        form.set_field(FormField::Duration, "50 minutes");
        form.set_field(FormField::Language, "Filipino");

        let prompt = PromptBuilder::build(&form);
        assert!(prompt.contains("4th Grade Science"));
        assert!(prompt.contains("3rd Quarter"));
        assert!(prompt.contains("Week 6"));
        assert!(prompt.contains("\"Photosynthesis\""));
        assert!(prompt.contains("50 minutes"));
        assert!(prompt.contains("in Filipino"));
    }

    #[test]
    fn schema_marks_all_sections_required() {
        let schema = response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(
            required,
            ["objectives", "contentTopic", "learningResources", "procedures"]
        );

        let procedures = &schema["properties"]["procedures"];
        assert_eq!(procedures["required"].as_array().unwrap().len(), 9);
        assert_eq!(procedures["properties"].as_object().unwrap().len(), 9);

        let references = &schema["properties"]["learningResources"]["properties"]["references"];
        assert_eq!(references["required"].as_array().unwrap().len(), 4);
    }
}
