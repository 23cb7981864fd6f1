use serde::{Deserialize, Serialize};

use crate::model::catalog::{self, QUARTERS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    English,
    Filipino,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Filipino => "Filipino",
        }
    }
}

/// Field names accepted by [`FormInput::set_field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    GradeLevel,
    Subject,
    Quarter,
    Week,
    LessonTopic,
    Duration,
    Language,
}

/// The lesson parameters the teacher fills in before generating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormInput {
    pub grade_level: u8,
    pub subject: String,
    pub quarter: String,
    pub week: u8,
    pub lesson_topic: String,
    pub duration: String,
    pub language: Language,
}

impl Default for FormInput {
    fn default() -> Self {
        Self {
            grade_level: 1,
            subject: catalog::reconcile_subject(1, ""),
            quarter: QUARTERS[0].to_string(),
            week: 1,
            lesson_topic: String::new(),
            duration: "60 minutes".to_string(),
            language: Language::English,
        }
    }
}

impl FormInput {
    /// Applies one raw field edit. Numeric fields are coerced to integers
    /// (unparseable input leaves the current value untouched); the subject
    /// is re-reconciled after a grade change so it always belongs to the
    /// selected grade's offerings.
    pub fn set_field(&mut self, field: FormField, raw: &str) {
        match field {
            FormField::GradeLevel => {
                if let Ok(grade) = raw.trim().parse::<u8>() {
                    self.grade_level = grade;
                    self.subject = catalog::reconcile_subject(grade, &self.subject);
                }
            }
            FormField::Week => {
                if let Ok(week) = raw.trim().parse::<u8>() {
                    self.week = week;
                }
            }
            FormField::Subject => {
                self.subject = catalog::reconcile_subject(self.grade_level, raw);
            }
            FormField::Quarter => self.quarter = raw.to_string(),
            FormField::LessonTopic => self.lesson_topic = raw.to_string(),
            FormField::Duration => self.duration = raw.to_string(),
            FormField::Language => {
                self.language = match raw {
                    "Filipino" => Language::Filipino,
                    _ => Language::English,
                };
            }
        }
    }

    pub fn set_grade(&mut self, grade: u8) {
        self.grade_level = grade;
        self.subject = catalog::reconcile_subject(grade, &self.subject);
    }

    /// The required-field check run before a submission is dispatched.
    pub fn validate(&self) -> Result<(), String> {
        if self.lesson_topic.trim().is_empty() {
            return Err("Lesson topic is required.".to_string());
        }
        if self.duration.trim().is_empty() {
            return Err("Duration is required.".to_string());
        }
        if self.subject.is_empty() {
            return Err("No subject is available for the selected grade.".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_subject_matches_grade_one() {
        let form = FormInput::default();
        assert_eq!(form.grade_level, 1);
        assert_eq!(form.subject, "GMRC");
        assert_eq!(form.quarter, "1st Quarter");
    }

    #[test]
    fn numeric_fields_coerce() {
        let mut form = FormInput::default();
        form.set_field(FormField::Week, "7");
        assert_eq!(form.week, 7);
        form.set_field(FormField::Week, "not a number");
        assert_eq!(form.week, 7);
        form.set_field(FormField::GradeLevel, " 4 ");
        assert_eq!(form.grade_level, 4);
    }

    #[test]
    fn string_fields_pass_through() {
        let mut form = FormInput::default();
        form.set_field(FormField::LessonTopic, "The Water Cycle");
        form.set_field(FormField::Duration, "1 hour");
        form.set_field(FormField::Language, "Filipino");
        assert_eq!(form.lesson_topic, "The Water Cycle");
        assert_eq!(form.duration, "1 hour");
        assert_eq!(form.language, Language::Filipino);
    }

    #[test]
    fn grade_change_reconciles_subject() {
        let mut form = FormInput::default();
        form.set_grade(3);
        form.set_field(FormField::Subject, "Science");
        assert_eq!(form.subject, "Science");

        // Grade 1 has no Science, so the subject snaps to its first offering.
        form.set_grade(1);
        assert_eq!(form.subject, "GMRC");

        // GMRC survives the move to grade 2.
        form.set_grade(2);
        assert_eq!(form.subject, "GMRC");
    }

    #[test]
    fn invalid_subject_edit_is_reconciled() {
        let mut form = FormInput::default();
        form.set_field(FormField::Subject, "Quantum Mechanics");
        assert_eq!(form.subject, "GMRC");
    }

    #[test]
    fn validate_requires_topic_and_duration() {
        let mut form = FormInput::default();
        assert!(form.validate().is_err());
        form.lesson_topic = "Fractions".to_string();
        assert!(form.validate().is_ok());
        form.duration = "  ".to_string();
        assert!(form.validate().is_err());
    }
}
