use crate::model::lesson_plan::LessonPlan;

/// One top-level heading of the rendered plan (I. OBJECTIVE/S, ...).
pub struct Section {
    pub heading: &'static str,
    pub entries: Vec<Entry>,
}

/// A labelled block of text under a section. The label may be empty for
/// sections that are a single paragraph (II. CONTENT / TOPIC).
pub struct Entry {
    pub label: &'static str,
    pub body: String,
}

const OBJECTIVE_LABELS: [&str; 3] = [
    "A. Content Standards",
    "B. Performance Standards",
    "C. Learning Competencies/Objectives",
];

const REFERENCE_LABELS: [&str; 4] = [
    "1. Teacher\u{2019}s Guide pages",
    "2. Learner\u{2019}s Materials pages",
    "3. Textbook pages",
    "4. Additional materials from LRMDS portal",
];

const OTHER_MATERIALS_LABEL: &str = "B. Other Materials";

const PROCEDURE_LABELS: [&str; 9] = [
    "A. Reviewing previous lesson or presenting the new lesson",
    "B. Establishing a purpose for the lesson",
    "C. Presenting examples/instances of the new lesson",
    "D. Discussing new concepts and practicing new skills #1",
    "E. Discussing new concepts and practicing new skills #2",
    "F. Developing mastery (leads to formative assessment)",
    "G. Finding practical applications of concepts and skills in daily living",
    "H. Making generalization and abstraction about the lesson",
    "I. Evaluating learning",
];

fn objective_fields(plan: &LessonPlan) -> [&String; 3] {
    [
        &plan.objectives.content_standards,
        &plan.objectives.performance_standards,
        &plan.objectives.learning_competencies,
    ]
}

fn reference_fields(plan: &LessonPlan) -> [&String; 4] {
    let refs = &plan.learning_resources.references;
    [
        &refs.teachers_guide_pages,
        &refs.learners_materials_pages,
        &refs.textbook_pages,
        &refs.additional_materials,
    ]
}

fn procedure_fields(plan: &LessonPlan) -> [&String; 9] {
    let p = &plan.procedures;
    [
        &p.reviewing_previous_lesson,
        &p.establishing_purpose,
        &p.presenting_examples,
        &p.discussing_concepts1,
        &p.discussing_concepts2,
        &p.developing_mastery,
        &p.finding_practical_applications,
        &p.making_generalization,
        &p.evaluating_learning,
    ]
}

/// The display tree for the on-screen view. Entries whose body is empty
/// are dropped; section headings always remain.
pub fn plan_sections(plan: &LessonPlan) -> Vec<Section> {
    let entries = |pairs: Vec<(&'static str, &String)>| -> Vec<Entry> {
        pairs
            .into_iter()
            .filter(|(_, body)| !body.is_empty())
            .map(|(label, body)| Entry {
                label,
                body: body.clone(),
            })
            .collect()
    };

    let mut resources: Vec<(&'static str, &String)> = Vec::new();
    resources.extend(REFERENCE_LABELS.iter().copied().zip(reference_fields(plan)));
    resources.push((
        OTHER_MATERIALS_LABEL,
        &plan.learning_resources.other_materials,
    ));

    vec![
        Section {
            heading: "I. OBJECTIVE/S",
            entries: entries(
                OBJECTIVE_LABELS
                    .iter()
                    .copied()
                    .zip(objective_fields(plan))
                    .collect(),
            ),
        },
        Section {
            heading: "II. CONTENT / TOPIC",
            entries: entries(vec![("", &plan.content_topic)]),
        },
        Section {
            heading: "III. LEARNING RESOURCES",
            entries: entries(resources),
        },
        Section {
            heading: "IV. PROCEDURES",
            entries: entries(
                PROCEDURE_LABELS
                    .iter()
                    .copied()
                    .zip(procedure_fields(plan))
                    .collect(),
            ),
        },
    ]
}

/// The flat export document. Unlike the display tree, every line is always
/// present so the exported file matches the full MATATAG template.
pub fn plan_to_text(plan: &LessonPlan) -> String {
    let mut out = String::new();

    out.push_str("I. OBJECTIVE/S\n");
    for (label, body) in OBJECTIVE_LABELS.iter().zip(objective_fields(plan)) {
        out.push_str(&format!("{label}: {body}\n"));
    }

    out.push_str(&format!("\nII. CONTENT / TOPIC: {}\n", plan.content_topic));

    out.push_str("\nIII. LEARNING RESOURCES\nA. References\n");
    for (label, body) in REFERENCE_LABELS.iter().zip(reference_fields(plan)) {
        out.push_str(&format!("{label}: {body}\n"));
    }
    out.push_str(&format!(
        "{OTHER_MATERIALS_LABEL}: {}\n",
        plan.learning_resources.other_materials
    ));

    out.push_str("\nIV. PROCEDURES\n");
    for (label, body) in PROCEDURE_LABELS.iter().zip(procedure_fields(plan)) {
        out.push_str(&format!("{label}: {body}\n"));
    }

    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::plan_decode::decode_plan;
    use crate::engine::plan_decode::tests::full_plan_json;

    fn sample_plan() -> LessonPlan {
        decode_plan(&full_plan_json().to_string()).unwrap()
    }

    #[test]
    fn flat_text_keeps_canonical_order_and_labels() {
        let text = plan_to_text(&sample_plan());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "I. OBJECTIVE/S");
        assert!(lines[1].starts_with("A. Content Standards: "));
        assert!(lines[2].starts_with("B. Performance Standards: "));
        assert!(lines[3].starts_with("C. Learning Competencies/Objectives: "));
        assert_eq!(lines[5], "II. CONTENT / TOPIC: The Water Cycle");

        let reference_lines: Vec<&&str> = lines
            .iter()
            .filter(|l| {
                REFERENCE_LABELS
                    .iter()
                    .any(|label| l.starts_with(&format!("{label}: ")))
            })
            .collect();
        assert_eq!(reference_lines.len(), 4);

        let procedure_positions: Vec<usize> = PROCEDURE_LABELS
            .iter()
            .map(|label| {
                lines
                    .iter()
                    .position(|l| l.starts_with(&format!("{label}: ")))
                    .unwrap_or_else(|| panic!("missing procedure line: {label}"))
            })
            .collect();
        assert!(
            procedure_positions.windows(2).all(|w| w[0] < w[1]),
            "procedures must appear in A-I order"
        );
    }

    #[test]
    fn flat_text_keeps_empty_fields() {
        let mut plan = sample_plan();
        plan.procedures.developing_mastery.clear();
        let text = plan_to_text(&plan);
        assert!(text.contains("F. Developing mastery (leads to formative assessment): \n"));
    }

    #[test]
    fn display_tree_omits_empty_entries() {
        let mut plan = sample_plan();
        plan.procedures.developing_mastery.clear();
        plan.learning_resources.references.textbook_pages.clear();

        let sections = plan_sections(&plan);
        assert_eq!(sections.len(), 4);
        assert_eq!(sections[0].entries.len(), 3);
        assert_eq!(sections[2].entries.len(), 4); // one reference dropped
        assert_eq!(sections[3].entries.len(), 8); // one procedure dropped
        assert!(sections[3]
            .entries
            .iter()
            .all(|e| !e.label.starts_with("F.")));
    }

    #[test]
    fn content_topic_renders_without_label() {
        let sections = plan_sections(&sample_plan());
        assert_eq!(sections[1].entries.len(), 1);
        assert_eq!(sections[1].entries[0].label, "");
        assert_eq!(sections[1].entries[0].body, "The Water Cycle");
    }
}
