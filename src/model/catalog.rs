/// One entry of a subject dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn subject(name: &'static str) -> SubjectOption {
    SubjectOption {
        value: name,
        label: name,
    }
}

pub const GRADE_LEVELS: [u8; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

pub const QUARTERS: [&str; 4] = [
    "1st Quarter",
    "2nd Quarter",
    "3rd Quarter",
    "4th Quarter",
];

pub const WEEKS: [u8; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

pub const LANGUAGES: [&str; 2] = ["English", "Filipino"];

const GRADE_1: [SubjectOption; 5] = [
    subject("GMRC"),
    subject("Language"),
    subject("Makabansa"),
    subject("Mathematics"),
    subject("Reading and Literacy"),
];

const GRADE_2: [SubjectOption; 5] = [
    subject("English"),
    subject("Filipino"),
    subject("GMRC"),
    subject("Makabansa"),
    subject("Mathematics"),
];

const GRADE_3: [SubjectOption; 6] = [
    subject("English"),
    subject("Filipino"),
    subject("GMRC"),
    subject("Makabansa"),
    subject("Mathematics"),
    subject("Science"),
];

const GRADE_4_TO_6: [SubjectOption; 8] = [
    subject("Araling Panlipunan"),
    subject("English"),
    subject("EPP"),
    subject("Filipino"),
    subject("GMRC"),
    subject("MAPEH"),
    subject("Mathematics"),
    subject("Science"),
];

const GRADE_7_TO_10: [SubjectOption; 8] = [
    subject("Araling Panlipunan"),
    subject("English"),
    subject("Filipino"),
    subject("MAPEH"),
    subject("Mathematics"),
    subject("Science"),
    subject("TLE"),
    subject("Values Education"),
];

/// Subjects offered at a grade level under the MATATAG curriculum.
/// Grades outside 1..=10 have no subjects.
pub fn subjects_for(grade: u8) -> &'static [SubjectOption] {
    match grade {
        1 => &GRADE_1,
        2 => &GRADE_2,
        3 => &GRADE_3,
        4..=6 => &GRADE_4_TO_6,
        7..=10 => &GRADE_7_TO_10,
        _ => &[],
    }
}

/// Keeps the subject selection consistent with the grade's offerings:
/// an already-valid subject is kept, anything else snaps to the first
/// offering (or "" when the grade has none).
pub fn reconcile_subject(grade: u8, current: &str) -> String {
    let offered = subjects_for(grade);
    if offered.iter().any(|s| s.value == current) {
        current.to_string()
    } else {
        offered
            .first()
            .map(|s| s.value.to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_grade_has_subjects() {
        for grade in GRADE_LEVELS {
            assert!(!subjects_for(grade).is_empty(), "grade {grade}");
        }
        assert!(subjects_for(0).is_empty());
        assert!(subjects_for(11).is_empty());
    }

    #[test]
    fn reconcile_keeps_valid_subject() {
        assert_eq!(reconcile_subject(3, "Science"), "Science");
        assert_eq!(reconcile_subject(10, "TLE"), "TLE");
    }

    #[test]
    fn reconcile_snaps_to_first_offering() {
        // Science is not offered in grade 1.
        assert_eq!(reconcile_subject(1, "Science"), "GMRC");
        // EPP disappears after grade 6.
        assert_eq!(reconcile_subject(7, "EPP"), "Araling Panlipunan");
        assert_eq!(reconcile_subject(5, ""), "Araling Panlipunan");
    }

    #[test]
    fn reconcile_empty_for_unknown_grade() {
        assert_eq!(reconcile_subject(99, "Mathematics"), "");
    }
}
