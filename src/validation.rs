use crate::data::student::{StudentField, StudentFields};
use std::collections::BTreeMap;

/// Field-scoped problems with a draft. Empty means the draft can be sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<StudentField, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: StudentField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn insert(&mut self, field: StudentField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }
}

pub fn validate(draft: &StudentFields) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if draft.name.trim().is_empty() {
        errors.insert(StudentField::Name, "Name is required");
    } else if is_numeric(&draft.name) {
        errors.insert(StudentField::Name, "Name must be a string");
    }

    if draft.age.is_empty() {
        errors.insert(StudentField::Age, "Age is required");
    } else if !is_numeric(&draft.age) {
        errors.insert(StudentField::Age, "Age must be a number");
    }

    if draft.roll_no.trim().is_empty() {
        errors.insert(StudentField::RollNo, "Roll No is required");
    } else if !draft.roll_no.chars().all(|c| c.is_ascii_alphanumeric()) {
        errors.insert(
            StudentField::RollNo,
            "Roll No must contain only letters and numbers",
        );
    }

    if draft.course.trim().is_empty() {
        errors.insert(StudentField::Course, "Course is required");
    } else if is_numeric(&draft.course) {
        errors.insert(StudentField::Course, "Course must be a string");
    }

    errors
}

/// Whether the trimmed text is a plain decimal numeral: optional sign, digits,
/// optional fractional part, nothing else. `.5` and `7.` both count.
pub fn is_numeric(s: &str) -> bool {
    let s = s.trim();
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);

    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    let has_digits = !whole.is_empty() || fraction.is_some_and(|f| !f.is_empty());

    has_digits && all_digits(whole) && fraction.is_none_or(all_digits)
}
