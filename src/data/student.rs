use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The four editable fields. Doubles as the form draft, so nothing here is
/// validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentFields {
    pub name: String,
    pub age: String,
    pub roll_no: String,
    pub course: String,
}

impl StudentFields {
    pub fn get(&self, field: StudentField) -> &str {
        match field {
            StudentField::Name => &self.name,
            StudentField::Age => &self.age,
            StudentField::RollNo => &self.roll_no,
            StudentField::Course => &self.course,
        }
    }

    pub fn set(&mut self, field: StudentField, value: String) {
        let slot = match field {
            StudentField::Name => &mut self.name,
            StudentField::Age => &mut self.age,
            StudentField::RollNo => &mut self.roll_no,
            StudentField::Course => &mut self.course,
        };
        *slot = value;
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StudentField {
    Name,
    Age,
    RollNo,
    Course,
}

impl StudentField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Age, Self::RollNo, Self::Course];

    /// Key used for form inputs and error lookups.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::RollNo => "rollNo",
            Self::Course => "course",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Student Name",
            Self::Age => "Age",
            Self::RollNo => "Roll Number",
            Self::Course => "Course",
        }
    }

    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Enter full name",
            Self::Age => "Enter age",
            Self::RollNo => "e.g., CS2024001",
            Self::Course => "e.g., Computer Science",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: StudentId,
    pub fields: StudentFields,
}

impl Student {
    /// Text the list search runs against.
    pub fn haystack(&self) -> String {
        let StudentFields {
            name,
            age,
            roll_no,
            course,
        } = &self.fields;
        [name.as_str(), age.as_str(), roll_no.as_str(), course.as_str()].join(" ").to_lowercase()
    }
}

/// A record as the remote collection returns it. Older documents carry the
/// roll number as `rollNo`, ids/ages sometimes come back as numbers, and any
/// field but the id may be missing or `null`, which reads as blank.
#[derive(Deserialize)]
pub struct WireStudent {
    #[serde(rename = "_id", deserialize_with = "string_or_number")]
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default, deserialize_with = "optional_string_or_number")]
    age: Option<String>,
    #[serde(default)]
    roll_no: Option<String>,
    #[serde(default, rename = "rollNo")]
    roll_no_camel: Option<String>,
    #[serde(default)]
    course: Option<String>,
}

impl From<WireStudent> for Student {
    fn from(wire: WireStudent) -> Self {
        let roll_no = match (wire.roll_no, wire.roll_no_camel) {
            (Some(snake), _) if !snake.is_empty() => snake,
            (_, Some(camel)) => camel,
            (snake, None) => snake.unwrap_or_default(),
        };

        Self {
            id: StudentId(wire.id),
            fields: StudentFields {
                name: wire.name.unwrap_or_default(),
                age: wire.age.unwrap_or_default(),
                roll_no,
                course: wire.course.unwrap_or_default(),
            },
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

impl TextOrNumber {
    fn into_text(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Number(n) => n.to_string(),
        }
    }
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    TextOrNumber::deserialize(deserializer).map(TextOrNumber::into_text)
}

fn optional_string_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(Option::<TextOrNumber>::deserialize(deserializer)?.map(TextOrNumber::into_text))
}

/// Body for POST (no `_id`) and PUT (with `_id`).
#[derive(Serialize)]
pub struct WireWrite<'a> {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<&'a StudentId>,
    pub name: &'a str,
    pub age: &'a str,
    pub roll_no: &'a str,
    pub course: &'a str,
}

impl<'a> WireWrite<'a> {
    pub fn new(id: Option<&'a StudentId>, fields: &'a StudentFields) -> Self {
        Self {
            id,
            name: &fields.name,
            age: &fields.age,
            roll_no: &fields.roll_no,
            course: &fields.course,
        }
    }
}

#[derive(Serialize)]
pub struct WireDelete<'a> {
    #[serde(rename = "_id")]
    pub id: &'a StudentId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> Student {
        serde_json::from_value::<WireStudent>(value)
            .expect("valid wire record")
            .into()
    }

    #[test]
    fn reads_snake_case_roll_number() {
        let student = decode(json!({
            "_id": "abc", "name": "Alice", "age": "20", "roll_no": "CS001", "course": "Physics"
        }));
        assert_eq!(student.id, StudentId::new("abc"));
        assert_eq!(student.fields.roll_no, "CS001");
    }

    #[test]
    fn falls_back_to_camel_case_roll_number() {
        let student = decode(json!({
            "_id": "abc", "name": "Alice", "age": "20", "rollNo": "CS002", "course": "Physics"
        }));
        assert_eq!(student.fields.roll_no, "CS002");

        let both = decode(json!({
            "_id": "abc", "name": "Alice", "age": "20", "roll_no": "", "rollNo": "CS003", "course": "Physics"
        }));
        assert_eq!(both.fields.roll_no, "CS003");
    }

    #[test]
    fn numeric_id_and_age_are_kept_as_text() {
        let student = decode(json!({
            "_id": 17, "name": "Bob", "age": 21, "roll_no": "X1", "course": "CS"
        }));
        assert_eq!(student.id.as_str(), "17");
        assert_eq!(student.fields.age, "21");
    }

    #[test]
    fn record_without_id_is_rejected() {
        let result = serde_json::from_value::<WireStudent>(json!({"name": "Bob"}));
        assert!(result.is_err());

        let null_id = serde_json::from_value::<WireStudent>(json!({"_id": null, "name": "Bob"}));
        assert!(null_id.is_err());
    }

    #[test]
    fn null_fields_read_as_blank() {
        let student = decode(json!({
            "_id": "abc", "name": null, "age": null, "roll_no": null, "rollNo": null, "course": null
        }));
        assert_eq!(student.id, StudentId::new("abc"));
        assert_eq!(student.fields, StudentFields::default());

        let partial = decode(json!({
            "_id": "def", "name": "Alice", "age": 20, "roll_no": null, "rollNo": "CS9", "course": null
        }));
        assert_eq!(partial.fields.name, "Alice");
        assert_eq!(partial.fields.age, "20");
        assert_eq!(partial.fields.roll_no, "CS9");
        assert_eq!(partial.fields.course, "");
    }

    #[test]
    fn one_null_document_does_not_spoil_the_list() {
        let list: Vec<WireStudent> = serde_json::from_value(json!([
            {"_id": "a", "name": "Alice", "age": "20", "roll_no": "CS1", "course": "Physics"},
            {"_id": "b", "name": null, "age": "21", "roll_no": "CS2", "course": "Maths"},
        ]))
        .expect("both documents decode");
        let students: Vec<Student> = list.into_iter().map(Student::from).collect();

        assert_eq!(students.len(), 2);
        assert_eq!(students[1].fields.name, "");
        assert_eq!(students[1].fields.course, "Maths");
    }

    #[test]
    fn writes_always_use_roll_no() {
        let fields = StudentFields {
            name: "Alice".into(),
            age: "20".into(),
            roll_no: "CS001".into(),
            course: "Physics".into(),
        };
        let id = StudentId::new("abc");

        let create = serde_json::to_value(WireWrite::new(None, &fields)).unwrap();
        assert_eq!(
            create,
            json!({"name": "Alice", "age": "20", "roll_no": "CS001", "course": "Physics"})
        );

        let update = serde_json::to_value(WireWrite::new(Some(&id), &fields)).unwrap();
        assert_eq!(update["_id"], "abc");
        assert_eq!(update["roll_no"], "CS001");
        assert!(update.get("rollNo").is_none());
    }

    #[test]
    fn haystack_joins_fields_with_spaces() {
        let student = Student {
            id: StudentId::new("1"),
            fields: StudentFields {
                name: "Bob".into(),
                age: "21".into(),
                roll_no: "X1".into(),
                course: "CS".into(),
            },
        };
        assert_eq!(student.haystack(), "bob 21 x1 cs");
    }
}
