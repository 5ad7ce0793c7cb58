use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder shown wherever a reference is missing or unpopulated.
pub const NOT_AVAILABLE: &str = "N/A";

// ---------------------------------------------------------------------------
// Lenient field decoding
// ---------------------------------------------------------------------------

/// Accept a number, a numeric string, or null. Anything unusable becomes 0.
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(serde_json::Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

/// Accept a string, a number, or null. Null becomes the empty string.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Number(n)) => n.to_string(),
        Some(serde_json::Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}

/// Treat `null` like a missing list.
fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// References
// ---------------------------------------------------------------------------

/// Documents that carry a remote identifier.
pub trait Identified {
    fn id(&self) -> &str;
}

/// A reference to another document: either its bare id or the populated
/// document, depending on which endpoint produced it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Ref<T> {
    Id(String),
    Doc(T),
}

impl<T: Identified> Ref<T> {
    pub fn id(&self) -> &str {
        match self {
            Ref::Id(id) => id,
            Ref::Doc(doc) => doc.id(),
        }
    }

    /// The populated document, if the API expanded the reference.
    pub fn doc(&self) -> Option<&T> {
        match self {
            Ref::Id(_) => None,
            Ref::Doc(doc) => Some(doc),
        }
    }
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// A class as returned by `/api/class` and `/api/class/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Class {
    #[serde(rename = "_id", default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub year: String,
    #[serde(default)]
    pub teacher: Option<Ref<Teacher>>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub students: Vec<Ref<Student>>,
    #[serde(rename = "studentFees", default, deserialize_with = "lenient_f64")]
    pub student_fees: f64,
}

impl Identified for Class {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Class {
    /// Name of the populated teacher, or `N/A`.
    pub fn teacher_name(&self) -> &str {
        self.teacher
            .as_ref()
            .and_then(Ref::doc)
            .map(|t| t.name.as_str())
            .unwrap_or(NOT_AVAILABLE)
    }

    /// Id of the referenced teacher, whether populated or not.
    pub fn teacher_id(&self) -> Option<&str> {
        self.teacher
            .as_ref()
            .map(Ref::id)
            .filter(|id| !id.is_empty())
    }

    pub fn student_ids(&self) -> Vec<String> {
        self.students.iter().map(|s| s.id().to_string()).collect()
    }

    pub fn student_count(&self) -> usize {
        self.students.len()
    }
}

/// A student as returned by the `/api/student` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Student {
    #[serde(rename = "_id", default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub gender: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub dob: String,
    #[serde(rename = "contactDetails", default, deserialize_with = "lenient_string")]
    pub contact_details: String,
    #[serde(rename = "feesPaid", default, deserialize_with = "lenient_f64")]
    pub fees_paid: f64,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub class: Vec<Ref<EnrolledClass>>,
}

impl Identified for Student {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Student {
    /// First class the student is enrolled in, when the API populated it.
    pub fn primary_class(&self) -> Option<&EnrolledClass> {
        self.class.first().and_then(Ref::doc)
    }
}

/// Class entry embedded in a student profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EnrolledClass {
    #[serde(rename = "_id", default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(rename = "teacherName", default)]
    pub teacher_name: Option<String>,
}

impl Identified for EnrolledClass {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A teacher as returned by the `/api/teacher` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Teacher {
    #[serde(rename = "_id", default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub gender: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub dob: String,
    #[serde(rename = "contactDetails", default, deserialize_with = "lenient_string")]
    pub contact_details: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub salary: f64,
    #[serde(rename = "assignedClass", default)]
    pub assigned_class: Option<Box<Ref<Class>>>,
}

impl Identified for Teacher {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Teacher {
    /// The populated class this teacher is assigned to.
    pub fn assigned_class(&self) -> Option<&Class> {
        self.assigned_class.as_deref().and_then(Ref::doc)
    }

    /// Names of the students in the populated assigned class.
    pub fn roster_names(&self) -> Vec<String> {
        self.assigned_class()
            .map(|class| {
                class
                    .students
                    .iter()
                    .filter_map(Ref::doc)
                    .map(|s| s.name.clone())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Sum of teacher salaries, as shown on the admin dashboard.
pub fn total_salary(teachers: &[Teacher]) -> f64 {
    teachers.iter().map(|t| t.salary).sum()
}

/// Sum of fees paid by the given students.
pub fn total_fees(students: &[Student]) -> f64 {
    students.iter().map(|s| s.fees_paid).sum()
}
