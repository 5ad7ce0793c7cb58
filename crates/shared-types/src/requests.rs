use serde::{Deserialize, Serialize};

/// Body of `POST /api/class/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateClassRequest {
    pub user: String,
    pub name: String,
    pub year: String,
    #[serde(rename = "studentFees")]
    pub student_fees: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher: Option<String>,
}

/// Body of `POST /api/teacher/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateTeacherRequest {
    pub user: String,
    pub name: String,
    pub gender: String,
    pub dob: String,
    #[serde(rename = "contactDetails")]
    pub contact_details: String,
    pub salary: f64,
}

/// Body of `POST /api/student/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateStudentRequest {
    pub user: String,
    pub name: String,
    pub gender: String,
    pub dob: String,
    #[serde(rename = "contactDetails")]
    pub contact_details: String,
    #[serde(rename = "feesPaid")]
    pub fees_paid: f64,
    /// Always sent empty; enrollment happens through the class endpoints.
    pub class: Vec<String>,
}

/// Any of the three record-creation bodies.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum CreateRecordRequest {
    Class(CreateClassRequest),
    Teacher(CreateTeacherRequest),
    Student(CreateStudentRequest),
}

/// Body of `PUT /api/class/:id/assign-student`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssignStudentRequest {
    #[serde(rename = "studentId")]
    pub student_id: String,
}

/// Body of `PUT /api/teacher/:id/assign-class`. Classes are linked by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssignClassRequest {
    pub class: String,
}
