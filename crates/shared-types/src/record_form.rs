use std::collections::HashMap;

use crate::auth::Role;
use crate::requests::{
    CreateClassRequest, CreateRecordRequest, CreateStudentRequest, CreateTeacherRequest,
};

/// The three record types the creation form can submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordModel {
    Class,
    Teacher,
    Student,
}

/// Selector order on the form.
pub const ALL_MODELS: [RecordModel; 3] = [RecordModel::Class, RecordModel::Teacher, RecordModel::Student];

const GENDER_OPTIONS: &[&str] = &["Male", "Female"];

/// Input control a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Date,
    Password,
    Select,
}

impl FieldKind {
    /// The `type` attribute value, or `"select"` for a dropdown.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
            FieldKind::Password => "password",
            FieldKind::Select => "select",
        }
    }
}

/// One field of a record form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub label: &'static str,
    pub key: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub options: &'static [&'static str],
}

const fn field(label: &'static str, key: &'static str, kind: FieldKind, required: bool) -> FieldSpec {
    FieldSpec {
        label,
        key,
        kind,
        required,
        options: &[],
    }
}

const CLASS_FIELDS: &[FieldSpec] = &[
    field("Class Name", "name", FieldKind::Text, true),
    field("Year", "year", FieldKind::Text, true),
    field("Teacher ID", "teacher", FieldKind::Text, false),
    field("Student Fees", "studentFees", FieldKind::Number, true),
];

const TEACHER_FIELDS: &[FieldSpec] = &[
    field("Name", "name", FieldKind::Text, true),
    FieldSpec {
        options: GENDER_OPTIONS,
        ..field("Gender", "gender", FieldKind::Select, true)
    },
    field("Date of Birth", "dob", FieldKind::Date, true),
    field("Contact Details", "contactDetails", FieldKind::Text, true),
    field("Salary", "salary", FieldKind::Number, true),
];

const STUDENT_FIELDS: &[FieldSpec] = &[
    field("Name", "name", FieldKind::Text, true),
    FieldSpec {
        options: GENDER_OPTIONS,
        ..field("Gender", "gender", FieldKind::Select, true)
    },
    field("Date of Birth", "dob", FieldKind::Date, true),
    field("Contact Details", "contactDetails", FieldKind::Text, true),
    field("Fees Paid", "feesPaid", FieldKind::Number, true),
];

/// Raw field values keyed by `FieldSpec::key`.
pub type FormValues = HashMap<String, String>;

impl RecordModel {
    /// Display name, also used as the select value.
    pub fn label(&self) -> &'static str {
        match self {
            RecordModel::Class => "Class",
            RecordModel::Teacher => "Teacher",
            RecordModel::Student => "Student",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        ALL_MODELS.into_iter().find(|m| m.label() == label)
    }

    /// Path segment under `/api/`.
    pub fn endpoint(&self) -> &'static str {
        match self {
            RecordModel::Class => "class",
            RecordModel::Teacher => "teacher",
            RecordModel::Student => "student",
        }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            RecordModel::Class => CLASS_FIELDS,
            RecordModel::Teacher => TEACHER_FIELDS,
            RecordModel::Student => STUDENT_FIELDS,
        }
    }

    /// Model preselected for a role. Unrecognized roles get no form.
    pub fn default_for_role(role: &Role) -> Option<Self> {
        match role {
            Role::Admin => Some(RecordModel::Class),
            Role::Teacher => Some(RecordModel::Teacher),
            Role::Student => Some(RecordModel::Student),
            Role::Unrecognized(_) => None,
        }
    }

    /// Text of the success overlay (before the "Redirecting..." suffix).
    pub fn success_message(&self) -> String {
        match self {
            RecordModel::Class => "Congrats! A new class has been added!".to_string(),
            other => format!(
                "Congrats! You've successfully created your {} profile.",
                other.endpoint()
            ),
        }
    }

    /// Build the request body for this model from raw form values.
    ///
    /// Missing values become empty strings and numeric fields that do not
    /// parse become 0.
    pub fn build_request(&self, user_id: &str, values: &FormValues) -> CreateRecordRequest {
        let text = |key: &str| values.get(key).cloned().unwrap_or_default();
        let number = |key: &str| parse_number(values.get(key).map(String::as_str));

        match self {
            RecordModel::Class => CreateRecordRequest::Class(CreateClassRequest {
                user: user_id.to_string(),
                name: text("name"),
                year: text("year"),
                student_fees: number("studentFees"),
                teacher: values.get("teacher").cloned(),
            }),
            RecordModel::Teacher => CreateRecordRequest::Teacher(CreateTeacherRequest {
                user: user_id.to_string(),
                name: text("name"),
                gender: text("gender"),
                dob: text("dob"),
                contact_details: text("contactDetails"),
                salary: number("salary"),
            }),
            RecordModel::Student => CreateRecordRequest::Student(CreateStudentRequest {
                user: user_id.to_string(),
                name: text("name"),
                gender: text("gender"),
                dob: text("dob"),
                contact_details: text("contactDetails"),
                fees_paid: number("feesPaid"),
                class: Vec::new(),
            }),
        }
    }
}

fn parse_number(raw: Option<&str>) -> f64 {
    raw.map(str::trim)
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}
