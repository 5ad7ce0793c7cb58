//! Row projections for the generic table.
//!
//! A row's cells are its serialized fields in declaration order. Header text
//! never selects a field: the caller must keep the header list and the row
//! struct's field order in step.

use serde::Serialize;

use crate::format::{format_amount, format_locale_date};
use crate::models::{Student, NOT_AVAILABLE};

/// Project any serializable row into its cell texts.
///
/// Objects yield one cell per field in insertion order. Any other value
/// yields a single cell.
pub fn table_row<T: Serialize>(row: &T) -> Vec<String> {
    match serde_json::to_value(row) {
        Ok(serde_json::Value::Object(map)) => map.values().map(cell_text).collect(),
        Ok(other) => vec![cell_text(&other)],
        Err(_) => Vec::new(),
    }
}

/// Project a slice of rows, preserving input order.
pub fn table_rows<T: Serialize>(rows: &[T]) -> Vec<Vec<String>> {
    rows.iter().map(table_row).collect()
}

fn cell_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n
            .as_f64()
            .map(format_amount)
            .unwrap_or_else(|| n.to_string()),
        serde_json::Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

pub const STUDENT_PROFILE_HEADERS: &[&str] =
    &["Name", "Contact Details", "DOB", "Fees Paid", "Class", "Teacher"];

/// The single row of the student dashboard.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StudentProfileRow {
    pub name: String,
    pub contact_details: String,
    pub dob: String,
    pub fees_paid: f64,
    pub class_name: String,
    pub teacher_name: String,
}

impl From<&Student> for StudentProfileRow {
    fn from(student: &Student) -> Self {
        let class = student.primary_class();
        Self {
            name: student.name.clone(),
            contact_details: student.contact_details.clone(),
            dob: format_locale_date(&student.dob),
            fees_paid: student.fees_paid,
            class_name: class
                .map(|c| c.name.clone())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            teacher_name: class
                .and_then(|c| c.teacher_name.clone())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        }
    }
}

pub const ROSTER_HEADERS: &[&str] = &["Student Name"];

/// One student on the teacher dashboard roster.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RosterRow {
    pub name: String,
}

pub const CLASS_MEMBER_HEADERS: &[&str] = &["Name", "Date of Birth", "Gender"];

/// One student on the analytics page. The date is shown as stored.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClassMemberRow {
    pub name: String,
    pub dob: String,
    pub gender: String,
}

impl From<&Student> for ClassMemberRow {
    fn from(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            dob: student.dob.clone(),
            gender: student.gender.clone(),
        }
    }
}
