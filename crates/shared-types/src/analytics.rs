use crate::models::{total_fees, total_salary, Class, Student, Teacher, NOT_AVAILABLE};

/// Chart categories, in series order.
pub const GENDER_LABELS: [&str; 2] = ["Male", "Female"];

/// Aggregates shown on the per-class analytics page.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassAnalytics {
    pub class: Class,
    pub teacher: Option<Teacher>,
    pub students: Vec<Student>,
    pub male_count: usize,
    pub female_count: usize,
    pub total_revenue: f64,
}

impl ClassAnalytics {
    /// Build the aggregates from a class and its fetched members.
    ///
    /// Gender matching ignores case; other values count toward neither bar.
    pub fn compute(class: Class, teacher: Option<Teacher>, students: Vec<Student>) -> Self {
        let count = |wanted: &str| {
            students
                .iter()
                .filter(|s| s.gender.eq_ignore_ascii_case(wanted))
                .count()
        };
        let male_count = count("male");
        let female_count = count("female");
        let total_revenue = total_fees(&students);
        Self {
            class,
            teacher,
            students,
            male_count,
            female_count,
            total_revenue,
        }
    }

    /// Bar heights matching `GENDER_LABELS`.
    pub fn gender_series(&self) -> [usize; 2] {
        [self.male_count, self.female_count]
    }

    pub fn teacher_name(&self) -> &str {
        self.teacher
            .as_ref()
            .map(|t| t.name.as_str())
            .unwrap_or(NOT_AVAILABLE)
    }

    pub fn total_students(&self) -> usize {
        self.students.len()
    }
}

/// Everything the admin dashboard shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdminOverview {
    pub classes: Vec<Class>,
    pub total_teacher_salary: f64,
    pub total_fees_received: f64,
}

impl AdminOverview {
    pub fn new(classes: Vec<Class>, teachers: &[Teacher], students: &[Student]) -> Self {
        Self {
            classes,
            total_teacher_salary: total_salary(teachers),
            total_fees_received: total_fees(students),
        }
    }

    /// Drop a class from the local list after the API confirmed its deletion.
    /// Returns whether anything was removed.
    pub fn remove_class(&mut self, class_id: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c.id != class_id);
        self.classes.len() != before
    }
}
