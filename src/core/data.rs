//! Core data structures for the project tracker
//!
//! Rows of the `students`, `projects` and `grades` tables as typed values.

/// A student, keyed by GitHub handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub first_name: String,
    pub last_name: String,
    pub github: String,
}

/// A class project, keyed by title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub max_grade: i64,
}

/// A grade a student received on a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grade {
    pub student_github: String,
    pub project_title: String,
    pub grade: i64,
}

/// One line of a student's report card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectGrade {
    pub project_title: String,
    pub grade: i64,
}

impl Student {
    pub fn new(first_name: &str, last_name: &str, github: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            github: github.to_string(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Project {
    pub fn new(title: &str, description: &str, max_grade: i64) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            max_grade,
        }
    }
}

impl Grade {
    pub fn new(student_github: &str, project_title: &str, grade: i64) -> Self {
        Self {
            student_github: student_github.to_string(),
            project_title: project_title.to_string(),
            grade,
        }
    }
}
