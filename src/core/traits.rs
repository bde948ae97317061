//! Core trait definitions for the project tracker
//!
//! Every handler talks to storage through these traits, so the command
//! layer never sees a concrete connection type.

use crate::core::data::{Grade, Project, ProjectGrade, Student};
use crate::utils::error::AppResult;

/// Student lookups and inserts
pub trait StudentStore {
    /// Find a student by GitHub handle
    fn find_student(&self, github: &str) -> AppResult<Option<Student>>;

    /// Insert a new student
    fn add_student(&self, student: &Student) -> AppResult<()>;
}

/// Project lookups and inserts
pub trait ProjectStore {
    /// Find a project by title
    fn find_project(&self, title: &str) -> AppResult<Option<Project>>;

    /// Insert a new project
    fn add_project(&self, project: &Project) -> AppResult<()>;
}

/// Grade lookups and inserts
pub trait GradeStore {
    /// Find the grade a student received for one project
    fn find_grade(&self, github: &str, title: &str) -> AppResult<Option<i64>>;

    /// Insert a grade row
    fn assign_grade(&self, grade: &Grade) -> AppResult<()>;

    /// All grades recorded for a student, in storage order
    fn grades_for_student(&self, github: &str) -> AppResult<Vec<ProjectGrade>>;
}

/// Everything the command dispatcher needs from storage
pub trait Tracker: StudentStore + ProjectStore + GradeStore {}

impl<T: StudentStore + ProjectStore + GradeStore> Tracker for T {}
