//! Console command parsing and dispatch.
//!
//! A line is split on whitespace; the first token names the command and the
//! rest are positional arguments. `Command::parse` checks arity and numeric
//! fields before anything touches storage.

pub mod configure;
pub mod handlers;

use crate::core::data::{Project, ProjectGrade, Student};
use crate::utils::error::{AppError, AppResult};
use std::fmt;

pub use handlers::execute;

/// Token that ends an interactive session
pub const QUIT: &str = "quit";

/// A validated console command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Student {
        github: String,
    },
    NewStudent {
        first_name: String,
        last_name: String,
        github: String,
    },
    ProjectDescription {
        title: String,
    },
    Grade {
        github: String,
        title: String,
    },
    AssignGrade {
        github: String,
        title: String,
        grade: i64,
    },
    AddProject {
        title: String,
        description: String,
        max_grade: i64,
    },
    AllGrades {
        github: String,
    },
    Quit,
    /// Any first token that is not a known command
    Unknown(String),
}

/// What a handler produced, ready to be displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Student(Student),
    StudentMissing,
    StudentAdded { first_name: String, last_name: String },
    Project(Project),
    Grade(i64),
    GradeAssigned { github: String, title: String, grade: i64 },
    ProjectAdded,
    Grades(Vec<ProjectGrade>),
    InvalidEntry,
    Quit,
}

impl Command {
    /// Parse one input line. Returns `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> AppResult<Option<Self>> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.split_first() {
            Some((name, args)) => Self::from_tokens(name, args).map(Some),
            None => Ok(None),
        }
    }

    pub fn from_tokens(name: &str, args: &[&str]) -> AppResult<Self> {
        let command = match name {
            "student" => {
                let [github] = expect_args::<1>(name, args)?;
                Command::Student {
                    github: github.to_string(),
                }
            }
            "new_student" => {
                let [first_name, last_name, github] = expect_args::<3>(name, args)?;
                Command::NewStudent {
                    first_name: first_name.to_string(),
                    last_name: last_name.to_string(),
                    github: github.to_string(),
                }
            }
            "project_description" => {
                let [title] = expect_args::<1>(name, args)?;
                Command::ProjectDescription {
                    title: title.to_string(),
                }
            }
            "grade" => {
                let [github, title] = expect_args::<2>(name, args)?;
                Command::Grade {
                    github: github.to_string(),
                    title: title.to_string(),
                }
            }
            "assign_grade" => {
                let [github, title, grade] = expect_args::<3>(name, args)?;
                Command::AssignGrade {
                    github: github.to_string(),
                    title: title.to_string(),
                    grade: parse_number("grade", grade)?,
                }
            }
            "add_project" => {
                let [title, description, max_grade] = expect_args::<3>(name, args)?;
                Command::AddProject {
                    title: title.to_string(),
                    description: description.to_string(),
                    max_grade: parse_number("max_grade", max_grade)?,
                }
            }
            "all_grades" => {
                let [github] = expect_args::<1>(name, args)?;
                Command::AllGrades {
                    github: github.to_string(),
                }
            }
            QUIT => Command::Quit,
            other => Command::Unknown(other.to_string()),
        };
        Ok(command)
    }

    pub fn name(&self) -> &str {
        match self {
            Command::Student { .. } => "student",
            Command::NewStudent { .. } => "new_student",
            Command::ProjectDescription { .. } => "project_description",
            Command::Grade { .. } => "grade",
            Command::AssignGrade { .. } => "assign_grade",
            Command::AddProject { .. } => "add_project",
            Command::AllGrades { .. } => "all_grades",
            Command::Quit => QUIT,
            Command::Unknown(name) => name.as_str(),
        }
    }
}

fn expect_args<'a, const N: usize>(command: &str, args: &[&'a str]) -> AppResult<[&'a str; N]> {
    <[&str; N]>::try_from(args).map_err(|_| AppError::Usage {
        command: command.to_string(),
        expected: N,
        got: args.len(),
    })
}

fn parse_number(field: &str, value: &str) -> AppResult<i64> {
    value.parse().map_err(|_| AppError::InvalidNumber {
        field: field.to_string(),
        value: value.to_string(),
    })
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Student(student) => write!(
                f,
                "Student: {}\nGitHub account: {}",
                student.full_name(),
                student.github
            ),
            Outcome::StudentMissing => write!(f, "Try again"),
            Outcome::StudentAdded {
                first_name,
                last_name,
            } => write!(f, "Successfully added student: {} {}", first_name, last_name),
            Outcome::Project(project) => write!(
                f,
                "The project title is {} and max grade is {} and the description is {}",
                project.title, project.max_grade, project.description
            ),
            Outcome::Grade(grade) => write!(f, "Your grade is {}", grade),
            Outcome::GradeAssigned {
                github,
                title,
                grade,
            } => write!(
                f,
                "Assigned a grade for {} with project {} a grade of {}",
                github, title, grade
            ),
            Outcome::ProjectAdded => write!(f, "Added"),
            Outcome::Grades(grades) => {
                let lines: Vec<String> = grades
                    .iter()
                    .map(|g| format!("Project title: {} and Grade: {}", g.project_title, g.grade))
                    .collect();
                write!(f, "{}", lines.join("\n"))
            }
            Outcome::InvalidEntry => write!(f, "Invalid Entry. Try again."),
            Outcome::Quit => Ok(()),
        }
    }
}
