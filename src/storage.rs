use crate::core::data::{Grade, Project, ProjectGrade, Student};
use crate::core::traits::{GradeStore, ProjectStore, StudentStore};
use crate::utils::error::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension, named_params};
use std::path::Path;

const SCHEMA: &str = "
    PRAGMA foreign_keys = ON;

    CREATE TABLE IF NOT EXISTS students (
        first_name TEXT NOT NULL,
        last_name  TEXT NOT NULL,
        github     TEXT PRIMARY KEY
    );

    CREATE TABLE IF NOT EXISTS projects (
        title       TEXT PRIMARY KEY,
        description TEXT NOT NULL,
        max_grade   INTEGER NOT NULL
    );

    CREATE TABLE IF NOT EXISTS grades (
        student_github TEXT NOT NULL REFERENCES students (github),
        project_title  TEXT NOT NULL REFERENCES projects (title),
        grade          INTEGER NOT NULL,
        PRIMARY KEY (student_github, project_title)
    );
";

/// The single live connection for a session.
///
/// Created once at startup and lent to every handler. Dropping it closes
/// the connection; `close` does the same but reports failures.
pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(path: &Path) -> AppResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        log::debug!("SESSION_OPEN path={}", path.display());
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> AppResult<Self> {
        log::debug!("SESSION_OPEN path=:memory:");
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(Self { conn })
    }

    /// Create the three tables if they do not exist yet
    pub fn init_schema(&self) -> AppResult<()> {
        self.conn.execute_batch(SCHEMA)?;
        log::debug!("SCHEMA_READY tables=students,projects,grades");
        Ok(())
    }

    pub fn close(self) -> AppResult<()> {
        log::debug!("SESSION_CLOSE");
        self.conn.close().map_err(|(_, e)| AppError::Storage(e))
    }
}

impl StudentStore for Database {
    fn find_student(&self, github: &str) -> AppResult<Option<Student>> {
        let student = self
            .conn
            .query_row(
                "SELECT first_name, last_name, github
                 FROM students
                 WHERE github = :github",
                named_params! { ":github": github },
                |row| {
                    Ok(Student {
                        first_name: row.get(0)?,
                        last_name: row.get(1)?,
                        github: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(student)
    }

    fn add_student(&self, student: &Student) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO students (first_name, last_name, github)
             VALUES (:first_name, :last_name, :github)",
            named_params! {
                ":first_name": student.first_name,
                ":last_name": student.last_name,
                ":github": student.github,
            },
        )?;
        log::debug!("STORAGE_INSERT table=students github={}", student.github);
        Ok(())
    }
}

impl ProjectStore for Database {
    fn find_project(&self, title: &str) -> AppResult<Option<Project>> {
        let project = self
            .conn
            .query_row(
                "SELECT title, description, max_grade
                 FROM projects
                 WHERE title = :title",
                named_params! { ":title": title },
                |row| {
                    Ok(Project {
                        title: row.get(0)?,
                        description: row.get(1)?,
                        max_grade: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(project)
    }

    fn add_project(&self, project: &Project) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO projects (title, description, max_grade)
             VALUES (:title, :description, :max_grade)",
            named_params! {
                ":title": project.title,
                ":description": project.description,
                ":max_grade": project.max_grade,
            },
        )?;
        log::debug!("STORAGE_INSERT table=projects title={}", project.title);
        Ok(())
    }
}

impl GradeStore for Database {
    fn find_grade(&self, github: &str, title: &str) -> AppResult<Option<i64>> {
        let grade = self
            .conn
            .query_row(
                "SELECT grade
                 FROM grades
                 WHERE project_title = :title AND student_github = :github",
                named_params! { ":title": title, ":github": github },
                |row| row.get(0),
            )
            .optional()?;
        Ok(grade)
    }

    fn assign_grade(&self, grade: &Grade) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO grades (student_github, project_title, grade)
             VALUES (:github, :title, :grade)",
            named_params! {
                ":github": grade.student_github,
                ":title": grade.project_title,
                ":grade": grade.grade,
            },
        )?;
        log::debug!(
            "STORAGE_INSERT table=grades github={} title={}",
            grade.student_github,
            grade.project_title
        );
        Ok(())
    }

    fn grades_for_student(&self, github: &str) -> AppResult<Vec<ProjectGrade>> {
        let mut stmt = self.conn.prepare(
            "SELECT grade, project_title
             FROM grades
             WHERE student_github = :github
             ORDER BY rowid",
        )?;

        let grades = stmt
            .query_map(named_params! { ":github": github }, |row| {
                Ok(ProjectGrade {
                    grade: row.get(0)?,
                    project_title: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(grades)
    }
}
