use crate::commands::{Command, Outcome};
use crate::core::data::{Grade, Project, Student};
use crate::core::traits::Tracker;
use crate::utils::error::{AppError, AppResult};

/// Run one command against storage. Each handler is a single round trip.
pub fn execute<T: Tracker + ?Sized>(store: &T, command: &Command) -> AppResult<Outcome> {
    match command {
        Command::Student { github } => handle_student(store, github),
        Command::NewStudent {
            first_name,
            last_name,
            github,
        } => handle_new_student(store, first_name, last_name, github),
        Command::ProjectDescription { title } => handle_project_description(store, title),
        Command::Grade { github, title } => handle_grade(store, github, title),
        Command::AssignGrade {
            github,
            title,
            grade,
        } => handle_assign_grade(store, github, title, *grade),
        Command::AddProject {
            title,
            description,
            max_grade,
        } => handle_add_project(store, title, description, *max_grade),
        Command::AllGrades { github } => handle_all_grades(store, github),
        Command::Quit => Ok(Outcome::Quit),
        Command::Unknown(name) => {
            log::debug!("COMMAND_UNKNOWN command={}", name);
            Ok(Outcome::InvalidEntry)
        }
    }
}

/// Missing students degrade to a retry message instead of an error.
fn handle_student<T: Tracker + ?Sized>(store: &T, github: &str) -> AppResult<Outcome> {
    match store.find_student(github)? {
        Some(student) => Ok(Outcome::Student(student)),
        None => Ok(Outcome::StudentMissing),
    }
}

fn handle_new_student<T: Tracker + ?Sized>(
    store: &T,
    first_name: &str,
    last_name: &str,
    github: &str,
) -> AppResult<Outcome> {
    store.add_student(&Student::new(first_name, last_name, github))?;
    Ok(Outcome::StudentAdded {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
    })
}

fn handle_project_description<T: Tracker + ?Sized>(store: &T, title: &str) -> AppResult<Outcome> {
    store
        .find_project(title)?
        .map(Outcome::Project)
        .ok_or_else(|| AppError::not_found("Project", title))
}

fn handle_grade<T: Tracker + ?Sized>(store: &T, github: &str, title: &str) -> AppResult<Outcome> {
    store
        .find_grade(github, title)?
        .map(Outcome::Grade)
        .ok_or_else(|| AppError::not_found("Grade", format!("{}/{}", github, title)))
}

fn handle_assign_grade<T: Tracker + ?Sized>(
    store: &T,
    github: &str,
    title: &str,
    grade: i64,
) -> AppResult<Outcome> {
    store.assign_grade(&Grade::new(github, title, grade))?;
    Ok(Outcome::GradeAssigned {
        github: github.to_string(),
        title: title.to_string(),
        grade,
    })
}

fn handle_add_project<T: Tracker + ?Sized>(
    store: &T,
    title: &str,
    description: &str,
    max_grade: i64,
) -> AppResult<Outcome> {
    store.add_project(&Project::new(title, description, max_grade))?;
    Ok(Outcome::ProjectAdded)
}

fn handle_all_grades<T: Tracker + ?Sized>(store: &T, github: &str) -> AppResult<Outcome> {
    Ok(Outcome::Grades(store.grades_for_student(github)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Database;

    fn run(db: &Database, line: &str) -> AppResult<Outcome> {
        let command = Command::parse(line)?.expect("non-blank line");
        execute(db, &command)
    }

    fn fresh() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.init_schema().unwrap();
        db
    }

    #[test]
    fn test_new_student_then_lookup() {
        let db = fresh();
        let added = run(&db, "new_student Ada Lovelace ada123").unwrap();
        assert_eq!(added.to_string(), "Successfully added student: Ada Lovelace");

        let found = run(&db, "student ada123").unwrap();
        assert_eq!(
            found,
            Outcome::Student(Student::new("Ada", "Lovelace", "ada123"))
        );
    }

    #[test]
    fn test_missing_student_is_not_an_error() {
        let db = fresh();
        assert_eq!(run(&db, "student ghost").unwrap(), Outcome::StudentMissing);
    }

    #[test]
    fn test_project_and_grade_round_trip() {
        let db = fresh();
        run(&db, "new_student Ada Lovelace ada123").unwrap();
        assert_eq!(run(&db, "add_project proj1 desc 10").unwrap(), Outcome::ProjectAdded);

        let project = run(&db, "project_description proj1").unwrap();
        assert_eq!(project, Outcome::Project(Project::new("proj1", "desc", 10)));

        let assigned = run(&db, "assign_grade ada123 proj1 9").unwrap();
        assert_eq!(
            assigned.to_string(),
            "Assigned a grade for ada123 with project proj1 a grade of 9"
        );
        assert_eq!(run(&db, "grade ada123 proj1").unwrap(), Outcome::Grade(9));
    }

    #[test]
    fn test_missing_project_and_grade_are_not_found() {
        let db = fresh();
        let err = run(&db, "project_description nope").unwrap_err();
        assert!(matches!(err, AppError::NotFound { ref item_type, .. } if item_type == "Project"));

        let err = run(&db, "grade ada123 nope").unwrap_err();
        assert!(matches!(err, AppError::NotFound { ref item_type, .. } if item_type == "Grade"));
    }

    #[test]
    fn test_all_grades_lists_every_assignment() {
        let db = fresh();
        run(&db, "new_student Ada Lovelace ada123").unwrap();
        run(&db, "new_student Grace Hopper grace").unwrap();
        for (title, grade) in [("p1", 7), ("p2", 8), ("p3", 9)] {
            run(&db, &format!("add_project {} d 10", title)).unwrap();
            run(&db, &format!("assign_grade ada123 {} {}", title, grade)).unwrap();
        }
        run(&db, "assign_grade grace p1 10").unwrap();

        match run(&db, "all_grades ada123").unwrap() {
            Outcome::Grades(grades) => {
                assert_eq!(grades.len(), 3);
                assert_eq!(grades[2].project_title, "p3");
                assert_eq!(grades[2].grade, 9);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(
            run(&db, "all_grades nobody").unwrap(),
            Outcome::Grades(Vec::new())
        );
    }

    #[test]
    fn test_unknown_and_quit() {
        let db = fresh();
        assert_eq!(run(&db, "hello there").unwrap(), Outcome::InvalidEntry);
        assert_eq!(run(&db, "quit").unwrap(), Outcome::Quit);
    }
}
