use colored::*;

use crate::commands::Outcome;

pub struct OutputStyle;

impl OutputStyle {
    pub fn content(text: &str) -> ColoredString {
        text.clear()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn prompt(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    /// Style an outcome for the terminal.
    ///
    /// The text is always `Outcome`'s `Display` output; color only wraps it.
    pub fn outcome(outcome: &Outcome, color: bool) -> String {
        let plain = outcome.to_string();
        if !color {
            return plain;
        }

        let styled = match outcome {
            Outcome::StudentAdded { .. }
            | Outcome::ProjectAdded
            | Outcome::GradeAssigned { .. } => Self::success(&plain),
            Outcome::StudentMissing | Outcome::InvalidEntry => Self::warning(&plain),
            Outcome::Student(_)
            | Outcome::Project(_)
            | Outcome::Grade(_)
            | Outcome::Grades(_)
            | Outcome::Quit => Self::content(&plain),
        };
        styled.to_string()
    }
}

pub fn print_success(message: &str) {
    println!("{}", OutputStyle::success(message));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::Student;

    #[test]
    fn test_plain_outcome_matches_display() {
        let outcome = Outcome::Student(Student::new("Ada", "Lovelace", "ada123"));
        assert_eq!(
            OutputStyle::outcome(&outcome, false),
            "Student: Ada Lovelace\nGitHub account: ada123"
        );
        assert_eq!(
            OutputStyle::outcome(&Outcome::InvalidEntry, false),
            "Invalid Entry. Try again."
        );
    }

    #[test]
    fn test_colored_outcome_keeps_text() {
        colored::control::set_override(true);
        let rendered = OutputStyle::outcome(&Outcome::ProjectAdded, true);
        assert!(rendered.contains("Added"));
    }
}
