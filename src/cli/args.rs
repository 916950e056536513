//! Command-line argument parsing for the learnpath CLI.

use crate::view_state::CatalogTab;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// List courses, optionally filtered by tab
    Courses { tab: CatalogTab },
    /// Show one course with its modules
    Course { id: String, expand_all: bool },
    /// Enroll in a course and print the learning path
    Enroll { id: String },
    CareerPaths,
    CareerPath { id: String },
    RoadMaps,
    RoadMap { id: String },
    /// Print the progress report
    Report,
    /// Mark a material completed
    Complete {
        course_id: String,
        material_id: String,
        /// Falls back to the configured user id.
        user_id: Option<String>,
    },
    /// Arguments could not be parsed
    Invalid(String),
}

/// Usage text printed by `--help` and after a parse error.
pub const USAGE: &str = "\
Usage:
  learnpath courses [--tab all|started|done]
  learnpath course <id> [--expand-all]
  learnpath enroll <id>
  learnpath career-paths
  learnpath career-path <id>
  learnpath road-maps
  learnpath road-map <id>
  learnpath report
  learnpath complete <course-id> <material-id> [<user-id>]
  learnpath --version | --help";

/// Parse command-line arguments and return the appropriate command.
///
/// # Examples
///
/// ```
/// use learnpath::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["learnpath".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    // Skip the program name
    let args: Vec<String> = args.skip(1).collect();
    let Some(command) = args.first() else {
        return CliCommand::Help;
    };
    let rest = &args[1..];

    match command.as_str() {
        "--version" | "-V" => CliCommand::Version,
        "--help" | "-h" | "help" => CliCommand::Help,
        "courses" => parse_courses(rest),
        "course" => match (rest.first(), rest.get(1).map(String::as_str)) {
            (Some(id), None) => CliCommand::Course {
                id: id.clone(),
                expand_all: false,
            },
            (Some(id), Some("--expand-all")) if rest.len() == 2 => CliCommand::Course {
                id: id.clone(),
                expand_all: true,
            },
            _ => CliCommand::Invalid("course expects <id> [--expand-all]".to_string()),
        },
        "enroll" => single_id(rest, "enroll", |id| CliCommand::Enroll { id }),
        "career-paths" => no_args(rest, "career-paths", CliCommand::CareerPaths),
        "career-path" => single_id(rest, "career-path", |id| CliCommand::CareerPath { id }),
        "road-maps" => no_args(rest, "road-maps", CliCommand::RoadMaps),
        "road-map" => single_id(rest, "road-map", |id| CliCommand::RoadMap { id }),
        "report" => no_args(rest, "report", CliCommand::Report),
        "complete" => match rest {
            [course_id, material_id] => CliCommand::Complete {
                course_id: course_id.clone(),
                material_id: material_id.clone(),
                user_id: None,
            },
            [course_id, material_id, user_id] => CliCommand::Complete {
                course_id: course_id.clone(),
                material_id: material_id.clone(),
                user_id: Some(user_id.clone()),
            },
            _ => CliCommand::Invalid(
                "complete expects <course-id> <material-id> [<user-id>]".to_string(),
            ),
        },
        other => CliCommand::Invalid(format!("unknown command '{}'", other)),
    }
}

fn parse_courses(rest: &[String]) -> CliCommand {
    match rest {
        [] => CliCommand::Courses {
            tab: CatalogTab::All,
        },
        [flag, value] if flag == "--tab" => match value.parse() {
            Ok(tab) => CliCommand::Courses { tab },
            Err(message) => CliCommand::Invalid(message),
        },
        _ => CliCommand::Invalid("courses accepts only --tab <all|started|done>".to_string()),
    }
}

fn single_id(rest: &[String], name: &str, build: impl FnOnce(String) -> CliCommand) -> CliCommand {
    match rest {
        [id] => build(id.clone()),
        _ => CliCommand::Invalid(format!("{} expects exactly one <id>", name)),
    }
}

fn no_args(rest: &[String], name: &str, command: CliCommand) -> CliCommand {
    if rest.is_empty() {
        command
    } else {
        CliCommand::Invalid(format!("{} takes no arguments", name))
    }
}
