//! CLI module for learnpath.
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing
//! - Version display
//! - Command dispatch onto the API client and view state
//!
//! # Usage
//!
//! ```ignore
//! use learnpath::cli::{parse_args, run_cli_command};
//! use learnpath::config::ClientConfig;
//!
//! let command = parse_args(std::env::args());
//! run_cli_command(command, &ClientConfig::load()?).await?;
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use version::{version_line, VERSION};

use color_eyre::eyre::{bail, eyre};
use color_eyre::Result;

use crate::api::CoursesClient;
use crate::cli_output::{icons, print_header, print_step_line, print_troubleshoot, render};
use crate::config::ClientConfig;
use crate::error::{ErrorContext, ResultExt};
use crate::view_state::{CatalogTab, CatalogViewState, CourseDetailState, StartCourseOutcome};

/// Route path of a course page; the learning view lives under it.
fn course_path(id: &str) -> String {
    format!("/courses/{}", id)
}

fn course_page(client: &CoursesClient, config: &ClientConfig, id: &str) -> CourseDetailState {
    CourseDetailState::new(client.clone(), id, course_path(id)).with_navigation_delay(config.navigation_delay)
}

/// Run a parsed command against the configured backend.
pub async fn run_cli_command(command: CliCommand, config: &ClientConfig) -> Result<()> {
    let client = CoursesClient::from_config(config)?;

    match command {
        CliCommand::Version => println!("{}", version_line()),
        CliCommand::Help => println!("{}", USAGE),
        CliCommand::Invalid(message) => {
            eprintln!("{}", USAGE);
            bail!(message);
        }

        CliCommand::Courses { tab } => {
            let mut catalog = CatalogViewState::new(client);
            catalog.tab = tab;
            catalog.refresh_courses().await;
            if tab != CatalogTab::All {
                catalog.refresh_report().await;
            }
            if let Some(message) = catalog.courses.error() {
                bail!("could not load courses: {}", message);
            }
            print_header(&format!("COURSES ({})", tab.display_name().to_uppercase()));
            println!("{}", render::course_list(&catalog.visible_courses()));
        }

        CliCommand::Course { id, expand_all } => {
            let mut page = course_page(&client, config, &id);
            page.mount()
                .await
                .with_context(|| ErrorContext::new("show course").with_entity_id(id.as_str()))?;
            if expand_all {
                page.expand_all();
            }
            let course = page.course().ok_or_else(|| eyre!("course {} did not load", id))?;
            println!("{}", render::course_details(course, page.expansion()));
        }

        CliCommand::Enroll { id } => {
            let mut page = course_page(&client, config, &id);
            page.mount()
                .await
                .with_context(|| ErrorContext::new("enroll").with_entity_id(id.as_str()))?;
            match page.start_course().await {
                StartCourseOutcome::Navigated(path) => {
                    print_step_line(icons::SUCCESS, &format!("Enrolled in {}", id));
                    print_step_line(icons::SUCCESS, &format!("Continue at {}", path));
                }
                StartCourseOutcome::Failed(failure) => {
                    print_step_line(icons::FAILURE, &failure.reason);
                    print_troubleshoot(&["Check that the course id is correct.", "Try again in a moment."]);
                    bail!(failure.to_string());
                }
                StartCourseOutcome::AlreadyEnrolling | StartCourseOutcome::NotLoaded => {
                    bail!("course {} is not ready for enrollment", id);
                }
            }
        }

        CliCommand::CareerPaths => {
            let paths = client
                .list_career_paths()
                .await
                .context(ErrorContext::new("list career paths"))?;
            print_header("CAREER PATHS");
            println!("{}", render::career_path_list(&paths));
        }

        CliCommand::CareerPath { id } => {
            let path = client
                .get_career_path(&id)
                .await
                .with_context(|| ErrorContext::new("show career path").with_entity_id(id.as_str()))?;
            println!("{}", render::career_path(&path));
        }

        CliCommand::RoadMaps => {
            let roadmaps = client
                .list_road_maps()
                .await
                .context(ErrorContext::new("list roadmaps"))?;
            print_header("ROADMAPS");
            println!("{}", render::road_map_list(&roadmaps));
        }

        CliCommand::RoadMap { id } => {
            let roadmap = client
                .get_road_map(&id)
                .await
                .with_context(|| ErrorContext::new("show roadmap").with_entity_id(id.as_str()))?;
            println!("{}", render::road_map(&roadmap));
        }

        CliCommand::Report => {
            let report = client
                .get_course_report()
                .await
                .context(ErrorContext::new("show report"))?;
            println!("{}", render::report(&report));
        }

        CliCommand::Complete {
            course_id,
            material_id,
            user_id,
        } => {
            let user_id = user_id
                .or_else(|| config.user_id.clone())
                .ok_or_else(|| eyre!("no user id given and none configured (set LEARNPATH_USER_ID)"))?;
            let mut page = course_page(&client, config, &course_id);
            page.mount()
                .await
                .with_context(|| ErrorContext::new("complete material").with_entity_id(course_id.as_str()))?;
            page.complete_material(&material_id, &user_id)
                .await
                .with_context(|| ErrorContext::new("complete material").with_entity_id(material_id.as_str()))?;
            print_step_line(icons::SUCCESS, &format!("Marked {} completed", material_id));
        }
    }

    Ok(())
}
