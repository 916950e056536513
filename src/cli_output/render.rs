//! Plain-text rendering of courses, listings and the report.

use super::boxes::{field, header, icons, progress_bar, section, step_line};
use crate::models::{CareerPath, Course, CourseDetails, CoursesReport, Material, RoadMap};
use crate::view_state::ModuleExpansion;

fn minutes_label(minutes: u32) -> String {
    if minutes >= 60 {
        format!("{}h {:02}m", minutes / 60, minutes % 60)
    } else {
        format!("{}m", minutes)
    }
}

fn enrolled_icon(enrolled: Option<bool>) -> &'static str {
    match enrolled {
        Some(true) => icons::SUCCESS,
        _ => icons::PENDING,
    }
}

/// One line per course.
pub fn course_list(courses: &[&Course]) -> String {
    if courses.is_empty() {
        return step_line(icons::PENDING, "No courses");
    }
    courses
        .iter()
        .map(|c| {
            let mut line = format!("[{}] {}", c.id, c.title);
            if let Some(level) = c.level {
                line.push_str(&format!(" ({})", level));
            }
            if let Some(hours) = c.advertised_hours() {
                line.push_str(&format!(" {}h", hours));
            }
            step_line(enrolled_icon(c.is_enrolled), &line)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn material_line(material: &Material, enrolled: bool) -> String {
    let icon = if material.completed {
        icons::SUCCESS
    } else if !material.is_accessible(enrolled) {
        icons::LOCKED
    } else {
        icons::PENDING
    };
    let mut line = format!("    {} {} [{}]", icon, material.display_title(), material.kind().label());
    if let Some(minutes) = material.duration_minutes() {
        line.push_str(&format!(" {}", minutes_label(minutes)));
    }
    line
}

/// Course summary, statistics and the module accordion. Lessons are listed
/// only for expanded modules.
pub fn course_details(course: &CourseDetails, expansion: &ModuleExpansion) -> String {
    let stats = course.stats();
    let enrolled = course.enrolled();
    let mut out = vec![header(&course.course.title.to_uppercase())];

    if !course.course.description.is_empty() {
        out.push(course.course.description.clone());
        out.push(String::new());
    }
    if let Some(level) = course.course.level {
        out.push(field("Level", level.label()));
    }
    out.push(field("Enrolled", if enrolled { "yes" } else { "no" }));
    out.push(field("Modules", &stats.module_count.to_string()));
    out.push(field("Lessons", &stats.total_lessons.to_string()));
    out.push(field("Completed", &format!("{} lessons", stats.lesson_progress().as_fraction())));
    out.push(field("Duration", &minutes_label(stats.total_duration_minutes)));
    out.push(field("Progress", &progress_bar(stats.progress_percentage)));
    if let Some(reported) = stats.reported_completed_lessons {
        if stats.has_progress_mismatch() {
            out.push(step_line(
                icons::WARNING,
                &format!(
                    "server reports {} completed lessons, materials show {}",
                    reported, stats.completed_lessons
                ),
            ));
        }
    }

    for (index, module) in course.modules.iter().enumerate() {
        let expanded = expansion.is_expanded(module.id.as_str());
        let module_stats = crate::models::ModuleStats::from_module(module);
        out.push(String::new());
        out.push(section(&format!(
            "{} MODULE {}: {} ({} lessons, {}%)",
            if expanded { icons::EXPANDED } else { icons::COLLAPSED },
            index + 1,
            module.title,
            module_stats.lesson_count,
            module_stats.percentage()
        )));
        if !expanded {
            continue;
        }
        for lesson in module.lessons_in_order() {
            let icon = if lesson.is_completed() { icons::SUCCESS } else { icons::PENDING };
            out.push(step_line(icon, &lesson.name));
            for material in lesson.materials_in_order() {
                out.push(material_line(material, enrolled));
            }
        }
    }
    out.join("\n")
}

pub fn career_path_list(paths: &[CareerPath]) -> String {
    if paths.is_empty() {
        return step_line(icons::PENDING, "No career paths");
    }
    paths
        .iter()
        .map(|p| step_line(enrolled_icon(p.is_enrolled), &format!("[{}] {}", p.id, p.title)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn career_path(path: &CareerPath) -> String {
    let mut out = vec![header(&path.title.to_uppercase())];
    if !path.description.is_empty() {
        out.push(path.description.clone());
        out.push(String::new());
    }
    out.push(field("Enrolled", if path.enrolled() { "yes" } else { "no" }));
    out.push(field("Courses", &path.total_courses().to_string()));
    for (index, roadmap) in path.roadmaps_in_order().into_iter().enumerate() {
        out.push(String::new());
        out.push(section(&format!("ROADMAP {}: {}", index + 1, roadmap.title)));
        out.push(road_map_courses(roadmap));
    }
    out.join("\n")
}

pub fn road_map_list(roadmaps: &[RoadMap]) -> String {
    if roadmaps.is_empty() {
        return step_line(icons::PENDING, "No roadmaps");
    }
    roadmaps
        .iter()
        .map(|r| {
            step_line(
                enrolled_icon(r.is_enrolled),
                &format!("[{}] {} ({} courses)", r.id, r.title, r.courses.len()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn road_map_courses(roadmap: &RoadMap) -> String {
    let courses: Vec<&Course> = roadmap.courses.iter().map(|c| &c.course).collect();
    course_list(&courses)
}

pub fn road_map(roadmap: &RoadMap) -> String {
    let mut out = vec![header(&roadmap.title.to_uppercase())];
    if let Some(ref description) = roadmap.description {
        out.push(description.clone());
        out.push(String::new());
    }
    out.push(field("Enrolled", if roadmap.enrolled() { "yes" } else { "no" }));
    out.push(field("Lessons", &roadmap.total_lessons().to_string()));
    out.push(field("Duration", &minutes_label(roadmap.total_duration())));
    out.push(String::new());
    out.push(road_map_courses(roadmap));
    out.join("\n")
}

/// Top-level report fields; nested values are printed as compact JSON.
pub fn report(report: &CoursesReport) -> String {
    let mut out = vec![header("PROGRESS REPORT")];
    let entries = report.entries();
    if entries.is_empty() {
        out.push(report.as_value().to_string());
    }
    for (key, value) in entries {
        let text = match value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Array(items) => format!("{} items", items.len()),
            other => other.to_string(),
        };
        out.push(field(key, &text));
    }
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> CourseDetails {
        serde_json::from_value(json!({
            "id": "c1",
            "title": "Rust",
            "level": "BEGINNER",
            "isEnrolled": false,
            "modules": [
                {"id": "m1", "title": "Basics", "lessons": [
                    {"id": "l2", "name": "Second", "order": 2, "materials": []},
                    {"id": "l1", "name": "First", "order": 1, "materials": [
                        {"id": "a1", "type": "video", "title": "Welcome", "duration": "75", "completed": true},
                        {"id": "a2", "type": "quiz", "locked": true}
                    ]}
                ]},
                {"id": "m2", "title": "Traits", "lessons": [
                    {"id": "l3", "name": "Hidden", "order": 1, "materials": []}
                ]}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_minutes_label() {
        assert_eq!(minutes_label(45), "45m");
        assert_eq!(minutes_label(75), "1h 15m");
    }

    #[test]
    fn test_course_details_lists_expanded_modules_only() {
        let course = sample();
        let mut expansion = ModuleExpansion::new();
        expansion.expand_only(course.modules.first().map(|m| &m.id));

        let text = course_details(&course, &expansion);
        assert!(text.starts_with("RUST\n"));
        assert!(text.contains("Completed:   0/3 lessons"));
        assert!(text.contains("▾ MODULE 1: Basics (2 lessons, 50%)"));
        assert!(text.contains("▸ MODULE 2: Traits (1 lessons, 0%)"));
        assert!(!text.contains("Hidden"));

        let first = text.find("First").unwrap();
        let second = text.find("Second").unwrap();
        assert!(first < second);

        assert!(text.contains("✓ Welcome [Video] 1h 15m"));
        assert!(text.contains("🔒 Quiz [Quiz]"));
    }

    #[test]
    fn test_course_list() {
        let course: Course =
            serde_json::from_value(json!({"id": 7, "title": "Go", "isEnrolled": true})).unwrap();
        assert_eq!(course_list(&[&course]), "  ✓ [7] Go");
        assert_eq!(course_list(&[]), "  · No courses");
    }

    #[test]
    fn test_report_fields() {
        let text = report(&CoursesReport(json!({"completedCourses": ["c1"], "streak": 3})));
        assert!(text.contains("completedCourses: 1 items"));
        assert!(text.contains("streak:"));
    }
}
