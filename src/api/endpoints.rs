//! REST paths, relative to the API base URL.

use crate::models::PatchCourseProgressParams;

fn seg(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

pub fn career_paths() -> String {
    "/courses/list/careerpath".to_string()
}

pub fn career_path(id: &str) -> String {
    format!("/courses/careerpath/{}", seg(id))
}

pub fn road_maps() -> String {
    "/courses/list/roadmap".to_string()
}

pub fn road_map(id: &str) -> String {
    format!("/courses/roadmap/{}", seg(id))
}

/// The trailing slash is part of the backend route.
pub fn courses() -> String {
    "/courses/list/".to_string()
}

pub fn course(id: &str) -> String {
    format!("/courses/{}", seg(id))
}

pub fn enroll_course(id: &str) -> String {
    format!("/courses/enroll/{}", seg(id))
}

pub fn enroll_road_map(id: &str) -> String {
    format!("/courses/enroll/roadmap/{}", seg(id))
}

pub fn enroll_career_path(id: &str) -> String {
    format!("/courses/enroll/careerpath/{}", seg(id))
}

pub fn course_report() -> String {
    "/courses/report".to_string()
}

/// Ids travel both in the path and in the query string.
pub fn course_progress(params: &PatchCourseProgressParams) -> String {
    let course_id = seg(params.course_id.as_str());
    let material_id = seg(params.material_id.as_str());
    format!(
        "/courses/progress/{course}/{material}?userId={user}&courseId={course}&materialId={material}",
        course = course_id,
        material = material_id,
        user = seg(params.user_id.as_str()),
    )
}
