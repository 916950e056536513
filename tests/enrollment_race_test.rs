//! Enrollment requests abandoned mid-flight, against a slow wiremock server.

use learnpath::api::CoursesClient;
use learnpath::view_state::{CourseDetailState, EnrollmentStatus, StartCourseOutcome};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

#[tokio::test]
async fn test_start_course_while_enrolling_is_a_noop() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/courses/c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::sample_course(false)))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/courses/enroll/c1"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let client = CoursesClient::new(mock_server.uri());
    let mut state = CourseDetailState::new(client, "c1", "/courses/c1").with_navigation_delay(Duration::ZERO);
    state.mount().await.unwrap();

    // Give up on the first enrollment while the request is still pending.
    let first = tokio::time::timeout(Duration::from_millis(200), state.start_course()).await;
    assert!(first.is_err());
    assert_eq!(state.enrollment(), EnrollmentStatus::Enrolling);

    let second = state.start_course().await;
    assert_eq!(second, StartCourseOutcome::AlreadyEnrolling);
    assert_eq!(state.enrollment(), EnrollmentStatus::Enrolling);
}
