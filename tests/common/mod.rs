//! Shared fixtures for integration tests.

#![allow(dead_code)]

use serde_json::{json, Value};
use std::sync::Arc;

use learnpath::adapters::MockHttpClient;
use learnpath::api::CoursesClient;

pub const BASE_URL: &str = "http://api.test";

/// Two modules; the first has lessons stored out of order and a locked
/// quiz, the second is empty. Durations add up to 30 minutes.
pub fn sample_course(enrolled: bool) -> Value {
    json!({
        "id": "c1",
        "title": "Rust for Beginners",
        "description": "Ownership, borrowing and traits",
        "level": "BEGINNER",
        "duration": "12",
        "isEnrolled": enrolled,
        "progress": {"completedLessons": 1},
        "modules": [
            {
                "id": "m1",
                "title": "Getting started",
                "lessons": [
                    {"id": "l2", "name": "Cargo", "order": 2, "materials": [
                        {"id": "a3", "type": "text", "duration": "5 دقائق"}
                    ]},
                    {"id": "l1", "name": "Hello", "order": 1, "materials": [
                        {"id": "a1", "type": "video", "duration": "10", "completed": true,
                         "video": {"youtubeId": "abc", "title": "Welcome", "duration": 10}},
                        {"id": "a2", "type": "quiz", "duration": "15", "locked": true,
                         "quiz": {"question": "What is a crate?", "options": ["a", "b"], "correctAnswer": "a"}}
                    ]}
                ]
            },
            {"id": "m2", "title": "Ownership", "lessons": []}
        ]
    })
}

pub fn course_summaries() -> Value {
    json!([
        {"id": 1, "title": "Rust", "level": "BEGINNER", "isEnrolled": true},
        {"id": 2, "title": "Go", "level": "INTERMEDIATE", "isEnrolled": true},
        {"id": 3, "title": "Zig", "level": "ADVANCED"}
    ])
}

pub fn road_maps() -> Value {
    json!([
        {"id": "r1", "title": "Systems", "order": 1, "courses": []},
        {"id": "r2", "title": "Web", "order": 2, "isEnrolled": false, "courses": []}
    ])
}

pub fn career_paths() -> Value {
    json!([
        {"id": "p1", "title": "Backend Engineer", "description": "APIs and databases"},
        {"id": "p2", "title": "Embedded Engineer", "description": "Firmware"}
    ])
}

/// Course client over a fresh mock transport.
pub fn mock_client() -> (Arc<MockHttpClient>, CoursesClient) {
    let mock = Arc::new(MockHttpClient::new());
    let client = CoursesClient::with_http(BASE_URL, mock.clone());
    (mock, client)
}

pub fn url(path: &str) -> String {
    format!("{}{}", BASE_URL, path)
}
