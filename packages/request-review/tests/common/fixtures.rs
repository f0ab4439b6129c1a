//! Test fixtures for building requests.

use request_review::{Request, RequestStatus};

pub fn request(id: &str, status: RequestStatus) -> Request {
    Request::new(id, status)
}

pub fn pending_request(id: &str) -> Request {
    request(id, RequestStatus::Pending)
}

/// Enrollment request with resolved student and course names
pub fn enrollment(id: &str, student: &str, course: &str, status: RequestStatus) -> Request {
    let mut request = request(id, status);
    request.subject_name = Some(student.to_string());
    request.target_name = Some(course.to_string());
    request
}

/// `count` pending requests with ids `prefix-0`, `prefix-1`, ...
pub fn numbered_pending(prefix: &str, count: usize) -> Vec<Request> {
    (0..count)
        .map(|i| pending_request(&format!("{}-{}", prefix, i)))
        .collect()
}

pub fn ids(requests: &[Request]) -> Vec<String> {
    requests.iter().map(|r| r.id.to_string()).collect()
}
