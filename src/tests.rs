use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

use crate::errors::ApiError;
use crate::state::AppState;
use crate::transport::{RawResponse, Transport};
use crate::{CheckInOutcome, Client, ClientOptions, QuizSubmission, Screen};

const BASE_URL: &str = "https://campus.example.edu";

fn options() -> ClientOptions {
    ClientOptions {
        base_url: BASE_URL.to_string(),
        debug: false,
    }
}

type RequestLog = Arc<Mutex<Vec<(String, Option<Value>)>>>;

/// Serves one canned response for every request and records what was sent.
struct FakeTransport {
    status: u16,
    body: String,
    requests: RequestLog,
}

impl FakeTransport {
    fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle on the request log that survives boxing the transport.
    fn log(&self) -> RequestLog {
        Arc::clone(&self.requests)
    }

    fn respond(&self, url: &str, body: Option<Value>) -> Result<RawResponse, ApiError> {
        self.requests.lock().unwrap().push((url.to_string(), body));

        Ok(RawResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

impl Transport for FakeTransport {
    fn post_json(&self, url: &str, body: &Value) -> Result<RawResponse, ApiError> {
        self.respond(url, Some(body.clone()))
    }

    fn get(&self, url: &str) -> Result<RawResponse, ApiError> {
        self.respond(url, None)
    }
}

/// Simulates the request never making it out.
struct DeadTransport;

impl Transport for DeadTransport {
    fn post_json(&self, _url: &str, _body: &Value) -> Result<RawResponse, ApiError> {
        Err(ApiError::RequestFailed)
    }

    fn get(&self, _url: &str) -> Result<RawResponse, ApiError> {
        Err(ApiError::RequestFailed)
    }
}

fn client_returning(status: u16, body: &str) -> Client {
    Client::with_transport(options(), Box::new(FakeTransport::new(status, body)))
        .expect("client should build")
}

#[test]
fn rejects_invalid_base_url() {
    let result = Client::with_transport(
        ClientOptions {
            base_url: "not a url".to_string(),
            debug: false,
        },
        Box::new(DeadTransport),
    );

    assert!(matches!(result, Err(ApiError::InvalidBaseUrl)));
}

#[test]
fn trims_trailing_slash_from_base_url() {
    let client = Client::with_transport(
        ClientOptions {
            base_url: format!("{BASE_URL}/"),
            debug: false,
        },
        Box::new(DeadTransport),
    )
    .expect("client should build");

    assert_eq!(client.base_url, BASE_URL);
}

#[test]
fn check_in_status_mapping_is_exhaustive() {
    let cases = [
        (200, CheckInOutcome::Success),
        (201, CheckInOutcome::Success),
        (409, CheckInOutcome::AlreadyCheckedIn),
        (400, CheckInOutcome::InvalidTag),
        (404, CheckInOutcome::InvalidTag),
        (202, CheckInOutcome::NetworkError),
        (301, CheckInOutcome::NetworkError),
        (401, CheckInOutcome::NetworkError),
        (403, CheckInOutcome::NetworkError),
        (418, CheckInOutcome::NetworkError),
        (429, CheckInOutcome::NetworkError),
        (500, CheckInOutcome::NetworkError),
        (502, CheckInOutcome::NetworkError),
        (503, CheckInOutcome::NetworkError),
    ];

    for (status, expected) in cases {
        let client = client_returning(status, "");
        let outcome = client.perform_check_in("COMP2850_LIVE", 3, 1);
        assert_eq!(outcome, expected, "status {status}");
    }
}

#[test]
fn transport_failure_maps_to_network_error() {
    let client =
        Client::with_transport(options(), Box::new(DeadTransport)).expect("client should build");

    assert_eq!(
        client.perform_check_in("COMP2850_LIVE", 3, 1),
        CheckInOutcome::NetworkError
    );
}

#[test]
fn check_in_posts_expected_url_and_body() {
    let transport = FakeTransport::new(201, "");
    let log = transport.log();
    let client =
        Client::with_transport(options(), Box::new(transport)).expect("client should build");

    client.perform_check_in("04A1B2C3", 4, 7);

    let requests = log.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let (url, body) = &requests[0];
    assert_eq!(url, &format!("{BASE_URL}/api/attendance/checkin"));
    assert_eq!(
        body.as_ref(),
        Some(&json!({ "nfcCode": "04A1B2C3", "moodScore": 4, "studentId": 7 }))
    );
}

#[test]
fn student_scoped_fetches_carry_query_param() {
    let transport = FakeTransport::new(404, "");
    let log = transport.log();
    let client =
        Client::with_transport(options(), Box::new(transport)).expect("client should build");

    let _ = client.get_reward_tiers(7);
    let _ = client.get_available_quiz(7);
    let _ = client.get_student_stats(7);

    let requests = log.lock().unwrap();
    let urls: Vec<&str> = requests.iter().map(|(url, _)| url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            format!("{BASE_URL}/api/rewards?studentId=7").as_str(),
            format!("{BASE_URL}/api/quiz/available?studentId=7").as_str(),
            format!("{BASE_URL}/api/stats/student?studentId=7").as_str(),
        ]
    );
}

#[test]
fn created_check_in_raises_points_through_state() {
    let client = client_returning(201, "");
    let mut state = AppState::new();
    state.multiplier = 3;
    state.begin_scan("04A1B2C3");

    let outcome = client.perform_check_in("04A1B2C3", 5, 1);
    state.apply_check_in(outcome);

    assert_eq!(outcome, CheckInOutcome::Success);
    assert_eq!(state.points, 30);
}

#[test]
fn conflicting_check_in_leaves_points_through_state() {
    let client = client_returning(409, "");
    let mut state = AppState::new();
    state.points = 50;

    state.apply_check_in(client.perform_check_in("04A1B2C3", 5, 1));

    assert_eq!(state.points, 50);
    assert_eq!(state.status_message, "Already checked in for this session");
}

#[test]
fn sign_in_decodes_user_record() {
    let body = json!({
        "userId": 7,
        "userName": "Student A",
        "role": "student",
        "totalPoints": 120
    });
    let client = client_returning(200, &body.to_string());

    let user = client
        .sign_in("a.student@campus.example.edu", "hunter2")
        .expect("sign-in should succeed");

    assert_eq!(user.user_id, 7);
    assert_eq!(user.user_name, "Student A");
    assert_eq!(user.total_points, Some(120));
}

#[test]
fn failed_sign_in_keeps_login_screen() {
    let client = client_returning(401, "");
    let mut state = AppState::new();

    state.apply_sign_in(client.sign_in("a.student@campus.example.edu", "wrong"));

    assert!(state.user.is_none());
    assert_eq!(state.screen, Screen::Login);
}

#[test]
fn sign_in_maps_error_statuses() {
    assert_eq!(
        client_returning(401, "").sign_in("e", "p").unwrap_err(),
        ApiError::Unauthorized
    );
    assert_eq!(
        client_returning(400, "").sign_in("e", "p").unwrap_err(),
        ApiError::BadRequest
    );
    assert_eq!(
        client_returning(429, "").sign_in("e", "p").unwrap_err(),
        ApiError::RateLimited
    );
    assert_eq!(
        client_returning(500, "").sign_in("e", "p").unwrap_err(),
        ApiError::ServerError
    );
}

#[test]
fn malformed_sign_in_body_fails_to_decode() {
    let client = client_returning(200, "not json");

    assert_eq!(
        client.sign_in("e", "p").unwrap_err(),
        ApiError::FailedToDecode
    );
}

#[test]
fn get_user_decodes_refreshed_record() {
    let body = json!({
        "userId": 7,
        "userName": "Student A",
        "role": "student",
        "totalPoints": 150
    });
    let client = client_returning(200, &body.to_string());

    let user = client.get_user(7).expect("user fetch should succeed");

    assert_eq!(user.total_points, Some(150));
}

#[test]
fn leaderboard_decodes_ordered_rows() {
    let body = json!([
        { "rank": 1, "name": "Student A", "score": "1,250" },
        { "rank": 2, "name": "Student B", "score": "980" }
    ]);
    let client = client_returning(200, &body.to_string());

    let rows = client.get_leaderboard().expect("leaderboard should decode");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].rank, 1);
    assert_eq!(rows[1].score, "980");
}

#[test]
fn reward_tiers_decode_unlock_state() {
    let body = json!([
        { "tier": 1, "reward": "Printing Credits", "unlocked": true },
        { "tier": 2, "reward": "Double or Nothing", "unlocked": false }
    ]);
    let client = client_returning(200, &body.to_string());

    let tiers = client.get_reward_tiers(7).expect("rewards should decode");

    assert!(tiers[0].unlocked);
    assert!(!tiers[1].unlocked);
}

#[test]
fn quiz_decodes_nested_questions() {
    let body = json!({
        "quizId": 3,
        "moduleCode": "COMP2850",
        "title": "Week 7 recap",
        "questions": [
            {
                "questionId": 1,
                "text": "Which layer owns retries?",
                "options": ["Client", "Server", "Neither", "Both"],
                "correctOptions": [1]
            }
        ]
    });
    let client = client_returning(200, &body.to_string());

    let quiz = client.get_available_quiz(7).expect("quiz should decode");

    assert_eq!(quiz.module_code, "COMP2850");
    assert_eq!(quiz.questions.len(), 1);
    assert_eq!(quiz.questions[0].correct_options, vec![1]);
}

#[test]
fn quiz_submission_round_trips_grading_result() {
    let body = json!({
        "score": 4,
        "totalQuestions": 5,
        "message": "Nice work"
    });
    let client = client_returning(200, &body.to_string());

    let submission = QuizSubmission {
        quiz_id: 3,
        student_id: 7,
        answers: vec![vec![1], vec![0, 2]],
    };
    let result = client.submit_quiz(&submission).expect("submit should decode");

    assert_eq!(result.score, 4);
    assert_eq!(result.total_questions, 5);
}

#[test]
fn student_stats_decode_module_breakdown() {
    let body = json!({
        "overallAverage": 72.5,
        "moduleStats": [
            { "moduleCode": "COMP2850", "averageScore": 85.0, "totalQuizzes": 4 },
            { "moduleCode": "COMP2860", "averageScore": 60.0, "totalQuizzes": 2 }
        ]
    });
    let client = client_returning(200, &body.to_string());

    let stats = client.get_student_stats(7).expect("stats should decode");

    assert_eq!(stats.module_stats.len(), 2);
    assert_eq!(stats.module_stats[0].module_code, "COMP2850");
}

#[test]
fn missing_quiz_surfaces_not_found() {
    let client = client_returning(404, "");

    assert_eq!(
        client.get_available_quiz(7).unwrap_err(),
        ApiError::NotFound
    );
}
