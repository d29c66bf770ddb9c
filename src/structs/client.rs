use super::user::AuthResponse;
use super::{LeaderboardEntry, Quiz, QuizResponse, QuizSubmission, RewardTier, StudentStats};
use crate::errors::ApiError;
use crate::nfc::ScanEvent;
use crate::transport::{HttpTransport, RawResponse, Transport};
use colorful::Color;
use colorful::Colorful;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::json;

/// Outcome of a single check-in attempt, derived solely from the HTTP status
/// of the check-in call. Recomputed on every scan; there is no retryable vs
/// fatal distinction — the user re-triggers the scan to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckInOutcome {
    /// The server recorded the attendance (200 or 201).
    Success,
    /// The student already checked in for this session (409).
    AlreadyCheckedIn,
    /// The tag code did not match a running session (400 or 404).
    InvalidTag,
    /// Any other status, or the request never made it out.
    NetworkError,
}

impl CheckInOutcome {
    pub fn from_status(status: u16) -> Self {
        match StatusCode::from_u16(status) {
            Ok(StatusCode::OK) | Ok(StatusCode::CREATED) => Self::Success,
            Ok(StatusCode::CONFLICT) => Self::AlreadyCheckedIn,
            Ok(StatusCode::BAD_REQUEST) | Ok(StatusCode::NOT_FOUND) => Self::InvalidTag,
            _ => Self::NetworkError,
        }
    }
}

/// Campus API client. Used to interact with the attendance backend.
pub struct Client {
    /// Base URL of the backend, scheme included, no trailing slash.
    pub base_url: String,
    /// Whether the client should print debug statements.
    pub debug: bool,
    transport: Box<dyn Transport>,
}

/// Campus client options. Pass this into the `new()` function of the client.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Base URL of the backend, e.g. "https://campus.example.edu".
    pub base_url: String,
    /// Whether the client should print debug statements.
    pub debug: bool,
}

impl Client {
    /// Creates a new campus client over a blocking HTTP transport.
    pub fn new(options: ClientOptions) -> Result<Self, ApiError> {
        let transport = Box::new(HttpTransport::new()?);
        Self::build(options, transport)
    }

    /// Creates a client on top of a custom transport. Tests use this to
    /// substitute canned responses for the real backend.
    pub fn with_transport(
        options: ClientOptions,
        transport: Box<dyn Transport>,
    ) -> Result<Self, ApiError> {
        Self::build(options, transport)
    }

    fn build(options: ClientOptions, transport: Box<dyn Transport>) -> Result<Self, ApiError> {
        // Verify the base URL up front so every later call can just append.
        reqwest::Url::parse(&options.base_url).or(Err(ApiError::InvalidBaseUrl))?;

        Ok(Self {
            base_url: options.base_url.trim_end_matches('/').to_string(),
            debug: options.debug,
            transport,
        })
    }

    /// Attempts to sign in with email and password.
    /// A 200 response deserializes into the user record; any other status or
    /// a transport failure is the error arm.
    pub fn sign_in(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.debug_log(&format!("Signing in as {email}..."));

        let body = json!({ "email": email, "password": password });
        let response = self
            .transport
            .post_json(&self.url("/api/auth/signin"), &body)?;
        let user: AuthResponse = Self::decode(response)?;

        self.debug_log(&format!("Signed in. Welcome, {}.", user.user_name));

        Ok(user)
    }

    /// Sends a scanned tag code to the attendance endpoint.
    ///
    /// Never fails: transport errors and unexpected statuses collapse into
    /// [`CheckInOutcome::NetworkError`], so the caller can surface a status
    /// line and let the user re-scan. No retry, no timeout beyond transport
    /// defaults.
    pub fn perform_check_in(&self, nfc_code: &str, mood_score: u8, student_id: i64) -> CheckInOutcome {
        self.debug_log(&format!(
            "Sending check-in for student {student_id} with tag {nfc_code}"
        ));

        let body = json!({
            "nfcCode": nfc_code,
            "moodScore": mood_score,
            "studentId": student_id,
        });

        match self
            .transport
            .post_json(&self.url("/api/attendance/checkin"), &body)
        {
            Ok(response) => {
                self.debug_log(&format!("Check-in response status: {}", response.status));
                CheckInOutcome::from_status(response.status)
            }
            Err(_) => CheckInOutcome::NetworkError,
        }
    }

    /// Convenience wrapper feeding a [`ScanEvent`] into `perform_check_in`.
    pub fn check_in(&self, event: &ScanEvent, student_id: i64) -> CheckInOutcome {
        self.perform_check_in(&event.code, event.mood_score, student_id)
    }

    /// Re-fetches a user record, e.g. to refresh the points display.
    pub fn get_user(&self, id: i64) -> Result<AuthResponse, ApiError> {
        self.get_json(&format!("/api/user/{id}"))
    }

    /// Fetches the points leaderboard, ordered by rank.
    pub fn get_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ApiError> {
        self.get_json("/api/leaderboard")
    }

    /// Fetches the reward tiers with the student's unlock state.
    pub fn get_reward_tiers(&self, student_id: i64) -> Result<Vec<RewardTier>, ApiError> {
        self.get_with_params("/api/rewards", &[("studentId", student_id.to_string())])
    }

    /// Fetches the quiz currently available to the student, if any.
    pub fn get_available_quiz(&self, student_id: i64) -> Result<Quiz, ApiError> {
        self.get_with_params("/api/quiz/available", &[("studentId", student_id.to_string())])
    }

    /// Submits quiz answers for grading.
    pub fn submit_quiz(&self, submission: &QuizSubmission) -> Result<QuizResponse, ApiError> {
        let body = serde_json::to_value(submission).or(Err(ApiError::FailedToDecode))?;
        let response = self.transport.post_json(&self.url("/api/quiz/submit"), &body)?;

        Self::decode(response)
    }

    /// Fetches aggregate and per-module statistics for the student.
    pub fn get_student_stats(&self, student_id: i64) -> Result<StudentStats, ApiError> {
        self.get_with_params("/api/stats/student", &[("studentId", student_id.to_string())])
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.transport.get(&self.url(path))?;
        Self::decode(response)
    }

    fn get_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = reqwest::Url::parse_with_params(&self.url(path), params)
            .or(Err(ApiError::RequestFailed))?;
        let response = self.transport.get(url.as_str())?;

        Self::decode(response)
    }

    fn url(&self, path: &str) -> String {
        // Append a / to path if it does not start with one
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn decode<T: DeserializeOwned>(response: RawResponse) -> Result<T, ApiError> {
        let status = StatusCode::from_u16(response.status).or(Err(ApiError::ServerError))?;

        if !status.is_success() {
            return Err(Self::status_error(status));
        }

        serde_json::from_str(&response.body).or(Err(ApiError::FailedToDecode))
    }

    fn status_error(status: StatusCode) -> ApiError {
        match status {
            StatusCode::BAD_REQUEST => ApiError::BadRequest,
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
            StatusCode::NOT_FOUND => ApiError::NotFound,
            StatusCode::CONFLICT => ApiError::Conflict,
            StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited,
            _ => ApiError::ServerError,
        }
    }

    fn debug_log(&self, message: &str) {
        if !self.debug {
            return;
        }

        #[cfg(windows)]
        println!("[API] {}", message);

        #[cfg(not(windows))]
        println!(
            "{} {}",
            "[API]".gradient_with_color(Color::Cyan, Color::SpringGreen4),
            message
        );
    }
}
