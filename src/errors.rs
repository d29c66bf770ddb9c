use thiserror::Error;

/// Campus API errors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// The base URL passed in the client options could not be parsed.
    /// Must include the scheme, e.g. "https://campus.example.edu".
    #[error("Invalid base URL. Must include the scheme.")]
    InvalidBaseUrl,

    /// Failed to send a request to the campus API.
    #[error("Failed to send a request to the campus API.")]
    RequestFailed,

    /// Failed to decode a campus API response body.
    #[error("Failed to decode campus API response.")]
    FailedToDecode,

    /// The campus API returned a 400: Bad Request status code.
    /// This means that the body or parameters sent to the endpoint were not correct.
    #[error("Bad request.")]
    BadRequest,
    /// The campus API returned a 401: Unauthorized status code.
    /// This means that the credentials did not match a known account.
    #[error("Credentials not authorized.")]
    Unauthorized,
    /// The campus API returned a 404: Not Found status code.
    /// This means that the API failed to find the requested resource.
    #[error("Resource not found.")]
    NotFound,
    /// The campus API returned a 409: Conflict status code.
    /// This means that the student was already checked in for the session.
    #[error("Already checked in for this session.")]
    Conflict,
    /// The campus API returned a 429: Too Many Requests status code.
    /// This means that you're sending requests too fast.
    #[error("You are being rate limited.")]
    RateLimited,
    /// The campus API returned a server error.
    /// This is a catch-all for unusual error cases.
    #[error("Server error.")]
    ServerError,
}
