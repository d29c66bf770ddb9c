pub mod errors;
pub mod nfc;
pub mod state;
pub mod transport;

mod structs;

pub use errors::ApiError;
pub use nfc::{ScanEvent, TagData, UNKNOWN_TAG};
pub use state::{AppState, Screen};
pub use structs::client::{CheckInOutcome, Client, ClientOptions};
pub use structs::user::AuthResponse;
pub use structs::{
    LeaderboardEntry, ModuleStats, Question, Quiz, QuizResponse, QuizSubmission, RewardTier,
    StudentStats,
};

#[cfg(test)]
mod tests;
