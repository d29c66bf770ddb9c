use serde::{Deserialize, Serialize};

pub mod client;
pub mod user;

/// A single leaderboard row, as returned by `GET /api/leaderboard`.
/// The score arrives pre-formatted (e.g. "1,250") and is display-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: String,
    pub score: String,
}

/// A reward tier, as returned by `GET /api/rewards`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardTier {
    pub tier: u32,
    pub reward: String,
    pub unlocked: bool,
}

/// A post-lecture quiz with its questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub quiz_id: i64,
    pub module_code: String,
    pub title: String,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question_id: i64,
    pub text: String,
    pub options: Vec<String>,
    /// Indices of the correct options (0-3). Multiple-answer questions list
    /// more than one.
    pub correct_options: Vec<usize>,
}

/// Answers for a whole quiz: the selected option indices per question, in
/// question order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSubmission {
    pub quiz_id: i64,
    pub student_id: i64,
    pub answers: Vec<Vec<usize>>,
}

/// Grading result returned by `POST /api/quiz/submit`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResponse {
    pub score: u32,
    pub total_questions: u32,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleStats {
    pub module_code: String,
    pub average_score: f64,
    pub total_quizzes: u32,
}

/// Aggregate and per-module statistics for one student.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentStats {
    pub overall_average: f64,
    pub module_stats: Vec<ModuleStats>,
}
