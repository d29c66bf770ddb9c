use crate::errors::ApiError;
use crate::structs::client::CheckInOutcome;
use crate::structs::user::AuthResponse;

/// Screens the app can show. Plain value: any screen is reachable from any
/// other by direct assignment, there is no invalid-transition concept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Home,
    FaceScan,
    CheckIn,
    Rewards,
    Analytics,
    Quiz,
}

/// Status line shown before any scan happens on the check-in screen.
pub const READY_TO_SCAN: &str = "Ready to Scan";

/// Points awarded for an accepted check-in, before the multiplier.
pub const CHECK_IN_AWARD: i64 = 10;
/// Points awarded for the face-scan demo path, before the multiplier.
pub const FACE_SCAN_AWARD: i64 = 50;

/// Owned application state, mutated only through the action handlers below.
/// UI event handlers call a handler and re-render; concurrent in-flight
/// requests are not deduplicated, so whichever outcome is applied last wins
/// the status line.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Set iff signed in.
    pub user: Option<AuthResponse>,
    pub screen: Screen,
    pub points: i64,
    pub multiplier: i64,
    /// Code of the most recent scan on the check-in screen.
    pub last_tag: Option<String>,
    pub status_message: String,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            user: None,
            screen: Screen::Login,
            points: 0,
            multiplier: 1,
            last_tag: None,
            status_message: READY_TO_SCAN.to_string(),
        }
    }

    /// Applies a sign-in result. Failure leaves the session unset and the
    /// app on the login screen.
    pub fn apply_sign_in(&mut self, result: Result<AuthResponse, ApiError>) {
        match result {
            Ok(user) => {
                self.points = user.total_points.unwrap_or(0);
                self.user = Some(user);
                self.screen = Screen::Home;
            }
            Err(_) => {
                self.user = None;
                self.screen = Screen::Login;
            }
        }
    }

    /// Drops the session and returns to a fresh login state.
    pub fn logout(&mut self) {
        *self = Self::new();
    }

    /// Switches screens. The only side effect is resetting the transient
    /// scan fields to their initial values.
    pub fn navigate(&mut self, screen: Screen) {
        self.screen = screen;
        self.last_tag = None;
        self.status_message = READY_TO_SCAN.to_string();
    }

    /// Records a scan being sent, before its outcome lands.
    pub fn begin_scan(&mut self, tag_code: &str) {
        self.last_tag = Some(tag_code.to_string());
        self.status_message = "Sending...".to_string();
    }

    /// Applies a check-in outcome. Success awards `CHECK_IN_AWARD` times the
    /// current multiplier; every other outcome only updates the status line.
    pub fn apply_check_in(&mut self, outcome: CheckInOutcome) {
        match outcome {
            CheckInOutcome::Success => {
                let award = CHECK_IN_AWARD * self.multiplier;
                self.points += award;
                self.status_message = format!("Checked in! (+{award} pts)");
            }
            CheckInOutcome::AlreadyCheckedIn => {
                self.status_message = "Already checked in for this session".to_string();
            }
            CheckInOutcome::InvalidTag => {
                self.status_message = "Invalid tag".to_string();
            }
            CheckInOutcome::NetworkError => {
                self.status_message = "Network error, try again".to_string();
            }
        }
    }

    /// Face-scan demo path: flat award times the multiplier.
    pub fn apply_face_scan(&mut self) {
        self.points += FACE_SCAN_AWARD * self.multiplier;
    }

    /// Spends points on a reward. Returns whether the redemption went
    /// through; insufficient points leave the balance untouched.
    pub fn redeem(&mut self, cost: i64) -> bool {
        if self.points >= cost {
            self.points -= cost;
            true
        } else {
            false
        }
    }

    /// Demo reset: zeroes the points and puts the multiplier back to 1.
    pub fn reset_stats(&mut self) {
        self.points = 0;
        self.multiplier = 1;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
