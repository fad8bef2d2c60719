//! Application state definitions

use crate::state::RegistrationForm;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Register,
    Statistics,
    About,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Register => "Register",
            Self::Statistics => "Statistics",
            Self::About => "About",
        }
    }
}

/// Profession choices offered by the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profession {
    #[default]
    School,
    College,
    Trainee,
    Employee,
}

impl Profession {
    pub fn next(&self) -> Self {
        match self {
            Self::School => Self::College,
            Self::College => Self::Trainee,
            Self::Trainee => Self::Employee,
            Self::Employee => Self::School,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::School => Self::Employee,
            Self::College => Self::School,
            Self::Trainee => Self::College,
            Self::Employee => Self::Trainee,
        }
    }

    /// Wire value submitted to the server
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::School => "school",
            Self::College => "college",
            Self::Trainee => "trainee",
            Self::Employee => "employee",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::School => "School student",
            Self::College => "College student",
            Self::Trainee => "Trainee",
            Self::Employee => "Employee",
        }
    }
}

/// Whether a registration request is currently in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
}

/// Kind of toast notification shown in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Transient status-bar notification with a fixed lifetime
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    created_at: Instant,
}

impl Toast {
    /// How long a toast stays visible before the status line returns to idle
    const TTL: Duration = Duration::from_secs(4);

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= Self::TTL
    }

    #[cfg(test)]
    fn with_created_at(kind: ToastKind, message: impl Into<String>, created_at: Instant) -> Self {
        Self {
            kind,
            message: message.into(),
            created_at,
        }
    }
}

/// Statistics chart tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsTab {
    #[default]
    Experience,
    Profession,
    Age,
}

impl StatsTab {
    pub fn next(&self) -> Self {
        match self {
            Self::Experience => Self::Profession,
            Self::Profession => Self::Age,
            Self::Age => Self::Experience,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Experience => Self::Age,
            Self::Profession => Self::Experience,
            Self::Age => Self::Profession,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Experience => "Experience",
            Self::Profession => "Profession",
            Self::Age => "Age",
        }
    }

    /// Bucket labels for the chart, in server order
    pub fn bucket_labels(&self) -> &'static [&'static str] {
        match self {
            Self::Experience => &["Beginner", "Intermediate", "Advanced"],
            Self::Profession => &["School", "College", "Trainees", "Employees"],
            Self::Age => &["10-15", "15-20", "20-25"],
        }
    }
}

/// Loading state for the statistics view
#[derive(Debug, Clone, Default)]
pub struct StatsState {
    pub loading: bool,
    pub load_failed: bool,
    pub data: Option<Statistics>,
    pub active_tab: StatsTab,
}

/// Snapshot of the registration form at submit time.
///
/// Doubles as the POST body for `/registration`. Age is kept as the raw
/// entered string; validation parses a copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormValues {
    pub username: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub profession: String,
    pub experience: u32,
    pub comment: String,
}

/// Server response to a successful registration
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationResponse {
    pub message: String,
}

/// Aggregated registration statistics returned by the server
#[derive(Debug, Clone, Deserialize)]
pub struct Statistics {
    pub age: Vec<u64>,
    pub profession: Vec<u64>,
    pub experience: Vec<u64>,
}

impl Statistics {
    /// Bucket counts for the given tab, in server order
    pub fn buckets(&self, tab: StatsTab) -> &[u64] {
        match tab {
            StatsTab::Experience => &self.experience,
            StatsTab::Profession => &self.profession,
            StatsTab::Age => &self.age,
        }
    }
}

/// Top-level mutable state rendered by the UI
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,

    // Registration form
    pub form: RegistrationForm,
    pub submit_status: SubmitStatus,

    // Statistics dashboard
    pub stats: StatsState,

    // Status bar
    pub toast: Option<Toast>,
}

impl AppState {
    /// Drop the toast once its lifetime has elapsed
    pub fn expire_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.submit_status, SubmitStatus::Submitting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod profession {
        use super::*;

        #[test]
        fn test_default_is_school() {
            assert_eq!(Profession::default(), Profession::School);
        }

        #[test]
        fn test_next_cycles_through_all_values() {
            let mut p = Profession::School;
            let mut seen = vec![p];
            for _ in 0..3 {
                p = p.next();
                seen.push(p);
            }
            assert_eq!(
                seen,
                vec![
                    Profession::School,
                    Profession::College,
                    Profession::Trainee,
                    Profession::Employee
                ]
            );
            assert_eq!(p.next(), Profession::School); // Wrapped back
        }

        #[test]
        fn test_prev_is_inverse_of_next() {
            for p in [
                Profession::School,
                Profession::College,
                Profession::Trainee,
                Profession::Employee,
            ] {
                assert_eq!(p.next().prev(), p);
            }
        }

        #[test]
        fn test_wire_values() {
            assert_eq!(Profession::School.as_str(), "school");
            assert_eq!(Profession::College.as_str(), "college");
            assert_eq!(Profession::Trainee.as_str(), "trainee");
            assert_eq!(Profession::Employee.as_str(), "employee");
        }
    }

    mod stats_tab {
        use super::*;

        #[test]
        fn test_default_is_experience() {
            assert_eq!(StatsTab::default(), StatsTab::Experience);
        }

        #[test]
        fn test_next_wraps() {
            assert_eq!(StatsTab::Age.next(), StatsTab::Experience);
        }

        #[test]
        fn test_prev_is_inverse_of_next() {
            for tab in [StatsTab::Experience, StatsTab::Profession, StatsTab::Age] {
                assert_eq!(tab.next().prev(), tab);
            }
        }

        #[test]
        fn test_bucket_label_counts() {
            assert_eq!(StatsTab::Experience.bucket_labels().len(), 3);
            assert_eq!(StatsTab::Profession.bucket_labels().len(), 4);
            assert_eq!(StatsTab::Age.bucket_labels().len(), 3);
        }
    }

    mod toast {
        use super::*;

        #[test]
        fn test_fresh_toast_is_not_expired() {
            let toast = Toast::success("Registered");
            assert!(!toast.is_expired());
            assert_eq!(toast.kind, ToastKind::Success);
        }

        #[test]
        fn test_error_toast_kind() {
            let toast = Toast::error("Error!");
            assert_eq!(toast.kind, ToastKind::Error);
        }

        #[test]
        fn test_toast_expires_after_ttl() {
            let created_at = Instant::now() - Toast::TTL;
            let toast = Toast::with_created_at(ToastKind::Success, "Registered", created_at);
            assert!(toast.is_expired());
        }
    }

    mod statistics {
        use super::*;

        #[test]
        fn test_buckets_selects_matching_series() {
            let stats = Statistics {
                age: vec![1, 2, 3],
                profession: vec![4, 5, 6, 7],
                experience: vec![8, 9, 10],
            };
            assert_eq!(stats.buckets(StatsTab::Age), &[1, 2, 3]);
            assert_eq!(stats.buckets(StatsTab::Profession), &[4, 5, 6, 7]);
            assert_eq!(stats.buckets(StatsTab::Experience), &[8, 9, 10]);
        }
    }

    mod app_state {
        use super::*;

        #[test]
        fn test_default_state() {
            let state = AppState::default();
            assert_eq!(state.current_view, View::Register);
            assert_eq!(state.submit_status, SubmitStatus::Idle);
            assert!(state.toast.is_none());
            assert!(!state.is_submitting());
        }

        #[test]
        fn test_expire_toast_keeps_fresh_toast() {
            let mut state = AppState::default();
            state.toast = Some(Toast::success("OK"));
            state.expire_toast();
            assert!(state.toast.is_some());
        }

        #[test]
        fn test_expire_toast_drops_stale_toast() {
            let mut state = AppState::default();
            state.toast = Some(Toast::with_created_at(
                ToastKind::Error,
                "Registration failed",
                Instant::now() - Toast::TTL,
            ));
            state.expire_toast();
            assert!(state.toast.is_none());
        }
    }
}
