use crate::domain::services::eligibility::EligibilityResult;
use crate::error::AppError;

/// How long the confirmation toast stays up before the view moves on.
/// Constant on purpose: a random delay would make display tests flaky.
pub const CONFIRMATION_TOAST_MS: u64 = 2000;

/// Where a registration attempt stands for the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    InFlight,
    Registered,
}

/// Three-and-a-half-valued affordance for the registration action.
/// Registered is terminal: once reached, the action never re-enables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionState {
    Available,
    Closed,
    Pending,
    Registered,
}

impl ActionState {
    pub fn is_enabled(&self) -> bool {
        matches!(self, ActionState::Available)
    }
}

pub fn action_state(eligibility: &EligibilityResult, submission: SubmissionState) -> ActionState {
    match submission {
        SubmissionState::Registered => ActionState::Registered,
        SubmissionState::InFlight => ActionState::Pending,
        SubmissionState::Idle => {
            if eligibility.closed {
                ActionState::Closed
            } else {
                ActionState::Available
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Transient, user-dismissable notification. Every toast stays up for the
/// same fixed duration before the view moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub duration_ms: u64,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
            duration_ms: CONFIRMATION_TOAST_MS,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
            duration_ms: CONFIRMATION_TOAST_MS,
        }
    }

    /// Transport/status errors become a retry prompt; everything else
    /// surfaces its own description.
    pub fn from_error(err: &AppError) -> Self {
        if err.is_retryable() {
            Toast::error("Booking failed. Please try again.")
        } else {
            Toast::error(err.to_string())
        }
    }
}
