//! Explicit state machine for the quiz view flow.
//!
//! Replaces a mutable `current_view` field with enumerated states and
//! fallible transitions. The HTTP layer does not depend on this module; it
//! exists so the navigation rules are testable on their own.

use serde::Serialize;

use super::bank;
use super::TestKind;

/// One screen of the single-page flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "view")]
pub enum ViewState {
    Home,
    Gender { test: TestKind },
    Test { test: TestKind, index: usize },
    Success { test: TestKind },
    FreeResults { test: TestKind },
    Payment { test: TestKind },
    DetailedResults { test: TestKind },
    Dashboard,
    Profile,
    Settings,
    Billing,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FlowError {
    #[error("cannot {action} from the {from} screen")]
    IllegalTransition { action: &'static str, from: &'static str },
}

impl ViewState {
    pub const fn screen(&self) -> &'static str {
        match self {
            ViewState::Home => "home",
            ViewState::Gender { .. } => "gender",
            ViewState::Test { .. } => "test",
            ViewState::Success { .. } => "success",
            ViewState::FreeResults { .. } => "free_results",
            ViewState::Payment { .. } => "payment",
            ViewState::DetailedResults { .. } => "detailed_results",
            ViewState::Dashboard => "dashboard",
            ViewState::Profile => "profile",
            ViewState::Settings => "settings",
            ViewState::Billing => "billing",
        }
    }

    fn illegal(&self, action: &'static str) -> FlowError {
        FlowError::IllegalTransition {
            action,
            from: self.screen(),
        }
    }

    /// Pick a test from the home screen.
    pub fn start(self, test: TestKind) -> Result<Self, FlowError> {
        match self {
            ViewState::Home => Ok(ViewState::Gender { test }),
            other => Err(other.illegal("start a test")),
        }
    }

    /// Leave the demographics screen and show the first question.
    pub fn confirm_gender(self) -> Result<Self, FlowError> {
        match self {
            ViewState::Gender { test } => Ok(ViewState::Test { test, index: 0 }),
            other => Err(other.illegal("confirm demographics")),
        }
    }

    /// Advance one question; past the final question the flow moves to the
    /// success screen.
    pub fn next(self) -> Result<Self, FlowError> {
        match self {
            ViewState::Test { test, index } => {
                if index + 1 >= bank::bank(test).len() {
                    Ok(ViewState::Success { test })
                } else {
                    Ok(ViewState::Test {
                        test,
                        index: index + 1,
                    })
                }
            }
            other => Err(other.illegal("advance")),
        }
    }

    /// Step back one question; backing out of the first question returns to
    /// the demographics screen.
    pub fn back(self) -> Result<Self, FlowError> {
        match self {
            ViewState::Test { test, index: 0 } => Ok(ViewState::Gender { test }),
            ViewState::Test { test, index } => Ok(ViewState::Test {
                test,
                index: index - 1,
            }),
            other => Err(other.illegal("step back")),
        }
    }

    pub fn view_results(self) -> Result<Self, FlowError> {
        match self {
            ViewState::Success { test } => Ok(ViewState::FreeResults { test }),
            other => Err(other.illegal("view results")),
        }
    }

    pub fn begin_payment(self) -> Result<Self, FlowError> {
        match self {
            ViewState::FreeResults { test } => Ok(ViewState::Payment { test }),
            other => Err(other.illegal("begin payment")),
        }
    }

    pub fn payment_complete(self) -> Result<Self, FlowError> {
        match self {
            ViewState::Payment { test } => Ok(ViewState::DetailedResults { test }),
            other => Err(other.illegal("complete payment")),
        }
    }

    /// "Take another assessment" and the account pages all lead home.
    pub fn go_home(self) -> Result<Self, FlowError> {
        match self {
            ViewState::FreeResults { .. }
            | ViewState::DetailedResults { .. }
            | ViewState::Dashboard
            | ViewState::Profile
            | ViewState::Settings
            | ViewState::Billing
            | ViewState::Home => Ok(ViewState::Home),
            other => Err(other.illegal("return home")),
        }
    }

    /// Account pages are reachable from home, the result screens, and each
    /// other.
    pub fn open_account_page(self, page: AccountPage) -> Result<Self, FlowError> {
        match self {
            ViewState::Home
            | ViewState::FreeResults { .. }
            | ViewState::DetailedResults { .. }
            | ViewState::Dashboard
            | ViewState::Profile
            | ViewState::Settings
            | ViewState::Billing => Ok(page.view()),
            other => Err(other.illegal("open an account page")),
        }
    }
}

/// The parallel account-management screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountPage {
    Dashboard,
    Profile,
    Settings,
    Billing,
}

impl AccountPage {
    const fn view(self) -> ViewState {
        match self {
            AccountPage::Dashboard => ViewState::Dashboard,
            AccountPage::Profile => ViewState::Profile,
            AccountPage::Settings => ViewState::Settings,
            AccountPage::Billing => ViewState::Billing,
        }
    }
}
