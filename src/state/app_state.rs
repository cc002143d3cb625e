//! Application state definitions

use crate::state::form::ContactForm;
use crate::state::nav_state::NavState;
use crate::state::scroll_state::ScrollState;

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// Splash screen with logo animation
    Splash,
    /// The landing page document
    #[default]
    Landing,
}

/// Which part of the page owns key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Scrolling the document
    #[default]
    Page,
    /// The open navigation menu
    Menu,
    /// A form control in the contact section
    Form(FormTarget),
}

/// A focusable control inside the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTarget {
    /// Field by document-order index
    Field(usize),
    /// The submit control
    Submit,
}

/// Stored submit lifecycle. Validation runs synchronously and both
/// outcomes return to Idle, so only the in-flight phase persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    /// Transport call in flight; the submit control is disabled
    Submitting,
}

impl SubmitPhase {
    /// Whether the submit control currently accepts activation
    pub fn accepts_submit(&self) -> bool {
        matches!(self, SubmitPhase::Idle)
    }

    /// Label shown on the submit control
    pub fn submit_label(&self) -> &'static str {
        match self {
            SubmitPhase::Idle => "Submit Query",
            SubmitPhase::Submitting => "Submitting...",
        }
    }
}

/// Styling class of the page-level banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// How urgently the banner is announced. Assertive banners are echoed on
/// the status bar in addition to their place in the document flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Liveness {
    Polite,
    Assertive,
}

/// Page-level message shown under the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormBanner {
    pub text: &'static str,
    pub kind: BannerKind,
    pub liveness: Liveness,
}

/// Shown when submit is pressed while at least one field is invalid
pub const BANNER_FIX_ERRORS: &str = "Please fix the errors above before submitting.";
/// Shown when the transport reports success
pub const BANNER_SUBMITTED: &str =
    "Thank you! Your query has been successfully submitted. A team member will contact you soon.";
/// Shown when the transport reports failure
pub const BANNER_FAILED: &str =
    "Submission failed. Please try again later or email us at info@techfest.org.";

impl FormBanner {
    /// Banner for a blocked submit with invalid fields
    pub fn fix_errors() -> Self {
        Self {
            text: BANNER_FIX_ERRORS,
            kind: BannerKind::Error,
            liveness: Liveness::Assertive,
        }
    }

    /// Banner for a successful submission
    pub fn submitted() -> Self {
        Self {
            text: BANNER_SUBMITTED,
            kind: BannerKind::Success,
            liveness: Liveness::Polite,
        }
    }

    /// Banner for a failed submission
    pub fn failed() -> Self {
        Self {
            text: BANNER_FAILED,
            kind: BannerKind::Error,
            liveness: Liveness::Assertive,
        }
    }
}

/// Complete landing page state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    pub focus: Focus,
    pub nav: NavState,
    pub scroll: ScrollState,
    pub form: ContactForm,
    pub submit_phase: SubmitPhase,
    pub banner: Option<FormBanner>,
}

#[cfg(test)]
mod tests {
    use super::*;

    mod submit_phase {
        use super::*;

        #[test]
        fn test_default_is_idle() {
            assert_eq!(SubmitPhase::default(), SubmitPhase::Idle);
        }

        #[test]
        fn test_idle_accepts_submit() {
            assert!(SubmitPhase::Idle.accepts_submit());
            assert!(!SubmitPhase::Submitting.accepts_submit());
        }

        #[test]
        fn test_labels() {
            assert_eq!(SubmitPhase::Idle.submit_label(), "Submit Query");
            assert_eq!(SubmitPhase::Submitting.submit_label(), "Submitting...");
        }
    }

    mod banner {
        use super::*;

        #[test]
        fn test_fix_errors_is_assertive_error() {
            let banner = FormBanner::fix_errors();
            assert_eq!(banner.kind, BannerKind::Error);
            assert_eq!(banner.liveness, Liveness::Assertive);
            assert_eq!(banner.text, BANNER_FIX_ERRORS);
        }

        #[test]
        fn test_submitted_is_polite_success() {
            let banner = FormBanner::submitted();
            assert_eq!(banner.kind, BannerKind::Success);
            assert_eq!(banner.liveness, Liveness::Polite);
        }

        #[test]
        fn test_failed_is_assertive_error() {
            let banner = FormBanner::failed();
            assert_eq!(banner.kind, BannerKind::Error);
            assert_eq!(banner.liveness, Liveness::Assertive);
        }

        #[test]
        fn test_failure_banner_names_fallback_contact() {
            assert!(BANNER_FAILED.contains("info@techfest.org"));
        }
    }

    mod focus {
        use super::*;

        #[test]
        fn test_default_focus_is_page() {
            assert_eq!(Focus::default(), Focus::Page);
        }

        #[test]
        fn test_form_targets_compare() {
            assert_eq!(
                Focus::Form(FormTarget::Field(0)),
                Focus::Form(FormTarget::Field(0))
            );
            assert_ne!(
                Focus::Form(FormTarget::Field(0)),
                Focus::Form(FormTarget::Submit)
            );
        }
    }
}
