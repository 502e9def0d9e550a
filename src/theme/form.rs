//! Form behaviors attached to rendered markup.

use std::fmt;

/// DOM id of a form element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormId(&'static str);

impl FormId {
    #[must_use]
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.0)
    }
}

pub const LOGIN_FORM: FormId = FormId::new("kc-form-login");
pub const TRY_ANOTHER_WAY_FORM: FormId = FormId::new("kc-select-try-another-way-form");

/// Cross-component actions triggered from a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Submit the form registered under the given id instead of following
    /// the link. The form is found through `document.forms`, not through the
    /// link's ancestors.
    SubmitById(FormId),
}

impl FormAction {
    /// Inline `onclick` handler performing the action.
    #[must_use]
    pub fn to_js(self) -> String {
        match self {
            Self::SubmitById(form) => {
                format!("document.forms['{form}'].submit(); return false;")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Let the native submission go ahead.
    Proceed,
    /// A submission already went out; drop this one.
    Suppress,
}

/// Submit-once state for one mounted form. There is no way back to enabled:
/// the page navigates away after the first submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitGuard {
    disabled: bool,
}

impl SubmitGuard {
    #[must_use]
    pub const fn new() -> Self {
        Self { disabled: false }
    }

    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn on_submit(&mut self) -> SubmitDecision {
        if self.disabled {
            SubmitDecision::Suppress
        } else {
            self.disabled = true;
            SubmitDecision::Proceed
        }
    }
}
