//! CSS class slots shared by every page.
//!
//! Each slot has PatternFly defaults that only apply while the default
//! stylesheets are in use; deployments can append their own classes per slot.

use crate::theme::ThemeError;
use std::collections::BTreeMap;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KcClass {
    HtmlClass,
    BodyClass,
    FormHeaderClass,
    FormGroupClass,
    ResetFlowIcon,
    ContentWrapperClass,
    LabelWrapperClass,
    AlertClass,
    AlertTitleClass,
    FeedbackSuccessIcon,
    FeedbackWarningIcon,
    FeedbackErrorIcon,
    FeedbackInfoIcon,
    InputErrorMessageClass,
}

impl KcClass {
    pub const ALL: &'static [Self] = &[
        Self::HtmlClass,
        Self::BodyClass,
        Self::FormHeaderClass,
        Self::FormGroupClass,
        Self::ResetFlowIcon,
        Self::ContentWrapperClass,
        Self::LabelWrapperClass,
        Self::AlertClass,
        Self::AlertTitleClass,
        Self::FeedbackSuccessIcon,
        Self::FeedbackWarningIcon,
        Self::FeedbackErrorIcon,
        Self::FeedbackInfoIcon,
        Self::InputErrorMessageClass,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HtmlClass => "kcHtmlClass",
            Self::BodyClass => "kcBodyClass",
            Self::FormHeaderClass => "kcFormHeaderClass",
            Self::FormGroupClass => "kcFormGroupClass",
            Self::ResetFlowIcon => "kcResetFlowIcon",
            Self::ContentWrapperClass => "kcContentWrapperClass",
            Self::LabelWrapperClass => "kcLabelWrapperClass",
            Self::AlertClass => "kcAlertClass",
            Self::AlertTitleClass => "kcAlertTitleClass",
            Self::FeedbackSuccessIcon => "kcFeedbackSuccessIcon",
            Self::FeedbackWarningIcon => "kcFeedbackWarningIcon",
            Self::FeedbackErrorIcon => "kcFeedbackErrorIcon",
            Self::FeedbackInfoIcon => "kcFeedbackInfoIcon",
            Self::InputErrorMessageClass => "kcInputErrorMessageClass",
        }
    }

    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|class| class.as_str() == name)
    }

    const fn default_classes(self) -> &'static str {
        match self {
            Self::HtmlClass => "login-pf",
            Self::BodyClass | Self::ContentWrapperClass => "",
            Self::FormHeaderClass => "login-pf-header",
            Self::FormGroupClass => "form-group",
            Self::ResetFlowIcon => "pficon pficon-arrow fa",
            Self::LabelWrapperClass => "col-xs-12 col-sm-12 col-md-12 col-lg-12",
            Self::AlertClass => "pf-c-alert pf-m-inline",
            Self::AlertTitleClass => "pf-c-alert__title kc-feedback-text",
            Self::FeedbackSuccessIcon => "fa fa-fw fa-check-circle",
            Self::FeedbackWarningIcon => "fa fa-fw fa-exclamation-triangle",
            Self::FeedbackErrorIcon => "fa fa-fw fa-exclamation-circle",
            Self::FeedbackInfoIcon => "fa fa-fw fa-info-circle",
            Self::InputErrorMessageClass => {
                "pf-c-form__helper-text pf-m-error required kc-feedback-text"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KcClasses {
    do_use_default_css: bool,
    overrides: BTreeMap<KcClass, String>,
}

impl Default for KcClasses {
    fn default() -> Self {
        Self::new(true)
    }
}

impl KcClasses {
    #[must_use]
    pub fn new(do_use_default_css: bool) -> Self {
        Self {
            do_use_default_css,
            overrides: BTreeMap::new(),
        }
    }

    /// Parse per-slot overrides from a JSON object such as
    /// `{"kcHtmlClass": "my-html"}`.
    ///
    /// # Errors
    /// Returns an error on malformed JSON or an unknown slot name.
    pub fn with_overrides_json(mut self, json: &str) -> Result<Self, ThemeError> {
        let raw: BTreeMap<String, String> = serde_json::from_str(json)
            .map_err(|err| ThemeError::InvalidClasses(err.to_string()))?;

        for (name, classes) in raw {
            let slot = KcClass::parse(&name)
                .ok_or_else(|| ThemeError::InvalidClasses(format!("unknown class slot: {name}")))?;
            self.overrides.insert(slot, classes);
        }

        Ok(self)
    }

    #[must_use]
    pub fn with_override(mut self, slot: KcClass, classes: impl Into<String>) -> Self {
        self.overrides.insert(slot, classes.into());
        self
    }

    #[must_use]
    pub const fn do_use_default_css(&self) -> bool {
        self.do_use_default_css
    }

    /// Space-separated classes for `slots`, defaults first, without
    /// duplicates.
    #[must_use]
    pub fn clsx(&self, slots: &[KcClass]) -> String {
        let mut classes: Vec<&str> = Vec::new();

        for slot in slots {
            let defaults = if self.do_use_default_css {
                slot.default_classes()
            } else {
                ""
            };
            let overrides = self.overrides.get(slot).map_or("", String::as_str);

            for class in defaults.split_whitespace().chain(overrides.split_whitespace()) {
                if !classes.contains(&class) {
                    classes.push(class);
                }
            }
        }

        classes.join(" ")
    }

    #[must_use]
    pub fn class(&self, slot: KcClass) -> String {
        self.clsx(&[slot])
    }
}

/// Join class fragments, skipping empty ones.
#[must_use]
pub fn join(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
