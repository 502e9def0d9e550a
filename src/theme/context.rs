//! The context the identity server hands to every login page.
//!
//! A `KcContext` is a read-only snapshot of the authentication flow: realm
//! flags, the URLs forms must post to, the active locale, at most one global
//! message and the per-field validation errors. The server replaces it
//! wholesale on every navigation; rendering only ever borrows it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KcContext {
    pub page_id: String,
    pub realm: Realm,
    pub url: Urls,
    #[serde(default)]
    pub locale: Option<Locale>,
    #[serde(default)]
    pub message: Option<Message>,
    #[serde(default)]
    pub messages_per_field: MessagesPerField,
    #[serde(default)]
    pub auth: Option<Auth>,
    #[serde(default)]
    pub login: LoginForm,
    #[serde(default)]
    pub username_hidden: bool,
    #[serde(default)]
    pub registration_disabled: bool,
    #[serde(default)]
    pub is_app_initiated_action: bool,
    #[serde(default)]
    pub authentication_session: Option<AuthenticationSession>,
    #[serde(default)]
    pub scripts: Vec<String>,
    #[serde(default, rename = "x-keycloakify")]
    pub extensions: Extensions,
}

impl KcContext {
    /// Parse a context from the JSON the identity server emits.
    ///
    /// # Errors
    /// Returns an error if the payload is not a valid context.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The realm name shown to users, falling back to the technical name.
    #[must_use]
    pub fn realm_display_name(&self) -> &str {
        self.realm
            .display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.realm.name)
    }

    #[must_use]
    pub fn current_language_tag(&self) -> Option<&str> {
        self.locale
            .as_ref()
            .and_then(|locale| locale.current_language_tag.as_deref())
    }

    /// True when an attempt is in progress for a known username and the reset
    /// flow is not offered at the same time.
    #[must_use]
    pub fn shows_attempted_username(&self) -> bool {
        self.auth
            .as_ref()
            .is_some_and(|auth| auth.show_username && !auth.show_reset_credentials)
    }

    #[must_use]
    pub fn shows_try_another_way(&self) -> bool {
        self.auth
            .as_ref()
            .is_some_and(|auth| auth.show_try_another_way_link)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Realm {
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    /// Password authentication is enabled for the realm.
    #[serde(default)]
    pub password: bool,
    #[serde(default)]
    pub registration_allowed: bool,
    #[serde(default)]
    pub reset_password_allowed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Urls {
    pub login_action: String,
    #[serde(default)]
    pub login_restart_flow_url: String,
    #[serde(default)]
    pub login_reset_credentials_url: String,
    #[serde(default)]
    pub sso_login_in_other_tabs_url: String,
    pub resources_path: String,
    pub resources_common_path: String,
    #[serde(default)]
    pub registration_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Locale {
    #[serde(default)]
    pub current_language_tag: Option<String>,
    #[serde(default)]
    pub supported: Vec<SupportedLocale>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportedLocale {
    pub language_tag: String,
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Success,
    Warning,
    Error,
    Info,
}

impl MessageKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    /// PatternFly modifier; errors are styled as `danger`.
    #[must_use]
    pub const fn modifier(self) -> &'static str {
        match self {
            Self::Error => "danger",
            other => other.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "type")]
    pub kind: MessageKind,
    /// Server-produced markup, inserted verbatim.
    pub summary: String,
}

/// Validation errors keyed by form field name, in the order the server
/// produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessagesPerField(BTreeMap<String, Vec<String>>);

impl MessagesPerField {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for `field`, keeping insertion order per field.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// True if any of `fields` carries at least one non-empty error.
    #[must_use]
    pub fn exists_error(&self, fields: &[&str]) -> bool {
        self.get_first_error(fields).is_some()
    }

    /// The first error of the first field (in argument order) that has one.
    #[must_use]
    pub fn get_first_error(&self, fields: &[&str]) -> Option<&str> {
        fields.iter().find_map(|field| {
            self.0
                .get(*field)
                .and_then(|messages| messages.iter().find(|message| !message.is_empty()))
                .map(String::as_str)
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Auth {
    #[serde(default)]
    pub show_username: bool,
    #[serde(default)]
    pub show_reset_credentials: bool,
    #[serde(default)]
    pub attempted_username: Option<String>,
    #[serde(default)]
    pub show_try_another_way_link: bool,
    #[serde(default)]
    pub selected_credential: Option<String>,
}

/// Values previously typed into the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationSession {
    pub auth_session_id: String,
    pub tab_id: String,
}

/// Realm-level customisations carried next to the standard context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extensions {
    /// Localized message overrides configured in the realm, by message key.
    #[serde(default)]
    pub messages: BTreeMap<String, String>,
}
