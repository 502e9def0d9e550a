//! Localized strings for the login pages.
//!
//! Every key the pages reference is a [`MessageKey`] variant and each catalog
//! is an exhaustive `match`, so a key cannot be added without translating it
//! in every supported language. Unknown locales fall back to English.
//! Realm-level overrides from the context win over the catalogs.

use crate::theme::context::KcContext;
use maud::{Markup, html};
use std::collections::BTreeMap;

/// Supported locales. [`Language::En`] is the fallback.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    /// Parse a language tag, case-insensitive and tolerant of region suffixes
    /// (`fr-FR`, `en_GB`).
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        let normalized = tag.trim().to_ascii_lowercase();
        let primary = normalized.split(['-', '_']).next().unwrap_or("");
        match primary {
            "en" => Some(Self::En),
            "fr" => Some(Self::Fr),
            _ => None,
        }
    }

    /// Resolve an optional tag, falling back to the default language.
    #[must_use]
    pub fn resolve(tag: Option<&str>) -> Self {
        tag.and_then(Self::parse).unwrap_or_default()
    }
}

pub const SUPPORTED_LANGUAGES: &[Language] = &[Language::En, Language::Fr];

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MessageKey {
    LoginTitle,
    RestartLoginTooltip,
    RequiredFields,
    DoTryAnotherWay,
    Password,
    DoForgotPassword,
    Languages,
    Login,
    LoginAccountTitle,
    Identifier,
    IdentifierHint,
    ContactSupport,
    LogIn,
    LoginHelperTitle,
    LoginDescription,
    HelperLoginDescription,
    HelperLoginSupport,
    ContactSupportLink,
    HomeLinkTitle,
    ServiceTagline,
    OperatorLogoAlt,
    AccessibilityNonCompliant,
}

impl MessageKey {
    pub const ALL: &'static [Self] = &[
        Self::LoginTitle,
        Self::RestartLoginTooltip,
        Self::RequiredFields,
        Self::DoTryAnotherWay,
        Self::Password,
        Self::DoForgotPassword,
        Self::Languages,
        Self::Login,
        Self::LoginAccountTitle,
        Self::Identifier,
        Self::IdentifierHint,
        Self::ContactSupport,
        Self::LogIn,
        Self::LoginHelperTitle,
        Self::LoginDescription,
        Self::HelperLoginDescription,
        Self::HelperLoginSupport,
        Self::ContactSupportLink,
        Self::HomeLinkTitle,
        Self::ServiceTagline,
        Self::OperatorLogoAlt,
        Self::AccessibilityNonCompliant,
    ];

    /// The key as the identity server and realm overrides spell it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LoginTitle => "loginTitle",
            Self::RestartLoginTooltip => "restartLoginTooltip",
            Self::RequiredFields => "requiredFields",
            Self::DoTryAnotherWay => "doTryAnotherWay",
            Self::Password => "password",
            Self::DoForgotPassword => "doForgotPassword",
            Self::Languages => "languages",
            Self::Login => "login",
            Self::LoginAccountTitle => "loginAccountTitle",
            Self::Identifier => "identifier",
            Self::IdentifierHint => "identifierHint",
            Self::ContactSupport => "contactSupport",
            Self::LogIn => "logIn",
            Self::LoginHelperTitle => "loginHelperTitle",
            Self::LoginDescription => "loginDescription",
            Self::HelperLoginDescription => "helperLoginDescription",
            Self::HelperLoginSupport => "helperLoginSupport",
            Self::ContactSupportLink => "contactSupportLink",
            Self::HomeLinkTitle => "homeLinkTitle",
            Self::ServiceTagline => "serviceTagline",
            Self::OperatorLogoAlt => "operatorLogoAlt",
            Self::AccessibilityNonCompliant => "accessibilityNonCompliant",
        }
    }
}

const fn english(key: MessageKey) -> &'static str {
    match key {
        MessageKey::LoginTitle => "Sign in to {0}",
        MessageKey::RestartLoginTooltip => "Restart login",
        MessageKey::RequiredFields => "Required fields",
        MessageKey::DoTryAnotherWay => "Try Another Way",
        MessageKey::Password => "Password",
        MessageKey::DoForgotPassword => "Forgot Password?",
        MessageKey::Languages => "Languages",
        MessageKey::Login => "Log in",
        MessageKey::LoginAccountTitle => {
            "Login to the response portal for official statistics surveys"
        }
        MessageKey::Identifier => "Identifier",
        MessageKey::IdentifierHint => "Expected format: uppercase letters and numbers",
        MessageKey::ContactSupport => "Contact support",
        MessageKey::LogIn => "Log in",
        MessageKey::LoginHelperTitle => "Login help",
        MessageKey::LoginDescription => {
            "To log in, please enter the identifier you received by email and/or mail, along with the password previously sent to you by mail."
        }
        MessageKey::HelperLoginDescription => {
            "For security reasons, the number of login attempts is limited."
        }
        MessageKey::HelperLoginSupport => "If you are unable to log in, please ",
        MessageKey::ContactSupportLink => "contact support.",
        MessageKey::HomeLinkTitle => "Home - Response portal for official statistics surveys",
        MessageKey::ServiceTagline => "Response portal for official statistics surveys",
        MessageKey::OperatorLogoAlt => "Insee, measure to understand",
        MessageKey::AccessibilityNonCompliant => "Accessibility: non compliant",
    }
}

const fn french(key: MessageKey) -> &'static str {
    match key {
        MessageKey::LoginTitle => "Se connecter à {0}",
        MessageKey::RestartLoginTooltip => "Redémarrer la connexion",
        MessageKey::RequiredFields => "Champs obligatoires",
        MessageKey::DoTryAnotherWay => "Essayer une autre méthode",
        MessageKey::Password => "Mot de passe",
        MessageKey::DoForgotPassword => "Mot de passe oublié ?",
        MessageKey::Languages => "Langues",
        MessageKey::Login => "Connexion",
        MessageKey::LoginAccountTitle => {
            "Connexion au portail de réponses des enquêtes de la statistiques publiques"
        }
        MessageKey::Identifier => "Identifiant",
        MessageKey::IdentifierHint => "Format attendu : lettres et chiffres en majuscules",
        MessageKey::ContactSupport => "Contacter l'assistance",
        MessageKey::LogIn => "Se connecter",
        MessageKey::LoginHelperTitle => "Aide à la connexion",
        MessageKey::LoginDescription => {
            "Pour vous connecter, veuillez saisir l'identifiant que vous avez reçu par mail et/ou par courrier, ainsi que le mot de passe qui vous a été précédemment transmis par courrier."
        }
        MessageKey::HelperLoginDescription => {
            "Pour des raisons de sécurité, le nombre de tentatives de connexion est limité."
        }
        MessageKey::HelperLoginSupport => "Si vous ne parvenez pas à vous connecter, veuillez ",
        MessageKey::ContactSupportLink => "contacter l'assistance.",
        MessageKey::HomeLinkTitle => {
            "Accueil - Portail de réponse aux enquêtes de la statistique publique"
        }
        MessageKey::ServiceTagline => "Portail de réponse aux enquêtes de la statistique publique",
        MessageKey::OperatorLogoAlt => "Insee, mesurer pour comprendre",
        MessageKey::AccessibilityNonCompliant => "Accessibilité : non conforme",
    }
}

/// Catalog text for `key` in `language`.
#[must_use]
pub const fn catalog(language: Language, key: MessageKey) -> &'static str {
    match language {
        Language::En => english(key),
        Language::Fr => french(key),
    }
}

/// Message lookup bound to one render.
#[derive(Debug, Clone, Copy)]
pub struct I18n<'a> {
    language: Language,
    overrides: Option<&'a BTreeMap<String, String>>,
}

impl<'a> I18n<'a> {
    #[must_use]
    pub const fn new(language: Language) -> Self {
        Self {
            language,
            overrides: None,
        }
    }

    /// Bind to the context's current language and realm overrides.
    #[must_use]
    pub fn from_context(context: &'a KcContext) -> Self {
        Self {
            language: Language::resolve(context.current_language_tag()),
            overrides: Some(&context.extensions.messages),
        }
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// The raw template for `key`, before placeholder substitution.
    #[must_use]
    pub fn template(&self, key: MessageKey) -> &'a str {
        self.overrides
            .and_then(|overrides| overrides.get(key.as_str()))
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| catalog(self.language, key))
    }

    /// Localized text with `{0}`, `{1}`, ... replaced by `args`.
    #[must_use]
    pub fn msg_str(&self, key: MessageKey, args: &[&str]) -> String {
        format_message(self.template(key), args)
    }

    /// Localized text as escaped markup.
    #[must_use]
    pub fn msg(&self, key: MessageKey, args: &[&str]) -> Markup {
        html! { (self.msg_str(key, args)) }
    }
}

/// Substitute positional placeholders in a single pass. Placeholders without a
/// matching argument are kept verbatim.
fn format_message(template: &str, args: &[&str]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        output.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let digits = after
            .find(|ch: char| !ch.is_ascii_digit())
            .unwrap_or(after.len());
        let closes = after[digits..].starts_with('}');

        match after[..digits].parse::<usize>().ok().filter(|_| closes) {
            Some(index) if index < args.len() => {
                output.push_str(args[index]);
                rest = &after[digits + 1..];
            }
            _ => {
                output.push('{');
                rest = after;
            }
        }
    }

    output.push_str(rest);
    output
}
