//! Mock contexts for previewing pages without an identity server.

use crate::theme::context::{
    Auth, AuthenticationSession, Extensions, KcContext, Locale, LoginForm, MessagesPerField,
    Realm, SupportedLocale, Urls,
};

/// A login page context as the identity server sends it on first visit.
#[must_use]
pub fn login_context() -> KcContext {
    let realm = "survey";
    let actions = format!("/realms/{realm}/login-actions");

    KcContext {
        page_id: "login.ftl".to_string(),
        realm: Realm {
            name: realm.to_string(),
            display_name: Some("Survey portal".to_string()),
            password: true,
            registration_allowed: true,
            reset_password_allowed: true,
        },
        url: Urls {
            login_action: format!("{actions}/authenticate?session_code=mock"),
            login_restart_flow_url: format!("{actions}/restart?client_id=account"),
            login_reset_credentials_url: format!("{actions}/reset-credentials?client_id=account"),
            sso_login_in_other_tabs_url: format!("{actions}/switch?client_id=account"),
            resources_path: "/resources/login/theme".to_string(),
            resources_common_path: "/resources/common/keycloak".to_string(),
            registration_url: Some(format!("/realms/{realm}/protocol/openid-connect/registrations")),
        },
        locale: Some(Locale {
            current_language_tag: Some("en".to_string()),
            supported: vec![
                SupportedLocale {
                    language_tag: "en".to_string(),
                    label: "English".to_string(),
                    url: format!("/realms/{realm}/login?kc_locale=en"),
                },
                SupportedLocale {
                    language_tag: "fr".to_string(),
                    label: "Français".to_string(),
                    url: format!("/realms/{realm}/login?kc_locale=fr"),
                },
            ],
        }),
        message: None,
        messages_per_field: MessagesPerField::new(),
        auth: Some(Auth::default()),
        login: LoginForm::default(),
        username_hidden: false,
        registration_disabled: false,
        is_app_initiated_action: false,
        authentication_session: Some(AuthenticationSession {
            auth_session_id: "mock-auth-session".to_string(),
            tab_id: "mock-tab".to_string(),
        }),
        scripts: Vec::new(),
        extensions: Extensions::default(),
    }
}
