//! Username/password login page (`login.ftl`).

use crate::theme::classes::{KcClass, join};
use crate::theme::form::LOGIN_FORM;
use crate::theme::i18n::MessageKey;
use crate::theme::pages::Page;
use crate::theme::template::{Template, TemplateProps};
use maud::{Markup, PreEscaped, html};

pub const PAGE_ID: &str = "login.ftl";

/// Fields whose errors are summarized inline instead of in the banner.
const CREDENTIAL_FIELDS: &[&str] = &["username", "password"];

#[derive(Debug, Clone, Copy)]
pub struct Login<'a> {
    template: Template<'a>,
}

impl<'a> Login<'a> {
    #[must_use]
    pub const fn new(template: Template<'a>) -> Self {
        Self { template }
    }

    /// Field errors replace the generic banner.
    #[must_use]
    pub fn displays_message(&self) -> bool {
        !self
            .template
            .context()
            .messages_per_field
            .exists_error(CREDENTIAL_FIELDS)
    }

    /// Registration help is offered only where self-registration is open.
    #[must_use]
    pub fn displays_info(&self) -> bool {
        let context = self.template.context();
        context.realm.password && context.realm.registration_allowed && !context.registration_disabled
    }

    #[must_use]
    pub fn props(&self) -> TemplateProps {
        let i18n = self.template.i18n();

        TemplateProps {
            display_message: self.displays_message(),
            display_info: self.displays_info(),
            header_node: Some(i18n.msg(MessageKey::LoginAccountTitle, &[])),
            info_node: Some(self.info()),
            ..TemplateProps::default()
        }
    }

    #[must_use]
    pub fn render(&self) -> Page {
        let props = self.props();
        let content = self.content();
        let with_form = self.template.context().realm.password;

        Page {
            decorations: self.template.decorations(&props),
            stylesheets: self.template.stylesheets(),
            scripts: self.template.scripts(),
            view: self.template.render(&props, &content),
            submit_once: with_form.then_some(LOGIN_FORM),
        }
    }

    fn info(&self) -> Markup {
        let i18n = self.template.i18n();

        html! {
            div {
                h4 { (i18n.msg(MessageKey::LoginHelperTitle, &[])) }
                p { (i18n.msg(MessageKey::HelperLoginDescription, &[])) }
                p class="kc-support" {
                    (i18n.msg(MessageKey::HelperLoginSupport, &[]))
                    a class="fr-btn fr-btn--tertiary-no-outline kc-inline-link" tabindex="7" href="/assistance" {
                        (i18n.msg(MessageKey::ContactSupportLink, &[]))
                    }
                }
            }
        }
    }

    #[must_use]
    pub fn content(&self) -> Markup {
        let context = self.template.context();
        let i18n = self.template.i18n();
        let classes = self.template.classes();
        let form_group = classes.class(KcClass::FormGroupClass);
        let first_error = context.messages_per_field.get_first_error(CREDENTIAL_FIELDS);
        let aria_invalid = if first_error.is_some() { "true" } else { "false" };
        let selected_credential = context
            .auth
            .as_ref()
            .and_then(|auth| auth.selected_credential.as_deref());

        html! {
            p class="kc-subtitle" { (i18n.msg(MessageKey::LoginDescription, &[])) }
            div id="kc-form" {
                div id="kc-form-wrapper" {
                    @if context.realm.password {
                        form id=(LOGIN_FORM.as_str()) action=(context.url.login_action) method="post" data-kc-submit-once {
                            @if let Some(error) = first_error {
                                span id="input-error"
                                    class=(classes.class(KcClass::InputErrorMessageClass))
                                    aria-live="polite" {
                                    (PreEscaped(error))
                                }
                            }
                            @if !context.username_hidden {
                                div class=(join(&[form_group.as_str(), "fr-pb-3w"])) {
                                    div class="fr-input-group" {
                                        label class="fr-label" for="username" {
                                            (i18n.msg(MessageKey::Identifier, &[]))
                                            span class="fr-hint-text" {
                                                (i18n.msg(MessageKey::IdentifierHint, &[]))
                                            }
                                        }
                                        input class="fr-input"
                                            tabindex="2"
                                            id="username"
                                            name="username"
                                            type="text"
                                            value=(context.login.username.as_deref().unwrap_or_default())
                                            aria-invalid=(aria_invalid)
                                            autofocus
                                            autocomplete="off";
                                    }
                                }
                            }
                            div class=(form_group) {
                                div class="fr-password" {
                                    label class="fr-label" for="password" {
                                        (i18n.msg(MessageKey::Password, &[]))
                                    }
                                    div class="fr-input-wrap" {
                                        input class="fr-password__input fr-input"
                                            id="password"
                                            name="password"
                                            type="password"
                                            autocomplete="current-password"
                                            aria-invalid=(aria_invalid);
                                    }
                                }
                            }
                            @if context.realm.reset_password_allowed {
                                a class="fr-btn fr-btn--tertiary-no-outline kc-forgot-password"
                                    tabindex="6"
                                    href=(context.url.login_reset_credentials_url) {
                                    (i18n.msg(MessageKey::DoForgotPassword, &[]))
                                }
                            }
                            div id="kc-form-buttons" class=(form_group) {
                                input type="hidden" id="id-hidden-input" name="credentialId" value=[selected_credential];
                                button class="fr-btn kc-submit" type="submit" name="login" tabindex="7" {
                                    (i18n.msg(MessageKey::Login, &[]))
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::classes::KcClasses;
    use crate::theme::context::{Auth, KcContext, Message, MessageKind};
    use crate::theme::i18n::I18n;
    use crate::theme::mock;

    fn render(context: &KcContext) -> String {
        let classes = KcClasses::default();
        let template = Template::new(context, I18n::from_context(context), &classes);
        Login::new(template).render().view.into_string()
    }

    #[test]
    fn hidden_username_omits_the_field() {
        let mut context = mock::login_context();
        context.username_hidden = true;

        let html = render(&context);

        assert!(!html.contains(r#"name="username""#));
        assert!(html.contains(r#"name="password""#));
    }

    #[test]
    fn visible_username_is_prefilled() {
        let mut context = mock::login_context();
        context.login.username = Some("ABC123".to_string());

        let html = render(&context);

        assert!(html.contains(r#"name="username" type="text" value="ABC123""#));
    }

    #[test]
    fn forgot_password_link_follows_realm_setting() {
        let mut context = mock::login_context();
        context.realm.reset_password_allowed = true;
        let html = render(&context);
        assert!(html.contains(&format!(
            r#"href="{}""#,
            context.url.login_reset_credentials_url
        )));
        assert!(html.contains("Forgot Password?"));

        context.realm.reset_password_allowed = false;
        let html = render(&context);
        assert!(!html.contains("Forgot Password?"));
        assert!(!html.contains(&context.url.login_reset_credentials_url));
    }

    #[test]
    fn field_errors_replace_the_banner() {
        let mut context = mock::login_context();
        context.message = Some(Message {
            kind: MessageKind::Error,
            summary: "Invalid username or password.".to_string(),
        });
        context
            .messages_per_field
            .push("password", "Invalid <em>username</em> or password.");

        let html = render(&context);

        assert!(!html.contains(r#"role="alert""#));
        assert!(html.contains(r#"<span id="input-error""#));
        assert!(html.contains("Invalid <em>username</em> or password."));
        assert!(html.contains(r#"aria-invalid="true""#));
    }

    #[test]
    fn banner_shows_without_field_errors() {
        let mut context = mock::login_context();
        context.message = Some(Message {
            kind: MessageKind::Success,
            summary: "Your password has been updated.".to_string(),
        });

        let html = render(&context);

        assert!(html.contains("alert-success"));
        assert!(!html.contains("input-error"));
    }

    #[test]
    fn selected_credential_is_carried_forward() {
        let mut context = mock::login_context();
        context.auth = Some(Auth {
            selected_credential: Some("cred-42".to_string()),
            ..Auth::default()
        });
        assert!(render(&context).contains(r#"name="credentialId" value="cred-42""#));

        context.auth = None;
        assert!(render(&context).contains(r#"name="credentialId">"#));
    }

    #[test]
    fn form_posts_to_login_action_and_guards_resubmission() {
        let context = mock::login_context();
        let classes = KcClasses::default();
        let template = Template::new(&context, I18n::from_context(&context), &classes);
        let page = Login::new(template).render();
        let html = page.view.into_string();

        assert!(html.contains(&format!(
            r#"<form id="kc-form-login" action="{}" method="post" data-kc-submit-once>"#,
            context.url.login_action
        )));
        assert!(html.contains(r#"<button class="fr-btn kc-submit" type="submit" name="login""#));
        assert_eq!(page.submit_once, Some(LOGIN_FORM));
    }

    #[test]
    fn no_form_without_password_authentication() {
        let mut context = mock::login_context();
        context.realm.password = false;
        let classes = KcClasses::default();
        let template = Template::new(&context, I18n::from_context(&context), &classes);
        let login = Login::new(template);
        let page = login.render();

        assert!(!page.view.into_string().contains("kc-form-login"));
        assert_eq!(page.submit_once, None);
        assert!(!login.displays_info());
    }

    #[test]
    fn registration_help_needs_open_registration() {
        let mut context = mock::login_context();
        let html = render(&context);
        assert!(html.contains("Login help"));
        assert!(html.contains(r#"href="/assistance""#));

        context.registration_disabled = true;
        assert!(!render(&context).contains("Login help"));

        context.registration_disabled = false;
        context.realm.registration_allowed = false;
        assert!(!render(&context).contains("Login help"));
    }

    #[test]
    fn renders_in_french() {
        let mut context = mock::login_context();
        if let Some(locale) = context.locale.as_mut() {
            locale.current_language_tag = Some("fr".to_string());
        }

        let html = render(&context);

        assert!(html.contains("Identifiant"));
        assert!(html.contains("Mot de passe"));
        assert!(html.contains(">Connexion</button>"));
    }
}
