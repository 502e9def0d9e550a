//! End-to-end behavior of the login page through the public rendering API.

use anyhow::Result;
use login_theme::theme::{
    ThemeConfig,
    context::{Auth, KcContext, Message, MessageKind},
    document::DocumentState,
    form::SubmitDecision,
    gate::LoadOutcome,
    i18n::{I18n, Language, MessageKey, SUPPORTED_LANGUAGES},
    mock,
    mount::Mount,
    pages::{Page, render_page},
};

fn page(context: &KcContext) -> Result<Page> {
    Ok(render_page(context, &ThemeConfig::default())?)
}

fn view(context: &KcContext) -> Result<String> {
    Ok(page(context)?.view.into_string())
}

fn with_message(kind: MessageKind, app_initiated: bool) -> KcContext {
    let mut context = mock::login_context();
    context.message = Some(Message {
        kind,
        summary: "Please complete the action.".to_string(),
    });
    context.is_app_initiated_action = app_initiated;
    context
}

#[test]
fn no_banner_without_a_message() -> Result<()> {
    let context = mock::login_context();
    assert!(context.message.is_none());

    assert!(!view(&context)?.contains("role=\"alert\""));
    Ok(())
}

#[test]
fn no_banner_when_field_errors_take_over() -> Result<()> {
    let mut context = with_message(MessageKind::Error, false);
    context
        .messages_per_field
        .push("username", "Invalid username or password.");

    let html = view(&context)?;

    assert!(!html.contains("role=\"alert\""));
    assert!(html.contains("Invalid username or password."));
    Ok(())
}

#[test]
fn warning_banner_depends_on_app_initiated_action() -> Result<()> {
    assert!(!view(&with_message(MessageKind::Warning, true))?.contains("role=\"alert\""));
    assert!(view(&with_message(MessageKind::Warning, false))?.contains("role=\"alert\""));
    Ok(())
}

#[test]
fn hidden_username_has_no_username_field() -> Result<()> {
    let mut context = mock::login_context();
    context.username_hidden = true;

    let html = view(&context)?;

    assert!(!html.contains("id=\"username\""));
    assert!(html.contains("id=\"password\""));
    Ok(())
}

#[test]
fn attempted_username_offers_restart() -> Result<()> {
    let mut context = mock::login_context();
    context.auth = Some(Auth {
        show_username: true,
        show_reset_credentials: false,
        attempted_username: Some("ABC123".to_string()),
        ..Auth::default()
    });

    let html = view(&context)?;

    assert!(html.contains("<label id=\"kc-attempted-username\">ABC123</label>"));
    assert!(html.contains(&format!(
        "<a id=\"reset-login\" href=\"{}\"",
        context.url.login_restart_flow_url
    )));
    assert!(!html.contains("id=\"kc-page-title\""));
    Ok(())
}

#[test]
fn forgot_password_link_follows_realm() -> Result<()> {
    let mut context = mock::login_context();
    let link = format!("href=\"{}\"", context.url.login_reset_credentials_url);

    context.realm.reset_password_allowed = false;
    assert!(!view(&context)?.contains(&link));

    context.realm.reset_password_allowed = true;
    assert!(view(&context)?.contains(&link));
    Ok(())
}

#[test]
fn scripts_are_inserted_once_per_mount() -> Result<()> {
    let context = mock::login_context();
    let page = page(&context)?;
    let stylesheets = page.stylesheets.clone();
    let mut mount = Mount::new(page, DocumentState::default());

    let mut insertions = 0;
    if mount.start().is_some() {
        insertions += 1;
    }
    for href in &stylesheets {
        if mount.on_stylesheet(href, LoadOutcome::Loaded).is_some() {
            insertions += 1;
        }
    }
    // Spurious re-fires after settlement.
    for href in &stylesheets {
        if mount.on_stylesheet(href, LoadOutcome::Loaded).is_some() {
            insertions += 1;
        }
    }
    if mount.start().is_some() {
        insertions += 1;
    }

    assert_eq!(insertions, 1);
    assert!(mount.view().is_some());
    Ok(())
}

#[test]
fn rapid_submits_go_out_once() -> Result<()> {
    let mut mount = Mount::new(page(&mock::login_context())?, DocumentState::default());

    let decisions = [mount.submit(), mount.submit()];

    assert_eq!(
        decisions,
        [Some(SubmitDecision::Proceed), Some(SubmitDecision::Suppress)]
    );
    assert!(mount.is_submit_disabled());
    Ok(())
}

#[test]
fn every_message_is_translated() {
    for &language in SUPPORTED_LANGUAGES {
        let i18n = I18n::new(language);
        for &key in MessageKey::ALL {
            assert!(
                !i18n.msg_str(key, &["Survey"]).trim().is_empty(),
                "{} has no {} text",
                key.as_str(),
                language.as_str()
            );
        }
    }
}

#[test]
fn french_page_has_no_english_labels() -> Result<()> {
    let mut context = mock::login_context();
    if let Some(locale) = context.locale.as_mut() {
        locale.current_language_tag = Some(Language::Fr.as_str().to_string());
    }

    let page = page(&context)?;
    let html = page.view.into_string();

    assert_eq!(page.decorations.lang.as_deref(), Some("fr"));
    assert_eq!(page.decorations.title, "Se connecter à Survey portal");
    assert!(html.contains("Mot de passe oublié ?"));
    assert!(!html.contains("Forgot Password?"));
    Ok(())
}

#[test]
fn document_is_complete() -> Result<()> {
    let html = page(&mock::login_context())?.to_html()?;

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<script type=\"application/json\" id=\"kc-bootstrap\">"));
    assert!(html.contains("<template id=\"kc-deferred\">"));
    assert!(html.ends_with("</body></html>"));
    Ok(())
}
