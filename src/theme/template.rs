//! Page shell shared by every login page: DSFR header and footer, form
//! header, message banner, "try another way" form and info panel around the
//! page's own content.

use crate::theme::assets::{self, ScriptTag};
use crate::theme::classes::{KcClass, KcClasses, join};
use crate::theme::context::{KcContext, Message, MessageKind};
use crate::theme::document::Decorations;
use crate::theme::form::{FormAction, TRY_ANOTHER_WAY_FORM};
use crate::theme::i18n::{I18n, MessageKey};
use maud::{Markup, PreEscaped, html};

/// What the calling page wants the shell to show.
#[derive(Debug, Clone)]
pub struct TemplateProps {
    pub display_info: bool,
    pub display_message: bool,
    pub display_required_fields: bool,
    pub header_node: Option<Markup>,
    pub social_providers_node: Option<Markup>,
    pub info_node: Option<Markup>,
    pub document_title: Option<String>,
    pub body_class_name: Option<String>,
}

impl Default for TemplateProps {
    fn default() -> Self {
        Self {
            display_info: false,
            display_message: true,
            display_required_fields: false,
            header_node: None,
            social_providers_node: None,
            info_node: None,
            document_title: None,
            body_class_name: None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Template<'a> {
    context: &'a KcContext,
    i18n: I18n<'a>,
    classes: &'a KcClasses,
}

impl<'a> Template<'a> {
    #[must_use]
    pub const fn new(context: &'a KcContext, i18n: I18n<'a>, classes: &'a KcClasses) -> Self {
        Self {
            context,
            i18n,
            classes,
        }
    }

    #[must_use]
    pub const fn context(&self) -> &'a KcContext {
        self.context
    }

    #[must_use]
    pub const fn i18n(&self) -> I18n<'a> {
        self.i18n
    }

    #[must_use]
    pub const fn classes(&self) -> &'a KcClasses {
        self.classes
    }

    #[must_use]
    pub fn decorations(&self, props: &TemplateProps) -> Decorations {
        let title = props.document_title.clone().unwrap_or_else(|| {
            self.i18n
                .msg_str(MessageKey::LoginTitle, &[self.context.realm_display_name()])
        });
        let body_class = props
            .body_class_name
            .clone()
            .unwrap_or_else(|| self.classes.class(KcClass::BodyClass));

        Decorations {
            title,
            lang: self.context.current_language_tag().map(str::to_string),
            html_class: self.classes.class(KcClass::HtmlClass),
            body_class,
        }
    }

    #[must_use]
    pub fn stylesheets(&self) -> Vec<String> {
        assets::stylesheet_hrefs(&self.context.url, self.classes.do_use_default_css())
    }

    #[must_use]
    pub fn scripts(&self) -> Vec<ScriptTag> {
        assets::script_tags(self.context)
    }

    /// The message to show in the banner, if any. App-initiated actions hide
    /// warnings about completing the action.
    #[must_use]
    pub fn banner_message(&self, props: &TemplateProps) -> Option<&'a Message> {
        if !props.display_message {
            return None;
        }

        self.context.message.as_ref().filter(|message| {
            !message.summary.trim().is_empty()
                && (message.kind != MessageKind::Warning || !self.context.is_app_initiated_action)
        })
    }

    #[must_use]
    pub fn render(&self, props: &TemplateProps, children: &Markup) -> Markup {
        html! {
            div class="kc-page" {
                (self.site_header())
                div class="kc-main" {
                    div class="kc-card fr-py-md-7w fr-px-md-12w fr-px-2w fr-py-3w" {
                        header class=(self.classes.class(KcClass::FormHeaderClass)) {
                            (self.form_header(props))
                        }
                        div id="kc-content" {
                            div id="kc-content-wrapper" {
                                @if let Some(message) = self.banner_message(props) {
                                    (self.banner(message))
                                }
                                (children)
                                @if self.context.shows_try_another_way() {
                                    (self.try_another_way())
                                }
                                @if let Some(social) = &props.social_providers_node {
                                    (social)
                                }
                                @if props.display_info {
                                    div class="kc-helper" {
                                        hr class="kc-divider";
                                        @if let Some(info) = &props.info_node {
                                            (info)
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                (self.site_footer())
            }
        }
    }

    fn site_header(&self) -> Markup {
        let i18n = self.i18n;
        let resources = self.context.url.resources_path.trim_end_matches('/');

        html! {
            header role="banner" id="header" class="fr-header" {
                div class="fr-header__body" {
                    div class="fr-container" {
                        div class="fr-header__body-row" {
                            div class="fr-header__brand fr-enlarge-link" {
                                div class="fr-header__brand-top" {
                                    div class="fr-header__logo" {
                                        p class="fr-logo" { "République" br; "Française" }
                                    }
                                    div class="fr-header__operator" {
                                        img class="fr-responsive-img kc-operator-logo"
                                            src={ (resources) "/img/logo-insee.png" }
                                            alt=(i18n.msg_str(MessageKey::OperatorLogoAlt, &[]));
                                    }
                                }
                                div class="fr-header__service" {
                                    a href="/" title=(i18n.msg_str(MessageKey::HomeLinkTitle, &[])) {
                                        p class="fr-header__service-title" {
                                            (i18n.msg(MessageKey::ServiceTagline, &[]))
                                        }
                                    }
                                }
                            }
                            div class="fr-header__tools" {
                                div class="fr-header__tools-links" {
                                    ul class="fr-btns-group" {
                                        li {
                                            a class="fr-btn fr-icon-customer-service-fill" {
                                                (i18n.msg(MessageKey::ContactSupport, &[]))
                                            }
                                        }
                                        li {
                                            a class="fr-btn fr-icon-account-circle-fill fr-btn--tertiary fr-translate" {
                                                (i18n.msg(MessageKey::LogIn, &[]))
                                            }
                                        }
                                        @if let Some(switcher) = self.language_switcher() {
                                            li { (switcher) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    /// Locale menu, shown only when the realm offers more than one locale.
    fn language_switcher(&self) -> Option<Markup> {
        let locale = self.context.locale.as_ref()?;
        if locale.supported.len() < 2 {
            return None;
        }
        let current = self.i18n.language().as_str();

        Some(html! {
            nav role="navigation" class="fr-translate fr-nav" {
                div class="fr-nav__item" {
                    button class="fr-translate__btn fr-btn fr-btn--tertiary"
                        aria-controls="translate-menu"
                        aria-expanded="false"
                        title=(self.i18n.msg_str(MessageKey::Languages, &[])) {
                        (current.to_uppercase())
                    }
                    div class="fr-collapse fr-translate__menu fr-menu" id="translate-menu" {
                        ul class="fr-menu__list" {
                            @for supported in &locale.supported {
                                li {
                                    a class="fr-translate__language fr-nav__link"
                                        hreflang=(supported.language_tag)
                                        lang=(supported.language_tag)
                                        href=(supported.url)
                                        aria-current=[(supported.language_tag == current).then_some("true")] {
                                        (supported.label)
                                    }
                                }
                            }
                        }
                    }
                }
            }
        })
    }

    fn form_header(&self, props: &TemplateProps) -> Markup {
        let node = match self.context.auth.as_ref() {
            Some(auth) if self.context.shows_attempted_username() => html! {
                div id="kc-username" class=(self.classes.class(KcClass::FormGroupClass)) {
                    label id="kc-attempted-username" {
                        (auth.attempted_username.as_deref().unwrap_or_default())
                    }
                    a id="reset-login"
                        href=(self.context.url.login_restart_flow_url)
                        aria-label=(self.i18n.msg_str(MessageKey::RestartLoginTooltip, &[])) {
                        div class="kc-login-tooltip" {
                            i class=(self.classes.class(KcClass::ResetFlowIcon)) {}
                            span class="kc-tooltip-text" {
                                (self.i18n.msg(MessageKey::RestartLoginTooltip, &[]))
                            }
                        }
                    }
                }
            },
            _ => html! {
                h4 id="kc-page-title" {
                    @if let Some(header) = &props.header_node {
                        (header)
                    }
                }
            },
        };

        if !props.display_required_fields {
            return node;
        }

        let label_wrapper = self.classes.class(KcClass::LabelWrapperClass);

        html! {
            div class=(self.classes.class(KcClass::ContentWrapperClass)) {
                div class=(join(&[label_wrapper.as_str(), "subtitle"])) {
                    span class="subtitle" {
                        span class="required" { "*" }
                        (self.i18n.msg(MessageKey::RequiredFields, &[]))
                    }
                }
                div class="col-md-10" { (node) }
            }
        }
    }

    fn banner(&self, message: &Message) -> Markup {
        let icon = match message.kind {
            MessageKind::Success => KcClass::FeedbackSuccessIcon,
            MessageKind::Warning => KcClass::FeedbackWarningIcon,
            MessageKind::Error => KcClass::FeedbackErrorIcon,
            MessageKind::Info => KcClass::FeedbackInfoIcon,
        };
        let kind_class = format!("alert-{}", message.kind.as_str());
        let alert_class = self.classes.class(KcClass::AlertClass);
        let modifier_class = format!("pf-m-{}", message.kind.modifier());
        let class = join(&[
            kind_class.as_str(),
            alert_class.as_str(),
            modifier_class.as_str(),
        ]);

        html! {
            div class=(class) role="alert" {
                div class="pf-c-alert__icon" {
                    span class=(self.classes.class(icon)) {}
                }
                span class=(self.classes.class(KcClass::AlertTitleClass)) {
                    (PreEscaped(&message.summary))
                }
            }
        }
    }

    fn try_another_way(&self) -> Markup {
        html! {
            form id=(TRY_ANOTHER_WAY_FORM.as_str()) action=(self.context.url.login_action) method="post" {
                div class=(self.classes.class(KcClass::FormGroupClass)) {
                    input type="hidden" name="tryAnotherWay" value="on";
                    a href="#"
                        id="try-another-way"
                        onclick=(FormAction::SubmitById(TRY_ANOTHER_WAY_FORM).to_js()) {
                        (self.i18n.msg(MessageKey::DoTryAnotherWay, &[]))
                    }
                }
            }
        }
    }

    fn site_footer(&self) -> Markup {
        html! {
            footer class="fr-footer" role="contentinfo" id="footer" {
                div class="fr-container" {
                    div class="fr-footer__body" {
                        div class="fr-footer__brand fr-enlarge-link" {
                            p class="fr-logo" { "République" br; "Française" }
                        }
                    }
                    div class="fr-footer__bottom" {
                        ul class="fr-footer__bottom-list" {
                            li class="fr-footer__bottom-item" {
                                span class="fr-footer__bottom-link" {
                                    (self.i18n.msg(MessageKey::AccessibilityNonCompliant, &[]))
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
