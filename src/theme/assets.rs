//! Stylesheets and scripts a login page needs, in insertion order.

use crate::theme::context::{KcContext, Urls};
use serde::Serialize;

/// Stylesheets requested before anything is shown. Empty when the default
/// styling is disabled.
#[must_use]
pub fn stylesheet_hrefs(url: &Urls, do_use_default_css: bool) -> Vec<String> {
    if !do_use_default_css {
        return Vec::new();
    }

    let common = url.resources_common_path.trim_end_matches('/');
    let theme = url.resources_path.trim_end_matches('/');

    vec![
        format!("{common}/node_modules/@patternfly/patternfly/patternfly.min.css"),
        format!("{common}/node_modules/patternfly/dist/css/patternfly.min.css"),
        format!("{common}/node_modules/patternfly/dist/css/patternfly-additions.min.css"),
        format!("{common}/lib/pficon/pficon.css"),
        format!("{theme}/css/login.css"),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptTag {
    Module { src: String },
    InlineModule { text: String },
    Classic { src: String },
}

/// Shape the bootstrap script consumes to create `<script>` elements.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptDescriptor<'a> {
    #[serde(rename = "type")]
    pub script_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_content: Option<&'a str>,
}

impl ScriptTag {
    #[must_use]
    pub fn descriptor(&self) -> ScriptDescriptor<'_> {
        match self {
            Self::Module { src } => ScriptDescriptor {
                script_type: "module",
                src: Some(src),
                text_content: None,
            },
            Self::InlineModule { text } => ScriptDescriptor {
                script_type: "module",
                src: None,
                text_content: Some(text),
            },
            Self::Classic { src } => ScriptDescriptor {
                script_type: "text/javascript",
                src: Some(src),
                text_content: None,
            },
        }
    }
}

/// Scripts inserted once the stylesheets settle: the menu behavior, the
/// session keepalive when an authentication session exists, then the
/// context's scripts in their given order.
#[must_use]
pub fn script_tags(context: &KcContext) -> Vec<ScriptTag> {
    let resources = context.url.resources_path.trim_end_matches('/');
    let mut tags = vec![ScriptTag::Module {
        src: format!("{resources}/js/menu-button-links.js"),
    }];

    if let Some(session) = &context.authentication_session {
        let text = [
            format!(
                "import {{ checkCookiesAndSetTimer }} from {};",
                js_string(&format!("{resources}/js/authChecker.js"))
            ),
            String::new(),
            "checkCookiesAndSetTimer(".to_string(),
            format!("  {},", js_string(&session.auth_session_id)),
            format!("  {},", js_string(&session.tab_id)),
            format!("  {}", js_string(&context.url.sso_login_in_other_tabs_url)),
            ");".to_string(),
        ]
        .join("\n");
        tags.push(ScriptTag::InlineModule { text });
    }

    tags.extend(
        context
            .scripts
            .iter()
            .map(|src| ScriptTag::Classic { src: src.clone() }),
    );

    tags
}

/// A JavaScript string literal for `value`.
fn js_string(value: &str) -> String {
    // Serializing a `&str` cannot fail.
    serde_json::to_string(value).unwrap_or_else(|_| String::from("\"\""))
}
