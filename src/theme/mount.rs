//! One mounted page: decorations applied to the document, the stylesheet gate
//! armed, and the submit-once guard of the page's form.
//!
//! This is the state the bootstrap script keeps in the browser, expressed so
//! hosts that drive the lifecycle themselves get the same guarantees.

use crate::theme::assets::ScriptTag;
use crate::theme::document::{DocumentState, ScopedDecoration};
use crate::theme::form::{SubmitDecision, SubmitGuard};
use crate::theme::gate::{LoadOutcome, StylesheetGate};
use crate::theme::pages::Page;
use maud::Markup;

#[derive(Debug)]
pub struct Mount {
    decoration: ScopedDecoration,
    gate: StylesheetGate,
    view: Markup,
    submit_guard: Option<SubmitGuard>,
}

impl Mount {
    #[must_use]
    pub fn new(page: Page, document: DocumentState) -> Self {
        let Page {
            decorations,
            stylesheets,
            scripts,
            view,
            submit_once,
        } = page;

        Self {
            decoration: ScopedDecoration::apply(document, &decorations),
            gate: StylesheetGate::new(stylesheets, scripts),
            view,
            submit_guard: submit_once.map(|_| SubmitGuard::new()),
        }
    }

    #[must_use]
    pub const fn document(&self) -> &DocumentState {
        self.decoration.document()
    }

    #[must_use]
    pub const fn is_settled(&self) -> bool {
        self.gate.is_settled()
    }

    /// Nothing is shown until every stylesheet has settled.
    #[must_use]
    pub fn view(&self) -> Option<&Markup> {
        self.gate.is_settled().then_some(&self.view)
    }

    /// Settle right away when the page requested no stylesheets.
    pub fn start(&mut self) -> Option<Vec<ScriptTag>> {
        self.gate.settle()
    }

    /// Returns the scripts to insert on the settling event only.
    pub fn on_stylesheet(&mut self, href: &str, outcome: LoadOutcome) -> Option<Vec<ScriptTag>> {
        self.gate.report(href, outcome)
    }

    /// Submission of the page's form. `None` when the page has no guarded
    /// form.
    pub fn submit(&mut self) -> Option<SubmitDecision> {
        self.submit_guard.as_mut().map(SubmitGuard::on_submit)
    }

    #[must_use]
    pub fn is_submit_disabled(&self) -> bool {
        self.submit_guard.is_some_and(|guard| guard.is_disabled())
    }

    /// Tear down and hand back the document as it was before mounting.
    #[must_use]
    pub fn unmount(self) -> DocumentState {
        self.decoration.restore()
    }
}
