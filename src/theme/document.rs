//! Document-level attributes shared across renders: the title, the root
//! element's `lang` and the class lists of `<html>` and `<body>`.
//!
//! A page never appends to these. It computes the desired value and replaces
//! the previous one wholesale, and a [`ScopedDecoration`] puts the previous
//! state back when the page goes away.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentState {
    pub title: String,
    pub lang: Option<String>,
    pub html_class: String,
    pub body_class: String,
}

/// The document attributes one page wants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decorations {
    pub title: String,
    /// `None` leaves the current `lang` untouched.
    pub lang: Option<String>,
    pub html_class: String,
    pub body_class: String,
}

impl Decorations {
    /// Overwrite every decorated attribute of `document`.
    pub fn apply(&self, document: &mut DocumentState) {
        document.title.clone_from(&self.title);
        if let Some(lang) = &self.lang {
            document.lang = Some(lang.clone());
        }
        document.html_class.clone_from(&self.html_class);
        document.body_class.clone_from(&self.body_class);
    }
}

/// Decorations applied on behalf of a mounted page, restorable on unmount.
#[derive(Debug)]
pub struct ScopedDecoration {
    document: DocumentState,
    previous: DocumentState,
}

impl ScopedDecoration {
    #[must_use]
    pub fn apply(document: DocumentState, decorations: &Decorations) -> Self {
        let previous = document.clone();
        let mut document = document;
        decorations.apply(&mut document);
        Self { document, previous }
    }

    #[must_use]
    pub const fn document(&self) -> &DocumentState {
        &self.document
    }

    /// Replace the current decorations, e.g. on a re-render with new props.
    pub fn replace(&mut self, decorations: &Decorations) {
        decorations.apply(&mut self.document);
    }

    /// Give the document back exactly as it was before [`Self::apply`].
    #[must_use]
    pub fn restore(self) -> DocumentState {
        self.previous
    }
}
