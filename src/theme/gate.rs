//! Stylesheet settlement gate.
//!
//! Nothing is shown and no script is inserted until every requested
//! stylesheet has settled. The gate has two phases, `Loading` and `Settled`,
//! and the scripts live inside `Loading`: the only way to get them out is the
//! single transition to `Settled`, so they are handed over exactly once.
//!
//! A stylesheet that fails to load still counts as settled. Waiting on it
//! would leave the page blank with no way to recover.

use crate::theme::assets::ScriptTag;
use std::collections::BTreeSet;
use std::mem;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Errored,
}

#[derive(Debug)]
enum Phase {
    Loading {
        pending: BTreeSet<String>,
        scripts: Vec<ScriptTag>,
    },
    Settled,
}

#[derive(Debug)]
pub struct StylesheetGate {
    phase: Phase,
}

impl StylesheetGate {
    #[must_use]
    pub fn new(hrefs: impl IntoIterator<Item = String>, scripts: Vec<ScriptTag>) -> Self {
        Self {
            phase: Phase::Loading {
                pending: hrefs.into_iter().collect(),
                scripts,
            },
        }
    }

    #[must_use]
    pub const fn is_settled(&self) -> bool {
        matches!(self.phase, Phase::Settled)
    }

    /// Stylesheets still waiting for a load or error event.
    #[must_use]
    pub fn pending(&self) -> Vec<&str> {
        match &self.phase {
            Phase::Loading { pending, .. } => pending.iter().map(String::as_str).collect(),
            Phase::Settled => Vec::new(),
        }
    }

    /// Record the outcome of one stylesheet and settle if it was the last.
    ///
    /// Returns the scripts to insert on the settling call only.
    pub fn report(&mut self, href: &str, outcome: LoadOutcome) -> Option<Vec<ScriptTag>> {
        match &mut self.phase {
            Phase::Loading { pending, .. } => {
                if !pending.remove(href) {
                    debug!(href, "ignoring load event for an untracked stylesheet");
                    return None;
                }
                if outcome == LoadOutcome::Errored {
                    warn!(href, "stylesheet failed to load, treating it as settled");
                }
            }
            Phase::Settled => return None,
        }

        self.settle()
    }

    /// Take the terminal transition if nothing is pending.
    ///
    /// Returns `Some(scripts)` exactly once per gate; later calls, including
    /// spurious re-fires, return `None`.
    pub fn settle(&mut self) -> Option<Vec<ScriptTag>> {
        match &self.phase {
            Phase::Loading { pending, .. } if pending.is_empty() => {}
            _ => return None,
        }

        match mem::replace(&mut self.phase, Phase::Settled) {
            Phase::Loading { scripts, .. } => {
                debug!(scripts = scripts.len(), "stylesheets settled");
                Some(scripts)
            }
            Phase::Settled => None,
        }
    }
}
