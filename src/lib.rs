//! # Login theme
//!
//! Branded login pages for an identity server. The identity server owns the
//! authentication flow and describes the current step in a context object;
//! this crate turns that context into the page the user sees.
//!
//! ## Rendering
//!
//! Pages are rendered server-side with `maud` inside a shared shell (site
//! header and footer, form header, message banner, "try another way" form and
//! info panel). Each response is a complete document that stays hidden until
//! its stylesheets have settled and disables its submit button after the
//! first submission.
//!
//! ## Serving
//!
//! - `login-theme server` exposes `POST /render` for the identity server, a
//!   preview of a mock context on `/`, health probes and optional static
//!   resources.
//! - `login-theme render` writes one context's page to a file or stdout.

pub mod api;
pub mod cli;
pub mod theme;

pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_hash_is_never_empty() {
        assert!(!GIT_COMMIT_HASH.trim().is_empty());
    }
}
