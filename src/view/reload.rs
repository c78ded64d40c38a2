// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Blameview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use tracing::info;
use url::Url;
use uuid::Uuid;

/// Query parameter marking a page load as fresh.
pub const FRESHNESS_PARAM: &str = "v";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReloadDecision {
    Proceed,
    /// Navigate to this URL instead; it carries a new freshness marker.
    Reload(Url),
}

/// Forces one reload per page open so a back-forward cached copy is never reused.
pub struct ReloadGuard;

impl ReloadGuard {
    pub fn check(url: &Url) -> ReloadDecision {
        Self::check_with(url, || Uuid::new_v4().simple().to_string())
    }

    pub fn check_with(url: &Url, token: impl FnOnce() -> String) -> ReloadDecision {
        if Self::marker(url).is_some() {
            return ReloadDecision::Proceed;
        }
        let mut fresh = url.clone();
        fresh.query_pairs_mut().append_pair(FRESHNESS_PARAM, &token());
        info!(url = %fresh, "reloading with freshness marker");
        ReloadDecision::Reload(fresh)
    }

    /// The freshness marker of `url`, if present.
    pub fn marker(url: &Url) -> Option<String> {
        url.query_pairs()
            .find(|(key, _)| key == FRESHNESS_PARAM)
            .map(|(_, value)| value.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::{ReloadDecision, ReloadGuard};

    #[test]
    fn unmarked_url_reloads_once() {
        let url = Url::parse("http://localhost:8080/").unwrap();
        let ReloadDecision::Reload(fresh) = ReloadGuard::check_with(&url, || "abc".into()) else {
            panic!("expected a reload");
        };
        assert_eq!(fresh.as_str(), "http://localhost:8080/?v=abc");
        assert_eq!(ReloadGuard::check(&fresh), ReloadDecision::Proceed);
    }

    #[test]
    fn existing_query_is_kept() {
        let url = Url::parse("http://localhost:8080/?tab=authors").unwrap();
        let ReloadDecision::Reload(fresh) = ReloadGuard::check_with(&url, || "x1".into()) else {
            panic!("expected a reload");
        };
        assert_eq!(fresh.query(), Some("tab=authors&v=x1"));
    }

    #[test]
    fn empty_marker_counts_as_present() {
        let url = Url::parse("http://localhost:8080/?v=").unwrap();
        assert_eq!(ReloadGuard::check(&url), ReloadDecision::Proceed);
        assert_eq!(ReloadGuard::marker(&url).as_deref(), Some(""));
    }

    #[test]
    fn generated_tokens_differ() {
        let url = Url::parse("http://localhost:8080/").unwrap();
        assert_ne!(ReloadGuard::check(&url), ReloadGuard::check(&url));
    }
}
