//! Request routing for user-scoped endpoints.
//!
//! Every contact and note operation targets one user. The target comes from
//! an explicit id when the caller provides one, otherwise from the persisted
//! selection. The choice is resolved once per call into a [`Target`], and the
//! URL is then built under exactly one prefix: the API root for explicit
//! targets, the precomputed contextual base for selected ones. A path can
//! never pick up both.

use url::Url;

use crate::error::{Error, Result};
use crate::selection::Selection;

/// How a single request addresses its user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Target {
    /// Caller named the user; the absolute `users/{id}` path applies.
    Explicit { user_id: String },
    /// No explicit id; the selected user's shortcut base applies.
    Contextual { base: Url },
}

/// Resolves URLs for user-scoped requests.
#[derive(Debug, Clone)]
pub(crate) struct UserRouter {
    /// Normalized API root, with a trailing slash.
    api_root: Url,
    /// `{api_root}/users/{selected_id}/`, computed once at construction.
    contextual_base: Option<Url>,
}

impl UserRouter {
    pub(crate) fn new(api_root: Url, selection: Option<&Selection>) -> Result<Self> {
        let contextual_base = match selection {
            Some(selection) => Some(api_root.join(&format!("users/{}/", selection.user_id))?),
            None => None,
        };
        Ok(Self {
            api_root,
            contextual_base,
        })
    }

    /// Pick the addressing mode for one request.
    ///
    /// An explicit id always wins over the selection, even when both name the
    /// same user. An empty explicit id counts as not provided.
    pub(crate) fn target(&self, explicit: Option<&str>) -> Result<Target> {
        if let Some(user_id) = explicit.filter(|id| !id.is_empty()) {
            return Ok(Target::Explicit {
                user_id: user_id.to_string(),
            });
        }
        match &self.contextual_base {
            Some(base) => Ok(Target::Contextual { base: base.clone() }),
            None => Err(Error::UnresolvedUser),
        }
    }

    /// Build the URL for `suffix` under the resolved target.
    pub(crate) fn resolve(&self, explicit: Option<&str>, suffix: &str) -> Result<Url> {
        let suffix = suffix.trim_start_matches('/');
        let url = match self.target(explicit)? {
            Target::Explicit { user_id } => self
                .api_root
                .join(&format!("users/{user_id}/"))?
                .join(suffix)?,
            Target::Contextual { base } => base.join(suffix)?,
        };
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_root(base: &str) -> Url {
        let mut url = Url::parse(base).unwrap();
        if !url.path().ends_with('/') {
            url.set_path(&format!("{}/", url.path()));
        }
        url
    }

    fn selection(user_id: &str) -> Selection {
        Selection {
            user_id: user_id.to_string(),
            username: "joe".to_string(),
        }
    }

    fn router(base: &str, selected: Option<&str>) -> UserRouter {
        UserRouter::new(api_root(base), selected.map(selection).as_ref()).unwrap()
    }

    #[test]
    fn explicit_id_builds_absolute_path() {
        let router = router("http://h/api", None);
        let url = router.resolve(Some("42"), "contacts").unwrap();
        // The configured base is the API root; it is never doubled.
        assert_eq!(url.as_str(), "http://h/api/users/42/contacts");
    }

    #[test]
    fn explicit_id_wins_over_selection() {
        let router = router("http://h/api", Some("42"));
        let url = router.resolve(Some("7"), "contacts").unwrap();
        assert_eq!(url.as_str(), "http://h/api/users/7/contacts");
    }

    #[test]
    fn explicit_id_wins_even_when_equal_to_selection() {
        let router = router("http://h/api", Some("42"));
        assert_eq!(
            router.target(Some("42")).unwrap(),
            Target::Explicit {
                user_id: "42".to_string()
            }
        );
        let url = router.resolve(Some("42"), "contacts").unwrap();
        assert_eq!(url.as_str(), "http://h/api/users/42/contacts");
    }

    #[test]
    fn selection_supplies_the_contextual_base() {
        let router = router("http://h/api", Some("42"));
        let url = router.resolve(None, "contacts/notes/7").unwrap();
        assert_eq!(url.as_str(), "http://h/api/users/42/contacts/notes/7");
    }

    #[test]
    fn empty_explicit_id_counts_as_absent() {
        let router = router("http://h/api", Some("42"));
        let url = router.resolve(Some(""), "contacts/notes/7").unwrap();
        assert_eq!(url.as_str(), "http://h/api/users/42/contacts/notes/7");
    }

    #[test]
    fn unresolved_without_selection_or_flag() {
        let router = router("http://h/api", None);
        for explicit in [None, Some("")] {
            let err = router.resolve(explicit, "contacts").unwrap_err();
            assert!(matches!(err, Error::UnresolvedUser));
        }
    }

    #[test]
    fn contextual_base_is_precomputed_from_the_selection() {
        let router = router("http://h/api", Some("42"));
        match router.target(None).unwrap() {
            Target::Contextual { base } => {
                assert_eq!(base.as_str(), "http://h/api/users/42/");
            }
            other => panic!("expected contextual target, got {other:?}"),
        }
    }

    #[test]
    fn leading_slash_on_suffix_is_tolerated() {
        let router = router("http://h/api", None);
        let url = router.resolve(Some("42"), "/contacts").unwrap();
        assert_eq!(url.as_str(), "http://h/api/users/42/contacts");
    }
}
