//! Resource managers
//!
//! Each manager maps one group of REST endpoints onto methods. A manager only
//! borrows the shared [`GitHubClient`](gh_rest::GitHubClient); obtain one
//! through the [`GitHub`](crate::GitHub) facade.
//!
//! Methods that take a repository accept anything convertible into a
//! [`RepoSlug`](gh_rest::RepoSlug): an `(owner, name)` tuple, a parsed
//! `"owner/name"` string, or a [`Repository`](crate::types::Repository)
//! record from an earlier response. Methods that take a secret or environment
//! name accept either the name or the record itself.

pub mod billing;
pub mod collaborators;
pub mod dependency_submission;
pub mod emojis;
pub mod environments;
pub mod gitignore;
pub mod secrets;
pub mod starring;
pub mod watching;

pub use billing::BillingManager;
pub use collaborators::CollaboratorsManager;
pub use dependency_submission::DependencySubmissionManager;
pub use emojis::EmojisManager;
pub use environments::EnvironmentsManager;
pub use gitignore::GitignoreManager;
pub use secrets::SecretsManager;
pub use starring::StarringManager;
pub use watching::WatchingManager;

/// Status GitHub answers with when an update succeeded without a body
pub(crate) const NO_CONTENT: &[u16] = &[204];

/// Statuses for create-or-update calls: 201 created, 204 updated
pub(crate) const CREATED_OR_UPDATED: &[u16] = &[201, 204];

/// `repos/{owner}/{repo}` followed by `rest`
pub(crate) fn repo_path<'s>(repo: &'s gh_rest::RepoSlug, rest: &[&'s str]) -> Vec<&'s str> {
    let mut segments = vec!["repos", repo.owner.as_str(), repo.name.as_str()];
    segments.extend_from_slice(rest);
    segments
}
