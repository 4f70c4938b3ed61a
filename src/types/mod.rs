//! Response and request records
//!
//! Every record mirrors GitHub's JSON field for field. Fields GitHub may omit
//! are `Option`; records are built from JSON and never mutated afterwards.

pub mod billing;
pub mod collaborators;
pub mod common;
pub mod dependency_submission;
pub mod environments;
pub mod gitignore;
pub mod secrets;
pub mod watching;

pub use billing::{ActionsBilling, BillingAccount, PackagesBilling, StorageBilling};
pub use collaborators::{
    Affiliation, Collaborator, CollaboratorFilter, CollaboratorPermission, Permission, Permissions,
    RepositoryInvitation,
};
pub use common::{Repository, SimpleUser};
pub use dependency_submission::{
    Dependency, Detector, Job, Manifest, ManifestFile, Relationship, Scope, Snapshot,
    SnapshotResult, SnapshotStatus,
};
pub use environments::{
    DeploymentBranchPolicy, Environment, EnvironmentList, EnvironmentRequest, ProtectionRule,
    Reviewer, ReviewerAccount, ReviewerRequest, ReviewerType,
};
pub use gitignore::GitignoreTemplate;
pub use secrets::{
    EncryptedSecret, OrgSecret, OrgSecretRequest, PublicKey, Secret, SecretList, SecretVisibility,
    SelectedRepositories,
};
pub use watching::{RepositorySubscription, SubscriptionRequest};

/// Emoji name to image URL, as returned by `GET /emojis`
pub type Emojis = std::collections::BTreeMap<String, String>;
