//! Repository watching (notification subscriptions)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySubscription {
    pub subscribed: bool,
    pub ignored: bool,
    #[serde(default)]
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub url: String,
    pub repository_url: String,
}

/// Body for `PUT /repos/{owner}/{repo}/subscription`
///
/// `ignored: true` blocks all notifications from the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubscriptionRequest {
    pub subscribed: bool,
    pub ignored: bool,
}
