//! Billing API
//!
//! Organization endpoints require an owner token with `admin:org`; user
//! endpoints require the `user` scope.

use crate::types::{ActionsBilling, BillingAccount, PackagesBilling, StorageBilling};
use anyhow::Result;
use gh_rest::{Endpoint, GitHubClient};

pub struct BillingManager<'a> {
    client: &'a GitHubClient,
}

impl<'a> BillingManager<'a> {
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    fn endpoint(account: &BillingAccount, resource: &str) -> Endpoint {
        let [kind, name] = account.path_prefix();
        Endpoint::get([kind, name, "settings", "billing", resource])
    }

    /// GitHub Actions minutes used in the current billing cycle
    pub async fn actions(&self, account: &BillingAccount) -> Result<ActionsBilling> {
        self.client
            .send_json(&Self::endpoint(account, "actions"))
            .await
    }

    /// GitHub Packages bandwidth used in the current billing cycle
    pub async fn packages(&self, account: &BillingAccount) -> Result<PackagesBilling> {
        self.client
            .send_json(&Self::endpoint(account, "packages"))
            .await
    }

    /// Estimated shared storage for Actions and Packages
    pub async fn shared_storage(&self, account: &BillingAccount) -> Result<StorageBilling> {
        self.client
            .send_json(&Self::endpoint(account, "shared-storage"))
            .await
    }
}
