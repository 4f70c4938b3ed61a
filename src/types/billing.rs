//! Billing summaries for organizations and users

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Account whose billing settings are queried
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BillingAccount {
    Org(String),
    User(String),
}

impl BillingAccount {
    /// Leading path segments, `orgs/{org}` or `users/{username}`
    pub fn path_prefix(&self) -> [&str; 2] {
        match self {
            BillingAccount::Org(org) => ["orgs", org.as_str()],
            BillingAccount::User(user) => ["users", user.as_str()],
        }
    }
}

impl fmt::Display for BillingAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BillingAccount::Org(org) => write!(f, "organization {}", org),
            BillingAccount::User(user) => write!(f, "user {}", user),
        }
    }
}

/// GitHub Actions minutes for the current billing cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionsBilling {
    pub total_minutes_used: f64,
    pub total_paid_minutes_used: f64,
    pub included_minutes: f64,
    /// Minutes per runner OS, keyed as GitHub reports them (`UBUNTU`, `MACOS`, ...)
    #[serde(default)]
    pub minutes_used_breakdown: BTreeMap<String, f64>,
}

/// GitHub Packages data transfer for the current billing cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackagesBilling {
    pub total_gigabytes_bandwidth_used: f64,
    pub total_paid_gigabytes_bandwidth_used: f64,
    pub included_gigabytes_bandwidth: f64,
}

/// Shared storage estimate for Actions artifacts and Packages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageBilling {
    pub days_left_in_billing_cycle: u32,
    pub estimated_paid_storage_for_month: f64,
    pub estimated_storage_for_month: f64,
}
