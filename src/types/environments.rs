//! Deployment environments

use anyhow::{Result, anyhow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Longest wait timer GitHub accepts, in minutes (30 days)
pub const MAX_WAIT_TIMER_MINUTES: u32 = 43_200;

/// Most reviewers an environment can require
pub const MAX_REVIEWERS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    pub id: u64,
    pub node_id: String,
    pub name: String,
    pub url: String,
    pub html_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub protection_rules: Vec<ProtectionRule>,
    #[serde(default)]
    pub deployment_branch_policy: Option<DeploymentBranchPolicy>,
}

impl AsRef<str> for Environment {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentList {
    pub total_count: u64,
    #[serde(default)]
    pub environments: Vec<Environment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProtectionRule {
    WaitTimer {
        id: u64,
        node_id: String,
        wait_timer: u32,
    },
    RequiredReviewers {
        id: u64,
        node_id: String,
        #[serde(default)]
        prevent_self_review: Option<bool>,
        #[serde(default)]
        reviewers: Vec<Reviewer>,
    },
    BranchPolicy {
        id: u64,
        node_id: String,
    },
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewerType {
    User,
    Team,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reviewer {
    #[serde(rename = "type")]
    pub reviewer_type: ReviewerType,
    pub reviewer: ReviewerAccount,
}

/// A user (`login`) or team (`name`/`slug`) able to approve deployments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewerAccount {
    pub id: u64,
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

impl ReviewerAccount {
    pub fn display_name(&self) -> &str {
        self.login
            .as_deref()
            .or(self.slug.as_deref())
            .or(self.name.as_deref())
            .unwrap_or("<unknown>")
    }
}

/// Which branches may deploy to an environment
///
/// Exactly one of the two flags may be true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentBranchPolicy {
    pub protected_branches: bool,
    pub custom_branch_policies: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReviewerRequest {
    #[serde(rename = "type")]
    pub reviewer_type: ReviewerType,
    pub id: u64,
}

/// Body for creating or updating an environment; unset fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EnvironmentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_timer: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prevent_self_review: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewers: Option<Vec<ReviewerRequest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_branch_policy: Option<DeploymentBranchPolicy>,
}

impl EnvironmentRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wait_timer(mut self, minutes: u32) -> Self {
        self.wait_timer = Some(minutes);
        self
    }

    pub fn prevent_self_review(mut self, prevent: bool) -> Self {
        self.prevent_self_review = Some(prevent);
        self
    }

    pub fn reviewer(mut self, reviewer_type: ReviewerType, id: u64) -> Self {
        self.reviewers
            .get_or_insert_with(Vec::new)
            .push(ReviewerRequest { reviewer_type, id });
        self
    }

    pub fn deployment_branch_policy(mut self, policy: DeploymentBranchPolicy) -> Self {
        self.deployment_branch_policy = Some(policy);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(minutes) = self.wait_timer
            && minutes > MAX_WAIT_TIMER_MINUTES
        {
            return Err(anyhow!(
                "Wait timer of {} minutes exceeds the maximum of {}",
                minutes,
                MAX_WAIT_TIMER_MINUTES
            ));
        }
        if let Some(reviewers) = &self.reviewers
            && reviewers.len() > MAX_REVIEWERS
        {
            return Err(anyhow!(
                "An environment can require at most {} reviewers, got {}",
                MAX_REVIEWERS,
                reviewers.len()
            ));
        }
        if let Some(policy) = &self.deployment_branch_policy
            && policy.protected_branches
            && policy.custom_branch_policies
        {
            return Err(anyhow!(
                "protected_branches and custom_branch_policies cannot both be true"
            ));
        }
        Ok(())
    }
}
