//! Billing command implementation

use super::validators;
use super::{Command, CommandContext};
use crate::cli::{AccountArgs, BillingAction};
use crate::types::BillingAccount;
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

pub struct BillingCommand {
    pub action: BillingAction,
}

impl BillingCommand {
    fn account(args: &AccountArgs) -> Result<BillingAccount> {
        let account = args.account()?;
        match &account {
            BillingAccount::Org(org) => validators::validate_login("--org", org)?,
            BillingAccount::User(user) => validators::validate_login("--user", user)?,
        }
        Ok(account)
    }
}

#[async_trait]
impl Command for BillingCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let billing = context.github.billing();

        match &self.action {
            BillingAction::Actions(args) => {
                let account = Self::account(args)?;
                let usage = billing.actions(&account).await?;
                if context.emit_json(&usage)? {
                    return Ok(());
                }
                println!("{}", format!("GitHub Actions usage for {}", account).bold());
                println!(
                    "  Minutes used: {} of {} included",
                    usage.total_minutes_used, usage.included_minutes
                );
                println!("  Paid minutes: {}", usage.total_paid_minutes_used);
                for (runner, minutes) in &usage.minutes_used_breakdown {
                    println!("    {}: {}", runner.cyan(), minutes);
                }
            }
            BillingAction::Packages(args) => {
                let account = Self::account(args)?;
                let usage = billing.packages(&account).await?;
                if context.emit_json(&usage)? {
                    return Ok(());
                }
                println!("{}", format!("GitHub Packages usage for {}", account).bold());
                println!(
                    "  Bandwidth used: {} GB of {} GB included",
                    usage.total_gigabytes_bandwidth_used, usage.included_gigabytes_bandwidth
                );
                println!(
                    "  Paid bandwidth: {} GB",
                    usage.total_paid_gigabytes_bandwidth_used
                );
            }
            BillingAction::Storage(args) => {
                let account = Self::account(args)?;
                let usage = billing.shared_storage(&account).await?;
                if context.emit_json(&usage)? {
                    return Ok(());
                }
                println!("{}", format!("Shared storage for {}", account).bold());
                println!(
                    "  Estimated storage this month: {} GB",
                    usage.estimated_storage_for_month
                );
                println!(
                    "  Estimated paid storage: {} GB",
                    usage.estimated_paid_storage_for_month
                );
                println!(
                    "  Days left in billing cycle: {}",
                    usage.days_left_in_billing_cycle
                );
            }
        }
        Ok(())
    }
}
