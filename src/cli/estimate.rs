//! Estimate CLI command
//!
//! Prices a device and issue selection with the same function the wizard
//! uses when leaving the location step.

use clap::Args;
use tracing::warn;

use crate::config::Settings;
use crate::display::format_breakdown;
use crate::error::{QuoteError, QuoteResult};
use crate::models::{DeviceCategory, IssueKind, IssueSet};
use crate::services::{Pricing, QuoteBreakdown};

#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// Device category id (tablet, phone, laptop, computer, watch)
    #[arg(short, long)]
    pub device: String,

    /// Issue id; repeat for several issues
    #[arg(short, long = "issue")]
    pub issues: Vec<String>,

    /// Reject device ids that are not in the catalog
    #[arg(long)]
    pub strict: bool,

    /// Print the breakdown as JSON
    #[arg(long)]
    pub json: bool,
}

/// Parse the arguments and price them
pub fn estimate(
    args: &EstimateArgs,
    pricing: &Pricing,
) -> QuoteResult<(Option<DeviceCategory>, IssueSet, QuoteBreakdown)> {
    let device = match DeviceCategory::parse(&args.device) {
        Some(device) => Some(device),
        None if args.strict => return Err(QuoteError::device_not_found(&args.device)),
        None => {
            warn!(device = %args.device, "unknown device, pricing with multiplier 1.00x");
            None
        }
    };

    let issues = args
        .issues
        .iter()
        .map(|id| id.parse::<IssueKind>())
        .collect::<QuoteResult<IssueSet>>()?;

    let breakdown = pricing.breakdown(device, &issues);
    Ok((device, issues, breakdown))
}

/// Handle the estimate command
pub fn handle_estimate_command(settings: &Settings, args: EstimateArgs) -> QuoteResult<()> {
    let pricing = Pricing::from_settings(settings);
    let (device, issues, breakdown) = estimate(&args, &pricing)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
        return Ok(());
    }

    let device_label = device
        .map(|d| d.display_name().to_string())
        .unwrap_or_else(|| format!("{} (unrecognised)", args.device));
    println!("{}", format_breakdown(settings, &device_label, &issues, &breakdown));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(device: &str, issues: &[&str]) -> EstimateArgs {
        EstimateArgs {
            device: device.to_string(),
            issues: issues.iter().map(|s| s.to_string()).collect(),
            strict: false,
            json: false,
        }
    }

    #[test]
    fn test_estimate_known_device() {
        let (device, issues, breakdown) =
            estimate(&args("computer", &["data-recovery"]), &Pricing::default()).unwrap();
        assert_eq!(device, Some(DeviceCategory::Computer));
        assert_eq!(issues.len(), 1);
        assert_eq!(breakdown.quote, 270);
    }

    #[test]
    fn test_estimate_unknown_device_uses_base() {
        let (device, _, breakdown) = estimate(&args("toaster", &[]), &Pricing::default()).unwrap();
        assert_eq!(device, None);
        assert_eq!(breakdown.quote, 50);
    }

    #[test]
    fn test_estimate_strict_rejects_unknown_device() {
        let mut strict = args("toaster", &[]);
        strict.strict = true;
        let err = estimate(&strict, &Pricing::default()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_estimate_rejects_unknown_issue() {
        let err = estimate(&args("phone", &["cracked-bezel"]), &Pricing::default()).unwrap_err();
        assert_eq!(err.to_string(), "Issue not found: cracked-bezel");
    }

    #[test]
    fn test_duplicate_issues_collapse() {
        let (_, issues, breakdown) = estimate(
            &args("tablet", &["battery", "overheats", "battery"]),
            &Pricing::default(),
        )
        .unwrap();
        assert_eq!(issues.len(), 2);
        assert_eq!(breakdown.quote, 168);
    }
}
