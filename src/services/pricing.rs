//! Pricing heuristic
//!
//! A quote is `base * device multiplier * issue multiplier`, rounded to the
//! nearest whole unit with halves rounded up. Multipliers are stored as
//! integer hundredths so the result is exact and deterministic.
//!
//! The issue multiplier is the *sum* of the selected issues' multipliers, so
//! adding an issue to a non-empty selection never lowers the estimate.

use serde::Serialize;
use std::fmt;
use std::iter::Sum;

use crate::config::Settings;
use crate::models::{DeviceCategory, FormRecord, IssueKind, IssueSet};

/// Default base price in whole currency units
pub const BASE_PRICE: u32 = 50;

/// A price multiplier in hundredths (`180` is 1.8x)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Multiplier(u32);

impl Multiplier {
    /// The neutral multiplier, 1.0x
    pub const ONE: Multiplier = Multiplier(100);

    pub const fn from_hundredths(hundredths: u32) -> Self {
        Self(hundredths)
    }

    pub const fn hundredths(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}x", self.0 / 100, self.0 % 100)
    }
}

impl Sum for Multiplier {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.fold(0u32, |acc, m| acc.saturating_add(m.0)))
    }
}

/// Multiplier for a device category; categories without a surcharge and an
/// unset device are 1.0
pub fn device_multiplier(device: Option<DeviceCategory>) -> Multiplier {
    match device {
        Some(DeviceCategory::Tablet) => Multiplier(120),
        Some(DeviceCategory::Computer) => Multiplier(180),
        Some(DeviceCategory::Watch) => Multiplier(130),
        Some(DeviceCategory::Phone) | Some(DeviceCategory::Laptop) | None => Multiplier::ONE,
    }
}

/// Multiplier for a single issue
pub fn issue_multiplier(issue: IssueKind) -> Multiplier {
    match issue {
        IssueKind::Battery => Multiplier(150),
        IssueKind::DataRecovery => Multiplier(300),
        IssueKind::Diagnostic => Multiplier(80),
        IssueKind::DoesNotBoot => Multiplier(250),
        IssueKind::HardDrive => Multiplier(200),
        IssueKind::Overheats => Multiplier(130),
    }
}

/// Combined multiplier for a selection: 1.0 when empty, otherwise the sum
pub fn issues_multiplier(issues: &IssueSet) -> Multiplier {
    if issues.is_empty() {
        return Multiplier::ONE;
    }
    issues.iter().map(issue_multiplier).sum()
}

/// Every input to a quote and the result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteBreakdown {
    pub base_price: u32,
    pub device_multiplier: Multiplier,
    pub issue_multiplier: Multiplier,
    pub quote: u32,
}

/// Computes quotes against a base price
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pricing {
    base_price: u32,
}

impl Default for Pricing {
    fn default() -> Self {
        Self::new(BASE_PRICE)
    }
}

impl Pricing {
    pub fn new(base_price: u32) -> Self {
        Self { base_price }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.base_price)
    }

    pub fn base_price(&self) -> u32 {
        self.base_price
    }

    /// Full breakdown for a device and issue selection
    pub fn breakdown(&self, device: Option<DeviceCategory>, issues: &IssueSet) -> QuoteBreakdown {
        let device_multiplier = device_multiplier(device);
        let issue_multiplier = issues_multiplier(issues);

        // base * (d / 100) * (i / 100), rounded half up
        let scaled = u64::from(self.base_price)
            * u64::from(device_multiplier.hundredths())
            * u64::from(issue_multiplier.hundredths());
        let rounded = (scaled + 5_000) / 10_000;

        QuoteBreakdown {
            base_price: self.base_price,
            device_multiplier,
            issue_multiplier,
            quote: u32::try_from(rounded).unwrap_or(u32::MAX),
        }
    }

    /// Quote for a device and issue selection
    pub fn quote(&self, device: Option<DeviceCategory>, issues: &IssueSet) -> u32 {
        self.breakdown(device, issues).quote
    }

    /// Quote for the selections in a form record
    pub fn quote_record(&self, record: &FormRecord) -> u32 {
        self.quote(record.device, &record.issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issues(list: &[IssueKind]) -> IssueSet {
        list.iter().copied().collect()
    }

    #[test]
    fn test_computer_data_recovery() {
        let breakdown = Pricing::default().breakdown(
            Some(DeviceCategory::Computer),
            &issues(&[IssueKind::DataRecovery]),
        );
        assert_eq!(breakdown.device_multiplier, Multiplier::from_hundredths(180));
        assert_eq!(breakdown.issue_multiplier, Multiplier::from_hundredths(300));
        assert_eq!(breakdown.quote, 270);
    }

    #[test]
    fn test_tablet_battery_and_overheats() {
        let breakdown = Pricing::default().breakdown(
            Some(DeviceCategory::Tablet),
            &issues(&[IssueKind::Battery, IssueKind::Overheats]),
        );
        assert_eq!(breakdown.issue_multiplier, Multiplier::from_hundredths(280));
        assert_eq!(breakdown.quote, 168);
    }

    #[test]
    fn test_unknown_device_and_no_issues() {
        let device = DeviceCategory::parse("unknown-id");
        assert_eq!(device, None);
        assert_eq!(Pricing::default().quote(device, &IssueSet::new()), 50);
    }

    #[test]
    fn test_devices_without_surcharge() {
        assert_eq!(device_multiplier(Some(DeviceCategory::Phone)), Multiplier::ONE);
        assert_eq!(device_multiplier(Some(DeviceCategory::Laptop)), Multiplier::ONE);
        assert_eq!(device_multiplier(Some(DeviceCategory::Watch)), Multiplier::from_hundredths(130));
    }

    #[test]
    fn test_rounds_half_up() {
        // 45 * 1.3 = 58.5 -> 59
        let pricing = Pricing::new(45);
        assert_eq!(pricing.quote(Some(DeviceCategory::Watch), &IssueSet::new()), 59);
        // 51 * 1.5 = 76.5 -> 77
        assert_eq!(
            Pricing::new(51).quote(None, &issues(&[IssueKind::Battery])),
            77
        );
    }

    #[test]
    fn test_adding_issues_never_lowers_quote() {
        let pricing = Pricing::default();
        for device in DeviceCategory::ALL {
            let mut selected = IssueSet::new();
            selected.insert(IssueKind::ALL[0]);
            let mut previous = pricing.quote(Some(device), &selected);
            for issue in IssueKind::ALL.into_iter().skip(1) {
                selected.insert(issue);
                let current = pricing.quote(Some(device), &selected);
                assert!(current >= previous, "{device}: {current} < {previous}");
                previous = current;
            }
        }
    }

    #[test]
    fn test_quote_is_order_independent() {
        let pricing = Pricing::default();
        let a = issues(&[IssueKind::HardDrive, IssueKind::Diagnostic]);
        let b = issues(&[IssueKind::Diagnostic, IssueKind::HardDrive]);
        assert_eq!(
            pricing.quote(Some(DeviceCategory::Laptop), &a),
            pricing.quote(Some(DeviceCategory::Laptop), &b)
        );
    }

    #[test]
    fn test_multiplier_display() {
        assert_eq!(Multiplier::from_hundredths(180).to_string(), "1.80x");
        assert_eq!(Multiplier::from_hundredths(80).to_string(), "0.80x");
    }
}
