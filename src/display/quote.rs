//! Price breakdown display formatting

use tabled::{settings::Style, Table, Tabled};

use crate::config::Settings;
use crate::models::IssueSet;
use crate::services::QuoteBreakdown;

#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Item")]
    item: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// Format a quote breakdown for the given device label and issues
pub fn format_breakdown(
    settings: &Settings,
    device_label: &str,
    issues: &IssueSet,
    breakdown: &QuoteBreakdown,
) -> String {
    let problem = if issues.is_empty() {
        "-".to_string()
    } else {
        issues.joined_names()
    };

    let rows = vec![
        BreakdownRow {
            item: "Device",
            value: device_label.to_string(),
        },
        BreakdownRow {
            item: "Problem",
            value: problem,
        },
        BreakdownRow {
            item: "Base price",
            value: settings.format_price(breakdown.base_price),
        },
        BreakdownRow {
            item: "Device multiplier",
            value: breakdown.device_multiplier.to_string(),
        },
        BreakdownRow {
            item: "Issue multiplier",
            value: breakdown.issue_multiplier.to_string(),
        },
        BreakdownRow {
            item: "Quote",
            value: settings.format_price(breakdown.quote),
        },
    ];

    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DeviceCategory, IssueKind};
    use crate::services::Pricing;

    #[test]
    fn test_format_breakdown() {
        let settings = Settings::default();
        let issues: IssueSet = vec![IssueKind::Battery, IssueKind::Overheats].into();
        let breakdown = Pricing::default().breakdown(Some(DeviceCategory::Tablet), &issues);

        let output = format_breakdown(&settings, "Tablet", &issues, &breakdown);
        assert!(output.contains("1.20x"));
        assert!(output.contains("2.80x"));
        assert!(output.contains("$168"));
        assert!(output.contains("Battery, Overheats"));
    }
}
