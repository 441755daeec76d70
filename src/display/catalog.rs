//! Catalog display formatting

use tabled::{settings::Style, Table, Tabled};

use crate::models::catalog::{self, DEVICES, ISSUES};
use crate::models::DeviceCategory;
use crate::services::pricing::{device_multiplier, issue_multiplier};

#[derive(Tabled)]
struct DeviceRow {
    #[tabled(rename = "ID")]
    id: &'static str,
    #[tabled(rename = "Device")]
    name: &'static str,
    #[tabled(rename = "Models")]
    models: usize,
    #[tabled(rename = "Multiplier")]
    multiplier: String,
}

#[derive(Tabled)]
struct ModelRow {
    #[tabled(rename = "Device")]
    device: &'static str,
    #[tabled(rename = "ID")]
    id: &'static str,
    #[tabled(rename = "Model")]
    name: &'static str,
    #[tabled(rename = "Image")]
    image: &'static str,
}

#[derive(Tabled)]
struct IssueRow {
    #[tabled(rename = "ID")]
    id: &'static str,
    #[tabled(rename = "Issue")]
    name: &'static str,
    #[tabled(rename = "Multiplier")]
    multiplier: String,
}

/// Format the device categories with their model counts
pub fn format_device_catalog() -> String {
    let rows: Vec<DeviceRow> = DEVICES
        .iter()
        .map(|entry| DeviceRow {
            id: entry.id.id(),
            name: entry.display_name,
            models: catalog::models_for(entry.id).len(),
            multiplier: device_multiplier(Some(entry.id)).to_string(),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format the models of one device, or of every device
pub fn format_model_catalog(device: Option<DeviceCategory>) -> String {
    let devices: Vec<DeviceCategory> = match device {
        Some(device) => vec![device],
        None => DeviceCategory::ALL.to_vec(),
    };

    let rows: Vec<ModelRow> = devices
        .into_iter()
        .flat_map(|device| {
            catalog::models_for(device).iter().map(move |model| ModelRow {
                device: device.display_name(),
                id: model.id,
                name: model.display_name,
                image: model.image_ref,
            })
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format the repair issues with their multipliers
pub fn format_issue_catalog() -> String {
    let rows: Vec<IssueRow> = ISSUES
        .iter()
        .map(|entry| IssueRow {
            id: entry.id.id(),
            name: entry.display_name,
            multiplier: issue_multiplier(entry.id).to_string(),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_catalog_lists_multipliers() {
        let output = format_device_catalog();
        assert!(output.contains("computer"));
        assert!(output.contains("1.80x"));
        assert!(output.contains("Multiplier"));
    }

    #[test]
    fn test_model_catalog_filters_by_device() {
        let output = format_model_catalog(Some(DeviceCategory::Watch));
        assert!(output.contains("apple-watch-ultra"));
        assert!(!output.contains("mac-mini"));

        let all = format_model_catalog(None);
        assert!(all.contains("mac-mini"));
        assert!(all.contains("iphone-15"));
    }

    #[test]
    fn test_issue_catalog() {
        let output = format_issue_catalog();
        assert!(output.contains("data-recovery"));
        assert!(output.contains("3.00x"));
    }
}
