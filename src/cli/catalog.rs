//! Catalog CLI command

use clap::ValueEnum;

use crate::display::{format_device_catalog, format_issue_catalog, format_model_catalog};
use crate::error::QuoteResult;
use crate::models::DeviceCategory;

/// Which catalog to print
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum CatalogKind {
    /// Device categories
    #[default]
    Devices,
    /// Models, for one device or all of them
    Models,
    /// Repair issues
    Issues,
}

/// Handle the catalog command
pub fn handle_catalog_command(kind: CatalogKind, device: Option<String>) -> QuoteResult<()> {
    let output = match kind {
        CatalogKind::Devices => format_device_catalog(),
        CatalogKind::Issues => format_issue_catalog(),
        CatalogKind::Models => {
            let device = device
                .as_deref()
                .map(str::parse::<DeviceCategory>)
                .transpose()?;
            format_model_catalog(device)
        }
    };

    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_device_filter_is_an_error() {
        let err = handle_catalog_command(CatalogKind::Models, Some("toaster".into())).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_device_filter_is_ignored_elsewhere() {
        assert!(handle_catalog_command(CatalogKind::Issues, Some("toaster".into())).is_ok());
    }
}
