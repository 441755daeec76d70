//! Static option catalogs
//!
//! Device categories, the models offered per category, and repair issues.
//! Entries are defined once at compile time and never mutated.

use super::device::DeviceCategory;
use super::issue::IssueKind;

/// One selectable option: id, display name and an image reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry<Id> {
    pub id: Id,
    pub display_name: &'static str,
    pub image_ref: &'static str,
}

/// Model entries are keyed by their string id
pub type ModelEntry = CatalogEntry<&'static str>;

const fn entry<Id>(id: Id, display_name: &'static str, image_ref: &'static str) -> CatalogEntry<Id> {
    CatalogEntry {
        id,
        display_name,
        image_ref,
    }
}

/// Device categories, in display order
pub static DEVICES: [CatalogEntry<DeviceCategory>; 5] = [
    entry(DeviceCategory::Tablet, "Tablet", "assets/tablet.png"),
    entry(DeviceCategory::Phone, "Phone", "assets/phone.png"),
    entry(DeviceCategory::Laptop, "Laptop", "assets/laptop.png"),
    entry(DeviceCategory::Computer, "Computer", "assets/computer.png"),
    entry(DeviceCategory::Watch, "Watch", "assets/watch.png"),
];

/// Repair issues, in display order
pub static ISSUES: [CatalogEntry<IssueKind>; 6] = [
    entry(IssueKind::Battery, "Battery", "assets/battery-icon.png"),
    entry(IssueKind::DataRecovery, "Data Recovery", "assets/data-recovery-icon.png"),
    entry(IssueKind::Diagnostic, "Diagnostic", "assets/diagnostic-icon.png"),
    entry(IssueKind::DoesNotBoot, "Does Not Boot", "assets/power-icon.png"),
    entry(IssueKind::HardDrive, "Hard Drive", "assets/harddrive-icon.png"),
    entry(IssueKind::Overheats, "Overheats", "assets/overheat-icon.png"),
];

static TABLET_MODELS: [ModelEntry; 4] = [
    entry("ipad-pro", "iPad Pro", "assets/imac.png"),
    entry("ipad-air", "iPad Air", "assets/macbook-air.png"),
    entry("ipad", "iPad", "assets/macbook-pro.png"),
    entry("ipad-mini", "iPad Mini", "assets/mac-mini.png"),
];

static PHONE_MODELS: [ModelEntry; 4] = [
    entry("iphone-15", "iPhone 15", "assets/imac.png"),
    entry("iphone-14", "iPhone 14", "assets/macbook-air.png"),
    entry("iphone-13", "iPhone 13", "assets/macbook-pro.png"),
    entry("samsung-galaxy", "Samsung Galaxy", "assets/mac-mini.png"),
];

static LAPTOP_MODELS: [ModelEntry; 4] = [
    entry("macbook-air-15", "MacBook Air 15\"", "assets/macbook-air.png"),
    entry("macbook-air-13", "MacBook Air 13\"", "assets/macbook-air.png"),
    entry("macbook-pro-16", "MacBook Pro 16\"", "assets/macbook-pro.png"),
    entry("macbook-pro-14", "MacBook Pro 14\"", "assets/macbook-pro.png"),
];

static COMPUTER_MODELS: [ModelEntry; 4] = [
    entry("imac", "iMac", "assets/imac.png"),
    entry("macbook-air", "MacBook Air", "assets/macbook-air.png"),
    entry("macbook-pro", "MacBook Pro", "assets/macbook-pro.png"),
    entry("mac-mini", "Mac Mini", "assets/mac-mini.png"),
];

static WATCH_MODELS: [ModelEntry; 3] = [
    entry("apple-watch-series-9", "Apple Watch Series 9", "assets/imac.png"),
    entry("apple-watch-se", "Apple Watch SE", "assets/macbook-air.png"),
    entry("apple-watch-ultra", "Apple Watch Ultra", "assets/macbook-pro.png"),
];

/// Models offered for a device category
pub fn models_for(device: DeviceCategory) -> &'static [ModelEntry] {
    match device {
        DeviceCategory::Tablet => &TABLET_MODELS,
        DeviceCategory::Phone => &PHONE_MODELS,
        DeviceCategory::Laptop => &LAPTOP_MODELS,
        DeviceCategory::Computer => &COMPUTER_MODELS,
        DeviceCategory::Watch => &WATCH_MODELS,
    }
}

/// Find a model entry by id within a device category
pub fn find_model(device: DeviceCategory, model_id: &str) -> Option<&'static ModelEntry> {
    models_for(device).iter().find(|m| m.id == model_id)
}

/// Catalog entry for a device category
pub fn device_entry(device: DeviceCategory) -> &'static CatalogEntry<DeviceCategory> {
    // DEVICES holds one entry per variant in declaration order
    &DEVICES[DeviceCategory::ALL
        .iter()
        .position(|&d| d == device)
        .unwrap_or_default()]
}

/// Catalog entry for an issue
pub fn issue_entry(issue: IssueKind) -> &'static CatalogEntry<IssueKind> {
    &ISSUES[IssueKind::ALL
        .iter()
        .position(|&i| i == issue)
        .unwrap_or_default()]
}
