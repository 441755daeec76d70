//! Submission display formatting

use tabled::{settings::Style, Table, Tabled};

use crate::config::Settings;
use crate::submissions::Submission;

#[derive(Tabled)]
struct SubmissionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Submitted")]
    submitted: String,
    #[tabled(rename = "Device")]
    device: String,
    #[tabled(rename = "Problem")]
    problem: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Quote")]
    quote: String,
}

/// Format recorded submissions, newest last
pub fn format_submission_list(settings: &Settings, submissions: &[Submission]) -> String {
    if submissions.is_empty() {
        return "No submissions recorded.".to_string();
    }

    let rows: Vec<SubmissionRow> = submissions
        .iter()
        .map(|s| {
            let record = &s.record;
            SubmissionRow {
                id: s.id.to_string(),
                submitted: s.submitted_at.format("%Y-%m-%d %H:%M").to_string(),
                device: format!("{} {}", record.device_label(), record.model_label())
                    .trim()
                    .to_string(),
                problem: record.issues.joined_names(),
                name: record.name.clone(),
                location: record.location.clone(),
                quote: settings.format_price(record.quote),
            }
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DeviceCategory, FormRecord, IssueKind};

    #[test]
    fn test_empty_list() {
        let output = format_submission_list(&Settings::default(), &[]);
        assert_eq!(output, "No submissions recorded.");
    }

    #[test]
    fn test_list_rows() {
        let submission = Submission::new(FormRecord {
            device: Some(DeviceCategory::Computer),
            model: "imac".into(),
            issues: vec![IssueKind::DataRecovery].into(),
            location: "Miami".into(),
            name: "Alex".into(),
            quote: 270,
            ..Default::default()
        });

        let output = format_submission_list(&Settings::default(), &[submission.clone()]);
        assert!(output.contains(&submission.id.to_string()));
        assert!(output.contains("Computer iMac"));
        assert!(output.contains("$270"));
    }
}
