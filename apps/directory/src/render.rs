//! Plain-text rendering of directory lists and notifications.

use client_core::Notification;
use shared::{
    domain::{CommitteeCatalog, Severity, COLOR_OPTIONS},
    protocol::{CommitteeRecord, DirectoryRecord},
};

fn table(header: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (idx, cell) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| {
                let pad = width.saturating_sub(cell.chars().count());
                format!("{cell}{}", " ".repeat(pad))
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = vec![line(header.to_vec())];
    for row in &rows {
        out.push(line(row.iter().map(String::as_str).collect()));
    }
    out.join("\n")
}

pub fn committees(records: &[&CommitteeRecord]) -> String {
    if records.is_empty() {
        return "No samiti entries found".to_string();
    }
    let rows = records
        .iter()
        .map(|r| {
            let color = r
                .color_info()
                .map(|info| info.label)
                .unwrap_or_else(|| "-".to_string());
            vec![
                r.id.to_string(),
                r.committee.clone(),
                r.name.clone(),
                r.number.clone(),
                color,
            ]
        })
        .collect();
    table(&["ID", "Samiti", "Name", "Mobile Number", "Color"], rows)
}

pub fn contacts<R: DirectoryRecord>(records: &[&R]) -> String {
    if records.is_empty() {
        return "No contacts found".to_string();
    }
    let rows = records
        .iter()
        .map(|r| {
            vec![
                r.id().to_string(),
                r.name().to_string(),
                r.number().to_string(),
            ]
        })
        .collect();
    table(&["ID", "Name", "Mobile Number"], rows)
}

pub fn catalog(catalog: &CommitteeCatalog) -> String {
    let mut out = vec!["Committees:".to_string()];
    out.extend(catalog.names().iter().map(|n| format!("  {n}")));
    out.push("Colors:".to_string());
    out.extend(
        COLOR_OPTIONS
            .iter()
            .map(|c| format!("  {} ({}, {})", c.value, c.label, c.hex)),
    );
    out.join("\n")
}

pub fn report(notification: Option<&Notification>) {
    let Some(notification) = notification else {
        return;
    };
    match notification.severity {
        Severity::Success => println!("{}", notification.message),
        Severity::Error => eprintln!("error: {}", notification.message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{domain::RecordId, protocol::PreceptorRecord};

    #[test]
    fn committee_table_shows_color_labels() {
        let known = CommitteeRecord {
            id: RecordId::new("s1"),
            committee: "Water".into(),
            name: "Asha".into(),
            number: "9876543210".into(),
            color: Some("#392d74".into()),
        };
        let unknown = CommitteeRecord {
            color: Some("#111111".into()),
            id: RecordId::new("s2"),
            ..known.clone()
        };
        let plain = CommitteeRecord {
            color: None,
            id: RecordId::new("s3"),
            ..known.clone()
        };

        let out = committees(&[&known, &unknown, &plain]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].ends_with("Main"));
        assert!(lines[2].ends_with("Unknown"));
        assert!(lines[3].ends_with('-'));
    }

    #[test]
    fn empty_lists_have_placeholders() {
        assert_eq!(committees(&[]), "No samiti entries found");
        assert_eq!(contacts::<PreceptorRecord>(&[]), "No contacts found");
    }

    #[test]
    fn columns_are_aligned() {
        let a = PreceptorRecord {
            id: RecordId::new("a1"),
            name: "Ramesh Kumar".into(),
            number: "9876543210".into(),
        };
        let out = contacts(&[&a]);
        assert_eq!(
            out,
            "ID  Name          Mobile Number\na1  Ramesh Kumar  9876543210"
        );
    }
}
