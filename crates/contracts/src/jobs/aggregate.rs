use serde::{Deserialize, Serialize};

use crate::api::nullable;
use crate::jobs::line_item::LineItem;

/// Workflow states a job moves through. The status select offers these in
/// order; any stored value outside the list still displays as-is.
pub const JOB_STATUSES: [&str; 6] = [
    "Received",
    "In Design",
    "In Production",
    "Quality Check",
    "Dispatched",
    "Completed",
];

pub const PRIORITIES: [&str; 2] = ["Normal", "Urgent"];

pub const DELIVERY_MODES: [&str; 3] = ["Pickup", "Courier", "Internal Delivery"];

/// Header-level fields of a job order, shared by the create and edit forms.
/// Client fields are denormalized: picking a client copies its contact data
/// into the job so later client edits do not rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobHeader {
    pub submitted_by: String,
    #[serde(default, deserialize_with = "nullable::string")]
    pub submitted_contact: String,
    #[serde(default, deserialize_with = "nullable::string")]
    pub client_id: String,
    #[serde(default, deserialize_with = "nullable::string")]
    pub client_name: String,
    #[serde(default, deserialize_with = "nullable::string")]
    pub client_phone: String,
    #[serde(default, deserialize_with = "nullable::string")]
    pub client_email: String,
    #[serde(default, deserialize_with = "nullable::string")]
    pub client_company: String,
    #[serde(default, deserialize_with = "nullable::string")]
    pub client_address: String,
    #[serde(default, deserialize_with = "nullable::string")]
    pub special_instructions: String,
    #[serde(default, deserialize_with = "nullable::string")]
    pub expected_delivery_date: String,
    pub priority: String,
    pub delivery_mode: String,
}

impl Default for JobHeader {
    fn default() -> Self {
        Self {
            submitted_by: String::new(),
            submitted_contact: String::new(),
            client_id: String::new(),
            client_name: String::new(),
            client_phone: String::new(),
            client_email: String::new(),
            client_company: String::new(),
            client_address: String::new(),
            special_instructions: String::new(),
            expected_delivery_date: String::new(),
            priority: "Normal".to_string(),
            delivery_mode: "Pickup".to_string(),
        }
    }
}

impl JobHeader {
    pub fn validate(&self) -> Result<(), String> {
        if self.submitted_by.trim().is_empty() {
            return Err("Submitted By is required".into());
        }
        if self.client_name.trim().is_empty() {
            return Err("Client name is required".into());
        }
        Ok(())
    }

    /// Field pairs in submission order for the multipart body.
    pub fn form_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("submitted_by", &self.submitted_by),
            ("submitted_contact", &self.submitted_contact),
            ("client_id", &self.client_id),
            ("client_name", &self.client_name),
            ("client_phone", &self.client_phone),
            ("client_email", &self.client_email),
            ("client_company", &self.client_company),
            ("client_address", &self.client_address),
            ("special_instructions", &self.special_instructions),
            ("expected_delivery_date", &self.expected_delivery_date),
            ("priority", &self.priority),
            ("delivery_mode", &self.delivery_mode),
        ]
    }
}

/// One row of the job list. The backend flattens the first line item's
/// product, material and quantity into the row for display and export.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct JobSummary {
    pub id: i64,
    #[serde(default)]
    pub job_id_display: Option<String>,
    #[serde(default, deserialize_with = "nullable::string")]
    pub created_at: String,
    #[serde(default, deserialize_with = "nullable::string")]
    pub submitted_by: String,
    #[serde(default, deserialize_with = "nullable::string")]
    pub client_name: String,
    #[serde(default, deserialize_with = "nullable::string")]
    pub product_type: String,
    #[serde(default, deserialize_with = "nullable::string")]
    pub material: String,
    #[serde(default, deserialize_with = "nullable::i64")]
    pub quantity: i64,
    #[serde(default, deserialize_with = "nullable::string")]
    pub priority: String,
    #[serde(default, deserialize_with = "nullable::string")]
    pub status: String,
    #[serde(default, deserialize_with = "nullable::string")]
    pub expected_delivery_date: String,
}

impl JobSummary {
    /// "JO-2024-0042" when the backend assigned a display id, else "#17".
    pub fn display_id(&self) -> String {
        match &self.job_id_display {
            Some(id) if !id.is_empty() => id.clone(),
            _ => format!("#{}", self.id),
        }
    }

    pub fn matches_search(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.client_name.to_lowercase().contains(&q)
            || self.submitted_by.to_lowercase().contains(&q)
            || self
                .job_id_display
                .as_ref()
                .is_some_and(|id| id.to_lowercase().contains(&q))
    }

    pub fn is_closed(&self) -> bool {
        self.status == "Completed" || self.status == "Dispatched"
    }
}

/// A full job order as returned by the detail endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Job {
    pub id: i64,
    #[serde(default)]
    pub job_id_display: Option<String>,
    #[serde(default, deserialize_with = "nullable::string")]
    pub created_at: String,
    #[serde(default, deserialize_with = "nullable::string")]
    pub status: String,
    #[serde(flatten)]
    pub header: JobHeader,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

impl Job {
    pub fn display_id(&self) -> String {
        match &self.job_id_display {
            Some(id) if !id.is_empty() => id.clone(),
            _ => format!("#{}", self.id),
        }
    }
}

/// Body of the status-only update endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct StatusUpdate {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_id_falls_back_to_numeric_id() {
        let mut job = JobSummary {
            id: 17,
            ..Default::default()
        };
        assert_eq!(job.display_id(), "#17");
        job.job_id_display = Some("JO-2025-0042".into());
        assert_eq!(job.display_id(), "JO-2025-0042");
    }

    #[test]
    fn search_covers_client_staff_and_display_id() {
        let job = JobSummary {
            id: 1,
            job_id_display: Some("JO-2025-0007".into()),
            client_name: "Acme Prints".into(),
            submitted_by: "Priya".into(),
            ..Default::default()
        };
        assert!(job.matches_search("acme"));
        assert!(job.matches_search("priya"));
        assert!(job.matches_search("jo-2025"));
        assert!(!job.matches_search("flyer"));
    }

    #[test]
    fn job_detail_flattens_header_fields() {
        let job: Job = serde_json::from_str(
            r#"{
                "id": 4,
                "job_id_display": null,
                "created_at": "2025-03-01 10:30:00",
                "status": "Received",
                "submitted_by": "Priya",
                "submitted_contact": null,
                "client_id": "2",
                "client_name": "Acme",
                "priority": "Urgent",
                "delivery_mode": "Courier",
                "expected_delivery_date": "2025-03-10",
                "items": []
            }"#,
        )
        .unwrap();
        assert_eq!(job.header.submitted_by, "Priya");
        assert_eq!(job.header.submitted_contact, "");
        assert_eq!(job.header.priority, "Urgent");
        assert_eq!(job.header.expected_delivery_date, "2025-03-10");
    }
}
