//! Staff directory entries; staff names populate the "submitted by" picker
//! on the job order form.

use serde::{Deserialize, Serialize};

use crate::api::nullable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "nullable::string")]
    pub phone: String,
    #[serde(default, deserialize_with = "nullable::string")]
    pub email: String,
    #[serde(default, deserialize_with = "nullable::string")]
    pub department: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StaffDto {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub department: String,
}

impl StaffDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Staff name is required".into());
        }
        Ok(())
    }
}

impl From<&StaffMember> for StaffDto {
    fn from(s: &StaffMember) -> Self {
        Self {
            name: s.name.clone(),
            phone: s.phone.clone(),
            email: s.email.clone(),
            department: s.department.clone(),
        }
    }
}
