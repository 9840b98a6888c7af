//! Client records: the customers job orders are placed for.

use serde::{Deserialize, Serialize};

use crate::api::nullable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "nullable::string")]
    pub company: String,
    #[serde(default, deserialize_with = "nullable::string")]
    pub email: String,
    #[serde(default, deserialize_with = "nullable::string")]
    pub phone: String,
    #[serde(default, deserialize_with = "nullable::string")]
    pub address: String,
    #[serde(default, deserialize_with = "nullable::string")]
    pub notes: String,
    #[serde(default, deserialize_with = "nullable::string")]
    pub created_at: String,
}

impl Client {
    /// Case-insensitive match against the client list search box
    /// (name, company or phone).
    pub fn matches_search(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.name.to_lowercase().contains(&q)
            || self.company.to_lowercase().contains(&q)
            || self.phone.to_lowercase().contains(&q)
    }
}

/// Payload for creating or updating a client.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClientDto {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub notes: String,
}

impl ClientDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Client name is required".into());
        }
        Ok(())
    }
}

impl From<&Client> for ClientDto {
    fn from(c: &Client) -> Self {
        Self {
            name: c.name.clone(),
            company: c.company.clone(),
            email: c.email.clone(),
            phone: c.phone.clone(),
            address: c.address.clone(),
            notes: c.notes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nullable_columns_read_as_empty_strings() {
        let client: Client = serde_json::from_str(
            r#"{"id":3,"name":"Acme","company":null,"email":null,"phone":"555","address":null,"notes":null,"created_at":null}"#,
        )
        .unwrap();
        assert_eq!(client.company, "");
        assert_eq!(client.phone, "555");
    }

    #[test]
    fn search_matches_name_company_and_phone() {
        let client = Client {
            id: 1,
            name: "Ravi Kumar".into(),
            company: "Acme Prints".into(),
            phone: "98450".into(),
            ..Default::default()
        };
        assert!(client.matches_search("ravi"));
        assert!(client.matches_search("acme"));
        assert!(client.matches_search("9845"));
        assert!(!client.matches_search("flyer"));
    }

    #[test]
    fn client_name_is_required() {
        let dto = ClientDto::default();
        assert!(dto.validate().is_err());
    }
}
