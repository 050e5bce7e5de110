use serde::{Deserialize, Serialize};

// ============================================================================
// Status
// ============================================================================

/// Customer lifecycle status as stored by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CustomerStatus {
    Active,
    Inactive,
    Lead,
    Churned,
}

impl CustomerStatus {
    pub const ALL: [CustomerStatus; 4] = [
        CustomerStatus::Active,
        CustomerStatus::Inactive,
        CustomerStatus::Lead,
        CustomerStatus::Churned,
    ];

    /// Wire representation, also used in URL path segments.
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "ACTIVE",
            CustomerStatus::Inactive => "INACTIVE",
            CustomerStatus::Lead => "LEAD",
            CustomerStatus::Churned => "CHURNED",
        }
    }

    pub fn from_str(s: &str) -> Option<CustomerStatus> {
        Self::ALL.iter().copied().find(|st| st.as_str() == s)
    }

    /// BEM badge modifier used by list views.
    pub fn badge_class(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "badge badge--success",
            CustomerStatus::Inactive => "badge badge--neutral",
            CustomerStatus::Lead => "badge badge--info",
            CustomerStatus::Churned => "badge badge--error",
        }
    }
}

impl std::fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Customer
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: String,
    pub status: CustomerStatus,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub notes: Option<String>,
    pub last_contact_date: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Create/update payload for the customer endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerFormData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_uppercase() {
        let json = serde_json::to_string(&CustomerStatus::Churned).unwrap();
        assert_eq!(json, "\"CHURNED\"");
        let back: CustomerStatus = serde_json::from_str("\"LEAD\"").unwrap();
        assert_eq!(back, CustomerStatus::Lead);
    }

    #[test]
    fn status_round_trips_wire_names() {
        for status in CustomerStatus::ALL {
            assert_eq!(CustomerStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(CustomerStatus::from_str("unknown"), None);
    }

    #[test]
    fn customer_parses_backend_shape() {
        let json = r#"{
            "id": 42,
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "jane@acme.io",
            "phone": "+1 555 0100",
            "company": "Acme",
            "status": "ACTIVE",
            "address": null,
            "city": "Berlin",
            "country": null,
            "notes": null,
            "lastContactDate": "2024-01-20",
            "createdAt": "2024-01-01T10:00:00Z",
            "updatedAt": "2024-01-21T09:30:00Z"
        }"#;
        let c: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(c.id, 42);
        assert_eq!(c.full_name(), "Jane Doe");
        assert_eq!(c.status, CustomerStatus::Active);
        assert_eq!(c.city.as_deref(), Some("Berlin"));
    }

    #[test]
    fn form_data_skips_empty_optionals() {
        let form = CustomerFormData {
            first_name: "A".into(),
            last_name: "B".into(),
            email: "a@b.c".into(),
            ..Default::default()
        };
        let json = serde_json::to_string(&form).unwrap();
        assert!(!json.contains("address"));
        assert!(json.contains("\"firstName\":\"A\""));
    }
}
