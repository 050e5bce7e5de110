use serde::{Deserialize, Serialize};

// ============================================================================
// Stage
// ============================================================================

/// Pipeline stage of a deal. The variant order matches the board columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DealStage {
    Lead,
    Qualified,
    Proposal,
    Negotiation,
    Won,
    Lost,
}

impl DealStage {
    /// Column order on the pipeline board.
    pub const ORDER: [DealStage; 6] = [
        DealStage::Lead,
        DealStage::Qualified,
        DealStage::Proposal,
        DealStage::Negotiation,
        DealStage::Won,
        DealStage::Lost,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DealStage::Lead => "LEAD",
            DealStage::Qualified => "QUALIFIED",
            DealStage::Proposal => "PROPOSAL",
            DealStage::Negotiation => "NEGOTIATION",
            DealStage::Won => "WON",
            DealStage::Lost => "LOST",
        }
    }

    pub fn from_str(s: &str) -> Option<DealStage> {
        Self::ORDER.iter().copied().find(|st| st.as_str() == s)
    }

    /// Chart/board accent colour for the stage.
    pub fn color(&self) -> &'static str {
        match self {
            DealStage::Lead => "#6B7280",
            DealStage::Qualified => "#3B82F6",
            DealStage::Proposal => "#F59E0B",
            DealStage::Negotiation => "#8B5CF6",
            DealStage::Won => "#10B981",
            DealStage::Lost => "#EF4444",
        }
    }

    /// Neighbouring stages used by the board's move actions.
    pub fn previous(&self) -> Option<DealStage> {
        let idx = Self::ORDER.iter().position(|s| s == self)?;
        idx.checked_sub(1).map(|i| Self::ORDER[i])
    }

    pub fn next(&self) -> Option<DealStage> {
        let idx = Self::ORDER.iter().position(|s| s == self)?;
        Self::ORDER.get(idx + 1).copied()
    }
}

impl std::fmt::Display for DealStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Deal
// ============================================================================

/// Embedded customer reference returned inside a deal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealCustomerRef {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub company: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub value: f64,
    pub stage: DealStage,
    pub customer: DealCustomerRef,
    pub assigned_to: String,
    pub expected_close_date: Option<String>,
    pub actual_close_date: Option<String>,
    pub probability: f64,
    pub source: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Create/update payload for the deal endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealFormData {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub value: f64,
    pub customer_id: i64,
    pub assigned_to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_close_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_order_and_neighbours() {
        assert_eq!(DealStage::ORDER[0], DealStage::Lead);
        assert_eq!(DealStage::Lead.previous(), None);
        assert_eq!(DealStage::Lead.next(), Some(DealStage::Qualified));
        assert_eq!(DealStage::Lost.next(), None);
        assert_eq!(DealStage::Won.previous(), Some(DealStage::Negotiation));
    }

    #[test]
    fn stage_round_trips_wire_names() {
        for stage in DealStage::ORDER {
            assert_eq!(DealStage::from_str(stage.as_str()), Some(stage));
        }
        assert_eq!(DealStage::from_str("UNKNOWN"), None);
    }

    #[test]
    fn deal_parses_backend_shape() {
        let json = r#"{
            "id": 7,
            "title": "Annual licence",
            "description": null,
            "value": 12500.0,
            "stage": "NEGOTIATION",
            "customer": {"id": 42, "firstName": "Jane", "lastName": "Doe", "company": "Acme"},
            "assignedTo": "sam",
            "expectedCloseDate": "2024-03-01",
            "actualCloseDate": null,
            "probability": 0.6,
            "source": "referral",
            "createdAt": "2024-01-05T08:00:00Z",
            "updatedAt": "2024-02-11T16:45:00Z"
        }"#;
        let d: Deal = serde_json::from_str(json).unwrap();
        assert_eq!(d.stage, DealStage::Negotiation);
        assert_eq!(d.customer.id, 42);
        assert_eq!(d.value, 12500.0);
    }
}
