use bson::Document;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CompanyRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    // Always serialized: a cleared logo is an explicit null, not a
    // missing field.
    pub logo_url: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}

impl CompanyRecord {
    pub fn display_name(&self) -> &str {
        self.company_name.as_deref().unwrap_or("Unknown")
    }

    pub fn business_id(&self) -> &str {
        self.company_id.as_deref().unwrap_or("N/A")
    }
}
