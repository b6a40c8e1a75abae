use serde::Deserialize;

/// Body of both vendor create and update requests.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct VendorPayload {
    pub vendor_name: Option<String>,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub contract_type: Option<String>,
    /// RFC 3339 timestamp or a plain `YYYY-MM-DD` date.
    pub expiry_date: Option<String>,
    pub note: Option<String>,
}
