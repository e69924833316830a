use serde::{Deserialize, Serialize};

/// Aggregate counts for the admin dashboard. Property counts only cover
/// active listings; soft-deleted ones drop out of both figures.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_properties: i64,
    pub total_inquiries: i64,
    pub total_conversations: i64,
    pub featured_properties: i64,
}
