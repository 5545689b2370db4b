//! The persisted product row and the timestamp rules the repositories share.

use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A persisted product row. `id` and the timestamps are owned by the repository.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub sku: String,
    pub barcode: String,
    #[serde(skip)]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Current time at the precision the store round-trips (microseconds).
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

impl Product {
    /// Stamp a freshly created row: both timestamps share one instant.
    pub fn stamp_created(&mut self, at: DateTime<Utc>) {
        self.created_at = Some(at);
        self.updated_at = Some(at);
    }

    /// Next `updated_at` value. Always strictly after the previous one, even when
    /// two updates land within the same clock tick.
    pub fn next_updated_at(&self) -> DateTime<Utc> {
        let at = now();
        match self.updated_at.or(self.created_at) {
            Some(prev) if at <= prev => prev + Duration::microseconds(1),
            _ => at,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_updated_at_advances_past_future_timestamp() {
        let ahead = now() + Duration::seconds(5);
        let product = Product {
            created_at: Some(ahead),
            updated_at: Some(ahead),
            ..Default::default()
        };
        assert!(product.next_updated_at() > ahead);
    }

    #[test]
    fn next_updated_at_uses_clock_when_ahead() {
        let past = now() - Duration::seconds(60);
        let product = Product {
            updated_at: Some(past),
            ..Default::default()
        };
        let next = product.next_updated_at();
        assert!(next > past + Duration::seconds(30));
    }

    #[test]
    fn serialization_omits_missing_timestamps_and_deleted_at() {
        let product = Product {
            id: 1,
            name: "Widget".into(),
            price: 9.99,
            quantity: 5,
            deleted_at: Some(now()),
            ..Default::default()
        };
        let json = serde_json::to_value(&product).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("created_at"));
        assert!(!obj.contains_key("updated_at"));
        assert!(!obj.contains_key("deleted_at"));
        assert_eq!(obj["sku"], "");
        assert_eq!(obj["barcode"], "");
    }
}
