use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{PaymentTerms, RenewalType};

/// A vendor agreement tracked by the dashboard.
///
/// Descriptive fields are all optional; aggregation substitutes
/// "Unknown Vendor" / "Uncategorized" for absent values. `start_date` is
/// required for any spend attribution — a contract without one is excluded
/// from the active set and from every range computation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Contract {
    pub id: String,
    pub contract_name: Option<String>,
    pub vendor_name: Option<String>,
    pub contract_type: Option<String>,
    pub contract_subtype: Option<String>,
    pub contract_number: Option<String>,
    pub start_date: Option<NaiveDate>,
    /// Absent means open-ended; overlap arithmetic substitutes a far-future
    /// sentinel date.
    pub end_date: Option<NaiveDate>,
    pub payment_terms: PaymentTerms,
    /// Face value in the single implicit currency. For `monthly` cadence
    /// this is the per-month cost.
    pub contract_value: Option<Decimal>,
    pub renewal_type: Option<RenewalType>,
    /// Days of notice required before renewal; used only by status display.
    pub notice_period_days: i64,
    /// Opaque reference into the attachment store.
    pub file_path: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contract {
    /// Face value, treating absent as zero.
    #[must_use]
    pub fn value_or_zero(&self) -> Decimal {
        self.contract_value.unwrap_or(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::Contract;
    use crate::enums::PaymentTerms;

    fn sample() -> Contract {
        Contract {
            id: String::from("ctr-a3f8b2c1"),
            contract_name: Some(String::from("Cloud hosting")),
            vendor_name: Some(String::from("Acme")),
            contract_type: Some(String::from("SaaS")),
            contract_subtype: None,
            contract_number: Some(String::from("AC-2024-001")),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 15),
            end_date: None,
            payment_terms: PaymentTerms::Monthly,
            contract_value: Some(dec!(250.00)),
            renewal_type: None,
            notice_period_days: 30,
            file_path: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn json_roundtrip_preserves_fields() {
        let contract = sample();
        let json = serde_json::to_string(&contract).unwrap();
        let back: Contract = serde_json::from_str(&json).unwrap();
        assert_eq!(contract, back);
    }

    #[test]
    fn dates_serialize_as_plain_calendar_dates() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["start_date"], "2024-01-15");
        assert_eq!(json["end_date"], serde_json::Value::Null);
    }

    #[test]
    fn value_or_zero_defaults_absent_value() {
        let mut contract = sample();
        contract.contract_value = None;
        assert_eq!(contract.value_or_zero(), dec!(0));
    }
}
