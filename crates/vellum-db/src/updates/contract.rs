//! Contract update builder.
//!
//! Outer `Option` means "field untouched"; inner `Option` (where present)
//! means "set to NULL".

use chrono::NaiveDate;
use rust_decimal::Decimal;
use vellum_core::enums::{PaymentTerms, RenewalType};

#[derive(Debug, Clone, Default)]
pub struct ContractUpdate {
    pub contract_name: Option<Option<String>>,
    pub vendor_name: Option<Option<String>>,
    pub contract_type: Option<Option<String>>,
    pub contract_subtype: Option<Option<String>>,
    pub contract_number: Option<Option<String>>,
    pub start_date: Option<Option<NaiveDate>>,
    pub end_date: Option<Option<NaiveDate>>,
    pub payment_terms: Option<PaymentTerms>,
    pub contract_value: Option<Option<Decimal>>,
    pub renewal_type: Option<Option<RenewalType>>,
    pub notice_period_days: Option<i64>,
}

pub struct ContractUpdateBuilder(ContractUpdate);

impl ContractUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ContractUpdate::default())
    }

    #[must_use]
    pub fn contract_name(mut self, name: Option<String>) -> Self {
        self.0.contract_name = Some(name);
        self
    }

    #[must_use]
    pub fn vendor_name(mut self, vendor: Option<String>) -> Self {
        self.0.vendor_name = Some(vendor);
        self
    }

    #[must_use]
    pub fn contract_type(mut self, kind: Option<String>) -> Self {
        self.0.contract_type = Some(kind);
        self
    }

    #[must_use]
    pub fn contract_subtype(mut self, subtype: Option<String>) -> Self {
        self.0.contract_subtype = Some(subtype);
        self
    }

    #[must_use]
    pub fn contract_number(mut self, number: Option<String>) -> Self {
        self.0.contract_number = Some(number);
        self
    }

    #[must_use]
    pub fn start_date(mut self, date: Option<NaiveDate>) -> Self {
        self.0.start_date = Some(date);
        self
    }

    #[must_use]
    pub fn end_date(mut self, date: Option<NaiveDate>) -> Self {
        self.0.end_date = Some(date);
        self
    }

    #[must_use]
    pub fn payment_terms(mut self, terms: PaymentTerms) -> Self {
        self.0.payment_terms = Some(terms);
        self
    }

    #[must_use]
    pub fn contract_value(mut self, value: Option<Decimal>) -> Self {
        self.0.contract_value = Some(value);
        self
    }

    #[must_use]
    pub fn renewal_type(mut self, renewal: Option<RenewalType>) -> Self {
        self.0.renewal_type = Some(renewal);
        self
    }

    #[must_use]
    pub fn notice_period_days(mut self, days: i64) -> Self {
        self.0.notice_period_days = Some(days);
        self
    }

    #[must_use]
    pub fn build(self) -> ContractUpdate {
        self.0
    }
}

impl Default for ContractUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
