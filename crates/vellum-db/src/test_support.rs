//! Shared test utilities for vellum-db tests.

#[cfg(test)]
pub(crate) mod helpers {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use vellum_core::enums::PaymentTerms;

    use crate::VellumDb;
    use crate::attachments::AttachmentStore;
    use crate::repos::contract::ContractDraft;
    use crate::service::VellumService;

    /// Create an in-memory `VellumService` with attachments disabled.
    pub async fn test_service() -> VellumService {
        let db = VellumDb::open_local(":memory:").await.unwrap();
        VellumService::from_db(db, AttachmentStore::disabled())
    }

    /// Create an in-memory `VellumService` storing attachments in a temp dir.
    pub async fn test_service_with_attachments(dir: std::path::PathBuf) -> VellumService {
        let db = VellumDb::open_local(":memory:").await.unwrap();
        let attachments = AttachmentStore::new(dir).unwrap();
        VellumService::from_db(db, attachments)
    }

    /// A filled-in draft starting 2024-01-01, open-ended.
    pub fn draft(name: &str, vendor: &str, terms: PaymentTerms, value: Decimal) -> ContractDraft {
        ContractDraft {
            contract_name: Some(name.to_string()),
            vendor_name: Some(vendor.to_string()),
            contract_type: Some(String::from("SaaS")),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            payment_terms: terms,
            contract_value: Some(value),
            ..ContractDraft::default()
        }
    }
}
