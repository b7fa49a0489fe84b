//! Contract repository — CRUD, distinct-value lists, attachment bookkeeping.

use std::path::Path;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use vellum_core::entities::Contract;
use vellum_core::enums::{PaymentTerms, RenewalType};
use vellum_core::ids::PREFIX_CONTRACT;

use crate::error::DatabaseError;
use crate::helpers::{
    get_opt_string, parse_datetime, parse_enum, parse_optional_date, parse_optional_decimal,
    parse_optional_enum,
};
use crate::service::VellumService;
use crate::updates::contract::ContractUpdate;

const SELECT_COLS: &str = "id, contract_name, vendor_name, contract_type, contract_subtype, \
     contract_number, start_date, end_date, payment_terms, contract_value, renewal_type, \
     notice_period_days, file_path, created_at, updated_at";

fn row_to_contract(row: &libsql::Row) -> Result<Contract, DatabaseError> {
    Ok(Contract {
        id: row.get(0)?,
        contract_name: get_opt_string(row, 1)?,
        vendor_name: get_opt_string(row, 2)?,
        contract_type: get_opt_string(row, 3)?,
        contract_subtype: get_opt_string(row, 4)?,
        contract_number: get_opt_string(row, 5)?,
        start_date: parse_optional_date(get_opt_string(row, 6)?.as_deref())?,
        end_date: parse_optional_date(get_opt_string(row, 7)?.as_deref())?,
        payment_terms: parse_enum(&row.get::<String>(8)?)?,
        contract_value: parse_optional_decimal(get_opt_string(row, 9)?.as_deref())?,
        renewal_type: parse_optional_enum(get_opt_string(row, 10)?.as_deref())?,
        notice_period_days: row.get(11)?,
        file_path: get_opt_string(row, 12)?,
        created_at: parse_datetime(&row.get::<String>(13)?)?,
        updated_at: parse_datetime(&row.get::<String>(14)?)?,
    })
}

/// Field values for a new contract record.
#[derive(Debug, Clone)]
pub struct ContractDraft {
    pub contract_name: Option<String>,
    pub vendor_name: Option<String>,
    pub contract_type: Option<String>,
    pub contract_subtype: Option<String>,
    pub contract_number: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub payment_terms: PaymentTerms,
    pub contract_value: Option<Decimal>,
    pub renewal_type: Option<RenewalType>,
    pub notice_period_days: i64,
}

impl Default for ContractDraft {
    fn default() -> Self {
        Self {
            contract_name: None,
            vendor_name: None,
            contract_type: None,
            contract_subtype: None,
            contract_number: None,
            start_date: None,
            end_date: None,
            payment_terms: PaymentTerms::OneTime,
            contract_value: None,
            renewal_type: None,
            notice_period_days: 30,
        }
    }
}

/// Write-time invariants: `start_date <= end_date`, non-negative value.
/// The analytics core relies on these holding and never re-validates.
fn validate_fields(
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    contract_value: Option<Decimal>,
) -> Result<(), DatabaseError> {
    if let (Some(start), Some(end)) = (start_date, end_date) {
        if start > end {
            return Err(DatabaseError::InvalidState(format!(
                "start_date {start} is after end_date {end}"
            )));
        }
    }
    if let Some(value) = contract_value {
        if value < Decimal::ZERO {
            return Err(DatabaseError::InvalidState(format!(
                "contract_value {value} is negative"
            )));
        }
    }
    Ok(())
}

impl VellumService {
    pub async fn create_contract(&self, draft: ContractDraft) -> Result<Contract, DatabaseError> {
        validate_fields(draft.start_date, draft.end_date, draft.contract_value)?;

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_CONTRACT).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO contracts ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)"
                ),
                libsql::params![
                    id.as_str(),
                    draft.contract_name.as_deref(),
                    draft.vendor_name.as_deref(),
                    draft.contract_type.as_deref(),
                    draft.contract_subtype.as_deref(),
                    draft.contract_number.as_deref(),
                    draft.start_date.map(|d| d.to_string()),
                    draft.end_date.map(|d| d.to_string()),
                    draft.payment_terms.as_str(),
                    draft.contract_value.map(|v| v.to_string()),
                    draft.renewal_type.map(|r| r.as_str()),
                    draft.notice_period_days,
                    Option::<String>::None,
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(Contract {
            id,
            contract_name: draft.contract_name,
            vendor_name: draft.vendor_name,
            contract_type: draft.contract_type,
            contract_subtype: draft.contract_subtype,
            contract_number: draft.contract_number,
            start_date: draft.start_date,
            end_date: draft.end_date,
            payment_terms: draft.payment_terms,
            contract_value: draft.contract_value,
            renewal_type: draft.renewal_type,
            notice_period_days: draft.notice_period_days,
            file_path: None,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_contract(&self, id: &str) -> Result<Contract, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM contracts WHERE id = ?1"), [id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_contract(&row)
    }

    /// Most recently created first, for interactive listing.
    pub async fn list_contracts(&self, limit: u32) -> Result<Vec<Contract>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM contracts ORDER BY created_at DESC LIMIT {limit}"
                ),
                (),
            )
            .await?;

        let mut contracts = Vec::new();
        while let Some(row) = rows.next().await? {
            contracts.push(row_to_contract(&row)?);
        }
        Ok(contracts)
    }

    /// Full snapshot in insertion order. The analytics engine consumes this;
    /// its tie-breaking rules depend on a stable collection order.
    pub async fn list_all_contracts(&self) -> Result<Vec<Contract>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM contracts ORDER BY created_at, id"),
                (),
            )
            .await?;

        let mut contracts = Vec::new();
        while let Some(row) = rows.next().await? {
            contracts.push(row_to_contract(&row)?);
        }
        Ok(contracts)
    }

    pub async fn update_contract(
        &self,
        contract_id: &str,
        update: ContractUpdate,
    ) -> Result<Contract, DatabaseError> {
        let current = self.get_contract(contract_id).await?;

        // Validate against the merged row before touching anything.
        let merged_start = update.start_date.unwrap_or(current.start_date);
        let merged_end = update.end_date.unwrap_or(current.end_date);
        let merged_value = update.contract_value.unwrap_or(current.contract_value);
        validate_fields(merged_start, merged_end, merged_value)?;

        fn push_opt_text(
            field: &str,
            value: Option<String>,
            sets: &mut Vec<String>,
            params: &mut Vec<libsql::Value>,
            idx: &mut usize,
        ) {
            sets.push(format!("{field} = ?{idx}"));
            params.push(value.map_or(libsql::Value::Null, Into::into));
            *idx += 1;
        }

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(ref name) = update.contract_name {
            push_opt_text("contract_name", name.clone(), &mut sets, &mut params, &mut idx);
        }
        if let Some(ref vendor) = update.vendor_name {
            push_opt_text("vendor_name", vendor.clone(), &mut sets, &mut params, &mut idx);
        }
        if let Some(ref kind) = update.contract_type {
            push_opt_text("contract_type", kind.clone(), &mut sets, &mut params, &mut idx);
        }
        if let Some(ref subtype) = update.contract_subtype {
            push_opt_text("contract_subtype", subtype.clone(), &mut sets, &mut params, &mut idx);
        }
        if let Some(ref number) = update.contract_number {
            push_opt_text("contract_number", number.clone(), &mut sets, &mut params, &mut idx);
        }
        if let Some(start) = update.start_date {
            push_opt_text("start_date", start.map(|d| d.to_string()), &mut sets, &mut params, &mut idx);
        }
        if let Some(end) = update.end_date {
            push_opt_text("end_date", end.map(|d| d.to_string()), &mut sets, &mut params, &mut idx);
        }
        if let Some(terms) = update.payment_terms {
            sets.push(format!("payment_terms = ?{idx}"));
            params.push(terms.as_str().into());
            idx += 1;
        }
        if let Some(value) = update.contract_value {
            push_opt_text("contract_value", value.map(|v| v.to_string()), &mut sets, &mut params, &mut idx);
        }
        if let Some(renewal) = update.renewal_type {
            push_opt_text("renewal_type", renewal.map(|r| r.as_str().to_string()), &mut sets, &mut params, &mut idx);
        }
        if let Some(days) = update.notice_period_days {
            sets.push(format!("notice_period_days = ?{idx}"));
            params.push(days.into());
            idx += 1;
        }

        if sets.is_empty() {
            return Ok(current);
        }

        let now = Utc::now();
        sets.push(format!("updated_at = ?{idx}"));
        params.push(now.to_rfc3339().into());
        idx += 1;

        params.push(contract_id.into());
        let sql = format!("UPDATE contracts SET {} WHERE id = ?{idx}", sets.join(", "));
        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        self.get_contract(contract_id).await
    }

    /// Delete a contract row and any attached document blob.
    pub async fn delete_contract(&self, contract_id: &str) -> Result<(), DatabaseError> {
        let current = self.get_contract(contract_id).await?;

        self.db()
            .conn()
            .execute("DELETE FROM contracts WHERE id = ?1", [contract_id])
            .await?;

        if let Some(blob_name) = current.file_path {
            self.attachments().remove(&blob_name)?;
        }
        Ok(())
    }

    /// Copy `source` into the attachment store and point the contract at it.
    ///
    /// A previously attached blob is removed after the new one is stored.
    pub async fn attach_file(
        &self,
        contract_id: &str,
        source: &Path,
    ) -> Result<Contract, DatabaseError> {
        let current = self.get_contract(contract_id).await?;
        let blob_name = self.attachments().store(contract_id, source)?;

        if let Some(old_blob) = current.file_path {
            self.attachments().remove(&old_blob)?;
        }

        let now = Utc::now();
        self.db()
            .conn()
            .execute(
                "UPDATE contracts SET file_path = ?1, updated_at = ?2 WHERE id = ?3",
                libsql::params![blob_name.as_str(), now.to_rfc3339(), contract_id],
            )
            .await?;

        self.get_contract(contract_id).await
    }

    /// Remove the attached document blob, if any, and clear `file_path`.
    pub async fn detach_file(&self, contract_id: &str) -> Result<Contract, DatabaseError> {
        let current = self.get_contract(contract_id).await?;

        if let Some(blob_name) = current.file_path {
            self.attachments().remove(&blob_name)?;
            let now = Utc::now();
            self.db()
                .conn()
                .execute(
                    "UPDATE contracts SET file_path = NULL, updated_at = ?1 WHERE id = ?2",
                    libsql::params![now.to_rfc3339(), contract_id],
                )
                .await?;
        }

        self.get_contract(contract_id).await
    }

    /// Distinct non-null vendor names, alphabetical. Feeds filter UIs.
    pub async fn distinct_vendors(&self) -> Result<Vec<String>, DatabaseError> {
        self.distinct_column("vendor_name").await
    }

    /// Distinct non-null contract types, alphabetical. Feeds filter UIs.
    pub async fn distinct_types(&self) -> Result<Vec<String>, DatabaseError> {
        self.distinct_column("contract_type").await
    }

    async fn distinct_column(&self, column: &str) -> Result<Vec<String>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT DISTINCT {column} FROM contracts \
                     WHERE {column} IS NOT NULL AND {column} != '' ORDER BY {column}"
                ),
                (),
            )
            .await?;

        let mut values = Vec::new();
        while let Some(row) = rows.next().await? {
            values.push(row.get::<String>(0)?);
        }
        Ok(values)
    }
}
