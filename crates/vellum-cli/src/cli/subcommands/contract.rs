use clap::Subcommand;

/// Contract record commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ContractCommands {
    /// Create a contract.
    Add {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        vendor: Option<String>,
        #[arg(long = "type")]
        contract_type: Option<String>,
        #[arg(long)]
        subtype: Option<String>,
        #[arg(long)]
        number: Option<String>,
        /// Start date (YYYY-MM-DD).
        #[arg(long)]
        start_date: Option<String>,
        /// End date (YYYY-MM-DD). Omit for open-ended.
        #[arg(long)]
        end_date: Option<String>,
        /// Payment cadence: one_time, monthly, yearly.
        #[arg(long)]
        terms: Option<String>,
        /// Face value; per-month cost for monthly cadence.
        #[arg(long)]
        value: Option<String>,
        /// Renewal cadence: monthly, yearly.
        #[arg(long)]
        renewal: Option<String>,
        /// Days of notice required before renewal.
        #[arg(long)]
        notice_days: Option<i64>,
        /// Document to attach after creation.
        #[arg(long)]
        file: Option<String>,
    },
    /// Update contract fields.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        vendor: Option<String>,
        #[arg(long = "type")]
        contract_type: Option<String>,
        #[arg(long)]
        subtype: Option<String>,
        #[arg(long)]
        number: Option<String>,
        #[arg(long)]
        start_date: Option<String>,
        #[arg(long)]
        end_date: Option<String>,
        /// Make the contract open-ended again.
        #[arg(long, conflicts_with = "end_date")]
        clear_end_date: bool,
        #[arg(long)]
        terms: Option<String>,
        #[arg(long)]
        value: Option<String>,
        /// Remove the face value.
        #[arg(long, conflicts_with = "value")]
        clear_value: bool,
        #[arg(long)]
        renewal: Option<String>,
        #[arg(long)]
        notice_days: Option<i64>,
    },
    /// List contracts, newest first.
    List {
        /// Exact vendor name filter.
        #[arg(long)]
        vendor: Option<String>,
        /// Exact contract type filter.
        #[arg(long = "type")]
        contract_type: Option<String>,
        /// Case-insensitive substring over name, vendor, and number.
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a contract by ID.
    Get { id: String },
    /// Delete a contract and its attached document.
    Remove { id: String },
    /// Attach a document to a contract.
    Attach { id: String, file: String },
    /// Remove a contract's attached document.
    Detach { id: String },
}
