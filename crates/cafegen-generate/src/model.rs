use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::errors::GenerationError;

/// One row of `customer_demographics.csv`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: u32,
    pub age: u32,
    pub income: f64,
    pub occupation: String,
    pub education: String,
    pub family_size: u32,
    pub location_type: String,
}

/// One row of `store_data.csv`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    pub store_id: u32,
    pub location_type: String,
    pub store_type: String,
    pub avg_daily_traffic: u32,
    pub competition_nearby: u32,
    pub opening_year: u32,
    pub sq_footage: u32,
}

/// One row of `purchase_history.csv`.
///
/// `customer_id` and `store_id` are sampled from the generated identifier
/// sets, so referential integrity holds by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: u32,
    pub customer_id: u32,
    pub store_id: u32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub drink_type: String,
    pub food_item: String,
    pub drink_price: f64,
    pub food_price: f64,
    pub payment_method: String,
    pub order_method: String,
    pub total_amount: f64,
}

/// One row of `loyalty_data.csv`; exactly one per customer, in customer order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoyaltyRecord {
    pub customer_id: u32,
    pub join_date: NaiveDate,
    pub membership_tier: String,
    pub total_points: u32,
    pub points_redeemed: u32,
    pub promotional_offers_used: u32,
    pub mobile_app_user: bool,
}

/// Options for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Directory where the four CSV files are written (overwritten each run).
    pub out_dir: PathBuf,
    /// Customer rows to generate.
    pub customers: u64,
    /// Store rows to generate.
    pub stores: u64,
    /// Transaction rows to generate.
    pub transactions: u64,
    /// Seed for the shared random stream.
    pub seed: u64,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            customers: 500,
            stores: 5,
            transactions: 2500,
            seed: 42,
        }
    }
}

impl GenerateOptions {
    /// Reject invalid size parameters before any generation begins.
    pub fn validate(&self) -> Result<(), GenerationError> {
        for (count, what) in [
            (self.customers, "customer count"),
            (self.stores, "store count"),
            (self.transactions, "transaction count"),
        ] {
            if count == 0 {
                return Err(GenerationError::InvalidParams(format!(
                    "{what} must be positive"
                )));
            }
        }
        Ok(())
    }
}

/// Summary of one exported table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableReport {
    pub table: String,
    pub rows_requested: u64,
    pub rows_generated: u64,
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub tables: Vec<TableReport>,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(run_id: String) -> Self {
        Self {
            run_id,
            tables: Vec::new(),
            bytes_written: 0,
            duration_ms: 0,
        }
    }
}
