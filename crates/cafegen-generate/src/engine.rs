use std::time::Instant;

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use tracing::info;

use crate::domains::Domains;
use crate::errors::GenerationError;
use crate::model::{
    Customer, GenerateOptions, GenerationReport, LoyaltyRecord, Store, TableReport, Transaction,
};
use crate::output::write_table;
use crate::sampling::{WeightedChoice, uniform};

pub const CUSTOMER_FILE: &str = "customer_demographics.csv";
pub const STORE_FILE: &str = "store_data.csv";
pub const TRANSACTION_FILE: &str = "purchase_history.csv";
pub const LOYALTY_FILE: &str = "loyalty_data.csv";

/// Transactions fall in the 365 days ending at the reference time.
const TRANSACTION_WINDOW_SECS: i64 = 365 * 24 * 60 * 60;
/// Loyalty join dates fall in the 2 years ending at the reference date.
const LOYALTY_WINDOW_DAYS: i64 = 730;
const INCOME_MEAN: f64 = 60_000.0;
const INCOME_STD_DEV: f64 = 20_000.0;

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub report: GenerationReport,
}

/// Produces the four linked tables from one explicitly threaded random
/// stream.
///
/// Reproducibility contract: for a given seed, parameters, and reference
/// time, draws happen in a fixed order (customers, stores, transactions,
/// loyalty; rows in index order; fields in declaration order). Reordering
/// any of these shifts the stream and changes every downstream table.
#[derive(Debug, Clone)]
pub struct DatasetGenerator {
    domains: Domains,
    income: Normal<f64>,
    payment_method: WeightedChoice<&'static str>,
    order_method: WeightedChoice<&'static str>,
    membership_tier: WeightedChoice<&'static str>,
}

impl DatasetGenerator {
    pub fn new() -> Result<Self, GenerationError> {
        let income = Normal::new(INCOME_MEAN, INCOME_STD_DEV).map_err(|err| {
            GenerationError::InvalidParams(format!("income distribution: {err}"))
        })?;
        Ok(Self {
            domains: Domains::default(),
            income,
            payment_method: WeightedChoice::new(vec![
                ("Mobile", 0.6),
                ("Card", 0.3),
                ("Cash", 0.1),
            ])?,
            order_method: WeightedChoice::new(vec![("Mobile App", 0.4), ("In-Store", 0.6)])?,
            membership_tier: WeightedChoice::new(vec![("Green", 0.7), ("Gold", 0.3)])?,
        })
    }

    /// Generate `count` customer rows with identifiers `1..=count`.
    pub fn generate_customers(
        &self,
        count: u64,
        rng: &mut ChaCha8Rng,
    ) -> Result<Vec<Customer>, GenerationError> {
        require_positive(count, "customer count")?;
        let mut rows = Vec::with_capacity(count as usize);
        for index in 0..count {
            rows.push(Customer {
                customer_id: index as u32 + 1,
                age: rng.random_range(18..=74),
                // Not clamped; the tail may go negative.
                income: self.income.sample(rng),
                occupation: uniform(self.domains.occupations, rng).to_string(),
                education: uniform(self.domains.education_levels, rng).to_string(),
                family_size: rng.random_range(1..=5),
                location_type: uniform(self.domains.customer_locations, rng).to_string(),
            });
        }
        Ok(rows)
    }

    /// Generate `count` store rows with identifiers `1..=count`.
    pub fn generate_stores(
        &self,
        count: u64,
        rng: &mut ChaCha8Rng,
    ) -> Result<Vec<Store>, GenerationError> {
        require_positive(count, "store count")?;
        let mut rows = Vec::with_capacity(count as usize);
        for index in 0..count {
            rows.push(Store {
                store_id: index as u32 + 1,
                location_type: uniform(self.domains.store_locations, rng).to_string(),
                store_type: uniform(self.domains.store_types, rng).to_string(),
                avg_daily_traffic: rng.random_range(200..=999),
                competition_nearby: rng.random_range(0..=4),
                opening_year: rng.random_range(2010..=2023),
                sq_footage: rng.random_range(1000..=2999),
            });
        }
        Ok(rows)
    }

    /// Generate `count` transaction rows whose foreign keys are sampled with
    /// replacement from the given identifier sets.
    pub fn generate_transactions(
        &self,
        customer_ids: &[u32],
        store_ids: &[u32],
        count: u64,
        now: NaiveDateTime,
        rng: &mut ChaCha8Rng,
    ) -> Result<Vec<Transaction>, GenerationError> {
        require_positive(count, "transaction count")?;
        if customer_ids.is_empty() {
            return Err(GenerationError::InvalidParams(
                "customer id set is empty".to_string(),
            ));
        }
        if store_ids.is_empty() {
            return Err(GenerationError::InvalidParams(
                "store id set is empty".to_string(),
            ));
        }

        let mut rows = Vec::with_capacity(count as usize);
        for index in 0..count {
            let customer_id = *uniform(customer_ids, rng);
            let store_id = *uniform(store_ids, rng);
            let stamp = now - Duration::seconds(rng.random_range(0..=TRANSACTION_WINDOW_SECS));
            let drink_type = uniform(self.domains.drink_types, rng).to_string();
            let food_item = uniform(self.domains.food_items, rng).to_string();
            let drink_price = rng.random_range(3.5..=6.5);
            // Drawn even for the no-food sentinel; the source dataset keeps
            // the charge in total_amount.
            let food_price = rng.random_range(0.0..=8.0);
            let payment_method = self.payment_method.pick(rng).to_string();
            let order_method = self.order_method.pick(rng).to_string();

            rows.push(Transaction {
                transaction_id: index as u32 + 1,
                customer_id,
                store_id,
                date: stamp.date(),
                time: stamp.time(),
                drink_type,
                food_item,
                drink_price,
                food_price,
                payment_method,
                order_method,
                total_amount: drink_price + food_price,
            });
        }
        Ok(rows)
    }

    /// Generate exactly one loyalty row per customer identifier, preserving
    /// input order.
    pub fn generate_loyalty(
        &self,
        customer_ids: &[u32],
        today: NaiveDate,
        rng: &mut ChaCha8Rng,
    ) -> Result<Vec<LoyaltyRecord>, GenerationError> {
        if customer_ids.is_empty() {
            return Err(GenerationError::InvalidParams(
                "customer id set is empty".to_string(),
            ));
        }

        let mut rows = Vec::with_capacity(customer_ids.len());
        for &customer_id in customer_ids {
            rows.push(LoyaltyRecord {
                customer_id,
                join_date: today - Duration::days(rng.random_range(0..=LOYALTY_WINDOW_DAYS)),
                membership_tier: self.membership_tier.pick(rng).to_string(),
                total_points: rng.random_range(0..=999),
                // Not capped by total_points.
                points_redeemed: rng.random_range(0..=499),
                promotional_offers_used: rng.random_range(0..=9),
                mobile_app_user: rng.random_bool(0.8),
            });
        }
        Ok(rows)
    }
}

/// Entry point for generating and exporting the dataset.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Run with the wall clock as the reference time, truncated to whole
    /// seconds so exported times carry no fractional part.
    pub fn run(&self) -> Result<GenerationResult, GenerationError> {
        let now = Utc::now().naive_utc();
        let now = now.with_nanosecond(0).unwrap_or(now);
        self.run_at(now)
    }

    /// Run with an explicit reference time. Transaction timestamps fall in
    /// the 365 days ending at `now`; loyalty join dates in the 730 days
    /// ending at `now.date()`.
    pub fn run_at(&self, now: NaiveDateTime) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        self.options.validate()?;
        std::fs::create_dir_all(&self.options.out_dir)?;

        let run_id = uuid::Uuid::new_v4().to_string();
        info!(
            run_id = %run_id,
            seed = self.options.seed,
            customers = self.options.customers,
            stores = self.options.stores,
            transactions = self.options.transactions,
            "generation started"
        );

        let generator = DatasetGenerator::new()?;
        let mut rng = ChaCha8Rng::seed_from_u64(self.options.seed);

        let customers = generator.generate_customers(self.options.customers, &mut rng)?;
        let stores = generator.generate_stores(self.options.stores, &mut rng)?;
        let customer_ids: Vec<u32> = customers.iter().map(|row| row.customer_id).collect();
        let store_ids: Vec<u32> = stores.iter().map(|row| row.store_id).collect();
        let transactions = generator.generate_transactions(
            &customer_ids,
            &store_ids,
            self.options.transactions,
            now,
            &mut rng,
        )?;
        let loyalty = generator.generate_loyalty(&customer_ids, now.date(), &mut rng)?;

        let mut report = GenerationReport::new(run_id.clone());
        self.export(CUSTOMER_FILE, &customers, &mut report)?;
        self.export(STORE_FILE, &stores, &mut report)?;
        self.export(TRANSACTION_FILE, &transactions, &mut report)?;
        self.export(LOYALTY_FILE, &loyalty, &mut report)?;

        report.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            run_id = %run_id,
            tables = report.tables.len(),
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            "generation completed"
        );
        Ok(GenerationResult { report })
    }

    fn export<T: serde::Serialize>(
        &self,
        file_name: &str,
        rows: &[T],
        report: &mut GenerationReport,
    ) -> Result<(), GenerationError> {
        let path = self.options.out_dir.join(file_name);
        let bytes = write_table(&path, rows)?;
        report.bytes_written += bytes;
        report.tables.push(TableReport {
            table: file_name.to_string(),
            rows_requested: rows.len() as u64,
            rows_generated: rows.len() as u64,
        });
        info!(table = file_name, rows = rows.len() as u64, bytes, "table exported");
        Ok(())
    }
}

fn require_positive(count: u64, what: &str) -> Result<(), GenerationError> {
    if count == 0 {
        return Err(GenerationError::InvalidParams(format!(
            "{what} must be positive"
        )));
    }
    Ok(())
}
