use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use cafegen_generate::engine::{CUSTOMER_FILE, LOYALTY_FILE, STORE_FILE, TRANSACTION_FILE};
use cafegen_generate::{GenerateOptions, GenerationEngine, GenerationError};
use chrono::{NaiveDate, NaiveDateTime};

const TABLE_FILES: [&str; 4] = [CUSTOMER_FILE, STORE_FILE, TRANSACTION_FILE, LOYALTY_FILE];

fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 1)
        .expect("valid date")
        .and_hms_opt(12, 30, 0)
        .expect("valid time")
}

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("cafegen_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp out dir");
    dir
}

fn id_column(path: &Path, column: usize) -> Vec<u32> {
    let mut reader = csv::Reader::from_path(path).expect("open csv");
    reader
        .records()
        .map(|record| {
            record.expect("read record")[column]
                .parse::<u32>()
                .expect("parse id")
        })
        .collect()
}

#[test]
fn generate_is_deterministic() {
    let now = fixed_now();
    let dir_a = temp_out_dir("run_a");
    let dir_b = temp_out_dir("run_b");

    let mut options = GenerateOptions::default();
    options.out_dir = dir_a.clone();
    GenerationEngine::new(options).run_at(now).expect("run A");

    let mut options = GenerateOptions::default();
    options.out_dir = dir_b.clone();
    GenerationEngine::new(options).run_at(now).expect("run B");

    for file in TABLE_FILES {
        let a = fs::read_to_string(dir_a.join(file)).expect("read file A");
        let b = fs::read_to_string(dir_b.join(file)).expect("read file B");
        assert_eq!(a, b, "{file} should be byte-identical across runs");
    }
}

#[test]
fn exports_expected_headers_and_row_counts() {
    let out_dir = temp_out_dir("headers");
    let mut options = GenerateOptions::default();
    options.out_dir = out_dir.clone();
    options.customers = 20;
    options.stores = 3;
    options.transactions = 50;

    let result = GenerationEngine::new(options)
        .run_at(fixed_now())
        .expect("run generation");

    let expected_headers: [(&str, &[&str]); 4] = [
        (
            CUSTOMER_FILE,
            &[
                "customer_id",
                "age",
                "income",
                "occupation",
                "education",
                "family_size",
                "location_type",
            ],
        ),
        (
            STORE_FILE,
            &[
                "store_id",
                "location_type",
                "store_type",
                "avg_daily_traffic",
                "competition_nearby",
                "opening_year",
                "sq_footage",
            ],
        ),
        (
            TRANSACTION_FILE,
            &[
                "transaction_id",
                "customer_id",
                "store_id",
                "date",
                "time",
                "drink_type",
                "food_item",
                "drink_price",
                "food_price",
                "payment_method",
                "order_method",
                "total_amount",
            ],
        ),
        (
            LOYALTY_FILE,
            &[
                "customer_id",
                "join_date",
                "membership_tier",
                "total_points",
                "points_redeemed",
                "promotional_offers_used",
                "mobile_app_user",
            ],
        ),
    ];

    for (file, header) in expected_headers {
        let mut reader = csv::Reader::from_path(out_dir.join(file)).expect("open csv");
        let found: Vec<&str> = reader.headers().expect("headers").iter().collect();
        assert_eq!(found, header, "{file} header");
    }

    let expected_rows: [(&str, u64); 4] = [
        (CUSTOMER_FILE, 20),
        (STORE_FILE, 3),
        (TRANSACTION_FILE, 50),
        (LOYALTY_FILE, 20),
    ];
    for (file, rows) in expected_rows {
        let report = result
            .report
            .tables
            .iter()
            .find(|table| table.table == file)
            .expect("table report");
        assert_eq!(report.rows_generated, rows, "{file} rows");
    }
}

#[test]
fn small_run_keeps_foreign_keys_inside_generated_ids() {
    let out_dir = temp_out_dir("small");
    let mut options = GenerateOptions::default();
    options.out_dir = out_dir.clone();
    options.customers = 3;
    options.stores = 2;
    options.transactions = 10;
    options.seed = 7;

    GenerationEngine::new(options)
        .run_at(fixed_now())
        .expect("run generation");

    let customer_ids = id_column(&out_dir.join(CUSTOMER_FILE), 0);
    assert_eq!(customer_ids, vec![1, 2, 3]);

    let store_ids = id_column(&out_dir.join(STORE_FILE), 0);
    assert_eq!(store_ids, vec![1, 2]);

    let customer_set: BTreeSet<u32> = customer_ids.iter().copied().collect();
    let store_set: BTreeSet<u32> = store_ids.iter().copied().collect();

    let transaction_customers = id_column(&out_dir.join(TRANSACTION_FILE), 1);
    let transaction_stores = id_column(&out_dir.join(TRANSACTION_FILE), 2);
    assert_eq!(transaction_customers.len(), 10);
    for id in &transaction_customers {
        assert!(customer_set.contains(id), "unknown customer id {id}");
    }
    for id in &transaction_stores {
        assert!(store_set.contains(id), "unknown store id {id}");
    }

    let loyalty_ids = id_column(&out_dir.join(LOYALTY_FILE), 0);
    assert_eq!(loyalty_ids, vec![1, 2, 3], "one loyalty row per customer, in order");
}

#[test]
fn rejects_zero_counts_before_generating() {
    let out_dir = temp_out_dir("invalid");
    let mut options = GenerateOptions::default();
    options.out_dir = out_dir.clone();
    options.customers = 0;

    let err = GenerationEngine::new(options)
        .run_at(fixed_now())
        .expect_err("zero customers must fail");
    assert!(matches!(err, GenerationError::InvalidParams(_)));
    assert!(
        !out_dir.join(CUSTOMER_FILE).exists(),
        "no file should be written on invalid parameters"
    );
}
