// crashlens-core/src/application/fetch.rs

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde_json::Value;
use tracing::{info, warn};

use crate::domain::error::DomainError;
use crate::error::CrashlensError;
use crate::ports::dataset::{DatasetSource, FetchOptions, Record};

pub struct FetchResult {
    pub records: usize,
    pub columns: Vec<String>,
    pub saved_to: PathBuf,
}

/// Fetches one slice of the dataset and saves it as a raw CSV file.
/// Single attempt: any transport/HTTP/payload failure propagates unretried.
/// An empty result set is rejected rather than written out.
pub async fn run_fetch(
    source: &dyn DatasetSource,
    raw_dir: &Path,
    options: FetchOptions,
    filename: Option<String>,
) -> Result<FetchResult, CrashlensError> {
    if let Some(limit) = options.limit
        && limit == 0
    {
        return Err(DomainError::InvalidLimit(limit).into());
    }

    let records = source.fetch(&options).await?;
    if records.is_empty() {
        warn!("API returned an empty dataset");
        return Err(DomainError::EmptyDataset.into());
    }

    let columns = column_order(&records);
    info!(
        records = records.len(),
        columns = columns.len(),
        "Fetched dataset"
    );
    if let Some((min, max)) = crash_date_range(&records) {
        info!(%min, %max, "Crash date range");
    }

    let filename = filename.unwrap_or_else(|| {
        format!(
            "nyc_collisions_latest_{}.csv",
            Local::now().format("%Y%m%d_%H%M%S")
        )
    });
    let path = raw_dir.join(filename);
    save_records(&path, &columns, &records)?;

    Ok(FetchResult {
        records: records.len(),
        columns,
        saved_to: path,
    })
}

/// Column order is first appearance across ALL records, so keys missing from
/// the first record still land in the file.
fn column_order(records: &[Record]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut order = Vec::new();
    for record in records {
        for key in record.keys() {
            if seen.insert(key.clone()) {
                order.push(key.clone());
            }
        }
    }
    order
}

fn crash_date_range(records: &[Record]) -> Option<(String, String)> {
    let mut dates: Vec<&str> = records
        .iter()
        .filter_map(|r| r.get("crash_date").and_then(Value::as_str))
        .collect();
    if dates.is_empty() {
        return None;
    }
    dates.sort_unstable();
    Some((dates[0].to_string(), dates[dates.len() - 1].to_string()))
}

/// Nested objects (ex: the Socrata 'location' field) are kept as their JSON
/// text; read_csv_auto then treats them as plain VARCHAR.
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn save_records(path: &Path, columns: &[String], records: &[Record]) -> Result<(), CrashlensError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(columns)?;
    for record in records {
        let row: Vec<String> = columns
            .iter()
            .map(|col| record.get(col).map(cell_text).unwrap_or_default())
            .collect();
        writer.write_record(&row)?;
    }
    writer.flush()?;

    let size_mb = std::fs::metadata(path)?.len() as f64 / (1024.0 * 1024.0);
    info!(path = ?path, size_mb = %format!("{size_mb:.2}"), "Raw dataset saved");
    Ok(())
}
