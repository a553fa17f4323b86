// crashlens/src/commands/fetch.rs
//
// USE CASE: Fetch a dataset slice and save it as raw CSV.

use std::path::PathBuf;

use anyhow::Context;
use crashlens_core::application::run_fetch;
use crashlens_core::infrastructure::config::load_audit_config;
use crashlens_core::infrastructure::http::socrata::SocrataClient;
use crashlens_core::ports::dataset::FetchOptions;

pub async fn execute(
    project_dir: PathBuf,
    limit: Option<u64>,
    where_clause: Option<String>,
    output: Option<String>,
) -> anyhow::Result<()> {
    // A. Load the Config (Infra)
    let config = load_audit_config(&project_dir).with_context(|| {
        format!(
            "Failed to load project configuration from {:?}",
            project_dir
        )
    })?;

    // B. Instantiate the HTTP client
    let client = SocrataClient::new(
        &config.base_url,
        &config.dataset_id,
        config.request_timeout_secs,
    )?;

    let effective_limit = limit.unwrap_or(config.default_limit);
    let options = FetchOptions {
        limit: Some(effective_limit),
        where_clause,
    };

    println!(
        "📡 Fetching collisions data (limit: {}) from {}...",
        effective_limit,
        client.endpoint()
    );

    // C. Run the use case (Application Layer)
    let raw_dir = project_dir.join(&config.raw_dir);
    let result = run_fetch(&client, &raw_dir, options, output).await?;

    println!("   Records: {}", result.records);
    println!("   Columns: {}", result.columns.len());
    println!("✨ Raw dataset saved to {}", result.saved_to.display());
    println!("👉 Next: crashlens load --file {}", result.saved_to.display());
    Ok(())
}
