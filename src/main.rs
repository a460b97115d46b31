//! Demo binary: seed the directory, pull one round of waiting times, then
//! triage a symptom description from the command line.
//!
//! Usage: `wardroute [symptom text...]`

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use wardroute::config::{self, FeedConfig, TriageConfig};
use wardroute::directory::{HospitalDirectory, InMemoryDirectory};
use wardroute::feed::{IntensityRefreshJob, WaitTimeClient};
use wardroute::seed;
use wardroute::triage::TriageService;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    let symptom_text = {
        let args: Vec<String> = std::env::args().skip(1).collect();
        if args.is_empty() {
            "chest tightness and palpitations".to_string()
        } else {
            args.join(" ")
        }
    };

    let directory = Arc::new(InMemoryDirectory::new(seed::demo_snapshot()));

    let feed_config = FeedConfig::default();
    let refresh = IntensityRefreshJob::new(
        Arc::clone(&directory) as Arc<dyn HospitalDirectory>,
        WaitTimeClient::new(&feed_config),
    );
    refresh.run_once();

    let service = TriageService::new(
        Arc::clone(&directory) as Arc<dyn HospitalDirectory>,
        TriageConfig::default(),
    );

    tracing::info!(text = %symptom_text, "Analyzing symptom description");
    let Some(analysis) = service.analyze_symptom(&symptom_text)? else {
        println!("No department matched \"{symptom_text}\"; please pick one manually.");
        return Ok(());
    };

    println!("{}", serde_json::to_string_pretty(&analysis)?);

    // Demo patient location: Wan Chai, Hong Kong Island.
    let ranked = service.recommend_hospitals(22.2783, 114.1747, analysis.department_id, None)?;
    println!("{}", serde_json::to_string_pretty(&ranked)?);

    Ok(())
}
