// Water Report Binary
//
// Purpose: Print the field advisory report, a viability verdict and the
// water-balance projection for one field as JSON
// Usage: RAIN_30D_MM=120 SOIL_TYPE="Black Soil" CROP=Cotton cargo run --bin water_report

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use chrono::Datelike;
use crop_water_engine::{CropKnowledgeBase, EngineConfig, FieldAdvisor, Season};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                // Default log level: info for our crate, warn for others
                .unwrap_or_else(|_| "crop_water_engine=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Configuration from environment variables
    let config = match std::env::var("ENGINE_CONFIG") {
        Ok(path) => EngineConfig::load(Path::new(&path))?,
        Err(_) => EngineConfig::default(),
    };

    let soil_type = std::env::var("SOIL_TYPE").ok().filter(|s| !s.trim().is_empty());

    let rain_30d_mm: f64 = match std::env::var("RAIN_30D_MM") {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("RAIN_30D_MM is not a number: {:?}", raw))?,
        Err(_) => 0.0,
    };

    let crop = std::env::var("CROP").unwrap_or_else(|_| "Wheat".to_string());

    let today = chrono::Local::now().date_naive();
    let start_month: u32 = std::env::var("START_MONTH")
        .ok()
        .and_then(|m| m.parse().ok())
        .unwrap_or_else(|| today.month());
    let season = Season::from_date(&today);

    tracing::info!("Configuration:");
    tracing::info!("  SOIL_TYPE: {}", soil_type.as_deref().unwrap_or("(none)"));
    tracing::info!("  RAIN_30D_MM: {}", rain_30d_mm);
    tracing::info!("  CROP: {}", crop);
    tracing::info!("  START_MONTH: {}", start_month);
    tracing::info!("  Season: {}", season);

    let advisor = FieldAdvisor::new(Arc::new(CropKnowledgeBase::builtin()), config);

    let report = advisor.water_report(rain_30d_mm, soil_type.as_deref(), season, &[]);
    let available = advisor.estimate_water_balance(rain_30d_mm);
    let verdict = advisor.check_viability(&crop, available, soil_type.as_deref(), season, None);
    let projection = advisor.simulate(&crop, available, start_month);

    tracing::info!(
        "{} recommendations, {} {}",
        report.recommended_crops.len(),
        crop,
        if verdict.feasible { "is viable" } else { "is not viable" }
    );

    let output = serde_json::json!({
        "report": report,
        "viability": verdict,
        "simulation": projection,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
