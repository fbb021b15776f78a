use order_projection::app_system::{run_sample, sample_order, setup_tracing, ProjectionSystem};
use order_projection::config::MapperConfig;
use tracing::{error, info, warn};

fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting order projection sample");

    // An invalid rule set stops here, before anything is mapped
    let system = ProjectionSystem::new(MapperConfig::default()).map_err(|e| e.to_string())?;

    let order = sample_order();
    let report = run_sample(&system, &order);

    match &report.summary {
        Ok(summary) => {
            let json = serde_json::to_string_pretty(summary).map_err(|e| e.to_string())?;
            println!("{json}");
        }
        Err(e) => error!(error = %e, "Order summary failed"),
    }

    // Mapping failures are reported, not fatal, for this sample
    for diagnostic in report.diagnostics() {
        warn!(%diagnostic, "Mapping failed");
    }

    info!("Sample completed");
    Ok(())
}
