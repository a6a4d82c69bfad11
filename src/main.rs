use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use floodwatch::{format_count, Cli, SessionContext, SummaryMetrics};

#[derive(Serialize)]
struct InteractionSummary<'a> {
    metrics: &'a SummaryMetrics,
    reconciled_rows: usize,
    map_points: Option<usize>,
    banner: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let session = SessionContext::load(&cli.dataset, &cli.geojson, cli.occupancy)?;
    let snapshot = session.interact(&cli.selection());

    if cli.json {
        let summary = InteractionSummary {
            metrics: &snapshot.metrics,
            reconciled_rows: snapshot.reconciled.len(),
            map_points: snapshot.map.as_ref().ok().map(|view| view.points.len()),
            banner: snapshot.map.as_ref().err().map(|e| e.to_string()),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Watched list: {}", format_count(snapshot.metrics.watched_list));
        println!("Not customer: {}", format_count(snapshot.metrics.not_customer));
        println!("Safe zone:    {}", format_count(snapshot.metrics.safe_zone));
        println!("Reconciled addresses: {}", snapshot.reconciled.len());
        match &snapshot.map {
            Ok(view) => println!(
                "Map: {} points centered at ({:.4}, {:.4})",
                view.points.len(),
                view.center.y(),
                view.center.x()
            ),
            Err(banner) => println!("Map: {banner}"),
        }
    }
    Ok(())
}
