//! campus — walk-through of the campus_nav navigator.
//!
//! ```text
//! campus [SEED.json] [--config CONFIG.json] [--proximity]
//! ```
//!
//! Without a seed path the embedded campus map is used.  Set `RUST_LOG` to
//! control log output (default `info`, written to stderr).

mod seed;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use cn_core::NavConfig;
use cn_route::RouteStrategy;
use cn_service::{GraphMode, NavigatorBuilder};
use cn_traffic::TrafficUpdate;

use seed::CAMPUS_SEED;

// ── Command line ──────────────────────────────────────────────────────────────

/// Walk-through of the campus_nav navigator.
#[derive(Parser)]
#[command(name = "campus", about = "Campus walking-route navigator demo", long_about = None)]
struct Args {
    /// Seed JSON with `nodes`, `edges` and `coordinates` (embedded map if omitted)
    seed:      Option<PathBuf>,
    /// NavConfig JSON overriding the defaults
    #[arg(long, value_name = "PATH")]
    config:    Option<PathBuf>,
    /// Connect locations by proximity instead of the explicit edge list
    #[arg(long)]
    proximity: bool,
}

impl Args {
    fn mode(&self) -> GraphMode {
        if self.proximity { GraphMode::Proximity } else { GraphMode::EdgeList }
    }
}

fn load_config(args: &Args) -> Result<NavConfig> {
    let Some(path) = &args.config else {
        return Ok(NavConfig::default());
    };
    info!("loading config from {}", path.display());
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;

    let builder = match &args.seed {
        Some(path) => NavigatorBuilder::from_path(path)
            .with_context(|| format!("loading seed {}", path.display()))?,
        None => NavigatorBuilder::from_json_str(CAMPUS_SEED)?,
    };
    let nav = builder.config(config).mode(args.mode()).build()?;

    println!("=== campus — campus_nav navigator ===");
    let info = nav.graph_info();
    println!(
        "Graph: {:?} mode, {} locations, {} edges (weights in {})",
        info.mode, info.locations, info.edges, info.unit
    );
    println!();

    // 1. Shortest path with step trace.
    let (from, to) = ("Main Gate", "Faculty of Arts");
    let route = nav.shortest_path(from, to, true);
    if route.found {
        println!("Shortest {from} → {to}: {}", route.path.join(" → "));
        println!(
            "  distance {:.2} {}, ~{} min walk, {} steps traced",
            route.distance.unwrap_or_default(),
            route.unit,
            route.estimated_minutes.unwrap_or_default(),
            route.steps.as_ref().map_or(0, Vec::len)
        );
    } else {
        println!("Shortest {from} → {to}: {}", route.error.as_deref().unwrap_or("no route"));
    }
    println!();

    // 2. Alternatives, both strategies.
    for strategy in [RouteStrategy::Enumerate, RouteStrategy::EdgeRemoval] {
        let alt = nav.alternative_routes(from, to, Some(3), strategy)?;
        println!("Alternatives ({}):", strategy.as_str());
        for r in &alt.routes {
            println!(
                "  #{} {:>6.2}  {}{}",
                r.rank,
                r.distance,
                r.path.join(" → "),
                if r.is_optimal { "  (optimal)" } else { "" }
            );
        }
        if let Some(analysis) = &alt.analysis {
            for line in analysis.to_string().lines() {
                println!("    {line}");
            }
        }
    }
    println!();

    // 3. Traffic, then reroute.
    let report = nav.apply_traffic(&[
        TrafficUpdate::named("Senate Building", "University Library", "construction"),
        TrafficUpdate::named("Security Post", "Administrative Block", "heavy_traffic"),
        TrafficUpdate::named("Main Gate", "Lagoon Jetty", "closed"),
    ]);
    println!("Traffic: {} updates applied", report.applied_count);
    for d in &report.details {
        println!("  {:<45} {:<14} {}", d.edge, d.condition, d.status.as_str());
    }
    let rerouted = nav.shortest_path(from, to, false);
    println!(
        "Rerouted {from} → {to}: {} ({:?})",
        rerouted.path.join(" → "),
        rerouted.distance
    );
    let ack = nav.reset_graph();
    println!("Reset: {} overrides discarded", ack.overrides_discarded);
    println!();

    // 4. Emergency routing.
    for category in ["medical", "security", "fire", "evacuation"] {
        let resp = nav.emergency_route("Faculty of Engineering", category)?;
        match &resp.best_route {
            Some(best) => println!(
                "Emergency {category:<10} → {} ({:.0}, ~{} min at emergency pace)",
                best.destination, best.distance, best.estimated_minutes
            ),
            None => println!("Emergency {category:<10} → none reachable"),
        }
    }
    println!();

    // 5. Snap a raw coordinate to the map.
    if let Some(near) = nav.nearest_location(6.5180, 3.3945) {
        println!("Nearest to (6.5180, 3.3945): {} ({:.3} km)", near.name, near.distance_km);
    }

    println!();
    println!("{}", serde_json::to_string_pretty(&nav.shortest_path("Main Gate", "Health Centre", false))?);
    Ok(())
}
