use crate::reports;
use clap::Args;
use shotscope::config::ReportConfig;
use shotscope::session::{self, GroupReport};
use shotscope::shot::ShotRecord;
use std::fs::File;
use std::process;
use tracing::{error, info, warn};

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub config: ReportConfig,

    /// Write the full analysis (enriched shots, stats, bounds) as JSON for
    /// the plotting stage.
    #[arg(long)]
    pub json: Option<String>,
}

fn matches_filter(value: &str, filter: &Option<String>) -> bool {
    match filter {
        Some(f) => value.to_lowercase().contains(&f.to_lowercase()),
        None => true,
    }
}

pub fn run(args: ReportArgs, shots: &[ShotRecord]) {
    let fields = args.config.metric_fields().unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    let groups: Vec<GroupReport> = session::analyze(shots, &fields)
        .into_iter()
        .filter(|g| {
            matches_filter(&g.player, &args.config.player)
                && matches_filter(&g.club, &args.config.club)
        })
        .collect();

    if groups.is_empty() {
        warn!("⚠️  No groups to report.");
        return;
    }

    println!("\n⛳ === SESSION REPORT === ⛳");
    reports::print_session_overview(&groups);

    for group in &groups {
        reports::print_group_summary(group);
    }

    if let Some(path) = &args.json {
        match export_json(path, &groups) {
            Ok(()) => info!("📝 Wrote analysis to {}", path),
            Err(e) => {
                error!("❌ Failed to write {}: {}", path, e);
                process::exit(1);
            }
        }
    }
}

fn export_json(path: &str, groups: &[GroupReport]) -> shotscope::error::ScopeResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, groups)?;
    Ok(())
}
