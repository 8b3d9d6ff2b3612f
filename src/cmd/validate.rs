use crate::reports;
use clap::Args;
use shotscope::processor;
use shotscope::session;
use shotscope::shot::{is_known_club, KnownClub, ShotRecord};
use strum::IntoEnumIterator;

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Only audit groups whose player name contains this (case-insensitive).
    #[arg(short, long)]
    pub player: Option<String>,
}

pub fn run(args: ValidateArgs, shots: &[ShotRecord]) {
    println!("\n🔎 === SESSION AUDIT === 🔎");

    let filtered: Vec<ShotRecord> = match &args.player {
        Some(f) => shots
            .iter()
            .filter(|s| s.player.to_lowercase().contains(&f.to_lowercase()))
            .cloned()
            .collect(),
        None => shots.to_vec(),
    };

    let groups = session::partition(&filtered);
    println!(
        "\nShots: {}   Groups: {}",
        filtered.len(),
        groups.len()
    );

    // Club labels outside the stock set are usually typos in the monitor's
    // club picker, but they still group and report normally.
    let mut unknown: Vec<&str> = Vec::new();
    for (key, _) in &groups {
        if !is_known_club(&key.club) && !unknown.contains(&key.club.as_str()) {
            unknown.push(&key.club);
        }
    }
    if !unknown.is_empty() {
        println!("⚠️  Unrecognized club labels: {}", unknown.join(", "));
        let known: Vec<String> = KnownClub::iter().map(|c| c.to_string()).collect();
        println!("    (stock set: {})", known.join(", "));
    }

    reports::print_audit_table(&groups);

    // Dry-run the trajectory model so bad rows surface before a report run.
    let mut issues: Vec<(String, String, usize, String)> = Vec::new();
    for (key, rows) in &groups {
        let (_, skipped) = processor::process_lossy(rows);
        for skip in skipped {
            issues.push((
                key.player.clone(),
                key.club.clone(),
                skip.row,
                skip.reason,
            ));
        }
    }

    if issues.is_empty() {
        println!("\n✅ Every shot passes the trajectory model.");
    } else {
        reports::print_issue_table(&issues);
    }
}
