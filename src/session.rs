use crate::processor;
use crate::shot::{EnrichedShot, MetricField, ShotRecord, SkippedShot};
use crate::stats::{self, AxisBounds, SummaryStats};
use rayon::prelude::*;
use serde::Serialize;
use tracing::warn;

/// One (player, club) pair in first-seen session order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GroupKey {
    pub player: String,
    pub club: String,
}

/// Everything a reporting collaborator needs for one group: the enriched
/// shots in row order (the plotting stage draws origin -> apex -> landing
/// per shot), the summary table rows, and the axis extremes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupReport {
    pub player: String,
    pub club: String,
    pub shots: Vec<EnrichedShot>,
    pub stats: Vec<SummaryStats>,
    pub bounds: AxisBounds,
    pub skipped: Vec<SkippedShot>,
}

fn first_seen<'a>(records: &'a [ShotRecord], pick: impl Fn(&'a ShotRecord) -> &'a str) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    for record in records {
        let value = pick(record);
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

/// Split a session into (player, club) groups: players in first-seen order,
/// clubs in first-seen order within each player pass, empty combinations
/// dropped. Rows inside a group keep their session order.
pub fn partition(records: &[ShotRecord]) -> Vec<(GroupKey, Vec<ShotRecord>)> {
    let players = first_seen(records, |r| r.player.as_str());
    let clubs = first_seen(records, |r| r.club.as_str());

    let mut groups = Vec::new();
    for player in &players {
        for club in &clubs {
            let rows: Vec<ShotRecord> = records
                .iter()
                .filter(|r| r.player == *player && r.club == *club)
                .cloned()
                .collect();
            if !rows.is_empty() {
                groups.push((
                    GroupKey {
                        player: (*player).to_string(),
                        club: (*club).to_string(),
                    },
                    rows,
                ));
            }
        }
    }
    groups
}

/// Run the full pipeline over a session. Groups are independent, so they run
/// on the rayon pool; the output order still matches `partition`. A group
/// whose every shot fails enrichment produces no report.
pub fn analyze(records: &[ShotRecord], fields: &[MetricField]) -> Vec<GroupReport> {
    let groups = partition(records);

    groups
        .par_iter()
        .filter_map(|(key, rows)| {
            let (shots, skipped) = processor::process_lossy(rows);
            if shots.is_empty() {
                warn!("no usable shots for {} / {}", key.player, key.club);
                return None;
            }

            // shots is non-empty here, so neither call can see EmptyGroup.
            let stats = stats::summarize(&shots, fields).ok()?;
            let bounds = AxisBounds::from_shots(&shots).ok()?;

            Some(GroupReport {
                player: key.player.clone(),
                club: key.club.clone(),
                shots,
                stats,
                bounds,
                skipped,
            })
        })
        .collect()
}
