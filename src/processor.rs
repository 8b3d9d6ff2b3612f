use crate::error::ScopeResult;
use crate::interpolate;
use crate::shot::{EnrichedShot, ShotRecord, SkippedShot};
use crate::trajectory;
use tracing::warn;

/// Derive the full trajectory record for one shot: straight distance, apex,
/// then the apex's position on the measured path.
pub fn enrich(shot: &ShotRecord) -> ScopeResult<EnrichedShot> {
    let straight_distance_yds =
        interpolate::straight_distance(shot.carry_distance_yds, shot.lateral_distance_yds)?;
    let apex = trajectory::apex(shot.launch_angle_deg, shot.ball_speed_mph)?;
    let point = interpolate::apex_point(
        apex.along_path_yds,
        shot.carry_distance_yds,
        straight_distance_yds,
        shot.lateral_distance_yds,
    );

    if point.extrapolated {
        warn!(
            "{} / {}: modeled apex at {:.1} yds is past the {:.1} yd carry",
            shot.player, shot.club, apex.along_path_yds, shot.carry_distance_yds
        );
    }

    Ok(EnrichedShot {
        record: shot.clone(),
        straight_distance_yds,
        apex_height_yds: apex.height_yds,
        apex_along_path_yds: apex.along_path_yds,
        apex_x_yds: point.x_yds,
        apex_y_yds: point.y_yds,
        apex_extrapolated: point.extrapolated,
    })
}

/// Enrich a whole group, failing on the first bad shot. Input order is
/// preserved; downstream trajectory plotting draws segments in row order.
/// An empty group yields an empty vector, not an error.
pub fn process(shots: &[ShotRecord]) -> ScopeResult<Vec<EnrichedShot>> {
    shots.iter().map(enrich).collect()
}

/// Enrich a group, skipping shots the model rejects instead of aborting.
/// Returns the surviving shots in input order plus one entry per skip.
pub fn process_lossy(shots: &[ShotRecord]) -> (Vec<EnrichedShot>, Vec<SkippedShot>) {
    let mut kept = Vec::with_capacity(shots.len());
    let mut skipped = Vec::new();

    for (row, shot) in shots.iter().enumerate() {
        match enrich(shot) {
            Ok(enriched) => kept.push(enriched),
            Err(e) => {
                warn!("skipping shot {} of {} / {}: {}", row, shot.player, shot.club, e);
                skipped.push(SkippedShot {
                    row,
                    reason: e.to_string(),
                });
            }
        }
    }

    (kept, skipped)
}
