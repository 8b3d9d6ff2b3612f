use shotscope::error::ShotScopeError;
use shotscope::processor::{enrich, process, process_lossy};
use shotscope::shot::ShotRecord;

fn shot(angle: f64, speed: f64, carry: f64, lateral: f64) -> ShotRecord {
    ShotRecord {
        player: "Sam".to_string(),
        club: "7 Iron".to_string(),
        launch_angle_deg: angle,
        ball_speed_mph: speed,
        carry_distance_yds: carry,
        lateral_distance_yds: lateral,
        total_distance_yds: Some(carry + 8.0),
        club_speed_mph: Some(speed / 1.4),
        smash_factor: Some(1.4),
        total_spin_rpm: Some(6200.0),
    }
}

#[test]
fn test_enrich_derives_consistent_geometry() {
    let enriched = enrich(&shot(18.0, 120.0, 165.0, -9.0)).unwrap();

    // The straight/lateral pair must recompose the measured carry.
    let recomposed = (enriched.straight_distance_yds * enriched.straight_distance_yds
        + enriched.record.lateral_distance_yds * enriched.record.lateral_distance_yds)
        .sqrt();
    assert!((recomposed - 165.0).abs() < 1e-9);

    assert!(enriched.apex_height_yds > 0.0);
    assert!(enriched.apex_along_path_yds > 0.0);

    // Apex point sits on the chord, so its components scale together.
    let t = enriched.apex_along_path_yds / 165.0;
    assert!((enriched.apex_x_yds - t * -9.0).abs() < 1e-9);
    assert!((enriched.apex_y_yds - t * enriched.straight_distance_yds).abs() < 1e-9);
}

#[test]
fn test_enrich_passes_measurements_through_untouched() {
    let record = shot(18.0, 120.0, 165.0, -9.0);
    let enriched = enrich(&record).unwrap();
    assert_eq!(enriched.record, record);
}

#[test]
fn test_enrich_rejects_bad_carry_geometry() {
    match enrich(&shot(18.0, 120.0, 100.0, 120.0)) {
        Err(ShotScopeError::InvalidCarryGeometry { .. }) => {}
        other => panic!("expected InvalidCarryGeometry, got {:?}", other),
    }
}

#[test]
fn test_enrich_rejects_non_positive_launch() {
    match enrich(&shot(-2.0, 120.0, 165.0, 0.0)) {
        Err(ShotScopeError::NonPositiveLaunch { .. }) => {}
        other => panic!("expected NonPositiveLaunch, got {:?}", other),
    }
}

#[test]
fn test_enrich_flags_apex_beyond_landing() {
    // 45 deg at 100 mph models the apex ~111 yds out; a 60 yd carry means the
    // ball "landed" while still climbing.
    let enriched = enrich(&shot(45.0, 100.0, 60.0, 0.0)).unwrap();
    assert!(enriched.apex_extrapolated);
    assert!(enriched.apex_y_yds > enriched.straight_distance_yds);
}

#[test]
fn test_process_empty_group_is_empty_not_error() {
    let enriched = process(&[]).unwrap();
    assert!(enriched.is_empty());
}

#[test]
fn test_process_preserves_input_order() {
    let shots = vec![
        shot(18.0, 120.0, 165.0, -9.0),
        shot(14.0, 150.0, 230.0, 22.0),
        shot(22.0, 110.0, 150.0, 0.0),
    ];
    let enriched = process(&shots).unwrap();
    assert_eq!(enriched.len(), 3);
    for (e, s) in enriched.iter().zip(&shots) {
        assert_eq!(e.record.carry_distance_yds, s.carry_distance_yds);
    }
}

#[test]
fn test_process_fails_fast_on_bad_shot() {
    let shots = vec![
        shot(18.0, 120.0, 165.0, -9.0),
        shot(0.0, 120.0, 165.0, 0.0),
        shot(22.0, 110.0, 150.0, 0.0),
    ];
    assert!(process(&shots).is_err());
}

#[test]
fn test_process_is_idempotent() {
    let shots = vec![
        shot(18.0, 120.0, 165.0, -9.0),
        shot(14.0, 150.0, 230.0, 22.0),
    ];
    let first = process(&shots).unwrap();
    let second = process(&shots).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_process_lossy_skips_and_continues() {
    let shots = vec![
        shot(18.0, 120.0, 165.0, -9.0),
        shot(18.0, 120.0, 100.0, 120.0), // lateral beyond carry
        shot(22.0, 110.0, 150.0, 0.0),
    ];
    let (kept, skipped) = process_lossy(&shots);

    assert_eq!(kept.len(), 2);
    assert_eq!(kept[0].record.carry_distance_yds, 165.0);
    assert_eq!(kept[1].record.carry_distance_yds, 150.0);

    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].row, 1);
    assert!(skipped[0].reason.contains("lateral"));
}

#[test]
fn test_process_lossy_clean_group_has_no_skips() {
    let shots = vec![shot(18.0, 120.0, 165.0, -9.0)];
    let (kept, skipped) = process_lossy(&shots);
    assert_eq!(kept.len(), 1);
    assert!(skipped.is_empty());
}
