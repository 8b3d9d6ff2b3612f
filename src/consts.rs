// ===== shotscope/src/consts.rs =====
/// Standard gravitational acceleration, m/s^2.
pub const GRAV_ACCEL_MPS2: f64 = 9.80665;

/// Meters to yards.
pub const METERS_TO_YARDS: f64 = 1.09361;

/// Miles per hour to meters per second.
pub const MPH_TO_MPS: f64 = 0.44704;

/// Columns summarized per club when no --fields override is given.
/// Matches the launch monitor's export naming.
pub const DEFAULT_REPORT_FIELDS: &str =
    "CarryDistance,TotalDistance,ClubSpeed,BallSpeed,SmashFactor,TotalSpin";
