use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// One row of a launch-monitor session export. Field names follow the
/// monitor's column contract (LaunchV is the vertical launch angle).
/// The trailing measurements are optional pass-throughs: the monitor does not
/// always report them, and the core never touches their values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotRecord {
    #[serde(rename = "Player")]
    pub player: String,

    #[serde(rename = "Club")]
    pub club: String,

    #[serde(rename = "LaunchV")]
    pub launch_angle_deg: f64,

    #[serde(rename = "BallSpeed")]
    pub ball_speed_mph: f64,

    #[serde(rename = "CarryDistance")]
    pub carry_distance_yds: f64,

    /// Signed: negative is left of the target line.
    #[serde(rename = "LateralDistance")]
    pub lateral_distance_yds: f64,

    #[serde(rename = "TotalDistance", default)]
    pub total_distance_yds: Option<f64>,

    #[serde(rename = "ClubSpeed", default)]
    pub club_speed_mph: Option<f64>,

    #[serde(rename = "SmashFactor", default)]
    pub smash_factor: Option<f64>,

    #[serde(rename = "TotalSpin", default)]
    pub total_spin_rpm: Option<f64>,
}

/// A shot plus everything the trajectory engine derived from it.
///
/// The apex point lives on the straight chord from the origin to the landing
/// point: `apex_x_yds` is the lateral component, `apex_y_yds` the component
/// along the target line. `apex_extrapolated` is set when the vacuum model
/// places the apex past the measured landing point (t > 1).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedShot {
    #[serde(flatten)]
    pub record: ShotRecord,

    pub straight_distance_yds: f64,
    pub apex_height_yds: f64,
    pub apex_along_path_yds: f64,
    pub apex_x_yds: f64,
    pub apex_y_yds: f64,
    pub apex_extrapolated: bool,
}

/// A shot dropped by lossy processing, with the input row it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedShot {
    pub row: usize,
    pub reason: String,
}

/// Columns that can be summarized per group. Names parse from and display as
/// the external column contract, so `--fields CarryDistance,BallSpeed` works
/// verbatim against a session export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize)]
pub enum MetricField {
    CarryDistance,
    TotalDistance,
    ClubSpeed,
    BallSpeed,
    SmashFactor,
    TotalSpin,
    LateralDistance,
    StraightDistance,
    ApexHeight,
}

impl MetricField {
    /// Pull this column's value out of an enriched shot. `None` means the
    /// monitor did not report the measurement for that shot.
    pub fn extract(&self, shot: &EnrichedShot) -> Option<f64> {
        match self {
            Self::CarryDistance => Some(shot.record.carry_distance_yds),
            Self::TotalDistance => shot.record.total_distance_yds,
            Self::ClubSpeed => shot.record.club_speed_mph,
            Self::BallSpeed => Some(shot.record.ball_speed_mph),
            Self::SmashFactor => shot.record.smash_factor,
            Self::TotalSpin => shot.record.total_spin_rpm,
            Self::LateralDistance => Some(shot.record.lateral_distance_yds),
            Self::StraightDistance => Some(shot.straight_distance_yds),
            Self::ApexHeight => Some(shot.apex_height_yds),
        }
    }

    /// Decimal places used when the column is rendered in a table.
    pub fn precision(&self) -> usize {
        match self {
            Self::SmashFactor => 2,
            Self::TotalSpin => 0,
            _ => 1,
        }
    }
}

/// The club labels a stock launch monitor emits. A shot's club stays a
/// free-form string key so unseen labels group and report normally; this set
/// only backs the audit warning for likely typos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum KnownClub {
    #[strum(serialize = "Driver")]
    Driver,
    #[strum(serialize = "3 Wood")]
    ThreeWood,
    #[strum(serialize = "5 Wood")]
    FiveWood,
    #[strum(serialize = "3 Hybrid")]
    ThreeHybrid,
    #[strum(serialize = "4 Hybrid")]
    FourHybrid,
    #[strum(serialize = "3 Iron")]
    ThreeIron,
    #[strum(serialize = "4 Iron")]
    FourIron,
    #[strum(serialize = "5 Iron")]
    FiveIron,
    #[strum(serialize = "6 Iron")]
    SixIron,
    #[strum(serialize = "7 Iron")]
    SevenIron,
    #[strum(serialize = "8 Iron")]
    EightIron,
    #[strum(serialize = "9 Iron")]
    NineIron,
    #[strum(serialize = "Pitching Wedge", serialize = "PW")]
    PitchingWedge,
    #[strum(serialize = "Gap Wedge", serialize = "GW")]
    GapWedge,
    #[strum(serialize = "Sand Wedge", serialize = "SW")]
    SandWedge,
    #[strum(serialize = "Lob Wedge", serialize = "LW")]
    LobWedge,
    #[strum(serialize = "Putter")]
    Putter,
}

pub fn is_known_club(label: &str) -> bool {
    KnownClub::from_str(label.trim()).is_ok()
}
