use crate::consts::{GRAV_ACCEL_MPS2, METERS_TO_YARDS, MPH_TO_MPS};
use crate::error::{ScopeResult, ShotScopeError};

/// The highest point of a shot's modeled flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Apex {
    pub height_yds: f64,
    /// Horizontal distance covered by apex time, along the initial velocity
    /// direction.
    pub along_path_yds: f64,
    pub time_to_apex_s: f64,
}

/// No-drag apex for a ball launched at `angle_deg` degrees and `speed_mph`.
///
/// Vacuum kinematics: t = vy/g, h = vy^2/2g, d = vx*t, with the velocity
/// decomposed in m/s and the outputs converted to yards. The model carries no
/// drag or spin; it is only used to place the apex on the measured path.
pub fn apex(angle_deg: f64, speed_mph: f64) -> ScopeResult<Apex> {
    if angle_deg <= 0.0 || speed_mph <= 0.0 {
        return Err(ShotScopeError::NonPositiveLaunch {
            angle_deg,
            speed_mph,
        });
    }

    let theta = angle_deg.to_radians();
    let speed_mps = speed_mph * MPH_TO_MPS;
    let xvel = speed_mps * theta.cos();
    let yvel = speed_mps * theta.sin();

    let time_to_apex_s = yvel / GRAV_ACCEL_MPS2;
    let height_yds = METERS_TO_YARDS * (yvel * yvel) / (2.0 * GRAV_ACCEL_MPS2);
    let along_path_yds = METERS_TO_YARDS * xvel * time_to_apex_s;

    Ok(Apex {
        height_yds,
        along_path_yds,
        time_to_apex_s,
    })
}
