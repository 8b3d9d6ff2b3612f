use crate::error::{ScopeResult, ShotScopeError};

/// Apex position on the (lateral, along-line) ground plane, plus the
/// extrapolation flag for apexes the model places past the landing point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApexPoint {
    pub x_yds: f64,
    pub y_yds: f64,
    pub extrapolated: bool,
}

/// Ground distance along the target line, from the measured carry hypotenuse
/// and the signed lateral offset.
pub fn straight_distance(carry_yds: f64, lateral_yds: f64) -> ScopeResult<f64> {
    if carry_yds < lateral_yds.abs() {
        return Err(ShotScopeError::InvalidCarryGeometry {
            carry_yds,
            lateral_yds,
        });
    }
    Ok((carry_yds * carry_yds - lateral_yds * lateral_yds).sqrt())
}

/// Place the apex on the straight chord from the origin to the landing point.
///
/// The interpolation fraction is the apex's share of the carry distance
/// (t = 0 for degenerate zero-carry shots). The chord is not clamped: t > 1
/// means the vacuum model has the ball still rising when it landed, and the
/// returned point extrapolates beyond the landing spot with `extrapolated`
/// set. The chord assumption reconstructs no curvature, only where along the
/// measured path the apex height occurs.
pub fn apex_point(
    along_path_yds: f64,
    carry_yds: f64,
    straight_yds: f64,
    lateral_yds: f64,
) -> ApexPoint {
    let t = if carry_yds > 0.0 {
        along_path_yds / carry_yds
    } else {
        0.0
    };

    ApexPoint {
        x_yds: t * lateral_yds,
        y_yds: t * straight_yds,
        extrapolated: t > 1.0,
    }
}
