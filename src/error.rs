use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShotScopeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("carry distance {carry_yds} yds is shorter than the lateral offset {lateral_yds} yds")]
    InvalidCarryGeometry { carry_yds: f64, lateral_yds: f64 },

    #[error("launch angle {angle_deg} deg at {speed_mph} mph has no apex")]
    NonPositiveLaunch { angle_deg: f64, speed_mph: f64 },

    #[error("no shots in group")]
    EmptyGroup,

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type ScopeResult<T> = Result<T, ShotScopeError>;
