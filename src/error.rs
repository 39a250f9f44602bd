use thiserror::Error;

pub type PanZoomResult<T> = Result<T, PanZoomError>;

#[derive(Debug, Error)]
pub enum PanZoomError {
    #[error("invalid chart area: left={left}, right={right}, top={top}, bottom={bottom}")]
    InvalidChartArea {
        left: f64,
        right: f64,
        top: f64,
        bottom: f64,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
