use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Principal must be at least 100, got {0}")]
    PrincipalOutOfRange(f64),

    #[error("Annual rate must be between 1.0 and 20.0 percent, got {0}")]
    RateOutOfRange(f64),

    #[error("Loan term must be between 1 and 30 years, got {0}")]
    TermOutOfRange(u32),
}
