use std::error::Error;

/// Reasons a single input line is skipped. None of these abort the run.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("empty line")]
    EmptyLine,

    #[error("missing/invalid result token at end (got '{token}')")]
    InvalidResult { token: String },

    #[error("bad SAN '{san}' at ply {ply}: {cause}")]
    BadMove {
        san: String,
        ply: u32,
        #[source]
        cause: Box<dyn Error + Send + Sync>,
    },
}

impl ConversionError {
    pub fn bad_move(
        san: &str,
        ply: u32,
        cause: impl Into<Box<dyn Error + Send + Sync>>,
    ) -> Self {
        Self::BadMove {
            san: san.to_string(),
            ply,
            cause: cause.into(),
        }
    }
}
