#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    // -- Resolution errors: an upstream collaborator could not satisfy the
    // request. Never retried here; retry policy belongs to the caller.
    #[error("Wells unresolvable: {0}")]
    WellsUnresolvable(String),

    #[error("No active measurement for plate {0}")]
    NoActiveMeasurement(i64),

    #[error("Result set unresolvable: {0}")]
    ResultSetUnresolvable(String),

    #[error("Result data unresolvable: {0}")]
    ResultDataUnresolvable(String),

    #[error("Protocol unresolvable: {0}")]
    ProtocolUnresolvable(String),

    #[error("Feature stats unresolvable: {0}")]
    FeatureStatUnresolvable(String),

    // -- Configuration errors: the caller supplied an invalid parameter.
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Unknown field type: {0}")]
    UnknownFieldType(String),

    #[error("Unsupported groupBy: {0}")]
    UnsupportedGroupBy(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // -- Integrity errors: index misalignment between joined vectors.
    #[error("Result vector for feature {feature_id} has {actual} values, expected {expected} (one per well)")]
    LengthMismatch {
        feature_id: i64,
        expected: usize,
        actual: usize,
    },

    // -- Reconciliation errors.
    #[error("Chart template not found: {0}")]
    TemplateNotFound(i64),

    #[error("Setting not found: {0}")]
    SettingNotFound(i64),
}

impl ChartError {
    /// Whether this error is caused by invalid caller input rather than a
    /// failed upstream resolution. Transports map this distinction to their
    /// "bad request" vs "not found" classes.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ChartError::UnknownField(_)
                | ChartError::UnknownFieldType(_)
                | ChartError::UnsupportedGroupBy(_)
                | ChartError::InvalidArgument(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
