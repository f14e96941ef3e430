//! Error type

/// Errors raised while assembling elements or checking their maps
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A caller-side precondition does not hold
    #[error("Precondition violated: {0}")]
    Precondition(String),
    /// An id was referenced before being added to the builder
    #[error("Unknown {kind} id: {id}")]
    UnknownEntity {
        /// Entity kind
        kind: &'static str,
        /// Id that could not be resolved
        id: usize,
    },
    /// An id was added to the builder twice
    #[error("Duplicate {kind} id: {id}")]
    DuplicateEntity {
        /// Entity kind
        kind: &'static str,
        /// Id that was added twice
        id: usize,
    },
    /// Faces and edges do not describe a pyramid
    #[error("Invalid topology: {0}")]
    InvalidTopology(String),
    /// The element map is not valid
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),
    /// A mapping produced non-finite values
    #[error("Numeric anomaly in element {element_id} at sample {sample:?}: {reason}")]
    NumericAnomaly {
        /// Id of the element
        element_id: usize,
        /// Reference sample being checked
        sample: [f64; 3],
        /// Description of the anomaly
        reason: String,
    },
    /// Forward and inverse maps, or the two forward maps, disagree
    #[error("Consistency violation in element {element_id} at sample {sample:?}: {reason}")]
    ConsistencyViolation {
        /// Id of the element
        element_id: usize,
        /// Reference sample being checked
        sample: [f64; 3],
        /// Description of the measured violation
        reason: String,
    },
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;
