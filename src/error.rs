use std::collections::TryReserveError;
use std::fmt;

/// Reasons a simulation could not be built.
#[derive(Debug)]
pub enum SimulationError {
    /// Body storage for `requested` bodies could not be reserved.
    Allocation {
        requested: usize,
        source: TryReserveError,
    },
    InvalidConfig(&'static str),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::Allocation { requested, .. } => {
                write!(f, "could not allocate storage for {requested} bodies")
            }
            SimulationError::InvalidConfig(reason) => write!(f, "invalid configuration: {reason}"),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::Allocation { source, .. } => Some(source),
            SimulationError::InvalidConfig(_) => None,
        }
    }
}
