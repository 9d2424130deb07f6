/// Errors raised for caller misuse of the geometry kernel.
///
/// Geometric degeneracy (parallel segments, vertical slopes, unmatched
/// intersection classes) is reported through return values, never here.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeomError {
    #[error("non-finite coordinate: ({x}, {y}, {z})")]
    NonFiniteCoordinate { x: f64, y: f64, z: f64 },

    #[error("lerp increment must be finite and positive, got {0}")]
    InvalidIncrement(f64),

    #[error("lerp bounds must be finite, got {from} -> {to}")]
    NonFiniteBounds { from: f64, to: f64 },

    #[error("lerp from {from} to {to} by {max_increment} needs more steps than can be counted")]
    TooManySteps { from: f64, to: f64, max_increment: f64 },
}
