/// Boundary validation failures for wardrobe writes.
///
/// Not-found is deliberately absent: lookups and updates by id report
/// presence through their return value instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("unknown {kind} value: {value:?}")]
    UnknownValue { kind: &'static str, value: String },

    #[error("name must not be empty")]
    EmptyName,

    #[error("an outfit needs at least {required} items, got {actual}")]
    TooFewItems { required: usize, actual: usize },
}
