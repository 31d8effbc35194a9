use shared_types::{PropertyTypeIri, ResourceIri};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResponseValidationError {
    #[error("Parallel arrays of property `{pid}` have mismatched lengths `{lengths:?}`")]
    PropertyArraysMismatched {
        pid: PropertyTypeIri,
        lengths: Vec<usize>,
    },
    #[error("Context arrays of resource `{res_id}` have mismatched lengths `{lengths:?}`")]
    ContextArraysMismatched {
        res_id: ResourceIri,
        lengths: Vec<usize>,
    },
}
