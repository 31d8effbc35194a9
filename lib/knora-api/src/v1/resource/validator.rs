//! Structural checks on the parallel-array shapes.

use super::{Property, ResourceContext};
use crate::v1::error::ResponseValidationError;

/// Every populated value array of a property must have the same length; the
/// Nth entry of each array describes the Nth value.
pub fn throw_if_parallel_arrays_mismatched(
    property: &Property,
) -> Result<(), ResponseValidationError> {
    let lengths: Vec<usize> = [
        property.values.as_ref().map(Vec::len),
        property.comments.as_ref().map(Vec::len),
        property.value_ids.as_ref().map(Vec::len),
        property.value_rights.as_ref().map(Vec::len),
        property.value_restype.as_ref().map(Vec::len),
        property.value_firstprops.as_ref().map(Vec::len),
        property.value_iconsrcs.as_ref().map(Vec::len),
    ]
    .into_iter()
    .flatten()
    .collect();

    if lengths.windows(2).any(|pair| pair[0] != pair[1]) {
        return Err(ResponseValidationError::PropertyArraysMismatched {
            pid: property.pid.clone(),
            lengths,
        });
    }

    Ok(())
}

/// Every populated array of a context must have one entry per depending
/// resource.
pub fn throw_if_context_arrays_mismatched(
    context: &ResourceContext,
) -> Result<(), ResponseValidationError> {
    let lengths: Vec<usize> = [
        context.res_id.as_ref().map(Vec::len),
        context.firstprop.as_ref().map(Vec::len),
        context.preview.as_ref().map(Vec::len),
        context.locations.as_ref().map(Vec::len),
        context.region.as_ref().map(Vec::len),
    ]
    .into_iter()
    .flatten()
    .collect();

    if lengths.windows(2).any(|pair| pair[0] != pair[1]) {
        return Err(ResponseValidationError::ContextArraysMismatched {
            res_id: context.canonical_res_id.clone(),
            lengths,
        });
    }

    Ok(())
}
