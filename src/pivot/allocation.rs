use crate::domain::{OwnerAllocation, PersonId};

/// Share of `value` that one contribution of a line item carries.
///
/// Unowned items always keep their full value. `SplitEven` divides by the
/// owner count so the per-owner contributions add back up to `value`.
pub fn allocated_value(value: f64, owners: &[PersonId], allocation: OwnerAllocation) -> f64 {
    if owners.is_empty() {
        return value;
    }
    match allocation {
        OwnerAllocation::FullValue => value,
        OwnerAllocation::SplitEven => value / owners.len() as f64,
    }
}
