use crate::error::SolveError;

/// Check a returned assignment against the formulation contract: one value
/// per variable, every value in {0,1}.
///
/// A negative entry is reported as its own violation rather than clamped;
/// it points at an engine/formulation mismatch that must surface loudly.
pub fn validate_witness(num_vars: usize, assignment: &[i64]) -> Result<(), SolveError> {
    if assignment.len() != num_vars {
        return Err(SolveError::ContractViolation(format!(
            "engine returned {} values for {} variables",
            assignment.len(),
            num_vars,
        )));
    }

    for (i, &value) in assignment.iter().enumerate() {
        if value < 0 {
            return Err(SolveError::ContractViolation(format!(
                "variable {} has negative value {}",
                i, value,
            )));
        }
        if value > 1 {
            return Err(SolveError::ContractViolation(format!(
                "variable {} has value {} outside {{0,1}}",
                i, value,
            )));
        }
    }

    Ok(())
}
