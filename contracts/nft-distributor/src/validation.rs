use crate::*;
use std::collections::HashSet;

pub(crate) fn validate_cohort_id(cohort_id: &str) -> Result<(), DistributorError> {
    if cohort_id.is_empty() || cohort_id.len() > MAX_COHORT_ID_LEN {
        return Err(DistributorError::InvalidInput(format!(
            "cohort id must be 1-{} characters",
            MAX_COHORT_ID_LEN
        )));
    }
    // `:` separates cohort id and serial in token ids.
    if cohort_id.contains(DELIMETER) || cohort_id.contains('\0') {
        return Err(DistributorError::InvalidInput(
            "cohort id cannot contain ':' or null characters".into(),
        ));
    }
    Ok(())
}

pub(crate) fn validate_cohort_limit(limit: u32) -> Result<(), DistributorError> {
    if limit == 0 || limit > MAX_COHORT_LIMIT {
        return Err(DistributorError::InvalidInput(format!(
            "cohort limit must be 1-{}",
            MAX_COHORT_LIMIT
        )));
    }
    Ok(())
}

pub(crate) fn validate_base_uri(base_uri: &str) -> Result<(), DistributorError> {
    if base_uri.len() > MAX_BASE_URI_LEN {
        return Err(DistributorError::InvalidInput(format!(
            "base uri exceeds max length of {} bytes",
            MAX_BASE_URI_LEN
        )));
    }
    Ok(())
}

/// Checks the parallel deployment arrays and zips them into `(id, limit, token_mints)` rows.
pub(crate) fn validate_cohort_params(
    cohort_ids: Vec<String>,
    limits: &[u32],
    token_mints: &[u32],
) -> Result<Vec<(String, u32, u32)>, DistributorError> {
    if cohort_ids.len() != limits.len() || cohort_ids.len() != token_mints.len() {
        return Err(DistributorError::InvalidInput(format!(
            "cohort arrays length mismatch: {} ids, {} limits, {} token mints",
            cohort_ids.len(),
            limits.len(),
            token_mints.len()
        )));
    }
    if cohort_ids.len() > MAX_COHORTS {
        return Err(DistributorError::InvalidInput(format!(
            "too many cohorts (max {})",
            MAX_COHORTS
        )));
    }

    let mut seen = HashSet::with_capacity(cohort_ids.len());
    let mut rows = Vec::with_capacity(cohort_ids.len());
    for ((cohort_id, &limit), &minted) in cohort_ids.into_iter().zip(limits).zip(token_mints) {
        validate_cohort_id(&cohort_id)?;
        validate_cohort_limit(limit)?;
        if minted > limit {
            return Err(DistributorError::InvalidInput(format!(
                "cohort {} has token mints {} above limit {}",
                cohort_id, minted, limit
            )));
        }
        if !seen.insert(cohort_id.clone()) {
            return Err(DistributorError::InvalidInput(format!(
                "duplicate cohort id: {}",
                cohort_id
            )));
        }
        rows.push((cohort_id, limit, minted));
    }
    Ok(rows)
}
