use crate::guards::check_one_yocto;
use crate::validation::{validate_cohort_id, validate_cohort_limit};
use crate::*;

#[near]
impl Contract {
    #[payable]
    #[handle_result]
    pub fn add_cohort(&mut self, cohort_id: String, limit: u32) -> Result<(), DistributorError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        validate_cohort_id(&cohort_id)?;
        validate_cohort_limit(limit)?;
        if self.cohorts.contains_key(&cohort_id) {
            return Err(DistributorError::InvalidInput(format!(
                "cohort already exists: {}",
                cohort_id
            )));
        }
        if self.cohorts.len() as usize >= MAX_COHORTS {
            return Err(DistributorError::InvalidState(format!(
                "too many cohorts (max {})",
                MAX_COHORTS
            )));
        }
        self.insert_cohort(cohort_id, limit, 0);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn set_cohort_limit(&mut self, cohort_id: String, limit: u32) -> Result<(), DistributorError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        validate_cohort_limit(limit)?;
        let cohort = self
            .cohorts
            .get_mut(&cohort_id)
            .ok_or_else(DistributorError::cohort_not_found)?;
        if limit < cohort.token_mints {
            return Err(DistributorError::InvalidInput(format!(
                "limit {} is below tokens already issued ({})",
                limit, cohort.token_mints
            )));
        }
        let old_limit = cohort.limit;
        cohort.limit = limit;
        events::emit_cohort_limit_updated(&self.owner_id, &cohort_id, old_limit, limit);
        Ok(())
    }
}

impl Contract {
    pub(crate) fn insert_cohort(&mut self, cohort_id: String, limit: u32, token_mints: u32) {
        let cohort = Cohort {
            cohort_id: cohort_id.clone(),
            limit,
            token_mints,
            created_at: env::block_timestamp(),
        };
        self.cohorts.insert(cohort_id.clone(), cohort);
        events::emit_cohort_created(&env::predecessor_account_id(), &cohort_id, limit, token_mints);
    }

    /// Claims `count` slots in a cohort and returns the first serial issued.
    /// Nothing is written when the cohort lacks room for the whole request.
    pub(crate) fn reserve_cohort_mints(
        &mut self,
        cohort_id: &str,
        count: u32,
    ) -> Result<u32, DistributorError> {
        let cohort = self
            .cohorts
            .get_mut(cohort_id)
            .ok_or_else(DistributorError::cohort_not_found)?;
        if cohort.is_exhausted() || count > cohort.remaining() {
            return Err(DistributorError::MaxTokensIssued);
        }
        let first_serial = cohort
            .token_mints
            .checked_add(1)
            .ok_or_else(|| DistributorError::InternalError("token mint counter overflow".into()))?;
        cohort.token_mints += count;
        Ok(first_serial)
    }
}
