use near_sdk::BorshStorageKey;

use crate::*;

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Admins,
    Cohorts,
    TokensById,
    TokensPerOwner,
    TokensPerOwnerInner { account_id_hash: Vec<u8> },
    TokensPerCohort,
    TokensPerCohortInner { cohort_id_hash: Vec<u8> },
}

#[inline]
pub(crate) fn storage_byte_cost() -> u128 {
    env::storage_byte_cost().as_yoctonear()
}

impl Contract {
    // Storage accounting invariant: flush deferred writes before measuring usage.
    pub(crate) fn flush_state(&mut self) {
        self.admins.flush();
        self.cohorts.flush();
        self.tokens_by_id.flush();
        self.tokens_per_owner.flush();
        self.tokens_per_cohort.flush();
    }

    // Inner sets buffer their own writes; the outer map flush does not reach them.
    pub(crate) fn flush_token_indexes(&mut self, owner_id: &AccountId, cohort_id: &str) {
        if let Some(owner_tokens) = self.tokens_per_owner.get_mut(owner_id) {
            owner_tokens.flush();
        }
        if let Some(cohort_tokens) = self.tokens_per_cohort.get_mut(cohort_id) {
            cohort_tokens.flush();
        }
    }

    #[inline]
    pub(crate) fn storage_usage_flushed(&mut self) -> u64 {
        self.flush_state();
        env::storage_usage()
    }

    /// Charges the storage added since `initial_storage` to the attached deposit and refunds
    /// the rest to `payer`.
    pub(crate) fn settle_storage(
        &mut self,
        payer: &AccountId,
        initial_storage: u64,
    ) -> Result<u128, DistributorError> {
        let bytes_used = self.storage_usage_flushed().saturating_sub(initial_storage);
        let required = storage_byte_cost()
            .checked_mul(bytes_used as u128)
            .ok_or_else(|| DistributorError::InternalError("storage cost overflow".into()))?;
        let attached = env::attached_deposit().as_yoctonear();
        if attached < required {
            return Err(DistributorError::InsufficientDeposit(format!(
                "must attach {} yoctoNEAR to cover storage for {} bytes",
                required, bytes_used
            )));
        }

        let refund = attached - required;
        if refund > 0 {
            let _ = Promise::new(payer.clone()).transfer(NearToken::from_yoctonear(refund));
        }
        Ok(required)
    }
}
