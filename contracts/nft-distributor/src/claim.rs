use crate::*;

#[near]
impl Contract {
    /// Mints the next token of `cohort_id` to `recipient`. Storage is paid from the attached
    /// deposit and any excess is refunded to the caller.
    #[payable]
    #[handle_result]
    pub fn admin_claim_token(
        &mut self,
        cohort_id: String,
        recipient: AccountId,
    ) -> Result<String, DistributorError> {
        let actor_id = env::predecessor_account_id();
        let mut token_ids = self.claim(&actor_id, &cohort_id, std::slice::from_ref(&recipient))?;
        token_ids
            .pop()
            .ok_or_else(|| DistributorError::InternalError("claim produced no token".into()))
    }

    /// Mints one token of `cohort_id` per recipient. Fails as a whole when the cohort cannot
    /// cover every recipient.
    #[payable]
    #[handle_result]
    pub fn admin_claim_batch(
        &mut self,
        cohort_id: String,
        recipients: Vec<AccountId>,
    ) -> Result<Vec<String>, DistributorError> {
        if recipients.is_empty() || recipients.len() > MAX_BATCH_CLAIM {
            return Err(DistributorError::InvalidInput(format!(
                "batch must contain 1-{} recipients",
                MAX_BATCH_CLAIM
            )));
        }
        let actor_id = env::predecessor_account_id();
        self.claim(&actor_id, &cohort_id, &recipients)
    }
}

impl Contract {
    pub(crate) fn claim(
        &mut self,
        actor_id: &AccountId,
        cohort_id: &str,
        recipients: &[AccountId],
    ) -> Result<Vec<String>, DistributorError> {
        self.check_not_paused()?;
        self.check_admin(actor_id)?;

        let count = u32::try_from(recipients.len())
            .map_err(|_| DistributorError::InvalidInput("too many recipients".into()))?;
        let before = self.storage_usage_flushed();
        let first_serial = self.reserve_cohort_mints(cohort_id, count)?;

        let mut token_ids = Vec::with_capacity(recipients.len());
        for (serial, recipient) in (first_serial..).zip(recipients) {
            let token_id = self.mint(cohort_id, serial, recipient)?;
            self.flush_token_indexes(recipient, cohort_id);
            events::emit_token_claimed(actor_id, cohort_id, recipient, &token_id);
            events::NftLog::Mint {
                owner_id: recipient,
                token_ids: std::slice::from_ref(&token_id),
            }
            .emit();
            token_ids.push(token_id);
        }

        self.settle_storage(actor_id, before)?;
        Ok(token_ids)
    }
}
