use crate::*;

pub(crate) fn check_one_yocto() -> Result<(), DistributorError> {
    if env::attached_deposit().as_yoctonear() != ONE_YOCTO.as_yoctonear() {
        return Err(DistributorError::InsufficientDeposit(
            "requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

impl Contract {
    pub(crate) fn check_contract_owner(
        &self,
        actor_id: &AccountId,
    ) -> Result<(), DistributorError> {
        if actor_id != &self.owner_id {
            return Err(DistributorError::only_owner());
        }
        Ok(())
    }

    // The owner is an implicit admin and is never stored in `admins`.
    pub(crate) fn check_admin(&self, actor_id: &AccountId) -> Result<(), DistributorError> {
        if actor_id == &self.owner_id || self.admins.contains(actor_id) {
            return Ok(());
        }
        Err(DistributorError::not_admin())
    }

    pub(crate) fn check_not_paused(&self) -> Result<(), DistributorError> {
        if self.paused {
            return Err(DistributorError::paused());
        }
        Ok(())
    }
}

pub(crate) fn cohort_id_from_token_id(token_id: &str) -> &str {
    token_id.split_once(DELIMETER).map_or("", |(prefix, _)| prefix)
}
