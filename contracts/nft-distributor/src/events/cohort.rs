use near_sdk::AccountId;

use super::COHORT;
use super::builder::EventBuilder;

pub fn emit_cohort_created(actor_id: &AccountId, cohort_id: &str, limit: u32, token_mints: u32) {
    EventBuilder::new(COHORT, "create", actor_id)
        .field("cohort_id", cohort_id)
        .field("limit", limit)
        .field("token_mints", token_mints)
        .emit();
}

pub fn emit_cohort_limit_updated(
    owner_id: &AccountId,
    cohort_id: &str,
    old_limit: u32,
    new_limit: u32,
) {
    EventBuilder::new(COHORT, "limit_updated", owner_id)
        .field("cohort_id", cohort_id)
        .field("old_limit", old_limit)
        .field("new_limit", new_limit)
        .emit();
}

pub fn emit_token_claimed(
    admin_id: &AccountId,
    cohort_id: &str,
    recipient: &AccountId,
    token_id: &str,
) {
    EventBuilder::new(COHORT, "token_claimed", admin_id)
        .field("cohort_id", cohort_id)
        .field("recipient", recipient)
        .field("token_id", token_id)
        .emit();
}
