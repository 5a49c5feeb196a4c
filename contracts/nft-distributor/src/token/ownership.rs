use crate::*;

impl Contract {
    pub(crate) fn add_token_to_owner(&mut self, owner_id: &AccountId, token_id: &str) {
        self.tokens_per_owner
            .entry(owner_id.clone())
            .or_insert_with(|| {
                IterableSet::new(StorageKey::TokensPerOwnerInner {
                    account_id_hash: env::sha256(owner_id.as_bytes()),
                })
            })
            .insert(token_id.to_string());
    }

    pub(crate) fn remove_token_from_owner(&mut self, owner_id: &AccountId, token_id: &str) {
        if let Some(owner_tokens) = self.tokens_per_owner.get_mut(owner_id) {
            owner_tokens.remove(token_id);
            if owner_tokens.is_empty() {
                self.tokens_per_owner.remove(owner_id);
            }
        }
    }

    // Tokens are never burned, so the cohort index only grows.
    pub(crate) fn add_token_to_cohort(&mut self, cohort_id: &str, token_id: &str) {
        self.tokens_per_cohort
            .entry(cohort_id.to_string())
            .or_insert_with(|| {
                IterableSet::new(StorageKey::TokensPerCohortInner {
                    cohort_id_hash: env::sha256(cohort_id.as_bytes()),
                })
            })
            .insert(token_id.to_string());
    }
}
