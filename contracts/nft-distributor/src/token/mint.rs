use crate::*;
use std::collections::HashMap;

impl Contract {
    pub(crate) fn make_token_id(cohort_id: &str, serial: u32) -> String {
        format!("{}{}{}", cohort_id, DELIMETER, serial)
    }

    pub(crate) fn mint(
        &mut self,
        cohort_id: &str,
        serial: u32,
        owner_id: &AccountId,
    ) -> Result<String, DistributorError> {
        let token_id = Self::make_token_id(cohort_id, serial);
        if self.tokens_by_id.contains_key(&token_id) {
            return Err(DistributorError::InvalidState(format!(
                "token already exists: {}",
                token_id
            )));
        }

        let token = Token {
            owner_id: owner_id.clone(),
            issued_at: env::block_timestamp(),
            approved_account_ids: HashMap::new(),
        };
        self.tokens_by_id.insert(token_id.clone(), token);
        self.add_token_to_owner(owner_id, &token_id);
        self.add_token_to_cohort(cohort_id, &token_id);

        Ok(token_id)
    }

    pub(crate) fn token_view(&self, token_id: &str) -> Option<TokenView> {
        self.tokens_by_id.get(token_id).map(|token| TokenView {
            token_id: token_id.to_string(),
            owner_id: token.owner_id.clone(),
            metadata: Some(self.token_metadata(token_id, token)),
            approved_account_ids: Some(token.approved_account_ids.clone()),
        })
    }
}
