use crate::*;
use near_sdk::json_types::U128;

#[near]
impl Contract {
    pub fn nft_total_supply(&self) -> U128 {
        U128(self.tokens_by_id.len() as u128)
    }

    pub fn nft_tokens(&self, from_index: Option<U128>, limit: Option<u64>) -> Vec<TokenView> {
        let start = from_index.map(|i| i.0 as usize).unwrap_or(0);
        let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE) as usize;

        self.tokens_by_id
            .keys()
            .skip(start)
            .take(limit)
            .filter_map(|token_id| self.token_view(token_id))
            .collect()
    }

    pub fn nft_supply_for_owner(&self, account_id: AccountId) -> U128 {
        self.tokens_per_owner
            .get(&account_id)
            .map(|tokens| U128(tokens.len() as u128))
            .unwrap_or(U128(0))
    }

    pub fn nft_tokens_for_owner(
        &self,
        account_id: AccountId,
        from_index: Option<U128>,
        limit: Option<u64>,
    ) -> Vec<TokenView> {
        let Some(tokens_set) = self.tokens_per_owner.get(&account_id) else {
            return vec![];
        };

        let start = from_index.map(|i| i.0 as usize).unwrap_or(0);
        let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE) as usize;

        tokens_set
            .iter()
            .skip(start)
            .filter_map(|token_id| self.token_view(token_id))
            .take(limit)
            .collect()
    }
}
