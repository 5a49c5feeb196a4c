use crate::*;
use near_sdk::json_types::U128;

#[near]
impl Contract {
    pub fn get_cohort(&self, cohort_id: String) -> Option<CohortView> {
        self.cohorts.get(&cohort_id).map(CohortView::from)
    }

    /// Cohorts in deployment order.
    pub fn get_cohorts(&self, from_index: Option<U128>, limit: Option<u64>) -> Vec<CohortView> {
        let start = from_index.map(|i| i.0 as usize).unwrap_or(0);
        let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE) as usize;

        self.cohorts
            .values()
            .skip(start)
            .take(limit)
            .map(CohortView::from)
            .collect()
    }

    pub fn get_cohort_count(&self) -> u32 {
        self.cohorts.len()
    }

    pub fn get_remaining(&self, cohort_id: String) -> Option<u32> {
        self.cohorts.get(&cohort_id).map(Cohort::remaining)
    }

    /// Tokens minted by this contract for the cohort. Serials already counted in the
    /// deployment `token_mints` were issued elsewhere and are not included.
    pub fn nft_supply_for_cohort(&self, cohort_id: String) -> U128 {
        self.tokens_per_cohort
            .get(&cohort_id)
            .map(|tokens| U128(tokens.len() as u128))
            .unwrap_or(U128(0))
    }

    /// Cohort tokens in mint order.
    pub fn nft_tokens_for_cohort(
        &self,
        cohort_id: String,
        from_index: Option<U128>,
        limit: Option<u64>,
    ) -> Vec<TokenView> {
        let Some(cohort_tokens) = self.tokens_per_cohort.get(&cohort_id) else {
            return vec![];
        };
        let start = from_index.map(|i| i.0 as usize).unwrap_or(0);
        let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE) as usize;

        cohort_tokens
            .iter()
            .skip(start)
            .take(limit)
            .filter_map(|token_id| self.token_view(token_id))
            .collect()
    }
}
