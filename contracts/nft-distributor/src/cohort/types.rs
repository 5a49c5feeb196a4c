use near_sdk::near;

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct Cohort {
    pub cohort_id: String,
    pub limit: u32,
    // Supply invariant: never exceeds `limit`.
    pub token_mints: u32,
    pub created_at: u64,
}

impl Cohort {
    pub fn remaining(&self) -> u32 {
        self.limit.saturating_sub(self.token_mints)
    }

    pub fn is_exhausted(&self) -> bool {
        self.token_mints >= self.limit
    }
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct CohortView {
    pub cohort_id: String,
    pub limit: u32,
    pub token_mints: u32,
    pub remaining: u32,
}

impl From<&Cohort> for CohortView {
    fn from(cohort: &Cohort) -> Self {
        Self {
            cohort_id: cohort.cohort_id.clone(),
            limit: cohort.limit,
            token_mints: cohort.token_mints,
            remaining: cohort.remaining(),
        }
    }
}
