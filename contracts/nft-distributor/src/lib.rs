use near_sdk::store::{IterableMap, IterableSet, LookupMap};
use near_sdk::{AccountId, Gas, NearToken, PanicOnDefault, Promise, env, near};

pub mod constants;
mod errors;
mod guards;
mod validation;

mod events;
mod external;

mod cohort;
mod token;

mod admin;
mod claim;
mod storage;
mod upgrade;


pub use cohort::{Cohort, CohortView};
pub use constants::*;
pub use errors::DistributorError;
pub use external::{DistributorMetadata, NFTContractMetadata, Token as TokenView};
pub(crate) use guards::cohort_id_from_token_id;
pub use storage::StorageKey;
pub use token::{Token, TokenMetadata};

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        standard(standard = "nep171", version = "1.2.0"),
        standard(standard = "nep177", version = "2.0.0"),
        standard(standard = "nep181", version = "1.0.0"),
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,

    pub owner_id: AccountId,
    pub(crate) admins: IterableSet<AccountId>,
    // Pause blocks claims and transfers; views and owner setters stay available.
    pub paused: bool,

    pub base_uri: String,
    pub metadata: DistributorMetadata,

    // Insertion order of this map is the deployment order of cohort ids.
    pub cohorts: IterableMap<String, Cohort>,

    pub tokens_by_id: IterableMap<String, Token>,
    pub(crate) tokens_per_owner: LookupMap<AccountId, IterableSet<String>>,
    // Only tokens minted here; serials issued before deployment never appear.
    pub(crate) tokens_per_cohort: LookupMap<String, IterableSet<String>>,
}
