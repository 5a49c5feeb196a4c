use near_sdk::NearToken;

// Every rendered error message starts with this tag.
pub const ERROR_PREFIX: &str = "ConclaveX";
// Storage key invariant: delimiter is rejected in cohort ids, so `{cohort}:{serial}` is unambiguous.
pub const DELIMETER: &str = ":";
pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

pub const MAX_COHORTS: usize = 256;
pub const MAX_COHORT_ID_LEN: usize = 64;
pub const MAX_COHORT_LIMIT: u32 = 1_000_000;
pub const MAX_BASE_URI_LEN: usize = 512;
pub const MAX_ADMINS: usize = 50;
pub const MAX_BATCH_CLAIM: usize = 50;

pub const DEFAULT_PAGE_SIZE: u64 = 50;
pub const MAX_PAGE_SIZE: u64 = 100;

pub const DEFAULT_CONTRACT_NAME: &str = "ConclaveX";
pub const DEFAULT_CONTRACT_SYMBOL: &str = "CLVX";

pub const GAS_NFT_ON_TRANSFER_TGAS: u64 = 30;
pub const GAS_RESOLVE_TRANSFER_TGAS: u64 = 15;
pub const GAS_MIGRATE_TGAS: u64 = 200;
