use near_sdk::json_types::Base64VecU8;
use near_sdk::near;
use near_sdk::AccountId;
use std::collections::HashMap;

/// NEP-177 token metadata. Derived from the cohort and base URI at read time, never stored.
#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct TokenMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub media: Option<String>,
    pub media_hash: Option<Base64VecU8>,
    pub copies: Option<u64>,
    pub issued_at: Option<u64>,
    pub expires_at: Option<u64>,
    pub starts_at: Option<u64>,
    pub updated_at: Option<u64>,
    pub extra: Option<String>,
    pub reference: Option<String>,
    pub reference_hash: Option<Base64VecU8>,
}

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub owner_id: AccountId,
    // Cohort is not stored: it is the prefix of the token id.
    pub issued_at: u64,
    // NEP-171 transfer bookkeeping only; cleared on every transfer.
    pub approved_account_ids: HashMap<AccountId, u64>,
}
