use near_sdk::json_types::Base64VecU8;
use near_sdk::{AccountId, ext_contract, near};
use std::collections::HashMap;

use crate::constants::{DEFAULT_CONTRACT_NAME, DEFAULT_CONTRACT_SYMBOL};

/// NEP-171 `Token` as returned by views.
#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct Token {
    pub token_id: String,
    pub owner_id: AccountId,
    pub metadata: Option<crate::TokenMetadata>,
    pub approved_account_ids: Option<HashMap<AccountId, u64>>,
}

/// NEP-177 contract metadata. `base_uri` is filled from contract state.
#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct NFTContractMetadata {
    pub spec: String,
    pub name: String,
    pub symbol: String,
    pub icon: Option<String>,
    pub base_uri: Option<String>,
    pub reference: Option<String>,
    pub reference_hash: Option<Base64VecU8>,
}

/// Owner-editable part of the contract metadata, supplied at init.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug)]
pub struct DistributorMetadata {
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub reference_hash: Option<Base64VecU8>,
}

impl Default for DistributorMetadata {
    fn default() -> Self {
        Self {
            name: DEFAULT_CONTRACT_NAME.to_string(),
            symbol: DEFAULT_CONTRACT_SYMBOL.to_string(),
            icon: None,
            reference: None,
            reference_hash: None,
        }
    }
}

#[ext_contract(ext_nft_receiver)]
pub trait ExtNftReceiver {
    /// Cross-contract assumption: `true` rejects/reverts transfer, `false` accepts transfer.
    fn nft_on_transfer(
        &mut self,
        sender_id: AccountId,
        previous_owner_id: AccountId,
        token_id: String,
        msg: String,
    ) -> bool;
}

#[ext_contract(ext_self)]
pub trait ExtSelf {
    fn nft_resolve_transfer(
        &mut self,
        previous_owner_id: AccountId,
        receiver_id: AccountId,
        token_id: String,
        approved_account_ids: Option<HashMap<AccountId, u64>>,
    ) -> bool;
}
