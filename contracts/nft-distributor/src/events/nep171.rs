use near_sdk::AccountId;

use super::builder::Nep171Event;

const NEP171_VERSION: &str = "1.2.0";

/// Standard NEP-171 log entries this contract produces.
pub enum NftLog<'a> {
    Mint {
        owner_id: &'a AccountId,
        token_ids: &'a [String],
    },
    Transfer {
        old_owner_id: &'a AccountId,
        new_owner_id: &'a AccountId,
        token_id: &'a str,
        authorized_id: Option<&'a AccountId>,
        memo: Option<&'a str>,
    },
    // Indexers refetch `nft_metadata`; the envelope carries no data.
    ContractMetadataUpdate,
}

impl NftLog<'_> {
    fn event_name(&self) -> &'static str {
        match self {
            Self::Mint { .. } => "nft_mint",
            Self::Transfer { .. } => "nft_transfer",
            Self::ContractMetadataUpdate => "contract_metadata_update",
        }
    }

    pub fn emit(self) {
        let event = Nep171Event::new(self.event_name(), NEP171_VERSION);
        let event = match self {
            Self::Mint {
                owner_id,
                token_ids,
            } => event.field("owner_id", owner_id).field("token_ids", token_ids),
            Self::Transfer {
                old_owner_id,
                new_owner_id,
                token_id,
                authorized_id,
                memo,
            } => event
                .field("old_owner_id", old_owner_id)
                .field("new_owner_id", new_owner_id)
                .field("token_ids", &[token_id][..])
                .field_opt("authorized_id", authorized_id)
                .field_opt("memo", memo),
            Self::ContractMetadataUpdate => event,
        };
        event.emit();
    }
}
