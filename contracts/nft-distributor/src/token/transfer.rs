use crate::guards::check_one_yocto;
use crate::*;
use std::collections::HashMap;

#[near]
impl Contract {
    #[payable]
    #[handle_result]
    pub fn nft_transfer(
        &mut self,
        receiver_id: AccountId,
        token_id: String,
        approval_id: Option<u64>,
        memo: Option<String>,
    ) -> Result<(), DistributorError> {
        check_one_yocto()?;
        let sender_id = env::predecessor_account_id();

        self.transfer(&sender_id, &receiver_id, &token_id, approval_id, memo)?;
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn nft_transfer_call(
        &mut self,
        receiver_id: AccountId,
        token_id: String,
        approval_id: Option<u64>,
        memo: Option<String>,
        msg: String,
    ) -> Result<Promise, DistributorError> {
        check_one_yocto()?;
        let sender_id = env::predecessor_account_id();

        let previous = self.transfer(&sender_id, &receiver_id, &token_id, approval_id, memo)?;

        Ok(external::ext_nft_receiver::ext(receiver_id.clone())
            .with_static_gas(Gas::from_tgas(GAS_NFT_ON_TRANSFER_TGAS))
            .nft_on_transfer(
                sender_id,
                previous.owner_id.clone(),
                token_id.clone(),
                msg,
            )
            .then(
                external::ext_self::ext(env::current_account_id())
                    .with_static_gas(Gas::from_tgas(GAS_RESOLVE_TRANSFER_TGAS))
                    .nft_resolve_transfer(
                        previous.owner_id,
                        receiver_id,
                        token_id,
                        Some(previous.approved_account_ids),
                    ),
            ))
    }

    /// Returns `true` when the token went back to `previous_owner_id`.
    #[private]
    pub fn nft_resolve_transfer(
        &mut self,
        previous_owner_id: AccountId,
        receiver_id: AccountId,
        token_id: String,
        approved_account_ids: Option<HashMap<AccountId, u64>>,
    ) -> bool {
        let should_revert = match env::promise_result_checked(0, 16) {
            Ok(value) => near_sdk::serde_json::from_slice::<bool>(&value).unwrap_or(true),
            // Receiver panicked: the transfer is reverted.
            Err(_) => true,
        };

        if !should_revert {
            return false;
        }

        // Token may have moved again while the receiver call was in flight.
        let Some(mut token) = self.tokens_by_id.get(&token_id).cloned() else {
            env::log_str(&format!(
                "Cannot revert transfer: token {} no longer exists",
                token_id
            ));
            return false;
        };

        if token.owner_id != receiver_id {
            return false;
        }

        self.remove_token_from_owner(&receiver_id, &token_id);
        token.owner_id = previous_owner_id.clone();
        if let Some(approvals) = approved_account_ids {
            token.approved_account_ids = approvals;
        }
        self.add_token_to_owner(&previous_owner_id, &token_id);
        self.tokens_by_id.insert(token_id.clone(), token);

        events::NftLog::Transfer {
            old_owner_id: &receiver_id,
            new_owner_id: &previous_owner_id,
            token_id: &token_id,
            authorized_id: None,
            memo: Some("transfer reverted"),
        }
        .emit();
        true
    }

    pub fn nft_token(&self, token_id: String) -> Option<TokenView> {
        self.token_view(&token_id)
    }
}

impl Contract {
    /// Moves a token and returns its pre-transfer record.
    pub(crate) fn transfer(
        &mut self,
        sender_id: &AccountId,
        receiver_id: &AccountId,
        token_id: &str,
        approval_id: Option<u64>,
        memo: Option<String>,
    ) -> Result<Token, DistributorError> {
        self.check_not_paused()?;
        let previous = self
            .tokens_by_id
            .get(token_id)
            .ok_or_else(DistributorError::token_not_found)?
            .clone();

        if sender_id != &previous.owner_id {
            let actual_approval_id = previous
                .approved_account_ids
                .get(sender_id)
                .ok_or_else(|| DistributorError::Unauthorized("sender not approved".into()))?;
            if approval_id.is_some_and(|id| id != *actual_approval_id) {
                return Err(DistributorError::Unauthorized("invalid approval id".into()));
            }
        }
        if receiver_id == &previous.owner_id {
            return Err(DistributorError::InvalidInput(
                "token owner and receiver must differ".into(),
            ));
        }

        let mut token = previous.clone();
        self.remove_token_from_owner(&previous.owner_id, token_id);
        token.owner_id = receiver_id.clone();
        token.approved_account_ids.clear();
        self.add_token_to_owner(receiver_id, token_id);
        self.tokens_by_id.insert(token_id.to_string(), token);

        events::NftLog::Transfer {
            old_owner_id: &previous.owner_id,
            new_owner_id: receiver_id,
            token_id,
            authorized_id: (sender_id != &previous.owner_id).then_some(sender_id),
            memo: memo.as_deref(),
        }
        .emit();

        Ok(previous)
    }
}
