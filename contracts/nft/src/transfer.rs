use crate::guards::check_one_yocto;
use crate::*;
use near_sdk::json_types::U64;

#[near]
impl Contract {
    /// NEP-171 transfer. The caller must be the token owner or hold an
    /// approval on the token (with matching ID when `approval_id` is given).
    #[payable]
    #[handle_result]
    pub fn nft_transfer(
        &mut self,
        receiver_id: AccountId,
        token_id: U64,
        approval_id: Option<u64>,
        memo: Option<String>,
    ) -> Result<(), TokenError> {
        check_one_yocto()?;
        let sender_id = env::predecessor_account_id();

        self.transfer(&sender_id, &receiver_id, token_id.0, approval_id, memo)
    }

    pub fn nft_token(&self, token_id: U64) -> Option<TokenView> {
        self.tokens_by_id
            .get(&token_id.0)
            .map(|token| TokenView::from_token(token_id.0, token))
    }

    pub fn nft_owner(&self, token_id: U64) -> Option<AccountId> {
        self.tokens_by_id
            .get(&token_id.0)
            .map(|token| token.owner_id.clone())
    }
}

impl Contract {
    pub(crate) fn transfer(
        &mut self,
        sender_id: &AccountId,
        receiver_id: &AccountId,
        token_id: u64,
        approval_id: Option<u64>,
        memo: Option<String>,
    ) -> Result<(), TokenError> {
        let mut token = self
            .tokens_by_id
            .get(&token_id)
            .ok_or_else(TokenError::token_not_found)?
            .clone();

        if sender_id != &token.owner_id {
            if let Some(approved_id) = approval_id {
                let actual_approval_id = token
                    .approved_account_ids
                    .get(sender_id)
                    .ok_or_else(|| TokenError::Unauthorized("Sender not approved".into()))?;

                if approved_id != *actual_approval_id {
                    return Err(TokenError::Unauthorized("Invalid approval ID".into()));
                }
            } else if !token.approved_account_ids.contains_key(sender_id) {
                return Err(TokenError::Unauthorized(
                    "Sender not authorized to transfer token".into(),
                ));
            }
        }

        let old_owner_id = token.owner_id.clone();
        if receiver_id == &old_owner_id {
            return Err(TokenError::InvalidInput(
                "Receiver must differ from current owner".into(),
            ));
        }

        self.remove_token_from_owner(&old_owner_id, token_id);

        token.owner_id = receiver_id.clone();
        // Approvals never survive an ownership change.
        token.approved_account_ids.clear();

        self.add_token_to_owner(receiver_id, token_id);
        self.tokens_by_id.insert(token_id, token);

        let authorized_id = (sender_id != &old_owner_id).then(|| sender_id.as_str());
        events::emit_transfer(
            old_owner_id.as_str(),
            receiver_id.as_str(),
            &[token_id.to_string()],
            authorized_id,
            memo.as_deref(),
        );

        Ok(())
    }
}
