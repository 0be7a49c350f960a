use crate::guards::{check_at_least_one_yocto, check_one_yocto};
use crate::*;
use near_sdk::json_types::U64;

#[near]
impl Contract {
    /// Grants `account_id` authority to transfer `token_id` and returns the
    /// approval ID the grantee must present.
    #[payable]
    #[handle_result]
    pub fn nft_approve(
        &mut self,
        token_id: U64,
        account_id: AccountId,
    ) -> Result<U64, TokenError> {
        check_at_least_one_yocto()?;
        let owner_id = env::predecessor_account_id();
        self.internal_approve(&owner_id, token_id.0, &account_id)
            .map(U64)
    }

    #[payable]
    #[handle_result]
    pub fn nft_revoke(&mut self, token_id: U64, account_id: AccountId) -> Result<(), TokenError> {
        check_one_yocto()?;
        let owner_id = env::predecessor_account_id();

        let token = self
            .tokens_by_id
            .get_mut(&token_id.0)
            .ok_or_else(TokenError::token_not_found)?;
        if token.owner_id != owner_id {
            return Err(TokenError::Unauthorized(
                "Only token owner can revoke approval".into(),
            ));
        }

        token.approved_account_ids.remove(&account_id);
        events::emit_approval_revoked(
            owner_id.as_str(),
            &token_id.0.to_string(),
            Some(account_id.as_str()),
        );
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn nft_revoke_all(&mut self, token_id: U64) -> Result<(), TokenError> {
        check_one_yocto()?;
        let owner_id = env::predecessor_account_id();

        let token = self
            .tokens_by_id
            .get_mut(&token_id.0)
            .ok_or_else(TokenError::token_not_found)?;
        if token.owner_id != owner_id {
            return Err(TokenError::Unauthorized(
                "Only token owner can revoke all approvals".into(),
            ));
        }

        token.approved_account_ids.clear();
        events::emit_approval_revoked(owner_id.as_str(), &token_id.0.to_string(), None);
        Ok(())
    }

    /// If `approval_id` is supplied, also validates the exact ID.
    pub fn nft_is_approved(
        &self,
        token_id: U64,
        approved_account_id: AccountId,
        approval_id: Option<u64>,
    ) -> bool {
        let token = match self.tokens_by_id.get(&token_id.0) {
            Some(t) => t,
            None => return false,
        };

        token
            .approved_account_ids
            .get(&approved_account_id)
            .is_some_and(|actual| approval_id.is_none_or(|id| *actual == id))
    }
}

// --- Internal helpers ---

impl Contract {
    pub(crate) fn internal_approve(
        &mut self,
        actor_id: &AccountId,
        token_id: u64,
        account_id: &AccountId,
    ) -> Result<u64, TokenError> {
        let owner_id = self
            .tokens_by_id
            .get(&token_id)
            .ok_or_else(TokenError::token_not_found)?
            .owner_id
            .clone();
        if actor_id != &owner_id {
            return Err(TokenError::Unauthorized(
                "Only token owner can approve".into(),
            ));
        }

        let approval_id = self.next_approval_id;
        self.next_approval_id = self
            .next_approval_id
            .checked_add(1)
            .ok_or_else(|| TokenError::InternalError("Approval ID counter overflow".into()))?;

        let token = self
            .tokens_by_id
            .get_mut(&token_id)
            .ok_or_else(TokenError::token_not_found)?;
        token
            .approved_account_ids
            .insert(account_id.clone(), approval_id);

        events::emit_approval_granted(
            actor_id.as_str(),
            &token_id.to_string(),
            account_id.as_str(),
            approval_id,
        );
        Ok(approval_id)
    }
}
