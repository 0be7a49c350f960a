use crate::*;
use near_sdk::json_types::{U64, U128};

#[near]
impl Contract {
    pub fn nft_total_supply(&self) -> U128 {
        U128(self.tokens_by_id.len() as u128)
    }

    pub fn nft_supply_for_owner(&self, account_id: AccountId) -> U128 {
        U128(
            self.tokens_per_owner
                .get(&account_id)
                .map(|set| set.len() as u128)
                .unwrap_or(0),
        )
    }

    pub fn nft_tokens_for_owner(
        &self,
        account_id: AccountId,
        from_index: Option<U64>,
        limit: Option<u64>,
    ) -> Vec<TokenView> {
        let Some(token_ids) = self.tokens_per_owner.get(&account_id) else {
            return vec![];
        };

        let start = from_index.map(|i| i.0).unwrap_or(0);
        let limit = limit.unwrap_or(DEFAULT_VIEW_LIMIT).min(MAX_VIEW_LIMIT);

        token_ids
            .iter()
            .skip(start as usize)
            .take(limit as usize)
            .filter_map(|token_id| {
                self.tokens_by_id
                    .get(token_id)
                    .map(|token| TokenView::from_token(*token_id, token))
            })
            .collect()
    }
}
