use crate::external::*;
use crate::guards::*;
use crate::*;
use near_sdk::json_types::{U64, U128};

#[near]
impl Contract {
    /// Lists `token_id` for sale at `price`. The caller must already have
    /// approved this contract on the NFT contract; the grant and current
    /// ownership are verified cross-contract before the slot is written.
    #[payable]
    #[handle_result]
    pub fn create_listing(
        &mut self,
        token_id: U64,
        nft_contract_id: AccountId,
        price: U128,
        approval_id: u64,
        verification_gas_tgas: Option<u64>,
    ) -> Result<Promise, MarketplaceError> {
        check_at_least_one_yocto()?;
        check_callback_gas(verification_gas_tgas)?;
        if price.0 == 0 {
            return Err(MarketplaceError::InvalidInput(
                "Price must be greater than 0".into(),
            ));
        }

        let seller_id = env::predecessor_account_id();
        let verification_gas =
            Gas::from_tgas(verification_gas_tgas.unwrap_or(DEFAULT_CALLBACK_GAS));

        Ok(ext_nft_contract::ext(nft_contract_id.clone())
            .with_static_gas(verification_gas)
            .nft_is_approved(token_id, env::current_account_id(), Some(approval_id))
            .and(
                ext_nft_contract::ext(nft_contract_id.clone())
                    .with_static_gas(verification_gas)
                    .nft_owner(token_id),
            )
            .then(
                ext_self::ext(env::current_account_id())
                    .with_static_gas(verification_gas)
                    .resolve_listing(seller_id, nft_contract_id, token_id, approval_id, price),
            ))
    }

    #[private]
    pub fn resolve_listing(
        &mut self,
        seller_id: AccountId,
        nft_contract_id: AccountId,
        token_id: U64,
        approval_id: u64,
        price: U128,
    ) {
        if env::promise_results_count() != 2 {
            env::log_str("Listing failed: expected 2 promise results");
            return;
        }

        let is_approved = match env::promise_result_checked(0, 16) {
            Ok(value) => near_sdk::serde_json::from_slice::<bool>(&value).unwrap_or(false),
            Err(_) => {
                env::log_str("Listing failed: approval check call failed");
                return;
            }
        };
        if !is_approved {
            env::log_str("Listing failed: marketplace is not approved for this token");
            return;
        }

        let token_owner = match env::promise_result_checked(1, 128) {
            Ok(value) => {
                match near_sdk::serde_json::from_slice::<Option<AccountId>>(&value) {
                    Ok(Some(owner)) => owner,
                    Ok(None) => {
                        env::log_str("Listing failed: token not found on NFT contract");
                        return;
                    }
                    Err(_) => {
                        env::log_str("Listing failed: could not parse token owner");
                        return;
                    }
                }
            }
            Err(_) => {
                env::log_str("Listing failed: owner check call failed");
                return;
            }
        };
        if token_owner != seller_id {
            env::log_str("Listing failed: caller is not the token owner");
            return;
        }

        if let Err(e) = self.add_listing(&seller_id, &nft_contract_id, token_id.0, approval_id, price)
        {
            env::log_str(&format!("Listing failed: {}", e));
        }
    }

    /// Removes an active (unsold) listing. Sold slots are kept as receipts
    /// and cannot be removed.
    #[payable]
    #[handle_result]
    pub fn remove_listing(&mut self, token_id: U64) -> Result<(), MarketplaceError> {
        check_one_yocto()?;
        let actor_id = env::predecessor_account_id();
        self.delist(&actor_id, token_id.0)
    }
}

// --- Internal helpers ---

impl Contract {
    /// Inserts or overwrites the slot for `token_id`. Overwriting is allowed
    /// both for re-pricing a live listing and for re-listing a sold token
    /// under its new owner; the slot always re-enters the unsold state.
    pub(crate) fn add_listing(
        &mut self,
        seller_id: &AccountId,
        nft_contract_id: &AccountId,
        token_id: u64,
        approval_id: u64,
        price: U128,
    ) -> Result<(), MarketplaceError> {
        if price.0 == 0 {
            return Err(MarketplaceError::InvalidInput(
                "Price must be greater than 0".into(),
            ));
        }

        if let Some(previous) = self.listings.get(&token_id) {
            let previous_seller = previous.seller.clone();
            if &previous_seller != seller_id {
                self.remove_listing_from_seller(&previous_seller, token_id);
            }
        }

        let listing = Listing {
            seller: seller_id.clone(),
            nft_contract_id: nft_contract_id.clone(),
            token_id: U64(token_id),
            approval_id,
            price,
            owner: None,
        };
        self.listings.insert(token_id, listing);
        self.add_listing_to_seller(seller_id, token_id);

        events::emit_listing_created(
            seller_id.as_str(),
            nft_contract_id.as_str(),
            token_id,
            price,
        );
        Ok(())
    }

    pub(crate) fn delist(
        &mut self,
        actor_id: &AccountId,
        token_id: u64,
    ) -> Result<(), MarketplaceError> {
        let listing = self
            .listings
            .get(&token_id)
            .ok_or_else(MarketplaceError::listing_not_found)?;

        if &listing.seller != actor_id {
            return Err(MarketplaceError::Unauthorized(
                "Only the seller can remove a listing".into(),
            ));
        }
        if listing.is_sold() {
            return Err(MarketplaceError::InvalidState(
                "Listing is already sold".into(),
            ));
        }

        let nft_contract_id = listing.nft_contract_id.clone();
        self.listings.remove(&token_id);
        self.remove_listing_from_seller(actor_id, token_id);

        events::emit_listing_removed(actor_id.as_str(), nft_contract_id.as_str(), token_id);
        Ok(())
    }
}
