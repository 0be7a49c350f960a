use crate::external::*;
use crate::guards::check_callback_gas;
use crate::*;
use near_sdk::json_types::{U64, U128};

#[near]
impl Contract {
    /// Purchases a live listing. The attached deposit must equal the list
    /// price exactly; both under- and over-payment are rejected with the
    /// documented reason and no state change.
    #[payable]
    #[handle_result]
    pub fn buy_listing(
        &mut self,
        token_id: U64,
        nft_contract_id: AccountId,
        transfer_gas_tgas: Option<u64>,
    ) -> Result<Promise, MarketplaceError> {
        check_callback_gas(transfer_gas_tgas)?;
        let buyer_id = env::predecessor_account_id();
        let deposit = env::attached_deposit().as_yoctonear();

        // The slot is marked sold before the transfer receipt is scheduled;
        // a failed transfer is rolled back in the resolve callback.
        let listing = self.execute_purchase(&buyer_id, token_id.0, &nft_contract_id, deposit)?;

        let transfer_gas = Gas::from_tgas(transfer_gas_tgas.unwrap_or(DEFAULT_NFT_TRANSFER_GAS));

        Ok(ext_nft_contract::ext(nft_contract_id.clone())
            .with_static_gas(transfer_gas)
            .with_attached_deposit(ONE_YOCTO)
            .nft_transfer(
                buyer_id.clone(),
                token_id,
                Some(listing.approval_id),
                Some("Purchased on marketplace".to_string()),
            )
            .then(
                ext_self::ext(env::current_account_id())
                    .with_static_gas(Gas::from_tgas(DEFAULT_CALLBACK_GAS))
                    .resolve_purchase(
                        buyer_id,
                        listing.seller,
                        nft_contract_id,
                        token_id,
                        listing.price,
                        U128(deposit),
                    ),
            ))
    }

    #[private]
    pub fn resolve_purchase(
        &mut self,
        buyer_id: AccountId,
        seller_id: AccountId,
        nft_contract_id: AccountId,
        token_id: U64,
        price: U128,
        deposit: U128,
    ) -> bool {
        let transfer_ok =
            env::promise_results_count() == 1 && env::promise_result_checked(0, 16).is_ok();

        if transfer_ok {
            self.settle_purchase(&buyer_id, &seller_id, &nft_contract_id, token_id.0, price);
            true
        } else {
            self.rollback_purchase(
                &buyer_id,
                &seller_id,
                &nft_contract_id,
                token_id.0,
                price,
                deposit,
            );
            false
        }
    }
}

// --- Internal helpers ---

impl Contract {
    /// Validates a purchase and marks the slot sold. Validation happens
    /// strictly before any mutation, so a rejected purchase leaves the slot
    /// untouched. Returns a snapshot of the listing as it was sold.
    pub(crate) fn execute_purchase(
        &mut self,
        buyer_id: &AccountId,
        token_id: u64,
        nft_contract_id: &AccountId,
        deposit: u128,
    ) -> Result<Listing, MarketplaceError> {
        let listing = self
            .listings
            .get(&token_id)
            .ok_or_else(MarketplaceError::listing_not_found)?;

        if &listing.nft_contract_id != nft_contract_id {
            return Err(MarketplaceError::InvalidInput(
                "Listing belongs to a different NFT contract".into(),
            ));
        }
        if listing.is_sold() {
            return Err(MarketplaceError::InvalidState(
                "Listing is already sold".into(),
            ));
        }
        if buyer_id == &listing.seller {
            return Err(MarketplaceError::InvalidInput(
                "Cannot purchase your own listing".into(),
            ));
        }
        if deposit != listing.price.0 {
            return Err(MarketplaceError::price_not_met());
        }

        let listing = self
            .listings
            .get_mut(&token_id)
            .ok_or_else(MarketplaceError::listing_not_found)?;
        listing.owner = Some(buyer_id.clone());
        Ok(listing.clone())
    }

    pub(crate) fn settle_purchase(
        &mut self,
        buyer_id: &AccountId,
        seller_id: &AccountId,
        nft_contract_id: &AccountId,
        token_id: u64,
        price: U128,
    ) {
        if price.0 > 0 {
            let _ = Promise::new(seller_id.clone()).transfer(NearToken::from_yoctonear(price.0));
        }
        self.remove_listing_from_seller(seller_id, token_id);

        events::emit_purchase(
            buyer_id.as_str(),
            seller_id.as_str(),
            nft_contract_id.as_str(),
            token_id,
            price,
        );
    }

    /// Restores the slot to its unsold state after a failed token transfer
    /// and refunds the buyer. Tolerates the slot having been rewritten in
    /// the callback window.
    pub(crate) fn rollback_purchase(
        &mut self,
        buyer_id: &AccountId,
        seller_id: &AccountId,
        nft_contract_id: &AccountId,
        token_id: u64,
        price: U128,
        deposit: U128,
    ) {
        if let Some(listing) = self.listings.get_mut(&token_id) {
            if listing.owner.as_ref() == Some(buyer_id) {
                listing.owner = None;
            }
        }

        if deposit.0 > 0 {
            let _ = Promise::new(buyer_id.clone()).transfer(NearToken::from_yoctonear(deposit.0));
        }

        events::emit_purchase_failed(
            buyer_id.as_str(),
            seller_id.as_str(),
            nft_contract_id.as_str(),
            token_id,
            price,
            "nft_transfer_failed",
        );
    }
}
