use near_sdk::env;
use near_sdk::json_types::U128;
use near_sdk::serde::Serialize;
use near_sdk::serde_json::{Map, Value, json};

const STANDARD: &str = "marketplace";
const VERSION: &str = "1.0.0";
const PREFIX: &str = "EVENT_JSON:";

/// NEP-297 event envelope builder for marketplace events.
struct MarketEvent {
    event: &'static str,
    data: Map<String, Value>,
}

impl MarketEvent {
    fn new(event: &'static str) -> Self {
        Self {
            event,
            data: Map::new(),
        }
    }

    fn field<T: Serialize>(mut self, key: &str, value: T) -> Self {
        if let Ok(v) = near_sdk::serde_json::to_value(value) {
            self.data.insert(key.to_string(), v);
        }
        self
    }

    fn emit(self) {
        let envelope = json!({
            "standard": STANDARD,
            "version": VERSION,
            "event": self.event,
            "data": [Value::Object(self.data)],
        });
        env::log_str(&format!("{}{}", PREFIX, envelope));
    }
}

pub fn emit_listing_created(seller_id: &str, nft_contract_id: &str, token_id: u64, price: U128) {
    MarketEvent::new("nft_list")
        .field("seller_id", seller_id)
        .field("nft_contract_id", nft_contract_id)
        .field("token_id", token_id.to_string())
        .field("price", price)
        .emit();
}

pub fn emit_listing_removed(seller_id: &str, nft_contract_id: &str, token_id: u64) {
    MarketEvent::new("nft_delist")
        .field("seller_id", seller_id)
        .field("nft_contract_id", nft_contract_id)
        .field("token_id", token_id.to_string())
        .emit();
}

pub fn emit_purchase(
    buyer_id: &str,
    seller_id: &str,
    nft_contract_id: &str,
    token_id: u64,
    price: U128,
) {
    MarketEvent::new("nft_purchase")
        .field("buyer_id", buyer_id)
        .field("seller_id", seller_id)
        .field("nft_contract_id", nft_contract_id)
        .field("token_id", token_id.to_string())
        .field("price", price)
        .emit();
}

pub fn emit_purchase_failed(
    buyer_id: &str,
    seller_id: &str,
    nft_contract_id: &str,
    token_id: u64,
    price: U128,
    reason: &str,
) {
    MarketEvent::new("nft_purchase_failed")
        .field("buyer_id", buyer_id)
        .field("seller_id", seller_id)
        .field("nft_contract_id", nft_contract_id)
        .field("token_id", token_id.to_string())
        .field("price", price)
        .field("reason", reason)
        .emit();
}
