use near_sdk::env;
use near_sdk::serde::Serialize;
use near_sdk::serde_json::{Map, Value, json};

const STANDARD: &str = "nep171";
const VERSION: &str = "1.2.0";
const PREFIX: &str = "EVENT_JSON:";

/// NEP-297 event envelope builder. `data` is emitted as a single-element array
/// per the standard.
pub(crate) struct Nep171Event {
    event: &'static str,
    data: Map<String, Value>,
}

impl Nep171Event {
    pub(crate) fn new(event: &'static str) -> Self {
        Self {
            event,
            data: Map::new(),
        }
    }

    pub(crate) fn field<T: Serialize>(mut self, key: &str, value: T) -> Self {
        if let Ok(v) = near_sdk::serde_json::to_value(value) {
            self.data.insert(key.to_string(), v);
        }
        self
    }

    pub(crate) fn field_opt<T: Serialize>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.field(key, v),
            None => self,
        }
    }

    pub(crate) fn emit(self) {
        let envelope = json!({
            "standard": STANDARD,
            "version": VERSION,
            "event": self.event,
            "data": [Value::Object(self.data)],
        });
        env::log_str(&format!("{}{}", PREFIX, envelope));
    }
}

pub fn emit_mint(owner_id: &str, token_ids: &[String], memo: Option<&str>) {
    Nep171Event::new("nft_mint")
        .field("owner_id", owner_id)
        .field("token_ids", token_ids)
        .field_opt("memo", memo)
        .emit();
}

pub fn emit_transfer(
    old_owner_id: &str,
    new_owner_id: &str,
    token_ids: &[String],
    authorized_id: Option<&str>,
    memo: Option<&str>,
) {
    Nep171Event::new("nft_transfer")
        .field("old_owner_id", old_owner_id)
        .field("new_owner_id", new_owner_id)
        .field("token_ids", token_ids)
        .field_opt("authorized_id", authorized_id)
        .field_opt("memo", memo)
        .emit();
}

pub fn emit_approval_granted(
    owner_id: &str,
    token_id: &str,
    approved_account_id: &str,
    approval_id: u64,
) {
    Nep171Event::new("nft_approve")
        .field("owner_id", owner_id)
        .field("token_id", token_id)
        .field("approved_account_id", approved_account_id)
        .field("approval_id", approval_id)
        .emit();
}

pub fn emit_approval_revoked(owner_id: &str, token_id: &str, revoked_account_id: Option<&str>) {
    Nep171Event::new("nft_revoke")
        .field("owner_id", owner_id)
        .field("token_id", token_id)
        .field_opt("revoked_account_id", revoked_account_id)
        .emit();
}
