use near_sdk::AccountId;

use super::CONTRACT;
use super::builder::EventBuilder;

pub fn emit_contract_init(owner_id: &AccountId, base_uri: &str, cohort_count: u32) {
    EventBuilder::new(CONTRACT, "contract_init", owner_id)
        .field("owner_id", owner_id)
        .field("base_uri", base_uri)
        .field("cohort_count", cohort_count)
        .emit();
}

pub fn emit_contract_upgraded(owner_id: &AccountId, old_version: &str, new_version: &str) {
    EventBuilder::new(CONTRACT, "contract_upgrade", owner_id)
        .field("old_version", old_version)
        .field("new_version", new_version)
        .emit();
}

pub fn emit_owner_transferred(old_owner: &AccountId, new_owner: &AccountId) {
    EventBuilder::new(CONTRACT, "owner_transferred", old_owner)
        .field("old_owner", old_owner)
        .field("new_owner", new_owner)
        .emit();
}

pub fn emit_admin_added(owner_id: &AccountId, admin_id: &AccountId) {
    EventBuilder::new(CONTRACT, "add_admin", owner_id)
        .field("admin_id", admin_id)
        .emit();
}

pub fn emit_admin_removed(owner_id: &AccountId, admin_id: &AccountId) {
    EventBuilder::new(CONTRACT, "remove_admin", owner_id)
        .field("admin_id", admin_id)
        .emit();
}

pub fn emit_base_uri_updated(owner_id: &AccountId, old_base_uri: &str, new_base_uri: &str) {
    EventBuilder::new(CONTRACT, "base_uri_updated", owner_id)
        .field("old_base_uri", old_base_uri)
        .field("new_base_uri", new_base_uri)
        .emit();
    super::NftLog::ContractMetadataUpdate.emit();
}

pub fn emit_metadata_updated(owner_id: &AccountId, name: &str, symbol: &str, icon: Option<&str>) {
    EventBuilder::new(CONTRACT, "contract_metadata_updated", owner_id)
        .field("name", name)
        .field("symbol", symbol)
        .field_opt("icon", icon)
        .emit();
    super::NftLog::ContractMetadataUpdate.emit();
}

pub fn emit_paused_changed(owner_id: &AccountId, paused: bool) {
    EventBuilder::new(CONTRACT, "paused_changed", owner_id)
        .field("paused", paused)
        .emit();
}
