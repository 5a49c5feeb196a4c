use crate::guards::check_one_yocto;
use crate::validation::{validate_base_uri, validate_cohort_params};
use crate::*;

#[near]
impl Contract {
    /// Deploys with one cohort per entry of the parallel `cohort_ids`, `limits` and
    /// `token_mints` arrays. `owner_id` defaults to the deploying account.
    #[init]
    pub fn new(
        base_uri: String,
        cohort_ids: Vec<String>,
        limits: Vec<u32>,
        token_mints: Vec<u32>,
        owner_id: Option<AccountId>,
        metadata: Option<DistributorMetadata>,
    ) -> Self {
        let owner_id = owner_id.unwrap_or_else(env::predecessor_account_id);
        Self::try_new(base_uri, cohort_ids, limits, token_mints, owner_id, metadata)
            .unwrap_or_else(|err| env::panic_str(&err.to_string()))
    }

    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), DistributorError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if new_owner == self.owner_id {
            return Err(DistributorError::InvalidInput(
                "new owner must differ from current owner".into(),
            ));
        }
        let old_owner = std::mem::replace(&mut self.owner_id, new_owner);
        // The new owner is implicitly an admin; keep the explicit set free of it.
        self.admins.remove(&self.owner_id);
        events::emit_owner_transferred(&old_owner, &self.owner_id);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn add_admin(&mut self, account_id: AccountId) -> Result<(), DistributorError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if account_id == self.owner_id || self.admins.contains(&account_id) {
            return Err(DistributorError::InvalidInput("admin already exists".into()));
        }
        if self.admins.len() as usize >= MAX_ADMINS {
            return Err(DistributorError::InvalidState(format!(
                "too many admins (max {})",
                MAX_ADMINS
            )));
        }
        self.admins.insert(account_id.clone());
        events::emit_admin_added(&self.owner_id, &account_id);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn remove_admin(&mut self, account_id: AccountId) -> Result<(), DistributorError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if !self.admins.remove(&account_id) {
            return Err(DistributorError::NotFound("admin not found".into()));
        }
        events::emit_admin_removed(&self.owner_id, &account_id);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn set_base_uri(&mut self, base_uri: String) -> Result<(), DistributorError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        validate_base_uri(&base_uri)?;
        let old_base_uri = std::mem::replace(&mut self.base_uri, base_uri);
        events::emit_base_uri_updated(&self.owner_id, &old_base_uri, &self.base_uri);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn set_contract_metadata(
        &mut self,
        name: Option<String>,
        symbol: Option<String>,
        icon: Option<Option<String>>,
        reference: Option<Option<String>>,
        reference_hash: Option<Option<near_sdk::json_types::Base64VecU8>>,
    ) -> Result<(), DistributorError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if let Some(n) = name {
            self.metadata.name = n;
        }
        if let Some(s) = symbol {
            self.metadata.symbol = s;
        }
        if let Some(v) = icon {
            self.metadata.icon = v;
        }
        if let Some(v) = reference {
            self.metadata.reference = v;
        }
        if let Some(v) = reference_hash {
            self.metadata.reference_hash = v;
        }
        events::emit_metadata_updated(
            &self.owner_id,
            &self.metadata.name,
            &self.metadata.symbol,
            self.metadata.icon.as_deref(),
        );
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn set_paused(&mut self, paused: bool) -> Result<(), DistributorError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if self.paused == paused {
            return Ok(());
        }
        self.paused = paused;
        events::emit_paused_changed(&self.owner_id, paused);
        Ok(())
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn get_admins(&self) -> Vec<&AccountId> {
        self.admins.iter().collect()
    }

    pub fn is_admin(&self, account_id: AccountId) -> bool {
        self.check_admin(&account_id).is_ok()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn get_base_uri(&self) -> &str {
        &self.base_uri
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }
}

impl Contract {
    pub(crate) fn try_new(
        base_uri: String,
        cohort_ids: Vec<String>,
        limits: Vec<u32>,
        token_mints: Vec<u32>,
        owner_id: AccountId,
        metadata: Option<DistributorMetadata>,
    ) -> Result<Self, DistributorError> {
        validate_base_uri(&base_uri)?;
        let rows = validate_cohort_params(cohort_ids, &limits, &token_mints)?;

        let mut contract = Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id,
            admins: IterableSet::new(StorageKey::Admins),
            paused: false,
            base_uri,
            metadata: metadata.unwrap_or_default(),
            cohorts: IterableMap::new(StorageKey::Cohorts),
            tokens_by_id: IterableMap::new(StorageKey::TokensById),
            tokens_per_owner: LookupMap::new(StorageKey::TokensPerOwner),
            tokens_per_cohort: LookupMap::new(StorageKey::TokensPerCohort),
        };
        events::emit_contract_init(&contract.owner_id, &contract.base_uri, rows.len() as u32);
        for (cohort_id, limit, minted) in rows {
            contract.insert_cohort(cohort_id, limit, minted);
        }
        Ok(contract)
    }
}
