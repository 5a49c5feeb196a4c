use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    /// Redeploys this account with the WASM passed as raw call input and chains `migrate`.
    #[payable]
    #[handle_result]
    pub fn update_contract(&mut self) -> Result<Promise, DistributorError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        let code = env::input()
            .filter(|code| !code.is_empty())
            .ok_or_else(|| DistributorError::InvalidInput("missing contract code".into()))?;

        Ok(Promise::new(env::current_account_id())
            .deploy_contract(code)
            .function_call(
                "migrate".to_string(),
                vec![],
                NearToken::from_yoctonear(0),
                Gas::from_tgas(GAS_MIGRATE_TGAS),
            )
            .as_return())
    }

    #[private]
    #[init(ignore_state)]
    pub fn migrate() -> Self {
        let mut contract = env::state_read::<Self>().unwrap_or_else(|| {
            env::panic_str(
                &DistributorError::InternalError("no state to migrate".into()).to_string(),
            )
        });
        let previous_version =
            std::mem::replace(&mut contract.version, env!("CARGO_PKG_VERSION").to_string());
        events::emit_contract_upgraded(&contract.owner_id, &previous_version, &contract.version);
        contract
    }
}
