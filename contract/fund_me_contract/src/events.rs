use soroban_sdk::{contracttype, Address, Env, Symbol};

#[contracttype]
#[derive(Clone)]
pub struct FundedEvent {
    pub funder: Address,
    pub amount: i128,
    pub total_funded: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct WithdrawnEvent {
    pub owner: Address,
    pub amount: i128,
    pub funders_cleared: u32,
}

pub fn emit_funded(env: &Env, event: FundedEvent) {
    env.events().publish((Symbol::new(env, "funded"),), event);
}

pub fn emit_withdrawn(env: &Env, event: WithdrawnEvent) {
    env.events().publish((Symbol::new(env, "withdrawn"),), event);
}
