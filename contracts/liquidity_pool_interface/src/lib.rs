#![no_std]

use soroban_sdk::{contractclient, contracterror, Address, Env};

/// Failure codes returned by the liquidity pool. A returned error aborts the
/// whole invocation, so no partial effects are ever persisted.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LiquidityPoolError {
    /// "only owner"
    OnlyOwner = 1,
    /// "insufficient pool balance"
    InsufficientPoolBalance = 2,
    /// amount below zero
    NegativeAmount = 3,
    /// contribution counter would exceed i128
    Overflow = 4,
}

/// Trait defining the interface for the Liquidity Pool contract.
/// This trait is used to generate the LiquidityPoolClient for type-safe cross-contract calls.
#[contractclient(name = "LiquidityPoolClient")]
pub trait LiquidityPoolTrait {
    fn __constructor(env: Env, owner: Address, asset: Address);

    fn deposit(env: Env, from: Address, amount: i128) -> Result<(), LiquidityPoolError>;
    fn withdraw(
        env: Env,
        caller: Address,
        recipient: Address,
        amount: i128,
    ) -> Result<(), LiquidityPoolError>;

    fn balances(env: Env, depositor: Address) -> i128;
    fn pool_balance(env: Env) -> i128;
    fn owner(env: Env) -> Address;
}
