use crate::{events, storage::*};
use liquidity_pool_interface::{LiquidityPoolError, LiquidityPoolTrait};
use soroban_sdk::{contract, contractimpl, log, token, Address, Env};

/// Transfers the native asset from the pool to a recipient address.
/// A recipient that rejects the transfer aborts the whole invocation.
fn transfer_out(e: &Env, to: &Address, amount: i128) {
    token::Client::new(e, &get_asset(e)).transfer(&e.current_contract_address(), to, &amount);
}

/// Escrow of the native asset. Anyone may deposit; only the owner may pay out.
///
/// `balances` tracks each depositor's lifetime contribution and is never
/// reduced by `withdraw`. The pool balance is the contract's live custody
/// on the asset contract.
#[contract]
pub struct LiquidityPool;

#[contractimpl]
impl LiquidityPoolTrait for LiquidityPool {
    /// Initializes the pool
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `owner` - The deploying account, the only address allowed to withdraw
    /// * `asset` - The native asset contract the pool custodies
    fn __constructor(e: Env, owner: Address, asset: Address) {
        put_owner(&e, &owner);
        put_asset(&e, &asset);
        extend_instance(&e);
    }

    /// Moves `amount` of the native asset from `from` into the pool and
    /// credits it to `from`'s contribution
    ///
    /// # Errors
    /// * `NegativeAmount` - if `amount` is below zero
    /// * `Overflow` - if the contribution counter would overflow
    fn deposit(e: Env, from: Address, amount: i128) -> Result<(), LiquidityPoolError> {
        from.require_auth();
        extend_instance(&e);

        if amount < 0 {
            return Err(LiquidityPoolError::NegativeAmount);
        }
        if amount == 0 {
            return Ok(());
        }

        let contributed = get_contribution(&e, &from)
            .checked_add(amount)
            .ok_or(LiquidityPoolError::Overflow)?;

        token::Client::new(&e, &get_asset(&e)).transfer(
            &from,
            &e.current_contract_address(),
            &amount,
        );
        put_contribution(&e, &from, contributed);

        events::deposit(&e, from, amount);
        Ok(())
    }

    /// Pays `amount` of pooled funds to `recipient`
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `caller` - The account requesting the payout (must authorize and be the owner)
    /// * `recipient` - The address receiving the funds
    /// * `amount` - The amount to pay out
    ///
    /// # Errors
    /// * `OnlyOwner` - if `caller` is not the owner
    /// * `NegativeAmount` - if `amount` is below zero
    /// * `InsufficientPoolBalance` - if `amount` exceeds the pool balance
    fn withdraw(
        e: Env,
        caller: Address,
        recipient: Address,
        amount: i128,
    ) -> Result<(), LiquidityPoolError> {
        caller.require_auth();
        extend_instance(&e);

        if caller != get_owner(&e) {
            log!(&e, "withdraw rejected: only owner", caller);
            return Err(LiquidityPoolError::OnlyOwner);
        }
        if amount < 0 {
            return Err(LiquidityPoolError::NegativeAmount);
        }
        if amount == 0 {
            return Ok(());
        }

        let pool_balance = get_pool_balance(&e);
        if amount > pool_balance {
            log!(&e, "withdraw rejected: insufficient pool balance", amount, pool_balance);
            return Err(LiquidityPoolError::InsufficientPoolBalance);
        }

        transfer_out(&e, &recipient, amount);

        events::withdraw(&e, recipient, amount);
        Ok(())
    }

    fn balances(e: Env, depositor: Address) -> i128 {
        extend_instance(&e);
        get_contribution(&e, &depositor)
    }

    fn pool_balance(e: Env) -> i128 {
        extend_instance(&e);
        get_pool_balance(&e)
    }

    fn owner(e: Env) -> Address {
        extend_instance(&e);
        get_owner(&e)
    }
}
