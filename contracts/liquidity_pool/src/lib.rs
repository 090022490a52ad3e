#![no_std]

#[cfg(test)]
extern crate std;

#[cfg(feature = "contract")]
mod contract;
#[cfg(feature = "contract")]
mod events;
#[cfg(feature = "contract")]
mod storage;

#[cfg(all(test, feature = "contract"))]
mod tests;

#[cfg(feature = "contract")]
pub use contract::{LiquidityPool, LiquidityPoolClient};

pub use liquidity_pool_interface::{LiquidityPoolError, LiquidityPoolTrait};

use soroban_sdk::contractmeta;

// Metadata that is added on to the WASM custom section
contractmeta!(
    key = "Description",
    val = "Owner-gated native asset liquidity pool"
);
