//! Custody of the pooled balance.

use soroban_sdk::{token, Address, Env};

/// Moves value in and out of the ledger's pooled balance.
///
/// Both transfers either complete or abort the enclosing invocation.
pub trait Treasury {
    /// Take `amount` from `from` into the pool.
    fn collect(&self, e: &Env, from: &Address, amount: i128);

    /// Pay `amount` out of the pool to `to`.
    fn release(&self, e: &Env, to: &Address, amount: i128);

    /// Current pooled balance.
    fn balance(&self, e: &Env) -> i128;
}

/// Pool held as a balance of a single token contract.
pub struct TokenTreasury {
    token: Address,
}

impl TokenTreasury {
    pub fn new(token: Address) -> Self {
        Self { token }
    }
}

impl Treasury for TokenTreasury {
    fn collect(&self, e: &Env, from: &Address, amount: i128) {
        token::Client::new(e, &self.token).transfer(from, &e.current_contract_address(), &amount);
    }

    fn release(&self, e: &Env, to: &Address, amount: i128) {
        token::Client::new(e, &self.token).transfer(&e.current_contract_address(), to, &amount);
    }

    fn balance(&self, e: &Env) -> i128 {
        token::Client::new(e, &self.token).balance(&e.current_contract_address())
    }
}
