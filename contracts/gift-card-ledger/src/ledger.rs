//! Card lifecycle and custody rules.
//!
//! Each mutating operation holds the entry guard for its whole duration and
//! finishes every storage write before value leaves or enters the pool, so a
//! nested call made from inside a transfer sees the final state and is
//! rejected with [`LedgerError::ReentrantCall`].

use soroban_sdk::{log, Address, BytesN, Env, Vec};

use crate::code;
use crate::errors::LedgerError;
use crate::events;
use crate::storage::{self, Card};
use crate::treasury::Treasury;

/// Held while a mutating operation runs. Dropping it releases the lock, so
/// every return path, including `?`, unlocks the ledger.
struct EntryGuard<'a> {
    e: &'a Env,
}

impl<'a> EntryGuard<'a> {
    fn acquire(e: &'a Env) -> Result<Self, LedgerError> {
        if storage::is_locked(e) {
            log!(e, "rejected nested ledger call");
            return Err(LedgerError::ReentrantCall);
        }
        storage::lock(e);
        Ok(Self { e })
    }
}

impl Drop for EntryGuard<'_> {
    fn drop(&mut self) {
        storage::unlock(self.e);
    }
}

/// Issue a new card worth `amount`, collected from `depositor`.
///
/// Returns the card id and its redeem code.
pub fn create_card<T: Treasury>(
    e: &Env,
    treasury: &T,
    depositor: &Address,
    amount: i128,
) -> Result<(u64, BytesN<8>), LedgerError> {
    let _guard = EntryGuard::acquire(e)?;

    if amount <= 0 {
        return Err(LedgerError::ZeroDeposit);
    }

    let id = storage::next_id(e);
    let code = fresh_code(e, id)?;

    let card = Card {
        id,
        redeem_code: code.clone(),
        creator: depositor.clone(),
        deposit_amount: amount,
        redeemed: false,
    };
    storage::write_card(e, &card);
    storage::index_code(e, &code, id);
    storage::set_next_id(e, id + 1);
    storage::extend_instance(e);

    treasury.collect(e, depositor, amount);

    log!(e, "card created", id, amount);
    events::CardCreated {
        id,
        code: code.clone(),
        creator: depositor.clone(),
        amount,
    }
    .publish(e);

    Ok((id, code))
}

/// Redeem `code`, paying its deposit to `claimant`.
pub fn redeem<T: Treasury>(
    e: &Env,
    treasury: &T,
    claimant: &Address,
    code: &BytesN<8>,
) -> Result<i128, LedgerError> {
    let _guard = EntryGuard::acquire(e)?;

    let id = storage::card_for_code(e, code).ok_or(LedgerError::CodeNotFound)?;
    let mut card = storage::card(e, id)?;
    if card.redeemed || storage::is_redeemed(e, code) {
        return Err(LedgerError::AlreadyRedeemed);
    }

    card.redeemed = true;
    storage::write_card(e, &card);
    storage::mark_redeemed(e, code);
    storage::extend_instance(e);

    treasury.release(e, claimant, card.deposit_amount);

    log!(e, "card redeemed", id, card.deposit_amount);
    events::Redeemed {
        id,
        claimant: claimant.clone(),
        code: code.clone(),
        amount: card.deposit_amount,
    }
    .publish(e);

    Ok(card.deposit_amount)
}

/// Deposit amount and redeemed flag of card `id`.
pub fn get_status(e: &Env, id: u64) -> Result<(i128, bool), LedgerError> {
    let card = storage::card(e, id)?;
    Ok((card.deposit_amount, card.redeemed))
}

/// Up to `limit` cards in issue order, starting at id `start`.
///
/// `limit` is capped at [`storage::MAX_CARDS_PAGE`]; a `start` past the last
/// card gives an empty page.
pub fn cards(e: &Env, start: u64, limit: u32) -> Result<Vec<Card>, LedgerError> {
    let limit = limit.min(storage::MAX_CARDS_PAGE);
    let end = start
        .saturating_add(u64::from(limit))
        .min(storage::next_id(e));

    let mut page = Vec::new(e);
    for id in start..end {
        page.push_back(storage::card(e, id)?);
    }
    Ok(page)
}

/// Sweep the whole pooled balance to the administrator.
///
/// This includes value backing cards that are still active.
pub fn withdraw_residual<T: Treasury>(
    e: &Env,
    treasury: &T,
    caller: &Address,
) -> Result<i128, LedgerError> {
    let _guard = EntryGuard::acquire(e)?;

    let admin = storage::admin(e);
    if *caller != admin {
        return Err(LedgerError::Unauthorized);
    }

    let amount = treasury.balance(e);
    if amount <= 0 {
        return Err(LedgerError::NothingToWithdraw);
    }

    storage::extend_instance(e);
    treasury.release(e, &admin, amount);

    log!(e, "residual withdrawn", amount);
    events::ResidualWithdrawn { admin, amount }.publish(e);

    Ok(amount)
}

/// Hand administration to `new_admin`. Only the current admin may do this.
pub fn set_admin(e: &Env, caller: &Address, new_admin: &Address) -> Result<(), LedgerError> {
    let _guard = EntryGuard::acquire(e)?;

    let previous = storage::admin(e);
    if *caller != previous {
        return Err(LedgerError::Unauthorized);
    }

    storage::set_admin(e, new_admin);
    storage::extend_instance(e);

    events::AdminChanged {
        previous,
        admin: new_admin.clone(),
    }
    .publish(e);

    Ok(())
}

/// Draw codes until one is not held by any issued card.
///
/// Every code ever issued stays indexed, so a candidate is rejected both when
/// it is already redeemed and when it backs a card that is still active.
fn fresh_code(e: &Env, id: u64) -> Result<BytesN<8>, LedgerError> {
    let alphabet = storage::alphabet(e);

    for attempt in 0..storage::max_code_attempts(e) {
        let seed = code::derive_seed(e, id, attempt);
        let candidate = code::generate(e, &seed, &alphabet)?;
        if storage::card_for_code(e, &candidate).is_none() && !storage::is_redeemed(e, &candidate) {
            return Ok(candidate);
        }
        log!(e, "code collision", attempt);
    }

    Err(LedgerError::CodeSpaceExhausted)
}
