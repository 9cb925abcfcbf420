use cosmwasm_schema::cw_serde;
use cosmwasm_std::{coins, Addr, Api, BankMsg, Order, StdError, StdResult, Storage, Uint128};
use cw_storage_plus::{Item, Map};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SplitterError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error("payees and shares length mismatch ({payees} payees, {shares} shares)")]
    LengthMismatch { payees: usize, shares: usize },

    #[error("at least one payee is required")]
    NoPayees {},

    #[error("invalid payee address ({payee})")]
    InvalidPayee { payee: String },

    #[error("payee {payee} has zero shares")]
    ZeroShares { payee: Addr },

    #[error("payee {payee} is listed twice")]
    DuplicatePayee { payee: Addr },

    #[error("payees are already registered")]
    AlreadyRegistered {},

    #[error("{account} has no shares")]
    NotPayee { account: Addr },

    #[error("{account} is not due payment")]
    NoPaymentDue { account: Addr },
}

impl From<SplitterError> for StdError {
    fn from(err: SplitterError) -> StdError {
        match err {
            SplitterError::Std(err) => err,
            err => StdError::generic_err(err.to_string()),
        }
    }
}

#[cw_serde]
pub struct Payee {
    pub address: Addr,
    pub shares: u64,
    pub released: Uint128,
}

/// Splits the proceeds held by a contract between a fixed set of payees
/// according to their shares. Payees pull their part with `release`.
pub struct PaymentSplitter<'a> {
    shares: Map<'a, &'a Addr, u64>,
    released: Map<'a, &'a Addr, Uint128>,
    total_shares: Item<'a, u64>,
    total_released: Item<'a, Uint128>,
}

impl<'a> PaymentSplitter<'a> {
    pub const fn new() -> Self {
        PaymentSplitter {
            shares: Map::new("splitter_shares"),
            released: Map::new("splitter_released"),
            total_shares: Item::new("splitter_total_shares"),
            total_released: Item::new("splitter_total_released"),
        }
    }

    /// Registers payees once. The lists are matched by index.
    pub fn register(
        &self,
        storage: &mut dyn Storage,
        api: &dyn Api,
        payees: &[String],
        shares: &[u64],
    ) -> Result<(), SplitterError> {
        if self.total_shares.may_load(storage)?.is_some() {
            return Err(SplitterError::AlreadyRegistered {});
        }
        if payees.len() != shares.len() {
            return Err(SplitterError::LengthMismatch {
                payees: payees.len(),
                shares: shares.len(),
            });
        }
        if payees.is_empty() {
            return Err(SplitterError::NoPayees {});
        }

        let mut total_shares: u64 = 0;
        for (payee, share) in payees.iter().zip(shares) {
            let address = api
                .addr_validate(payee)
                .map_err(|_| SplitterError::InvalidPayee {
                    payee: payee.clone(),
                })?;
            if *share == 0 {
                return Err(SplitterError::ZeroShares { payee: address });
            }
            if self.shares.has(storage, &address) {
                return Err(SplitterError::DuplicatePayee { payee: address });
            }
            self.shares.save(storage, &address, share)?;
            total_shares = total_shares
                .checked_add(*share)
                .ok_or_else(|| StdError::generic_err("total shares overflow"))?;
        }
        self.total_shares.save(storage, &total_shares)?;
        self.total_released.save(storage, &Uint128::zero())?;
        Ok(())
    }

    /// Amount currently owed to `payee`, given the contract's balance in the
    /// payout denom.
    pub fn releasable(
        &self,
        storage: &dyn Storage,
        balance: Uint128,
        payee: &Addr,
    ) -> Result<Uint128, SplitterError> {
        let shares = self
            .shares
            .may_load(storage, payee)?
            .ok_or_else(|| SplitterError::NotPayee {
                account: payee.clone(),
            })?;
        let total_shares = self.total_shares.load(storage)?;
        let total_released = self.total_released.may_load(storage)?.unwrap_or_default();
        let released = self.released.may_load(storage, payee)?.unwrap_or_default();

        let total_received = balance.checked_add(total_released).map_err(StdError::from)?;
        let entitled = total_received.multiply_ratio(shares, total_shares);
        Ok(entitled.saturating_sub(released))
    }

    /// Books the amount owed to `payee` as released and returns the transfer
    /// that pays it out.
    pub fn release(
        &self,
        storage: &mut dyn Storage,
        balance: Uint128,
        payee: &Addr,
        denom: &str,
    ) -> Result<BankMsg, SplitterError> {
        let due = self.releasable(storage, balance, payee)?;
        if due.is_zero() {
            return Err(SplitterError::NoPaymentDue {
                account: payee.clone(),
            });
        }

        self.released
            .update(storage, payee, |released| -> StdResult<_> {
                Ok(released.unwrap_or_default() + due)
            })?;
        self.total_released
            .update(storage, |total| -> StdResult<_> { Ok(total + due) })?;

        Ok(BankMsg::Send {
            to_address: payee.to_string(),
            amount: coins(due.u128(), denom),
        })
    }

    pub fn payees(&self, storage: &dyn Storage) -> StdResult<Vec<Payee>> {
        self.shares
            .range(storage, None, None, Order::Ascending)
            .map(|item| {
                let (address, shares) = item?;
                let released = self.released.may_load(storage, &address)?.unwrap_or_default();
                Ok(Payee {
                    address,
                    shares,
                    released,
                })
            })
            .collect()
    }
}

impl<'a> Default for PaymentSplitter<'a> {
    fn default() -> Self {
        Self::new()
    }
}
