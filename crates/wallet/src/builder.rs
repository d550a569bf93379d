use serde::{Deserialize, Serialize};

use morevp_ledger::{
    Address, Currency, InputRef, Transaction, TxOutput, TxValidationError, TX_INPUTS,
};

/// An unspent output the wallet may spend: its chain position plus the value
/// stored there.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Utxo {
    pub blknum: u64,
    pub txindex: u64,
    pub oindex: u8,
    pub amount: u128,
    pub currency: Currency,
}

impl Utxo {
    pub fn position(&self) -> InputRef {
        InputRef::new(self.blknum, self.txindex, self.oindex)
    }
}

/// Spendable funds: the UTXOs to consume and where change goes.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Funds {
    pub change_address: Address,
    pub utxos: Vec<Utxo>,
}

/// Receiver intent. The amount arrives signed because it comes straight off
/// an RPC surface; out-of-range requests are rejected here instead of
/// wrapping.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Payment {
    pub owner: Address,
    pub amount: i128,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("cannot spend more than two utxos, got {got}")]
    TooManyUtxo { got: usize },
    #[error("cannot mix currencies within one transaction")]
    CurrencyMixing,
    #[error(transparent)]
    Tx(#[from] TxValidationError),
}

/// Assemble a raw transaction spending `funds` to satisfy `payment`, with
/// change going back to `funds.change_address`.
///
/// UTXOs map positionally onto the two input slots; the receiver takes output
/// slot 1 and change takes slot 2 even when it is zero. All input value is
/// consumed: whatever the receiver and the fee do not take becomes change,
/// and a shortfall is a fault, not a partial spend.
pub fn create_from_utxos(
    funds: &Funds,
    payment: &Payment,
    fee: i128,
) -> Result<Transaction, BuildError> {
    let utxos = &funds.utxos;
    if utxos.len() > TX_INPUTS {
        return Err(BuildError::TooManyUtxo { got: utxos.len() });
    }
    if utxos.iter().any(|u| u.currency != utxos[0].currency) {
        return Err(BuildError::CurrencyMixing);
    }
    let currency = utxos.first().map(|u| u.currency).unwrap_or(Currency::NATIVE);

    if fee < 0 {
        return Err(TxValidationError::FeeNegative.into());
    }
    if payment.amount < 0 {
        return Err(TxValidationError::AmountNegative.into());
    }
    let fee = fee as u128;
    let amount = payment.amount as u128;

    let total = utxos
        .iter()
        .try_fold(0u128, |acc, u| acc.checked_add(u.amount))
        .ok_or(TxValidationError::AmountOverflow)?;
    let need = amount
        .checked_add(fee)
        .ok_or(TxValidationError::AmountOverflow)?;
    let change = total
        .checked_sub(need)
        .ok_or(TxValidationError::AmountNegative)?;

    let inputs: Vec<InputRef> = utxos.iter().map(Utxo::position).collect();
    let outputs = [
        TxOutput::new(payment.owner, amount),
        TxOutput::new(funds.change_address, change),
    ];

    let tx = Transaction::new(&inputs, currency, &outputs, fee)?;
    log::debug!(
        "built tx spending {} utxo(s): pay {amount}, change {change}, fee {fee}",
        utxos.len()
    );
    Ok(tx)
}
