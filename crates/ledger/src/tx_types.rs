use serde::{Deserialize, Serialize};

use morevp_crypto::keccak256;
use morevp_rlp::{self as rlp, Item, RlpError};

use crate::address::{Address, Currency};

/// Input and output slots per transaction. Fixed so the on-chain verifier's
/// inclusion arithmetic works over constant-size leaves.
pub const TX_INPUTS: usize = 2;
pub const TX_OUTPUTS: usize = 2;

/// Canonical field-list arity: 2×3 input coordinates, the currency, 2×2
/// output fields, the fee.
const TX_FIELDS: usize = 12;

/// Position of a spent output: output slot `oindex` of transaction `txindex`
/// in block `blknum`. The all-zero triple pads unused input slots.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct InputRef {
    pub blknum: u64,
    pub txindex: u64,
    pub oindex: u8,
}

impl InputRef {
    pub const NULL: InputRef = InputRef {
        blknum: 0,
        txindex: 0,
        oindex: 0,
    };

    pub fn new(blknum: u64, txindex: u64, oindex: u8) -> Self {
        Self {
            blknum,
            txindex,
            oindex,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        *self == Self::NULL
    }

    /// Deposit blocks sit between child-chain blocks, so a deposit input is
    /// one whose block number is off the child-block grid.
    pub fn is_deposit(&self, child_block_interval: u64) -> bool {
        !self.is_null() && self.blknum % child_block_interval != 0
    }
}

/// One transaction output: `amount` payable to `owner`. The zero pair pads
/// unused output slots.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct TxOutput {
    pub owner: Address,
    pub amount: u128,
}

impl TxOutput {
    pub const NULL: TxOutput = TxOutput {
        owner: Address::ZERO,
        amount: 0,
    };

    pub fn new(owner: Address, amount: u128) -> Self {
        Self { owner, amount }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        *self == Self::NULL
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TxValidationError {
    #[error("too many inputs: {got}, limit 2")]
    TooManyInputs { got: usize },
    #[error("too many outputs: {got}, limit 2")]
    TooManyOutputs { got: usize },
    #[error("output amount below zero")]
    AmountNegative,
    #[error("fee below zero")]
    FeeNegative,
    #[error("amounts plus fee overflow")]
    AmountOverflow,
    #[error("output index {got} out of range")]
    BadOutputIndex { got: u8 },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TxDecodeError {
    #[error(transparent)]
    Rlp(#[from] RlpError),
    /// Structurally valid RLP that is not a transaction: wrong field widths,
    /// out-of-range values, or bad signature lengths.
    #[error("malformed transaction")]
    MalformedTransaction,
}

/// Raw (unsigned) transfer: two input slots, one currency, two output slots,
/// a flat sender-declared fee. Unused slots hold the null padding values so
/// the wire shape never varies.
///
/// Immutable once built; both constructors return records that satisfy every
/// shape invariant.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Transaction {
    pub inputs: [InputRef; TX_INPUTS],
    pub currency: Currency,
    pub outputs: [TxOutput; TX_OUTPUTS],
    pub fee: u128,
}

impl Transaction {
    /// Build a transaction from up to two inputs and up to two outputs,
    /// padding the rest with the null slots.
    pub fn new(
        inputs: &[InputRef],
        currency: Currency,
        outputs: &[TxOutput],
        fee: u128,
    ) -> Result<Self, TxValidationError> {
        if inputs.len() > TX_INPUTS {
            return Err(TxValidationError::TooManyInputs { got: inputs.len() });
        }
        if outputs.len() > TX_OUTPUTS {
            return Err(TxValidationError::TooManyOutputs { got: outputs.len() });
        }
        let mut ins = [InputRef::NULL; TX_INPUTS];
        ins[..inputs.len()].copy_from_slice(inputs);
        let mut outs = [TxOutput::NULL; TX_OUTPUTS];
        outs[..outputs.len()].copy_from_slice(outputs);

        let tx = Transaction {
            inputs: ins,
            currency,
            outputs: outs,
            fee,
        };
        tx.validate()?;
        Ok(tx)
    }

    /// Stateless shape checks: output indices in range, and the total value
    /// this transaction moves must be representable.
    pub fn validate(&self) -> Result<(), TxValidationError> {
        for input in &self.inputs {
            if input.oindex as usize >= TX_OUTPUTS {
                return Err(TxValidationError::BadOutputIndex { got: input.oindex });
            }
        }
        self.outputs[0]
            .amount
            .checked_add(self.outputs[1].amount)
            .and_then(|sum| sum.checked_add(self.fee))
            .ok_or(TxValidationError::AmountOverflow)?;
        Ok(())
    }

    // === Canonical encoding & hashing ===

    /// The canonical 12-item field list:
    /// `blknum1, txindex1, oindex1, blknum2, txindex2, oindex2, cur12,
    /// newowner1, amount1, newowner2, amount2, fee`. Integers are minimal
    /// big-endian; addresses are always the full 20 bytes.
    pub fn to_item(&self) -> Item {
        let mut fields = Vec::with_capacity(TX_FIELDS);
        for input in &self.inputs {
            fields.push(Item::uint(u128::from(input.blknum)));
            fields.push(Item::uint(u128::from(input.txindex)));
            fields.push(Item::uint(u128::from(input.oindex)));
        }
        fields.push(Item::Bytes(self.currency.as_bytes().to_vec()));
        for output in &self.outputs {
            fields.push(Item::Bytes(output.owner.as_bytes().to_vec()));
            fields.push(Item::uint(output.amount));
        }
        fields.push(Item::uint(self.fee));
        Item::List(fields)
    }

    /// Inverse of [`Transaction::to_item`], strict about every field.
    pub fn from_item(item: &Item) -> Result<Self, TxDecodeError> {
        let fields = item.list()?;
        rlp::expect_arity(fields, TX_FIELDS)?;

        let mut inputs = [InputRef::NULL; TX_INPUTS];
        for (slot, input) in inputs.iter_mut().enumerate() {
            let base = slot * 3;
            *input = InputRef {
                blknum: field_u64(&fields[base])?,
                txindex: field_u64(&fields[base + 1])?,
                oindex: field_oindex(&fields[base + 2])?,
            };
        }

        let currency = Currency(field_address(&fields[6])?);

        let mut outputs = [TxOutput::NULL; TX_OUTPUTS];
        for (slot, output) in outputs.iter_mut().enumerate() {
            let base = 7 + slot * 2;
            *output = TxOutput {
                owner: field_address(&fields[base])?,
                amount: rlp::uint(fields[base + 1].bytes()?)?,
            };
        }

        let fee = rlp::uint(fields[11].bytes()?)?;

        Ok(Transaction {
            inputs,
            currency,
            outputs,
            fee,
        })
    }

    /// Deterministic wire bytes. Equal field values produce identical bytes.
    pub fn encode(&self) -> Vec<u8> {
        rlp::encode(&self.to_item())
    }

    /// 32-byte canonical tx hash: Keccak-256 of the raw encoding. Signatures
    /// commit to this value.
    pub fn hash(&self) -> [u8; 32] {
        keccak256(&self.encode())
    }
}

fn field_u64(item: &Item) -> Result<u64, TxDecodeError> {
    let n = rlp::uint(item.bytes()?)?;
    u64::try_from(n).map_err(|_| TxDecodeError::MalformedTransaction)
}

fn field_oindex(item: &Item) -> Result<u8, TxDecodeError> {
    let n = rlp::uint(item.bytes()?)?;
    if n >= TX_OUTPUTS as u128 {
        return Err(TxDecodeError::MalformedTransaction);
    }
    Ok(n as u8)
}

fn field_address(item: &Item) -> Result<Address, TxDecodeError> {
    let b = item.bytes()?;
    let arr: [u8; 20] = b.try_into().map_err(|_| TxDecodeError::MalformedTransaction)?;
    Ok(Address(arr))
}
