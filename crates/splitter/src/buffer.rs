//! In-progress list accumulation.

use alloy_consensus::{Transaction, TxEnvelope};
use quarry_primitives::TxList;

use crate::SplitterConfig;

/// Accumulates transactions into the current in-progress list and
/// decides when that list must be closed.
///
/// Callers are expected to validate a candidate before consulting
/// [`is_full`](Self::is_full): the fullness checks assume the candidate
/// individually satisfies the per-transaction bounds.
#[derive(Debug)]
pub struct TxBuffer {
    list: TxList,
    gas: u64,
    max_txs: u64,
    max_gas: u64,
    max_bytes: u64,
}

impl TxBuffer {
    /// Creates an empty buffer with the configured per-list limits.
    pub fn new(config: &SplitterConfig) -> Self {
        Self {
            list: TxList::new(),
            gas: 0,
            max_txs: config.max_txs_per_list,
            max_gas: config.max_gas_per_list,
            max_bytes: config.max_bytes_per_list,
        }
    }

    /// Returns true iff appending `candidate` would have to start a new
    /// list: the count limit is already reached, the gas sum would
    /// overshoot, or the canonical encoding of the list with the
    /// candidate included would exceed the byte limit.
    ///
    /// The byte check sizes the whole prospective list; list framing is
    /// non-additive, so summing per-transaction sizes would undercount.
    pub fn is_full(&self, candidate: &TxEnvelope) -> bool {
        if self.list.len() as u64 >= self.max_txs {
            return true;
        }

        if self.gas.saturating_add(candidate.gas_limit()) > self.max_gas {
            return true;
        }

        self.list.encoded_len_with(candidate) as u64 > self.max_bytes
    }

    /// Appends a transaction and accrues its gas limit.
    pub fn push(&mut self, tx: TxEnvelope) {
        self.gas = self.gas.saturating_add(tx.gas_limit());
        self.list.push(tx);
    }

    /// Closes the current list, leaving the buffer empty.
    pub fn seal(&mut self) -> TxList {
        self.gas = 0;
        std::mem::take(&mut self.list)
    }

    /// Returns true if no transactions are buffered.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the number of buffered transactions.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns the running gas sum of the buffered transactions.
    pub const fn gas(&self) -> u64 {
        self.gas
    }
}
