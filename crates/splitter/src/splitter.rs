//! The pool-content splitting engine.

use alloy_consensus::{Transaction, TxEnvelope};
use alloy_rlp::Encodable;
use quarry_ordering::BestTransactions;
use quarry_primitives::{PoolContent, TxList};
use tracing::debug;

use crate::{SplitterConfig, TxBuffer, ValidationError};

/// Splits a pool snapshot into transaction lists that each satisfy the
/// configured per-list limits, locals' lists preceding remotes'.
///
/// Stateless apart from its immutable configuration: cursor state is
/// created fresh inside every [`split`](Self::split) call, so concurrent
/// calls are safe and repeated calls over the same snapshot produce
/// identical results.
#[derive(Clone, Debug)]
pub struct PoolContentSplitter {
    config: SplitterConfig,
}

impl PoolContentSplitter {
    /// Creates a splitter from a built configuration.
    pub fn new(config: SplitterConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub const fn config(&self) -> &SplitterConfig {
        &self.config
    }

    /// Splits the snapshot into limit-satisfying lists.
    ///
    /// Never fails: a transaction violating the protocol bounds is
    /// dropped together with the rest of its sender's queue (the nonce
    /// gap makes those unreachable anyway) and reported only at debug
    /// level.
    pub fn split(&self, content: &PoolContent) -> Vec<TxList> {
        debug!(
            pending = content.len(),
            accounts = content.account_count(),
            "splitting pool content"
        );

        let (local_txs, remote_txs) = content.partition(&self.config.locals);

        let mut lists =
            self.split_stream(BestTransactions::new(self.config.chain_id, local_txs));
        lists.extend(self.split_stream(BestTransactions::new(self.config.chain_id, remote_txs)));
        lists
    }

    /// Drains one ordered stream into lists, cutting a new list whenever
    /// the buffer reports full.
    fn split_stream(&self, mut txs: BestTransactions) -> Vec<TxList> {
        let mut lists = Vec::new();
        let mut buffer = TxBuffer::new(&self.config);

        loop {
            let verdict = match txs.peek() {
                None => break,
                Some(tx) => self
                    .validate_tx(tx.inner())
                    .map(|()| buffer.is_full(tx.inner()))
                    .map_err(|err| (*tx.inner().tx_hash(), err)),
            };

            match verdict {
                Err((hash, err)) => {
                    debug!(%hash, %err, "dropping invalid pending transaction");
                    // The rejected nonce poisons the sender's remaining
                    // queue, so discard it wholesale.
                    txs.pop();
                }
                Ok(full) => {
                    if full {
                        lists.push(buffer.seal());
                    }
                    if let Some(tx) = txs.shift() {
                        let (tx, _) = tx.into_parts();
                        buffer.push(tx);
                    }
                }
            }
        }

        if !buffer.is_empty() {
            lists.push(buffer.seal());
        }

        lists
    }

    /// Checks a single transaction against the static protocol bounds.
    ///
    /// Purely structural: gas-limit bounds, then standalone encoded
    /// size. State and balance checks belong to the execution engine.
    fn validate_tx(&self, tx: &TxEnvelope) -> Result<(), ValidationError> {
        let gas = tx.gas_limit();
        if gas < self.config.min_tx_gas || gas > self.config.max_gas_per_list {
            return Err(ValidationError::GasOutOfBounds {
                got: gas,
                lower_bound: self.config.min_tx_gas,
                upper_bound: self.config.max_gas_per_list,
            });
        }

        let size = tx.length();
        if size as u64 > self.config.max_bytes_per_list {
            return Err(ValidationError::TxTooLarge {
                size,
                limit: self.config.max_bytes_per_list,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloy_consensus::{SignableTransaction, TxLegacy};
    use alloy_primitives::{B256, Bytes, Signature, U256};
    use alloy_signer::SignerSync;
    use alloy_signer_local::PrivateKeySigner;

    use super::*;

    const CHAIN_ID: u64 = 167;

    fn signer(seed: u8) -> PrivateKeySigner {
        PrivateKeySigner::from_bytes(&B256::repeat_byte(seed)).unwrap()
    }

    fn signed_tx(signer: &PrivateKeySigner, nonce: u64, gas_limit: u64) -> TxEnvelope {
        let tx = TxLegacy {
            chain_id: Some(CHAIN_ID),
            nonce,
            gas_limit,
            gas_price: 1_000_000_000,
            ..Default::default()
        };
        let sig = signer.sign_hash_sync(&tx.signature_hash()).unwrap();
        TxEnvelope::Legacy(tx.into_signed(sig))
    }

    fn unsigned_tx(gas_limit: u64, input_len: usize) -> TxEnvelope {
        let tx = TxLegacy {
            gas_limit,
            input: Bytes::from(vec![0u8; input_len]),
            ..Default::default()
        };
        let sig = Signature::new(U256::from(1), U256::from(1), false);
        TxEnvelope::Legacy(tx.into_signed(sig))
    }

    fn splitter_with(config: SplitterConfig) -> PoolContentSplitter {
        PoolContentSplitter::new(config)
    }

    #[test]
    fn validate_rejects_gas_below_minimum() {
        let splitter = splitter_with(SplitterConfig {
            chain_id: CHAIN_ID,
            min_tx_gas: 21_000,
            ..Default::default()
        });
        let err = splitter.validate_tx(&unsigned_tx(0, 0)).unwrap_err();
        assert!(matches!(err, ValidationError::GasOutOfBounds { got: 0, .. }));
    }

    #[test]
    fn validate_rejects_gas_above_list_maximum() {
        let splitter = splitter_with(SplitterConfig {
            chain_id: CHAIN_ID,
            min_tx_gas: 0,
            max_gas_per_list: 21_000,
            ..Default::default()
        });
        let err = splitter.validate_tx(&unsigned_tx(21_001, 0)).unwrap_err();
        assert!(matches!(err, ValidationError::GasOutOfBounds { got: 21_001, .. }));
    }

    #[test]
    fn validate_rejects_oversized_encoding() {
        let splitter = splitter_with(SplitterConfig {
            chain_id: CHAIN_ID,
            min_tx_gas: 0,
            max_bytes_per_list: 100,
            ..Default::default()
        });
        let err = splitter.validate_tx(&unsigned_tx(21_000, 500)).unwrap_err();
        assert!(matches!(err, ValidationError::TxTooLarge { limit: 100, .. }));
    }

    #[test]
    fn validate_checks_gas_bounds_before_size() {
        // Both violations at once: the gas bound is reported.
        let splitter = splitter_with(SplitterConfig {
            chain_id: CHAIN_ID,
            min_tx_gas: 21_000,
            max_bytes_per_list: 10,
            ..Default::default()
        });
        let err = splitter.validate_tx(&unsigned_tx(0, 500)).unwrap_err();
        assert!(matches!(err, ValidationError::GasOutOfBounds { .. }));
    }

    #[test]
    fn split_of_empty_snapshot_is_empty() {
        let splitter = splitter_with(SplitterConfig { chain_id: CHAIN_ID, ..Default::default() });
        assert!(splitter.split(&PoolContent::new()).is_empty());
    }

    #[test]
    fn split_drops_transaction_below_gas_minimum() {
        let a = signer(0x11);
        let splitter = splitter_with(SplitterConfig {
            chain_id: CHAIN_ID,
            min_tx_gas: 21_000,
            ..Default::default()
        });

        let mut content = PoolContent::new();
        content.insert(a.address(), vec![signed_tx(&a, 0, 0)]);
        assert!(splitter.split(&content).is_empty());
    }

    #[test]
    fn split_drops_transaction_above_gas_maximum() {
        let a = signer(0x11);
        let splitter = splitter_with(SplitterConfig {
            chain_id: CHAIN_ID,
            min_tx_gas: 21_000,
            max_gas_per_list: 21_000,
            ..Default::default()
        });

        let mut content = PoolContent::new();
        content.insert(a.address(), vec![signed_tx(&a, 0, 21_001)]);
        assert!(splitter.split(&content).is_empty());
    }

    #[test]
    fn split_drops_oversized_transaction() {
        let a = signer(0x11);
        let tx = signed_tx(&a, 0, 21_000);
        let splitter = splitter_with(SplitterConfig {
            chain_id: CHAIN_ID,
            min_tx_gas: 0,
            max_bytes_per_list: (tx.length() - 1) as u64,
            ..Default::default()
        });

        let mut content = PoolContent::new();
        content.insert(a.address(), vec![tx]);
        assert!(splitter.split(&content).is_empty());
    }

    #[test]
    fn split_cuts_a_new_list_at_the_count_limit() {
        let a = signer(0x11);
        let splitter = splitter_with(SplitterConfig {
            chain_id: CHAIN_ID,
            min_tx_gas: 21_000,
            max_txs_per_list: 1,
            max_gas_per_list: 22_000,
            ..Default::default()
        });

        let mut content = PoolContent::new();
        content.insert(a.address(), vec![signed_tx(&a, 1, 21_001), signed_tx(&a, 2, 21_001)]);

        let lists = splitter.split(&content);
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0].len(), 1);
        assert_eq!(lists[1].len(), 1);
        let nonces: Vec<u64> =
            lists.iter().flat_map(TxList::iter).map(Transaction::nonce).collect();
        assert_eq!(nonces, vec![1, 2]);
    }
}
