//! Splitter configuration.

use alloy_primitives::Address;

use crate::ConfigError;

/// Immutable limits and local accounts for pool-content splitting.
///
/// Built once, then shared read-only by every `split` call. Limits of
/// zero are legal: they make every transaction invalid or every list
/// trivially full, they do not fail construction. The only fallible
/// step is parsing the configured local account strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitterConfig {
    /// Chain the snapshot's signatures must commit to.
    pub chain_id: u64,
    /// Maximum number of transactions per produced list.
    pub max_txs_per_list: u64,
    /// Maximum cumulative gas limit per produced list.
    pub max_gas_per_list: u64,
    /// Maximum canonical encoded size per produced list, in bytes.
    pub max_bytes_per_list: u64,
    /// Minimum gas limit for a single transaction to be considered.
    pub min_tx_gas: u64,
    /// Accounts given priority treatment: their lists precede all
    /// others in a split result.
    pub locals: Vec<Address>,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            chain_id: 1,
            max_txs_per_list: 200,
            max_gas_per_list: 30_000_000,
            max_bytes_per_list: 120_000, // ~ one proposal's worth of calldata
            min_tx_gas: 21_000,
            locals: Vec::new(),
        }
    }
}

impl SplitterConfig {
    /// Creates a new builder for configuring a splitter.
    pub fn builder() -> SplitterConfigBuilder {
        SplitterConfigBuilder::default()
    }
}

/// Builder for [`SplitterConfig`].
#[derive(Clone, Debug)]
pub struct SplitterConfigBuilder {
    chain_id: u64,
    max_txs_per_list: u64,
    max_gas_per_list: u64,
    max_bytes_per_list: u64,
    min_tx_gas: u64,
    locals: Vec<String>,
}

impl Default for SplitterConfigBuilder {
    fn default() -> Self {
        let defaults = SplitterConfig::default();
        Self {
            chain_id: defaults.chain_id,
            max_txs_per_list: defaults.max_txs_per_list,
            max_gas_per_list: defaults.max_gas_per_list,
            max_bytes_per_list: defaults.max_bytes_per_list,
            min_tx_gas: defaults.min_tx_gas,
            locals: Vec::new(),
        }
    }
}

impl SplitterConfigBuilder {
    /// Sets the chain id.
    pub const fn chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = chain_id;
        self
    }

    /// Sets the maximum number of transactions per list.
    pub const fn max_txs_per_list(mut self, max_txs_per_list: u64) -> Self {
        self.max_txs_per_list = max_txs_per_list;
        self
    }

    /// Sets the maximum cumulative gas per list.
    pub const fn max_gas_per_list(mut self, max_gas_per_list: u64) -> Self {
        self.max_gas_per_list = max_gas_per_list;
        self
    }

    /// Sets the maximum canonical encoded size per list, in bytes.
    pub const fn max_bytes_per_list(mut self, max_bytes_per_list: u64) -> Self {
        self.max_bytes_per_list = max_bytes_per_list;
        self
    }

    /// Sets the minimum per-transaction gas limit.
    pub const fn min_tx_gas(mut self, min_tx_gas: u64) -> Self {
        self.min_tx_gas = min_tx_gas;
        self
    }

    /// Sets the local account strings, parsed and validated by
    /// [`build`](Self::build).
    pub fn locals(mut self, locals: Vec<String>) -> Self {
        self.locals = locals;
        self
    }

    /// Builds the configuration, parsing the local account strings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAccount`] on the first account
    /// string that is not a valid address after whitespace trimming.
    pub fn build(self) -> Result<SplitterConfig, ConfigError> {
        let mut locals = Vec::with_capacity(self.locals.len());
        for account in &self.locals {
            let trimmed = account.trim();
            let address = trimmed
                .parse::<Address>()
                .map_err(|_| ConfigError::InvalidAccount { account: trimmed.to_string() })?;
            locals.push(address);
        }

        Ok(SplitterConfig {
            chain_id: self.chain_id,
            max_txs_per_list: self.max_txs_per_list,
            max_gas_per_list: self.max_gas_per_list,
            max_bytes_per_list: self.max_bytes_per_list,
            min_tx_gas: self.min_tx_gas,
            locals,
        })
    }
}
