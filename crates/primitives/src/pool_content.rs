//! Pool snapshot type.

use std::collections::BTreeMap;

use alloy_consensus::TxEnvelope;
use alloy_primitives::Address;

/// A point-in-time view of pending transactions grouped by sender.
///
/// This is the shape of a `txpool_content`-style query result: every
/// account appears at most once, mapped to its pending transactions.
/// The snapshot is an immutable input to splitting; consumers never
/// mutate the per-sender sequences.
///
/// Backed by a [`BTreeMap`] so traversal is address byte order and
/// therefore deterministic across runs for the same snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PoolContent(BTreeMap<Address, Vec<TxEnvelope>>);

impl PoolContent {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pending transactions for `sender`, replacing any previous
    /// entry.
    pub fn insert(&mut self, sender: Address, txs: Vec<TxEnvelope>) {
        self.0.insert(sender, txs);
    }

    /// Appends a single pending transaction to `sender`'s queue.
    pub fn push_transaction(&mut self, sender: Address, tx: TxEnvelope) {
        self.0.entry(sender).or_default().push(tx);
    }

    /// Returns the total number of pending transactions across all
    /// accounts.
    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// Returns true if the snapshot holds no transactions at all.
    ///
    /// Accounts mapped to empty sequences are legal and do not count.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of accounts in the snapshot.
    pub fn account_count(&self) -> usize {
        self.0.len()
    }

    /// Iterates accounts and their pending transactions in address byte
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (&Address, &Vec<TxEnvelope>)> {
        self.0.iter()
    }

    /// Splits the snapshot into (locals, remotes) by sender membership in
    /// `locals`.
    ///
    /// Every account lands in exactly one side; both sides keep the
    /// deterministic traversal order of the source snapshot.
    pub fn partition(&self, locals: &[Address]) -> (Self, Self) {
        let mut local_txs = Self::new();
        let mut remote_txs = Self::new();

        for (sender, txs) in &self.0 {
            if locals.contains(sender) {
                local_txs.insert(*sender, txs.clone());
            } else {
                remote_txs.insert(*sender, txs.clone());
            }
        }

        (local_txs, remote_txs)
    }
}

impl FromIterator<(Address, Vec<TxEnvelope>)> for PoolContent {
    fn from_iter<I: IntoIterator<Item = (Address, Vec<TxEnvelope>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for PoolContent {
    type Item = (Address, Vec<TxEnvelope>);
    type IntoIter = std::collections::btree_map::IntoIter<Address, Vec<TxEnvelope>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
