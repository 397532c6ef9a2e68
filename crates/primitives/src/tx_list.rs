//! Transaction list type and canonical size computation.

use alloy_consensus::{Transaction, TxEnvelope};
use alloy_rlp::{Encodable, Header};

/// One bounded proposal unit: an ordered group of transactions.
///
/// The canonical encoding of a list is the RLP list of its
/// transactions' network encodings. List framing overhead is
/// non-additive (the outer header grows with the payload), so byte-limit
/// checks must size the whole list; summing per-transaction sizes is not
/// sufficient. [`Self::encoded_len`] and [`Self::encoded_len_with`] are
/// the authoritative size computations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TxList(Vec<TxEnvelope>);

impl TxList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a transaction.
    pub fn push(&mut self, tx: TxEnvelope) {
        self.0.push(tx);
    }

    /// Returns the number of transactions in the list.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the list holds no transactions.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Shortens the list to at most `len` transactions.
    pub fn truncate(&mut self, len: usize) {
        self.0.truncate(len);
    }

    /// Iterates the transactions in list order.
    pub fn iter(&self) -> impl Iterator<Item = &TxEnvelope> {
        self.0.iter()
    }

    /// Returns the transactions as a slice.
    pub fn as_slice(&self) -> &[TxEnvelope] {
        &self.0
    }

    /// Consumes the list, returning the transactions.
    pub fn into_inner(self) -> Vec<TxEnvelope> {
        self.0
    }

    /// Returns the sum of the gas limits of all transactions.
    pub fn gas_sum(&self) -> u64 {
        self.0.iter().map(Transaction::gas_limit).sum()
    }

    /// Returns the canonical RLP-encoded byte length of the whole list.
    pub fn encoded_len(&self) -> usize {
        list_length(self.payload_length())
    }

    /// Returns the canonical encoded byte length the list would have if
    /// `candidate` were part of it.
    ///
    /// RLP list size depends only on membership, not element order, so
    /// this is exact for the candidate in any position.
    pub fn encoded_len_with(&self, candidate: &TxEnvelope) -> usize {
        list_length(self.payload_length() + candidate.length())
    }

    fn payload_length(&self) -> usize {
        self.0.iter().map(Encodable::length).sum()
    }
}

/// Encoded length of an RLP list with the given payload length.
fn list_length(payload_length: usize) -> usize {
    Header { list: true, payload_length }.length() + payload_length
}

impl From<Vec<TxEnvelope>> for TxList {
    fn from(txs: Vec<TxEnvelope>) -> Self {
        Self(txs)
    }
}

impl FromIterator<TxEnvelope> for TxList {
    fn from_iter<I: IntoIterator<Item = TxEnvelope>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for TxList {
    type Item = TxEnvelope;
    type IntoIter = std::vec::IntoIter<TxEnvelope>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TxList {
    type Item = &'a TxEnvelope;
    type IntoIter = std::slice::Iter<'a, TxEnvelope>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
