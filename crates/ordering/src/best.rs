//! Merged price-and-nonce transaction cursor.

use std::{
    cmp::Ordering,
    collections::{BinaryHeap, HashMap, VecDeque},
};

use alloy_consensus::{
    Transaction, TxEnvelope,
    transaction::{Recovered, SignerRecoverable},
};
use alloy_primitives::Address;
use quarry_primitives::PoolContent;
use tracing::debug;

/// The current head of one sender's queue, ranked by effective fee.
///
/// Equal fees break toward the lower sender address so the merge order
/// is stable across repeated runs over the same snapshot.
#[derive(Debug, PartialEq, Eq)]
struct QueueHead {
    fee: u128,
    sender: Address,
}

impl Ord for QueueHead {
    fn cmp(&self, other: &Self) -> Ordering {
        self.fee.cmp(&other.fee).then_with(|| other.sender.cmp(&self.sender))
    }
}

impl PartialOrd for QueueHead {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A cursor over the merged pending queues of many senders.
///
/// At every step the head transactions of all live queues race by
/// descending effective fee (`priority_fee_or_price`, the price ordering
/// with no base fee at selection time); within one sender transactions
/// are only ever yielded in ascending nonce order. The cursor owns its
/// iteration state: construct one per consuming pass, never share it.
///
/// Sender identity is derived by recovering the signer of each queue's
/// first transaction. A queue is dropped whole when recovery fails, when
/// the recovered address differs from the snapshot key, or when the
/// transaction was signed for another chain.
#[derive(Debug)]
pub struct BestTransactions {
    /// Per-sender pending queues, nonce-ascending.
    queues: HashMap<Address, VecDeque<Recovered<TxEnvelope>>>,
    /// One entry per sender with a non-empty queue, keyed by the fee of
    /// that sender's current head.
    heads: BinaryHeap<QueueHead>,
}

impl BestTransactions {
    /// Builds the cursor from a snapshot, recovering senders and sorting
    /// each queue by nonce.
    pub fn new(chain_id: u64, content: PoolContent) -> Self {
        let mut queues = HashMap::with_capacity(content.account_count());
        let mut heads = BinaryHeap::with_capacity(content.account_count());

        for (sender, mut txs) in content {
            if txs.is_empty() {
                continue;
            }
            txs.sort_by_key(|tx| tx.nonce());

            let signer = match txs[0].recover_signer() {
                Ok(signer) => signer,
                Err(err) => {
                    debug!(%sender, %err, "dropping queue with unrecoverable signature");
                    continue;
                }
            };
            if signer != sender {
                debug!(%sender, %signer, "dropping queue with mismatched sender");
                continue;
            }
            if txs[0].chain_id().is_some_and(|id| id != chain_id) {
                debug!(%sender, "dropping queue signed for another chain");
                continue;
            }

            heads.push(QueueHead { fee: txs[0].priority_fee_or_price(), sender });
            queues.insert(
                sender,
                txs.into_iter().map(|tx| Recovered::new_unchecked(tx, signer)).collect(),
            );
        }

        Self { queues, heads }
    }

    /// Returns the next best transaction without consuming it.
    pub fn peek(&self) -> Option<&Recovered<TxEnvelope>> {
        let head = self.heads.peek()?;
        self.queues.get(&head.sender).and_then(VecDeque::front)
    }

    /// Consumes the current best transaction and advances its sender.
    ///
    /// The sender's next transaction (if any) re-enters the race with
    /// its own fee.
    pub fn shift(&mut self) -> Option<Recovered<TxEnvelope>> {
        let head = self.heads.pop()?;
        let queue = self.queues.get_mut(&head.sender)?;
        let tx = queue.pop_front();

        match queue.front() {
            Some(next) => {
                let fee = next.inner().priority_fee_or_price();
                self.heads.push(QueueHead { fee, sender: head.sender });
            }
            None => {
                self.queues.remove(&head.sender);
            }
        }

        tx
    }

    /// Discards the current best sender's entire remaining queue.
    ///
    /// Used when the head transaction is unusable: the nonce gap makes
    /// every later transaction from that sender unreachable too.
    pub fn pop(&mut self) {
        if let Some(head) = self.heads.pop() {
            self.queues.remove(&head.sender);
        }
    }

    /// Returns true if the cursor is exhausted.
    pub fn is_empty(&self) -> bool {
        self.heads.is_empty()
    }

    /// Returns the number of transactions remaining across all senders.
    pub fn len(&self) -> usize {
        self.queues.values().map(VecDeque::len).sum()
    }
}
