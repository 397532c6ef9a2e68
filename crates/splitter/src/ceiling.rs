//! Global per-block ceiling over a split result.

use quarry_primitives::TxList;

/// Caps a split result to a global transaction-count ceiling.
///
/// Whole lists are taken while the running count stays strictly under
/// `max_total_txs`; the first list that would not fit whole is truncated
/// to the remaining headroom and everything after it is discarded. This
/// is the caller-side assembly step for one proposed block's worth of
/// lists.
///
/// A list that lands exactly on the ceiling is taken in full (via the
/// truncation path) and still stops iteration. With the ceiling already
/// met the truncated tail is empty and is still kept.
pub fn cap_tx_lists(lists: Vec<TxList>, max_total_txs: u64) -> Vec<TxList> {
    let mut taken = Vec::new();
    let mut count: u64 = 0;

    for mut list in lists {
        if count + (list.len() as u64) < max_total_txs {
            count += list.len() as u64;
            taken.push(list);
            continue;
        }

        list.truncate((max_total_txs - count) as usize);
        taken.push(list);
        break;
    }

    taken
}
