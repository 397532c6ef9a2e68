#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/quarry-l2/quarry/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod best;
pub use best::BestTransactions;

// Re-export key types from dependencies for convenience
pub use alloy_consensus::transaction::Recovered;
