#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/quarry-l2/quarry/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod pool_content;
pub use pool_content::PoolContent;

mod tx_list;
pub use tx_list::TxList;

// Re-export key types from dependencies for convenience
pub use alloy_consensus::TxEnvelope;
pub use alloy_primitives::Address;
