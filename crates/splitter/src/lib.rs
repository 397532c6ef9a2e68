#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/quarry-l2/quarry/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod buffer;
pub use buffer::TxBuffer;

mod ceiling;
pub use ceiling::cap_tx_lists;

mod config;
pub use config::{SplitterConfig, SplitterConfigBuilder};

mod error;
pub use error::{ConfigError, ValidationError};

mod splitter;
pub use splitter::PoolContentSplitter;

// Re-export key types from dependencies for convenience
pub use quarry_ordering::BestTransactions;
pub use quarry_primitives::{Address, PoolContent, TxEnvelope, TxList};
