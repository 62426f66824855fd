//! Configuration module for the expense tracker
//!
//! The tracker has no config file. Its only configuration is where the
//! ledger and the optional audit log live.

pub mod paths;

pub use paths::LedgerPaths;
