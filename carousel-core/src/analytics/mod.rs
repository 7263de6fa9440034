/// Snapshot, post and metric records, the store trait and rate arithmetic.
pub mod metrics;
