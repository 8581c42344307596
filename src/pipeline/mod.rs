// Verification pipeline — sequences fetches, evaluators, and aggregation.

pub mod verify;

pub use verify::{verify_user, Verification};
