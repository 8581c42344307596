// Muster: membership-eligibility vetting for Roblox accounts.
//
// This is the library root. Each module corresponds to a stage of the
// verification pipeline: fetch signals, evaluate rules, aggregate a verdict.

pub mod blacklist;
pub mod checks;
pub mod config;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod roblox;
