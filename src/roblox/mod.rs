// Roblox public API fetchers.
//
// One submodule per remote resource. Every fetcher degrades to an absence
// value on failure so the rule evaluators can distinguish "signal
// unverifiable" from "signal verified negative" — nothing in this module
// panics or propagates errors past its own seam.

pub mod badges;
pub mod client;
pub mod friends;
pub mod groups;
pub mod thumbnails;
pub mod users;

pub use client::RobloxClient;
