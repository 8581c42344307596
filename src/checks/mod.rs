// Rule evaluators — pure decision logic over already-fetched signals.
//
// Severity is two-tiered: instant dismissals end the run on their own,
// red flags only fail an account in aggregate (two or more). The word-list
// and blacklist checks dismiss; the heuristic checks (digit count, 'alt'
// substring, low activity) only flag. That asymmetry is deliberate —
// heuristics get a human look before they cost anyone a membership.

pub mod age;
pub mod blacklist;
pub mod social;
pub mod username;
pub mod verdict;
