// Username check.
//
// Exact impersonation matches and NSFW word hits are dismissals; the
// 'alt' substring and a high digit count are soft signals only. All
// comparisons run on the lower-cased username against sets that were
// lower-cased at config load.

use crate::config::Config;

/// Findings from the username check: at most one dismissal reason plus
/// any number of red flags.
#[derive(Debug, Clone, Default)]
pub struct UsernameFindings {
    pub dismissal: Option<String>,
    pub red_flags: Vec<String>,
}

pub fn check_username(username: &str, config: &Config) -> UsernameFindings {
    let username = username.to_lowercase();
    let mut findings = UsernameFindings::default();

    if username.contains("alt") {
        findings
            .red_flags
            .push("Username contains 'alt'.".to_string());
    }

    if config.impersonation_names.contains(&username) {
        findings.dismissal = Some("Username impersonates a BA member.".to_string());
    }

    // First matching word wins the message (impersonation takes precedence);
    // the scan still visits every word.
    for word in &config.nsfw_words {
        if !word.is_empty() && username.contains(word.as_str()) {
            findings
                .dismissal
                .get_or_insert_with(|| format!("Username contains offensive term: '{word}'."));
        }
    }

    let digits = username.chars().filter(|c| c.is_ascii_digit()).count();
    if digits >= config.username_digit_threshold {
        findings.red_flags.push(format!(
            "Username contains {digits} digits (>= {}).",
            config.username_digit_threshold
        ));
    }

    findings
}
