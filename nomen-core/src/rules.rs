//! Tail rules for uppercase runs.
//!
//! When an uppercase run of two or more letters is followed by lowercase
//! text, the tokenizer normally assumes the run's last letter is the capital
//! of the next word (`DHCPServer` -> `DHCP` + `Server`). The rules below name
//! the tails that are *not* a new word and must stay attached to the run
//! instead (`IDs`, `IPv6`, `ID2`). Rules are consulted in order and the first
//! match wins; adding a rule never touches the scanner.

/// A lowercase tail pattern that stays attached to the preceding acronym.
#[derive(Debug, Clone, Copy)]
pub struct TailRule {
    /// Short name shown in diagnostics.
    pub name: &'static str,
    /// Returns true if the tail matches.
    pub matches: fn(&str) -> bool,
}

/// Ordered rule table.
pub const TAIL_RULES: &[TailRule] = &[
    TailRule {
        name: "digits",
        matches: starts_with_digit,
    },
    TailRule {
        name: "plural",
        matches: is_plural,
    },
    TailRule {
        name: "version",
        matches: is_version,
    },
];

/// Find the first rule matching `tail`.
pub fn match_tail(tail: &str) -> Option<&'static TailRule> {
    TAIL_RULES.iter().find(|rule| (rule.matches)(tail))
}

fn starts_with_digit(tail: &str) -> bool {
    tail.bytes().next().is_some_and(|b| b.is_ascii_digit())
}

// `IDs`, `VMs`
fn is_plural(tail: &str) -> bool {
    tail == "s"
}

// `IPv6`, `IKEv2`
fn is_version(tail: &str) -> bool {
    let bytes = tail.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_lowercase() && bytes[1..].iter().all(u8::is_ascii_digit)
}
