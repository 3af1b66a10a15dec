//! Known acronyms used to split uppercase runs.

use std::{collections::BTreeSet, sync::LazyLock};

use crate::InvalidAcronym;

/// Acronyms every dictionary starts from.
pub const BUILTIN_ACRONYMS: &[&str] = &[
    "ACL", "API", "BGP", "CPU", "DHCP", "DNS", "EAM", "HTTP", "HTTPS", "ID", "IKE", "IP", "LDAP",
    "MAC", "MTU", "NAT", "NIC", "NTP", "OSPF", "PAT", "SSH", "SSID", "TCP", "TLS", "TO", "UDP",
    "URI", "URL", "UUID", "VLAN", "VM", "VPN",
];

static BUILTIN: LazyLock<AcronymDictionary> = LazyLock::new(|| {
    AcronymDictionary::from_trusted(BUILTIN_ACRONYMS.iter().map(|s| s.to_string()))
});

/// Read-only set of known multi-letter acronyms.
///
/// A dictionary is immutable once built. Extending one produces a new value,
/// so a shared reference can be handed to any number of tokenizers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcronymDictionary {
    entries: BTreeSet<String>,
    longest: usize,
}

impl AcronymDictionary {
    /// The process-wide built-in dictionary.
    pub fn builtin() -> &'static AcronymDictionary {
        &BUILTIN
    }

    /// Build a dictionary from the given entries only.
    pub fn new<I, S>(entries: I) -> Result<Self, InvalidAcronym>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_trusted(std::iter::empty()).with_entries(entries)
    }

    /// Return a copy of this dictionary with `extra` entries added.
    pub fn with_entries<I, S>(&self, extra: I) -> Result<Self, InvalidAcronym>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries = self.entries.clone();
        for entry in extra {
            let entry = entry.into();
            if let Some(reason) = validate_acronym(&entry) {
                return Err(InvalidAcronym {
                    acronym: entry,
                    reason,
                });
            }
            entries.insert(entry);
        }
        Ok(Self::from_trusted(entries))
    }

    fn from_trusted(entries: impl IntoIterator<Item = String>) -> Self {
        let entries: BTreeSet<String> = entries.into_iter().collect();
        let longest = entries.iter().map(String::len).max().unwrap_or(0);
        Self { entries, longest }
    }

    pub fn contains(&self, acronym: &str) -> bool {
        self.entries.contains(acronym)
    }

    /// Longest entry that is a prefix of `run`.
    ///
    /// `run` is expected to be ASCII uppercase.
    pub fn longest_prefix<'r>(&self, run: &'r str) -> Option<&'r str> {
        let max = self.longest.min(run.len());
        (2..=max)
            .rev()
            .filter(|&len| run.is_char_boundary(len))
            .map(|len| &run[..len])
            .find(|prefix| self.entries.contains(*prefix))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl Default for AcronymDictionary {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

/// Check that `acronym` can be a dictionary entry.
///
/// Returns `None` if valid, or `Some(reason)` if invalid.
pub fn validate_acronym(acronym: &str) -> Option<&'static str> {
    if acronym.len() < 2 {
        return Some("acronyms must have at least two letters");
    }
    if !acronym.bytes().all(|b| b.is_ascii_uppercase()) {
        return Some("acronyms may only contain uppercase ASCII letters");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_contains_core_entries() {
        let dict = AcronymDictionary::builtin();
        for acronym in ["ID", "IP", "DHCP", "UUID", "NIC", "EAM", "PAT", "TO"] {
            assert!(dict.contains(acronym), "missing {}", acronym);
        }
        assert!(!dict.contains("VP"));
    }

    #[test]
    fn test_longest_prefix() {
        let dict = AcronymDictionary::builtin();
        assert_eq!(dict.longest_prefix("DHCPS"), Some("DHCP"));
        assert_eq!(dict.longest_prefix("HTTPSX"), Some("HTTPS"));
        assert_eq!(dict.longest_prefix("IPID"), Some("IP"));
        assert_eq!(dict.longest_prefix("TOR"), Some("TO"));
        assert_eq!(dict.longest_prefix("VC"), None);
        assert_eq!(dict.longest_prefix("I"), None);
        assert_eq!(dict.longest_prefix(""), None);
    }

    #[test]
    fn test_with_entries_leaves_original_untouched() {
        let base = AcronymDictionary::builtin();
        let extended = base.with_entries(["VPORT"]).unwrap();
        assert!(extended.contains("VPORT"));
        assert!(!base.contains("VPORT"));
        assert_eq!(extended.len(), base.len() + 1);
    }

    #[test]
    fn test_with_entries_rejects_invalid() {
        let err = AcronymDictionary::builtin()
            .with_entries(["Vm"])
            .unwrap_err();
        assert_eq!(err.acronym, "Vm");

        assert!(AcronymDictionary::new(["X"]).is_err());
    }

    #[test]
    fn test_new_starts_empty() {
        let dict = AcronymDictionary::new(["ABC", "AB"]).unwrap();
        assert_eq!(dict.iter().collect::<Vec<_>>(), vec!["AB", "ABC"]);
        assert_eq!(dict.longest_prefix("ABCD"), Some("ABC"));
    }

    #[test]
    fn test_validate_acronym() {
        assert_eq!(validate_acronym("VLAN"), None);
        assert!(validate_acronym("V").is_some());
        assert!(validate_acronym("Vlan").is_some());
        assert!(validate_acronym("L2").is_some());
    }
}
