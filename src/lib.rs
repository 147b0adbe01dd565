//! OID Filter - prefix filtering of SNMP object identifiers for Rust
//!
//! This library decides whether dotted numeric identifiers such as
//! `.1.3.6.1.4.1.9.9.117.1.1` fall under a configured set of prefixes:
//! - Dense-array trie with O(1) child lookup per character
//! - Configurable alphabet (digits and `.` by default) with a base offset
//! - Bidirectional prefix matching: an OID matches when a stored prefix covers
//!   it, or when it is itself the start of a stored prefix
//! - Prefix list parsing with comments and dotted-shape validation
//! - LRU caching for repeated lookups
//!
//! # Example
//!
//! ```rust
//! use oid_filter::{OidTrie, PrefixFilter, TrieConfig, DEFAULT_CACHE_SIZE};
//!
//! let prefixes_text = "
//! .1.3.6.1.4.1.9.9.117   # CISCO-ENTITY-FRU-CONTROL-MIB
//! .1.3.6.1.2.1.2         # IF-MIB interfaces
//! ";
//!
//! let filter = PrefixFilter::from_text(TrieConfig::oid(), prefixes_text, DEFAULT_CACHE_SIZE).unwrap();
//!
//! assert!(filter.matches(".1.3.6.1.4.1.9.9.117.1.1.2.1.2"));
//! assert!(filter.matches(".1.3.6.1"));
//! assert!(!filter.matches(".1.3.6.1.2.1.4"));
//!
//! // The trie can also be used directly.
//! let mut trie = OidTrie::new(TrieConfig::oid());
//! trie.insert(".1.3.6.1.2.1.1").unwrap();
//! assert!(trie.find(".1.3.6.1.2.1.1"));
//! assert!(trie.insert(".1.3.6.1.x").is_err());
//! ```
//!
//! # Prefix List Syntax
//!
//! ```text
//! # comment
//! .1.3.6.1.2.1.2          # one prefix per line
//! .1.3.6.1.4.1.9.         # trailing dot: segment 9 only, not 91
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod parser;
pub mod trie;

// Re-export commonly used items
pub use config::{Alphabet, TrieConfig, MAX_OFFSET, OID_ALPHABET};
pub use error::{FilterError, Result};
pub use filter::{PrefixFilter, DEFAULT_CACHE_SIZE};
pub use parser::{parse_prefixes, parse_prefixes_from_file};
pub use trie::OidTrie;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_workflow() {
        let text = r#"
# Entity FRU control
.1.3.6.1.4.1.9.9.117

# Interfaces
.1.3.6.1.2.1.2
.1.3.6.1.2.1.31
"#;

        // Parse prefixes
        let prefixes = parse_prefixes(text).unwrap();
        assert_eq!(prefixes.len(), 3);

        // Load alphabet from config
        let config = TrieConfig::from_json(r#"{"alphabet": "0123456789.", "offset": 0}"#).unwrap();

        // Build filter
        let filter = PrefixFilter::from_prefixes(config, &prefixes, 64).unwrap();
        assert_eq!(filter.prefix_count(), 3);

        // Covered by a stored prefix
        assert!(filter.matches(".1.3.6.1.2.1.2.2.1.10.3"));

        // On the way to a stored prefix
        assert!(filter.matches(".1.3.6.1.2"));

        // Diverges
        assert!(!filter.matches(".1.3.6.1.2.1.4.20"));

        // Outside the alphabet
        assert!(!filter.matches("iso.3.6.1"));
    }
}
