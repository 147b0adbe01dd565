//! Prefix trie over dotted numeric identifiers.
//!
//! Nodes live in a single arena and address their children by index; each
//! node carries one child slot per alphabet index, so a lookup step is a plain
//! array access. Nodes are only ever added, never removed.

use std::num::NonZeroU32;

use tracing::debug;

use crate::config::{Alphabet, TrieConfig};
use crate::error::{FilterError, Result};

/// Arena index of a non-root node. The root sits at index 0 and is never a child.
type NodeId = NonZeroU32;

const ROOT: usize = 0;

#[derive(Debug, Clone)]
struct Node {
    children: Box<[Option<NodeId>]>,
    /// An inserted string ends exactly here
    terminal: bool,
}

impl Node {
    fn new(slots: usize) -> Self {
        Self {
            children: vec![None; slots].into_boxed_slice(),
            terminal: false,
        }
    }

    #[inline]
    fn child(&self, index: usize) -> Option<usize> {
        self.children
            .get(index)
            .copied()
            .flatten()
            .map(|id| id.get() as usize)
    }
}

/// Prefix trie used to decide whether an OID falls under a configured prefix.
///
/// # Example
///
/// ```
/// use oid_filter::{OidTrie, TrieConfig};
///
/// let mut trie = OidTrie::new(TrieConfig::oid());
/// trie.insert(".1.3.6.1.4.1.9.9.117").unwrap();
///
/// // The stored prefix covers a longer OID.
/// assert!(trie.match_prefix(".1.3.6.1.4.1.9.9.117.1.2"));
/// // A shorter OID on the way to a stored prefix also matches.
/// assert!(trie.match_prefix(".1.3.6"));
/// // Divergence before the input runs out does not.
/// assert!(!trie.match_prefix(".1.3.7"));
/// ```
#[derive(Debug, Clone)]
pub struct OidTrie<A = TrieConfig> {
    nodes: Vec<Node>,
    config: A,
    /// Number of distinct inserted strings
    len: usize,
}

impl<A: Alphabet> OidTrie<A> {
    /// Create an empty trie.
    pub fn new(config: A) -> Self {
        let root = Node::new(config.slot_count());
        Self {
            nodes: vec![root],
            config,
            len: 0,
        }
    }

    /// Create a trie loaded with `prefixes`, see [`OidTrie::insert_all`].
    pub fn with_prefixes<I, S>(config: A, prefixes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new(config);
        trie.insert_all(prefixes)?;
        Ok(trie)
    }

    /// Insert a single value.
    ///
    /// Fails with [`FilterError::InvalidCharacter`] if any character of
    /// `value` is outside the alphabet, in which case the trie is untouched.
    ///
    /// # Panics
    ///
    /// Panics if the trie grows beyond `u32::MAX` nodes.
    pub fn insert(&mut self, value: &str) -> Result<()> {
        let slots = self.config.slot_count();
        let indexes = self
            .config
            .translate(value)
            .filter(|indexes| indexes.iter().all(|&i| i < slots))
            .ok_or_else(|| FilterError::InvalidCharacter {
                value: value.to_string(),
            })?;

        let mut head = ROOT;
        for index in indexes {
            head = match self.nodes[head].child(index) {
                Some(child) => child,
                None => {
                    let child = self.push_node(slots);
                    self.nodes[head].children[index] = Some(child);
                    child.get() as usize
                }
            };
        }

        let node = &mut self.nodes[head];
        if !node.terminal {
            node.terminal = true;
            self.len += 1;
        }
        Ok(())
    }

    /// Insert every value, longest first.
    ///
    /// Stops at the first value containing an illegal character and returns
    /// its error; values inserted before it remain in the trie.
    pub fn insert_all<I, S>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut values: Vec<S> = values.into_iter().collect();
        values.sort_by_key(|v| std::cmp::Reverse(v.as_ref().chars().count()));

        for value in &values {
            self.insert(value.as_ref())?;
        }

        debug!(
            inserted = values.len(),
            prefixes = self.len,
            nodes = self.nodes.len(),
            "bulk insert complete"
        );
        Ok(())
    }

    /// Check whether `input` is covered by a stored prefix, or is itself the
    /// start of one.
    ///
    /// Returns true if:
    /// 1. walking `input` reaches a node where an inserted string ends
    ///    (the rest of `input` is not examined), or
    /// 2. `input` is consumed entirely without leaving the stored paths.
    ///
    /// Empty input and input with characters outside the alphabet never match.
    pub fn match_prefix(&self, input: &str) -> bool {
        if input.is_empty() {
            return false;
        }

        let Some(indexes) = self.config.translate(input) else {
            return false;
        };

        let mut head = ROOT;
        for index in indexes {
            head = match self.nodes[head].child(index) {
                Some(child) => child,
                None => return false,
            };

            if self.nodes[head].terminal {
                return true;
            }
        }

        true
    }

    /// Check whether `input` was inserted verbatim.
    pub fn find(&self, input: &str) -> bool {
        if input.is_empty() {
            return false;
        }

        let Some(indexes) = self.config.translate(input) else {
            return false;
        };

        let mut head = ROOT;
        for index in indexes {
            head = match self.nodes[head].child(index) {
                Some(child) => child,
                None => return false,
            };
        }

        self.nodes[head].terminal
    }

    /// Number of distinct inserted strings.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes in the arena, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn config(&self) -> &A {
        &self.config
    }

    fn push_node(&mut self, slots: usize) -> NodeId {
        let id = u32::try_from(self.nodes.len())
            .ok()
            .and_then(NonZeroU32::new)
            .unwrap_or_else(|| panic!("trie exceeded {} nodes", u32::MAX));
        self.nodes.push(Node::new(slots));
        id
    }
}

impl Default for OidTrie<TrieConfig> {
    fn default() -> Self {
        Self::new(TrieConfig::oid())
    }
}
