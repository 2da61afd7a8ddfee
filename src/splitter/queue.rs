//! Concurrent word containers shared by the pipeline passes
//!
//! Two containers carry every token through the run:
//!
//! - [`TokenBag`]: a multi-producer drainable bag. Takes are destructive and
//!   exclusive (each token is handed to exactly one worker), with no ordering
//!   guarantee. Each pass drains one bag and pushes pass-through tokens into
//!   the next stage's bag.
//!
//! - [`WordSet`]: a deduplicating insert-only set. Insert-if-absent is atomic
//!   and idempotent; a later duplicate insert is silently ignored, not an
//!   error. There is no removal.

use crossbeam_channel::{unbounded, Receiver, Sender};
use dashmap::DashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Statistics for a token bag
#[derive(Debug, Default)]
pub struct BagStats {
    /// Total tokens pushed
    pub pushed: AtomicU64,

    /// Total tokens taken
    pub taken: AtomicU64,
}

impl BagStats {
    /// Get total tokens pushed
    pub fn pushed_count(&self) -> u64 {
        self.pushed.load(Ordering::Relaxed)
    }

    /// Get total tokens taken
    pub fn taken_count(&self) -> u64 {
        self.taken.load(Ordering::Relaxed)
    }
}

/// Multi-producer drainable bag of tokens
///
/// Clones share the same underlying channel, so one clone can be handed to
/// each worker thread.
#[derive(Clone)]
pub struct TokenBag {
    sender: Sender<String>,
    receiver: Receiver<String>,
    stats: Arc<BagStats>,
}

impl TokenBag {
    /// Create an empty bag
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self {
            sender,
            receiver,
            stats: Arc::new(BagStats::default()),
        }
    }

    /// Create a bag preloaded with tokens
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let bag = Self::new();
        for token in tokens {
            bag.push(token);
        }
        bag
    }

    /// Add a token to the bag
    pub fn push(&self, token: String) {
        // The bag holds both channel halves, so the send cannot fail.
        let _ = self.sender.send(token);
        self.stats.pushed.fetch_add(1, Ordering::Relaxed);
    }

    /// Take one token from the bag, or `None` if it is empty
    ///
    /// The take is atomic and exclusive: no two callers ever receive the
    /// same token.
    pub fn take(&self) -> Option<String> {
        match self.receiver.try_recv() {
            Ok(token) => {
                self.stats.taken.fetch_add(1, Ordering::Relaxed);
                Some(token)
            }
            Err(_) => None,
        }
    }

    /// Drain every remaining token into a vector
    pub fn drain_all(&self) -> Vec<String> {
        let mut tokens = Vec::with_capacity(self.len());
        while let Some(token) = self.take() {
            tokens.push(token);
        }
        tokens
    }

    /// Check if the bag is empty
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }

    /// Get current bag size
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    /// Get bag statistics
    pub fn stats(&self) -> Arc<BagStats> {
        Arc::clone(&self.stats)
    }
}

impl Default for TokenBag {
    fn default() -> Self {
        Self::new()
    }
}

/// Deduplicating insert-only set of words
#[derive(Debug, Default)]
pub struct WordSet {
    inner: DashSet<String>,
}

impl WordSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self {
            inner: DashSet::new(),
        }
    }

    /// Insert a word if absent
    ///
    /// Returns `true` if the word was newly added. The first insertion wins;
    /// later duplicates are ignored.
    pub fn insert(&self, word: String) -> bool {
        self.inner.insert(word)
    }

    /// Check membership
    pub fn contains(&self, word: &str) -> bool {
        self.inner.contains(word)
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Get current set size
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Clone the current contents into a vector (unordered)
    pub fn snapshot(&self) -> Vec<String> {
        self.inner.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Clone the current contents into a lexicographically sorted vector
    pub fn to_sorted_vec(&self) -> Vec<String> {
        let mut words = self.snapshot();
        words.sort();
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bag_push_take() {
        let bag = TokenBag::new();
        assert!(bag.is_empty());

        bag.push("hello".into());
        bag.push("world".into());
        assert_eq!(bag.len(), 2);

        let mut taken = vec![bag.take().unwrap(), bag.take().unwrap()];
        taken.sort();
        assert_eq!(taken, vec!["hello".to_string(), "world".to_string()]);
        assert!(bag.take().is_none());
    }

    #[test]
    fn test_bag_clone_shares_tokens() {
        let bag = TokenBag::from_tokens(["a".to_string(), "b".to_string()]);
        let other = bag.clone();

        // A token taken through one handle is gone from the other.
        other.take().unwrap();
        assert_eq!(bag.len(), 1);
        bag.take().unwrap();
        assert!(other.is_empty());
    }

    #[test]
    fn test_bag_exclusive_take() {
        let bag = TokenBag::from_tokens((0..1000).map(|i| i.to_string()));

        let mut handles = Vec::new();
        for _ in 0..4 {
            let bag = bag.clone();
            handles.push(std::thread::spawn(move || {
                let mut taken = Vec::new();
                while let Some(token) = bag.take() {
                    taken.push(token);
                }
                taken
            }));
        }

        let mut all: Vec<String> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        all.sort();
        all.dedup();
        // Every token taken exactly once
        assert_eq!(all.len(), 1000);
        assert_eq!(bag.stats().taken_count(), 1000);
    }

    #[test]
    fn test_bag_stats() {
        let bag = TokenBag::new();
        bag.push("a".into());
        bag.push("b".into());
        bag.take();

        let stats = bag.stats();
        assert_eq!(stats.pushed_count(), 2);
        assert_eq!(stats.taken_count(), 1);
    }

    #[test]
    fn test_word_set_insert_idempotent() {
        let set = WordSet::new();
        assert!(set.insert("foo".into()));
        assert!(!set.insert("foo".into()));
        assert_eq!(set.len(), 1);
        assert!(set.contains("foo"));
        assert!(!set.contains("bar"));
    }

    #[test]
    fn test_word_set_sorted_snapshot() {
        let set = WordSet::new();
        set.insert("zebra".into());
        set.insert("apple".into());
        set.insert("mango".into());

        assert_eq!(
            set.to_sorted_vec(),
            vec!["apple".to_string(), "mango".to_string(), "zebra".to_string()]
        );
    }
}
