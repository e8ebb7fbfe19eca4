use std::collections::HashMap;
use std::hash::Hash;

/// Classification of a visited point.
///
/// A point that has not been visited yet has no classification at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Visited, but not (yet) density-reachable from any core point.
    Noise,
    /// Visited and assigned to a cluster. Final.
    Clustered,
}

/// Visitation state of one clustering run, keyed by point identifier.
///
/// Transitions only go forward: unvisited -> noise -> clustered, or unvisited -> clustered.
#[derive(Debug, Clone)]
pub struct Visited<K> {
    states: HashMap<K, Classification>,
}

impl<K: Eq + Hash> Visited<K> {
    /// Empty state: every point unvisited.
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
        }
    }

    /// Empty state with room for `n` points.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            states: HashMap::with_capacity(n),
        }
    }

    /// Current classification, `None` if unvisited.
    pub fn classification(&self, id: &K) -> Option<Classification> {
        self.states.get(id).copied()
    }

    pub fn is_visited(&self, id: &K) -> bool {
        self.states.contains_key(id)
    }

    pub fn is_clustered(&self, id: &K) -> bool {
        self.classification(id) == Some(Classification::Clustered)
    }

    pub fn is_noise(&self, id: &K) -> bool {
        self.classification(id) == Some(Classification::Noise)
    }

    /// Mark `id` as noise. A clustered point stays clustered.
    pub fn mark_noise(&mut self, id: K) {
        self.states.entry(id).or_insert(Classification::Noise);
    }

    /// Mark `id` as clustered. Idempotent.
    pub fn mark_clustered(&mut self, id: K) {
        self.states.insert(id, Classification::Clustered);
    }

    /// Number of visited points.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Number of points currently classified as `class`.
    pub fn count(&self, class: Classification) -> usize {
        self.states.values().filter(|&&c| c == class).count()
    }
}

impl<K: Eq + Hash> Default for Visited<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unvisited_by_default() {
        let visited: Visited<u32> = Visited::new();
        assert!(visited.is_empty());
        assert_eq!(visited.classification(&7), None);
        assert!(!visited.is_visited(&7));
    }

    #[test]
    fn test_noise_can_be_promoted() {
        let mut visited = Visited::new();
        visited.mark_noise("a");
        assert!(visited.is_noise(&"a"));

        visited.mark_clustered("a");
        assert!(visited.is_clustered(&"a"));
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn test_clustered_never_reverts() {
        let mut visited = Visited::new();
        visited.mark_clustered(1);
        visited.mark_noise(1);
        visited.mark_clustered(1);

        assert_eq!(visited.classification(&1), Some(Classification::Clustered));
        assert_eq!(visited.count(Classification::Clustered), 1);
        assert_eq!(visited.count(Classification::Noise), 0);
    }
}
