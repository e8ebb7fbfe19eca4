use std::collections::HashSet;
use std::fmt;

use super::state::Visited;
use super::traits::Clusterable;

/// A cluster: points in order of discovery, unique by identifier.
///
/// Points are borrowed from the input slice handed to the clusterer.
pub struct Cluster<'a, P: Clusterable> {
    points: Vec<&'a P>,
    ids: HashSet<P::Id>,
}

impl<'a, P: Clusterable> Cluster<'a, P> {
    /// Empty cluster.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            ids: HashSet::new(),
        }
    }

    /// Cluster seeded with a single point.
    pub fn singleton(seed: &'a P) -> Self {
        let mut cluster = Self::new();
        cluster.push(seed);
        cluster
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Member points in discovery order.
    pub fn points(&self) -> &[&'a P] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a P> + '_ {
        self.points.iter().copied()
    }

    pub fn contains(&self, id: &P::Id) -> bool {
        self.ids.contains(id)
    }

    /// Identifiers of the members, in discovery order.
    pub fn ids(&self) -> Vec<P::Id> {
        self.points.iter().map(|p| p.id()).collect()
    }

    pub fn into_points(self) -> Vec<&'a P> {
        self.points
    }

    /// Append `point` unless a point with the same identifier is already a member.
    ///
    /// Returns whether the point was added.
    pub(crate) fn push(&mut self, point: &'a P) -> bool {
        if self.ids.insert(point.id()) {
            self.points.push(point);
            true
        } else {
            false
        }
    }

    /// Union `incoming` into this cluster, marking every incoming point clustered.
    ///
    /// First occurrence wins: existing members keep their position and new points are
    /// appended in the order they arrive.
    pub(crate) fn merge(&mut self, incoming: &[&'a P], visited: &mut Visited<P::Id>) {
        for point in incoming {
            visited.mark_clustered(point.id());
        }
        for point in incoming {
            self.push(point);
        }
    }
}

impl<P: Clusterable> Default for Cluster<'_, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Clusterable> Clone for Cluster<'_, P> {
    fn clone(&self) -> Self {
        Self {
            points: self.points.clone(),
            ids: self.ids.clone(),
        }
    }
}

impl<P: Clusterable + fmt::Debug> fmt::Debug for Cluster<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.points.iter()).finish()
    }
}

impl<'a, 'c, P: Clusterable> IntoIterator for &'c Cluster<'a, P> {
    type Item = &'c &'a P;
    type IntoIter = std::slice::Iter<'c, &'a P>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Tagged(u32);

    impl Clusterable for Tagged {
        type Id = u32;

        fn id(&self) -> u32 {
            self.0
        }

        fn distance(&self, other: &Self) -> f64 {
            (f64::from(self.0) - f64::from(other.0)).abs()
        }
    }

    #[test]
    fn test_merge_overlapping() {
        let points: Vec<Tagged> = [0, 1, 21, 22, 23, 24].into_iter().map(Tagged).collect();
        let mut visited = Visited::new();

        let mut cluster = Cluster::new();
        cluster.merge(&points[..5].iter().collect::<Vec<_>>(), &mut visited);
        let incoming = vec![&points[0], &points[1], &points[5]];
        cluster.merge(&incoming, &mut visited);

        assert_eq!(cluster.len(), 6);
        assert_eq!(cluster.ids(), vec![0, 1, 21, 22, 23, 24]);
    }

    #[test]
    fn test_merge_marks_only_incoming() {
        let points: Vec<Tagged> = (0..4).map(Tagged).collect();
        let mut visited = Visited::new();

        let mut cluster = Cluster::singleton(&points[0]);
        cluster.merge(&[&points[2], &points[1]], &mut visited);

        assert!(!visited.is_visited(&0));
        assert!(visited.is_clustered(&1));
        assert!(visited.is_clustered(&2));
        assert!(!visited.is_visited(&3));
        assert_eq!(cluster.ids(), vec![0, 2, 1]);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let points: Vec<Tagged> = (0..3).map(Tagged).collect();
        let refs: Vec<&Tagged> = points.iter().collect();
        let mut visited = Visited::new();

        let mut cluster = Cluster::new();
        cluster.merge(&refs, &mut visited);
        cluster.merge(&refs, &mut visited);

        assert_eq!(cluster.len(), 3);
        assert!(cluster.contains(&2));
    }

    #[test]
    fn test_push_rejects_known_id() {
        let a = Tagged(5);
        let b = Tagged(5);

        let mut cluster = Cluster::singleton(&a);
        assert!(!cluster.push(&b));
        assert_eq!(cluster.len(), 1);
        assert!(std::ptr::eq(cluster.points()[0], &a));
    }
}
