use std::collections::HashSet;

use super::traits::Clusterable;

/// First identifier that appears more than once in `points`, if any.
pub(crate) fn first_duplicate<P: Clusterable>(points: &[P]) -> Option<P::Id> {
    let mut seen = HashSet::with_capacity(points.len());
    points.iter().map(Clusterable::id).find(|id| !seen.insert(id.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    impl Clusterable for Named {
        type Id = &'static str;

        fn id(&self) -> &'static str {
            self.0
        }

        fn distance(&self, _other: &Self) -> f64 {
            0.0
        }
    }

    #[test]
    fn test_no_duplicates() {
        let points = [Named("a"), Named("b"), Named("c")];
        assert_eq!(first_duplicate(&points), None);
        assert_eq!(first_duplicate::<Named>(&[]), None);
    }

    #[test]
    fn test_reports_first_repeat() {
        let points = [Named("a"), Named("b"), Named("b"), Named("a")];
        assert_eq!(first_duplicate(&points), Some("b"));
    }
}
