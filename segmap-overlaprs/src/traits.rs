use segmap_core::models::{Coordinate, TaggedInterval};

/// A structure answering "which stored intervals intersect `[start, end]`?".
///
/// Intervals are closed on both ends. Implementors are `Send + Sync` so a built index
/// can be shared read-only across threads.
pub trait Overlapper<I, T>: Send + Sync
where
    I: Coordinate,
    T: Eq + Clone + Send + Sync,
{
    fn build(intervals: Vec<TaggedInterval<I, T>>) -> Self
    where
        Self: Sized;

    fn find(&self, start: I, end: I) -> Vec<TaggedInterval<I, T>>;

    fn find_iter<'a>(
        &'a self,
        start: I,
        end: I,
    ) -> Box<dyn Iterator<Item = &'a TaggedInterval<I, T>> + 'a>;
}
