use log::trace;

use super::Overlapper;
use segmap_core::models::{Coordinate, Interval, TaggedInterval};

/// An insertable overlap index over tagged intervals: a height-balanced (AVL) tree keyed
/// by `(start, end)` whose nodes also carry the largest end found in their subtree.
///
/// Entries with equal keys keep their insertion order. A query walks the tree in key
/// order, skipping every subtree whose largest end lies before the query start and
/// stopping at the first entry starting after the query end, so a single long entry
/// doesn't turn later queries into scans. All intervals, stored and queried, are
/// closed: `[10, 20]` and `[20, 30]` overlap.
///
/// # Examples
///
/// ```
/// use segmap_core::models::TaggedInterval;
/// use segmap_overlaprs::{OverlapIndex, Overlapper};
///
/// let mut index = OverlapIndex::default();
/// index.insert(TaggedInterval::new(10u32, 20, "A")?);
/// index.insert(TaggedInterval::new(50u32, 60, "B")?);
///
/// let mut hits: Vec<&str> = index.find_iter(18, 52).map(|iv| iv.val).collect();
/// hits.sort();
/// assert_eq!(hits, vec!["A", "B"]);
/// assert_eq!(index.count(21, 49), 0);
/// # Ok::<(), segmap_core::errors::SegmentError>(())
/// ```
///
/// # Build, then query
///
/// [`insert`](OverlapIndex::insert) takes `&mut self` and queries take `&self`, so an
/// index can't be queried while it is being filled. Once built it can be shared across
/// threads.
#[derive(Debug, Clone)]
pub struct OverlapIndex<I, T>
where
    I: Coordinate,
    T: Eq + Clone + Send + Sync,
{
    /// The stored entries
    entries: Tree<I, T>,
    /// Every entry's end, stored as the point `[end, end]`; only used for counting
    ends: Tree<I, ()>,
}

impl<I, T> Default for OverlapIndex<I, T>
where
    I: Coordinate,
    T: Eq + Clone + Send + Sync,
{
    fn default() -> Self {
        OverlapIndex {
            entries: Tree::default(),
            ends: Tree::default(),
        }
    }
}

impl<I, T> Overlapper<I, T> for OverlapIndex<I, T>
where
    I: Coordinate,
    T: Eq + Clone + Send + Sync,
{
    /// Bulk-build from a vector of entries in any order.
    /// ```
    /// use segmap_core::models::TaggedInterval;
    /// use segmap_overlaprs::{OverlapIndex, Overlapper};
    ///
    /// let data = (0u32..20).step_by(5)
    ///     .map(|x| TaggedInterval::new(x, x + 10, true).unwrap())
    ///     .collect::<Vec<_>>();
    /// let index = OverlapIndex::build(data);
    /// assert_eq!(index.len(), 4);
    /// ```
    fn build(mut intervals: Vec<TaggedInterval<I, T>>) -> Self
    where
        Self: Sized,
    {
        // stable, so equal keys keep their input order
        intervals.sort_by_key(|iv| iv.key());
        let mut ends: Vec<TaggedInterval<I, ()>> = intervals
            .iter()
            .map(|iv| TaggedInterval::from_interval(Interval::point(iv.end()), ()))
            .collect();
        ends.sort_by_key(|iv| iv.key());

        trace!("built overlap index over {} intervals", intervals.len());

        OverlapIndex {
            entries: Tree::from_sorted(intervals),
            ends: Tree::from_sorted(ends),
        }
    }

    /// Find all entries that intersect `[start, stop]`.
    #[inline]
    fn find(&self, start: I, stop: I) -> Vec<TaggedInterval<I, T>> {
        self.find_iter(start, stop).cloned().collect()
    }

    fn find_iter<'a>(
        &'a self,
        start: I,
        stop: I,
    ) -> Box<dyn Iterator<Item = &'a TaggedInterval<I, T>> + 'a> {
        Box::new(IterFind::new(&self.entries, start, stop))
    }
}

impl<I, T> OverlapIndex<I, T>
where
    I: Coordinate,
    T: Eq + Clone + Send + Sync,
{
    /// Insert one entry in O(log n). Entries with the same `(start, end)` as an existing
    /// one go after it.
    /// ```
    /// use segmap_core::models::TaggedInterval;
    /// use segmap_overlaprs::{OverlapIndex, Overlapper};
    ///
    /// let mut index = OverlapIndex::build(vec![
    ///     TaggedInterval::new(0u32, 5, 1).unwrap(),
    ///     TaggedInterval::new(6, 10, 2).unwrap(),
    /// ]);
    /// index.insert(TaggedInterval::new(0, 20, 5).unwrap());
    /// assert_eq!(index.len(), 3);
    /// assert_eq!(
    ///     index.find_iter(1, 3).map(|iv| iv.val).collect::<Vec<_>>(),
    ///     vec![1, 5]
    /// );
    /// ```
    pub fn insert(&mut self, elem: TaggedInterval<I, T>) {
        let end = TaggedInterval::from_interval(Interval::point(elem.end()), ());
        self.ends.insert(end);
        self.entries.insert(elem);
    }

    /// Get the number of entries
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.nodes.len()
    }

    /// Check if the index holds no entries
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.nodes.is_empty()
    }

    /// Iterate over all entries in `(start, end)` order
    #[inline]
    pub fn iter(&self) -> IterFind<'_, I, T> {
        IterFind::new(&self.entries, I::min_value(), I::max_value())
    }

    /// Count all entries that intersect `[start, stop]` without visiting them: every
    /// entry starting at or before `stop`, minus those ending before `start`. Both are
    /// rank lookups, so this is O(log n) whatever the answer.
    /// ```
    /// use segmap_core::models::TaggedInterval;
    /// use segmap_overlaprs::{OverlapIndex, Overlapper};
    ///
    /// let index = OverlapIndex::build((0u32..100).step_by(5)
    ///     .map(|x| TaggedInterval::new(x, x + 2, true).unwrap())
    ///     .collect());
    /// assert_eq!(index.count(5, 11), 2);
    /// ```
    #[inline]
    pub fn count(&self, start: I, stop: I) -> usize {
        let starts_through = self.entries.rank(|s| s <= stop);
        let ends_before = self.ends.rank(|e| e < start);
        starts_through.saturating_sub(ends_before)
    }
}

/// A tree node: one entry plus the bookkeeping of the subtree rooted here.
#[derive(Debug, Clone)]
struct Node<I, T>
where
    I: Coordinate,
    T: Eq + Clone + Send + Sync,
{
    entry: TaggedInterval<I, T>,
    /// largest end in this subtree
    max: I,
    height: u32,
    size: usize,
    left: Option<usize>,
    right: Option<usize>,
}

impl<I, T> Node<I, T>
where
    I: Coordinate,
    T: Eq + Clone + Send + Sync,
{
    fn leaf(entry: TaggedInterval<I, T>) -> Self {
        Node {
            max: entry.end(),
            entry,
            height: 1,
            size: 1,
            left: None,
            right: None,
        }
    }
}

/// Arena-backed AVL tree ordered by entry key. Node slots never move; links are indices.
#[derive(Debug, Clone)]
struct Tree<I, T>
where
    I: Coordinate,
    T: Eq + Clone + Send + Sync,
{
    nodes: Vec<Node<I, T>>,
    root: Option<usize>,
}

impl<I, T> Default for Tree<I, T>
where
    I: Coordinate,
    T: Eq + Clone + Send + Sync,
{
    fn default() -> Self {
        Tree {
            nodes: Vec::new(),
            root: None,
        }
    }
}

impl<I, T> Tree<I, T>
where
    I: Coordinate,
    T: Eq + Clone + Send + Sync,
{
    /// Build a perfectly balanced tree from entries already sorted by key.
    fn from_sorted(entries: Vec<TaggedInterval<I, T>>) -> Self {
        let mut nodes: Vec<Node<I, T>> = entries.into_iter().map(Node::leaf).collect();
        let len = nodes.len();
        let root = link(&mut nodes, 0, len);
        Tree { nodes, root }
    }

    fn insert(&mut self, entry: TaggedInterval<I, T>) {
        let new = self.nodes.len();
        self.nodes.push(Node::leaf(entry));
        self.root = Some(insert_at(&mut self.nodes, self.root, new));
    }

    /// Number of entries whose start satisfies `pred`, which must hold for a prefix of
    /// the key order (e.g. `start <= x`).
    fn rank(&self, pred: impl Fn(I) -> bool) -> usize {
        let mut count = 0;
        let mut at = self.root;
        while let Some(i) = at {
            let node = &self.nodes[i];
            if pred(node.entry.start()) {
                count += size(&self.nodes, node.left) + 1;
                at = node.right;
            } else {
                at = node.left;
            }
        }
        count
    }

    /// Entry slots in key order.
    fn in_order(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = Vec::new();
        let mut at = self.root;
        while at.is_some() || !stack.is_empty() {
            while let Some(i) = at {
                stack.push(i);
                at = self.nodes[i].left;
            }
            if let Some(i) = stack.pop() {
                order.push(i);
                at = self.nodes[i].right;
            }
        }
        order
    }
}

fn height<I, T>(nodes: &[Node<I, T>], at: Option<usize>) -> u32
where
    I: Coordinate,
    T: Eq + Clone + Send + Sync,
{
    at.map_or(0, |i| nodes[i].height)
}

fn size<I, T>(nodes: &[Node<I, T>], at: Option<usize>) -> usize
where
    I: Coordinate,
    T: Eq + Clone + Send + Sync,
{
    at.map_or(0, |i| nodes[i].size)
}

/// Recompute `max`, `height` and `size` of node `i` from its children.
fn update<I, T>(nodes: &mut [Node<I, T>], i: usize)
where
    I: Coordinate,
    T: Eq + Clone + Send + Sync,
{
    let mut max = nodes[i].entry.end();
    let mut child_height = 0;
    let mut size = 1;
    for child in [nodes[i].left, nodes[i].right].into_iter().flatten() {
        max = max.max(nodes[child].max);
        child_height = child_height.max(nodes[child].height);
        size += nodes[child].size;
    }
    let node = &mut nodes[i];
    node.max = max;
    node.height = child_height + 1;
    node.size = size;
}

fn link<I, T>(nodes: &mut [Node<I, T>], lo: usize, hi: usize) -> Option<usize>
where
    I: Coordinate,
    T: Eq + Clone + Send + Sync,
{
    if lo >= hi {
        return None;
    }
    let mid = lo + (hi - lo) / 2;
    nodes[mid].left = link(nodes, lo, mid);
    nodes[mid].right = link(nodes, mid + 1, hi);
    update(nodes, mid);
    Some(mid)
}

fn insert_at<I, T>(nodes: &mut [Node<I, T>], at: Option<usize>, new: usize) -> usize
where
    I: Coordinate,
    T: Eq + Clone + Send + Sync,
{
    let Some(i) = at else {
        return new;
    };
    // equal keys go right, after the existing ones
    if nodes[new].entry.key() < nodes[i].entry.key() {
        let child = insert_at(nodes, nodes[i].left, new);
        nodes[i].left = Some(child);
    } else {
        let child = insert_at(nodes, nodes[i].right, new);
        nodes[i].right = Some(child);
    }
    update(nodes, i);
    rebalance(nodes, i)
}

fn rotate_left<I, T>(nodes: &mut [Node<I, T>], i: usize) -> usize
where
    I: Coordinate,
    T: Eq + Clone + Send + Sync,
{
    let Some(r) = nodes[i].right else {
        return i;
    };
    nodes[i].right = nodes[r].left;
    nodes[r].left = Some(i);
    update(nodes, i);
    update(nodes, r);
    r
}

fn rotate_right<I, T>(nodes: &mut [Node<I, T>], i: usize) -> usize
where
    I: Coordinate,
    T: Eq + Clone + Send + Sync,
{
    let Some(l) = nodes[i].left else {
        return i;
    };
    nodes[i].left = nodes[l].right;
    nodes[l].right = Some(i);
    update(nodes, i);
    update(nodes, l);
    l
}

fn skew<I, T>(nodes: &[Node<I, T>], i: usize) -> i64
where
    I: Coordinate,
    T: Eq + Clone + Send + Sync,
{
    i64::from(height(nodes, nodes[i].left)) - i64::from(height(nodes, nodes[i].right))
}

/// Restore the AVL height bound at node `i`, whose children are already balanced.
fn rebalance<I, T>(nodes: &mut [Node<I, T>], i: usize) -> usize
where
    I: Coordinate,
    T: Eq + Clone + Send + Sync,
{
    match skew(nodes, i) {
        s if s > 1 => {
            if let Some(l) = nodes[i].left {
                if skew(nodes, l) < 0 {
                    nodes[i].left = Some(rotate_left(nodes, l));
                }
            }
            rotate_right(nodes, i)
        }
        s if s < -1 => {
            if let Some(r) = nodes[i].right {
                if skew(nodes, r) > 0 {
                    nodes[i].right = Some(rotate_right(nodes, r));
                }
            }
            rotate_left(nodes, i)
        }
        _ => i,
    }
}

/// An iterator over entries of an [`OverlapIndex`] that intersect a query range, in
/// key order.
///
/// Created by [`find_iter`](Overlapper::find_iter) and [`iter`](OverlapIndex::iter).
#[derive(Debug)]
pub struct IterFind<'a, I, T>
where
    T: Eq + Clone + Send + Sync + 'a,
    I: Coordinate,
{
    nodes: &'a [Node<I, T>],
    /// nodes whose entry is still to be checked, innermost last
    stack: Vec<usize>,
    start: I,
    stop: I,
    /// nodes looked at so far
    scanned: usize,
}

impl<'a, I, T> IterFind<'a, I, T>
where
    T: Eq + Clone + Send + Sync + 'a,
    I: Coordinate,
{
    fn new(tree: &'a Tree<I, T>, start: I, stop: I) -> Self {
        let mut iter = IterFind {
            nodes: &tree.nodes,
            stack: Vec::new(),
            start,
            stop,
            scanned: 0,
        };
        iter.descend(tree.root);
        iter
    }

    /// Push the left spine below `at`, dropping subtrees that end before the query.
    fn descend(&mut self, mut at: Option<usize>) {
        let nodes = self.nodes;
        while let Some(i) = at {
            self.scanned += 1;
            let node = &nodes[i];
            if node.max < self.start {
                break;
            }
            self.stack.push(i);
            at = node.left;
        }
    }
}

impl<'a, I, T> Iterator for IterFind<'a, I, T>
where
    T: Eq + Clone + Send + Sync + 'a,
    I: Coordinate,
{
    type Item = &'a TaggedInterval<I, T>;

    #[inline]
    // interval.start <= stop && interval.end >= start
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(i) = self.stack.pop() {
            let nodes = self.nodes;
            let node = &nodes[i];
            if node.entry.start() > self.stop {
                // everything left on the stack, and to the right, starts later still
                self.stack.clear();
                break;
            }
            self.descend(node.right);
            if node.entry.overlap(self.start, self.stop) {
                return Some(&node.entry);
            }
        }
        None
    }
}

impl<I, T> IntoIterator for OverlapIndex<I, T>
where
    T: Eq + Clone + Send + Sync,
    I: Coordinate,
{
    type Item = TaggedInterval<I, T>;
    type IntoIter = ::std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        let order = self.entries.in_order();
        let mut slots: Vec<Option<TaggedInterval<I, T>>> = self
            .entries
            .nodes
            .into_iter()
            .map(|node| Some(node.entry))
            .collect();
        order
            .into_iter()
            .filter_map(|i| slots[i].take())
            .collect::<Vec<_>>()
            .into_iter()
    }
}

impl<'a, I, T> IntoIterator for &'a OverlapIndex<I, T>
where
    T: Eq + Clone + Send + Sync + 'a,
    I: Coordinate,
{
    type Item = &'a TaggedInterval<I, T>;
    type IntoIter = IterFind<'a, I, T>;

    fn into_iter(self) -> IterFind<'a, I, T> {
        self.iter()
    }
}

impl<I, T> FromIterator<TaggedInterval<I, T>> for OverlapIndex<I, T>
where
    T: Eq + Clone + Send + Sync,
    I: Coordinate,
{
    fn from_iter<It: IntoIterator<Item = TaggedInterval<I, T>>>(iter: It) -> Self {
        OverlapIndex::build(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::{assert_eq, assert_ne};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rstest::{fixture, rstest};

    fn tagged(start: u32, end: u32, val: &'static str) -> TaggedInterval<u32, &'static str> {
        TaggedInterval::new(start, end, val).unwrap()
    }

    fn sorted_vals(hits: Vec<TaggedInterval<u32, &'static str>>) -> Vec<&'static str> {
        let mut vals: Vec<&str> = hits.iter().map(|iv| iv.val).collect();
        vals.sort();
        vals
    }

    #[fixture]
    fn intervals() -> Vec<TaggedInterval<u32, &'static str>> {
        vec![
            tagged(1, 5, "a"),
            tagged(3, 7, "b"),
            tagged(6, 10, "c"),
            tagged(8, 12, "d"),
        ]
    }

    #[rstest]
    fn test_build_and_len(intervals: Vec<TaggedInterval<u32, &'static str>>) {
        let index = OverlapIndex::build(intervals.clone());
        assert_eq!(index.len(), intervals.len());
        assert_ne!(index.is_empty(), true);
    }

    #[rstest]
    fn test_find_overlapping_intervals(intervals: Vec<TaggedInterval<u32, &'static str>>) {
        let index = OverlapIndex::build(intervals);

        assert_eq!(sorted_vals(index.find(2, 4)), vec!["a", "b"]);
        assert_eq!(sorted_vals(index.find(9, 11)), vec!["c", "d"]);
    }

    #[rstest]
    fn test_find_touching_ends(intervals: Vec<TaggedInterval<u32, &'static str>>) {
        let index = OverlapIndex::build(intervals);

        // closed intervals: 12 touches "d", 5 touches "a"
        assert_eq!(sorted_vals(index.find(12, 15)), vec!["d"]);
        assert_eq!(sorted_vals(index.find(5, 5)), vec!["a", "b"]);
    }

    #[rstest]
    fn test_find_no_overlap(intervals: Vec<TaggedInterval<u32, &'static str>>) {
        let index = OverlapIndex::build(intervals);
        assert_eq!(index.find(13, 15).is_empty(), true);
        assert_eq!(index.count(13, 15), 0);
    }

    #[rstest]
    fn test_reference_scenario() {
        let mut index = OverlapIndex::default();
        index.insert(tagged(10, 20, "A"));
        index.insert(tagged(50, 60, "B"));

        assert_eq!(sorted_vals(index.find(18, 52)), vec!["A", "B"]);
        assert_eq!(index.find(21, 49).is_empty(), true);
    }

    #[rstest]
    fn test_long_interval_found_from_far_start() {
        let mut index = OverlapIndex::default();
        index.insert(tagged(40, 45, "short"));
        index.insert(tagged(0, 1000, "long"));
        index.insert(tagged(900, 910, "late"));

        assert_eq!(sorted_vals(index.find(500, 600)), vec!["long"]);
        assert_eq!(index.count(500, 600), 1);
    }

    #[rstest]
    fn test_insert_matches_build(intervals: Vec<TaggedInterval<u32, &'static str>>) {
        let built = OverlapIndex::build(intervals.clone());
        let mut inserted = OverlapIndex::default();
        for iv in intervals.into_iter().rev() {
            inserted.insert(iv);
        }
        assert_eq!(
            inserted.iter().collect::<Vec<_>>(),
            built.iter().collect::<Vec<_>>()
        );
        for (start, stop) in [(0, 2), (4, 6), (7, 9), (11, 30)] {
            assert_eq!(
                sorted_vals(inserted.find(start, stop)),
                sorted_vals(built.find(start, stop))
            );
        }
    }

    #[rstest]
    fn test_equal_keys_keep_insertion_order() {
        let mut index = OverlapIndex::default();
        index.insert(tagged(5, 9, "first"));
        index.insert(tagged(5, 9, "second"));
        index.insert(tagged(1, 2, "before"));
        let vals: Vec<&str> = index.iter().map(|iv| iv.val).collect();
        assert_eq!(vals, vec!["before", "first", "second"]);
    }

    #[rstest]
    fn test_count_agrees_with_find(intervals: Vec<TaggedInterval<u32, &'static str>>) {
        let index = OverlapIndex::build(intervals);
        for start in 0..14 {
            for stop in start..14 {
                assert_eq!(index.count(start, stop), index.find(start, stop).len());
            }
        }
    }

    #[rstest]
    fn test_empty_index() {
        let index: OverlapIndex<u32, &str> = OverlapIndex::build(vec![]);

        assert_eq!(index.len(), 0);
        assert_eq!(index.is_empty(), true);
        assert_eq!(index.find(1, 2).is_empty(), true);
        assert_eq!(index.count(1, 2), 0);
    }

    #[rstest]
    fn test_signed_coordinates() {
        let index: OverlapIndex<i32, u8> = [(-20, -10, 1), (-5, 5, 2)]
            .into_iter()
            .map(|(s, e, v)| TaggedInterval::new(s, e, v).unwrap())
            .collect();
        let hits: Vec<u8> = index.find_iter(-10, -5).map(|iv| iv.val).collect();
        assert_eq!(hits, vec![1, 2]);
    }

    fn short_entries_and_one_long(n: u32) -> Vec<TaggedInterval<u32, u32>> {
        let mut entries: Vec<_> = (0..n)
            .map(|i| TaggedInterval::new(10 * i, 10 * i + 2, i).unwrap())
            .collect();
        entries.push(TaggedInterval::new(0, 10 * n, n).unwrap());
        entries
    }

    #[rstest]
    #[case::built(false)]
    #[case::inserted(true)]
    fn test_long_entry_does_not_force_a_scan(#[case] incremental: bool) {
        let n = 100_000;
        let entries = short_entries_and_one_long(n);
        let index = if incremental {
            let mut index = OverlapIndex::default();
            for iv in entries {
                index.insert(iv);
            }
            index
        } else {
            OverlapIndex::build(entries)
        };

        let mut hits = IterFind::new(&index.entries, 999_990, 999_991);
        let vals: Vec<u32> = hits.by_ref().map(|iv| iv.val).collect();
        assert_eq!(vals, vec![n, 99_999]);
        assert!(hits.scanned < 200, "looked at {} nodes", hits.scanned);
        assert_eq!(index.count(999_990, 999_991), 2);
    }

    #[rstest]
    fn test_inserts_stay_balanced() {
        let mut index = OverlapIndex::default();
        // ascending keys are the worst case for an unbalanced tree
        for i in 0..4096u32 {
            index.insert(TaggedInterval::new(i, i + 1, i).unwrap());
        }
        let root = index.entries.root.unwrap();
        // AVL height is below 1.45 * log2(n + 2)
        assert!(index.entries.nodes[root].height <= 18);
        assert_eq!(index.entries.nodes[root].size, 4096);
        assert_eq!(index.iter().count(), 4096);
    }

    #[rstest]
    fn test_random_queries_match_brute_force() {
        for seed in 0..16 {
            let mut rng = StdRng::seed_from_u64(seed);
            let entries: Vec<TaggedInterval<i64, usize>> = (0..300)
                .map(|i| {
                    let start = rng.random_range(-500..500);
                    let len = if rng.random_range(0..20) == 0 {
                        rng.random_range(0..400)
                    } else {
                        rng.random_range(0..10)
                    };
                    TaggedInterval::new(start, start + len, i).unwrap()
                })
                .collect();

            let built = OverlapIndex::build(entries.clone());
            let mut inserted = OverlapIndex::default();
            for iv in entries.iter().cloned() {
                inserted.insert(iv);
            }

            for _ in 0..50 {
                let start = rng.random_range(-600..600);
                let stop = start + rng.random_range(0..30);
                let mut expected: Vec<usize> = entries
                    .iter()
                    .filter(|iv| iv.overlap(start, stop))
                    .map(|iv| iv.val)
                    .collect();
                expected.sort();

                for index in [&built, &inserted] {
                    let mut found: Vec<usize> =
                        index.find_iter(start, stop).map(|iv| iv.val).collect();
                    found.sort();
                    assert_eq!(found, expected);
                    assert_eq!(index.count(start, stop), expected.len());
                }
            }
        }
    }

    #[rstest]
    fn test_into_iter_in_key_order() {
        let mut index = OverlapIndex::default();
        for (start, end, val) in [(30, 40, "c"), (1, 9, "a"), (30, 35, "b"), (50, 51, "d")] {
            index.insert(tagged(start, end, val));
        }
        let vals: Vec<&str> = index.into_iter().map(|iv| iv.val).collect();
        assert_eq!(vals, vec!["a", "b", "c", "d"]);
    }
}
