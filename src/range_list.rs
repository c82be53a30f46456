//! An append-only index from disjoint, sorted key ranges to values.

/// One `[min, max]` range and the value stored for it.
#[derive(Debug, Clone)]
pub struct Range<K, V> {
    /// First key of the range.
    pub min: K,
    /// Last key of the range, inclusive.
    pub max: K,
    /// Value returned for every key in `min..=max`.
    pub value: V,
}

/// A list of non-overlapping ranges kept in ascending order.
///
/// Ranges are appended with [`RangeList::add`] while the list is being built
/// and are never changed afterwards. Gaps between ranges are allowed; a key
/// that falls into a gap has no value.
///
/// Lookups are a binary search over the ranges, so [`RangeList::get`] costs
/// `O(log n)` probes.
#[derive(Debug, Clone)]
pub struct RangeList<K, V> {
    items: Vec<Range<K, V>>,
}

impl<K, V> Default for RangeList<K, V> {
    fn default() -> Self {
        RangeList { items: Vec::new() }
    }
}

impl<K: Ord + Copy, V> RangeList<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        RangeList { items: Vec::with_capacity(capacity) }
    }

    /// Append the range `[min, max]`.
    ///
    /// The caller is responsible for adding ranges in ascending order and
    /// without overlap; this is only asserted in debug builds.
    pub fn add(&mut self, min: K, max: K, value: V) {
        debug_assert!(min <= max);
        debug_assert!(self.items.last().map_or(true, |last| last.max < min));
        self.items.push(Range { min, max, value });
    }

    /// Return the value of the range containing `key`, if any.
    pub fn get(&self, key: K) -> Option<&V> {
        let first = self.items.first()?;
        let last = self.items.last()?;
        if key < first.min || key > last.max {
            return None;
        }
        let (mut left, mut right) = (0, self.items.len() - 1);
        while left <= right {
            let mid = left + (right - left) / 2;
            let item = &self.items[mid];
            if key < item.min {
                if mid == 0 {
                    return None;
                }
                right = mid - 1;
            } else if key > item.max {
                left = mid + 1;
            } else {
                return Some(&item.value);
            }
        }
        None
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Range<K, V>> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::RangeList;

    #[test]
    fn get_contiguous() {
        let mut list = RangeList::new();
        list.add(0, 4, "A");
        list.add(5, 5, "B");
        list.add(6, 9, "C");

        for key in 0..=4 {
            assert_eq!(list.get(key), Some(&"A"));
        }
        assert_eq!(list.get(5), Some(&"B"));
        for key in 6..=9 {
            assert_eq!(list.get(key), Some(&"C"));
        }
        assert_eq!(list.get(-1), None);
        assert_eq!(list.get(10), None);
    }

    #[test]
    fn get_missing_interval() {
        let mut list = RangeList::new();
        list.add(0, 3, "A");
        list.add(7, 9, "C");

        for key in 0..=3 {
            assert_eq!(list.get(key), Some(&"A"));
        }
        for key in 4..=6 {
            assert_eq!(list.get(key), None);
        }
        for key in 7..=9 {
            assert_eq!(list.get(key), Some(&"C"));
        }
        assert_eq!(list.get(-1), None);
        assert_eq!(list.get(10), None);
    }

    #[test]
    fn get_empty() {
        let list: RangeList<u32, ()> = RangeList::new();
        assert!(list.is_empty());
        assert_eq!(list.get(0), None);
    }

    #[test]
    fn get_single_range() {
        let mut list = RangeList::new();
        list.add(10u32, 20, 'x');
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(9), None);
        assert_eq!(list.get(10), Some(&'x'));
        assert_eq!(list.get(20), Some(&'x'));
        assert_eq!(list.get(21), None);
    }

    #[test]
    fn iter_exposes_inclusive_bounds() {
        let mut list = RangeList::with_capacity(2);
        list.add(0u32, 4, "A");
        list.add(7, 9, "C");
        let spans: Vec<_> = list.iter().map(|r| (r.min, r.max, r.value)).collect();
        assert_eq!(spans, vec![(0, 4, "A"), (7, 9, "C")]);
        for range in list.iter() {
            assert_eq!(list.get(range.max), Some(&range.value));
        }
    }

    #[test]
    fn get_agrees_with_linear_scan() {
        extern crate arbitrary;
        extern crate bolero;
        bolero::check!().for_each(|data| {
            let mut unstructured = arbitrary::Unstructured::new(data);
            if let Ok(spans) = <Vec<(u8, u8)> as arbitrary::Arbitrary>::arbitrary(&mut unstructured) {
                let mut list = RangeList::new();
                let mut probes = vec![0u32];
                let mut next = 0u32;
                for (index, &(gap, width)) in spans.iter().take(64).enumerate() {
                    let min = next + u32::from(gap);
                    let max = min + u32::from(width);
                    list.add(min, max, index);
                    probes.extend_from_slice(&[min.saturating_sub(1), min, (min + max) / 2, max, max + 1]);
                    next = max + 1;
                }
                for &key in &probes {
                    let expected = list
                        .iter()
                        .find(|range| range.min <= key && key <= range.max)
                        .map(|range| &range.value);
                    assert_eq!(list.get(key), expected);
                }
            }
        });
    }
}
