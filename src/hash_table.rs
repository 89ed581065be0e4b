//! The separate-chaining engine underneath [`HashMap`](crate::HashMap).
//!
//! [`HashTable<V>`] stores values addressed by a caller-supplied `u64` hash
//! and an equality predicate, the same shape as a raw table API: the table
//! never hashes anything itself. Each value lives in a heap node that also
//! records the hash it was inserted with, and nodes sharing a bucket form a
//! singly linked chain owned by that bucket.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::iter::FusedIterator;

/// Number of buckets allocated by a table created without a capacity.
pub const DEFAULT_CAPACITY: usize = 1 << 4;

/// Largest bucket count a table will grow to. Past this point the table keeps
/// accepting entries and chains simply get longer.
pub const MAX_CAPACITY: usize = 1 << 30;

/// Ratio of entries to buckets that a table tolerates before growing.
pub const DEFAULT_LOAD_FACTOR: f32 = 0.75;

const LIVE_NODE: &str = "occupied entry must refer to a live node";

type Link<V> = Option<Box<Node<V>>>;

struct Node<V> {
    hash: u64,
    value: V,
    next: Link<V>,
}

#[inline(always)]
fn threshold(buckets: usize, load_factor: f32) -> usize {
    (buckets as f64 * load_factor as f64) as usize
}

/// Smallest power-of-two bucket count whose threshold admits `capacity`
/// entries.
fn buckets_for(capacity: usize, load_factor: f32) -> usize {
    let mut buckets = 1;
    while buckets < MAX_CAPACITY && threshold(buckets, load_factor) < capacity {
        buckets <<= 1;
    }
    buckets
}

#[inline(always)]
fn grown_len(len: usize) -> Option<usize> {
    (len < MAX_CAPACITY).then(|| (len << 1).min(MAX_CAPACITY))
}

fn empty_buckets<V>(len: usize) -> Vec<Link<V>> {
    let mut buckets = Vec::with_capacity(len);
    buckets.resize_with(len, || None);
    buckets
}

fn chain<V>(head: &Link<V>) -> impl Iterator<Item = &Node<V>> {
    core::iter::successors(head.as_deref(), |node| node.next.as_deref())
}

// Chains are unlinked one node at a time so that a long collision chain
// cannot recurse through `Box` drops.
fn drop_chain<V>(mut link: Link<V>) {
    while let Some(mut node) = link {
        link = node.next.take();
    }
}

fn clone_chain<V: Clone>(head: &Link<V>) -> Link<V> {
    let mut cloned = None;
    let mut tail = &mut cloned;
    for node in chain(head) {
        tail = &mut tail
            .insert(Box::new(Node {
                hash: node.hash,
                value: node.value.clone(),
                next: None,
            }))
            .next;
    }
    cloned
}

/// Debug statistics for chain length analysis.
///
/// Available in tests and with the `stats` feature.
#[cfg(any(test, feature = "stats"))]
#[derive(Debug, Clone)]
pub struct DebugStats {
    /// Number of elements currently in the table
    pub populated: usize,
    /// Number of elements the table holds before it grows
    pub capacity: usize,
    /// Length of the bucket array
    pub buckets: usize,
    /// Number of buckets holding at least one node
    pub occupied_buckets: usize,
    /// Length of the longest chain
    pub longest_chain: usize,
    /// Load factor (populated / buckets)
    pub load_factor: f64,
    /// Bucket utilization (occupied_buckets / buckets)
    pub bucket_utilization: f64,
    /// Mean chain length over occupied buckets
    pub mean_chain_length: f64,
    /// Approximate heap bytes held by the bucket array and the nodes
    pub total_bytes: usize,
}

#[cfg(any(test, feature = "stats"))]
impl DebugStats {
    /// Pretty-print the debug statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Hash Table Debug Statistics ===");
        println!(
            "Population: {}/{} ({:.2}% load factor)",
            self.populated,
            self.capacity,
            self.load_factor * 100.0
        );
        println!(
            "Buckets: {}/{} occupied ({:.2}% utilization)",
            self.occupied_buckets,
            self.buckets,
            self.bucket_utilization * 100.0
        );
        println!(
            "Chains: {:.2} mean length, {} longest",
            self.mean_chain_length, self.longest_chain
        );
        println!(
            "Memory: {} bytes ({:.2} bytes/entry)",
            self.total_bytes,
            if self.populated == 0 {
                0.0
            } else {
                self.total_bytes as f64 / self.populated as f64
            }
        );
    }
}

/// A hash table using separate chaining.
///
/// Values are located by the `u64` hash they were inserted with and an
/// equality predicate. The bucket for a hash is `hash & (buckets - 1)`; the
/// bucket array is a power of two long, allocated on the first insertion, and
/// doubles whenever an insertion would push the number of entries past
/// `buckets * load_factor`, up to [`MAX_CAPACITY`] buckets.
///
/// Iteration visits buckets in index order and each chain from head to tail.
/// That order is an implementation detail and changes whenever the table
/// grows.
///
/// # Examples
///
/// ```rust
/// # use core::hash::Hash;
/// # use core::hash::Hasher;
/// #
/// # use chain_hash::hash_table::Entry;
/// # use chain_hash::hash_table::HashTable;
/// # use siphasher::sip::SipHasher;
/// #
/// # fn hash_u64(n: u64) -> u64 {
/// #     let mut hasher = SipHasher::new();
/// #     n.hash(&mut hasher);
/// #     hasher.finish()
/// # }
/// #
/// let mut table: HashTable<(u64, &str)> = HashTable::new();
///
/// match table.entry(hash_u64(1), |&(k, _)| k == 1) {
///     Entry::Vacant(entry) => {
///         entry.insert((1, "one"));
///     }
///     Entry::Occupied(_) => unreachable!(),
/// }
///
/// assert_eq!(table.find(hash_u64(1), |&(k, _)| k == 1), Some(&(1, "one")));
/// assert_eq!(table.remove(hash_u64(1), |&(k, _)| k == 1), Some((1, "one")));
/// assert!(table.is_empty());
/// ```
pub struct HashTable<V> {
    buckets: Vec<Link<V>>,
    populated: usize,
    initial_buckets: usize,
    load_factor: f32,
}

impl<V> Debug for HashTable<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HashTable")
            .field("populated", &self.populated)
            .field("capacity", &self.capacity())
            .field("buckets", &self.buckets.len())
            .field("load_factor", &self.load_factor)
            .field(
                "chains",
                &self
                    .buckets
                    .iter()
                    .map(|head| chain(head).count())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<V> Clone for HashTable<V>
where
    V: Clone,
{
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.iter().map(clone_chain).collect(),
            populated: self.populated,
            initial_buckets: self.initial_buckets,
            load_factor: self.load_factor,
        }
    }
}

impl<V> Drop for HashTable<V> {
    fn drop(&mut self) {
        for slot in self.buckets.iter_mut() {
            drop_chain(slot.take());
        }
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> HashTable<V> {
    /// Creates an empty table that will allocate [`DEFAULT_CAPACITY`] buckets
    /// on its first insertion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let table: HashTable<u64> = HashTable::new();
    /// assert!(table.is_empty());
    /// assert_eq!(table.bucket_count(), 0);
    /// assert_eq!(table.capacity(), 12);
    /// ```
    pub fn new() -> Self {
        Self {
            buckets: Vec::new(),
            populated: 0,
            initial_buckets: DEFAULT_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }

    /// Creates an empty table able to hold at least `capacity` elements
    /// before growing.
    ///
    /// Nothing is allocated until the first insertion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let table: HashTable<String> = HashTable::with_capacity(100);
    /// assert!(table.capacity() >= 100);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_load_factor(capacity, DEFAULT_LOAD_FACTOR)
    }

    /// Creates an empty table able to hold at least `capacity` elements
    /// before growing, using a custom load factor.
    ///
    /// # Panics
    ///
    /// Panics if `load_factor` is not a finite, positive number.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let table: HashTable<u64> = HashTable::with_capacity_and_load_factor(10, 2.0);
    /// assert_eq!(table.load_factor(), 2.0);
    /// assert!(table.capacity() >= 10);
    /// ```
    pub fn with_capacity_and_load_factor(capacity: usize, load_factor: f32) -> Self {
        assert!(
            load_factor.is_finite() && load_factor > 0.0,
            "illegal load factor: {load_factor}"
        );

        Self {
            buckets: Vec::new(),
            populated: 0,
            initial_buckets: buckets_for(capacity, load_factor),
            load_factor,
        }
    }

    /// Returns an iterator over all values in the table.
    ///
    /// Values are yielded bucket by bucket, each chain from head to tail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// for n in [3u64, 1, 2] {
    ///     table.entry(n, |&v| v == n).or_insert(n);
    /// }
    ///
    /// let values: Vec<u64> = table.iter().copied().collect();
    /// assert_eq!(values, [1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: self.buckets.iter(),
            chain: None,
            remaining: self.populated,
        }
    }

    /// Returns `true` if the table contains no elements.
    pub fn is_empty(&self) -> bool {
        self.populated == 0
    }

    /// Returns the number of elements in the table.
    pub fn len(&self) -> usize {
        self.populated
    }

    /// Returns the number of elements the table can hold before it grows.
    ///
    /// Before the first insertion this reports the capacity of the bucket
    /// array that insertion will allocate.
    pub fn capacity(&self) -> usize {
        let buckets = if self.buckets.is_empty() {
            self.initial_buckets
        } else {
            self.buckets.len()
        };
        threshold(buckets, self.load_factor)
    }

    /// Returns the length of the bucket array, or zero if nothing has been
    /// inserted yet.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the load factor the table grows at.
    pub fn load_factor(&self) -> f32 {
        self.load_factor
    }

    /// Removes all elements from the table.
    ///
    /// The bucket array keeps its length; only the chains are released. This
    /// is a no-op on a table that never allocated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// table.entry(1, |&v: &u64| v == 1).or_insert(1);
    /// table.entry(2, |&v: &u64| v == 2).or_insert(2);
    ///
    /// table.clear();
    /// assert!(table.is_empty());
    /// assert_eq!(table.bucket_count(), 16);
    /// ```
    pub fn clear(&mut self) {
        #[cfg(feature = "log")]
        log::trace!(
            "clearing {} entries from {} buckets",
            self.populated,
            self.buckets.len()
        );

        for slot in self.buckets.iter_mut() {
            drop_chain(slot.take());
        }
        self.populated = 0;
    }

    /// Returns a reference to the value matching `hash` and `eq`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// table.entry(42, |&v: &u64| v == 42).or_insert(42);
    ///
    /// assert_eq!(table.find(42, |&v| v == 42), Some(&42));
    /// assert_eq!(table.find(7, |&v| v == 7), None);
    /// ```
    pub fn find(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&V> {
        if self.buckets.is_empty() {
            return None;
        }

        chain(&self.buckets[self.bucket_index(hash)])
            .find(|node| node.hash == hash && eq(&node.value))
            .map(|node| &node.value)
    }

    /// Returns a mutable reference to the value matching `hash` and `eq`.
    pub fn find_mut(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&mut V> {
        if self.buckets.is_empty() {
            return None;
        }

        let index = self.bucket_index(hash);
        let mut cursor = self.buckets[index].as_deref_mut();
        while let Some(node) = cursor {
            if node.hash == hash && eq(&node.value) {
                return Some(&mut node.value);
            }
            cursor = node.next.as_deref_mut();
        }

        None
    }

    /// Removes and returns the value matching `hash` and `eq`.
    ///
    /// The node is unlinked from its chain; the nodes around it keep their
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// table.entry(42, |&v: &u64| v == 42).or_insert(42);
    ///
    /// assert_eq!(table.remove(42, |&v| v == 42), Some(42));
    /// assert_eq!(table.remove(42, |&v| v == 42), None);
    /// ```
    pub fn remove(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<V> {
        let (index, depth) = self.locate(hash, eq)?;
        Some(
            OccupiedEntry {
                table: self,
                index,
                depth,
            }
            .remove(),
        )
    }

    /// Gets the entry for the given hash and equality predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::Entry;
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    ///
    /// match table.entry(5, |&(k, _): &(u64, u64)| k == 5) {
    ///     Entry::Vacant(entry) => {
    ///         entry.insert((5, 50));
    ///     }
    ///     Entry::Occupied(_) => unreachable!(),
    /// }
    ///
    /// match table.entry(5, |&(k, _)| k == 5) {
    ///     Entry::Occupied(mut entry) => entry.get_mut().1 += 1,
    ///     Entry::Vacant(_) => unreachable!(),
    /// }
    ///
    /// assert_eq!(table.find(5, |&(k, _)| k == 5), Some(&(5, 51)));
    /// ```
    pub fn entry(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Entry<'_, V> {
        match self.locate(hash, eq) {
            Some((index, depth)) => Entry::Occupied(OccupiedEntry {
                table: self,
                index,
                depth,
            }),
            None => Entry::Vacant(VacantEntry { table: self, hash }),
        }
    }

    #[inline(always)]
    fn bucket_index(&self, hash: u64) -> usize {
        hash as usize & (self.buckets.len() - 1)
    }

    /// Bucket index and chain depth of the node matching `hash` and `eq`.
    fn locate(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<(usize, usize)> {
        if self.populated == 0 {
            return None;
        }

        let index = self.bucket_index(hash);
        chain(&self.buckets[index])
            .position(|node| node.hash == hash && eq(&node.value))
            .map(|depth| (index, depth))
    }

    /// Makes room for one more entry: allocates the bucket array on first use
    /// and grows it if the new entry would exceed the threshold.
    ///
    /// Growing before the insertion leaves every chain in the same order as
    /// inserting first and rebuilding afterwards, since a grown bucket only
    /// ever receives nodes from one old bucket and the new node goes to the
    /// tail either way.
    fn reserve_one(&mut self) {
        if self.buckets.is_empty() {
            #[cfg(feature = "log")]
            log::trace!("allocating {} buckets", self.initial_buckets);

            self.buckets = empty_buckets(self.initial_buckets);
        }

        if self.populated >= threshold(self.buckets.len(), self.load_factor)
            && let Some(new_len) = grown_len(self.buckets.len())
        {
            self.grow(new_len);
        }
    }

    /// Doubles the bucket array, relinking every node into the bucket its
    /// stored hash selects.
    ///
    /// Old bucket `j` splits into new buckets `j` and `j + old_len` on the
    /// hash bit `old_len`; both halves keep the old chain order.
    #[cold]
    fn grow(&mut self, new_len: usize) {
        let old_len = self.buckets.len();
        debug_assert_eq!(new_len, old_len * 2);

        #[cfg(feature = "log")]
        log::debug!(
            "growing from {} to {} buckets with {} entries",
            old_len,
            new_len,
            self.populated
        );

        let old = core::mem::replace(&mut self.buckets, empty_buckets(new_len));
        for (index, mut link) in old.into_iter().enumerate() {
            let mut low = None;
            let mut high = None;
            let mut low_tail = &mut low;
            let mut high_tail = &mut high;

            while let Some(mut node) = link {
                link = node.next.take();
                if node.hash as usize & old_len == 0 {
                    low_tail = &mut low_tail.insert(node).next;
                } else {
                    high_tail = &mut high_tail.insert(node).next;
                }
            }

            self.buckets[index] = low;
            self.buckets[index + old_len] = high;
        }
    }

    /// Computes a histogram of chain lengths.
    ///
    /// Index `n` of the result counts the buckets whose chain holds exactly
    /// `n` nodes, so index 0 counts empty buckets. The result is empty when
    /// the bucket array has not been allocated.
    #[cfg(any(test, feature = "stats"))]
    pub fn chain_histogram(&self) -> Vec<usize> {
        let mut hist = Vec::new();
        for head in self.buckets.iter() {
            let length = chain(head).count();
            if hist.len() <= length {
                hist.resize(length + 1, 0);
            }
            hist[length] += 1;
        }
        hist
    }

    /// Returns detailed utilization statistics for debugging.
    #[cfg(any(test, feature = "stats"))]
    pub fn debug_stats(&self) -> DebugStats {
        let hist = self.chain_histogram();
        let buckets = self.buckets.len();
        let occupied_buckets = buckets - hist.first().copied().unwrap_or(0);

        DebugStats {
            populated: self.populated,
            capacity: self.capacity(),
            buckets,
            occupied_buckets,
            longest_chain: hist.len().saturating_sub(1),
            load_factor: if buckets == 0 {
                0.0
            } else {
                self.populated as f64 / buckets as f64
            },
            bucket_utilization: if buckets == 0 {
                0.0
            } else {
                occupied_buckets as f64 / buckets as f64
            },
            mean_chain_length: if occupied_buckets == 0 {
                0.0
            } else {
                self.populated as f64 / occupied_buckets as f64
            },
            total_bytes: buckets * core::mem::size_of::<Link<V>>()
                + self.populated * core::mem::size_of::<Node<V>>(),
        }
    }

    /// Pretty-prints the chain length histogram horizontally using stdout.
    ///
    /// Each row is a chain length, starting with empty buckets.
    #[cfg(all(any(test, feature = "stats"), feature = "std"))]
    pub fn print_chain_histogram(&self) {
        let hist = self.chain_histogram();
        let max = *hist.iter().max().unwrap_or(&0);
        if max == 0 {
            println!("chain histogram: empty");
            return;
        }

        let max_bar = 60usize;
        let total_units = max_bar * 8;
        println!(
            "chain histogram ({} entries, {} buckets):",
            self.populated,
            self.buckets.len()
        );

        let make_bar = |count: usize| -> alloc::string::String {
            if count == 0 {
                return alloc::string::String::new();
            }
            let units = ((count as u128 * total_units as u128).div_ceil(max as u128)) as usize;
            let full = units / 8;
            let rem = units % 8;
            let mut bar = "█".repeat(full);
            if rem > 0 {
                let ch = match rem {
                    1 => '▏',
                    2 => '▎',
                    3 => '▍',
                    4 => '▌',
                    5 => '▋',
                    6 => '▊',
                    7 => '▉',
                    _ => unreachable!(),
                };
                bar.push(ch);
            }
            bar
        };

        for (length, &count) in hist.iter().enumerate() {
            println!("{:>3} | {} ({})", length, make_bar(count), count);
        }
    }
}

/// A view into a single entry in the hash table, which may be vacant or
/// occupied.
///
/// This enum is constructed from the [`entry`] method on [`HashTable`].
///
/// [`entry`]: HashTable::entry
pub enum Entry<'a, V> {
    /// A vacant entry - no value matched
    Vacant(VacantEntry<'a, V>),
    /// An occupied entry - a value matched
    Occupied(OccupiedEntry<'a, V>),
}

impl<'a, V> Entry<'a, V> {
    /// Inserts `default` if the entry is vacant and returns a mutable
    /// reference to the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// *table.entry(9, |&(k, _): &(u64, u64)| k == 9).or_insert((9, 0)) = (9, 3);
    /// assert_eq!(table.entry(9, |&(k, _)| k == 9).or_insert((9, 0)), &(9, 3));
    /// ```
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Inserts the value computed by `default` if the entry is vacant and
    /// returns a mutable reference to the value.
    pub fn or_insert_with(self, default: impl FnOnce() -> V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }
}

/// A view into a vacant entry in a [`HashTable`].
pub struct VacantEntry<'a, V> {
    table: &'a mut HashTable<V>,
    hash: u64,
}

impl<'a, V> VacantEntry<'a, V> {
    /// Appends `value` to the tail of its bucket's chain and returns a
    /// mutable reference to it.
    ///
    /// Allocates the bucket array if this is the table's first insertion, and
    /// grows it when the table is at its threshold.
    pub fn insert(self, value: V) -> &'a mut V {
        let VacantEntry { table, hash } = self;
        table.reserve_one();
        table.populated += 1;

        let index = table.bucket_index(hash);
        let mut slot = &mut table.buckets[index];
        while let Some(node) = slot {
            slot = &mut node.next;
        }

        &mut slot
            .insert(Box::new(Node {
                hash,
                value,
                next: None,
            }))
            .value
    }
}

/// A view into an occupied entry in a [`HashTable`].
pub struct OccupiedEntry<'a, V> {
    table: &'a mut HashTable<V>,
    index: usize,
    depth: usize,
}

impl<'a, V> OccupiedEntry<'a, V> {
    /// Gets a reference to the value in the entry.
    pub fn get(&self) -> &V {
        let node = chain(&self.table.buckets[self.index])
            .nth(self.depth)
            .expect(LIVE_NODE);
        &node.value
    }

    /// Gets a mutable reference to the value in the entry.
    pub fn get_mut(&mut self) -> &mut V {
        &mut nth_node_mut(&mut self.table.buckets[self.index], self.depth).value
    }

    /// Converts the entry into a mutable reference to the value.
    pub fn into_mut(self) -> &'a mut V {
        let OccupiedEntry {
            table,
            index,
            depth,
        } = self;
        &mut nth_node_mut(&mut table.buckets[index], depth).value
    }

    /// Replaces the value in the entry, returning the old value. The node
    /// stays where it is.
    pub fn insert(&mut self, value: V) -> V {
        core::mem::replace(self.get_mut(), value)
    }

    /// Unlinks the entry from its chain and returns the value.
    pub fn remove(self) -> V {
        let OccupiedEntry {
            table,
            index,
            depth,
        } = self;

        let mut slot = &mut table.buckets[index];
        for _ in 0..depth {
            slot = &mut slot.as_mut().expect(LIVE_NODE).next;
        }

        let mut node = slot.take().expect(LIVE_NODE);
        *slot = node.next.take();
        table.populated -= 1;
        node.value
    }
}

fn nth_node_mut<V>(head: &mut Link<V>, depth: usize) -> &mut Node<V> {
    let mut node = head.as_deref_mut().expect(LIVE_NODE);
    for _ in 0..depth {
        node = node.next.as_deref_mut().expect(LIVE_NODE);
    }
    node
}

/// An iterator over the values in a [`HashTable`].
///
/// This struct is created by the [`iter`] method on [`HashTable`].
///
/// [`iter`]: HashTable::iter
pub struct Iter<'a, V> {
    buckets: core::slice::Iter<'a, Link<V>>,
    chain: Option<&'a Node<V>>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.chain {
                self.chain = node.next.as_deref();
                self.remaining -= 1;
                return Some(&node.value);
            }
            self.chain = self.buckets.next()?.as_deref();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> FusedIterator for Iter<'_, V> {}
