use core::fmt::Debug;
use core::fmt::Display;
use core::hash::BuildHasher;
use core::hash::Hash;

use crate::hash_code::HashCodeBuilder;
#[cfg(any(test, feature = "stats"))]
use crate::hash_table::DebugStats;
use crate::hash_table::Entry as TableEntry;
use crate::hash_table::HashTable;

/// Hash code of the null key.
const NULL_HASH: u64 = 0;

/// A hash map implemented on top of the separate-chaining [`HashTable`].
///
/// `HashMap<K, V, S>` stores key-value pairs where keys implement
/// `Hash + Eq` and are hashed with the hasher builder `S`. Both the key and
/// the value of an entry may be null, which is spelled `None`: the map stores
/// `Option<K>` keys and `Option<V>` values, and the null key always hashes to
/// 0 regardless of `S`.
///
/// Lookups return the value flattened to `Option<&V>`, so a key that is
/// absent and a key mapped to null both read as `None`. Use
/// [`contains_key`](HashMap::contains_key) to tell them apart.
///
/// The default hasher, [`HashCodeBuilder`], is deterministic. Use
/// [`RandomState`](crate::RandomState) for keys from untrusted sources.
///
/// This type performs no internal synchronization. Every mutating method
/// takes `&mut self`, so sharing one across threads requires a lock.
///
/// # Examples
///
/// ```rust
/// use chain_hash::HashMap;
///
/// let mut map = HashMap::new();
/// assert_eq!(map.insert(Some(1), Some("a")), None);
/// assert_eq!(map.insert(Some(1), Some("b")), Some("a"));
/// assert_eq!(map.insert(None, None), None);
///
/// assert_eq!(map.get(Some(&1)), Some(&"b"));
/// assert_eq!(map.get(None), None);
/// assert!(map.contains_key(None));
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.to_string(), "{null=null, 1=b}");
/// ```
#[derive(Clone)]
pub struct HashMap<K, V, S = HashCodeBuilder> {
    table: HashTable<(Option<K>, Option<V>)>,
    hash_builder: S,
}

/// Renders `None` as `null`.
struct Nullable<'a, T>(Option<&'a T>);

impl<T: Display> Display for Nullable<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("null"),
        }
    }
}

/// Formats the map as `{k1=v1, k2=v2}`, with `null` for `None`.
///
/// Entries appear in bucket order, then chain order. The order is not the
/// insertion order and changes when the map grows.
impl<K, V, S> Display for HashMap<K, V, S>
where
    K: Display,
    V: Display,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.table.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", Nullable(key.as_ref()), Nullable(value.as_ref()))?;
        }
        f.write_str("}")
    }
}

impl<K, V, S> Debug for HashMap<K, V, S>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut map = f.debug_map();
        for (k, v) in self.table.iter() {
            map.entry(k, v);
        }
        map.finish()
    }
}

impl<K, V> HashMap<K, V, HashCodeBuilder> {
    /// Creates an empty map with the default hasher. Sixteen buckets are
    /// allocated on the first insertion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashMap;
    ///
    /// let map: HashMap<i32, String> = HashMap::new();
    /// assert!(map.is_empty());
    /// assert_eq!(map.bucket_count(), 0);
    /// ```
    pub fn new() -> Self {
        Self::with_hasher(HashCodeBuilder)
    }

    /// Creates an empty map with the default hasher, able to hold at least
    /// `capacity` entries before growing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashMap;
    ///
    /// let map: HashMap<i32, String> = HashMap::with_capacity(100);
    /// assert!(map.capacity() >= 100);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, HashCodeBuilder)
    }

    /// Creates an empty map with the default hasher and a custom load
    /// factor.
    ///
    /// # Panics
    ///
    /// Panics if `load_factor` is not a finite, positive number.
    pub fn with_capacity_and_load_factor(capacity: usize, load_factor: f32) -> Self {
        Self::with_capacity_load_factor_and_hasher(capacity, load_factor, HashCodeBuilder)
    }
}

impl<K, V, S> HashMap<K, V, S> {
    /// Creates an empty map with the given hasher builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::BuildHasher;
    /// # use siphasher::sip::SipHasher;
    /// #
    /// # use chain_hash::HashMap;
    /// #
    /// # struct SimpleHasher;
    /// # impl BuildHasher for SimpleHasher {
    /// #     type Hasher = SipHasher;
    /// #
    /// #     fn build_hasher(&self) -> Self::Hasher {
    /// #         SipHasher::new()
    /// #     }
    /// # }
    /// #
    /// let map: HashMap<i32, String, _> = HashMap::with_hasher(SimpleHasher);
    /// assert!(map.is_empty());
    /// ```
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            table: HashTable::new(),
            hash_builder,
        }
    }

    /// Creates an empty map with the given hasher builder, able to hold at
    /// least `capacity` entries before growing.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            table: HashTable::with_capacity(capacity),
            hash_builder,
        }
    }

    /// Creates an empty map with the given capacity, load factor and hasher
    /// builder.
    ///
    /// # Panics
    ///
    /// Panics if `load_factor` is not a finite, positive number.
    pub fn with_capacity_load_factor_and_hasher(
        capacity: usize,
        load_factor: f32,
        hash_builder: S,
    ) -> Self {
        Self {
            table: HashTable::with_capacity_and_load_factor(capacity, load_factor),
            hash_builder,
        }
    }

    /// Returns the number of entries in the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// assert_eq!(map.len(), 0);
    /// map.insert(Some(1), Some("a"));
    /// map.insert(None, Some("b"));
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the number of entries the map can hold before it grows.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Returns the length of the bucket array, or zero before the first
    /// insertion.
    pub fn bucket_count(&self) -> usize {
        self.table.bucket_count()
    }

    /// Returns the load factor the map grows at.
    pub fn load_factor(&self) -> f32 {
        self.table.load_factor()
    }

    /// Returns a reference to the map's hasher builder.
    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Removes all entries from the map.
    ///
    /// The bucket array keeps its length. Calling this on a map that never
    /// held an entry is a no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.insert(Some(1), Some("a"));
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert_eq!(map.to_string(), "{}");
    /// ```
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Returns `true` if at least one key maps to `value`.
    ///
    /// Scans every chain. `None` looks for keys mapped to null.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.insert(Some(1), Some("a"));
    /// map.insert(Some(2), None);
    ///
    /// assert!(map.contains_value(Some(&"a")));
    /// assert!(map.contains_value(None));
    /// assert!(!map.contains_value(Some(&"b")));
    /// ```
    pub fn contains_value(&self, value: Option<&V>) -> bool
    where
        V: PartialEq,
    {
        self.table.iter().any(|(_, v)| v.as_ref() == value)
    }

    /// Chain length histogram of the underlying table; see
    /// [`HashTable::chain_histogram`].
    #[cfg(any(test, feature = "stats"))]
    pub fn chain_histogram(&self) -> alloc::vec::Vec<usize> {
        self.table.chain_histogram()
    }

    /// Utilization statistics of the underlying table.
    #[cfg(any(test, feature = "stats"))]
    pub fn debug_stats(&self) -> DebugStats {
        self.table.debug_stats()
    }

    /// Pretty-prints the chain length histogram of the underlying table.
    #[cfg(all(any(test, feature = "stats"), feature = "std"))]
    pub fn print_chain_histogram(&self) {
        self.table.print_chain_histogram();
    }
}

impl<K, V, S> HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    #[inline]
    fn hash_key(&self, key: Option<&K>) -> u64 {
        key.map_or(NULL_HASH, |key| self.hash_builder.hash_one(key))
    }

    /// Associates `value` with `key`.
    ///
    /// If the key was present its value is replaced in place, the stored key
    /// is kept, and the old value is returned. Otherwise the entry is
    /// appended to its bucket's chain, the map grows if it is now past its
    /// threshold, and `None` is returned. A returned `None` also results from
    /// replacing a null value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// assert_eq!(map.insert(Some(37), Some("a")), None);
    /// assert_eq!(map.insert(Some(37), Some("b")), Some("a"));
    /// assert_eq!(map.insert(Some(37), None), Some("b"));
    /// assert_eq!(map.insert(Some(37), Some("c")), None);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: Option<K>, value: Option<V>) -> Option<V> {
        let hash = self.hash_key(key.as_ref());
        match self.table.entry(hash, |(k, _)| k.as_ref() == key.as_ref()) {
            TableEntry::Occupied(mut entry) => core::mem::replace(&mut entry.get_mut().1, value),
            TableEntry::Vacant(entry) => {
                entry.insert((key, value));
                None
            }
        }
    }

    /// Returns a reference to the value mapped to `key`.
    ///
    /// Returns `None` both when the key is absent and when it is mapped to
    /// null.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.insert(Some(1), Some("a"));
    /// map.insert(Some(2), None);
    ///
    /// assert_eq!(map.get(Some(&1)), Some(&"a"));
    /// assert_eq!(map.get(Some(&2)), None);
    /// assert_eq!(map.get(Some(&3)), None);
    /// ```
    pub fn get(&self, key: Option<&K>) -> Option<&V> {
        let hash = self.hash_key(key);
        self.table
            .find(hash, |(k, _)| k.as_ref() == key)
            .and_then(|(_, v)| v.as_ref())
    }

    /// Returns `true` if the map holds an entry for `key`, even one mapped
    /// to null.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashMap;
    ///
    /// let mut map: HashMap<i32, &str> = HashMap::new();
    /// map.insert(None, None);
    ///
    /// assert!(map.contains_key(None));
    /// assert!(!map.contains_key(Some(&0)));
    /// ```
    pub fn contains_key(&self, key: Option<&K>) -> bool {
        let hash = self.hash_key(key);
        self.table.find(hash, |(k, _)| k.as_ref() == key).is_some()
    }

    /// Removes the entry for `key`, returning its value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.insert(Some(1), Some("a"));
    /// assert_eq!(map.remove(Some(&1)), Some("a"));
    /// assert_eq!(map.remove(Some(&1)), None);
    /// assert!(map.is_empty());
    /// ```
    pub fn remove(&mut self, key: Option<&K>) -> Option<V> {
        let hash = self.hash_key(key);
        self.table
            .remove(hash, |(k, _)| k.as_ref() == key)
            .and_then(|(_, v)| v)
    }
}

impl<K, V, S> Default for HashMap<K, V, S>
where
    S: Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::hash::BuildHasher;
    use core::hash::Hasher;

    use rand::Rng;
    use rand::SeedableRng;
    use rand::TryRngCore;
    use rand::rngs::OsRng;
    use rand::rngs::SmallRng;
    use siphasher::sip::SipHasher;

    use super::*;

    const TEST: &str = "test";

    #[derive(Clone)]
    struct SipHashBuilder {
        k1: u64,
        k2: u64,
    }

    impl BuildHasher for SipHashBuilder {
        type Hasher = SipHasher;

        fn build_hasher(&self) -> Self::Hasher {
            SipHasher::new_with_keys(self.k1, self.k2)
        }
    }

    impl Default for SipHashBuilder {
        fn default() -> Self {
            let mut rng = OsRng;
            Self {
                k1: rng.try_next_u64().unwrap_or(0),
                k2: rng.try_next_u64().unwrap_or(0),
            }
        }
    }

    /// Sends every key to the same bucket.
    #[derive(Clone, Default)]
    struct ConstantHashBuilder;

    struct ConstantHasher;

    impl Hasher for ConstantHasher {
        fn finish(&self) -> u64 {
            7
        }

        fn write(&mut self, _bytes: &[u8]) {}
    }

    impl BuildHasher for ConstantHashBuilder {
        type Hasher = ConstantHasher;

        fn build_hasher(&self) -> Self::Hasher {
            ConstantHasher
        }
    }

    fn filled(start: i32, end: i32) -> HashMap<i32, String> {
        let mut map = HashMap::new();
        for i in start..end {
            map.insert(Some(i), Some(format!("{TEST}{i}")));
        }
        map
    }

    #[test]
    fn put_null_key_and_null_value_twice() {
        let mut map: HashMap<i32, String> = HashMap::new();
        assert_eq!(map.insert(None, None), None);
        assert_eq!(map.insert(None, None), None);
        assert_eq!(map.len(), 1);
        assert_eq!(map.insert(None, None), None);
        assert_eq!(map.len(), 1);
        assert_eq!(map.to_string(), "{null=null}");

        assert_eq!(map.get(None), None);
        assert!(map.contains_key(None));
    }

    #[test]
    fn put_null_key_with_values() {
        let mut map = HashMap::<i32, &str>::new();
        assert_eq!(map.insert(None, Some("firstValue")), None);
        assert_eq!(map.len(), 1);
        assert_eq!(map.insert(None, Some("secondValue")), Some("firstValue"));
        assert_eq!(map.len(), 1);
        assert_eq!(map.insert(None, Some("thirdValue")), Some("secondValue"));
        assert_eq!(map.len(), 1);
        assert_eq!(map.to_string(), "{null=thirdValue}");
        assert_eq!(map.get(None), Some(&"thirdValue"));
    }

    #[test]
    fn put_keys_with_null_values() {
        let mut map = HashMap::<i32, &str>::new();
        assert_eq!(map.insert(Some(1), None), None);
        assert_eq!(map.len(), 1);
        assert_eq!(map.insert(Some(2), None), None);
        assert_eq!(map.len(), 2);
        assert_eq!(map.insert(Some(3), None), None);
        assert_eq!(map.len(), 3);
        assert_eq!(map.to_string(), "{1=null, 2=null, 3=null}");
    }

    #[test]
    fn put_same_key_twice() {
        let mut map = HashMap::new();
        assert_eq!(map.insert(Some(1), Some("a")), None);
        assert_eq!(map.len(), 1);
        assert_eq!(map.insert(Some(1), Some("b")), Some("a"));
        assert_eq!(map.len(), 1);
        assert_eq!(map.to_string(), "{1=b}");
        assert_eq!(map.get(Some(&1)), Some(&"b"));
    }

    #[test]
    fn display() {
        let mut map = HashMap::new();
        assert_eq!(map.to_string(), "{}");
        map.insert(Some(0), Some(TEST));
        assert_eq!(map.to_string(), "{0=test}");
    }

    #[test]
    fn display_uses_bucket_order() {
        let mut map = HashMap::new();
        for key in [17, 3, 1] {
            map.insert(Some(key), Some(key * 10));
        }
        map.insert(None, Some(0));
        // 1 and 17 share bucket 1; the null key lives in bucket 0.
        assert_eq!(map.to_string(), "{null=0, 17=170, 1=10, 3=30}");
    }

    #[test]
    fn debug_format() {
        let mut map = HashMap::new();
        map.insert(Some(1), Some("a"));
        map.insert(Some(2), None);
        assert_eq!(format!("{map:?}"), r#"{Some(1): Some("a"), Some(2): None}"#);
    }

    #[test]
    fn get() {
        let mut map = HashMap::<i32, String>::new();
        assert_eq!(map.get(Some(&100)), None);

        map = filled(0, 20);
        assert_eq!(map.get(Some(&0)).map(String::as_str), Some("test0"));
        assert_eq!(map.get(Some(&10)).map(String::as_str), Some("test10"));
        assert_eq!(map.get(Some(&19)).map(String::as_str), Some("test19"));

        map.insert(Some(20), None);
        assert_eq!(map.get(Some(&20)), None);
        assert!(map.contains_key(Some(&20)));

        map.insert(None, Some(TEST.to_string()));
        assert_eq!(map.get(None).map(String::as_str), Some(TEST));
    }

    #[test]
    fn never_inserted_keys_are_absent() {
        let map = filled(0, 20);
        for key in [-1, 20, 1000, i32::MIN, i32::MAX] {
            assert_eq!(map.get(Some(&key)), None);
            assert!(!map.contains_key(Some(&key)));
        }
        assert!(!map.contains_key(None));
    }

    #[test]
    fn remove() {
        let mut map = HashMap::<i32, String>::new();
        assert_eq!(map.remove(Some(&0)), None);
        assert_eq!(map.remove(None), None);

        map = filled(0, 100);
        assert_eq!(map.remove(Some(&0)).as_deref(), Some("test0"));
        assert_eq!(map.remove(Some(&99)).as_deref(), Some("test99"));
        assert_eq!(map.len(), 98);
        assert_eq!(map.remove(Some(&99)), None);
        assert_eq!(map.len(), 98);
        assert!(!map.contains_key(Some(&99)));
    }

    #[test]
    fn remove_null_key() {
        let mut map = filled(0, 5);
        map.insert(None, Some("null".to_string()));
        assert_eq!(map.len(), 6);
        assert_eq!(map.remove(None).as_deref(), Some("null"));
        assert!(!map.contains_key(None));
        assert_eq!(map.len(), 5);

        map.insert(None, None);
        assert_eq!(map.remove(None), None);
        assert!(!map.contains_key(None));
    }

    #[test]
    fn remove_ten_thousand_items() {
        let mut map = filled(0, 10_000);
        for i in 0..10_000 {
            assert_eq!(map.remove(Some(&i)), Some(format!("{TEST}{i}")));
        }
        assert!(map.is_empty());
        assert_eq!(map.to_string(), "{}");
    }

    #[test]
    fn contains_key() {
        let mut map = HashMap::<i32, String>::new();
        assert!(!map.contains_key(Some(&0)));

        map = filled(0, 20);
        assert!(map.contains_key(Some(&0)));
        assert!(map.contains_key(Some(&13)));
        assert!(map.contains_key(Some(&19)));
        assert!(!map.contains_key(Some(&-1)));
        assert!(!map.contains_key(Some(&1000)));
    }

    #[test]
    fn contains_value() {
        let mut map = HashMap::<i32, String>::new();
        assert!(!map.contains_value(Some(&TEST.to_string())));
        assert!(!map.contains_value(None));

        map = filled(0, 20);
        assert!(map.contains_value(Some(&"test0".to_string())));
        assert!(map.contains_value(Some(&"test13".to_string())));
        assert!(map.contains_value(Some(&"test19".to_string())));
        assert!(!map.contains_value(Some(&TEST.to_string())));
        assert!(!map.contains_value(Some(&"test1000".to_string())));
        assert!(!map.contains_value(None));

        map.insert(Some(42), None);
        assert!(map.contains_value(None));
    }

    #[test]
    fn contains_value_ten_thousand_items() {
        let map = filled(0, 10_000);
        for i in (0..10_000).step_by(97) {
            assert!(map.contains_value(Some(&format!("{TEST}{i}"))));
        }
    }

    #[test]
    fn size_and_is_empty() {
        let mut map = HashMap::<i32, String>::new();
        assert_eq!(map.len(), 0);
        assert!(map.is_empty());

        map = filled(0, 20);
        assert_eq!(map.len(), 20);
        assert!(!map.is_empty());
    }

    #[test]
    fn clear() {
        let mut map = filled(0, 20);
        assert_eq!(map.len(), 20);
        let buckets = map.bucket_count();

        map.clear();
        assert_eq!(map.len(), 0);
        assert!(map.is_empty());
        assert_eq!(map.to_string(), "{}");
        assert_eq!(map.bucket_count(), buckets);
        assert!(!map.contains_key(Some(&0)));

        map.insert(Some(3), Some("again".to_string()));
        assert_eq!(map.to_string(), "{3=again}");
    }

    #[test]
    fn clear_on_fresh_map() {
        let mut map = HashMap::<i32, String>::new();
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.bucket_count(), 0);
        assert_eq!(map.to_string(), "{}");
    }

    #[test]
    fn lazy_allocation_and_growth() {
        let mut map = HashMap::new();
        assert_eq!(map.bucket_count(), 0);
        assert_eq!(map.capacity(), 12);

        map.insert(Some(0), Some(0));
        assert_eq!(map.bucket_count(), 16);

        for i in 1..12 {
            map.insert(Some(i), Some(i));
        }
        assert_eq!(map.bucket_count(), 16);

        // Overwrites never trigger growth.
        for i in 0..12 {
            map.insert(Some(i), Some(-i));
        }
        assert_eq!(map.bucket_count(), 16);

        map.insert(Some(12), Some(12));
        assert_eq!(map.bucket_count(), 32);
        assert_eq!(map.len(), 13);
    }

    #[test]
    fn bucket_count_stays_power_of_two() {
        let mut map = HashMap::new();
        let mut last = 0;
        for i in 0..5_000 {
            map.insert(Some(i), None::<()>);
            let buckets = map.bucket_count();
            assert!(buckets.is_power_of_two());
            assert!(buckets == last || buckets == last * 2 || last == 0);
            assert!(map.len() <= map.capacity());
            last = buckets;
        }
    }

    #[test]
    fn put_one_million_items() {
        let map = filled(0, 1_000_000);
        assert_eq!(map.len(), 1_000_000);
        for i in (0..1_000_000).step_by(7) {
            assert_eq!(map.get(Some(&i)), Some(&format!("{TEST}{i}")));
        }
        assert!(map.contains_key(Some(&999_999)));
    }

    #[test]
    #[ignore = "allocates roughly a gigabyte"]
    fn put_ten_million_items() {
        let map = filled(0, 10_000_000);
        assert_eq!(map.len(), 10_000_000);
        for i in 0..10_000_000 {
            assert_eq!(map.get(Some(&i)), Some(&format!("{TEST}{i}")));
            assert!(map.contains_key(Some(&i)));
        }
    }

    #[test]
    fn random_hasher_roundtrip() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());

        for i in 0..1000 {
            assert_eq!(map.insert(Some(i), Some(i * 2)), None);
        }
        assert_eq!(map.len(), 1000);
        for i in 0..1000 {
            assert_eq!(map.get(Some(&i)), Some(&(i * 2)));
        }
        for i in (0..1000).step_by(2) {
            assert_eq!(map.remove(Some(&i)), Some(i * 2));
        }
        assert_eq!(map.len(), 500);
        for i in 0..1000 {
            assert_eq!(map.contains_key(Some(&i)), i % 2 == 1);
        }
    }

    #[test]
    fn string_keys() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());

        map.insert(Some("hello".to_string()), Some(1));
        map.insert(Some("world".to_string()), Some(2));
        map.insert(None, Some(3));

        assert_eq!(map.get(Some(&"hello".to_string())), Some(&1));
        assert_eq!(map.get(Some(&"world".to_string())), Some(&2));
        assert_eq!(map.get(None), Some(&3));
        assert_eq!(map.get(Some(&"missing".to_string())), None);
    }

    #[test]
    fn all_keys_colliding() {
        let mut map = HashMap::with_hasher(ConstantHashBuilder);
        for i in 0..200 {
            map.insert(Some(i), Some(i));
        }
        map.insert(None, Some(-1));
        assert_eq!(map.len(), 201);

        let hist = map.chain_histogram();
        assert_eq!(hist.len(), 201);
        assert_eq!(hist[200], 1);
        assert_eq!(hist[1], 1);

        for i in [0, 100, 199] {
            assert_eq!(map.remove(Some(&i)), Some(i));
        }
        for i in 0..200 {
            assert_eq!(map.contains_key(Some(&i)), ![0, 100, 199].contains(&i));
        }
        assert_eq!(map.get(None), Some(&-1));
    }

    #[test]
    fn key_hashing_to_zero_coexists_with_null_key() {
        let mut map = HashMap::new();
        map.insert(Some(0), Some("zero"));
        map.insert(None, Some("null"));
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(Some(&0)), Some(&"zero"));
        assert_eq!(map.get(None), Some(&"null"));
        assert_eq!(map.to_string(), "{0=zero, null=null}");

        assert_eq!(map.remove(Some(&0)), Some("zero"));
        assert_eq!(map.get(None), Some(&"null"));
    }

    #[test]
    fn overwrite_keeps_original_key() {
        #[derive(Debug)]
        struct Tagged {
            id: i32,
            tag: &'static str,
        }

        impl PartialEq for Tagged {
            fn eq(&self, other: &Self) -> bool {
                self.id == other.id
            }
        }

        impl Eq for Tagged {}

        impl core::hash::Hash for Tagged {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.id.hash(state);
            }
        }

        impl Display for Tagged {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}:{}", self.id, self.tag)
            }
        }

        let mut map = HashMap::new();
        map.insert(Some(Tagged { id: 1, tag: "first" }), Some(1));
        map.insert(Some(Tagged { id: 1, tag: "second" }), Some(2));
        assert_eq!(map.to_string(), "{1:first=2}");
    }

    #[test]
    fn clone_is_independent() {
        let mut map = filled(0, 50);
        let cloned = map.clone();
        map.clear();
        assert_eq!(cloned.len(), 50);
        assert_eq!(cloned.get(Some(&7)).map(String::as_str), Some("test7"));
    }

    #[test]
    fn default_and_custom_load_factor() {
        let map: HashMap<i32, i32, SipHashBuilder> = HashMap::default();
        assert!(map.is_empty());
        assert_eq!(map.load_factor(), 0.75);

        let mut map = HashMap::with_capacity_and_load_factor(0, 2.0);
        for i in 0..3 {
            map.insert(Some(i), Some(i));
        }
        assert_eq!(map.load_factor(), 2.0);
        assert!(map.len() <= map.capacity());
        assert!(map.bucket_count() <= 2);
    }

    #[test]
    fn matches_std_model() {
        let mut rng = SmallRng::seed_from_u64(0x5eed);
        let mut map = HashMap::with_hasher(SipHashBuilder::default());
        let mut model: std::collections::HashMap<Option<u16>, Option<u32>> =
            std::collections::HashMap::new();

        for _ in 0..50_000 {
            let key = if rng.random_bool(0.02) {
                None
            } else {
                Some(rng.random_range(0..2_000u16))
            };
            let value = if rng.random_bool(0.1) {
                None
            } else {
                Some(rng.random::<u32>())
            };

            match rng.random_range(0..5u8) {
                0 | 1 => {
                    let expected = model.insert(key, value).flatten();
                    assert_eq!(map.insert(key, value), expected);
                }
                2 => {
                    let expected = model.remove(&key).flatten();
                    assert_eq!(map.remove(key.as_ref()), expected);
                }
                3 => {
                    let expected = model.get(&key).copied().flatten();
                    assert_eq!(map.get(key.as_ref()).copied(), expected);
                }
                _ => {
                    assert_eq!(map.contains_key(key.as_ref()), model.contains_key(&key));
                }
            }
            assert_eq!(map.len(), model.len());
        }

        let mut seen: Vec<_> = map
            .table
            .iter()
            .map(|&(k, v)| (k, v))
            .collect::<Vec<_>>();
        seen.sort_unstable();
        let mut expected: Vec<_> = model.into_iter().collect();
        expected.sort_unstable();
        assert_eq!(seen, expected);
    }

    #[cfg(feature = "log")]
    #[test]
    fn growth_with_logging() {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut map = HashMap::new();
        for i in 0..100 {
            map.insert(Some(i), Some(i));
        }
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.bucket_count(), 256);
    }

    #[test]
    fn stats_track_chains() {
        let map = filled(0, 12);
        let stats = map.debug_stats();
        assert_eq!(stats.populated, 12);
        assert_eq!(stats.buckets, 16);
        assert_eq!(stats.occupied_buckets, 12);
        assert_eq!(stats.longest_chain, 1);
        assert_eq!(map.chain_histogram(), vec![4, 12]);
    }
}
