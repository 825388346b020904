/// Single-slot cache keyed by the inputs it was last computed from.
#[derive(Debug)]
pub struct Memo<K, V> {
    entry: Option<(K, V)>,
    revision: u64,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            entry: None,
            revision: 0,
        }
    }
}

impl<K: PartialEq, V> Memo<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached value when `key` equals the last key, otherwise
    /// recomputes and stores it.
    pub fn get_or_compute<F>(&mut self, key: K, compute: F) -> &V
    where
        F: FnOnce(&K) -> V,
    {
        let hit = matches!(&self.entry, Some((cached, _)) if *cached == key);
        if !hit {
            let value = compute(&key);
            self.revision += 1;
            return &self.entry.insert((key, value)).1;
        }
        match &self.entry {
            Some((_, value)) => value,
            None => unreachable!("hit implies a cached entry"),
        }
    }

    pub fn value(&self) -> Option<&V> {
        self.entry.as_ref().map(|(_, value)| value)
    }

    /// Bumped on every recomputation; lets dependent caches key on it.
    pub fn revision(&self) -> u64 {
        self.revision
    }

}
