use std::borrow::Borrow;
use std::hash::Hash;

use ahash::HashMap;

pub(crate) trait Interned: Copy {
    fn from_index(index: usize) -> Self;
    fn index(self) -> usize;
}

/// Hands out a dense id for every distinct value, starting at zero.
#[derive(Debug)]
pub(crate) struct Interner<K, V> {
    values: Vec<V>,
    ids: HashMap<V, K>,
}

impl<K: Interned, V: Clone + Hash + Eq> Interner<K, V> {
    pub(crate) fn new() -> Self {
        Interner {
            values: Vec::new(),
            ids: HashMap::default(),
        }
    }

    pub(crate) fn lookup<Q>(&self, value: &Q) -> Option<K>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.ids.get(value).copied()
    }

    pub(crate) fn intern(&mut self, value: V) -> K {
        if let Some(id) = self.ids.get(&value) {
            return *id;
        }
        let id = K::from_index(self.values.len());
        self.ids.insert(value.clone(), id);
        self.values.push(value);
        id
    }

    #[inline]
    pub(crate) fn resolve(&self, id: K) -> &V {
        &self.values[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::PrefixId;

    #[test]
    fn test_same_value_same_id() {
        let mut interner = Interner::<PrefixId, String>::new();
        let a = interner.intern("a".to_string());
        let b = interner.intern("b".to_string());
        assert_ne!(a, b);
        assert_eq!(interner.intern("a".to_string()), a);
        assert_eq!(interner.resolve(b), "b");
    }

    #[test]
    fn test_lookup_does_not_intern() {
        let mut interner = Interner::<PrefixId, String>::new();
        assert_eq!(interner.lookup("a"), None);
        let a = interner.intern("a".to_string());
        assert_eq!(interner.lookup("a"), Some(a));
        assert_eq!(interner.lookup("b"), None);
    }
}
