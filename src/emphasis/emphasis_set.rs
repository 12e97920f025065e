// src/emphasis/emphasis_set.rs

use rustc_hash::FxHashMap;
use std::fmt;
use std::hash::Hash;

/// Handle returned by [`EmphasisSet::on_change`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

/// Which harmonic each interaction source (slider, tool, number display, ...) is
/// currently emphasizing.
///
/// A source emphasizes at most one harmonic at a time; a harmonic may be emphasized
/// by any number of sources at once, e.g. two fingers on two controls.
pub struct EmphasisSet<S, H> {
    entries: FxHashMap<S, H>,
    listeners: Vec<(ListenerId, Box<dyn FnMut()>)>,
    next_listener_id: usize,
}

impl<S, H> EmphasisSet<S, H>
where
    S: Eq + Hash + fmt::Debug,
    H: PartialEq,
{
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    /// Starts emphasizing `harmonic` on behalf of `source`.
    ///
    /// Panics if `source` is already emphasizing something.
    pub fn add(&mut self, source: S, harmonic: H) {
        assert!(
            !self.entries.contains_key(&source),
            "source {:?} is already emphasizing a harmonic",
            source
        );
        self.entries.insert(source, harmonic);
        self.notify();
    }

    /// Stops the emphasis held by `source`. Panics if there is none.
    pub fn remove(&mut self, source: &S) -> H {
        let harmonic = match self.entries.remove(source) {
            Some(harmonic) => harmonic,
            None => panic!("source {:?} is not emphasizing a harmonic", source),
        };
        self.notify();
        harmonic
    }

    pub fn has(&self, source: &S) -> bool {
        self.entries.contains_key(source)
    }

    /// True if any source is emphasizing `harmonic`.
    pub fn emphasizes(&self, harmonic: &H) -> bool {
        self.entries.values().any(|h| h == harmonic)
    }

    pub fn get(&self, source: &S) -> Option<&H> {
        self.entries.get(source)
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry. Listeners hear about it once, and only if the set was
    /// not already empty.
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            self.entries.clear();
            self.notify();
        }
    }

    /// Registers `listener` to run whenever the size of the set changes.
    pub fn on_change(&mut self, listener: impl FnMut() + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        before != self.listeners.len()
    }

    fn notify(&mut self) {
        for (_, listener) in self.listeners.iter_mut() {
            listener();
        }
    }
}

impl<S, H> Default for EmphasisSet<S, H>
where
    S: Eq + Hash + fmt::Debug,
    H: PartialEq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S: fmt::Debug, H: fmt::Debug> fmt::Debug for EmphasisSet<S, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmphasisSet")
            .field("entries", &self.entries)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
