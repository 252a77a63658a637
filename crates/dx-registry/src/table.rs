//! Internal unit storage shared by both registry modes.

use dx_core::{UnitId, UnitRng};
use dx_unit::Handler;
use rustc_hash::FxHashMap;

/// Parallel arrays of registered units, keyed by `UnitId` = registration
/// index.  `rngs[i]` is the deterministic RNG for `units[i]`; `labels[i]` its
/// display name.
///
/// Duplicate labels are allowed (registration is never rejected); `index`
/// maps each label to its *first* registration only, which is what label
/// lookup resolves to.
pub(crate) struct UnitTable<R: 'static, T: 'static> {
    pub units:  Vec<Box<dyn Handler<R, T>>>,
    pub rngs:   Vec<UnitRng>,
    pub labels: Vec<Box<str>>,
    index:      FxHashMap<Box<str>, UnitId>,
    seed:       u64,
}

impl<R: 'static, T: 'static> UnitTable<R, T> {
    pub fn new(seed: u64) -> Self {
        Self {
            units:  Vec::new(),
            rngs:   Vec::new(),
            labels: Vec::new(),
            index:  FxHashMap::default(),
            seed,
        }
    }

    /// Append a unit, seed its RNG, and return its registration index.
    pub fn register(&mut self, label: &str, unit: Box<dyn Handler<R, T>>) -> UnitId {
        let id = UnitId(self.units.len() as u32);
        self.units.push(unit);
        self.rngs.push(UnitRng::new(self.seed, id));
        self.labels.push(Box::from(label));
        self.index.entry(Box::from(label)).or_insert(id);
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// `true` if `id` names a registered unit.
    #[inline]
    pub fn contains(&self, id: UnitId) -> bool {
        id.index() < self.units.len()
    }

    /// First unit registered under `label`, if any.  O(1) via the label index.
    #[inline]
    pub fn find(&self, label: &str) -> Option<UnitId> {
        self.index.get(label).copied()
    }

    #[inline]
    pub fn label_of(&self, id: UnitId) -> Option<&str> {
        self.labels.get(id.index()).map(|l| l.as_ref())
    }
}
