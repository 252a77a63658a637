//! Fluent builder for constructing registries.

use dx_core::{DxError, DxResult, UnitId};
use dx_unit::Handler;

use crate::{ChainRegistry, StateRegistry};

/// Fluent builder for [`StateRegistry`] and [`ChainRegistry`].
///
/// Collects `(label, unit)` pairs in registration order, then validates and
/// assembles the chosen registry mode.
///
/// # Validation
///
/// | Condition                                  | Result                     |
/// |--------------------------------------------|----------------------------|
/// | `build_state` with no units                | `DxError::Config`          |
/// | `build_state` with an unknown initial label| `DxError::Config`          |
/// | `build_chain` with `.initial(..)` set      | `DxError::Config`          |
///
/// If `.initial(..)` is not given, `build_state` makes the first registered
/// unit current.  The initial unit's `on_enter` hook runs during build.
///
/// # Example
///
/// ```rust,ignore
/// let mut registry = RegistryBuilder::new(42)
///     .unit("off", OffState)
///     .unit("on",  OnState)
///     .initial("off")
///     .build_state()?;
/// ```
pub struct RegistryBuilder<R: 'static, T: 'static> {
    seed:    u64,
    units:   Vec<(Box<str>, Box<dyn Handler<R, T>>)>,
    initial: Option<Box<str>>,
}

impl<R: 'static, T: 'static> RegistryBuilder<R, T> {
    /// Create a builder; `seed` drives every unit's deterministic RNG.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            units:   Vec::new(),
            initial: None,
        }
    }

    /// Add a unit.  Order of `unit` calls is the chain order and the
    /// `UnitId` assignment order.
    pub fn unit<H: Handler<R, T>>(mut self, label: &str, handler: H) -> Self {
        self.units.push((Box::from(label), Box::new(handler)));
        self
    }

    /// Name the unit that starts current in state mode.  Resolved against
    /// the first registration of `label`.
    pub fn initial(mut self, label: &str) -> Self {
        self.initial = Some(Box::from(label));
        self
    }

    /// Validate and build a [`StateRegistry`] with its initial unit current.
    pub fn build_state(self) -> DxResult<StateRegistry<R, T>> {
        if self.units.is_empty() {
            return Err(DxError::Config(
                "a state registry needs at least one unit".into(),
            ));
        }

        let mut registry = StateRegistry::new(self.seed);
        for (label, unit) in self.units {
            registry.register_boxed(&label, unit);
        }

        let initial = match self.initial {
            Some(label) => registry.find(&label).ok_or_else(|| {
                DxError::Config(format!("initial unit '{label}' is not registered"))
            })?,
            None => UnitId(0),
        };
        registry.set_current(initial)?;

        Ok(registry)
    }

    /// Validate and build a [`ChainRegistry`].  An empty chain is legal
    /// (every dispatch yields `Unhandled`), but `.initial(..)` is rejected
    /// because chains have no current unit.
    pub fn build_chain(self) -> DxResult<ChainRegistry<R, T>> {
        if let Some(label) = self.initial {
            return Err(DxError::Config(format!(
                "chain registries have no current unit (initial '{label}' given)"
            )));
        }

        let mut registry = ChainRegistry::new(self.seed);
        for (label, unit) in self.units {
            registry.register_boxed(&label, unit);
        }
        Ok(registry)
    }
}
