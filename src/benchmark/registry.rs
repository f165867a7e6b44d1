//! Name → constructor lookup for benchmark functions.
//!
//! The host program builds a [`Registry`] once (usually with
//! [`Registry::with_defaults`]) and passes it to whatever needs to create
//! functions by name. There is no global, self-populating registry.

use super::dtlz4::Dtlz4;
use super::fonseca::Fonseca;
use super::types::MultiObjectiveFunction;
use std::collections::BTreeMap;

/// Builds a function for a given number of variables.
pub type Constructor = Box<dyn Fn(usize) -> Box<dyn MultiObjectiveFunction> + Send + Sync>;

/// Registry of benchmark function constructors.
///
/// ```
/// use u_moeval::benchmark::Registry;
///
/// let registry = Registry::with_defaults();
/// let f = registry.create("DTLZ4", 6).unwrap();
/// assert_eq!(f.number_of_variables(), 6);
/// assert!(registry.create("ZDT1", 6).is_none());
/// ```
#[derive(Default)]
pub struct Registry {
    constructors: BTreeMap<String, Constructor>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("names", &self.constructors.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every benchmark shipped with this crate.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("Fonseca", |n| Box::new(Fonseca::new(n)));
        registry.register("DTLZ4", |n| Box::new(Dtlz4::new(n)));
        registry
    }

    /// Registers `constructor` under `name`, replacing any previous entry.
    ///
    /// Returns `true` if an entry was replaced.
    pub fn register<F>(&mut self, name: impl Into<String>, constructor: F) -> bool
    where
        F: Fn(usize) -> Box<dyn MultiObjectiveFunction> + Send + Sync + 'static,
    {
        self.constructors
            .insert(name.into(), Box::new(constructor))
            .is_some()
    }

    /// Creates the function registered under `name` with `n` variables.
    pub fn create(&self, name: &str, n: usize) -> Option<Box<dyn MultiObjectiveFunction>> {
        self.constructors.get(name).map(|c| c(n))
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }

    /// True if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }
}
