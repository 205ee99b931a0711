//! Instance methods, type-level ("class") methods, a process-wide instance
//! counter, and optional arguments standing in for overloading.

use std::sync::atomic::{AtomicUsize, Ordering};

static INSTANCES: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug, PartialEq, Eq)]
pub struct Tracked {
    value: i64,
}

impl Tracked {
    pub fn new(value: i64) -> Self {
        INSTANCES.fetch_add(1, Ordering::Relaxed);
        Tracked { value }
    }

    /// Needs a receiver.
    pub fn instance_method(&self) -> String {
        format!("Instance value: {}", self.value)
    }

    /// Called on the type, not on a value.
    pub fn class_method() -> &'static str {
        "This is a class method"
    }

    /// Number of `Tracked` values constructed so far, clones included.
    pub fn instance_count() -> usize {
        INSTANCES.load(Ordering::Relaxed)
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        Tracked::new(self.value)
    }
}

pub struct MathOperations;

impl MathOperations {
    /// `a + b`, plus `c` when given.
    pub fn add(a: i64, b: i64, c: Option<i64>) -> i64 {
        match c {
            Some(c) => a + b + c,
            None => a + b,
        }
    }
}
