/// Starting value of a freshly constructed tally.
pub const INITIAL_VALUE: i64 = 7;

/// Shared mutable counter state, owned by the caller rather than held in
/// process-wide state. Callers control initialization and lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    value: i64,
}

impl Tally {
    pub fn new() -> Self {
        Self::starting_at(INITIAL_VALUE)
    }

    pub fn starting_at(value: i64) -> Self {
        Self { value }
    }

    /// Adds `a` to the stored value, then returns the new value minus `b`.
    ///
    /// Arithmetic wraps on overflow (two's complement). After N calls the
    /// stored value is the initial value plus the sum of every `a` seen.
    pub fn accumulate(&mut self, a: i64, b: i64) -> i64 {
        self.value = self.value.wrapping_add(a);
        self.value.wrapping_sub(b)
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

impl Default for Tally {
    fn default() -> Self {
        Self::new()
    }
}
