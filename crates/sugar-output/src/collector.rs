//! `DataCollector<S>` — named per-tick model reporters.

use sugar_core::Tick;

/// One registered reporter: a name plus the function that computes its
/// value from the observed state.
struct Reporter<S> {
    name: String,
    compute: Box<dyn Fn(&S) -> f64 + Send>,
}

/// One collected sample: the tick it was taken at and one value per
/// registered reporter, in registration order.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleRow {
    pub tick: Tick,
    pub values: Vec<f64>,
}

/// Accumulates a time series of named metrics evaluated against borrowed
/// model state.
///
/// Generic over the observed state type `S` so callers decide what the
/// reporters may see.  The model collects with a split field borrow
/// (`&mut` collector, `&` schedule), which is why reporters receive the
/// state as an argument instead of capturing it.
pub struct DataCollector<S> {
    reporters: Vec<Reporter<S>>,
    rows: Vec<SampleRow>,
}

impl<S> DataCollector<S> {
    pub fn new() -> Self {
        Self {
            reporters: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Register a named reporter.
    ///
    /// All reporters must be registered before the first collection —
    /// adding one later would leave earlier rows short a column.
    pub fn register(&mut self, name: impl Into<String>, compute: impl Fn(&S) -> f64 + Send + 'static) {
        debug_assert!(
            self.rows.is_empty(),
            "reporters must be registered before the first collection"
        );
        self.reporters.push(Reporter {
            name: name.into(),
            compute: Box::new(compute),
        });
    }

    /// Evaluate every reporter against `state` and append one sample row.
    pub fn collect(&mut self, tick: Tick, state: &S) {
        let values = self.reporters.iter().map(|r| (r.compute)(state)).collect();
        self.rows.push(SampleRow { tick, values });
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Registered series names, in registration (column) order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.reporters.iter().map(|r| r.name.as_str())
    }

    /// Number of samples collected so far.
    pub fn sample_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All collected rows, oldest first.
    pub fn rows(&self) -> &[SampleRow] {
        &self.rows
    }

    /// The full history of one named series, or `None` for an unknown name.
    pub fn series(&self, name: &str) -> Option<Vec<f64>> {
        let col = self.reporters.iter().position(|r| r.name == name)?;
        Some(self.rows.iter().map(|row| row.values[col]).collect())
    }

    /// The most recent value of one named series.
    pub fn latest(&self, name: &str) -> Option<f64> {
        let col = self.reporters.iter().position(|r| r.name == name)?;
        self.rows.last().map(|row| row.values[col])
    }
}

impl<S> Default for DataCollector<S> {
    fn default() -> Self {
        Self::new()
    }
}
