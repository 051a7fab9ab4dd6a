//! Derivation trails recording the intermediate steps of each formula
//!
//! Every statistic computed by this crate is returned together with a
//! [`DerivationTrail`]: an ordered list of named steps holding the quantities a
//! person would write out when working the formula by hand (sums, substituted
//! formulas, per-row calculation sheets, the final result).
//!
//! Steps keep their insertion order. When serialized, a trail becomes a map
//! whose keys appear in that same order.
//!
//! # Examples
//!
//! ```
//! use grouped_stats::trail::{DerivationTrail, StepValue};
//!
//! let mut trail = DerivationTrail::new();
//! trail.push("sum", 42.0);
//! trail.push("n", 6_usize);
//! trail.push("final_formula", format!("x̄ = 42 / 6 = {:.2}", 7.0));
//!
//! assert_eq!(trail.get("sum").and_then(StepValue::as_number), Some(42.0));
//! let names = trail.iter().map(|step| step.name).collect::<Vec<_>>();
//! assert_eq!(names, ["sum", "n", "final_formula"]);
//! ```

use serde::{Serialize, Serializer};

/// Ordered collection of named derivation steps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DerivationTrail {
    steps: Vec<Step>,
}

/// A single named step in a [`DerivationTrail`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub name: &'static str,
    pub value: StepValue,
}

/// Value recorded for a derivation step.
#[derive(Debug, Clone, PartialEq, Serialize, derive_more::From, derive_more::IsVariant)]
#[serde(untagged)]
pub enum StepValue {
    Number(f64),
    Count(usize),
    Text(String),
    Series(Vec<f64>),
    Table(WorkTable),
}

impl StepValue {
    /// Returns the numeric value of this step, widening counts to `f64`.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Count(count) => Some(*count as f64),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_table(&self) -> Option<&WorkTable> {
        match self {
            Self::Table(table) => Some(table),
            _ => None,
        }
    }
}

/// Per-row calculation sheet (e.g. `xi`, `fi`, `xi × fi` for every class).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkTable {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<f64>>,
}

impl WorkTable {
    #[must_use]
    pub fn new(columns: Vec<&'static str>) -> Self {
        Self {
            columns,
            rows: vec![],
        }
    }

    /// Appends a row.
    ///
    /// # Panics
    ///
    /// Panics if the row length differs from the number of columns.
    pub fn push_row(&mut self, row: Vec<f64>) {
        assert_eq!(
            row.len(),
            self.columns.len(),
            "row length must match column count"
        );
        self.rows.push(row);
    }

    /// Returns the values of the named column, top to bottom.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        let idx = self.columns.iter().position(|c| *c == name)?;
        Some(self.rows.iter().map(|row| row[idx]).collect())
    }
}

impl DerivationTrail {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step at the end of the trail.
    pub fn push<V>(&mut self, name: &'static str, value: V)
    where
        V: Into<StepValue>,
    {
        debug_assert!(
            self.get(name).is_none(),
            "duplicate derivation step '{name}'"
        );
        self.steps.push(Step {
            name,
            value: value.into(),
        });
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&StepValue> {
        self.steps
            .iter()
            .find(|step| step.name == name)
            .map(|step| &step.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<'a> IntoIterator for &'a DerivationTrail {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl Serialize for DerivationTrail {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.steps.iter().map(|step| (step.name, &step.value)))
    }
}
