// File: crates/benchviz-core/src/dataset.rs
// Summary: Long-format dataset built from several series sharing one x key.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::series::Series;

/// Source of the shared x key.
#[derive(Clone, Debug, PartialEq)]
pub enum Keys {
    /// Fixed ordered key list; each series' values align with it positionally.
    Declared(Vec<f64>),
    /// Use each sample's own x (the 1-based index unless an x column was loaded).
    /// Series may differ in length: the key set is the union of all x values and
    /// a label has no record at keys its series never reached.
    Index,
}

/// One `(key, label, value)` row.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub key: f64,
    pub label: String,
    pub value: f64,
}

#[derive(Clone, Debug)]
pub struct Dataset {
    pub key_name: String,
    pub value_name: String,
    records: Vec<Record>,
    labels: Vec<String>,
    declared_keys: Option<Vec<f64>>,
}

impl Dataset {
    /// Reshape `series` into long format. Rows come out grouped by series in
    /// insertion order, keys in series order within each group.
    pub fn aggregate(
        series: impl IntoIterator<Item = Series>,
        keys: Keys,
        key_name: impl Into<String>,
        value_name: impl Into<String>,
    ) -> Result<Self> {
        let mut records = Vec::new();
        let mut labels: Vec<String> = Vec::new();
        let mut seen = HashSet::new();

        for s in series {
            if !seen.insert(s.label.clone()) {
                return Err(Error::DuplicateLabel { label: s.label });
            }
            match &keys {
                Keys::Declared(declared) => {
                    if s.samples.len() != declared.len() {
                        return Err(Error::LengthMismatch {
                            label: s.label,
                            expected: declared.len(),
                            actual: s.samples.len(),
                        });
                    }
                    records.extend(declared.iter().zip(&s.samples).map(|(&key, sample)| Record {
                        key,
                        label: s.label.clone(),
                        value: sample.y,
                    }));
                }
                Keys::Index => {
                    records.extend(s.samples.iter().map(|sample| Record {
                        key: sample.x,
                        label: s.label.clone(),
                        value: sample.y,
                    }));
                }
            }
            labels.push(s.label);
        }

        let declared_keys = match keys {
            Keys::Declared(k) => Some(k),
            Keys::Index => None,
        };
        Ok(Self { key_name: key_name.into(), value_name: value_name.into(), records, labels, declared_keys })
    }

    pub fn records(&self) -> &[Record] { &self.records }

    pub fn len(&self) -> usize { self.records.len() }

    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Distinct labels in insertion order.
    pub fn labels(&self) -> &[String] { &self.labels }

    /// The declared key list, if the dataset was built against one.
    pub fn declared_keys(&self) -> Option<&[f64]> { self.declared_keys.as_deref() }

    /// Distinct keys in first-seen order.
    pub fn keys(&self) -> Vec<f64> {
        if let Some(k) = &self.declared_keys {
            return k.clone();
        }
        let mut out: Vec<f64> = Vec::new();
        for r in &self.records {
            if !out.iter().any(|k| k.to_bits() == r.key.to_bits()) {
                out.push(r.key);
            }
        }
        out
    }

    /// Split back into one `(label, points)` line per label, in label order.
    pub fn lines(&self) -> Vec<(String, Vec<(f64, f64)>)> {
        self.labels
            .iter()
            .map(|label| {
                let pts = self
                    .records
                    .iter()
                    .filter(|r| &r.label == label)
                    .map(|r| (r.key, r.value))
                    .collect();
                (label.clone(), pts)
            })
            .collect()
    }
}
