//! Order-preserving grouping of points into named series.

use indexmap::IndexMap;

use crate::models::{Point, Series};

/// Append-only collector of points keyed by series name.
///
/// Series come out in the order their name was first seen; points within a
/// series keep the order they were added in.
#[derive(Debug, Default)]
pub struct Aggregator {
    series: IndexMap<String, Vec<Point>>,
}

impl Aggregator {
    /// Empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `point` to the series `name`, creating it on first use.
    pub fn add(&mut self, name: &str, point: Point) {
        match self.series.get_mut(name) {
            Some(values) => values.push(point),
            None => {
                self.series.insert(name.to_string(), vec![point]);
            }
        }
    }

    /// Emit the series in first-seen order.
    pub fn finish(self) -> Vec<Series> {
        self.series
            .into_iter()
            .map(|(name, values)| Series { name, values })
            .collect()
    }
}
