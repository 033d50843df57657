//! Per-generation statistics.
//!
//! The engine reports each generation's parent objective vectors to a
//! [`StatisticsCollector`]. [`Logbook`] is the built-in collector: it keeps
//! one [`GenerationStats`] record per generation and renders them as a
//! tab-separated table.

use super::types::ObjectiveVector;
use std::fmt;

/// Receives the objective vectors of each generation's parents.
pub trait StatisticsCollector {
    /// Records generation `generation`.
    ///
    /// `evaluations` is the number of fitness evaluations performed during
    /// that generation.
    fn record(&mut self, generation: usize, evaluations: usize, objectives: &[&ObjectiveVector]);
}

/// Summary of one generation, per objective axis.
///
/// `std` is the population standard deviation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    pub generation: usize,
    pub evaluations: usize,
    pub avg: Vec<f64>,
    pub std: Vec<f64>,
    pub min: Vec<f64>,
    pub max: Vec<f64>,
}

impl GenerationStats {
    /// Aggregates `objectives` axis by axis.
    ///
    /// An empty slice produces empty per-axis vectors.
    pub fn from_objectives(
        generation: usize,
        evaluations: usize,
        objectives: &[&ObjectiveVector],
    ) -> Self {
        let axes = objectives.first().map_or(0, |o| o.len());
        let n = objectives.len() as f64;

        let mut avg = Vec::with_capacity(axes);
        let mut std = Vec::with_capacity(axes);
        let mut min = Vec::with_capacity(axes);
        let mut max = Vec::with_capacity(axes);

        for axis in 0..axes {
            let column = || objectives.iter().filter_map(|o| o.get(axis));

            let mean = column().sum::<f64>() / n;
            let variance = column().map(|x| (x - mean).powi(2)).sum::<f64>() / n;

            avg.push(mean);
            std.push(variance.sqrt());
            min.push(column().fold(f64::INFINITY, f64::min));
            max.push(column().fold(f64::NEG_INFINITY, f64::max));
        }

        Self {
            generation,
            evaluations,
            avg,
            std,
            min,
            max,
        }
    }
}

/// Full statistics history of a run.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Logbook {
    records: Vec<GenerationStats>,
}

impl Logbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded generations in order.
    pub fn records(&self) -> &[GenerationStats] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The most recent record.
    pub fn last(&self) -> Option<&GenerationStats> {
        self.records.last()
    }

    /// Total evaluations across all recorded generations.
    pub fn total_evaluations(&self) -> usize {
        self.records.iter().map(|r| r.evaluations).sum()
    }
}

impl StatisticsCollector for Logbook {
    fn record(&mut self, generation: usize, evaluations: usize, objectives: &[&ObjectiveVector]) {
        self.records
            .push(GenerationStats::from_objectives(generation, evaluations, objectives));
    }
}

impl fmt::Display for Logbook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "gen\tnevals\tavg\tstd\tmin\tmax")?;
        for r in &self.records {
            writeln!(
                f,
                "{}\t{}\t{}\t{}\t{}\t{}",
                r.generation,
                r.evaluations,
                Row(&r.avg),
                Row(&r.std),
                Row(&r.min),
                Row(&r.max)
            )?;
        }
        Ok(())
    }
}

struct Row<'a>(&'a [f64]);

impl fmt::Display for Row<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{v:.4}")?;
        }
        write!(f, "]")
    }
}
