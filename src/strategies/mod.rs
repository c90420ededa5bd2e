//! Sorting strategies
//!
//! Every algorithm implements [`SortStrategy`]. The body of an algorithm
//! ([`SortStrategy::sort_with`]) receives an [`Operations`] counter that is
//! created fresh for each call, so counts never leak from one call to the
//! next even though the strategy values themselves are reused.
//!
//! The benchmark catalogue is the closed [`Algorithm`] enum.

pub mod bubble;
pub mod counting;
pub mod heap;
pub mod improved_bubble;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod radix;
pub mod selection;
pub mod shell;
pub mod tim;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::constants::{algorithms, attributes, events, EVENT_SAMPLE_EVERY, EVENT_SAMPLE_HEAD};
use crate::error::{AppError, AppResult};
use crate::models::OperationCounts;
use crate::telemetry::{KeyValue, Span, Value};

pub use bubble::BubbleSort;
pub use counting::CountingSort;
pub use heap::HeapSort;
pub use improved_bubble::ImprovedBubbleSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use radix::RadixSort;
pub use selection::SelectionSort;
pub use shell::ShellSort;
pub use tim::TimSort;

/// Sorted output of one call plus the operations it took
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOutput {
    pub sorted: Vec<i64>,
    pub counts: OperationCounts,
}

impl SortOutput {
    /// Counters accumulated during this call only
    pub fn stats(&self) -> OperationCounts {
        self.counts
    }
}

/// Common contract of all sorting algorithms
pub trait SortStrategy {
    /// Stable, human-readable identifier
    fn name(&self) -> &'static str;

    /// Algorithm body: return a sorted copy of `input`, counting operations in `ops`.
    ///
    /// `input` must never be modified. The default body is what an algorithm
    /// without an implementation gets.
    fn sort_with(&self, input: &[i64], ops: &mut Operations<'_>) -> AppResult<Vec<i64>> {
        let _ = (input, ops);
        Err(AppError::AlgorithmNotImplemented(self.name().to_string()))
    }

    /// Sort with fresh counters, reporting progress events to `span` if given
    fn sort_traced(&self, input: &[i64], span: Option<&mut dyn Span>) -> AppResult<SortOutput> {
        let mut ops = Operations::new(span);

        if ops.is_traced() {
            ops.event(
                events::SORT_STARTED,
                &[
                    KeyValue::new(attributes::ARRAY_LENGTH, input.len()),
                    KeyValue::new(attributes::ALGORITHM_NAME, self.name()),
                ],
            );
        }

        let sorted = self.sort_with(input, &mut ops)?;
        let counts = ops.counts();

        if ops.is_traced() {
            ops.event(
                events::SORT_COMPLETED,
                &[
                    KeyValue::new(attributes::COMPARISONS, counts.comparisons),
                    KeyValue::new(attributes::SWAPS, counts.swaps),
                ],
            );
        }

        Ok(SortOutput { sorted, counts })
    }

    /// Sort with fresh counters and no instrumentation
    fn sort(&self, input: &[i64]) -> AppResult<SortOutput> {
        self.sort_traced(input, None)
    }
}

/// Call-scoped comparison and swap counters
///
/// When a span is attached, comparison and swap events are sampled onto it:
/// the first few of each kind and then every thousandth.
pub struct Operations<'a> {
    comparisons: u64,
    swaps: u64,
    span: Option<&'a mut dyn Span>,
}

impl<'a> Operations<'a> {
    pub fn new(span: Option<&'a mut dyn Span>) -> Self {
        Self {
            comparisons: 0,
            swaps: 0,
            span,
        }
    }

    pub fn untraced() -> Self {
        Self::new(None)
    }

    pub fn is_traced(&self) -> bool {
        self.span.is_some()
    }

    /// Compare two values, counting one comparison
    pub fn compare<T>(&mut self, a: T, b: T) -> Ordering
    where
        T: Ord + Copy + Into<Value>,
    {
        self.comparisons += 1;
        let ordering = a.cmp(&b);

        if self.span.is_some() && sampled(self.comparisons) {
            let count = self.comparisons;
            self.event(
                events::COMPARISON,
                &[
                    KeyValue::new("count", count),
                    KeyValue::new("value_a", a),
                    KeyValue::new("value_b", b),
                    KeyValue::new("result", ordering.is_gt()),
                ],
            );
        }

        ordering
    }

    /// Exchange two elements, counting one swap
    pub fn swap(&mut self, v: &mut [i64], i: usize, j: usize) {
        self.swaps += 1;

        if self.span.is_some() && sampled(self.swaps) {
            let count = self.swaps;
            self.event(
                events::SWAP,
                &[
                    KeyValue::new("count", count),
                    KeyValue::new("index_a", i),
                    KeyValue::new("index_b", j),
                    KeyValue::new("value_a", v[i]),
                    KeyValue::new("value_b", v[j]),
                ],
            );
        }

        v.swap(i, j);
    }

    /// Credit one swap for an element written without an exchange
    /// (a shift, or a placement into an output buffer)
    pub fn record_move(&mut self) {
        self.swaps += 1;

        if self.span.is_some() && sampled(self.swaps) {
            let count = self.swaps;
            self.event(events::SWAP, &[KeyValue::new("count", count)]);
        }
    }

    /// Add an event to the attached span, if any
    pub fn event(&mut self, name: &str, attributes: &[KeyValue]) {
        if let Some(span) = self.span.as_deref_mut() {
            span.add_event(name, attributes);
        }
    }

    pub fn counts(&self) -> OperationCounts {
        OperationCounts {
            comparisons: self.comparisons,
            swaps: self.swaps,
        }
    }
}

fn sampled(count: u64) -> bool {
    count <= EVENT_SAMPLE_HEAD || count % EVENT_SAMPLE_EVERY == 0
}

/// The fixed catalogue of benchmarked algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    ImprovedBubble,
    Insertion,
    Selection,
    Quick,
    Merge,
    Heap,
    Tim,
    Shell,
    Counting,
    Radix,
}

impl Algorithm {
    /// All algorithms, in benchmark order
    pub const ALL: [Algorithm; 11] = [
        Algorithm::Bubble,
        Algorithm::ImprovedBubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::Heap,
        Algorithm::Tim,
        Algorithm::Shell,
        Algorithm::Counting,
        Algorithm::Radix,
    ];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => algorithms::BUBBLE,
            Algorithm::ImprovedBubble => algorithms::IMPROVED_BUBBLE,
            Algorithm::Insertion => algorithms::INSERTION,
            Algorithm::Selection => algorithms::SELECTION,
            Algorithm::Quick => algorithms::QUICK,
            Algorithm::Merge => algorithms::MERGE,
            Algorithm::Heap => algorithms::HEAP,
            Algorithm::Tim => algorithms::TIM,
            Algorithm::Shell => algorithms::SHELL,
            Algorithm::Counting => algorithms::COUNTING,
            Algorithm::Radix => algorithms::RADIX,
        }
    }

    /// Kebab-case identifier, e.g. `improved-bubble-sort`
    pub fn slug(&self) -> String {
        self.name().to_ascii_lowercase().replace(' ', "-")
    }

    /// Resolve a list of names (display names or slugs) into algorithms.
    /// An empty list selects the whole catalogue.
    pub fn select(names: &[String]) -> AppResult<Vec<Algorithm>> {
        if names.is_empty() {
            return Ok(Self::ALL.to_vec());
        }

        names.iter().map(|name| name.parse()).collect()
    }

    fn strategy(&self) -> &'static dyn SortStrategy {
        match self {
            Algorithm::Bubble => &BubbleSort,
            Algorithm::ImprovedBubble => &ImprovedBubbleSort,
            Algorithm::Insertion => &InsertionSort,
            Algorithm::Selection => &SelectionSort,
            Algorithm::Quick => &QuickSort,
            Algorithm::Merge => &MergeSort,
            Algorithm::Heap => &HeapSort,
            Algorithm::Tim => &TimSort,
            Algorithm::Shell => &ShellSort,
            Algorithm::Counting => &CountingSort,
            Algorithm::Radix => &RadixSort,
        }
    }
}

impl SortStrategy for Algorithm {
    fn name(&self) -> &'static str {
        Algorithm::name(self)
    }

    fn sort_with(&self, input: &[i64], ops: &mut Operations<'_>) -> AppResult<Vec<i64>> {
        self.strategy().sort_with(input, ops)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|algorithm| {
                algorithm.name().eq_ignore_ascii_case(wanted)
                    || algorithm.slug().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| AppError::InvalidInput(format!("Unknown algorithm: {}", wanted)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::InMemoryTracer;
    use crate::telemetry::Tracer;

    struct Unimplemented;

    impl SortStrategy for Unimplemented {
        fn name(&self) -> &'static str {
            "Unimplemented Sort"
        }
    }

    #[test]
    fn test_catalogue_names_are_unique() {
        let mut names: Vec<&str> = Algorithm::ALL.iter().map(|a| a.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 11);
        assert_eq!(names.len(), algorithms::ALL.len());
    }

    #[test]
    fn test_parse_algorithm() {
        assert_eq!("Quick Sort".parse::<Algorithm>().unwrap(), Algorithm::Quick);
        assert_eq!("improved-bubble-sort".parse::<Algorithm>().unwrap(), Algorithm::ImprovedBubble);
        assert_eq!(" radix sort ".parse::<Algorithm>().unwrap(), Algorithm::Radix);
        assert!(matches!("Bogo Sort".parse::<Algorithm>(), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_select() {
        assert_eq!(Algorithm::select(&[]).unwrap().len(), 11);

        let picked = Algorithm::select(&["heap-sort".to_string(), "Tim Sort".to_string()]).unwrap();
        assert_eq!(picked, vec![Algorithm::Heap, Algorithm::Tim]);

        assert!(Algorithm::select(&["nope".to_string()]).is_err());
    }

    #[test]
    fn test_default_body_is_not_implemented() {
        let err = Unimplemented.sort(&[3, 1, 2]).unwrap_err();
        assert!(matches!(err, AppError::AlgorithmNotImplemented(ref name) if name == "Unimplemented Sort"));
    }

    #[test]
    fn test_traced_sort_samples_events() {
        let tracer = InMemoryTracer::new();
        let mut span = tracer.start_span("sort", &[]);

        let data: Vec<i64> = (0..200).rev().collect();
        let output = BubbleSort.sort_traced(&data, Some(span.as_mut())).unwrap();
        span.end();

        let record = tracer.find("sort").unwrap();
        let names = record.event_names();
        assert_eq!(names.first(), Some(&events::SORT_STARTED));
        assert_eq!(names.last(), Some(&events::SORT_COMPLETED));

        // 200 * 199 / 2 = 19900 comparisons -> 10 head samples + 19 multiples of 1000
        let comparisons = names.iter().filter(|n| **n == events::COMPARISON).count();
        assert_eq!(output.counts.comparisons, 19_900);
        assert_eq!(comparisons, 29);
    }

    #[test]
    fn test_untraced_sort_matches_traced_counts() {
        let data = vec![5, -2, 9, 0, 0, 3, -7];
        let tracer = InMemoryTracer::new();

        for algorithm in Algorithm::ALL {
            let mut span = tracer.start_span(algorithm.name(), &[]);
            let traced = algorithm.sort_traced(&data, Some(span.as_mut())).unwrap();
            span.end();

            let plain = algorithm.sort(&data).unwrap();
            assert_eq!(traced, plain, "{}", algorithm);
        }
    }
}
