//! Build-event sink boundary.
//!
//! Construction code never depends on a concrete sink. Events flow through
//! `record`, which forwards to the scoped override installed by
//! `with_build_sink`, or drops them when none is installed.

use crate::{fold::FoldMode, node::Direction, op::CompareOp, range::RangeEnd};
use std::cell::{Cell, RefCell};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<*const dyn BuildSink>> = RefCell::new(None);
}

///
/// BuildEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildEvent {
    Compare {
        op: CompareOp,
    },
    Range {
        op: CompareOp,
        end: RangeEnd,
    },
    SubQuery {
        op: CompareOp,
        rows: usize,
    },
    Fold {
        op: CompareOp,
        mode: FoldMode,
        operands: usize,
    },
    Ordering {
        direction: Direction,
    },
}

///
/// BuildSink
///

pub trait BuildSink {
    fn record(&self, event: BuildEvent);
}

///
/// BuildCounters
///
/// Counting sink for tests and diagnostics.
///

#[derive(Debug, Default)]
pub struct BuildCounters {
    compares: Cell<u64>,
    ranges: Cell<u64>,
    subqueries: Cell<u64>,
    subquery_rows: Cell<u64>,
    folds: Cell<u64>,
    fold_operands: Cell<u64>,
    orderings: Cell<u64>,
}

impl BuildCounters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn snapshot(&self) -> BuildReport {
        BuildReport {
            compares: self.compares.get(),
            ranges: self.ranges.get(),
            subqueries: self.subqueries.get(),
            subquery_rows: self.subquery_rows.get(),
            folds: self.folds.get(),
            fold_operands: self.fold_operands.get(),
            orderings: self.orderings.get(),
        }
    }
}

fn bump(cell: &Cell<u64>, by: u64) {
    cell.set(cell.get().saturating_add(by));
}

fn widen(n: usize) -> u64 {
    u64::try_from(n).unwrap_or(u64::MAX)
}

impl BuildSink for BuildCounters {
    fn record(&self, event: BuildEvent) {
        match event {
            BuildEvent::Compare { .. } => bump(&self.compares, 1),
            BuildEvent::Range { .. } => bump(&self.ranges, 1),
            BuildEvent::SubQuery { rows, .. } => {
                bump(&self.subqueries, 1);
                bump(&self.subquery_rows, widen(rows));
            }
            BuildEvent::Fold { operands, .. } => {
                bump(&self.folds, 1);
                bump(&self.fold_operands, widen(operands));
            }
            BuildEvent::Ordering { .. } => bump(&self.orderings, 1),
        }
    }
}

///
/// BuildReport
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct BuildReport {
    pub compares: u64,
    pub ranges: u64,
    pub subqueries: u64,
    pub subquery_rows: u64,
    pub folds: u64,
    pub fold_operands: u64,
    pub orderings: u64,
}

pub(crate) fn record(event: BuildEvent) {
    let override_ptr = SINK_OVERRIDE.with(|cell| *cell.borrow());
    if let Some(ptr) = override_ptr {
        // SAFETY:
        // - `ptr` was produced from a valid `&dyn BuildSink` in `with_build_sink`.
        // - `with_build_sink` restores the previous pointer before returning,
        //   including unwind paths via `Guard::drop`.
        // - `record` is synchronous and never stores `ptr` beyond this call.
        // Only a shared reference is materialized, matching the borrow used to
        // install the override.
        unsafe { (&*ptr).record(event) };
    }
}

/// Run a closure with a temporary build sink installed on this thread.
pub fn with_build_sink<T>(sink: &dyn BuildSink, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<*const dyn BuildSink>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = self.0;
            });
        }
    }

    // SAFETY:
    // - `sink_ptr` is installed only for this dynamic scope.
    // - `Guard` restores the previous slot on all exits, including panic.
    // - `record` only dereferences synchronously and never persists `sink_ptr`.
    // The lifetime is erased to a raw pointer but only shared access is exposed.
    let sink_ptr = unsafe { std::mem::transmute::<&dyn BuildSink, *const dyn BuildSink>(sink) };
    let prev = SINK_OVERRIDE.with(|cell| {
        let mut slot = cell.borrow_mut();
        slot.replace(sink_ptr)
    });
    let _guard = Guard(prev);

    f()
}
