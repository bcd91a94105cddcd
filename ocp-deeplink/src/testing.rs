//! Testing utilities for deeplink routing.
//!
//! # Features
//!
//! - [`ExecutionLog`]: a shared, in-order journal of link executions
//! - [`RecordingLink`]: a deeplink double that records every execution

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use crate::link::Deeplink;

/// A shared journal of link executions, in dispatch order.
///
/// Clones share one journal, so a test can hand the same log to several
/// links and read back the order in which a router ran them.
#[derive(Clone, Default)]
pub struct ExecutionLog {
    entries: Arc<Mutex<Vec<&'static str>>>,
}

impl ExecutionLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one entry.
    pub fn record(&self, label: &'static str) {
        self.entries.lock().unwrap().push(label);
    }

    /// The recorded labels in execution order.
    pub fn entries(&self) -> Vec<&'static str> {
        self.entries.lock().unwrap().clone()
    }

    /// Number of recorded executions.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Whether nothing has executed yet.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}

/// A deeplink that records how often, and in what order, it ran.
///
/// # Example
///
/// ```rust
/// use ocp_deeplink::Router;
/// use ocp_deeplink::testing::{ExecutionLog, RecordingLink};
///
/// let log = ExecutionLog::new();
/// let link = RecordingLink::new("home", &log);
///
/// Router::new().execute(&link);
///
/// assert_eq!(link.executions(), 1);
/// assert_eq!(log.entries(), vec!["home"]);
/// ```
#[derive(Clone)]
pub struct RecordingLink {
    label: &'static str,
    log: ExecutionLog,
    executions: Arc<AtomicUsize>,
}

impl RecordingLink {
    /// Creates a link that reports into the given log.
    pub fn new(label: &'static str, log: &ExecutionLog) -> Self {
        Self {
            label,
            log: log.clone(),
            executions: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// The label this link records under.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// How many times the link has executed.
    pub fn executions(&self) -> usize {
        self.executions.load(Ordering::SeqCst)
    }
}

impl Deeplink for RecordingLink {
    fn execute(&self) {
        self.executions.fetch_add(1, Ordering::SeqCst);
        self.log.record(self.label);
    }
}
