//! Append-only list of submitted records.

use chrono::Utc;
use sf_protocol::{Record, Submission};
use uuid::Uuid;

/// Submitted records in insertion order.
///
/// There is no update or delete operation; the list lives as long as the
/// process.
#[derive(Debug, Clone, Default)]
pub struct SubmissionSink {
    submissions: Vec<Submission>,
}

impl SubmissionSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Freeze `record` into the list and return the stored submission.
    pub fn append(&mut self, record: Record) -> &Submission {
        let index = self.submissions.len();
        self.submissions.push(Submission {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            record,
        });
        &self.submissions[index]
    }

    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    pub fn len(&self) -> usize {
        self.submissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty()
    }
}
