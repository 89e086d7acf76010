// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Outcomes and the records that carry them.

use serde::{Deserialize, Serialize};

/// The result of checking a single requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Fail,
    /// Verification deferred, with a free-text reason.
    Pending(String),
}

impl Outcome {
    /// Only `Fail` counts as a failure; pending requirements do not.
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Fail)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Outcome::Pending(_))
    }
}

/// Mark a requirement as deferred.
pub fn pending(reason: impl Into<String>) -> Outcome {
    Outcome::Pending(reason.into())
}

/// A value that can be turned into an [`Outcome`].
///
/// Implemented for `bool` (`true` is success) and for `Outcome` itself, so a
/// check can return an explicit outcome such as [`pending`].
pub trait Checkable {
    fn into_outcome(self) -> Outcome;
}

impl Checkable for bool {
    fn into_outcome(self) -> Outcome {
        if self { Outcome::Success } else { Outcome::Fail }
    }
}

impl Checkable for Outcome {
    fn into_outcome(self) -> Outcome {
        self
    }
}

/// One verified requirement under a group label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    group: String,
    requirement: String,
    outcome: Outcome,
}

impl Record {
    pub fn new(group: impl Into<String>, requirement: impl Into<String>, outcome: Outcome) -> Self {
        Self { group: group.into(), requirement: requirement.into(), outcome }
    }

    /// The subject the requirement belongs to.
    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn requirement(&self) -> &str {
        &self.requirement
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
