// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Requirements and the groups that resolve them into records.
//!
//! A [`Verification`] pairs a requirement with a deferred check. Nothing runs
//! until the group is resolved by [`describe`] or [`try_describe`], which run
//! the checks one at a time, in order.

use std::convert::Infallible;

use crate::outcome::{Checkable, Outcome, Record};

type Check<'a, E> = Box<dyn FnOnce() -> Result<Outcome, E> + 'a>;

/// A requirement and the check that verifies it.
pub struct Verification<'a, E = Infallible> {
    requirement: String,
    check: Check<'a, E>,
}

impl<'a, E> Verification<'a, E> {
    pub fn requirement(&self) -> &str {
        &self.requirement
    }

    /// Run the check. Errors from the check are returned as-is.
    pub fn resolve(self) -> Result<(String, Outcome), E> {
        let outcome = (self.check)()?;
        Ok((self.requirement, outcome))
    }
}

impl<E> std::fmt::Debug for Verification<'_, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Verification")
            .field("requirement", &self.requirement)
            .finish_non_exhaustive()
    }
}

/// Declare a requirement verified by `check`.
///
/// ```
/// use specdoc::{describe, it, pending};
///
/// let records = describe("abs", [
///     it("turns negatives positive", || (-1i32).abs() == 1),
///     it("handles i32::MIN", || pending("decide on overflow")),
/// ]);
/// assert_eq!(records.len(), 2);
/// ```
pub fn it<'a, C, E>(
    requirement: impl Into<String>,
    check: impl FnOnce() -> C + 'a,
) -> Verification<'a, E>
where
    C: Checkable,
{
    Verification {
        requirement: requirement.into(),
        check: Box::new(move || Ok(check().into_outcome())),
    }
}

/// Declare a requirement whose check may fail to run.
///
/// An `Err` is never turned into [`Outcome::Fail`]; it aborts the group and
/// reaches the caller of [`try_describe`] unchanged.
pub fn try_it<'a, C, E>(
    requirement: impl Into<String>,
    check: impl FnOnce() -> Result<C, E> + 'a,
) -> Verification<'a, E>
where
    C: Checkable,
{
    Verification {
        requirement: requirement.into(),
        check: Box::new(move || check().map(Checkable::into_outcome)),
    }
}

/// Resolve every requirement in order and label the results with `group`.
pub fn describe<'a>(
    group: impl Into<String>,
    verifications: impl IntoIterator<Item = Verification<'a, Infallible>>,
) -> Vec<Record> {
    match try_describe(group, verifications) {
        Ok(records) => records,
        Err(never) => match never {},
    }
}

/// Like [`describe`], but stops at the first check that returns an error.
///
/// Checks after the failing one are not run.
pub fn try_describe<'a, E>(
    group: impl Into<String>,
    verifications: impl IntoIterator<Item = Verification<'a, E>>,
) -> Result<Vec<Record>, E> {
    let group = group.into();
    let mut records = Vec::new();
    for verification in verifications {
        let (requirement, outcome) = verification.resolve()?;
        records.push(Record::new(group.clone(), requirement, outcome));
    }
    tracing::debug!("resolved {} requirement(s) for {:?}", records.len(), group);
    Ok(records)
}

#[cfg(test)]
#[path = "verify_tests.rs"]
mod tests;
