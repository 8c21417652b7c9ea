//! Composable filter chains.

use super::check::{CheckKind, Filter, FilterContext};
use super::verdict::{Rejection, Verdict};
use crate::error::FilterError;

/// Runs filters in order until one rejects.
///
/// This is a short-circuited logical AND: the first rejection is returned and
/// later filters are not evaluated. Errors propagate immediately. An empty
/// chain accepts everything.
pub struct FilterChain {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterChain {
    pub fn new(filters: Vec<Box<dyn Filter>>) -> Self {
        Self { filters }
    }

    /// The six built-in checks in their standard order.
    pub fn standard() -> Self {
        Self::new(
            CheckKind::ALL
                .iter()
                .map(|check| Box::new(*check) as Box<dyn Filter>)
                .collect(),
        )
    }

    /// Append `filter`; it runs after every filter already in the chain.
    #[must_use]
    pub fn then<F: Filter + 'static>(mut self, filter: F) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Default for FilterChain {
    fn default() -> Self {
        Self::standard()
    }
}

impl Filter for FilterChain {
    fn check(&self, ctx: &FilterContext<'_>) -> Result<Verdict, FilterError> {
        for filter in &self.filters {
            match filter.check(ctx)? {
                Verdict::Usable => continue,
                rejected => return Ok(rejected),
            }
        }
        Ok(Verdict::Usable)
    }
}

/// Caller-supplied filter from a plain predicate.
///
/// Rejects with [`Rejection::Custom`] carrying `reason` when the predicate
/// returns false.
pub struct FnFilter<F> {
    reason: &'static str,
    predicate: F,
}

impl<F> FnFilter<F>
where
    F: Fn(&FilterContext<'_>) -> Result<bool, FilterError> + Send + Sync,
{
    pub fn new(reason: &'static str, predicate: F) -> Self {
        Self { reason, predicate }
    }
}

impl<F> Filter for FnFilter<F>
where
    F: Fn(&FilterContext<'_>) -> Result<bool, FilterError> + Send + Sync,
{
    fn check(&self, ctx: &FilterContext<'_>) -> Result<Verdict, FilterError> {
        let passed = (self.predicate)(ctx)?;
        Ok(Verdict::require(passed, Rejection::Custom(self.reason)))
    }
}
