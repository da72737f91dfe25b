//! Resize methods and method pipelines.
//!
//! A [`ResizeMethod`] tries to realise a requested size change on one side
//! of a handle and reports how much it managed. Methods never overshoot:
//! `|achieved| <= |requested|`. A pipeline ([`run_methods`]) hands whatever
//! one method could not realise to the next.

use panestack_core::trace;
use serde::{Deserialize, Serialize};

use crate::harness::ResizingHarness;
use crate::slice::OrderedSlice;

/// How one side of a handle absorbs a size change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeMethod {
    /// Only the element nearest the handle changes; leftover demand is dropped.
    SqueezeExpand,
    /// Elements change nearest-first, each down to its minimum, until the
    /// demand is met or the side is exhausted.
    Cascade,
    /// No element changes; the stack's own footprint changes instead,
    /// bounded in both directions by the [`SlackBudget`].
    ChangeStackSize,
}

/// Slack outside the stack, shared by every [`ResizeMethod::ChangeStackSize`]
/// step of one resize.
///
/// The budget tracks the net change of the stack's footprint. However many
/// steps draw on it, the footprint never grows or shrinks by more than the
/// limit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SlackBudget {
    limit: f64,
    footprint_change: f64,
}

impl SlackBudget {
    /// A fresh budget. Negative or NaN slack counts as none.
    #[must_use]
    pub fn new(space_to_expand_into: f64) -> Self {
        Self {
            limit: space_to_expand_into.max(0.0),
            footprint_change: 0.0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn limit(&self) -> f64 {
        self.limit
    }

    /// Net growth of the footprint so far; negative once the stack shrank.
    #[inline]
    #[must_use]
    pub const fn footprint_change(&self) -> f64 {
        self.footprint_change
    }

    /// Realise as much of `requested` as the footprint can absorb. A side
    /// shrinking (`requested < 0`) grows the footprint and vice versa.
    fn absorb(&mut self, requested: f64) -> f64 {
        let achieved = requested
            .max(self.footprint_change - self.limit)
            .min(self.footprint_change + self.limit);
        self.footprint_change -= achieved;
        achieved
    }
}

impl ResizeMethod {
    /// Try to change the size of `elements` by `requested`.
    ///
    /// Returns the change actually realised.
    pub fn apply<T, H>(
        self,
        elements: &mut OrderedSlice<'_, T>,
        harness: &H,
        requested: f64,
        slack: &mut SlackBudget,
    ) -> f64
    where
        H: ResizingHarness<T> + ?Sized,
    {
        match self {
            Self::SqueezeExpand => elements
                .first_mut()
                .map_or(0.0, |nearest| harness.try_resize(nearest, requested)),
            Self::Cascade => {
                let mut achieved = 0.0;
                let mut remaining = requested;
                for element in elements.iter_mut() {
                    if remaining == 0.0 {
                        break;
                    }
                    let step = harness.try_resize(element, remaining);
                    achieved += step;
                    remaining -= step;
                }
                achieved
            }
            Self::ChangeStackSize => slack.absorb(requested),
        }
    }
}

/// Run `methods` in order, feeding each the part of `requested` the earlier
/// ones left unrealised. Returns the total realised.
pub fn run_methods<T, H>(
    methods: &[ResizeMethod],
    elements: &mut OrderedSlice<'_, T>,
    harness: &H,
    requested: f64,
    slack: &mut SlackBudget,
) -> f64
where
    H: ResizingHarness<T> + ?Sized,
{
    let mut achieved = 0.0;
    for &method in methods {
        let remaining = requested - achieved;
        if remaining == 0.0 {
            break;
        }
        let step = method.apply(elements, harness, remaining, slack);
        trace!(
            ?method,
            remaining,
            step,
            footprint_change = slack.footprint_change(),
            "resize method applied"
        );
        achieved += step;
    }
    achieved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::{Panel, PanelHarness};

    fn panels(dims: &[(f64, f64)]) -> Vec<Panel> {
        dims.iter()
            .map(|&(size, min)| Panel::new(size, min).expect("valid panel"))
            .collect()
    }

    fn sizes(panels: &[Panel]) -> Vec<f64> {
        panels.iter().map(Panel::size).collect()
    }

    #[test]
    fn cascade_stops_at_blocked_element() {
        // A(min 0, size 10) nearest, then B(min 5, size 5).
        let mut stack = panels(&[(10.0, 0.0), (5.0, 5.0)]);
        let mut view = OrderedSlice::forwards(&mut stack, 0);
        let mut slack = SlackBudget::default();
        let achieved = ResizeMethod::Cascade.apply(&mut view, &PanelHarness, -12.0, &mut slack);
        assert_eq!(achieved, -10.0);
        assert_eq!(sizes(&stack), vec![0.0, 5.0]);
    }

    #[test]
    fn cascade_hands_leftover_to_next_element() {
        let mut stack = panels(&[(10.0, 6.0), (10.0, 0.0), (10.0, 0.0)]);
        let mut view = OrderedSlice::forwards(&mut stack, 0);
        let mut slack = SlackBudget::default();
        let achieved = ResizeMethod::Cascade.apply(&mut view, &PanelHarness, -7.0, &mut slack);
        assert_eq!(achieved, -7.0);
        assert_eq!(sizes(&stack), vec![6.0, 7.0, 10.0]);
    }

    #[test]
    fn cascade_backwards_starts_nearest_the_handle() {
        let mut stack = panels(&[(10.0, 0.0), (10.0, 8.0)]);
        let mut view = OrderedSlice::backwards(&mut stack, 1);
        let mut slack = SlackBudget::default();
        let achieved = ResizeMethod::Cascade.apply(&mut view, &PanelHarness, -5.0, &mut slack);
        assert_eq!(achieved, -5.0);
        assert_eq!(sizes(&stack), vec![7.0, 8.0]);
    }

    #[test]
    fn cascade_growth_lands_on_nearest() {
        let mut stack = panels(&[(10.0, 0.0), (10.0, 0.0)]);
        let mut view = OrderedSlice::forwards(&mut stack, 0);
        let mut slack = SlackBudget::default();
        let achieved = ResizeMethod::Cascade.apply(&mut view, &PanelHarness, 4.0, &mut slack);
        assert_eq!(achieved, 4.0);
        assert_eq!(sizes(&stack), vec![14.0, 10.0]);
    }

    #[test]
    fn squeeze_expand_touches_only_nearest() {
        let mut stack = panels(&[(10.0, 0.0), (5.0, 5.0)]);
        let mut view = OrderedSlice::forwards(&mut stack, 0);
        let achieved = ResizeMethod::SqueezeExpand.apply(
            &mut view,
            &PanelHarness,
            -12.0,
            &mut SlackBudget::default(),
        );
        assert_eq!(achieved, -10.0);
        assert_eq!(sizes(&stack), vec![0.0, 5.0]);
    }

    #[test]
    fn squeeze_expand_on_empty_side_is_zero() {
        let mut stack = panels(&[(10.0, 0.0)]);
        let mut view = OrderedSlice::forwards(&mut stack, 1);
        let achieved = ResizeMethod::SqueezeExpand.apply(
            &mut view,
            &PanelHarness,
            -3.0,
            &mut SlackBudget::default(),
        );
        assert_eq!(achieved, 0.0);
    }

    #[test]
    fn change_stack_size_is_bounded_both_ways() {
        let mut stack = panels(&[(10.0, 0.0)]);
        let mut view = OrderedSlice::forwards(&mut stack, 0);
        let method = ResizeMethod::ChangeStackSize;

        let mut slack = SlackBudget::new(4.0);
        assert_eq!(method.apply(&mut view, &PanelHarness, -9.0, &mut slack), -4.0);
        assert_eq!(slack.footprint_change(), 4.0);

        let mut slack = SlackBudget::new(3.0);
        assert_eq!(method.apply(&mut view, &PanelHarness, 5.0, &mut slack), 3.0);
        assert_eq!(slack.footprint_change(), -3.0);
        assert_eq!(sizes(&stack), vec![10.0]);
    }

    #[test]
    fn change_stack_size_draws_on_what_is_left() {
        let mut stack: Vec<Panel> = Vec::new();
        let mut view = OrderedSlice::forwards(&mut stack, 0);
        let method = ResizeMethod::ChangeStackSize;
        let mut slack = SlackBudget::new(4.0);

        assert_eq!(method.apply(&mut view, &PanelHarness, -3.0, &mut slack), -3.0);
        assert_eq!(method.apply(&mut view, &PanelHarness, -3.0, &mut slack), -1.0);
        assert_eq!(method.apply(&mut view, &PanelHarness, -1.0, &mut slack), 0.0);
        // Giving the growth back frees the budget up again, then shrinks.
        assert_eq!(method.apply(&mut view, &PanelHarness, 10.0, &mut slack), 8.0);
        assert_eq!(slack.footprint_change(), -4.0);
    }

    #[test]
    fn change_stack_size_treats_negative_slack_as_none() {
        let mut stack: Vec<Panel> = Vec::new();
        let mut view = OrderedSlice::forwards(&mut stack, 0);
        let mut slack = SlackBudget::new(-3.0);
        assert_eq!(slack.limit(), 0.0);
        assert_eq!(
            ResizeMethod::ChangeStackSize.apply(&mut view, &PanelHarness, -5.0, &mut slack),
            0.0
        );
        assert_eq!(
            ResizeMethod::ChangeStackSize.apply(&mut view, &PanelHarness, 5.0, &mut slack),
            0.0
        );
    }

    #[test]
    fn pipeline_feeds_remainder_forward() {
        let mut stack = panels(&[(10.0, 0.0), (10.0, 0.0)]);
        let mut view = OrderedSlice::forwards(&mut stack, 0);
        let mut slack = SlackBudget::new(3.0);
        let achieved = run_methods(
            &[ResizeMethod::ChangeStackSize, ResizeMethod::Cascade],
            &mut view,
            &PanelHarness,
            -15.0,
            &mut slack,
        );
        assert_eq!(achieved, -15.0);
        // Slack took 3, the cascade the remaining 12.
        assert_eq!(sizes(&stack), vec![0.0, 8.0]);
        assert_eq!(slack.footprint_change(), 3.0);
    }

    #[test]
    fn repeated_footprint_steps_share_one_budget() {
        let mut stack: Vec<Panel> = Vec::new();
        let mut view = OrderedSlice::forwards(&mut stack, 0);
        let mut slack = SlackBudget::new(3.0);
        let achieved = run_methods(
            &[ResizeMethod::ChangeStackSize, ResizeMethod::ChangeStackSize],
            &mut view,
            &PanelHarness,
            -10.0,
            &mut slack,
        );
        assert_eq!(achieved, -3.0);
        assert_eq!(slack.footprint_change(), 3.0);
    }

    #[test]
    fn pipeline_reports_partial_satisfaction() {
        let mut stack = panels(&[(10.0, 9.0)]);
        let mut view = OrderedSlice::forwards(&mut stack, 0);
        let achieved = run_methods(
            &[ResizeMethod::ChangeStackSize, ResizeMethod::SqueezeExpand],
            &mut view,
            &PanelHarness,
            -5.0,
            &mut SlackBudget::new(1.0),
        );
        assert_eq!(achieved, -2.0);
        assert_eq!(sizes(&stack), vec![9.0]);
    }

    #[test]
    fn empty_pipeline_achieves_nothing() {
        let mut stack = panels(&[(10.0, 0.0)]);
        let mut view = OrderedSlice::forwards(&mut stack, 0);
        let achieved = run_methods(&[], &mut view, &PanelHarness, 5.0, &mut SlackBudget::default());
        assert_eq!(achieved, 0.0);
    }
}
