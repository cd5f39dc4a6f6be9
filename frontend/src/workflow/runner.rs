use log::debug;

use super::machine::{Machine, Outcome, RunId, Stage, Transition, WorkflowState};
use super::provider::{RequiredInput, ResultProvider};
use super::scheduler::{Scheduler, TimerId};

/// Drives a [`Machine`] with a scheduler and settles it through a provider.
///
/// At most one timer is outstanding per runner. Reset cancels it before
/// returning to `Idle`.
pub struct WorkflowRunner<P: ResultProvider, S> {
    machine: Machine<P::Output>,
    provider: P,
    scheduler: S,
    input: Option<P::Input>,
    pending: Option<TimerId>,
}

impl<P, S> WorkflowRunner<P, S>
where
    P: ResultProvider,
    P::Input: RequiredInput,
    S: Scheduler<RunId>,
{
    pub fn new(name: &'static str, stages: Vec<Stage>, provider: P, scheduler: S) -> Self {
        Self {
            machine: Machine::new(name, stages),
            provider,
            scheduler,
            input: None,
            pending: None,
        }
    }

    /// Returns `false` without scheduling anything when the input is missing
    /// or a run is already in flight.
    pub fn start(&mut self, input: P::Input) -> bool {
        if !input.is_present() {
            debug!("{}: start refused, input missing", self.machine.name());
            return false;
        }
        match self.machine.start() {
            Transition::Entered { delay_ms, .. } => {
                self.input = Some(input);
                self.arm(delay_ms);
                true
            }
            _ => false,
        }
    }

    pub fn on_tick(&mut self, run: RunId) -> Transition {
        if run == self.machine.current_run() {
            if let Some(id) = self.pending.take() {
                self.scheduler.cancel(id);
            }
        }
        let provider = &mut self.provider;
        let input = &self.input;
        let transition = self.machine.tick(run, || match input {
            Some(input) => provider.resolve(input),
            None => Outcome::Empty,
        });
        if let Transition::Entered { delay_ms, .. } = transition {
            self.arm(delay_ms);
        }
        transition
    }

    pub fn reset(&mut self) {
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel(id);
        }
        self.input = None;
        self.machine.reset();
    }

    /// Clears the result of `run` once it has settled. Anything else is left
    /// alone, including a newer run that is still in flight.
    pub fn dismiss(&mut self, run: RunId) -> bool {
        if run != self.machine.current_run() || !matches!(self.machine.state(), WorkflowState::Settled(_)) {
            debug!("{}: dismiss for run {:?} ignored", self.machine.name(), run);
            return false;
        }
        self.reset();
        true
    }

    fn arm(&mut self, delay_ms: u32) {
        let id = self.scheduler.schedule(delay_ms, self.machine.current_run());
        self.pending = Some(id);
    }
}

impl<P: ResultProvider, S> WorkflowRunner<P, S> {
    pub fn state(&self) -> &WorkflowState<P::Output> {
        self.machine.state()
    }

    pub fn is_busy(&self) -> bool {
        self.machine.is_busy()
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.machine.state(), WorkflowState::Idle)
    }

    pub fn stage(&self) -> Option<usize> {
        self.machine.stage()
    }

    pub fn stages(&self) -> &[Stage] {
        self.machine.stages()
    }

    pub fn input(&self) -> Option<&P::Input> {
        self.input.as_ref()
    }

    pub fn current_run(&self) -> RunId {
        self.machine.current_run()
    }

    pub fn result(&self) -> Option<&P::Output> {
        self.machine.result()
    }

    pub fn result_mut(&mut self) -> Option<&mut P::Output> {
        self.machine.result_mut()
    }

    pub fn has_pending_timer(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
impl<P> WorkflowRunner<P, super::scheduler::VirtualClock<RunId>>
where
    P: ResultProvider,
    P::Input: RequiredInput,
{
    /// Advances virtual time, delivering every tick that falls due.
    pub fn advance(&mut self, ms: u64) -> Vec<Transition> {
        let deadline = self.scheduler.now_ms() + ms;
        let mut seen = Vec::new();
        while let Some(run) = self.scheduler.pop_due(deadline) {
            seen.push(self.on_tick(run));
        }
        self.scheduler.set_now(deadline);
        seen
    }

    pub fn clock(&self) -> &super::scheduler::VirtualClock<RunId> {
        &self.scheduler
    }

    pub fn clock_mut(&mut self) -> &mut super::scheduler::VirtualClock<RunId> {
        &mut self.scheduler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::provider::Fixture;
    use crate::workflow::scheduler::VirtualClock;

    type TestRunner = WorkflowRunner<Fixture<String, &'static str>, VirtualClock<RunId>>;

    fn search_like() -> TestRunner {
        WorkflowRunner::new(
            "search",
            vec![
                Stage::new("vectorizing", 1000),
                Stage::new("comparing", 1000),
                Stage::new("ranking", 1500),
            ],
            Fixture::new("results"),
            VirtualClock::new(),
        )
    }

    #[test]
    fn blank_input_schedules_nothing() {
        let mut runner = search_like();
        assert!(!runner.start("   ".to_string()));
        assert!(runner.is_idle());
        assert_eq!(runner.clock().pending_count(), 0);
        assert!(!runner.has_pending_timer());
    }

    #[test]
    fn stages_are_observed_in_order_and_settle_once() {
        let mut runner = search_like();
        assert!(runner.start("low-risk tech corridor".to_string()));

        let mut observed = vec![runner.stage()];
        for _ in 0..4 {
            runner.advance(1000);
            observed.push(runner.stage());
        }
        assert_eq!(
            observed,
            vec![Some(0), Some(1), Some(2), Some(2), None]
        );
        assert_eq!(runner.result(), Some(&"results"));
        assert_eq!(runner.clock().pending_count(), 0);
    }

    #[test]
    fn settles_exactly_once_per_run() {
        let mut runner = search_like();
        runner.start("query".to_string());
        let transitions = runner.advance(10_000);
        let settled = transitions
            .iter()
            .filter(|t| **t == Transition::Settled)
            .count();
        assert_eq!(settled, 1);
        assert_eq!(transitions.len(), 3);
    }

    #[test]
    fn start_is_refused_while_in_flight() {
        let mut runner = search_like();
        assert!(runner.start("first".to_string()));
        assert!(!runner.start("second".to_string()));
        assert_eq!(runner.input(), Some(&"first".to_string()));
        assert_eq!(runner.clock().pending_count(), 1);
    }

    #[test]
    fn reset_mid_flight_cancels_timer_and_clears_result() {
        let mut runner = search_like();
        runner.start("query".to_string());
        runner.advance(1500);
        assert_eq!(runner.stage(), Some(1));

        runner.reset();
        assert!(runner.is_idle());
        assert_eq!(runner.clock().pending_count(), 0);
        assert!(runner.advance(10_000).is_empty());
        assert!(runner.is_idle());
        assert_eq!(runner.result(), None);
    }

    #[test]
    fn reset_after_settle_clears_result() {
        let mut runner = search_like();
        runner.start("query".to_string());
        runner.advance(3500);
        assert!(runner.result().is_some());
        runner.reset();
        assert!(runner.is_idle());
        assert_eq!(runner.result(), None);
        assert_eq!(runner.input(), None);
    }

    #[test]
    fn dismiss_from_an_earlier_run_leaves_the_current_one_running() {
        let mut runner: WorkflowRunner<Fixture<(), &'static str>, VirtualClock<RunId>> = WorkflowRunner::new(
            "brief",
            vec![Stage::new("loading", 1500)],
            Fixture::new("hint"),
            VirtualClock::new(),
        );
        assert!(runner.start(()));
        runner.advance(1500);
        let first = runner.current_run();
        assert_eq!(runner.result(), Some(&"hint"));

        // Second unlock while the first hint is still showing.
        runner.advance(2500);
        assert!(runner.start(()));
        runner.advance(500);
        assert!(!runner.dismiss(first));
        assert_eq!(runner.stage(), Some(0));

        assert_eq!(runner.advance(1000), vec![Transition::Settled]);
        assert_eq!(runner.result(), Some(&"hint"));
        let second = runner.current_run();
        assert!(runner.dismiss(second));
        assert!(runner.is_idle());
    }

    #[test]
    fn dismiss_while_running_is_ignored() {
        let mut runner = search_like();
        runner.start("query".to_string());
        let run = runner.current_run();
        assert!(!runner.dismiss(run));
        assert!(runner.is_busy());
        assert_eq!(runner.clock().pending_count(), 1);
    }

    #[test]
    fn tick_from_before_reset_is_ignored() {
        let mut runner = search_like();
        runner.start("query".to_string());
        let stale = runner.current_run();
        runner.reset();
        assert_eq!(runner.on_tick(stale), Transition::Ignored);
        assert!(runner.is_idle());
    }
}
