use log::debug;

/// One timed phase of a workflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stage {
    pub label: &'static str,
    pub delay_ms: u32,
}

impl Stage {
    pub const fn new(label: &'static str, delay_ms: u32) -> Self {
        Self { label, delay_ms }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome<R> {
    Found(R),
    Empty,
}

impl<R> Outcome<R> {
    pub fn found(&self) -> Option<&R> {
        match self {
            Outcome::Found(value) => Some(value),
            Outcome::Empty => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum WorkflowState<R> {
    Idle,
    Running { stage: usize },
    Settled(Outcome<R>),
}

/// Generation counter for runs. Every start and every reset bumps it, so a
/// tick carrying an older id can never touch the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RunId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Start refused: gate closed or a run is already in flight.
    Refused,
    /// Entered `stage`; the next tick is due after `delay_ms`.
    Entered { stage: usize, delay_ms: u32 },
    Settled,
    Reset,
    /// Tick for a run that is no longer current, or arrived after settling.
    Ignored,
}

pub struct Machine<R> {
    name: &'static str,
    stages: Vec<Stage>,
    state: WorkflowState<R>,
    run: u64,
}

impl<R> Machine<R> {
    pub fn new(name: &'static str, stages: Vec<Stage>) -> Self {
        Self {
            name,
            stages,
            state: WorkflowState::Idle,
            run: 0,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn state(&self) -> &WorkflowState<R> {
        &self.state
    }

    pub fn current_run(&self) -> RunId {
        RunId(self.run)
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.state, WorkflowState::Running { .. })
    }

    pub fn stage(&self) -> Option<usize> {
        match self.state {
            WorkflowState::Running { stage } => Some(stage),
            _ => None,
        }
    }

    pub fn stage_label(&self) -> Option<&'static str> {
        self.stage().and_then(|i| self.stages.get(i)).map(|s| s.label)
    }

    pub fn outcome(&self) -> Option<&Outcome<R>> {
        match &self.state {
            WorkflowState::Settled(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&R> {
        self.outcome().and_then(Outcome::found)
    }

    pub fn result_mut(&mut self) -> Option<&mut R> {
        match &mut self.state {
            WorkflowState::Settled(Outcome::Found(value)) => Some(value),
            _ => None,
        }
    }

    /// Begins a new run from `Idle` or `Settled`. A previous result is discarded.
    ///
    /// A machine without stages settles on its first tick, which is due at once.
    pub fn start(&mut self) -> Transition {
        if self.is_busy() {
            debug!("{}: start refused, run {} in flight", self.name, self.run);
            return Transition::Refused;
        }
        self.run += 1;
        self.state = WorkflowState::Running { stage: 0 };
        let delay_ms = self.stages.first().map(|s| s.delay_ms).unwrap_or(0);
        debug!("{}: run {} entered stage 0", self.name, self.run);
        Transition::Entered { stage: 0, delay_ms }
    }

    /// Applies the elapsed delay of the current stage.
    ///
    /// `resolve` runs only when the last stage elapses.
    pub fn tick(&mut self, run: RunId, resolve: impl FnOnce() -> Outcome<R>) -> Transition {
        if run.0 != self.run {
            debug!("{}: ignoring stale tick for run {}", self.name, run.0);
            return Transition::Ignored;
        }
        let WorkflowState::Running { stage } = self.state else {
            return Transition::Ignored;
        };
        let next = stage + 1;
        match self.stages.get(next) {
            Some(s) => {
                self.state = WorkflowState::Running { stage: next };
                debug!("{}: run {} entered stage {} ({})", self.name, self.run, next, s.label);
                Transition::Entered {
                    stage: next,
                    delay_ms: s.delay_ms,
                }
            }
            None => {
                self.state = WorkflowState::Settled(resolve());
                debug!("{}: run {} settled", self.name, self.run);
                Transition::Settled
            }
        }
    }

    pub fn reset(&mut self) -> Transition {
        self.run += 1;
        self.state = WorkflowState::Idle;
        debug!("{}: reset", self.name);
        Transition::Reset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_stage() -> Machine<u32> {
        Machine::new(
            "test",
            vec![
                Stage::new("one", 100),
                Stage::new("two", 200),
                Stage::new("three", 300),
            ],
        )
    }

    #[test]
    fn starts_idle() {
        let machine = three_stage();
        assert_eq!(machine.state(), &WorkflowState::Idle);
        assert!(!machine.is_busy());
        assert_eq!(machine.result(), None);
    }

    #[test]
    fn walks_stages_in_order_then_settles_once() {
        let mut machine = three_stage();
        assert_eq!(
            machine.start(),
            Transition::Entered { stage: 0, delay_ms: 100 }
        );
        let run = machine.current_run();
        assert_eq!(
            machine.tick(run, || Outcome::Found(1)),
            Transition::Entered { stage: 1, delay_ms: 200 }
        );
        assert_eq!(machine.stage_label(), Some("two"));
        assert_eq!(
            machine.tick(run, || Outcome::Found(1)),
            Transition::Entered { stage: 2, delay_ms: 300 }
        );

        let mut resolved = 0;
        assert_eq!(
            machine.tick(run, || {
                resolved += 1;
                Outcome::Found(42)
            }),
            Transition::Settled
        );
        assert_eq!(machine.result(), Some(&42));
        assert_eq!(machine.tick(run, || Outcome::Found(7)), Transition::Ignored);
        assert_eq!(resolved, 1);
        assert_eq!(machine.result(), Some(&42));
    }

    #[test]
    fn refuses_start_while_running() {
        let mut machine = three_stage();
        machine.start();
        let run = machine.current_run();
        assert_eq!(machine.start(), Transition::Refused);
        assert_eq!(machine.current_run(), run);
    }

    #[test]
    fn reset_invalidates_pending_ticks() {
        let mut machine = three_stage();
        machine.start();
        let stale = machine.current_run();
        assert_eq!(machine.reset(), Transition::Reset);
        assert_eq!(machine.tick(stale, || Outcome::Found(1)), Transition::Ignored);
        assert_eq!(machine.state(), &WorkflowState::Idle);
    }

    #[test]
    fn restart_after_settle_discards_previous_result() {
        let mut machine = Machine::new("single", vec![Stage::new("only", 10)]);
        machine.start();
        let run = machine.current_run();
        machine.tick(run, || Outcome::Found("first"));
        assert_eq!(machine.result(), Some(&"first"));

        machine.start();
        assert_eq!(machine.result(), None);
        assert_eq!(machine.tick(run, || Outcome::Found("stale")), Transition::Ignored);
    }

    #[test]
    fn empty_outcome_settles_without_result() {
        let mut machine: Machine<u32> = Machine::new("lookup", vec![Stage::new("only", 10)]);
        machine.start();
        let run = machine.current_run();
        machine.tick(run, || Outcome::Empty);
        assert_eq!(machine.outcome(), Some(&Outcome::Empty));
        assert_eq!(machine.result(), None);
    }
}
