use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::scroll_to_section;
use crate::config;
use crate::models::fpic::{FpicSnapshot, PRICING_HINT, SAULT_STE_MARIE};
use crate::workflow::{BrowserScheduler, Fixture, RunId, Stage, Transition, WorkflowRunner};

type BriefRunner = WorkflowRunner<Fixture<(), &'static str>, BrowserScheduler<RunId>>;

pub enum FpicMsg {
    UnlockBrief,
    Tick(RunId),
    HideHint(RunId),
}

pub struct FpicDashboard {
    snapshot: FpicSnapshot,
    runner: BriefRunner,
    hint_timer: Option<Timeout>,
}

impl Component for FpicDashboard {
    type Message = FpicMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            snapshot: SAULT_STE_MARIE,
            runner: WorkflowRunner::new(
                "fpic-brief",
                vec![Stage::new("Loading", config::timings().brief_unlock_ms)],
                Fixture::new(PRICING_HINT),
                BrowserScheduler::new(ctx.link().callback(FpicMsg::Tick)),
            ),
            hint_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            FpicMsg::UnlockBrief => {
                let started = self.runner.start(());
                if started {
                    self.hint_timer = None;
                }
                started
            }
            FpicMsg::Tick(run) => match self.runner.on_tick(run) {
                Transition::Settled => {
                    let link = ctx.link().clone();
                    // Replacing an earlier timer drops and cancels it.
                    self.hint_timer = Some(Timeout::new(config::timings().pricing_hint_ms, move || {
                        link.send_message(FpicMsg::HideHint(run))
                    }));
                    true
                }
                Transition::Ignored => false,
                _ => true,
            },
            FpicMsg::HideHint(run) => {
                self.hint_timer = None;
                self.runner.dismiss(run)
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.hint_timer = None;
        self.runner.reset();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let snapshot = &self.snapshot;
        let loading = self.runner.is_busy();
        let hint = self.runner.result().copied();

        html! {
            <div class="fpic-dashboard">
                <h2>{"FPIC Risk Dashboard"}</h2>
                <p class="muted">
                    {"A litigation-grade snapshot of Indigenous consultation status, sourced from public transcripts."}
                </p>

                <div class="card summary">
                    <div class="card-header">
                        <div>
                            <h3>{ snapshot.city }</h3>
                            <p class="muted">{ format!("Last updated: {}", snapshot.last_updated) }</p>
                        </div>
                        <span class={snapshot.risk.badge_class()}>{ snapshot.status }</span>
                    </div>
                    <p>{"FPIC Risk Score"}</p>
                    <div class="bar">
                        <div class="bar-fill risk" style={format!("width: {}%;", snapshot.risk_score)}></div>
                    </div>
                    <p class="risk-note">{"High risk of litigation or project delay due to consultation failure"}</p>
                </div>

                <h4>{"Transcript Evidence (Preview)"}</h4>
                { for snapshot.quotes.iter().map(|q| html! {
                    <div class="quote-card">
                        <p class="quote">{ format!("\"{}\"", q.text) }</p>
                        <div class="quote-meta">
                            <span class="tag">{ q.tag }</span>
                            <span>{ q.source }</span>
                            <span>{ q.date }</span>
                        </div>
                    </div>
                }) }

                <div class="unlock">
                    <button
                        class="btn btn-outline"
                        disabled={loading}
                        onclick={ctx.link().callback(|_| FpicMsg::UnlockBrief)}
                    >
                        { if loading { "Loading..." } else { "Unlock Full Legal Brief ⬇" } }
                    </button>
                    if let Some(hint) = hint {
                        <div class="pricing-hint">{ format!("💡 {}", hint) }</div>
                    }
                    <p class="muted small">
                        {"Includes 15+ transcript insights, consultation timeline, and legal brief PDF"}
                    </p>
                </div>

                <div class="teaser locked">
                    <h4>{"FPIC Risk Map (Teaser View)"}</h4>
                    <p>{"⚠️ Risk map locked. Available in Strategic Reports only"}</p>
                    <button class="btn btn-secondary btn-sm" onclick={Callback::from(|_| scroll_to_section("pricing"))}>
                        {"See Pricing"}
                    </button>
                </div>
            </div>
        }
    }
}
