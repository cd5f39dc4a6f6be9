use std::collections::HashMap;

use yew::prelude::*;

use crate::components::scroll_to_section;
use crate::config::{self, Timings};
use crate::models::pricing::{format_usd, tier, BillingPeriod, PricingTier, TierId, TIERS};
use crate::notify::{Toast, ToastSender};
use crate::services;
use crate::workflow::{BrowserScheduler, Echo, RunId, Scheduler, Stage, Transition, WorkflowRunner};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TierAction {
    Purchase,
    Sample,
}

#[derive(Properties, PartialEq)]
pub struct PricingTiersProps {
    pub toasts: ToastSender,
}

pub enum PricingMsg {
    TogglePeriod,
    Run(TierId, TierAction),
    Tick(TierId, TierAction, RunId),
    TalkToUs,
}

impl TierAction {
    pub const ALL: [TierAction; 2] = [TierAction::Purchase, TierAction::Sample];
}

/// One workflow per (tier, action) pair, so no button waits on another.
pub struct TierActions<S> {
    runners: HashMap<(TierId, TierAction), WorkflowRunner<Echo<String>, S>>,
}

impl<S: Scheduler<RunId>> TierActions<S> {
    pub fn new(timings: &Timings, mut scheduler_for: impl FnMut(TierId, TierAction) -> S) -> Self {
        let mut runners = HashMap::new();
        for tier in TIERS.iter() {
            for action in TierAction::ALL {
                let stage = match action {
                    TierAction::Purchase => Stage::new("Processing", timings.purchase_ms),
                    TierAction::Sample => Stage::new("Preparing", timings.sample_download_ms),
                };
                runners.insert(
                    (tier.id, action),
                    WorkflowRunner::new("pricing-action", vec![stage], Echo::new(), scheduler_for(tier.id, action)),
                );
            }
        }
        Self { runners }
    }

    /// The toast input is captured here, at click time, so flipping the billing
    /// period mid-run does not change what the toast reports.
    pub fn start(&mut self, tier: &PricingTier, action: TierAction, period: BillingPeriod) -> bool {
        let input = match action {
            TierAction::Purchase => tier.price_label(period),
            TierAction::Sample => tier.name.to_string(),
        };
        match self.runners.get_mut(&(tier.id, action)) {
            Some(runner) => runner.start(input),
            None => false,
        }
    }

    /// On settle the captured input is handed back and the pair is ready for
    /// its next click.
    pub fn on_tick(&mut self, id: TierId, action: TierAction, run: RunId) -> (Transition, Option<String>) {
        let Some(runner) = self.runners.get_mut(&(id, action)) else {
            return (Transition::Ignored, None);
        };
        let transition = runner.on_tick(run);
        if transition != Transition::Settled {
            return (transition, None);
        }
        let captured = runner.result().cloned();
        runner.reset();
        (transition, captured)
    }

    pub fn reset_all(&mut self) {
        for runner in self.runners.values_mut() {
            runner.reset();
        }
    }
}

impl<S> TierActions<S> {
    pub fn busy(&self, id: TierId, action: TierAction) -> bool {
        self.runners
            .get(&(id, action))
            .map(|runner| runner.is_busy())
            .unwrap_or(false)
    }
}

pub struct PricingTiers {
    period: BillingPeriod,
    actions: TierActions<BrowserScheduler<RunId>>,
}

impl Component for PricingTiers {
    type Message = PricingMsg;
    type Properties = PricingTiersProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        Self {
            period: BillingPeriod::default(),
            actions: TierActions::new(&config::timings(), |id, action| {
                BrowserScheduler::new(link.callback(move |run| PricingMsg::Tick(id, action, run)))
            }),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            PricingMsg::TogglePeriod => {
                self.period = match self.period {
                    BillingPeriod::PerReport => BillingPeriod::Monthly,
                    BillingPeriod::Monthly => BillingPeriod::PerReport,
                };
                true
            }
            PricingMsg::Run(id, action) => self.actions.start(tier(id), action, self.period),
            PricingMsg::Tick(id, action, run) => match self.actions.on_tick(id, action, run) {
                (Transition::Settled, captured) => {
                    notify_settled(&ctx.props().toasts, tier(id), action, &captured.unwrap_or_default());
                    true
                }
                (Transition::Ignored, _) => false,
                _ => true,
            },
            PricingMsg::TalkToUs => {
                ctx.props().toasts.send(Toast::new(
                    "Contact Form Opened",
                    "Redirecting to contact our sales team...",
                    config::timings().toast_short_ms,
                ));
                scroll_to_section("contact");
                false
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.actions.reset_all();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let monthly = self.period == BillingPeriod::Monthly;

        html! {
            <div class="pricing-tiers">
                <style>
                    {r#"
                    .pricing-tiers .tier-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 24px; }
                    .pricing-tiers .tier { position: relative; border: 2px solid #e5e7eb; border-radius: 16px; padding: 24px; background: #ffffff; transition: transform 0.2s; }
                    .pricing-tiers .tier:hover { transform: scale(1.03); }
                    .pricing-tiers .tier-green { border-color: #bbf7d0; }
                    .pricing-tiers .tier-blue { border-color: #bfdbfe; }
                    .pricing-tiers .tier-purple { border-color: #e9d5ff; }
                    .pricing-tiers .popular { position: absolute; top: -14px; left: 50%; transform: translateX(-50%); }
                    .pricing-tiers .price { font-size: 2.4rem; font-weight: 700; }
                    .pricing-tiers .toggle { display: flex; gap: 12px; align-items: center; justify-content: center; }
                    .pricing-tiers .toggle .active { color: #111827; font-weight: 600; }
                    "#}
                </style>
                <div class="section-title">
                    <h2>{"Choose Your Intelligence Level"}</h2>
                    <p class="muted">
                        {"From essential screening to executive-grade analysis. Every report is audit-ready and investment-grade."}
                    </p>
                    <div class="toggle">
                        <span class={classes!((!monthly).then_some("active"))}>{"Per Report"}</span>
                        <label class="switch">
                            <input type="checkbox" checked={monthly} onchange={link.callback(|_| PricingMsg::TogglePeriod)} />
                            <span class="slider"></span>
                        </label>
                        <span class={classes!(monthly.then_some("active"))}>{"Monthly"}</span>
                        if monthly {
                            <span class="badge badge-low">{"Save 25%"}</span>
                        }
                    </div>
                </div>

                <div class="tier-grid">
                    { for TIERS.iter().map(|t| self.view_tier(ctx, t)) }
                </div>

                <div class="enterprise-cta">
                    <p class="muted">{"Need a custom package for multiple cities or enterprise requirements?"}</p>
                    <button class="btn btn-outline" onclick={link.callback(|_| PricingMsg::TalkToUs)}>
                        {"Contact Enterprise Sales"}
                    </button>
                </div>
            </div>
        }
    }
}

impl PricingTiers {
    fn view_tier(&self, ctx: &Context<Self>, tier: &PricingTier) -> Html {
        let link = ctx.link();
        let id = tier.id;
        let purchasing = self.actions.busy(id, TierAction::Purchase);
        let sampling = self.actions.busy(id, TierAction::Sample);
        let amount = tier.price(self.period);
        let unit = match self.period {
            BillingPeriod::PerReport => "/report",
            BillingPeriod::Monthly => "/month",
        };

        html! {
            <div class={classes!("tier", tier.accent)}>
                if tier.popular {
                    <span class="badge badge-blue popular">{"★ Most Popular"}</span>
                }
                <h3>{ tier.name }</h3>
                <p class="muted">{ tier.description }</p>
                <div>
                    <span class="price">{ format_usd(amount) }</span>
                    <span class="muted">{ unit }</span>
                </div>
                if self.period == BillingPeriod::Monthly {
                    <p class="muted small">
                        { format!("~{} per report", format_usd((tier.price_monthly as f32 / 3.0).round() as u32)) }
                    </p>
                }
                <ul class="features">
                    { for tier.features.iter().map(|f| html! {
                        <li><span class="icon">{ f.icon }</span>{ f.text }</li>
                    }) }
                </ul>
                <button
                    class="btn btn-primary btn-block"
                    disabled={purchasing}
                    onclick={link.callback(move |_| PricingMsg::Run(id, TierAction::Purchase))}
                >
                    { if purchasing { "Processing...".to_string() } else { format!("Get {} Report", tier.name) } }
                </button>
                <div class="tier-secondary">
                    <button
                        class="btn btn-outline btn-sm"
                        disabled={sampling}
                        onclick={link.callback(move |_| PricingMsg::Run(id, TierAction::Sample))}
                    >
                        { if sampling { "Preparing..." } else { "⬇ Sample" } }
                    </button>
                    <button class="btn btn-outline btn-sm" onclick={link.callback(|_| PricingMsg::TalkToUs)}>
                        {"💬 Talk to Us"}
                    </button>
                </div>
                <div class="trust-row small">{"✓ Audit-ready • SOX compliant • 24hr delivery"}</div>
            </div>
        }
    }
}

fn notify_settled(toasts: &ToastSender, tier: &PricingTier, action: TierAction, captured: &str) {
    let duration = config::timings().toast_short_ms;
    let toast = match action {
        TierAction::Purchase => match services::start_checkout(tier, captured) {
            Ok(description) => Toast::new(format!("{} Selected", tier.name), description, duration),
            Err(err) => Toast::failure("Error processing request", &err, duration),
        },
        TierAction::Sample => match services::download_sample(tier) {
            Ok(description) => Toast::new("Sample Report Downloaded", description, duration),
            Err(err) => Toast::failure("Download failed", &err, duration),
        },
    };
    toasts.send(toast);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::scheduler::VirtualClock;

    type TestActions = TierActions<VirtualClock<RunId>>;

    fn actions() -> TestActions {
        TierActions::new(&Timings::default(), |_, _| VirtualClock::new())
    }

    /// Moves every pair's clock forward by `ms`, collecting settled inputs.
    fn advance(actions: &mut TestActions, ms: u64) -> Vec<(TierId, TierAction, String)> {
        let keys: Vec<(TierId, TierAction)> = actions.runners.keys().copied().collect();
        let mut settled = Vec::new();
        for (id, action) in keys {
            let mut due = Vec::new();
            if let Some(runner) = actions.runners.get_mut(&(id, action)) {
                let deadline = runner.clock().now_ms() + ms;
                while let Some(run) = runner.clock_mut().pop_due(deadline) {
                    due.push(run);
                }
                runner.clock_mut().set_now(deadline);
            }
            for run in due {
                if let (Transition::Settled, Some(captured)) = actions.on_tick(id, action, run) {
                    settled.push((id, action, captured));
                }
            }
        }
        settled
    }

    #[test]
    fn tier_actions_run_independently() {
        let mut actions = actions();
        let standard = tier(TierId::Standard);
        let lite = tier(TierId::Lite);

        assert!(actions.start(standard, TierAction::Purchase, BillingPeriod::PerReport));
        assert!(actions.start(lite, TierAction::Sample, BillingPeriod::PerReport));
        assert!(actions.busy(TierId::Standard, TierAction::Purchase));
        assert!(actions.busy(TierId::Lite, TierAction::Sample));

        assert!(!actions.start(standard, TierAction::Purchase, BillingPeriod::PerReport));
        assert!(!actions.busy(TierId::Standard, TierAction::Sample));
        assert!(!actions.busy(TierId::Lite, TierAction::Purchase));

        let settled = advance(&mut actions, 1000);
        assert_eq!(settled, vec![(TierId::Lite, TierAction::Sample, "Lite".to_string())]);
        assert!(!actions.busy(TierId::Lite, TierAction::Sample));
        assert!(actions.busy(TierId::Standard, TierAction::Purchase));
        assert!(actions.start(lite, TierAction::Sample, BillingPeriod::PerReport));

        let settled = advance(&mut actions, 500);
        let expected = standard.price_label(BillingPeriod::PerReport);
        assert_eq!(settled, vec![(TierId::Standard, TierAction::Purchase, expected)]);
    }

    #[test]
    fn purchase_keeps_the_price_from_click_time() {
        let mut actions = actions();
        let strategic = tier(TierId::Strategic);
        assert!(actions.start(strategic, TierAction::Purchase, BillingPeriod::Monthly));
        let settled = advance(&mut actions, 1500);
        assert_eq!(
            settled,
            vec![(TierId::Strategic, TierAction::Purchase, strategic.price_label(BillingPeriod::Monthly))]
        );
    }

    #[test]
    fn reset_all_cancels_every_pending_run() {
        let mut actions = actions();
        actions.start(tier(TierId::Lite), TierAction::Purchase, BillingPeriod::PerReport);
        actions.start(tier(TierId::Lite), TierAction::Sample, BillingPeriod::PerReport);
        actions.reset_all();
        assert!(advance(&mut actions, 5000).is_empty());
        assert!(!actions.busy(TierId::Lite, TierAction::Purchase));
    }
}
