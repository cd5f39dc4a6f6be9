use rand_chacha::ChaCha8Rng;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::analysis::calculator::{clock_seeded_rng, CalculatorResult, RandomCalculator};
use crate::components::scroll_to_section;
use crate::config;
use crate::models::city::{display_name, CALCULATOR_CITIES};
use crate::models::pricing::{format_usd, tier, TierId};
use crate::workflow::{BrowserScheduler, Outcome, RunId, Stage, Transition, WorkflowRunner, WorkflowState};

type CalculatorRunner = WorkflowRunner<RandomCalculator<ChaCha8Rng>, BrowserScheduler<RunId>>;

const ANALYSIS_STEPS: [&str; 4] = [
    "Processing council transcripts",
    "Calculating water security metrics",
    "Assessing FPIC legal exposure",
    "Computing materiality score",
];

pub enum CalculatorMsg {
    SelectCity(String),
    Calculate,
    Tick(RunId),
    Reset,
}

pub struct ImpactCalculator {
    selected_city: String,
    runner: CalculatorRunner,
}

impl Component for ImpactCalculator {
    type Message = CalculatorMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let timings = config::timings();
        Self {
            selected_city: String::new(),
            runner: WorkflowRunner::new(
                "impact-calculator",
                vec![Stage::new("Analyzing", timings.calculator_ms)],
                RandomCalculator::new(clock_seeded_rng()),
                BrowserScheduler::new(ctx.link().callback(CalculatorMsg::Tick)),
            ),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            CalculatorMsg::SelectCity(city) => {
                self.selected_city = city;
                true
            }
            CalculatorMsg::Calculate => self.runner.start(self.selected_city.clone()),
            CalculatorMsg::Tick(run) => !matches!(self.runner.on_tick(run), Transition::Ignored),
            CalculatorMsg::Reset => {
                self.runner.reset();
                self.selected_city.clear();
                true
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.runner.reset();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let body = match self.runner.state() {
            WorkflowState::Idle => self.view_selection(ctx),
            WorkflowState::Running { .. } => self.view_loading(),
            WorkflowState::Settled(Outcome::Found(result)) => self.view_result(ctx, result),
            // The random draw always yields a result.
            WorkflowState::Settled(Outcome::Empty) => self.view_selection(ctx),
        };

        html! {
            <div class="impact-calculator">
                <style>
                    {r#"
                    .impact-calculator .steps li { display: flex; gap: 8px; align-items: center; padding: 4px 0; }
                    .impact-calculator .step-done { color: #16a34a; }
                    .impact-calculator .step-active { color: #0d9488; font-weight: 600; }
                    .impact-calculator .step-waiting { color: #9ca3af; }
                    .impact-calculator .metric { text-align: center; padding: 16px; border-radius: 12px; background: #f9fafb; }
                    .impact-calculator .metric-value { font-size: 2rem; font-weight: 700; }
                    .impact-calculator .bar { height: 8px; border-radius: 4px; background: #e5e7eb; }
                    .impact-calculator .bar-fill { height: 8px; border-radius: 4px; background: linear-gradient(90deg, #0d9488, #2563eb); }
                    .impact-calculator .teaser { border: 1px dashed #f59e0b; background: #fffbeb; border-radius: 12px; padding: 16px; }
                    "#}
                </style>
                <h2>{"City Impact Calculator"}</h2>
                <p class="section-lead">
                    {"Get an instant preview of a city's risk profile. Full reports include 50+ additional metrics."}
                </p>
                { body }
            </div>
        }
    }
}

impl ImpactCalculator {
    fn view_selection(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onchange = link.callback(|e: Event| {
            CalculatorMsg::SelectCity(e.target_unchecked_into::<HtmlSelectElement>().value())
        });

        html! {
            <div class="card">
                <h3>{"Select a City to Analyze"}</h3>
                <label for="calculator-city">{"Choose a city:"}</label>
                <select id="calculator-city" {onchange}>
                    <option value="" selected={self.selected_city.is_empty()}>{"Select a city..."}</option>
                    { for CALCULATOR_CITIES.iter().map(|(key, name)| html! {
                        <option value={*key} selected={self.selected_city == *key}>{ *name }</option>
                    }) }
                </select>
                <div class="two-col">
                    <div>
                        <h4>{"What We Analyze"}</h4>
                        <ul class="check-list">
                            <li>{"Council transcript sentiment analysis"}</li>
                            <li>{"Water security & infrastructure scoring"}</li>
                            <li>{"FPIC legal exposure assessment"}</li>
                            <li>{"ESG materiality impact modeling"}</li>
                        </ul>
                    </div>
                    <div>
                        <h4>{"Materiality Formula"}</h4>
                        <code>{"Score = Scale × Scope × Irremediability × Likelihood"}</code>
                        <p class="muted">{"Based on Upright methodology, adapted for municipal risk assessment"}</p>
                    </div>
                </div>
                <button
                    class="btn btn-primary"
                    disabled={self.selected_city.is_empty()}
                    onclick={link.callback(|_| CalculatorMsg::Calculate)}
                >
                    {"Calculate Impact Rating"}
                </button>
            </div>
        }
    }

    fn view_loading(&self) -> Html {
        html! {
            <div class="card loading">
                <div class="spinner"></div>
                <h4>{ format!("Analyzing {}...", display_name(&self.selected_city)) }</h4>
                <ul class="steps">
                    { for ANALYSIS_STEPS.iter().enumerate().map(|(i, step)| {
                        let class = match i {
                            0 => "step-done",
                            1 => "step-active",
                            _ => "step-waiting",
                        };
                        html! { <li class={class}>{ *step }</li> }
                    }) }
                </ul>
            </div>
        }
    }

    fn view_result(&self, ctx: &Context<Self>, result: &CalculatorResult) -> Html {
        let full_report = format_usd(tier(TierId::Standard).price_per_report);

        html! {
            <div class="card result">
                <div class="card-header">
                    <h3>{ format!("{} Impact Rating", display_name(&result.city)) }</h3>
                    <span class="badge badge-low">{"Analysis Complete"}</span>
                </div>

                <div class="three-col">
                    <div class="metric">
                        <div class="metric-value">{ result.materiality_score }</div>
                        <p>{"Materiality Score"}</p>
                        <p class="muted">{ if result.is_material() { "Material" } else { "Not Material" } }</p>
                    </div>
                    <div class="metric">
                        <div class="metric-value">{ format!("{}/100", result.esg_score) }</div>
                        <p>{"ESG Score"}</p>
                        <p class="muted">{ result.esg_rating() }</p>
                    </div>
                    <div class="metric">
                        <div class="metric-value">{ result.risk_level.label() }</div>
                        <p>{"Overall Risk"}</p>
                        <p class="muted">{"Investment Grade"}</p>
                    </div>
                </div>

                <h5>{"Key Metrics Preview"}</h5>
                { metric_bar("Water Security", result.water_security) }
                { metric_bar("Infrastructure Score", result.infrastructure_score) }
                <div class="alert">
                    <p class="alert-title">{ format!("FPIC Risk: {}", result.fpic_risk) }</p>
                    <p>{ result.fpic_risk.fpic_narrative() }</p>
                </div>

                <div class="teaser">
                    <h5>{"This is just a preview"}</h5>
                    <p>
                        {"The full Veracity101 report includes 50+ additional metrics, council transcript analysis, \
                          regulatory timeline projections, and investment-grade risk assessments."}
                    </p>
                    <div class="two-col">
                        <ul>
                            <li>{"Complete transcript sentiment analysis"}</li>
                            <li>{"3-year regulatory timeline"}</li>
                            <li>{"Permit delay probability modeling"}</li>
                            <li>{"Community stakeholder mapping"}</li>
                        </ul>
                        <ul>
                            <li>{"Tax incentive optimization"}</li>
                            <li>{"Labor market deep-dive"}</li>
                            <li>{"Climate risk projections"}</li>
                            <li>{"Executive summary & recommendations"}</li>
                        </ul>
                    </div>
                </div>

                <div class="actions">
                    <button class="btn btn-primary" onclick={Callback::from(|_| scroll_to_section("pricing"))}>
                        { format!("Get Full Intelligence Report - {}", full_report) }
                    </button>
                    <button class="btn btn-outline" onclick={ctx.link().callback(|_| CalculatorMsg::Reset)}>
                        {"Try Another City"}
                    </button>
                </div>
            </div>
        }
    }
}

fn metric_bar(label: &'static str, value: u8) -> Html {
    html! {
        <div class="metric-bar">
            <div class="metric-bar-label">
                <span>{ label }</span>
                <span>{ format!("{}/100", value) }</span>
            </div>
            <div class="bar">
                <div class="bar-fill" style={format!("width: {}%;", value)}></div>
            </div>
        </div>
    }
}
