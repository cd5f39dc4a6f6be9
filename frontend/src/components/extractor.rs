use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::analysis::lookup::StatementLookup;
use crate::analysis::selection::{self, SelectionSummary};
use crate::config;
use crate::models::risk::RiskLevel;
use crate::models::statement::{ImpactStatement, DEFAULT_DATE_RANGE};
use crate::workflow::{BrowserScheduler, Outcome, RunId, Stage, Transition, WorkflowRunner, WorkflowState};

type ExtractorRunner = WorkflowRunner<StatementLookup, BrowserScheduler<RunId>>;

pub enum ExtractorMsg {
    SetQuery(String),
    Extract,
    Tick(RunId),
    Toggle(&'static str),
}

/// Pulls impact statements for a typed city name out of the sample corpus.
pub struct StatementExtractor {
    query: String,
    runner: ExtractorRunner,
}

impl Component for StatementExtractor {
    type Message = ExtractorMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            query: String::new(),
            runner: WorkflowRunner::new(
                "statement-extractor",
                vec![Stage::new("Extracting", config::timings().extractor_ms)],
                StatementLookup::default(),
                BrowserScheduler::new(ctx.link().callback(ExtractorMsg::Tick)),
            ),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ExtractorMsg::SetQuery(query) => {
                self.query = query;
                true
            }
            ExtractorMsg::Extract => self.runner.start(self.query.clone()),
            ExtractorMsg::Tick(run) => !matches!(self.runner.on_tick(run), Transition::Ignored),
            ExtractorMsg::Toggle(id) => match self.runner.result_mut() {
                Some(statements) => selection::toggle(statements, id),
                None => false,
            },
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.runner.reset();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let busy = self.runner.is_busy();
        let found = self.runner.result().map(Vec::len).unwrap_or(0);

        let oninput = link.callback(|e: InputEvent| {
            ExtractorMsg::SetQuery(e.target_unchecked_into::<HtmlInputElement>().value())
        });
        let onkeypress = link.batch_callback(|e: KeyboardEvent| {
            (e.key() == "Enter").then_some(ExtractorMsg::Extract)
        });

        let body = match self.runner.state() {
            WorkflowState::Running { .. } => view_extracting(),
            WorkflowState::Settled(Outcome::Found(statements)) => self.view_statements(ctx, statements),
            WorkflowState::Settled(Outcome::Empty) => html! {
                <div class="empty-state">
                    <h4>{"No statements found"}</h4>
                    <p class="muted">{"Try searching for \"Buffalo, NY\" or \"Chico, CA\" to see sample results."}</p>
                </div>
            },
            WorkflowState::Idle => html! {
                <div class="empty-state">
                    <h4>{"Ready to Extract Impact Statements"}</h4>
                    <p class="muted">{"Enter a city name above to analyze council transcripts and regulatory filings."}</p>
                </div>
            },
        };

        html! {
            <div class="card extractor">
                <style>
                    {r#"
                    .extractor .statement { border: 2px solid #e5e7eb; border-radius: 12px; padding: 20px; margin-bottom: 12px; cursor: pointer; }
                    .extractor .statement.selected { border-color: #d8b4fe; background: #faf5ff; }
                    .extractor .statement-meta { display: flex; gap: 12px; flex-wrap: wrap; font-size: 0.85rem; color: #6b7280; }
                    .extractor .selection-bar { display: flex; justify-content: space-between; align-items: center; }
                    "#}
                </style>
                <div class="card-header">
                    <h3>{"City Impact Statement Extractor"}</h3>
                    <p class="muted">{"AI-powered analysis of council transcripts, Indigenous radio, and permitting logs"}</p>
                    <div class="search-row">
                        <input
                            type="text"
                            placeholder="Enter city name (e.g., Buffalo, NY or Chico, CA)"
                            value={self.query.clone()}
                            {oninput}
                            {onkeypress}
                        />
                        <button
                            class="btn btn-primary"
                            disabled={self.query.trim().is_empty() || busy}
                            onclick={link.callback(|_| ExtractorMsg::Extract)}
                        >
                            { if busy { "Analyzing..." } else { "Extract Statements" } }
                        </button>
                    </div>
                    <div class="statement-meta">
                        <span>{ format!("📅 Date Range: {}", DEFAULT_DATE_RANGE) }</span>
                        if found > 0 {
                            <span>{ format!("{} statements found", found) }</span>
                        }
                    </div>
                </div>
                { body }
            </div>
        }
    }
}

impl StatementExtractor {
    fn view_statements(&self, ctx: &Context<Self>, statements: &[ImpactStatement]) -> Html {
        let summary = selection::summarize(statements);
        let city = self.runner.input().cloned().unwrap_or_default();

        html! {
            <div class="statements">
                <div class="selection-bar">
                    <h4>{ format!("Extracted Statements for {}", city) }</h4>
                    if summary.selected_count > 0 {
                        <span class="badge badge-purple">
                            { format!("{} selected • Impact Score: +{}", summary.selected_count, summary.total_score_impact) }
                        </span>
                    }
                </div>
                { for statements.iter().map(|s| view_statement(ctx, s)) }
                { view_summary(&summary) }
            </div>
        }
    }
}

fn view_statement(ctx: &Context<StatementExtractor>, statement: &ImpactStatement) -> Html {
    let id = statement.id;
    let onclick = ctx.link().callback(move |_| ExtractorMsg::Toggle(id));

    html! {
        <div class={classes!("statement", statement.selected.then_some("selected"))} {onclick}>
            <input type="checkbox" checked={statement.selected} readonly={true} />
            <p class="quote">{ format!("🗣️ \"{}\"", statement.statement) }</p>
            <div class="statement-meta">
                <span>{ severity_icon(statement.severity) }</span>
                <span>{ format!("Score Impact: +{}", statement.score_impact) }</span>
                <span class={statement.category.badge_class()}>{ statement.category.label() }</span>
                <span class={statement.severity.badge_class()}>{ format!("{} Severity", statement.severity) }</span>
                <span class={statement.fpic_risk.badge_class()}>{ format!("FPIC Risk: {}", statement.fpic_risk) }</span>
                <span>{ format!("📅 {}", statement.display_date()) }</span>
                <span>{ format!("📄 {}", statement.source) }</span>
            </div>
        </div>
    }
}

fn view_summary(summary: &SelectionSummary) -> Html {
    if summary.selected_count == 0 {
        return html! {};
    }
    html! {
        <div class="selection-summary">
            <h5>{ format!("{} statements selected for analysis", summary.selected_count) }</h5>
            <p>
                { format!(
                    "Combined impact score: +{} points • Estimated report enhancement: ${}",
                    summary.total_score_impact,
                    summary.estimated_enhancement(),
                ) }
            </p>
            <button class="btn btn-primary">{"Generate Enhanced Report"}</button>
        </div>
    }
}

fn view_extracting() -> Html {
    html! {
        <div class="loading">
            <div class="spinner"></div>
            <h4>{"Extracting Impact Statements..."}</h4>
            <p>{"🔍 Parsing council transcripts and meeting minutes"}</p>
            <p>{"📻 Analyzing Indigenous radio broadcasts"}</p>
            <p>{"📋 Processing permitting logs and regulatory filings"}</p>
            <p>{"🤖 Applying ESG categorization and risk scoring"}</p>
        </div>
    }
}

fn severity_icon(severity: RiskLevel) -> &'static str {
    match severity {
        RiskLevel::High => "⛔",
        RiskLevel::Medium => "⚠️",
        RiskLevel::Low => "✅",
    }
}
