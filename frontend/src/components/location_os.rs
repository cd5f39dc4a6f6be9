use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::analysis::selection::ComparisonSet;
use crate::config;
use crate::models::city::{sample_cities, SearchCity, COMPARISON_PRICE_PER_CITY, SAMPLE_QUERIES};
use crate::models::pricing::format_usd;
use crate::workflow::{
    BrowserScheduler, Fixture, Outcome, RunId, Stage, Transition, WorkflowRunner, WorkflowState,
};

type SearchRunner = WorkflowRunner<Fixture<String, Vec<SearchCity>>, BrowserScheduler<RunId>>;

const STAGE_ICONS: [&str; 3] = ["🔍", "🏙️", "📊"];

pub enum LocationOsMsg {
    SetQuery(String),
    Search,
    Tick(RunId),
    ToggleCity(&'static str),
    ClearSelection,
}

pub struct LocationOs {
    query: String,
    runner: SearchRunner,
    comparison: ComparisonSet,
}

impl Component for LocationOs {
    type Message = LocationOsMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let [vectorize, compare, rank] = config::timings().search_stages_ms;
        Self {
            query: String::new(),
            runner: WorkflowRunner::new(
                "vector-search",
                vec![
                    Stage::new("Vectorizing search query...", vectorize),
                    Stage::new("Comparing against 100+ cities...", compare),
                    Stage::new("Ranking by similarity & risk factors...", rank),
                ],
                Fixture::new(sample_cities()),
                BrowserScheduler::new(ctx.link().callback(LocationOsMsg::Tick)),
            ),
            comparison: ComparisonSet::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LocationOsMsg::SetQuery(query) => {
                self.query = query;
                true
            }
            LocationOsMsg::Search => self.runner.start(self.query.clone()),
            LocationOsMsg::Tick(run) => !matches!(self.runner.on_tick(run), Transition::Ignored),
            LocationOsMsg::ToggleCity(id) => {
                self.comparison.toggle(id);
                true
            }
            LocationOsMsg::ClearSelection => {
                self.comparison.clear();
                true
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.runner.reset();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let busy = self.runner.is_busy();

        let oninput = link.callback(|e: InputEvent| {
            LocationOsMsg::SetQuery(e.target_unchecked_into::<HtmlInputElement>().value())
        });
        let onkeypress = link.batch_callback(|e: KeyboardEvent| {
            (e.key() == "Enter").then_some(LocationOsMsg::Search)
        });

        let body = match self.runner.state() {
            WorkflowState::Running { stage } => self.view_progress(*stage),
            WorkflowState::Settled(Outcome::Found(cities)) => self.view_results(ctx, cities),
            WorkflowState::Settled(Outcome::Empty) | WorkflowState::Idle => html! {
                <div class="empty-state">
                    <h3>{"Ready to Search"}</h3>
                    <p class="muted">
                        {"Enter your location requirements above to find similar cities using our AI-powered vector search engine."}
                    </p>
                </div>
            },
        };

        html! {
            <div class="location-os">
                <style>
                    {r#"
                    .location-os .stage { display: flex; gap: 12px; align-items: center; padding: 12px; border-radius: 8px; background: #ccfbf1; color: #0d9488; margin-bottom: 8px; }
                    .location-os .stage.done { background: #ffffff; border: 1px solid #99f6e4; color: #115e59; }
                    .location-os .city-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 20px; }
                    .location-os .city-card { border: 2px solid #e5e7eb; border-radius: 14px; padding: 20px; cursor: pointer; animation: fade-in 0.5s ease-out both; }
                    .location-os .city-card.selected { border-color: #5eead4; background: #f0fdfa; }
                    .location-os .similarity { font-size: 1.6rem; font-weight: 700; color: #0d9488; }
                    @keyframes fade-in { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: translateY(0); } }
                    "#}
                </style>
                <div class="os-header">
                    <h2><span class="brand-teal">{"Location"}</span><span class="brand-blue">{"OS"}</span></h2>
                    <p class="muted">{"Vector Search Engine"}</p>
                    <p>
                        {"AI-powered city comparison using semantic search across 100+ municipalities. \
                          Find cities similar to your requirements using natural language."}
                    </p>
                </div>

                <div class="card">
                    <h3>{"Semantic City Search"}</h3>
                    <p class="muted">{"Describe your ideal location in natural language"}</p>
                    <div class="search-row">
                        <input
                            type="text"
                            placeholder="e.g., 'Tech-friendly city with good water security, low FPIC risk, and strong infrastructure'"
                            value={self.query.clone()}
                            {oninput}
                            {onkeypress}
                        />
                        <button
                            class="btn btn-primary"
                            disabled={self.query.trim().is_empty() || busy}
                            onclick={link.callback(|_| LocationOsMsg::Search)}
                        >
                            { if busy { "Searching..." } else { "⚡ Vector Search" } }
                        </button>
                    </div>
                    <div class="sample-queries">
                        <span class="muted">{"Try:"}</span>
                        { for SAMPLE_QUERIES.iter().map(|query| {
                            let query = *query;
                            html! {
                                <button
                                    class="btn btn-outline btn-sm"
                                    onclick={link.callback(move |_| LocationOsMsg::SetQuery(query.to_string()))}
                                >
                                    { query }
                                </button>
                            }
                        }) }
                    </div>
                </div>

                { body }
            </div>
        }
    }
}

impl LocationOs {
    fn view_progress(&self, stage: usize) -> Html {
        html! {
            <div class="card loading">
                <div class="spinner"></div>
                <h3>{"Processing Vector Search..."}</h3>
                { for self.runner.stages().iter().enumerate().map(|(i, s)| {
                    let done = i <= stage;
                    html! {
                        <div class={classes!("stage", done.then_some("done"))}>
                            <span>{ STAGE_ICONS.get(i).copied().unwrap_or("•") }</span>
                            <span>{ s.label }</span>
                            if done {
                                <span class="check">{"✓"}</span>
                            }
                        </div>
                    }
                }) }
            </div>
        }
    }

    fn view_results(&self, ctx: &Context<Self>, cities: &[SearchCity]) -> Html {
        let link = ctx.link();
        let picked = self.comparison.len();

        html! {
            <div class="results">
                <h3>{ format!("Found {} Similar Cities", cities.len()) }</h3>
                <p class="muted">{"Ranked by semantic similarity to your query • Click to compare"}</p>
                <div class="city-grid">
                    { for cities.iter().enumerate().map(|(index, city)| self.view_city(ctx, index, city)) }
                </div>
                if picked > 0 {
                    <div class="comparison-bar">
                        <h4>{ format!("{} Cities Selected for Comparison", picked) }</h4>
                        <button class="btn btn-primary">
                            { format!(
                                "Generate Comparison Report - {}",
                                format_usd(self.comparison.report_price(COMPARISON_PRICE_PER_CITY)),
                            ) }
                        </button>
                        <button class="btn btn-outline" onclick={link.callback(|_| LocationOsMsg::ClearSelection)}>
                            {"Clear Selection"}
                        </button>
                        <p class="muted">
                            {"Side-by-side analysis • Risk comparison matrix • Investment recommendations"}
                        </p>
                    </div>
                }
            </div>
        }
    }

    fn view_city(&self, ctx: &Context<Self>, index: usize, city: &SearchCity) -> Html {
        let id = city.id;
        let selected = self.comparison.contains(id);
        let onclick = ctx.link().callback(move |_| LocationOsMsg::ToggleCity(id));
        let (lat, lng) = city.coordinates;

        html! {
            <div
                key={id}
                class={classes!("city-card", selected.then_some("selected"))}
                style={format!("animation-delay: {}ms;", index * 200)}
                {onclick}
            >
                <div class="card-header">
                    <div>
                        <h4>{ format!("📍 {}, {}", city.name, city.state) }</h4>
                        <p class="muted">{ format!("Population: {}", city.population) }</p>
                        <p class="muted small">{ format!("{:.4}, {:.4}", lat, lng) }</p>
                    </div>
                    <div>
                        <div class="similarity">{ format!("{}%", city.similarity) }</div>
                        <p class="muted">{"Similarity"}</p>
                    </div>
                </div>
                <div class="three-col">
                    <div class="metric">
                        <strong>{ format!("{}/100", city.esg_score) }</strong>
                        <p>{"ESG Score"}</p>
                    </div>
                    <div class="metric">
                        <strong>{ format!("{}%", city.water_security) }</strong>
                        <p>{"Water Security"}</p>
                    </div>
                    <div class="metric">
                        <strong>{ city.materiality_score }</strong>
                        <p>{"Materiality"}</p>
                    </div>
                </div>
                <div class="badges">
                    <span class={city.risk_level.badge_class()}>{ format!("Overall: {}", city.risk_level) }</span>
                    <span class={city.fpic_risk.badge_class()}>{ format!("FPIC: {}", city.fpic_risk) }</span>
                </div>
                <p class="label">{"Tax Incentives"}</p>
                <p>{ city.tax_incentives }</p>
                <p class="label">{"Key Highlights:"}</p>
                <ul>
                    { for city.highlights.iter().map(|h| html! { <li>{ *h }</li> }) }
                </ul>
                if selected {
                    <p class="selected-note">{"✓ Selected for Comparison"}</p>
                }
            </div>
        }
    }
}
