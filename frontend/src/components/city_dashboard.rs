use yew::prelude::*;

use crate::components::extractor::StatementExtractor;
use crate::components::materiality_panel::MaterialityPanel;
use crate::components::scorecard::CityScorecard;
use crate::models::city::{summary_for, DASHBOARD_CITIES, DEFAULT_DASHBOARD_CITY};

#[derive(Clone, Copy, PartialEq)]
enum DashboardTab {
    Scorecard,
    Calculator,
    Extractor,
}

impl DashboardTab {
    const ALL: [DashboardTab; 3] = [DashboardTab::Scorecard, DashboardTab::Calculator, DashboardTab::Extractor];

    fn label(self) -> &'static str {
        match self {
            DashboardTab::Scorecard => "📄 City Scorecard",
            DashboardTab::Calculator => "⚡ Materiality Calculator",
            DashboardTab::Extractor => "⚠️ Impact Extractor",
        }
    }
}

#[function_component(CityDashboard)]
pub fn city_dashboard() -> Html {
    let selected = use_state(|| DEFAULT_DASHBOARD_CITY);
    let tab = use_state(|| DashboardTab::Scorecard);

    let content = match *tab {
        DashboardTab::Scorecard => html! { <CityScorecard summary={summary_for(*selected)} /> },
        DashboardTab::Calculator => html! { <MaterialityPanel /> },
        DashboardTab::Extractor => html! { <StatementExtractor /> },
    };

    html! {
        <div class="city-dashboard">
            <div class="dashboard-header">
                <h2>
                    <span class="brand-teal">{"Veracity"}</span>
                    <span class="brand-blue">{"101"}</span>
                    {" Dashboard"}
                </h2>
                <p class="muted">
                    {"World-class city intelligence for $100M+ investment decisions. \
                      Materiality scoring meets Bloomberg-grade analytics."}
                </p>
            </div>

            <div class="city-selector">
                { for DASHBOARD_CITIES.iter().map(|city| {
                    let id = city.id;
                    let onclick = {
                        let selected = selected.clone();
                        Callback::from(move |_| selected.set(id))
                    };
                    html! {
                        <button
                            class={classes!("btn", if *selected == id { "btn-primary" } else { "btn-outline" })}
                            {onclick}
                        >
                            { city.name }
                            <span class={classes!("score-pill", city.risk.badge_class())}>{ city.score }</span>
                        </button>
                    }
                }) }
            </div>

            <div class="tabs">
                { for DashboardTab::ALL.iter().map(|t| {
                    let t = *t;
                    let onclick = {
                        let tab = tab.clone();
                        Callback::from(move |_| tab.set(t))
                    };
                    html! {
                        <button class={classes!("tab", (*tab == t).then_some("active"))} {onclick}>
                            { t.label() }
                        </button>
                    }
                }) }
            </div>
            <div class="tab-content">{ content }</div>
        </div>
    }
}
