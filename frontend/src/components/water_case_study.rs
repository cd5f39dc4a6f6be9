use yew::prelude::*;

use crate::components::risk_chart::RiskChart;
use crate::models::case_study::{
    timeline, ClaimStatus, CITY_RISKS, DEAD_POOL_FT, LAKE_MEAD_LEVEL_FT, LEGAL_CLAIMS, RISK_FACTORS,
    TimelineStatus,
};
use crate::models::pricing::{format_usd, group_thousands};

#[derive(Clone, Copy, PartialEq)]
enum CaseTab {
    Overview,
    Timeline,
    Cities,
    Legal,
    Reports,
}

impl CaseTab {
    const ALL: [CaseTab; 5] = [
        CaseTab::Overview,
        CaseTab::Timeline,
        CaseTab::Cities,
        CaseTab::Legal,
        CaseTab::Reports,
    ];

    fn label(self) -> &'static str {
        match self {
            CaseTab::Overview => "Overview",
            CaseTab::Timeline => "Timeline",
            CaseTab::Cities => "Cities at Risk",
            CaseTab::Legal => "Legal Analysis",
            CaseTab::Reports => "Reports",
        }
    }
}

struct ReportOffer {
    title: &'static str,
    subtitle: &'static str,
    points: [&'static str; 3],
    price: u32,
}

const REPORTS: [ReportOffer; 3] = [
    ReportOffer {
        title: "Las Vegas Crisis Report",
        subtitle: "Dead pool scenario analysis",
        points: [
            "90% water dependency analysis",
            "Power grid impact assessment",
            "Population displacement risks",
        ],
        price: 1299,
    },
    ReportOffer {
        title: "2028 Olympics Impact",
        subtitle: "Los Angeles water security",
        points: [
            "Global reputation risks",
            "Infrastructure stress analysis",
            "Emergency contingency plans",
        ],
        price: 1599,
    },
    ReportOffer {
        title: "Tribal Rights Analysis",
        subtitle: "30 tribes, 3.2 MAF at stake",
        points: [
            "Unresolved claims analysis",
            "FPIC consultation gaps",
            "Legislative tracking (S.953/H.R.2025)",
        ],
        price: 999,
    },
];

const PACKAGE_PRICE: u32 = 2999;

fn claim_status_class(status: ClaimStatus) -> &'static str {
    match status {
        ClaimStatus::Active => "badge badge-orange",
        ClaimStatus::Filed => "badge badge-medium",
        ClaimStatus::Resolved => "badge badge-low",
    }
}

#[function_component(WaterCaseStudy)]
pub fn water_case_study() -> Html {
    let tab = use_state(|| CaseTab::Overview);
    let status_filter = use_state(|| None::<TimelineStatus>);

    let content = match *tab {
        CaseTab::Overview => view_overview(),
        CaseTab::Timeline => view_timeline(&status_filter),
        CaseTab::Cities => view_cities(),
        CaseTab::Legal => view_legal(),
        CaseTab::Reports => view_reports(),
    };

    html! {
        <div class="water-case-study">
            <div class="case-header">
                <span class="badge badge-cyan">{"💧 Case Study: Water Crisis Intelligence"}</span>
                <h2>{"You Can't Negotiate with Water"}</h2>
                <p class="muted">
                    {"The risk of 895 feet and the existential threat of shared basin risk. How the Colorado River crisis \
                      threatens 40 million people, the 2028 Olympics, and century-old legal compacts."}
                </p>
                <div class="stat-grid">
                    <div class="stat"><strong>{ format!("{} ft", DEAD_POOL_FT) }</strong><p>{"Dead Pool Level"}</p></div>
                    <div class="stat"><strong>{"40M"}</strong><p>{"People at Risk"}</p></div>
                    <div class="stat"><strong>{"2026"}</strong><p>{"Agreements Expire"}</p></div>
                    <div class="stat">
                        <strong>{ format!("{} ft", group_thousands(LAKE_MEAD_LEVEL_FT as u32)) }</strong>
                        <p>{"Current Lake Mead"}</p>
                    </div>
                </div>
            </div>

            <div class="tabs">
                { for CaseTab::ALL.iter().map(|t| {
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

fn view_overview() -> Html {
    html! {
        <div class="two-col">
            <div class="card">
                <h3>{"📉 The Crisis Unfolds"}</h3>
                <h4>{"Dead Pool Scenario"}</h4>
                <p>
                    {"Lake Mead dropping below 895 feet would halt Hoover Dam's water delivery and power generation, \
                      affecting Las Vegas (90% dependent), Los Angeles (2028 Olympics), and millions across the Southwest."}
                </p>
                <h4>{"Legal Compact Crisis"}</h4>
                <p>
                    {"The 1922 Colorado River Compact, based on optimistic flow estimates of 16.4 MAF, faces reality: \
                      actual flows average only 12.3 MAF (2000-2021)."}
                </p>
                <h4>{"Nebraska Warning"}</h4>
                <p>
                    {"The 2025 Nebraska vs. Colorado lawsuit over South Platte River rights serves as a cautionary tale \
                      for Colorado River states facing post-2026 negotiations."}
                </p>
            </div>
            <div class="card">
                <h3>{"⚠️ Risk Assessment Matrix"}</h3>
                <RiskChart />
                { for RISK_FACTORS.iter().map(|risk| html! {
                    <div class="risk-row">
                        <div>
                            <h5>{ risk.category }</h5>
                            <p class="muted small">{ risk.description }</p>
                        </div>
                        <div class="risk-numbers">
                            <div><strong>{ format!("{}%", risk.probability) }</strong><span>{"Probability"}</span></div>
                            <div><strong>{ format!("{}/10", risk.severity) }</strong><span>{"Severity"}</span></div>
                        </div>
                    </div>
                }) }
            </div>
        </div>
    }
}

fn view_timeline(status_filter: &UseStateHandle<Option<TimelineStatus>>) -> Html {
    let chip = |status: Option<TimelineStatus>, label: &'static str| {
        let onclick = {
            let status_filter = status_filter.clone();
            Callback::from(move |_| status_filter.set(status))
        };
        let active = **status_filter == status;
        html! {
            <button class={classes!("chip", active.then_some("active"))} {onclick}>{ label }</button>
        }
    };

    html! {
        <div class="card">
            <h3>{"🕒 Law of the River: 1922-2027"}</h3>
            <p class="muted">{"Interactive timeline of Colorado River legal framework"}</p>
            <div class="chips">
                { chip(None, "All") }
                { for TimelineStatus::ALL.iter().map(|s| chip(Some(*s), s.label())) }
            </div>
            <ol class="timeline">
                { for timeline(**status_filter).into_iter().map(|event| html! {
                    <li class="timeline-event">
                        <span class={event.status.dot_class()}></span>
                        <div>
                            <div class="row">
                                <strong>{ event.year }</strong>
                                <span class="badge">{ event.status.label() }</span>
                            </div>
                            <h4>{ event.title }</h4>
                            <p>{ event.description }</p>
                            <p class="muted">{ event.impact }</p>
                        </div>
                    </li>
                }) }
            </ol>
        </div>
    }
}

fn view_cities() -> Html {
    html! {
        <div class="two-col">
            { for CITY_RISKS.iter().map(|city| html! {
                <div class="card">
                    <div class="card-header">
                        <div>
                            <h4>{ format!("📍 {}, {}", city.name, city.state) }</h4>
                            if city.olympics_impact {
                                <span class="badge badge-purple">{"🏅 2028 Olympics Host"}</span>
                            }
                        </div>
                        <span class={city.risk_level.badge_class()}>{ format!("{} Risk", city.risk_level.label()) }</span>
                    </div>
                    <div class="row-between">
                        <span>{"Water Dependency"}</span>
                        <span>{ format!("{}%", city.water_dependency) }</span>
                    </div>
                    <div class="bar">
                        <div class="bar-fill" style={format!("width: {}%;", city.water_dependency)}></div>
                    </div>
                    <h5>{"Key Threats:"}</h5>
                    <ul>
                        { for city.key_threats.iter().map(|t| html! { <li>{ format!("⚠️ {}", t) }</li> }) }
                    </ul>
                </div>
            }) }
        </div>
    }
}

fn view_legal() -> Html {
    html! {
        <div class="card">
            <h3>{"⚖️ Active Legal Claims & Precedents"}</h3>
            <p class="muted">{"Interstate water disputes and tribal rights litigation"}</p>
            { for LEGAL_CLAIMS.iter().map(|claim| html! {
                <div class="claim" key={claim.id}>
                    <div class="badges">
                        <span class="badge badge-blue">{ claim.topic }</span>
                        <span class={claim_status_class(claim.status)}>{ claim.status.label() }</span>
                        if claim.upstream_impact {
                            <span class="badge badge-red">{"Upstream Impact"}</span>
                        }
                    </div>
                    <h4>{ claim.jurisdiction }</h4>
                    <p>{ claim.summary }</p>
                    <p class="muted small">{ format!("{} vs {}", claim.parties.plaintiff, claim.parties.defendant) }</p>
                    if let Some(url) = claim.url {
                        <a class="btn btn-outline btn-sm" href={url} target="_blank" rel="noopener noreferrer">
                            {"↗ View Case Details"}
                        </a>
                    }
                </div>
            }) }
        </div>
    }
}

fn view_reports() -> Html {
    let bundle: u32 = REPORTS.iter().map(|r| r.price).sum();

    html! {
        <div>
            <div class="three-col">
                { for REPORTS.iter().map(|report| html! {
                    <div class="card">
                        <h4>{ report.title }</h4>
                        <p class="muted">{ report.subtitle }</p>
                        <ul>
                            { for report.points.iter().map(|p| html! { <li>{ *p }</li> }) }
                        </ul>
                        <div class="price">{ format_usd(report.price) }</div>
                        <button class="btn btn-primary">{"⬇ Purchase Report"}</button>
                    </div>
                }) }
            </div>
            <div class="card cta">
                <h3>{"Complete Water Crisis Intelligence Package"}</h3>
                <p>
                    {"Get all three reports plus exclusive access to our interactive risk dashboard, real-time legal updates, \
                      and quarterly briefings on Colorado River developments."}
                </p>
                <div>
                    <span class="strike">{ format_usd(bundle) }</span>
                    <span class="price">{ format_usd(PACKAGE_PRICE) }</span>
                    <span class="badge badge-low">{ format!("Save {}", format_usd(bundle - PACKAGE_PRICE)) }</span>
                </div>
                <button class="btn btn-primary btn-lg">{"⬇ Get Complete Package"}</button>
            </div>
        </div>
    }
}
