use yew::prelude::*;

use crate::components::city_dashboard::CityDashboard;
use crate::components::contact_form::ContactFormView;
use crate::components::extractor::StatementExtractor;
use crate::components::fpic_dashboard::FpicDashboard;
use crate::components::impact_calculator::ImpactCalculator;
use crate::components::location_os::LocationOs;
use crate::components::pricing_tiers::PricingTiers;
use crate::components::scorecard::CityScorecard;
use crate::components::scroll_to_section;
use crate::components::water_case_study::WaterCaseStudy;
use crate::models::city::{summary_for, DEFAULT_DASHBOARD_CITY};
use crate::notify::ToastSender;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub toasts: ToastSender,
}

const PROMISES: [&str; 4] = [
    "\"World-class infrastructure ready for investment\"",
    "\"Streamlined permitting process\"",
    "\"Strong community support for development\"",
    "\"Abundant water resources secured\"",
];

const REALITY: [&str; 4] = [
    "Aging pipes with no replacement plan",
    "Traffic congestion choking logistics",
    "Zero community consultation",
    "Water access stretched to the brink",
];

const TRUST: [(&str, &str); 4] = [
    ("100+", "Cities Analyzed"),
    ("$50B+", "Investments Guided"),
    ("24hr", "Report Delivery"),
    ("SOX", "Compliant"),
];

struct Capability {
    tab: &'static str,
    title: &'static str,
    blurb: &'static str,
    points: [(&'static str, &'static str); 3],
}

const CAPABILITIES: [Capability; 3] = [
    Capability {
        tab: "🔍 Council Transcripts",
        title: "Council Transcript Analysis",
        blurb: "AI-powered sentiment analysis of city council meetings reveals hidden risks, permit delays, \
                and community opposition before they become headlines.",
        points: [
            ("Real-time Monitoring", "Continuous transcript monitoring across 100+ cities"),
            ("Sentiment Scoring", "Risk alerts based on community sentiment analysis"),
            ("Pattern Analysis", "Historical trends and predictive risk modeling"),
        ],
    },
    Capability {
        tab: "⚖️ FPIC Risk",
        title: "FPIC Risk Assessment",
        blurb: "Free, Prior, and Informed Consent violations can halt $100M+ projects. We track tribal \
                consultation gaps and litigation risks.",
        points: [
            ("Territory Mapping", "Comprehensive tribal territory and jurisdiction analysis"),
            ("Timeline Tracking", "Consultation process monitoring and gap identification"),
            ("Legal Precedents", "Case law analysis and litigation risk assessment"),
        ],
    },
    Capability {
        tab: "💧 Water Security",
        title: "Water Security Intelligence",
        blurb: "Beyond drought maps: we analyze legal compacts, interstate disputes, and infrastructure \
                reality to predict water availability.",
        points: [
            ("Legal Compacts", "Interstate water agreements and allocation analysis"),
            ("Dispute Tracking", "Interstate conflicts and litigation monitoring"),
            ("Stress Modeling", "Infrastructure capacity and failure risk analysis"),
        ],
    },
];

#[derive(Clone, Copy, PartialEq)]
enum SampleTab {
    Scorecard,
    Fpic,
    Extractor,
}

#[derive(Clone, Copy, PartialEq)]
enum ContactTab {
    Pricing,
    Contact,
}

fn scroll_button(target: &'static str, class: &'static str, label: &'static str) -> Html {
    html! {
        <button class={class} onclick={Callback::from(move |_| scroll_to_section(target))}>
            { label }
        </button>
    }
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let capability = use_state(|| 0usize);
    let sample_tab = use_state(|| SampleTab::Scorecard);
    let contact_tab = use_state(|| ContactTab::Contact);

    let capability_view = {
        let active = &CAPABILITIES[(*capability).min(CAPABILITIES.len() - 1)];
        html! {
            <div class="card capability">
                <h3>{ active.title }</h3>
                <p class="muted">{ active.blurb }</p>
                <div class="three-col">
                    { for active.points.iter().map(|(title, text)| html! {
                        <div class="capability-point">
                            <h4>{ format!("✓ {}", title) }</h4>
                            <p class="muted small">{ *text }</p>
                        </div>
                    }) }
                </div>
            </div>
        }
    };

    let sample_view = match *sample_tab {
        SampleTab::Scorecard => html! { <CityScorecard summary={summary_for(DEFAULT_DASHBOARD_CITY)} /> },
        SampleTab::Fpic => html! { <FpicDashboard /> },
        SampleTab::Extractor => html! { <StatementExtractor /> },
    };

    let contact_view = match *contact_tab {
        ContactTab::Pricing => html! { <PricingTiers toasts={props.toasts.clone()} /> },
        ContactTab::Contact => html! { <ContactFormView toasts={props.toasts.clone()} /> },
    };

    html! {
        <div class="landing">
            <section id="hero" class="hero">
                <h1>{"Cities Talk Big"}</h1>
                <p class="lead">
                    {"But the information is in the transcripts, not the brochures. Veracity101 reads council \
                      meetings so you don't have to believe the marketing."}
                </p>
                <div class="two-col versus">
                    <div class="promise">
                        <h3>{"Cities Promise:"}</h3>
                        { for PROMISES.iter().map(|p| html! { <p>{ format!("✓ {}", p) }</p> }) }
                    </div>
                    <div class="reality">
                        <h3>{"But in council meetings? You hear the truth:"}</h3>
                        { for REALITY.iter().map(|r| html! { <p>{ format!("❌ {}", r) }</p> }) }
                    </div>
                </div>
                <div class="cta-row">
                    { scroll_button("dashboard", "btn btn-primary btn-lg", "🏢 Try Dashboard") }
                    { scroll_button("vector-search", "btn btn-accent btn-lg", "🔍 Vera Search") }
                    { scroll_button("case-study", "btn btn-outline btn-lg", "📄 Case Study") }
                </div>
                <div class="trust-grid">
                    { for TRUST.iter().map(|(value, label)| html! {
                        <div class="trust">
                            <strong>{ *value }</strong>
                            <p class="muted">{ *label }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="features" class="band">
                <h2>{"Beyond City Marketing"}</h2>
                <p class="section-lead">
                    {"We analyze what cities don't want you to see: council transcripts, permit delays, tribal \
                      consultation gaps, and infrastructure reality."}
                </p>
                <div class="tabs">
                    { for CAPABILITIES.iter().enumerate().map(|(i, c)| {
                        let onclick = {
                            let capability = capability.clone();
                            Callback::from(move |_| capability.set(i))
                        };
                        html! {
                            <button class={classes!("tab", (*capability == i).then_some("active"))} {onclick}>
                                { c.tab }
                            </button>
                        }
                    }) }
                </div>
                { capability_view }
            </section>

            <section id="dashboard" class="band">
                <h2>{"Interactive City Dashboard"}</h2>
                <p class="section-lead">
                    {"Explore city scorecards, materiality calculators, and impact statement extractors in one unified platform."}
                </p>
                <CityDashboard />
            </section>

            <section id="vector-search" class="band">
                <h2>{"LocationOS Vera Search"}</h2>
                <p class="section-lead">
                    {"AI-powered semantic search across 100+ cities. Find locations similar to your requirements \
                      using natural language."}
                </p>
                <LocationOs />
            </section>

            <section id="sample-reports" class="band">
                <h2>{"Sample City Reports"}</h2>
                <p class="section-lead">{"See our intelligence in action with real city analysis examples."}</p>
                <div class="tabs">
                    { for [
                        (SampleTab::Scorecard, "📄 City Scorecard"),
                        (SampleTab::Fpic, "⚖️ FPIC Dashboard"),
                        (SampleTab::Extractor, "🔍 Impact Extractor"),
                    ].into_iter().map(|(tab, label)| {
                        let onclick = {
                            let sample_tab = sample_tab.clone();
                            Callback::from(move |_| sample_tab.set(tab))
                        };
                        html! {
                            <button class={classes!("tab", (*sample_tab == tab).then_some("active"))} {onclick}>
                                { label }
                            </button>
                        }
                    }) }
                </div>
                { sample_view }
            </section>

            <section id="calculator" class="band">
                <ImpactCalculator />
            </section>

            <section id="case-study" class="band">
                <WaterCaseStudy />
            </section>

            <section id="pricing" class="band" data-section="pricing">
                <PricingTiers toasts={props.toasts.clone()} />
            </section>

            <section id="contact" class="band">
                <div class="tabs">
                    { for [(ContactTab::Pricing, "💳 Pricing"), (ContactTab::Contact, "✉️ Contact")]
                        .into_iter()
                        .map(|(tab, label)| {
                            let onclick = {
                                let contact_tab = contact_tab.clone();
                                Callback::from(move |_| contact_tab.set(tab))
                            };
                            html! {
                                <button class={classes!("tab", (*contact_tab == tab).then_some("active"))} {onclick}>
                                    { label }
                                </button>
                            }
                        }) }
                </div>
                { contact_view }
            </section>

            <Footer />
        </div>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let columns: [(&str, [&str; 4]); 3] = [
        ("Platform", ["City Reports", "Risk Assessment", "FPIC Analysis", "Water Intelligence"]),
        ("Company", ["About", "Methodology", "Case Studies", "Contact"]),
        ("Legal", ["Privacy Policy", "Terms of Service", "Data Security", "SOX Compliance"]),
    ];

    html! {
        <footer class="footer">
            <div class="footer-grid">
                <div>
                    <div class="brand">
                        <span class="brand-teal">{"Veracity"}</span>
                        <span class="brand-blue">{"101"}</span>
                    </div>
                    <p class="muted">{"Fortune 500 location intelligence. The map is not the territory."}</p>
                </div>
                { for columns.iter().map(|(heading, items)| html! {
                    <div>
                        <h4>{ *heading }</h4>
                        { for items.iter().map(|item| html! { <div class="muted">{ *item }</div> }) }
                    </div>
                }) }
            </div>
            <div class="footer-bottom">
                <p>{"© 2024 Veracity101. All rights reserved."}</p>
                <p class="muted">{"Enterprise-grade • SOX compliant • 24hr delivery"}</p>
            </div>
        </footer>
    }
}
