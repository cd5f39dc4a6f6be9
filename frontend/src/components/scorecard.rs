use yew::prelude::*;

use crate::analysis::materiality::{Factor, MaterialityFactors};
use crate::models::city::CitySummary;
use crate::models::pricing::format_usd;
use crate::models::risk::ScoreBand;

#[derive(Properties, PartialEq)]
pub struct ScorecardProps {
    pub summary: CitySummary,
}

#[function_component(CityScorecard)]
pub fn city_scorecard(props: &ScorecardProps) -> Html {
    let data = &props.summary;
    let price = format_usd(data.report_price);
    let breakdown = MaterialityFactors::default();
    let (material_class, material_label) = if data.material {
        ("badge badge-orange", "✅ Material")
    } else {
        ("badge badge-low", "❌ Not Material")
    };

    html! {
        <div class="card scorecard">
            <div class="card-header">
                <div>
                    <h3>{ data.name }</h3>
                    <span class={material_class}>
                        { format!("{} (Score: {})", material_label, data.materiality_score) }
                    </span>
                    <div class={classes!("esg", ScoreBand::of(data.esg_score).text_class())}>
                        { format!("ESG: {}/100", data.esg_score) }
                    </div>
                </div>
                <div class="report-price">
                    <div class="muted">{"Report Price"}</div>
                    <div class="price">{ price.clone() }</div>
                </div>
            </div>

            <div class="two-col">
                <div>
                    <h4>{"Risk Assessment"}</h4>
                    <div class="risk-item">
                        <p class="label">{"FPIC Status"}</p>
                        <p class={data.fpic_risk.badge_class()}>{ data.fpic_status }</p>
                        <p class="muted">{ data.fpic_details }</p>
                    </div>
                    <div class="risk-item">
                        <p class="label">{"Transcript Signal"}</p>
                        <p>{ data.transcript_signal }</p>
                    </div>
                    <div class="risk-item">
                        <p class="label">{"Water Security"}</p>
                        <p>{ data.water_security.display() }</p>
                        <p class="muted">{ data.water_details }</p>
                    </div>
                    <div class="risk-item">
                        <p class="label">{"Permit Friction"}</p>
                        <p>{ format!("⚠️ {}", data.permit_friction) }</p>
                    </div>
                </div>

                <div>
                    <h4>{"Opportunities"}</h4>
                    <div class="risk-item positive">
                        <p class="label">{"Tax Benefits"}</p>
                        <p>{ data.tax_benefit }</p>
                    </div>
                    <h5>{"3-Year Growth Forecast"}</h5>
                    <div class="row-between">
                        <span>{"Population Growth"}</span>
                        <span class="score-good">{ format!("📈 {}%", data.growth_forecast.population_pct) }</span>
                    </div>
                    <div class="row-between">
                        <span>{"Tax Base Growth"}</span>
                        <span class="score-good">{ format!("📈 {}%", data.growth_forecast.tax_base_pct) }</span>
                    </div>
                    <h5>{"Materiality Breakdown"}</h5>
                    { for Factor::ALL.iter().map(|f| html! {
                        <div class="row-between">
                            <span>{ f.label() }</span>
                            <span>{ format!("{}/10", breakdown.get(*f)) }</span>
                        </div>
                    }) }
                    <div class="row-between total">
                        <span>{"Final Score"}</span>
                        <span>{ format!("{}/100", data.materiality_score) }</span>
                    </div>
                </div>
            </div>

            <div class="actions">
                <button class="btn btn-primary">{ format!("⬇ Download Full Report - {}", price) }</button>
                <button class="btn btn-outline">{"Compare with: Davis, CA → Fresno, CA"}</button>
            </div>
        </div>
    }
}
