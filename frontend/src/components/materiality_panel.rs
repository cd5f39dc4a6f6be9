use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::analysis::materiality::{Factor, MaterialityFactors, DASHBOARD_THRESHOLD, FACTOR_MAX};

#[function_component(MaterialityPanel)]
pub fn materiality_panel() -> Html {
    let factors = use_state(MaterialityFactors::default);
    let score = factors.score();

    let slider = |factor: Factor| {
        let oninput = {
            let factors = factors.clone();
            Callback::from(move |e: InputEvent| {
                let raw = e.target_unchecked_into::<HtmlInputElement>().value();
                let mut next = *factors;
                next.set(factor, raw.parse::<f32>().unwrap_or(f32::NAN));
                factors.set(next);
            })
        };
        let value = factors.get(factor);
        let (low, high) = factor.bounds();

        html! {
            <div class="slider">
                <label>{ format!("{} (0-10)", factor.label()) }</label>
                <input
                    type="range"
                    min="0"
                    max={FACTOR_MAX.to_string()}
                    step="0.1"
                    value={value.to_string()}
                    {oninput}
                />
                <div class="row-between small">
                    <span>{ low }</span>
                    <span class="value">{ format!("{:.1}", value) }</span>
                    <span>{ high }</span>
                </div>
            </div>
        }
    };

    html! {
        <div class="card materiality-panel">
            <div class="card-header">
                <h3>{"Materiality Calculator"}</h3>
                <p class="muted">
                    {"Calculate materiality scores using our proprietary formula: Scale × Scope × Irremediability × Likelihood"}
                </p>
            </div>
            <div class="two-col">
                <div>
                    <h4>{"Input Parameters"}</h4>
                    { for Factor::ALL.iter().map(|f| slider(*f)) }
                </div>
                <div>
                    <h4>{"Calculated Results"}</h4>
                    <div class="metric">
                        <div class="metric-value">{ format!("{:.0}", score) }</div>
                        <p>{"Materiality Score"}</p>
                    </div>
                    { for Factor::ALL.iter().map(|f| {
                        let value = factors.get(*f);
                        html! {
                            <div class="row-between">
                                <span>{ format!("{} ({:.1})", f.label(), value) }</span>
                                <span class="muted">{ f.descriptor(value) }</span>
                            </div>
                        }
                    }) }
                    if factors.is_material() {
                        <div class="alert">{"⚠️ Material Impact Detected"}</div>
                    } else {
                        <div class="alert alert-ok">{"✓ Below Materiality Threshold"}</div>
                    }
                    <p class="muted small">
                        { format!(
                            "Score above {} indicates material impact requiring disclosure and risk mitigation strategies.",
                            DASHBOARD_THRESHOLD,
                        ) }
                    </p>
                    <button class="btn btn-primary">{"⬇ Export Calculation Report"}</button>
                </div>
            </div>
        </div>
    }
}
