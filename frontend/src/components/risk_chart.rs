use std::error::Error;

use log::warn;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::models::case_study::{RiskFactor, RISK_FACTORS};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 360;

fn severity_color(severity: u8) -> RGBColor {
    match severity {
        9..=u8::MAX => RGBColor(220, 38, 38),
        7..=8 => RGBColor(234, 88, 12),
        _ => RGBColor(202, 138, 4),
    }
}

fn draw(canvas: HtmlCanvasElement, factors: &[RiskFactor]) -> Result<(), Box<dyn Error>> {
    canvas.set_width(WIDTH);
    canvas.set_height(HEIGHT);

    let backend = CanvasBackend::with_canvas_object(canvas).ok_or("canvas has no 2d context")?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption("Risk Factor Probability", ("sans-serif", 20))
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0..factors.len(), 0u32..100u32)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(factors.len())
        .x_label_formatter(&|x| {
            factors
                .get(*x)
                .map(|f| f.category.to_string())
                .unwrap_or_default()
        })
        .y_desc("Probability (%)")
        .y_label_formatter(&|y| format!("{}%", y))
        .draw()?;

    // Bar colour follows severity.
    chart.draw_series(factors.iter().enumerate().map(|(i, f)| {
        Rectangle::new(
            [(i, 0), (i + 1, u32::from(f.probability))],
            severity_color(f.severity).filled(),
        )
    }))?;

    root.present()?;
    Ok(())
}

#[function_component(RiskChart)]
pub fn risk_chart() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    if let Err(e) = draw(canvas, &RISK_FACTORS) {
                        warn!("risk chart not drawn: {}", e);
                    }
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="risk-chart">
            <canvas
                ref={canvas_ref}
                width={WIDTH.to_string()}
                height={HEIGHT.to_string()}
                style="max-width: 100%;"
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_bands() {
        let rgb = |s: u8| {
            let RGBColor(r, g, b) = severity_color(s);
            (r, g, b)
        };
        assert_eq!(rgb(10), (220, 38, 38));
        assert_eq!(rgb(8), (234, 88, 12));
        assert_eq!(rgb(3), (202, 138, 4));
    }
}
