//! Single-tool pages. Each wraps one landing section so it can be linked to directly.

use yew::prelude::*;

use crate::components::city_dashboard::CityDashboard;
use crate::components::contact_form::ContactFormView;
use crate::components::fpic_dashboard::FpicDashboard;
use crate::components::location_os::LocationOs;
use crate::components::pricing_tiers::PricingTiers;
use crate::components::water_case_study::WaterCaseStudy;
use crate::notify::ToastSender;

#[derive(Properties, PartialEq)]
pub struct NotifyingPageProps {
    pub toasts: ToastSender,
}

#[derive(Properties, PartialEq)]
struct PageShellProps {
    id: &'static str,
    children: Children,
}

#[function_component(PageShell)]
fn page_shell(props: &PageShellProps) -> Html {
    html! {
        <main class="page">
            <section id={props.id} class="band">
                { for props.children.iter() }
            </section>
        </main>
    }
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    html! { <PageShell id="dashboard"><CityDashboard /></PageShell> }
}

#[function_component(LocationOsPage)]
pub fn location_os_page() -> Html {
    html! {
        <PageShell id="vector-search">
            <h2>{"LocationOS Vera Search"}</h2>
            <LocationOs />
        </PageShell>
    }
}

#[function_component(WaterPage)]
pub fn water_page() -> Html {
    html! { <PageShell id="case-study"><WaterCaseStudy /></PageShell> }
}

#[function_component(FpicPage)]
pub fn fpic_page() -> Html {
    html! { <PageShell id="fpic"><FpicDashboard /></PageShell> }
}

#[function_component(PricingPage)]
pub fn pricing_page(props: &NotifyingPageProps) -> Html {
    html! { <PageShell id="pricing"><PricingTiers toasts={props.toasts.clone()} /></PageShell> }
}

#[function_component(ContactPage)]
pub fn contact_page(props: &NotifyingPageProps) -> Html {
    html! { <PageShell id="contact"><ContactFormView toasts={props.toasts.clone()} /></PageShell> }
}
