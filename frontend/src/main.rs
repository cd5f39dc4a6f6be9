use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod error;
mod workflow;
mod models;
mod analysis;
mod forms;
mod notify;
mod services;
mod components;
mod pages {
    pub mod home;
    pub mod sections;
}

use components::scroll_to_section;
use components::toaster::Toaster;
use notify::{ToastAction, ToastList, ToastSender};
use pages::{
    home::Home,
    sections::{ContactPage, DashboardPage, FpicPage, LocationOsPage, PricingPage, WaterPage},
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[at("/location-os")]
    LocationOs,
    #[at("/water")]
    Water,
    #[at("/fpic")]
    Fpic,
    #[at("/pricing")]
    Pricing,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route, toasts: ToastSender) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home {toasts} /> }
        },
        Route::Dashboard => {
            info!("Rendering Dashboard page");
            html! { <DashboardPage /> }
        },
        Route::LocationOs => {
            info!("Rendering LocationOS page");
            html! { <LocationOsPage /> }
        },
        Route::Water => {
            info!("Rendering Water case study page");
            html! { <WaterPage /> }
        },
        Route::Fpic => {
            info!("Rendering FPIC page");
            html! { <FpicPage /> }
        },
        Route::Pricing => {
            info!("Rendering Pricing page");
            html! { <PricingPage {toasts} /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <ContactPage {toasts} /> }
        },
        Route::NotFound => {
            info!("Unknown route, rendering Home page");
            html! { <Home {toasts} /> }
        },
    }
}

/// Nav entries: label, landing section id, standalone route.
const NAV_ITEMS: [(&str, &str, Route); 4] = [
    ("Dashboard", "dashboard", Route::Dashboard),
    ("LocationOS", "vector-search", Route::LocationOs),
    ("Case Study", "case-study", Route::Water),
    ("Pricing", "pricing", Route::Pricing),
];

fn section_mounted(id: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .is_some()
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let navigator = use_navigator();
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    let offset = window.as_ref().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                    is_scrolled.set(offset > 10.0);
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = &window {
                if window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .is_err()
                {
                    log::warn!("scroll listener not attached");
                }
            }

            move || {
                if let Some(window) = &window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let go_to = {
        let navigator = navigator.clone();
        let menu_open = menu_open.clone();
        move |section: &'static str, route: Route| {
            let navigator = navigator.clone();
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                menu_open.set(false);
                if section_mounted(section) {
                    scroll_to_section(section);
                } else if let Some(navigator) = &navigator {
                    navigator.push(&route);
                }
            })
        }
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="brand-teal">{"Veracity"}</span>
                    <span class="brand-blue">{"101"}</span>
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_ITEMS.iter().map(|(label, section, route)| html! {
                        <a href="#" class="nav-link" onclick={go_to(*section, route.clone())}>{ *label }</a>
                    }) }
                    <button class="btn btn-primary" onclick={go_to("contact", Route::Contact)}>
                        {"Get Started"}
                    </button>
                </div>
            </div>
        </nav>
    }
}

const GLOBAL_STYLE: &str = r#"
body {
    margin: 0;
    font-family: 'Inter', system-ui, sans-serif;
    background: #f8fafc;
    color: #0f172a;
}
.top-nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    transition: background 0.2s ease;
}
.top-nav.scrolled {
    background: rgba(255, 255, 255, 0.92);
    backdrop-filter: blur(8px);
    border-bottom: 1px solid rgba(148, 163, 184, 0.15);
}
.nav-content {
    max-width: 1200px;
    margin: 0 auto;
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 1rem 1.5rem;
}
.nav-logo {
    font-size: 1.4rem;
    font-weight: 700;
    text-decoration: none;
}
.nav-right {
    display: flex;
    align-items: center;
    gap: 1.5rem;
}
.nav-link {
    color: #334155;
    text-decoration: none;
}
.nav-link:hover {
    color: #0d9488;
}
.burger-menu {
    display: none;
    background: none;
    border: none;
    flex-direction: column;
    gap: 4px;
    cursor: pointer;
}
.burger-menu span {
    width: 22px;
    height: 2px;
    background: #0f172a;
}
.brand-teal { color: #14b8a6; }
.brand-blue { color: #3b82f6; }
.muted { color: #64748b; }
.small { font-size: 0.85rem; }
.hero, .band {
    max-width: 1200px;
    margin: 0 auto;
    padding: 6rem 1.5rem 3rem;
}
.hero h1 {
    font-size: 3.5rem;
    margin-bottom: 1rem;
}
.lead, .section-lead {
    font-size: 1.15rem;
    color: #475569;
    max-width: 760px;
}
.cta-row, .city-selector, .chips, .badges {
    display: flex;
    flex-wrap: wrap;
    gap: 0.75rem;
    margin: 1.5rem 0;
}
.trust-grid, .stat-grid {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 1rem;
    margin-top: 2rem;
}
.trust strong, .stat strong {
    font-size: 1.8rem;
    color: #0d9488;
}
.two-col {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 1.5rem;
}
.three-col {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 1.5rem;
}
.card {
    background: #ffffff;
    border: 1px solid rgba(148, 163, 184, 0.15);
    border-radius: 12px;
    padding: 1.5rem;
}
.card.popular {
    border-color: #14b8a6;
}
.card-header, .row-between, .row {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 0.75rem;
}
.btn {
    border: none;
    border-radius: 8px;
    padding: 0.6rem 1.1rem;
    font-weight: 600;
    cursor: pointer;
    text-decoration: none;
    display: inline-flex;
    align-items: center;
    gap: 0.4rem;
}
.btn:disabled {
    opacity: 0.55;
    cursor: not-allowed;
}
.btn-primary { background: #14b8a6; color: #ffffff; }
.btn-accent { background: #3b82f6; color: #fff; }
.btn-outline {
    background: transparent;
    color: #0f172a;
    border: 1px solid rgba(100, 116, 139, 0.4);
}
.btn-lg { padding: 0.85rem 1.5rem; font-size: 1.05rem; }
.btn-sm { padding: 0.35rem 0.7rem; font-size: 0.85rem; }
.badge {
    display: inline-block;
    padding: 0.2rem 0.6rem;
    border-radius: 999px;
    font-size: 0.75rem;
    font-weight: 600;
    background: rgba(148, 163, 184, 0.15);
}
.badge-low { background: rgba(34, 197, 94, 0.15); color: #15803d; }
.badge-medium { background: rgba(234, 179, 8, 0.15); color: #a16207; }
.badge-high, .badge-red { background: rgba(239, 68, 68, 0.15); color: #b91c1c; }
.badge-orange { background: rgba(249, 115, 22, 0.15); color: #c2410c; }
.badge-blue { background: rgba(59, 130, 246, 0.15); color: #1d4ed8; }
.badge-cyan { background: rgba(6, 182, 212, 0.15); color: #0e7490; }
.badge-purple { background: rgba(168, 85, 247, 0.15); color: #7e22ce; }
.tabs {
    display: flex;
    gap: 0.5rem;
    margin: 1.5rem 0;
    border-bottom: 1px solid rgba(148, 163, 184, 0.2);
}
.tab {
    background: none;
    border: none;
    color: #64748b;
    padding: 0.75rem 1rem;
    cursor: pointer;
    border-bottom: 2px solid transparent;
}
.tab.active {
    color: #0d9488;
    border-bottom-color: #14b8a6;
}
.chip {
    background: rgba(148, 163, 184, 0.1);
    border: 1px solid rgba(148, 163, 184, 0.3);
    color: #334155;
    border-radius: 999px;
    padding: 0.3rem 0.8rem;
    cursor: pointer;
}
.chip.active { background: #14b8a6; color: #ffffff; }
.bar {
    height: 8px;
    background: rgba(148, 163, 184, 0.15);
    border-radius: 4px;
    overflow: hidden;
}
.bar-fill { height: 100%; background: #14b8a6; }
.spinner {
    width: 28px;
    height: 28px;
    border: 3px solid rgba(148, 163, 184, 0.25);
    border-top-color: #14b8a6;
    border-radius: 50%;
    animation: spin 0.8s linear infinite;
}
@keyframes spin { to { transform: rotate(360deg); } }
.alert {
    padding: 0.75rem 1rem;
    border-radius: 8px;
    background: rgba(239, 68, 68, 0.12);
    color: #b91c1c;
    margin: 1rem 0;
}
.alert-ok { background: rgba(34, 197, 94, 0.12); color: #15803d; }
.price { font-size: 2rem; font-weight: 700; }
.strike { text-decoration: line-through; color: #64748b; margin-right: 0.75rem; }
.field-error { color: #f87171; font-size: 0.8rem; }
input, select, textarea {
    width: 100%;
    box-sizing: border-box;
    background: #ffffff;
    color: #0f172a;
    border: 1px solid rgba(148, 163, 184, 0.3);
    border-radius: 8px;
    padding: 0.6rem 0.8rem;
}
input[type=range] { padding: 0; }
.footer {
    border-top: 1px solid rgba(148, 163, 184, 0.15);
    padding: 3rem 1.5rem;
    max-width: 1200px;
    margin: 0 auto;
}
.footer-grid {
    display: grid;
    grid-template-columns: 2fr 1fr 1fr 1fr;
    gap: 2rem;
}
.footer-bottom {
    display: flex;
    justify-content: space-between;
    margin-top: 2rem;
}
.toaster {
    position: fixed;
    right: 1.5rem;
    bottom: 1.5rem;
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
    z-index: 100;
}
@media (max-width: 768px) {
    .burger-menu { display: flex; }
    .nav-right { display: none; }
    .nav-right.mobile-menu-open {
        display: flex;
        flex-direction: column;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        background: #ffffff;
        padding: 1rem;
    }
    .two-col, .three-col, .trust-grid, .stat-grid, .footer-grid {
        grid-template-columns: 1fr;
    }
    .hero h1 { font-size: 2.4rem; }
}
"#;

#[function_component]
fn App() -> Html {
    let toasts = use_reducer(ToastList::default);

    let sender = {
        let dispatcher = toasts.dispatcher();
        use_memo(
            move |_| ToastSender::new(Callback::from(move |t| dispatcher.dispatch(ToastAction::Push(t)))),
            (),
        )
    };

    let on_dismiss = {
        let dispatcher = toasts.dispatcher();
        Callback::from(move |id: u64| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    let render = {
        let sender = (*sender).clone();
        move |route: Route| switch(route, sender.clone())
    };

    html! {
        <BrowserRouter>
            <style>{ GLOBAL_STYLE }</style>
            <Nav />
            <Switch<Route> render={render} />
            <Toaster toasts={toasts.items.clone()} {on_dismiss} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title("Veracity101 | Location Intelligence");
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
