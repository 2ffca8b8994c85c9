use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod components {
    pub mod accordion;
    pub mod card_grid;
    pub mod comparison_table;
}
mod gallery {
    pub mod interp;
    pub mod stage;
}
mod pages {
    pub mod blog;
    pub mod landing;
}

use pages::{blog::Blog, landing::Landing};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/blog/launchme-vs-launchie")]
    Blog,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = window_clone.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_top > 40.0);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"LaunchMe"}
                </Link<Route>>
                <div class="nav-right">
                    <Link<Route> to={Route::Blog} classes="nav-link">
                        {"Compare"}
                    </Link<Route>>
                    <a href="/#pricing" class="nav-link">{"Pricing"}</a>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 10;
                    padding: 1rem 2rem;
                    transition: background 0.3s ease;
                }

                .top-nav.scrolled {
                    background: rgba(11, 29, 45, 0.9);
                    backdrop-filter: blur(8px);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.12);
                }

                .nav-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .nav-logo {
                    font-weight: 700;
                    font-size: 1.3rem;
                    color: #fff;
                    text-decoration: none;
                }

                .nav-right {
                    display: flex;
                    gap: 1.5rem;
                }

                .nav-link {
                    color: #9fb3c8;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .nav-link:hover {
                    color: #7EB2FF;
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
