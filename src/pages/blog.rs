use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::comparison_table::ComparisonTable;
use crate::Route;

#[function_component(Blog)]
pub fn blog() -> Html {
    html! {
        <div class="blog-page">
            <article class="blog-article">
                <h1>{"LaunchMe vs Launchie: an honest comparison"}</h1>
                <p class="blog-date">{"Updated August 2026"}</p>

                <p>
                    {"Both tools will get a landing page online. The difference is how \
                      much of your launch week they eat while doing it. Here's the \
                      feature-by-feature breakdown."}
                </p>

                <ComparisonTable competitor="launchie" />

                <p>
                    {"The short version: if you want a page live today with a waitlist \
                      attached, LaunchMe does it out of the box. If you need a full CMS, \
                      neither of us is the right tool."}
                </p>

                <p>
                    <Link<Route> to={Route::Home} classes="inline-link">
                        {"← Back to LaunchMe"}
                    </Link<Route>>
                </p>
            </article>

            <style>
                {r#"
                .blog-page {
                    background: #0b1d2d;
                    color: #e6f1fa;
                    min-height: 100vh;
                    padding: 8rem 2rem 4rem;
                }

                .blog-article {
                    max-width: 760px;
                    margin: 0 auto;
                }

                .blog-article h1 {
                    font-size: 2.5rem;
                    margin-bottom: 0.5rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .blog-date {
                    color: #9fb3c8;
                    font-size: 0.9rem;
                    margin-bottom: 2rem;
                }

                .blog-article p {
                    color: #c8d6e5;
                    line-height: 1.7;
                    margin-bottom: 1.25rem;
                }

                .inline-link {
                    color: #1E90FF;
                    text-decoration: none;
                }

                .inline-link:hover {
                    color: #7EB2FF;
                }
                "#}
            </style>
        </div>
    }
}
