use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::accordion::{Accordion, AccordionEntry};
use crate::components::card_grid::CardGrid;
use crate::gallery::stage::GalleryStage;
use crate::Route;

fn faq_items() -> Vec<AccordionEntry> {
    vec![
        AccordionEntry {
            question: AttrValue::from("How long does a launch page take?"),
            answer: html! {
                <p>{"Most teams publish the same day. Pick a template, drop in your \
                     copy and screenshots, and the page is live on your own domain."}</p>
            },
        },
        AccordionEntry {
            question: AttrValue::from("Do I need to write any code?"),
            answer: html! {
                <p>{"No. Everything on this page, including the scroll animation you \
                     just saw, is configured from the dashboard. Developers can still \
                     drop down to custom CSS when they want to."}</p>
            },
        },
        AccordionEntry {
            question: AttrValue::from("Can I collect signups before launch?"),
            answer: html! {
                <>
                    <p>{"Yes. Waitlist forms are built in and sync with the usual \
                         suspects: Mailchimp, ConvertKit, or a plain CSV export."}</p>
                    <p>{"Double opt-in is on by default so your launch list stays clean."}</p>
                </>
            },
        },
        AccordionEntry {
            question: AttrValue::from("What happens after the free trial?"),
            answer: html! {
                <p>{"Your page stays up in read-only mode. Upgrade whenever you're \
                     ready; nothing is deleted."}</p>
            },
        },
    ]
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <header class="hero" id="top">
                <div class="hero-content">
                    <h1>{"Launch pages that launch themselves"}</h1>
                    <p class="hero-subtitle">
                        {"LaunchMe turns a product screenshot and three paragraphs of copy \
                          into a landing page your team is proud to ship."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#pricing" class="hero-cta">{"Get Started"}</a>
                        <a href="#faq" class="faq-link">{"Questions? Read the FAQ"}</a>
                    </div>
                </div>
            </header>

            <GalleryStage
                image_src="/assets/dashboard-hero.png"
                image_alt="LaunchMe dashboard"
                label="Scroll to see the editor up close"
                video_src={Some(AttrValue::from("/assets/dashboard-loop.mp4"))}
                video_poster={Some(AttrValue::from("/assets/dashboard-hero.png"))}
            />

            <section class="section" id="features">
                <div class="container">
                    <h2>{"Everything a launch needs"}</h2>
                    <CardGrid>
                        <div class="lm-card lm-card--square">
                            <h3>{"Templates"}</h3>
                            <p>{"Start from pages that already convert."}</p>
                        </div>
                        <div class="lm-card lm-card--square">
                            <h3>{"Waitlists"}</h3>
                            <p>{"Capture signups before day one."}</p>
                        </div>
                        <div class="lm-card lm-card--square">
                            <h3>{"Analytics"}</h3>
                            <p>{"See which headline actually works."}</p>
                        </div>
                        <div class="lm-card lm-card--wide">
                            <h3>{"Your domain, your brand"}</h3>
                            <p>{"Custom domains, fonts and colors on every plan. No badge \
                                 in the corner unless you want one."}</p>
                        </div>
                    </CardGrid>
                </div>
            </section>

            <section class="section section--alt" id="pricing">
                <div class="container">
                    <h2>{"Simple pricing"}</h2>
                    <p class="section-lead">
                        {"Free while you build, one flat price when you launch. Curious how \
                          we stack up? "}
                        <Link<Route> to={Route::Blog} classes="inline-link">
                            {"Read the comparison."}
                        </Link<Route>>
                    </p>
                </div>
            </section>

            <section class="section" id="faq">
                <div class="container container--narrow">
                    <h2>{"Frequently asked questions"}</h2>
                    <Accordion id="landing-faq" items={faq_items()} />
                </div>
            </section>

            <footer class="footer">
                <p>{"© 2026 LaunchMe. Built for people who'd rather ship."}</p>
            </footer>

            <style>
                {r#"
                html {
                    scroll-behavior: smooth;
                }

                .landing-page {
                    background: #0b1d2d;
                    color: #e6f1fa;
                }

                .hero {
                    min-height: 90vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 6rem 2rem 4rem;
                }

                .hero h1 {
                    font-size: 3.5rem;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .hero-subtitle {
                    font-size: 1.2rem;
                    color: #9fb3c8;
                    max-width: 600px;
                    margin: 0 auto 2rem;
                }

                .hero-cta-group {
                    display: flex;
                    gap: 1.5rem;
                    justify-content: center;
                    align-items: center;
                }

                .hero-cta {
                    background: #1E90FF;
                    color: #fff;
                    padding: 0.9rem 2rem;
                    border-radius: 8px;
                    text-decoration: none;
                    font-weight: 600;
                    transition: background 0.3s ease;
                }

                .hero-cta:hover {
                    background: #7EB2FF;
                }

                .faq-link, .inline-link {
                    color: #1E90FF;
                    text-decoration: none;
                }

                .faq-link:hover, .inline-link:hover {
                    color: #7EB2FF;
                }

                /* Scrub region: 220vh of scroll drives the pinned stage. */
                .gallery-scrub {
                    height: 220vh;
                    position: relative;
                }

                .gallery-stage {
                    position: sticky;
                    top: 0;
                    height: 100vh;
                    overflow: hidden;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    --stage-boost: 1;
                    --stage-overshoot: 12vh;
                }

                .gallery-stage__image {
                    max-width: 70vw;
                    border-radius: 14px;
                    will-change: transform, filter;
                }

                .gallery-stage__video {
                    position: absolute;
                    inset: 0;
                    margin: auto;
                    max-width: 70vw;
                    border-radius: 14px;
                    pointer-events: none;
                    will-change: transform, filter;
                }

                .gallery-stage__overlay {
                    position: absolute;
                    inset: 0;
                    background: #0b1d2d;
                    pointer-events: none;
                }

                .gallery-stage__label {
                    position: absolute;
                    bottom: 8vh;
                    left: 0;
                    right: 0;
                    text-align: center;
                    font-size: 1.1rem;
                    color: #9fb3c8;
                    pointer-events: none;
                }

                @media (max-width: 767px) {
                    .gallery-scrub {
                        height: auto;
                    }

                    .gallery-stage {
                        position: static;
                        height: auto;
                        padding: 3rem 1rem;
                    }

                    .gallery-stage__image {
                        max-width: 100%;
                    }

                    .gallery-stage__video,
                    .gallery-stage__overlay,
                    .gallery-stage__label {
                        display: none;
                    }

                    .hero h1 {
                        font-size: 2.4rem;
                    }
                }

                .section {
                    padding: 5rem 2rem;
                }

                .section--alt {
                    background: #0f2536;
                }

                .section h2 {
                    font-size: 2.5rem;
                    margin-bottom: 2rem;
                    text-align: center;
                }

                .section-lead {
                    text-align: center;
                    color: #9fb3c8;
                    max-width: 640px;
                    margin: 0 auto;
                }

                .container {
                    max-width: 1100px;
                    margin: 0 auto;
                }

                .container--narrow {
                    max-width: 800px;
                }

                .card-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }

                .lm-card {
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(255, 255, 255, 0.12);
                    border-radius: 14px;
                    padding: 1.5rem;
                    overflow: hidden;
                }

                .lm-card--wide {
                    grid-column: 1 / -1;
                }

                .lm-card h3 {
                    margin-bottom: 0.75rem;
                    color: #7EB2FF;
                }

                .lm-card p {
                    color: #9fb3c8;
                    line-height: 1.6;
                }

                @media (max-width: 767px) {
                    .card-grid {
                        grid-template-columns: 1fr;
                    }
                }

                .accordion-item {
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(255, 255, 255, 0.12);
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                    transition: border-color 0.3s ease;
                }

                .accordion-item:hover {
                    border-color: rgba(30, 144, 255, 0.3);
                }

                .accordion-trigger {
                    width: 100%;
                    padding: 1.5rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.2rem;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .accordion-trigger:hover {
                    color: #7EB2FF;
                }

                .toggle-icon {
                    font-size: 1.5rem;
                    color: #7EB2FF;
                }

                .accordion-panel {
                    padding: 0 1.5rem 1.5rem;
                }

                .accordion-panel p {
                    color: #9fb3c8;
                    line-height: 1.6;
                    margin-bottom: 1rem;
                }

                .footer {
                    padding: 3rem 2rem;
                    text-align: center;
                    color: #9fb3c8;
                    border-top: 1px solid rgba(255, 255, 255, 0.12);
                }
                "#}
            </style>
        </div>
    }
}
