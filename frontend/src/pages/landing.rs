use yew::prelude::*;
use log::{debug, warn};

use crate::interactions::page::PageInteractions;


#[function_component(Landing)]
pub fn landing() -> Html {
    // Wire up scroll/click/submit behaviour once the markup is in the document,
    // and unhook it when the page goes away.
    {
        use_effect_with_deps(
            move |_| {
                let interactions = match web_sys::window() {
                    Some(window) => match window.document() {
                        Some(document) => Some(PageInteractions::install(&window, &document)),
                        None => {
                            warn!("No document, page interactions disabled");
                            None
                        }
                    },
                    None => {
                        warn!("No window, page interactions disabled");
                        None
                    }
                };
                move || {
                    debug!("Tearing down page interactions");
                    drop(interactions);
                }
            },
            (), // Empty dependencies array means this effect runs only once on mount
        );
    }

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .landing-page {
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        color: #f5f5f5;
                        background: #0d0d0d;
                    }
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }
                    .hero-image {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        z-index: 0;
                        will-change: transform;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 1;
                        text-align: center;
                        padding: 0 1.5rem;
                    }
                    .signup-form {
                        display: flex;
                        gap: 0.5rem;
                        justify-content: center;
                        margin-top: 2rem;
                    }
                    .signup-form input[type="email"] {
                        padding: 0.8rem 1rem;
                        border-radius: 8px;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        background: rgba(0, 0, 0, 0.4);
                        color: #fff;
                        min-width: 260px;
                    }
                    .submit-button {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.8rem 1.4rem;
                        border: none;
                        border-radius: 8px;
                        background: #1e90ff;
                        color: #fff;
                        cursor: pointer;
                        transition: background 0.3s ease;
                    }
                    .submit-button:disabled {
                        cursor: default;
                    }
                    .scroll-indicator {
                        position: absolute;
                        bottom: 2rem;
                        z-index: 1;
                        opacity: 0;
                        animation: indicatorIn 1s ease-out 0.5s forwards;
                        transition: opacity 0.4s ease, transform 0.4s ease;
                    }
                    .scroll-indicator.animated {
                        opacity: 1;
                        animation: none;
                    }
                    .scroll-indicator.hidden {
                        opacity: 0;
                        transform: translateY(20px);
                    }
                    @keyframes indicatorIn {
                        from { opacity: 0; transform: translateY(-10px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .feature-section {
                        padding: 6rem 1.5rem;
                        max-width: 1000px;
                        margin: 0 auto;
                        opacity: 0;
                        transform: translateY(40px);
                        transition: opacity 0.8s ease, transform 0.8s ease;
                    }
                    .feature-section.in-view {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .blend-container {
                        position: relative;
                        max-width: 1000px;
                        margin: 4rem auto;
                    }
                    .blend-container img {
                        display: block;
                        width: 100%;
                        height: auto;
                    }
                    .blend-overlay {
                        position: absolute;
                        inset: 0;
                        opacity: 0;
                    }
                "#}
            </style>

            <header class="hero">
                <img class="hero-image" src="/assets/hero.webp" alt="Golfer wearing a headset on a virtual fairway" />
                <div class="hero-content">
                    <h1>{"Play Any Course From Your Living Room"}</h1>
                    <p class="hero-subtitle">
                        {"Mixed reality golf with real swing tracking. Be first to tee off when we launch."}
                    </p>
                    <form id="signup-form" class="signup-form">
                        <input type="email" placeholder="you@example.com" aria-label="Email" />
                        <button type="submit" class="submit-button">
                            <span>{"Get Early Access"}</span>
                        </button>
                    </form>
                    <a href="#features" class="hero-link">{"Explore the experience"}</a>
                </div>
                <a href="#features" class="scroll-indicator">{"↓"}</a>
            </header>

            <section id="features" class="feature-section" data-aos="fade-up">
                <h2>{"True-to-Life Ball Flight"}</h2>
                <p>{"Every swing is tracked and simulated with wind, spin and lie, so your real game carries over."}</p>
            </section>

            <div id="blend-container" class="blend-container">
                <img src="/assets/room.webp" loading="lazy" alt="An empty living room" />
                <img id="blend-overlay" class="blend-overlay" src="/assets/fairway.webp" loading="lazy" alt="The same room turned into a fairway" />
            </div>

            <section class="feature-section" data-aos="fade-up">
                <h2>{"Famous Holes, Any Weather"}</h2>
                <p>{"Switch between links, parkland and desert courses and change the conditions mid-round."}</p>
            </section>

            <div class="blend-container" data-blend="">
                <img src="/assets/range-day.webp" loading="lazy" alt="Driving range by day" />
                <img class="blend-overlay" data-blend-overlay="" src="/assets/range-dusk.webp" loading="lazy" alt="Driving range at dusk" />
            </div>

            <section class="feature-section" data-aos="fade-up">
                <h2>{"Ready to Tee Off?"}</h2>
                <a href="#signup-form" class="hero-link">{"Back to signup"}</a>
            </section>
        </div>
    }
}
