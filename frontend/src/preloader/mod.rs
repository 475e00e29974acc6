pub mod driver;
pub mod machine;
pub mod scheduler;

use yew::prelude::*;

use driver::{PreloaderDriver, PreloaderEvents};
use machine::Timing;
use scheduler::{GlooScheduler, RandomIncrements};

#[derive(Properties, PartialEq)]
pub struct PreloaderProps {
    pub on_complete: Callback<()>,
}

/// Full-screen overlay with a simulated progress bar, drawn over the app until
/// the progress run completes.
#[function_component(Preloader)]
pub fn preloader(props: &PreloaderProps) -> Html {
    let progress = use_state(|| 0.0_f64);
    let settled = use_state(|| false);

    {
        let events = PreloaderEvents {
            on_progress: {
                let progress = progress.setter();
                Callback::from(move |p: f64| progress.set(p))
            },
            on_settled: {
                let settled = settled.setter();
                Callback::from(move |_| settled.set(true))
            },
            on_complete: props.on_complete.clone(),
        };
        use_effect_with_deps(
            move |_| {
                let timing = Timing::default();
                let driver = PreloaderDriver::start(
                    GlooScheduler,
                    Box::new(RandomIncrements::new(timing.max_increment)),
                    timing,
                    events,
                );
                // Unmount cancels whatever timer is still pending.
                move || drop(driver)
            },
            (),
        );
    }

    let percent = progress.min(100.0);
    let overlay_class = classes!("preloader", (*settled).then_some("preloader--exiting"));

    html! {
        <div class={overlay_class}>
            <div class="preloader__grid"></div>
            { for (0..20).map(|i| html! {
                <span
                    class="preloader__particle"
                    style={format!(
                        "left: {}%; top: {}%; animation-delay: {}s;",
                        (i * 37) % 100,
                        (i * 53) % 100,
                        (i % 7) as f32 * 0.3
                    )}
                />
            }) }

            <div class="preloader__center">
                <div class="preloader__rings">
                    <div class="preloader__ring preloader__ring--outer"></div>
                    <div class="preloader__ring preloader__ring--middle"></div>
                    <div class="preloader__ring preloader__ring--inner"></div>
                    <div class="preloader__core"></div>
                </div>

                <div class="preloader__bar-wrap">
                    <div class="preloader__bar">
                        <div class="preloader__fill" style={format!("width: {}%;", percent)}></div>
                        <div class="preloader__shimmer"></div>
                    </div>
                    <div class="preloader__percent">
                        <span>{format!("{}%", percent.round() as u32)}</span>
                        <p>{"Loading Experience"}</p>
                    </div>
                </div>

                <div class="preloader__dots">
                    <span></span>
                    <span></span>
                    <span></span>
                </div>
            </div>

            <div class="preloader__corner preloader__corner--tl"></div>
            <div class="preloader__corner preloader__corner--tr"></div>
            <div class="preloader__corner preloader__corner--bl"></div>
            <div class="preloader__corner preloader__corner--br"></div>

            <style>
                {r#"
                .preloader {
                    position: fixed;
                    inset: 0;
                    z-index: 9999;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    background: linear-gradient(135deg, #111827, #1e3a8a, #581c87);
                    transition: opacity 0.8s ease-in-out, transform 0.8s ease-in-out;
                }

                .preloader--exiting {
                    opacity: 0;
                    transform: scale(1.1);
                    pointer-events: none;
                }

                .preloader__grid {
                    position: absolute;
                    inset: 0;
                    background-image:
                        linear-gradient(rgba(59, 130, 246, 0.1) 1px, transparent 1px),
                        linear-gradient(90deg, rgba(59, 130, 246, 0.1) 1px, transparent 1px);
                    background-size: 50px 50px;
                    animation: gridMove 2s linear infinite;
                }

                @keyframes gridMove {
                    from { background-position: 0 0; }
                    to { background-position: 50px 50px; }
                }

                .preloader__particle {
                    position: absolute;
                    width: 4px;
                    height: 4px;
                    border-radius: 50%;
                    background: #60a5fa;
                    opacity: 0;
                    animation: particleDrift 3.5s ease-in-out infinite;
                }

                @keyframes particleDrift {
                    0% { opacity: 0; transform: translateY(0); }
                    50% { opacity: 1; }
                    100% { opacity: 0; transform: translateY(120px); }
                }

                .preloader__center {
                    position: relative;
                    z-index: 1;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }

                .preloader__rings {
                    position: relative;
                    width: 128px;
                    height: 128px;
                    margin-bottom: 3rem;
                }

                .preloader__ring {
                    position: absolute;
                    border-radius: 50%;
                    border: 4px solid transparent;
                }

                .preloader__ring--outer {
                    inset: 0;
                    border-top-color: #3b82f6;
                    border-right-color: #8b5cf6;
                    animation: spin 3s linear infinite;
                }

                .preloader__ring--middle {
                    inset: 12px;
                    border-bottom-color: #ec4899;
                    border-left-color: #8b5cf6;
                    animation: spin 2.5s linear infinite reverse;
                }

                .preloader__ring--inner {
                    inset: 24px;
                    border-top-color: #60a5fa;
                    border-right-color: #f472b6;
                    animation: spin 2s linear infinite;
                }

                .preloader__core {
                    position: absolute;
                    inset: 44px;
                    border-radius: 50%;
                    background: linear-gradient(135deg, #3b82f6, #8b5cf6, #ec4899);
                    animation: pulse 2s ease-in-out infinite;
                }

                @keyframes spin {
                    to { transform: rotate(360deg); }
                }

                @keyframes pulse {
                    0%, 100% { transform: scale(1); opacity: 0.8; }
                    50% { transform: scale(1.2); opacity: 1; }
                }

                .preloader__bar-wrap {
                    width: 320px;
                    max-width: 90vw;
                }

                .preloader__bar {
                    position: relative;
                    height: 8px;
                    border-radius: 9999px;
                    overflow: hidden;
                    background: rgba(255, 255, 255, 0.1);
                }

                .preloader__fill {
                    position: absolute;
                    inset: 0 auto 0 0;
                    border-radius: 9999px;
                    background: linear-gradient(90deg, #3b82f6, #8b5cf6, #ec4899);
                    transition: width 0.3s ease-out;
                }

                .preloader__shimmer {
                    position: absolute;
                    inset: 0;
                    width: 50%;
                    background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.3), transparent);
                    animation: shimmer 1.5s linear infinite;
                }

                @keyframes shimmer {
                    from { transform: translateX(-100%); }
                    to { transform: translateX(200%); }
                }

                .preloader__percent {
                    margin-top: 1rem;
                    text-align: center;
                    animation: breathe 2s ease-in-out infinite;
                }

                .preloader__percent span {
                    font-size: 1.5rem;
                    font-weight: 600;
                    background: linear-gradient(90deg, #60a5fa, #a78bfa, #f472b6);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .preloader__percent p {
                    margin-top: 0.5rem;
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.6);
                }

                @keyframes breathe {
                    0%, 100% { opacity: 0.5; }
                    50% { opacity: 1; }
                }

                .preloader__dots {
                    display: flex;
                    gap: 0.5rem;
                    margin-top: 2rem;
                }

                .preloader__dots span {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: #60a5fa;
                    animation: dot 1.5s ease-in-out infinite;
                }

                .preloader__dots span:nth-child(2) { animation-delay: 0.2s; }
                .preloader__dots span:nth-child(3) { animation-delay: 0.4s; }

                @keyframes dot {
                    0%, 100% { transform: scale(1); opacity: 0.3; }
                    50% { transform: scale(1.5); opacity: 1; }
                }

                .preloader__corner {
                    position: absolute;
                    width: 128px;
                    height: 128px;
                }

                .preloader__corner--tl { top: 0; left: 0; border-top: 2px solid rgba(59, 130, 246, 0.5); border-left: 2px solid rgba(59, 130, 246, 0.5); }
                .preloader__corner--tr { top: 0; right: 0; border-top: 2px solid rgba(139, 92, 246, 0.5); border-right: 2px solid rgba(139, 92, 246, 0.5); }
                .preloader__corner--bl { bottom: 0; left: 0; border-bottom: 2px solid rgba(236, 72, 153, 0.5); border-left: 2px solid rgba(236, 72, 153, 0.5); }
                .preloader__corner--br { bottom: 0; right: 0; border-bottom: 2px solid rgba(59, 130, 246, 0.5); border-right: 2px solid rgba(59, 130, 246, 0.5); }
                "#}
            </style>
        </div>
    }
}
