use std::sync::{Arc, Mutex, PoisonError};

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

#[cfg(feature = "hydrate")]
use crate::intro::browser::{BrowserScheduler, BrowserSessionStore};
#[cfg(feature = "hydrate")]
use crate::intro::IntroSequencer;
use crate::intro::IntroPhase;
use crate::motion::{enter, Entrance, Spring, Stagger};
use crate::profile::{ASIDE_SRC, CORE_SERVICES, NAME, PORTRAIT_SRC, SOCIAL_LINKS, TITLE};

use super::header::Header;
use super::social::SocialInline;

type Teardown = Box<dyn FnOnce() + Send>;

/// Landing page. On the first visit of a session a name splash plays
/// before the grid is revealed.
#[component]
pub fn PortfolioPage() -> impl IntoView {
    // None until the client has read session storage, so neither the
    // server render nor hydration flashes the wrong state
    let phase = RwSignal::new(None::<IntroPhase>);
    let teardown = Arc::new(Mutex::new(None::<Teardown>));

    #[cfg(feature = "hydrate")]
    {
        let teardown = teardown.clone();
        Effect::watch(
            || (),
            move |_, _, _| {
                let intro = IntroSequencer::new(BrowserSessionStore);
                let initial = intro.mount(&BrowserScheduler, move || {
                    phase.set(Some(IntroPhase::Revealed));
                });
                phase.set(Some(initial));
                let unmount: Teardown = Box::new(move || intro.unmount());
                *teardown.lock().unwrap_or_else(PoisonError::into_inner) = Some(unmount);
            },
            true,
        );
    }

    on_cleanup(move || {
        let unmount = teardown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(unmount) = unmount {
            unmount();
        }
    });

    let revealed = move || phase.get().is_some_and(IntroPhase::is_revealed);

    view! {
        <Title text="Portfolio" />
        <Show when=revealed>
            <Header />
        </Show>
        <Show when=move || phase.get().is_some()>
            <Portrait revealed=Signal::derive(revealed) />
        </Show>
        <Show when=revealed>
            <LandingGrid />
        </Show>
        <Show when=move || phase.get() == Some(IntroPhase::Splash)>
            <Splash />
        </Show>
    }
}

#[component]
fn Portrait(revealed: Signal<bool>) -> impl IntoView {
    let style = format!(
        "transition-duration: {:.2}s;",
        Spring::LAYOUT.settle_time().as_secs_f64()
    );
    let fade = Entrance::Fade.class();
    view! {
        <div
            class=move || {
                let placement = if revealed.get() {
                    "w-full aspect-[7/10] lg:aspect-auto lg:col-start-3 lg:row-start-2 lg:row-span-4"
                } else {
                    "absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-56 h-80"
                };
                format!(
                    "{placement} bg-[#99744A] rounded-lg overflow-hidden z-10 transition-all ease-out {fade}",
                )
            }
            style=style
        >
            <img src=PORTRAIT_SRC alt=format!("Portrait of {NAME}") class="w-full h-full object-cover" />
        </div>
    }
}

/// Name and title come in just after the portrait.
const SPLASH_STAGGER: Stagger = Stagger::new(200, 0);

#[component]
fn Splash() -> impl IntoView {
    let (class, style) = enter(Entrance::FadeUp, SPLASH_STAGGER, 0, Spring::NAME);
    view! {
        <div
            class=format!(
                "{class} absolute top-[calc(50%+200px)] left-1/2 -translate-x-1/2 -translate-y-1/2 text-center",
            )
            style=style
        >
            <h1 class="text-[#414A37] italic text-2xl">{NAME}</h1>
            <p class="text-[#414A37]/80 font-sans uppercase tracking-widest text-xs mt-1">
                {TITLE}
            </p>
        </div>
    }
}

/// The five panels that enter after the splash.
#[component]
fn LandingGrid() -> impl IntoView {
    let (headline_class, headline_style) =
        enter(Entrance::FromLeft, Stagger::LANDING, 0, Spring::BASE);
    let (services_class, services_style) =
        enter(Entrance::FromRight, Stagger::LANDING, 1, Spring::BASE);
    let (philosophy_class, philosophy_style) =
        enter(Entrance::FromLeft, Stagger::LANDING, 2, Spring::BASE);
    let (cta_class, cta_style) = enter(Entrance::FromLeft, Stagger::LANDING, 3, Spring::BASE);
    let (social_class, social_style) =
        enter(Entrance::FromBottom, Stagger::LANDING, 4, Spring::BASE);

    view! {
        <section
            class=format!(
                "{headline_class} lg:col-span-2 lg:row-span-3 lg:row-start-2 bg-[#414A37] rounded-lg p-8 flex flex-col justify-center",
            )
            style=headline_style
        >
            <h2 class="text-[#DBC2A6] text-4xl lg:text-6xl font-bold leading-tight">
                "Building beautiful & " <br /> "functional digital " <br /> "products."
            </h2>
        </section>

        <section
            class=format!(
                "{services_class} lg:col-start-4 lg:row-start-2 lg:row-span-7 bg-[#414A37] rounded-lg p-4 flex flex-col",
            )
            style=services_style
        >
            <div class="p-2">
                <p class="text-[#DBC2A6] font-bold text-lg">"Core Services"</p>
                <div class="w-full h-40 mt-2 rounded-md overflow-hidden">
                    <img
                        src=ASIDE_SRC
                        class="w-full h-full object-cover"
                        alt="Collaborative design session"
                    />
                </div>
            </div>
            <div class="mt-6 grow flex flex-col justify-around px-2">
                {CORE_SERVICES
                    .into_iter()
                    .map(|service| {
                        view! {
                            <div class="py-2 border-t border-[#DBC2A6]/10">
                                <h3 class="text-[#DBC2A6] font-bold text-md">{service.title}</h3>
                                <p class="text-[#DBC2A6]/80 text-sm font-sans leading-relaxed mt-1">
                                    {service.description}
                                </p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section
            class=format!(
                "{philosophy_class} lg:col-span-2 lg:row-start-5 lg:row-span-2 bg-[#414A37] rounded-lg p-8 flex flex-col justify-center",
            )
            style=philosophy_style
        >
            <h3 class="text-[#DBC2A6] font-bold text-xl mb-4 italic">"My Philosophy"</h3>
            <p class="text-[#DBC2A6]/90 text-base leading-relaxed">
                "I believe in blending clean code with user-centric design to create digital experiences that are not only intuitive and engaging, but also beautiful and efficient."
            </p>
        </section>

        <A href="/contact" attr:class="lg:col-span-2 lg:row-start-7 lg:row-span-2">
            <div
                class=format!(
                    "{cta_class} w-full h-full min-h-40 bg-[#414A37] rounded-lg flex items-center justify-center relative group cursor-pointer",
                )
                style=cta_style
            >
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    class="h-10 w-10 text-[#DBC2A6]/50 absolute top-6 right-6 transition-transform duration-300 group-hover:-translate-y-1 group-hover:translate-x-1"
                    fill="none"
                    viewBox="0 0 24 24"
                    stroke="currentColor"
                    stroke-width="1.5"
                >
                    <path stroke-linecap="round" stroke-linejoin="round" d="M10 4h8v8M18 4L6 18" />
                </svg>
                <h3 class="text-[#DBC2A6] text-5xl lg:text-7xl italic">"Get in touch"</h3>
            </div>
        </A>

        <div
            class=format!(
                "{social_class} lg:col-start-3 lg:row-start-8 flex items-center justify-center gap-16 font-sans uppercase tracking-widest text-[#414A37] text-sm",
            )
            style=social_style
        >
            {SOCIAL_LINKS
                .into_iter()
                .map(|link| view! { <SocialInline link /> })
                .collect_view()}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::profile::{GITHUB_URL, LINKEDIN_URL};
    use leptos_meta::provide_meta_context;
    use leptos_router::{components::Router, location::RequestUrl};

    fn render_at<V: IntoView + 'static>(path: &str, view: impl FnOnce() -> V) -> String {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(RequestUrl::new(path));
            provide_meta_context();
            view().into_view().to_html()
        })
    }

    #[test]
    fn test_landing_grid_has_five_panels_and_profile_links() {
        let html = render_at("/", || {
            view! {
                <Router>
                    <LandingGrid />
                </Router>
            }
        });

        // headline, services and philosophy are sections; the CTA and the
        // social row are the other two panels
        assert_eq!(html.matches("<section").count(), 3);
        assert!(html.contains("functional digital"));
        assert!(html.contains("Core Services"));
        assert!(html.contains("My Philosophy"));
        assert!(html.contains(r#"href="/contact""#));
        assert!(html.contains("Get in touch"));

        assert!(html.contains(&format!(r#"href="{GITHUB_URL}""#)));
        assert!(html.contains(&format!(r#"href="{LINKEDIN_URL}""#)));
        for service in CORE_SERVICES {
            assert!(html.contains(service.title), "missing {}", service.title);
        }
    }

    #[test]
    fn test_server_render_waits_for_client_phase() {
        let html = render_at("/", || {
            view! {
                <Router>
                    <PortfolioPage />
                </Router>
            }
        });

        assert!(!html.contains("<header"));
        assert!(!html.contains(TITLE));
        assert!(!html.contains("Core Services"));
        assert!(!html.contains(PORTRAIT_SRC));
    }
}
