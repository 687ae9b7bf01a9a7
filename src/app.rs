mod about;
mod contact;
mod header;
mod panel;
mod portfolio;
mod projects;
mod resume;
mod skills;
mod social;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::AboutPage;
use contact::ContactPage;
use portfolio::PortfolioPage;
use projects::ProjectsPage;
use resume::ResumePage;
use skills::SkillsPage;

use crate::profile::NAME;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/png" href="/circle-image.png" />
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link
                    rel="stylesheet"
                    href="https://fonts.googleapis.com/css2?family=Lato:wght@400;700&family=Playfair+Display:ital,wght@0,400;0,700;1,400&display=swap"
                />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{NAME} - {title}") />

        <Router>
            <Layout>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=PortfolioPage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/skills") view=SkillsPage />
                    <Route path=path!("/projects") view=ProjectsPage />
                    <Route path=path!("/contact") view=ContactPage />
                    <Route path=path!("/resume") view=ResumePage />
                </Routes>
            </Layout>
        </Router>
    }
}

/// Beige backdrop with the 4x8 page grid. Pages render their panels
/// straight into the grid.
#[component]
fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="bg-[#DBC2A6] w-full min-h-screen lg:h-screen p-2 flex items-center justify-center overflow-x-hidden">
            <main class="w-full h-full relative font-serif flex flex-col gap-4 lg:grid lg:grid-cols-4 lg:grid-rows-8 lg:gap-4 overflow-y-auto lg:overflow-hidden scrollbar-hide">
                {children()}
            </main>
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Not Found" />
        <div class="lg:col-span-4 lg:row-span-8 flex flex-col items-center justify-center gap-6 text-[#414A37]">
            <h1 class="text-6xl italic">"Page not found."</h1>
            <A href="/" attr:class="font-sans uppercase tracking-widest text-sm hover:underline">
                "Back to the portfolio"
            </A>
        </div>
    }
}
