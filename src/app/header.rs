use leptos::prelude::*;
use leptos_router::{components::*, hooks::use_location};

use crate::motion::{enter, entrance_style, Entrance, Spring, Stagger};
use crate::profile::{AVATAR_SRC, NAME, SOCIAL_LINKS};

use super::social::TooltipIcon;

const NAV_LINKS: [(&str, &str); 4] = [
    ("/about", "About"),
    ("/skills", "Skills"),
    ("/projects", "Projects"),
    ("/contact", "Contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let (brand_class, brand_style) = enter(Entrance::FromTop, Stagger::HEADER, 0, Spring::BASE);
    let (nav_class, nav_style) = enter(Entrance::FromTop, Stagger::HEADER, 1, Spring::BASE);
    let (actions_class, actions_style) =
        enter(Entrance::FromTop, Stagger::HEADER, 2, Spring::BASE);

    view! {
        <header
            class=format!(
                "{} w-full lg:col-span-4 lg:row-span-1 bg-[#414A37] rounded-lg flex flex-wrap justify-between items-center gap-4 px-8 py-4 lg:py-0 z-20",
                Entrance::FromTop.class(),
            )
            style=entrance_style(Stagger::HEADER, 0, Spring::BASE)
        >
            <div class=brand_class style=brand_style>
                <A href="/" attr:class="flex items-center gap-4 group">
                    <img
                        src=AVATAR_SRC
                        alt=NAME
                        class="w-12 h-12 rounded-full object-cover border-2 border-[#DBC2A6] transition-transform duration-200 group-hover:scale-110"
                    />
                    <h1 class="text-[#DBC2A6] italic text-2xl">{NAME}</h1>
                </A>
            </div>
            <div class="flex flex-wrap items-center gap-8">
                <nav class=nav_class style=nav_style>
                    <ul class="flex space-x-6 font-sans uppercase tracking-widest text-[#DBC2A6]/80 text-xs">
                        {NAV_LINKS
                            .into_iter()
                            .map(|(href, label)| {
                                view! {
                                    <li>
                                        <NavLink href label />
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>
                <div class=format!("{actions_class} flex items-center gap-6") style=actions_style>
                    <A
                        href="/resume"
                        exact=true
                        attr:class="font-sans text-xs uppercase tracking-widest text-[#DBC2A6] border border-[#DBC2A6]/50 rounded-md px-4 py-2 hover:bg-[#DBC2A6] hover:text-[#414A37] aria-[current=page]:bg-[#DBC2A6] aria-[current=page]:text-[#414A37] transition-colors"
                    >
                        "Resume"
                    </A>
                    {SOCIAL_LINKS
                        .into_iter()
                        .map(|link| view! { <TooltipIcon link /> })
                        .collect_view()}
                </div>
            </div>
        </header>
    }
}

/// Nav entry with an underline that only shows on an exact route match.
#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    let location = use_location();
    let is_active = move || location.pathname.get() == href;
    let underline_style = format!(
        "transition-duration: {:.2}s;",
        Spring::UNDERLINE.settle_time().as_secs_f64()
    );

    view! {
        <A href=href attr:class="relative block px-2 py-2 transition-colors hover:text-white">
            {label}
            <span
                class=move || {
                    if is_active() {
                        "absolute bottom-0 left-0 right-0 h-[1.5px] bg-[#DBC2A6] origin-left transition-transform scale-x-100"
                    } else {
                        "absolute bottom-0 left-0 right-0 h-[1.5px] bg-[#DBC2A6] origin-left transition-transform scale-x-0"
                    }
                }
                style=underline_style
            ></span>
        </A>
    }
}
