use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::motion::{enter, Entrance, Spring, Stagger};
use crate::profile::{EMAIL, PHONE, SKILL_AREAS, SOCIAL_LINKS};

use super::header::Header;
use super::panel::ListItem;
use super::social::MagneticLink;

#[component]
pub fn AboutPage() -> impl IntoView {
    let (left_class, left_style) = enter(Entrance::FromBottom, Stagger::PAGE, 0, Spring::SMOOTH);
    let (middle_class, middle_style) =
        enter(Entrance::FromBottom, Stagger::PAGE, 1, Spring::SMOOTH);
    let (social_class, social_style) =
        enter(Entrance::FromBottom, Stagger::PAGE, 2, Spring::SMOOTH);
    let (right_class, right_style) = enter(Entrance::FromBottom, Stagger::PAGE, 3, Spring::SMOOTH);

    view! {
        <Title text="About" />
        <Header />

        <section
            class=format!(
                "{left_class} lg:col-span-2 lg:row-start-2 lg:row-span-7 bg-[#414A37] rounded-lg p-6 lg:p-10 flex flex-col gap-10 text-[#DBC2A6] overflow-y-auto",
            )
            style=left_style
        >
            <div>
                <h2 class="text-4xl lg:text-6xl italic mb-8">"My Mission"</h2>
                <p class="font-sans text-lg leading-relaxed">
                    "As a developer, I am driven by the challenge of transforming complex problems into beautiful, intuitive, and functional digital experiences. With a year of focused experience in the React and Flutter ecosystems, I specialize in building high-performance, scalable applications."
                </p>
            </div>
            <div>
                <h2 class="text-4xl lg:text-6xl italic mb-8">"Experience"</h2>
                <h3 class="font-serif font-bold text-2xl">"Front End Developer, RegenSportz"</h3>
                <div class="flex items-center gap-6 text-sm text-[#DBC2A6]/70 mt-3 mb-5 font-sans">
                    <span class="flex items-center gap-2">
                        <i class="extra-calendar"></i>
                        "NOV 2024 - OCT 2025"
                    </span>
                    <span class="flex items-center gap-2">
                        <i class="extra-location"></i>
                        "NOIDA, INDIA"
                    </span>
                </div>
                <ul class="font-sans text-lg leading-relaxed space-y-3 list-disc pl-5">
                    <ListItem index=0>
                        "Engineered responsive components, accelerating development by 30%."
                    </ListItem>
                    <ListItem index=1>
                        "Managed application state efficiently using Redux, optimizing data flow."
                    </ListItem>
                </ul>
            </div>
        </section>

        <section
            class=format!(
                "{middle_class} lg:col-start-3 lg:row-start-2 lg:row-span-6 bg-[#99744A] rounded-lg p-6 lg:p-10 text-white flex flex-col justify-between gap-8",
            )
            style=middle_style
        >
            <div>
                <h2 class="text-4xl lg:text-6xl italic mb-8">"Education"</h2>
                <h3 class="font-serif font-bold text-2xl">"B.Sc. in Computer Science"</h3>
                <p class="text-base font-sans mt-2">"IIMT COLLEGE OF SCIENCE AND TECHNOLOGY"</p>
                <div class="flex items-center gap-2 text-sm text-white/70 my-2 font-sans">
                    <i class="extra-calendar"></i>
                    "SEP 2022 - JUN 2025"
                </div>
            </div>
            <div>
                <h2 class="text-4xl lg:text-6xl italic mb-8">"Contact"</h2>
                <div class="font-sans text-base space-y-2">
                    <p>"Phone: " {PHONE}</p>
                    <p>"Email: " {EMAIL}</p>
                </div>
            </div>
        </section>

        <div
            class=format!(
                "{social_class} lg:col-start-3 lg:row-start-8 flex items-center justify-center gap-8 py-4 lg:py-0 font-sans uppercase tracking-widest text-sm text-[#414A37]",
            )
            style=social_style
        >
            {SOCIAL_LINKS
                .into_iter()
                .map(|link| view! { <MagneticLink link /> })
                .collect_view()}
        </div>

        <section
            class=format!(
                "{right_class} lg:col-start-4 lg:row-start-2 lg:row-span-7 bg-[#414A37] rounded-lg p-6 lg:p-10 text-[#DBC2A6] flex flex-col justify-between",
            )
            style=right_style
        >
            <div>
                <h2 class="text-4xl lg:text-6xl italic mb-10">"Technical Skills"</h2>
                <ul class="space-y-6">
                    {SKILL_AREAS
                        .into_iter()
                        .enumerate()
                        .map(|(index, area)| {
                            view! {
                                <ListItem index>
                                    <div class="flex items-start gap-4">
                                        <i class=format!(
                                            "{} text-lg text-[#DBC2A6]/70 mt-1",
                                            area.icon,
                                        )></i>
                                        <div>
                                            <h3 class="text-xl font-bold mb-1">{area.title}</h3>
                                            <p class="font-sans text-sm text-[#DBC2A6]/80">
                                                {area.summary}
                                            </p>
                                        </div>
                                    </div>
                                </ListItem>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
            <div class={Entrance::Fade.class()} style="animation-delay: 1s;">
                <A
                    href="/skills"
                    attr:class="group font-sans text-base text-[#DBC2A6]/80 flex items-center justify-center gap-2 mt-8 py-3 rounded-lg hover:bg-[#DBC2A6]/10 transition-colors duration-300"
                >
                    <span>"View All Skill Sets"</span>
                    <i class="extra-arrow-right transition-transform duration-300 group-hover:translate-x-1"></i>
                </A>
            </div>
        </section>
    }
}
