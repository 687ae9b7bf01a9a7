use leptos::prelude::*;
use leptos_meta::Title;

use crate::motion::{entrance_style, Spring, Stagger};
use crate::profile::{Proficiency, PROFICIENCIES};

use super::header::Header;
use super::panel::{BackLink, ListItem, Panel};

#[component]
pub fn SkillsPage() -> impl IntoView {
    view! {
        <Title text="Skills" />
        <Header />

        <Panel
            index=0
            class="w-full lg:w-auto lg:col-span-2 lg:row-start-2 lg:row-span-7 bg-[#414A37] rounded-lg p-6 lg:p-10 flex flex-col gap-8 lg:gap-10 text-[#DBC2A6] overflow-y-auto"
        >
            <h2 class="text-4xl lg:text-6xl italic mb-8">"Core Competencies"</h2>
            <p class="font-sans text-base lg:text-lg leading-relaxed">
                "My expertise is centered around creating modern, responsive, and performant applications. I approach every project with a focus on clean architecture and a seamless user experience."
            </p>
            <ul class="space-y-8">
                <ListItem index=0>
                    <h3 class="font-serif font-bold text-xl lg:text-2xl mb-2">
                        "Front-End Development"
                    </h3>
                    <p class="font-sans text-base lg:text-lg leading-relaxed">
                        "I build dynamic user interfaces with React.js, managing complex state with Redux. I am proficient in modern JavaScript, TypeScript, and creating pixel-perfect layouts with Tailwind CSS."
                    </p>
                </ListItem>
                <ListItem index=1>
                    <h3 class="font-serif font-bold text-xl lg:text-2xl mb-2">
                        "Cross-Platform & Mobile"
                    </h3>
                    <p class="font-sans text-base lg:text-lg leading-relaxed">
                        "Using Flutter and Dart, I create natively compiled applications for mobile from a single codebase, ensuring consistent performance and design across both iOS and Android."
                    </p>
                </ListItem>
            </ul>
        </Panel>

        <Panel
            index=1
            class="w-full lg:w-auto lg:col-start-3 lg:row-start-2 lg:row-span-6 bg-[#99744A] rounded-lg p-6 lg:p-10 text-white flex flex-col gap-8 lg:gap-10"
        >
            <h2 class="text-4xl lg:text-6xl italic mb-8">"Tools & Workflow"</h2>
            <ul class="space-y-6">
                <ListItem index=0>
                    <h3 class="font-serif font-bold text-xl lg:text-2xl mb-2 flex items-center gap-3">
                        <i class="extra-tools"></i>
                        "Version Control & DevOps"
                    </h3>
                    <p class="font-sans text-base leading-relaxed pl-8">
                        "Git, GitHub, GitHub Actions (CI/CD), Firebase, Google Cloud."
                    </p>
                </ListItem>
                <ListItem index=1>
                    <h3 class="font-serif font-bold text-xl lg:text-2xl mb-2 flex items-center gap-3">
                        <i class="extra-palette"></i>
                        "Design & Prototyping"
                    </h3>
                    <p class="font-sans text-base leading-relaxed pl-8">
                        "Tailwind css, Responsive Design Principles, Component-Based Architecture."
                    </p>
                </ListItem>
            </ul>
        </Panel>

        <Panel
            index=2
            class="w-full lg:w-auto lg:col-start-3 lg:row-start-8 flex items-center justify-center py-4 lg:py-0"
        >
            <BackLink href="/about" label="Back to About" />
        </Panel>

        <Panel
            index=3
            class="w-full lg:w-auto lg:col-start-4 lg:row-start-2 lg:row-span-7 bg-[#414A37] rounded-lg p-6 lg:p-10 text-[#DBC2A6] overflow-y-auto"
        >
            <h2 class="text-4xl lg:text-6xl italic mb-10">"Proficiency"</h2>
            <ul class="space-y-8">
                {PROFICIENCIES
                    .into_iter()
                    .enumerate()
                    .map(|(index, skill)| view! { <ProficiencyBar index skill /> })
                    .collect_view()}
            </ul>
        </Panel>
    }
}

/// Bars fill up one after another once the column is in.
const BAR_STAGGER: Stagger = Stagger::new(500, 200);

#[component]
fn ProficiencyBar(index: usize, skill: Proficiency) -> impl IntoView {
    let bar_style = format!(
        "--bar-width: {}%; {} animation-duration: 2s;",
        skill.percent,
        entrance_style(BAR_STAGGER, index, Spring::SMOOTH)
    );
    view! {
        <ListItem index>
            <h3 class="font-serif font-bold text-xl lg:text-2xl mb-2 flex items-center gap-3">
                <i class=skill.icon></i>
                <span>{skill.name}</span>
            </h3>
            <div
                class="w-full bg-[#DBC2A6]/10 rounded-full h-2.5"
                role="progressbar"
                aria-valuenow=skill.percent.to_string()
                aria-valuemin="0"
                aria-valuemax="100"
            >
                <div class="motion-grow-bar bg-[#DBC2A6] h-2.5 rounded-full" style=bar_style></div>
            </div>
        </ListItem>
    }
}
