use leptos::prelude::*;
use leptos_meta::Title;

use crate::motion::{Spring, Stagger};
use crate::profile::{Project, PLAY_PULSE, TAALIF, UNISYS};

use super::header::Header;
use super::panel::{BackLink, ListItem, Panel, TechTag};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <Title text="Projects" />
        <Header />

        <Panel
            index=0
            stagger=Stagger::GENTLE
            spring=Spring::EASE
            class="lg:col-span-2 lg:row-start-2 lg:row-span-7 bg-[#414A37] rounded-lg p-6 lg:p-10 flex flex-col justify-between gap-10 text-[#DBC2A6] overflow-y-auto"
        >
            <ProjectCard project=UNISYS />
            <div class="text-center opacity-40">
                <h2 class="text-5xl lg:text-7xl italic flex items-center justify-center gap-4">
                    <i class="extra-lock"></i>
                    "Confidential"
                </h2>
                <h3 class="font-serif font-bold text-2xl mt-2">"Enterprise Applications"</h3>
            </div>
        </Panel>

        <Panel
            index=1
            stagger=Stagger::GENTLE
            spring=Spring::EASE
            class="lg:col-start-3 lg:row-start-2 lg:row-span-6 bg-[#99744A] rounded-lg p-6 lg:p-10 text-white flex flex-col"
        >
            <ProjectCard project=TAALIF />
        </Panel>

        <Panel
            index=2
            stagger=Stagger::GENTLE
            spring=Spring::EASE
            class="lg:col-start-3 lg:row-start-8 flex items-center justify-center py-4 lg:py-0"
        >
            <BackLink href="/about" label="Back to About" />
        </Panel>

        <Panel
            index=3
            stagger=Stagger::GENTLE
            spring=Spring::EASE
            class="lg:col-start-4 lg:row-start-2 lg:row-span-7 bg-[#414A37] rounded-lg p-6 lg:p-10 text-[#DBC2A6] overflow-y-auto"
        >
            <ProjectCard project=PLAY_PULSE />
        </Panel>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let highlights = (!project.highlights.is_empty()).then(|| {
        view! {
            <ul class="space-y-2 font-sans text-base list-disc pl-5">
                {project
                    .highlights
                    .iter()
                    .enumerate()
                    .map(|(index, line)| view! { <ListItem index>{*line}</ListItem> })
                    .collect_view()}
            </ul>
        }
    });
    let link = project.url.map(|url| {
        view! {
            <a
                href=url
                target="_blank"
                rel="noopener noreferrer"
                class="group font-sans text-base flex items-center gap-2 mt-6 opacity-80 hover:opacity-100 transition-opacity"
            >
                <i class="extra-link"></i>
                <span>"View Project"</span>
                <span class="transition-transform duration-300 group-hover:translate-x-1">"→"</span>
            </a>
        }
    });

    view! {
        <div>
            <h2 class="text-4xl lg:text-6xl italic mb-4 flex items-center gap-4">
                <i class=project.icon></i>
                {project.name}
            </h2>
            <h3 class="font-serif font-bold text-2xl mb-2">{project.tagline}</h3>
            <p class="font-sans text-base leading-relaxed mb-4">{project.description}</p>
            {highlights}
            <div class="mt-6">
                <h4 class="font-serif font-bold text-lg mb-3">"Technologies Used:"</h4>
                <div class="flex flex-wrap gap-2">
                    {project.tech.iter().map(|&name| view! { <TechTag name /> }).collect_view()}
                </div>
            </div>
            {link}
        </div>
    }
}
