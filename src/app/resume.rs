use leptos::prelude::*;
use leptos_meta::Title;

use crate::motion::{Spring, Stagger};
use crate::profile::{NAME, RESUME_DOWNLOAD_NAME, RESUME_SRC};

use super::header::Header;
use super::panel::Panel;

#[component]
pub fn ResumePage() -> impl IntoView {
    view! {
        <Title text="Resume" />
        <Header />

        <Panel
            index=0
            stagger=Stagger::GENTLE
            spring=Spring::EASE
            class="lg:col-span-1 lg:row-start-2 lg:row-span-7 bg-[#414A37] rounded-lg p-6 lg:p-10 flex flex-col justify-center text-[#DBC2A6]"
        >
            <h2 class="text-5xl lg:text-7xl italic">"My " <br /> "Resume"</h2>
            <p class="font-sans text-lg leading-relaxed my-8">
                "Here you can view my full resume, detailing my professional experience, projects, and technical skills. For your convenience, a direct download link is also available."
            </p>
            <a
                href=RESUME_SRC
                download=RESUME_DOWNLOAD_NAME
                class="inline-flex items-center justify-center gap-3 w-full bg-[#DBC2A6] text-[#414A37] font-bold py-4 px-6 rounded-lg uppercase tracking-wider transition-all hover:bg-white hover:scale-105 active:scale-95"
            >
                <i class="extra-download"></i>
                <span>"Download Resume"</span>
            </a>
        </Panel>

        <Panel
            index=1
            stagger=Stagger::GENTLE
            spring=Spring::EASE
            class="min-h-[80vh] lg:min-h-0 lg:col-start-2 lg:col-span-3 lg:row-start-2 lg:row-span-7 bg-[#DBC2A6] rounded-lg p-2"
        >
            <div class="w-full h-full bg-gray-200 rounded-md overflow-hidden">
                <iframe
                    src=RESUME_SRC
                    title=format!("{NAME}'s Resume")
                    class="w-full h-full min-h-[inherit] border-none"
                >
                    <p>"Your browser does not support PDFs. Please download the PDF to view it."</p>
                </iframe>
            </div>
        </Panel>
    }
}
