use leptos::{html, prelude::*};
use leptos_meta::Title;

use crate::contact::Inquiry;
use crate::motion::{enter, Entrance, Spring, Stagger};
use crate::profile::{EMAIL, LOCATION, PHONE, SOCIAL_LINKS};

use super::header::Header;
use super::panel::{BackLink, Panel};
use super::social::SocialButton;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Contact" />
        <Header />

        <Panel
            index=0
            class="w-full lg:w-auto lg:col-span-2 lg:row-start-2 lg:row-span-7 bg-[#414A37] rounded-lg p-6 lg:p-10 flex flex-col gap-8 lg:gap-10 text-[#DBC2A6]"
        >
            <h2 class="text-5xl lg:text-7xl italic mb-6 lg:mb-8">"Get in Touch"</h2>
            <p class="font-sans text-base lg:text-lg leading-relaxed">
                "I'm currently available for freelance projects and open to discussing new opportunities. Whether you have a question or just want to say hi, feel free to reach out. I'll do my best to get back to you!"
            </p>
            <ul class="space-y-4 lg:space-y-6 font-sans text-base lg:text-lg">
                <ContactDetail index=0 icon="extra-phone">
                    <span>{PHONE}</span>
                </ContactDetail>
                <ContactDetail index=1 icon="extra-email">
                    <a href=format!("mailto:{EMAIL}") class="hover:underline break-all">
                        {EMAIL}
                    </a>
                </ContactDetail>
                <ContactDetail index=2 icon="extra-location">
                    <span>{LOCATION}</span>
                </ContactDetail>
            </ul>
        </Panel>

        <Panel
            index=1
            class="w-full lg:w-auto lg:col-start-3 lg:row-start-2 lg:row-span-6 bg-[#99744A] rounded-lg p-6 lg:p-10 text-white flex flex-col"
        >
            <h2 class="text-4xl lg:text-6xl italic mb-6 lg:mb-8">"Send a Message"</h2>
            <ContactForm />
        </Panel>

        <Panel
            index=2
            class="w-full lg:w-auto lg:col-start-3 lg:row-start-8 flex items-center justify-center py-4 lg:py-0"
        >
            <BackLink href="/projects" label="See My Work" />
        </Panel>

        <Panel
            index=3
            class="w-full lg:w-auto lg:col-start-4 lg:row-start-2 lg:row-span-7 bg-[#414A37] rounded-lg p-6 lg:p-10 text-[#DBC2A6] flex flex-col justify-center items-center"
        >
            <h2 class="text-4xl lg:text-6xl italic mb-8 lg:mb-10 text-center">"Connect With Me"</h2>
            <div class="flex flex-col gap-6 lg:gap-8 w-full">
                {SOCIAL_LINKS
                    .into_iter()
                    .map(|link| view! { <SocialButton link /> })
                    .collect_view()}
            </div>
        </Panel>
    }
}

#[component]
fn ContactDetail(index: usize, icon: &'static str, children: Children) -> impl IntoView {
    let (class, style) = enter(Entrance::FromLeft, Stagger::PAGE, index, Spring::SMOOTH);
    view! {
        <li class=format!("{class} flex items-center gap-4") style=style>
            <i class=icon></i>
            {children()}
        </li>
    }
}

/// Name and email, handed to the visitor's mail client as a prefilled draft.
#[component]
fn ContactForm() -> impl IntoView {
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (Some(name), Some(email)) = (name_ref.get_untracked(), email_ref.get_untracked())
        else {
            return;
        };
        match Inquiry::new(&name.value(), &email.value()) {
            Ok(inquiry) => {
                set_error(None);
                if let Err(e) = window().location().set_href(&inquiry.mailto_href()) {
                    log::warn!("couldn't open mail client: {e:?}");
                }
            }
            Err(e) => set_error(Some(e.to_string())),
        }
    };

    let input_class = "w-full bg-white/10 p-3 rounded-md border border-white/20 focus:outline-none focus:ring-2 focus:ring-white transition-all";

    view! {
        <form on:submit=on_submit class="space-y-4 lg:space-y-6 font-sans">
            <div>
                <label for="name" class="block mb-2 text-sm uppercase tracking-wider">
                    "Your Name"
                </label>
                <input node_ref=name_ref type="text" id="name" name="name" required class=input_class />
            </div>
            <div>
                <label for="email" class="block mb-2 text-sm uppercase tracking-wider">
                    "Your Email"
                </label>
                <input
                    node_ref=email_ref
                    type="email"
                    id="email"
                    name="email"
                    required
                    class=input_class
                />
            </div>
            {move || {
                error
                    .get()
                    .map(|msg| {
                        view! {
                            <p class="text-sm bg-black/20 rounded-md px-3 py-2" role="alert">
                                {msg}
                            </p>
                        }
                    })
            }}
            <button
                type="submit"
                class="w-full bg-[#DBC2A6] text-[#414A37] font-bold py-3 rounded-md uppercase tracking-wider transition-all hover:bg-white hover:scale-105 active:scale-95"
            >
                "Send Message"
            </button>
        </form>
    }
}
