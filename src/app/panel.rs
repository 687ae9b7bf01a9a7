use leptos::prelude::*;
use leptos_router::components::A;

use crate::motion::{enter, Entrance, Spring, Stagger};

/// One grid panel of an inner page, entering from below in turn.
#[component]
pub fn Panel(
    index: usize,
    #[prop(into)] class: String,
    #[prop(default = Stagger::PAGE)] stagger: Stagger,
    #[prop(default = Spring::SMOOTH)] spring: Spring,
    children: Children,
) -> impl IntoView {
    let (motion_class, style) = enter(Entrance::FromBottom, stagger, index, spring);
    view! {
        <section class=format!("{motion_class} {class}") style=style>
            {children()}
        </section>
    }
}

/// Staggered list entry sliding in from the left.
#[component]
pub fn ListItem(index: usize, children: Children) -> impl IntoView {
    let (class, style) = enter(Entrance::FromLeft, Stagger::LIST, index, Spring::SMOOTH);
    view! {
        <li class=class style=style>
            {children()}
        </li>
    }
}

#[component]
pub fn TechTag(name: &'static str) -> impl IntoView {
    view! {
        <span class="bg-[#DBC2A6]/10 rounded-md px-3 py-1 font-sans text-xs uppercase tracking-wider">
            {name}
        </span>
    }
}

/// Link in the small cell under the middle column.
#[component]
pub fn BackLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <A
            href=href
            attr:class="group font-sans text-lg text-[#414A37] flex items-center gap-3 py-2 px-4 rounded-lg hover:bg-[#414A37]/10 transition-colors"
        >
            <i class="extra-arrow-left transition-transform duration-300 group-hover:-translate-x-1"></i>
            <span>{label}</span>
        </A>
    }
}
