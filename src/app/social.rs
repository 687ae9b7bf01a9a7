use leptos::{html, prelude::*};
use leptos_use::{use_element_hover, use_mouse_in_element, UseMouseInElementReturn};

use crate::motion::{magnetic_offset, Entrance, Spring, MAGNETIC_STRENGTH};
use crate::profile::SocialLink;

/// Header icon that shows its label above it while hovered.
#[component]
pub fn TooltipIcon(link: SocialLink) -> impl IntoView {
    let el = NodeRef::<html::A>::new();
    let is_hovered = use_element_hover(el);

    view! {
        <a
            node_ref=el
            href=link.href
            target="_blank"
            rel="noopener noreferrer"
            title=link.label
            aria-label=link.label
            class="relative text-[#DBC2A6] hover:text-white transition-all duration-200 hover:-translate-y-0.5 hover:scale-110"
        >
            <i class=format!("{} text-[22px]", link.kind.icon_class())></i>
            <Show when=move || is_hovered.get()>
                <span class=format!(
                    "{} absolute bottom-full left-1/2 -translate-x-1/2 mb-2 whitespace-nowrap bg-black/50 text-white text-xs rounded-md px-2 py-1",
                    Entrance::FadeUp.class(),
                )>
                    {link.label}
                </span>
            </Show>
        </a>
    }
}

/// Social link whose content drifts toward the pointer.
#[component]
pub fn MagneticLink(link: SocialLink) -> impl IntoView {
    let el = NodeRef::<html::A>::new();
    let UseMouseInElementReturn {
        element_x,
        element_y,
        element_width,
        element_height,
        is_outside,
        ..
    } = use_mouse_in_element(el);
    let settle = Spring::MAGNETIC.settle_time().as_secs_f64();

    let style = move || {
        let (x, y) = magnetic_offset(
            (element_x.get(), element_y.get()),
            (element_width.get(), element_height.get()),
            MAGNETIC_STRENGTH,
            is_outside.get(),
        );
        format!("transform: translate({x:.1}px, {y:.1}px); transition: transform {settle:.2}s ease-out;")
    };

    view! {
        <a
            node_ref=el
            href=link.href
            target="_blank"
            rel="noopener noreferrer"
            class="flex items-center gap-2"
            style=style
        >
            <i class=link.kind.icon_class()></i>
            {link.label}
        </a>
    }
}

/// Large bordered button used in the contact page's "Connect With Me" panel.
#[component]
pub fn SocialButton(link: SocialLink) -> impl IntoView {
    view! {
        <a
            href=link.href
            target="_blank"
            rel="noopener noreferrer"
            class="flex items-center gap-4 text-xl lg:text-2xl font-serif font-bold p-4 rounded-md border border-[#DBC2A6]/20 hover:bg-[#DBC2A6]/10 hover:scale-105 hover:translate-x-1 transition-all duration-200"
        >
            <i class=link.kind.icon_class()></i>
            {link.label}
        </a>
    }
}

/// Small uppercase link row used at the bottom of the landing grid.
#[component]
pub fn SocialInline(link: SocialLink) -> impl IntoView {
    view! {
        <a
            href=link.href
            target="_blank"
            rel="noopener noreferrer"
            class="flex items-center gap-2 transition-transform duration-200 hover:scale-105"
        >
            <i class=format!("{} text-[18px]", link.kind.icon_class())></i>
            <span>{link.label}</span>
        </a>
    }
}
