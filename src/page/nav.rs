use yew::prelude::*;

use crate::page::smooth_scroll::ScrollLink;
use crate::page::theme::ThemeToggle;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#music", "Music"),
    ("#about", "About"),
    ("#contact", "Contact"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| {
            menu_open.set(false);
        })
    };

    html! {
        <nav class="navbar">
            <div class="nav-content">
                <ScrollLink href="#home" class={classes!("logo")} on_follow={close_menu.clone()}>
                    {"Pulse"}
                </ScrollLink>

                <ul class={classes!("nav-links", (*menu_open).then_some("active"))}>
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <li>
                            <ScrollLink href={*href} on_follow={close_menu.clone()}>
                                {*label}
                            </ScrollLink>
                        </li>
                    }) }
                </ul>

                <div class="nav-actions">
                    <ThemeToggle />
                    <button class="hamburger" onclick={toggle_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </div>
        </nav>
    }
}
