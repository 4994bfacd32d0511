use web_sys::window;
use yew::prelude::*;

pub const LIGHT_THEME_CLASS: &str = "light-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_light(self) -> bool {
        self == Theme::Light
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Dark => "fa-moon",
            Theme::Light => "fa-sun",
        }
    }
}

fn apply_to_body(theme: Theme) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        log::warn!("no <body> to apply the {:?} theme to", theme);
        return;
    };
    let _ = body.class_list().toggle_with_force(LIGHT_THEME_CLASS, theme.is_light());
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_state(Theme::default);

    use_effect_with_deps(
        move |theme| {
            apply_to_body(*theme);
            || ()
        },
        *theme,
    );

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            theme.set((*theme).toggled());
        })
    };

    html! {
        <button class="theme-toggle" onclick={toggle}>
            <i class={classes!("fas", theme.icon_class())}></i>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_loads_dark_with_a_moon() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert!(!Theme::default().is_light());
        assert_eq!(Theme::default().icon_class(), "fa-moon");
    }

    #[test]
    fn toggling_alternates_theme_and_icon() {
        let light = Theme::Dark.toggled();
        assert!(light.is_light());
        assert_eq!(light.icon_class(), "fa-sun");
        assert_eq!(light.toggled(), Theme::Dark);
    }
}
