use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;
use crate::config;
use crate::Route;

/// Open/closed state of the mobile menu and the language flyout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavState {
    pub menu_open: bool,
    pub langs_open: bool,
}

pub enum NavAction {
    ToggleMenu,
    CloseMenu,
    ToggleLangs,
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = *self;
        match action {
            NavAction::ToggleMenu => state.menu_open = !state.menu_open,
            NavAction::CloseMenu => state.menu_open = false,
            NavAction::ToggleLangs => state.langs_open = !state.langs_open,
        }
        state.into()
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let state = use_reducer(NavState::default);

    let toggle_menu = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            state.dispatch(NavAction::ToggleMenu);
        })
    };

    let close_menu = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            state.dispatch(NavAction::CloseMenu);
        })
    };

    let toggle_langs = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            state.dispatch(NavAction::ToggleLangs);
        })
    };

    html! {
        <nav class={classes!("top-nav", state.menu_open.then(|| "open-mobile"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Home"}
                </Link<Route>>

                <button class="menu-show" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class="nav-right">
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Pricing} classes="nav-link">
                            {"Pricing"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Donate} classes="nav-link">
                            {"Donate"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Billing} classes="nav-link">
                            {"Billing"}
                        </Link<Route>>
                    </div>
                    <div class={classes!("langs", state.langs_open.then(|| "opened"))}>
                        <a href="#" class="open-langs" onclick={toggle_langs}>{"Language"}</a>
                        {
                            if state.langs_open {
                                html! {
                                    <ul class="langs-list">
                                        {
                                            config::LANGUAGES.iter().map(|(code, name)| {
                                                html! {
                                                    <li key={*code}>
                                                        <a href={format!("/{}/", code)}>{*name}</a>
                                                    </li>
                                                }
                                            }).collect::<Html>()
                                        }
                                    </ul>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: NavState, action: NavAction) -> NavState {
        *Rc::new(state).reduce(action)
    }

    #[test]
    fn test_menu_toggles_open_and_closed() {
        let state = reduce(NavState::default(), NavAction::ToggleMenu);
        assert!(state.menu_open);
        let state = reduce(state, NavAction::ToggleMenu);
        assert!(!state.menu_open);
    }

    #[test]
    fn test_close_menu_is_idempotent() {
        let open = NavState {
            menu_open: true,
            langs_open: false,
        };
        let state = reduce(open, NavAction::CloseMenu);
        assert!(!state.menu_open);
        assert_eq!(reduce(state, NavAction::CloseMenu), state);
    }

    #[test]
    fn test_language_flyout_is_independent_of_menu() {
        let state = reduce(NavState::default(), NavAction::ToggleLangs);
        assert_eq!(
            state,
            NavState {
                menu_open: false,
                langs_open: true,
            }
        );
        let state = reduce(state, NavAction::ToggleMenu);
        let state = reduce(state, NavAction::CloseMenu);
        assert!(state.langs_open);
        let state = reduce(state, NavAction::ToggleLangs);
        assert!(!state.langs_open);
    }
}
