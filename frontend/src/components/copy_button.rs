use yew::prelude::*;
use yew::virtual_dom::AttrValue;
use web_sys::window;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use gloo_timers::future::TimeoutFuture;
use log::{debug, error};

/// How long the button reads "Copied" after a successful write.
pub const COPIED_RESET_MS: u32 = 2_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CopyState {
    #[default]
    Idle,
    Copied,
}

impl CopyState {
    /// State after a clipboard write finished.
    pub fn after_write<E>(self, result: &Result<(), E>) -> Self {
        match result {
            Ok(()) => CopyState::Copied,
            Err(_) => self,
        }
    }

    /// Whether the write needs a reset scheduled after [`COPIED_RESET_MS`].
    pub fn needs_reset(self) -> bool {
        self == CopyState::Copied
    }

    pub fn label(self, idle: &AttrValue) -> AttrValue {
        match self {
            CopyState::Idle => idle.clone(),
            CopyState::Copied => AttrValue::Static("Copied"),
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct CopyButtonProps {
    pub text: AttrValue,
    #[prop_or(AttrValue::Static("Copy"))]
    pub label: AttrValue,
}

#[function_component]
pub fn CopyButton(props: &CopyButtonProps) -> Html {
    let state = use_state(CopyState::default);

    let onclick = {
        let state = state.clone();
        let text = props.text.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let state = state.clone();
            let text = text.clone();
            spawn_local(async move {
                let Some(window) = window() else {
                    return;
                };
                let promise = window.navigator().clipboard().write_text(&text);
                let result = JsFuture::from(promise).await.map(|_| ());
                match &result {
                    Ok(()) => debug!("Copied {} characters to clipboard", text.len()),
                    Err(e) => error!("Clipboard write failed: {:?}", e),
                }

                let next = (*state).after_write(&result);
                state.set(next);
                if next.needs_reset() {
                    TimeoutFuture::new(COPIED_RESET_MS).await;
                    state.set(CopyState::Idle);
                }
            });
        })
    };

    html! {
        <button class={classes!("copy-button", (*state == CopyState::Copied).then(|| "copied"))} {onclick}>
            { state.label(&props.label) }
        </button>
    }
}
