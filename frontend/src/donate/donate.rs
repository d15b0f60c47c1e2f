use yew::prelude::*;
use web_sys::HtmlInputElement;
use log::error;
use crate::config;
use crate::csrf::read_csrf_token;
use crate::donate::reward_models::{DonationAmount, RewardTiers};
use crate::donate::reward_selector::RewardSelector;

#[function_component]
pub fn DonatePage() -> Html {
    let amount = use_state(|| config::DEFAULT_DONATION.to_string());
    let recurring = use_state(|| "y".to_string());
    let csrf_token = use_memo(|_| read_csrf_token().unwrap_or_default(), ());
    let tiers = use_memo(|_| RewardTiers::from_config(), ());

    let on_amount = {
        let amount = amount.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
        })
    };

    let on_recurring = {
        let recurring = recurring.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            recurring.set(input.value());
        })
    };

    let selector = match &*tiers {
        Ok(tiers) => html! {
            <RewardSelector
                tiers={tiers.clone()}
                amount={DonationAmount::parse(&amount)}
            />
        },
        Err(e) => {
            error!("Reward levels misconfigured: {}", e);
            html! {}
        }
    };

    html! {
        <div class="donate-container">
            <h1>{"Support the project"}</h1>
            <form
                class="donate-form"
                method="post"
                action={format!("{}{}", config::get_backend_url(), config::DONATE_PATH)}
            >
                <input type="hidden" name={config::CSRF_FIELD_NAME} value={(*csrf_token).clone()} />
                <label for="donate-amount">{"Amount (EUR)"}</label>
                <input
                    id="donate-amount"
                    type="number"
                    name="amount"
                    min={config::MIN_DONATION.to_string()}
                    value={(*amount).clone()}
                    oninput={on_amount}
                />
                <div class="donate-recurrence">
                    {
                        config::RECURRENCE_CHOICES.iter().map(|(value, label)| {
                            html! {
                                <label key={*value} class="recurrence-choice">
                                    <input
                                        type="radio"
                                        name="recurring"
                                        value={*value}
                                        checked={*recurring == *value}
                                        onchange={on_recurring.clone()}
                                    />
                                    {*label}
                                </label>
                            }
                        }).collect::<Html>()
                    }
                </div>
                {selector}
                <button type="submit" class="donate-button">{"Donate"}</button>
            </form>
        </div>
    }
}
