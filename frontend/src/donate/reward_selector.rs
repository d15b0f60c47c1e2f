use yew::prelude::*;
use log::debug;
use crate::donate::reward_models::{DonationAmount, RewardTiers};

#[derive(Properties, PartialEq, Clone)]
pub struct RewardSelectorProps {
    pub tiers: RewardTiers,
    pub amount: DonationAmount,
}

#[function_component]
pub fn RewardSelector(props: &RewardSelectorProps) -> Html {
    // Derived from the amount on every render, nothing to keep in sync
    let selection = props.tiers.select(props.amount);

    {
        let checked = selection.checked;
        use_effect_with_deps(move |checked| {
            debug!("Reward tier checked: {:?}", checked);
            || ()
        }, checked);
    }

    // The radios mirror the amount, clicking them must not change anything
    let onclick = Callback::from(|e: MouseEvent| e.prevent_default());

    html! {
        <div class="reward-selector">
            <div class="reward-tiers">
                {
                    props.tiers.tiers().iter().enumerate().map(|(index, tier)| {
                        let checked = selection.is_checked(index);
                        let small = selection.is_small(index);
                        html! {
                            <label
                                key={tier.reward.to_string()}
                                onclick={onclick.clone()}
                                class={classes!(
                                    "reward-tier",
                                    checked.then(|| "checked"),
                                    small.then(|| "small")
                                )}
                            >
                                <input
                                    type="radio"
                                    name="reward"
                                    class="reward-input"
                                    hidden=true
                                    value={tier.reward.to_string()}
                                    checked={checked}
                                />
                                <span class="reward-label">{&tier.label}</span>
                                <span class="reward-minimum">{format!("€{}", tier.minimum)}</span>
                            </label>
                        }
                    }).collect::<Html>()
                }
            </div>
            {
                if selection.shows_multiple() {
                    html! {
                        <p class="reward-multiple">
                            {"Your donation qualifies for several rewards, the highest one is selected."}
                        </p>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
