use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use wasm_bindgen_futures::spawn_local;
use crate::config;
use crate::csrf::read_csrf_token;
use crate::billing::billing_form::{BillingAction, BillingForm};
use crate::billing::vat_autofill::VatAutofill;
use crate::billing::vat_client::HttpVatLookup;

#[function_component]
pub fn BillingPage() -> Html {
    let form = use_reducer(BillingForm::default);
    let autofill = use_memo(|_| VatAutofill::new(HttpVatLookup::default()), ());
    let csrf_token = use_memo(|_| read_csrf_token().unwrap_or_default(), ());
    let country_code_ref = use_node_ref();
    let vat_number_ref = use_node_ref();

    let on_country_code = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(BillingAction::CountryCode(input.value()));
        })
    };

    let on_vat_number = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(BillingAction::VatNumber(input.value()));
        })
    };

    let on_country = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.dispatch(BillingAction::Country(select.value()));
        })
    };

    let text_input = |action: fn(String) -> BillingAction| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(action(input.value()));
        })
    };

    // Read both fields straight from the DOM, a change event dispatched right
    // before this one has not re-rendered yet.
    let on_vat_focus_out = {
        let form = form.clone();
        let autofill = autofill.clone();
        let csrf_token = csrf_token.clone();
        let country_code_ref = country_code_ref.clone();
        let vat_number_ref = vat_number_ref.clone();
        Callback::from(move |_: FocusEvent| {
            let (Some(country_code), Some(vat_number)) = (
                country_code_ref.cast::<HtmlInputElement>(),
                vat_number_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };
            let country_code = country_code.value();
            let vat_number = vat_number.value();
            let form = form.clone();
            let autofill = autofill.clone();
            let csrf_token = csrf_token.clone();
            spawn_local(async move {
                if let Some(patch) = autofill
                    .on_focus_out(&country_code, &vat_number, &csrf_token)
                    .await
                {
                    form.dispatch(BillingAction::Autofill(patch));
                }
            });
        })
    };

    html! {
        <div class="billing-container">
            <h1>{"Billing information"}</h1>
            <form class="billing-form" method="post">
                <input type="hidden" name={config::CSRF_FIELD_NAME} value={(*csrf_token).clone()} />
                <div class="vat-row">
                    <label for="vat-country-code">{"VAT ID"}</label>
                    <input
                        id="vat-country-code"
                        class="vat-country-code"
                        name="vat_0"
                        maxlength="2"
                        placeholder="CZ"
                        ref={country_code_ref}
                        value={form.country_code.clone()}
                        onchange={on_country_code}
                        onfocusout={on_vat_focus_out.clone()}
                    />
                    <input
                        id="vat-number"
                        name="vat_1"
                        ref={vat_number_ref}
                        value={form.vat_number.clone()}
                        onchange={on_vat_number}
                        onfocusout={on_vat_focus_out}
                    />
                </div>
                <label for="billing-name">{"Name"}</label>
                <input
                    id="billing-name"
                    name="name"
                    value={form.name.clone()}
                    oninput={text_input(BillingAction::Name)}
                />
                <label for="billing-address">{"Address"}</label>
                <input
                    id="billing-address"
                    name="address"
                    value={form.address.clone()}
                    oninput={text_input(BillingAction::Address)}
                />
                <label for="billing-postcode">{"Postcode"}</label>
                <input
                    id="billing-postcode"
                    name="postcode"
                    value={form.postcode.clone()}
                    oninput={text_input(BillingAction::Postcode)}
                />
                <label for="billing-city">{"City"}</label>
                <input
                    id="billing-city"
                    name="city"
                    value={form.city.clone()}
                    oninput={text_input(BillingAction::City)}
                />
                <label for="billing-country">{"Country"}</label>
                <select id="billing-country" name="country" onchange={on_country}>
                    <option value="" selected={form.country.is_empty()}>{"---------"}</option>
                    {
                        config::COUNTRIES.iter().map(|(code, name)| {
                            html! {
                                <option key={*code} value={*code} selected={form.country == *code}>
                                    {*name}
                                </option>
                            }
                        }).collect::<Html>()
                    }
                </select>
                <button type="submit" class="billing-button">{"Save"}</button>
            </form>
        </div>
    }
}
