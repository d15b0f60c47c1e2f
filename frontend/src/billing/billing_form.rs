use std::rc::Rc;
use yew::prelude::*;
use crate::billing::vat_models::{country_for_vat_prefix, AutofillPatch};
use crate::config;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BillingForm {
    pub country_code: String,
    pub vat_number: String,
    pub country: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub postcode: String,
}

pub enum BillingAction {
    CountryCode(String),
    VatNumber(String),
    Country(String),
    Name(String),
    Address(String),
    City(String),
    Postcode(String),
    Autofill(AutofillPatch),
}

impl Reducible for BillingForm {
    type Action = BillingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut form = (*self).clone();
        match action {
            BillingAction::CountryCode(value) => {
                // Preselect the matching country, leave it alone when there is none
                if let Some(country) = country_for_vat_prefix(&value) {
                    if config::COUNTRIES.iter().any(|(code, _)| *code == country) {
                        form.country = country;
                    }
                }
                form.country_code = value;
            }
            BillingAction::VatNumber(value) => form.vat_number = value,
            BillingAction::Country(value) => form.country = value,
            BillingAction::Name(value) => form.name = value,
            BillingAction::Address(value) => form.address = value,
            BillingAction::City(value) => form.city = value,
            BillingAction::Postcode(value) => form.postcode = value,
            BillingAction::Autofill(patch) => {
                if let Some(name) = patch.name {
                    form.name = name;
                }
                if let Some(address) = patch.address {
                    form.address = address;
                }
                if let Some(city) = patch.city {
                    form.city = city;
                }
                if let Some(postcode) = patch.postcode {
                    form.postcode = postcode;
                }
            }
        }
        form.into()
    }
}
