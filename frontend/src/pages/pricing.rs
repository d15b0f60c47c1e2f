use yew::prelude::*;
use yew::virtual_dom::AttrValue;
use log::debug;
use crate::components::copy_button::CopyButton;

/// Which of a fixed set of tabs is current. Exactly one always is.
#[derive(Clone, Debug, PartialEq)]
pub struct TabSet {
    ids: Vec<AttrValue>,
    current: usize,
}

impl TabSet {
    pub fn new(ids: Vec<AttrValue>) -> Self {
        TabSet { ids, current: 0 }
    }

    pub fn current(&self) -> Option<&AttrValue> {
        self.ids.get(self.current)
    }

    pub fn is_current(&self, id: &str) -> bool {
        self.current().map(|current| current.as_str() == id).unwrap_or(false)
    }

    /// Switch to `id`. Unknown ids leave the current tab in place.
    pub fn select(&mut self, id: &str) -> bool {
        match self.ids.iter().position(|candidate| candidate.as_str() == id) {
            Some(index) if index != self.current => {
                self.current = index;
                true
            }
            _ => false,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct PricingTab {
    pub id: AttrValue,
    pub label: AttrValue,
    pub content: Html,
}

#[derive(Properties, PartialEq)]
pub struct PricingTabsProps {
    pub tabs: Vec<PricingTab>,
}

#[function_component]
pub fn PricingTabs(props: &PricingTabsProps) -> Html {
    let tabs = use_state(|| TabSet::new(props.tabs.iter().map(|tab| tab.id.clone()).collect()));

    html! {
        <div class="pricing-tabs-wrapper">
            <ul class="pricing-tabs">
                {
                    props.tabs.iter().map(|tab| {
                        let onclick = {
                            let tabs = tabs.clone();
                            let id = tab.id.clone();
                            Callback::from(move |_: MouseEvent| {
                                let mut next = (*tabs).clone();
                                if next.select(&id) {
                                    debug!("Pricing tab switched to {}", id);
                                    tabs.set(next);
                                }
                            })
                        };
                        html! {
                            <li
                                key={tab.id.to_string()}
                                class={classes!("tab-link", tabs.is_current(&tab.id).then(|| "current"))}
                                data-tab={tab.id.clone()}
                                {onclick}
                            >
                                {tab.label.clone()}
                            </li>
                        }
                    }).collect::<Html>()
                }
            </ul>
            {
                props.tabs.iter().map(|tab| {
                    html! {
                        <div
                            key={tab.id.to_string()}
                            id={tab.id.clone()}
                            class={classes!("tab-content", tabs.is_current(&tab.id).then(|| "current"))}
                        >
                            {tab.content.clone()}
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

#[function_component]
pub fn Pricing() -> Html {
    let tabs = vec![
        PricingTab {
            id: "monthly".into(),
            label: "Monthly".into(),
            content: html! {
                <div class="pricing-grid">
                    <div class="pricing-card">
                        <h3>{"Basic"}</h3>
                        <span class="amount">{"€19"}</span><span class="period">{"/month"}</span>
                    </div>
                    <div class="pricing-card">
                        <h3>{"Professional"}</h3>
                        <span class="amount">{"€99"}</span><span class="period">{"/month"}</span>
                    </div>
                </div>
            },
        },
        PricingTab {
            id: "yearly".into(),
            label: "Yearly".into(),
            content: html! {
                <div class="pricing-grid">
                    <div class="pricing-card">
                        <h3>{"Basic"}</h3>
                        <span class="amount">{"€190"}</span><span class="period">{"/year"}</span>
                    </div>
                    <div class="pricing-card">
                        <h3>{"Professional"}</h3>
                        <span class="amount">{"€990"}</span><span class="period">{"/year"}</span>
                    </div>
                </div>
            },
        },
    ];

    html! {
        <div class="pricing-container">
            <div class="pricing-header">
                <h1>{"Hosting and support"}</h1>
            </div>
            <PricingTabs tabs={tabs} />
            <div class="pricing-contact">
                <span>{"Questions about invoicing? Write to "}</span>
                <code>{"billing@example.org"}</code>
                <CopyButton text="billing@example.org" />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs() -> TabSet {
        TabSet::new(vec!["monthly".into(), "yearly".into(), "dedicated".into()])
    }

    #[test]
    fn test_first_tab_is_current() {
        let tabs = tabs();
        assert!(tabs.is_current("monthly"));
        assert!(!tabs.is_current("yearly"));
    }

    #[test]
    fn test_select_switches_exactly_one_tab() {
        let mut tabs = tabs();
        assert!(tabs.select("dedicated"));
        assert!(tabs.is_current("dedicated"));
        assert!(!tabs.is_current("monthly"));
        assert!(!tabs.select("dedicated"));
    }

    #[test]
    fn test_unknown_tab_is_ignored() {
        let mut tabs = tabs();
        assert!(!tabs.select("enterprise"));
        assert_eq!(tabs.current().map(|id| id.as_str()), Some("monthly"));

        let mut empty = TabSet::new(Vec::new());
        assert!(!empty.select("monthly"));
        assert_eq!(empty.current(), None);
    }
}
