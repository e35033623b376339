use shared::{TaxSettings, TaxSettingsSeed};
use yew::prelude::*;

use super::forms::{FeedbackSettings, TaxSettingsPanel};
use super::toast::ToastHost;
use crate::hooks::use_toasts;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

/// Sample amount used to preview the saved currency format
const PREVIEW_AMOUNT: f64 = 1234.5;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum SettingsTab {
    Tax,
    Feedback,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 2] = [SettingsTab::Tax, SettingsTab::Feedback];

    pub fn title(&self) -> &'static str {
        match self {
            SettingsTab::Tax => "Tax & Currency",
            SettingsTab::Feedback => "Feedback",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SettingsPageProps {
    pub api_client: ApiClient,
}

/// Owns the shop's tax settings and hosts both settings forms.
///
/// Switching tabs remounts the tax form, which is what re-seeds it from the
/// latest saved settings.
#[function_component(SettingsPage)]
pub fn settings_page(props: &SettingsPageProps) -> Html {
    let active_tab = use_state(|| SettingsTab::Tax);
    let tax_settings = use_state(|| Option::<TaxSettings>::None);
    let toasts = use_toasts();

    let on_tax_update = {
        let tax_settings = tax_settings.clone();
        Callback::from(move |settings: TaxSettings| {
            Logger::info_with_component(
                "SettingsPage",
                &format!(
                    "Tax settings updated: gst={} rate={} inclusive={} currency={} decimals={}",
                    settings.gst_enabled,
                    settings.default_rate,
                    settings.price_inclusive,
                    settings.currency,
                    settings.decimals,
                ),
            );
            tax_settings.set(Some(settings));
        })
    };

    let tab_button = |tab: SettingsTab| {
        let active_tab = active_tab.clone();
        let onclick = {
            let active_tab = active_tab.clone();
            Callback::from(move |_: MouseEvent| active_tab.set(tab))
        };
        html! {
            <button
                type="button"
                class={classes!("settings-tab", (*active_tab == tab).then_some("active"))}
                {onclick}
            >
                {tab.title()}
            </button>
        }
    };

    let body = match *active_tab {
        SettingsTab::Tax => html! {
            <>
                <TaxSettingsPanel
                    settings={(*tax_settings).clone().map(TaxSettingsSeed::from)}
                    on_update={on_tax_update}
                />
                {if let Some(saved) = (*tax_settings).as_ref() {
                    html! {
                        <p class="settings-preview">
                            {format!("Amounts will display as {}", saved.format_amount(PREVIEW_AMOUNT))}
                        </p>
                    }
                } else { html! {} }}
            </>
        },
        SettingsTab::Feedback => html! {
            <FeedbackSettings
                api_client={props.api_client.clone()}
                on_notify={toasts.push.clone()}
            />
        },
    };

    html! {
        <div class="settings-page">
            <nav class="settings-tabs">
                {for SettingsTab::ALL.iter().map(|tab| tab_button(*tab))}
            </nav>
            <main class="settings-body">
                {body}
            </main>
            <ToastHost toasts={toasts.toasts.clone()} on_dismiss={toasts.dismiss.clone()} />
        </div>
    }
}
