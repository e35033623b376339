use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::settings_page::SettingsPage;
use services::api::ApiClient;
use services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());

    use_effect_with((), {
        let base_url = api_client.base_url().to_string();
        move |_| {
            Logger::debug_with_component("App", &format!("Using backend at {}", base_url));
            || ()
        }
    });

    html! {
        <div class="app">
            <header class="header">
                <h1>{"Settings"}</h1>
            </header>
            <SettingsPage api_client={(*api_client).clone()} />
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
