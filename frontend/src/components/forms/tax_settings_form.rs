use shared::{DecimalPlaces, PriceLogic, TaxRate, TaxSettings, TaxSettingsForm, TaxSettingsSeed};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::services::logging::Logger;

const COMPONENT: &str = "TaxSettingsForm";

#[derive(Properties, PartialEq)]
pub struct TaxSettingsPanelProps {
    /// Read once on mount; later changes are not picked up
    #[prop_or_default]
    pub settings: Option<TaxSettingsSeed>,
    pub on_update: Callback<TaxSettings>,
}

#[function_component(TaxSettingsPanel)]
pub fn tax_settings_panel(props: &TaxSettingsPanelProps) -> Html {
    let seed = props.settings.clone();
    let form = use_mut_ref(move || TaxSettingsForm::seeded(seed.as_ref()));
    let redraw = use_force_update();

    let on_gst_toggle = {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: Event| {
            form.borrow_mut().toggle_gst();
            redraw.force_update();
        })
    };

    let on_rate_change = {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<TaxRate>() {
                Ok(rate) => form.borrow_mut().set_default_rate(rate),
                Err(err) => Logger::warn_with_component(COMPONENT, &err.to_string()),
            }
            redraw.force_update();
        })
    };

    let on_price_logic_change = {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<PriceLogic>() {
                Ok(logic) => form.borrow_mut().set_price_logic(logic),
                Err(err) => Logger::warn_with_component(COMPONENT, &err.to_string()),
            }
            redraw.force_update();
        })
    };

    let on_currency_input = {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.borrow_mut().set_currency(input.value());
            redraw.force_update();
        })
    };

    let on_decimals_change = {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<DecimalPlaces>() {
                Ok(decimals) => form.borrow_mut().set_decimals(decimals),
                Err(err) => Logger::warn_with_component(COMPONENT, &err.to_string()),
            }
            redraw.force_update();
        })
    };

    let on_save = {
        let form = form.clone();
        let on_update = props.on_update.clone();
        Callback::from(move |_: MouseEvent| {
            form.borrow().update(|settings| on_update.emit(settings));
        })
    };

    let state = form.borrow();
    let gst_controls_enabled = state.gst_controls_enabled();
    let current_rate = state.default_rate();
    let current_logic = state.price_logic();
    let current_decimals = state.decimals();

    html! {
        <div class="tax-settings">
            <section class="settings-card">
                <div class="settings-card-header">
                    <div>
                        <h3>{"GST Configuration"}</h3>
                        <p class="settings-hint">{"Enable Goods & Services Tax calculations"}</p>
                    </div>
                    <label class="toggle">
                        <input
                            type="checkbox"
                            checked={state.gst_enabled()}
                            onchange={on_gst_toggle}
                        />
                        <span class="toggle-slider"></span>
                    </label>
                </div>

                // Values stay put while disabled; only interaction is blocked
                <fieldset
                    class={classes!("gst-fields", (!gst_controls_enabled).then_some("is-disabled"))}
                    disabled={!gst_controls_enabled}
                >
                    <div class="form-group">
                        <label for="default-tax-rate">{"Default Tax Rate"}</label>
                        <select id="default-tax-rate" onchange={on_rate_change}>
                            {for TaxRate::OPTIONS.iter().map(|rate| html! {
                                <option value={rate.as_str()} selected={*rate == current_rate}>
                                    {rate.label()}
                                </option>
                            })}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="price-logic">{"Price Input Logic"}</label>
                        <select id="price-logic" onchange={on_price_logic_change}>
                            {for PriceLogic::OPTIONS.iter().map(|logic| html! {
                                <option value={logic.as_str()} selected={*logic == current_logic}>
                                    {logic.label()}
                                </option>
                            })}
                        </select>
                        <small class="form-text">{"How do you enter product prices?"}</small>
                    </div>
                </fieldset>
            </section>

            <section class="settings-card">
                <h3>{"Currency & Locale"}</h3>
                <div class="form-row">
                    <div class="form-group">
                        <label for="currency-symbol">{"Currency Symbol"}</label>
                        <input
                            id="currency-symbol"
                            type="text"
                            value={state.currency().to_string()}
                            oninput={on_currency_input}
                        />
                    </div>
                    <div class="form-group">
                        <label for="decimal-places">{"Decimal Places"}</label>
                        <select id="decimal-places" onchange={on_decimals_change}>
                            {for DecimalPlaces::OPTIONS.iter().map(|places| html! {
                                <option value={places.as_str()} selected={*places == current_decimals}>
                                    {places.label()}
                                </option>
                            })}
                        </select>
                    </div>
                </div>
            </section>

            <div class="settings-actions">
                <button type="button" class="btn btn-primary" onclick={on_save}>
                    {"Update Settings"}
                </button>
            </div>
        </div>
    }
}
