use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Currency symbol used when the seed does not provide one
pub const DEFAULT_CURRENCY: &str = "₹";

/// A dropdown value that is not one of the allowed options
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported {field} option: {value:?}")]
pub struct ParseOptionError {
    pub field: &'static str,
    pub value: String,
}

/// GST slab applied to items by default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TaxRate {
    #[serde(rename = "0")]
    Exempt,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "12")]
    Twelve,
    #[default]
    #[serde(rename = "18")]
    Eighteen,
    #[serde(rename = "28")]
    TwentyEight,
}

impl TaxRate {
    /// Dropdown order
    pub const OPTIONS: [TaxRate; 5] = [
        TaxRate::Eighteen,
        TaxRate::Twelve,
        TaxRate::Five,
        TaxRate::TwentyEight,
        TaxRate::Exempt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaxRate::Exempt => "0",
            TaxRate::Five => "5",
            TaxRate::Twelve => "12",
            TaxRate::Eighteen => "18",
            TaxRate::TwentyEight => "28",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaxRate::Exempt => "0% (Exempt)",
            TaxRate::Five => "5%",
            TaxRate::Twelve => "12%",
            TaxRate::Eighteen => "18%",
            TaxRate::TwentyEight => "28%",
        }
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaxRate {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaxRate::OPTIONS
            .into_iter()
            .find(|rate| rate.as_str() == s)
            .ok_or_else(|| ParseOptionError {
                field: "tax rate",
                value: s.to_string(),
            })
    }
}

/// Number of digits shown after the decimal point for amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DecimalPlaces {
    #[serde(rename = "0")]
    Zero,
    #[default]
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
}

impl DecimalPlaces {
    /// Dropdown order
    pub const OPTIONS: [DecimalPlaces; 3] =
        [DecimalPlaces::Two, DecimalPlaces::Zero, DecimalPlaces::Three];

    pub fn as_str(&self) -> &'static str {
        match self {
            DecimalPlaces::Zero => "0",
            DecimalPlaces::Two => "2",
            DecimalPlaces::Three => "3",
        }
    }

    pub fn places(&self) -> usize {
        match self {
            DecimalPlaces::Zero => 0,
            DecimalPlaces::Two => 2,
            DecimalPlaces::Three => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DecimalPlaces::Zero => "0 (e.g. 11)",
            DecimalPlaces::Two => "2 (e.g. 10.50)",
            DecimalPlaces::Three => "3 (e.g. 10.500)",
        }
    }
}

impl fmt::Display for DecimalPlaces {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DecimalPlaces {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DecimalPlaces::OPTIONS
            .into_iter()
            .find(|places| places.as_str() == s)
            .ok_or_else(|| ParseOptionError {
                field: "decimal places",
                value: s.to_string(),
            })
    }
}

/// How entered product prices relate to GST. Stored as `priceInclusive` on the settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceLogic {
    /// Tax is added on top of the entered price
    Exclusive,
    /// The entered price already contains tax
    Inclusive,
}

impl PriceLogic {
    pub const OPTIONS: [PriceLogic; 2] = [PriceLogic::Exclusive, PriceLogic::Inclusive];

    pub fn from_inclusive(price_inclusive: bool) -> Self {
        if price_inclusive {
            PriceLogic::Inclusive
        } else {
            PriceLogic::Exclusive
        }
    }

    pub fn is_inclusive(&self) -> bool {
        matches!(self, PriceLogic::Inclusive)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceLogic::Exclusive => "exclusive",
            PriceLogic::Inclusive => "inclusive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceLogic::Exclusive => "Tax Exclusive (Price + GST)",
            PriceLogic::Inclusive => "Tax Inclusive (Price includes GST)",
        }
    }
}

impl FromStr for PriceLogic {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exclusive" => Ok(PriceLogic::Exclusive),
            "inclusive" => Ok(PriceLogic::Inclusive),
            other => Err(ParseOptionError {
                field: "price logic",
                value: other.to_string(),
            }),
        }
    }
}

/// Tax and currency configuration of a shop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxSettings {
    pub gst_enabled: bool,
    pub default_rate: TaxRate,
    pub price_inclusive: bool,
    /// Free-text currency symbol
    pub currency: String,
    pub decimals: DecimalPlaces,
}

impl Default for TaxSettings {
    fn default() -> Self {
        Self {
            gst_enabled: true,
            default_rate: TaxRate::default(),
            price_inclusive: false,
            currency: DEFAULT_CURRENCY.to_string(),
            decimals: DecimalPlaces::default(),
        }
    }
}

impl TaxSettings {
    /// Render an amount with the currency symbol and configured precision.
    /// Halves round away from zero, so 10.5 shows as 11 with no decimals.
    pub fn format_amount(&self, amount: f64) -> String {
        let places = self.decimals.places();
        let factor = 10f64.powi(places as i32);
        let rounded = (amount * factor).round() / factor;
        format!("{}{:.*}", self.currency, places, rounded)
    }
}

/// Settings as handed in by the parent page; any field may be missing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaxSettingsSeed {
    pub gst_enabled: Option<bool>,
    pub default_rate: Option<TaxRate>,
    pub price_inclusive: Option<bool>,
    pub currency: Option<String>,
    pub decimals: Option<DecimalPlaces>,
}

impl From<TaxSettings> for TaxSettingsSeed {
    fn from(settings: TaxSettings) -> Self {
        Self {
            gst_enabled: Some(settings.gst_enabled),
            default_rate: Some(settings.default_rate),
            price_inclusive: Some(settings.price_inclusive),
            currency: Some(settings.currency),
            decimals: Some(settings.decimals),
        }
    }
}

/// Local working copy behind the tax settings editor.
///
/// Seeded once at construction and never re-synchronised with the seed afterwards;
/// a fresh edit session needs a fresh form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxSettingsForm {
    gst_enabled: bool,
    default_rate: TaxRate,
    price_inclusive: bool,
    currency: String,
    decimals: DecimalPlaces,
}

impl TaxSettingsForm {
    /// Build the form from the parent's settings, filling gaps with defaults.
    /// An empty currency symbol in the seed also falls back to the default.
    pub fn seeded(settings: Option<&TaxSettingsSeed>) -> Self {
        let defaults = TaxSettings::default();
        let Some(seed) = settings else {
            return Self::from_settings(defaults);
        };

        Self {
            gst_enabled: seed.gst_enabled.unwrap_or(defaults.gst_enabled),
            default_rate: seed.default_rate.unwrap_or(defaults.default_rate),
            price_inclusive: seed.price_inclusive.unwrap_or(defaults.price_inclusive),
            currency: seed
                .currency
                .clone()
                .filter(|symbol| !symbol.is_empty())
                .unwrap_or(defaults.currency),
            decimals: seed.decimals.unwrap_or(defaults.decimals),
        }
    }

    fn from_settings(settings: TaxSettings) -> Self {
        Self {
            gst_enabled: settings.gst_enabled,
            default_rate: settings.default_rate,
            price_inclusive: settings.price_inclusive,
            currency: settings.currency,
            decimals: settings.decimals,
        }
    }

    pub fn gst_enabled(&self) -> bool {
        self.gst_enabled
    }

    pub fn default_rate(&self) -> TaxRate {
        self.default_rate
    }

    pub fn price_inclusive(&self) -> bool {
        self.price_inclusive
    }

    pub fn price_logic(&self) -> PriceLogic {
        PriceLogic::from_inclusive(self.price_inclusive)
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn decimals(&self) -> DecimalPlaces {
        self.decimals
    }

    /// Rate and price-logic inputs accept interaction only while GST is on.
    /// Their values are kept either way.
    pub fn gst_controls_enabled(&self) -> bool {
        self.gst_enabled
    }

    pub fn toggle_gst(&mut self) {
        self.gst_enabled = !self.gst_enabled;
    }

    pub fn set_gst_enabled(&mut self, enabled: bool) {
        self.gst_enabled = enabled;
    }

    pub fn set_default_rate(&mut self, rate: TaxRate) {
        self.default_rate = rate;
    }

    pub fn set_price_logic(&mut self, logic: PriceLogic) {
        self.price_inclusive = logic.is_inclusive();
    }

    pub fn set_currency(&mut self, symbol: impl Into<String>) {
        self.currency = symbol.into();
    }

    pub fn set_decimals(&mut self, decimals: DecimalPlaces) {
        self.decimals = decimals;
    }

    /// Current field values as a settings object
    pub fn snapshot(&self) -> TaxSettings {
        TaxSettings {
            gst_enabled: self.gst_enabled,
            default_rate: self.default_rate,
            price_inclusive: self.price_inclusive,
            currency: self.currency.clone(),
            decimals: self.decimals,
        }
    }

    /// Hand the assembled settings to the parent's update function
    pub fn update<F>(&self, on_update: F)
    where
        F: FnOnce(TaxSettings),
    {
        on_update(self.snapshot());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn captured_update(form: &TaxSettingsForm) -> Vec<TaxSettings> {
        let seen = RefCell::new(Vec::new());
        form.update(|settings| seen.borrow_mut().push(settings));
        seen.into_inner()
    }

    #[test]
    fn test_defaults_when_no_settings() {
        let form = TaxSettingsForm::seeded(None);
        assert_eq!(
            captured_update(&form),
            vec![TaxSettings {
                gst_enabled: true,
                default_rate: TaxRate::Eighteen,
                price_inclusive: false,
                currency: "₹".to_string(),
                decimals: DecimalPlaces::Two,
            }]
        );
        assert!(form.gst_controls_enabled());
    }

    #[test]
    fn test_seed_values_are_used() {
        let seed = TaxSettingsSeed {
            gst_enabled: Some(false),
            default_rate: Some(TaxRate::Five),
            price_inclusive: Some(true),
            currency: Some("$".to_string()),
            decimals: Some(DecimalPlaces::Zero),
        };
        let form = TaxSettingsForm::seeded(Some(&seed));

        assert!(!form.gst_enabled());
        assert_eq!(form.default_rate(), TaxRate::Five);
        assert!(form.price_inclusive());
        assert_eq!(form.price_logic(), PriceLogic::Inclusive);
        assert_eq!(form.currency(), "$");
        assert_eq!(form.decimals(), DecimalPlaces::Zero);
        assert!(!form.gst_controls_enabled());

        let updates = captured_update(&form);
        assert_eq!(updates.len(), 1);
        assert_eq!(TaxSettingsSeed::from(updates[0].clone()), seed);
    }

    #[test]
    fn test_partial_seed_fills_gaps() {
        let seed = TaxSettingsSeed {
            gst_enabled: Some(false),
            currency: Some(String::new()),
            ..Default::default()
        };
        let form = TaxSettingsForm::seeded(Some(&seed));
        let settings = form.snapshot();

        assert!(!settings.gst_enabled);
        assert_eq!(settings.default_rate, TaxRate::Eighteen);
        assert!(!settings.price_inclusive);
        assert_eq!(settings.currency, "₹");
        assert_eq!(settings.decimals, DecimalPlaces::Two);
    }

    #[test]
    fn test_disabled_gst_keeps_values() {
        let mut form = TaxSettingsForm::seeded(None);
        form.set_default_rate(TaxRate::TwentyEight);
        form.set_price_logic(PriceLogic::Inclusive);

        form.toggle_gst();
        assert!(!form.gst_controls_enabled());
        assert_eq!(form.default_rate(), TaxRate::TwentyEight);
        assert!(form.price_inclusive());

        let settings = form.snapshot();
        assert!(!settings.gst_enabled);
        assert_eq!(settings.default_rate, TaxRate::TwentyEight);
        assert!(settings.price_inclusive);

        form.toggle_gst();
        assert!(form.gst_controls_enabled());
    }

    #[test]
    fn test_every_update_calls_back() {
        let mut form = TaxSettingsForm::seeded(None);
        form.set_currency("€");
        form.set_decimals(DecimalPlaces::Three);

        let seen = RefCell::new(Vec::new());
        form.update(|settings| seen.borrow_mut().push(settings));
        form.update(|settings| seen.borrow_mut().push(settings));

        let seen = seen.into_inner();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], seen[1]);
        assert_eq!(seen[0].currency, "€");
        assert_eq!(seen[0].decimals, DecimalPlaces::Three);
    }

    #[test]
    fn test_wire_format() {
        let settings = TaxSettings::default();
        assert_eq!(
            serde_json::to_value(&settings).unwrap(),
            serde_json::json!({
                "gstEnabled": true,
                "defaultRate": "18",
                "priceInclusive": false,
                "currency": "₹",
                "decimals": "2",
            })
        );

        let seed: TaxSettingsSeed =
            serde_json::from_str(r#"{"gstEnabled": false, "defaultRate": "5"}"#).unwrap();
        assert_eq!(seed.gst_enabled, Some(false));
        assert_eq!(seed.default_rate, Some(TaxRate::Five));
        assert_eq!(seed.currency, None);

        assert!(serde_json::from_str::<TaxSettingsSeed>(r#"{"defaultRate": "7"}"#).is_err());
    }

    #[test]
    fn test_option_parsing() {
        for rate in TaxRate::OPTIONS {
            assert_eq!(rate.as_str().parse::<TaxRate>(), Ok(rate));
        }
        assert_eq!(
            "7".parse::<TaxRate>(),
            Err(ParseOptionError {
                field: "tax rate",
                value: "7".to_string(),
            })
        );
        assert!("1".parse::<DecimalPlaces>().is_err());
        assert_eq!("inclusive".parse::<PriceLogic>(), Ok(PriceLogic::Inclusive));
        assert!("both".parse::<PriceLogic>().is_err());
    }

    #[test]
    fn test_option_labels() {
        let rates: Vec<&str> = TaxRate::OPTIONS.iter().map(|r| r.label()).collect();
        assert_eq!(rates, vec!["18%", "12%", "5%", "28%", "0% (Exempt)"]);
        assert_eq!(DecimalPlaces::Two.label(), "2 (e.g. 10.50)");
        assert_eq!(PriceLogic::Exclusive.label(), "Tax Exclusive (Price + GST)");
    }

    #[test]
    fn test_format_amount() {
        let mut settings = TaxSettings::default();
        assert_eq!(settings.format_amount(10.5), "₹10.50");

        settings.decimals = DecimalPlaces::Zero;
        assert_eq!(settings.format_amount(10.5), "₹11");
        assert_eq!(settings.format_amount(1234.5), "₹1235");

        settings.currency = "$".to_string();
        assert_eq!(settings.format_amount(10.4), "$10");
        assert_eq!(settings.format_amount(10.5), "$11");
        assert_eq!(settings.format_amount(1234.5), "$1235");
        assert_eq!(settings.format_amount(-2.5), "$-3");

        settings.decimals = DecimalPlaces::Three;
        assert_eq!(settings.format_amount(10.5), "$10.500");
    }
}
