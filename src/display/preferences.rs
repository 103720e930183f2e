//! Preference display formatting

use tabled::Tabled;

use crate::models::{Currency, Money, Preferences};

use super::table;

#[derive(Tabled)]
struct CurrencyRow {
    #[tabled(rename = "Code")]
    code: &'static str,
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Symbol")]
    symbol: &'static str,
    #[tabled(rename = "Example")]
    example: String,
    #[tabled(rename = "")]
    current: &'static str,
}

/// Format the current preferences
pub fn format_preferences(prefs: &Preferences) -> String {
    let mut output = String::new();

    output.push_str("Preferences\n");
    output.push_str(&format!("  Theme:    {}\n", prefs.theme));
    output.push_str(&format!(
        "  Language: {} ({})\n",
        prefs.language,
        prefs.language.code()
    ));
    output.push_str(&format!(
        "  Currency: {} - {} ({})\n",
        prefs.currency.code(),
        prefs.currency.name(),
        prefs.currency.format(Money::from_cents(123450))
    ));

    output
}

/// Format every supported currency, marking the current one
pub fn format_currency_list(current: Currency) -> String {
    let sample = Money::from_cents(123450);
    let rows = Currency::all()
        .iter()
        .map(|c| CurrencyRow {
            code: c.code(),
            name: c.name(),
            symbol: c.symbol(),
            example: c.format(sample),
            current: if *c == current { "*" } else { "" },
        })
        .collect();

    format!("{}\n", table(rows))
}
