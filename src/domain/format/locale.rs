/// Rendering conventions for one language/region pair.
///
/// Fields are public so tests and embedders can build profiles beyond the
/// built-in Russian default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    /// BCP 47 tag, informational only.
    pub tag: &'static str,
    pub group_separator: char,
    pub decimal_separator: char,
    pub currency_symbol: &'static str,
    /// Whether the currency symbol precedes the number ("$1.00") instead of
    /// trailing it ("1,00 ₽").
    pub symbol_leads: bool,
    /// `strftime` pattern for short dates.
    pub date_pattern: &'static str,
}

impl Locale {
    /// Russian conventions: no-break-space grouping, comma decimal,
    /// trailing ruble sign, day-first short dates.
    pub fn russian() -> Self {
        Self {
            tag: "ru-RU",
            group_separator: '\u{a0}',
            decimal_separator: ',',
            currency_symbol: "₽",
            symbol_leads: false,
            date_pattern: "%d.%m.%Y",
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::russian()
    }
}
