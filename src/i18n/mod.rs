use std::collections::HashMap;

#[derive(Clone)]
pub struct I18nService {
    current_lang: String,
    translations: HashMap<String, HashMap<String, String>>,
}

impl I18nService {
    pub fn new(lang: &str) -> Self {
        let mut translations = HashMap::new();

        let de_content = include_str!("../../locales/de-DE/main.ftl");
        let en_content = include_str!("../../locales/en-US/main.ftl");

        translations.insert("de-DE".to_string(), parse_ftl(de_content));
        translations.insert("en-US".to_string(), parse_ftl(en_content));

        I18nService {
            current_lang: lang.to_string(),
            translations,
        }
    }

    pub fn translate(&self, key: &str) -> String {
        if let Some(lang_map) = self.translations.get(&self.current_lang) {
            if let Some(val) = lang_map.get(key) {
                return val.clone();
            }
        }

        if let Some(lang_map) = self.translations.get("en-US") {
            if let Some(val) = lang_map.get(key) {
                return val.clone();
            }
        }

        key.to_string()
    }

    /// Formats a price in decimal style with exactly two fraction digits,
    /// using the decimal separator of the active locale.
    pub fn format_price(&self, number: f64) -> String {
        let formatted = format!("{:.2}", number);
        match decimal_separator(&self.current_lang) {
            ',' => formatted.replace('.', ","),
            _ => formatted,
        }
    }
}

fn decimal_separator(lang: &str) -> char {
    if lang.starts_with("de") {
        ','
    } else {
        '.'
    }
}

fn parse_ftl(content: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            map.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_get_two_fraction_digits() {
        let de = I18nService::new("de-DE");
        let en = I18nService::new("en-US");
        assert_eq!(de.format_price(12.0), "12,00");
        assert_eq!(en.format_price(12.0), "12.00");
    }

    #[test]
    fn fractions_are_padded_to_two_digits() {
        let de = I18nService::new("de-DE");
        assert_eq!(de.format_price(5.5), "5,50");
        assert_eq!(de.format_price(4.6), "4,60");
    }

    #[test]
    fn translate_falls_back_to_english_then_key() {
        let i18n = I18nService::new("fr-FR");
        assert_eq!(i18n.translate("cart-total"), "Total");
        assert_eq!(i18n.translate("no-such-key"), "no-such-key");
    }

    #[test]
    fn ftl_parser_skips_comments_and_blanks() {
        let map = parse_ftl("# comment\n\nfoo = bar\n  baz = qux  ");
        assert_eq!(map.get("foo").map(String::as_str), Some("bar"));
        assert_eq!(map.get("baz").map(String::as_str), Some("qux"));
        assert_eq!(map.len(), 2);
    }
}
