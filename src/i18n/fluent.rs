use crate::config::Config;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const FALLBACK_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let bundles = load_bundles();
        let mut available_locales: Vec<LanguageIdentifier> = bundles.keys().cloned().collect();
        available_locales.sort_by_key(std::string::ToString::to_string);

        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or_else(|| FALLBACK_LOCALE.parse().unwrap());

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    /// Resolves a message key in the current locale. Unknown keys come back
    /// as a visible `MISSING:` marker rather than an empty string.
    pub fn tr(&self, key: &str) -> String {
        let Some(bundle) = self.bundles.get(&self.current_locale) else {
            return format!("MISSING: {}", key);
        };
        let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) else {
            return format!("MISSING: {}", key);
        };

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        if errors.is_empty() {
            value.to_string()
        } else {
            format!("MISSING: {}", key)
        }
    }
}

/// Parses every embedded `.ftl` file into a bundle keyed by its locale.
fn load_bundles() -> HashMap<LanguageIdentifier, FluentBundle<FluentResource>> {
    let mut bundles = HashMap::new();

    for file in Asset::iter() {
        let filename = file.as_ref();
        let Some(locale) = filename
            .strip_suffix(".ftl")
            .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
        else {
            continue;
        };
        let Some(content) = Asset::get(filename) else {
            continue;
        };

        let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
        let resource = FluentResource::try_new(source).expect("Failed to parse FTL file.");
        let mut bundle = FluentBundle::new(vec![locale.clone()]);
        bundle.add_resource(resource).expect("Failed to add resource.");
        bundles.insert(locale, bundle);
    }

    bundles
}

/// Locale resolution order: CLI flag, then config file, then OS locale.
fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = [
        cli_lang,
        config.language.clone(),
        sys_locale::get_locale(),
    ];

    candidates
        .into_iter()
        .flatten()
        .filter_map(|lang| lang.parse::<LanguageIdentifier>().ok())
        .find(|lang| available.contains(lang))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use unic_langid::LanguageIdentifier;

    fn locales(tags: &[&str]) -> Vec<LanguageIdentifier> {
        tags.iter().map(|tag| tag.parse().unwrap()).collect()
    }

    #[test]
    fn cli_flag_wins_over_config() {
        let mut config = Config::default();
        config.language = Some("en-US".to_string());
        let available = locales(&["en-US", "fr"]);
        let lang = resolve_locale(Some("fr".to_string()), &config, &available);
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn config_language_is_used_without_cli_flag() {
        let mut config = Config::default();
        config.language = Some("fr".to_string());
        let available = locales(&["en-US", "fr"]);
        let lang = resolve_locale(None, &config, &available);
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn unavailable_candidates_are_skipped() {
        let config = Config::default();
        let available = locales(&["en-US"]);
        let lang = resolve_locale(Some("de".to_string()), &config, &available);
        // "de" is not shipped; resolution falls through to later candidates.
        assert_ne!(lang, Some("de".parse().unwrap()));
    }

    #[test]
    fn tr_returns_marker_for_unknown_key() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn embedded_locales_include_english_and_french() {
        let i18n = I18n::default();
        assert!(i18n.available_locales.contains(&"en-US".parse().unwrap()));
        assert!(i18n.available_locales.contains(&"fr".parse().unwrap()));
    }

    #[test]
    fn set_locale_ignores_unavailable_locale() {
        let mut i18n = I18n::default();
        let before = i18n.current_locale().clone();
        i18n.set_locale("zz-ZZ".parse().unwrap());
        assert_eq!(i18n.current_locale(), &before);
    }

    #[test]
    fn known_keys_resolve_in_both_locales() {
        let mut i18n = I18n::default();
        i18n.set_locale("en-US".parse().unwrap());
        assert_eq!(i18n.tr("modal-download-button"), "Download");

        i18n.set_locale("fr".parse().unwrap());
        assert_eq!(i18n.tr("modal-download-button"), "Télécharger");
    }
}
