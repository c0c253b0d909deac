//! Localised message catalogue.
//!
//! Validation and lookup failures carry a [`MessageKey`] rather than text.
//! Adapters resolve the key against a [`MessageCatalog`] for the locale of
//! the caller. The catalogue is built once at startup from JSON bundles
//! compiled into the binary and is read-only afterwards.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;
use tracing::warn;

/// Locale used when neither configuration nor the host provide one.
pub const FALLBACK_LOCALE: &str = "pt-BR";

/// Environment variables consulted, in order, to discover the host locale.
pub const HOST_LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

const BUILTIN_BUNDLES: [(&str, &str); 2] = [
    ("pt-BR", include_str!("../../messages/pt-BR.json")),
    ("en-US", include_str!("../../messages/en-US.json")),
];

/// Canonical language tag such as `pt-BR`.
///
/// # Examples
/// ```
/// use clientes::domain::Locale;
///
/// let locale = Locale::parse("pt_BR.UTF-8").expect("POSIX locale");
/// assert_eq!(locale.as_str(), "pt-BR");
/// assert_eq!(locale.language(), "pt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Locale(String);

impl Locale {
    /// Parse a BCP 47 tag or a POSIX locale name.
    ///
    /// Encoding (`.UTF-8`) and modifier (`@euro`) suffixes are dropped, the
    /// language is lower-cased and the region upper-cased. Returns `None` for
    /// empty input and the `C`/`POSIX` pseudo-locales.
    pub fn parse(raw: &str) -> Option<Self> {
        let base = raw
            .trim()
            .split(['.', '@'])
            .next()
            .unwrap_or_default();
        if base.is_empty() || base.eq_ignore_ascii_case("c") || base.eq_ignore_ascii_case("posix")
        {
            return None;
        }

        let mut parts = base.split(['-', '_']);
        let language = parts.next().unwrap_or_default();
        if language.is_empty() || !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        let language = language.to_ascii_lowercase();
        match parts.next() {
            Some(region) if !region.is_empty() && region.chars().all(|c| c.is_ascii_alphanumeric()) => {
                Some(Self(format!("{language}-{}", region.to_ascii_uppercase())))
            }
            Some(_) => None,
            None => Some(Self(language)),
        }
    }

    /// Discover the locale from environment lookups, honouring
    /// [`HOST_LOCALE_VARS`] precedence.
    pub fn from_env_with<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        HOST_LOCALE_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find_map(|value| Self::parse(&value))
    }

    /// Discover the locale of the host process.
    pub fn from_host() -> Option<Self> {
        Self::from_env_with(|name| std::env::var(name).ok())
    }

    /// The [`FALLBACK_LOCALE`].
    pub fn fallback() -> Self {
        Self(FALLBACK_LOCALE.to_owned())
    }

    /// Borrow the canonical tag.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Language subtag, e.g. `pt` for `pt-BR`.
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(self.0.as_str())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of a translatable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MessageKey {
    /// Name is absent or blank.
    NomeObrigatorio,
    /// Name exceeds the column width; interpolates `{max}`.
    NomeTamanho,
    /// CPF is absent or blank.
    CpfObrigatorio,
    /// CPF fails the layout or checksum rules.
    CpfInvalido,
    /// No customer has the requested id.
    ClienteNaoEncontrado,
    /// Request body could not be decoded.
    CorpoInvalido,
    /// Path id is not an integer.
    IdInvalido,
}

impl MessageKey {
    /// Every key; each bundle must define all of them.
    pub const ALL: [Self; 7] = [
        Self::NomeObrigatorio,
        Self::NomeTamanho,
        Self::CpfObrigatorio,
        Self::CpfInvalido,
        Self::ClienteNaoEncontrado,
        Self::CorpoInvalido,
        Self::IdInvalido,
    ];

    /// Key as written in the bundles.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NomeObrigatorio => "campo.nome.obrigatorio",
            Self::NomeTamanho => "campo.nome.tamanho",
            Self::CpfObrigatorio => "campo.cpf.obrigatorio",
            Self::CpfInvalido => "campo.cpf.invalido",
            Self::ClienteNaoEncontrado => "cliente.nao-encontrado",
            Self::CorpoInvalido => "requisicao.corpo.invalido",
            Self::IdInvalido => "requisicao.id.invalido",
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while assembling a [`MessageCatalog`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageCatalogError {
    /// A bundle is tagged with something that is not a locale.
    #[error("invalid bundle locale '{raw}'")]
    InvalidLocale { raw: String },
    /// A bundle is not a flat JSON object of strings.
    #[error("bundle '{locale}' could not be decoded: {message}")]
    Decode { locale: String, message: String },
    /// A bundle lacks a required key.
    #[error("bundle '{locale}' is missing key '{key}'")]
    MissingKey { locale: String, key: MessageKey },
    /// No bundle was supplied.
    #[error("message catalogue needs at least one bundle")]
    Empty,
}

/// Message templates keyed by locale and [`MessageKey`].
///
/// Templates may reference named arguments as `{name}`.
///
/// # Examples
/// ```
/// use clientes::domain::{Locale, MessageCatalog, MessageKey};
///
/// let catalog = MessageCatalog::builtin(None).expect("bundled messages");
/// let text = catalog.message(&Locale::fallback(), MessageKey::ClienteNaoEncontrado, &[]);
/// assert_eq!(text, "Cliente não encontrado");
/// ```
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    default_locale: Locale,
    bundles: BTreeMap<Locale, BTreeMap<MessageKey, String>>,
}

impl MessageCatalog {
    /// Build the catalogue from the bundles shipped with the service.
    ///
    /// `default_locale` is resolved against the bundled locales; when it is
    /// absent or unsupported the [`FALLBACK_LOCALE`] is used.
    pub fn builtin(default_locale: Option<Locale>) -> Result<Self, MessageCatalogError> {
        let bundles = BUILTIN_BUNDLES
            .iter()
            .map(|(tag, json)| (tag.to_string(), json.to_string()));
        Self::from_json_bundles(bundles, default_locale)
    }

    /// Build a catalogue from `(locale tag, JSON object)` pairs.
    pub fn from_json_bundles<I>(
        bundles: I,
        default_locale: Option<Locale>,
    ) -> Result<Self, MessageCatalogError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut parsed = BTreeMap::new();
        for (tag, json) in bundles {
            let locale = Locale::parse(&tag)
                .ok_or_else(|| MessageCatalogError::InvalidLocale { raw: tag.clone() })?;
            let raw: BTreeMap<String, String> =
                serde_json::from_str(&json).map_err(|err| MessageCatalogError::Decode {
                    locale: locale.to_string(),
                    message: err.to_string(),
                })?;
            let mut templates = BTreeMap::new();
            for key in MessageKey::ALL {
                let template =
                    raw.get(key.as_str())
                        .ok_or_else(|| MessageCatalogError::MissingKey {
                            locale: locale.to_string(),
                            key,
                        })?;
                templates.insert(key, template.clone());
            }
            parsed.insert(locale, templates);
        }

        let fallback = if parsed.contains_key(&Locale::fallback()) {
            Locale::fallback()
        } else {
            parsed
                .keys()
                .next()
                .cloned()
                .ok_or(MessageCatalogError::Empty)?
        };

        let mut catalog = Self {
            default_locale: fallback.clone(),
            bundles: parsed,
        };
        if let Some(requested) = default_locale {
            match catalog.resolve_locale(&requested) {
                Some(resolved) => catalog.default_locale = resolved,
                None => warn!(
                    requested = %requested,
                    fallback = %fallback,
                    "no messages bundled for default locale, using fallback"
                ),
            }
        }
        Ok(catalog)
    }

    /// Locale used when a caller expresses no supported preference.
    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    /// Locales with a bundle, in tag order.
    pub fn locales(&self) -> impl Iterator<Item = &Locale> {
        self.bundles.keys()
    }

    /// Match `requested` to a bundled locale, first exactly and then by
    /// language alone.
    pub fn resolve_locale(&self, requested: &Locale) -> Option<Locale> {
        if self.bundles.contains_key(requested) {
            return Some(requested.clone());
        }
        let language = requested.language();
        if self.default_locale.language() == language {
            return Some(self.default_locale.clone());
        }
        self.bundles
            .keys()
            .find(|candidate| candidate.language() == language)
            .cloned()
    }

    /// Resolve `key` for `locale`, substituting `{name}` placeholders from
    /// `args`. Unsupported locales use the default bundle.
    pub fn message(&self, locale: &Locale, key: MessageKey, args: &[(&str, String)]) -> String {
        let template = self
            .bundles
            .get(locale)
            .or_else(|| self.bundles.get(&self.default_locale))
            .and_then(|bundle| bundle.get(&key));
        let Some(template) = template else {
            return key.as_str().to_owned();
        };
        args.iter().fold(template.clone(), |text, (name, value)| {
            text.replace(&format!("{{{name}}}"), value)
        })
    }
}
