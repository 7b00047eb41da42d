//! Embedded EN/TR string tables, looked up by dotted key. The selected
//! language persists in localStorage and falls back to the browser locale.

use std::rc::Rc;

use serde_json::Value;

const MESSAGES_EN: &str = include_str!("../i18n/en.json");
const MESSAGES_TR: &str = include_str!("../i18n/tr.json");

const LANG_KEY: &str = "hoshikuzu.lang";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Lang {
    En,
    Tr,
}

pub(crate) const LANGS: [Lang; 2] = [Lang::En, Lang::Tr];

impl Lang {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Tr => "tr",
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Tr => "Türkçe",
        }
    }

    pub(crate) fn from_str(value: &str) -> Option<Self> {
        match value {
            "en" => Some(Lang::En),
            "tr" => Some(Lang::Tr),
            _ => None,
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn stored_lang() -> Option<Lang> {
    let value = local_storage()?.get_item(LANG_KEY).ok().flatten()?;
    Lang::from_str(&value)
}

fn browser_lang() -> Option<Lang> {
    let language = web_sys::window()?.navigator().language()?;
    let primary = language.split('-').next().unwrap_or_default();
    Lang::from_str(primary)
}

pub(crate) fn resolve_lang() -> Lang {
    stored_lang().or_else(browser_lang).unwrap_or(Lang::En)
}

pub(crate) fn persist_lang(lang: Lang) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(LANG_KEY, lang.as_str());
    }
}

#[derive(Clone)]
pub(crate) struct I18n {
    lang: Lang,
    root: Rc<Value>,
}

impl PartialEq for I18n {
    fn eq(&self, other: &Self) -> bool {
        self.lang == other.lang
    }
}

impl I18n {
    pub(crate) fn load(lang: Lang) -> Self {
        let raw = match lang {
            Lang::En => MESSAGES_EN,
            Lang::Tr => MESSAGES_TR,
        };
        let root = serde_json::from_str(raw).unwrap_or_else(|err| {
            gloo::console::warn!("failed to parse messages", lang.as_str(), err.to_string());
            Value::Null
        });
        Self {
            lang,
            root: Rc::new(root),
        }
    }

    pub(crate) fn lang(&self) -> Lang {
        self.lang
    }

    /// Resolve a dotted key like `contact.send.title`; unknown keys render
    /// as the key itself so a missing string is visible, not a panic.
    pub(crate) fn text(&self, key: &str) -> String {
        let mut node: &Value = &self.root;
        for part in key.split('.') {
            match node.get(part) {
                Some(next) => node = next,
                None => return key.to_string(),
            }
        }
        match node.as_str() {
            Some(text) => text.to_string(),
            None => key.to_string(),
        }
    }

    /// Resolve a key to a list of strings (e.g. the rotating hero roles).
    pub(crate) fn list(&self, key: &str) -> Vec<String> {
        let mut node: &Value = &self.root;
        for part in key.split('.') {
            match node.get(part) {
                Some(next) => node = next,
                None => return Vec::new(),
            }
        }
        match node.as_array() {
            Some(items) => items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect(),
            None => Vec::new(),
        }
    }
}
