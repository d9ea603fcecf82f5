//! Attribut-Zugriff für Kartenelemente.

use anyhow::{bail, Context, Result};
use quick_xml::events::BytesStart;
use quick_xml::Reader;
use std::collections::HashMap;

/// Attribute eines Elements, Schlüssel → entschlüsselter Wert.
#[derive(Debug, Clone, Default)]
pub(crate) struct Attributes {
    tag: String,
    values: HashMap<String, String>,
}

impl Attributes {
    /// Liest alle Attribute eines Start- oder Leer-Elements.
    pub(crate) fn read(reader: &Reader<&[u8]>, element: &BytesStart<'_>) -> Result<Self> {
        let name = element.name();
        let tag = reader.decoder().decode(name.as_ref())?.into_owned();
        let mut values = HashMap::new();

        for attr in element.attributes().with_checks(false) {
            let attr = attr?;
            let key = reader.decoder().decode(attr.key.as_ref())?.into_owned();
            let value = attr.unescape_value()?.into_owned();
            values.insert(key, value);
        }

        Ok(Self { tag, values })
    }

    pub(crate) fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Pflichtattribut als String.
    pub(crate) fn required(&self, key: &str) -> Result<&str> {
        self.get(key)
            .with_context(|| format!("Attribut '{}' fehlt in <{}>", key, self.tag))
    }

    /// Pflichtattribut als Ganzzahl.
    pub(crate) fn required_i32(&self, key: &str) -> Result<i32> {
        let value = self.required(key)?;
        value.trim().parse::<i32>().with_context(|| {
            format!(
                "Attribut '{}' in <{}> ist keine Ganzzahl: '{}'",
                key, self.tag, value
            )
        })
    }

    /// Pflichtattribut als Wahrheitswert.
    pub(crate) fn required_bool(&self, key: &str) -> Result<bool> {
        parse_bool(self.required(key)?)
            .with_context(|| format!("Attribut '{}' in <{}>", key, self.tag))
    }

    /// Optionales Ganzzahl-Attribut mit Default.
    pub(crate) fn i32_or(&self, key: &str, default: i32) -> Result<i32> {
        match self.get(key) {
            Some(_) => self.required_i32(key),
            None => Ok(default),
        }
    }

    /// Optionales Wahrheitswert-Attribut mit Default.
    pub(crate) fn bool_or(&self, key: &str, default: bool) -> Result<bool> {
        match self.get(key) {
            Some(_) => self.required_bool(key),
            None => Ok(default),
        }
    }
}

/// `true`/`false` ohne Beachtung der Groß-/Kleinschreibung.
pub(crate) fn parse_bool(text: &str) -> Result<bool> {
    let trimmed = text.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        bail!("'{}' ist kein Wahrheitswert", text)
    }
}
