//! Kodierung der Segmentfolge im Kartenformat.
//!
//! Die Folge wird als Lauflängen-Text (`<anzahl?><code>...`, fehlende Anzahl = 1)
//! geschrieben und anschließend Base64-kodiert, z.B. `S2KS` → `UzJLUw==`.

use anyhow::{bail, Context, Result};
use base64::{engine::general_purpose, Engine as _};

use crate::core::BridgePartType;

/// Obergrenze für dekodierte Segmente (Schutz vor absurden Lauflängen).
pub const MAX_SEGMENTS: usize = 4096;

/// Dekodiert den Inhalt eines `<bridge>`-Elements.
pub fn decode_segments(text: &str) -> Result<Vec<BridgePartType>> {
    let bytes = general_purpose::STANDARD
        .decode(text.trim())
        .context("Segment-String ist kein gueltiges Base64")?;
    let runs = String::from_utf8(bytes).context("Segment-String ist kein gueltiges UTF-8")?;

    let mut segments = Vec::new();
    let mut count: Option<usize> = None;

    for c in runs.chars() {
        if let Some(digit) = c.to_digit(10) {
            let value = count
                .unwrap_or(0)
                .checked_mul(10)
                .and_then(|v| v.checked_add(digit as usize))
                .filter(|v| *v <= MAX_SEGMENTS)
                .with_context(|| format!("Lauflaenge ueberschreitet {} Segmente", MAX_SEGMENTS))?;
            count = Some(value);
            continue;
        }

        let part = BridgePartType::from_code(c)
            .with_context(|| format!("Unbekannter Segment-Code '{}'", c))?;
        let repeat = count.take().unwrap_or(1);
        if repeat == 0 {
            bail!("Lauflaenge 0 vor Segment-Code '{}'", c);
        }
        if segments.len() + repeat > MAX_SEGMENTS {
            bail!("Segmentfolge ueberschreitet {} Segmente", MAX_SEGMENTS);
        }
        segments.extend(std::iter::repeat(part).take(repeat));
    }

    if count.is_some() {
        bail!("Lauflaenge ohne Segment-Code am Ende");
    }

    Ok(segments)
}

/// Kodiert eine Segmentfolge für das Kartenformat.
pub fn encode_segments(segments: &[BridgePartType]) -> String {
    let mut runs = String::new();
    let mut iter = segments.iter().peekable();

    while let Some(part) = iter.next() {
        let mut repeat = 1usize;
        while iter.peek() == Some(&part) {
            iter.next();
            repeat += 1;
        }
        if repeat > 1 {
            runs.push_str(&repeat.to_string());
        }
        runs.push(part.code());
    }

    general_purpose::STANDARD.encode(runs)
}
