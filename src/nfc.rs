use rand::Rng;

/// Fallback identifier used when a tag exposes no hardware UID.
pub const UNKNOWN_TAG: &str = "UNKNOWN_TAG";

/// Snapshot of a scanned tag, captured by the platform reader layer before it
/// hands off to the SDK. Works for student cards, transit cards, and plain
/// NDEF stickers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagData {
    /// Raw hardware identifier (UID) bytes. May be empty on exotic tags.
    pub id: Vec<u8>,
    /// Payloads of the records in the tag's NDEF message, in order.
    /// Empty when the tag carries no NDEF message.
    pub ndef_records: Vec<Vec<u8>>,
}

impl TagData {
    /// Stable string identifier for the tag: the UID as two-digit uppercase
    /// hex per byte (e.g. "04A1B2C3"), or [`UNKNOWN_TAG`] when the UID is
    /// absent.
    pub fn unique_id(&self) -> String {
        if self.id.is_empty() {
            UNKNOWN_TAG.to_string()
        } else {
            self.id.iter().map(|b| format!("{b:02X}")).collect()
        }
    }

    /// Decodes the first NDEF record as a Text RTD payload. Returns `None`
    /// when the tag has no records or the payload is not well-formed text.
    pub fn text(&self) -> Option<String> {
        parse_text_record(self.ndef_records.first()?)
    }
}

/// Decodes an NDEF Text RTD payload: a status byte whose high bit selects
/// UTF-8 (0) or UTF-16 (1), followed by an ISO language code of the length
/// given by the status byte's low six bits, followed by the text itself.
fn parse_text_record(payload: &[u8]) -> Option<String> {
    let status = *payload.first()?;
    // Bit 6 of the status byte is reserved by the Text RTD and must be zero,
    // so the language-code length mask is 0x3F.
    let lang_len = (status & 0x3F) as usize;
    let text = payload.get(1 + lang_len..)?;

    if status & 0x80 == 0 {
        String::from_utf8(text.to_vec()).ok()
    } else {
        decode_utf16(text)
    }
}

/// UTF-16 with an optional BOM; big-endian when no BOM is present, per the
/// Text RTD.
fn decode_utf16(bytes: &[u8]) -> Option<String> {
    let (little_endian, body) = match bytes {
        [0xFE, 0xFF, rest @ ..] => (false, rest),
        [0xFF, 0xFE, rest @ ..] => (true, rest),
        _ => (false, bytes),
    };

    if body.len() % 2 != 0 {
        return None;
    }

    let units: Vec<u16> = body
        .chunks_exact(2)
        .map(|pair| {
            if little_endian {
                u16::from_le_bytes([pair[0], pair[1]])
            } else {
                u16::from_be_bytes([pair[0], pair[1]])
            }
        })
        .collect();

    String::from_utf16(&units).ok()
}

/// A single scan, ready to be sent to the check-in endpoint. The mood score
/// is random demo filler until the UI grows a slider for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanEvent {
    /// Tag code: the decoded NDEF text when present, otherwise the UID hex.
    pub code: String,
    /// Self-reported mood, 1 (rough) to 5 (great).
    pub mood_score: u8,
}

impl ScanEvent {
    /// Builds an event from a physical tag, falling back to the hardware UID
    /// when the tag carries no readable text record.
    pub fn from_tag(tag: &TagData) -> Self {
        Self::with_random_mood(tag.text().unwrap_or_else(|| tag.unique_id()))
    }

    /// Debug path for demos without reader hardware. Produces the same event
    /// shape as a physical scan.
    pub fn simulated(code: &str) -> Self {
        Self::with_random_mood(code.to_string())
    }

    fn with_random_mood(code: String) -> Self {
        Self {
            code,
            mood_score: rand::rng().random_range(1..=5),
        }
    }
}
