use crate::template::schema::FieldKind;
use regex::Regex;
use std::sync::LazyLock;

pub const YES: &str = "Да";
pub const NO: &str = "Нет";

pub const PRICE_HIGHER: &str = "можно смело ставить дороже";
pub const PRICE_AFFORDABLE: &str = "доступно";
pub const PRICE_EXPENSIVE: &str = "дорого";

static RATING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"10|[1-9]").unwrap());

// Optional +7, 8 or 7 prefix, then 3-3-2-2 digit groups with loose separators.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:(?:\+7|8|7)[\s\-()]{0,2})?[0-9]{3}[\s\-()]{0,2}[0-9]{3}[\s\-]?[0-9]{2}[\s\-]?[0-9]{2}")
        .unwrap()
});

const YES_MARKERS: &[&str] = &["да", "yes", "✓", "+", "v", "x"];
const NO_MARKERS: &[&str] = &["нет", "no"];

/// Apply the normalizer for `kind` to a raw answer. Never fails.
pub fn normalize_value(kind: FieldKind, raw: &str) -> String {
    match kind {
        FieldKind::Text => raw.to_string(),
        FieldKind::Rating => extract_rating(raw),
        FieldKind::TicketPrice => classify_ticket_price(raw),
        FieldKind::YesNo => classify_yes_no(raw),
        FieldKind::Phone => {
            let phone = extract_phone(raw);
            if phone.is_empty() {
                phone
            } else {
                normalize_phone(&phone)
            }
        }
    }
}

/// Pull a 1-10 score out of an answer such as "Оценка: 7 из 10".
///
/// "10" wins over "1" at the same position. Text without a score is
/// returned unchanged.
pub fn extract_rating(raw: &str) -> String {
    match RATING_RE.find(raw) {
        Some(m) => m.as_str().to_string(),
        None => raw.to_string(),
    }
}

/// Map a ticket price answer onto one of the three printed options.
pub fn classify_ticket_price(raw: &str) -> String {
    let lower = raw.to_lowercase();
    if lower.contains(PRICE_HIGHER) || lower.contains("дороже") {
        PRICE_HIGHER.to_string()
    } else if lower.contains(PRICE_AFFORDABLE) {
        PRICE_AFFORDABLE.to_string()
    } else if lower.contains(PRICE_EXPENSIVE) {
        PRICE_EXPENSIVE.to_string()
    } else {
        raw.to_string()
    }
}

/// Map a yes/no answer onto "Да" / "Нет".
///
/// Yes-markers are checked first, so a value containing both a yes-marker
/// and "no" is a yes.
pub fn classify_yes_no(raw: &str) -> String {
    let lower = raw.to_lowercase();
    if YES_MARKERS.iter().any(|m| lower.contains(m)) {
        YES.to_string()
    } else if NO_MARKERS.iter().any(|m| lower.contains(m)) {
        NO.to_string()
    } else {
        raw.to_string()
    }
}

/// Find the first phone number in the text, separators kept verbatim.
/// Returns an empty string when there is none.
pub fn extract_phone(raw: &str) -> String {
    PHONE_RE
        .find(raw)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Bring an extracted phone number to the `+7XXXXXXXXXX` form.
///
/// A leading trunk `8` becomes `+7`. A number already carrying the country
/// code, with or without `+`, only gets the `+`. Anything else is treated
/// as a 10-digit national number.
pub fn normalize_phone(phone: &str) -> String {
    let cleaned: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    if cleaned.is_empty() || cleaned.starts_with("+7") {
        cleaned
    } else if let Some(rest) = cleaned.strip_prefix('8') {
        format!("+7{rest}")
    } else if cleaned.starts_with('7') && cleaned.len() == 11 {
        format!("+{cleaned}")
    } else {
        format!("+7{cleaned}")
    }
}
