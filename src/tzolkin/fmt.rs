//! Text forms of Tzolkʼin dates.

use super::calculate::TzolkinDate;

/// The 20 Tzolkʼin day names, Imix (index 1) through Ajaw (index 20).
pub const DAY_NAMES: [&str; 20] = [
    "Imix", "Ikʼ", "Akʼbʼal", "Kʼan", "Chikchan", "Kimi", "Manikʼ", "Lamat", "Muluk", "Ok",
    "Chuwen", "Ebʼ", "Bʼen", "Ix", "Men", "Kʼibʼ", "Kabʼan", "Etzʼnabʼ", "Kawak", "Ajaw",
];

/// Returns the day name with index `name` (1 = Imix, 20 = Ajaw).
///
/// # Examples
///
/// ```
/// use tzolkin_calendar::tzolkin::fmt;
///
/// assert_eq!("Chikchan", fmt::day_name(5));
/// ```
///
/// # Panics
///
/// Panics if `name` is not in `1..=20`.
pub fn day_name(name: u8) -> &'static str {
    match name {
        1..=20 => DAY_NAMES[name as usize - 1],
        _ => panic!("day name index {} not in 1..=20", name),
    }
}

/// Looks up a day name, ignoring case and any characters other than ASCII
/// letters, so `"chuwen"` and `"Kib"` match `"Chuwen"` and `"Kʼibʼ"`.
///
/// Returns the name's index, or `None` if the text matches no day name.
///
/// # Examples
///
/// ```
/// use tzolkin_calendar::tzolkin::fmt;
///
/// assert_eq!(Some(11), fmt::parse_day_name("chuwen"));
/// assert_eq!(Some(16), fmt::parse_day_name("Kib"));
/// assert_eq!(None, fmt::parse_day_name("Monday"));
/// ```
pub fn parse_day_name(text: &str) -> Option<u8> {
    let wanted = fold_name(text);
    if wanted.is_empty() {
        return None;
    }
    DAY_NAMES
        .iter()
        .position(|name| fold_name(name) == wanted)
        .map(|position| position as u8 + 1)
}

fn fold_name(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

impl std::fmt::Display for TzolkinDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.number(), self.day_name())
    }
}
