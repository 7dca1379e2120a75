//! Command-line Tzolkʼin date converter.
//!
//! Sniffs the DATE argument as either a Gregorian or a Tzolkʼin date:
//! Gregorian input is converted to its Tzolkʼin date, Tzolkʼin input is
//! searched for the next and last matching Gregorian dates.

use clap::Parser;
use once_cell::sync::Lazy;
use regex::Regex;

use tzolkin_calendar::{Date, Tzolkin};

/// Date format used for output.
const USED_DATEFMT: &str = "%d.%m.%Y";

/// Gregorian formats accepted for DATE and START_DATE, tried in order.
const DATE_FORMATS: &[&str] = &[
    "%d.%m.%Y", "%d-%m-%Y", "%d %m %Y", "%Y.%m.%d", "%Y-%m-%d", "%Y/%m/%d", "%Y %m %d", "%m/%d/%Y",
];

/// A Tzolkʼin date token: a day number and a day name (or name index),
/// separated by a space, `/`, `.` or `-`.
static TZOLKIN_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})[ ./-](\d{1,2}|\D+)$").unwrap());

const LONG_ABOUT: &str = "\
A Tzolkʼin date converter and calculator.

DATE is either a Gregorian or a Tzolkʼin date. Gregorian dates are accepted
as DD.MM.YYYY, DD-MM-YYYY, \"DD MM YYYY\", YYYY.MM.DD, YYYY-MM-DD,
YYYY/MM/DD, \"YYYY MM DD\" or MM/DD/YYYY. Tzolkʼin dates combine a day
number with a day name or name index: \"8 Chuwen\", 8/Chuwen, 8.Chuwen,
8-Chuwen, \"8 11\", 8/11, 8.11 or 8-11.

A Gregorian date is converted to its Tzolkʼin date. For a Tzolkʼin date the
next and last matching Gregorian dates are printed, or lists of them with
--list.";

#[derive(Parser)]
#[command(
    name = "tzolkin",
    version,
    about = "A Tzolkʼin date converter and calculator.",
    long_about = LONG_ABOUT
)]
struct Cli {
    /// Display a list of LIST_LENGTH dates with the given Tzolkʼin date
    /// instead of a single one.
    #[arg(short, long, value_name = "LIST_LENGTH")]
    list: Option<usize>,
    /// The start date to begin the search for dates with the same Tzolkʼin
    /// date, in any of the Gregorian DATE formats. Defaults to today.
    #[arg(short, long, value_name = "START_DATE")]
    start: Option<String>,
    /// The date to parse and convert. Defaults to today.
    #[arg(value_name = "DATE")]
    date: Vec<String>,
}

enum Input {
    Gregorian(Date),
    Tzolkin(Tzolkin),
}

fn parse_gregorian(text: &str) -> Option<Date> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| Date::parse_from_str(text, fmt).ok())
}

fn sniff(text: &str) -> Result<Input, String> {
    if let Some(date) = parse_gregorian(text) {
        return Ok(Input::Gregorian(date));
    }
    if let Some(caps) = TZOLKIN_TOKEN.captures(text) {
        let number = caps[1]
            .parse::<u8>()
            .map_err(|_| format!("\"{}\" is not a Tzolkʼin day number", &caps[1]))?;
        let name = &caps[2];
        let tzolkin = if name.chars().all(|c| c.is_ascii_digit()) {
            let name = name
                .parse::<u8>()
                .map_err(|_| format!("\"{name}\" is not a Tzolkʼin day name index"))?;
            Tzolkin::with_name_index(number, name)
        } else {
            Tzolkin::new(number, name)
        };
        return tzolkin.map(Input::Tzolkin).map_err(|err| err.to_string());
    }
    Err(format!(
        "\"{text}\" is neither a Gregorian nor a Tzolkʼin date"
    ))
}

fn format_date(date: Date) -> String {
    chrono::NaiveDate::from(date).format(USED_DATEFMT).to_string()
}

fn format_dates(dates: &[Date]) -> String {
    dates
        .iter()
        .map(|date| format_date(*date))
        .collect::<Vec<_>>()
        .join(", ")
}

fn run(cli: &Cli) -> Result<(), String> {
    let start = match &cli.start {
        Some(text) => {
            parse_gregorian(text).ok_or_else(|| format!("\"{text}\" is not a Gregorian date"))?
        }
        None => Date::today(),
    };

    let input = if cli.date.is_empty() {
        Input::Gregorian(Date::today())
    } else {
        sniff(&cli.date.join(" "))?
    };

    match input {
        Input::Gregorian(date) => {
            println!(
                "Gregorian \"{}\" is \"{}\" as Tzolkʼin",
                format_date(date),
                Tzolkin::from_date(date)
            );
        }
        Input::Tzolkin(tzolkin) => match cli.list {
            None => {
                println!(
                    "Tzolkʼin date \"{tzolkin}\": next is {}, last was {}",
                    format_date(tzolkin.next_date(start)),
                    format_date(tzolkin.last_date(start))
                );
            }
            Some(length) => {
                println!("Tzolkʼin date \"{tzolkin}\"");
                println!("next: {}", format_dates(&tzolkin.next_dates(start, length)));
                println!("last: {}", format_dates(&tzolkin.last_dates(start, length)));
            }
        },
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(message) = run(&cli) {
        eprintln!("error: {message}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sniff_gregorian(text: &str) -> (i32, i32, i32) {
        match sniff(text) {
            Ok(Input::Gregorian(date)) => date.gregorian(),
            other => panic!("{text} did not sniff as a Gregorian date: {:?}", other.is_ok()),
        }
    }

    fn sniff_tzolkin(text: &str) -> (u8, u8) {
        match sniff(text) {
            Ok(Input::Tzolkin(tzolkin)) => (tzolkin.day_number(), tzolkin.day_name_index()),
            other => panic!("{text} did not sniff as a Tzolkʼin date: {:?}", other.is_ok()),
        }
    }

    #[test]
    fn sniffs_gregorian_formats() {
        for text in [
            "16.04.2016",
            "16-04-2016",
            "16 04 2016",
            "2016.04.16",
            "2016-04-16",
            "2016/04/16",
            "2016 04 16",
            "04/16/2016",
        ] {
            assert_eq!((2016, 4, 16), sniff_gregorian(text), "{text}");
        }
    }

    #[test]
    fn sniffs_tzolkin_tokens() {
        for text in [
            "8 Chuwen", "8/Chuwen", "8.Chuwen", "8-Chuwen", "8 11", "8/11", "8.11", "8-11",
        ] {
            assert_eq!((8, 11), sniff_tzolkin(text), "{text}");
        }
    }

    #[test]
    fn three_number_tokens_are_gregorian() {
        assert_eq!((2016, 11, 8), sniff_gregorian("8 11 2016"));
    }

    #[test]
    fn rejects_invalid_input() {
        assert!(sniff("not a date").is_err());
        assert!(sniff("25 Chuwen").is_err());
        assert!(sniff("8 Monday").is_err());
        assert!(sniff("8 21").is_err());
    }

    #[test]
    fn start_dates_parse_like_dates() {
        let date = parse_gregorian("01.01.1970").unwrap();
        assert_eq!((1970, 1, 1), date.gregorian());
        assert!(parse_gregorian("8 Chuwen").is_none());
    }
}
