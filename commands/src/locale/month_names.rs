//! Lowercase month names per language, January first

/// Full and abbreviated month names of one language
pub struct MonthNames {
    /// Full names, e.g. `january`
    pub full:  [&'static str; 12],
    /// Abbreviations, e.g. `jan`
    pub short: [&'static str; 12],
}

static ENGLISH: MonthNames = MonthNames {
    full:  [
        "january",
        "february",
        "march",
        "april",
        "may",
        "june",
        "july",
        "august",
        "september",
        "october",
        "november",
        "december",
    ],
    short: [
        "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
    ],
};

static FRENCH: MonthNames = MonthNames {
    full:  [
        "janvier",
        "février",
        "mars",
        "avril",
        "mai",
        "juin",
        "juillet",
        "août",
        "septembre",
        "octobre",
        "novembre",
        "décembre",
    ],
    short: [
        "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
        "déc.",
    ],
};

static SPANISH: MonthNames = MonthNames {
    full:  [
        "enero",
        "febrero",
        "marzo",
        "abril",
        "mayo",
        "junio",
        "julio",
        "agosto",
        "septiembre",
        "octubre",
        "noviembre",
        "diciembre",
    ],
    short: [
        "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
    ],
};

static PORTUGUESE: MonthNames = MonthNames {
    full:  [
        "janeiro",
        "fevereiro",
        "março",
        "abril",
        "maio",
        "junho",
        "julho",
        "agosto",
        "setembro",
        "outubro",
        "novembro",
        "dezembro",
    ],
    short: [
        "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
    ],
};

static GERMAN: MonthNames = MonthNames {
    full:  [
        "januar",
        "februar",
        "märz",
        "april",
        "mai",
        "juni",
        "juli",
        "august",
        "september",
        "oktober",
        "november",
        "dezember",
    ],
    short: [
        "jan", "feb", "mär", "apr", "mai", "jun", "jul", "aug", "sep", "okt", "nov", "dez",
    ],
};

static ITALIAN: MonthNames = MonthNames {
    full:  [
        "gennaio",
        "febbraio",
        "marzo",
        "aprile",
        "maggio",
        "giugno",
        "luglio",
        "agosto",
        "settembre",
        "ottobre",
        "novembre",
        "dicembre",
    ],
    short: [
        "gen", "feb", "mar", "apr", "mag", "giu", "lug", "ago", "set", "ott", "nov", "dic",
    ],
};

static DUTCH: MonthNames = MonthNames {
    full:  [
        "januari",
        "februari",
        "maart",
        "april",
        "mei",
        "juni",
        "juli",
        "augustus",
        "september",
        "oktober",
        "november",
        "december",
    ],
    short: [
        "jan", "feb", "mrt", "apr", "mei", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
    ],
};

/// Month names for a lowercase language code, English when the language has no table
pub fn for_language(language: &str) -> &'static MonthNames {
    match language {
        "fr" => &FRENCH,
        "es" => &SPANISH,
        "pt" => &PORTUGUESE,
        "de" => &GERMAN,
        "it" => &ITALIAN,
        "nl" => &DUTCH,
        _ => &ENGLISH,
    }
}

/// Longest month name that starts `text`, as a 1-based month and the byte length matched
pub fn match_prefix(names: &MonthNames, text: &str) -> Option<(u32, usize)> {
    names
        .full
        .iter()
        .zip(1..)
        .chain(names.short.iter().zip(1..))
        .filter(|(name, _)| text.starts_with(**name))
        .max_by_key(|(name, _)| name.len())
        .map(|(name, month)| (month, name.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_name_wins() {
        assert_eq!(match_prefix(&ENGLISH, "june 2013"), Some((6, 4)));
        assert_eq!(match_prefix(&ENGLISH, "jun 2013"), Some((6, 3)));
        assert_eq!(match_prefix(for_language("fr"), "juil. 2013"), Some((7, 5)));
        assert_eq!(match_prefix(for_language("fr"), "juillet 2013"), Some((7, 7)));
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        assert_eq!(match_prefix(for_language("sw"), "march"), Some((3, 5)));
        assert_eq!(match_prefix(for_language("de"), "march"), None);
    }
}
