use std::collections::HashMap;

/// Markets every configured provider can serve. A location that does not
/// resolve into this set means the provider call is skipped, never guessed.
const SUPPORTED_COUNTRIES: &[&str] = &[
    "at", "au", "be", "br", "ca", "ch", "de", "es", "fr", "gb", "in", "it", "mx", "nl", "nz",
    "pl", "sg", "us", "za",
];

/// Country names and common synonyms (English plus the Polish forms our
/// stored preferences tend to use).
const COUNTRY_SYNONYMS: &[(&str, &str)] = &[
    ("austria", "at"),
    ("australia", "au"),
    ("belgium", "be"),
    ("belgia", "be"),
    ("brazil", "br"),
    ("brasil", "br"),
    ("brazylia", "br"),
    ("canada", "ca"),
    ("kanada", "ca"),
    ("switzerland", "ch"),
    ("szwajcaria", "ch"),
    ("germany", "de"),
    ("deutschland", "de"),
    ("niemcy", "de"),
    ("spain", "es"),
    ("espana", "es"),
    ("españa", "es"),
    ("hiszpania", "es"),
    ("france", "fr"),
    ("francja", "fr"),
    ("united kingdom", "gb"),
    ("uk", "gb"),
    ("great britain", "gb"),
    ("england", "gb"),
    ("wielka brytania", "gb"),
    ("anglia", "gb"),
    ("india", "in"),
    ("indie", "in"),
    ("italy", "it"),
    ("italia", "it"),
    ("wlochy", "it"),
    ("włochy", "it"),
    ("mexico", "mx"),
    ("meksyk", "mx"),
    ("netherlands", "nl"),
    ("holland", "nl"),
    ("holandia", "nl"),
    ("new zealand", "nz"),
    ("nowa zelandia", "nz"),
    ("poland", "pl"),
    ("polska", "pl"),
    ("singapore", "sg"),
    ("singapur", "sg"),
    ("united states", "us"),
    ("usa", "us"),
    ("us", "us"),
    ("america", "us"),
    ("stany zjednoczone", "us"),
    ("south africa", "za"),
    ("rpa", "za"),
];

/// Major cities for the supported markets, with the spelling variants we
/// see in stored preferences (diacritic and ASCII forms, Polish exonyms).
const CITY_COUNTRIES: &[(&str, &str)] = &[
    ("vienna", "at"),
    ("wien", "at"),
    ("wiedeń", "at"),
    ("wieden", "at"),
    ("sydney", "au"),
    ("melbourne", "au"),
    ("brussels", "be"),
    ("bruksela", "be"),
    ("antwerp", "be"),
    ("sao paulo", "br"),
    ("são paulo", "br"),
    ("rio de janeiro", "br"),
    ("toronto", "ca"),
    ("vancouver", "ca"),
    ("montreal", "ca"),
    ("zurich", "ch"),
    ("zürich", "ch"),
    ("geneva", "ch"),
    ("genewa", "ch"),
    ("berlin", "de"),
    ("munich", "de"),
    ("münchen", "de"),
    ("monachium", "de"),
    ("hamburg", "de"),
    ("frankfurt", "de"),
    ("cologne", "de"),
    ("köln", "de"),
    ("madrid", "es"),
    ("madryt", "es"),
    ("barcelona", "es"),
    ("valencia", "es"),
    ("paris", "fr"),
    ("paryż", "fr"),
    ("paryz", "fr"),
    ("lyon", "fr"),
    ("london", "gb"),
    ("londyn", "gb"),
    ("manchester", "gb"),
    ("birmingham", "gb"),
    ("leeds", "gb"),
    ("glasgow", "gb"),
    ("edinburgh", "gb"),
    ("bangalore", "in"),
    ("bengaluru", "in"),
    ("mumbai", "in"),
    ("delhi", "in"),
    ("hyderabad", "in"),
    ("rome", "it"),
    ("rzym", "it"),
    ("milan", "it"),
    ("milano", "it"),
    ("mediolan", "it"),
    ("turin", "it"),
    ("mexico city", "mx"),
    ("amsterdam", "nl"),
    ("rotterdam", "nl"),
    ("the hague", "nl"),
    ("eindhoven", "nl"),
    ("auckland", "nz"),
    ("wellington", "nz"),
    ("warszawa", "pl"),
    ("warsaw", "pl"),
    ("kraków", "pl"),
    ("krakow", "pl"),
    ("wrocław", "pl"),
    ("wroclaw", "pl"),
    ("gdańsk", "pl"),
    ("gdansk", "pl"),
    ("poznań", "pl"),
    ("poznan", "pl"),
    ("łódź", "pl"),
    ("lodz", "pl"),
    ("katowice", "pl"),
    ("szczecin", "pl"),
    ("new york", "us"),
    ("nyc", "us"),
    ("san francisco", "us"),
    ("austin", "us"),
    ("seattle", "us"),
    ("boston", "us"),
    ("chicago", "us"),
    ("los angeles", "us"),
    ("cape town", "za"),
    ("johannesburg", "za"),
];

const CURRENCIES: &[(&str, &str)] = &[
    ("at", "EUR"),
    ("au", "AUD"),
    ("be", "EUR"),
    ("br", "BRL"),
    ("ca", "CAD"),
    ("ch", "CHF"),
    ("de", "EUR"),
    ("es", "EUR"),
    ("fr", "EUR"),
    ("gb", "GBP"),
    ("in", "INR"),
    ("it", "EUR"),
    ("mx", "MXN"),
    ("nl", "EUR"),
    ("nz", "NZD"),
    ("pl", "PLN"),
    ("sg", "SGD"),
    ("us", "USD"),
    ("za", "ZAR"),
];

const DEFAULT_CURRENCY: &str = "USD";

/// Resolves free-text locations to provider country codes. Built once at
/// startup and shared by every adapter.
pub struct CountryResolver {
    countries: HashMap<&'static str, &'static str>,
    cities: HashMap<&'static str, &'static str>,
    currencies: HashMap<&'static str, &'static str>,
}

impl CountryResolver {
    pub fn new() -> Self {
        Self {
            countries: COUNTRY_SYNONYMS.iter().copied().collect(),
            cities: CITY_COUNTRIES.iter().copied().collect(),
            currencies: CURRENCIES.iter().copied().collect(),
        }
    }

    /// Resolve a location string to a two-letter country code. Tries the
    /// whole string, then each comma-separated segment, against the city
    /// and country tables; finally accepts a trailing two-letter code
    /// ("Warsaw, PL"). Returns `None` when the country stays undetermined.
    pub fn resolve(&self, location: &str) -> Option<&'static str> {
        let normalized = location.trim().to_lowercase();
        if normalized.is_empty() {
            return None;
        }

        if let Some(code) = self.lookup(&normalized) {
            return Some(code);
        }

        for segment in normalized.split(',') {
            if let Some(code) = self.lookup(segment.trim()) {
                return Some(code);
            }
        }

        let tail = normalized.rsplit(',').next().map(str::trim)?;
        if tail.len() == 2 {
            return SUPPORTED_COUNTRIES.iter().find(|c| **c == tail).copied();
        }

        None
    }

    /// Currency for a resolved country, USD when the country is unknown.
    pub fn currency_for(&self, country_code: &str) -> &'static str {
        self.currencies
            .get(country_code)
            .copied()
            .unwrap_or(DEFAULT_CURRENCY)
    }

    fn lookup(&self, key: &str) -> Option<&'static str> {
        self.cities
            .get(key)
            .or_else(|| self.countries.get(key))
            .copied()
    }
}

impl Default for CountryResolver {
    fn default() -> Self {
        Self::new()
    }
}
