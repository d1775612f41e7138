//! Ordered destination resolution: city table, airport table, passthrough.

use crate::table::CountryTable;

/// Which stage of the lookup chain produced the resolved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// Matched a city name in the city table.
    City,
    /// Matched an IATA code in the airport table.
    Airport,
    /// No match; the original destination value passes through.
    Passthrough,
}

/// Outcome of resolving one destination value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub country: &'a str,
    pub source: ResolutionSource,
}

/// Resolve a destination through the lookup chain, first match wins.
///
/// Lookups are exact string equality. A destination differing from a table key
/// by case or surrounding whitespace is unresolved and passes through
/// unchanged. Total over any string input; never fails.
pub fn resolve<'a>(
    destination: &'a str,
    cities: &'a CountryTable,
    airports: &'a CountryTable,
) -> Resolution<'a> {
    let chain = [
        (ResolutionSource::City, cities),
        (ResolutionSource::Airport, airports),
    ];
    for (source, table) in chain {
        if let Some(country) = table.get(destination) {
            return Resolution { country, source };
        }
    }
    Resolution {
        country: destination,
        source: ResolutionSource::Passthrough,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(items: &[(&str, &str)]) -> CountryTable {
        CountryTable::from_pairs(
            items
                .iter()
                .map(|(key, country)| ((*key).to_string(), (*country).to_string())),
        )
    }

    #[test]
    fn city_match() {
        let cities = table(&[("Paris", "France")]);
        let airports = table(&[]);
        let resolution = resolve("Paris", &cities, &airports);
        assert_eq!(resolution.country, "France");
        assert_eq!(resolution.source, ResolutionSource::City);
    }

    #[test]
    fn airport_fallback() {
        let cities = table(&[]);
        let airports = table(&[("JFK", "USA")]);
        let resolution = resolve("JFK", &cities, &airports);
        assert_eq!(resolution.country, "USA");
        assert_eq!(resolution.source, ResolutionSource::Airport);
    }

    #[test]
    fn passthrough_when_unmatched() {
        let cities = table(&[]);
        let airports = table(&[]);
        let resolution = resolve("Atlantis", &cities, &airports);
        assert_eq!(resolution.country, "Atlantis");
        assert_eq!(resolution.source, ResolutionSource::Passthrough);
    }

    #[test]
    fn city_table_shadows_airport_table() {
        let cities = table(&[("LHR", "United Kingdom")]);
        let airports = table(&[("LHR", "UK (airport)")]);
        let resolution = resolve("LHR", &cities, &airports);
        assert_eq!(resolution.country, "United Kingdom");
        assert_eq!(resolution.source, ResolutionSource::City);
    }
}
