//! Star and planet name generation
//!
//! Ordinary stars get proper names built from an optional prefix, a root
//! and an optional suffix. Neutron stars and pulsars get catalog
//! designations, and their planets follow the lowercase-letter convention.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::galaxy::star::StarType;

const CATALOG_PREFIXES: [&str; 6] = ["PSR", "SGR", "AXP", "XTE", "RX", "CXO"];

const NAME_PREFIXES: [&str; 12] = [
    "new", "alpha", "beta", "gamma", "delta", "nova", "upper", "lower", "far", "old", "high",
    "outer",
];

const NAME_ROOTS: [&str; 24] = [
    "kethara", "vegaris", "orionis", "solmara", "draconis", "thalassa", "helion", "caldera",
    "aurelia", "zephyra", "nyxara", "pyrrhos", "lyrion", "meridian", "tauros", "vesperia",
    "astrion", "corvana", "elysia", "halcyon", "icarion", "kronos", "oberon", "seraphis",
];

const NAME_SUFFIXES: [&str; 10] = [
    "prime", "major", "minor", "secundus", "tertius", "reach", "gate", "rest", "station", "deep",
];

/// Proper name for ordinary stars, catalog designation for neutron stars
/// and pulsars.
pub fn generate_star_name<R: Rng + ?Sized>(star_type: StarType, rng: &mut R) -> String {
    if star_type.uses_catalog_name() {
        return catalog_designation(rng);
    }

    let mut parts: Vec<&str> = Vec::with_capacity(3);

    if rng.gen_bool(0.4) {
        parts.extend(NAME_PREFIXES.choose(rng));
    }
    parts.extend(NAME_ROOTS.choose(rng));
    if rng.gen_bool(0.3) {
        parts.extend(NAME_SUFFIXES.choose(rng));
    }

    parts.iter().map(|p| title_case(p)).collect::<Vec<_>>().join(" ")
}

/// e.g. "PSR 0437-47"
fn catalog_designation<R: Rng + ?Sized>(rng: &mut R) -> String {
    let prefix = CATALOG_PREFIXES.choose(rng).copied().unwrap_or("PSR");
    let right_ascension: u32 = rng.gen_range(0..10_000);
    let sign = if rng.gen_bool(0.5) { '+' } else { '-' };
    let declination: u32 = rng.gen_range(0..90);

    format!("{} {:04}{}{:02}", prefix, right_ascension, sign, declination)
}

/// True when the name is a catalog designation
pub fn is_catalog_name(name: &str) -> bool {
    CATALOG_PREFIXES.iter().any(|prefix| {
        name.strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix(' '))
            .is_some_and(|rest| rest.starts_with(|c: char| c.is_ascii_digit()))
    })
}

/// Name the planet at `index` (0-based) of the system around `star_name`.
///
/// Catalog stars: `"PSR 0437-47 a"`, `"… b"`. Other stars start at `B`:
/// `"Nova Kethara B"` when the star name has a space, `"Kethara-B"` otherwise.
pub fn generate_planet_name(star_name: &str, index: usize) -> String {
    if is_catalog_name(star_name) {
        return format!("{} {}", star_name, letter(b'a', index));
    }

    let designation = letter(b'B', index);
    if star_name.contains(' ') {
        format!("{} {}", star_name, designation)
    } else {
        format!("{}-{}", star_name, designation)
    }
}

fn letter(start: u8, index: usize) -> char {
    let offset = (index % 25) as u8;
    (start + offset) as char
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_catalog_names_for_compact_stars() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for star_type in [StarType::Neutron, StarType::Pulsar] {
            for _ in 0..50 {
                let name = generate_star_name(star_type, &mut rng);
                assert!(is_catalog_name(&name), "{} should be a catalog name", name);
                assert!(name.contains('+') || name.contains('-'));
            }
        }
    }

    #[test]
    fn test_proper_names_are_title_cased() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..100 {
            let name = generate_star_name(StarType::YellowDwarf, &mut rng);
            assert!(!is_catalog_name(&name));
            for word in name.split(' ') {
                let first = word.chars().next().unwrap();
                assert!(first.is_uppercase(), "{} not title cased", name);
            }
        }
    }

    #[test]
    fn test_planet_names_for_catalog_star() {
        assert_eq!(generate_planet_name("PSR 0437-47", 0), "PSR 0437-47 a");
        assert_eq!(generate_planet_name("SGR 1806-20", 2), "SGR 1806-20 c");
    }

    #[test]
    fn test_planet_names_for_proper_star() {
        assert_eq!(generate_planet_name("Nova Kethara", 0), "Nova Kethara B");
        assert_eq!(generate_planet_name("Nova Kethara", 1), "Nova Kethara C");
        assert_eq!(generate_planet_name("Helion", 0), "Helion-B");
        assert_eq!(generate_planet_name("Helion", 3), "Helion-E");
    }

    #[test]
    fn test_catalog_detection() {
        assert!(is_catalog_name("PSR 1257+12"));
        assert!(is_catalog_name("AXP 0142+61"));
        assert!(!is_catalog_name("Alpha Helion"));
        assert!(!is_catalog_name("Sagittarius A*"));
        // Proper names that happen to start with catalog letters
        assert!(!is_catalog_name("SGRaven"));
        assert!(!is_catalog_name("RX Helion"));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("kethara"), "Kethara");
        assert_eq!(title_case(""), "");
    }
}
