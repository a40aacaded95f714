//! Country and name labels for generated players.
//!
//! Labels are flavor only. Generation talks to a [`LabelSource`] so callers
//! can plug in their own tables; [`DefaultLabels`] ships a small built-in set.

use rand::Rng;

use crate::sampling::{pick, weighted_index};

pub trait LabelSource: Send + Sync {
    fn select_country(&self, rng: &mut dyn rand::RngCore) -> String;
    fn select_name(&self, country: &str, rng: &mut dyn rand::RngCore) -> String;
}

/// Country weights roughly follow historic league representation.
static COUNTRIES: &[(&str, f64)] = &[
    ("USA", 23461.0),
    ("Canada", 392.0),
    ("Serbia", 341.0),
    ("France", 294.0),
    ("Spain", 251.0),
    ("Italy", 228.0),
    ("Croatia", 216.0),
    ("Greece", 214.0),
    ("Lithuania", 195.0),
    ("Germany", 181.0),
    ("Australia", 174.0),
    ("Nigeria", 136.0),
    ("Slovenia", 105.0),
    ("Brazil", 82.0),
    ("Argentina", 71.0),
];

struct NamePool {
    country: &'static str,
    first: &'static [&'static str],
    last: &'static [&'static str],
}

static NAME_POOLS: &[NamePool] = &[
    NamePool {
        country: "USA",
        first: &["James", "Michael", "Chris", "Anthony", "Kevin", "Marcus", "Tyler", "Jalen", "Devin", "Brandon"],
        last: &["Johnson", "Williams", "Brown", "Davis", "Miller", "Harris", "Jackson", "Thompson", "Walker", "Green"],
    },
    NamePool {
        country: "Canada",
        first: &["Andrew", "Shai", "Jamal", "RJ", "Dillon", "Kelly"],
        last: &["Wiggins", "Murray", "Barrett", "Brooks", "Olynyk", "Powell"],
    },
    NamePool {
        country: "Serbia",
        first: &["Nikola", "Bogdan", "Nemanja", "Vasilije", "Aleksej", "Marko"],
        last: &["Jokic", "Bogdanovic", "Bjelica", "Micic", "Pokusevski", "Simonovic"],
    },
    NamePool {
        country: "France",
        first: &["Rudy", "Victor", "Evan", "Nicolas", "Frank", "Bilal"],
        last: &["Gobert", "Fournier", "Batum", "Ntilikina", "Coulibaly", "Lessort"],
    },
    NamePool {
        country: "Spain",
        first: &["Pau", "Marc", "Ricky", "Sergio", "Willy", "Juancho"],
        last: &["Gasol", "Rubio", "Llull", "Hernangomez", "Rodriguez", "Garuba"],
    },
    NamePool {
        country: "Greece",
        first: &["Giannis", "Thanasis", "Kostas", "Georgios", "Nick", "Tyler"],
        last: &["Papanikolaou", "Sloukas", "Calathes", "Papagiannis", "Printezis", "Dorsey"],
    },
    NamePool {
        country: "Lithuania",
        first: &["Domantas", "Jonas", "Arvydas", "Sarunas", "Rokas", "Mindaugas"],
        last: &["Sabonis", "Valanciunas", "Jasikevicius", "Jokubaitis", "Kuzminskas", "Motiejunas"],
    },
];

/// Used for countries without a dedicated pool.
static FALLBACK_FIRST: &[&str] = &["Alex", "Daniel", "Luka", "Mateo", "Samuel", "Ivan", "Oscar", "Leo"];
static FALLBACK_LAST: &[&str] = &["Novak", "Silva", "Meyer", "Rossi", "Kovac", "Okafor", "Petrov", "Moreau"];

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultLabels;

impl LabelSource for DefaultLabels {
    fn select_country(&self, rng: &mut dyn rand::RngCore) -> String {
        let weights: Vec<f64> = COUNTRIES.iter().map(|(_, w)| *w).collect();
        weighted_index(rng, &weights)
            .map(|i| COUNTRIES[i].0)
            .unwrap_or("USA")
            .to_string()
    }

    fn select_name(&self, country: &str, rng: &mut dyn rand::RngCore) -> String {
        let (first, last) = NAME_POOLS
            .iter()
            .find(|pool| pool.country == country)
            .map(|pool| (pool.first, pool.last))
            .unwrap_or((FALLBACK_FIRST, FALLBACK_LAST));

        let first = pick(rng, first).copied().unwrap_or("Player");
        let last = pick(rng, last).copied().unwrap_or("Unknown");
        format!("{} {}", first, last)
    }
}

/// Convenience wrapper for generic call sites.
pub fn label_pair<R: Rng>(source: &dyn LabelSource, rng: &mut R) -> (String, String) {
    let country = source.select_country(rng);
    let name = source.select_name(&country, rng);
    (country, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_default_labels_are_known() {
        let mut rng = ChaCha8Rng::seed_from_u64(31);
        for _ in 0..200 {
            let (country, name) = label_pair(&DefaultLabels, &mut rng);
            assert!(COUNTRIES.iter().any(|(c, _)| *c == country), "unknown country {}", country);
            assert_eq!(name.split(' ').count(), 2, "bad name {:?}", name);
        }
    }

    #[test]
    fn test_unknown_country_uses_fallback_pool() {
        let mut rng = ChaCha8Rng::seed_from_u64(32);
        let name = DefaultLabels.select_name("Atlantis", &mut rng);
        let first = name.split(' ').next().unwrap();
        assert!(FALLBACK_FIRST.contains(&first));
    }
}
