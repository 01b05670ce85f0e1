use std::collections::HashMap;

use lazy_static::lazy_static;

/// Sentinel species ID written when a record's name matches nothing.
pub const UNMATCHED_SPECIES: i32 = -99;

/// Case-insensitive lookup from a species name, common or scientific, to
/// its survey species ID.
#[derive(Clone, Debug, Default)]
pub struct SpeciesTable {
    names: HashMap<String, i32>,
}

impl SpeciesTable {
    /// Builds a table from `(id, names)` entries; every name, common or
    /// scientific, maps to the entry's ID.
    pub fn from_entries<I, N>(entries: I) -> SpeciesTable
    where
        I: IntoIterator<Item = (i32, N)>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        let mut names = HashMap::new();
        for (id, entry_names) in entries {
            for name in entry_names {
                names.insert(name.as_ref().to_uppercase(), id);
            }
        }
        Self { names }
    }

    /// The species recorded by the source survey program.
    pub fn builtin() -> &'static SpeciesTable {
        &BUILTIN
    }

    /// Looks a name up, ignoring case.
    pub fn lookup(&self, name: &str) -> Option<i32> {
        self.names.get(&name.trim().to_uppercase()).copied()
    }

    /// Looks a name up, falling back to [`UNMATCHED_SPECIES`].
    pub fn lookup_or_unmatched(&self, name: &str) -> i32 {
        self.lookup(name).unwrap_or(UNMATCHED_SPECIES)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

lazy_static! {
    static ref BUILTIN: SpeciesTable = SpeciesTable::from_entries([
        (1, ["DESERT TORTOISE", "GOPHERUS AGASSIZII"].as_slice()),
        (2, ["DESERT BIGHORN SHEEP", "OVIS CANADENSIS NELSONI"].as_slice()),
        (3, ["MULE DEER", "ODOCOILEUS HEMIONUS"].as_slice()),
        (4, ["PRONGHORN", "ANTILOCAPRA AMERICANA"].as_slice()),
        (5, ["MOUNTAIN LION", "PUMA CONCOLOR"].as_slice()),
        (6, ["COYOTE", "CANIS LATRANS"].as_slice()),
        (7, ["KIT FOX", "VULPES MACROTIS"].as_slice()),
        (8, ["BLACK-TAILED JACKRABBIT", "LEPUS CALIFORNICUS"].as_slice()),
        (9, ["GREATER SAGE-GROUSE", "CENTROCERCUS UROPHASIANUS"].as_slice()),
        (10, ["CHUKAR", "ALECTORIS CHUKAR"].as_slice()),
        (11, ["GOLDEN EAGLE", "AQUILA CHRYSAETOS"].as_slice()),
        (12, ["RED-TAILED HAWK", "BUTEO JAMAICENSIS"].as_slice()),
        (13, ["GILA MONSTER", "HELODERMA SUSPECTUM"].as_slice()),
        (14, ["CHUCKWALLA", "SAUROMALUS ATER"].as_slice()),
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let table = SpeciesTable::builtin();
        assert_eq!(table.lookup("desert tortoise"), Some(1));
        assert_eq!(table.lookup("Gopherus agassizii"), Some(1));
        assert_eq!(table.lookup("MULE DEER"), Some(3));
    }

    #[test]
    fn unmatched_falls_back_to_sentinel() {
        let table = SpeciesTable::builtin();
        assert_eq!(table.lookup("sasquatch"), None);
        assert_eq!(table.lookup_or_unmatched("sasquatch"), UNMATCHED_SPECIES);
    }

    #[test]
    fn custom_tables() {
        let table = SpeciesTable::from_entries([(42, ["BURRO"].as_slice())]);
        assert_eq!(table.lookup("burro"), Some(42));
        assert_eq!(table.len(), 1);
    }
}
