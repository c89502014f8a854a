use std::collections::HashSet;

pub const PORT_TYPES: &[&str] = &["1000base-T", "10Gbase-T", "SFP+", "SFP28", "QSFP+", "QSFP28"];

pub const SWITCH_CHIPS: &[&str] = &["Trident2", "Trident2+"];

/// Set of recognized values for one enumerated catalog field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    entries: HashSet<String>,
}

impl AllowList {
    pub fn from_static(list: &[&str]) -> Self {
        Self {
            entries: list.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.entries.contains(value)
    }

    pub fn extend<I, S>(&mut self, extra: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.extend(extra.into_iter().map(Into::into));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Allow-lists a document is checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub port_types: AllowList,
    pub switch_chips: AllowList,
    /// Chips are listed but only enforced on request.
    pub check_switch_chips: bool,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            port_types: AllowList::from_static(PORT_TYPES),
            switch_chips: AllowList::from_static(SWITCH_CHIPS),
            check_switch_chips: false,
        }
    }
}
