//! Segment-Namen und kompakte Segment-Mengen einer Grid-Zelle.
//!
//! Eine Zelle ist in 8 Dreiecke unterteilt, die vom Zellmittelpunkt zu den
//! 4 Ecken und 4 Kantenmitten aufgespannt werden.

use std::fmt;

/// Einer der 8 Dreiecks-Segmente einer Zelle (Reihenfolge im Uhrzeigersinn ab `Nw`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SegmentName {
    /// Oben links (Mittelpunkt → Ecke oben links → Kantenmitte oben)
    Nw,
    /// Oben rechts der oberen Kantenmitte
    N,
    /// Rechts oben
    Ne,
    /// Rechts unten
    E,
    /// Unten rechts
    Se,
    /// Unten links der unteren Kantenmitte
    S,
    /// Links unten
    Sw,
    /// Links oben
    W,
}

impl SegmentName {
    /// Alle Segmente in kanonischer Reihenfolge.
    pub const ALL: [SegmentName; 8] = [
        SegmentName::Nw,
        SegmentName::N,
        SegmentName::Ne,
        SegmentName::E,
        SegmentName::Se,
        SegmentName::S,
        SegmentName::Sw,
        SegmentName::W,
    ];

    /// Index in `ALL` (0..8).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Persistierter Name (`"nw"`, `"n"`, …).
    pub const fn as_str(self) -> &'static str {
        match self {
            SegmentName::Nw => "nw",
            SegmentName::N => "n",
            SegmentName::Ne => "ne",
            SegmentName::E => "e",
            SegmentName::Se => "se",
            SegmentName::S => "s",
            SegmentName::Sw => "sw",
            SegmentName::W => "w",
        }
    }

    /// Parsed einen Segment-Namen. Unbekannte Namen ergeben `None`.
    pub fn parse(name: &str) -> Option<SegmentName> {
        SegmentName::ALL
            .into_iter()
            .find(|segment| segment.as_str() == name)
    }
}

impl fmt::Display for SegmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Menge gefüllter Segmente als 8-Bit-Maske.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SegmentSet(u8);

impl SegmentSet {
    /// Leere Menge.
    pub const EMPTY: SegmentSet = SegmentSet(0);
    /// Alle 8 Segmente.
    pub const FULL: SegmentSet = SegmentSet(0xFF);

    /// Baut eine Menge aus typisierten Segmenten.
    pub fn from_segments(segments: &[SegmentName]) -> Self {
        segments.iter().copied().collect()
    }

    /// Baut eine Menge aus persistierten Namen; unbekannte Namen werden ignoriert.
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut set = SegmentSet::EMPTY;
        for name in names {
            match SegmentName::parse(name) {
                Some(segment) => set.insert(segment),
                None => log::debug!("Unbekannter Segment-Name ignoriert: {:?}", name),
            }
        }
        set
    }

    /// Prüft ob ein Segment enthalten ist.
    pub const fn contains(self, segment: SegmentName) -> bool {
        self.0 & (1 << segment.index()) != 0
    }

    /// Fügt ein Segment hinzu.
    pub fn insert(&mut self, segment: SegmentName) {
        self.0 |= 1 << segment.index();
    }

    /// Entfernt ein Segment.
    pub fn remove(&mut self, segment: SegmentName) {
        self.0 &= !(1 << segment.index());
    }

    /// Vereinigungsmenge.
    pub const fn union(self, other: SegmentSet) -> SegmentSet {
        SegmentSet(self.0 | other.0)
    }

    /// Differenzmenge (`self \ other`).
    pub const fn difference(self, other: SegmentSet) -> SegmentSet {
        SegmentSet(self.0 & !other.0)
    }

    /// Prüft ob kein Segment enthalten ist.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// `true` wenn alle 8 Segmente gefüllt sind.
    pub const fn is_full(self) -> bool {
        self.0 == 0xFF
    }

    /// Anzahl enthaltener Segmente.
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iteriert in kanonischer Reihenfolge über die enthaltenen Segmente.
    pub fn iter(self) -> impl Iterator<Item = SegmentName> {
        SegmentName::ALL
            .into_iter()
            .filter(move |segment| self.contains(*segment))
    }
}

impl FromIterator<SegmentName> for SegmentSet {
    fn from_iter<I: IntoIterator<Item = SegmentName>>(iter: I) -> Self {
        let mut set = SegmentSet::EMPTY;
        for segment in iter {
            set.insert(segment);
        }
        set
    }
}
