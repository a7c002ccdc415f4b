//! Compact sets of symbologies and the pre-built category groups.
//!
//! [`SymbologySet`] is a bit-set with one bit per [`Symbology`]. The category
//! constants are `const` items, evaluated at compile time and immutable for
//! the lifetime of the process.

use crate::symbology::Symbology;
use std::fmt;

/// An unordered set of unique symbologies.
///
/// Iteration and [`Display`](fmt::Display) follow [`Symbology::ALL`] order,
/// so the displayed form is itself a valid comma-separated format list.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SymbologySet {
    bits: u32,
}

impl SymbologySet {
    /// The empty set
    pub const EMPTY: Self = Self { bits: 0 };

    /// Creates an empty set
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Builds a set from a slice; duplicates collapse
    pub const fn of(symbologies: &[Symbology]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < symbologies.len() {
            bits |= symbologies[i].bit();
            i += 1;
        }
        Self { bits }
    }

    /// The set of every known symbology
    pub const fn all() -> Self {
        Self::of(&Symbology::ALL)
    }

    /// Adds a symbology; returns `true` if it was not already present
    pub fn insert(&mut self, symbology: Symbology) -> bool {
        let added = !self.contains(symbology);
        self.bits |= symbology.bit();
        added
    }

    /// Removes a symbology; returns `true` if it was present
    pub fn remove(&mut self, symbology: Symbology) -> bool {
        let present = self.contains(symbology);
        self.bits &= !symbology.bit();
        present
    }

    /// Checks membership
    pub const fn contains(&self, symbology: Symbology) -> bool {
        self.bits & symbology.bit() != 0
    }

    /// Number of symbologies in the set
    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// True when the set holds nothing
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Set union
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Set intersection
    pub const fn intersection(self, other: Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// True if every member of `self` is in `other`
    pub const fn is_subset(&self, other: &Self) -> bool {
        self.bits & !other.bits == 0
    }

    /// Iterates members in declaration order
    pub fn iter(&self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl fmt::Debug for SymbologySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for SymbologySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, symbology) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(symbology.name())?;
        }
        Ok(())
    }
}

impl FromIterator<Symbology> for SymbologySet {
    fn from_iter<T: IntoIterator<Item = Symbology>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<Symbology> for SymbologySet {
    fn extend<T: IntoIterator<Item = Symbology>>(&mut self, iter: T) {
        for symbology in iter {
            self.insert(symbology);
        }
    }
}

impl IntoIterator for SymbologySet {
    type Item = Symbology;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl IntoIterator for &SymbologySet {
    type Item = Symbology;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the members of a [`SymbologySet`]
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u32,
}

impl Iterator for Iter {
    type Item = Symbology;

    fn next(&mut self) -> Option<Symbology> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros() as usize;
        // Clear lowest set bit
        self.bits &= self.bits - 1;
        Some(Symbology::ALL[index])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Iter {}

/// Retail product codes: UPC-A, UPC-E, EAN-13, EAN-8, RSS-14, RSS-Expanded
pub const PRODUCT_FORMATS: SymbologySet = SymbologySet::of(&[
    Symbology::UpcA,
    Symbology::UpcE,
    Symbology::Ean13,
    Symbology::Ean8,
    Symbology::Rss14,
    Symbology::RssExpanded,
]);

/// Industrial linear codes
pub const INDUSTRIAL_FORMATS: SymbologySet = SymbologySet::of(&[
    Symbology::Code39,
    Symbology::Code93,
    Symbology::Code128,
    Symbology::Itf,
    Symbology::Codabar,
]);

/// Every linear code the scan modes know about
pub const ONE_D_FORMATS: SymbologySet = PRODUCT_FORMATS.union(INDUSTRIAL_FORMATS);

/// QR Code only
pub const QR_CODE_FORMATS: SymbologySet = SymbologySet::of(&[Symbology::QrCode]);

/// Data Matrix only
pub const DATA_MATRIX_FORMATS: SymbologySet = SymbologySet::of(&[Symbology::DataMatrix]);

/// Aztec only
pub const AZTEC_FORMATS: SymbologySet = SymbologySet::of(&[Symbology::Aztec]);

/// PDF417 only
pub const PDF417_FORMATS: SymbologySet = SymbologySet::of(&[Symbology::Pdf417]);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_insert_and_remove() {
        let mut set = SymbologySet::new();
        assert!(set.insert(Symbology::QrCode));
        assert!(!set.insert(Symbology::QrCode));
        assert_eq!(set.len(), 1);
        assert!(set.remove(Symbology::QrCode));
        assert!(!set.remove(Symbology::QrCode));
        assert!(set.is_empty());
    }

    #[test]
    fn test_iteration_follows_declaration_order() {
        let set: SymbologySet = [Symbology::UpcE, Symbology::Aztec, Symbology::Ean13]
            .into_iter()
            .collect();
        let members: Vec<_> = set.iter().collect();
        assert_eq!(
            members,
            vec![Symbology::Aztec, Symbology::Ean13, Symbology::UpcE]
        );
        assert_eq!(set.iter().len(), 3);
    }

    #[test]
    fn test_display_is_a_format_list() {
        let set = SymbologySet::of(&[Symbology::QrCode, Symbology::Code128]);
        assert_eq!(set.to_string(), "CODE_128,QR_CODE");
        assert_eq!(SymbologySet::EMPTY.to_string(), "");
    }

    #[test]
    fn test_category_sizes() {
        assert_eq!(PRODUCT_FORMATS.len(), 6);
        assert_eq!(INDUSTRIAL_FORMATS.len(), 5);
        assert_eq!(ONE_D_FORMATS.len(), 11);
        for single in [QR_CODE_FORMATS, DATA_MATRIX_FORMATS, AZTEC_FORMATS, PDF417_FORMATS] {
            assert_eq!(single.len(), 1);
        }
    }

    #[test]
    fn test_product_and_industrial_are_disjoint() {
        assert!(PRODUCT_FORMATS
            .intersection(INDUSTRIAL_FORMATS)
            .is_empty());
        assert!(PRODUCT_FORMATS.is_subset(&ONE_D_FORMATS));
        assert!(INDUSTRIAL_FORMATS.is_subset(&ONE_D_FORMATS));
    }

    #[test]
    fn test_one_d_formats_are_linear() {
        assert!(ONE_D_FORMATS.iter().all(Symbology::is_one_dimensional));
    }

    #[test]
    fn test_all_contains_everything() {
        let all = SymbologySet::all();
        assert_eq!(all.len(), Symbology::ALL.len());
        assert!(ONE_D_FORMATS.is_subset(&all));
    }
}
