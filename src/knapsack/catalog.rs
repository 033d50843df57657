//! Item table.

use super::error::KnapsackError;
use rand::Rng;

/// Item identifier, an index into the catalog.
pub type ItemId = usize;

/// One item that may be packed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: ItemId,
    pub weight: f64,
    pub value: f64,
}

/// Immutable mapping from item id to weight and value.
///
/// Ids are dense: the item at position `i` has id `i`.
///
/// # Examples
///
/// ```
/// use u_mokp::knapsack::ItemCatalog;
///
/// let catalog = ItemCatalog::from_pairs(&[(2.0, 10.0), (3.0, 20.0), (5.0, 5.0)]).unwrap();
/// assert_eq!(catalog.len(), 3);
/// assert_eq!(catalog.get(1).map(|item| item.value), Some(20.0));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemCatalog {
    items: Vec<Item>,
}

impl ItemCatalog {
    /// Builds a catalog, validating every item.
    pub fn new(items: Vec<Item>) -> Result<Self, KnapsackError> {
        for (position, item) in items.iter().enumerate() {
            if item.id != position {
                return Err(KnapsackError::NonDenseId {
                    position,
                    id: item.id,
                });
            }
            if !(item.weight.is_finite() && item.weight > 0.0) {
                return Err(KnapsackError::InvalidWeight {
                    id: item.id,
                    weight: item.weight,
                });
            }
            if !(item.value.is_finite() && item.value >= 0.0) {
                return Err(KnapsackError::InvalidValue {
                    id: item.id,
                    value: item.value,
                });
            }
        }
        Ok(Self { items })
    }

    /// Builds a catalog from `(weight, value)` pairs; ids follow position.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self, KnapsackError> {
        let items = pairs
            .iter()
            .enumerate()
            .map(|(id, &(weight, value))| Item { id, weight, value })
            .collect();
        Self::new(items)
    }

    /// Generates `n` random items: integer weight in `1..=10`, value in `[0, 100)`.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let items = (0..n)
            .map(|id| Item {
                id,
                weight: rng.random_range(1..=10) as f64,
                value: rng.random_range(0.0..100.0),
            })
            .collect();
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a ItemCatalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_from_pairs_assigns_ids() {
        let catalog = ItemCatalog::from_pairs(&[(2.0, 10.0), (3.0, 20.0)]).unwrap();
        let ids: Vec<ItemId> = catalog.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![0, 1]);
        assert!(catalog.get(2).is_none());
    }

    #[test]
    fn test_rejects_non_positive_weight() {
        let err = ItemCatalog::from_pairs(&[(1.0, 1.0), (0.0, 5.0)]).unwrap_err();
        assert_eq!(err, KnapsackError::InvalidWeight { id: 1, weight: 0.0 });
        assert!(ItemCatalog::from_pairs(&[(f64::INFINITY, 1.0)]).is_err());
    }

    #[test]
    fn test_rejects_negative_value() {
        let err = ItemCatalog::from_pairs(&[(1.0, -1.0)]).unwrap_err();
        assert!(matches!(err, KnapsackError::InvalidValue { id: 0, .. }));
    }

    #[test]
    fn test_rejects_sparse_ids() {
        let items = vec![
            Item { id: 0, weight: 1.0, value: 1.0 },
            Item { id: 5, weight: 1.0, value: 1.0 },
        ];
        let err = ItemCatalog::new(items).unwrap_err();
        assert_eq!(err, KnapsackError::NonDenseId { position: 1, id: 5 });
    }

    #[test]
    fn test_random_catalog_ranges() {
        let mut rng = StdRng::seed_from_u64(72);
        let catalog = ItemCatalog::random(200, &mut rng);
        assert_eq!(catalog.len(), 200);
        for item in &catalog {
            assert!((1.0..=10.0).contains(&item.weight));
            assert_eq!(item.weight.fract(), 0.0);
            assert!((0.0..100.0).contains(&item.value));
        }
        // Random catalogs satisfy the same checks as hand-built ones
        assert!(ItemCatalog::new(catalog.iter().copied().collect()).is_ok());
    }

    #[test]
    fn test_random_catalog_is_reproducible() {
        let a = ItemCatalog::random(20, &mut StdRng::seed_from_u64(72));
        let b = ItemCatalog::random(20, &mut StdRng::seed_from_u64(72));
        assert_eq!(a, b);
    }
}
