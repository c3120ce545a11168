//! Inner join of material property and price tables on material name.

/// Thermal property row for one envelope material.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialProperty {
    /// Material name (join key).
    pub material: String,
    /// Thermal conductivity (W/m·K).
    pub thermal_conductivity: f64,
}

impl MaterialProperty {
    pub fn new(material: &str, thermal_conductivity: f64) -> Self {
        Self {
            material: material.to_string(),
            thermal_conductivity,
        }
    }
}

/// Price row for one envelope material.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialPrice {
    /// Material name (join key).
    pub material: String,
    /// Price per unit.
    pub price_per_unit: f64,
}

impl MaterialPrice {
    pub fn new(material: &str, price_per_unit: f64) -> Self {
        Self {
            material: material.to_string(),
            price_per_unit,
        }
    }
}

/// Joined row carrying both the property and the price.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialRow {
    pub material: String,
    pub thermal_conductivity: f64,
    pub price_per_unit: f64,
}

/// Inner join on material name.
///
/// Preserves the order of the property table; a property row with no price
/// match (or vice versa) is dropped. The first matching price wins if the
/// price table carries duplicates.
pub fn merge_on_material(
    properties: &[MaterialProperty],
    prices: &[MaterialPrice],
) -> Vec<MaterialRow> {
    properties
        .iter()
        .filter_map(|p| {
            prices
                .iter()
                .find(|q| q.material == p.material)
                .map(|q| MaterialRow {
                    material: p.material.clone(),
                    thermal_conductivity: p.thermal_conductivity,
                    price_per_unit: q.price_per_unit,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn properties() -> Vec<MaterialProperty> {
        vec![
            MaterialProperty::new("Brick", 0.6),
            MaterialProperty::new("Concrete", 1.7),
            MaterialProperty::new("Glass", 0.8),
        ]
    }

    fn prices() -> Vec<MaterialPrice> {
        vec![
            MaterialPrice::new("Brick", 50.0),
            MaterialPrice::new("Concrete", 80.0),
            MaterialPrice::new("Glass", 120.0),
        ]
    }

    #[test]
    fn full_match_joins_every_row() {
        let merged = merge_on_material(&properties(), &prices());
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0].material, "Brick");
        assert_eq!(merged[0].thermal_conductivity, 0.6);
        assert_eq!(merged[0].price_per_unit, 50.0);
        assert_eq!(merged[2].material, "Glass");
        assert_eq!(merged[2].price_per_unit, 120.0);
    }

    #[test]
    fn unmatched_rows_are_dropped() {
        let mut props = properties();
        props.push(MaterialProperty::new("Timber", 0.14));
        let merged = merge_on_material(&props, &prices());
        assert_eq!(merged.len(), 3);
        assert!(merged.iter().all(|r| r.material != "Timber"));
    }

    #[test]
    fn left_order_is_preserved() {
        let mut rev_prices = prices();
        rev_prices.reverse();
        let merged = merge_on_material(&properties(), &rev_prices);
        let names: Vec<&str> = merged.iter().map(|r| r.material.as_str()).collect();
        assert_eq!(names, vec!["Brick", "Concrete", "Glass"]);
    }

    #[test]
    fn empty_tables_join_to_empty() {
        assert!(merge_on_material(&[], &prices()).is_empty());
        assert!(merge_on_material(&properties(), &[]).is_empty());
    }
}
