//! SKU filter chain for the Add Inventory form.
//!
//! Starting from the full SKU list, filters are applied in a fixed order
//! (brand → project type → product type → technology → wattage). The option
//! list for each field is the set of distinct values left after the filters
//! that precede it, in first-seen order.

use std::collections::HashSet;

use super::aggregate::{ProjectType, SkuRecord};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkuFilter {
    pub brand: Option<String>,
    /// Id from the project-type master list; SKUs carry the type by name.
    pub project_type_id: Option<String>,
    pub product_type: Option<String>,
    pub technology: Option<String>,
    pub wattage: Option<String>,
}

impl SkuFilter {
    pub fn is_empty(&self) -> bool {
        [
            &self.brand,
            &self.project_type_id,
            &self.product_type,
            &self.technology,
            &self.wattage,
        ]
        .iter()
        .all(|v| wanted(v).is_none())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DerivedOptions {
    /// SKUs satisfying every applied filter, in list order.
    pub candidates: Vec<SkuRecord>,
    pub brands: Vec<String>,
    pub project_types: Vec<ProjectType>,
    pub product_types: Vec<String>,
    pub technologies: Vec<String>,
    pub wattages: Vec<String>,
    pub sku_codes: Vec<String>,
}

impl DerivedOptions {
    /// False when the chosen combination matches no SKU at all.
    pub fn has_matches(&self) -> bool {
        !self.candidates.is_empty()
    }

    /// `(sku_code, label)` pairs for the SKU dropdown, labelled from the
    /// first candidate carrying each code.
    pub fn sku_choices(&self) -> Vec<(String, String)> {
        self.sku_codes
            .iter()
            .map(|code| {
                let label = self
                    .candidates
                    .iter()
                    .find(|s| s.sku_code.as_deref() == Some(code.as_str()))
                    .map(SkuRecord::display_label)
                    .unwrap_or_else(|| code.clone());
                (code.clone(), label)
            })
            .collect()
    }
}

fn wanted(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn field_matches(field: &Option<String>, filter: &Option<String>) -> bool {
    match wanted(filter) {
        None => true,
        Some(w) => field.as_deref().map(str::trim) == Some(w),
    }
}

fn distinct<'a, I>(values: I) -> Vec<String>
where
    I: Iterator<Item = &'a Option<String>>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for value in values.filter_map(wanted) {
        if seen.insert(value) {
            out.push(value.to_string());
        }
    }
    out
}

fn same_name(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

pub fn derive_options(
    skus: &[SkuRecord],
    filter: &SkuFilter,
    project_types: &[ProjectType],
) -> DerivedOptions {
    let brands = distinct(skus.iter().map(|s| &s.brand));

    let by_brand: Vec<&SkuRecord> = skus
        .iter()
        .filter(|s| field_matches(&s.brand, &filter.brand))
        .collect();

    let present_types = distinct(by_brand.iter().map(|s| &s.project_type));
    let project_type_options: Vec<ProjectType> = project_types
        .iter()
        .filter(|pt| present_types.iter().any(|name| same_name(name, &pt.name)))
        .cloned()
        .collect();

    // An id missing from the master list matches nothing rather than everything.
    let by_project: Vec<&SkuRecord> = match wanted(&filter.project_type_id) {
        None => by_brand,
        Some(id) => match project_types.iter().find(|pt| pt.id == id) {
            Some(pt) => by_brand
                .into_iter()
                .filter(|s| {
                    s.project_type
                        .as_deref()
                        .map_or(false, |name| same_name(name, &pt.name))
                })
                .collect(),
            None => Vec::new(),
        },
    };

    let product_types = distinct(by_project.iter().map(|s| &s.product_type));
    let by_product: Vec<&SkuRecord> = by_project
        .into_iter()
        .filter(|s| field_matches(&s.product_type, &filter.product_type))
        .collect();

    let technologies = distinct(by_product.iter().map(|s| &s.technology));
    let by_technology: Vec<&SkuRecord> = by_product
        .into_iter()
        .filter(|s| field_matches(&s.technology, &filter.technology))
        .collect();

    let wattages = distinct(by_technology.iter().map(|s| &s.wattage));
    let candidates: Vec<SkuRecord> = by_technology
        .into_iter()
        .filter(|s| field_matches(&s.wattage, &filter.wattage))
        .cloned()
        .collect();

    let sku_codes = distinct(candidates.iter().map(|s| &s.sku_code));

    DerivedOptions {
        candidates,
        brands,
        project_types: project_type_options,
        product_types,
        technologies,
        wattages,
        sku_codes,
    }
}

/// Form values reverse-populated from a picked SKU.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkuAutofill {
    pub sku_code: String,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub product_type: Option<String>,
    pub technology: Option<String>,
    pub wattage: Option<String>,
    pub project_type: Option<String>,
    pub sub_project_type: Option<String>,
    pub sub_category: Option<String>,
    /// Project-type id found by matching the SKU's project type name.
    pub category_type_id: Option<String>,
}

impl SkuAutofill {
    /// First SKU with this code wins; duplicates further down the list are ignored.
    pub fn from_sku(
        skus: &[SkuRecord],
        sku_code: &str,
        project_types: &[ProjectType],
    ) -> Option<Self> {
        let code = sku_code.trim();
        if code.is_empty() {
            return None;
        }
        let sku = skus
            .iter()
            .find(|s| s.sku_code.as_deref().map(str::trim) == Some(code))?;

        let category_type_id = sku.project_type.as_deref().and_then(|name| {
            project_types
                .iter()
                .find(|pt| same_name(&pt.name, name))
                .map(|pt| pt.id.clone())
        });

        Some(Self {
            sku_code: code.to_string(),
            name: sku.name.clone(),
            brand: sku.brand.clone(),
            product_type: sku.product_type.clone(),
            technology: sku.technology.clone(),
            wattage: sku.wattage.clone(),
            project_type: sku.project_type.clone(),
            sub_project_type: sku.sub_project_type.clone(),
            sub_category: sku.sub_category.clone(),
            category_type_id,
        })
    }

    /// Filter that narrows the chain down to the picked SKU's attributes.
    pub fn to_filter(&self) -> SkuFilter {
        SkuFilter {
            brand: self.brand.clone(),
            project_type_id: self.category_type_id.clone(),
            product_type: self.product_type.clone(),
            technology: self.technology.clone(),
            wattage: self.wattage.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sku(brand: &str, tech: &str, watt: &str, project: &str, code: &str) -> SkuRecord {
        SkuRecord {
            brand: Some(brand.to_string()),
            technology: Some(tech.to_string()),
            wattage: Some(watt.to_string()),
            project_type: Some(project.to_string()),
            product_type: Some("Panel".to_string()),
            sku_code: Some(code.to_string()),
            ..Default::default()
        }
    }

    fn project_types() -> Vec<ProjectType> {
        vec![
            ProjectType {
                id: "pt-res".to_string(),
                name: "Residential".to_string(),
            },
            ProjectType {
                id: "pt-com".to_string(),
                name: "Commercial".to_string(),
            },
        ]
    }

    fn catalogue() -> Vec<SkuRecord> {
        vec![
            sku("B1", "Mono Perc", "340", "Residential", "B1-340-MP"),
            sku("B1", "Poly", "330", "Residential", "B1-330-P"),
            sku("B2", "Mono Perc", "540", "Commercial", "B2-540-MP"),
            sku("B2", "TOPCon", "575", "commercial", "B2-575-TC"),
            sku("B1", "Mono Perc", "340", "Commercial", "B1-340-MP-C"),
        ]
    }

    fn filter(brand: Option<&str>, tech: Option<&str>) -> SkuFilter {
        SkuFilter {
            brand: brand.map(str::to_string),
            technology: tech.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_brand_and_technology_scenario() {
        let skus = vec![
            sku("B1", "Mono Perc", "340", "Residential", "A"),
            sku("B1", "Poly", "330", "Residential", "B"),
        ];
        let derived = derive_options(&skus, &filter(Some("B1"), Some("Mono Perc")), &[]);
        assert_eq!(derived.candidates, vec![skus[0].clone()]);
        assert_eq!(derived.technologies, vec!["Mono Perc", "Poly"]);
        assert_eq!(derived.wattages, vec!["340"]);
    }

    #[test]
    fn test_candidates_are_subset_satisfying_all_filters() {
        let skus = catalogue();
        let pts = project_types();
        let brands = [None, Some("B1"), Some("B2"), Some("B3")];
        let projects = [None, Some("pt-res"), Some("pt-com")];
        let techs = [None, Some("Mono Perc"), Some("Poly"), Some("TOPCon")];
        let watts = [None, Some("340"), Some("540"), Some("999")];

        for brand in brands {
            for project in projects {
                for tech in techs {
                    for watt in watts {
                        let f = SkuFilter {
                            brand: brand.map(str::to_string),
                            project_type_id: project.map(str::to_string),
                            product_type: None,
                            technology: tech.map(str::to_string),
                            wattage: watt.map(str::to_string),
                        };
                        let derived = derive_options(&skus, &f, &pts);
                        for c in &derived.candidates {
                            assert!(skus.contains(c));
                            assert!(brand.map_or(true, |b| c.brand.as_deref() == Some(b)));
                            assert!(tech.map_or(true, |t| c.technology.as_deref() == Some(t)));
                            assert!(watt.map_or(true, |w| c.wattage.as_deref() == Some(w)));
                            if let Some(id) = project {
                                let name = &pts.iter().find(|p| p.id == id).unwrap().name;
                                assert!(c
                                    .project_type
                                    .as_deref()
                                    .unwrap()
                                    .eq_ignore_ascii_case(name));
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_option_lists_follow_the_chain() {
        let derived = derive_options(&catalogue(), &filter(Some("B2"), None), &project_types());
        assert_eq!(derived.brands, vec!["B1", "B2"]);
        assert_eq!(
            derived.project_types.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
            vec!["pt-com"]
        );
        assert_eq!(derived.technologies, vec!["Mono Perc", "TOPCon"]);
        assert_eq!(derived.wattages, vec!["540", "575"]);
        assert_eq!(derived.sku_codes, vec!["B2-540-MP", "B2-575-TC"]);
    }

    #[test]
    fn test_project_type_matches_by_name_case_insensitively() {
        let f = SkuFilter {
            project_type_id: Some("pt-com".to_string()),
            ..Default::default()
        };
        let derived = derive_options(&catalogue(), &f, &project_types());
        assert_eq!(
            derived.sku_codes,
            vec!["B2-540-MP", "B2-575-TC", "B1-340-MP-C"]
        );
    }

    #[test]
    fn test_unknown_project_type_matches_nothing() {
        let f = SkuFilter {
            project_type_id: Some("pt-missing".to_string()),
            ..Default::default()
        };
        assert!(!derive_options(&catalogue(), &f, &project_types()).has_matches());
    }

    #[test]
    fn test_incompatible_selection_is_kept_and_yields_nothing() {
        let derived = derive_options(&catalogue(), &filter(Some("B1"), Some("TOPCon")), &[]);
        assert!(!derived.has_matches());
        // technology options still offer what B1 actually has
        assert_eq!(derived.technologies, vec!["Mono Perc", "Poly"]);
    }

    #[test]
    fn test_blank_filter_values_are_ignored() {
        let f = SkuFilter {
            brand: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(f.is_empty());
        assert_eq!(derive_options(&catalogue(), &f, &[]).candidates.len(), 5);
    }

    #[test]
    fn test_autofill_takes_first_match() {
        let mut skus = catalogue();
        let mut dup = sku("B9", "Poly", "100", "Residential", "B1-340-MP");
        dup.name = Some("Duplicate".to_string());
        skus.push(dup);

        let fill = SkuAutofill::from_sku(&skus, "B1-340-MP", &project_types()).unwrap();
        assert_eq!(fill.brand.as_deref(), Some("B1"));
        assert_eq!(fill.technology.as_deref(), Some("Mono Perc"));
        assert_eq!(fill.category_type_id.as_deref(), Some("pt-res"));

        let derived = derive_options(&skus, &fill.to_filter(), &project_types());
        assert_eq!(derived.sku_codes, vec!["B1-340-MP"]);
    }

    #[test]
    fn test_autofill_category_by_name() {
        let fill = SkuAutofill::from_sku(&catalogue(), "B2-575-TC", &project_types()).unwrap();
        assert_eq!(fill.project_type.as_deref(), Some("commercial"));
        assert_eq!(fill.category_type_id.as_deref(), Some("pt-com"));

        let fill = SkuAutofill::from_sku(&catalogue(), "B2-575-TC", &[]).unwrap();
        assert_eq!(fill.category_type_id, None);

        assert!(SkuAutofill::from_sku(&catalogue(), "nope", &project_types()).is_none());
        assert!(SkuAutofill::from_sku(&catalogue(), " ", &project_types()).is_none());
    }

    #[test]
    fn test_sku_choices_use_display_label() {
        let mut skus = catalogue();
        skus[2].name = Some("Bifacial 540".to_string());
        let derived = derive_options(&skus, &filter(Some("B2"), None), &[]);
        assert_eq!(
            derived.sku_choices(),
            vec![
                ("B2-540-MP".to_string(), "B2-540-MP - Bifacial 540".to_string()),
                ("B2-575-TC".to_string(), "B2-575-TC".to_string()),
            ]
        );
    }
}
