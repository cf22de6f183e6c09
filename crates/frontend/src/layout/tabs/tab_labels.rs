//! Tab titles, one place for the sidebar and the tab strip.

pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "d400_stock_summary" => "Stock by Brand",
        "a002_inventory_overview" => "Inventory Overview",
        "a002_inventory_add" => "Add Inventory",
        "a004_stock_threshold" => "Level Management",
        "a005_restock_limit" => "Restock Order Limits",
        "a006_lead" => "Leads",
        "a007_dealer" => "Dealers",
        "a008_service_ticket" => "Service Tickets",
        "a009_dispute" => "Disputes",
        _ => "Unknown page",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_keys() {
        assert_eq!(tab_label_for_key("a006_lead"), "Leads");
        assert_eq!(tab_label_for_key("p900_sales_register"), "Unknown page");
    }
}
