pub mod a002_inventory_item;
pub mod a003_sku;
pub mod a004_stock_threshold;
pub mod a005_restock_limit;
pub mod a006_lead;
pub mod a007_dealer;
pub mod a008_service_ticket;
pub mod a009_dispute;
