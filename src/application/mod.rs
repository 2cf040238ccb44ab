pub mod use_cases;

pub use use_cases::store_discounts::{StoreDiscountsReport, StoreLookup};
pub use use_cases::store_products::StoreProductsReport;
