pub mod report;
pub mod store_discounts;
pub mod store_products;

#[cfg(test)]
pub(crate) mod test_support;
