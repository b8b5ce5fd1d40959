pub mod a001_product_category;
pub mod a002_unit_of_measure;
pub mod a003_predefined_product;
pub mod a004_product;
pub mod common;
