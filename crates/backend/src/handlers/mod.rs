pub mod a001_client;
pub mod a002_product;
pub mod a003_sale;
pub mod logs;
pub mod u501_import_sales;
