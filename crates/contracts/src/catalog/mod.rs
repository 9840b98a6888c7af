//! Catalog index: the products, customization categories and option values
//! that drive the dynamic fields of the job order form.

pub mod aggregate;
pub mod resolver;

pub use aggregate::{
    is_core_category, Catalog, Category, CategoryDto, OptionScope, Product, ProductDto, Setting,
    SettingDto, CORE_CATEGORIES,
};
pub use resolver::{resolve_options, ResolvedOptions};
