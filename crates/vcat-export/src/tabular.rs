//! CSV exporters: a standard catalog CSV and a Google-Sheets flavor
//! whose first column carries `=IMAGE(...)` formulas so the sheet
//! renders product photos inline.

use std::path::Path;

use vcat_core::CanonicalProduct;

use crate::error::ExportError;

const HEADER: [&str; 11] = [
    "id",
    "name",
    "brand",
    "category",
    "list_price",
    "selling_price",
    "discount_percent",
    "sizes",
    "image_url",
    "product_url",
    "description",
];

/// Writes the catalog as a plain UTF-8 CSV with a header row.
///
/// # Errors
///
/// Returns [`ExportError`] on I/O or CSV serialization failure.
pub fn write_csv(path: &Path, products: &[CanonicalProduct]) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(HEADER)?;
    for product in products {
        writer.write_record(base_record(product))?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes a CSV for Google Sheets import: same columns as [`write_csv`]
/// preceded by a `photo` column of `=IMAGE("...")` formulas. Products
/// without an image get an empty cell rather than a broken formula.
///
/// # Errors
///
/// Returns [`ExportError`] on I/O or CSV serialization failure.
pub fn write_sheets_csv(path: &Path, products: &[CanonicalProduct]) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec!["photo"];
    header.extend(HEADER);
    writer.write_record(&header)?;

    for product in products {
        let photo = if product.image_url.is_empty() {
            String::new()
        } else {
            format!("=IMAGE(\"{}\")", product.image_url)
        };
        let mut record = vec![photo];
        record.extend(base_record(product));
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

/// One CSV row in [`HEADER`] order. Sizes are joined with `", "`; the
/// set's own ordering makes the cell deterministic.
fn base_record(product: &CanonicalProduct) -> Vec<String> {
    let sizes = product
        .sizes
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    vec![
        product.id.clone(),
        product.name.clone(),
        product.brand.clone(),
        product.category.clone(),
        product.list_price.to_string(),
        product.selling_price.to_string(),
        product.discount_percent.to_string(),
        sizes,
        product.image_url.clone(),
        product.product_url.clone(),
        product.description.clone(),
    ]
}
