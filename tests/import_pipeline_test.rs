use anyhow::Result;
use std::fs;
use std::sync::atomic::{AtomicU64, Ordering};
use tempfile::tempdir;

use catalog_importer::app::import_use_case::ImportUseCase;
use catalog_importer::infra::csv_row_source::CsvRowSource;
use catalog_importer::infra::id_generator::UuidGenerator;
use catalog_importer::infra::json_output_adapter::JsonFileSink;
use catalog_importer::infra::taxonomy_loader::load_categories;
use catalog_importer::pipeline::{IdGenerator, ImportOptions};
use catalog_importer::Product;

struct SequentialIds(AtomicU64);

impl SequentialIds {
    fn new() -> Self {
        Self(AtomicU64::new(0))
    }
}

impl IdGenerator for SequentialIds {
    fn generate(&self) -> String {
        format!("id-{}", self.0.fetch_add(1, Ordering::Relaxed))
    }
}

const EXPORT: &str = "\
Title,Handle,Description,Product Category,Type,Tags,Variant SKU,Price,Compare At Price,Image,Status,Option1 Name,Option1 Value,Option2 Name,Option2 Value,Option3 Name,Option3 Value,Material (product.metafields.custom.material)
Trail Tent,trail-tent,Two-person tent,Outdoor > Tents > Dome,Tent,\"camping, outdoor\",TT-GRN,129.99,149.99,tent-green.jpg,active,Color,Green,,,,,Nylon
,trail-tent,,,,,TT-ORG,129.99,,tent-orange.jpg,,,Orange,,,,,
Camp Mug,camp-mug,Enamel mug,Kitchen > Drinkware,Mug,,CM-01,14.5,0,mug.jpg,active,,,,,,,
";

const TAXONOMY: &str = r#"[
  {"id": "gid://shopify/TaxonomyCategory/aa-1", "name": "Dome", "parentCategoryId": null, "attributes": {}},
  {"id": "gid://shopify/TaxonomyCategory/bb-2", "name": "Drinkware", "parentCategoryId": null, "attributes": {}}
]"#;

async fn run_import(ids: Box<dyn IdGenerator>) -> Result<Vec<Product>> {
    let dir = tempdir()?;
    let input = dir.path().join("export.csv");
    let taxonomy_path = dir.path().join("taxonomy.json");
    let output = dir.path().join("products.json");
    fs::write(&input, EXPORT)?;
    fs::write(&taxonomy_path, TAXONOMY)?;

    let taxonomy = load_categories(&taxonomy_path);
    let mut source = CsvRowSource::open(&input, true)?;
    let sink = JsonFileSink::new(&output);
    let use_case = ImportUseCase::new(taxonomy, ids, ImportOptions::default());
    let count = use_case.run(&mut source, &sink).await?;
    assert_eq!(count, 2);

    let raw = fs::read_to_string(&output)?;
    Ok(serde_json::from_str(&raw)?)
}

#[tokio::test]
async fn test_export_becomes_nested_document() -> Result<()> {
    let products = run_import(Box::new(SequentialIds::new())).await?;

    assert_eq!(products.len(), 2);

    let tent = &products[0];
    assert_eq!(tent.handle, "trail-tent");
    assert_eq!(tent.title, "Trail Tent");
    assert_eq!(tent.category_id, "gid://shopify/TaxonomyCategory/aa-1");
    assert_eq!(tent.tags, vec!["camping", "outdoor"]);
    assert_eq!(tent.status.as_deref(), Some("active"));
    assert_eq!(tent.variants.len(), 2);

    // First variant carries the explicit option pair and the metafield.
    let green = &tent.variants[0];
    assert_eq!(green.sku, "TT-GRN");
    assert_eq!(green.price, 129.99);
    assert_eq!(green.compare_at_price, 149.99);
    assert_eq!(green.attributes["color"], "Green");
    assert_eq!(green.attributes["material"], "Nylon");

    // Second row omits the option name and the metafield: the name and the
    // metafield value are inherited, the option value is refreshed.
    let orange = &tent.variants[1];
    assert_eq!(orange.sku, "TT-ORG");
    assert_eq!(orange.compare_at_price, 0.0);
    assert_eq!(orange.attributes["color"], "Orange");
    assert_eq!(orange.attributes["material"], "Nylon");

    let mug = &products[1];
    assert_eq!(mug.handle, "camp-mug");
    assert_eq!(mug.category_id, "gid://shopify/TaxonomyCategory/bb-2");
    assert!(mug.tags.is_empty());
    assert_eq!(mug.variants.len(), 1);
    assert_eq!(mug.variants[0].price, 14.5);
    // The carry-forward context is keyed to the row stream, not the product:
    // a product whose rows define nothing inherits the previous run's pairs.
    assert_eq!(mug.variants[0].attributes["color"], "Orange");
    assert_eq!(mug.variants[0].attributes["material"], "Nylon");

    Ok(())
}

#[tokio::test]
async fn test_rerun_is_identical_modulo_ids() -> Result<()> {
    // Two runs with fresh random ids must differ only in generated ids.
    let first = run_import(Box::new(UuidGenerator)).await?;
    let second = run_import(Box::new(UuidGenerator)).await?;

    let strip = |products: Vec<Product>| -> serde_json::Value {
        let mut value = serde_json::to_value(products).unwrap();
        for product in value.as_array_mut().unwrap() {
            product["id"] = serde_json::Value::Null;
            for variant in product["variants"].as_array_mut().unwrap() {
                variant["id"] = serde_json::Value::Null;
            }
        }
        value
    };

    assert_eq!(strip(first), strip(second));
    Ok(())
}

#[tokio::test]
async fn test_missing_taxonomy_degrades_to_uncategorized() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("export.csv");
    let output = dir.path().join("products.json");
    fs::write(&input, EXPORT)?;

    let taxonomy = load_categories(dir.path().join("missing.json"));
    assert!(taxonomy.is_empty());

    let mut source = CsvRowSource::open(&input, true)?;
    let sink = JsonFileSink::new(&output);
    let use_case = ImportUseCase::new(
        taxonomy,
        Box::new(SequentialIds::new()),
        ImportOptions::default(),
    );
    use_case.run(&mut source, &sink).await?;

    let products: Vec<Product> = serde_json::from_str(&fs::read_to_string(&output)?)?;
    for product in &products {
        assert_eq!(product.category_id, "gid://shopify/TaxonomyCategory/na");
    }
    Ok(())
}

#[tokio::test]
async fn test_invalid_price_leaves_no_output_file() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("export.csv");
    let output = dir.path().join("products.json");
    fs::write(
        &input,
        "Title,Handle,Description,Type,Tags,Variant SKU,Price,Compare At Price,Image,Status\n\
         Tent,tent,,,,T-1,not-a-price,,img,active\n",
    )?;

    let mut source = CsvRowSource::open(&input, true)?;
    let sink = JsonFileSink::new(&output);
    let use_case = ImportUseCase::new(
        Vec::new(),
        Box::new(SequentialIds::new()),
        ImportOptions::default(),
    );
    let result = use_case.run(&mut source, &sink).await;

    assert!(result.is_err());
    assert!(!output.exists());
    Ok(())
}
