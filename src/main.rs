use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use catalog_importer::app::import_use_case::{CancelFlag, ImportUseCase};
use catalog_importer::infra::csv_row_source::CsvRowSource;
use catalog_importer::infra::id_generator::UuidGenerator;
use catalog_importer::infra::json_output_adapter::JsonFileSink;
use catalog_importer::infra::taxonomy_loader::load_categories;
use catalog_importer::observability::logging::init_logging;
use catalog_importer::pipeline::{ImportOptions, MetafieldKeyStrategy};

#[derive(Parser)]
#[command(name = "catalog-importer")]
#[command(about = "Convert a flat per-variant product export into a nested catalog document")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to the product export CSV
    input: PathBuf,
    /// Path for the generated JSON document
    output: PathBuf,
    /// Category taxonomy JSON; omit to leave every product uncategorized
    #[arg(long)]
    taxonomy: Option<PathBuf>,
    /// How metafield columns are keyed in variant attribute maps
    #[arg(long, value_enum, default_value_t = MetafieldKeys::Label)]
    metafield_keys: MetafieldKeys,
    /// Process exports without a Status column
    #[arg(long)]
    without_status: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MetafieldKeys {
    /// Human-readable label before the parenthesis
    Label,
    /// Suffix after product.metafields.
    InternalKey,
}

impl From<MetafieldKeys> for MetafieldKeyStrategy {
    fn from(keys: MetafieldKeys) -> Self {
        match keys {
            MetafieldKeys::Label => MetafieldKeyStrategy::Label,
            MetafieldKeys::InternalKey => MetafieldKeyStrategy::InternalKey,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    init_logging();

    let options = ImportOptions {
        metafield_keys: cli.metafield_keys.into(),
        include_status: !cli.without_status,
    };

    let taxonomy = cli.taxonomy.map(load_categories).unwrap_or_default();
    let mut source = CsvRowSource::open(&cli.input, options.include_status)?;
    let sink = JsonFileSink::new(&cli.output);

    // Ctrl-C aborts cooperatively between rows, leaving no partial output
    let cancel = CancelFlag::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        });
    }

    let use_case = ImportUseCase::new(taxonomy, Box::new(UuidGenerator), options)
        .with_cancel_flag(cancel);
    let count = use_case.run(&mut source, &sink).await?;

    println!(
        "Processed {} products and saved to {}",
        count,
        cli.output.display()
    );
    Ok(())
}
