use clap::Parser;
use generate_oui::cli::Args;
use generate_oui::generate_oui;
use generate_oui::logging::init_logging;
use generate_oui::models::default_filter_table;
use generate_oui::source::CsvSource;
use std::error::Error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let args = Args::parse();
    dotenv::dotenv().ok();
    init_logging()?;
    //
    log::info!("#Start main()");

    let source = CsvSource::from_override(args.oui_csv);
    let table = default_filter_table()?;
    let outcome = generate_oui(&source, &args.output_file, &table).await?;

    log::info!(
        "#End main() wrote {} entries to {}",
        outcome.document.len(),
        args.output_file.display()
    );
    Ok(())
}
