use anyhow::Result;

fn main() -> Result<()> {
    // Initialize core
    regdesk_core::init()?;

    // Create the application: config plus the persisted record store
    let mut app = regdesk_core::App::new()?;

    tracing::info!("RegDesk application started");

    println!("RegDesk - Registration Records & Weather Lookup");
    println!("\nConfiguration:");
    println!("  Config directory: {}", app.config().config_dir.display());
    println!("  Records on file:  {}", app.desk().store().len());

    // Graceful shutdown
    app.shutdown()?;

    Ok(())
}
