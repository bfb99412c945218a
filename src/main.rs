use std::io;

use anyhow::Result;
use tracing::info;

use ordo_script::Session;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("ordo starting");
    Session::new().run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
