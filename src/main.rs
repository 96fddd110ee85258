use clap::Parser;
use wardrobe_lib::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let output = wardrobe_lib::run(cli).await?;
    println!("{output}");
    Ok(())
}
