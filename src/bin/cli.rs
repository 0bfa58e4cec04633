use miette::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    toto::cli::run().await?;
    Ok(())
}
