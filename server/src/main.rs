#[tokio::main]
async fn main() -> anyhow::Result<()> {
    unduck_lib::run().await
}
