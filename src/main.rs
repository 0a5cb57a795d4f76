#[tokio::main]
async fn main() -> anyhow::Result<()> {
    craft_storefront::run_server().await
}
