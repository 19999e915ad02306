#[tokio::main]
async fn main() {
    lodging_backend::run().await;
}
