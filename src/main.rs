#[tokio::main]
async fn main() {
    activities::start_server().await;
}
