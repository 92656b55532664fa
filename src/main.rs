use gearlocker::AppConfig;

#[rocket::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let rocket = gearlocker::create_rocket(AppConfig::from_env())?;
    rocket.launch().await?;

    Ok(())
}
