use anyhow::Result;
use dotenvy::dotenv;
use log::info;
use std::sync::Arc;

use reminder_skill::core::Config;
use reminder_skill::server;
use reminder_skill::Skill;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting reminder skill...");
    match &config.skill_id {
        Some(id) => info!("Accepting requests for skill {id}"),
        None => info!("SKILL_ID not set - application id verification disabled"),
    }

    let skill = Arc::new(Skill::from_config(&config)?);
    info!("Handler chain: {}", skill.registry().handler_names().join(" -> "));

    server::serve(skill, &config.bind_addr).await
}
