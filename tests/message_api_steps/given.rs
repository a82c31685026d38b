//! Given steps for message API BDD scenarios.

use super::world::{MessageWorld, READ_ROUTES};
use rstest_bdd_macros::given;

#[given("an empty message store")]
fn empty_store(world: &MessageWorld) -> Result<(), eyre::Report> {
    for path in READ_ROUTES {
        let messages = world.read(path)?;
        if !messages.is_empty() {
            return Err(eyre::eyre!("GET {path} found {} messages", messages.len()));
        }
    }
    Ok(())
}

#[given("{count:usize} messages have been stored")]
fn messages_stored(world: &mut MessageWorld, count: usize) -> Result<(), eyre::Report> {
    for n in 0..count {
        world.post(serde_json::json!({ "msg": format!("message {n}") }).to_string())?;
        if world.last_status != Some(axum::http::StatusCode::OK) {
            return Err(eyre::eyre!(
                "storing message {n} answered {:?}",
                world.last_status
            ));
        }
    }
    Ok(())
}
