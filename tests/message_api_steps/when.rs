//! When steps for message API BDD scenarios.

use super::world::MessageWorld;
use rstest_bdd_macros::when;

#[when(r#"the client posts the message "{msg}""#)]
fn post_message(world: &mut MessageWorld, msg: String) -> Result<(), eyre::Report> {
    world.post(serde_json::json!({ "msg": msg }).to_string())
}

#[when("the client posts a body without a message")]
fn post_without_message(world: &mut MessageWorld) -> Result<(), eyre::Report> {
    world.post("{}".to_owned())
}
