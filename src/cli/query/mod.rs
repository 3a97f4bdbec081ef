//! Query command - one run through the same path as `POST /query`

use clap::Args;

use crate::api::types::{QueryResponse, DEFAULT_USER_ID};
use crate::config::AppConfig;

#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Free-text question from the field engineer
    pub text: String,

    /// Requester recorded in the audit log
    #[arg(long, default_value = DEFAULT_USER_ID)]
    pub user_id: String,
}

pub async fn run(config: &AppConfig, args: QueryArgs) -> anyhow::Result<()> {
    let state = crate::create_app_state_with_config(config).await?;

    let receipt = state.query_service.handle(&args.text, &args.user_id).await?;
    let response = QueryResponse::from(receipt);

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
