use anyhow::{Context as _, Result};
use clap::Parser as _;

use ecp_application::prelude::*;
use ecp_core::{
    entities::*,
    gateways::{geocode::GeoCodingGateway as _, position::PositionRequest},
};
use ecp_db_json::JsonFileRepo;
use ecp_gateways::ApiGeocode;

mod cli;
mod config;
mod gateways;
mod presenter;

use crate::{
    cli::{Cli, Command, LocateArgs, NearbyArgs, PostCommand},
    config::Config,
    presenter::TerminalPresenter,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Cli::parse();
    let config = Config::try_load_from_file_or_default(args.config.as_deref())?;

    match args.command {
        Command::Nearby(nearby_args) => nearby(&config, nearby_args).await,
        Command::Locate(locate_args) => locate(&config, locate_args).await,
        Command::Geocode { address } => geocode(&config, &address).await,
        Command::Post(post) => post_command(&config, post).await,
    }
}

fn locate_options(config: &Config, args: &LocateArgs) -> LocateOptions {
    LocateOptions {
        request: PositionRequest {
            timeout: config.locate.gps_timeout,
            ..Default::default()
        },
        ip_fallback: config.locate.ip_fallback && !args.no_ip_fallback,
        address: args.address.clone(),
    }
}

fn resolve_context(args: &LocateArgs) -> &'static str {
    if args.address.is_some() {
        "Could not resolve the address"
    } else {
        "Could not obtain a location. Try again with --address"
    }
}

async fn nearby(config: &Config, args: NearbyArgs) -> Result<()> {
    let repo = JsonFileRepo::load(&config.store.points_file)?;
    let gateways = gateways::location_gateways(config, args.locate.position);
    let options = locate_options(config, &args.locate);
    let presenter = TerminalPresenter;

    let resolved = resolve_reference_location(&gateways, options)
        .await
        .context(resolve_context(&args.locate))?;
    presenter.location_resolved(&resolved);

    let radius = args
        .radius
        .map(Distance::from_km)
        .unwrap_or(config.search.radius);
    nearby_collection_points(&repo, &presenter, resolved.pos, radius, args.kind)?;
    Ok(())
}

async fn locate(config: &Config, args: LocateArgs) -> Result<()> {
    let gateways = gateways::location_gateways(config, args.position);
    let options = locate_options(config, &args);
    let resolved = resolve_reference_location(&gateways, options)
        .await
        .context(resolve_context(&args))?;
    TerminalPresenter.location_resolved(&resolved);
    Ok(())
}

async fn geocode(config: &Config, address: &str) -> Result<()> {
    let geocoder = ApiGeocode::new(gateways::public_api(config));
    let geocoded = geocoder.resolve_address(address).await?;
    match &geocoded.display_name {
        Some(name) => println!("{} ({})", geocoded.pos, name),
        None => println!("{}", geocoded.pos),
    }
    Ok(())
}

async fn post_command(config: &Config, command: PostCommand) -> Result<()> {
    let api = gateways::public_api(config);
    match command {
        PostCommand::Like { post_id } => {
            let status = api.toggle_like(&post_id).await?;
            let suffix = if status.liked { " (including yours)" } else { "" };
            println!("{} like(s){}", status.likes_count, suffix);
        }
        PostCommand::Comments { post_id } => {
            let comments = api.comments(&post_id).await?;
            if comments.is_empty() {
                println!("No comments yet.");
            }
            for comment in comments {
                println!(
                    "[{}] {}: {}",
                    comment.created_at, comment.author_nick, comment.text
                );
            }
        }
        PostCommand::Comment { post_id, text } => {
            let created = api.add_comment(&post_id, text).await?;
            println!(
                "Comment stored. The post now has {} comment(s).",
                created.comments_count
            );
        }
        PostCommand::Uncomment { comment_id } => {
            api.delete_comment(&comment_id).await?;
            println!("Comment deleted.");
        }
    }
    Ok(())
}
