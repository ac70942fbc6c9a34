use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use ecp_entities::{geo::MapPoint, point::WasteKind};

#[derive(Debug, Parser)]
#[command(name = "ecoponto", version, about = "Find nearby recycling collection points")]
pub struct Cli {
    /// Configuration file.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Count and list the collection points around the current location.
    Nearby(NearbyArgs),
    /// Show where the location fallback chain places this host.
    Locate(LocateArgs),
    /// Resolve a street address through the backend geocoder.
    Geocode {
        /// Address like "Rua Duque de Caxias, 320 - Centro".
        address: String,
    },
    /// Interact with the community feed.
    #[command(subcommand)]
    Post(PostCommand),
}

#[derive(Debug, Args)]
pub struct LocateArgs {
    /// Resolve this address instead of locating the device.
    #[arg(long)]
    pub address: Option<String>,

    /// Fixed device position as "latitude,longitude".
    #[arg(long, value_name = "LAT,LNG", allow_hyphen_values = true)]
    pub position: Option<MapPoint>,

    /// Never fall back to the IP lookup.
    #[arg(long)]
    pub no_ip_fallback: bool,
}

#[derive(Debug, Args)]
pub struct NearbyArgs {
    #[command(flatten)]
    pub locate: LocateArgs,

    /// Search radius in kilometers.
    #[arg(long, value_name = "KM")]
    pub radius: Option<f64>,

    /// Restrict the search to one waste kind (batteries, cooking-oil,
    /// electronics, plastic, glass, paper or metal).
    #[arg(long, value_name = "KIND")]
    pub kind: Option<WasteKind>,
}

#[derive(Debug, Subcommand)]
pub enum PostCommand {
    /// Toggle the like on a post.
    Like { post_id: String },
    /// List the comments of a post.
    Comments { post_id: String },
    /// Add a comment to a post.
    Comment { post_id: String, text: String },
    /// Delete a comment.
    Uncomment { comment_id: String },
}
