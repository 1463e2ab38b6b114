pub mod client;
pub mod error;
pub mod resource;
pub mod resources;
pub mod source;

pub use client::DockerClient;
pub use error::FetchError;
pub use resource::{Column, ColumnWidth, Resource, ResourceKind, SortKey, Tone};
pub use resources::*;
pub use source::{DataSource, FetchContext, StaticSource};
