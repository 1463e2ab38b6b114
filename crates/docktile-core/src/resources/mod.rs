mod container;
mod image;
mod network;
mod volume;

pub use container::{format_ports, ContainerRecord, ContainerSortKey};
pub use image::{split_repo_tag, ImageRecord, ImageSortKey};
pub use network::{NetworkRecord, NetworkSortKey};
pub use volume::{VolumeRecord, VolumeSortKey};
