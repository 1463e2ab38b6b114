use anyhow::Result;
use bollard::container::ListContainersOptions;
use bollard::image::ListImagesOptions;
use bollard::network::ListNetworksOptions;
use bollard::volume::ListVolumesOptions;
use bollard::{Docker, API_DEFAULT_VERSION};
use futures::future::BoxFuture;
use tracing::{debug, info};

use crate::error::FetchError;
use crate::resources::{ContainerRecord, ImageRecord, NetworkRecord, VolumeRecord};
use crate::source::DataSource;

const CONNECT_TIMEOUT_SECS: u64 = 120;

#[derive(Clone)]
pub struct DockerClient {
    docker: Docker,
    host: String,
    show_all: bool,
}

impl DockerClient {
    /// `DOCKER_HOST` or the platform socket.
    pub fn from_env() -> Result<Self> {
        let docker = Docker::connect_with_local_defaults()?;
        let host = std::env::var("DOCKER_HOST").unwrap_or_else(|_| "local".into());
        info!(%host, "connected to container runtime");
        Ok(Self { docker, host, show_all: true })
    }

    /// Accepts `unix://`, `tcp://` and `http://` URLs.
    pub fn from_host(host: &str) -> Result<Self> {
        let docker = if let Some(path) = host.strip_prefix("unix://") {
            Docker::connect_with_socket(path, CONNECT_TIMEOUT_SECS, API_DEFAULT_VERSION)?
        } else if host.starts_with("tcp://") || host.starts_with("http://") {
            Docker::connect_with_http(host, CONNECT_TIMEOUT_SECS, API_DEFAULT_VERSION)?
        } else {
            anyhow::bail!("unsupported docker host \"{host}\": expected unix://, tcp:// or http://");
        };
        info!(%host, "connected to container runtime");
        Ok(Self { docker, host: host.to_string(), show_all: true })
    }

    pub fn connect(host: Option<&str>) -> Result<Self> {
        match host {
            Some(h) if !h.trim().is_empty() => Self::from_host(h.trim()),
            _ => Self::from_env(),
        }
    }

    /// Include stopped containers in container listings.
    pub fn show_all(mut self, all: bool) -> Self {
        self.show_all = all;
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub async fn list_containers(&self) -> Result<Vec<ContainerRecord>, FetchError> {
        let options = ListContainersOptions::<String> { all: self.show_all, ..Default::default() };
        let list = self.docker.list_containers(Some(options)).await?;
        debug!(count = list.len(), "listed containers");
        Ok(list.iter().map(ContainerRecord::from).collect())
    }

    pub async fn list_images(&self) -> Result<Vec<ImageRecord>, FetchError> {
        let options = ListImagesOptions::<String> { all: false, ..Default::default() };
        let list = self.docker.list_images(Some(options)).await?;
        debug!(count = list.len(), "listed images");
        Ok(list.iter().map(ImageRecord::from).collect())
    }

    pub async fn list_networks(&self) -> Result<Vec<NetworkRecord>, FetchError> {
        let list = self.docker.list_networks(None::<ListNetworksOptions<String>>).await?;
        debug!(count = list.len(), "listed networks");
        Ok(list.iter().map(NetworkRecord::from).collect())
    }

    pub async fn list_volumes(&self) -> Result<Vec<VolumeRecord>, FetchError> {
        let response = self.docker.list_volumes(None::<ListVolumesOptions<String>>).await?;
        let volumes = response.volumes.unwrap_or_default();
        debug!(count = volumes.len(), "listed volumes");
        Ok(volumes.iter().map(VolumeRecord::from).collect())
    }
}

impl DataSource<ContainerRecord> for DockerClient {
    fn fetch(&self) -> BoxFuture<'_, Result<Vec<ContainerRecord>, FetchError>> {
        Box::pin(self.list_containers())
    }
}

impl DataSource<ImageRecord> for DockerClient {
    fn fetch(&self) -> BoxFuture<'_, Result<Vec<ImageRecord>, FetchError>> {
        Box::pin(self.list_images())
    }
}

impl DataSource<NetworkRecord> for DockerClient {
    fn fetch(&self) -> BoxFuture<'_, Result<Vec<NetworkRecord>, FetchError>> {
        Box::pin(self.list_networks())
    }
}

impl DataSource<VolumeRecord> for DockerClient {
    fn fetch(&self) -> BoxFuture<'_, Result<Vec<VolumeRecord>, FetchError>> {
        Box::pin(self.list_volumes())
    }
}

#[cfg(test)]
mod tests;
