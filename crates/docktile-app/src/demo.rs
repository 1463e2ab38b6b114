//! Canned records for `--demo`, so the dashboard can be tried without a container runtime.

use std::sync::Arc;
use std::time::Duration;

use docktile_core::{ContainerRecord, ImageRecord, NetworkRecord, StaticSource, VolumeRecord};

use crate::views::Sources;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

pub fn sources() -> Sources {
    let now = jiff::Timestamp::now().as_second();
    Sources {
        containers: Arc::new(StaticSource::new(containers(now))),
        images: Arc::new(StaticSource::new(images(now))),
        networks: Arc::new(StaticSource::new(networks())),
        volumes: Arc::new(StaticSource::new(volumes())),
    }
}

fn age(secs: i64) -> Duration {
    Duration::from_secs(secs.unsigned_abs())
}

// id, name, image, command, seconds since creation, state, status, ports
type ContainerRow =
    (&'static str, &'static str, &'static str, &'static str, i64, &'static str, &'static str, &'static str);

const CONTAINERS: &[ContainerRow] = &[
    (
        "3f4e1c9a7b2d8e6f0a1b",
        "web",
        "nginx:1.27",
        "/docker-entrypoint.sh nginx -g 'daemon off;'",
        3 * DAY,
        "running",
        "Up 3 days",
        "0.0.0.0:8080->80/tcp",
    ),
    (
        "a81c0d5e2f7b9c3d4e5f",
        "db",
        "postgres:16",
        "docker-entrypoint.sh postgres",
        3 * DAY,
        "running",
        "Up 3 days (healthy)",
        "5432/tcp",
    ),
    (
        "77b2e9f0c1d3a5b7c9e1",
        "cache",
        "redis:7-alpine",
        "docker-entrypoint.sh redis-server",
        5 * HOUR,
        "running",
        "Up 5 hours",
        "6379/tcp",
    ),
    (
        "0c9d8e7f6a5b4c3d2e1f",
        "migrate",
        "registry.local:5000/app/migrate:2.4.1",
        "/bin/migrate up",
        40 * MINUTE,
        "exited",
        "Exited (0) 38 minutes ago",
        "",
    ),
    (
        "5e6f7a8b9c0d1e2f3a4b",
        "worker",
        "registry.local:5000/app/worker:2.4.1",
        "python -m worker",
        2 * MINUTE,
        "restarting",
        "Restarting (1) 10 seconds ago",
        "",
    ),
];

fn containers(now: i64) -> Vec<ContainerRecord> {
    CONTAINERS
        .iter()
        .map(|&(id, name, image, command, ago, state, status, ports)| ContainerRecord {
            id: id.into(),
            name: name.into(),
            image: image.into(),
            command: command.into(),
            created: now - ago,
            age: age(ago),
            state: state.into(),
            status: status.into(),
            ports: ports.into(),
        })
        .collect()
}

fn image(now: i64, id: &str, repository: &str, tag: &str, ago: i64, size: i64) -> ImageRecord {
    ImageRecord {
        id: format!("sha256:{id}"),
        name: format!("{repository}:{tag}"),
        repository: repository.into(),
        tag: tag.into(),
        created: now - ago,
        age: age(ago),
        size,
    }
}

fn images(now: i64) -> Vec<ImageRecord> {
    vec![
        image(now, "9a1b2c3d4e5f60718293a4b5", "nginx", "1.27", 14 * DAY, 192_840_000),
        image(now, "1f2e3d4c5b6a79880716a5b4", "postgres", "16", 21 * DAY, 453_110_000),
        image(now, "c0ffee00c0ffee00c0ffee00", "redis", "7-alpine", 9 * DAY, 41_200_000),
        image(now, "4d5e6f708192a3b4c5d6e7f8", "registry.local:5000/app/migrate", "2.4.1", 2 * DAY, 88_400_000),
        image(now, "8192a3b4c5d6e7f8091a2b3c", "registry.local:5000/app/worker", "2.4.1", 2 * DAY, 312_900_000),
    ]
}

fn networks() -> Vec<NetworkRecord> {
    let network = |id: &str, name: &str, driver: &str, scope: &str, containers: usize| NetworkRecord {
        id: id.into(),
        name: name.into(),
        driver: driver.into(),
        scope: scope.into(),
        containers,
    };
    vec![
        network("b1c2d3e4f5a6b7c8d9e0", "bridge", "bridge", "local", 0),
        network("c2d3e4f5a6b7c8d9e0f1", "host", "host", "local", 0),
        network("d3e4f5a6b7c8d9e0f1a2", "none", "null", "local", 0),
        network("e4f5a6b7c8d9e0f1a2b3", "app_default", "bridge", "local", 5),
    ]
}

fn volumes() -> Vec<VolumeRecord> {
    vec![
        VolumeRecord::new("app_pgdata", "local"),
        VolumeRecord::new("app_redis", "local"),
        VolumeRecord::new("3c5e7a9b1d2f4a6c8e0b2d4f6a8c0e2b4d6f8a0c2e4b6d8f0a2c4e6b8d0f2a4c", "local"),
        VolumeRecord::new("shared-assets", "nfs"),
    ]
}
