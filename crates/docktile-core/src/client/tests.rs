use super::*;

#[test]
fn rejects_unknown_host_scheme() {
    let err = DockerClient::from_host("ssh://somewhere").err().unwrap();
    assert!(err.to_string().contains("unsupported docker host"));
}

#[tokio::test]
#[ignore] // requires a running docker daemon
async fn connect_and_list_volumes() {
    let client = DockerClient::from_env();
    match &client {
        Ok(c) => {
            println!("Connected to: {}", c.host());
            let volumes = c.list_volumes().await.unwrap();
            println!("Volumes: {}", volumes.len());
            let networks = c.list_networks().await.unwrap();
            assert!(networks.iter().any(|n| n.name == "bridge"));
        }
        Err(e) => {
            println!("Connection failed: {e:?}");
            panic!("from_env() failed: {e}");
        }
    }
}
