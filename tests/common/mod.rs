//! Shared utilities for integration tests.

use std::net::{SocketAddr, TcpListener as StdTcpListener};
use std::process::{Child, Command, Stdio};
use std::time::Duration;

/// Path of the compiled launcher binary.
#[allow(dead_code)]
pub const LAUNCHER: &str = env!("CARGO_BIN_EXE_apiproxy-launcher");

/// Grab a currently free local port.
#[allow(dead_code)]
pub fn free_port() -> u16 {
    let listener = StdTcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

/// Launcher command with a clean environment plus `vars`.
#[allow(dead_code)]
pub fn launcher(vars: &[(&str, &str)]) -> Command {
    let mut cmd = Command::new(LAUNCHER);
    cmd.env_clear()
        .envs(vars.iter().copied())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    cmd
}

/// Kills the wrapped child process when dropped.
#[allow(dead_code)]
pub struct ChildGuard(pub Child);

impl Drop for ChildGuard {
    fn drop(&mut self) {
        let _ = self.0.kill();
        let _ = self.0.wait();
    }
}

/// GET `http://addr/path`, retrying until the server accepts connections.
#[allow(dead_code)]
pub async fn get_with_retry(addr: SocketAddr, path: &str) -> reqwest::Response {
    let client = reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap();

    let url = format!("http://{}{}", addr, path);
    for _ in 0..100 {
        if let Ok(res) = client.get(&url).send().await {
            return res;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    panic!("server at {} never came up", addr);
}
