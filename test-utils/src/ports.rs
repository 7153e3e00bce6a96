use std::net::{Ipv4Addr, TcpListener};

/// A port that was free a moment ago. Good enough for tests on localhost.
pub fn free_local_port() -> u16 {
    TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .and_then(|listener| listener.local_addr())
        .map(|addr| addr.port())
        .expect("no free local port")
}
