//! End-to-end tests against the live stub service.
//!
//! # Design
//! Starts the stub on a random port in a background runtime, then drives it
//! through `Hastebin` with the default `UreqTransport` over real HTTP.

use std::net::SocketAddr;
use std::time::Duration;

use hastebin_core::{ApiError, ClientConfig, ConfigError, Error, Hastebin, UreqTransport};
use hastebin_stub::StubConfig;

fn spawn_stub(config: StubConfig) -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            hastebin_stub::run(listener, config).await
        })
        .unwrap();
    });

    addr
}

fn open(addr: SocketAddr, credential: Option<&str>) -> Hastebin<UreqTransport> {
    let mut config = ClientConfig::new().with_base_url(format!("http://{addr}"));
    if let Some(credential) = credential {
        config = config.with_credential(credential);
    }
    Hastebin::new(config).unwrap()
}

#[test]
fn post_then_get_lifecycle() {
    let addr = spawn_stub(StubConfig::default());
    let hastebin = open(addr, None);

    // Step 1: create.
    let posted = hastebin.post("hello world").unwrap();
    assert_eq!(posted.code.len(), 10);
    assert_eq!(posted.url, format!("http://{addr}/{}", posted.code));

    // Step 2: fetch formatted.
    let content = hastebin.get(&posted.code, false).unwrap();
    assert_eq!(content, "hello world");

    // Step 3: fetch raw.
    let raw = hastebin.get(&posted.code, true).unwrap();
    assert_eq!(raw, "hello world");

    // Step 4: repeat reads are identical.
    for _ in 0..3 {
        assert_eq!(hastebin.get(&posted.code, false).unwrap(), content);
    }

    // Step 5: a second document gets its own code.
    let second = hastebin.post("another").unwrap();
    assert_ne!(second.code, posted.code);
    assert_eq!(hastebin.get(&second.code, true).unwrap(), "another");
}

#[test]
fn unknown_code_is_404() {
    let addr = spawn_stub(StubConfig::default());
    let hastebin = open(addr, None);

    for raw in [false, true] {
        let err = hastebin.get("doesnotexist", raw).unwrap_err();
        assert!(matches!(err, Error::Api(ref e) if e.is_not_found()), "{err}");
    }
}

#[test]
fn credential_is_sent_as_bearer() {
    let addr = spawn_stub(StubConfig {
        token: Some("secret".to_string()),
        ..StubConfig::default()
    });

    let anonymous = open(addr, None);
    let err = anonymous.post("hello world").unwrap_err();
    assert_eq!(err.status(), Some(401));

    let authorized = open(addr, Some("secret"));
    let posted = authorized.post("hello world").unwrap();
    assert_eq!(authorized.get(&posted.code, false).unwrap(), "hello world");

    let err = anonymous.get(&posted.code, false).unwrap_err();
    assert_eq!(err.status(), Some(401));
}

#[test]
fn oversize_post_is_rejected_by_service() {
    let addr = spawn_stub(StubConfig {
        max_length: 8,
        ..StubConfig::default()
    });
    let hastebin = open(addr, None);

    let err = hastebin.post("much longer than eight bytes").unwrap_err();
    assert!(matches!(
        err,
        Error::Api(ApiError::Request { status: 413, .. })
    ));
}

#[test]
fn documents_over_ten_mebibytes_are_read_in_full() {
    const LEN: usize = 11 * 1024 * 1024;
    let addr = spawn_stub(StubConfig {
        max_length: 12 * 1024 * 1024,
        ..StubConfig::default()
    });
    let hastebin = open(addr, None);

    let content = "a".repeat(LEN);
    let posted = hastebin.post(&content).unwrap();

    for raw in [false, true] {
        let fetched = hastebin.get(&posted.code, raw).unwrap();
        assert_eq!(fetched.len(), LEN);
        assert!(fetched == content);
    }
}

#[test]
fn concurrent_calls_are_independent() {
    let addr = spawn_stub(StubConfig::default());
    let hastebin = open(addr, None);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let hastebin = &hastebin;
                scope.spawn(move || {
                    let content = format!("document {i}");
                    let posted = hastebin.post(&content).unwrap();
                    assert_eq!(hastebin.get(&posted.code, true).unwrap(), content);
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    });
}

#[test]
fn connection_refused_is_transport_error() {
    // Bind then drop to obtain a port nothing listens on.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let hastebin = Hastebin::with_transport(
        ClientConfig::new().with_base_url(format!("http://{addr}")),
        UreqTransport::with_timeout(Duration::from_secs(5)),
    )
    .unwrap();

    let err = hastebin.get("abc123", false).unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "{err:?}");
}

#[test]
fn public_endpoint_without_credential_never_builds() {
    let err = Hastebin::new(ClientConfig::new()).unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::MissingCredential)));
}
