// tests/load_sources.rs
//
// Loading from disk, over a local HTTP socket, and on the worker thread.
//
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use district_lookup::config::options::DataSource;
use district_lookup::data::Value;
use district_lookup::loader::{self, LoadError};
use district_lookup::progress::NullProgress;

const CSV: &str = "clean_name,20242025,20232024\r\n\"Smith, Jones USD\",8.5,NA\r\nAdams,12,\r\n";

fn tmp_file(name: &str, contents: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("district_lookup_{}", name));
    fs::write(&p, contents).unwrap();
    p
}

#[test]
fn loads_quoted_csv_from_file() {
    let path = tmp_file("file.csv", CSV);
    let ds = loader::load(&DataSource::File(path), None).unwrap();
    assert_eq!(ds.row_count(), 2);
    assert_eq!(ds.rows[0].name(), Some("Smith, Jones USD"));
    assert_eq!(ds.rows[0].get("20242025"), Some(&Value::Number(8.5)));
    assert_eq!(ds.rows[1].get("20232024"), Some(&Value::Empty));
}

#[test]
fn spawn_load_delivers_and_notifies() {
    let path = tmp_file("spawn.csv", CSV);
    let (done_tx, done_rx) = std::sync::mpsc::channel();
    let rx = loader::spawn_load(DataSource::File(path), NullProgress, move || {
        let _ = done_tx.send(());
    });
    let ds = rx.recv_timeout(Duration::from_secs(10)).unwrap().unwrap();
    assert_eq!(ds.named_count(), 2);
    done_rx.recv_timeout(Duration::from_secs(10)).unwrap();
}

#[test]
fn spawn_load_reports_missing_file() {
    let src = DataSource::File(std::env::temp_dir().join("district_lookup_missing/none.csv"));
    let rx = loader::spawn_load(src, NullProgress, || {});
    let res = rx.recv_timeout(Duration::from_secs(10)).unwrap();
    assert!(matches!(res, Err(LoadError::Read { .. })));
}

#[test]
fn loads_over_plain_http() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let server = thread::spawn(move || {
        let (mut sock, _) = listener.accept().unwrap();
        let mut buf = [0u8; 1024];
        let n = sock.read(&mut buf).unwrap();
        let req = String::from_utf8_lossy(&buf[..n]).into_owned();
        let resp = format!("HTTP/1.0 200 OK\r\nContent-Type: text/csv\r\n\r\n{}", CSV);
        sock.write_all(resp.as_bytes()).unwrap();
        req
    });

    let src = DataSource::parse(&format!("http://127.0.0.1:{}/district_data.csv", port)).unwrap();
    let ds = loader::load(&src, None).unwrap();
    assert_eq!(ds.row_count(), 2);

    let req = server.join().unwrap();
    assert!(req.starts_with("GET /district_data.csv HTTP/1.0"));
}

#[test]
fn http_error_status_is_fetch_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let server = thread::spawn(move || {
        let (mut sock, _) = listener.accept().unwrap();
        let mut buf = [0u8; 1024];
        let _ = sock.read(&mut buf).unwrap();
        sock.write_all(b"HTTP/1.0 404 Not Found\r\n\r\n").unwrap();
    });

    let src = DataSource::Http { host: "127.0.0.1".into(), port, path: "/nope.csv".into() };
    let err = loader::load(&src, None).unwrap_err();
    assert!(matches!(err, LoadError::Fetch { .. }));
    assert!(err.to_string().contains("404"));
    server.join().unwrap();
}
