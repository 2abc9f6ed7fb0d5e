// src/core/net.rs
//
// HTTP/1.0 GET over plain TCP, no TLS. HTTP/1.0 makes the server close the
// connection at the end, so the body is simply everything after the headers.

use std::{io::{Read, Write}, net::TcpStream, time::Duration};
use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};

pub fn http_get(host: &str, port: u16, path: &str) -> Result<String, Box<dyn std::error::Error>> {
    let mut s = TcpStream::connect((host, port))?;
    s.set_read_timeout(Some(Duration::from_secs(HTTP_TIMEOUT_SECS)))?;
    s.set_write_timeout(Some(Duration::from_secs(HTTP_TIMEOUT_SECS)))?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: {}\r\nConnection: close\r\n\r\n",
        path, host, USER_AGENT
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    split_response(&String::from_utf8_lossy(&buf))
}

/// Status check + body split for a raw HTTP response.
pub fn split_response(resp: &str) -> Result<String, Box<dyn std::error::Error>> {
    let status = resp.split("\r\n").next().unwrap_or("");
    let code = status.split_whitespace().nth(1).unwrap_or("");
    if code != "200" {
        return Err(format!("HTTP error: {}", status).into());
    }
    let body_idx = resp.find("\r\n\r\n").ok_or("Malformed HTTP response")? + 4;
    Ok(resp[body_idx..].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_response_yields_body() {
        let resp = "HTTP/1.0 200 OK\r\nContent-Type: text/csv\r\n\r\nclean_name,20242025\r\nA,1\r\n";
        assert_eq!(split_response(resp).unwrap(), "clean_name,20242025\r\nA,1\r\n");
    }

    #[test]
    fn non_200_is_error() {
        let err = split_response("HTTP/1.0 404 Not Found\r\n\r\n").unwrap_err();
        assert!(err.to_string().contains("404"));
        assert!(split_response("HTTP/1.0 200 OK\r\nno-body").is_err());
    }
}
