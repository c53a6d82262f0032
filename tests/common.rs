#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

pub fn pcheck() -> Command {
    cargo_bin_cmd!("pantonecheck")
}

/// Create a unique, empty config dir inside the system temp dir
pub fn setup_config_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_pantonecheck", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).unwrap();
    path.to_string_lossy().to_string()
}

/// Drop a session credential into the config dir, as `login` would
pub fn write_session(dir: &str, token: &str, role: &str) {
    fs::write(
        Path::new(dir).join("api_token"),
        format!("token: {token}\nrole: {role}\n"),
    )
    .unwrap();
}

/// Temporary output file path for export tests
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// One request as seen by the stub server.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.headers
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn body_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is not JSON")
    }
}

/// Minimal scripted HTTP/1.1 server: answers exactly the given responses,
/// one connection each, and records every request it saw. The CLI under
/// test runs against real sockets, no HTTP mocking layer.
pub struct StubServer {
    pub url: String,
    rx: mpsc::Receiver<Recorded>,
    handle: thread::JoinHandle<()>,
}

impl StubServer {
    pub fn serve(responses: Vec<(u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let (tx, rx) = mpsc::channel();

        let handle = thread::spawn(move || {
            for (status, body) in responses {
                let (mut stream, _) = match listener.accept() {
                    Ok(pair) => pair,
                    Err(_) => return,
                };
                let recorded = read_request(&mut stream);
                tx.send(recorded).ok();
                write_response(&mut stream, status, &body);
            }
        });

        Self { url, rx, handle }
    }

    /// Wait until every scripted response was served, then return the
    /// recorded requests in order.
    pub fn finish(self) -> Vec<Recorded> {
        self.handle.join().unwrap();
        self.rx.try_iter().collect()
    }
}

fn read_request(stream: &mut TcpStream) -> Recorded {
    stream.set_read_timeout(Some(Duration::from_secs(10))).ok();
    let mut reader = BufReader::new(stream.try_clone().unwrap());

    let mut request_line = String::new();
    reader.read_line(&mut request_line).unwrap();
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or("").to_string();
    let path = parts.next().unwrap_or("").to_string();

    let mut headers = Vec::new();
    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).unwrap();
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim().to_ascii_lowercase();
            let value = value.trim().to_string();
            if name == "content-length" {
                content_length = value.parse().unwrap_or(0);
            }
            headers.push((name, value));
        }
    }

    let mut body = vec![0u8; content_length];
    if content_length > 0 {
        reader.read_exact(&mut body).unwrap();
    }

    Recorded {
        method,
        path,
        headers,
        body: String::from_utf8_lossy(&body).to_string(),
    }
}

fn write_response(stream: &mut TcpStream, status: u16, body: &str) {
    let reason = match status {
        200 => "OK",
        201 => "Created",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        500 => "Internal Server Error",
        _ => "Unknown",
    };
    let resp = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len(),
    );
    stream.write_all(resp.as_bytes()).ok();
    stream.flush().ok();
}
