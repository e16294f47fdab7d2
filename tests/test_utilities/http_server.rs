use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

/// A scripted HTTP/1.1 server on a loopback port
///
/// Answers one connection per scripted response, in order, then stops
/// listening. The request targets (path and query) are recorded.
pub struct ScriptedServer {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl ScriptedServer {
    /// Starts serving `(status, body)` responses in a background thread
    pub fn start(responses: Vec<(u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&requests);
        thread::spawn(move || {
            for (status, body) in responses {
                let Ok((stream, _)) = listener.accept() else {
                    return;
                };
                serve(stream, status, &body, &recorded);
            }
        });

        Self {
            base_url: format!("http://127.0.0.1:{}/wanted/v1", port),
            requests,
        }
    }

    /// Serves the same JSON body `count` times
    pub fn ok_times(body: &str, count: usize) -> Self {
        Self::start((0..count).map(|_| (200, body.to_string())).collect())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request targets received so far, e.g. `/wanted/v1/list?page=2`
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn serve(mut stream: TcpStream, status: u16, body: &str, recorded: &Mutex<Vec<String>>) {
    let mut head = Vec::new();
    let mut buffer = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buffer) {
            Ok(0) | Err(_) => break,
            Ok(n) => head.extend_from_slice(&buffer[..n]),
        }
    }

    let head = String::from_utf8_lossy(&head);
    if let Some(target) = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
    {
        recorded.lock().unwrap().push(target.to_string());
    }

    let response = format!(
        "HTTP/1.1 {} Scripted\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

/// A base URL on a loopback port nothing listens on
pub fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/wanted/v1", port)
}

/// Listing body with one record per `(uid, title)`
pub fn list_body(records: &[(&str, &str)]) -> String {
    let items: Vec<String> = records
        .iter()
        .map(|(uid, title)| {
            format!(
                r#"{{"uid": "{uid}", "title": "{title}", "publication": "2024-01-04T09:39:00", "status": "na", "poster_classification": "default", "url": "https://www.fbi.gov/wanted/{uid}", "images": [{{"original": "https://www.fbi.gov/wanted/{uid}/@@images/image", "thumb": null}}]}}"#
            )
        })
        .collect();

    format!(
        r#"{{"total": {}, "page": 1, "items": [{}]}}"#,
        records.len(),
        items.join(",")
    )
}
