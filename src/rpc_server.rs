//! SecureVault RPC Server: JSON-RPC over stdin/stdout for a front-end shell.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"vault.add", "params":{"title":"...","password":"..."}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}

use std::time::Instant;

use securevault::app::App;
use securevault::logging::init_logging;
use securevault::rpc_handler::handle_method;
use securevault::services::settings_engine::SettingsEngineTrait;

use serde_json::{json, Value};
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::Mutex;
use tracing::{error, info, warn};

/// Simple rate limiter: max requests per second.
struct RateLimiter {
    window_start: Instant,
    request_count: u32,
    max_per_second: u32,
}

impl RateLimiter {
    fn new(max_per_second: u32) -> Self {
        Self { window_start: Instant::now(), request_count: 0, max_per_second }
    }

    /// Returns true if the request is allowed, false if rate-limited.
    fn check(&mut self) -> bool {
        if self.window_start.elapsed().as_secs() >= 1 {
            self.window_start = Instant::now();
            self.request_count = 0;
        }
        self.request_count += 1;
        self.request_count <= self.max_per_second
    }
}

async fn send(stdout: &mut io::Stdout, message: &Value) -> io::Result<()> {
    let mut line = message.to_string();
    line.push('\n');
    stdout.write_all(line.as_bytes()).await?;
    stdout.flush().await
}

#[tokio::main]
async fn main() {
    let config_path = std::env::args().nth(1);
    let app = match App::new(config_path) {
        Ok(app) => app,
        Err(e) => {
            init_logging("securevault=info");
            error!(error = %e, "failed to initialize SecureVault");
            std::process::exit(1);
        }
    };
    init_logging(&app.settings_engine.get_settings().logging.filter);
    let app = Mutex::new(app);

    let mut stdout = io::stdout();
    let ready = json!({"event":"ready","version":env!("CARGO_PKG_VERSION")});
    if send(&mut stdout, &ready).await.is_err() {
        return;
    }
    info!("rpc server ready");

    let mut rate_limiter = RateLimiter::new(200);
    let mut lines = BufReader::new(io::stdin()).lines();

    while let Ok(Some(line)) = lines.next_line().await {
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Value>(&line) {
            Err(e) => json!({"id":null,"error":format!("parse error: {}", e)}),
            Ok(req) => {
                let id = req.get("id").cloned().unwrap_or(Value::Null);
                if !rate_limiter.check() {
                    warn!("rate limit exceeded");
                    json!({"id": id, "error": "rate limit exceeded"})
                } else {
                    let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
                    let params = req.get("params").cloned().unwrap_or(json!({}));
                    match handle_method(&app, method, &params).await {
                        Ok(val) => json!({"id": id, "result": val}),
                        Err(err) => json!({"id": id, "error": err}),
                    }
                }
            }
        };

        if send(&mut stdout, &response).await.is_err() {
            break;
        }
    }

    info!("stdin closed, shutting down");
}
