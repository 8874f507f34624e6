use anyhow::Result;
use serde_json::{json, Value};
use std::io::{self, BufRead, Write};
use text_extractor::logger::init_logger;
use text_extractor::mcp_server::McpServer;

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the protocol; logs go to stderr
    init_logger(None);

    let server = McpServer::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Value>(&line) {
            Ok(request) => {
                let id = request["id"].clone();

                match server.handle_request(request).await {
                    Ok(mut resp) => {
                        if let Some(obj) = resp.as_object_mut() {
                            obj.insert("jsonrpc".to_string(), json!("2.0"));
                            if !id.is_null() {
                                obj.insert("id".to_string(), id);
                            }
                        }
                        resp
                    }
                    Err(err) => json!({
                        "jsonrpc": "2.0",
                        "id": id,
                        "error": {
                            "code": -1,
                            "message": err
                        }
                    }),
                }
            }
            Err(_) => json!({
                "jsonrpc": "2.0",
                "error": {
                    "code": -32700,
                    "message": "Parse error"
                }
            }),
        };

        writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
        stdout.flush()?;
    }

    Ok(())
}
