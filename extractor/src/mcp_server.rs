use log::{debug, warn};
use serde_json::{json, Value};

use crate::mask::redact_sensitive;
use crate::pipeline::{ExtractOptions, Extractor};
use crate::record::ExtractionResult;
use crate::stats::build_stats_json;

#[derive(Clone, Default)]
pub struct McpServer;

impl McpServer {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle_request(&self, request: Value) -> Result<Value, String> {
        let method = request["method"].as_str().unwrap_or("");
        debug!("mcp request: {}", method);

        match method {
            "initialize" => self.handle_initialize(),
            "tools/list" => self.handle_tools_list(),
            "tools/call" => self.handle_tool_call(&request["params"]),
            _ => Err(format!("Unknown method: {}", method)),
        }
    }

    fn handle_initialize(&self) -> Result<Value, String> {
        Ok(json!({
            "result": {
                "protocolVersion": "2024-11-05",
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": "text-extractor",
                    "version": env!("CARGO_PKG_VERSION")
                }
            }
        }))
    }

    fn handle_tools_list(&self) -> Result<Value, String> {
        Ok(json!({
            "result": {
                "tools": [
                    {
                        "name": "extract_text",
                        "description": "Extract validated, masked records (emails, URLs, phones, cards, times, amounts, hashtags, HTML tags) from text",
                        "inputSchema": {
                            "type": "object",
                            "properties": {
                                "text": {
                                    "type": "string",
                                    "description": "Text content to extract from"
                                },
                                "exclude": {
                                    "type": "string",
                                    "description": "Exclude specific categories (comma-separated)"
                                }
                            },
                            "required": ["text"]
                        }
                    },
                    {
                        "name": "extract_file",
                        "description": "Extract validated, masked records from a text file",
                        "inputSchema": {
                            "type": "object",
                            "properties": {
                                "file_path": {
                                    "type": "string",
                                    "description": "Path to the file to extract from"
                                },
                                "exclude": {
                                    "type": "string",
                                    "description": "Exclude specific categories (comma-separated)"
                                }
                            },
                            "required": ["file_path"]
                        }
                    }
                ]
            }
        }))
    }

    fn handle_tool_call(&self, params: &Value) -> Result<Value, String> {
        let tool_name = params["name"].as_str().ok_or("Missing tool name")?;
        let arguments = &params["arguments"];

        match tool_name {
            "extract_text" => self.extract_text(arguments),
            "extract_file" => self.extract_file(arguments),
            _ => Err(format!("Unknown tool: {}", tool_name)),
        }
    }

    fn extractor_for(&self, args: &Value) -> Result<Extractor, String> {
        let options = ExtractOptions::from_filters(None, args["exclude"].as_str()).map_err(|e| e.to_string())?;
        Ok(Extractor::with_options(options))
    }

    fn extract_text(&self, args: &Value) -> Result<Value, String> {
        let text = args["text"].as_str().ok_or("text is required")?;
        debug!("extract_text on {}", redact_sensitive(text));

        let result = self.extractor_for(args)?.extract(text);
        self.respond(&result, text.lines().count(), "text_input")
    }

    fn extract_file(&self, args: &Value) -> Result<Value, String> {
        let file_path = args["file_path"].as_str().ok_or("file_path is required")?;
        let text = std::fs::read_to_string(file_path).map_err(|e| {
            warn!("cannot read {}: {}", file_path, e);
            format!("Error processing file: {}", e)
        })?;

        let result = self.extractor_for(args)?.extract(&text);
        self.respond(&result, text.lines().count(), file_path)
    }

    fn respond(&self, result: &ExtractionResult, lines: usize, source: &str) -> Result<Value, String> {
        let records = serde_json::to_value(result).map_err(|e| e.to_string())?;
        let stats = build_stats_json(result, lines, source);

        Ok(json!({
            "result": {
                "content": [{
                    "type": "text",
                    "text": format!("Extraction complete for {}. Found {} records", source, result.len())
                }],
                "data": records,
                "_meta": stats
            }
        }))
    }
}
