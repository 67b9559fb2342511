//! MCP front end: adapts the tool dispatcher to rmcp and runs one transport.

use axum::{routing::get, Json};
use obsidian_remote_tools::{Content, DispatchError, Dispatcher};
use rmcp::{
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult,
        PaginatedRequestParam, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    transport::{
        io,
        sse_server::{SseServer, SseServerConfig},
    },
    ErrorData as McpError, RoleServer, ServerHandler, ServiceExt,
};
use serde_json::json;
use std::future::IntoFuture;
use std::net::SocketAddr;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

pub const SERVER_NAME: &str = "mcp-obsidian-remote";
pub const SSE_PATH: &str = "/sse";
pub const MESSAGE_PATH: &str = "/messages/";

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("io error: {0}")]
    Io(String),
    #[error("mcp transport error: {0}")]
    Rmcp(String),
}

/// rmcp service backed by a [`Dispatcher`]. Cheap to clone; every SSE
/// session gets its own clone over the same registry.
#[derive(Clone)]
pub struct McpServer {
    dispatcher: Dispatcher,
}

impl McpServer {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn tools(&self) -> Result<ListToolsResult, McpError> {
        let descriptors = self.dispatcher.list_tools();
        serde_json::from_value(json!({ "tools": descriptors }))
            .map_err(|e| mcp_internal_error(e.to_string()))
    }

    /// Runs one tool call. Request-level problems become protocol errors,
    /// tool failures become an `isError` result the model can read.
    pub async fn call(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, McpError> {
        match self.dispatcher.dispatch(name, arguments).await {
            Ok(content) => call_result(&content, false),
            Err(err @ DispatchError::ToolExecutionFailed { .. }) => {
                call_result(&[Content::text(err.to_string())], true)
            }
            Err(err) => Err(McpError::invalid_params(
                err.to_string(),
                Some(json!({ "tool": name })),
            )),
        }
    }

    pub async fn run_stdio(self) -> Result<(), ServerError> {
        info!("server running (stdio)");
        let service = self
            .serve(io::stdio())
            .await
            .map_err(|e| ServerError::Rmcp(e.to_string()))?;
        service
            .waiting()
            .await
            .map_err(|e| ServerError::Rmcp(e.to_string()))?;
        info!("stdio peer closed; exiting");
        Ok(())
    }

    pub async fn run_sse(self, bind_addr: SocketAddr) -> Result<(), ServerError> {
        let shutdown_token = CancellationToken::new();
        let config = SseServerConfig {
            bind: bind_addr,
            sse_path: SSE_PATH.to_string(),
            post_path: MESSAGE_PATH.to_string(),
            ct: shutdown_token.clone(),
            sse_keep_alive: None,
        };

        let (sse_server, router) = SseServer::new(config);
        let app = router.route("/healthz", get(healthz));

        let listener = tokio::net::TcpListener::bind(bind_addr)
            .await
            .map_err(|e| ServerError::Io(e.to_string()))?;

        sse_server.with_service(move || self.clone());

        info!(%bind_addr, "http server listening (SSE transport)");
        let server_shutdown = shutdown_token.child_token();
        let server = axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                server_shutdown.cancelled().await;
            })
            .into_future();
        tokio::pin!(server);

        tokio::select! {
            res = &mut server => {
                res.map_err(|e| ServerError::Io(e.to_string()))
            }
            _ = tokio::signal::ctrl_c() => {
                info!("ctrl_c received; shutting down http server");
                shutdown_token.cancel();
                server.as_mut().await.map_err(|e| ServerError::Io(e.to_string()))
            }
        }
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::default()
            },
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(
                "Tools for reading, searching and editing a remote Obsidian vault.".to_string(),
            ),
            ..ServerInfo::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _ctx: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        debug!("tools/list");
        self.tools()
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _ctx: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let CallToolRequestParam { name, arguments } = request;
        // A call without arguments is an empty object, not a malformed request.
        let arguments = arguments
            .map(serde_json::Value::Object)
            .unwrap_or_else(|| serde_json::Value::Object(serde_json::Map::new()));
        self.call(&name, arguments).await
    }
}

fn call_result(content: &[Content], is_error: bool) -> Result<CallToolResult, McpError> {
    serde_json::from_value(json!({ "content": content, "isError": is_error }))
        .map_err(|e| mcp_internal_error(e.to_string()))
}

fn mcp_internal_error(message: impl Into<String>) -> McpError {
    McpError::internal_error(message.into(), None)
}

async fn healthz() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
