use tokio::net::TcpListener;

/// Serve the mock API on `127.0.0.1:$PORT` (default 3000) for manual runs:
///
/// ```text
/// apicall -u http://127.0.0.1:3000/api/v2 -t dev -X GET -e /organizations/acme/workspaces
/// ```
#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port: u16 = match std::env::var("PORT") {
        Ok(value) => value.parse().map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("PORT={value}: {e}"))
        })?,
        Err(_) => 3000,
    };
    let listener = TcpListener::bind(("127.0.0.1", port)).await?;
    let addr = listener.local_addr()?;
    println!("JSON:API mock on http://{addr}/api/v2, echo on http://{addr}/echo");
    mock_server::run(listener).await
}
