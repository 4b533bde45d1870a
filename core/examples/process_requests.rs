//! Drives the name processor with a handful of requests and prints each
//! response, without any HTTP server in between.
//!
//! Run with `cargo run -p greeter-core --example process_requests`.
//! Set `RUST_LOG=debug` to see which branch each request takes.

use greeter_core::{handle, health_check, HttpMethod, HttpRequest, HttpResponse};
use serde_json::json;

fn print_response(title: &str, response: &HttpResponse) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
    println!("Status Code: {}", response.status);
    println!("Content-Type: {}", response.content_type);
    println!("\nResponse Body:");
    match serde_json::to_string_pretty(&response.body) {
        Ok(pretty) => println!("{pretty}"),
        Err(_) => println!("{}", String::from_utf8_lossy(&response.body_bytes())),
    }
}

fn main() -> Result<(), serde_json::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let get = || HttpRequest::new(HttpMethod::Get);
    let post = || HttpRequest::new(HttpMethod::Post);

    print_response(
        "GET with query parameter",
        &handle(&get().with_query("name", "John Doe")),
    );
    print_response(
        "POST with JSON body",
        &handle(&post().with_json(&json!({"name": "Alice Smith"}))?),
    );
    print_response("Missing 'name' parameter", &handle(&get()));
    print_response(
        "Empty name parameter",
        &handle(&get().with_query("name", "   ")),
    );
    print_response(
        "Invalid JSON in request body",
        &handle(&post().with_body(b"{invalid json}".to_vec())),
    );
    print_response("Health check", &health_check(&get()));

    Ok(())
}
