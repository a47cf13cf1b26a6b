use std::net::SocketAddr;

use configs::AppConfig;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
    client: reqwest::Client,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn start_server() -> anyhow::Result<TestApp> {
    let app = server::build_app(&AppConfig::default()).await?;
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url: format!("http://{}:{}", addr.ip(), addr.port()), client: reqwest::Client::new() })
}

#[tokio::test]
async fn e2e_order_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;

    let resp = app.client.get(app.url("/health")).send().await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let order = json!({
        "id": 100,
        "name": "Fix sink",
        "description": "leaky pipe",
        "start_date": "01/01/2023",
        "end_date": "01/05/2023",
        "address": "1 Main St",
        "price": 50,
        "customer_id": 1,
        "executor_id": 2
    });
    let resp = app.client.post(app.url("/orders")).json(&order).send().await?;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(resp.json::<String>().await?, "order added");

    let fetched: Value = app.client.get(app.url("/orders/100")).send().await?.json().await?;
    assert_eq!(fetched["name"], "Fix sink");
    let start: chrono::NaiveDate = serde_json::from_value(fetched["start_date"].clone())?;
    let end: chrono::NaiveDate = serde_json::from_value(fetched["end_date"].clone())?;
    assert_eq!(start, chrono::NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
    assert_eq!(end, chrono::NaiveDate::from_ymd_opt(2023, 1, 5).unwrap());

    let offer = json!({"id": 50, "order_id": 100, "executor_id": 2});
    let resp = app.client.post(app.url("/offers")).json(&offer).send().await?;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app.client.delete(app.url("/orders/100")).send().await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.json::<String>().await?, "Deleted id:100");

    // offers are not cascaded; the dangling reference stays readable
    let resp = app.client.get(app.url("/offers/50")).send().await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.client.get(app.url("/orders/100")).send().await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await?;
    assert_eq!(body["error"], "invalid id");
    Ok(())
}

#[tokio::test]
async fn e2e_concurrent_reads_share_the_pool() -> anyhow::Result<()> {
    let app = start_server().await?;

    let mut tasks = Vec::new();
    for id in 1..=6 {
        let client = app.client.clone();
        let url = app.url(&format!("/users/{id}"));
        tasks.push(tokio::spawn(async move { client.get(url).send().await.map(|r| r.status()) }));
    }
    for task in tasks {
        assert_eq!(task.await??, StatusCode::OK);
    }
    Ok(())
}
