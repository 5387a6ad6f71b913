use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TodoJson {
    id: String,
    user: String,
    task: String,
    date: String,
    status: String,
    #[serde(default)]
    completed_at: Option<String>,
    created_at: String,
    updated_at: String,
}

#[derive(Debug, Deserialize)]
struct ErrorJson {
    error: String,
}

#[derive(Debug, Deserialize)]
struct MessageJson {
    message: String,
}

#[derive(Debug, Deserialize)]
struct SummaryJson {
    total: u64,
    done: u64,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("couple_todo_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client
            .get(format!("{base_url}/api/todo/probe/2099-01-01"))
            .send()
            .await
        {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_couple_todo"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn create_todo(client: &Client, base_url: &str, user: &str, task: &str, date: &str) -> TodoJson {
    let response = client
        .post(format!("{base_url}/api/todo"))
        .json(&serde_json::json!({ "user": user, "task": task, "date": date }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    response.json().await.unwrap()
}

#[tokio::test]
async fn http_create_and_list_roundtrip() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let created = create_todo(&client, &server.base_url, "alice", "write report", "2099-01-01").await;
    assert!(!created.id.is_empty());
    assert_eq!(created.user, "alice");
    assert_eq!(created.task, "write report");
    assert_eq!(created.date, "2099-01-01");
    assert_eq!(created.status, "pending");
    assert!(created.completed_at.is_none());
    assert_eq!(created.created_at, created.updated_at);

    let listed: Vec<TodoJson> = client
        .get(format!("{}/api/todo/alice/2099-01-01", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(listed.iter().any(|todo| todo.id == created.id));
}

#[tokio::test]
async fn http_create_normalizes_the_date() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let created = create_todo(&client, &server.base_url, "alice", "buy groceries", "2099/2/3").await;
    assert_eq!(created.date, "2099-02-03");
}

#[tokio::test]
async fn http_create_ignores_client_supplied_status() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/todo", server.base_url))
        .json(&serde_json::json!({
            "user": "alice",
            "task": "sneaky",
            "date": "2099-01-02",
            "status": "done"
        }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let created: TodoJson = response.json().await.unwrap();
    assert_eq!(created.status, "pending");
    assert!(created.completed_at.is_none());
}

#[tokio::test]
async fn http_create_rejects_past_days() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/todo", server.base_url))
        .json(&serde_json::json!({ "user": "alice", "task": "time travel", "date": "2001-01-01" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body: ErrorJson = response.json().await.unwrap();
    assert_eq!(body.error, "Cannot add todo for past days");

    let listed: Vec<TodoJson> = client
        .get(format!("{}/api/todo/alice/2001-01-01", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn http_create_rejects_unparseable_dates() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/todo", server.base_url))
        .json(&serde_json::json!({ "user": "alice", "task": "task", "date": "someday" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_toggle_sets_and_clears_completion() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let created = create_todo(&client, &server.base_url, "bob", "water plants", "2099-01-03").await;

    let done: TodoJson = client
        .put(format!("{}/api/todo/{}", server.base_url, created.id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(done.status, "done");
    assert!(done.completed_at.is_some());

    let reverted: TodoJson = client
        .put(format!("{}/api/todo/{}", server.base_url, created.id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(reverted.status, "pending");
    assert!(reverted.completed_at.is_none());
}

#[tokio::test]
async fn http_toggle_unknown_id_is_404() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .put(format!("{}/api/todo/no-such-id", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: ErrorJson = response.json().await.unwrap();
    assert_eq!(body.error, "Todo not found");
}

#[tokio::test]
async fn http_delete_roundtrip() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let created = create_todo(&client, &server.base_url, "bob", "old chore", "2099-01-04").await;

    let response = client
        .delete(format!("{}/api/todo/{}", server.base_url, created.id))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let body: MessageJson = response.json().await.unwrap();
    assert_eq!(body.message, "Deleted");

    let again = client
        .delete(format!("{}/api/todo/{}", server.base_url, created.id))
        .send()
        .await
        .unwrap();
    assert_eq!(again.status(), StatusCode::NOT_FOUND);

    let listed: Vec<TodoJson> = client
        .get(format!("{}/api/todo/bob/2099-01-04", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(listed.iter().all(|todo| todo.id != created.id));
}

#[tokio::test]
async fn http_performance_counts_per_date() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let first = create_todo(&client, &server.base_url, "carol", "one", "2099-03-03").await;
    create_todo(&client, &server.base_url, "carol", "two", "2099-03-03").await;
    create_todo(&client, &server.base_url, "carol", "later", "2099-03-04").await;

    let response = client
        .put(format!("{}/api/todo/{}", server.base_url, first.id))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let filtered: std::collections::BTreeMap<String, SummaryJson> = client
        .get(format!(
            "{}/api/performance/carol?date=2099-03-03",
            server.base_url
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(filtered.len(), 1);
    let day = &filtered["2099-03-03"];
    assert_eq!((day.total, day.done), (2, 1));

    let all: std::collections::BTreeMap<String, SummaryJson> = client
        .get(format!("{}/api/performance/carol", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all["2099-03-03"].total, 2);
    assert_eq!(all["2099-03-04"].total, 1);
    assert_eq!(all["2099-03-04"].done, 0);
}
