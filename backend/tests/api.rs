use std::net::SocketAddr;

use almanac_backend::{
    build_router,
    config::{Catalog, Config},
    state::AppState,
};
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

async fn spawn_app(catalogs: &[Catalog]) -> SocketAddr {
    let config = Config {
        catalogs: catalogs.to_vec(),
        ..Config::default()
    };
    let app = build_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    addr
}

async fn spawn_full_app() -> SocketAddr {
    spawn_app(&[Catalog::Art, Catalog::Islamic]).await
}

async fn send_raw(
    addr: SocketAddr,
    method: &str,
    path: &str,
    body: Option<&Value>,
) -> (u16, String) {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let mut req = format!("{method} {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n");
    let payload = body.map(Value::to_string).unwrap_or_default();
    if body.is_some() {
        req.push_str("Content-Type: application/json\r\n");
    }
    req.push_str(&format!("Content-Length: {}\r\n\r\n", payload.len()));
    req.push_str(&payload);

    stream
        .write_all(req.as_bytes())
        .await
        .expect("write request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response must have separator");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("http status");
    (status, body.to_string())
}

async fn get_json(addr: SocketAddr, path: &str) -> (u16, Value) {
    let (status, body) = send_raw(addr, "GET", path, None).await;
    (status, serde_json::from_str(&body).expect("json body"))
}

async fn send_json(addr: SocketAddr, method: &str, path: &str, body: Value) -> (u16, Value) {
    let (status, body) = send_raw(addr, method, path, Some(&body)).await;
    (status, serde_json::from_str(&body).expect("json body"))
}

/// Percent-encodes a query value so Arabic keys survive the raw request line.
fn encode(value: &str) -> String {
    value
        .bytes()
        .map(|b| {
            if b.is_ascii_alphanumeric() {
                char::from(b).to_string()
            } else {
                format!("%{b:02X}")
            }
        })
        .collect()
}

fn riyadh_times() -> Value {
    json!({
        "city": "Riyadh",
        "country": "Saudi Arabia",
        "date": "2024-03-11",
        "fajr": "04:51",
        "sunrise": "06:09",
        "dhuhr": "12:08",
        "asr": "15:31",
        "maghrib": "18:07",
        "isha": "19:37"
    })
}

#[tokio::test]
async fn root_greets() {
    let addr = spawn_full_app().await;
    let (status, body) = send_raw(addr, "GET", "/", None).await;
    assert_eq!(status, 200);
    assert!(body.contains("Welcome"));
}

#[tokio::test]
async fn resources_filter_by_category() {
    let addr = spawn_full_app().await;

    let (status, json) = get_json(addr, "/api/resources?category=painting").await;
    assert_eq!(status, 200);
    let resources = json.as_array().expect("array");
    assert!(!resources.is_empty());
    assert!(resources.iter().all(|r| r["category"] == "painting"));

    let (status, json) = get_json(addr, "/api/resources?skillLevel=expert").await;
    assert_eq!(status, 200);
    assert_eq!(json, json!([]));

    let (status, json) = get_json(addr, "/api/resources/categories").await;
    assert_eq!(status, 200);
    assert_eq!(json[0]["id"], "all");
}

#[tokio::test]
async fn missing_records_and_bad_ids() {
    let addr = spawn_full_app().await;

    let (status, json) = get_json(addr, "/api/resources/999").await;
    assert_eq!(status, 404);
    assert_eq!(json["message"], "Resource not found");

    let (status, json) = get_json(addr, "/api/resources/abc").await;
    assert_eq!(status, 400);
    assert!(json["message"].is_string());

    let (status, _) = get_json(addr, "/api/skill-levels/expert").await;
    assert_eq!(status, 404);

    let (status, json) = get_json(addr, "/api/skill-levels/beginner").await;
    assert_eq!(status, 200);
    assert_eq!(json["level"], "beginner");
}

#[tokio::test]
async fn invalid_payloads_report_field_errors() {
    let addr = spawn_full_app().await;

    let (status, json) = send_json(
        addr,
        "POST",
        "/api/resources",
        json!({ "description": "no title", "category": "painting" }),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(json["message"], "Invalid resource data");
    assert!(json["errors"]["body"].is_array());

    let (status, json) = send_json(
        addr,
        "POST",
        "/api/resources",
        json!({
            "title": "Ink washes",
            "description": "Sumi-e basics",
            "category": "calligraphy",
            "skillLevel": "beginner",
            "duration": "1 hour",
            "rating": 4.2,
            "imageUrl": "/ink.jpg"
        }),
    )
    .await;
    assert_eq!(status, 400);
    assert!(json["errors"]["category"].is_array());
}

#[tokio::test]
async fn created_resource_is_readable() {
    let addr = spawn_full_app().await;

    let (status, created) = send_json(
        addr,
        "POST",
        "/api/resources",
        json!({
            "title": "Ink washes",
            "description": "Sumi-e basics",
            "category": "drawing",
            "skillLevel": "beginner",
            "duration": "1 hour",
            "rating": 4.2,
            "imageUrl": "/ink.jpg"
        }),
    )
    .await;
    assert_eq!(status, 201);

    let id = created["id"].as_i64().expect("id");
    let (status, fetched) = get_json(addr, &format!("/api/resources/{id}")).await;
    assert_eq!(status, 200);
    assert_eq!(fetched["title"], "Ink washes");
}

#[tokio::test]
async fn gallery_filters_and_create() {
    let addr = spawn_full_app().await;

    let (status, json) = get_json(addr, "/api/gallery?category=drawing&skillLevel=beginner").await;
    assert_eq!(status, 200);
    let titles: Vec<_> = json
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|g| g["title"].as_str())
        .collect();
    assert_eq!(titles, ["Botanical Line Work"]);

    let (status, created) = send_json(
        addr,
        "POST",
        "/api/gallery",
        json!({
            "title": "Dunes at Dusk",
            "artist": "Farah Said",
            "skillLevel": "intermediate",
            "category": "painting",
            "imageUrl": "/gallery/dunes.jpg"
        }),
    )
    .await;
    assert_eq!(status, 201);
    let id = created["id"].as_i64().expect("id");

    let (status, fetched) = get_json(addr, &format!("/api/gallery/{id}")).await;
    assert_eq!(status, 200);
    assert_eq!(fetched["artist"], "Farah Said");

    let (status, json) = send_json(
        addr,
        "POST",
        "/api/gallery",
        json!({
            "title": "Dunes at Dusk",
            "artist": " ",
            "skillLevel": "intermediate",
            "category": "sculpture",
            "imageUrl": "/gallery/dunes.jpg"
        }),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(json["message"], "Invalid gallery item data");
    assert_eq!(json["errors"]["artist"], json!(["must not be empty"]));
    assert!(json["errors"]["category"].is_array());
}

#[tokio::test]
async fn skill_level_paths_cover_every_level() {
    let addr = spawn_full_app().await;

    let (status, json) = get_json(addr, "/api/skill-levels").await;
    assert_eq!(status, 200);
    let levels: Vec<_> = json
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|p| p["level"].as_str())
        .collect();
    assert_eq!(levels, ["beginner", "intermediate", "advanced"]);
}

#[tokio::test]
async fn ninety_nine_names_in_order() {
    let addr = spawn_full_app().await;

    let (status, json) = get_json(addr, "/api/asma-ul-husna").await;
    assert_eq!(status, 200);
    let orders: Vec<i64> = json
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|n| n["order"].as_i64())
        .collect();
    assert_eq!(orders, (1..=99).collect::<Vec<_>>());

    let (status, _) = get_json(addr, "/api/asma-ul-husna/100").await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn adhkar_search_wins_over_category() {
    let addr = spawn_full_app().await;

    let (status, json) = get_json(addr, "/api/adhkar?category=evening&search=asbahna").await;
    assert_eq!(status, 200);
    let adhkar = json.as_array().expect("array");
    assert!(!adhkar.is_empty());
    assert!(adhkar.iter().all(|d| d["category"] == "morning"));
}

#[tokio::test]
async fn created_dhikr_is_readable() {
    let addr = spawn_full_app().await;

    let (status, created) = send_json(
        addr,
        "POST",
        "/api/adhkar",
        json!({
            "arabicText": "أستغفر الله",
            "translation": "أستغفر الله",
            "category": "general",
            "source": "صحيح مسلم",
            "repetitions": 100
        }),
    )
    .await;
    assert_eq!(status, 201);
    let id = created["id"].as_i64().expect("id");

    let (status, fetched) = get_json(addr, &format!("/api/adhkar/{id}")).await;
    assert_eq!(status, 200);
    assert_eq!(fetched["repetitions"], 100);

    let (status, json) = send_json(
        addr,
        "POST",
        "/api/adhkar",
        json!({
            "arabicText": "أستغفر الله",
            "translation": "أستغفر الله",
            "category": "night",
            "source": "صحيح مسلم",
            "repetitions": 0
        }),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(json["errors"]["repetitions"], json!(["must be between 1 and 100000"]));
    assert!(json["errors"]["category"].is_array());
}

#[tokio::test]
async fn quran_surah_and_search_combine() {
    let addr = spawn_full_app().await;

    let (status, json) = get_json(addr, "/api/quran?surah=112&search=allah").await;
    assert_eq!(status, 200);
    let verses: Vec<_> = json
        .as_array()
        .expect("array")
        .iter()
        .map(|v| (v["surahNumber"].as_i64(), v["verseNumber"].as_i64()))
        .collect();
    assert_eq!(verses, [(Some(112), Some(1)), (Some(112), Some(2))]);

    let (status, json) = get_json(addr, "/api/quran/1/7").await;
    assert_eq!(status, 200);
    assert_eq!(json["surahName"], "الفاتحة");

    let (status, json) = get_json(addr, "/api/quran/112/9").await;
    assert_eq!(status, 404);
    assert_eq!(json["message"], "Verse not found");
}

#[tokio::test]
async fn event_date_wins_over_category() {
    let addr = spawn_full_app().await;

    let path = format!(
        "/api/islamic-events?date={}&category={}",
        encode("1 شوال"),
        encode("حج")
    );
    let (status, json) = get_json(addr, &path).await;
    assert_eq!(status, 200);
    let titles: Vec<_> = json
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|e| e["title"].as_str())
        .collect();
    assert_eq!(titles, ["عيد الفطر"]);

    let hajj = format!("/api/islamic-events?category={}", encode("حج"));
    let (status, json) = get_json(addr, &hajj).await;
    assert_eq!(status, 200);
    assert_eq!(json[0]["title"], "يوم عرفة");
}

#[tokio::test]
async fn prayer_times_flow() {
    let addr = spawn_full_app().await;

    let (status, json) = get_json(addr, "/api/prayer-times?city=Riyadh").await;
    assert_eq!(status, 400);
    assert_eq!(json["message"], "City and date are required");

    let (status, _) = get_json(addr, "/api/prayer-times?city=Riyadh&date=2024-03-11").await;
    assert_eq!(status, 404);

    let (status, created) = send_json(addr, "POST", "/api/prayer-times", riyadh_times()).await;
    assert_eq!(status, 201);
    assert_eq!(created["fajr"], "04:51");

    let (status, fetched) = get_json(addr, "/api/prayer-times?city=riyadh&date=2024-03-11").await;
    assert_eq!(status, 200);
    assert_eq!(fetched["id"], created["id"]);

    let (status, again) = send_json(addr, "POST", "/api/prayer-times", riyadh_times()).await;
    assert_eq!(status, 201);
    assert_eq!(again["id"], created["id"]);

    let (status, next) =
        get_json(addr, "/api/prayer-times/next?city=Riyadh&date=2024-03-11&time=22:00").await;
    assert_eq!(status, 200);
    assert_eq!(next["prayer"], "fajr");
    assert_eq!(next["tomorrow"], true);

    let mut unordered = riyadh_times();
    unordered["asr"] = json!("11:00");
    let (status, json) = send_json(addr, "POST", "/api/prayer-times", unordered).await;
    assert_eq!(status, 400);
    assert_eq!(json["message"], "Invalid prayer times data");
    assert_eq!(json["errors"]["body"], json!(["asr must be later than dhuhr"]));
}

#[tokio::test]
async fn qibla_bearing() {
    let addr = spawn_full_app().await;

    let (status, json) = get_json(addr, "/api/qibla?lat=51.5074&lng=-0.1278&heading=115").await;
    assert_eq!(status, 200);
    let bearing = json["bearing"].as_f64().expect("bearing");
    assert!((bearing - 118.99).abs() < 0.1, "{bearing}");
    assert_eq!(json["aligned"], true);

    let (status, _) = get_json(addr, "/api/qibla?lat=95&lng=0").await;
    assert_eq!(status, 400);

    let (status, json) = get_json(addr, "/api/qibla?lat=51.5074&lng=-0.1278&heading=inf").await;
    assert_eq!(status, 400);
    assert_eq!(json["message"], "heading must be a finite number of degrees");
}

#[tokio::test]
async fn hijri_calendar_endpoints() {
    let addr = spawn_full_app().await;

    let (status, json) = get_json(addr, "/api/hijri-date?date=2000-01-01").await;
    assert_eq!(status, 200);
    assert_eq!((json["day"].as_i64(), json["month"].as_i64()), (Some(24), Some(9)));
    assert_eq!(json["year"], 1420);

    let (status, json) = get_json(addr, "/api/islamic-events/on?date=2024-04-10").await;
    assert_eq!(status, 200);
    assert_eq!(json["hijri"]["key"], "1 شوال");
    assert!(!json["events"].as_array().expect("events").is_empty());

    let (status, json) = get_json(addr, "/api/hijri-months").await;
    assert_eq!(status, 200);
    assert_eq!(json.as_array().map(Vec::len), Some(12));

    let (status, json) = get_json(addr, "/api/hijri-date?date=0622-07-19").await;
    assert_eq!(status, 200);
    assert_eq!(json["key"], "1 محرم");
    assert_eq!(json["year"], 1);
}

#[tokio::test]
async fn dates_before_the_hijra_are_rejected() {
    let addr = spawn_full_app().await;

    for path in ["/api/hijri-date?date=0500-01-01", "/api/islamic-events/on?date=0622-07-18"] {
        let (status, json) = get_json(addr, path).await;
        assert_eq!(status, 400, "{path}");
        assert!(json["message"].as_str().is_some_and(|m| m.contains("1 Muharram")));
    }
}

#[tokio::test]
async fn tasbih_flow() {
    let addr = spawn_full_app().await;

    let (status, json) = send_json(
        addr,
        "POST",
        "/api/tasbih",
        json!({ "userId": "u1", "dhikrText": "سبحان الله", "target": 0 }),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(json["message"], "Invalid tasbih data");
    assert!(json["errors"]["target"].is_array());

    let (status, session) = send_json(
        addr,
        "POST",
        "/api/tasbih",
        json!({ "userId": "u1", "dhikrText": "سبحان الله", "target": 3 }),
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(session["completed"], false);
    let id = session["id"].as_i64().expect("id");

    let (status, session) =
        send_raw(addr, "POST", &format!("/api/tasbih/{id}/increment?by=2"), None).await;
    assert_eq!(status, 200);
    let session: Value = serde_json::from_str(&session).expect("json");
    assert_eq!(session["count"], 2);
    assert_eq!(session["completed"], false);

    let (status, session) =
        send_raw(addr, "POST", &format!("/api/tasbih/{id}/increment"), None).await;
    assert_eq!(status, 200);
    let session: Value = serde_json::from_str(&session).expect("json");
    assert_eq!(session["completed"], true);
    assert_eq!(session["progress"], 100.0);

    let (status, sessions) = get_json(addr, "/api/tasbih/u1").await;
    assert_eq!(status, 200);
    assert_eq!(sessions.as_array().map(Vec::len), Some(1));

    let (status, _) = send_json(addr, "PUT", "/api/tasbih/999", json!({ "count": 1 })).await;
    assert_eq!(status, 404);

    let (status, _) = send_json(addr, "PUT", "/api/tasbih/abc", json!({ "count": 1 })).await;
    assert_eq!(status, 400);

    let (status, presets) = get_json(addr, "/api/tasbih/presets").await;
    assert_eq!(status, 200);
    assert!(presets.as_array().is_some_and(|p| !p.is_empty()));
}

#[tokio::test]
async fn settings_flow() {
    let addr = spawn_full_app().await;

    let (status, json) = get_json(addr, "/api/settings/u1").await;
    assert_eq!(status, 404);
    assert_eq!(json["message"], "User settings not found");

    let (status, json) =
        send_json(addr, "POST", "/api/settings", json!({ "userId": "u1", "language": "x" })).await;
    assert_eq!(status, 400);
    assert_eq!(json["errors"]["language"], json!(["must be between 2 and 10 characters"]));

    let (status, created) =
        send_json(addr, "POST", "/api/settings", json!({ "userId": "u1" })).await;
    assert_eq!(status, 201);
    assert_eq!(created["calculationMethod"], 4);
    assert_eq!(created["theme"], "light");

    let (status, updated) =
        send_json(addr, "PUT", "/api/settings/u1", json!({ "theme": "dark" })).await;
    assert_eq!(status, 200);
    assert_eq!(updated["theme"], "dark");
    assert_eq!(updated["id"], created["id"]);

    let (status, _) =
        send_json(addr, "PUT", "/api/settings/nobody", json!({ "theme": "dark" })).await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn disabled_catalog_is_not_mounted() {
    let addr = spawn_app(&[Catalog::Art]).await;

    let (status, _) = send_raw(addr, "GET", "/api/adhkar", None).await;
    assert_eq!(status, 404);

    let (status, _) = get_json(addr, "/api/resources").await;
    assert_eq!(status, 200);
}
