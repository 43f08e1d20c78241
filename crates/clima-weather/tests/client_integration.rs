//! Integration tests for ApiClient using wiremock.

use clima_weather::{ApiClient, ApiError, Coordinate, TipKind};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn weather_body() -> serde_json::Value {
    serde_json::json!({
        "temp": 21.6,
        "descricao": "Parcialmente nublado",
        "icone": "⛅",
        "sensacao": 19.4,
        "umidade": 55,
        "uv": 3.27,
        "polen": "Baixo",
        "dica": "Cuidado com o sol",
        "tipo_dica": "atencao"
    })
}

#[tokio::test]
async fn test_search_city_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/cidade"))
        .and(query_param("nome", "São Paulo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "São Paulo",
            "admin1": "São Paulo",
            "country": "Brasil",
            "latitude": -23.5475,
            "longitude": -46.63611
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri()).unwrap();
    let city = client.search_city("São Paulo").await.unwrap();

    assert_eq!(city.display_title(), "São Paulo - São Paulo (Brasil)");
    assert_eq!(city.coordinate(), Coordinate::new(-23.5475, -46.63611));
}

#[tokio::test]
async fn test_search_city_escapes_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/cidade"))
        .and(query_param("nome", "Rio & Janeiro?"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "Rio de Janeiro",
            "latitude": -22.9,
            "longitude": -43.2
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri()).unwrap();
    let city = client.search_city("Rio & Janeiro?").await.unwrap();
    assert_eq!(city.name, "Rio de Janeiro");
}

#[tokio::test]
async fn test_search_city_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/cidade"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Cidade não encontrada"))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri()).unwrap();
    let err = client.search_city("Atlantis").await.unwrap_err();

    assert!(err.is_not_found());
    assert!(matches!(err, ApiError::CityNotFound { status: 404, .. }));
}

#[tokio::test]
async fn test_search_city_bad_request_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/cidade"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri()).unwrap();
    let err = client.search_city(" ").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_search_city_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/cidade"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri()).unwrap();
    let err = client.search_city("Curitiba").await.unwrap_err();
    assert!(matches!(err, ApiError::Parse(_)));
}

#[tokio::test]
async fn test_fetch_weather_sends_coordinates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/clima"))
        .and(query_param("lat", "-23.55"))
        .and(query_param("lon", "-46.63"))
        .respond_with(ResponseTemplate::new(200).set_body_json(weather_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri()).unwrap();
    let weather = client
        .fetch_weather(Coordinate::new(-23.55, -46.63))
        .await
        .unwrap();

    assert_eq!(weather.temp, 21.6);
    assert_eq!(weather.umidade, 55.0);
    assert_eq!(weather.tipo_dica, Some(TipKind::Atencao));
}

#[tokio::test]
async fn test_fetch_weather_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/clima"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri()).unwrap();
    let err = client
        .fetch_weather(Coordinate::new(0.0, 0.0))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 500 }));
}

#[tokio::test]
async fn test_fetch_weather_connection_refused() {
    // Nothing listens on the discard port.
    let client = ApiClient::new("http://127.0.0.1:9").unwrap();
    let err = client
        .fetch_weather(Coordinate::new(0.0, 0.0))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}
