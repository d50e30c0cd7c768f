use crate::common::*;
use argo_client::prelude::*;
use assert_json_diff::assert_json_eq;
use mockito::{Matcher, Server};
use serde_json::json;

#[tokio::test]
async fn test_call_before_login_is_refused_without_request() {
    let mut server = Server::new_async().await;
    let absences = server
        .mock("GET", "/assenze")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = Client::new_lazy(test_config(&server)).unwrap();

    let err = client.call("assenze", None).await.unwrap_err();
    assert!(matches!(err, AppError::NotLoggedIn));

    let err = client.absences().await.unwrap_err();
    assert!(err.is_not_logged_in());
    let err = client.today(None).await.unwrap_err();
    assert!(err.is_not_logged_in());

    absences.assert_async().await;
}

#[tokio::test]
async fn test_call_sends_identifying_headers_and_date() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server).await;

    let homework = server
        .mock("GET", "/compiti")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("datGiorno".into(), "2024-05-06".into()),
            Matcher::Regex(r"_dc=\d+".into()),
        ]))
        .match_header("x-key-app", ARGO_APP_KEY)
        .match_header("x-version", DEFAULT_API_VERSION)
        .match_header("x-auth-token", CARD_TOKEN)
        .match_header("x-cod-min", SCHOOL_CODE)
        .match_header("x-prg-alunno", "4321")
        .match_header("x-prg-scheda", "1")
        .match_header("x-prg-scuola", "7")
        .match_header("user-agent", USER_AGENT)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"dati":[{"desCompiti":"Esercizi pag. 12"}]}"#)
        .create_async()
        .await;

    let date = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
    let value = client.call("compiti", Some(date)).await.unwrap();

    assert_json_eq!(value, json!({"dati": [{"desCompiti": "Esercizi pag. 12"}]}));
    homework.assert_async().await;
}

#[tokio::test]
async fn test_call_defaults_to_today() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server).await;

    let expected_day = format_day(today());
    let timetable = server
        .mock("GET", "/orario")
        .match_query(Matcher::UrlEncoded("datGiorno".into(), expected_day))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let value = client.timetable().await.unwrap();

    assert_json_eq!(value, json!([]));
    timetable.assert_async().await;
}

#[tokio::test]
async fn test_call_accepts_unknown_endpoint_names() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server).await;

    let mock = server
        .mock("GET", "/bacheca")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"dati":[]}"#)
        .create_async()
        .await;

    let value = client.call("/bacheca", None).await.unwrap();

    assert_json_eq!(value, json!({"dati": []}));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_call_rejects_empty_endpoint_name() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server).await;

    let err = client.call("  ", None).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[tokio::test]
async fn test_call_with_empty_name_before_login_is_not_logged_in() {
    let server = Server::new_async().await;
    let client = Client::new_lazy(test_config(&server)).unwrap();

    let err = client.call("", None).await.unwrap_err();
    assert!(err.is_not_logged_in());
}

#[tokio::test]
async fn test_wrappers_hit_their_endpoints() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server).await;

    let mut mocks = Vec::new();
    for endpoint in Endpoint::ALL {
        let mock = server
            .mock("GET", format!("/{endpoint}").as_str())
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(format!(r#"{{"endpoint":"{endpoint}"}}"#))
            .expect(1)
            .create_async()
            .await;
        mocks.push(mock);
    }

    let results = vec![
        ("assenze", client.absences().await.unwrap()),
        ("oggi", client.today(None).await.unwrap()),
        ("notedisciplinari", client.disciplinary_notes().await.unwrap()),
        ("votigiornalieri", client.daily_marks().await.unwrap()),
        ("votiscrutinio", client.final_marks().await.unwrap()),
        ("compiti", client.homework().await.unwrap()),
        ("argomenti", client.lesson_topics().await.unwrap()),
        ("promemoria", client.reminders().await.unwrap()),
        ("orario", client.timetable().await.unwrap()),
        ("docenticlasse", client.teachers().await.unwrap()),
    ];

    for (name, value) in results {
        assert_json_eq!(value, json!({ "endpoint": name }));
    }
    for mock in mocks {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_today_forwards_explicit_date() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server).await;

    let mock = server
        .mock("GET", "/oggi")
        .match_query(Matcher::UrlEncoded("datGiorno".into(), "2023-12-31".into()))
        .with_status(200)
        .with_body(r#"{"dati":[]}"#)
        .create_async()
        .await;

    let date = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
    client.today(Some(date)).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_rejected_call_without_hint_is_authentication_failure() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server).await;

    let mock = server
        .mock("GET", "/assenze")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(r#"{"value":"Token scaduto"}"#)
        .expect(1)
        .create_async()
        .await;

    let err = client.absences().await.unwrap_err();

    assert!(err.is_authentication_failed());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_rejected_call_renegotiates_version_and_retries_once() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server).await;

    let rejected = server
        .mock("GET", "/votigiornalieri")
        .match_query(Matcher::Any)
        .match_header("x-version", DEFAULT_API_VERSION)
        .with_status(401)
        .with_body(r#"{"value":"Aggiornare l'app alla versione 2.3.0"}"#)
        .expect(1)
        .create_async()
        .await;
    let relogin = mock_login(&mut server, "2.3.0").await;
    let cards = mock_cards(&mut server, LOGIN_TOKEN, "2.3.0").await;
    let accepted = server
        .mock("GET", "/votigiornalieri")
        .match_query(Matcher::Any)
        .match_header("x-version", "2.3.0")
        .with_status(200)
        .with_body(r#"{"dati":[{"decValore":8.0}]}"#)
        .expect(1)
        .create_async()
        .await;

    let value = client.daily_marks().await.unwrap();

    assert_json_eq!(value, json!({"dati": [{"decValore": 8.0}]}));
    assert_eq!(client.get_session().await.unwrap().api_version, "2.3.0");
    rejected.assert_async().await;
    relogin.assert_async().await;
    cards.assert_async().await;
    accepted.assert_async().await;
}

#[tokio::test]
async fn test_renegotiated_call_failure_is_returned() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server).await;

    server
        .mock("GET", "/orario")
        .match_query(Matcher::Any)
        .match_header("x-version", DEFAULT_API_VERSION)
        .with_status(401)
        .with_body("versione 2.3.0 richiesta")
        .create_async()
        .await;
    mock_login(&mut server, "2.3.0").await;
    mock_cards(&mut server, LOGIN_TOKEN, "2.3.0").await;
    let retried = server
        .mock("GET", "/orario")
        .match_query(Matcher::Any)
        .match_header("x-version", "2.3.0")
        .with_status(401)
        .with_body("versione 2.4.0 richiesta")
        .expect(1)
        .create_async()
        .await;

    let err = client.timetable().await.unwrap_err();

    assert!(err.is_authentication_failed());
    retried.assert_async().await;
}

#[tokio::test]
async fn test_strict_policy_does_not_renegotiate_calls() {
    let mut server = Server::new_async().await;
    mock_login(&mut server, DEFAULT_API_VERSION).await;
    mock_cards(&mut server, LOGIN_TOKEN, DEFAULT_API_VERSION).await;
    let config = test_config(&server).with_version_policy(VersionPolicy::Strict);
    let client = Client::new(config).await.unwrap();

    let rejected = server
        .mock("GET", "/promemoria")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body("versione 2.3.0 richiesta")
        .expect(1)
        .create_async()
        .await;
    let relogin = server
        .mock("GET", "/login")
        .match_query(Matcher::Any)
        .match_header("x-version", "2.3.0")
        .expect(0)
        .create_async()
        .await;

    let err = client.reminders().await.unwrap_err();

    assert!(err.is_authentication_failed());
    rejected.assert_async().await;
    relogin.assert_async().await;
}

#[tokio::test]
async fn test_non_json_payload_is_a_json_error() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server).await;

    server
        .mock("GET", "/docenticlasse")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>manutenzione</html>")
        .create_async()
        .await;

    let err = client.teachers().await.unwrap_err();
    assert!(matches!(err, AppError::Json(_)));
}

#[tokio::test]
async fn test_call_after_logout_is_refused() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server).await;
    client.logout().await.unwrap();

    let err = client.homework().await.unwrap_err();
    assert!(err.is_not_logged_in());
}
