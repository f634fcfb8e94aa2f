//! Tests for [`telegram_bot::TelegramBotAdapter`] against a mock Telegram Bot API.
//!
//! teloxide request path format is `/bot<token>/<method>`; the adapter's bot points at the mockito server.

use telegram_bot::{build_bot_components, BaseConfig, Chat, InlineButton, Reply};

const TEST_BOT_TOKEN: &str = "test_bot_token_12345";

const MESSAGE_RESULT: &str = r#"{
    "ok": true,
    "result": {
        "message_id": 1,
        "date": 1706529600,
        "chat": {"id": 456, "type": "private", "first_name": "Test"},
        "from": {"id": 123456789, "is_bot": true, "first_name": "FxBot", "username": "fx_bot"},
        "text": "ok"
    }
}"#;

fn base_config(server: &mockito::ServerGuard) -> BaseConfig {
    let mut base = BaseConfig::with_token(TEST_BOT_TOKEN);
    base.telegram_api_url = Some(server.url());
    base
}

/// **Test: text reply is POSTed to sendMessage with the chat id and text.**
#[tokio::test]
async fn test_send_message_hits_telegram() {
    let mut server = mockito::Server::new_async().await;
    let mock_send = server
        .mock("POST", format!("/bot{}/sendMessage", TEST_BOT_TOKEN).as_str())
        .match_body(mockito::Matcher::AllOf(vec![
            mockito::Matcher::Regex("456".to_string()),
            mockito::Matcher::Regex("100 USD = 92.00 EUR".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(MESSAGE_RESULT)
        .create_async()
        .await;

    let components = build_bot_components(&base_config(&server), None).unwrap();
    components
        .bot
        .send_message(&Chat::private(456), "100 USD = 92.00 EUR")
        .await
        .expect("send_message");

    mock_send.assert_async().await;
}

/// **Test: photo reply is uploaded to sendPhoto.**
#[tokio::test]
async fn test_send_photo_hits_telegram() {
    let mut server = mockito::Server::new_async().await;
    let mock_photo = server
        .mock("POST", format!("/bot{}/sendPhoto", TEST_BOT_TOKEN).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(MESSAGE_RESULT)
        .create_async()
        .await;

    let components = build_bot_components(&base_config(&server), None).unwrap();
    let chat = Chat::private(456);
    let message = telegram_bot::Message::incoming_text(
        telegram_bot::User {
            id: 1,
            username: None,
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat,
        "/chart USD EUR",
    );
    components
        .bot
        .reply_to(
            &message,
            &Reply::Photo {
                png: vec![0x89, b'P', b'N', b'G'],
                caption: Some("USD to EUR".to_string()),
            },
        )
        .await
        .expect("send_photo");

    mock_photo.assert_async().await;
}

/// **Test: a Telegram API error surfaces as Err, not a panic.**
#[tokio::test]
async fn test_send_message_api_error_is_err() {
    let mut server = mockito::Server::new_async().await;
    let _mock_send = server
        .mock("POST", format!("/bot{}/sendMessage", TEST_BOT_TOKEN).as_str())
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok": false, "error_code": 400, "description": "Bad Request: chat not found"}"#)
        .create_async()
        .await;

    let components = build_bot_components(&base_config(&server), None).unwrap();
    let result = components
        .bot
        .send_message(&Chat::private(456), "hello")
        .await;

    assert!(result.is_err());
}

/// **Test: a keyboard reply is POSTed to sendMessage with the buttons' callback data as reply_markup.**
#[tokio::test]
async fn test_send_keyboard_hits_telegram() {
    let mut server = mockito::Server::new_async().await;
    let mock_send = server
        .mock("POST", format!("/bot{}/sendMessage", TEST_BOT_TOKEN).as_str())
        .match_body(mockito::Matcher::AllOf(vec![
            mockito::Matcher::Regex("inline_keyboard".to_string()),
            mockito::Matcher::Regex("graph_usd/eur".to_string()),
            mockito::Matcher::Regex("Choose a currency pair".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(MESSAGE_RESULT)
        .create_async()
        .await;

    let components = build_bot_components(&base_config(&server), None).unwrap();
    components
        .bot
        .send_keyboard(
            &Chat::private(456),
            "Choose a currency pair",
            &[vec![InlineButton::new("USD/EUR", "graph_usd/eur")]],
        )
        .await
        .expect("send_keyboard");

    mock_send.assert_async().await;
}

/// **Test: answering a button press calls answerCallbackQuery with the query id.**
#[tokio::test]
async fn test_answer_callback_hits_telegram() {
    let mut server = mockito::Server::new_async().await;
    let mock_answer = server
        .mock(
            "POST",
            format!("/bot{}/answerCallbackQuery", TEST_BOT_TOKEN).as_str(),
        )
        .match_body(mockito::Matcher::Regex("cb-42".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok": true, "result": true}"#)
        .create_async()
        .await;

    let components = build_bot_components(&base_config(&server), None).unwrap();
    components
        .bot
        .answer_callback("cb-42")
        .await
        .expect("answer_callback");

    mock_answer.assert_async().await;
}
