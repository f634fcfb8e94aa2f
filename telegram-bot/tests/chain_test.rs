//! Integration tests for [`telegram_bot::HandlerChain`].
//!
//! Covers: before/after order, before stopping the chain, Reply stopping the handle phase and
//! being passed to after, and replies delivered through a recording [`Bot`].

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use telegram_bot::{
    build_handler_chain, Bot, Chat, Handler, HandlerChain, HandlerResponse, InlineButton, Message,
    Reply, User,
};

fn test_user() -> User {
    User {
        id: 123,
        username: Some("test_user".to_string()),
        first_name: Some("Test".to_string()),
        last_name: None,
    }
}

fn create_test_message(content: &str) -> Message {
    Message::incoming_text(test_user(), Chat::private(456), content)
}

/// **Test: before and after run once each; handle runs once; response is Continue.**
#[tokio::test]
async fn test_handler_chain_with_handler() {
    let before_count = Arc::new(AtomicUsize::new(0));
    let after_count = Arc::new(AtomicUsize::new(0));
    let handle_count = Arc::new(AtomicUsize::new(0));

    let chain = HandlerChain::new()
        .add_handler(Arc::new(TestBeforeAfterHandler {
            before_count: before_count.clone(),
            after_count: after_count.clone(),
        }))
        .add_handler(Arc::new(TestHandler {
            handle_count: handle_count.clone(),
        }));

    let result = chain.handle(&create_test_message("test")).await.unwrap();

    assert_eq!(result, HandlerResponse::Continue);
    assert_eq!(before_count.load(Ordering::SeqCst), 1);
    assert_eq!(handle_count.load(Ordering::SeqCst), 1);
    assert_eq!(after_count.load(Ordering::SeqCst), 1);
}

/// **Test: before returning false stops the chain; handle is not run.**
#[tokio::test]
async fn test_handler_stops_chain() {
    struct BlockingHandler;

    #[async_trait]
    impl Handler for BlockingHandler {
        async fn before(&self, _message: &Message) -> telegram_bot::Result<bool> {
            Ok(false)
        }
    }

    let handle_count = Arc::new(AtomicUsize::new(0));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(BlockingHandler))
        .add_handler(Arc::new(TestHandler {
            handle_count: handle_count.clone(),
        }));

    let result = chain.handle(&create_test_message("test")).await.unwrap();

    assert_eq!(result, HandlerResponse::Stop);
    assert_eq!(handle_count.load(Ordering::SeqCst), 0);
}

/// **Test: Reply ends the handle phase; later handlers are skipped; after sees the reply.**
#[tokio::test]
async fn test_reply_stops_chain_and_passes_to_after() {
    struct ReplyHandler;

    #[async_trait]
    impl Handler for ReplyHandler {
        async fn handle(&self, _message: &Message) -> telegram_bot::Result<HandlerResponse> {
            Ok(HandlerResponse::Reply(Reply::text("100 USD = 92.00 EUR")))
        }
    }

    struct CaptureResponseHandler {
        seen: Arc<Mutex<Option<HandlerResponse>>>,
    }

    #[async_trait]
    impl Handler for CaptureResponseHandler {
        async fn after(
            &self,
            _message: &Message,
            response: &HandlerResponse,
        ) -> telegram_bot::Result<()> {
            *self.seen.lock().unwrap() = Some(response.clone());
            Ok(())
        }
    }

    let seen = Arc::new(Mutex::new(None));
    let handle_count = Arc::new(AtomicUsize::new(0));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(CaptureResponseHandler { seen: seen.clone() }))
        .add_handler(Arc::new(ReplyHandler))
        .add_handler(Arc::new(TestHandler {
            handle_count: handle_count.clone(),
        }));

    let result = chain.handle(&create_test_message("test")).await.unwrap();

    let expected = HandlerResponse::Reply(Reply::text("100 USD = 92.00 EUR"));
    assert_eq!(result, expected);
    assert_eq!(*seen.lock().unwrap(), Some(expected));
    assert_eq!(handle_count.load(Ordering::SeqCst), 0);
}

/// **Test: before runs first→last, after runs last→first.**
#[tokio::test]
async fn test_multiple_handlers_executed_in_order() {
    let order = Arc::new(Mutex::new(Vec::new()));

    struct OrderHandler {
        name: &'static str,
        order: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl Handler for OrderHandler {
        async fn before(&self, _message: &Message) -> telegram_bot::Result<bool> {
            self.order.lock().unwrap().push(format!("before_{}", self.name));
            Ok(true)
        }

        async fn after(
            &self,
            _message: &Message,
            _response: &HandlerResponse,
        ) -> telegram_bot::Result<()> {
            self.order.lock().unwrap().push(format!("after_{}", self.name));
            Ok(())
        }
    }

    let chain = HandlerChain::new()
        .add_handler(Arc::new(OrderHandler {
            name: "first",
            order: order.clone(),
        }))
        .add_handler(Arc::new(OrderHandler {
            name: "second",
            order: order.clone(),
        }));

    chain.handle(&create_test_message("test")).await.unwrap();

    assert_eq!(
        *order.lock().unwrap(),
        vec!["before_first", "before_second", "after_second", "after_first"]
    );
}

/// **Test: Bot::reply_to dispatches text, photo and keyboard replies to the message's chat.**
#[tokio::test]
async fn test_reply_to_dispatches_by_kind() {
    let bot = RecordingBot::default();
    let message = create_test_message("test");

    bot.reply_to(&message, &Reply::text("hello")).await.unwrap();
    bot.reply_to(
        &message,
        &Reply::Photo {
            png: vec![1, 2, 3],
            caption: Some("chart".to_string()),
        },
    )
    .await
    .unwrap();
    bot.reply_to(
        &message,
        &Reply::Keyboard {
            text: "Pick one:".to_string(),
            rows: vec![
                vec![InlineButton::new("A", "a"), InlineButton::new("B", "b")],
                vec![InlineButton::new("C", "c")],
            ],
        },
    )
    .await
    .unwrap();

    let sent = bot.sent.lock().unwrap();
    assert_eq!(
        *sent,
        vec![
            (456, "text:hello".to_string()),
            (456, "photo:3:chart".to_string()),
            (456, "keyboard:Pick one:[a,b][c]".to_string())
        ]
    );
}

/// **Test: the default chain puts logging and callback acknowledgement in front of the application handler.**
#[tokio::test]
async fn test_build_handler_chain_prepends_framework_handlers() {
    let handle_count = Arc::new(AtomicUsize::new(0));
    let bot = Arc::new(RecordingBot::default());
    let chain = build_handler_chain(
        Arc::new(TestHandler {
            handle_count: handle_count.clone(),
        }),
        bot.clone(),
    );

    assert_eq!(chain.len(), 3);
    chain.handle(&create_test_message("test")).await.unwrap();
    assert_eq!(handle_count.load(Ordering::SeqCst), 1);
    assert!(bot.answered.lock().unwrap().is_empty());
}

/// **Test: a button press is answered once before the application handler runs.**
#[tokio::test]
async fn test_callback_is_answered_before_handle() {
    let handle_count = Arc::new(AtomicUsize::new(0));
    let bot = Arc::new(RecordingBot::default());
    let chain = build_handler_chain(
        Arc::new(TestHandler {
            handle_count: handle_count.clone(),
        }),
        bot.clone(),
    );

    let press = Message::callback("cb-1", test_user(), Chat::private(456), "graph_usd/eur");
    chain.handle(&press).await.unwrap();

    assert_eq!(*bot.answered.lock().unwrap(), vec!["cb-1".to_string()]);
    assert_eq!(handle_count.load(Ordering::SeqCst), 1);
}

/// **Test: a failed callback answer is not fatal; the application still handles the press.**
#[tokio::test]
async fn test_callback_answer_failure_continues_chain() {
    let handle_count = Arc::new(AtomicUsize::new(0));
    let bot = Arc::new(RecordingBot {
        fail_answers: true,
        ..RecordingBot::default()
    });
    let chain = build_handler_chain(
        Arc::new(TestHandler {
            handle_count: handle_count.clone(),
        }),
        bot,
    );

    let press = Message::callback("cb-2", test_user(), Chat::private(456), "timeframe_usd/eur_7");
    let result = chain.handle(&press).await.unwrap();

    assert_eq!(result, HandlerResponse::Continue);
    assert_eq!(handle_count.load(Ordering::SeqCst), 1);
}

// --- Helpers used by tests ---

struct TestBeforeAfterHandler {
    before_count: Arc<AtomicUsize>,
    after_count: Arc<AtomicUsize>,
}

#[async_trait]
impl Handler for TestBeforeAfterHandler {
    async fn before(&self, _message: &Message) -> telegram_bot::Result<bool> {
        self.before_count.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    }

    async fn after(
        &self,
        _message: &Message,
        _response: &HandlerResponse,
    ) -> telegram_bot::Result<()> {
        self.after_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct TestHandler {
    handle_count: Arc<AtomicUsize>,
}

#[async_trait]
impl Handler for TestHandler {
    async fn handle(&self, _message: &Message) -> telegram_bot::Result<HandlerResponse> {
        self.handle_count.fetch_add(1, Ordering::SeqCst);
        Ok(HandlerResponse::Continue)
    }
}

#[derive(Default)]
struct RecordingBot {
    sent: Mutex<Vec<(i64, String)>>,
    answered: Mutex<Vec<String>>,
    fail_answers: bool,
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> telegram_bot::Result<()> {
        self.sent
            .lock()
            .unwrap()
            .push((chat.id, format!("text:{}", text)));
        Ok(())
    }

    async fn send_photo(
        &self,
        chat: &Chat,
        png: &[u8],
        caption: Option<&str>,
    ) -> telegram_bot::Result<()> {
        self.sent.lock().unwrap().push((
            chat.id,
            format!("photo:{}:{}", png.len(), caption.unwrap_or("")),
        ));
        Ok(())
    }

    async fn send_keyboard(
        &self,
        chat: &Chat,
        text: &str,
        rows: &[Vec<InlineButton>],
    ) -> telegram_bot::Result<()> {
        let layout: String = rows
            .iter()
            .map(|row| {
                let data: Vec<&str> = row.iter().map(|b| b.data.as_str()).collect();
                format!("[{}]", data.join(","))
            })
            .collect();
        self.sent
            .lock()
            .unwrap()
            .push((chat.id, format!("keyboard:{}{}", text, layout)));
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str) -> telegram_bot::Result<()> {
        if self.fail_answers {
            return Err(telegram_bot::BotError::Bot("query is too old".to_string()));
        }
        self.answered.lock().unwrap().push(callback_id.to_string());
        Ok(())
    }
}
