use crate::domain::model::Notice;
use crate::domain::ports::Notifier;
use tokio::sync::mpsc;

/// Notifier for headless runs: notices become warning logs.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        tracing::warn!(product_id = notice.product_id(), "{}", notice.message());
    }
}

/// Queue-backed notifier; views (and tests) drain the receiving end.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notice>,
}

impl ChannelNotifier {
    pub fn unbounded() -> (Self, mpsc::UnboundedReceiver<Notice>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notice: Notice) {
        // 接收端關閉時直接丟棄通知
        let _ = self.tx.send(notice);
    }
}
